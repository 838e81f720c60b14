//! # Flowhmean
//!
//! Streaming moving-window harmonic mean for Rust.
//!
//! Flowhmean computes the harmonic mean of the last `W` values of a stream,
//! emitting one result per input once the window has filled. Each value costs
//! O(1): the reciprocal sum is updated incrementally and zeros are tracked by
//! position, so the window is never rescanned and `1/0` is never evaluated.
//!
//! ## Features
//!
//! - **Incremental**: constant work and no allocation per value
//! - **Zero aware**: a window containing a zero has harmonic mean 0
//! - **Lazy iterators**: adapt any `f64` source with [`HarmonicMeanExt`](window::HarmonicMeanExt)
//! - **Checkpointing**: serialize calculator state and resume the stream
//!
//! ## Quick Start
//!
//! ```rust
//! use flowhmean::prelude::*;
//!
//! let mut hm = WindowedHarmonicMean::with_window(3).unwrap();
//! let outputs = hm.process_slice(&[2.0, 4.0, 4.0, 4.0, 0.0, 4.0]);
//!
//! assert_eq!(outputs, vec![3.0, 4.0, 0.0, 0.0]);
//! ```
//!
//! ## Iterators
//!
//! ```rust
//! use flowhmean::prelude::*;
//!
//! let means: Vec<f64> = vec![5.0, 5.0, 5.0, 5.0]
//!     .moving_harmonic_mean(WindowSize::try_from(2usize).unwrap())
//!     .collect();
//!
//! assert_eq!(means, vec![5.0, 5.0, 5.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is `no_std` + `alloc`
//! - `serde`: Checkpointing and [`HarmonicMeanConfig`](config::HarmonicMeanConfig)
//! - `full`: Enable everything
//!
//! Diagnostics go through the [`log`] facade; no logger is installed.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

pub mod traits;
pub mod window;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod config;

pub mod prelude {
    pub use crate::traits::*;
    pub use crate::window::{
        harmonic_mean, HarmonicMeanExt, MovingHarmonicMean, WindowSize, WindowedHarmonicMean,
    };

    #[cfg(feature = "serde")]
    pub use crate::config::HarmonicMeanConfig;
}

pub use traits::ConfigError;
pub use window::{WindowSize, WindowedHarmonicMean};
