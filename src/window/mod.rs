//! Fixed-window streaming statistics
//!
//! This module provides calculators that summarize the most recent `W`
//! values of a stream with constant work per value.
//!
//! # Example
//!
//! ```
//! use flowhmean::window::WindowedHarmonicMean;
//!
//! let mut hm = WindowedHarmonicMean::with_window(3).unwrap();
//!
//! for value in [2.0, 4.0, 4.0, 0.0, 8.0, 8.0, 8.0] {
//!     if let Some(mean) = hm.process(value) {
//!         println!("Harmonic mean: {}", mean);
//!     }
//! }
//! assert_eq!(hm.current(), Some(8.0));
//! ```

mod harmonic;
mod iter;
mod ring;
mod size;

pub use harmonic::{harmonic_mean, Phase, WindowedHarmonicMean};
pub use iter::{HarmonicMeanExt, MovingHarmonicMean, Windowed};
pub use ring::RingBuffer;
pub use size::WindowSize;
