//! Core traits for windowed streaming statistics
//!
//! Every fixed-window calculator implements [`WindowedStatistic`]: values are
//! fed one at a time and an output is produced once the window has filled.
//! Configuration problems are reported through [`ConfigError`].

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Invalid configuration of a windowed statistic
///
/// Every variant describes a rejected window size. Processing itself never
/// fails, so this is the only error the crate produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Window size was not a number (text, boolean, null, sequence, map...)
    NonNumericWindow(String),
    /// Window size was NaN or infinite
    NonFiniteWindow(f64),
    /// Window size was zero, negative, fractional, or too large
    InvalidWindowSize(f64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NonNumericWindow(found) => {
                write!(f, "invalid window: must be numeric, found {}", found)
            }
            ConfigError::NonFiniteWindow(v) => {
                write!(f, "invalid window: must be finite, found {}", v)
            }
            ConfigError::InvalidWindowSize(v) => {
                write!(f, "invalid window: must be a positive integer, found {}", v)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Core trait for fixed-window streaming statistics
///
/// Implementations keep the last `window()` values and update their output in
/// constant time per value. They are not synchronized: one instance serves one
/// stream, fed sequentially in arrival order.
pub trait WindowedStatistic: Clone + Debug {
    /// The statistic produced for each full window
    type Output: Copy;

    /// Feed the next value of the stream
    ///
    /// Returns `None` until `window()` values have been seen, then exactly
    /// one output per call.
    fn process(&mut self, value: f64) -> Option<Self::Output>;

    /// Output for the current window, if the window is full
    fn current(&self) -> Option<Self::Output>;

    /// Configured window size
    fn window(&self) -> usize;

    /// Number of values processed since creation or the last reset
    fn count(&self) -> u64;

    /// Reset to the empty state, keeping the window size
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check whether the window has filled
    fn is_full(&self) -> bool {
        self.count() >= self.window() as u64
    }

    /// Check whether no value has been processed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
