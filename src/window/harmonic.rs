//! Moving-window harmonic mean
//!
//! Maintains the harmonic mean of the last `W` values with O(1) work per
//! value. The running reciprocal sum is updated as values enter and leave
//! the window; zeros are tracked by position so `1/0` is never computed.

use super::ring::RingBuffer;
use super::size::WindowSize;
#[cfg(feature = "serde")]
use crate::math;
use crate::traits::{ConfigError, WindowedStatistic};
use log::{debug, trace};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Harmonic mean of a slice, computed from scratch
///
/// Returns `None` for an empty slice and `Some(0.0)` if any element is zero.
/// This is the O(n) reference that [`WindowedHarmonicMean`] matches
/// incrementally.
///
/// # Example
///
/// ```
/// use flowhmean::window::harmonic_mean;
///
/// assert_eq!(harmonic_mean(&[1.0, 4.0, 4.0]), Some(2.0));
/// assert_eq!(harmonic_mean(&[3.0, 0.0]), Some(0.0));
/// assert_eq!(harmonic_mean(&[]), None);
/// ```
pub fn harmonic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.iter().any(|&v| v == 0.0) {
        return Some(0.0);
    }
    let denom: f64 = values.iter().map(|&v| 1.0 / v).sum();
    Some(values.len() as f64 / denom)
}

/// Processing phase of a windowed calculator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than `W` values seen; no output yet
    Filling,
    /// Window full; one output per value
    Steady,
}

/// Streaming harmonic mean over a fixed window
///
/// The first `W - 1` calls to [`process`](Self::process) return `None`; every
/// call from the `W`-th onward returns the harmonic mean of the last `W`
/// values. A window containing a zero has harmonic mean 0.
///
/// # Algorithm
///
/// The calculator keeps `denom`, the sum of `1/v` over the window, and the
/// stream index of the most recent zero. When a zero enters, `denom` is reset
/// and only values after that zero are accumulated. The accumulator is never
/// read while the zero is inside the window, and the moment the zero leaves,
/// `denom` covers exactly the remaining `W` values. Without a zero in
/// sight the oldest reciprocal is subtracted and the newest added.
///
/// # Example
///
/// ```
/// use flowhmean::window::WindowedHarmonicMean;
///
/// let mut hm = WindowedHarmonicMean::with_window(2).unwrap();
///
/// assert_eq!(hm.process(1.0), None);
/// assert_eq!(hm.process(4.0), Some(1.6));
/// assert_eq!(hm.process(0.0), Some(0.0));
/// assert_eq!(hm.process(4.0), Some(0.0));
/// assert_eq!(hm.process(4.0), Some(4.0));
/// ```
#[derive(Clone, Debug)]
pub struct WindowedHarmonicMean {
    window: WindowSize,
    /// Current window contents, oldest first
    buffer: RingBuffer,
    /// Values processed so far (N)
    count: u64,
    /// Sum of reciprocals since the last zero entered, or over the whole
    /// window when no zero is present
    denom: f64,
    /// Stream index of the most recent zero still inside the window
    zero_pos: Option<u64>,
    /// Most recent output
    last: Option<f64>,
}

impl Default for WindowedHarmonicMean {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowedHarmonicMean {
    /// Create a calculator with the default window of 5
    pub fn new() -> Self {
        Self::from_window_size(WindowSize::DEFAULT)
    }

    /// Create a calculator over `window` values
    ///
    /// Fails if `window` is 0.
    pub fn with_window(window: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_window_size(WindowSize::try_from(window)?))
    }

    /// Create a calculator from a validated window size
    pub fn from_window_size(window: WindowSize) -> Self {
        Self {
            window,
            buffer: RingBuffer::new(window.get()),
            count: 0,
            denom: 0.0,
            zero_pos: None,
            last: None,
        }
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window.get()
    }

    /// Window size as the validated type
    pub fn window_size(&self) -> WindowSize {
        self.window
    }

    /// Change the window size
    ///
    /// Fails if `window` is 0. Reconfiguring discards all processed values.
    pub fn set_window(&mut self, window: usize) -> Result<(), ConfigError> {
        self.set_window_size(WindowSize::try_from(window)?);
        Ok(())
    }

    /// Change the window size, discarding all processed values
    pub fn set_window_size(&mut self, window: WindowSize) {
        debug!(
            "harmonic mean window set to {} (was {}, {} values discarded)",
            window, self.window, self.count
        );
        *self = Self::from_window_size(window);
    }

    /// Feed the next value
    ///
    /// Returns `None` while the window is filling, then the harmonic mean of
    /// the last `W` values. Any value is accepted; a zero (including `-0.0`)
    /// forces the output to 0 for as long as it stays in the window.
    pub fn process(&mut self, value: f64) -> Option<f64> {
        let w = self.window.get() as u64;
        let n = self.count;
        let is_zero = value == 0.0;

        if n < w {
            self.buffer.push(value);
            if is_zero {
                self.zero_pos = Some(n);
                self.denom = 0.0;
            } else {
                self.denom += 1.0 / value;
            }
            self.count += 1;

            if self.count < w {
                return None;
            }
            trace!("harmonic mean window of {} filled", w);
            let mean = if self.zero_pos.is_some() {
                0.0
            } else {
                w as f64 / self.denom
            };
            self.last = Some(mean);
            return Some(mean);
        }

        let dropped = self.buffer.push(value);
        if is_zero {
            self.zero_pos = Some(n);
            self.denom = 0.0;
        }

        // Stream index of the value that just left the window
        let exiting = n - w;
        let mean = match self.zero_pos {
            Some(z) if z > exiting => {
                if !is_zero {
                    self.denom += 1.0 / value;
                }
                0.0
            }
            Some(_) => {
                // The zero just left; denom holds the W - 1 values after it
                self.zero_pos = None;
                self.denom += 1.0 / value;
                w as f64 / self.denom
            }
            None => {
                if let Some(old) = dropped {
                    self.denom = self.denom - 1.0 / old + 1.0 / value;
                }
                w as f64 / self.denom
            }
        };

        self.count += 1;
        self.last = Some(mean);
        Some(mean)
    }

    /// Feed every value of a slice, collecting the outputs
    pub fn process_slice(&mut self, values: &[f64]) -> Vec<f64> {
        values.iter().filter_map(|&v| self.process(v)).collect()
    }

    /// Harmonic mean of the current window, `None` while filling
    pub fn current(&self) -> Option<f64> {
        self.last
    }

    /// Number of values processed
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current processing phase
    pub fn phase(&self) -> Phase {
        if self.count < self.window.get() as u64 {
            Phase::Filling
        } else {
            Phase::Steady
        }
    }

    /// Whether a zero is currently inside the window
    pub fn contains_zero(&self) -> bool {
        self.zero_pos.is_some()
    }

    /// Current window contents, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter()
    }

    /// Reset to the empty state, keeping the window size
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.count = 0;
        self.denom = 0.0;
        self.zero_pos = None;
        self.last = None;
    }
}

impl WindowedStatistic for WindowedHarmonicMean {
    type Output = f64;

    fn process(&mut self, value: f64) -> Option<f64> {
        WindowedHarmonicMean::process(self, value)
    }

    fn current(&self) -> Option<f64> {
        self.last
    }

    fn window(&self) -> usize {
        self.window.get()
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        WindowedHarmonicMean::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.buffer.allocated_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WindowedHarmonicMean {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let values: Vec<f64> = self.buffer.iter().collect();
        let mut state = serializer.serialize_struct("WindowedHarmonicMean", 6)?;
        state.serialize_field("window", &self.window)?;
        state.serialize_field("values", &values)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("denom", &self.denom)?;
        state.serialize_field("zero_pos", &self.zero_pos)?;
        state.serialize_field("last", &self.last)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WindowedHarmonicMean {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct HarmonicData {
            window: WindowSize,
            values: Vec<f64>,
            count: u64,
            denom: f64,
            zero_pos: Option<u64>,
            last: Option<f64>,
        }

        let data = HarmonicData::deserialize(deserializer)?;
        let w = data.window.get() as u64;
        let held = data.count.min(w);

        if data.values.len() as u64 != held {
            return Err(D::Error::custom(format_args!(
                "window holds {} values but {} were processed with window {}",
                data.values.len(),
                data.count,
                w
            )));
        }
        // Rebuild the zero marker and accumulator from the window contents
        let first_index = data.count - held;
        let last_zero = data.values.iter().rposition(|&v| v == 0.0);
        let expected_zero = last_zero.map(|i| first_index + i as u64);
        if data.zero_pos != expected_zero {
            return Err(D::Error::custom(format_args!(
                "zero position {:?} does not match window contents (most recent zero at {:?})",
                data.zero_pos, expected_zero
            )));
        }

        let tail = &data.values[last_zero.map_or(0, |i| i + 1)..];
        let recomputed: f64 = tail.iter().map(|&v| 1.0 / v).sum();
        let scale: f64 = tail.iter().map(|&v| math::abs(1.0 / v)).sum();
        if !accumulator_matches(data.denom, recomputed, scale) {
            return Err(D::Error::custom(format_args!(
                "reciprocal sum {} does not match window contents ({})",
                data.denom, recomputed
            )));
        }

        if data.last.is_some() != (data.count >= w) {
            return Err(D::Error::custom("last output inconsistent with fill state"));
        }
        let last = data.last.map(|_| {
            if expected_zero.is_some() {
                0.0
            } else {
                w as f64 / data.denom
            }
        });

        let mut buffer = RingBuffer::new(data.window.get());
        for v in data.values {
            buffer.push(v);
        }
        debug!(
            "restored harmonic mean state: window {}, {} values processed",
            w, data.count
        );
        Ok(WindowedHarmonicMean {
            window: data.window,
            buffer,
            count: data.count,
            denom: data.denom,
            zero_pos: expected_zero,
            last,
        })
    }
}

/// Relative drift allowed between a stored reciprocal sum and a fresh one
#[cfg(feature = "serde")]
const ACCUMULATOR_TOLERANCE: f64 = 1e-6;

/// Whether a checkpointed reciprocal sum agrees with the one recomputed from
/// the window, allowing for incremental rounding drift
#[cfg(feature = "serde")]
fn accumulator_matches(stored: f64, recomputed: f64, scale: f64) -> bool {
    if stored.is_finite() && recomputed.is_finite() {
        math::abs(stored - recomputed) <= ACCUMULATOR_TOLERANCE * scale
    } else {
        stored == recomputed || (stored.is_nan() && recomputed.is_nan())
    }
}
