//! Iterator adaptors over windowed statistics
//!
//! Wraps a value source and a [`WindowedStatistic`], yielding one output per
//! input once the window has filled.

use super::harmonic::WindowedHarmonicMean;
use super::size::WindowSize;
use crate::traits::WindowedStatistic;

/// Lazy sequence of windowed outputs over a source iterator
///
/// Inputs that do not complete a window are consumed without yielding, so the
/// output has `inputs - W + 1` items (or none when there are fewer than `W`
/// inputs).
#[derive(Clone, Debug)]
pub struct Windowed<I, S> {
    source: I,
    stat: S,
}

/// Moving harmonic mean over a source iterator
pub type MovingHarmonicMean<I> = Windowed<I, WindowedHarmonicMean>;

impl<I, S> Windowed<I, S>
where
    I: Iterator<Item = f64>,
    S: WindowedStatistic,
{
    /// Drive `stat` from `source`
    pub fn new(source: I, stat: S) -> Self {
        Self { source, stat }
    }

    /// The statistic being driven
    pub fn statistic(&self) -> &S {
        &self.stat
    }

    /// Split back into the remaining source and the statistic
    pub fn into_parts(self) -> (I, S) {
        (self.source, self.stat)
    }
}

impl<I, S> Iterator for Windowed<I, S>
where
    I: Iterator<Item = f64>,
    S: WindowedStatistic,
{
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.next()?;
            if let Some(out) = self.stat.process(value) {
                return Some(out);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let pending = self.stat.window().saturating_sub(self.stat.count() as usize);
        // While filling, the first `pending - 1` inputs produce nothing
        let skipped = pending.saturating_sub(1);
        (
            lower.saturating_sub(skipped),
            upper.map(|u| u.saturating_sub(skipped)),
        )
    }
}

/// Extension for computing a moving harmonic mean over any source of floats
///
/// # Example
///
/// ```
/// use flowhmean::window::{HarmonicMeanExt, WindowSize};
///
/// let window = WindowSize::try_from(2usize).unwrap();
/// let means: Vec<f64> = vec![1.0, 1.0, 4.0, 4.0]
///     .moving_harmonic_mean(window)
///     .collect();
///
/// assert_eq!(means, vec![1.0, 1.6, 4.0]);
/// ```
pub trait HarmonicMeanExt: IntoIterator<Item = f64> + Sized {
    /// Lazily compute the harmonic mean of each `window`-sized run
    fn moving_harmonic_mean(self, window: WindowSize) -> MovingHarmonicMean<Self::IntoIter> {
        Windowed::new(
            self.into_iter(),
            WindowedHarmonicMean::from_window_size(window),
        )
    }
}

impl<T> HarmonicMeanExt for T where T: IntoIterator<Item = f64> {}
