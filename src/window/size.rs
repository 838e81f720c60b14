//! Validated window size
//!
//! [`WindowSize`] is the statically typed window parameter. Raw values from
//! dynamic sources (floats, text, deserialized configuration) are checked on
//! conversion and rejected with [`ConfigError`].

use crate::math;
use crate::traits::ConfigError;
use core::num::NonZeroUsize;
use core::str::FromStr;

#[cfg(feature = "std")]
use std::string::ToString;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// Number of most recent values a windowed statistic covers
///
/// Always at least 1.
///
/// # Example
///
/// ```
/// use flowhmean::window::WindowSize;
///
/// let w = WindowSize::try_from(3.0).unwrap();
/// assert_eq!(w.get(), 3);
///
/// assert!(WindowSize::try_from(f64::NAN).is_err());
/// assert!(WindowSize::try_from(0usize).is_err());
/// assert_eq!(WindowSize::default().get(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Window used when none is configured
    pub const DEFAULT: WindowSize = match NonZeroUsize::new(5) {
        Some(n) => WindowSize(n),
        None => unreachable!(),
    };

    /// Create a window size, returning `None` for zero
    pub const fn new(window: usize) -> Option<Self> {
        match NonZeroUsize::new(window) {
            Some(n) => Some(WindowSize(n)),
            None => None,
        }
    }

    /// The window size as a count of values
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<WindowSize> for usize {
    fn from(window: WindowSize) -> usize {
        window.get()
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(n: NonZeroUsize) -> Self {
        WindowSize(n)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = ConfigError;

    fn try_from(window: usize) -> Result<Self, Self::Error> {
        Self::new(window).ok_or(ConfigError::InvalidWindowSize(window as f64))
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = ConfigError;

    fn try_from(window: i64) -> Result<Self, Self::Error> {
        usize::try_from(window)
            .ok()
            .and_then(Self::new)
            .ok_or(ConfigError::InvalidWindowSize(window as f64))
    }
}

impl TryFrom<f64> for WindowSize {
    type Error = ConfigError;

    fn try_from(window: f64) -> Result<Self, Self::Error> {
        if !window.is_finite() {
            return Err(ConfigError::NonFiniteWindow(window));
        }
        // usize::MAX as f64 rounds up to 2^64 on 64-bit targets
        if !math::is_integral(window) || window < 1.0 || window >= usize::MAX as f64 {
            return Err(ConfigError::InvalidWindowSize(window));
        }
        Self::new(window as usize).ok_or(ConfigError::InvalidWindowSize(window))
    }
}

impl FromStr for WindowSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return Self::try_from(n);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Self::try_from(v),
            Err(_) => Err(ConfigError::NonNumericWindow(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WindowSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.get() as u64)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WindowSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(WindowSizeVisitor)
    }
}

/// Accepts any number and validates it; every other shape is non-numeric
#[cfg(feature = "serde")]
struct WindowSizeVisitor;

#[cfg(feature = "serde")]
impl WindowSizeVisitor {
    fn non_numeric<E: serde::de::Error>(found: &str) -> E {
        E::custom(ConfigError::NonNumericWindow(found.to_string()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for WindowSizeVisitor {
    type Value = WindowSize;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a positive integer window size")
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<WindowSize, E> {
        usize::try_from(v)
            .ok()
            .and_then(WindowSize::new)
            .ok_or_else(|| E::custom(ConfigError::InvalidWindowSize(v as f64)))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<WindowSize, E> {
        WindowSize::try_from(v).map_err(E::custom)
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<WindowSize, E> {
        WindowSize::try_from(v).map_err(E::custom)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<WindowSize, E> {
        let mut quoted = "\"".to_string();
        quoted.push_str(v);
        quoted.push('"');
        Err(Self::non_numeric(&quoted))
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<WindowSize, E> {
        Err(Self::non_numeric(if v { "true" } else { "false" }))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<WindowSize, E> {
        Err(Self::non_numeric("null"))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<WindowSize, E> {
        Err(Self::non_numeric("null"))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<WindowSize, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        Err(Self::non_numeric("sequence"))
    }

    fn visit_map<A>(self, _map: A) -> Result<WindowSize, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        Err(Self::non_numeric("map"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five() {
        assert_eq!(WindowSize::default().get(), 5);
        assert_eq!(WindowSize::DEFAULT, WindowSize::new(5).unwrap());
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(WindowSize::try_from(42usize).unwrap().get(), 42);
        assert_eq!(
            WindowSize::try_from(0usize),
            Err(ConfigError::InvalidWindowSize(0.0))
        );
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(WindowSize::try_from(7i64).unwrap().get(), 7);
        assert!(WindowSize::try_from(-1i64).is_err());
        assert!(WindowSize::try_from(0i64).is_err());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(WindowSize::try_from(3.0).unwrap().get(), 3);
        assert_eq!(WindowSize::try_from(1.0).unwrap().get(), 1);
        assert_eq!(WindowSize::try_from(1000.0).unwrap().get(), 1000);
    }

    #[test]
    fn test_from_f64_rejections() {
        assert!(matches!(
            WindowSize::try_from(f64::NAN),
            Err(ConfigError::NonFiniteWindow(v)) if v.is_nan()
        ));
        assert!(matches!(
            WindowSize::try_from(f64::INFINITY),
            Err(ConfigError::NonFiniteWindow(_))
        ));
        assert_eq!(
            WindowSize::try_from(2.5),
            Err(ConfigError::InvalidWindowSize(2.5))
        );
        assert_eq!(
            WindowSize::try_from(0.0),
            Err(ConfigError::InvalidWindowSize(0.0))
        );
        assert_eq!(
            WindowSize::try_from(-4.0),
            Err(ConfigError::InvalidWindowSize(-4.0))
        );
        assert!(WindowSize::try_from(1e30).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<WindowSize>().unwrap().get(), 5);
        assert_eq!(" 12 ".parse::<WindowSize>().unwrap().get(), 12);
        assert_eq!("3.0".parse::<WindowSize>().unwrap().get(), 3);
        assert!(matches!(
            "five".parse::<WindowSize>(),
            Err(ConfigError::NonNumericWindow(_))
        ));
        assert!(matches!(
            "".parse::<WindowSize>(),
            Err(ConfigError::NonNumericWindow(_))
        ));
        assert!(matches!(
            "NaN".parse::<WindowSize>(),
            Err(ConfigError::NonFiniteWindow(_))
        ));
        assert!("0".parse::<WindowSize>().is_err());
    }
}
