//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}

#[cfg(all(feature = "std", feature = "serde"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(all(not(feature = "std"), feature = "serde"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Whether `x` is a finite float with no fractional part
#[inline]
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && trunc(x) == x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integral() {
        assert!(is_integral(5.0));
        assert!(is_integral(-3.0));
        assert!(!is_integral(2.5));
        assert!(!is_integral(f64::NAN));
        assert!(!is_integral(f64::INFINITY));
    }
}
