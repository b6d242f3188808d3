//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the u32 range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).floor();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

/// Floor a f64 and clamp it to the usize range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_usize(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<usize, f64>(usize::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).floor();
    cast::<f64, usize>(clamped).unwrap_or(0)
}

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Saturating conversion from a count to u32.
#[must_use]
pub fn usize_to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_handles_non_finite_and_negative() {
        assert_eq!(floor_f64_to_u32(f64::NAN), 0);
        assert_eq!(floor_f64_to_u32(f64::INFINITY), 0);
        assert_eq!(floor_f64_to_u32(-3.5), 0);
        assert_eq!(floor_f64_to_u32(49.999), 49);
        assert_eq!(floor_f64_to_u32(f64::from(u32::MAX) * 2.0), u32::MAX);
    }

    #[test]
    fn usize_helpers_cover_ranges() {
        assert_eq!(floor_f64_to_usize(2.9), 2);
        assert_eq!(floor_f64_to_usize(f64::NAN), 0);
        assert!((usize_to_f64(4) - 4.0).abs() < f64::EPSILON);
        assert_eq!(usize_to_u32(7), 7);
    }
}
