//! Float comparison helpers shared by the workspace's tests.

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Absolute-difference check for angles that may legitimately be near zero,
/// where ULP distance is meaningless.
#[track_caller]
pub fn assert_abs_le(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        (a - b).abs() <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        a,
        b,
        (a - b).abs(),
        tolerance
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_diff_adjacent() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
        assert_eq!(ulp_diff(b, a), 1);
    }

    #[test]
    fn test_ulp_diff_across_zero() {
        assert_eq!(ulp_diff(0.0, -0.0), 1);
    }

    #[test]
    #[should_panic]
    fn test_assert_ulp_le_fails_on_large_gap() {
        assert_ulp_le(1.0, 1.0 + 1e-12, 2, "gap");
    }

    #[test]
    fn test_macro_forms() {
        crate::assert_ulp_lt!(0.1 + 0.2, 0.3, 1);
        crate::assert_ulp_lt!(2.0, 2.0, 0, "exact {}", 2.0);
    }
}
