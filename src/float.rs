/// Tolerance used by `Scalar::is_equal_approx()`, shared by both precisions.
pub const EPSILON: f64 = 0.000001;

/// Computes the linear interpolation between `a` and `b`: (0, 1) -> (a, b).
///
/// The weight is not clamped, so `t` outside of [0, 1] extrapolates along the line.
///
/// This function also works if `a` and `b` are not "Scalable" by themselves - as long as `a-b` can
/// be scaled by a `f32`, and the difference can be added back to get a `T`.
/// - `lerp` can be used on `f32`s directly.
/// - `lerp` can be used on `Vector2`s as well, component-wise.
/// ```
/// use krona::float::lerp;
/// assert_eq!(lerp(2.0f32, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(0.0f32, 10.0, 1.5), 15.0);
/// ```
pub fn lerp<T, U>(a: T, b: T, t: f32) -> T
where
    T: Copy + std::ops::Sub<T, Output = U>,
    U: Copy + std::ops::Mul<f32, Output = U> + std::ops::Add<T, Output = T>,
{
    (b - a) * t + a
}

/// Scalar helpers, implemented separately for `f32` and `f64`. Neither implementation converts
/// to the other precision.
pub trait Scalar: Copy + PartialOrd {
    const EPSILON: Self;
    const PI: Self;

    /// Returns `max` if `self > max`, else `min` if `self < min`, else `self`.
    /// Unlike `f32::clamp`, `min > max` is allowed; `max` wins when both bounds are crossed.
    fn clamped(self, min: Self, max: Self) -> Self;

    /// Returns `true` when `self` and `other` differ by MORE than `EPSILON`.
    ///
    /// Note the polarity: two nearly identical values report `false`. Existing callers (such as
    /// `Vector2::is_normalized()`) depend on it.
    fn is_equal_approx(self, other: Self) -> bool;

    /// Computes `self + (to - self) * weight` without clamping the weight.
    fn lerp(self, to: Self, weight: Self) -> Self;

    fn deg_to_rad(self) -> Self;
    fn rad_to_deg(self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $pi:expr) => {
        impl Scalar for $t {
            const EPSILON: $t = EPSILON as $t;
            const PI: $t = $pi;

            fn clamped(self, min: $t, max: $t) -> $t {
                if self > max {
                    max
                } else if self < min {
                    min
                } else {
                    self
                }
            }

            fn is_equal_approx(self, other: $t) -> bool {
                (self - other).abs() > <$t as Scalar>::EPSILON
            }

            fn lerp(self, to: $t, weight: $t) -> $t {
                self + (to - self) * weight
            }

            fn deg_to_rad(self) -> $t {
                self * (<$t as Scalar>::PI / 180.0)
            }

            fn rad_to_deg(self) -> $t {
                self * (180.0 / <$t as Scalar>::PI)
            }
        }
    };
}

impl_scalar!(f32, std::f32::consts::PI);
impl_scalar!(f64, std::f64::consts::PI);

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr) => {
        if $left >= $right {
            panic!(
                "Assertion failed: {} < {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_gt {
    ($left:expr, $right:expr) => {
        if $left <= $right {
            panic!(
                "Assertion failed: {} > {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr) => {
        if $left < $right {
            panic!(
                "Assertion failed: {} >= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[cfg(test)]
mod test {
    use super::Scalar;

    #[test]
    fn clamp_picks_bound() {
        assert_eq!(5.0f32.clamped(0.0, 1.0), 1.0);
        assert_eq!((-5.0f32).clamped(0.0, 1.0), 0.0);
        assert_eq!(0.25f32.clamped(0.0, 1.0), 0.25);
        assert_eq!(5.0f64.clamped(0.0, 1.0), 1.0);
        assert_eq!((-5.0f64).clamped(0.0, 1.0), 0.0);
    }

    #[test]
    fn clamp_with_swapped_bounds() {
        // val > max is checked first, so max wins.
        assert_eq!(0.5f32.clamped(1.0, 0.0), 0.0);
        assert_eq!(0.5f64.clamped(1.0, 0.0), 0.0);
        // Below both bounds: not above max, but below min.
        assert_eq!((-1.0f64).clamped(1.0, 0.0), 1.0);
    }

    #[test]
    fn equal_approx_polarity() {
        assert!(!1.0f64.is_equal_approx(1.0));
        assert!(!1.0f64.is_equal_approx(1.0 + 1e-9));
        assert!(1.0f64.is_equal_approx(2.0));
        assert!(!1.0f32.is_equal_approx(1.0));
        assert!(1.0f32.is_equal_approx(1.1));
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(2.0f64.lerp(4.0, 0.0), 2.0);
        assert_eq!(2.0f64.lerp(4.0, 1.0), 4.0);
        assert_eq!(2.0f64.lerp(4.0, 0.5), 3.0);
        assert_eq!(0.0f32.lerp(10.0, 1.5), 15.0);
        assert_eq!(0.0f32.lerp(10.0, -0.5), -5.0);
    }

    #[test]
    fn angle_conversion() {
        assert!((180.0f64.deg_to_rad() - std::f64::consts::PI).abs() < 1e-12);
        assert!((std::f64::consts::FRAC_PI_2.rad_to_deg() - 90.0).abs() < 1e-12);
        assert!((90.0f32.deg_to_rad() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((std::f32::consts::PI.rad_to_deg() - 180.0).abs() < 1e-4);
    }
}
