use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::float::{self, Scalar};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y)
}

/// Represents a 2D vector. Each component is a `f32` number.
/// Components can be accessed using `v.x` `v.y`, or indices `v[i]` where i is 0 or 1.
///
/// Every operation takes `self` by value and returns a new vector. Degenerate input (zero-length
/// vectors, division by zero) is not checked: the result is whatever IEEE-754 gives, usually NaN
/// or infinity.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "Vector2({:.p$}, {:.p$})", self.x, self.y, p = p),
            None => write!(f, "Vector2({}, {})", self.x, self.y),
        }
    }
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }
    /// Builds a vector with both components set to `s`.
    pub const fn splat(s: f32) -> Vector2 {
        Vector2 { x: s, y: s }
    }
    pub fn as_pair(self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub const ZERO: Vector2 = Self::new(0.0, 0.0);
    pub const LEFT: Vector2 = Self::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Self::new(1.0, 0.0);
    pub const UP: Vector2 = Self::new(0.0, 1.0);
    pub const DOWN: Vector2 = Self::new(0.0, -1.0);

    pub fn length(self) -> f32 {
        f32::sqrt(self.x * self.x + self.y * self.y)
    }
    /// Cheaper than `length()`; prefer it when only comparing magnitudes.
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn abs(self) -> Vector2 {
        Vector2::new(self.x.abs(), self.y.abs())
    }

    /// Returns `atan2(x, y)`. The arguments are in (x, y) order, so `UP` has angle 0 and `RIGHT`
    /// has angle pi/2.
    pub fn angle(self) -> f32 {
        self.x.atan2(self.y)
    }

    /// Signed angle in radians from `self` to `to`, positive counter-clockwise.
    /// ```
    /// use krona::Vector2;
    /// let a = Vector2::RIGHT.angle_to(Vector2::UP);
    /// assert!((a - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    /// ```
    pub fn angle_to(self, to: Vector2) -> f32 {
        self.cross(to).atan2(self.dot(to))
    }

    /// Returns `acos(self · to)`, the unsigned angle between two UNIT vectors. Nothing is
    /// normalized here: for other lengths the dot product may leave [-1, 1] and the result is NaN.
    pub fn angle_to_point(self, to: Vector2) -> f32 {
        self.dot(to).acos()
    }

    /// Returns `x / y`.
    pub fn aspect(self) -> f32 {
        self.x / self.y
    }

    /// Bounces `self` off a surface with normal `n`; the negation of `reflect()`.
    pub fn bounce(self, n: Vector2) -> Vector2 {
        -self.reflect(n)
    }

    pub fn ceil(self) -> Vector2 {
        Vector2::new(self.x.ceil(), self.y.ceil())
    }
    pub fn floor(self) -> Vector2 {
        Vector2::new(self.x.floor(), self.y.floor())
    }
    /// Rounds each component to the nearest integer, halfway cases away from zero.
    pub fn round(self) -> Vector2 {
        Vector2::new(self.x.round(), self.y.round())
    }

    /// Clamps each component with `Scalar::clamped()`. `min` and `max` are not required to be
    /// ordered.
    pub fn clamp(self, min: Vector2, max: Vector2) -> Vector2 {
        Vector2::new(self.x.clamped(min.x, max.x), self.y.clamped(min.y, max.y))
    }

    /// The z-component of the 3D cross product of (x, y, 0) and (with.x, with.y, 0).
    pub fn cross(self, with: Vector2) -> f32 {
        self.x * with.y - self.y * with.x
    }
    pub fn dot(self, with: Vector2) -> f32 {
        self.x * with.x + self.y * with.y
    }

    /// Unit vector pointing from `self` towards `b`. NaN if the two are equal.
    pub fn direction_to(self, b: Vector2) -> Vector2 {
        (b - self).normalized()
    }

    pub fn distance_to(self, to: Vector2) -> f32 {
        (self - to).length()
    }
    pub fn distance_squared_to(self, to: Vector2) -> f32 {
        (self - to).length_squared()
    }

    /// Checks the squared length against 1 with `Scalar::is_equal_approx()`, and so shares its
    /// polarity: a unit vector reports `false`, anything noticeably longer or shorter `true`.
    pub fn is_normalized(self) -> bool {
        self.length_squared().is_equal_approx(1.0)
    }

    /// Scales `self` down to `length` if it is longer; otherwise returns it unchanged.
    /// Zero vectors are returned as-is.
    /// ```
    /// use krona::Vector2;
    /// assert_eq!(Vector2::new(3.0, 4.0).limit_length(1.0), Vector2::new(0.6, 0.8));
    /// assert_eq!(Vector2::new(3.0, 4.0).limit_length(10.0), Vector2::new(3.0, 4.0));
    /// ```
    pub fn limit_length(self, length: f32) -> Vector2 {
        let l = self.length();
        let mut v = self;
        if l > 0.0 && length < l {
            v /= l;
            v *= length;
        }
        v
    }

    /// Linear interpolation towards `to`. `weight` is not clamped.
    pub fn lerp(self, to: Vector2, weight: f32) -> Vector2 {
        float::lerp(self, to, weight)
    }

    /// Returns `self` scaled to unit length. A zero-length vector yields NaN components; use
    /// `try_normalized()` to detect that case.
    pub fn normalized(self) -> Vector2 {
        let l = self.length();
        if l == 0.0 {
            log::trace!("normalizing zero-length vector {}", self);
        }
        Vector2::new(self.x / l, self.y / l)
    }
    /// Returns `None` if the length is zero, NaN or infinite.
    pub fn try_normalized(self) -> Option<Vector2> {
        let inv_length = 1.0 / self.length();
        (inv_length.is_finite() && inv_length != 0.0).then(|| self * inv_length)
    }

    /// Projects `self` onto `b`. `b` can be of any nonzero length.
    /// ```
    /// use krona::vec2;
    /// let a = vec2(1.0, 2.5);
    /// let b = vec2(0.6, 0.0);
    /// let c = b - b.project(a);
    /// assert!(c.dot(a).abs() < 1e-6, "c = {}, a = {}", c, a);
    /// ```
    pub fn project(self, b: Vector2) -> Vector2 {
        b * (self.dot(b) / b.length_squared())
    }

    /// Mirrors `self` across the line along `n`. `n` is expected to be unit length.
    pub fn reflect(self, n: Vector2) -> Vector2 {
        2.0 * n * self.dot(n) - self
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotated(self, angle: f32) -> Vector2 {
        let (sin_t, cos_t) = angle.sin_cos();
        Vector2::new(
            self.x * cos_t - self.y * sin_t,
            self.x * sin_t + self.y * cos_t,
        )
    }

    /// Component-wise sign: -1, 0 or 1. Zeros of either sign give 0 and NaN stays NaN.
    pub fn sign(self) -> Vector2 {
        fn sign(v: f32) -> f32 {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else if v.is_nan() {
                v
            } else {
                0.0
            }
        }
        Vector2::new(sign(self.x), sign(self.y))
    }

    /// Spherical interpolation: the length is interpolated linearly and the direction is rotated
    /// by `weight` of the angle between the vectors. Falls back to `lerp()` if either vector is
    /// zero.
    pub fn slerp(self, to: Vector2, weight: f32) -> Vector2 {
        let start_length_sq = self.length_squared();
        let end_length_sq = to.length_squared();
        if start_length_sq == 0.0 || end_length_sq == 0.0 {
            log::trace!("slerp {} -> {} on a zero vector, using lerp", self, to);
            return self.lerp(to, weight);
        }
        let start_length = start_length_sq.sqrt();
        let result_length = start_length.lerp(end_length_sq.sqrt(), weight);
        let angle = self.angle_to(to);
        self.rotated(angle * weight) * (result_length / start_length)
    }

    /// Perpendicular vector, `self` rotated 90 degrees clockwise.
    pub fn tangent(self) -> Vector2 {
        self.rotated((-90.0f32).deg_to_rad())
    }

    /// Returns 1 if `other > self`, -1 if `other < self`, and 0 otherwise (equal, or unordered
    /// because of NaN).
    pub fn compare_to(self, other: Vector2) -> i32 {
        if other > self {
            1
        } else if other < self {
            -1
        } else {
            0
        }
    }

    pub fn has_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

// Lexicographic on (x, y): y only breaks ties when the x components are exactly equal.
impl PartialOrd for Vector2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
    fn lt(&self, other: &Self) -> bool {
        if self.x == other.x {
            self.y < other.y
        } else {
            self.x < other.x
        }
    }
    fn le(&self, other: &Self) -> bool {
        if self.x == other.x {
            self.y <= other.y
        } else {
            self.x < other.x
        }
    }
    fn gt(&self, other: &Self) -> bool {
        if self.x == other.x {
            self.y > other.y
        } else {
            self.x > other.x
        }
    }
    fn ge(&self, other: &Self) -> bool {
        if self.x == other.x {
            self.y >= other.y
        } else {
            self.x > other.x
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}
impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}
impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;
    fn mul(self, other: Self) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
}
impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, s: f32) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}
impl Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}
impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Div for Vector2 {
    type Output = Self;
    fn div(self, other: Self) -> Vector2 {
        Vector2::new(self.x / other.x, self.y / other.y)
    }
}
impl Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, s: f32) -> Vector2 {
        Vector2::new(self.x / s, self.y / s)
    }
}
impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, s: f32) {
        *self = *self / s;
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("invalid index"),
        }
    }
}
impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("invalid index"),
        }
    }
}

// Conversions to and from tuples, arrays and glam.
// -------------------------------------------------------------------------------------------------
impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}
impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        v.as_pair()
    }
}
impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}
impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-10)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {
        if ($left - $right).length_squared() > $tolerance {
            panic!(
                "Assertion failed: Close({}, {}) values: {} vs. {}, dist = {}",
                stringify!($left),
                stringify!($right),
                $left,
                $right,
                ($left - $right).length()
            )
        }
    };
}
