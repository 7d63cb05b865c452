/// Scalar helpers shared by the vector code, provided for both `f32` and `f64`:
/// - Clamping with `Scalar::clamped()`, which tolerates unordered bounds,
/// - Linear interpolation, both as `Scalar::lerp()` and as the generic `lerp()` for any type
///   whose differences scale by `f32`,
/// - Degree / radian conversion and the tolerance comparison `Scalar::is_equal_approx()`,
/// - Macros to assert that one quantity is less than / greater than (or equal to) another.
pub mod float;

/// 2D vector module.
/// - Type: `Vector2` with `f32` components, its named constants and the arithmetic operators.
/// - Lengths, distances, dot and cross products, projection, reflection and rotation.
/// - Interpolation with `lerp()` and `slerp()`, and a lexicographic ordering.
/// - Macro `assert_close!` to compare vectors by distance.
pub mod vec2;

pub use float::Scalar;
pub use vec2::{vec2, Vector2};
