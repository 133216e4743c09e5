pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type used at the nalgebra boundary.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used at the nalgebra boundary.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for the plane.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Tight tolerance for exact-ish tests: parallelism, point-on-line, vertical angles.
pub const PRECISE_EPSILON: f64 = 1e-9;

/// Margin applied to segment parameters so near-endpoint touches still count.
pub const PARAM_EPSILON: f64 = 1e-9;

/// Default merge distance, in millimetres.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Maximum miter extension as a multiple of `|amount|`.
pub const MITER_LIMIT: f64 = 4.0;

/// An offset result shorter than this fraction of the input perimeter is retried.
pub const RETRY_PERIMETER_RATIO: f64 = 0.7;

/// Number of positions the point ring is rotated between offset attempts.
pub const RETRY_ROTATION: usize = 2;

/// Default bound on offset attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
