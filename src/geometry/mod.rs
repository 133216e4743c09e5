pub mod circle;
pub mod polygon;
pub mod segment;
pub mod shape;
pub mod vector;

pub use circle::Circle;
pub use polygon::{Polygon, PolygonNormals};
pub use segment::Segment;
pub use shape::Geometry;
pub use vector::Vector;
