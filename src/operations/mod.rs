pub mod intersect;
pub mod offset;
pub mod polygonize;
pub mod query;
pub mod transform;
