mod affine;
mod mirror;
mod pipeline;
mod translate;

pub use affine::AffineTransform2D;
pub use mirror::{Mirror, MirrorAxis};
pub use pipeline::{transform, TransformPipeline};
pub use translate::Translate;
