use tracing::debug;

use crate::config::TransformSettings;
use crate::error::Result;
use crate::geometry::{Geometry, Vector};
use crate::operations::offset::PolygonOffset;

use super::{Mirror, MirrorAxis, Translate};

/// Runs the configured transforms over a geometry batch.
///
/// Stages run in a fixed order and only when enabled:
/// 1. Inflate polygons (other variants pass through)
/// 2. Mirror x
/// 3. Mirror y
/// 4. Translate by `(offset_x, offset_y)`, an absent component counting as 0
///
/// Inflation happens first so offsets are measured in the source frame.
#[derive(Debug)]
pub struct TransformPipeline<'a> {
    settings: &'a TransformSettings,
}

impl<'a> TransformPipeline<'a> {
    /// Creates a new pipeline over `settings`.
    #[must_use]
    pub fn new(settings: &'a TransformSettings) -> Self {
        Self { settings }
    }

    /// Executes every enabled stage, returning the transformed batch.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the settings fail validation, or the
    /// offset error for a polygon that cannot be inflated (fewer than 3
    /// distinct points).
    pub fn execute(&self, mut batch: Vec<Geometry>) -> Result<Vec<Geometry>> {
        let s = self.settings;
        s.validate()?;

        if let Some(amount) = s.inflate {
            debug!(stage = "inflate", amount, batch = batch.len(), "transform stage");
            for geometry in &mut batch {
                if let Geometry::Polygon(polygon) = geometry {
                    *polygon = PolygonOffset::new(std::mem::take(polygon), amount, s.tolerance)
                        .with_max_attempts(s.max_attempts)
                        .with_repair(s.repair)
                        .execute()?;
                }
            }
        }

        if s.mirror_x {
            debug!(stage = "mirror_x", batch = batch.len(), "transform stage");
            Mirror::new(MirrorAxis::X).execute(&mut batch);
        }

        if s.mirror_y {
            debug!(stage = "mirror_y", batch = batch.len(), "transform stage");
            Mirror::new(MirrorAxis::Y).execute(&mut batch);
        }

        if s.offset_x.is_some() || s.offset_y.is_some() {
            let displacement = Vector::new(s.offset_x.unwrap_or(0.0), s.offset_y.unwrap_or(0.0));
            debug!(
                stage = "translate",
                dx = displacement.x,
                dy = displacement.y,
                batch = batch.len(),
                "transform stage"
            );
            Translate::new(displacement).execute(&mut batch);
        }

        Ok(batch)
    }
}

/// Applies `settings` to `batch`; shorthand for [`TransformPipeline`].
///
/// # Errors
///
/// See [`TransformPipeline::execute`].
pub fn transform(batch: Vec<Geometry>, settings: &TransformSettings) -> Result<Vec<Geometry>> {
    TransformPipeline::new(settings).execute(batch)
}
