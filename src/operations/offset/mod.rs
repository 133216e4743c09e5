mod filter;
mod raw_offset;
mod repair;
mod slice;
mod stitch;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Polygon, Vector};
use crate::math::polygon_2d::{dedup_ring, signed_area_2d};
use crate::math::{DEFAULT_MAX_ATTEMPTS, PRECISE_EPSILON, RETRY_PERIMETER_RATIO, RETRY_ROTATION};
use crate::operations::intersect::SweepIntersect;

/// How a self-crossing of the raw offset ring is cut out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairMode {
    /// Sever the segments strictly between the two crossing segments, in
    /// ring index order. A crossing between the first and last corner of
    /// the ring severs nearly everything, which is what the rotation retry
    /// is for. Convex rings deflate to a collapsed result in this mode.
    #[default]
    Forward,
    /// Sever whichever of the two loops through the crossing winds against
    /// the source ring, falling back to the shorter loop. Needed to deflate
    /// convex rings.
    Winding,
}

/// Inflates (positive amount) or deflates (negative amount) a polygon.
///
/// Each edge moves along its outward normal, gaps between shifted edges are
/// mitered or bridged, and the self-crossings this leaves at concave corners
/// are cut out. When the cut removes too much of the outline (perimeter below
/// 70% of the input), the attempt is repeated from a ring start two points
/// later. Once attempts run out the last result is returned as is.
///
/// Where the ring still touches itself after the cuts (the walls of a notch
/// that closed up leave a pocket which only retraces the outer edge), it is
/// sliced at the contacts, runs that dip back toward the source are dropped
/// and the rest is stitched into the largest ring.
///
/// Outward means away from a counter-clockwise ring; for clockwise input the
/// sign of `amount` is effectively reversed.
#[derive(Debug)]
pub struct PolygonOffset {
    polygon: Polygon,
    amount: f64,
    tolerance: f64,
    max_attempts: usize,
    repair: RepairMode,
}

impl PolygonOffset {
    /// Creates a new offset operation with the default retry bound.
    #[must_use]
    pub fn new(polygon: Polygon, amount: f64, tolerance: f64) -> Self {
        Self {
            polygon,
            amount,
            tolerance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            repair: RepairMode::default(),
        }
    }

    /// Sets how many ring rotations may be tried before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets how self-crossings are cut.
    #[must_use]
    pub fn with_repair(mut self, repair: RepairMode) -> Self {
        self.repair = repair;
        self
    }

    /// Executes the offset, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `max_attempts` is zero,
    /// `GeometryError::TooFewPoints` if fewer than 3 distinct points remain
    /// after near-duplicates are merged.
    pub fn execute(&self) -> Result<Polygon> {
        if self.max_attempts == 0 {
            return Err(OperationError::InvalidInput(
                "at least 1 attempt required for polygon offset".to_owned(),
            )
            .into());
        }

        let base = self.polygon.deduplicated(self.tolerance);
        if base.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                actual: base.len(),
            }
            .into());
        }

        if self.amount.abs() < PRECISE_EPSILON {
            return Ok(self.polygon.clone());
        }

        let original_perimeter = base.perimeter();
        let mut result = base.clone();

        for attempt in 0..self.max_attempts {
            let rotation = attempt * RETRY_ROTATION;
            result = self.attempt(&base.rotated(rotation), attempt, rotation)?;

            let ratio = result.perimeter() / original_perimeter;
            if ratio >= RETRY_PERIMETER_RATIO {
                return Ok(result);
            }
        }

        warn!(
            attempts = self.max_attempts,
            amount = self.amount,
            points = result.len(),
            "polygon offset collapsed; returning best-effort result"
        );
        Ok(result)
    }

    fn attempt(&self, ring: &Polygon, attempt: usize, rotation: usize) -> Result<Polygon> {
        let normals = ring.normals()?;
        let mut raw = raw_offset::build(&ring.edges(), &normals.edge, self.amount, self.tolerance);

        // Step 1: Cut the crossings the sweep reports.
        let mut hits = SweepIntersect::new(&raw, self.tolerance).execute();
        repair::order(&mut hits);
        let orientation = ring.signed_area().signum();
        let resolution = repair::resolve(&mut raw, &hits, self.repair, orientation, self.tolerance);
        let points = repair::rebuild(&raw, &resolution.severed, self.tolerance);

        // Step 2: Drop pockets left where the ring only touches itself.
        let result = Polygon::new(self.drop_pockets(points, ring, orientation));

        debug!(
            attempt,
            rotation,
            crossings = hits.len(),
            resolved = resolution.resolved,
            ratio = result.perimeter() / ring.perimeter(),
            "offset attempt"
        );
        Ok(result)
    }

    fn drop_pockets(&self, points: Vec<Vector>, source: &Polygon, orientation: f64) -> Vec<Vector> {
        let Some(slices) = slice::build(&points, self.tolerance) else {
            return points;
        };
        let kept = filter::apply(&slices, &source.edges(), self.amount);
        let rings = stitch::connect(&kept, self.tolerance);

        rings
            .iter()
            .max_by(|x, y| (signed_area_2d(x) * orientation).total_cmp(&(signed_area_2d(y) * orientation)))
            .map_or(points, |best| dedup_ring(best, self.tolerance))
    }
}
