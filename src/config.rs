use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TOLERANCE};
use crate::operations::offset::RepairMode;

/// Settings consumed by the transform pipeline.
///
/// Missing fields in serialized form take their defaults; a default value
/// leaves every stage disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Merge distance for near-duplicate points and endpoint touches.
    pub tolerance: f64,
    /// Offset applied to every polygon; negative deflates.
    pub inflate: Option<f64>,
    /// Negate the x coordinate of every point.
    pub mirror_x: bool,
    /// Negate the y coordinate of every point.
    pub mirror_y: bool,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    /// Bound on offset retries per polygon.
    pub max_attempts: usize,
    /// How the offset cuts self-crossing loops.
    pub repair: RepairMode,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            inflate: None,
            mirror_x: false,
            mirror_y: false,
            offset_x: None,
            offset_y: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            repair: RepairMode::default(),
        }
    }
}

impl TransformSettings {
    /// Parses settings from JSON and validates them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or
    /// `ConfigError::Invalid` if a field fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field for a usable value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(invalid("tolerance", format!("must be positive, got {}", self.tolerance)));
        }
        for (field, value) in [
            ("inflate", self.inflate),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(invalid(field, format!("must be finite, got {v}")));
                }
            }
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1".to_owned()));
        }
        Ok(())
    }

    /// True when no pipeline stage would run.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.inflate.is_none()
            && !self.mirror_x
            && !self.mirror_y
            && self.offset_x.is_none()
            && self.offset_y.is_none()
    }
}

fn invalid(field: &'static str, reason: String) -> crate::error::EtchError {
    ConfigError::Invalid { field, reason }.into()
}
