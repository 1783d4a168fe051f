//! Import Settings
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rigport::ImportSettings;
//!
//! // Default: automatic sampling rate (60 Hz), default scene
//! let settings = ImportSettings::default();
//!
//! // Resample cubic-spline channels at 30 Hz from scene #1
//! let settings = ImportSettings {
//!     sampling_rate: 30.0,
//!     scene: Some(1),
//! };
//!
//! // Or from a JSON configuration file
//! let settings = ImportSettings::from_json_str(r#"{ "sampling_rate": 24.0 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ---------------------------------------------------------------------------
// ImportSettings
// ---------------------------------------------------------------------------

/// Configuration of an [`Importer`](crate::Importer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Cubic-spline resampling rate in Hz.
    ///
    /// `0.0` means automatic: glTF carries no frame rate, so 60 Hz is used
    /// and a warning is logged once per importer.
    pub sampling_rate: f32,

    /// Scene to import from. `None` selects the model's default scene, or
    /// scene 0 when no default is declared.
    pub scene: Option<usize>,
}

impl Default for ImportSettings {
    #[inline]
    fn default() -> Self {
        Self {
            sampling_rate: 0.0,
            scene: None,
        }
    }
}

impl ImportSettings {
    /// Parses settings from JSON. Missing fields keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
