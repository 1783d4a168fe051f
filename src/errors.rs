//! Error Types
//!
//! This module defines the error types used throughout the importer.
//!
//! # Overview
//!
//! The main error type [`ImportError`] covers three families of failures:
//! - Input-structure errors: the scene does not describe something the
//!   importer can convert (missing skins, unknown interpolation, ...)
//! - Collaborator errors: glTF parsing, file I/O, settings parsing
//! - Internal errors: a skeleton or clip built by the importer failed its own
//!   validation pass
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, ImportError>`.
//!
//! ```rust,ignore
//! use rigport::errors::{ImportError, Result};
//!
//! fn import() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the importer.
#[derive(Error, Debug)]
pub enum ImportError {
    // ========================================================================
    // Scene Structure Errors
    // ========================================================================
    /// The model does not contain any scene.
    #[error("No scenes found")]
    NoScenes,

    /// The model does not contain any skin.
    #[error("No skins found")]
    NoSkins,

    /// The requested scene index does not exist.
    #[error("Scene #{0} not found")]
    SceneNotFound(usize),

    /// The selected scene has no root nodes.
    #[error("Scene #{0} has no nodes")]
    EmptyScene(usize),

    /// None of the model's skins belong to the selected scene.
    #[error("No skins exist in scene #{0}")]
    NoSkinsInScene(usize),

    /// An index stored in the model points outside of its table.
    #[error("Index out of bounds: {context} (index: {index})")]
    IndexOutOfBounds {
        /// Description of what was being accessed
        context: &'static str,
        /// The invalid index
        index: usize,
    },

    /// A joint node carries a transformation matrix instead of TRS properties.
    #[error("Node #{index} ('{name}') has a transformation matrix, which is disallowed for animation targets")]
    MatrixTransform {
        /// Source node index
        index: usize,
        /// Source node name (may be empty)
        name: String,
    },

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// The requested animation does not exist in the model.
    #[error("Animation '{0}' requested but not found")]
    AnimationNotFound(String),

    /// The sampler uses an interpolation mode the resampler does not know.
    #[error("Invalid or unknown interpolation type '{0}'")]
    UnknownInterpolation(String),

    /// The channel targets a property other than translation, rotation or scale.
    #[error("Invalid or unknown channel target path '{0}'")]
    UnknownTargetPath(String),

    /// An accessor's element layout does not match what the reader expects.
    #[error("Invalid buffer view access: expected element size {expected}, got {actual}")]
    ElementSizeMismatch {
        /// Expected number of bytes per element
        expected: usize,
        /// Actual number of bytes per element
        actual: usize,
    },

    /// Time and value streams of a sampler disagree on the keyframe count.
    #[error("Keyframe count mismatch: {times} timestamps for {values} values")]
    KeyframeCountMismatch {
        /// Number of timestamps in the input accessor
        times: usize,
        /// Number of elements in the output accessor
        values: usize,
    },

    /// Keyframe timestamps of a sampler go backwards, or two STEP keys are
    /// too close to fit a hold key between them.
    #[error("Keyframe #{index} at {time}s does not follow the previous key at {previous}s")]
    UnorderedKeyframes {
        /// Index of the offending timestamp
        index: usize,
        /// Timestamp of the key before it
        previous: f32,
        /// The offending timestamp
        time: f32,
    },

    /// Resampling a cubic-spline channel would produce more keys than allowed.
    #[error("Cannot resample {duration}s at {rate}hz: more than {limit} samples")]
    SampleCountOverflow {
        /// Clip duration in seconds
        duration: f32,
        /// Sampling rate in Hz
        rate: f32,
        /// Maximum number of samples per channel
        limit: usize,
    },

    // ========================================================================
    // Internal Errors
    // ========================================================================
    /// The built skeleton failed validation. This is a bug in the importer.
    #[error("Output skeleton failed validation: {0}")]
    InvalidSkeleton(String),

    /// A built animation failed validation. This is a bug in the importer.
    #[error("Animation '{name}' failed validation: {reason}")]
    InvalidAnimation {
        /// Clip name
        name: String,
        /// What the validation pass rejected
        reason: String,
    },

    // ========================================================================
    // Format & I/O Errors
    // ========================================================================
    /// glTF parsing or loading error.
    #[cfg(feature = "gltf")]
    #[error("glTF error: {0}")]
    GltfError(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Settings parsing error.
    #[error("Settings parse error: {0}")]
    SettingsError(#[from] serde_json::Error),
}

impl ImportError {
    /// Returns `true` when the error comes from a failed post-build
    /// validation rather than from the input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ImportError::InvalidSkeleton(_) | ImportError::InvalidAnimation { .. }
        )
    }
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

#[cfg(feature = "gltf")]
impl From<gltf::Error> for ImportError {
    fn from(err: gltf::Error) -> Self {
        ImportError::GltfError(err.to_string())
    }
}

/// Alias for `Result<T, ImportError>`.
pub type Result<T> = std::result::Result<T, ImportError>;
