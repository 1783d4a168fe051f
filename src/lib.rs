//! Skeleton and animation import from glTF-style scene graphs.
//!
//! The crate converts a node/skin/animation graph into:
//! - a [`Skeleton`]: uniquely named joints with rest transforms, laid out in
//!   a breadth-first arena
//! - [`AnimationClip`]s: one track per joint with explicit translation,
//!   rotation and scale keys, resampled from linear, step and cubic-spline
//!   source curves
//!
//! The core works on an in-memory [`SceneModel`]; the optional `gltf` feature
//! provides [`GltfLoader`] to build one from a glTF file.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod animation;
pub mod assets;
pub mod errors;
pub mod importer;
pub mod scene;
pub mod settings;
pub mod skeleton;

pub use animation::{AnimationClip, AnimationResampler, JointTrack, Keyframe};
#[cfg(feature = "gltf")]
pub use assets::GltfLoader;
pub use errors::{ImportError, Result};
pub use importer::{ImportedSkeleton, Importer};
pub use scene::SceneModel;
pub use settings::ImportSettings;
pub use skeleton::{Joint, JointNaming, JointTransform, Skeleton, SkeletonBuilder};
