//! Import pipeline
//!
//! Composes the two passes over a [`SceneModel`]: the skeleton is built once
//! per scene, then any number of animation clips are resampled against it.
//!
//! ```rust,ignore
//! let importer = Importer::new(&model, ImportSettings::default());
//! let skeleton = importer.import_skeleton()?;
//! for name in importer.animation_names() {
//!     let clip = importer.import_animation(name, &skeleton)?;
//! }
//! ```

use std::cell::Cell;

use crate::animation::{AnimationClip, AnimationResampler, DEFAULT_SAMPLING_RATE};
use crate::errors::{ImportError, Result};
use crate::scene::SceneModel;
use crate::settings::ImportSettings;
use crate::skeleton::{JointNaming, Skeleton, SkeletonBuilder};

/// A built skeleton together with the naming table that produced it.
#[derive(Debug, Clone)]
pub struct ImportedSkeleton {
    pub skeleton: Skeleton,
    pub naming: JointNaming,
}

pub struct Importer<'a> {
    model: &'a SceneModel,
    settings: ImportSettings,
    sampling_rate_warned: Cell<bool>,
}

impl<'a> Importer<'a> {
    #[must_use]
    pub fn new(model: &'a SceneModel, settings: ImportSettings) -> Self {
        Self {
            model,
            settings,
            sampling_rate_warned: Cell::new(false),
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Picks the scene to import: the configured one, else the model's
    /// default scene, else scene 0.
    pub fn select_scene(&self) -> Result<usize> {
        if self.model.scenes.is_empty() {
            return Err(ImportError::NoScenes);
        }
        let index = self
            .settings
            .scene
            .or(self.model.default_scene)
            .unwrap_or(0);
        let scene = self.model.scene(index)?;
        log::info!(
            "Importing from scene #{index} ({})",
            scene.name.as_deref().unwrap_or("")
        );
        Ok(index)
    }

    pub fn import_skeleton(&self) -> Result<ImportedSkeleton> {
        let scene = self.select_scene()?;
        if self.model.skins.is_empty() {
            return Err(ImportError::NoSkins);
        }

        let (skeleton, naming) = SkeletonBuilder::new(self.model).build(scene)?;
        log::info!("Built skeleton with {} joints", skeleton.num_joints());
        Ok(ImportedSkeleton { skeleton, naming })
    }

    /// Names of the animations that can be imported. Unnamed animations
    /// cannot be requested and are skipped with a warning.
    #[must_use]
    pub fn animation_names(&self) -> Vec<&'a str> {
        let model: &'a SceneModel = self.model;
        model
            .animations
            .iter()
            .enumerate()
            .filter_map(|(index, animation)| match animation.name.as_deref() {
                Some(name) if !name.is_empty() => Some(name),
                _ => {
                    log::warn!("Animation #{index} has no name and will be skipped");
                    None
                }
            })
            .collect()
    }

    /// Resampling rate for cubic-spline channels, resolving the automatic
    /// setting.
    pub fn sampling_rate(&self) -> f32 {
        if self.settings.sampling_rate > 0.0 {
            return self.settings.sampling_rate;
        }
        if !self.sampling_rate_warned.replace(true) {
            log::warn!(
                "The animation sampling rate is set to 0 (automatic) but glTF does not carry frame rate information, assuming {DEFAULT_SAMPLING_RATE}hz"
            );
        }
        DEFAULT_SAMPLING_RATE
    }

    pub fn import_animation(&self, name: &str, skeleton: &ImportedSkeleton) -> Result<AnimationClip> {
        let resampler = AnimationResampler::new(
            self.model,
            &skeleton.skeleton,
            &skeleton.naming,
            self.sampling_rate(),
        );
        resampler.resample(name)
    }

    /// Builds the skeleton and imports every named animation.
    pub fn import_all(&self) -> Result<(ImportedSkeleton, Vec<AnimationClip>)> {
        let skeleton = self.import_skeleton()?;
        let clips = self
            .animation_names()
            .into_iter()
            .map(|name| self.import_animation(name, &skeleton))
            .collect::<Result<Vec<_>>>()?;
        Ok((skeleton, clips))
    }
}
