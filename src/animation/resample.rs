use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::binding::TargetPath;
use crate::animation::clip::{AnimationClip, JointTrack};
use crate::animation::tracks::{InterpolationMode, Keyframe, read_values};
use crate::errors::{ImportError, Result};
use crate::scene::{Accessor, AnimationChannelDef, AnimationDef, SceneModel};
use crate::skeleton::{JointNaming, JointTransform, Skeleton};

/// Sampling rate used when none is configured. glTF carries no authored
/// frame rate.
pub const DEFAULT_SAMPLING_RATE: f32 = 60.0;

/// Converts the channels of one animation into per-joint tracks of an
/// already built skeleton.
///
/// Channels are routed to joints by joint name, through the [`JointNaming`]
/// produced together with the skeleton. The clip duration is the longest
/// authored channel span and is established before any channel is sampled,
/// so resampled cubic channels always cover the whole clip.
pub struct AnimationResampler<'a> {
    model: &'a SceneModel,
    skeleton: &'a Skeleton,
    naming: &'a JointNaming,
    sampling_rate: f32,
}

impl<'a> AnimationResampler<'a> {
    /// Creates a resampler. A non-positive `sampling_rate` selects
    /// [`DEFAULT_SAMPLING_RATE`].
    #[must_use]
    pub fn new(
        model: &'a SceneModel,
        skeleton: &'a Skeleton,
        naming: &'a JointNaming,
        sampling_rate: f32,
    ) -> Self {
        let sampling_rate = if sampling_rate > 0.0 {
            sampling_rate
        } else {
            DEFAULT_SAMPLING_RATE
        };
        Self {
            model,
            skeleton,
            naming,
            sampling_rate,
        }
    }

    #[inline]
    #[must_use]
    pub fn sampling_rate(&self) -> f32 {
        self.sampling_rate
    }

    /// Resamples the animation named `name` (exact match).
    pub fn resample(&self, name: &str) -> Result<AnimationClip> {
        let animation = self
            .model
            .animation(name)
            .ok_or_else(|| ImportError::AnimationNotFound(name.to_string()))?;

        let groups = self.group_channels(animation);
        let duration = self.clip_duration(animation, &groups)?;

        let mut tracks = Vec::with_capacity(self.skeleton.num_joints());
        for joint in self.skeleton.joints() {
            let mut track = JointTrack::default();
            if let Some(channels) = groups.get(joint.name.as_str()) {
                for channel in channels {
                    self.sample_channel(animation, channel, duration, &mut track)?;
                }
            }
            self.fill_bind_pose(name, &joint.name, &mut track)?;
            tracks.push(track);
        }

        let clip = AnimationClip::new(name.to_string(), duration, tracks);
        log::info!(
            "Processed animation '{}' (tracks: {}, duration: {}s)",
            clip.name,
            clip.num_tracks(),
            clip.duration
        );

        clip.validate(self.skeleton.num_joints())
            .map_err(|reason| {
                log::error!("Animation '{name}' failed validation: {reason}");
                ImportError::InvalidAnimation {
                    name: name.to_string(),
                    reason,
                }
            })?;

        Ok(clip)
    }

    /// Groups channels by the joint name of their target node. Channels
    /// without target, or targeting a node outside the skeleton, are dropped.
    fn group_channels(
        &self,
        animation: &'a AnimationDef,
    ) -> FxHashMap<&'a str, Vec<&'a AnimationChannelDef>> {
        let naming: &'a JointNaming = self.naming;
        let mut groups: FxHashMap<&'a str, Vec<&'a AnimationChannelDef>> = FxHashMap::default();
        for channel in &animation.channels {
            let Some(node) = channel.target_node else {
                continue;
            };
            match naming.name_of(node) {
                Some(joint) => groups.entry(joint).or_default().push(channel),
                None => log::debug!(
                    "Channel '{}' targets node #{node}, which is not a joint, skipping",
                    channel.target_path
                ),
            }
        }
        groups
    }

    fn clip_duration(
        &self,
        animation: &AnimationDef,
        groups: &FxHashMap<&'a str, Vec<&'a AnimationChannelDef>>,
    ) -> Result<f32> {
        let mut duration = 0.0_f32;
        for channel in groups.values().flatten() {
            let sampler = animation.samplers.get(channel.sampler).ok_or(
                ImportError::IndexOutOfBounds {
                    context: "animation sampler",
                    index: channel.sampler,
                },
            )?;
            duration = duration.max(channel_span(&sampler.input));
        }
        Ok(duration)
    }

    fn sample_channel(
        &self,
        animation: &AnimationDef,
        channel: &AnimationChannelDef,
        duration: f32,
        track: &mut JointTrack,
    ) -> Result<()> {
        let sampler = animation
            .samplers
            .get(channel.sampler)
            .ok_or(ImportError::IndexOutOfBounds {
                context: "animation sampler",
                index: channel.sampler,
            })?;

        let mode = InterpolationMode::parse(&sampler.interpolation)?;
        let path = TargetPath::parse(&channel.target_path)?;

        let input = &sampler.input;
        if input.components != 1 {
            return Err(ImportError::ElementSizeMismatch {
                expected: std::mem::size_of::<f32>(),
                actual: input.element_size(),
            });
        }
        let times = &input.data;
        let output = &sampler.output;
        let rate = self.sampling_rate;

        match path {
            TargetPath::Translation => {
                let values = read_values::<Vec3>(output.components, &output.data)?;
                let keys = mode.sample(times, &values, rate, duration)?;
                replace_keys(&mut track.translations, keys, path);
            }
            TargetPath::Rotation => {
                let values = read_values::<Quat>(output.components, &output.data)?;
                let keys = mode.sample(times, &values, rate, duration)?;
                replace_keys(&mut track.rotations, keys, path);
            }
            TargetPath::Scale => {
                let values = read_values::<Vec3>(output.components, &output.data)?;
                let keys = mode.sample(times, &values, rate, duration)?;
                replace_keys(&mut track.scales, keys, path);
            }
        }
        Ok(())
    }

    /// Gives every empty sequence a single key at time 0 holding the joint's
    /// rest value.
    fn fill_bind_pose(&self, clip: &str, joint: &str, track: &mut JointTrack) -> Result<()> {
        if !track.translations.is_empty()
            && !track.rotations.is_empty()
            && !track.scales.is_empty()
        {
            return Ok(());
        }

        let node = self
            .naming
            .node_of(joint)
            .ok_or_else(|| ImportError::InvalidAnimation {
                name: clip.to_string(),
                reason: format!("joint '{joint}' has no source node"),
            })?;
        let rest = JointTransform::from_node(node, self.model.node(node)?)?;

        if track.translations.is_empty() {
            track.translations.push(Keyframe::new(0.0, rest.translation));
        }
        if track.rotations.is_empty() {
            track.rotations.push(Keyframe::new(0.0, rest.rotation));
        }
        if track.scales.is_empty() {
            track.scales.push(Keyframe::new(0.0, rest.scale));
        }
        Ok(())
    }
}

/// The span of a channel: its input accessor's authored maximum, or the last
/// timestamp when the maximum is missing.
fn channel_span(input: &Accessor) -> f32 {
    if let Some(max) = input.max.as_ref().and_then(|max| max.first()) {
        return *max;
    }
    log::warn!("Animation input accessor has no max value, using its last timestamp");
    input.data.last().copied().unwrap_or(0.0)
}

fn replace_keys<T>(keys: &mut Vec<Keyframe<T>>, sampled: Vec<Keyframe<T>>, path: TargetPath) {
    if !keys.is_empty() {
        log::debug!("Joint has several {path} channels, keeping the last one");
    }
    *keys = sampled;
}
