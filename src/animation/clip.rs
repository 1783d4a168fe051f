use glam::{Quat, Vec3};

use crate::animation::tracks::Keyframe;

/// Keyframes of one joint, one sequence per transform component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointTrack {
    pub translations: Vec<Keyframe<Vec3>>,
    pub rotations: Vec<Keyframe<Quat>>,
    pub scales: Vec<Keyframe<Vec3>>,
}

impl JointTrack {
    fn validate(&self) -> Result<(), String> {
        fn check<T>(keys: &[Keyframe<T>], kind: &str) -> Result<(), String> {
            if keys.is_empty() {
                return Err(format!("empty {kind} track"));
            }
            if let Some(pair) = keys.windows(2).find(|pair| pair[1].time < pair[0].time) {
                return Err(format!(
                    "{kind} keys out of order ({} then {})",
                    pair[0].time, pair[1].time
                ));
            }
            Ok(())
        }

        check(&self.translations, "translation")?;
        check(&self.rotations, "rotation")?;
        check(&self.scales, "scale")
    }
}

/// Resampled clip: one track per skeleton joint, in skeleton order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<JointTrack>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: String, duration: f32, tracks: Vec<JointTrack>) -> Self {
        Self {
            name,
            duration,
            tracks,
        }
    }

    #[inline]
    #[must_use]
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Confirms `num_joints` tracks, none of them empty, with chronologically
    /// ordered keys.
    pub fn validate(&self, num_joints: usize) -> Result<(), String> {
        if self.tracks.len() != num_joints {
            return Err(format!(
                "{} tracks for {num_joints} joints",
                self.tracks.len()
            ));
        }
        if self.duration.is_nan() || self.duration < 0.0 {
            return Err(format!("invalid duration {}", self.duration));
        }
        for (index, track) in self.tracks.iter().enumerate() {
            track
                .validate()
                .map_err(|reason| format!("track #{index}: {reason}"))?;
        }
        Ok(())
    }
}
