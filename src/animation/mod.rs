//! Animation resampling
//!
//! Turns per-channel source curves into per-joint keyframe tracks:
//! - [`spline`]: cubic Hermite evaluation
//! - [`tracks`]: linear / step / cubic-spline keyframe conversion
//! - [`resample`]: channel grouping, duration and bind-pose back-fill

pub mod binding;
pub mod clip;
pub mod resample;
pub mod spline;
pub mod tracks;
pub mod values;

pub use binding::TargetPath;
pub use clip::{AnimationClip, JointTrack};
pub use resample::{AnimationResampler, DEFAULT_SAMPLING_RATE};
pub use tracks::{InterpolationMode, Keyframe, MAX_CUBIC_SAMPLES, STEP_EPSILON};
pub use values::TrackValue;
