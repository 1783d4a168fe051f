use crate::animation::values::TrackValue;
use crate::errors::{ImportError, Result};

/// Time offset of the hold key inserted before each step change.
pub const STEP_EPSILON: f32 = 1e-6;

/// Upper bound on the keys produced by resampling one cubic-spline channel.
pub const MAX_CUBIC_SAMPLES: usize = 1 << 22;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[inline]
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

impl InterpolationMode {
    /// Parses a sampler interpolation string. An empty string means linear.
    pub fn parse(mode: &str) -> Result<Self> {
        match mode {
            "" | "LINEAR" => Ok(Self::Linear),
            "STEP" => Ok(Self::Step),
            "CUBICSPLINE" => Ok(Self::CubicSpline),
            other => Err(ImportError::UnknownInterpolation(other.to_string())),
        }
    }

    /// Converts source keyframes into explicit output keys.
    ///
    /// `rate` and `duration` are only used by cubic splines, which are
    /// resampled at a fixed rate over the whole clip.
    pub fn sample<T: TrackValue>(
        self,
        times: &[f32],
        values: &[T],
        rate: f32,
        duration: f32,
    ) -> Result<Vec<Keyframe<T>>> {
        match self {
            Self::Linear => sample_linear(times, values),
            Self::Step => sample_step(times, values),
            Self::CubicSpline => sample_cubic_spline(times, values, rate, duration),
        }
    }
}

/// Reads an accessor's flat data as values of `T`, checking the element size.
pub fn read_values<T: TrackValue>(components: usize, data: &[f32]) -> Result<Vec<T>> {
    if components != T::COMPONENTS {
        return Err(ImportError::ElementSizeMismatch {
            expected: T::COMPONENTS * std::mem::size_of::<f32>(),
            actual: components * std::mem::size_of::<f32>(),
        });
    }
    Ok(data
        .chunks_exact(T::COMPONENTS)
        .map(T::from_components)
        .collect())
}

fn check_counts(times: usize, values: usize) -> Result<()> {
    if times == values {
        Ok(())
    } else {
        Err(ImportError::KeyframeCountMismatch { times, values })
    }
}

/// Requires every timestamp to be at least `min_gap` after the previous one.
fn check_times(times: &[f32], min_gap: f32) -> Result<()> {
    for (i, pair) in times.windows(2).enumerate() {
        if pair[1] - min_gap < pair[0] || pair[1].is_nan() {
            return Err(ImportError::UnorderedKeyframes {
                index: i + 1,
                previous: pair[0],
                time: pair[1],
            });
        }
    }
    Ok(())
}

/// Number of samples covering `[0, duration]` at `rate`.
fn cubic_sample_count(duration: f32, rate: f32) -> Result<usize> {
    let count = (f64::from(duration.max(0.0)) * f64::from(rate)).floor();
    if !count.is_finite() || count >= MAX_CUBIC_SAMPLES as f64 {
        return Err(ImportError::SampleCountOverflow {
            duration,
            rate,
            limit: MAX_CUBIC_SAMPLES,
        });
    }
    (count as usize)
        .checked_add(1)
        .ok_or(ImportError::SampleCountOverflow {
            duration,
            rate,
            limit: MAX_CUBIC_SAMPLES,
        })
}

/// Linear keys map one-to-one onto output keys.
pub fn sample_linear<T: TrackValue>(times: &[f32], values: &[T]) -> Result<Vec<Keyframe<T>>> {
    check_counts(times.len(), values.len())?;
    check_times(times, 0.0)?;
    Ok(times
        .iter()
        .zip(values)
        .map(|(&time, &value)| Keyframe::new(time, value))
        .collect())
}

/// Step keys become a pair of keys holding the same value: one at the key
/// time and one just before the next key. The last key has no hold key.
pub fn sample_step<T: TrackValue>(times: &[f32], values: &[T]) -> Result<Vec<Keyframe<T>>> {
    check_counts(times.len(), values.len())?;
    check_times(times, STEP_EPSILON)?;

    let mut keyframes = Vec::with_capacity(times.len() * 2);
    for (i, (&time, &value)) in times.iter().zip(values).enumerate() {
        keyframes.push(Keyframe::new(time, value));
        if let Some(&next_time) = times.get(i + 1) {
            keyframes.push(Keyframe::new(next_time - STEP_EPSILON, value));
        }
    }
    Ok(keyframes)
}

/// Resamples a cubic spline at `rate` over `[0, duration]`.
///
/// `values` holds `(in-tangent, value, out-tangent)` triples, one per time.
pub fn sample_cubic_spline<T: TrackValue>(
    times: &[f32],
    values: &[T],
    rate: f32,
    duration: f32,
) -> Result<Vec<Keyframe<T>>> {
    check_counts(times.len() * 3, values.len())?;
    if times.is_empty() {
        return Ok(Vec::new());
    }
    check_times(times, 0.0)?;

    let num_samples = cubic_sample_count(duration, rate)?;
    let mut keyframes = Vec::with_capacity(num_samples);

    if times.len() == 1 {
        for i in 0..num_samples {
            keyframes.push(Keyframe::new(i as f32 / rate, values[1]));
        }
        return Ok(keyframes);
    }

    let last_interval = times.len() - 2;
    let mut current = 0;
    for i in 0..num_samples {
        let time = i as f32 / rate;
        while current < last_interval && times[current + 1] <= time {
            current += 1;
        }

        let current_time = times[current];
        let next_time = times[current + 1];
        let span = next_time - current_time;
        let t = if span > 0.0 {
            ((time - current_time) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let p0 = values[current * 3 + 1];
        let m0 = values[current * 3 + 2].scale_tangent(span);
        let p1 = values[(current + 1) * 3 + 1];
        let m1 = values[(current + 1) * 3].scale_tangent(span);

        keyframes.push(Keyframe::new(time, T::interpolate_cubic(t, p0, m0, p1, m1)));
    }
    Ok(keyframes)
}
