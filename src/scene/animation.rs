use glam::{Quat, Vec3};

/// Typed, flat `f32` array read from an input buffer.
///
/// `components` is the number of floats per element (1 for scalars,
/// 3 for vectors, 4 for quaternions). `max` is the authored per-component
/// maximum, which for time accessors is the channel's span.
#[derive(Debug, Clone, Default)]
pub struct Accessor {
    pub components: usize,
    pub data: Vec<f32>,
    pub max: Option<Vec<f32>>,
}

impl Accessor {
    /// Scalar accessor with its authored max set to the largest value,
    /// the way exporters write time accessors.
    #[must_use]
    pub fn times(times: Vec<f32>) -> Self {
        let max = times.iter().copied().reduce(f32::max).map(|max| vec![max]);
        Self {
            components: 1,
            data: times,
            max,
        }
    }

    #[must_use]
    pub fn vec3s(values: &[Vec3]) -> Self {
        Self {
            components: 3,
            data: values.iter().flat_map(|v| v.to_array()).collect(),
            max: None,
        }
    }

    #[must_use]
    pub fn quats(values: &[Quat]) -> Self {
        Self {
            components: 4,
            data: values.iter().flat_map(|q| q.to_array()).collect(),
            max: None,
        }
    }

    #[must_use]
    pub fn with_max(mut self, max: Vec<f32>) -> Self {
        self.max = Some(max);
        self
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.data.len() / self.components
        }
    }

    /// Element size in bytes.
    #[inline]
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.components * std::mem::size_of::<f32>()
    }
}

/// Interpolation function and time/value data backing one or more channels.
#[derive(Debug, Clone, Default)]
pub struct AnimationSamplerDef {
    pub input: Accessor,
    pub output: Accessor,
    /// `""`, `"LINEAR"`, `"STEP"` or `"CUBICSPLINE"`; parsed when sampled
    pub interpolation: String,
}

/// A single animated property stream.
#[derive(Debug, Clone, Default)]
pub struct AnimationChannelDef {
    pub target_node: Option<usize>,
    /// `"translation"`, `"rotation"` or `"scale"`; parsed when sampled
    pub target_path: String,
    pub sampler: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AnimationDef {
    pub name: Option<String>,
    pub channels: Vec<AnimationChannelDef>,
    pub samplers: Vec<AnimationSamplerDef>,
}

impl AnimationDef {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Adds a sampler together with a channel driving `path` of `node`.
    pub fn add_channel(
        &mut self,
        node: usize,
        path: &str,
        interpolation: &str,
        input: Accessor,
        output: Accessor,
    ) -> &mut Self {
        self.samplers.push(AnimationSamplerDef {
            input,
            output,
            interpolation: interpolation.to_string(),
        });
        self.channels.push(AnimationChannelDef {
            target_node: Some(node),
            target_path: path.to_string(),
            sampler: self.samplers.len() - 1,
        });
        self
    }
}
