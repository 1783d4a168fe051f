use glam::{Mat4, Quat, Vec3};

/// A source node as described by the input file.
///
/// TRS properties are kept as `Option`s so that absent channels stay
/// distinguishable from explicit identity values. `matrix` is mutually
/// exclusive with TRS in well-formed input.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub name: Option<String>,
    pub translation: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub scale: Option<Vec3>,
    pub matrix: Option<Mat4>,
    /// Child node indices, in source order
    pub children: Vec<usize>,
}

impl SceneNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = Some(translation);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_matrix(mut self, matrix: Mat4) -> Self {
        self.matrix = Some(matrix);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<usize>) -> Self {
        self.children = children;
        self
    }

    /// Node name, or an empty string when unnamed.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
