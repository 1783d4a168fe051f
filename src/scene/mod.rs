//! Source scene model
//!
//! Read-only description of a parsed node/skin/animation graph:
//! - [`SceneNode`]: name, TRS or matrix transform, children
//! - [`SceneDef`]: root node list of one scene
//! - [`SkinDef`]: ordered joint node list
//! - [`AnimationDef`]: channels and samplers backed by [`Accessor`] data
//!
//! The importer never mutates a [`SceneModel`]. It is normally produced by the
//! glTF loader, but can be assembled by hand.

pub mod animation;
pub mod node;

pub use animation::{Accessor, AnimationChannelDef, AnimationDef, AnimationSamplerDef};
pub use node::SceneNode;

use crate::errors::{ImportError, Result};

/// A scene: an ordered list of root node indices.
#[derive(Debug, Clone, Default)]
pub struct SceneDef {
    pub name: Option<String>,
    pub nodes: Vec<usize>,
}

/// A skin: an ordered list of joint node indices.
#[derive(Debug, Clone, Default)]
pub struct SkinDef {
    pub name: Option<String>,
    pub joints: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    pub nodes: Vec<SceneNode>,
    pub scenes: Vec<SceneDef>,
    pub default_scene: Option<usize>,
    pub skins: Vec<SkinDef>,
    pub animations: Vec<AnimationDef>,
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, index: usize) -> Result<&SceneNode> {
        self.nodes.get(index).ok_or(ImportError::IndexOutOfBounds {
            context: "node",
            index,
        })
    }

    pub fn scene(&self, index: usize) -> Result<&SceneDef> {
        self.scenes
            .get(index)
            .ok_or(ImportError::SceneNotFound(index))
    }

    /// Finds an animation by exact name match.
    #[must_use]
    pub fn animation(&self, name: &str) -> Option<&AnimationDef> {
        self.animations
            .iter()
            .find(|animation| animation.name.as_deref() == Some(name))
    }

    // --- Builder helpers ---

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, node: SceneNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Appends a scene rooted at `nodes` and returns its index.
    pub fn add_scene(&mut self, nodes: Vec<usize>) -> usize {
        self.scenes.push(SceneDef { name: None, nodes });
        self.scenes.len() - 1
    }

    /// Appends a skin over `joints` and returns its index.
    pub fn add_skin(&mut self, joints: Vec<usize>) -> usize {
        self.skins.push(SkinDef { name: None, joints });
        self.skins.len() - 1
    }

    pub fn add_animation(&mut self, animation: AnimationDef) -> usize {
        self.animations.push(animation);
        self.animations.len() - 1
    }
}
