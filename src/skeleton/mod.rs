//! Runtime skeleton
//!
//! A [`Skeleton`] stores its joints in a single arena ordered breadth-first:
//! root joints occupy the first slots and the children of every joint sit in a
//! contiguous index range. Each [`Joint`] keeps its parent index and that
//! range, so the hierarchy can be walked without owned subtrees.

pub mod builder;
pub mod naming;

pub use builder::SkeletonBuilder;
pub use naming::JointNaming;

use std::ops::Range;

use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;

use crate::errors::{ImportError, Result};
use crate::scene::SceneNode;

/// Rest (bind-pose) transform of a joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl JointTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Resolves the rest transform of a source node.
    ///
    /// Nodes carrying a matrix are rejected: animation targets may only use
    /// TRS properties.
    pub fn from_node(index: usize, node: &SceneNode) -> Result<Self> {
        if node.matrix.is_some() {
            return Err(ImportError::MatrixTransform {
                index,
                name: node.name().to_string(),
            });
        }

        let mut transform = Self::IDENTITY;
        if let Some(translation) = node.translation {
            transform.translation = translation;
        }
        if let Some(rotation) = node.rotation {
            transform.rotation = rotation;
        }
        if let Some(scale) = node.scale {
            transform.scale = scale;
        }
        Ok(transform)
    }
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    /// Source node index
    pub node: usize,
    pub transform: JointTransform,
    pub parent: Option<usize>,
    pub children: Range<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skeleton {
    pub(crate) joints: Vec<Joint>,
    pub(crate) num_roots: usize,
}

impl Skeleton {
    #[inline]
    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[inline]
    #[must_use]
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    /// Root joints, each heading an independent tree.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[Joint] {
        &self.joints[..self.num_roots]
    }

    #[must_use]
    pub fn children(&self, index: usize) -> &[Joint] {
        self.joints
            .get(index)
            .map_or(&[], |joint| &self.joints[joint.children.clone()])
    }

    /// Joint names in skeleton order.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|joint| joint.name.as_str())
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|joint| joint.name == name)
    }

    /// Checks the arena invariants: non-empty unique names and consistent
    /// parent/children links.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.num_roots == 0 || self.num_roots > self.joints.len() {
            return Err(format!(
                "{} roots for {} joints",
                self.num_roots,
                self.joints.len()
            ));
        }

        let mut names = FxHashSet::default();
        for (index, joint) in self.joints.iter().enumerate() {
            if joint.name.is_empty() {
                return Err(format!("joint #{index} has an empty name"));
            }
            if !names.insert(joint.name.as_str()) {
                return Err(format!("duplicate joint name '{}'", joint.name));
            }

            let is_root = index < self.num_roots;
            match joint.parent {
                None if is_root => {}
                Some(parent) if !is_root && parent < index => {
                    if !self.joints[parent].children.contains(&index) {
                        return Err(format!(
                            "joint '{}' is not listed by its parent",
                            joint.name
                        ));
                    }
                }
                _ => {
                    return Err(format!("joint '{}' has an invalid parent", joint.name));
                }
            }

            if joint.children.end > self.joints.len()
                || (!joint.children.is_empty() && joint.children.start <= index)
            {
                return Err(format!(
                    "joint '{}' has an invalid child range",
                    joint.name
                ));
            }
            for child in joint.children.clone() {
                if self.joints[child].parent != Some(index) {
                    return Err(format!(
                        "joint '{}' does not point back to '{}'",
                        self.joints[child].name, joint.name
                    ));
                }
            }
        }
        Ok(())
    }

    /// Renders the hierarchy as an indented tree, one joint per line.
    #[must_use]
    pub fn hierarchy(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(usize, usize)> = (0..self.num_roots).rev().map(|i| (i, 0)).collect();
        while let Some((index, depth)) = stack.pop() {
            let joint = &self.joints[index];
            out.push_str(&" ".repeat(depth * 2));
            out.push_str(&joint.name);
            out.push('\n');
            stack.extend(joint.children.clone().rev().map(|child| (child, depth + 1)));
        }
        out
    }
}
