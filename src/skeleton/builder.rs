use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{ImportError, Result};
use crate::scene::{SceneModel, SkinDef};
use crate::skeleton::{Joint, JointNaming, JointTransform, Skeleton};

/// Builds a [`Skeleton`] from the skins of one scene.
///
/// # Steps
///
/// 1. Collect the skins whose first joint is reachable from the scene roots
/// 2. Find the root joint of each skin and deduplicate them
/// 3. Lay the joint trees out breadth-first in an arena, resolving rest
///    transforms on the way
/// 4. Name every joint through a fresh [`JointNaming`]
/// 5. Validate the result
pub struct SkeletonBuilder<'a> {
    model: &'a SceneModel,
}

impl<'a> SkeletonBuilder<'a> {
    #[must_use]
    pub fn new(model: &'a SceneModel) -> Self {
        Self { model }
    }

    /// Builds the skeleton of scene `scene_index` and returns it with the
    /// naming table used to produce its joint names.
    pub fn build(&self, scene_index: usize) -> Result<(Skeleton, JointNaming)> {
        let scene = self.model.scene(scene_index)?;
        if scene.nodes.is_empty() {
            return Err(ImportError::EmptyScene(scene_index));
        }

        let skins = self.skins_for_scene(scene_index)?;
        if skins.is_empty() {
            return Err(ImportError::NoSkinsInScene(scene_index));
        }

        let mut roots = BTreeSet::new();
        for skin in skins {
            if let Some(root) = self.find_skin_root(skin)? {
                roots.insert(root);
            }
        }
        let roots = self.outermost_roots(&roots)?;

        // Breadth-first arena layout: roots first, then each joint's children
        // appended contiguously.
        let mut joints: Vec<Joint> = Vec::new();
        let mut placed = FxHashSet::default();
        for &root in &roots {
            placed.insert(root);
            joints.push(self.create_joint(root, None)?);
        }

        let mut cursor = 0;
        while cursor < joints.len() {
            let node = self.model.node(joints[cursor].node)?;
            let start = joints.len();
            for &child in &node.children {
                if !placed.insert(child) {
                    log::debug!("Node #{child} is already part of the skeleton, skipping");
                    continue;
                }
                joints.push(self.create_joint(child, Some(cursor))?);
            }
            joints[cursor].children = start..joints.len();
            cursor += 1;
        }

        // Names are handed out in node order so that, among duplicates, the
        // lowest node index keeps the plain name.
        let mut by_node: Vec<usize> = (0..joints.len()).collect();
        by_node.sort_by_key(|&i| joints[i].node);
        let mut naming = JointNaming::new();
        for i in by_node {
            let node = joints[i].node;
            joints[i].name = naming.assign(node, self.model.node(node)?.name());
        }

        let skeleton = Skeleton {
            joints,
            num_roots: roots.len(),
        };

        skeleton.validate().map_err(|reason| {
            log::error!("Output skeleton failed validation, this is likely a bug: {reason}");
            ImportError::InvalidSkeleton(reason)
        })?;

        log::debug!("Joint hierarchy:\n{}", skeleton.hierarchy());

        Ok((skeleton, naming))
    }

    /// Returns the skins whose first joint is reachable from the roots of
    /// scene `scene_index`. Skins without joints are never included.
    pub fn skins_for_scene(&self, scene_index: usize) -> Result<Vec<&'a SkinDef>> {
        let scene = self.model.scene(scene_index)?;
        let found = self.reachable_from(&scene.nodes)?;

        Ok(self
            .model
            .skins
            .iter()
            .filter(|skin| skin.joints.first().is_some_and(|first| found.contains(first)))
            .collect())
    }

    /// Walks parent links from the skin's first joint until a joint without
    /// parent is found. Returns `None` for a skin without joints.
    pub fn find_skin_root(&self, skin: &SkinDef) -> Result<Option<usize>> {
        let Some(&first) = skin.joints.first() else {
            return Ok(None);
        };

        let mut parents: FxHashMap<usize, usize> = FxHashMap::default();
        for &joint in &skin.joints {
            for &child in &self.model.node(joint)?.children {
                parents.entry(child).or_insert(joint);
            }
        }

        let mut root = first;
        // Bounded walk: a malformed cyclic hierarchy must not hang the import.
        for _ in 0..=parents.len() {
            match parents.get(&root) {
                Some(&parent) => root = parent,
                None => break,
            }
        }
        Ok(Some(root))
    }

    fn reachable_from(&self, starts: &[usize]) -> Result<FxHashSet<usize>> {
        let mut found = FxHashSet::default();
        let mut open: Vec<usize> = starts.to_vec();
        while let Some(index) = open.pop() {
            if !found.insert(index) {
                continue;
            }
            open.extend(&self.model.node(index)?.children);
        }
        Ok(found)
    }

    /// Drops roots that already lie inside another root's tree, so that no
    /// node is emitted twice when skins overlap.
    fn outermost_roots(&self, roots: &BTreeSet<usize>) -> Result<Vec<usize>> {
        let mut nested = FxHashSet::default();
        for &root in roots {
            let children = &self.model.node(root)?.children;
            nested.extend(self.reachable_from(children)?);
        }

        let outermost: Vec<usize> = roots
            .iter()
            .copied()
            .filter(|root| !nested.contains(root))
            .collect();

        // Every root nested in another only happens with cycles; keep the
        // discovered roots and let the placed-set break the cycle.
        if outermost.is_empty() {
            Ok(roots.iter().copied().collect())
        } else {
            Ok(outermost)
        }
    }

    fn create_joint(&self, node: usize, parent: Option<usize>) -> Result<Joint> {
        let transform = JointTransform::from_node(node, self.model.node(node)?)?;
        Ok(Joint {
            name: String::new(),
            node,
            transform,
            parent,
            children: 0..0,
        })
    }
}
