use std::path::Path;

use glam::{Mat4, Quat, Vec3};
use gltf::accessor::{DataType, Dimensions, Iter};
use gltf::animation::{Interpolation, Property};
use gltf::scene::Transform;

use crate::errors::{ImportError, Result};
use crate::scene::{
    Accessor, AnimationChannelDef, AnimationDef, AnimationSamplerDef, SceneDef, SceneModel,
    SceneNode, SkinDef,
};

/// Converts a document parsed by the `gltf` crate into a [`SceneModel`].
///
/// Only the node graph, scenes, skins and animations are read; meshes,
/// materials and images are ignored.
pub struct GltfLoader<'a> {
    document: &'a gltf::Document,
    buffers: &'a [gltf::buffer::Data],
}

impl<'a> GltfLoader<'a> {
    #[must_use]
    pub fn new(document: &'a gltf::Document, buffers: &'a [gltf::buffer::Data]) -> Self {
        Self { document, buffers }
    }

    /// Parses a `.gltf` (JSON) or `.glb` (binary) byte slice. External buffer
    /// URIs cannot be resolved without a base path; embedded and data-URI
    /// buffers are supported.
    pub fn from_slice(bytes: &[u8]) -> Result<SceneModel> {
        let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
        let buffers = gltf::import_buffers(&document, None, blob)?;
        GltfLoader::new(&document, &buffers).load()
    }

    /// Opens a `.gltf` or `.glb` file, resolving external buffers relative to
    /// its directory.
    pub fn from_path(path: &Path) -> Result<SceneModel> {
        let bytes = std::fs::read(path)?;
        let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(&bytes)?;
        let buffers = gltf::import_buffers(&document, path.parent(), blob)?;
        log::info!("glTF parsed successfully: {}", path.display());
        GltfLoader::new(&document, &buffers).load()
    }

    pub fn load(&self) -> Result<SceneModel> {
        let nodes = self.document.nodes().map(Self::load_node).collect();

        let scenes = self
            .document
            .scenes()
            .map(|scene| SceneDef {
                name: scene.name().map(str::to_string),
                nodes: scene.nodes().map(|node| node.index()).collect(),
            })
            .collect();

        let skins = self
            .document
            .skins()
            .map(|skin| SkinDef {
                name: skin.name().map(str::to_string),
                joints: skin.joints().map(|node| node.index()).collect(),
            })
            .collect();

        let animations = self
            .document
            .animations()
            .map(|animation| self.load_animation(&animation))
            .collect::<Result<Vec<_>>>()?;

        Ok(SceneModel {
            nodes,
            scenes,
            default_scene: self.document.default_scene().map(|scene| scene.index()),
            skins,
            animations,
        })
    }

    // --- Helpers ---

    fn load_node(node: gltf::Node) -> SceneNode {
        let mut scene_node = SceneNode {
            name: node.name().map(str::to_string),
            children: node.children().map(|child| child.index()).collect(),
            ..SceneNode::default()
        };

        match node.transform() {
            Transform::Matrix { matrix } => {
                scene_node.matrix = Some(Mat4::from_cols_array_2d(&matrix));
            }
            Transform::Decomposed {
                translation,
                rotation,
                scale,
            } => {
                scene_node.translation = Some(Vec3::from_array(translation));
                scene_node.rotation = Some(Quat::from_array(rotation));
                scene_node.scale = Some(Vec3::from_array(scale));
            }
        }
        scene_node
    }

    fn load_animation(&self, animation: &gltf::Animation) -> Result<AnimationDef> {
        let channels = animation
            .channels()
            .map(|channel| {
                let target = channel.target();
                AnimationChannelDef {
                    target_node: Some(target.node().index()),
                    target_path: property_path(target.property()).to_string(),
                    sampler: channel.sampler().index(),
                }
            })
            .collect();

        let samplers = animation
            .samplers()
            .map(|sampler| {
                Ok(AnimationSamplerDef {
                    input: self.load_accessor(&sampler.input())?,
                    output: self.load_accessor(&sampler.output())?,
                    interpolation: interpolation_mode(sampler.interpolation()).to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AnimationDef {
            name: animation.name().map(str::to_string),
            channels,
            samplers,
        })
    }

    /// Reads a float accessor into a flat array. Any other component type is
    /// rejected as an element size mismatch.
    fn load_accessor(&self, accessor: &gltf::Accessor) -> Result<Accessor> {
        let components = accessor.dimensions().multiplicity();
        let float_size = std::mem::size_of::<f32>();
        if accessor.data_type() != DataType::F32 {
            return Err(ImportError::ElementSizeMismatch {
                expected: components * float_size,
                actual: components * accessor.data_type().size(),
            });
        }

        let buffers = self.buffers;
        let get_buffer_data =
            move |buffer: gltf::Buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice());

        let data: Option<Vec<f32>> = match accessor.dimensions() {
            Dimensions::Scalar => {
                Iter::<f32>::new(accessor.clone(), get_buffer_data).map(Iterator::collect)
            }
            Dimensions::Vec2 => Iter::<[f32; 2]>::new(accessor.clone(), get_buffer_data)
                .map(|iter| iter.flatten().collect()),
            Dimensions::Vec3 => Iter::<[f32; 3]>::new(accessor.clone(), get_buffer_data)
                .map(|iter| iter.flatten().collect()),
            Dimensions::Vec4 => Iter::<[f32; 4]>::new(accessor.clone(), get_buffer_data)
                .map(|iter| iter.flatten().collect()),
            _ => {
                return Err(ImportError::ElementSizeMismatch {
                    expected: 4 * float_size,
                    actual: components * float_size,
                });
            }
        };

        // An accessor without buffer view is all zeros.
        let data = data.unwrap_or_else(|| vec![0.0; accessor.count() * components]);

        let max = accessor.max().and_then(|value| {
            value.as_array().map(|values| {
                values
                    .iter()
                    .filter_map(gltf::json::Value::as_f64)
                    .map(|v| v as f32)
                    .collect()
            })
        });

        Ok(Accessor {
            components,
            data,
            max,
        })
    }
}

fn property_path(property: Property) -> &'static str {
    match property {
        Property::Translation => "translation",
        Property::Rotation => "rotation",
        Property::Scale => "scale",
        Property::MorphTargetWeights => "weights",
    }
}

fn interpolation_mode(interpolation: Interpolation) -> &'static str {
    match interpolation {
        Interpolation::Linear => "LINEAR",
        Interpolation::Step => "STEP",
        Interpolation::CubicSpline => "CUBICSPLINE",
    }
}
