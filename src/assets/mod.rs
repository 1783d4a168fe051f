//! Input adapters
//!
//! Loaders turning parsed files into a [`SceneModel`](crate::scene::SceneModel).

pub mod loaders;

#[cfg(feature = "gltf")]
pub use loaders::GltfLoader;
