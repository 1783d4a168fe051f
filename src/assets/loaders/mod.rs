/// glTF 2.0 loader with the `gltf` crate.
#[cfg(feature = "gltf")]
pub mod gltf;

#[cfg(feature = "gltf")]
pub use self::gltf::GltfLoader;
