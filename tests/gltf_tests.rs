//! glTF Loader Tests
//!
//! Tests for:
//! - Reading nodes, scenes, skins and animations from a glTF document
//! - End-to-end skeleton and clip import from an embedded buffer
//! - Matrix node rejection on a loaded document

#![cfg(feature = "gltf")]

use base64::Engine as _;
use glam::{Quat, Vec3};
use serde_json::{Value, json};

use rigport::{GltfLoader, ImportError, ImportSettings, Importer};

/// Buffer layout (little-endian f32):
/// - `0..8`: times `[0, 1]`
/// - `8..32`: translations `[(0, 0, 0), (0, 2, 0)]`
/// - `32..64`: rotations `[identity, 90° around Y]`
fn buffer_data() -> Vec<u8> {
    let half = std::f32::consts::FRAC_1_SQRT_2;
    let floats: [f32; 16] = [
        0.0, 1.0, //
        0.0, 0.0, 0.0, 0.0, 2.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0, half, 0.0, half,
    ];
    floats.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// scene 0 -> "root"(0) -> "hips"(1) -> unnamed(2)
fn document() -> Value {
    let data = buffer_data();
    let uri = format!(
        "data:application/octet-stream;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&data)
    );

    json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "name": "main", "nodes": [0] }],
        "nodes": [
            { "name": "root", "children": [1] },
            { "name": "hips", "translation": [0.0, 1.0, 0.0], "children": [2] },
            { "rotation": [0.0, 0.0, 0.0, 1.0] }
        ],
        "skins": [{ "joints": [1, 2] }],
        "animations": [{
            "name": "walk",
            "samplers": [
                { "input": 0, "output": 1, "interpolation": "LINEAR" },
                { "input": 0, "output": 2, "interpolation": "STEP" }
            ],
            "channels": [
                { "sampler": 0, "target": { "node": 1, "path": "translation" } },
                { "sampler": 1, "target": { "node": 2, "path": "rotation" } }
            ]
        }],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR",
                "min": [0.0], "max": [1.0]
            },
            { "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" },
            { "bufferView": 2, "componentType": 5126, "count": 2, "type": "VEC4" }
        ],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
            { "buffer": 0, "byteOffset": 8, "byteLength": 24 },
            { "buffer": 0, "byteOffset": 32, "byteLength": 32 }
        ],
        "buffers": [{ "byteLength": data.len(), "uri": uri }]
    })
}

fn load(document: &Value) -> rigport::Result<rigport::SceneModel> {
    let _ = env_logger::builder().is_test(true).try_init();
    let bytes = serde_json::to_vec(document).unwrap();
    GltfLoader::from_slice(&bytes)
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_scene_graph() {
    let model = load(&document()).unwrap();

    assert_eq!(model.nodes.len(), 3);
    assert_eq!(model.nodes[0].name(), "root");
    assert_eq!(model.nodes[0].children, [1]);
    assert_eq!(model.nodes[1].translation, Some(Vec3::new(0.0, 1.0, 0.0)));
    assert_eq!(model.nodes[2].name, None);
    assert!(model.nodes.iter().all(|node| node.matrix.is_none()));

    assert_eq!(model.scenes.len(), 1);
    assert_eq!(model.scenes[0].name.as_deref(), Some("main"));
    assert_eq!(model.default_scene, Some(0));
    assert_eq!(model.skins[0].joints, [1, 2]);
}

#[test]
fn load_animation_data() {
    let model = load(&document()).unwrap();
    let walk = model.animation("walk").unwrap();

    assert_eq!(walk.channels.len(), 2);
    assert_eq!(walk.channels[1].target_node, Some(2));
    assert_eq!(walk.channels[1].target_path, "rotation");

    let translation = &walk.samplers[0];
    assert_eq!(translation.interpolation, "LINEAR");
    assert_eq!(translation.input.data, [0.0, 1.0]);
    assert_eq!(translation.input.max.as_deref(), Some(&[1.0][..]));
    assert_eq!(translation.output.components, 3);
    assert_eq!(translation.output.count(), 2);

    let rotation = &walk.samplers[1];
    assert_eq!(rotation.interpolation, "STEP");
    assert_eq!(rotation.output.components, 4);
}

// ============================================================================
// End-to-end Import
// ============================================================================

#[test]
fn import_from_document() {
    let model = load(&document()).unwrap();
    let importer = Importer::new(&model, ImportSettings::default());
    let (imported, clips) = importer.import_all().unwrap();

    let names: Vec<&str> = imported.skeleton.joint_names().collect();
    assert_eq!(names, ["hips", "gltf_node_2"]);

    assert_eq!(clips.len(), 1);
    let walk = &clips[0];
    assert_eq!(walk.duration, 1.0);

    let hips = &walk.tracks[0];
    assert_eq!(hips.translations.len(), 2);
    assert_eq!(hips.translations[1].value, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(hips.rotations[0].value, Quat::IDENTITY);

    let child = &walk.tracks[1];
    assert_eq!(child.rotations.len(), 3);
    assert_eq!(child.rotations[0].value, Quat::IDENTITY);
    assert_eq!(child.rotations[1].value, Quat::IDENTITY);
    assert!((child.rotations[2].value.length() - 1.0).abs() < 1e-5);
    assert_eq!(child.translations[0].value, Vec3::ZERO);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn matrix_node_is_rejected() {
    let mut document = document();
    document["nodes"][2] = json!({
        "matrix": [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 3.0, 0.0, 1.0
        ]
    });
    let model = load(&document).unwrap();
    assert!(model.nodes[2].matrix.is_some());

    let err = Importer::new(&model, ImportSettings::default())
        .import_skeleton()
        .unwrap_err();
    assert!(matches!(err, ImportError::MatrixTransform { index: 2, .. }));
}

#[test]
fn invalid_document_is_a_gltf_error() {
    assert!(matches!(
        GltfLoader::from_slice(b"{ \"asset\": 42 }"),
        Err(ImportError::GltfError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("rigport-missing-character.glb");
    assert!(matches!(
        GltfLoader::from_path(&path),
        Err(ImportError::IoError(_))
    ));
}
