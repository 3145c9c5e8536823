//! End-to-end pipeline tests.
//!
//! These synthesize small PNG inputs on the fly, run the full conversion,
//! and inspect the files the way a downstream consumer would: the OBJ is
//! re-parsed, the GLB is checked at the container level.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use image::{GrayImage, Luma};
use relief_convert::{convert_image_to_glb, convert_image_to_obj, ConvertConfig, ConvertError};
use relief_io::load_obj;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Write a uniform grayscale PNG and return its path.
fn uniform_png(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn uniform_2x2_image_to_obj() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "flat.png", 2, 2, 128);
    let output = dir.path().join("flat.obj");

    let mesh = convert_image_to_obj(&ConvertConfig::default(), &input, &output).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
    for v in &mesh.vertices {
        assert_relative_eq!(v.z(), -128.0);
    }

    // The written file resolves to the same geometry.
    let reloaded = load_obj(&output).unwrap();
    assert_eq!(reloaded.faces, mesh.faces);
    for (a, b) in reloaded.vertices.iter().zip(&mesh.vertices) {
        assert_relative_eq!(a.x(), b.x(), max_relative = 1e-12);
        assert_relative_eq!(a.y(), b.y(), max_relative = 1e-12);
        assert_relative_eq!(a.z(), b.z(), max_relative = 1e-12);
    }
}

#[test]
fn glb_conversion_writes_both_files() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "terrain.png", 4, 3, 200);
    let glb_path = dir.path().join("terrain.glb");

    let mesh = convert_image_to_glb(&ConvertConfig::default(), &input, &glb_path).unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.face_count(), 12);

    // GLB at the requested path, OBJ companion alongside it.
    let glb_bytes = std::fs::read(&glb_path).unwrap();
    assert_eq!(&glb_bytes[0..4], b"glTF");

    let obj_path = dir.path().join("terrain.obj");
    let companion = load_obj(&obj_path).unwrap();
    assert_eq!(companion.vertex_count(), 12);
}

#[test]
fn scales_flow_through_the_pipeline() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "scaled.png", 2, 1, 100);
    let output = dir.path().join("scaled.obj");

    let config = ConvertConfig {
        planar_scale: 3.0,
        height_scale: 0.5,
        ..ConvertConfig::default()
    };
    let mesh = convert_image_to_obj(&config, &input, &output).unwrap();

    // Second vertex: col 1 → x = -(1 * 3.0); value 100 → z = -(100 * 0.5).
    assert_relative_eq!(mesh.vertices[1].x(), -3.0);
    assert_relative_eq!(mesh.vertices[1].z(), -50.0);
}

#[test]
fn single_row_image_yields_no_faces() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "row.png", 5, 1, 10);
    let output = dir.path().join("row.obj");

    let mesh = convert_image_to_obj(&ConvertConfig::default(), &input, &output).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.face_count(), 0);

    let reloaded = load_obj(&output).unwrap();
    assert_eq!(reloaded.vertex_count(), 5);
    assert_eq!(reloaded.face_count(), 0);
}

#[test]
fn invalid_scale_fails_before_writing() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "ok.png", 3, 3, 50);
    let output = dir.path().join("rejected.obj");

    let config = ConvertConfig {
        height_scale: 0.0,
        ..ConvertConfig::default()
    };
    let result = convert_image_to_obj(&config, &input, &output);

    assert!(matches!(result, Err(ConvertError::Build(_))));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("never.obj");

    let result = convert_image_to_obj(
        &ConvertConfig::default(),
        dir.path().join("missing.png"),
        &output,
    );

    assert!(matches!(result, Err(ConvertError::Raster(_))));
    assert!(!output.exists());
}

#[test]
fn texture_parameter_is_accepted_but_unused() {
    let dir = tempdir().unwrap();
    let input = uniform_png(dir.path(), "tex.png", 2, 2, 30);
    let glb_path = dir.path().join("tex.glb");

    let config = ConvertConfig {
        texture: Some(dir.path().join("does-not-even-exist.png")),
        ..ConvertConfig::default()
    };
    let mesh = convert_image_to_glb(&config, &input, &glb_path).unwrap();
    assert_eq!(mesh.vertex_count(), 4);

    // No material/texture data in the GLB metadata.
    let bytes = std::fs::read(&glb_path).unwrap();
    let json_len = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]) as usize;
    let doc: serde_json::Value = serde_json::from_slice(&bytes[20..20 + json_len]).unwrap();
    assert!(doc.get("materials").is_none());
    assert!(doc.get("textures").is_none());
    assert!(doc["meshes"][0]["primitives"][0]["attributes"]
        .get("TEXCOORD_0")
        .is_none());
}
