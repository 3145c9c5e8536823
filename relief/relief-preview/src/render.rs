//! Orthographic top-view rasterizer.

// Screen-space math mixes pixel indices and world floats
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]

use std::path::Path;

use image::{Rgb, RgbImage};
use nalgebra::{Point3, Vector3};
use relief_types::GridMesh;

use crate::error::{PreviewError, PreviewResult};

/// Options for preview rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Background color.
    pub background: [u8; 3],
}

impl Default for PreviewOptions {
    /// 800x600 on a dark background.
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: [24, 24, 28],
        }
    }
}

/// Margin around the mesh footprint, in pixels.
const MARGIN: f64 = 16.0;

/// Light direction for Lambert shading (towards the viewer, tilted).
fn light_dir() -> Vector3<f64> {
    Vector3::new(-0.45, -0.35, 0.82).normalize()
}

/// Render an orthographic, shaded top view of a mesh.
///
/// The mesh footprint (X/Y extent) is fitted to the image with a fixed
/// margin; depth resolution uses the vertex Z values, nearest-to-viewer
/// wins.
///
/// # Errors
///
/// Returns [`PreviewError::EmptyMesh`] when the mesh has no faces.
pub fn render_preview(mesh: &GridMesh, options: &PreviewOptions) -> PreviewResult<RgbImage> {
    if mesh.faces.is_empty() {
        return Err(PreviewError::EmptyMesh);
    }

    let width = options.width.max(1);
    let height = options.height.max(1);
    let mut img = RgbImage::from_pixel(width, height, Rgb(options.background));
    let mut depth = vec![f64::INFINITY; (width * height) as usize];

    let bounds = mesh.bounds();
    let size = bounds.size();

    // Uniform fit: the larger footprint axis fills the image minus margins.
    let avail_x = f64::from(width) - 2.0 * MARGIN;
    let avail_y = f64::from(height) - 2.0 * MARGIN;
    let scale = (avail_x / size.x.max(f64::EPSILON))
        .min(avail_y / size.y.max(f64::EPSILON))
        .max(f64::EPSILON);
    let offset_x = (f64::from(width) - size.x * scale) / 2.0;
    let offset_y = (f64::from(height) - size.y * scale) / 2.0;

    let project = |p: &Point3<f64>| {
        (
            (p.x - bounds.min.x) * scale + offset_x,
            (p.y - bounds.min.y) * scale + offset_y,
        )
    };

    let light = light_dir();

    for face in &mesh.faces {
        let a = &mesh.vertices[face[0] as usize].position;
        let b = &mesh.vertices[face[1] as usize].position;
        let c = &mesh.vertices[face[2] as usize].position;

        let normal = (b - a).cross(&(c - a));
        let len = normal.norm();
        if len <= f64::EPSILON {
            continue;
        }
        // Orientation-agnostic shading: either side of the surface lights up.
        let intensity = (normal / len).dot(&light).abs();
        let shade = (40.0 + 215.0 * intensity) as u8;
        let color = Rgb([shade, shade, shade]);

        fill_triangle(
            &mut img,
            &mut depth,
            [project(a), project(b), project(c)],
            [a.z, b.z, c.z],
            color,
        );
    }

    Ok(img)
}

/// Render a preview and write it to disk (format from extension, PNG for
/// the usual `.png`).
///
/// # Errors
///
/// Returns [`PreviewError::EmptyMesh`] for faceless meshes and encoding
/// or I/O errors from the image writer.
pub fn save_preview<P: AsRef<Path>>(
    mesh: &GridMesh,
    options: &PreviewOptions,
    path: P,
) -> PreviewResult<()> {
    let img = render_preview(mesh, options)?;
    img.save(path)?;
    Ok(())
}

/// Fill a screen-space triangle with a depth test.
///
/// Smaller Z is closer to the viewer: the generated meshes negate
/// elevation, so peaks have the most negative Z.
fn fill_triangle(
    img: &mut RgbImage,
    depth: &mut [f64],
    corners: [(f64, f64); 3],
    z: [f64; 3],
    color: Rgb<u8>,
) {
    let [(ax, ay), (bx, by), (cx, cy)] = corners;

    let area = edge(ax, ay, bx, by, cx, cy);
    if area.abs() <= f64::EPSILON {
        return;
    }

    let min_x = ax.min(bx).min(cx).floor().max(0.0) as u32;
    let min_y = ay.min(by).min(cy).floor().max(0.0) as u32;
    let max_x = (ax.max(bx).max(cx).ceil() as u32).min(img.width().saturating_sub(1));
    let max_y = (ay.max(by).max(cy).ceil() as u32).min(img.height().saturating_sub(1));

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let x = f64::from(px) + 0.5;
            let y = f64::from(py) + 0.5;

            // Barycentric coordinates via edge functions.
            let w0 = edge(bx, by, cx, cy, x, y) / area;
            let w1 = edge(cx, cy, ax, ay, x, y) / area;
            let w2 = edge(ax, ay, bx, by, x, y) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let pz = w0 * z[0] + w1 * z[1] + w2 * z[2];
            let idx = (py * img.width() + px) as usize;
            if pz < depth[idx] {
                depth[idx] = pz;
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Signed parallelogram area of the edge `(x0,y0)→(x1,y1)` vs point `(px,py)`.
#[inline]
fn edge(x0: f64, y0: f64, x1: f64, y1: f64, px: f64, py: f64) -> f64 {
    (x1 - x0) * (py - y0) - (y1 - y0) * (px - x0)
}
