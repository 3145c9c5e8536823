//! The conversion entry points.

use std::path::Path;

use relief_io::{save_glb, save_obj};
use relief_mesh::build_mesh;
use relief_raster::sample_image;
use relief_types::GridMesh;
use tracing::info;

use crate::config::ConvertConfig;
use crate::error::ConvertResult;

/// Convert an image into a heightmap mesh and write it as OBJ.
///
/// Runs the full pipeline (sample, build, export) and returns the built
/// mesh so callers can reuse the vertex and face arrays without re-parsing
/// the file.
///
/// # Errors
///
/// Propagates the stage errors unmodified; see
/// [`ConvertError`](crate::ConvertError). A failed conversion writes no
/// output file.
pub fn convert_image_to_obj<P, Q>(
    config: &ConvertConfig,
    image_path: P,
    obj_path: Q,
) -> ConvertResult<GridMesh>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let image_path = image_path.as_ref();
    let obj_path = obj_path.as_ref();

    let grid = sample_image(image_path)?;
    info!(
        input = %image_path.display(),
        width = grid.width(),
        height = grid.height(),
        "sampled height grid"
    );

    let mesh = build_mesh(&grid, &config.mesh_params())?;
    save_obj(&mesh, obj_path)?;
    info!(
        output = %obj_path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote OBJ"
    );

    Ok(mesh)
}

/// Convert an image into a heightmap mesh and write it as binary glTF.
///
/// Mirrors the historical calling contract: the OBJ companion file is
/// written alongside the GLB, at the GLB path with its extension swapped
/// to `.obj`, and the built mesh is returned.
///
/// # Errors
///
/// Propagates the stage errors unmodified; see
/// [`ConvertError`](crate::ConvertError).
pub fn convert_image_to_glb<P, Q>(
    config: &ConvertConfig,
    image_path: P,
    glb_path: Q,
) -> ConvertResult<GridMesh>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let glb_path = glb_path.as_ref();
    let obj_path = glb_path.with_extension("obj");

    let mesh = convert_image_to_obj(config, image_path, &obj_path)?;

    save_glb(&mesh, glb_path)?;
    info!(output = %glb_path.display(), "wrote GLB");

    Ok(mesh)
}
