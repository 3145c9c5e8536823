//! Command-line driver for the image-to-mesh converter.
//!
//! Thin glue over `relief-convert`: parse arguments, pick the output
//! format from the extension, run one conversion, report the result.
//!
//! ```text
//! relief terrain.png terrain.glb --scale 0.5 --height-scale 0.1
//! relief logo.png logo.obj --preview logo-preview.png
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use relief_convert::{convert_image_to_glb, convert_image_to_obj, ConvertConfig, ConvertError};
use relief_io::MeshFormat;
use relief_preview::{save_preview, PreviewOptions};
use tracing_subscriber::EnvFilter;

/// Convert a grayscale image into a 3D heightmap mesh.
#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Convert a grayscale image into a 3D heightmap mesh", long_about = None)]
#[command(version)]
struct Cli {
    /// Input raster image (PNG, JPEG, BMP, TIFF).
    input: PathBuf,

    /// Output mesh path; format chosen by extension (.obj or .glb).
    /// A .glb output also writes the companion .obj alongside it.
    output: PathBuf,

    /// World units per pixel in the X/Y plane.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// World units per luminance step.
    #[arg(long, default_value_t = 1.0)]
    height_scale: f64,

    /// Texture path, accepted for compatibility with older callers.
    /// No texture data is embedded in the output.
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Also render a shaded preview PNG of the mesh to this path.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let Some(format) = MeshFormat::from_path(&cli.output) else {
        bail!(
            "cannot infer mesh format from '{}': use a .obj or .glb extension",
            cli.output.display()
        );
    };

    let config = ConvertConfig {
        planar_scale: cli.scale,
        height_scale: cli.height_scale,
        texture: cli.texture,
    };

    let result = match format {
        MeshFormat::Obj => convert_image_to_obj(&config, &cli.input, &cli.output),
        MeshFormat::Glb => convert_image_to_glb(&config, &cli.input, &cli.output),
    };

    // Each error kind maps to its own message; conversion errors are never
    // passed through as opaque strings.
    let mesh = match result {
        Ok(mesh) => mesh,
        Err(ConvertError::Raster(e)) => {
            bail!("failed to read '{}': {e}", cli.input.display())
        }
        Err(ConvertError::Build(e)) => bail!("invalid parameters: {e}"),
        Err(ConvertError::Export(e)) => {
            bail!("failed to write '{}': {e}", cli.output.display())
        }
    };

    println!(
        "{}: {} vertices, {} faces",
        cli.output.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );

    if let Some(preview_path) = cli.preview {
        save_preview(&mesh, &PreviewOptions::default(), &preview_path)
            .with_context(|| format!("failed to render preview '{}'", preview_path.display()))?;
        println!("preview: {}", preview_path.display());
    }

    Ok(())
}
