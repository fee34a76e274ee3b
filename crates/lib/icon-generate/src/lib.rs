//! Batch generation of emblem icon PNG files.

use std::path::{Path, PathBuf};

use icon_variant::Variant;

mod encode;

pub use encode::{EncodeError, encode_png};

/// Parameters for a generation run.
#[derive(Debug, Clone)]
pub struct Params {
    /// Icons to produce, in order.
    pub variants: Vec<Variant>,

    /// Colors to paint with.
    pub palette: icon_render::Palette,

    /// Directory to write the icons to; created if missing.
    pub output_dir: PathBuf,
}

/// A written icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The variant that was rendered.
    pub variant: Variant,

    /// Where the PNG was written.
    pub path: PathBuf,

    /// Encoded size, in bytes.
    pub bytes: usize,
}

/// Errors returned while generating icons.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No icons were requested.
    #[error("no icon sizes requested")]
    EmptySet,

    /// A requested size is invalid.
    #[error(transparent)]
    Variant(#[from] icon_variant::VariantError),

    /// Failed to create the output directory.
    #[error("failed to create icon directory {path}: {source}")]
    CreateDir {
        /// The directory.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the rendered image.
    #[error("failed to encode {file_name}: {source}")]
    Encode {
        /// The file being produced.
        file_name: String,

        /// Underlying encoder error.
        #[source]
        source: EncodeError,
    },

    /// Failed to write an icon file.
    #[error("failed to write icon {path}: {source}")]
    Write {
        /// The icon file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Render and write the default-palette emblem for each size in a plain size
/// list.
///
/// Sizes are interpreted with [`Variant::from_legacy_size`], so `256` is
/// written as `128x128@2x.png`.
pub fn generate_icons(
    sizes: &[u32],
    output_dir: impl AsRef<Path>,
) -> Result<Vec<Generated>, GenerateError> {
    let variants = icon_variant::from_legacy_sizes(sizes)?;
    generate(Params {
        variants,
        palette: Default::default(),
        output_dir: output_dir.as_ref().to_path_buf(),
    })
}

/// Render and write every requested icon.
///
/// Variants are written in order, so a later variant that maps to the same
/// file name overwrites an earlier one. The run stops at the first error;
/// files written before it are left in place.
pub fn generate(params: Params) -> Result<Vec<Generated>, GenerateError> {
    let Params {
        variants,
        palette,
        output_dir,
    } = params;

    if variants.is_empty() {
        return Err(GenerateError::EmptySet);
    }

    std::fs::create_dir_all(&output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.clone(),
        source,
    })?;

    let mut generated = Vec::with_capacity(variants.len());
    for variant in variants {
        let entry = write_variant(variant, &palette, &output_dir)?;
        tracing::info!(
            icon = %variant,
            file = %entry.path.display(),
            bytes = entry.bytes,
            "wrote icon"
        );
        generated.push(entry);
    }

    tracing::info!(
        count = generated.len(),
        dir = %output_dir.display(),
        "generated icons"
    );

    Ok(generated)
}

/// Render, encode and write a single variant.
fn write_variant(
    variant: Variant,
    palette: &icon_render::Palette,
    output_dir: &Path,
) -> Result<Generated, GenerateError> {
    let size = variant.pixel_size();
    let file_name = variant.file_name();

    tracing::debug!(icon = %variant, size, "rendering icon");
    let pixels = icon_render::render_rgba(size, palette);

    let png = encode_png(pixels, size).map_err(|source| GenerateError::Encode {
        file_name: file_name.clone(),
        source,
    })?;

    let path = output_dir.join(&file_name);
    std::fs::write(&path, &png).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(Generated {
        variant,
        path,
        bytes: png.len(),
    })
}
