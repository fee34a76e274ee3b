//! Generate the desktop application icon set.

/// Environment variable overriding the project root.
const PROJECT_ROOT_ENV_VAR: &str = "ICONGEN_PROJECT_ROOT";

/// Environment variable overriding the output directory.
const OUTPUT_DIR_ENV_VAR: &str = "ICONGEN_OUTPUT_DIR";

/// Environment variable overriding the icon set, e.g. `32,128,128@2x`.
///
/// Entries are taken literally, so `256` yields `256x256.png` rather than
/// `128x128@2x.png`.
const VARIANTS_ENV_VAR: &str = "ICONGEN_VARIANTS";

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let project_root = match envfury::maybe::<std::path::PathBuf>(PROJECT_ROOT_ENV_VAR)? {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let config = match config_load::with_default_env_var(&project_root).await? {
        Some(meta) => {
            tracing::info!(path = %meta.path.display(), "using config file");
            meta.payload
        }
        None => Default::default(),
    };

    let output_dir = match envfury::maybe::<std::path::PathBuf>(OUTPUT_DIR_ENV_VAR)? {
        Some(dir) => project_root.join(dir),
        None => config.output_dir(&project_root),
    };

    let variants = match envfury::maybe::<String>(VARIANTS_ENV_VAR)? {
        Some(list) => icon_variant::parse_list(&list)?,
        None => config.icon_set()?,
    };

    for variant in variants.iter().filter(|v| v.is_bare_legacy_double_resolution()) {
        tracing::warn!(
            icon = %variant,
            "bare 256 is written as {}; use 128@2x for the double-resolution icon",
            variant.file_name()
        );
    }

    let generated = icon_generate::generate(icon_generate::Params {
        variants,
        palette: config.palette(),
        output_dir: output_dir.clone(),
    })?;

    for entry in &generated {
        let size = entry.variant.pixel_size();
        println!("{} ({size}x{size})", entry.path.display());
    }
    println!(
        "Generated {} PNG icon(s) in {}",
        generated.len(),
        output_dir.display()
    );

    Ok(())
}
