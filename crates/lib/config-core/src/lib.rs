//! Shared configuration types for icongen.

use std::path::{Path, PathBuf};

use icon_render::Rgb;
use icon_variant::Variant;

/// Output directory used when the configuration does not set one, relative
/// to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "src-tauri/icons";

/// Root configuration.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory to write icons to; relative paths resolve against the
    /// project root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub output_dir: Option<PathBuf>,

    /// Icons to produce, e.g. `["32", "128", "128@2x"]`.
    ///
    /// Entries are taken literally: `"256"` is written as `256x256.png`. Use
    /// `"128@2x"` for the double-resolution icon, or `sizes`, where `256`
    /// stands for `128@2x`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Option<Vec<Variant>>,

    /// Icons to produce as a plain size list, where `256` stands for
    /// `128@2x`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sizes: Option<Vec<u32>>,

    /// Color overrides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette: PaletteConfig,
}

/// Color overrides for the emblem.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Background fill, `#RRGGBB`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub background: Option<Rgb>,

    /// Ring and dot color, `#RRGGBB`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accent: Option<Rgb>,
}

/// Errors returned while resolving the icon set.
#[derive(Debug, thiserror::Error)]
pub enum IconSetError {
    /// Both `variants` and `sizes` are set.
    #[error("config sets both `variants` and `sizes`; use one")]
    Conflict,

    /// A legacy size is invalid.
    #[error("sizes: {0}")]
    Size(#[source] icon_variant::VariantError),
}

impl Config {
    /// The icons to produce, falling back to the default set.
    pub fn icon_set(&self) -> Result<Vec<Variant>, IconSetError> {
        match (&self.variants, &self.sizes) {
            (Some(_), Some(_)) => Err(IconSetError::Conflict),
            (Some(variants), None) => Ok(variants.clone()),
            (None, Some(sizes)) => {
                icon_variant::from_legacy_sizes(sizes).map_err(IconSetError::Size)
            }
            (None, None) => Ok(icon_variant::default_set()),
        }
    }

    /// The output directory, resolved against the project root.
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        let dir = self
            .output_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
        project_root.join(dir)
    }

    /// The palette, with defaults for unset colors.
    pub fn palette(&self) -> icon_render::Palette {
        let defaults = icon_render::Palette::default();
        icon_render::Palette {
            background: self.palette.background.unwrap_or(defaults.background),
            accent: self.palette.accent.unwrap_or(defaults.accent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::default();

        assert_eq!(config.icon_set().unwrap(), icon_variant::default_set());
        assert_eq!(
            config.output_dir(Path::new("/project")),
            Path::new("/project/src-tauri/icons")
        );
        assert_eq!(config.palette(), icon_render::Palette::default());
    }

    #[test]
    fn absolute_output_dir_wins() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/icons")),
            ..Default::default()
        };
        assert_eq!(
            config.output_dir(Path::new("/project")),
            Path::new("/tmp/icons")
        );
    }

    #[test]
    fn variants_and_sizes_conflict() {
        let config = Config {
            variants: Some(icon_variant::default_set()),
            sizes: Some(vec![32]),
            ..Default::default()
        };
        assert!(matches!(config.icon_set(), Err(IconSetError::Conflict)));
    }

    #[test]
    fn legacy_sizes_are_mapped() {
        let config = Config {
            sizes: Some(vec![32, 128, 256]),
            ..Default::default()
        };
        assert_eq!(config.icon_set().unwrap(), icon_variant::default_set());
    }
}
