//! Configuration loading orchestration for icongen.
//!
//! The configuration file is optional: when none of the default locations
//! exist, the caller gets `None` and runs with built-in defaults. An
//! explicitly requested file, on the other hand, must exist.

use std::path::{Path, PathBuf};

use config_core::Config;

/// The env var holding an explicit configuration file path.
pub const CONFIG_ENV_VAR: &str = "ICONGEN_CONFIG";

/// A path-annotated payload.
#[derive(Debug)]
pub struct Meta<T> {
    /// The actual payload.
    pub payload: T,

    /// The path.
    pub path: PathBuf,
}

/// Error returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration contents.
    #[error("failed to parse YAML config {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML parse error.
        #[source]
        source: YamlError,
    },
}

/// Read the first existing file out of `paths`.
///
/// Missing files are skipped; any other I/O error stops the search.
pub async fn read_first<P>(paths: &[P]) -> Result<Option<Meta<String>>, LoadError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path_ref = path.as_ref();
        match tokio::fs::read_to_string(path_ref).await {
            Ok(contents) => {
                return Ok(Some(Meta {
                    payload: contents,
                    path: path_ref.to_path_buf(),
                }));
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::trace!(path = %path_ref.display(), "config file not present");
                continue;
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: path_ref.to_path_buf(),
                    source,
                });
            }
        }
    }

    Ok(None)
}

/// Load the first existing configuration file out of `paths`, if any.
pub async fn load<P>(paths: &[P]) -> Result<Option<Meta<Config>>, LoadError>
where
    P: AsRef<Path>,
{
    let Some(Meta { payload, path }) = read_first(paths).await? else {
        return Ok(None);
    };

    let payload = match parse_str(&payload) {
        Ok(val) => val,
        Err(source) => return Err(LoadError::Parse { path, source }),
    };

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(Some(Meta { payload, path }))
}

/// Load configuration for a project, with an optional explicit path.
///
/// With an explicit path the file must exist; otherwise the default
/// locations are searched and a missing file yields `None`.
pub async fn with(
    env_path: Option<PathBuf>,
    project_root: &Path,
) -> Result<Option<Meta<Config>>, LoadError> {
    let explicit = env_path.is_some();
    let paths: Vec<PathBuf> = config_paths::resolve(env_path, project_root).collect();

    match load(&paths).await? {
        Some(meta) => Ok(Some(meta)),
        None if explicit => Err(LoadError::Read {
            path: paths.into_iter().next().unwrap_or_default(),
            source: std::io::ErrorKind::NotFound.into(),
        }),
        None => Ok(None),
    }
}

/// Load configuration using the standard icongen configuration loading
/// process, taking the explicit path from [`CONFIG_ENV_VAR`].
#[cfg(feature = "env")]
pub async fn with_default_env_var(
    project_root: &Path,
) -> Result<Option<Meta<Config>>, WithDefaultEnvVarError> {
    let env_path = envfury::maybe(CONFIG_ENV_VAR).map_err(WithDefaultEnvVarError::Env)?;
    with(env_path, project_root)
        .await
        .map_err(WithDefaultEnvVarError::Load)
}

/// Errors that can occur during configuration loading.
#[cfg(feature = "env")]
#[derive(Debug, thiserror::Error)]
pub enum WithDefaultEnvVarError {
    /// Env variable reading error.
    #[error("config path env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<<PathBuf as std::str::FromStr>::Err>>),

    /// Loading configuration error.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Parse configuration directly from a YAML string.
pub fn parse_str(contents: &str) -> Result<Config, YamlError> {
    serde_yaml_bw::from_str(contents)
}

/// A convenience type-alias for the YAML parser error type.
pub type YamlError = serde_yaml_bw::Error;
