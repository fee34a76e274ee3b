//! Dev-server and bundler options for the desktop shell's web frontend.
//!
//! The options are computed from the environment variables the desktop
//! shell's build pipeline sets, and serialized as the JSON object the
//! external build tool consumes. Nothing here runs a server.

/// Environment variable naming the target platform.
pub const PLATFORM_ENV_VAR: &str = "TAURI_PLATFORM";

/// Environment variable that, when set, marks a debug build.
pub const DEBUG_ENV_VAR: &str = "TAURI_DEBUG";

/// Environment variable naming the host the dev server is reached on, set
/// when developing against a device on the network.
pub const DEV_HOST_ENV_VAR: &str = "TAURI_DEV_HOST";

/// Port of the hot-reload websocket when a dev host is set.
pub const HMR_PORT: u16 = 1421;

/// Environment variable overriding the dev-server port.
pub const PORT_ENV_VAR: &str = "BUILD_OPTIONS_PORT";

/// Build target for the Chromium-based Windows webview.
pub const WINDOWS_TARGET: &str = "chrome105";

/// Build target for the WebKit-based macOS and Linux webviews.
pub const WEBKIT_TARGET: &str = "safari13";

/// The build environment the options are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    /// Target platform, e.g. `windows`.
    pub platform: Option<String>,

    /// Whether this is a debug build.
    pub debug: bool,

    /// Dev-server port override.
    pub port: Option<u16>,

    /// Host the dev server is reached on, if not localhost.
    pub dev_host: Option<String>,
}

/// Which dev-server setup to produce options for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Dev server driven by the desktop shell.
    #[default]
    Tauri,

    /// Dev server run on its own, in a browser.
    Standalone,
}

impl Profile {
    /// The default dev-server port.
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Tauri => 1420,
            Self::Standalone => 5173,
        }
    }
}

/// Error returned while parsing a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile {0:?}, expected \"tauri\" or \"standalone\"")]
pub struct ParseProfileError(String);

impl core::str::FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tauri" => Ok(Self::Tauri),
            "standalone" => Ok(Self::Standalone),
            other => Err(ParseProfileError(other.to_owned())),
        }
    }
}

/// The option object passed to the build tool.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Keep the shell's own output visible.
    pub clear_screen: bool,

    /// Prefixes of environment variables exposed to the frontend.
    pub env_prefix: Vec<String>,

    /// Dev-server settings.
    pub server: ServerOptions,

    /// Production build settings.
    pub build: BundleOptions,
}

/// Dev-server settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    /// TCP port.
    pub port: u16,

    /// Fail instead of picking another port when busy.
    pub strict_port: bool,

    /// File watcher settings.
    pub watch: WatchOptions,

    /// Hot-reload transport; the build tool's default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmr: Option<HmrOptions>,
}

/// Hot-reload transport settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HmrOptions {
    /// Websocket protocol, `ws`.
    pub protocol: String,

    /// Host the client connects to.
    pub host: String,

    /// Websocket port.
    pub port: u16,
}

/// File watcher settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WatchOptions {
    /// Glob patterns excluded from watching.
    pub ignored: Vec<String>,
}

/// Production build settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BundleOptions {
    /// JS engine target.
    pub target: String,

    /// Minifier to use, if any.
    pub minify: Minify,

    /// Whether to emit sourcemaps.
    pub sourcemap: bool,
}

/// Minification setting: a minifier name, or `false` to disable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Minify {
    /// Minify with the named tool.
    With(String),

    /// Plain on/off switch; `false` disables minification.
    Toggle(bool),
}

impl BuildOptions {
    /// Derive the options for a profile from the build environment.
    pub fn new(profile: Profile, env: &Env) -> Self {
        let target = match env.platform.as_deref() {
            Some("windows") => WINDOWS_TARGET,
            _ => WEBKIT_TARGET,
        };

        let minify = if env.debug {
            Minify::Toggle(false)
        } else {
            Minify::With("esbuild".to_owned())
        };

        let hmr = env.dev_host.as_ref().map(|host| HmrOptions {
            protocol: "ws".to_owned(),
            host: host.clone(),
            port: HMR_PORT,
        });

        Self {
            clear_screen: false,
            env_prefix: vec!["VITE_".to_owned(), "TAURI_".to_owned()],
            server: ServerOptions {
                port: env.port.unwrap_or(profile.default_port()),
                strict_port: true,
                watch: WatchOptions {
                    ignored: vec!["**/src-tauri/**".to_owned()],
                },
                hmr,
            },
            build: BundleOptions {
                target: target.to_owned(),
                minify,
                sourcemap: env.debug,
            },
        }
    }
}

/// Errors returned while reading the build environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The platform variable could not be read.
    #[error("TAURI_PLATFORM: {0}")]
    Platform(#[source] envfury::Error<envfury::ValueError<core::convert::Infallible>>),

    /// The debug variable could not be read.
    #[error("TAURI_DEBUG: {0}")]
    Debug(#[source] envfury::Error<envfury::ValueError<core::convert::Infallible>>),

    /// The dev host variable could not be read.
    #[error("TAURI_DEV_HOST: {0}")]
    DevHost(#[source] envfury::Error<envfury::ValueError<core::convert::Infallible>>),

    /// The port variable could not be read or parsed.
    #[error("BUILD_OPTIONS_PORT: {0}")]
    Port(#[source] envfury::Error<envfury::ValueError<core::num::ParseIntError>>),
}

impl Env {
    /// Read the build environment from the process environment.
    ///
    /// Any value of [`DEBUG_ENV_VAR`], even an empty one, marks a debug build.
    pub fn from_process() -> Result<Self, EnvError> {
        let platform: Option<String> =
            envfury::maybe(PLATFORM_ENV_VAR).map_err(EnvError::Platform)?;
        let debug: Option<String> = envfury::maybe(DEBUG_ENV_VAR).map_err(EnvError::Debug)?;
        let port: Option<u16> = envfury::maybe(PORT_ENV_VAR).map_err(EnvError::Port)?;
        let dev_host: Option<String> =
            envfury::maybe(DEV_HOST_ENV_VAR).map_err(EnvError::DevHost)?;

        Ok(Self {
            platform,
            debug: debug.is_some(),
            port,
            dev_host: dev_host.filter(|host| !host.is_empty()),
        })
    }
}
