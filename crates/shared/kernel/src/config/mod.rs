use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENV_PREFIX: &str = "SEVA";

#[seva_derive::seva_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with environment overrides.
///
/// 1. **Base file**: `path` (extension optional, any format the `config` crate knows);
///    defaults to `seva` in the working directory. A missing file is not an error, so a
///    binary can run on defaults plus environment alone.
/// 2. **Environment**: variables prefixed with `SEVA__`, nested with double underscores
///    (`SEVA__API__BASE_URL` maps to `api.base_url`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or the merged values do not
/// match `T`.
///
/// # Example
/// ```rust
/// use seva_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    layered(path, environment())
}

/// Like [`load_config`], reading overrides from `vars` instead of the process environment.
///
/// # Errors
/// As for [`load_config`].
pub fn load_config_with_vars<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    layered(path, environment().source(Some(vars.into_iter().collect())))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn layered<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("seva"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
