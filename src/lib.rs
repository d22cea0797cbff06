//! Django settings from environment variables.
//!
//! ```no_run
//! let settings = django_env_settings::load()?;
//! if let Some(debug) = settings.get("DEBUG").and_then(|v| v.as_bool()) {
//!     println!("DEBUG = {debug}");
//! }
//! # Ok::<(), django_env_settings::ConfigError>(())
//! ```

pub mod settings;

pub use settings::{
    Cast, CastError, CastSpec, ConfigError, DEFAULT_PREFIX, DJANGO_SETTINGS, EnvFile, EnvSource,
    Layered, Loader, Pattern, ProcessEnv, SettingSpec, SettingValue, Settings, load, load_from,
    lookup,
};
