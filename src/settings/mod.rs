//! Loading Django settings from environment variables.
//!
//! Each setting in the schema is read from a prefixed variable
//! (`DEBUG` from `DJANGO_DEBUG`), cast according to its spec, and kept only
//! if the variable was present. Unset settings are omitted rather than
//! defaulted, so the result can be merged over the framework's own defaults.

mod cast;
mod error;
mod schema;
mod source;
mod value;

pub use cast::{Cast, CastSpec};
pub use error::{CastError, ConfigError};
pub use schema::{DJANGO_SETTINGS, SettingSpec, lookup};
pub use source::{EnvFile, EnvSource, Layered, ProcessEnv};
pub use value::{Pattern, SettingValue};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Prefix prepended to every setting name to form its variable name.
pub const DEFAULT_PREFIX: &str = "DJANGO_";

/// Settings that were present in the environment, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<(&'static str, SettingValue)>,
}

impl Settings {
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SettingValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Resolves a schema against an environment.
#[derive(Debug, Clone)]
pub struct Loader {
    prefix: String,
    schema: &'static [SettingSpec],
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Loader for the Django schema with the `DJANGO_` prefix.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            schema: DJANGO_SETTINGS,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_schema(mut self, schema: &'static [SettingSpec]) -> Self {
        self.schema = schema;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn schema(&self) -> &'static [SettingSpec] {
        self.schema
    }

    /// Variable name a setting is read from.
    pub fn env_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Load settings from the process environment.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        self.load_from(&ProcessEnv)
    }

    /// Load settings from any environment snapshot.
    ///
    /// Fails on the first present variable whose value doesn't fit its cast.
    /// Variables outside the schema are never looked at.
    pub fn load_from<E: EnvSource + ?Sized>(&self, env: &E) -> Result<Settings, ConfigError> {
        let resolved = self
            .schema
            .iter()
            .map(|spec| -> Result<_, ConfigError> { Ok((spec.name, self.resolve(spec, env)?)) })
            .collect::<Result<Vec<_>, _>>()?;

        let entries = resolved
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect();

        Ok(Settings { entries })
    }

    /// `None` means the variable is not set, as opposed to set to something falsy.
    fn resolve<E: EnvSource + ?Sized>(
        &self,
        spec: &SettingSpec,
        env: &E,
    ) -> Result<Option<SettingValue>, ConfigError> {
        let var = self.env_key(spec.name);
        let Some(raw) = env.get(&var)? else {
            return Ok(None);
        };

        spec.cast
            .apply(&raw)
            .map(Some)
            .map_err(|reason| ConfigError::InvalidValue {
                var,
                expected: spec.cast.describe(),
                reason,
            })
    }
}

/// Load Django settings from `DJANGO_`-prefixed process environment variables.
pub fn load() -> Result<Settings, ConfigError> {
    Loader::new().load()
}

/// Load Django settings from `DJANGO_`-prefixed variables in `env`.
pub fn load_from<E: EnvSource + ?Sized>(env: &E) -> Result<Settings, ConfigError> {
    Loader::new().load_from(env)
}

#[cfg(test)]
mod tests;
