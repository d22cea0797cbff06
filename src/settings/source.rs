//! Read-only environment snapshots the loader can draw values from.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::path::Path;

use super::error::ConfigError;

/// A read-only key/value view of environment variables.
pub trait EnvSource {
    /// Returns `Ok(None)` when the variable is not set.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(key)
    }
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                var: key.to_string(),
            }),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(HashMap::get(self, key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(BTreeMap::get(self, key).cloned())
    }
}

/// Variables parsed from a dotenv file, without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: BTreeMap<String, String>,
}

impl EnvFile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path.as_ref())?.collect::<Result<_, _>>()?;
        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for EnvFile {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.vars.get(key).cloned())
    }
}

/// Two sources stacked: `top` wins, `base` answers whatever `top` lacks.
#[derive(Debug, Clone)]
pub struct Layered<T, B> {
    top: T,
    base: B,
}

impl<T: EnvSource, B: EnvSource> Layered<T, B> {
    pub fn new(top: T, base: B) -> Self {
        Self { top, base }
    }
}

impl<T: EnvSource, B: EnvSource> EnvSource for Layered<T, B> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.top.get(key)? {
            Some(value) => Ok(Some(value)),
            None => self.base.get(key),
        }
    }
}
