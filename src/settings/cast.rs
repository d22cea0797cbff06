//! Cast specifications and the grammar used to apply them to raw strings.

use regex::Regex;
use std::collections::BTreeMap;

use super::error::CastError;
use super::value::{Pattern, SettingValue};

const TRUE_TOKENS: &[&str] = &["true", "on", "ok", "y", "yes", "1"];
const FALSE_TOKENS: &[&str] = &["false", "off", "n", "no", "0"];

/// Conversion of a single string into a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    Bool,
    Int,
    Str,
    Regex,
}

impl Cast {
    pub fn apply(self, raw: &str) -> Result<SettingValue, CastError> {
        match self {
            Cast::Bool => parse_bool(raw).map(SettingValue::Bool),
            Cast::Int => parse_int(raw).map(SettingValue::Int),
            Cast::Str => Ok(SettingValue::Str(raw.to_string())),
            Cast::Regex => parse_regex(raw).map(SettingValue::Regex),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Cast::Bool => "boolean",
            Cast::Int => "integer",
            Cast::Str => "string",
            Cast::Regex => "regex",
        }
    }
}

/// Shape of a setting: how the raw string is split before each piece is cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastSpec {
    /// The whole string.
    Scalar(Cast),
    /// Comma-separated list.
    List(Cast),
    /// Parenthesized, comma-separated group of exactly `arity` elements.
    Tuple(Cast, usize),
    /// `key=value,key2=value2` mapping of strings.
    Dict,
}

impl CastSpec {
    pub fn apply(self, raw: &str) -> Result<SettingValue, CastError> {
        match self {
            CastSpec::Scalar(cast) => cast.apply(raw),
            CastSpec::List(cast) => split_items(raw)
                .map(|item| cast.apply(item))
                .collect::<Result<Vec<_>, _>>()
                .map(SettingValue::List),
            CastSpec::Tuple(cast, arity) => {
                let inner = strip_parens(raw.trim());
                let items: Vec<&str> = split_items(inner).collect();
                if items.len() != arity {
                    return Err(CastError::TupleArity {
                        expected: arity,
                        found: items.len(),
                    });
                }
                items
                    .into_iter()
                    .map(|item| cast.apply(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(SettingValue::Tuple)
            }
            CastSpec::Dict => parse_dict(raw).map(SettingValue::Dict),
        }
    }

    /// Human-readable shape, e.g. "list of string" or "2-tuple of string".
    pub fn describe(self) -> String {
        match self {
            CastSpec::Scalar(cast) => cast.describe().to_string(),
            CastSpec::List(cast) => format!("list of {}", cast.describe()),
            CastSpec::Tuple(cast, arity) => format!("{}-tuple of {}", arity, cast.describe()),
            CastSpec::Dict => "dict of string to string".to_string(),
        }
    }
}

fn split_items(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').filter(|item| !item.is_empty())
}

fn strip_parens(s: &str) -> &str {
    let s = s.strip_prefix('(').unwrap_or(s);
    s.strip_suffix(')').unwrap_or(s)
}

pub(crate) fn parse_bool(raw: &str) -> Result<bool, CastError> {
    let token = raw.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        return Ok(true);
    }
    if FALSE_TOKENS.contains(&token.as_str()) {
        return Ok(false);
    }
    // Any other integer literal counts, non-zero being true
    token
        .parse::<i64>()
        .map(|n| n != 0)
        .map_err(|_| CastError::InvalidBool(raw.to_string()))
}

pub(crate) fn parse_int(raw: &str) -> Result<i64, CastError> {
    raw.trim()
        .parse()
        .map_err(|_| CastError::InvalidInt(raw.to_string()))
}

/// Patterns use the `regex` crate's syntax: no look-around, no backreferences.
fn parse_regex(raw: &str) -> Result<Pattern, CastError> {
    Regex::new(raw)
        .map(Pattern::new)
        .map_err(|e| CastError::InvalidRegex {
            pattern: raw.to_string(),
            message: e.to_string(),
        })
}

fn parse_dict(raw: &str) -> Result<BTreeMap<String, String>, CastError> {
    split_items(raw)
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| CastError::DictEntry(entry.to_string()))
        })
        .collect()
}
