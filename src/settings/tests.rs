//! Tests for the settings loader.

use super::*;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strs(items: &[&str]) -> Vec<SettingValue> {
    items.iter().map(|s| SettingValue::from(*s)).collect()
}

// ==================== Presence and absence ====================

#[test]
fn test_load_empty_environment() {
    let settings = load_from(&env_of(&[])).unwrap();
    assert!(settings.is_empty());
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_debug() {
    let settings = load_from(&env_of(&[("DJANGO_DEBUG", "True")])).unwrap();

    assert_eq!(settings.len(), 1);
    assert_eq!(settings.get("DEBUG"), Some(&SettingValue::Bool(true)));
}

#[test]
fn test_load_falsy_value_is_present() {
    let settings = load_from(&env_of(&[("DJANGO_DEBUG", "False")])).unwrap();

    assert!(settings.contains("DEBUG"));
    assert_eq!(settings.get("DEBUG"), Some(&SettingValue::Bool(false)));
}

#[test]
fn test_load_empty_list_is_present() {
    let settings = load_from(&env_of(&[("DJANGO_ALLOWED_HOSTS", "")])).unwrap();
    assert_eq!(settings.get("ALLOWED_HOSTS"), Some(&SettingValue::List(vec![])));
}

#[test]
fn test_load_unset_settings_are_absent() {
    let settings = load_from(&env_of(&[("DJANGO_SECRET_KEY", "s3cret")])).unwrap();

    for spec in DJANGO_SETTINGS {
        if spec.name != "SECRET_KEY" {
            assert!(!settings.contains(spec.name), "{} should be absent", spec.name);
        }
    }
}

#[test]
fn test_load_ignores_unknown_variables() {
    let env = env_of(&[
        ("DJANGO_FOO", "not a setting"),
        ("DJANGO_DATABASES", "not configurable"),
        ("DEBUG", "true"),
    ]);
    let settings = load_from(&env).unwrap();
    assert!(settings.is_empty());
}

#[test]
fn test_load_keys_are_subset_of_schema() {
    let env = env_of(&[
        ("DJANGO_DEBUG", "1"),
        ("DJANGO_TIME_ZONE", "UTC"),
        ("DJANGO_FOO", "bar"),
    ]);
    let settings = load_from(&env).unwrap();
    for name in settings.names() {
        assert!(lookup(name).is_some(), "{name} is not in the schema");
    }
    assert_eq!(settings.len(), 2);
}

// ==================== Cast shapes ====================

#[test]
fn test_load_tuple() {
    let env = env_of(&[(
        "DJANGO_SECURE_PROXY_SSL_HEADER",
        "(HTTP_X_FORWARDED_PROTO,https)",
    )]);
    let settings = load_from(&env).unwrap();

    assert_eq!(settings.len(), 1);
    assert_eq!(
        settings.get("SECURE_PROXY_SSL_HEADER"),
        Some(&SettingValue::Tuple(strs(&["HTTP_X_FORWARDED_PROTO", "https"])))
    );
}

#[test]
fn test_load_list() {
    let settings = load_from(&env_of(&[("DJANGO_ALLOWED_HOSTS", "a.com,b.com")])).unwrap();

    assert_eq!(settings.len(), 1);
    assert_eq!(
        settings.get("ALLOWED_HOSTS"),
        Some(&SettingValue::List(strs(&["a.com", "b.com"])))
    );
}

#[test]
fn test_load_int_and_str() {
    let env = env_of(&[
        ("DJANGO_EMAIL_PORT", "587"),
        ("DJANGO_EMAIL_HOST", "smtp.example.com"),
    ]);
    let settings = load_from(&env).unwrap();

    assert_eq!(settings.get("EMAIL_PORT").and_then(|v| v.as_int()), Some(587));
    assert_eq!(
        settings.get("EMAIL_HOST").and_then(|v| v.as_str()),
        Some("smtp.example.com")
    );
}

#[test]
fn test_load_dict() {
    let env = env_of(&[("DJANGO_MIGRATION_MODULES", "app=app.migrations,blog=")]);
    let settings = load_from(&env).unwrap();

    let expected: BTreeMap<String, String> = [
        ("app".to_string(), "app.migrations".to_string()),
        ("blog".to_string(), String::new()),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        settings.get("MIGRATION_MODULES"),
        Some(&SettingValue::Dict(expected))
    );
}

#[test]
fn test_load_regex_list() {
    let env = env_of(&[("DJANGO_IGNORABLE_404_URLS", r"^/apple-touch-icon.*\.png$,^/favicon\.ico$")]);
    let settings = load_from(&env).unwrap();

    let patterns = settings.get("IGNORABLE_404_URLS").unwrap().as_slice().unwrap();
    assert_eq!(patterns.len(), 2);
    match &patterns[1] {
        SettingValue::Regex(p) => {
            assert!(p.is_match("/favicon.ico"));
            assert!(!p.is_match("/favicon_ico"));
        }
        other => panic!("expected regex, got {other:?}"),
    }
}

#[test]
fn test_iter_yields_names_with_values() {
    let env = env_of(&[("DJANGO_EMAIL_PORT", "25"), ("DJANGO_DEBUG", "off")]);
    let settings = load_from(&env).unwrap();

    let pairs: Vec<(&str, &SettingValue)> = settings.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("DEBUG", &SettingValue::Bool(false)),
            ("EMAIL_PORT", &SettingValue::Int(25)),
        ]
    );
}

#[test]
fn test_load_preserves_schema_order() {
    let env = env_of(&[
        ("DJANGO_SECURE_SSL_REDIRECT", "yes"),
        ("DJANGO_MIDDLEWARE", "a.B"),
        ("DJANGO_DEBUG", "no"),
    ]);
    let settings = load_from(&env).unwrap();
    let names: Vec<&str> = settings.names().collect();
    assert_eq!(names, vec!["DEBUG", "MIDDLEWARE", "SECURE_SSL_REDIRECT"]);
}

// ==================== Errors ====================

#[test]
fn test_load_invalid_bool() {
    let err = load_from(&env_of(&[("DJANGO_DEBUG", "maybe")])).unwrap_err();

    assert_eq!(err.var(), Some("DJANGO_DEBUG"));
    match err {
        ConfigError::InvalidValue {
            expected, reason, ..
        } => {
            assert_eq!(expected, "boolean");
            assert_eq!(reason, CastError::InvalidBool("maybe".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_invalid_bool_message() {
    let err = load_from(&env_of(&[("DJANGO_DEBUG", "maybe")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "DJANGO_DEBUG: expected boolean: invalid boolean token \"maybe\""
    );
}

#[test]
fn test_load_tuple_arity_error() {
    let env = env_of(&[("DJANGO_SECURE_PROXY_SSL_HEADER", "(HTTP_X_FORWARDED_PROTO)")]);
    let err = load_from(&env).unwrap_err();

    assert_eq!(err.var(), Some("DJANGO_SECURE_PROXY_SSL_HEADER"));
    assert!(err.to_string().contains("2-tuple of string"));
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            reason: CastError::TupleArity {
                expected: 2,
                found: 1
            },
            ..
        }
    ));
}

#[test]
fn test_load_invalid_int() {
    let err = load_from(&env_of(&[("DJANGO_EMAIL_PORT", "smtp")])).unwrap_err();
    assert_eq!(err.var(), Some("DJANGO_EMAIL_PORT"));
    assert!(err.to_string().contains("expected integer"));
}

#[test]
fn test_load_invalid_regex() {
    let err = load_from(&env_of(&[("DJANGO_DISALLOWED_USER_AGENTS", "[bad")])).unwrap_err();
    assert_eq!(err.var(), Some("DJANGO_DISALLOWED_USER_AGENTS"));
}

#[cfg(unix)]
#[test]
fn test_load_non_unicode_value() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    // Unique prefix so parallel tests don't see each other's variables
    let prefix = "DJANGO_ENV_SETTINGS_TEST_NOT_UNICODE_";
    let var = format!("{prefix}DEBUG");
    unsafe {
        env::set_var(&var, OsString::from_vec(vec![0x66, 0xff]));
    }

    let err = Loader::new().with_prefix(prefix).load().unwrap_err();

    unsafe {
        env::remove_var(&var);
    }
    assert!(matches!(err, ConfigError::NotUnicode { .. }));
    assert_eq!(err.var(), Some(var.as_str()));
    assert_eq!(err.to_string(), format!("{var}: value is not valid unicode"));
}

#[test]
fn test_load_fails_if_any_value_is_invalid() {
    let env = env_of(&[("DJANGO_DEBUG", "true"), ("DJANGO_EMAIL_PORT", "x")]);
    assert!(load_from(&env).is_err());
}

// ==================== Loader options ====================

#[test]
fn test_load_is_idempotent() {
    let env = env_of(&[
        ("DJANGO_DEBUG", "true"),
        ("DJANGO_ALLOWED_HOSTS", "a.com,b.com"),
        ("DJANGO_IGNORABLE_404_URLS", r"^/x$"),
    ]);
    let first = load_from(&env).unwrap();
    let second = load_from(&env).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_prefix() {
    let env = env_of(&[("APP_DEBUG", "true"), ("DJANGO_TIME_ZONE", "UTC")]);
    let loader = Loader::new().with_prefix("APP_");

    assert_eq!(loader.env_key("DEBUG"), "APP_DEBUG");
    let settings = loader.load_from(&env).unwrap();
    assert_eq!(settings.len(), 1);
    assert!(settings.contains("DEBUG"));
}

static TINY_SCHEMA: &[SettingSpec] = &[SettingSpec {
    name: "PORT",
    cast: CastSpec::Scalar(Cast::Int),
}];

#[test]
fn test_custom_schema() {
    let env = env_of(&[("DJANGO_PORT", "8000"), ("DJANGO_DEBUG", "true")]);
    let settings = Loader::new().with_schema(TINY_SCHEMA).load_from(&env).unwrap();

    assert_eq!(settings.len(), 1);
    assert_eq!(settings.get("PORT"), Some(&SettingValue::Int(8000)));
}

#[test]
fn test_load_from_process_env() {
    // Unique prefix so parallel tests don't see each other's variables
    let prefix = "DJANGO_ENV_SETTINGS_TEST_PROCESS_";
    unsafe {
        env::set_var(format!("{prefix}DEBUG"), "on");
        env::set_var(format!("{prefix}ALLOWED_HOSTS"), "example.com");
    }

    let settings = Loader::new().with_prefix(prefix).load().unwrap();
    assert_eq!(settings.len(), 2);
    assert_eq!(settings.get("DEBUG"), Some(&SettingValue::Bool(true)));
    assert_eq!(
        settings.get("ALLOWED_HOSTS"),
        Some(&SettingValue::List(strs(&["example.com"])))
    );

    unsafe {
        env::remove_var(format!("{prefix}DEBUG"));
        env::remove_var(format!("{prefix}ALLOWED_HOSTS"));
    }
}

#[test]
fn test_load_from_env_file_over_map() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "DJANGO_DEBUG=false").unwrap();
    writeln!(file, "DJANGO_SECURE_PROXY_SSL_HEADER=(HTTP_X_FORWARDED_PROTO,https)").unwrap();

    let file_env = EnvFile::from_path(file.path()).unwrap();
    let base = env_of(&[("DJANGO_DEBUG", "true"), ("DJANGO_TIME_ZONE", "UTC")]);
    let settings = load_from(&Layered::new(&file_env, &base)).unwrap();

    assert_eq!(settings.len(), 3);
    assert_eq!(settings.get("DEBUG"), Some(&SettingValue::Bool(false)));
    assert_eq!(settings.get("TIME_ZONE"), Some(&SettingValue::from("UTC")));
}

// ==================== Serialization ====================

#[test]
fn test_serialize_json() {
    let env = env_of(&[
        ("DJANGO_DEBUG", "true"),
        ("DJANGO_SECURE_PROXY_SSL_HEADER", "(HTTP_X_FORWARDED_PROTO,https)"),
        ("DJANGO_IGNORABLE_404_URLS", r"^/robots\.txt$"),
        ("DJANGO_MIGRATION_MODULES", "app=app.mig"),
    ]);
    let settings = load_from(&env).unwrap();
    let json = serde_json::to_value(&settings).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "DEBUG": true,
            "IGNORABLE_404_URLS": [r"^/robots\.txt$"],
            "SECURE_PROXY_SSL_HEADER": ["HTTP_X_FORWARDED_PROTO", "https"],
            "MIGRATION_MODULES": {"app": "app.mig"},
        })
    );
}

#[test]
fn test_serialize_json_keeps_schema_order() {
    let env = env_of(&[("DJANGO_SECURE_SSL_REDIRECT", "1"), ("DJANGO_DEBUG", "1")]);
    let settings = load_from(&env).unwrap();
    let text = serde_json::to_string(&settings).unwrap();
    assert_eq!(text, r#"{"DEBUG":true,"SECURE_SSL_REDIRECT":true}"#);
}

#[test]
fn test_serialize_yaml() {
    let settings = load_from(&env_of(&[("DJANGO_ALLOWED_HOSTS", "a.com,b.com")])).unwrap();
    let yaml = serde_yaml::to_string(&settings).unwrap();
    assert_eq!(yaml, "ALLOWED_HOSTS:\n- a.com\n- b.com\n");
}
