//! The Django setting schema.
//!
//! Rows follow `django.conf.global_settings`, with the same headings and
//! order, so the table can be diffed against upstream. Settings that cannot
//! be expressed as a flat string (nested dicts, callables, lists of tuples)
//! are listed in comments but not configurable.

use super::cast::{Cast, CastSpec};

/// One row of the schema: a setting name and how to cast its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub name: &'static str,
    pub cast: CastSpec,
}

const fn setting(name: &'static str, cast: CastSpec) -> SettingSpec {
    SettingSpec { name, cast }
}

const BOOL: CastSpec = CastSpec::Scalar(Cast::Bool);
const INT: CastSpec = CastSpec::Scalar(Cast::Int);
const STR: CastSpec = CastSpec::Scalar(Cast::Str);
const LIST: CastSpec = CastSpec::List(Cast::Str);
const REGEX_LIST: CastSpec = CastSpec::List(Cast::Regex);
const PAIR: CastSpec = CastSpec::Tuple(Cast::Str, 2);
const DICT: CastSpec = CastSpec::Dict;

/// All settings configurable from the environment.
pub static DJANGO_SETTINGS: &[SettingSpec] = &[
    // ==================== Core ====================
    setting("DEBUG", BOOL),
    setting("DEBUG_PROPAGATE_EXCEPTIONS", BOOL),
    setting("USE_ETAGS", BOOL),
    // ADMINS: list of (name, email) tuples
    setting("INTERNAL_IPS", LIST),
    setting("ALLOWED_HOSTS", LIST),
    setting("TIME_ZONE", STR),
    setting("USE_TZ", BOOL),
    setting("LANGUAGE_CODE", STR),
    // LANGUAGES: list of tuples
    setting("LANGUAGES_BIDI", LIST),
    setting("USE_I18N", BOOL),
    setting("LOCALE_PATHS", LIST),
    setting("LANGUAGE_COOKIE_NAME", STR),
    setting("LANGUAGE_COOKIE_AGE", INT),
    setting("LANGUAGE_COOKIE_DOMAIN", STR),
    setting("LANGUAGE_COOKIE_PATH", LIST),
    setting("USE_L10N", BOOL),
    // MANAGERS: same shape as ADMINS
    setting("DEFAULT_CONTENT_TYPE", STR),
    setting("DEFAULT_CHARSET", STR),
    setting("FILE_CHARSET", STR),
    setting("SERVER_EMAIL", STR),
    // DATABASES: nested dict
    setting("DATABASE_ROUTERS", LIST),
    setting("EMAIL_BACKEND", STR),
    setting("EMAIL_HOST", STR),
    setting("EMAIL_PORT", INT),
    setting("EMAIL_USE_LOCALTIME", BOOL),
    setting("EMAIL_HOST_USER", STR),
    setting("EMAIL_HOST_PASSWORD", STR),
    setting("EMAIL_USE_TLS", BOOL),
    setting("EMAIL_USE_SSL", BOOL),
    setting("EMAIL_SSL_CERTFILE", STR),
    setting("EMAIL_SSL_KEYFILE", STR),
    setting("EMAIL_TIMEOUT", INT),
    setting("INSTALLED_APPS", LIST),
    // TEMPLATES: nested dict
    setting("FORM_RENDERER", STR),
    setting("DEFAULT_FROM_EMAIL", STR),
    setting("EMAIL_SUBJECT_PREFIX", STR),
    setting("APPEND_SLASH", BOOL),
    setting("PREPEND_WWW", BOOL),
    setting("FORCE_SCRIPT_NAME", STR),
    setting("DISALLOWED_USER_AGENTS", REGEX_LIST),
    // ABSOLUTE_URL_OVERRIDES: callable values
    setting("IGNORABLE_404_URLS", REGEX_LIST),
    setting("SECRET_KEY", STR),
    setting("DEFAULT_FILE_STORAGE", STR),
    setting("MEDIA_ROOT", STR),
    setting("MEDIA_URL", STR),
    setting("STATIC_ROOT", STR),
    setting("STATIC_URL", STR),
    setting("FILE_UPLOAD_HANDLERS", LIST),
    setting("FILE_UPLOAD_MAX_MEMORY_SIZE", INT),
    setting("DATA_UPLOAD_MAX_MEMORY_SIZE", INT),
    setting("DATA_UPLOAD_MAX_NUMBER_FIELDS", INT),
    setting("FILE_UPLOAD_TEMP_DIR", STR),
    setting("FILE_UPLOAD_PERMISSIONS", INT),
    setting("FILE_UPLOAD_DIRECTORY_PERMISSIONS", INT),
    setting("FORMAT_MODULE_PATH", STR),
    setting("DATE_FORMAT", STR),
    setting("DATETIME_FORMAT", STR),
    setting("TIME_FORMAT", STR),
    setting("YEAR_MONTH_FORMAT", STR),
    setting("MONTH_DAY_FORMAT", STR),
    setting("SHORT_DATE_FORMAT", STR),
    setting("SHORT_DATETIME_FORMAT", STR),
    setting("DATE_INPUT_FORMATS", LIST),
    setting("TIME_INPUT_FORMATS", LIST),
    setting("DATETIME_INPUT_FORMATS", LIST),
    setting("FIRST_DAY_OF_WEEK", INT),
    setting("DECIMAL_SEPARATOR", STR),
    setting("USE_THOUSAND_SEPARATOR", BOOL),
    // TODO: accept a tuple here too, Django allows non-uniform grouping
    setting("NUMBER_GROUPING", INT),
    setting("THOUSAND_SEPARATOR", STR),
    setting("DEFAULT_TABLESPACE", STR),
    setting("DEFAULT_INDEX_TABLESPACE", STR),
    setting("X_FRAME_OPTIONS", STR),
    setting("USE_X_FORWARDED_HOST", BOOL),
    setting("USE_X_FORWARDED_PORT", BOOL),
    setting("WSGI_APPLICATION", STR),
    setting("SECURE_PROXY_SSL_HEADER", PAIR),
    // ==================== Middleware ====================
    setting("MIDDLEWARE", LIST),
    // ==================== Sessions ====================
    setting("SESSION_CACHE_ALIAS", STR),
    setting("SESSION_COOKIE_NAME", STR),
    setting("SESSION_COOKIE_AGE", INT),
    setting("SESSION_COOKIE_DOMAIN", STR),
    setting("SESSION_COOKIE_SECURE", BOOL),
    setting("SESSION_COOKIE_PATH", STR),
    setting("SESSION_COOKIE_HTTPONLY", BOOL),
    setting("SESSION_SAVE_EVERY_REQUEST", BOOL),
    setting("SESSION_EXPIRE_AT_BROWSER_CLOSE", BOOL),
    setting("SESSION_ENGINE", STR),
    setting("SESSION_FILE_PATH", STR),
    setting("SESSION_SERIALIZER", STR),
    // ==================== Cache ====================
    // CACHES: nested dict
    setting("CACHE_MIDDLEWARE_KEY_PREFIX", STR),
    setting("CACHE_MIDDLEWARE_SECONDS", INT),
    setting("CACHE_MIDDLEWARE_ALIAS", STR),
    // ==================== Authentication ====================
    setting("AUTH_USER_MODEL", STR),
    setting("AUTHENTICATION_BACKENDS", LIST),
    setting("LOGIN_URL", STR),
    setting("LOGIN_REDIRECT_URL", STR),
    setting("LOGOUT_REDIRECT_URL", STR),
    setting("PASSWORD_RESET_TIMEOUT_DAYS", INT),
    setting("PASSWORD_HASHERS", LIST),
    setting("AUTH_PASSWORD_VALIDATORS", LIST),
    // ==================== Signing ====================
    setting("SIGNING_BACKEND", STR),
    // ==================== CSRF ====================
    setting("CSRF_FAILURE_VIEW", STR),
    setting("CSRF_COOKIE_NAME", STR),
    setting("CSRF_COOKIE_AGE", INT),
    setting("CSRF_COOKIE_DOMAIN", STR),
    setting("CSRF_COOKIE_PATH", STR),
    setting("CSRF_COOKIE_SECURE", BOOL),
    setting("CSRF_COOKIE_HTTPONLY", BOOL),
    setting("CSRF_HEADER_NAME", STR),
    setting("CSRF_TRUSTED_ORIGINS", LIST),
    setting("CSRF_USE_SESSIONS", BOOL),
    // ==================== Messages ====================
    setting("MESSAGE_STORAGE", STR),
    // MESSAGE_LEVEL, MESSAGE_TAGS: not yet mapped
    // ==================== Logging ====================
    // LOGGING_CONFIG, LOGGING: nested dict
    setting("DEFAULT_EXCEPTION_REPORTER_FILTER", STR),
    // ==================== Testing ====================
    setting("TEST_RUNNER", STR),
    setting("TEST_NON_SERIALIZED_APPS", LIST),
    // ==================== Fixtures ====================
    setting("FIXTURE_DIRS", LIST),
    // ==================== Staticfiles ====================
    setting("STATICFILES_DIRS", LIST),
    setting("STATICFILES_STORAGE", STR),
    setting("STATICFILES_FINDERS", LIST),
    // ==================== Migrations ====================
    setting("MIGRATION_MODULES", DICT),
    // ==================== System checks ====================
    setting("SILENCED_SYSTEM_CHECKS", LIST),
    // ==================== Security middleware ====================
    setting("SECURE_BROWSER_XSS_FILTER", BOOL),
    setting("SECURE_CONTENT_TYPE_NOSNIFF", BOOL),
    setting("SECURE_HSTS_INCLUDE_SUBDOMAINS", BOOL),
    setting("SECURE_HSTS_PRELOAD", BOOL),
    setting("SECURE_HSTS_SECONDS", INT),
    // Compiled by Django itself, so kept as plain strings
    setting("SECURE_REDIRECT_EXEMPT", LIST),
    setting("SECURE_SSL_HOST", STR),
    setting("SECURE_SSL_REDIRECT", BOOL),
];

/// Cast spec of a named setting, if the schema has it.
pub fn lookup(name: &str) -> Option<CastSpec> {
    DJANGO_SETTINGS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.cast)
}
