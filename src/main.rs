use django_env_settings::{ConfigError, EnvFile, Layered, Loader, ProcessEnv, Settings};
use std::env;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    format: Format,
    prefix: Option<String>,
    env_file: Option<String>,
    show_schema: bool,
}

fn parse_options(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        format: Format::Json,
        prefix: None,
        env_file: None,
        show_schema: false,
    };

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "json" => Format::Json,
                "yaml" | "yml" => Format::Yaml,
                other => return Err(format!("unknown format: {}", other)),
            };
        } else if let Some(prefix) = arg.strip_prefix("--prefix=") {
            options.prefix = Some(prefix.to_string());
        } else if let Some(path) = arg.strip_prefix("--env-file=") {
            options.env_file = Some(path.to_string());
        } else if arg == "--schema" {
            options.show_schema = true;
        } else {
            return Err(format!("unknown argument: {}", arg));
        }
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the settings, so logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn render(settings: &Settings, format: Format) -> Result<String, ConfigError> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(settings)?,
        Format::Yaml => serde_yaml::to_string(settings)?,
    })
}

fn print_schema(loader: &Loader) {
    for spec in loader.schema() {
        println!(
            "{:<36} {:<44} {}",
            spec.name,
            loader.env_key(spec.name),
            spec.cast.describe()
        );
    }
}

fn run(options: &Options) -> Result<(), ConfigError> {
    let mut loader = Loader::new();
    if let Some(prefix) = &options.prefix {
        loader = loader.with_prefix(prefix.as_str());
    }

    if options.show_schema {
        print_schema(&loader);
        return Ok(());
    }

    let settings = match &options.env_file {
        Some(path) => {
            let file = EnvFile::from_path(path)?;
            debug!(path = %path, vars = file.len(), "Env file loaded");
            loader.load_from(&Layered::new(file, ProcessEnv))?
        }
        None => loader.load()?,
    };

    info!(
        prefix = %loader.prefix(),
        count = settings.len(),
        "Settings resolved"
    );

    println!("{}", render(&settings, options.format)?);
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if it exists (ignore error if not found)
    dotenvy::dotenv().ok();

    init_tracing();

    let options = match parse_options(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "usage: django-env-settings [--format=json|yaml] [--prefix=PREFIX] [--env-file=PATH] [--schema]"
            );
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, var = ?e.var(), "Failed to load settings");
            ExitCode::FAILURE
        }
    }
}
