use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use ox_forms::{FormDefinition, FormEngine};
use ox_forms_tera::{register_form_tags, FormTagOptions};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

mod config;

use config::{load_from_path, CliConfig};

#[derive(Parser, Debug)]
#[command(name = "ox_forms", version, about = "Render form widgets to HTML")]
struct Cli {
    /// YAML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a YAML/JSON form definition
    Form { path: PathBuf },
    /// Render a tera template with the widget functions registered
    Template {
        path: PathBuf,
        /// JSON/YAML object used as the template context
        #[arg(long)]
        context: Option<PathBuf>,
        /// Form-name scope, overrides the configuration
        #[arg(long)]
        form_name: Option<String>,
    },
}

fn parse_log_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .ok()
        .with_context(|| format!("Invalid log_level '{}', expected one of off, error, warn, info, debug, trace", value))
}

fn init_logging(config: &CliConfig) -> Result<()> {
    if let Some(path) = &config.log4rs_config {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("Failed to initialize log4rs from {}", path))?;
        return Ok(());
    }

    let level = parse_log_level(&config.log_level)?;
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn render_form(path: &Path) -> Result<String> {
    let form: FormDefinition = load_from_path(path)?;
    let registry = ox_forms_std_renderers::standard_registry();
    let html = FormEngine::new(&registry)
        .render(&form)
        .with_context(|| format!("Failed to render form '{}'", form.id))?;
    Ok(html)
}

fn render_template(
    config: &CliConfig,
    path: &Path,
    context: Option<&Path>,
    form_name: Option<String>,
) -> Result<String> {
    let mut tera = match &config.templates {
        Some(glob) => Tera::new(glob).with_context(|| format!("Failed to load templates from {}", glob))?,
        None => Tera::default(),
    };
    let options = FormTagOptions {
        form_name: form_name.or_else(|| config.form_name.clone()),
    };
    register_form_tags(&mut tera, options)?;

    let source = fs::read_to_string(path).with_context(|| format!("Failed to read template {:?}", path))?;
    let name = path.to_string_lossy().into_owned();
    tera.add_raw_template(&name, &source)?;

    let context = match context {
        Some(ctx_path) => {
            let value: Value = load_from_path(ctx_path)?;
            Context::from_serialize(&value).context("Template context must be an object")?
        }
        None => Context::new(),
    };

    tera.render(&name, &context)
        .with_context(|| format!("Failed to render template {:?}", path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_from_path(path)?,
        None => CliConfig::default(),
    };
    init_logging(&config)?;
    info!("Starting ox_forms");
    debug!("CLI arguments: {:?}", cli);

    let html = match cli.command {
        Command::Form { path } => render_form(&path)?,
        Command::Template {
            path,
            context,
            form_name,
        } => render_template(&config, &path, context.as_deref(), form_name)?,
    };

    println!("{}", html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level(" WARN ").unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_log_level_is_an_error() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(err.to_string().contains("Invalid log_level 'loud'"), "{}", err);
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let config = CliConfig {
            log_level: "verbose".to_string(),
            ..CliConfig::default()
        };
        assert!(init_logging(&config).is_err());
    }
}
