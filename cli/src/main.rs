//! CLI entrypoint for wps-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use assist_domain::ClientProperties;
use assist_infrastructure::{FileProperties, PropertiesLoader};
use assist_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        PropertiesLoader::print_config_sources();
        return Ok(());
    }

    let command = cli.command.take().unwrap_or(Command::Show {
        output: OutputFormat::Text,
    });

    match command {
        Command::Init { path, force } => {
            // Writes a fresh file, never reads existing sources
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            FileProperties::default().save(&path)?;
            println!("wrote default properties to {}", path.display());
            Ok(())
        }
        Command::Validate => {
            // Reports every issue instead of failing on the first
            let file = load_file(&cli)?;
            let issues = file.validate();
            print!("{}", ConsoleFormatter::format_report(&issues));
            if ClientProperties::has_errors(&issues) {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Keys => {
            print!("{}", ConsoleFormatter::format_keys());
            Ok(())
        }
        Command::Show { output } => {
            let properties = load_properties(&cli)?;
            match output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format(&properties)),
                OutputFormat::Json => {
                    let wire = FileProperties::from(&properties);
                    println!("{}", serde_json::to_string_pretty(&wire)?);
                }
            }
            Ok(())
        }
        Command::Services => {
            let properties = load_properties(&cli)?;
            print!("{}", ConsoleFormatter::format_services(&properties));
            Ok(())
        }
    }
}

/// Load the wire-level record, honoring --no-config and --config.
fn load_file(cli: &Cli) -> Result<FileProperties> {
    if cli.no_config {
        Ok(PropertiesLoader::load_defaults())
    } else {
        Ok(PropertiesLoader::load(cli.config.as_ref())?)
    }
}

/// Load the validated domain record, printing surviving warnings to stderr.
fn load_properties(cli: &Cli) -> Result<ClientProperties> {
    let file = load_file(cli)?;
    let (properties, warnings) = file.to_properties()?;

    if !warnings.is_empty() {
        eprint!("{}", ConsoleFormatter::format_report(&warnings));
    }

    info!(
        "loaded properties: {} endpoint(s), selected {}",
        properties.wps_services.len(),
        properties.selected_service_url
    );

    Ok(properties)
}
