//! Tiles Patterns CLI
//!
//! Usage:
//!   tiles-patterns [OPTIONS] format <TEMPLATE> [VARS]...
//!   tiles-patterns [OPTIONS] match <PATTERN> <NAME> [--template <TEMPLATE>]
//!
//! Options:
//!   -c, --config <FILE>  Resolver configuration (TOML format)
//!   -h, --help           Print help
//!
//! Set RUST_LOG=debug to see resolution logs on stderr.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tiles_patterns::{format_placeholders, Attribute, Definition, FormatError, ResolverConfig};

#[derive(Parser)]
#[command(name = "tiles-patterns")]
#[command(about = "Try out definition patterns and placeholder substitution")]
struct Cli {
    /// Resolver configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Substitute variables into a string with {n} placeholders
    Format {
        /// String containing placeholders
        template: String,
        /// Values for {0}, {1}, ...
        vars: Vec<String>,
    },

    /// Match a definition name against a pattern and show the captured variables
    Match {
        /// Definition name pattern
        pattern: String,
        /// Requested definition name
        name: String,
        /// Template path with placeholders to resolve on a match
        #[arg(short, long)]
        template: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ResolverConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ResolverConfig::default(),
    };

    match cli.command {
        Command::Format { template, vars } => match format_placeholders(&template, vars.as_slice()) {
            Ok(out) => println!("{}", out),
            Err(e) => fail_format(&e, &template),
        },
        Command::Match {
            pattern,
            name,
            template,
        } => run_match(&config, &pattern, &name, template.as_deref()),
    }
}

fn run_match(config: &ResolverConfig, pattern: &str, name: &str, template: Option<&str>) {
    let (factory, recognizer) = config.components();

    if !recognizer.is_pattern_recognized(pattern) {
        eprintln!("Error: '{}' is not a {} pattern", pattern, config.syntax);
        process::exit(1);
    }

    let mut definition = Definition::new(pattern);
    if let Some(path) = template {
        definition = definition.with_template_attribute(Attribute::template(path));
    }

    let matcher = match factory.create_definition_pattern_matcher(pattern, &definition) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let Some(vars) = matcher.captures(name) else {
        eprintln!("'{}' does not match '{}'", name, pattern);
        process::exit(1);
    };

    for (i, var) in vars.iter().enumerate() {
        println!("{{{}}} = {}", i, var);
    }

    if let Some(path) = template {
        match matcher.create_definition(name) {
            Ok(Some(def)) => {
                let resolved = def
                    .template_attribute
                    .as_ref()
                    .and_then(Attribute::text_value)
                    .unwrap_or_default();
                println!("template = {}", resolved);
            }
            Ok(None) => {}
            Err(e) => fail_format(&e, path),
        }
    }
}

fn fail_format(error: &FormatError, source: &str) -> ! {
    eprint!("{}", error.format(source, "template"));
    process::exit(1);
}
