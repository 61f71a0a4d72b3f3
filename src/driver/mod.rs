use std::{error::Error, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::codegen::{assembler::Banner, generate_with_banner};
use crate::session::{Session, UnknownModePolicy};
use config::Config;

pub mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GeneratorArgs {
    /// The manifest listing the declarations.
    pub manifest: PathBuf,

    /// Where to write the generated impls. Overrides the manifest, stdout if neither is set.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on an unknown equiv_mode instead of skipping the declaration.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// The trait to implement.
    #[arg(long)]
    pub trait_name: Option<String>,

    /// The method of that trait.
    #[arg(long)]
    pub method_name: Option<String>,

    /// Fixed timestamp for the banner, for reproducible output.
    #[arg(long)]
    pub timestamp: Option<String>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = GeneratorArgs::parse();
    let written = run(args)?;

    if let Some(path) = written {
        eprintln!("{} {}", "Generated".green().bold(), path.display());
    }

    Ok(())
}

/// Loads the manifest, generates, and writes the result. Returns the file
/// written to, or `None` if the text went to stdout.
pub fn run(args: GeneratorArgs) -> anyhow::Result<Option<PathBuf>> {
    let start_time = Instant::now();

    let source = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("failed to read manifest {}", args.manifest.display()))?;
    let config: Config = toml::from_str(&source)
        .with_context(|| format!("invalid manifest {}", args.manifest.display()))?;
    tracing::debug!("manifest: {:#?}", config);

    let manifest_dir = args
        .manifest
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let output = args
        .output
        .clone()
        .or_else(|| config.generator.output.as_ref().map(|p| manifest_dir.join(p)));

    let session = session_from(&args, &config);
    tracing::debug!("generating with session: {:#?}", session);

    let banner = match &args.timestamp {
        Some(timestamp) => Banner::fixed(&session.generator_name, timestamp),
        None => Banner::now(&session.generator_name),
    };
    let decls = config.declarations();
    let text = generate_with_banner(&decls, &session, &banner)?;

    let written = match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!("wrote {} bytes to {:?}", text.len(), path);
            Some(path)
        }
        None => {
            print!("{text}");
            None
        }
    };

    tracing::debug!("Done in {:?}", start_time.elapsed());
    Ok(written)
}

/// CLI flags take precedence over the manifest.
fn session_from(args: &GeneratorArgs, config: &Config) -> Session {
    let defaults = Session::default();
    let generator = &config.generator;

    Session {
        trait_name: args
            .trait_name
            .clone()
            .or_else(|| generator.trait_name.clone())
            .unwrap_or(defaults.trait_name),
        method_name: args
            .method_name
            .clone()
            .or_else(|| generator.method_name.clone())
            .unwrap_or(defaults.method_name),
        generator_name: generator
            .generator_name
            .clone()
            .unwrap_or(defaults.generator_name),
        unknown_mode: if args.strict || generator.strict {
            UnknownModePolicy::Error
        } else {
            UnknownModePolicy::Skip
        },
        ..defaults
    }
}
