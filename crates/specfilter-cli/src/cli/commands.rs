use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use directories::ProjectDirs;
use specfilter::attributes::Attributed;
use specfilter::catalog::{load_catalog, load_spec, save_catalog};
use specfilter::config::{SpecfilterConfig, CONFIG_FILE_NAME};
use specfilter::filter::filter_all;
use specfilter::model::{color_is, sample_products, size_is, Color, Product, Size};
use specfilter::spec::{AttrSpec, Spec};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::render::{render_attrs, render_demo_section, render_products};
use super::setup::{Cli, Commands, OutputFormat};

const LOG_ENV: &str = "SPECFILTER_LOG";

struct AppContext {
    config: SpecfilterConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Filter {
            conditions,
            spec,
            catalog,
            format,
        }) => handle_filter(&ctx, conditions, spec, catalog, format),
        Some(Commands::Attrs) => handle_attrs(),
        Some(Commands::Demo { save }) => handle_demo(save.as_deref()),
        None => handle_demo(None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a second subscriber (e.g. under a test harness) is not fatal.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut files: Vec<PathBuf> = Vec::new();
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        files.push(path.clone());
    }
    files.push(PathBuf::from(CONFIG_FILE_NAME));
    if let Some(dirs) = ProjectDirs::from("com", "specfilter", "specfilter") {
        files.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }

    let config = SpecfilterConfig::load(&files).context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");
    Ok(AppContext { config })
}

fn handle_filter(
    ctx: &AppContext,
    conditions: Vec<String>,
    spec_file: Option<PathBuf>,
    catalog: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let spec = build_spec(&conditions, spec_file)?;
    spec.validate::<Product>()?;
    info!(spec = %spec, tests = spec.leaf_count(), "filtering");

    let products = match catalog.or_else(|| ctx.config.catalog.clone()) {
        Some(path) => load_catalog(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => sample_products(),
    };

    let format = match format {
        Some(format) => format,
        None => OutputFormat::from_str(&ctx.config.format(), true)
            .map_err(|e| anyhow::anyhow!("Invalid format in config: {}", e))?,
    };

    let found = filter_all(&products, &spec)?;
    print!("{}", render_products(&found, format)?);
    Ok(())
}

/// Join the `-w` conditions and the spec file, in that order, with AND.
fn build_spec(conditions: &[String], spec_file: Option<PathBuf>) -> Result<Spec> {
    let mut parts = Vec::with_capacity(conditions.len() + 1);
    for condition in conditions {
        let leaf = AttrSpec::parse::<Product>(condition)
            .with_context(|| format!("Bad condition '{}'", condition))?;
        parts.push(Spec::from(leaf));
    }
    if let Some(path) = spec_file {
        parts.push(
            load_spec(&path)
                .with_context(|| format!("Failed to load specification {}", path.display()))?,
        );
    }

    if parts.is_empty() {
        bail!("Nothing to filter by: pass at least one --where condition or --spec file");
    }
    Ok(Spec::all(parts)?)
}

fn handle_attrs() -> Result<()> {
    print!("{}", render_attrs(Product::ATTRIBUTES));
    Ok(())
}

fn handle_demo(save: Option<&Path>) -> Result<()> {
    let products = sample_products();

    let green = color_is(Color::Green);
    let large = size_is(Size::Large);
    let large_blue = large.clone() & color_is(Color::Blue);

    let sections = [
        ("Filter by Color (Green)", &green, "green"),
        ("Filter by Size (Large)", &large, "large"),
        (
            "Filter by Size (Large) AND Color (Blue)",
            &large_blue,
            "large and blue",
        ),
    ];

    let mut out = Vec::with_capacity(sections.len());
    for (title, spec, adjective) in sections {
        let found = filter_all(&products, spec)?;
        out.push(render_demo_section(title, &found, adjective));
    }
    print!("{}", out.join("\n"));

    if let Some(path) = save {
        save_catalog(path, &products)
            .with_context(|| format!("Failed to save catalog {}", path.display()))?;
        println!("\nSample catalog saved to {}", path.display());
    }
    Ok(())
}
