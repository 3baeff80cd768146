//! SuperBubble CLI
//!
//! Mount, replay and inspect bubble widgets without a renderer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bubble_app::{catalogs, BubbleApp, BubbleConfig, Variant};
use bubble_core::{DeviceClass, ItemKind};

mod replay;

/// How long the headless animator may run before a frame is printed
const SETTLE_SECS: f32 = 5.0;

#[derive(Parser)]
#[command(name = "bubble")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SuperBubble widget CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Widget variant (bubble, carousel, expand), overrides the config file
    #[arg(long, global = true)]
    variant: Option<String>,

    /// Use the mobile layout
    #[arg(long, global = true)]
    mobile: bool,

    /// Show the debug overlay line
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount the widget and print its settled first frame
    Run,

    /// Feed a JSON event script to the widget and print the resulting frames
    Replay {
        /// Script file: a JSON array of input events
        script: PathBuf,

        /// Print a frame after every event, not just the last one
        #[arg(short, long)]
        trace: bool,
    },

    /// List the items of the configured variant
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Run => cmd_run(config).await,
        Commands::Replay { script, trace } => cmd_replay(config, &script, trace).await,
        Commands::Catalog => cmd_catalog(&config),
    }
}

/// Load the config file, then apply command line overrides
fn resolve_config(cli: &Cli) -> Result<BubbleConfig> {
    let mut config = BubbleConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(variant) = cli.variant.as_deref() {
        config.variant = match variant {
            "bubble" => Variant::Bubble,
            "carousel" => Variant::Carousel,
            "expand" => Variant::Expand,
            _ => anyhow::bail!(
                "Invalid variant '{}'. Valid variants: {:?}",
                variant,
                ["bubble", "carousel", "expand"]
            ),
        };
    }
    if cli.mobile {
        config.device = DeviceClass::Mobile;
    }
    if cli.debug {
        config.debug = true;
    }

    Ok(config)
}

async fn cmd_run(config: BubbleConfig) -> Result<()> {
    info!(
        "Mounting {:?} on {:?} from {}",
        config.variant,
        config.device,
        config.assets_dir.display()
    );

    let mut app = BubbleApp::mount_headless(config)
        .await
        .context("Failed to mount widget")?;
    report_preload(&app);

    app.animator_mut().settle(SETTLE_SECS);
    println!("{}", serde_json::to_string_pretty(&app.frame())?);

    Ok(())
}

async fn cmd_replay(config: BubbleConfig, script: &std::path::Path, trace: bool) -> Result<()> {
    let events = replay::load_script(script)?;
    info!("Replaying {} events from {}", events.len(), script.display());

    let mut app = BubbleApp::mount_headless(config)
        .await
        .context("Failed to mount widget")?;
    report_preload(&app);

    let steps = replay::drive(&mut app, events, trace, SETTLE_SECS);
    println!("{}", serde_json::to_string_pretty(&steps)?);

    Ok(())
}

fn cmd_catalog(config: &BubbleConfig) -> Result<()> {
    let catalog = catalogs::catalog_for(config.variant, config.display_width())
        .context("Failed to build catalog")?;

    println!(
        "{:?} catalog, {} items at width {}",
        config.variant,
        catalog.len(),
        catalog.display_width()
    );
    for (index, item) in catalog.iter().enumerate() {
        let kind = match &item.kind {
            ItemKind::Image { .. } => "image",
            ItemKind::LinkPreview { .. } => "link",
        };
        println!(
            "  {:>2}  {:<5}  {:<32} height {:>7.1}  offset {:>8.1}",
            index,
            kind,
            item.kind.label(),
            item.height,
            item.offset
        );
    }

    Ok(())
}

fn report_preload(app: &BubbleApp) {
    let report = app.preload_report();
    for failure in &report.failed {
        warn!("Missing image {}: {}", failure.label, failure.error);
    }
    info!(
        "Preloaded {}/{} images",
        report.loaded.len(),
        report.total()
    );
}
