//! pomaster - A terminal dashboard for Product Owners
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// pomaster - A terminal dashboard for Product Owners
#[derive(Parser, Debug)]
#[command(name = "pomaster")]
#[command(about = "A terminal dashboard for Product Owners", long_about = None)]
struct Args {
    /// Pre-fill the product description used for KPI generation
    #[arg(long, value_name = "TEXT")]
    context: Option<String>,

    /// Path to an alternate settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    pomaster_core::logging::init()?;

    let settings = pomaster_app::load_settings(args.config.as_deref());
    tracing::info!(
        model = %settings.generator.model,
        kpi_count = settings.generator.kpi_count,
        "Settings loaded"
    );

    pomaster_tui::run(settings, args.context).await?;
    Ok(())
}
