#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use folio::app::PortfolioApp;

/// Portfolio desktop shell.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct DesktopArgs {
    /// Directory holding settings.json and the content sections
    #[arg(long, env = "FOLIO_CONTENT_DIR", default_value = "content")]
    content_dir: PathBuf,

    /// Directory that rooted asset paths such as /photos/me.jpg resolve against
    #[arg(long, env = "FOLIO_ASSETS_DIR", default_value = "public")]
    assets_dir: PathBuf,

    /// Log level for this crate (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = DesktopArgs::parse();
    folio::logging::init(&args.log_level);

    info!("Content: {}", args.content_dir.display());
    info!("Assets: {}", args.assets_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Portfolio"),
        ..Default::default()
    };

    let DesktopArgs {
        content_dir,
        assets_dir,
        ..
    } = args;
    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, content_dir, assets_dir)))),
    )
    .map_err(|e| anyhow::anyhow!("desktop shell failed: {}", e))
}
