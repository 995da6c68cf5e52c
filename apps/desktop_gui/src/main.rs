use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use vote_core::{config::load_settings, seed, IntentQueue};

use crate::controller::events::UiError;
use crate::ui::{mount_or_builtin, VoteListApp};

type DynError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
struct Args {
    /// JSON seed file; the built-in catalogue is used when omitted.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if args.seed.is_some() {
        settings.seed_path = args.seed;
    }
    if let Some(title) = args.title {
        settings.window_title = title;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let (products, startup_error) = match seed::load_seed(settings.seed_path.as_deref()) {
        Ok(products) => (products, None),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "seed load failed; using built-in products");
            (seed::builtin_products(), Some(UiError::seed_failure(&err)))
        }
    };

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, DynError> {
                let (controller, mount_error) = mount_or_builtin(&cc.egui_ctx, products)?;
                Ok(Box::new(VoteListApp::new(
                    controller,
                    IntentQueue::bounded(settings.intent_queue_capacity),
                    settings.window_title,
                    startup_error.or(mount_error),
                )))
            },
        ),
    )
}
