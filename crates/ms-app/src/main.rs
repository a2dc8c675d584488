//! Main application entry point

use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui;
use tracing::info;

use ms_core::{Catalog, SessionStore};
use ms_data::{builtin_catalog, AppConfig, FileStorage, JsonCatalogSource};
use ms_ui::{AppShell, ShellConfig};

/// Main application state
struct MedSymposiumApp {
    shell: AppShell,

    /// Runs the sign-in timer; dropped after the shell
    _runtime: tokio::runtime::Runtime,
}

impl MedSymposiumApp {
    fn new(cc: &eframe::CreationContext<'_>, store: SessionStore, config: &AppConfig, runtime: tokio::runtime::Runtime) -> Self {
        let shell = AppShell::new(
            &cc.egui_ctx,
            store,
            runtime.handle().clone(),
            ShellConfig {
                login_delay: config.login_delay(),
                ..ShellConfig::default()
            },
        );

        Self {
            shell,
            _runtime: runtime,
        }
    }
}

impl eframe::App for MedSymposiumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                self.shell.store().close_event();
            }
        });

        self.shell.show(ctx);
    }
}

/// Catalog named by the config, or the built-in one
fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => JsonCatalogSource::new(path)
            .load()
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => builtin_catalog().context("Built-in catalog is invalid"),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::discover().context("Failed to read configuration")?;
    info!(?config, "Starting MedSymposium");

    let catalog = load_catalog(&config)?;
    let storage = FileStorage::in_dir(&config.data_dir)
        .with_context(|| format!("Failed to open preferences in {}", config.data_dir.display()))?;
    let store = SessionStore::new(catalog, Arc::new(storage));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: if store.dark_mode() {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        ..Default::default()
    };

    eframe::run_native(
        "MedSymposium",
        options,
        Box::new(move |cc| Box::new(MedSymposiumApp::new(cc, store, &config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
