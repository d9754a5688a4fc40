mod graphics; // brings `graphics.rs` in as `crate::graphics`
mod settings; // brings `settings.rs` in as `crate::settings`

use anyhow::Context;
use graphics::{RequestForm, Viewer, window_conf};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("City Navigator started.");

    let form = match initial_form() {
        Ok(form) => form,
        Err(e) => {
            error!("{:#}. Starting with an empty request.", e);
            RequestForm::default()
        }
    };

    // An invalid configured request only shows up in the status line; the
    // panel stays open for another try.
    let mut viewer = Viewer::new(form);
    viewer.submit();
    graphics::run_visualization_loop(viewer).await;
}

/// Prefills the request panel from the configuration file.
fn initial_form() -> anyhow::Result<RequestForm> {
    let settings = settings::load_settings().context("Failed to load settings")?;
    Ok(RequestForm::from(settings.request))
}
