//! Employee Manager - add, list, edit and delete employees over a REST API
//!
//! Built with GPUI and Monokai Pro theme

mod app;
mod components;
mod handlers;
mod theme;

use anyhow::Result;
use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use employee_manager::{telemetry, ApiClient, AppConfig};

use crate::app::App;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.log_filter)?;

    let api_client = ApiClient::new(Some(config.api_url.clone()))?;
    info!(api = %api_client.collection_url(), "starting employee manager");

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1000.), px(760.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Employee Manager")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(config, api_client, window, cx));

            app_entity.update(cx, |app, cx| {
                app.initialize(cx);
            });

            app_entity.update(cx, |app, cx| {
                app.name_input.update(cx, |state, cx| {
                    state.focus(window, cx);
                });
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "failed to open window");
            cx.quit();
        }
    });

    Ok(())
}
