// src/main.rs
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use movie_list::app::{Catalog, MovieListApp};
use movie_list::config::load_config;

fn pick_renderer() -> eframe::Renderer {
    match env::var("MOVIES_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cfg = load_config();
    info!(
        "Starting with layout={} window={}x{}",
        cfg.layout.as_str(),
        cfg.window_width,
        cfg.window_height
    );

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        multisampling: 0,
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.window_title.clone())
            .with_inner_size([cfg.window_width, cfg.window_height]),
        ..Default::default()
    };

    let layout = cfg.layout;
    match eframe::run_native(
        &cfg.window_title,
        options,
        Box::new(move |cc| {
            movie_list::app::theme::apply_dark_theme(&cc.egui_ctx);
            Ok(Box::new(MovieListApp::new(Catalog::demo(), layout)))
        }),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: try MOVIES_RENDERER=wgpu or MOVIES_RENDERER=glow.");
            Err(e)
        }
    }
}
