use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use resume_viewer::{
    assets::AssetLoader,
    config::{self, Args, WINDOW_TITLE},
    controller::links::LinkDispatcher,
    ui::ResumeApp,
};

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let settings = config::load_settings(&args);
    let content = config::load_content(&settings)?;
    let app = ResumeApp::new(
        content,
        AssetLoader::new(&settings.assets_dir),
        LinkDispatcher::system(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_resizable(true),
        ..Default::default()
    };
    tracing::info!(
        assets_dir = %settings.assets_dir.display(),
        custom_content = settings.content_path.is_some(),
        "starting viewer"
    );
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("ui event loop failed: {err}"))
}
