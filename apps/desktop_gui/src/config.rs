//! Startup configuration: defaults, optional settings file, environment, CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use resume_model::Resume;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "resume.toml";
pub const WINDOW_TITLE: &str = "Curriculum Vitae";

#[derive(Parser, Debug, Default)]
#[command(name = "resume_viewer", about = "Curriculum Vitae desktop viewer")]
pub struct Args {
    /// Directory the photo and screenshot paths are resolved against.
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,
    /// TOML document replacing the built-in résumé content.
    #[arg(long)]
    pub content: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `resume_viewer=trace`.
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets_dir: PathBuf,
    pub content_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            content_path: None,
            window_width: 400.0,
            window_height: 700.0,
        }
    }
}

pub fn load_settings(args: &Args) -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok(), args)
}

fn load_settings_from(
    settings_file: &Path,
    env: impl Fn(&str) -> Option<String>,
    args: &Args,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(settings_file) {
        match toml::from_str::<Settings>(&raw) {
            Ok(file_cfg) => settings = file_cfg,
            Err(err) => tracing::warn!(
                path = %settings_file.display(),
                error = %err,
                "ignoring malformed settings file"
            ),
        }
    }

    if let Some(v) = env("RESUME_ASSETS_DIR").filter(|v| !v.trim().is_empty()) {
        settings.assets_dir = PathBuf::from(v);
    }
    if let Some(v) = env("RESUME_CONTENT").filter(|v| !v.trim().is_empty()) {
        settings.content_path = Some(PathBuf::from(v));
    }

    if let Some(dir) = &args.assets_dir {
        settings.assets_dir = dir.clone();
    }
    if let Some(path) = &args.content {
        settings.content_path = Some(path.clone());
    }

    settings
}

/// Built-in content unless a document is configured; an invalid document is
/// a startup failure.
pub fn load_content(settings: &Settings) -> anyhow::Result<Resume> {
    match &settings.content_path {
        Some(path) => Resume::load(path)
            .with_context(|| format!("failed to load résumé content from '{}'", path.display())),
        None => {
            let resume = Resume::builtin();
            resume.validate().context("built-in résumé content is invalid")?;
            Ok(resume)
        }
    }
}
