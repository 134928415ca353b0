// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! folio - a desktop portfolio viewer for a VFX and motion graphics artist.
//!
//! Project catalogs are read from CSV sheets (local or over HTTP) and shown
//! as a filterable gallery with a scroll-driven hero and a detail lightbox.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use clap::Parser;
use config::{Config, ConfigOverrides};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio catalog viewer")]
struct Args {
    /// Config file (YAML, or JSON by extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Projects catalog: CSV path or http(s) URL
    #[arg(long)]
    projects: Option<String>,

    /// Film + TV catalog: CSV path or http(s) URL
    #[arg(long)]
    film: Option<String>,

    /// Base URL or directory that media paths are relative to
    #[arg(long)]
    media_base: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            projects_source: self.projects.clone(),
            film_source: self.film.clone(),
            media_base: self.media_base.clone(),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    config.apply(args.overrides());
    log::info!(
        "Sources: projects={} film={} media={}",
        config.projects_source,
        config.film_source,
        config.media_base
    );

    let title = format!("{} - {}", config.site.name, config.site.subtitle);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
