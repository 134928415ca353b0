// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `FolioApp` owns both catalogs, the category filter, the lightbox
//! selection and the scroll-driven hero state, and lays out the page
//! each frame. Catalog and media I/O runs on background threads and is
//! picked up here once per frame.

use crate::config::Config;
use crate::io::catalog::{self, CatalogSource};
use crate::io::media::MediaCache;
use crate::io::serialization::{self, CatalogExport};
use crate::models::gallery::{self as gallery_model, CategorySelection, Direction};
use crate::models::project::{join_media_url, Project};
use crate::ui::gallery::{CatalogView, GalleryAction};
use crate::ui::hero::{self, HeroStyle};
use crate::ui::lightbox::{self, LightboxAction};
use crate::ui::logos::{self, Marquee};
use crate::ui::navbar::{self, Section};
use crate::ui::sections;
use crate::util::coalesce::FrameCoalescer;
use crate::util::interpolate::scroll_progress;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Height of the hero block, in viewport heights.
const HERO_SCREENS: f32 = 2.0;

const PAGE_FILL: egui::Color32 = egui::Color32::from_gray(246);
const PAGE_DOTS: egui::Color32 = egui::Color32::from_gray(222);

/// Background loader for one catalog.
///
/// Every load sends on the same channel and every completion is applied
/// in arrival order, so the most recent completion is what stays loaded.
struct CatalogLoader {
    sender: Sender<Vec<Project>>,
    receiver: Receiver<Vec<Project>>,
    in_flight: usize,
}

impl CatalogLoader {
    fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    fn spawn(&mut self, source: CatalogSource) {
        let sender = self.sender.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let projects = catalog::load(&source);
            let _ = sender.send(projects);
        });
    }

    /// Drain finished loads; returns the last one received, if any.
    fn poll(&mut self) -> Option<Vec<Project>> {
        let mut latest = None;
        while let Ok(projects) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            latest = Some(projects);
        }
        latest
    }

    fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// A catalog and its loading state.
struct Catalog {
    name: &'static str,
    projects: Vec<Project>,
    loaded: bool,
    loader: CatalogLoader,
}

impl Catalog {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            projects: Vec::new(),
            loaded: false,
            loader: CatalogLoader::new(),
        }
    }

    fn load(&mut self, source: CatalogSource) {
        log::info!("Loading {} catalog from {}", self.name, source);
        self.loader.spawn(source);
    }

    /// Apply finished loads. Returns true if the catalog changed.
    fn poll(&mut self) -> bool {
        match self.loader.poll() {
            Some(projects) => {
                self.projects = projects;
                self.loaded = true;
                true
            }
            None => false,
        }
    }

    fn view(&self) -> CatalogView<'_> {
        CatalogView {
            projects: &self.projects,
            loaded: self.loaded,
        }
    }

    fn contains(&self, shorthand: &str) -> bool {
        self.projects.iter().any(|p| p.shorthand == shorthand)
    }
}

/// Page scroll state as observed in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollSample {
    offset: f32,
    viewport_height: f32,
}

/// Main application state.
pub struct FolioApp {
    config: Config,
    projects: Catalog,
    film: Catalog,
    categories: CategorySelection,

    /// Project shown in the lightbox
    selected: Option<Project>,

    scroll: FrameCoalescer<ScrollSample>,
    last_sample: Option<ScrollSample>,
    scroll_offset: f32,
    progress: f32,
    hero_style: HeroStyle,
    hide_hero: bool,

    /// False until the first frame has been laid out
    ready: bool,

    pending_section: Option<Section>,
    marquee: Marquee,
    media: MediaCache,
}

impl FolioApp {
    /// Create the app and start loading both catalogs.
    pub fn new(config: Config) -> Self {
        let mut app = Self::idle(config);
        let projects = CatalogSource::parse(&app.config.projects_source);
        let film = CatalogSource::parse(&app.config.film_source);
        app.projects.load(projects);
        app.film.load(film);
        app
    }

    /// Create the app without starting any loads.
    fn idle(config: Config) -> Self {
        let categories = CategorySelection::new(config.allow_empty_category_selection);
        Self {
            config,
            projects: Catalog::new("projects"),
            film: Catalog::new("film + tv"),
            categories,
            selected: None,
            scroll: FrameCoalescer::new(),
            last_sample: None,
            scroll_offset: 0.0,
            progress: 0.0,
            hero_style: HeroStyle::at(0.0, 0.0),
            hide_hero: false,
            ready: false,
            pending_section: None,
            marquee: Marquee::default(),
            media: MediaCache::new(),
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_hero_hidden(&self) -> bool {
        self.hide_hero
    }

    pub fn scroll_progress(&self) -> f32 {
        self.progress
    }

    /// Open the lightbox on `project`.
    fn select(&mut self, project: Project) {
        log::debug!("Opening lightbox for {}", project.shorthand);
        self.selected = Some(project);
    }

    fn close_lightbox(&mut self) {
        if let Some(project) = self.selected.take() {
            log::debug!("Closing lightbox for {}", project.shorthand);
        }
    }

    /// The catalog the lightbox steps through: projects if it holds the
    /// shorthand, film + tv otherwise.
    fn backing_list(&self, shorthand: &str) -> &[Project] {
        if self.projects.contains(shorthand) {
            &self.projects.projects
        } else {
            &self.film.projects
        }
    }

    /// Step the lightbox to the neighbouring project, wrapping at the ends.
    fn navigate(&mut self, direction: Direction) {
        let Some(shorthand) = self.selected.as_ref().map(|p| p.shorthand.clone()) else {
            return;
        };
        let next = gallery_model::navigate(self.backing_list(&shorthand), &shorthand, direction).cloned();
        match next {
            Some(next) => {
                log::debug!("Lightbox {:?} to {}", direction, next.shorthand);
                self.selected = Some(next);
            }
            None => log::debug!("Lightbox {:?} ignored for {}", direction, shorthand),
        }
    }

    /// Record this frame's scroll state; only the latest sample per frame
    /// is applied.
    fn observe_scroll(&mut self, sample: ScrollSample) {
        if self.last_sample != Some(sample) {
            self.last_sample = Some(sample);
            self.scroll.submit(sample);
        }
    }

    /// Recompute the hero style from the pending scroll sample, if any.
    fn apply_scroll(&mut self, frame: u64) {
        if let Some(sample) = self.scroll.take(frame) {
            let vh = sample.viewport_height;
            self.scroll_offset = sample.offset;
            self.progress = scroll_progress(sample.offset, 0.0, Some(vh * HERO_SCREENS), vh);
            self.hero_style = HeroStyle::at(self.progress, vh);
            log::trace!(
                "Scroll {:.0}px, progress {:.3} ({} samples coalesced)",
                sample.offset,
                self.progress,
                self.scroll.dropped()
            );
        }
    }

    /// Observe the offset laid out this frame and apply it straight away,
    /// so the hero drawn afterwards matches the page.
    fn settle_scroll(&mut self, sample: ScrollSample, frame: u64) {
        self.observe_scroll(sample);
        self.apply_scroll(frame);
    }

    /// Replace a catalog source at runtime.
    fn open_catalog(&mut self, film: bool, path: PathBuf) {
        let source = CatalogSource::Path(path);
        if film {
            self.film.load(source);
        } else {
            self.projects.load(source);
        }
    }

    /// Write the loaded catalogs to `path`.
    fn export_catalog(&self, path: PathBuf) {
        let data = CatalogExport {
            projects: self.projects.projects.clone(),
            film: self.film.projects.clone(),
        };
        match serialization::export(&data, &path) {
            Ok(_) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {}", e),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Projects CSV...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.open_catalog(false, path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Open Film + TV CSV...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.open_catalog(true, path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Catalog", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("catalog.yaml")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("catalog.json")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Back to top").clicked() {
                        self.pending_section = Some(Section::Top);
                        ui.close_menu();
                    }
                });

                if self.projects.loader.is_loading() || self.film.loader.is_loading() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.spinner();
                    });
                }
            });
        });
    }

    /// Lay out the scrolling page. Returns the screen-space top of the
    /// in-page title block and any project clicked in the gallery.
    fn page(&mut self, ui: &mut egui::Ui, viewport_height: f32, jump: Option<Section>) -> (f32, GalleryAction) {
        let media_base = self.config.media_base.as_str();
        let site = &self.config.site;

        ui.add_space(viewport_height * HERO_SCREENS);
        let title_top = hero::content_title(ui, self.hide_hero, site, media_base);
        ui.add_space(48.0);

        let resume = join_media_url(media_base, &site.resume);
        let action = crate::ui::gallery::show(
            ui,
            self.projects.view(),
            self.film.view(),
            &mut self.categories,
            &resume,
            jump == Some(Section::Projects),
        );
        ui.add_space(64.0);

        logos::show(
            ui,
            &mut self.marquee,
            &site.logos,
            media_base,
            &mut self.media,
            self.config.marquee_speed,
        );
        ui.add_space(64.0);

        sections::reels(ui, site, media_base, jump == Some(Section::Reels));
        ui.add_space(64.0);
        sections::about(
            ui,
            site,
            jump == Some(Section::About),
            jump == Some(Section::Contact),
        );

        (title_top, action)
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        // Pick up finished background work
        if self.projects.poll() {
            log::debug!("Projects catalog now {} entries", self.projects.projects.len());
        }
        if self.film.poll() {
            log::debug!("Film + tv catalog now {} entries", self.film.projects.len());
        }
        self.media.poll(ctx);

        let screen = ctx.screen_rect();
        let viewport_height = screen.height();
        let lightbox_open = self.selected.is_some();

        // Page background; dots and hero backdrop are filled in after layout
        let background = ctx.layer_painter(egui::LayerId::background());
        background.rect_filled(screen, 0.0, PAGE_FILL);
        let backdrop_slot = background.add(egui::Shape::Noop);

        self.menu_bar(ctx);

        // Wheel input over the pinned hero still scrolls the page
        let over_hero = ctx
            .pointer_hover_pos()
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer.id == egui::Id::new("hero_overlay"));
        let forwarded = if over_hero && !lightbox_open {
            ctx.input(|i| i.smooth_scroll_delta.y)
        } else {
            0.0
        };

        let jump = self.pending_section.take();
        let output = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_source("page")
                    .auto_shrink([false, false])
                    .enable_scrolling(!lightbox_open);
                if jump == Some(Section::Top) {
                    area = area.vertical_scroll_offset(0.0);
                } else if forwarded != 0.0 {
                    area = area.vertical_scroll_offset((self.scroll_offset - forwarded).max(0.0));
                }
                area.show(ui, |ui| self.page(ui, viewport_height, jump))
            })
            .inner;

        let (title_top, action) = output.inner;
        self.settle_scroll(
            ScrollSample {
                offset: output.state.offset.y,
                viewport_height,
            },
            ctx.frame_nr(),
        );
        self.hide_hero = hero::should_hide(title_top, screen.top() + viewport_height * hero::TITLE_ANCHOR);

        let mut backdrop = hero::dot_shapes(screen, self.scroll_offset, PAGE_DOTS);
        if !self.hide_hero {
            backdrop.extend(hero::backdrop_shapes(screen, self.scroll_offset, &self.hero_style));
        }
        background.set(backdrop_slot, egui::Shape::Vec(backdrop));

        if let GalleryAction::Select(project) = action {
            self.select(project);
        }

        if !self.hide_hero {
            hero::show(ctx, &self.hero_style, self.ready, &self.config.site, &self.config.media_base);
        } else if let Some(section) = navbar::show(ctx, !lightbox_open, &self.config.site.tools) {
            self.pending_section = Some(section);
        }
        if let Some(section) = navbar::monogram(ctx, &self.config.site.monogram) {
            if !lightbox_open {
                self.pending_section = Some(section);
            }
        }

        if let Some(project) = self.selected.clone() {
            match lightbox::show(ctx, &project, &self.config.media_base, &mut self.media) {
                LightboxAction::None => {}
                LightboxAction::Close => self.close_lightbox(),
                LightboxAction::Navigate(direction) => self.navigate(direction),
            }
        }

        self.ready = true;

        if self.scroll.has_pending()
            || self.pending_section.is_some()
            || self.projects.loader.is_loading()
            || self.film.loader.is_loading()
            || self.media.is_loading()
        {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(shorthand: &str, category: &str) -> Project {
        Project {
            name: shorthand.to_uppercase(),
            shorthand: shorthand.into(),
            category: category.into(),
            visible: true,
            ..Default::default()
        }
    }

    fn app() -> FolioApp {
        let config = Config::defaults().unwrap();
        let mut app = FolioApp::idle(config);
        app.projects.projects = vec![project("a", "VFX"), project("b", "VFX"), project("c", "MoGraph")];
        app.projects.loaded = true;
        app.film.projects = vec![project("f1", ""), project("f2", "")];
        app.film.loaded = true;
        app
    }

    #[test]
    fn test_navigate_wraps_within_projects() {
        let mut app = app();
        app.select(project("c", "MoGraph"));
        app.navigate(Direction::Next);
        assert_eq!(app.selected_project().unwrap().shorthand, "a");
        app.navigate(Direction::Prev);
        assert_eq!(app.selected_project().unwrap().shorthand, "c");
    }

    #[test]
    fn test_navigate_uses_film_catalog() {
        let mut app = app();
        app.select(project("f2", ""));
        app.navigate(Direction::Next);
        assert_eq!(app.selected_project().unwrap().shorthand, "f1");
    }

    #[test]
    fn test_navigate_unknown_is_ignored() {
        let mut app = app();
        app.select(project("zz", ""));
        app.navigate(Direction::Next);
        assert_eq!(app.selected_project().unwrap().shorthand, "zz");
    }

    #[test]
    fn test_close_lightbox() {
        let mut app = app();
        app.select(project("a", "VFX"));
        app.close_lightbox();
        assert!(app.selected_project().is_none());
    }

    #[test]
    fn test_last_catalog_completion_wins() {
        let mut app = app();
        app.projects.loader.in_flight = 2;
        app.projects.loader.sender.send(vec![project("old", "VFX")]).unwrap();
        app.projects.loader.sender.send(vec![project("new", "VFX")]).unwrap();
        assert!(app.projects.poll());
        assert_eq!(app.projects.projects.len(), 1);
        assert_eq!(app.projects.projects[0].shorthand, "new");
        assert!(!app.projects.loader.is_loading());
        assert!(!app.projects.poll());
    }

    #[test]
    fn test_scroll_samples_coalesce_per_frame() {
        let mut app = app();
        app.observe_scroll(ScrollSample { offset: 100.0, viewport_height: 1000.0 });
        app.observe_scroll(ScrollSample { offset: 500.0, viewport_height: 1000.0 });
        app.apply_scroll(1);
        assert_eq!(app.scroll_progress(), 0.5);
        assert_eq!(app.hero_style, HeroStyle::at(0.5, 1000.0));

        app.observe_scroll(ScrollSample { offset: 2000.0, viewport_height: 1000.0 });
        app.apply_scroll(1);
        assert_eq!(app.scroll_progress(), 0.5);
        app.apply_scroll(2);
        assert_eq!(app.scroll_progress(), 1.0);
    }

    #[test]
    fn test_settled_scroll_applies_in_same_frame() {
        let mut app = app();
        app.settle_scroll(ScrollSample { offset: 250.0, viewport_height: 1000.0 }, 7);
        assert_eq!(app.scroll_progress(), 0.25);
        assert_eq!(app.hero_style, HeroStyle::at(0.25, 1000.0));
        assert!(!app.scroll.has_pending());

        // A second layout pass in the same frame waits for the next one
        app.settle_scroll(ScrollSample { offset: 600.0, viewport_height: 1000.0 }, 7);
        assert_eq!(app.scroll_progress(), 0.25);
        assert!(app.scroll.has_pending());
        app.settle_scroll(ScrollSample { offset: 600.0, viewport_height: 1000.0 }, 8);
        assert_eq!(app.scroll_progress(), 0.6);
    }

    #[test]
    fn test_unchanged_scroll_is_not_resubmitted() {
        let mut app = app();
        let sample = ScrollSample { offset: 10.0, viewport_height: 800.0 };
        app.observe_scroll(sample);
        app.apply_scroll(1);
        app.observe_scroll(sample);
        assert!(!app.scroll.has_pending());
    }

    #[test]
    fn test_hero_starts_visible() {
        let app = app();
        assert!(!app.is_hero_hidden());
        assert_eq!(app.scroll_progress(), 0.0);
    }
}
