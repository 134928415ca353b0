// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Work section: resume link, filtered projects list and film + tv list.

use crate::models::gallery::{CategorySelection, CATEGORIES};
use crate::models::project::Project;

/// A catalog as the gallery sees it.
pub struct CatalogView<'a> {
    pub projects: &'a [Project],
    pub loaded: bool,
}

/// Result of gallery interaction.
pub enum GalleryAction {
    None,
    Select(Project),
}

/// Display the work section and report a clicked project.
pub fn show(
    ui: &mut egui::Ui,
    projects: CatalogView<'_>,
    film: CatalogView<'_>,
    categories: &mut CategorySelection,
    resume_url: &str,
    scroll_here: bool,
) -> GalleryAction {
    let mut action = GalleryAction::None;

    ui.vertical_centered(|ui| {
        let header = ui.label(egui::RichText::new("work").size(60.0));
        if scroll_here {
            header.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.hyperlink_to(
            egui::RichText::new("resume").italics().size(14.0).color(egui::Color32::GRAY),
            resume_url,
        );
    });
    ui.add_space(24.0);

    section_heading(ui, "projects");
    ui.horizontal(|ui| {
        ui.add_space(32.0);
        ui.spacing_mut().item_spacing.x = 32.0;
        for category in CATEGORIES {
            let mut checked = categories.is_selected(category);
            let label = egui::RichText::new(category).strong().italics();
            if ui.checkbox(&mut checked, label).changed() {
                categories.toggle(category);
                log::debug!("Category selection now {:?}", categories.selected());
            }
        }
    });

    if !projects.loaded {
        loading_line(ui);
    } else if let Some(project) = project_list(ui, &categories.apply(projects.projects), "projects") {
        action = GalleryAction::Select(project.clone());
    }

    ui.add_space(32.0);
    section_heading(ui, "film + tv");
    if !film.loaded {
        loading_line(ui);
    } else {
        let all: Vec<&Project> = film.projects.iter().collect();
        if let Some(project) = project_list(ui, &all, "film") {
            action = GalleryAction::Select(project.clone());
        }
    }

    action
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add_space(32.0);
        ui.label(egui::RichText::new(text).italics().size(36.0));
    });
}

fn loading_line(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.add_space(32.0);
        ui.spinner();
        ui.label("Loading projects...");
    });
}

/// Wrapped list of entries: `Name (Subtitle)` with the year raised.
fn project_list<'a>(ui: &mut egui::Ui, projects: &[&'a Project], salt: &str) -> Option<&'a Project> {
    let mut clicked = None;
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.add_space(32.0);
        ui.spacing_mut().item_spacing = egui::vec2(28.0, 12.0);
        for (idx, project) in projects.iter().enumerate() {
            let response = ui
                .push_id((salt, idx), |ui| entry(ui, project))
                .inner;
            if response.clicked() {
                log::debug!("Selected project {}", project.shorthand);
                clicked = Some(*project);
            }
        }
    });
    clicked
}

fn entry(ui: &mut egui::Ui, project: &Project) -> egui::Response {
    let mut job = egui::text::LayoutJob::default();
    job.append(
        &project.display_name(),
        0.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(20.0),
            color: ui.visuals().text_color(),
            ..Default::default()
        },
    );
    job.append(
        project.display_year(),
        4.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(12.0),
            color: ui.visuals().text_color(),
            valign: egui::Align::TOP,
            ..Default::default()
        },
    );

    let response = ui.add(egui::Label::new(job).sense(egui::Sense::click()));
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
