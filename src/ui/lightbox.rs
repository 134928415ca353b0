// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail overlay ("lightbox").
//!
//! The lightbox dims the page, shows one project's media, credits, tags
//! and blurb, and steps to the previous/next project with the header
//! arrows or the arrow keys. Escape, the `esc` button or a click on the
//! backdrop closes it.

use crate::io::media::MediaCache;
use crate::models::gallery::Direction;
use crate::models::project::Project;
use crate::util::geometry::height_for_width;

const PANEL_WIDTH: f32 = 1000.0;
const COVER_WIDTH: f32 = 340.0;
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Result of lightbox interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    None,
    Close,
    Navigate(Direction),
}

/// Map the lightbox keys to an action, consuming the key presses.
pub fn keyboard_action(ctx: &egui::Context) -> LightboxAction {
    ctx.input_mut(|i| {
        if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
            LightboxAction::Close
        } else if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft) {
            LightboxAction::Navigate(Direction::Prev)
        } else if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight) {
            LightboxAction::Navigate(Direction::Next)
        } else {
            LightboxAction::None
        }
    })
}

/// Display the lightbox for `project`.
pub fn show(
    ctx: &egui::Context,
    project: &Project,
    media_base: &str,
    cache: &mut MediaCache,
) -> LightboxAction {
    let mut action = keyboard_action(ctx);
    let screen = ctx.screen_rect();

    // Backdrop
    let backdrop = egui::Area::new(egui::Id::new("lightbox_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(204));
            response
        })
        .inner;
    if backdrop.clicked() {
        action = LightboxAction::Close;
    }

    let width = PANEL_WIDTH.min(screen.width() - 32.0).max(320.0);
    let height = screen.height() * 0.8;
    let panel = egui::Area::new(egui::Id::new("lightbox_panel"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(3.0, egui::Color32::BLACK))
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.set_max_height(height);
                    let header_action = header(ui, project);
                    egui::ScrollArea::vertical()
                        .id_source(("lightbox_scroll", &project.shorthand))
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            egui::Frame::none()
                                .inner_margin(egui::Margin::same(32.0))
                                .show(ui, |ui| body(ui, project, media_base, cache));
                        });
                    header_action
                })
                .inner
        });
    ctx.move_to_top(panel.response.layer_id);

    if panel.inner != LightboxAction::None {
        action = panel.inner;
    }
    action
}

/// Black header strip: `← shorthand →` and `esc`.
fn header(ui: &mut egui::Ui, project: &Project) -> LightboxAction {
    let mut action = LightboxAction::None;
    egui::Frame::none()
        .fill(egui::Color32::BLACK)
        .inner_margin(egui::Margin::symmetric(32.0, 6.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let white = |text: &str| egui::RichText::new(text).size(18.0).color(egui::Color32::WHITE);
                if ui.add(egui::Button::new(white("\u{2190}")).frame(false)).clicked() {
                    action = LightboxAction::Navigate(Direction::Prev);
                }
                ui.label(white(project.shorthand.as_str()).italics());
                if ui.add(egui::Button::new(white("\u{2192}")).frame(false)).clicked() {
                    action = LightboxAction::Navigate(Direction::Next);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new(white("esc")).frame(false)).clicked() {
                        action = LightboxAction::Close;
                    }
                });
            });
        });
    action
}

fn body(ui: &mut egui::Ui, project: &Project, media_base: &str, cache: &mut MediaCache) {
    let media = project.media(media_base);

    ui.horizontal_top(|ui| {
        // Cover
        ui.vertical(|ui| {
            let cover = egui::vec2(COVER_WIDTH, COVER_WIDTH * 1.5);
            match media.first() {
                Some(item) => super::media::media_item(ui, cover, item, cache, &project.name),
                None => super::media::placeholder(ui, cover, project.external_link()),
            }
        });
        ui.add_space(32.0);
        ui.vertical(|ui| info(ui, project));
    });

    // Remaining media, two per row
    if media.len() > 1 {
        ui.add_space(40.0);
        let column = (ui.available_width() - 24.0) / 2.0;
        let aspect = project.aspect_ratio().unwrap_or(DEFAULT_ASPECT);
        let size = egui::vec2(column, height_for_width(aspect, column));
        egui::Grid::new(("lightbox_media", &project.shorthand))
            .spacing([24.0, 24.0])
            .show(ui, |ui| {
                for (index, item) in media.iter().enumerate().skip(1) {
                    let alt = format!("{} - {}", project.name, index + 1);
                    super::media::media_item(ui, size, item, cache, &alt);
                    if index % 2 == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    if project.link_feature && !media.is_empty() {
        if let Some(link) = project.external_link() {
            ui.add_space(16.0);
            ui.hyperlink_to("View project", link);
        }
    }
}

fn info(ui: &mut egui::Ui, project: &Project) {
    ui.label(egui::RichText::new(&project.name).size(56.0));
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(project.display_year()).size(24.0));
        ui.add_space(24.0);
        ui.label(egui::RichText::new(&project.role).size(18.0).strong().italics());
    });
    ui.add_space(16.0);

    // Credits
    egui::Grid::new(("credits", &project.shorthand))
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for credit in &project.credits {
                ui.label(egui::RichText::new(&credit.credit).size(18.0).strong());
                match credit.person_link() {
                    (name, Some(url)) => {
                        ui.hyperlink_to(egui::RichText::new(name).size(18.0), url);
                    }
                    _ => {
                        ui.label(egui::RichText::new(credit.display_person()).size(18.0));
                    }
                }
                ui.end_row();
            }
        });
    ui.add_space(16.0);

    // Tags
    if !project.tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &project.tags {
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, egui::Color32::BLACK))
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16.0, 4.0))
                    .show(ui, |ui| ui.label(tag));
            }
        });
        ui.add_space(12.0);
    }

    ui.label(egui::RichText::new(&project.blurb).size(18.0));
}
