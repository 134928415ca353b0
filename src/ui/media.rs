// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media blocks for images, videos and placeholders.
//!
//! Images are drawn from the texture cache, letterboxed inside their slot.
//! Videos cannot be decoded in-app, so they render as a dark play block
//! that opens the file in the system browser.

use crate::io::media::{MediaCache, MediaState};
use crate::models::project::{MediaItem, MediaKind};
use crate::util::geometry::fit_within;

const PLACEHOLDER_FILL: egui::Color32 = egui::Color32::from_gray(229);
const VIDEO_FILL: egui::Color32 = egui::Color32::from_gray(24);

/// Allocate a slot of `size` and draw a media item in it.
pub fn media_item(ui: &mut egui::Ui, size: egui::Vec2, item: &MediaItem, cache: &mut MediaCache, alt: &str) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    match item.kind {
        MediaKind::Video => video_block_at(ui, rect, "", &item.url),
        MediaKind::Image => image_at(ui, rect, &item.url, cache, alt),
    }
}

/// Draw a cached image letterboxed into `rect`.
pub fn image_at(ui: &mut egui::Ui, rect: egui::Rect, url: &str, cache: &mut MediaCache, alt: &str) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, PLACEHOLDER_FILL);

    match cache.get(url) {
        MediaState::Ready { texture, size } => {
            let aspect = size.0 as f32 / size.1.max(1) as f32;
            let (w, h) = fit_within(aspect, rect.width(), rect.height());
            let image_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(w, h));
            painter.image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        MediaState::Loading => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Loading\u{2026}",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(120),
            );
        }
        MediaState::Failed => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                alt,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(120),
            );
        }
    }
}

/// Draw a play block in `rect` that opens `url` when clicked.
pub fn video_block_at(ui: &mut egui::Ui, rect: egui::Rect, label: &str, url: &str) {
    let response = ui.interact(rect, ui.id().with(("video", url)), egui::Sense::click());
    let painter = ui.painter_at(rect);
    let fill = if response.hovered() {
        egui::Color32::from_gray(40)
    } else {
        VIDEO_FILL
    };
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(3.0, egui::Color32::BLACK));

    // Play triangle
    let c = rect.center();
    let r = (rect.height().min(rect.width()) * 0.12).clamp(8.0, 36.0);
    painter.add(egui::Shape::convex_polygon(
        vec![
            c + egui::vec2(-r * 0.6, -r),
            c + egui::vec2(r, 0.0),
            c + egui::vec2(-r * 0.6, r),
        ],
        egui::Color32::WHITE,
        egui::Stroke::NONE,
    ));

    if !label.is_empty() {
        painter.text(
            rect.left_top() + egui::vec2(12.0, 10.0),
            egui::Align2::LEFT_TOP,
            label,
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }

    if response.on_hover_text(url).clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}

/// Allocate a play block of `size`.
pub fn video_block(ui: &mut egui::Ui, size: egui::Vec2, label: &str, url: &str) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    video_block_at(ui, rect, label, url);
}

/// Grey block used when a project has no media.
pub fn placeholder(ui: &mut egui::Ui, size: egui::Vec2, link: Option<&str>) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, PLACEHOLDER_FILL);
    ui.allocate_ui_at_rect(rect, |ui| {
        ui.centered_and_justified(|ui| match link {
            Some(url) => {
                ui.hyperlink_to("View this project online", url);
            }
            None => {
                ui.label("No media available");
            }
        });
    });
}
