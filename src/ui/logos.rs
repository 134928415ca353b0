// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Auto-scrolling client logo strip.
//!
//! The logo row is drawn twice back to back and scrolled left at a
//! constant speed; once the offset passes one row width it wraps, so
//! the strip loops without a visible seam.

use crate::config::Logo;
use crate::io::media::{MediaCache, MediaState};
use crate::models::project::join_media_url;
use crate::util::geometry::wrap_offset;

const LOGO_HEIGHT: f32 = 44.0;
const LOGO_GAP: f32 = 40.0;
const LABEL_WIDTH: f32 = 140.0;

/// Horizontal marquee position.
#[derive(Debug, Clone, Default)]
pub struct Marquee {
    offset: f32,
}

impl Marquee {
    /// Advance by `dt` seconds at `speed` px/s, wrapping at `period`.
    pub fn advance(&mut self, dt: f32, speed: f32, period: f32) {
        self.offset = wrap_offset(self.offset + speed * dt, period);
    }

    /// Re-wrap after the row width changed (e.g. on resize).
    pub fn rewrap(&mut self, period: f32) {
        if period > 0.0 && self.offset >= period {
            self.offset = wrap_offset(self.offset, period);
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Width of one logo slot.
fn logo_width(state: &MediaState) -> f32 {
    match state {
        MediaState::Ready { size, .. } => LOGO_HEIGHT * size.0 as f32 / size.1.max(1) as f32,
        _ => LABEL_WIDTH,
    }
}

/// Display the "frequent collaborators" strip.
pub fn show(
    ui: &mut egui::Ui,
    marquee: &mut Marquee,
    logos: &[Logo],
    media_base: &str,
    cache: &mut MediaCache,
    speed: f32,
) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("frequent collaborators").italics().size(36.0));
    });
    ui.add_space(16.0);

    if logos.is_empty() {
        return;
    }

    let urls: Vec<String> = logos.iter().map(|l| join_media_url(media_base, &l.file)).collect();
    let widths: Vec<f32> = urls.iter().map(|u| logo_width(cache.get(u))).collect();
    let period: f32 = widths.iter().map(|w| w + LOGO_GAP).sum();

    let dt = ui.input(|i| i.stable_dt).min(0.1);
    marquee.rewrap(period);
    marquee.advance(dt, speed, period);

    let strip_width = ui.available_width() * 0.8;
    let (strip, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), LOGO_HEIGHT), egui::Sense::hover());
    let strip = egui::Rect::from_center_size(strip.center(), egui::vec2(strip_width, LOGO_HEIGHT));
    let painter = ui.painter_at(strip);

    let mut x = strip.left() - marquee.offset();
    for copy in 0..2 {
        for ((logo, url), width) in logos.iter().zip(&urls).zip(&widths) {
            let rect = egui::Rect::from_min_size(egui::pos2(x, strip.top()), egui::vec2(*width, LOGO_HEIGHT));
            x += width + LOGO_GAP;
            if !rect.intersects(strip) {
                continue;
            }

            let hit = rect.intersect(strip);
            let response = ui.interact(hit, ui.id().with(("logo", copy, url)), egui::Sense::click());
            match cache.get(url) {
                MediaState::Ready { texture, .. } => {
                    painter.image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                _ => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        logo.label(),
                        egui::FontId::proportional(20.0),
                        egui::Color32::from_gray(90),
                    );
                }
            }
            if response.on_hover_text("Client website").clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&logo.url));
            }
        }
    }

    ui.ctx().request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_advances_and_wraps() {
        let mut marquee = Marquee::default();
        marquee.advance(1.0, 30.0, 100.0);
        assert_eq!(marquee.offset(), 30.0);
        marquee.advance(3.0, 30.0, 100.0);
        assert_eq!(marquee.offset(), 20.0);
    }

    #[test]
    fn test_marquee_rewrap_on_shrink() {
        let mut marquee = Marquee::default();
        marquee.advance(1.0, 90.0, 100.0);
        marquee.rewrap(50.0);
        assert_eq!(marquee.offset(), 40.0);
        marquee.rewrap(0.0);
        assert_eq!(marquee.offset(), 40.0);
    }

    #[test]
    fn test_zero_speed_holds() {
        let mut marquee = Marquee::default();
        marquee.advance(5.0, 0.0, 100.0);
        assert_eq!(marquee.offset(), 0.0);
    }
}
