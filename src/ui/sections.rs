// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reels and about/contact sections.

use crate::config::SiteContent;
use crate::models::project::join_media_url;

const REEL_ASPECT: f32 = 16.0 / 9.0;

fn heading(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.vertical_centered(|ui| ui.label(egui::RichText::new(text).size(60.0)))
        .inner
}

/// Reel videos, stacked full width.
pub fn reels(ui: &mut egui::Ui, site: &SiteContent, media_base: &str, scroll_here: bool) {
    let header = heading(ui, "reels");
    if scroll_here {
        header.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(16.0);

    let width = (ui.available_width() - 64.0).max(200.0);
    let size = egui::vec2(width, width / REEL_ASPECT);
    for reel in &site.reels {
        ui.horizontal(|ui| {
            ui.add_space(32.0);
            let url = join_media_url(media_base, &reel.path);
            super::media::video_block(ui, size, &reel.label, &url);
        });
        ui.add_space(24.0);
    }
}

/// Bio, contact links, press and skills.
pub fn about(ui: &mut egui::Ui, site: &SiteContent, scroll_here: bool, contact_here: bool) {
    let header = heading(ui, "about");
    if scroll_here {
        header.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(16.0);

    let about = &site.about;
    ui.horizontal_top(|ui| {
        ui.add_space(32.0);
        let column = ((ui.available_width() - 96.0) / 2.0).max(160.0);

        ui.vertical(|ui| {
            ui.set_width(column);
            ui.label(egui::RichText::new(&about.bio).size(18.0));
            ui.add_space(16.0);
            let email = ui.hyperlink_to(
                egui::RichText::new(&about.email).size(18.0),
                format!("mailto:{}", about.email),
            );
            if contact_here {
                email.scroll_to_me(Some(egui::Align::Center));
            }
            ui.horizontal_wrapped(|ui| {
                for link in &site.socials {
                    ui.hyperlink_to(&link.label, &link.url);
                }
            });
        });

        ui.add_space(32.0);

        ui.vertical(|ui| {
            ui.set_width(column);
            if !about.press.is_empty() {
                ui.label(egui::RichText::new("PRESS").strong().size(20.0));
                for link in &about.press {
                    ui.hyperlink_to(&link.label, &link.url);
                }
                ui.add_space(16.0);
            }
            if !about.skills.is_empty() {
                ui.label(egui::RichText::new("WHAT I DO").strong().size(20.0));
                for skill in &about.skills {
                    ui.label(format!("\u{2022} {skill}"));
                }
            }
        });
    });
    ui.add_space(48.0);
}
