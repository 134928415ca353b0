// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section navigation and the monogram.
//!
//! The navbar appears once the hero has moved out of the way. While the
//! lightbox is open its links render as plain labels.

/// Jump targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Projects,
    Reels,
    About,
    Contact,
}

const LINKS: [(&str, Section); 4] = [
    ("projects", Section::Projects),
    ("reels", Section::Reels),
    ("about", Section::About),
    ("contact", Section::Contact),
];

/// Display the navbar in the top-right corner.
pub fn show(ctx: &egui::Context, enabled: bool, tools_url: &str) -> Option<Section> {
    let mut jump = None;
    egui::Area::new(egui::Id::new("navbar"))
        .order(egui::Order::Middle)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-64.0, 40.0))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 12.0;
            for (label, section) in LINKS {
                let text = egui::RichText::new(label).size(18.0);
                if enabled {
                    if ui.link(text).clicked() {
                        log::debug!("Navbar jump to {:?}", section);
                        jump = Some(section);
                    }
                } else {
                    ui.label(text);
                }
            }
            let tools = egui::RichText::new("tools").size(18.0);
            if enabled {
                ui.hyperlink_to(tools, tools_url);
            } else {
                ui.label(tools);
            }
        });
    jump
}

/// Initials in the top-left corner; a click scrolls back to the top.
pub fn monogram(ctx: &egui::Context, initials: &str) -> Option<Section> {
    egui::Area::new(egui::Id::new("monogram"))
        .order(egui::Order::Middle)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(32.0, 32.0))
        .show(ctx, |ui| {
            let text = egui::RichText::new(initials).size(48.0).strong();
            let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
            response.clicked().then_some(Section::Top)
        })
        .inner
}
