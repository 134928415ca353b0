// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll-driven hero section.
//!
//! The hero is pinned to the window while the page scrolls underneath it.
//! Every visual parameter is derived from the scroll progress through its
//! own linear window (see [`HeroStyle::at`]). Once the in-page title
//! block reaches the pinned title, the hero hides and the page copy takes
//! over at the hero's end-state transforms.

use crate::config::SiteContent;
use crate::models::project::join_media_url;
use crate::util::interpolate::{clamp, interpolate};

/// Unscaled font sizes of the title group.
pub const TITLE_SIZE: f32 = 72.0;
pub const SUBTITLE_SIZE: f32 = 32.0;
pub const SOCIAL_SIZE: f32 = 20.0;

/// Unscaled slot heights of the title group rows.
const TITLE_SLOT: f32 = 88.0;
const SUBTITLE_SLOT: f32 = 44.0;
const SOCIAL_SLOT: f32 = 36.0;
const REEL_GAP: f32 = 24.0;

/// Fraction of the viewport height at which the pinned title group starts.
pub const TITLE_ANCHOR: f32 = 0.3;

/// Video opacity at or below which the hero stops taking pointer input.
const POINTER_CUTOFF: f32 = 0.02;

/// Dot pattern pitch shared by the page background and the hero overlay.
pub const DOT_PITCH: f32 = 20.0;

/// Visual parameters of the hero at a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyle {
    pub title_scale: f32,
    pub subtitle_scale: f32,
    pub subtitle_offset_y: f32,
    pub social_offset_y: f32,
    pub reel_offset_y: f32,
    pub text_gray: u8,
    pub indicator_opacity: f32,
    pub video_opacity: f32,
}

impl HeroStyle {
    /// Derive every hero parameter from `progress` in `[0, 1]`.
    pub fn at(progress: f32, viewport_height: f32) -> Self {
        let social_start = (viewport_height * 0.6 - 280.0).max(0.0);
        let reel_start = (viewport_height * 0.55).max(0.0);

        Self {
            title_scale: interpolate(progress, (0.0, 0.6), (1.0, 0.7)),
            subtitle_scale: interpolate(progress, (0.2, 0.8), (1.0, 0.7)),
            subtitle_offset_y: interpolate(progress, (0.4, 0.8), (0.0, -40.0)),
            social_offset_y: interpolate(progress, (0.4, 0.8), (social_start, -25.0)),
            reel_offset_y: interpolate(progress, (0.7, 1.0), (reel_start, 0.0)),
            text_gray: interpolate(progress, (0.0, 1.0), (255.0, 0.0)).round() as u8,
            indicator_opacity: interpolate(progress, (0.0, 0.15), (1.0, 0.0)),
            video_opacity: clamp(1.0 - progress * 1.2, 0.0, 1.0),
        }
    }

    /// The fully scrolled state, used for the in-page copy of the title.
    pub fn settled() -> Self {
        Self::at(1.0, 0.0)
    }

    pub fn pointer_enabled(&self) -> bool {
        self.video_opacity > POINTER_CUTOFF
    }

    pub fn text_color(&self) -> egui::Color32 {
        egui::Color32::from_gray(self.text_gray)
    }
}

/// Whether the pinned hero should give way to the in-page title.
pub fn should_hide(content_title_top: f32, hero_title_top: f32) -> bool {
    content_title_top <= hero_title_top
}

/// Screen positions of the title group rows for a given top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleLayout {
    pub title_center_y: f32,
    pub subtitle_center_y: f32,
    pub social_center_y: f32,
    pub reel_top: f32,
}

impl TitleLayout {
    pub fn new(top: f32, style: &HeroStyle) -> Self {
        Self {
            title_center_y: top + TITLE_SLOT * 0.5,
            subtitle_center_y: top + TITLE_SLOT + SUBTITLE_SLOT * 0.5 + style.subtitle_offset_y,
            social_center_y: top
                + TITLE_SLOT
                + SUBTITLE_SLOT
                + SOCIAL_SLOT * 0.5
                + style.social_offset_y,
            reel_top: top + TITLE_SLOT + SUBTITLE_SLOT + SOCIAL_SLOT + REEL_GAP + style.reel_offset_y,
        }
    }

    /// Height reserved in the page for the settled title rows (without the reel).
    pub fn rows_height() -> f32 {
        TITLE_SLOT + SUBTITLE_SLOT + SOCIAL_SLOT
    }
}

/// Paint the name and subtitle rows centred on `center_x`.
pub fn paint_titles(
    painter: &egui::Painter,
    center_x: f32,
    layout: &TitleLayout,
    style: &HeroStyle,
    site: &SiteContent,
) {
    let color = style.text_color();
    painter.text(
        egui::pos2(center_x, layout.title_center_y),
        egui::Align2::CENTER_CENTER,
        &site.name,
        egui::FontId::proportional(TITLE_SIZE * style.title_scale),
        color,
    );
    painter.text(
        egui::pos2(center_x, layout.subtitle_center_y),
        egui::Align2::CENTER_CENTER,
        &site.subtitle,
        egui::FontId::proportional(SUBTITLE_SIZE * style.subtitle_scale),
        color,
    );
}

/// Social links row centred in `rect`.
pub fn social_links(ui: &mut egui::Ui, rect: egui::Rect, style: &HeroStyle, site: &SiteContent) {
    let size = SOCIAL_SIZE * style.subtitle_scale;
    ui.allocate_ui_at_rect(rect, |ui| {
        ui.with_layout(
            egui::Layout::left_to_right(egui::Align::Center).with_main_align(egui::Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                for link in &site.socials {
                    ui.hyperlink_to(
                        egui::RichText::new(&link.label).size(size).color(style.text_color()),
                        &link.url,
                    );
                }
            },
        );
    });
}

/// Dot pattern shapes for `rect`, scrolled with the page.
pub fn dot_shapes(rect: egui::Rect, scroll_y: f32, color: egui::Color32) -> Vec<egui::Shape> {
    let mut shapes = Vec::new();
    let shift = crate::util::geometry::wrap_offset(-scroll_y, DOT_PITCH);
    let mut y = rect.top() + shift - DOT_PITCH;
    while y < rect.bottom() + DOT_PITCH {
        let mut x = rect.left() + DOT_PITCH * 0.5;
        while x < rect.right() {
            shapes.push(egui::Shape::circle_filled(egui::pos2(x, y), 2.0, color));
            x += DOT_PITCH;
        }
        y += DOT_PITCH;
    }
    shapes
}

/// Pinned hero backdrop: bumper block, overlay dots and the scroll
/// indicator.
pub fn backdrop_shapes(screen: egui::Rect, scroll_y: f32, style: &HeroStyle) -> Vec<egui::Shape> {
    let mut shapes = Vec::new();
    if style.video_opacity > 0.0 {
        let alpha = (style.video_opacity * 255.0).round() as u8;
        shapes.push(egui::Shape::rect_filled(
            screen,
            0.0,
            egui::Color32::from_rgba_unmultiplied(12, 12, 12, alpha),
        ));
        let dot_alpha = (style.video_opacity * 60.0).round() as u8;
        shapes.extend(dot_shapes(
            screen,
            scroll_y,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, dot_alpha),
        ));
    }

    if style.indicator_opacity > 0.0 {
        let alpha = (style.indicator_opacity * 255.0).round() as u8;
        let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha));
        let tip = egui::pos2(screen.center().x, screen.bottom() - 32.0);
        shapes.push(egui::Shape::line_segment([tip + egui::vec2(-9.0, -8.0), tip], stroke));
        shapes.push(egui::Shape::line_segment([tip, tip + egui::vec2(9.0, -8.0)], stroke));
    }
    shapes
}

/// Pinned hero overlay: titles, social links, hero reel and bumper link.
///
/// `ready` is false for the very first frame so the links and reel do not
/// flash at their unsettled positions.
pub fn show(
    ctx: &egui::Context,
    style: &HeroStyle,
    ready: bool,
    site: &SiteContent,
    media_base: &str,
) {
    let screen = ctx.screen_rect();
    let top = screen.top() + screen.height() * TITLE_ANCHOR;
    let layout = TitleLayout::new(top, style);

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("hero_titles"),
    ));
    paint_titles(&painter, screen.center().x, &layout, style, site);

    if !ready {
        return;
    }

    egui::Area::new(egui::Id::new("hero_overlay"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_clip_rect(screen);

            let social_rect = egui::Rect::from_center_size(
                egui::pos2(screen.center().x, layout.social_center_y),
                egui::vec2(screen.width(), SOCIAL_SLOT),
            );
            social_links(ui, social_rect, style, site);

            let reel_width = screen.width() * 0.5;
            let reel_rect = egui::Rect::from_min_size(
                egui::pos2(screen.center().x - reel_width * 0.5, layout.reel_top),
                egui::vec2(reel_width, reel_width * 9.0 / 16.0),
            );
            if reel_rect.top() < screen.bottom() {
                let url = join_media_url(media_base, &site.hero_reel.path);
                super::media::video_block_at(ui, reel_rect, &site.hero_reel.label, &url);
            }

            if style.pointer_enabled() {
                let bumper = join_media_url(media_base, &site.hero_bumper);
                let link_rect = egui::Rect::from_min_size(
                    egui::pos2(screen.left() + 24.0, screen.bottom() - 40.0),
                    egui::vec2(160.0, 24.0),
                );
                ui.put(link_rect, egui::Hyperlink::from_label_and_url("\u{25B6} bumper", bumper));
            }
        });
}

/// In-page copy of the title group, visible only once the hero hides.
///
/// Returns the top edge of the block in screen space.
pub fn content_title(ui: &mut egui::Ui, visible: bool, site: &SiteContent, media_base: &str) -> f32 {
    let style = HeroStyle::settled();
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, TitleLayout::rows_height()),
        egui::Sense::hover(),
    );

    if visible {
        let layout = TitleLayout::new(rect.top(), &style);
        paint_titles(ui.painter(), rect.center().x, &layout, &style, site);
        let social_rect = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, layout.social_center_y),
            egui::vec2(width, SOCIAL_SLOT),
        );
        social_links(ui, social_rect, &style, site);
    }

    ui.add_space(REEL_GAP);
    let reel_width = width * 0.5;
    ui.vertical_centered(|ui| {
        let (reel_rect, _) = ui.allocate_exact_size(
            egui::vec2(reel_width, reel_width * 9.0 / 16.0),
            egui::Sense::hover(),
        );
        if visible {
            let url = join_media_url(media_base, &site.hero_reel.path);
            super::media::video_block_at(ui, reel_rect, &site.hero_reel.label, &url);
        }
    });

    rect.top()
}
