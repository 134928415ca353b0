// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides aspect-ratio parsing and the fit/wrap math used
//! when laying out media blocks and the logo marquee.

/// Parse an aspect hint such as `16/9`, `16:9`, `2x3` or `1.78`.
pub fn parse_aspect(hint: &str) -> Option<f32> {
    let hint = hint.trim();
    if hint.is_empty() {
        return None;
    }
    let ratio = match hint.split_once(&['/', ':', 'x'][..]) {
        Some((w, h)) => {
            let w: f32 = w.trim().parse().ok()?;
            let h: f32 = h.trim().parse().ok()?;
            if h == 0.0 {
                return None;
            }
            w / h
        }
        None => hint.parse().ok()?,
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

/// Largest `(width, height)` with the given aspect that fits the space.
pub fn fit_within(aspect: f32, available_width: f32, available_height: f32) -> (f32, f32) {
    let available_aspect = available_width / available_height;
    if aspect > available_aspect {
        // Wider than the space - fit to width
        (available_width, available_width / aspect)
    } else {
        // Taller than the space - fit to height
        (available_height * aspect, available_height)
    }
}

/// Height of a block of `width` at the given aspect.
pub fn height_for_width(aspect: f32, width: f32) -> f32 {
    width / aspect
}

/// Wrap a marquee offset into `[0, period)`.
pub fn wrap_offset(offset: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    offset.rem_euclid(period)
}
