// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll progress and piecewise-linear interpolation.
//!
//! Scroll offsets are normalized into a progress value in `[0, 1]` and
//! then mapped through independent linear windows. There is no easing:
//! inside a window the mapping is linear, outside it the output is held
//! flat at the nearest end of the range.

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Map `t` from the input window `[a, b]` onto `[min, max]`.
///
/// Callers must pass `a != b`.
pub fn interpolate(t: f32, (a, b): (f32, f32), (min, max): (f32, f32)) -> f32 {
    debug_assert!(a != b, "interpolation window must not be empty");
    let u = (t - a) / (b - a);
    if u <= 0.0 {
        return min;
    }
    if u >= 1.0 {
        return max;
    }
    // Rounding must not push the output past either end of the range
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    clamp(min + u * (max - min), lo, hi)
}

/// Normalized scroll progress relative to a reference element.
///
/// Progress reaches 1.0 once the page has scrolled half of the reference
/// height past the reference top. A missing or zero-height reference falls
/// back to `viewport_height`.
pub fn scroll_progress(
    scroll_y: f32,
    reference_top: f32,
    reference_height: Option<f32>,
    viewport_height: f32,
) -> f32 {
    let height = reference_height
        .filter(|h| *h > 0.0)
        .unwrap_or(viewport_height);
    if height <= 0.0 {
        return 0.0;
    }
    clamp((scroll_y - reference_top) / (height * 0.5), 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_title_scale_window() {
        assert_eq!(interpolate(0.0, (0.0, 0.6), (1.0, 0.7)), 1.0);
        assert!((interpolate(0.3, (0.0, 0.6), (1.0, 0.7)) - 0.85).abs() < 1e-6);
        assert!((interpolate(0.6, (0.0, 0.6), (1.0, 0.7)) - 0.7).abs() < 1e-6);
        assert!((interpolate(0.9, (0.0, 0.6), (1.0, 0.7)) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_color_fade() {
        assert_eq!(interpolate(0.0, (0.0, 1.0), (255.0, 0.0)), 255.0);
        assert_eq!(interpolate(1.0, (0.0, 1.0), (255.0, 0.0)), 0.0);
        assert_eq!(interpolate(0.5, (0.0, 1.0), (255.0, 0.0)).round(), 128.0);
    }

    #[test]
    fn test_progress_half_reference_height() {
        assert_eq!(scroll_progress(0.0, 0.0, Some(800.0), 600.0), 0.0);
        assert_eq!(scroll_progress(200.0, 0.0, Some(800.0), 600.0), 0.5);
        assert_eq!(scroll_progress(400.0, 0.0, Some(800.0), 600.0), 1.0);
        assert_eq!(scroll_progress(5000.0, 0.0, Some(800.0), 600.0), 1.0);
        assert_eq!(scroll_progress(50.0, 100.0, Some(800.0), 600.0), 0.0);
    }

    #[test]
    fn test_progress_falls_back_to_viewport() {
        assert_eq!(scroll_progress(300.0, 0.0, None, 600.0), 1.0);
        assert_eq!(scroll_progress(150.0, 0.0, Some(0.0), 600.0), 0.5);
        assert_eq!(scroll_progress(150.0, 0.0, None, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_flat_outside_window(
            a in -10.0f32..10.0,
            width in 0.01f32..10.0,
            min in -500.0f32..500.0,
            max in -500.0f32..500.0,
            below in 0.0f32..100.0,
            above in 0.0f32..100.0,
        ) {
            let b = a + width;
            prop_assert_eq!(interpolate(a - below, (a, b), (min, max)), min);
            prop_assert_eq!(interpolate(b + above + 1e-3, (a, b), (min, max)), max);
        }

        #[test]
        fn prop_monotonic_inside_window(
            a in -10.0f32..10.0,
            width in 0.1f32..10.0,
            min in -500.0f32..500.0,
            span in 1.0f32..500.0,
            u in 0.0f32..1.0,
            v in 0.0f32..1.0,
        ) {
            let b = a + width;
            let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
            let t0 = a + lo * width;
            let t1 = a + hi * width;
            let rising = (min, min + span);
            let falling = (min + span, min);
            prop_assert!(interpolate(t0, (a, b), rising) <= interpolate(t1, (a, b), rising));
            prop_assert!(interpolate(t0, (a, b), falling) >= interpolate(t1, (a, b), falling));
        }

        #[test]
        fn prop_strictly_monotonic_inside_window(
            a in -10.0f32..10.0,
            width in 0.1f32..10.0,
            min in -500.0f32..500.0,
            span in 1.0f32..500.0,
            u in 0.0f32..0.45,
            gap in 0.1f32..0.55,
        ) {
            let b = a + width;
            let t0 = a + u * width;
            let t1 = a + (u + gap) * width;
            let rising = (min, min + span);
            let falling = (min + span, min);
            prop_assert!(interpolate(t0, (a, b), rising) < interpolate(t1, (a, b), rising));
            prop_assert!(interpolate(t0, (a, b), falling) > interpolate(t1, (a, b), falling));
        }

        #[test]
        fn prop_flat_range_is_constant(
            a in -10.0f32..10.0,
            width in 0.1f32..10.0,
            value in -500.0f32..500.0,
            u in -0.5f32..1.5,
        ) {
            let b = a + width;
            prop_assert_eq!(interpolate(a + u * width, (a, b), (value, value)), value);
        }

        #[test]
        fn prop_progress_in_unit_range(
            scroll in -5000.0f32..5000.0,
            top in -500.0f32..500.0,
            height in 0.0f32..4000.0,
        ) {
            let p = scroll_progress(scroll, top, Some(height), 720.0);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
