// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project record data structures.
//!
//! This module defines the portfolio project record as it is exposed to
//! the rest of the application once a catalog row has been parsed, along
//! with its credits and media items.

use serde::{Deserialize, Serialize};

/// File extensions rendered as video rather than still images.
const VIDEO_EXTENSIONS: &[&str] = &["webm", "mp4", "mov", "m4v", "mkv"];

/// A single credit line, e.g. `Director` / `Jane Doe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub credit: String,
    pub person: String,
}

impl Credit {
    /// Split the person field into a display name and an optional link.
    ///
    /// People may carry an embedded link written as `Name[https://...]`.
    pub fn person_link(&self) -> (&str, Option<&str>) {
        match self.person.split_once('[') {
            Some((name, rest)) => {
                let url = rest.trim_end().trim_end_matches(']').trim();
                let url = (!url.is_empty()).then_some(url);
                (name.trim(), url)
            }
            None => (self.person.as_str(), None),
        }
    }

    /// Person name for display, with an em dash standing in for nobody.
    pub fn display_person(&self) -> &str {
        let (name, _) = self.person_link();
        if name.is_empty() {
            "\u{2014}"
        } else {
            name
        }
    }
}

/// How a media file is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a media path by its file extension.
    pub fn from_path(path: &str) -> Self {
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A media path resolved against the media base location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaItem {
    pub fn resolve(base: &str, path: &str) -> Self {
        Self {
            kind: MediaKind::from_path(path),
            url: join_media_url(base, path),
        }
    }
}

/// Join a relative media path onto a base URL or directory.
pub fn join_media_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// A portfolio project as shown in the gallery and the lightbox.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub subtitle: String,
    pub shorthand: String,
    pub role: String,
    pub credits: Vec<Credit>,
    pub year: String,
    /// `None` means the row had no media column value at all.
    pub media_paths: Option<Vec<String>>,
    pub media_feature: bool,
    pub visible: bool,
    pub category: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub media_aspect: String,
    pub link_feature: bool,
    pub link: String,
}

impl Project {
    /// Year as displayed: the last four characters of the year field.
    pub fn display_year(&self) -> &str {
        let count = self.year.chars().count();
        match self.year.char_indices().nth(count.saturating_sub(4)) {
            Some((idx, _)) => &self.year[idx..],
            None => "",
        }
    }

    /// Gallery label, `Name (Subtitle)` when a subtitle exists.
    pub fn display_name(&self) -> String {
        if self.subtitle.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.subtitle)
        }
    }

    /// Resolve every media path against `base`, in order.
    pub fn media(&self, base: &str) -> Vec<MediaItem> {
        self.media_paths
            .iter()
            .flatten()
            .map(|path| MediaItem::resolve(base, path))
            .collect()
    }

    /// External link, if the row carried one.
    pub fn external_link(&self) -> Option<&str> {
        let link = self.link.trim();
        (!link.is_empty()).then_some(link)
    }

    /// Parse the aspect hint (`16/9`, `16:9`, `1.5`) into width / height.
    pub fn aspect_ratio(&self) -> Option<f32> {
        crate::util::geometry::parse_aspect(&self.media_aspect)
    }
}
