// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (images).
//!
//! This module fetches image files from the media base (HTTP or a local
//! directory), decodes them off the UI thread and turns them into egui
//! textures. Videos are not decoded; the UI shows a play block that
//! opens them externally.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Decoded RGBA image ready for upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode image bytes into RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Fetch raw media bytes from a URL or local path.
pub fn fetch_bytes(location: &str) -> Result<Vec<u8>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let response = reqwest::blocking::get(location)?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    } else {
        std::fs::read(location).with_context(|| format!("reading {}", location))
    }
}

/// Texture state of one media URL.
pub enum MediaState {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

type LoadResult = (String, Result<LoadedImage, String>);

/// Image textures keyed by URL, loaded in the background on first request.
pub struct MediaCache {
    entries: HashMap<String, MediaState>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaCache {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            entries: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Look up a URL, starting a background load the first time it is seen.
    pub fn get(&mut self, url: &str) -> &MediaState {
        if !self.entries.contains_key(url) {
            self.spawn_load(url.to_string());
            self.entries.insert(url.to_string(), MediaState::Loading);
        }
        &self.entries[url]
    }

    fn spawn_load(&self, url: String) {
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = fetch_bytes(&url)
                .and_then(|bytes| decode_image(&bytes))
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send((url, result));
        });
    }

    /// Upload finished loads as textures. Returns true if anything changed.
    pub fn poll(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;
        while let Ok((url, result)) = self.receiver.try_recv() {
            let state = match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(url.clone(), color_image, egui::TextureOptions::LINEAR);
                    log::debug!("Loaded media {} ({}x{})", url, loaded.width, loaded.height);
                    MediaState::Ready {
                        texture,
                        size: (loaded.width, loaded.height),
                    }
                }
                Err(e) => {
                    log::error!("Failed to load media {}: {}", url, e);
                    MediaState::Failed
                }
            };
            self.entries.insert(url, state);
            changed = true;
        }
        changed
    }

    pub fn is_loading(&self) -> bool {
        self.entries
            .values()
            .any(|state| matches!(state, MediaState::Loading))
    }
}
