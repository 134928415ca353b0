// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod logos;
pub mod media;
pub mod navbar;
pub mod sections;
