// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for catalogs, media and exports.

pub mod catalog;
pub mod media;
pub mod serialization;
