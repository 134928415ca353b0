// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Math and scheduling helpers shared by the UI.

pub mod coalesce;
pub mod geometry;
pub mod interpolate;
