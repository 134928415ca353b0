// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery filtering and lightbox navigation.
//!
//! This module holds the category selection behind the projects list and
//! the ring navigation used by the lightbox to step between projects.

use super::project::Project;

/// Categories offered as toggles above the projects list.
pub const CATEGORIES: [&str; 2] = ["VFX", "MoGraph"];

/// Return the projects matching the selected categories.
///
/// An empty selection means no filtering.
pub fn filter_projects<'a, S: AsRef<str>>(
    projects: &'a [Project],
    selected: &[S],
) -> Vec<&'a Project> {
    if selected.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| {
            !p.category.is_empty() && selected.iter().any(|c| c.as_ref() == p.category)
        })
        .collect()
}

/// Active category toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Vec<String>,
    allow_empty: bool,
}

impl CategorySelection {
    /// Create an empty selection (everything shown).
    ///
    /// With `allow_empty` false, switching off the last active category
    /// switches on the other one instead.
    pub fn new(allow_empty: bool) -> Self {
        Self {
            selected: Vec::new(),
            allow_empty,
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.iter().any(|c| c == category)
    }

    /// Flip a category on or off.
    pub fn toggle(&mut self, category: &str) {
        if !self.is_selected(category) {
            self.selected.push(category.to_string());
            return;
        }

        self.selected.retain(|c| c != category);
        if self.selected.is_empty() && !self.allow_empty {
            if let Some(other) = CATEGORIES.iter().find(|c| **c != category) {
                log::debug!("Category {} was the last active, switching to {}", category, other);
                self.selected.push((*other).to_string());
            }
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.selected)
    }
}

/// Lightbox navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Step from the project keyed by `current` to its neighbour in `projects`.
///
/// The list is treated as a ring. Returns `None` (no-op) when the list
/// has fewer than two entries or `current` is not in it.
pub fn navigate<'a>(
    projects: &'a [Project],
    current: &str,
    direction: Direction,
) -> Option<&'a Project> {
    let len = projects.len();
    if len <= 1 {
        return None;
    }
    let index = projects.iter().position(|p| p.shorthand == current)?;
    let next = match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    };
    projects.get(next)
}
