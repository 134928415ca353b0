// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog export.
//!
//! This module writes the loaded catalogs out as YAML or JSON so the
//! parsed records can be inspected or handed to other tools.

use crate::models::project::Project;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Both catalogs as written to an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExport {
    pub projects: Vec<Project>,
    pub film: Vec<Project>,
}

/// Export catalog data to YAML format.
pub fn export_yaml(data: &CatalogExport, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export catalog data to JSON format.
pub fn export_json(data: &CatalogExport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export by file extension (`yaml`/`yml` or `json`).
pub fn export(data: &CatalogExport, path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Credit;

    fn sample() -> CatalogExport {
        CatalogExport {
            projects: vec![Project {
                name: "Foo".into(),
                shorthand: "foo1".into(),
                credits: vec![Credit {
                    credit: "Client".into(),
                    person: "Acme Inc".into(),
                }],
                year: "2024".into(),
                media_paths: Some(vec!["images/a.jpg".into()]),
                visible: true,
                category: "VFX".into(),
                ..Default::default()
            }],
            film: Vec::new(),
        }
    }

    #[test]
    fn test_export_yaml_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        export(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("shorthand: foo1"));
        let back: CatalogExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_export_json_keeps_no_media_as_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut data = sample();
        data.projects[0].media_paths = None;
        export(&data, &path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["projects"][0]["media_paths"].is_null());
    }

    #[test]
    fn test_export_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export(&sample(), &dir.path().join("catalog.txt")).is_err());
    }
}
