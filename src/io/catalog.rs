// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project catalog loading.
//!
//! A catalog is a header-row CSV file, read either from disk or over
//! HTTP. Each row becomes a [`Project`]; rows not marked visible are
//! dropped. Loading never fails the application: callers that want the
//! error use [`parse_catalog`] or [`fetch_catalog`], everyone else uses
//! [`load`] which logs and yields an empty catalog.

use crate::models::project::{Credit, Project};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source {source_name} is unreachable: {reason}")]
    Unreachable { source_name: String, reason: String },

    #[error("catalog could not be parsed: {0}")]
    Malformed(#[from] csv::Error),
}

/// Where a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a config or CLI value: `http(s)://` is a URL, anything
    /// else a file path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            CatalogSource::Url(value.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// One CSV row as written in the sheet. Missing columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogRow {
    name: String,
    subtitle: String,
    shorthand: String,
    role: String,
    credits: String,
    year: String,
    media_path: String,
    media_feature: String,
    visible: String,
    category: String,
    blurb: String,
    tags: String,
    media_aspect: String,
    link_feature: String,
    link: String,
}

impl From<CatalogRow> for Project {
    fn from(row: CatalogRow) -> Self {
        let media_paths = if row.media_path.is_empty() {
            None
        } else {
            Some(split_list(&row.media_path))
        };

        Project {
            name: row.name,
            subtitle: row.subtitle,
            shorthand: row.shorthand,
            role: row.role,
            credits: parse_credits(&row.credits),
            year: row.year,
            media_paths,
            media_feature: is_true(&row.media_feature),
            visible: is_true(&row.visible),
            category: row.category,
            blurb: row.blurb,
            tags: split_list(&row.tags),
            media_aspect: row.media_aspect,
            link_feature: is_true(&row.link_feature),
            link: row.link,
        }
    }
}

/// Sheet booleans are the literal string `TRUE`; anything else is false.
fn is_true(value: &str) -> bool {
    value == "TRUE"
}

/// Split a comma-separated list, trimming items and dropping empty ones.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `label,person;label,person` credit groups.
///
/// Groups missing either the label or the person are dropped.
pub fn parse_credits(value: &str) -> Vec<Credit> {
    value
        .split(';')
        .filter_map(|group| {
            let mut parts = group.trim().split(',').map(str::trim);
            let credit = parts.next().unwrap_or_default();
            let person = parts.next().unwrap_or_default();
            if credit.is_empty() || person.is_empty() {
                return None;
            }
            Some(Credit {
                credit: credit.to_string(),
                person: person.to_string(),
            })
        })
        .collect()
}

/// Parse catalog text into the visible projects it contains.
///
/// Rows shorter than the header are padded with empty fields.
pub fn parse_catalog(text: &str) -> Result<Vec<Project>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut projects = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: CatalogRow = record.deserialize(Some(&headers))?;
        let project = Project::from(row);
        if project.visible {
            projects.push(project);
        }
    }
    Ok(projects)
}

/// Read the raw catalog text from its source.
pub fn fetch_text(source: &CatalogSource) -> Result<String, CatalogError> {
    let unreachable_err = |reason: String| CatalogError::Unreachable {
        source_name: source.to_string(),
        reason,
    };

    match source {
        CatalogSource::Path(path) => std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                CatalogError::Malformed(csv::Error::from(e))
            } else {
                unreachable_err(e.to_string())
            }
        }),
        CatalogSource::Url(url) => reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| unreachable_err(e.to_string())),
    }
}

/// Fetch and parse a catalog.
pub fn fetch_catalog(source: &CatalogSource) -> Result<Vec<Project>, CatalogError> {
    let text = fetch_text(source)?;
    parse_catalog(&text)
}

/// Load a catalog, logging failures and falling back to an empty list.
pub fn load(source: &CatalogSource) -> Vec<Project> {
    match fetch_catalog(source) {
        Ok(projects) => {
            log::info!("Loaded {} projects from {}", projects.len(), source);
            projects
        }
        Err(e) => {
            log::error!("Error parsing projects: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::MediaKind;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const HEADER: &str = "name,subtitle,shorthand,role,credits,year,media_path,media_feature,visible,category,blurb,tags,media_aspect,link_feature,link";

    #[test]
    fn test_hidden_rows_are_dropped() {
        let text = format!(
            "{}\nShown,,shown,,,2023,,,TRUE,VFX,,,,,\nHidden,,hidden,,,2023,,,FALSE,VFX,,,,,\nLower,,lower,,,2023,,,true,VFX,,,,,\n",
            HEADER
        );
        let projects = parse_catalog(&text).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].shorthand, "shown");
    }

    #[test]
    fn test_blank_visible_row_defaults() {
        let text = format!("{}\n,,,,,,,,TRUE,,,,,,\n", HEADER);
        let projects = parse_catalog(&text).unwrap();
        assert_eq!(
            projects,
            vec![Project {
                visible: true,
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let text = "name,shorthand,visible\nFoo,foo1,TRUE\n";
        let projects = parse_catalog(text).unwrap();
        assert_eq!(projects.len(), 1);
        let foo = &projects[0];
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.role, "");
        assert!(foo.credits.is_empty());
        assert!(foo.tags.is_empty());
        assert_eq!(foo.media_paths, None);
        assert!(!foo.media_feature);
    }

    #[test]
    fn test_credit_missing_person_is_dropped() {
        let credits = parse_credits("Client,Acme Inc;Director,");
        assert_eq!(
            credits,
            vec![Credit {
                credit: "Client".into(),
                person: "Acme Inc".into(),
            }]
        );
    }

    #[test]
    fn test_credits_trim_and_links() {
        let credits = parse_credits(" Director , Jane Doe[https://jane.example.com] ; ,Nobody; Edit,Sam ");
        assert_eq!(credits.len(), 2);
        assert_eq!(credits[0].credit, "Director");
        assert_eq!(credits[0].person, "Jane Doe[https://jane.example.com]");
        assert_eq!(credits[1].credit, "Edit");
        assert_eq!(credits[1].person, "Sam");
        assert!(parse_credits("").is_empty());
    }

    #[test]
    fn test_media_and_year_scenario() {
        let text = format!(
            "{}\nFoo,,foo1,,,2024,\"images/a.jpg,b.webm\",,TRUE,VFX,,,,,\n",
            HEADER
        );
        let projects = parse_catalog(&text).unwrap();
        let foo = &projects[0];
        assert_eq!(
            foo.media_paths,
            Some(vec!["images/a.jpg".to_string(), "b.webm".to_string()])
        );
        let media = foo.media("https://media.example.com");
        assert_eq!(media[0].kind, MediaKind::Image);
        assert_eq!(media[1].kind, MediaKind::Video);
        assert_eq!(foo.display_year(), "2024");
        assert_eq!(foo.category, "VFX");
    }

    #[test]
    fn test_lists_trim_and_drop_empty() {
        let text = format!(
            "{}\nFoo,,foo1,,,2024,\" a.jpg , ,b.png,\",TRUE,TRUE,MoGraph,,\"comp, ,3D \",2/3,TRUE,https://x.example\n",
            HEADER
        );
        let foo = &parse_catalog(&text).unwrap()[0];
        assert_eq!(
            foo.media_paths,
            Some(vec!["a.jpg".to_string(), "b.png".to_string()])
        );
        assert_eq!(foo.tags, vec!["comp".to_string(), "3D".to_string()]);
        assert!(foo.media_feature);
        assert!(foo.link_feature);
        assert_eq!(foo.external_link(), Some("https://x.example"));
    }

    #[test]
    fn test_commas_only_media_is_empty_list_not_none() {
        let text = format!("{}\nFoo,,foo1,,,2024,\" , \",,TRUE,,,,,,\n", HEADER);
        let foo = &parse_catalog(&text).unwrap()[0];
        assert_eq!(foo.media_paths, Some(Vec::new()));
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            CatalogSource::parse("https://example.com/projects.csv"),
            CatalogSource::Url("https://example.com/projects.csv".into())
        );
        assert_eq!(
            CatalogSource::parse("data/projects.csv"),
            CatalogSource::Path(PathBuf::from("data/projects.csv"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "Foo,,foo1,,,2024,,,TRUE,VFX,,,,,").unwrap();
        let projects = load(&CatalogSource::Path(file.path().to_path_buf()));
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_unreachable_source_yields_empty() {
        let source = CatalogSource::Path(PathBuf::from("/nonexistent/folio/projects.csv"));
        assert!(matches!(
            fetch_catalog(&source),
            Err(CatalogError::Unreachable { .. })
        ));
        assert!(load(&source).is_empty());
    }

    #[test]
    fn test_invalid_utf8_file_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name,visible\n\xff\xfe,TRUE\n").unwrap();
        let source = CatalogSource::Path(file.path().to_path_buf());
        assert!(matches!(
            fetch_catalog(&source),
            Err(CatalogError::Malformed(_))
        ));
        assert!(load(&source).is_empty());
    }

    #[test]
    fn test_short_row_keeps_neighbours() {
        let text = "name,shorthand,visible,category,blurb\n\
                    First,a1,TRUE,VFX,one\n\
                    Short,s1\n\
                    Last,z1,TRUE,MoGraph,two\n";
        let projects = parse_catalog(text).unwrap();
        let shorthands: Vec<&str> = projects.iter().map(|p| p.shorthand.as_str()).collect();
        assert_eq!(shorthands, vec!["a1", "z1"]);
    }

    #[test]
    fn test_short_visible_row_defaults_missing_fields() {
        let text = "name,shorthand,visible,category,blurb,tags\n\
                    Full,f1,TRUE,VFX,text,a\n\
                    Short,s1,TRUE\n";
        let projects = parse_catalog(text).unwrap();
        assert_eq!(projects.len(), 2);
        let short = &projects[1];
        assert_eq!(short.name, "Short");
        assert_eq!(short.category, "");
        assert_eq!(short.blurb, "");
        assert!(short.tags.is_empty());
    }
}
