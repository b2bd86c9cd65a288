//! Learning-path catalog: embedded asset, parsing, and normalization.
//!
//! DESIGN
//! ======
//! The asset keeps the historical mixed topic encodings as shipped; all of
//! the shape tolerance lives in the raw serde types here. Normalization runs
//! exactly once, on first access, and the result is shared immutably for the
//! lifetime of the app.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use std::sync::LazyLock;

use serde::Deserialize;

use super::types::{ContentEntry, ResourceLink, Section, Topic};

const CATALOG_JSON: &str = include_str!("learning_paths.json");

static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
    parse_catalog(CATALOG_JSON).expect("embedded learning-path catalog is valid")
});

/// All catalog sections in display order.
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

#[derive(Deserialize)]
struct RawCatalog {
    sections: Vec<RawSection>,
}

#[derive(Deserialize)]
struct RawSection {
    title: String,
    content: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    key: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    resources: Vec<ResourceLink>,
    #[serde(default)]
    topics: Vec<RawTopic>,
}

/// Topic encodings that accumulated in the asset over time.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopic {
    Plain(String),
    Detailed(RawTopicDetail),
}

#[derive(Deserialize)]
struct RawTopicDetail {
    #[serde(alias = "name")]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    resources: Vec<ResourceLink>,
}

fn parse_catalog(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    Ok(raw.sections.into_iter().map(normalize_section).collect())
}

fn normalize_section(raw: RawSection) -> Section {
    Section {
        title: raw.title,
        entries: raw.content.into_iter().map(normalize_entry).collect(),
    }
}

fn normalize_entry(raw: RawEntry) -> ContentEntry {
    ContentEntry {
        key: raw.key,
        description: raw.description,
        resources: raw.resources,
        topics: raw.topics.into_iter().map(normalize_topic).collect(),
    }
}

fn normalize_topic(raw: RawTopic) -> Topic {
    match raw {
        RawTopic::Plain(title) => Topic {
            title,
            description: None,
            links: Vec::new(),
        },
        RawTopic::Detailed(detail) => {
            let mut links = detail.resources;
            if let Some(url) = detail.url {
                links.insert(
                    0,
                    ResourceLink {
                        name: detail.title.clone(),
                        url,
                    },
                );
            }
            Topic {
                title: detail.title,
                description: detail.description,
                links,
            }
        }
    }
}
