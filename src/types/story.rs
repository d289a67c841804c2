//! Story document types
//!
//! Two wire formats exist. Modern documents wrap everything under a
//! top-level `ProjectEngine` object; legacy documents are a flat ordered
//! `content` list of text and interactive-component items. A document with
//! neither marker is malformed and is treated the same as a failed fetch.

use serde::{Deserialize, Serialize};

/// Parsed story document, one variant per wire format
#[derive(Debug, Clone, PartialEq)]
pub enum StoryDocument {
    Modern(ProjectEngine),
    Legacy(LegacyStory),
}

#[derive(Debug, thiserror::Error)]
pub enum StoryFormatError {
    #[error("document has neither a ProjectEngine block nor a content list")]
    MissingMarker,
    #[error("malformed story document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoryDocument {
    /// Classify and parse a raw JSON document.
    ///
    /// The presence of the `ProjectEngine` key selects the modern path;
    /// otherwise a `content` array selects the legacy path.
    pub fn from_json(value: serde_json::Value) -> Result<Self, StoryFormatError> {
        if let Some(engine) = value.get("ProjectEngine") {
            let engine: ProjectEngine = serde_json::from_value(engine.clone())?;
            return Ok(Self::Modern(engine));
        }
        if value.get("content").is_some_and(|c| c.is_array()) {
            let legacy: LegacyStory = serde_json::from_value(value)?;
            return Ok(Self::Legacy(legacy));
        }
        Err(StoryFormatError::MissingMarker)
    }
}

/// Modern story payload, as stored under the `ProjectEngine` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEngine {
    #[serde(rename = "Metadata")]
    pub metadata: StoryMetadata,
    #[serde(rename = "Timeline", default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(rename = "SacredLogic", default)]
    pub sacred_logic: Option<SacredLogic>,
    #[serde(rename = "Footer", default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "CoverImage", default)]
    pub cover_image: Option<String>,
}

/// One dated event on the narrative timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Connection", default)]
    pub connection: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SacredLogic {
    #[serde(rename = "Concept")]
    pub concept: Concept,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    #[serde(rename = "Equation", default)]
    pub equation: Option<String>,
    #[serde(rename = "Paradigm", default)]
    pub paradigm: Option<String>,
    #[serde(rename = "Philosophy", default)]
    pub philosophy: Option<String>,
    #[serde(rename = "History", default)]
    pub history: Option<String>,
}

impl Concept {
    /// Text body for the concept block; older documents used `History`
    /// where newer ones use `Philosophy`
    pub fn body(&self) -> &str {
        self.philosophy
            .as_deref()
            .or(self.history.as_deref())
            .unwrap_or("")
    }
}

/// Legacy flat story document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyStory {
    pub content: Vec<LegacyItem>,
}

/// One item of a legacy content list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyItem {
    Text(String),
    Component {
        #[serde(rename = "type")]
        kind: String,
        name: String,
        #[serde(default)]
        props: serde_json::Value,
    },
}
