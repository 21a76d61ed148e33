use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entity type naming the device a control intent targets.
pub const DEVICE_ENTITY: &str = "device";

/// Narrow view over a recognized entity set.
///
/// Language services hand entities back in different shapes; resolution only
/// ever needs the first device value, so each shape adapts to this.
pub trait DeviceEntities {
    /// True when the set holds no entities at all.
    fn is_empty(&self) -> bool;

    /// Value of the first `device` entity, if any.
    fn first_device(&self) -> Option<&str>;
}

/// One candidate value in an [`EntityMap`].
///
/// Machine-learned entities arrive as a list of strings per match; list
/// entities arrive as plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityCandidate {
    Value(String),
    Values(Vec<String>),
}

impl EntityCandidate {
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value.as_str()),
            Self::Values(values) => values.first().map(String::as_str),
        }
    }
}

/// Entities keyed by type, each with its candidate matches in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap {
    entries: HashMap<String, Vec<EntityCandidate>>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate for an entity type.
    pub fn push(&mut self, kind: impl Into<String>, candidate: EntityCandidate) {
        self.entries.entry(kind.into()).or_default().push(candidate);
    }

    pub fn with_value(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(kind, EntityCandidate::Value(value.into()));
        self
    }
}

impl DeviceEntities for EntityMap {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_device(&self) -> Option<&str> {
        self.entries
            .get(DEVICE_ENTITY)
            .and_then(|candidates| candidates.first())
            .and_then(EntityCandidate::first)
    }
}

/// A single typed entity as returned by speech-side recognition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub entity: String,
}

impl EntityRecord {
    pub fn new(kind: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            entity: entity.into(),
        }
    }
}

/// Entities as an ordered list of typed records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityList {
    records: Vec<EntityRecord>,
}

impl EntityList {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self { records }
    }
}

impl From<Vec<EntityRecord>> for EntityList {
    fn from(records: Vec<EntityRecord>) -> Self {
        Self::new(records)
    }
}

impl DeviceEntities for EntityList {
    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn first_device(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.kind == DEVICE_ENTITY)
            .map(|record| record.entity.as_str())
    }
}

/// Parse entities from JSON, or from a file when `raw` is `@path`.
///
/// A JSON array is read as [`EntityList`] records, anything else as an
/// [`EntityMap`].
pub fn parse_entities(raw: &str) -> Result<Box<dyn DeviceEntities>> {
    let json = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read entities file {}: {}", path, e))?,
        None => raw.to_string(),
    };
    let value: serde_json::Value = serde_json::from_str(&json).context("parse entities json")?;
    if value.is_array() {
        let list: EntityList = serde_json::from_value(value).context("parse entity records")?;
        Ok(Box::new(list))
    } else {
        let map: EntityMap = serde_json::from_value(value).context("parse entity map")?;
        Ok(Box::new(map))
    }
}
