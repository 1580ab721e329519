//! Share event model.
//!
//! A [`ShareEvent`] is the decoded form of what the operating system hands
//! over when another app shares or opens content with us. It may carry its
//! payload in three mutually exclusive places:
//!
//! - `clip_items`: a multi-item payload (multi-select share), entries may be null
//! - `stream`: a single stream locator
//! - `data`: a single addressed resource (typically from a VIEW action)
//!
//! Locators are kept in their wire form. The event itself holds no policy:
//! the normalizer reads it through [`ShareEventSource`], picks one source by
//! precedence and parses only that source's locators. A malformed locator in
//! a source that loses precedence never rejects the event.

use crate::ports::ShareEventSource;
use crate::ShareError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_items: Option<Vec<Option<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Map<String, Value>>,
}

impl ShareEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    /// Decode an event from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, ShareError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode an event from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ShareError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_clip_items(mut self, items: Vec<Option<String>>) -> Self {
        self.clip_items = Some(items);
        self
    }

    pub fn with_stream(mut self, locator: impl Into<String>) -> Self {
        self.stream = Some(locator.into());
        self
    }

    pub fn with_data(mut self, locator: impl Into<String>) -> Self {
        self.data = Some(locator.into());
        self
    }

    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extras
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }
}

impl ShareEventSource for ShareEvent {
    fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    fn clip_items(&self) -> Option<&[Option<String>]> {
        self.clip_items.as_deref()
    }

    fn stream_locator(&self) -> Option<&str> {
        self.stream.as_deref()
    }

    fn data_locator(&self) -> Option<&str> {
        self.data.as_deref()
    }

    fn bool_extra(&self, key: &str) -> Option<bool> {
        self.extras.as_ref()?.get(key)?.as_bool()
    }
}

/// Which part of the event the items were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    ClipData,
    Stream,
    Data,
}

impl PayloadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadSource::ClipData => "clip_data",
            PayloadSource::Stream => "stream",
            PayloadSource::Data => "data",
        }
    }
}

impl std::fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
