//! Domain types for the book catalog.
//!
//! # Design
//! Optional fields are `Option` and are omitted from JSON when absent, so a
//! stored record serializes with exactly the fields its last writer supplied.
//! `finished` is the only derived field and is never read from a payload.
//!
//! Numeric fields keep the client's JSON number as sent (integer, fraction,
//! or negative); comparisons go through its `f64` value.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single book record held in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_page: Option<Number>,
    pub finished: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    pub inserted_at: String,
    pub updated_at: String,
}

impl Book {
    /// Overwrite every caller-owned field from `payload`, keeping `id` and
    /// `inserted_at`. `name` is taken separately because the payload's is
    /// optional and has already been checked.
    pub(crate) fn overwrite(&mut self, name: String, payload: BookPayload, updated_at: String) {
        self.finished = payload.is_finished();
        self.name = name;
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.updated_at = updated_at;
    }

    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Request payload for creating or replacing a book.
///
/// Every field is optional here; `name` presence and the page bounds are
/// checked by the catalog so the failure can carry the right message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_page: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
}

impl BookPayload {
    /// True when both page values are present and `read_page` is larger.
    /// A missing operand never compares greater.
    pub fn read_page_exceeds_page_count(&self) -> bool {
        match (as_f64(&self.read_page), as_f64(&self.page_count)) {
            (Some(read), Some(total)) => read > total,
            _ => false,
        }
    }

    /// `finished` as derived at write time: the two page values are
    /// numerically equal (`100` and `100.0` match), counting two missing
    /// values as equal.
    pub fn is_finished(&self) -> bool {
        as_f64(&self.page_count) == as_f64(&self.read_page)
    }
}

fn as_f64(number: &Option<Number>) -> Option<f64> {
    number.as_ref().and_then(Number::as_f64)
}

/// Projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// Query filters for the list endpoint. Only the first present filter, in
/// field order, is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished: Option<String>,
}

/// The single filter a `ListQuery` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    All,
    NameContains(String),
    Reading(bool),
    Finished(bool),
}

impl ListQuery {
    /// Build from raw query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    pub fn filter(&self) -> ListFilter {
        if let Some(name) = &self.name {
            return ListFilter::NameContains(name.to_lowercase());
        }
        if let Some(reading) = &self.reading {
            return ListFilter::Reading(reading == "1");
        }
        if let Some(finished) = &self.finished {
            return ListFilter::Finished(finished == "1");
        }
        ListFilter::All
    }
}

impl ListFilter {
    /// `NameContains` holds an already lowercased needle.
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::NameContains(needle) => book.name.to_lowercase().contains(needle.as_str()),
            ListFilter::Reading(flag) => book.reading == Some(*flag),
            ListFilter::Finished(flag) => book.finished == *flag,
        }
    }
}
