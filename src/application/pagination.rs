/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Merging of server-paged OData collections.
//!
//! A paged collection arrives as a chain of JSON objects, each holding a slice
//! of the items under `value` and, except for the last one, an
//! `@odata.nextLink` pointing at the next page.

use crate::constants::{NEXT_LINK_PROPERTY, SERVICE_ROOT_SUFFIX, VALUE_PROPERTY};
use crate::error::AppError;
use serde_json::{Map, Value};
use url::Url;

/// Accumulates the pages of one collection into a single JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedFeed {
    data: Map<String, Value>,
    pages: usize,
}

impl PagedFeed {
    /// Creates an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages merged so far
    #[must_use]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Merges one page.
    ///
    /// Once a `value` array is held, later pages only contribute their `value`
    /// items. Until then every property of the page except the next link is
    /// copied over.
    pub fn merge_page(&mut self, mut page: Map<String, Value>) {
        self.pages += 1;

        let appendable = matches!(self.data.get(VALUE_PROPERTY), Some(Value::Array(_)))
            && matches!(page.get(VALUE_PROPERTY), Some(Value::Array(_)));
        if appendable {
            if let (Some(Value::Array(items)), Some(Value::Array(more))) =
                (self.data.get_mut(VALUE_PROPERTY), page.remove(VALUE_PROPERTY))
            {
                items.extend(more);
            }
            return;
        }

        for (name, value) in page {
            if name != NEXT_LINK_PROPERTY {
                self.data.insert(name, value);
            }
        }
    }

    /// Merged collection
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}

/// Splits a page into its object form, rejecting arrays and scalars
pub fn page_object(page: Value) -> Result<Map<String, Value>, AppError> {
    match page {
        Value::Object(map) => Ok(map),
        other => Err(AppError::InvalidResponse(format!(
            "expected a JSON object page, got {other}"
        ))),
    }
}

/// Next link advertised by a page, if any.
///
/// Null, empty or non-string links end the chain.
#[must_use]
pub fn next_link(page: &Map<String, Value>) -> Option<&str> {
    page.get(NEXT_LINK_PROPERTY)
        .and_then(Value::as_str)
        .filter(|link| !link.is_empty())
}

/// Resolves a next link against the URL of the page that produced it.
///
/// Absolute links (a scheme followed by `://`) are followed as is. A relative
/// link is appended to the service root of `current_url`, i.e. everything up
/// to and including the first `.svc/`. Without such a segment the link is returned unchanged.
#[must_use]
pub fn resolve_next_link(current_url: &str, link: &str) -> String {
    if link.contains("://") && Url::parse(link).is_ok() {
        return link.to_string();
    }
    match current_url.find(SERVICE_ROOT_SUFFIX) {
        Some(index) => {
            let root = &current_url[..index + SERVICE_ROOT_SUFFIX.len()];
            format!("{root}{link}")
        }
        None => link.to_string(),
    }
}
