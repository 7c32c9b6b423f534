use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::category::Category;
use crate::core::error::{PhayaoError, Result};


/// Bytes `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PARSE_BASE: &str = "http://phayao.local";


pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub category: Category,
    pub search: String,
}

impl Destination {
    pub fn new(category: Category, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// `/{route}?search={encoded}` as consumed by the listing pages.
    pub fn path(&self) -> String {
        format!(
            "/{}?search={}",
            self.category.route(),
            encode_component(&self.search)
        )
    }

    /// Reads a listing path back. Accepts absolute URLs as well as
    /// site-relative paths; a missing `search` parameter yields an empty
    /// search.
    pub fn parse(location: &str) -> Result<Self> {
        let base = Url::parse(PARSE_BASE)?;
        let url = base.join(location)?;

        let route = url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PhayaoError::Navigation(format!("no route in '{}'", location)))?;

        let category = Category::from_route(route)
            .ok_or_else(|| PhayaoError::Navigation(format!("unknown route '/{}'", route)))?;

        let search = url
            .query_pairs()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Ok(Self { category, search })
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Case-insensitive substring filter applied by a listing page to its
/// records for a `search` parameter. An empty search matches everything.
pub fn matches_search<'a, I>(fields: I, search: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
