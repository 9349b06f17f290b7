use crate::error::Result;
use crate::oai::identifier::record_url;

/// Characters the original link service refused at either end of a set name.
const UNSAFE_EDGE_CHARS: &[char] = &[
    ' ', '\t', '\r', '\n', '\'', '"', ';', ':', '&', '=', '<', '>', '(', ')', '{', '}', '[', ']',
];

/// Strip characters that would break out of the `set` query value.
/// Callers run this on user input before handing the name to
/// [`crate::Harvester::harvest`].
pub fn sanitize_collection(raw: &str) -> String {
    raw.trim_matches(UNSAFE_EDGE_CHARS).to_string()
}

/// All identifiers harvested for one collection, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionResult {
    collection: String,
    identifiers: Vec<String>,
}

impl CollectionResult {
    pub fn new(collection: &str, identifiers: Vec<String>) -> Self {
        CollectionResult {
            collection: String::from(collection),
            identifiers,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// An empty collection and one the server does not know look the same.
    pub fn has_records(&self) -> bool {
        !self.is_empty()
    }

    /// Record-view URL for each identifier, resolved as the iterator is
    /// consumed. A bad identifier yields an error in its position and does
    /// not stop the rest.
    pub fn urls(&self) -> impl Iterator<Item = Result<String>> + '_ {
        self.identifiers.iter().map(|identifier| record_url(identifier))
    }
}
