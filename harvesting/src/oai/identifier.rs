use std::str::FromStr;
use crate::error::Error;

/// An OAI identifier split into its three parts, e.g.
/// `oai:vtechworks.lib.vt.edu:10919/19700`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierParts {
    pub scheme: String,
    pub host: String,
    pub handle: String,
}

impl IdentifierParts {
    /// The full-record view of the item on the repository that issued the identifier.
    pub fn record_url(&self) -> String {
        format!("http://{}/handle/{}?show=full", self.host, self.handle)
    }
}

impl FromStr for IdentifierParts {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = identifier.split(':').collect();
        match parts.as_slice() {
            [scheme, host, handle] => Ok(IdentifierParts {
                scheme: scheme.to_string(),
                host: host.to_string(),
                handle: handle.to_string(),
            }),
            _ => Err(Error::MalformedIdentifier {
                identifier: String::from(identifier),
                parts: parts.len(),
            }),
        }
    }
}

pub fn record_url(identifier: &str) -> Result<String, Error> {
    identifier.parse::<IdentifierParts>().map(|parts| parts.record_url())
}
