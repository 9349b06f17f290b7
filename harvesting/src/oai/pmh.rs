use reqwest::Client;
use serde::Deserialize;
use quick_xml::de::from_str;
use url::Url;
use crate::collection::CollectionResult;
use crate::config::HarvestConfig;
use crate::error::{Error, Result};

/// OAI-PMH answers an empty or unknown set with this error code.
const NO_RECORDS_MATCH: &str = "noRecordsMatch";

#[derive(Debug, Deserialize)]
struct ResponseError {
    #[serde(rename = "@code")]
    code: String,
    #[serde(rename = "$text", default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OaiPmhRecordHeader {
    identifier: String,
}

// metadata is never read, only the header
#[derive(Debug, Deserialize)]
struct OaiPmhRecord {
    header: OaiPmhRecordHeader,
}

#[derive(Debug, Deserialize)]
struct ResumptionTokenElement {
    #[serde(rename = "@completeListSize")]
    complete_list_size: Option<String>,
    #[serde(rename = "$text", default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListRecords {
    #[serde(rename = "record", default)]
    records: Vec<OaiPmhRecord>,
    #[serde(rename = "resumptionToken")]
    resumption_token: Option<ResumptionTokenElement>,
}

#[derive(Debug, Deserialize)]
struct OaiPmhResponse {
    #[serde(rename = "error", default)]
    errors: Vec<ResponseError>,
    #[serde(rename = "ListRecords")]
    list_records: Option<ListRecords>,
}

/// Continuation state handed out by the server while more pages remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resumption {
    pub token: String,
    /// Size of the whole result set, across all pages. `None` when the
    /// server sent something that is not an integer.
    pub complete_list_size: Option<usize>,
}

/// One `ListRecords` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub identifiers: Vec<String>,
    pub resumption: Option<Resumption>,
}

fn malformed(url: &Url, message: impl Into<String>) -> Error {
    Error::MalformedResponse {
        url: url.to_string(),
        message: message.into(),
    }
}

fn parse_page(xml: &str, url: &Url) -> Result<Page> {
    let res: OaiPmhResponse = from_str(xml).map_err(|e| malformed(url, e.to_string()))?;
    if let Some(err) = res.errors.into_iter().next() {
        if err.code == NO_RECORDS_MATCH {
            return Ok(Page::default());
        }
        return Err(Error::Protocol {
            code: err.code,
            message: err.message.unwrap_or_default().trim().to_string(),
        });
    }
    let Some(list) = res.list_records else {
        return Ok(Page::default());
    };
    let identifiers = list
        .records
        .into_iter()
        .map(|rec| rec.header.identifier)
        .collect();
    let resumption = match list.resumption_token {
        Some(element) => {
            let token = element.token.unwrap_or_default().trim().to_string();
            // an empty token marks the last page
            if token.is_empty() {
                None
            } else {
                let size = element
                    .complete_list_size
                    .ok_or_else(|| malformed(url, "resumptionToken has no completeListSize"))?;
                Some(Resumption {
                    token,
                    complete_list_size: size.trim().parse().ok(),
                })
            }
        }
        None => None,
    };
    Ok(Page { identifiers, resumption })
}

/// Fetches `ListRecords` pages from one OAI-PMH endpoint.
#[derive(Debug, Clone)]
pub struct Harvester {
    client: Client,
    config: HarvestConfig,
}

impl Harvester {
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Harvester { client, config })
    }

    pub fn initial_url(&self, collection: &str) -> Url {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("verb", "ListRecords")
            .append_pair("metadataPrefix", &self.config.metadata_prefix)
            .append_pair("set", collection);
        url
    }

    /// The token carries the set and prefix, so nothing else is sent.
    pub fn continuation_url(&self, token: &str) -> Url {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("verb", "ListRecords")
            .append_pair("resumptionToken", token);
        url
    }

    pub async fn fetch_initial_page(&self, collection: &str) -> Result<Page> {
        self.fetch_page(self.initial_url(collection)).await
    }

    pub async fn fetch_next_page(&self, token: &str) -> Result<Page> {
        self.fetch_page(self.continuation_url(token)).await
    }

    async fn fetch_page(&self, url: Url) -> Result<Page> {
        tracing::debug!("Downloading {url}");
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let content = res.text().await?;
        parse_page(&content, &url)
    }

    /// Collects every identifier of `collection`, following resumption
    /// tokens until the declared list size is reached. The name must
    /// already be sanitized, see [`crate::sanitize_collection`].
    pub async fn harvest(&self, collection: &str) -> Result<CollectionResult> {
        if collection.is_empty() {
            tracing::debug!("empty collection name, nothing to harvest");
            return Ok(CollectionResult::new(collection, Vec::new()));
        }
        let first = self.fetch_initial_page(collection).await?;
        let mut identifiers = first.identifiers;
        let mut resumption = first.resumption;
        let mut pages = 1;
        while let Some(current) = resumption.take() {
            let Some(total) = current.complete_list_size else {
                tracing::warn!(collection, "completeListSize is not an integer, stopping after page {pages}");
                break;
            };
            if identifiers.len() >= total {
                break;
            }
            let next = self.fetch_next_page(&current.token).await?;
            pages += 1;
            tracing::debug!(collection, page = pages, found = next.identifiers.len(), total, "page fetched");
            if next.identifiers.is_empty() && next.resumption.is_some() {
                tracing::warn!(collection, "page {pages} was empty but still had a resumption token, stopping");
                break;
            }
            identifiers.extend(next.identifiers);
            resumption = next.resumption;
        }
        tracing::info!(collection, pages, identifiers = identifiers.len(), "harvest completed");
        Ok(CollectionResult::new(collection, identifiers))
    }
}
