use crate::http::{fetch_text, FetchCause};
use crate::models::{DelegateEntry, IdentifierSource, Roster};
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Roster value meaning "no id known, derive one from the name".
const UNKNOWN_ID: &str = "unknown";

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to fetch roster from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchCause,
    },
    #[error("roster document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RosterDocument {
    delegates: Vec<RawDelegate>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDelegate {
    Full { name: String, nation_id: String },
    NameOnly(String),
}

impl From<RawDelegate> for DelegateEntry {
    fn from(raw: RawDelegate) -> Self {
        match raw {
            RawDelegate::Full { name, nation_id } => {
                let trimmed = nation_id.trim();
                let identifier = if trimmed.is_empty() || trimmed == UNKNOWN_ID {
                    IdentifierSource::Derive
                } else {
                    IdentifierSource::Explicit(nation_id)
                };
                DelegateEntry::new(name, identifier)
            }
            RawDelegate::NameOnly(name) => DelegateEntry::new(name, IdentifierSource::Derive),
        }
    }
}

/// Parses a roster document, keeping delegates in document order.
pub fn parse_roster(body: &str) -> Result<Roster, RosterError> {
    let document: RosterDocument = serde_json::from_str(body)?;
    Ok(Roster::new(
        document.delegates.into_iter().map(DelegateEntry::from).collect(),
    ))
}

/// Downloads and parses the roster. One request, no retries.
pub async fn load_roster(client: &Client, url: &str) -> Result<Roster, RosterError> {
    info!("Fetching delegate roster from {}", url);

    let body = fetch_text(client.get(url))
        .await
        .map_err(|source| RosterError::Fetch {
            url: url.to_string(),
            source,
        })?;
    debug!("Raw roster document:\n{}", body);

    let roster = parse_roster(&body)?;
    info!("Loaded {} delegate(s)", roster.len());
    Ok(roster)
}
