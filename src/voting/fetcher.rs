use crate::config::Config;
use crate::http::fetch_text;
use crate::models::{DelegateEntry, VoteResult};
use crate::nation::resolve_identifier;
use crate::voting::parse::parse_wa_votes;
use crate::voting::{VoteFetchError, VoteSource};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::Client;

const VOTES_QUERY: &str = "wa_votes";

/// Looks up World Assembly votes through the NationStates-style `api.cgi` endpoint.
#[derive(Debug, Clone)]
pub struct ApiVoteFetcher {
    client: Client,
    api_url: String,
}

impl ApiVoteFetcher {
    /// `client` must already carry the User-Agent header, see [`crate::http::build_client`].
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.api_url.clone())
    }
}

#[async_trait]
impl VoteSource for ApiVoteFetcher {
    async fn fetch_vote(&self, entry: &DelegateEntry) -> Result<VoteResult, VoteFetchError> {
        let nation = resolve_identifier(entry);
        if nation.is_empty() {
            return Err(VoteFetchError::EmptyIdentifier {
                display_name: entry.display_name.clone(),
            });
        }

        debug!("Requesting votes for {} ({})", entry.display_name, nation);
        let request = self
            .client
            .get(&self.api_url)
            .query(&[("nation", nation.as_str()), ("q", VOTES_QUERY)]);

        let body = match fetch_text(request).await {
            Ok(body) => body,
            Err(source) => return Err(VoteFetchError::Request { nation, source }),
        };

        let votes = parse_wa_votes(&body);
        Ok(VoteResult {
            label: entry.display_name.clone(),
            identifier: nation,
            general_assembly: votes.general_assembly,
            security_council: votes.security_council,
            fetched_at: Utc::now(),
        })
    }
}
