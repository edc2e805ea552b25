pub mod fetcher;
pub mod parse;

use crate::http::FetchCause;
use crate::models::{DelegateEntry, VoteResult};
use async_trait::async_trait;
use thiserror::Error;

/// A vote lookup that failed for one delegate. The batch carries on.
#[derive(Debug, Error)]
pub enum VoteFetchError {
    #[error("no nation id can be derived from {display_name:?}")]
    EmptyIdentifier { display_name: String },
    #[error("vote request for {nation} failed: {source}")]
    Request {
        nation: String,
        #[source]
        source: FetchCause,
    },
}

// Anything the poller can ask for a delegate's votes
#[async_trait]
pub trait VoteSource: Send + Sync {
    async fn fetch_vote(&self, entry: &DelegateEntry) -> Result<VoteResult, VoteFetchError>;
}
