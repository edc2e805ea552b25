use crate::models::{Roster, VoteResult};
use crate::voting::VoteSource;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Asks `source` for every delegate on the roster, one at a time and in
/// roster order, sleeping `delay` between consecutive requests.
///
/// Failures are logged and skipped; only successful lookups make it into the
/// returned list. At most one request is in flight at a time.
pub async fn poll_all<S>(source: &S, roster: &Roster, delay: Duration) -> Vec<VoteResult>
where
    S: VoteSource + ?Sized,
{
    info!("Checking votes for {} delegate(s)...", roster.len());
    let mut results = Vec::with_capacity(roster.len());
    let mut skipped = 0usize;

    for (index, entry) in roster.entries().iter().enumerate() {
        if index > 0 {
            sleep(delay).await;
        }

        match source.fetch_vote(entry).await {
            Ok(result) => {
                debug!(
                    "Got votes for {} ({}) at {}",
                    result.label,
                    result.identifier,
                    result.fetched_at.to_rfc3339()
                );
                results.push(result);
            }
            Err(e) => {
                skipped += 1;
                warn!("Skipping {}: {}", entry.display_name, e);
            }
        }
    }

    info!(
        "Vote check finished: {} checked, {} succeeded, {} skipped",
        roster.len(),
        results.len(),
        skipped
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchCause;
    use crate::models::{DelegateEntry, IdentifierSource};
    use crate::nation::resolve_identifier;
    use crate::voting::VoteFetchError;
    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// Answers from memory, failing for the listed display names.
    #[derive(Default)]
    struct StubSource {
        failing: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl VoteSource for StubSource {
        async fn fetch_vote(&self, entry: &DelegateEntry) -> Result<VoteResult, VoteFetchError> {
            self.calls.lock().unwrap().push(entry.display_name.clone());
            let nation = resolve_identifier(entry);
            if self.failing.iter().any(|name| *name == entry.display_name) {
                return Err(VoteFetchError::Request {
                    nation,
                    source: FetchCause::Status(StatusCode::SERVICE_UNAVAILABLE),
                });
            }
            Ok(VoteResult {
                label: entry.display_name.clone(),
                identifier: nation,
                general_assembly: "FOR".to_string(),
                security_council: "AGAINST".to_string(),
                fetched_at: Utc::now(),
            })
        }
    }

    fn roster_of(names: &[&str]) -> Roster {
        Roster::new(
            names
                .iter()
                .map(|name| DelegateEntry::new(*name, IdentifierSource::Derive))
                .collect(),
        )
    }

    fn labels(results: &[VoteResult]) -> Vec<&str> {
        results.iter().map(|r| r.label.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_roster_order() {
        let source = StubSource::default();
        let names = ["Lazarus", "Balder", "Osiris", "Europe"];

        let results = poll_all(&source, &roster_of(&names), Duration::from_millis(10)).await;

        assert_eq!(labels(&results), names);
        assert_eq!(*source.calls.lock().unwrap(), names);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_entry_is_skipped_and_batch_continues() {
        let source = StubSource {
            failing: vec!["Balder"],
            ..StubSource::default()
        };

        let results = poll_all(
            &source,
            &roster_of(&["Lazarus", "Balder", "Osiris"]),
            Duration::from_millis(10),
        )
        .await;

        assert_eq!(labels(&results), ["Lazarus", "Osiris"]);
        assert_eq!(source.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_once_between_two_entries() {
        let source = StubSource::default();
        let delay = Duration::from_secs(1);

        let start = tokio::time::Instant::now();
        let results = poll_all(&source, &roster_of(&["Lazarus", "Balder"]), delay).await;
        let elapsed = start.elapsed();

        assert_eq!(results.len(), 2);
        assert!(elapsed >= delay, "elapsed {elapsed:?}");
        assert!(elapsed < delay * 2, "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_roster_returns_immediately() {
        let source = StubSource::default();
        let start = tokio::time::Instant::now();

        let results = poll_all(&source, &Roster::default(), Duration::from_secs(5)).await;

        assert!(results.is_empty());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
