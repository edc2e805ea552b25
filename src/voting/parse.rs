use crate::models::NO_VOTE;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GA_VOTE: Regex = Regex::new(r"(?is)<GAVOTE\s*>(.*?)</GAVOTE\s*>").unwrap();
    static ref SC_VOTE: Regex = Regex::new(r"(?is)<SCVOTE\s*>(.*?)</SCVOTE\s*>").unwrap();
}

/// Both chamber positions pulled from a `q=wa_votes` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaVotes {
    pub general_assembly: String,
    pub security_council: String,
}

/// Never fails. Whatever isn't there comes back as [`NO_VOTE`].
pub fn parse_wa_votes(body: &str) -> WaVotes {
    WaVotes {
        general_assembly: extract(&GA_VOTE, body),
        security_council: extract(&SC_VOTE, body),
    }
}

fn extract(pattern: &Regex, body: &str) -> String {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NO_VOTE.to_string())
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
