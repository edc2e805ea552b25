use crate::models::VoteResult;

/// One display line per result, in the order given.
pub fn render(results: &[VoteResult]) -> Vec<String> {
    results.iter().map(render_line).collect()
}

fn render_line(result: &VoteResult) -> String {
    format!(
        "Region: {}, Delegate ID: {}, Vote: {}",
        result.label,
        result.identifier,
        result.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_VOTE;
    use chrono::Utc;

    fn result(label: &str, identifier: &str, ga: &str, sc: &str) -> VoteResult {
        VoteResult {
            label: label.to_string(),
            identifier: identifier.to_string(),
            general_assembly: ga.to_string(),
            security_council: sc.to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn renders_one_line_per_result_in_order() {
        let lines = render(&[
            result("The North Pacific", "Mei_Nation", "FOR", "AGAINST"),
            result("Balder", "balder", NO_VOTE, "FOR"),
        ]);

        assert_eq!(
            lines,
            [
                "Region: The North Pacific, Delegate ID: Mei_Nation, Vote: GA: FOR, SC: AGAINST",
                "Region: Balder, Delegate ID: balder, Vote: GA: No vote, SC: FOR",
            ]
        );
    }

    #[test]
    fn no_results_no_lines() {
        assert!(render(&[]).is_empty());
    }
}
