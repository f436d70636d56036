use strsim::jaro_winkler;

use crate::models::SnackOption;
use crate::planner::constants::{SNACK_MATCH_LIMIT, SNACK_MATCH_THRESHOLD};

fn is_close_enough(score: f64) -> bool {
    score >= SNACK_MATCH_THRESHOLD
}

/// Fuzzy candidates for a typed snack name, best first.
pub fn rank_snack_matches<'a>(
    snacks: &[&'a SnackOption],
    query: &str,
) -> Vec<(&'a SnackOption, f64)> {
    let query = query.trim().to_lowercase();

    let mut candidates: Vec<(&SnackOption, f64)> = snacks
        .iter()
        .map(|s| (*s, jaro_winkler(&s.name.to_lowercase(), &query)))
        .filter(|(_, score)| is_close_enough(*score))
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(SNACK_MATCH_LIMIT);
    candidates
}

/// Resolve a typed snack name.
///
/// Tries an exact case-insensitive match, then a unique substring match,
/// then the best fuzzy match.
pub fn find_snack<'a>(snacks: &[&'a SnackOption], query: &str) -> Option<&'a SnackOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = snacks.iter().find(|s| s.name.to_lowercase() == needle) {
        return Some(*exact);
    }

    let containing: Vec<&SnackOption> = snacks
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .copied()
        .collect();
    if containing.len() == 1 {
        return Some(containing[0]);
    }

    rank_snack_matches(snacks, &needle)
        .first()
        .map(|(snack, _)| *snack)
}
