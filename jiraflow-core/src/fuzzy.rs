/// Result of matching a query against a list of branch names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Indices into the candidate list: substring matches first, then subsequence-only
    /// matches, each group in original order.
    pub matches: Vec<usize>,
    pub has_results: bool,
}

impl SearchState {
    /// State for an empty query: every candidate, in order
    pub fn all(candidate_count: usize) -> Self {
        Self {
            query: String::new(),
            matches: (0..candidate_count).collect(),
            has_results: true,
        }
    }

    pub fn matched<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Vec<&'a str> {
        self.matches
            .iter()
            .filter_map(|&i| candidates.get(i).map(AsRef::as_ref))
            .collect()
    }

    /// One-line summary shown under the search input; empty when not searching.
    pub fn summary(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        match self.matches.len() {
            0 => format!("No branches found matching '{}'", self.query),
            1 => "1 branch found".to_string(),
            n => format!("{n} branches found"),
        }
    }

    /// Placeholder shown in place of an empty list
    pub fn empty_message(&self) -> String {
        if self.query.is_empty() {
            "No branches available".to_string()
        } else {
            format!("No branches found matching '{}'", self.query)
        }
    }
}

/// Greedy in-order test: every query char appears in the candidate, not necessarily adjacent.
fn is_subsequence(candidate: &str, query: &str) -> bool {
    let mut remaining = candidate.chars();
    query
        .chars()
        .all(|q| remaining.by_ref().any(|c| c == q))
}

/// Case-insensitive match of `query` against every candidate.
pub fn match_candidates<S: AsRef<str>>(candidates: &[S], query: &str) -> SearchState {
    if query.is_empty() {
        return SearchState::all(candidates.len());
    }

    let needle = query.to_lowercase();
    let mut exact = Vec::new();
    let mut fuzzy = Vec::new();
    for (idx, candidate) in candidates.iter().enumerate() {
        let haystack = candidate.as_ref().to_lowercase();
        if haystack.contains(&needle) {
            exact.push(idx);
        } else if is_subsequence(&haystack, &needle) {
            fuzzy.push(idx);
        }
    }
    exact.extend(fuzzy);

    SearchState {
        query: query.to_string(),
        has_results: !exact.is_empty(),
        matches: exact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRANCHES: &[&str] = &["main", "develop", "feature/user-auth", "feature/payment"];

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let state = match_candidates(BRANCHES, "");
        assert_eq!(state.matched(BRANCHES), BRANCHES.to_vec());
        assert!(state.has_results);
        assert_eq!(state.summary(), "");
    }

    #[test]
    fn test_subsequence_match_preserves_order() {
        let state = match_candidates(BRANCHES, "ftr");
        assert_eq!(
            state.matched(BRANCHES),
            vec!["feature/user-auth", "feature/payment"]
        );
    }

    #[test]
    fn test_exact_matches_come_before_fuzzy() {
        let candidates = ["make-it-nice", "fix/main-crash", "main", "m-a-i-n"];
        let state = match_candidates(&candidates, "main");
        assert_eq!(
            state.matched(&candidates),
            vec!["fix/main-crash", "main", "make-it-nice", "m-a-i-n"]
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let candidates = ["Feature/LOGIN", "develop"];
        let state = match_candidates(&candidates, "login");
        assert_eq!(state.matched(&candidates), vec!["Feature/LOGIN"]);
        let state = match_candidates(&candidates, "DEV");
        assert_eq!(state.matched(&candidates), vec!["develop"]);
    }

    #[test]
    fn test_no_match_reports_empty() {
        let state = match_candidates(BRANCHES, "xyz");
        assert!(state.matches.is_empty());
        assert!(!state.has_results);
        assert_eq!(state.summary(), "No branches found matching 'xyz'");
        assert_eq!(state.empty_message(), "No branches found matching 'xyz'");
    }

    #[test]
    fn test_each_candidate_listed_once() {
        let candidates = ["aa", "a"];
        let state = match_candidates(&candidates, "a");
        assert_eq!(state.matches, vec![0, 1]);
    }

    #[test]
    fn test_summary_pluralisation() {
        assert_eq!(match_candidates(BRANCHES, "main").summary(), "1 branch found");
        assert_eq!(
            match_candidates(BRANCHES, "feature").summary(),
            "2 branches found"
        );
        assert_eq!(
            SearchState::all(0).empty_message(),
            "No branches available"
        );
    }

    #[test]
    fn test_query_longer_than_candidate_does_not_match() {
        let state = match_candidates(&["ab"], "abc");
        assert!(!state.has_results);
    }
}
