//! Autocomplete filtering by word-start matching.
//!
//! Every word of the query has to be the start of some word in the
//! candidate, ignoring case. Query words may appear in any order and may
//! match the same candidate word. An empty query matches everything.

/// A query split into lowercase words, reusable across many candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStartQuery {
    words: Vec<String>,
}

impl WordStartQuery {
    pub fn parse(query: &str) -> Self {
        Self {
            words: query.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if self.words.is_empty() {
            return true;
        }

        let candidate_words: Vec<String> =
            candidate.split_whitespace().map(str::to_lowercase).collect();

        self.words.iter().all(|query_word| {
            candidate_words
                .iter()
                .any(|candidate_word| candidate_word.starts_with(query_word.as_str()))
        })
    }
}

pub fn matches_word_start(candidate: &str, query: &str) -> bool {
    WordStartQuery::parse(query).matches(candidate)
}

/// Keeps the candidates matching `query`, in their original order.
pub fn filter_candidates<S>(candidates: &[S], query: &str) -> Vec<S>
where
    S: AsRef<str> + Clone,
{
    let query = WordStartQuery::parse(query);
    let filtered: Vec<S> = candidates
        .iter()
        .filter(|candidate| query.matches(candidate.as_ref()))
        .cloned()
        .collect();

    tracing::trace!(
        "filtered {} of {} candidates for {:?}",
        filtered.len(),
        candidates.len(),
        query.words()
    );
    filtered
}

/// True when the filter narrowed things down to a single candidate.
pub fn should_auto_select<S>(filtered: &[S]) -> bool {
    filtered.len() == 1
}

/// The value the form layer should commit when [`should_auto_select`] holds.
pub fn auto_select_value<S>(filtered: &[S]) -> Option<&S> {
    match filtered {
        [only] => Some(only),
        _ => None,
    }
}
