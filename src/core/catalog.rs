use crate::core::suggest::{auto_select_value, filter_candidates};
use crate::utils::error::{IntakeError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The autocomplete fields backed by a static list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateList {
    Physicians,
    ReferringProviders,
    InsuranceCompanies,
    States,
}

impl CandidateList {
    pub const ALL: [CandidateList; 4] = [
        CandidateList::Physicians,
        CandidateList::ReferringProviders,
        CandidateList::InsuranceCompanies,
        CandidateList::States,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateList::Physicians => "physicians",
            CandidateList::ReferringProviders => "referring-providers",
            CandidateList::InsuranceCompanies => "insurance-companies",
            CandidateList::States => "states",
        }
    }

    /// Key of this list in the `[catalog]` config section.
    pub fn config_key(&self) -> String {
        format!("catalog.{}", self.as_str().replace('-', "_"))
    }
}

impl FromStr for CandidateList {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|list| list.as_str() == s)
            .ok_or_else(|| IntakeError::UnknownCandidateList { name: s.to_string() })
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter result for one keystroke, with the auto-select decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub candidates: Vec<String>,
    pub auto_select: Option<String>,
}

impl Suggestions {
    pub fn from_filtered(candidates: Vec<String>) -> Self {
        let auto_select = auto_select_value(&candidates).cloned();
        Self {
            candidates,
            auto_select,
        }
    }
}

/// Read-only candidate lists, in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct CandidateCatalog {
    lists: BTreeMap<CandidateList, Vec<String>>,
}

impl CandidateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list: CandidateList, candidates: Vec<String>) -> Self {
        self.insert(list, candidates);
        self
    }

    pub fn insert(&mut self, list: CandidateList, candidates: Vec<String>) {
        tracing::debug!("registered {} {}", candidates.len(), list);
        self.lists.insert(list, candidates);
    }

    pub fn candidates(&self, list: CandidateList) -> &[String] {
        self.lists.get(&list).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn suggest(&self, list: CandidateList, query: &str) -> Suggestions {
        Suggestions::from_filtered(filter_candidates(self.candidates(list), query))
    }
}
