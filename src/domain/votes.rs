//! Session-only vote tally.
//!
//! Counters live for one session and are never written to a store.
//! `chart` exposes the counts as a labelled bar series.

use serde::Serialize;
use thiserror::Error;

/// Candidates offered when none are configured.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["Webtoon A", "Webtoon B", "Webtoon C"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("Unknown vote candidate: {0}")]
    UnknownCandidate(String),
    #[error("Duplicate vote candidate: {0}")]
    DuplicateCandidate(String),
    #[error("Vote candidate labels must not be blank")]
    BlankCandidate,
    #[error("At least one vote candidate is required")]
    NoCandidates,
}

/// Bar chart series: one bar per candidate, in candidate order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

/// Ordered vote counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<(String, u32)>,
}

impl VoteTally {
    /// Create a tally with every candidate at zero.
    pub fn new<I, S>(candidates: I) -> Result<Self, VoteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, u32)> = Vec::new();
        for candidate in candidates {
            let label = candidate.into();
            if label.trim().is_empty() {
                return Err(VoteError::BlankCandidate);
            }
            if entries.iter().any(|(l, _)| *l == label) {
                return Err(VoteError::DuplicateCandidate(label));
            }
            entries.push((label, 0));
        }
        if entries.is_empty() {
            return Err(VoteError::NoCandidates);
        }
        Ok(Self { entries })
    }

    /// Record one vote and return the candidate's new count.
    pub fn vote(&mut self, label: &str) -> Result<u32, VoteError> {
        let (_, count) = self
            .entries
            .iter_mut()
            .find(|(l, _)| l == label)
            .ok_or_else(|| VoteError::UnknownCandidate(label.to_string()))?;
        *count = count.saturating_add(1);
        Ok(*count)
    }

    pub fn count(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    /// Candidate with the most votes; ties go to the earlier candidate.
    /// `None` until a vote has been cast.
    pub fn leader(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for entry in &self.entries {
            if entry.1 > best.map_or(0, |b| b.1) {
                best = Some(entry);
            }
        }
        best.map(|(l, _)| l.as_str())
    }

    pub fn chart(&self) -> BarChart {
        BarChart {
            labels: self.entries.iter().map(|(l, _)| l.clone()).collect(),
            data: self.entries.iter().map(|(_, c)| *c).collect(),
        }
    }
}

impl Default for VoteTally {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CANDIDATES
                .iter()
                .map(|l| ((*l).to_string(), 0))
                .collect(),
        }
    }
}
