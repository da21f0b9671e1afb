//! Ranker — orders scored candidates and partitions them by threshold.

use crate::screening::models::{Candidate, ChartBar, ScoreBand};

/// Sorts by score descending. `sort_by` is stable, so equal scores keep upload order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

pub fn classify(score: u8, threshold: u8) -> ScoreBand {
    if score >= threshold {
        ScoreBand::Pass
    } else {
        ScoreBand::Fail
    }
}

/// Ranked candidates plus the threshold that splits them.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    candidates: Vec<Candidate>,
    threshold: u8,
}

impl AnalysisResult {
    pub fn new(candidates: Vec<Candidate>, threshold: u8) -> Self {
        Self {
            candidates: rank(candidates),
            threshold,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn shortlisted(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(move |c| classify(c.score, self.threshold) == ScoreBand::Pass)
    }

    pub fn eliminated(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(move |c| classify(c.score, self.threshold) == ScoreBand::Fail)
    }

    pub fn chart(&self) -> Vec<ChartBar> {
        self.candidates
            .iter()
            .map(|c| ChartBar {
                name: c.name.clone(),
                score: c.score,
                band: classify(c.score, self.threshold),
            })
            .collect()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
