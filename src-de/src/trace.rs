//! Per-individual trace records for the "show your work" display

use serde::{Deserialize, Serialize};

/// Which parent supplied a trial component during crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossoverSource {
    /// Component taken from the mutant vector
    Mutant,
    /// Component carried over from the target individual
    Target,
}

impl CrossoverSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossoverSource::Mutant => "mutant",
            CrossoverSource::Target => "target",
        }
    }
}

/// A coordinate axis; `j_rand` names the dimension that is guaranteed
/// to come from the mutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    X,
    Y,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::X => "x",
            Dimension::Y => "y",
        }
    }
}

/// Everything that happened to one individual during one generation.
///
/// Produced fresh each generation; the controller keeps only the
/// latest generation's records while [`TraceRecorder`](crate::TraceRecorder)
/// can keep a rolling history for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Target index within the population
    pub index: usize,
    pub prev_x: f64,
    pub prev_y: f64,
    pub prev_fitness: f64,
    /// Donors chosen for mutation
    pub a_index: usize,
    pub b_index: usize,
    pub c_index: usize,
    pub a_x: f64,
    pub a_y: f64,
    pub b_x: f64,
    pub b_y: f64,
    pub c_x: f64,
    pub c_y: f64,
    /// Mutant vector v = a + F (b - c)
    pub mutant_x: f64,
    pub mutant_y: f64,
    /// Crossover choices
    pub source_x: CrossoverSource,
    pub source_y: CrossoverSource,
    pub j_rand: Dimension,
    pub trial_x: f64,
    pub trial_y: f64,
    pub trial_fitness: f64,
    pub accepted: bool,
    pub new_x: f64,
    pub new_y: f64,
}
