//! Differential Evolution playground engine in pure Rust
//!
//! A deliberately small DE implementation built for inspection rather
//! than raw optimization power. Each generation emits a full trace of
//! its intermediate quantities (donors, mutant vector, crossover
//! sources, trial fitness, acceptance) so a display layer can show the
//! worked calculation next to the evolving population.
//!
//! Supported features:
//! - rand/1/bin: rand1 mutation with dimension-guaranteed binomial crossover
//! - Greedy selection with strict improvement (ties keep the incumbent)
//! - Stable per-individual identity tokens across generations
//! - A run controller with start/stop/step/reset and generation wraparound
//! - Per-generation trace records and a CSV trace recorder
//!
//! The objective is fixed to the 2D Rosenbrock function from the
//! `deviz-rosenbrock` crate. Randomness flows through `rand::Rng`
//! generics; the controller owns a `StdRng` seeded from
//! [`DEConfig::seed`] so runs can be reproduced.

use serde::{Deserialize, Serialize};

pub mod controller;
pub mod crossover_binomial;
pub mod distinct_indices;
pub mod init_random;
pub mod mutant_rand1;
pub mod point;
pub mod recorder;
pub mod step;
pub mod trace;

pub use controller::{ParamUpdate, RunController, RunSnapshot};
pub use init_random::init_random;
pub use point::{Bounds, Color, Individual};
pub use recorder::{RecorderError, TraceRecorder, run_recorded};
pub use step::{StepOutcome, best_member, step};
pub use trace::{CrossoverSource, Dimension, TrialRecord};

/// Population size bounds; mutation needs three donors distinct from the target.
pub const MIN_POPULATION_SIZE: usize = 4;
pub const MAX_POPULATION_SIZE: usize = 36;
/// Generation counter bound before the run wraps around and restarts.
pub const MIN_ITERATIONS: usize = 1;
pub const MAX_ITERATIONS: usize = 1000;
/// Pacing bounds for the host scheduler, in milliseconds.
pub const MIN_STEP_INTERVAL_MS: u64 = 30;
pub const MAX_STEP_INTERVAL_MS: u64 = 1000;

/// Configuration rejected at the boundary; the engine itself never
/// validates and never receives an invalid population.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("population size {0} is out of range [{MIN_POPULATION_SIZE}, {MAX_POPULATION_SIZE}]")]
    PopulationSize(usize),

    #[error("crossover probability CR {0} is out of range [0, 1]")]
    CrossoverProbability(f64),

    #[error("differential weight F {0} is out of range [0, 2]")]
    DifferentialWeight(f64),

    #[error("max iterations {0} is out of range [{MIN_ITERATIONS}, {MAX_ITERATIONS}]")]
    MaxIterations(usize),

    #[error(
        "step interval {0} ms is out of range [{MIN_STEP_INTERVAL_MS}, {MAX_STEP_INTERVAL_MS}] ms"
    )]
    StepInterval(u64),
}

/// Configuration for a playground run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DEConfig {
    /// NP, number of individuals (4..=36)
    pub population_size: usize,
    /// CR in [0, 1]
    pub crossover_probability: f64,
    /// F in [0, 2]
    pub differential_weight: f64,
    /// Generations before the run wraps around and reinitializes
    pub max_iterations: usize,
    /// Pacing hint for the host scheduler; never acted on by the core
    pub step_interval_ms: u64,
    /// Sampling rectangle for population initialization
    pub bounds: Bounds,
    /// Optional RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
    /// Print a progress line per generation
    #[serde(default)]
    pub disp: bool,
}

impl Default for DEConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            crossover_probability: 0.9,
            differential_weight: 0.8,
            max_iterations: 68,
            step_interval_ms: 100,
            bounds: Bounds::default(),
            seed: None,
            disp: false,
        }
    }
}

impl DEConfig {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_POPULATION_SIZE..=MAX_POPULATION_SIZE).contains(&self.population_size) {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConfigError::CrossoverProbability(self.crossover_probability));
        }
        if !(0.0..=2.0).contains(&self.differential_weight) {
            return Err(ConfigError::DifferentialWeight(self.differential_weight));
        }
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&self.max_iterations) {
            return Err(ConfigError::MaxIterations(self.max_iterations));
        }
        if !(MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS).contains(&self.step_interval_ms) {
            return Err(ConfigError::StepInterval(self.step_interval_ms));
        }
        Ok(())
    }

    /// Clamping alternative to [`validate`](Self::validate) for callers
    /// that prefer to coerce out-of-range submissions.
    pub fn clamped(mut self) -> Self {
        self.population_size =
            self.population_size.clamp(MIN_POPULATION_SIZE, MAX_POPULATION_SIZE);
        self.crossover_probability = self.crossover_probability.clamp(0.0, 1.0);
        self.differential_weight = self.differential_weight.clamp(0.0, 2.0);
        self.max_iterations = self.max_iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
        self.step_interval_ms =
            self.step_interval_ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        self
    }
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
    cfg: DEConfig,
}

impl DEConfigBuilder {
    pub fn new() -> Self {
        Self { cfg: DEConfig::default() }
    }
    pub fn population_size(mut self, v: usize) -> Self {
        self.cfg.population_size = v;
        self
    }
    pub fn crossover_probability(mut self, v: f64) -> Self {
        self.cfg.crossover_probability = v;
        self
    }
    pub fn differential_weight(mut self, v: f64) -> Self {
        self.cfg.differential_weight = v;
        self
    }
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.cfg.max_iterations = v;
        self
    }
    pub fn step_interval_ms(mut self, v: u64) -> Self {
        self.cfg.step_interval_ms = v;
        self
    }
    pub fn bounds(mut self, v: Bounds) -> Self {
        self.cfg.bounds = v;
        self
    }
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    pub fn build(self) -> DEConfig {
        self.cfg
    }
}

impl Default for DEConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
