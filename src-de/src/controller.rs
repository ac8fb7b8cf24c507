//! Run controller: lifecycle state machine driving repeated generations
//!
//! The controller owns the whole run state and mutates it only through
//! its commands. Pacing lives with the host: a real timer, an
//! animation frame, or a plain loop calls [`RunController::tick`] at
//! whatever cadence it likes, and `step_interval_ms` is merely the hint
//! it is expected to honor.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::mem;

use crate::init_random::init_random;
use crate::point::Individual;
use crate::step::{best_member, step};
use crate::trace::TrialRecord;
use crate::{ConfigError, DEConfig};

/// Partial parameter update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ParamUpdate {
    pub population_size: Option<usize>,
    pub crossover_probability: Option<f64>,
    pub differential_weight: Option<f64>,
    pub max_iterations: Option<usize>,
    pub step_interval_ms: Option<u64>,
}

/// Serializable read model exposed to rendering collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct RunSnapshot {
    pub population: Vec<Individual>,
    pub prev_population: Option<Vec<Individual>>,
    pub iteration: usize,
    pub trace: Vec<TrialRecord>,
    pub running: bool,
    pub config: DEConfig,
}

/// Drives repeated stepping and owns the run state.
pub struct RunController {
    config: DEConfig,
    rng: StdRng,
    population: Vec<Individual>,
    prev_population: Option<Vec<Individual>>,
    trace: Vec<TrialRecord>,
    iteration: usize,
    running: bool,
}

impl RunController {
    /// Validate `config` and draw the initial population. The engine
    /// downstream never sees an invalid population size.
    pub fn new(config: DEConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng: StdRng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };
        let population = init_random(&config.bounds, config.population_size, &mut rng);
        Ok(Self {
            config,
            rng,
            population,
            prev_population: None,
            trace: Vec::new(),
            iteration: 0,
            running: false,
        })
    }

    /// Resume scheduled stepping.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt scheduled stepping; all state stays available for inspection.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Scheduled entry point; advances one generation while running.
    pub fn tick(&mut self) {
        if self.running {
            self.advance();
        }
    }

    /// Manual single step: advances exactly one generation regardless
    /// of the running flag and leaves the flag as the caller set it.
    pub fn step(&mut self) {
        self.advance();
    }

    /// Back to a freshly initialized idle state.
    pub fn reset(&mut self) {
        self.running = false;
        self.reinitialize();
    }

    /// Apply a validated partial update. A population-size change
    /// reinitializes the run immediately (donor selection depends on a
    /// fixed population length); every other parameter takes effect on
    /// the next step. Rejected updates leave the state untouched.
    pub fn set_parameters(&mut self, update: ParamUpdate) -> Result<(), ConfigError> {
        let mut candidate = self.config.clone();
        if let Some(v) = update.population_size {
            candidate.population_size = v;
        }
        if let Some(v) = update.crossover_probability {
            candidate.crossover_probability = v;
        }
        if let Some(v) = update.differential_weight {
            candidate.differential_weight = v;
        }
        if let Some(v) = update.max_iterations {
            candidate.max_iterations = v;
        }
        if let Some(v) = update.step_interval_ms {
            candidate.step_interval_ms = v;
        }
        candidate.validate()?;

        let resize = candidate.population_size != self.config.population_size;
        self.config = candidate;
        if resize {
            self.reinitialize();
        }
        Ok(())
    }

    fn reinitialize(&mut self) {
        self.population =
            init_random(&self.config.bounds, self.config.population_size, &mut self.rng);
        self.prev_population = None;
        self.trace.clear();
        self.iteration = 0;
    }

    /// One generation transition, with wraparound: once the counter has
    /// reached `max_iterations` the advance restarts the experiment
    /// instead of stepping.
    fn advance(&mut self) {
        if self.iteration >= self.config.max_iterations {
            self.reinitialize();
            return;
        }
        let outcome = step(
            &self.population,
            self.config.differential_weight,
            self.config.crossover_probability,
            &mut self.rng,
        );
        self.prev_population = Some(mem::replace(&mut self.population, outcome.next_population));
        self.trace = outcome.trace;
        self.iteration += 1;

        if self.config.disp {
            let accepted = self.trace.iter().filter(|r| r.accepted).count();
            let best = best_member(&self.population).map(|(_, f)| f).unwrap_or(f64::NAN);
            eprintln!(
                "DE iter {:4}  best_f={:.6e}  accepted={}/{}",
                self.iteration,
                best,
                accepted,
                self.population.len()
            );
        }
    }

    /// Clone of the full read model for rendering collaborators.
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            population: self.population.clone(),
            prev_population: self.prev_population.clone(),
            iteration: self.iteration,
            trace: self.trace.clone(),
            running: self.running,
            config: self.config.clone(),
        }
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn prev_population(&self) -> Option<&[Individual]> {
        self.prev_population.as_deref()
    }

    pub fn trace(&self) -> &[TrialRecord] {
        &self.trace
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &DEConfig {
        &self.config
    }
}
