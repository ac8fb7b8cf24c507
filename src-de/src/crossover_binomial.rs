//! Dimension-guaranteed binomial crossover

use rand::Rng;

use crate::point::Individual;
use crate::trace::{CrossoverSource, Dimension};

/// Outcome of crossing a mutant vector with its target.
pub(crate) struct CrossoverOutcome {
    pub trial_x: f64,
    pub trial_y: f64,
    pub source_x: CrossoverSource,
    pub source_y: CrossoverSource,
    pub j_rand: Dimension,
}

/// Binomial crossover with one dimension forced to the mutant.
///
/// A fair coin picks `j_rand`; each dimension then takes the mutant
/// component when it is the forced one or when an independent uniform
/// draw falls below `cr`. The forced dimension guarantees the trial
/// differs from the target in at least one coordinate.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: &Individual,
    mutant_x: f64,
    mutant_y: f64,
    cr: f64,
    rng: &mut R,
) -> CrossoverOutcome {
    let j_rand = if rng.random_range(0..2) == 0 { Dimension::X } else { Dimension::Y };

    let cross_x = rng.random::<f64>() < cr;
    let cross_y = rng.random::<f64>() < cr;

    let (trial_x, source_x) = if j_rand == Dimension::X || cross_x {
        (mutant_x, CrossoverSource::Mutant)
    } else {
        (target.x, CrossoverSource::Target)
    };
    let (trial_y, source_y) = if j_rand == Dimension::Y || cross_y {
        (mutant_y, CrossoverSource::Mutant)
    } else {
        (target.y, CrossoverSource::Target)
    };

    CrossoverOutcome { trial_x, trial_y, source_x, source_y, j_rand }
}
