//! One full DE generation: mutation, crossover, greedy selection, trace

use deviz_rosenbrock::rosenbrock;
use rand::Rng;

use crate::crossover_binomial::binomial_crossover;
use crate::distinct_indices::distinct_indices;
use crate::mutant_rand1::mutant_rand1;
use crate::point::Individual;
use crate::trace::TrialRecord;

/// Result of one generation transition.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Next generation, index-aligned with the input population
    pub next_population: Vec<Individual>,
    /// One record per individual, in index order
    pub trace: Vec<TrialRecord>,
}

/// Advance the population by one generation.
///
/// Every individual reads only from the frozen input population and
/// writes to its own slot of the next one, so iteration order carries
/// no data dependency. A population smaller than 4 cannot supply three
/// donors distinct from the target; that invocation is a defined
/// no-op returning the input unchanged with an empty trace.
pub fn step<R: Rng + ?Sized>(
    population: &[Individual],
    f: f64,
    cr: f64,
    rng: &mut R,
) -> StepOutcome {
    let len = population.len();
    if len < 4 {
        return StepOutcome { next_population: population.to_vec(), trace: Vec::new() };
    }

    let mut next_population = Vec::with_capacity(len);
    let mut trace = Vec::with_capacity(len);

    for (i, target) in population.iter().enumerate() {
        let idxs = distinct_indices(i, 3, len, rng);
        let (a_index, b_index, c_index) = (idxs[0], idxs[1], idxs[2]);
        let a = &population[a_index];
        let b = &population[b_index];
        let c = &population[c_index];

        let (mutant_x, mutant_y) = mutant_rand1(a, b, c, f);
        let cross = binomial_crossover(target, mutant_x, mutant_y, cr, rng);

        let prev_fitness = rosenbrock(target.x, target.y);
        let trial_fitness = rosenbrock(cross.trial_x, cross.trial_y);

        // strict improvement only; ties keep the incumbent
        let accepted = trial_fitness < prev_fitness;
        let (new_x, new_y) =
            if accepted { (cross.trial_x, cross.trial_y) } else { (target.x, target.y) };

        // identity survives replacement
        next_population.push(Individual { x: new_x, y: new_y, color: target.color });

        trace.push(TrialRecord {
            index: i,
            prev_x: target.x,
            prev_y: target.y,
            prev_fitness,
            a_index,
            b_index,
            c_index,
            a_x: a.x,
            a_y: a.y,
            b_x: b.x,
            b_y: b.y,
            c_x: c.x,
            c_y: c.y,
            mutant_x,
            mutant_y,
            source_x: cross.source_x,
            source_y: cross.source_y,
            j_rand: cross.j_rand,
            trial_x: cross.trial_x,
            trial_y: cross.trial_y,
            trial_fitness,
            accepted,
            new_x,
            new_y,
        });
    }

    StepOutcome { next_population, trace }
}

/// Index and fitness of the best individual, `None` for an empty
/// population.
pub fn best_member(population: &[Individual]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in population.iter().enumerate() {
        let fit = rosenbrock(p.x, p.y);
        match best {
            Some((_, bf)) if bf <= fit => {}
            _ => best = Some((i, fit)),
        }
    }
    best
}
