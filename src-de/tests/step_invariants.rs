use deviz_de::{Bounds, CrossoverSource, init_random, step};
use deviz_rosenbrock::rosenbrock;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_donor_indices_distinct_and_exclude_target() {
    let mut rng = StdRng::seed_from_u64(100);
    let mut pop = init_random(&Bounds::default(), 12, &mut rng);
    for _ in 0..50 {
        let out = step(&pop, 0.8, 0.9, &mut rng);
        for rec in &out.trace {
            let donors = [rec.a_index, rec.b_index, rec.c_index];
            assert!(!donors.contains(&rec.index));
            assert_ne!(rec.a_index, rec.b_index);
            assert_ne!(rec.a_index, rec.c_index);
            assert_ne!(rec.b_index, rec.c_index);
        }
        pop = out.next_population;
    }
}

#[test]
fn test_at_least_one_dimension_from_mutant() {
    let mut rng = StdRng::seed_from_u64(101);
    let pop = init_random(&Bounds::default(), 10, &mut rng);
    // CR=0 forces the guarantee to come from j_rand alone
    let out = step(&pop, 0.8, 0.0, &mut rng);
    for rec in &out.trace {
        assert!(
            rec.source_x == CrossoverSource::Mutant || rec.source_y == CrossoverSource::Mutant
        );
    }
}

#[test]
fn test_fitness_never_regresses_per_index() {
    let mut rng = StdRng::seed_from_u64(102);
    let mut pop = init_random(&Bounds::default(), 15, &mut rng);
    for _ in 0..100 {
        let before: Vec<f64> = pop.iter().map(|p| rosenbrock(p.x, p.y)).collect();
        let out = step(&pop, 0.8, 0.9, &mut rng);
        for (i, p) in out.next_population.iter().enumerate() {
            assert!(rosenbrock(p.x, p.y) <= before[i]);
        }
        pop = out.next_population;
    }
}

#[test]
fn test_population_size_preserved() {
    let mut rng = StdRng::seed_from_u64(103);
    for size in [4usize, 7, 20, 36] {
        let pop = init_random(&Bounds::default(), size, &mut rng);
        let out = step(&pop, 0.8, 0.9, &mut rng);
        assert_eq!(out.next_population.len(), size);
        assert_eq!(out.trace.len(), size);
    }
}

#[test]
fn test_undersized_population_is_a_noop() {
    let mut rng = StdRng::seed_from_u64(104);
    let pop = init_random(&Bounds::default(), 3, &mut rng);
    let out = step(&pop, 0.8, 0.9, &mut rng);
    assert_eq!(out.next_population, pop);
    assert!(out.trace.is_empty());
}

#[test]
fn test_identity_tokens_survive_generations() {
    let mut rng = StdRng::seed_from_u64(105);
    let mut pop = init_random(&Bounds::default(), 8, &mut rng);
    let colors: Vec<_> = pop.iter().map(|p| p.color).collect();
    for _ in 0..30 {
        pop = step(&pop, 0.8, 0.9, &mut rng).next_population;
    }
    for (p, c) in pop.iter().zip(&colors) {
        assert_eq!(p.color, *c);
    }
}

#[test]
fn test_minimum_viable_population() {
    let mut rng = StdRng::seed_from_u64(106);
    let pop = init_random(&Bounds::default(), 4, &mut rng);
    let out = step(&pop, 0.8, 0.9, &mut rng);
    assert_eq!(out.trace.len(), 4);
    for rec in &out.trace {
        // the donor triple must be a permutation of the 3 non-target indices
        let mut donors = [rec.a_index, rec.b_index, rec.c_index];
        donors.sort_unstable();
        let expected: Vec<usize> = (0..4).filter(|&j| j != rec.index).collect();
        assert_eq!(donors.to_vec(), expected);
    }
}

#[test]
fn test_trace_is_index_ordered_and_consistent() {
    let mut rng = StdRng::seed_from_u64(107);
    let pop = init_random(&Bounds::default(), 9, &mut rng);
    let out = step(&pop, 0.5, 0.7, &mut rng);
    for (i, rec) in out.trace.iter().enumerate() {
        assert_eq!(rec.index, i);
        assert_eq!((rec.prev_x, rec.prev_y), (pop[i].x, pop[i].y));
        assert_eq!(rec.prev_fitness, rosenbrock(pop[i].x, pop[i].y));
        assert_eq!(rec.trial_fitness, rosenbrock(rec.trial_x, rec.trial_y));
        // mutant vector matches its donors
        assert_eq!(rec.mutant_x, rec.a_x + 0.5 * (rec.b_x - rec.c_x));
        assert_eq!(rec.mutant_y, rec.a_y + 0.5 * (rec.b_y - rec.c_y));
    }
}
