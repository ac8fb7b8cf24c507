//! Random uniform population initialization

use rand::Rng;

use crate::point::{Bounds, Color, Individual};

/// Draw `size` individuals uniformly inside `bounds`, each coordinate
/// sampled independently, each individual with a fresh identity color.
///
/// Size validity (>= 4 for the step engine) is the configuration
/// boundary's business, not this function's.
pub fn init_random<R: Rng + ?Sized>(bounds: &Bounds, size: usize, rng: &mut R) -> Vec<Individual> {
    (0..size)
        .map(|_| Individual {
            x: rng.random_range(bounds.min_x..bounds.max_x),
            y: rng.random_range(bounds.min_y..bounds.max_y),
            color: Color::random(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_population_within_bounds() {
        let bounds = Bounds { min_x: -1.8, max_x: 1.8, min_y: -0.8, max_y: 2.8 };
        let mut rng = StdRng::seed_from_u64(1);
        let pop = init_random(&bounds, 36, &mut rng);
        assert_eq!(pop.len(), 36);
        for p in &pop {
            assert!(p.x >= bounds.min_x && p.x < bounds.max_x);
            assert!(p.y >= bounds.min_y && p.y < bounds.max_y);
        }
    }

    #[test]
    fn test_individuals_get_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(2);
        let pop = init_random(&Bounds::default(), 10, &mut rng);
        for i in 0..pop.len() {
            for j in (i + 1)..pop.len() {
                assert!(pop[i].x != pop[j].x || pop[i].y != pop[j].y);
            }
        }
    }
}
