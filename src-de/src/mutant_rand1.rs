//! rand1 mutation: v = a + F (b - c)

use crate::point::Individual;

/// Componentwise mutant vector from three donors. `f` is the
/// caller-supplied differential weight, range-checked at the
/// configuration boundary rather than here.
pub(crate) fn mutant_rand1(a: &Individual, b: &Individual, c: &Individual, f: f64) -> (f64, f64) {
    (a.x + f * (b.x - c.x), a.y + f * (b.y - c.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Color;

    fn ind(x: f64, y: f64) -> Individual {
        Individual { x, y, color: Color { r: 0, g: 0, b: 0 } }
    }

    #[test]
    fn test_mutant_formula() {
        let (vx, vy) = mutant_rand1(&ind(1.0, 2.0), &ind(3.0, -1.0), &ind(0.5, 1.0), 0.8);
        assert_eq!(vx, 1.0 + 0.8 * 2.5);
        assert_eq!(vy, 2.0 + 0.8 * -2.0);
    }

    #[test]
    fn test_zero_weight_copies_base_donor() {
        let (vx, vy) = mutant_rand1(&ind(-0.4, 0.9), &ind(3.0, -1.0), &ind(0.5, 1.0), 0.0);
        assert_eq!((vx, vy), (-0.4, 0.9));
    }
}
