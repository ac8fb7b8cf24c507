//! Population model: candidate points and their stable visual identity

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque identity token assigned at creation and preserved across the
/// whole lineage of an individual, so a display layer can follow one
/// candidate through the generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Draw a fresh random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { r: rng.random(), g: rng.random(), b: rng.random() }
    }

    /// CSS-style `#rrggbb` representation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One candidate solution: a point in the plane plus its identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Sampling rectangle for population initialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    /// The basin around the Rosenbrock valley used by the playground.
    fn default() -> Self {
        Self { min_x: -1.8, max_x: 1.8, min_y: -0.8, max_y: 2.8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_color_hex_format() {
        let c = Color { r: 0, g: 171, b: 15 };
        assert_eq!(c.hex(), "#00ab0f");
    }

    #[test]
    fn test_random_colors_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Color::random(&mut rng);
        let b = Color::random(&mut rng);
        assert_ne!(a, b);
    }
}
