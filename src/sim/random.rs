//! Random draws shared by the spawner, splitter and ranged enemies

use glam::Vec2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Sample a Gaussian around `mean`. Degenerate deviations return `mean`.
pub fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f32, sigma: f32) -> f32 {
    if sigma <= 0.0 {
        return mean;
    }
    match Normal::new(mean, sigma) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mean,
    }
}

/// Per-axis Gaussian jitter around a point
pub fn gauss_vec2<R: Rng + ?Sized>(rng: &mut R, mean: Vec2, sigma: f32) -> Vec2 {
    Vec2::new(gauss(rng, mean.x, sigma), gauss(rng, mean.y, sigma))
}

/// One-in-`n` chance: draws from `[0, n)` and succeeds on zero.
/// `n` of zero or one always succeeds.
pub fn one_in<R: Rng + ?Sized>(rng: &mut R, n: u32) -> bool {
    n <= 1 || rng.random_range(0..n) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_zero_sigma_is_exact() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(gauss(&mut rng, 42.0, 0.0), 42.0);
        assert_eq!(gauss_vec2(&mut rng, Vec2::new(1.0, 2.0), 0.0), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_one_in_one_always_hits() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert!((0..100).all(|_| one_in(&mut rng, 1)));
        assert!(one_in(&mut rng, 0));
    }

    #[test]
    fn test_one_in_large_is_rare() {
        let mut rng = Pcg32::seed_from_u64(7);
        let hits = (0..1000).filter(|_| one_in(&mut rng, 1_000_000)).count();
        assert!(hits < 5);
    }
}
