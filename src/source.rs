//! The random source dice draw from.
//!
//! Every [`rand::Rng`] is a [`RandomSource`], so a seeded `StdRng` gives
//! reproducible games and `thread_rng()` gives ad-hoc ones.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};
use crate::value::Weight;

pub trait RandomSource {
    /// Draws `n` indices into `weights`, independently and with replacement, each
    /// index chosen with probability `weights[i] / sum(weights)`.
    ///
    /// # Errors
    /// * [`Error::ZeroWeights`] if every weight is zero.
    /// * [`Error::WeightOverflow`] if the weights add up past `f64::MAX`.
    /// * [`Error::NoFaces`] if `weights` is empty.
    fn draw_weighted(&mut self, weights: &[Weight], n: usize) -> Result<Vec<usize>>;
}

impl<G> RandomSource for G
where
    G: Rng + ?Sized,
{
    fn draw_weighted(&mut self, weights: &[Weight], n: usize) -> Result<Vec<usize>> {
        if !weights.iter().sum::<Weight>().is_finite() {
            return Err(Error::WeightOverflow);
        }
        let dist = WeightedIndex::<Weight>::new(weights).map_err(|e| match e {
            WeightedError::NoItem => Error::NoFaces,
            WeightedError::AllWeightsZero => Error::ZeroWeights,
            _ => Error::InvalidWeight,
        })?;
        Ok((0..n).map(|_| dist.sample(self)).collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_degenerate_weights() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.draw_weighted(&[], 3), Err(Error::NoFaces));
        assert_eq!(rng.draw_weighted(&[0.0, 0.0], 3), Err(Error::ZeroWeights));
        assert_eq!(
            rng.draw_weighted(&[f64::MAX, f64::MAX], 3),
            Err(Error::WeightOverflow)
        );
    }

    #[test]
    fn never_draws_zero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = rng.draw_weighted(&[1.0, 0.0, 2.0], 5_000).unwrap();
        assert_eq!(draws.len(), 5_000);
        assert!(draws.iter().all(|&i| i != 1));
    }

    #[test]
    fn roughly_matches_distribution() {
        let weights = [1.0, 2.0, 3.0, 4.0];
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000usize;
        let mut counts = [0usize; 4];
        for i in rng.draw_weighted(&weights, draws).unwrap() {
            counts[i] += 1;
        }

        let sum_w: f64 = weights.iter().sum();
        for (i, &c) in counts.iter().enumerate() {
            let p = weights[i] / sum_w;
            let emp = c as f64 / draws as f64;
            assert!((emp - p).abs() < 0.05, "i={i} emp={emp} p={p}");
        }
    }
}
