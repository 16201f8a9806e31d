use bon::Builder;
use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, RngCore, SeedableRng};

use crate::error::Result;
use crate::value::Face;
use crate::{Analyzer, Game, DEFAULT_ROLLS};

/// How a game is played: the random source and the number of rolls.
///
/// ```
/// use montecarlo::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut sim = Simulation::builder().rolls(100).build(StdRng::seed_from_u64(7));
/// let mut game = Game::new([d6(), d6(), d6()]).unwrap();
/// let analyzer = sim.run(&mut game).unwrap();
/// assert_eq!(analyzer.rolls(), 100);
/// ```
#[derive(Debug, Builder)]
pub struct Simulation<G = ThreadRng>
where
    G: RngCore,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = DEFAULT_ROLLS)]
    rolls: usize,
}

impl Default for Simulation<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl Simulation<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::builder().build(StdRng::seed_from_u64(seed))
    }
}

impl<G> Simulation<G>
where
    G: RngCore,
{
    /// Plays `game` and returns an analyzer over the fresh results.
    ///
    /// # Errors
    /// Whatever [`Game::play`] reports.
    pub fn run<T>(&mut self, game: &mut Game<T>) -> Result<Analyzer<T>>
    where
        T: Face,
    {
        game.play(self.rolls, &mut self.rng)?;
        Analyzer::new(game)
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn rng(&mut self) -> &mut G {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{coin, d6};
    use crate::Error;

    #[test]
    fn defaults() {
        assert_eq!(Simulation::default().rolls(), DEFAULT_ROLLS);
        assert_eq!(Simulation::seeded(1).rolls(), DEFAULT_ROLLS);
    }

    #[test]
    fn seeded_runs_repeat() {
        let mut a = Game::new([d6(), d6(), d6()]).unwrap();
        let mut b = a.clone();
        let ra = Simulation::seeded(99).run(&mut a).unwrap();
        let rb = Simulation::seeded(99).run(&mut b).unwrap();
        assert_eq!(ra.results(), rb.results());
        assert_eq!(ra.results().shape(), (DEFAULT_ROLLS, 3));
    }

    #[test]
    fn zero_rolls_rejected() {
        let mut sim = Simulation::builder().rolls(0).build(StdRng::seed_from_u64(0));
        let mut game = Game::new([coin(), coin()]).unwrap();
        assert!(matches!(sim.run(&mut game), Err(Error::InvalidRollCount)));
        assert!(game.results().is_none());
    }
}
