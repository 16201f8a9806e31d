use log::debug;

use crate::error::{Error, Result};
use crate::source::RandomSource;
use crate::table::{Form, NarrowTable, RollTable, View};
use crate::value::{DefaultFace, Face};
use crate::Die;

/// A fixed set of dice rolled together, holding the results of the latest play only.
///
/// Every die must have the same number of faces; faces and weights may differ.
#[derive(Debug, Clone)]
pub struct Game<T = DefaultFace>
where
    T: Face,
{
    dice: Vec<Die<T>>,
    results: Option<RollTable<T>>,
}

impl<T> Game<T>
where
    T: Face,
{
    /// # Errors
    /// * [`Error::NoDice`] if `dice` is empty.
    /// * [`Error::FaceCountMismatch`] if the dice do not all have the same number of faces.
    pub fn new<I>(dice: I) -> Result<Self>
    where
        I: IntoIterator<Item = Die<T>>,
    {
        let dice = dice.into_iter().collect::<Vec<_>>();
        let expected = dice.first().ok_or(Error::NoDice)?.len();
        if let Some((index, die)) = dice.iter().enumerate().find(|(_, d)| d.len() != expected) {
            return Err(Error::FaceCountMismatch {
                index,
                expected,
                found: die.len(),
            });
        }
        Ok(Self {
            dice,
            results: None,
        })
    }

    /// Rolls every die `n_rolls` times, in die order, and replaces the stored results.
    ///
    /// On error the previous results are left as they were.
    ///
    /// # Errors
    /// * [`Error::InvalidRollCount`] if `n_rolls` is zero.
    /// * [`Error::ZeroWeights`] if some die has no positive weight.
    pub fn play<G>(&mut self, n_rolls: usize, rng: &mut G) -> Result<()>
    where
        G: RandomSource + ?Sized,
    {
        if n_rolls == 0 {
            return Err(Error::InvalidRollCount);
        }
        debug!("playing {n_rolls} rolls with {} dice", self.dice.len());
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll(n_rolls, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        self.results = Some(RollTable::from_columns(columns));
        Ok(())
    }

    /// Copy of the latest results in the requested layout.
    ///
    /// # Errors
    /// [`Error::NoResults`] if the game has not been played.
    pub fn show(&self, form: Form) -> Result<View<T>> {
        Ok(match form {
            Form::Wide => View::Wide(self.wide()?),
            Form::Narrow => View::Narrow(self.narrow()?),
        })
    }

    /// [`Game::show`] with the layout given by name, `"wide"` or `"narrow"`.
    ///
    /// # Errors
    /// [`Error::InvalidForm`] for any other name, otherwise as [`Game::show`].
    pub fn show_str(&self, form: &str) -> Result<View<T>> {
        self.show(form.parse()?)
    }

    pub fn wide(&self) -> Result<RollTable<T>> {
        self.results.clone().ok_or(Error::NoResults)
    }

    pub fn narrow(&self) -> Result<NarrowTable<T>> {
        self.results
            .as_ref()
            .map(RollTable::to_narrow)
            .ok_or(Error::NoResults)
    }

    /// Borrowed view of the latest results, `None` before the first play.
    #[must_use]
    pub fn results(&self) -> Option<&RollTable<T>> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn dice(&self) -> &[Die<T>] {
        &self.dice
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}
