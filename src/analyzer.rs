//! Statistics over the results of a played [`Game`].
//!
//! An [`Analyzer`] copies the game's results when it is built. Playing the game
//! again does not change what an existing analyzer reports; build a new one for
//! the new results.

use std::slice;

use itertools::Itertools;
use log::debug;

use crate::error::Result;
use crate::table::RollTable;
use crate::value::{DefaultFace, Face};
use crate::Game;

#[derive(Debug, Clone)]
pub struct Analyzer<T = DefaultFace>
where
    T: Face,
{
    results: RollTable<T>,
}

impl<T> Analyzer<T>
where
    T: Face,
{
    /// # Errors
    /// [`crate::Error::NoResults`] if the game has not been played.
    pub fn new(game: &Game<T>) -> Result<Self> {
        let results = game.wide()?;
        let (rolls, dice) = results.shape();
        debug!("analyzing {rolls} rolls of {dice} dice");
        Ok(Self { results })
    }

    /// Number of rolls where every die shows the same face.
    #[must_use]
    pub fn jackpot(&self) -> usize {
        self.results
            .rows()
            .filter(|row| row.iter().all_equal())
            .count()
    }

    /// Per roll, how many dice showed each face seen anywhere in the results.
    #[must_use]
    pub fn face_counts(&self) -> FaceCounts<T> {
        let faces = self
            .results
            .rows()
            .flatten()
            .unique()
            .sorted()
            .cloned()
            .collect_vec();
        let mut counts = vec![0usize; self.results.rolls() * faces.len()];
        for (row, line) in self
            .results
            .rows()
            .zip(counts.chunks_exact_mut(faces.len().max(1)))
        {
            for face in row {
                if let Ok(i) = faces.binary_search(face) {
                    line[i] += 1;
                }
            }
        }
        FaceCounts { faces, counts }
    }

    /// Occurrences of each distinct roll once its faces are sorted, so the die a face
    /// came from does not matter.
    #[must_use]
    pub fn combo_count(&self) -> Tally<T> {
        Tally::from_keys(
            self.results
                .rows()
                .map(|row| row.iter().sorted().cloned().collect_vec()),
        )
    }

    /// Occurrences of each distinct roll with faces kept in die order.
    #[must_use]
    pub fn perm_count(&self) -> Tally<T> {
        Tally::from_keys(self.results.rows().map(<[T]>::to_vec))
    }

    /// The results as they were when this analyzer was built.
    #[must_use]
    pub fn results(&self) -> &RollTable<T> {
        &self.results
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.results.rolls()
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.results.dice()
    }
}

/// Roll by face count table. Columns are the observed faces in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceCounts<T> {
    faces: Vec<T>,
    counts: Vec<usize>,
}

impl<T> FaceCounts<T>
where
    T: Face,
{
    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.counts.len().checked_div(self.faces.len()).unwrap_or(0)
    }

    /// Counts for roll number `roll` (1-based), aligned with [`FaceCounts::faces`].
    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        if roll == 0 || roll > self.rolls() {
            return None;
        }
        let width = self.faces.len();
        let start = (roll - 1) * width;
        Some(&self.counts[start..start + width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.counts.chunks_exact(self.faces.len().max(1))
    }

    /// `None` if the roll does not exist or the face never came up.
    #[must_use]
    pub fn get(&self, roll: usize, face: &T) -> Option<usize> {
        let i = self.faces.binary_search(face).ok()?;
        self.row(roll).map(|r| r[i])
    }

    /// How many times `face` came up over all rolls and dice.
    #[must_use]
    pub fn total(&self, face: &T) -> usize {
        match self.faces.binary_search(face) {
            Ok(i) => self.rows().map(|r| r[i]).sum(),
            Err(_) => 0,
        }
    }
}

/// Distinct roll outcomes with how often each occurred, most frequent first.
///
/// Equal counts are ordered by ascending outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<T> {
    entries: Vec<(Vec<T>, usize)>,
}

impl<T> Tally<T>
where
    T: Face,
{
    fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let entries = keys
            .into_iter()
            .counts()
            .into_iter()
            .sorted_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, key: &[T]) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_slice() == key)
            .map(|&(_, c)| c)
    }

    #[must_use]
    pub fn most_common(&self) -> Option<(&[T], usize)> {
        self.entries.first().map(|(k, c)| (k.as_slice(), *c))
    }

    /// Sum of all counts, the number of rolls tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (Vec<T>, usize)> {
        self.entries.iter()
    }
}

impl<T> IntoIterator for Tally<T> {
    type Item = (Vec<T>, usize);
    type IntoIter = std::vec::IntoIter<(Vec<T>, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tally<T> {
    type Item = &'a (Vec<T>, usize);
    type IntoIter = slice::Iter<'a, (Vec<T>, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
