use std::borrow::Borrow;

use itertools::Itertools;
use log::trace;
use num::ToPrimitive;

use crate::error::{Error, Result};
use crate::source::RandomSource;
use crate::value::{to_weight, DefaultFace, Face, Weight};
use crate::DEFAULT_WEIGHT;

/// A single die: a fixed list of unique faces, each carrying a non-negative weight.
///
/// Faces keep the order they were given in. Weights start at [`DEFAULT_WEIGHT`] and
/// are only changed through [`Die::change_weight`]; they are normalized into
/// probabilities on every roll, never when they are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Die<T = DefaultFace>
where
    T: Face,
{
    faces: Vec<T>,
    weights: Vec<Weight>,
}

impl Die {
    /// A fair die with faces `1..=sides`.
    pub fn numeric(sides: DefaultFace) -> Result<Self> {
        Die::new(1..=sides)
    }
}

impl<T> Die<T>
where
    T: Face,
{
    /// Builds a die with every face weighted [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// * [`Error::NoFaces`] if `faces` is empty.
    /// * [`Error::DuplicateFace`] if any face repeats.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces = faces.into_iter().collect_vec();
        Self::check_faces(&faces)?;
        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Builds a die from `(face, weight)` pairs.
    ///
    /// # Errors
    /// Everything [`Die::new`] rejects, plus any weight [`Die::change_weight`] would reject.
    pub fn weighted<I, W>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, W)>,
        W: ToPrimitive,
    {
        let (faces, weights): (Vec<T>, Vec<W>) = pairs.into_iter().unzip();
        Self::check_faces(&faces)?;
        let weights = weights
            .into_iter()
            .map(Self::check_weight)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { faces, weights })
    }

    /// Faces must be non-empty and unique.
    pub(crate) fn uniform_unchecked(faces: Vec<T>) -> Self {
        debug_assert!(Self::check_faces(&faces).is_ok());
        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Self { faces, weights }
    }

    /// Replaces the weight of `face`.
    ///
    /// # Errors
    /// * [`Error::UnknownFace`] if `face` is not on this die.
    /// * [`Error::InvalidWeight`] if `weight` has no finite `f64` value.
    /// * [`Error::NegativeWeight`] if `weight` is below zero.
    pub fn change_weight<Q, W>(&mut self, face: &Q, weight: W) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Eq + std::fmt::Debug + ?Sized,
        W: ToPrimitive,
    {
        let index = self.position(face).ok_or_else(|| Error::UnknownFace {
            face: Error::face(face),
        })?;
        let weight = Self::check_weight(weight)?;
        trace!("face {face:?}: weight {} -> {weight}", self.weights[index]);
        self.weights[index] = weight;
        Ok(())
    }

    /// Rolls the die `n` times, drawing each face with probability proportional to its
    /// current weight.
    ///
    /// # Errors
    /// * [`Error::ZeroWeights`] if every weight is zero, whatever `n` is.
    /// * [`Error::WeightOverflow`] if the weights add up past `f64::MAX`.
    pub fn roll<G>(&self, n: usize, rng: &mut G) -> Result<Vec<T>>
    where
        G: RandomSource + ?Sized,
    {
        self.total_weight()?;
        let picks = rng.draw_weighted(&self.weights, n)?;
        Ok(picks.into_iter().map(|i| self.faces[i].clone()).collect())
    }

    /// Copy of the face to weight table, in face order.
    #[must_use]
    pub fn show_state(&self) -> Vec<(T, Weight)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    /// Current weights normalized to sum to one.
    pub fn probabilities(&self) -> Result<Vec<(T, f64)>> {
        let total = self.total_weight()?;
        Ok(self
            .show_state()
            .into_iter()
            .map(|(face, w)| (face, w / total))
            .collect())
    }

    #[must_use]
    pub fn weight<Q>(&self, face: &Q) -> Option<Weight>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(face).map(|i| self.weights[i])
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always `false`: construction rejects empty dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn total_weight(&self) -> Result<Weight> {
        let total: Weight = self.weights.iter().sum();
        if total == 0.0 {
            return Err(Error::ZeroWeights);
        }
        if !total.is_finite() {
            return Err(Error::WeightOverflow);
        }
        Ok(total)
    }

    fn position<Q>(&self, face: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.faces.iter().position(|f| f.borrow() == face)
    }

    fn check_faces(faces: &[T]) -> Result<()> {
        if faces.is_empty() {
            return Err(Error::NoFaces);
        }
        match faces.iter().duplicates().next() {
            Some(face) => Err(Error::DuplicateFace {
                face: Error::face(face),
            }),
            None => Ok(()),
        }
    }

    fn check_weight<W: ToPrimitive>(weight: W) -> Result<Weight> {
        let weight = to_weight(weight).ok_or(Error::InvalidWeight)?;
        if weight < 0.0 {
            return Err(Error::NegativeWeight { weight });
        }
        Ok(weight)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn d6() -> Die {
        Die::numeric(6).unwrap()
    }

    #[test]
    fn starts_with_unit_weights() {
        let die = d6();
        assert_eq!(die.len(), 6);
        assert!(die.show_state().iter().all(|&(_, w)| w == 1.0));
    }

    #[test]
    fn rejects_bad_faces() {
        assert_eq!(Die::<i32>::new([]), Err(Error::NoFaces));
        assert!(matches!(
            Die::new([1, 2, 2, 3]),
            Err(Error::DuplicateFace { face }) if face == "2"
        ));
        assert!(matches!(
            Die::new(["a", "b", "a"]),
            Err(Error::DuplicateFace { .. })
        ));
    }

    #[test]
    fn change_weight_touches_one_face() {
        let mut die = d6();
        die.change_weight(&3, 2.5).unwrap();
        for (face, w) in die.show_state() {
            assert_eq!(w, if face == 3 { 2.5 } else { 1.0 });
        }
        die.change_weight(&4, 0u8).unwrap();
        assert_eq!(die.weight(&4), Some(0.0));
    }

    #[test]
    fn change_weight_errors_are_distinct() {
        let mut die = d6();
        assert!(matches!(
            die.change_weight(&7, 1.0),
            Err(Error::UnknownFace { .. })
        ));
        assert_eq!(die.change_weight(&1, f64::NAN), Err(Error::InvalidWeight));
        assert_eq!(
            die.change_weight(&1, -1),
            Err(Error::NegativeWeight { weight: -1.0 })
        );
        assert_eq!(die, d6());
    }

    #[test]
    fn string_faces_borrow_lookup() {
        let mut die = Die::new(["H".to_string(), "T".to_string()]).unwrap();
        die.change_weight("T", 3).unwrap();
        assert_eq!(die.weight("T"), Some(3.0));
        assert_eq!(die.weight("X"), None);
    }

    #[test]
    fn state_is_a_copy() {
        let die = d6();
        let mut state = die.show_state();
        state[0].1 = 100.0;
        assert_eq!(die.weight(&1), Some(1.0));
    }

    #[test]
    fn roll_returns_known_faces() {
        let die = d6();
        let mut rng = StdRng::seed_from_u64(3);
        for n in [0, 1, 5, 250] {
            let rolls = die.roll(n, &mut rng).unwrap();
            assert_eq!(rolls.len(), n);
            assert!(rolls.iter().all(|f| die.faces().contains(f)));
        }
    }

    #[test]
    fn zero_weight_face_never_rolls() {
        let mut die = d6();
        die.change_weight(&6, 0.0).unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(!die.roll(500, &mut rng).unwrap().contains(&6));
        }
    }

    #[test]
    fn all_zero_weights_fail() {
        let mut die = Die::new(['x', 'y']).unwrap();
        die.change_weight(&'x', 0).unwrap();
        die.change_weight(&'y', 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(die.roll(10, &mut rng), Err(Error::ZeroWeights));
        assert_eq!(die.probabilities(), Err(Error::ZeroWeights));
    }

    #[test]
    fn huge_weights_overflow() {
        let mut die = Die::numeric(2).unwrap();
        die.change_weight(&1, f64::MAX).unwrap();
        die.change_weight(&2, f64::MAX).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(die.roll(5, &mut rng), Err(Error::WeightOverflow));
        assert_eq!(die.probabilities(), Err(Error::WeightOverflow));

        die.change_weight(&1, 1.0).unwrap();
        assert_eq!(die.roll(5, &mut rng).map(|r| r.len()), Ok(5));
    }

    #[test]
    fn weighted_constructor() {
        let die = Die::weighted([("a", 1.0), ("b", 3.0)]).unwrap();
        let pb = die.probabilities().unwrap();
        assert_eq!(pb, vec![("a", 0.25), ("b", 0.75)]);
        assert_eq!(
            Die::weighted([("a", 1.0), ("b", -3.0)]),
            Err(Error::NegativeWeight { weight: -3.0 })
        );
    }

    #[test]
    fn seeded_rolls_repeat() {
        let die = d6();
        let a = die.roll(50, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = die.roll(50, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
