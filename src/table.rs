use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::value::Face;

/// Wide results table: one row per roll, one column per die.
///
/// Rolls are numbered from 1, dice are addressed by their 0-based position in
/// the game. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollTable<T> {
    dice: usize,
    cells: Vec<T>,
}

impl<T> RollTable<T>
where
    T: Face,
{
    /// Lays out `columns[die][roll]` into rows. All columns must have the same length.
    pub(crate) fn from_columns(columns: Vec<Vec<T>>) -> Self {
        let dice = columns.len();
        let rolls = columns.first().map_or(0, Vec::len);
        let mut iters = columns.into_iter().map(Vec::into_iter).collect::<Vec<_>>();
        let mut cells = Vec::with_capacity(rolls * dice);
        for _ in 0..rolls {
            cells.extend(iters.iter_mut().filter_map(Iterator::next));
        }
        debug_assert_eq!(cells.len(), rolls * dice);
        Self { dice, cells }
    }

    #[cfg(test)]
    pub(crate) fn from_rows<I, R>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut dice = None;
        let mut cells = Vec::new();
        for row in rows {
            let before = cells.len();
            cells.extend(row);
            let width = cells.len() - before;
            if *dice.get_or_insert(width) != width {
                return None;
            }
        }
        Some(Self {
            dice: dice.unwrap_or(0),
            cells,
        })
    }

    /// `(rolls, dice)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.dice)
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        if self.dice == 0 {
            0
        } else {
            self.cells.len() / self.dice
        }
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.dice
    }

    /// Faces of roll number `roll` (1-based), in die order.
    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[T]> {
        if roll == 0 || roll > self.rolls() {
            return None;
        }
        let start = (roll - 1) * self.dice;
        Some(&self.cells[start..start + self.dice])
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        self.row(roll).and_then(|r| r.get(die))
    }

    pub fn column(&self, die: usize) -> impl Iterator<Item = &T> + '_ {
        let step = self.dice.max(1);
        let skip = if die < self.dice { die } else { self.cells.len() };
        self.cells.iter().skip(skip).step_by(step)
    }

    /// Rows in roll order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.dice.max(1))
    }

    /// Row-major unpivot into `(Roll, Die, Face)` records.
    #[must_use]
    pub fn to_narrow(&self) -> NarrowTable<T> {
        let rows = self
            .rows()
            .zip(1..)
            .flat_map(|(row, roll)| {
                row.iter().enumerate().map(move |(die, face)| NarrowRow {
                    roll,
                    die,
                    face: face.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowRow<T> {
    pub roll: usize,
    pub die: usize,
    pub face: T,
}

/// Long results table: one row per (roll, die) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowTable<T> {
    rows: Vec<NarrowRow<T>>,
}

impl<T> NarrowTable<T> {
    pub const COLUMNS: [&'static str; 3] = ["Roll", "Die", "Face"];

    #[must_use]
    pub fn rows(&self) -> &[NarrowRow<T>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NarrowRow<T>> {
        self.rows.iter()
    }
}

impl<T> IntoIterator for NarrowTable<T> {
    type Item = NarrowRow<T>;
    type IntoIter = std::vec::IntoIter<NarrowRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Layout requested from [`crate::Game::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            _ => Err(Error::InvalidForm {
                form: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Wide => write!(f, "wide"),
            Form::Narrow => write!(f, "narrow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<T> {
    Wide(RollTable<T>),
    Narrow(NarrowTable<T>),
}

impl<T> View<T> {
    #[must_use]
    pub fn form(&self) -> Form {
        match self {
            View::Wide(_) => Form::Wide,
            View::Narrow(_) => Form::Narrow,
        }
    }
}
