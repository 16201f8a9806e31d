//! Weighted dice, games of several dice rolled together, and statistics over the
//! rolls.
//!
//! ```
//! use montecarlo::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut loaded = d6();
//! loaded.change_weight(&6, 5.0).unwrap();
//!
//! let mut game = Game::new([d6(), loaded]).unwrap();
//! game.play(500, &mut StdRng::seed_from_u64(1)).unwrap();
//!
//! let analyzer = Analyzer::new(&game).unwrap();
//! assert_eq!(analyzer.combo_count().total(), 500);
//! ```

mod analyzer;
pub mod defs;
mod die;
mod error;
mod game;
mod simulation;
mod source;
mod table;
mod value;

pub use analyzer::{Analyzer, FaceCounts, Tally};
pub use die::Die;
pub use error::{Error, Result};
pub use game::Game;
pub use simulation::{Simulation, SimulationBuilder};
pub use source::RandomSource;
pub use table::{Form, NarrowRow, NarrowTable, RollTable, View};
pub use value::{DefaultFace, Face, Weight};

pub const DEFAULT_WEIGHT: Weight = 1.0;
pub const DEFAULT_ROLLS: usize = 1_000;

pub mod prelude {
    pub use crate::defs::*;
    pub use crate::{
        Analyzer, Die, Error, Face, FaceCounts, Form, Game, RandomSource, RollTable,
        Simulation, Tally, View,
    };
}
