//! Dice used by the combat resolver
//!
//! The resolver only sees the [`DiceRoller`] trait. Live games use [`Dice`],
//! a seeded ChaCha8 stream; tests and replays use [`ScriptedDice`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::DIE_FACES;

/// Source of single-die rolls in `1..=DIE_FACES`
pub trait DiceRoller {
    fn roll(&mut self) -> u8;
}

/// Seeded six-sided die
#[derive(Debug, Clone)]
pub struct Dice {
    inner: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG, once per process
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this stream was created with, for replaying a session
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`, used for drawing missions
    pub fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

impl DiceRoller for Dice {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, in order, for tests and recorded games
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        Self { faces, next: 0 }
    }

    /// Faces not yet rolled
    pub fn remaining(&self) -> usize {
        self.faces.len() - self.next
    }
}

impl DiceRoller for ScriptedDice {
    /// Next scripted face
    ///
    /// # Panics
    ///
    /// Panics when every scripted face has already been rolled. Check
    /// [`ScriptedDice::remaining`] first when replaying a script of unknown
    /// length.
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next += 1;
        face
    }
}
