//! RNG module - weighted piece selection and the lookahead queue
//!
//! Selection is not a strict bag. Every shape carries a weight that starts at
//! [`INITIAL_SELECTOR_WEIGHT`] and grows by one each time the shape is dealt.
//! Each draw rolls `floor(random() * weight^3)` per shape, nudges it by ±0.5
//! and deals the shape with the lowest result, so shapes that were dealt often
//! roll high and shapes that were skipped catch up. Weights never decay.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Tetromino;
use crate::types::{PieceKind, INITIAL_SELECTOR_WEIGHT, PIECE_KIND_COUNT};

/// Anti-repeat weighted random selector over the piece catalog
#[derive(Debug, Clone)]
pub struct PieceSelector {
    weights: [u32; PIECE_KIND_COUNT],
    rng: StdRng,
}

impl PieceSelector {
    /// Create a selector with a deterministic seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a selector seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            weights: [INITIAL_SELECTOR_WEIGHT; PIECE_KIND_COUNT],
            rng,
        }
    }

    /// Current weight table, indexed by [`PieceKind::index`]
    pub fn weights(&self) -> &[u32; PIECE_KIND_COUNT] {
        &self.weights
    }

    /// Pick the next catalog index and bump its weight
    pub fn select_index(&mut self) -> usize {
        let mut min_val = f64::INFINITY;
        let mut min_idx = 0;

        for (i, &weight) in self.weights.iter().enumerate() {
            let span = f64::from(weight).powi(3);
            let rand_val = (self.rng.gen::<f64>() * span).floor();
            let offset = if self.rng.gen_bool(0.5) { 0.5 } else { -0.5 };
            let adjusted = rand_val + offset;
            if adjusted < min_val {
                min_val = adjusted;
                min_idx = i;
            }
        }

        self.weights[min_idx] = self.weights[min_idx].saturating_add(1);
        min_idx
    }

    /// Pick the next piece kind
    pub fn select(&mut self) -> PieceKind {
        // select_index only yields catalog indices
        PieceKind::ALL[self.select_index()]
    }
}

/// Fixed-depth queue of upcoming pieces fed by a [`PieceSelector`]
#[derive(Debug, Clone)]
pub struct PieceQueue {
    selector: PieceSelector,
    upcoming: VecDeque<Tetromino>,
    board_width: usize,
}

impl PieceQueue {
    /// Create a queue pre-filled with `lookahead` pieces
    pub fn new(selector: PieceSelector, lookahead: usize, board_width: usize) -> Self {
        let mut queue = Self {
            selector,
            upcoming: VecDeque::with_capacity(lookahead + 1),
            board_width,
        };
        for _ in 0..lookahead {
            queue.push_piece();
        }
        queue
    }

    fn deal(&mut self) -> Tetromino {
        Tetromino::spawn(self.selector.select(), self.board_width)
    }

    fn push_piece(&mut self) {
        let piece = self.deal();
        self.upcoming.push_back(piece);
    }

    /// Deal one new piece onto the back, then take the front.
    ///
    /// The queue length is unchanged between calls. A zero-depth queue hands
    /// back the freshly dealt piece.
    pub fn pop_next(&mut self) -> Tetromino {
        let fresh = self.deal();
        self.upcoming.push_back(fresh);
        self.upcoming.pop_front().unwrap_or(fresh)
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<&Tetromino> {
        self.upcoming.front()
    }

    /// Upcoming pieces, next first
    pub fn iter(&self) -> impl Iterator<Item = &Tetromino> {
        self.upcoming.iter()
    }

    /// Upcoming piece kinds, next first
    pub fn kinds(&self) -> Vec<PieceKind> {
        self.upcoming.iter().map(|p| p.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    pub fn selector(&self) -> &PieceSelector {
        &self.selector
    }
}
