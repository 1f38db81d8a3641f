//! Board simulator: replays encoded move sequences and scores them.

use crate::board::moves::{KNIGHT_OFFSETS, decode_move, encode_move};
use crate::board::square::Square;
use crate::error::{Error, SearchResult};
use crate::ga::{Evaluation, Fitness, Genome};

/// Marker for a cell the knight never reached in a rendered matrix.
pub const UNVISITED: i32 = -1;

/// 8x8 matrix of 0-based visit orders, [`UNVISITED`] where the knight never
/// stood. Indexed `[rank][file]` with rank 0 at the bottom.
pub type VisitMatrix = [[i32; 8]; 8];

/// An 8x8 board with a knight on it.
///
/// Tracks which cells have been visited and where the knight currently
/// stands. Construction places the knight on the starting square and marks
/// it visited; [`reset`](Board::reset) returns to that state.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    visited: [[bool; 8]; 8],
    rank: usize,
    file: usize,
    origin: Square,
}

impl Board {
    /// Create a board with the knight placed on `start`.
    #[must_use]
    pub fn new(start: Square) -> Self {
        let mut board = Self {
            visited: [[false; 8]; 8],
            rank: start.rank(),
            file: start.file(),
            origin: start,
        };
        board.visited[board.rank][board.file] = true;
        board
    }

    /// Clear the grid and put the knight back on the starting square,
    /// marking only that square visited.
    pub fn reset(&mut self) {
        self.visited = [[false; 8]; 8];
        self.rank = self.origin.rank();
        self.file = self.origin.file();
        self.visited[self.rank][self.file] = true;
    }

    /// Current knight position as (rank, file).
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.rank, self.file)
    }

    /// Whether the given cell has been visited.
    #[must_use]
    pub fn is_visited(&self, rank: usize, file: usize) -> bool {
        rank < 8 && file < 8 && self.visited[rank][file]
    }

    /// Attempt the move encoded by `codeword`.
    ///
    /// Returns false without changing any state when the destination is
    /// off-board or already visited; otherwise moves the knight, marks the
    /// destination visited, and returns true.
    pub fn try_move(&mut self, codeword: [bool; 3]) -> bool {
        self.step(decode_move(codeword))
    }

    /// Apply the knight offset with the given index, if legal.
    fn step(&mut self, index: u8) -> bool {
        let (dr, df) = KNIGHT_OFFSETS[usize::from(index)];
        let Some(rank) = self.rank.checked_add_signed(isize::from(dr)) else {
            return false;
        };
        let Some(file) = self.file.checked_add_signed(isize::from(df)) else {
            return false;
        };
        if rank > 7 || file > 7 || self.visited[rank][file] {
            return false;
        }
        self.rank = rank;
        self.file = file;
        self.visited[rank][file] = true;
        true
    }

    /// Greedy local repair of a failed move slot.
    ///
    /// Tries the 7 move indices other than the slot's encoded one in
    /// ascending table order; the first that succeeds overwrites the slot
    /// and wins. No lookahead, no comparison between alternatives, and no
    /// revisiting of earlier slots. When none succeed the slot is left
    /// unchanged and false is returned.
    ///
    /// # Errors
    ///
    /// Propagates codec errors (unreachable for in-range indices).
    pub fn repair(&mut self, genome: &mut Genome, slot: usize) -> SearchResult<bool> {
        let original = decode_move(genome.slot(slot));
        for index in 0..8u8 {
            if index == original {
                continue;
            }
            if self.step(index) {
                genome.set_slot(slot, encode_move(index)?);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Score a genome by replaying it from the starting square.
    ///
    /// Each slot is attempted in order; a failed move gets exactly one
    /// repair attempt, and a failed repair stops the replay. The score is
    /// the count of slots consumed before stopping. The input genome is not
    /// touched: repairs land in the genome carried by the returned
    /// [`Evaluation`], which callers feed back as they see fit. A repaired
    /// genome is a fixpoint of this function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenomeLength`] when the genome's bit length
    /// is not a multiple of 3.
    pub fn evaluate(&mut self, genome: &Genome) -> SearchResult<Evaluation> {
        let slots = genome.checked_slots()?;
        self.reset();
        let mut repaired = genome.clone();
        let mut score = 0u32;
        for slot in 0..slots {
            if !self.try_move(repaired.slot(slot)) && !self.repair(&mut repaired, slot)? {
                break;
            }
            score += 1;
        }
        Ok(Evaluation {
            genome: repaired,
            score,
        })
    }

    /// Replay a genome without repair and record visit order.
    ///
    /// The starting cell holds 0, the i-th successful move holds i, and
    /// replay stops at the first illegal move. Presentation only; feed it
    /// an already-repaired genome to see the full scored path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenomeLength`] when the genome's bit length
    /// is not a multiple of 3.
    pub fn render(&mut self, genome: &Genome) -> SearchResult<VisitMatrix> {
        let slots = genome.checked_slots()?;
        self.reset();
        let mut matrix = [[UNVISITED; 8]; 8];
        matrix[self.rank][self.file] = 0;
        let mut order = 0i32;
        for slot in 0..slots {
            if !self.try_move(genome.slot(slot)) {
                break;
            }
            order += 1;
            matrix[self.rank][self.file] = order;
        }
        Ok(matrix)
    }
}

/// Fitness source scoring genomes as knight walks from a fixed start.
///
/// Each scoring call replays on its own fresh [`Board`], so concurrent
/// evaluations share no state.
#[derive(Debug, Clone, Copy)]
pub struct TourFitness {
    start: Square,
}

impl TourFitness {
    /// Create a fitness source for tours starting at `start`.
    #[must_use]
    pub const fn new(start: Square) -> Self {
        Self { start }
    }
}

impl Fitness for TourFitness {
    fn score(&self, genome: &Genome) -> Result<Evaluation, Error> {
        Board::new(self.start).evaluate(genome)
    }
}
