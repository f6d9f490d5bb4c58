pub mod board;
pub mod eval;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by move-selecting engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line, positive favoring White
    pub score: i32,
    /// Search depth used, in plies
    pub depth: u8,
    /// Number of nodes searched (for statistics)
    pub nodes: u64,
}

/// Trait implemented by engines that pick a move for a side.
///
/// The board carries no side-to-move, so the side the engine plays for is
/// passed explicitly. Keeping this seam lets the game controller swap
/// search implementations without changes.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// `best_move` is `None` exactly when `side` has zero pseudo-legal
    /// moves, which the caller must treat as a terminal game state.
    fn select_move(&mut self, board: &Board, side: Color) -> SearchResult;

    /// Engine name for display purposes
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
