//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the pseudo-legal move
//! generator and material evaluation from `chess_core`. The automated
//! opponent of the game controller.

mod search;

use chess_core::{Board, Color, Engine, SearchResult};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Minimax engine with alpha-beta pruning.
///
/// Depth is explicit configuration: search cost grows exponentially with
/// depth times the branching factor, so callers pick the depth they can
/// afford. There is no iterative deepening and no time limit.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;
        let maximizing = side == Color::White;
        let result = search::best_move(board, self.depth, maximizing, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{best_move, search, MATED_SCORE};
