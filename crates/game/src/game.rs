//! Game state management: turn alternation, move validation, engine turns

use chess_core::{generate_moves, material, Board, Color, Engine, Move};
use minimax_engine::MinimaxEngine;

use crate::config::GameConfig;

/// Whose input drives the next move, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    HumanToMove,
    EngineToMove,
    /// The side to move has no pseudo-legal moves. Check is never
    /// detected, so this covers both mate-like and stalemate-like ends.
    GameOver,
}

/// Outcome of a proposed human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    Accepted,
    Rejected,
}

impl Proposal {
    pub fn is_accepted(self) -> bool {
        self == Proposal::Accepted
    }
}

/// Holds the current board, whose turn it is, and which side the engine
/// plays. All move application funnels through `execute`, so the board is
/// replaced wholesale on every move and never mutated in place.
pub struct Game {
    board: Board,
    turn: Color,
    engine_side: Color,
    engine: Box<dyn Engine>,
    last_move: Option<Move>,
    status: GameStatus,
}

impl Game {
    /// New game from the standard start position with the configured
    /// minimax engine. White moves first, so an engine playing White
    /// starts in `EngineToMove`.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(
            config.engine_side(),
            Box::new(MinimaxEngine::new(config.search_depth)),
        )
    }

    /// New game with a caller-supplied engine.
    pub fn with_engine(engine_side: Color, engine: Box<dyn Engine>) -> Self {
        Self::from_board(Board::startpos(), Color::White, engine_side, engine)
    }

    /// Resume from an arbitrary position; also the setup hook for tests.
    pub fn from_board(
        board: Board,
        turn: Color,
        engine_side: Color,
        engine: Box<dyn Engine>,
    ) -> Self {
        let mut game = Self {
            board,
            turn,
            engine_side,
            engine,
            last_move: None,
            status: GameStatus::GameOver,
        };
        game.status = game.status_for(turn);
        game
    }

    fn status_for(&self, side: Color) -> GameStatus {
        if generate_moves(&self.board, side).is_empty() {
            GameStatus::GameOver
        } else if side == self.engine_side {
            GameStatus::EngineToMove
        } else {
            GameStatus::HumanToMove
        }
    }

    /// Validate and apply a human move.
    ///
    /// Accepted iff it is the human's turn and the move appears in the
    /// pseudo-legal list for the current board; anything else is rejected
    /// with no state change. When acceptance leaves the status at
    /// `EngineToMove`, the caller should schedule `automated_move` from a
    /// deferred callback rather than invoking it on the input path: the
    /// search is synchronous and blocks for its full duration.
    pub fn propose_move(&mut self, mv: Move) -> Proposal {
        if self.status != GameStatus::HumanToMove {
            log::debug!("rejected {}: not the human's turn", mv);
            return Proposal::Rejected;
        }
        if !generate_moves(&self.board, self.turn).contains(&mv) {
            log::debug!("rejected {}: not a pseudo-legal move", mv);
            return Proposal::Rejected;
        }
        self.execute(mv);
        Proposal::Accepted
    }

    /// Compute and apply the engine's move.
    ///
    /// Only acts when the engine side is to move. Returns the move that
    /// was applied, or `None` when there is nothing to do — including the
    /// terminal case where the engine has no move, which flips the status
    /// to `GameOver` instead of failing.
    pub fn automated_move(&mut self) -> Option<Move> {
        if self.status != GameStatus::EngineToMove {
            return None;
        }
        let result = self.engine.select_move(&self.board, self.engine_side);
        let mv = match result.best_move {
            Some(mv) => mv,
            None => {
                self.status = GameStatus::GameOver;
                return None;
            }
        };
        log::info!(
            "{} plays {} (score {}, {} nodes)",
            self.engine.name(),
            mv,
            result.score,
            result.nodes
        );
        self.execute(mv);
        Some(mv)
    }

    fn execute(&mut self, mv: Move) {
        self.board = self.board.apply(mv);
        self.last_move = Some(mv);
        self.turn = self.turn.other();
        self.status = self.status_for(self.turn);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.turn
    }
    pub fn engine_side(&self) -> Color {
        self.engine_side
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    /// Last applied move, for highlighting.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Unsigned material totals (White, Black) for the score display.
    pub fn material_count(&self) -> (u32, u32) {
        (
            material(&self.board, Color::White),
            material(&self.board, Color::Black),
        )
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
