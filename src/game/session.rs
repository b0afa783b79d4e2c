//! A single-player FreeCell session.
//!
//! Holds the current board and runs the per-action cycle: check how many
//! cards can move, move them, auto-play, check for a win.

use im::Vector;
use log::debug;

use crate::board::Board;
use crate::core::{GameConfig, GameRng, Location, LocationError};
use crate::rules::{auto_move_traced, is_won, num_movable, Move};

/// Why a requested move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// A location index was out of range.
    InvalidLocation(LocationError),
    /// No card can move from `src` to `dst`.
    Illegal { src: Location, dst: Location },
    /// The game is already won.
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidLocation(err) => write!(f, "invalid location: {err}"),
            MoveError::Illegal { src, dst } => write!(f, "no card can move from {src} to {dst}"),
            MoveError::GameOver => write!(f, "the game is already won"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidLocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LocationError> for MoveError {
    fn from(err: LocationError) -> Self {
        MoveError::InvalidLocation(err)
    }
}

/// Result of a successful [`FreeCellGame::play`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cards moved by the player's action.
    pub moved: usize,
    /// Auto-play promotions that followed, in order.
    pub promotions: Vec<Move>,
    /// Whether the game is now won.
    pub won: bool,
}

/// Game session: the current board plus the seed that produced it.
///
/// ```
/// use freecell_engine::{FreeCellGame, GameConfig};
///
/// let game = FreeCellGame::new(GameConfig::default().with_seed(42));
/// assert_eq!(game.seed(), 42);
/// assert_eq!(game.board().card_count(), 52);
/// assert!(!game.is_won());
/// ```
#[derive(Clone, Debug)]
pub struct FreeCellGame {
    config: GameConfig,
    rng: GameRng,
    seed: u64,
    board: Board,
    /// Every move applied since the deal, auto-play included.
    history: Vector<Move>,
}

impl FreeCellGame {
    /// Start a session and deal the first game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            rng: GameRng::new(seed),
            seed,
            board: Board::deal_seeded(seed),
            history: Vector::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied since the deal. Replaying them on
    /// `Board::deal_seeded(self.seed())` reproduces the current board.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        is_won(&self.board)
    }

    /// Cards that would move from `src` to `dst`; 0 for an illegal move or
    /// an out-of-range location.
    #[must_use]
    pub fn num_movable(&self, src: Location, dst: Location) -> usize {
        if !src.is_valid() || !dst.is_valid() {
            return 0;
        }
        num_movable(&self.board, src, dst)
    }

    /// Move as many cards as legally possible from `src` to `dst`, then run
    /// auto-play if the config enables it.
    pub fn play(&mut self, src: Location, dst: Location) -> Result<MoveOutcome, MoveError> {
        src.validate()?;
        dst.validate()?;
        if self.is_won() {
            return Err(MoveError::GameOver);
        }

        let moved = num_movable(&self.board, src, dst);
        if moved == 0 {
            return Err(MoveError::Illegal { src, dst });
        }

        let mv = Move::new(src, dst, moved);
        debug!("seed {}: play {mv}", self.seed);
        self.board = mv.apply(&self.board);
        self.history.push_back(mv);

        let promotions = if self.config.auto_play {
            self.auto_play()
        } else {
            Vec::new()
        };

        let won = self.is_won();
        if won {
            debug!("seed {}: won after {} moves", self.seed, self.history.len());
        }

        Ok(MoveOutcome {
            moved,
            promotions,
            won,
        })
    }

    /// Run auto-play now, returning the promotions made.
    pub fn auto_play(&mut self) -> Vec<Move> {
        let (board, promotions) = auto_move_traced(&self.board);
        self.board = board;
        self.history.extend(promotions.iter().copied());
        promotions
    }

    /// Re-deal the current seed, discarding progress.
    pub fn restart(&mut self) {
        self.board = Board::deal_seeded(self.seed);
        self.history = Vector::new();
    }

    /// Deal a new game with the next seed from the session RNG.
    pub fn new_deal(&mut self) {
        self.seed = self.rng.next_seed();
        self.restart();
    }
}
