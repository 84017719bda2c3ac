// Ficheiro: src/game.rs
// Descrição: Partida do motor contra si próprio (alternância de turnos, saltos em cadeia, fim de jogo).

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::*;
use crate::error::{ConfigError, EngineError};
use crate::search::{SearchConfig, SearchEngine, SearchStats};

/// Lado mínimo do tabuleiro.
pub const MIN_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Limite de lances; ao atingi-lo a partida termina empatada.
    pub max_turns: u32,
    /// Semente do desempate aleatório. `None` usa entropia do sistema.
    pub seed: Option<u64>,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 8,
            cols: 8,
            max_turns: 200,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_BOARD_SIZE || self.cols < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall { rows: self.rows, cols: self.cols, min: MIN_BOARD_SIZE });
        }
        self.search.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Um lance jogado, com os dados da busca que o escolheu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub number: u32,
    pub mv: Move,
    pub score: i32,
    pub stats: SearchStats,
}

pub struct Game {
    board: Board,
    to_move: Player,
    engine: SearchEngine,
    rng: StdRng,
    turns: u32,
    max_turns: u32,
    status: GameStatus,
}

impl Game {
    /// Nova partida na posição inicial; as pretas jogam primeiro.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        Game::from_position(board, Player::Black, config)
    }

    /// Partida a partir de uma posição arbitrária. `rows`/`cols` da configuração são ignorados.
    pub fn from_position(board: Board, to_move: Player, config: GameConfig) -> Result<Self, EngineError> {
        let engine = SearchEngine::new(config.search)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let status = if board.has_legal_moves(to_move) {
            GameStatus::InProgress
        } else {
            GameStatus::Won(!to_move)
        };

        Ok(Game { board, to_move, engine, rng, turns: 0, max_turns: config.max_turns, status })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Joga um lance. Devolve `None` quando a partida já terminou.
    pub fn step(&mut self) -> Option<Turn> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        if self.turns >= self.max_turns {
            info!("turn limit of {} reached, game drawn", self.max_turns);
            self.status = GameStatus::Draw;
            return None;
        }

        let mover = self.to_move;
        let result = self.engine.search(&self.board, mover, &mut self.rng);
        let Some(mv) = result.best_move else {
            self.status = GameStatus::Won(!mover);
            return None;
        };

        self.board.execute(&mv);
        self.turns += 1;
        info!(
            "turn {}: {} (score {}, {} nodes, {}ms)",
            self.turns,
            mv,
            result.score,
            result.stats.nodes,
            result.stats.elapsed.as_millis()
        );

        // Depois de um salto o mesmo jogador continua enquanto tiver outro salto.
        let next = if mv.is_jump() && self.board.must_jump(mover) { mover } else { !mover };
        self.to_move = next;

        if !self.board.has_legal_moves(next) {
            self.status = GameStatus::Won(!next);
            info!("{} has no legal moves, {} wins", next, !next);
        }

        Some(Turn { number: self.turns, mv, score: result.score, stats: result.stats })
    }

    /// Joga até ao fim e devolve o resultado.
    pub fn play(&mut self) -> GameStatus {
        while self.step().is_some() {}
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchMode;

    fn quick_config(seed: u64, depth: u8) -> GameConfig {
        GameConfig {
            rows: 6,
            cols: 6,
            max_turns: 100,
            seed: Some(seed),
            search: SearchConfig::default().with_threads(2).with_depth(depth),
        }
    }

    #[test]
    fn test_game_reaches_an_end() {
        let mut game = Game::new(quick_config(9, 1)).unwrap();
        let status = game.play();
        assert_ne!(status, GameStatus::InProgress);
        assert!(game.turns() <= 100);
        assert!(game.step().is_none());
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = Game::new(quick_config(21, 1)).unwrap();
        let mut b = Game::new(quick_config(21, 1)).unwrap();
        for _ in 0..10 {
            assert_eq!(a.step().map(|t| t.mv), b.step().map(|t| t.mv));
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_jump_chain_keeps_the_turn() {
        let mut board = Board::empty(8, 8);
        board.set(Coord::new(2, 1), Square::Black);
        board.set(Coord::new(3, 2), Square::White);
        board.set(Coord::new(5, 4), Square::White);

        let mut config = quick_config(1, 0);
        config.search.mode = SearchMode::Sequential;
        let mut game = Game::from_position(board, Player::Black, config).unwrap();

        let first = game.step().unwrap();
        assert!(first.mv.is_jump());
        assert_eq!(game.to_move(), Player::Black);

        let second = game.step().unwrap();
        assert_eq!(second.mv.to, Coord::new(6, 5));
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
        assert_eq!(game.board().count(Player::White), 0);
    }

    #[test]
    fn test_turn_limit_draws() {
        let mut config = quick_config(4, 0);
        config.max_turns = 2;
        let mut game = Game::new(config).unwrap();
        assert!(game.step().is_some());
        assert!(game.step().is_some());
        assert!(game.step().is_none());
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_rejects_tiny_board() {
        let mut config = GameConfig::default();
        config.rows = 3;
        assert_eq!(config.validate(), Err(ConfigError::BoardTooSmall { rows: 3, cols: 8, min: MIN_BOARD_SIZE }));
    }

    #[test]
    fn test_stuck_side_loses_immediately() {
        let mut board = Board::empty(8, 8);
        board.set(Coord::new(0, 1), Square::White);
        board.set(Coord::new(4, 1), Square::Black);
        let game = Game::from_position(board, Player::White, quick_config(0, 0)).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
    }
}
