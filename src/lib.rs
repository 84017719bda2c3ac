// Motor de Damas - busca paralela fork/join em profundidade fixa

pub mod core;
pub mod error;
pub mod game;
pub mod moves;
pub mod search;

pub use crate::core::*;
pub use crate::error::*;
pub use game::{Game, GameConfig, GameStatus, Turn};
pub use search::{search_best_move, SearchConfig, SearchEngine, SearchMode, SearchResult, SearchStats};
