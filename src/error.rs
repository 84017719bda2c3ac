// Ficheiro: src/error.rs
// Descrição: Tipos de erro do motor (lances ilegais, configuração, arranque do pool).

use thiserror::Error;

/// Motivo pelo qual um lance foi recusado, pela ordem em que as regras são verificadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("source not valid")]
    SourceNotValid,
    #[error("that's not your piece")]
    NotYourPiece,
    #[error("destination not valid")]
    DestinationNotValid,
    #[error("only kings can move backwards")]
    BackwardMove,
    #[error("destination must be empty")]
    DestinationOccupied,
    #[error("move not in range")]
    OutOfRange,
    #[error("you must make a jump if possible")]
    MustJump,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u8, max: u8 },
    #[error("board of {rows}x{cols} is too small (minimum {min}x{min})")]
    BoardTooSmall { rows: usize, cols: usize, min: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Erros ao interpretar argumentos da linha de comandos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown option {0}")]
    UnknownOption(String),
}
