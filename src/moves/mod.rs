// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a verificação e geração de lances.

pub mod generation;
pub mod legality;

pub use generation::*;
pub use legality::{check_move, must_jump, DIAGONALS};
