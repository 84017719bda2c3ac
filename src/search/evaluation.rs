use crate::core::*;
use crate::moves::{check_move, DIAGONALS};

/// Valor de cada peça segundo (dama?, segura?).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub safe_king: i32,
    pub unsafe_king: i32,
    pub safe_man: i32,
    pub unsafe_man: i32,
}

impl ScoreWeights {
    /// Damas valem sempre mais do que pedras, seguras ou não.
    pub const KING_FIRST: ScoreWeights = ScoreWeights {
        safe_king: 4,
        unsafe_king: 3,
        safe_man: 2,
        unsafe_man: 1,
    };

    /// Segurança pesa mais do que a coroa (exceto entre peças seguras).
    pub const SAFETY_FIRST: ScoreWeights = ScoreWeights {
        safe_king: 4,
        unsafe_king: 2,
        safe_man: 3,
        unsafe_man: 1,
    };

    #[inline]
    pub fn value(&self, king: bool, safe: bool) -> i32 {
        match (king, safe) {
            (true, true) => self.safe_king,
            (true, false) => self.unsafe_king,
            (false, true) => self.safe_man,
            (false, false) => self.unsafe_man,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights::SAFETY_FIRST
    }
}

/// Pontuação estática do jogador com os pesos por omissão.
pub fn score(board: &Board, player: Player) -> i32 {
    score_with(board, player, &ScoreWeights::default())
}

/// Soma o valor de cada peça do jogador.
pub fn score_with(board: &Board, player: Player, weights: &ScoreWeights) -> i32 {
    board
        .pieces(player)
        .map(|coord| weights.value(board.get(coord).is_king(), is_safe(board, coord)))
        .sum()
}

/// Pontuação do jogador menos a do adversário.
#[inline]
pub fn net_score(board: &Board, player: Player, weights: &ScoreWeights) -> i32 {
    score_with(board, player, weights) - score_with(board, !player, weights)
}

/// Uma peça está segura se nenhuma peça adversária vizinha a pode saltar agora.
pub fn is_safe(board: &Board, coord: Coord) -> bool {
    let Some(owner) = board.get(coord).owner() else {
        return true;
    };

    DIAGONALS.iter().all(|&(d_row, d_col)| {
        let mut capture = Move::new(coord.offset(d_row, d_col), coord.offset(-d_row, -d_col), !owner);
        check_move(board, &mut capture).is_err()
    })
}
