// Ficheiro: src/moves/legality.rs
// Descrição: Máquina de estados da legalidade de um lance (deslizes, saltos, salto obrigatório).

use crate::core::*;
use crate::error::IllegalMove;

/// As quatro direções diagonais (delta linha, delta coluna).
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Verifica o lance pela ordem das regras, parando na primeira falha.
/// Efeito secundário: regista em `mv.jump` se o lance é uma captura.
pub fn check_move(board: &Board, mv: &mut Move) -> Result<(), IllegalMove> {
    mv.jump = false;

    if !board.is_valid_square(mv.from) {
        return Err(IllegalMove::SourceNotValid);
    }

    let piece = board.get(mv.from);
    if !piece.is_same(mv.player) {
        return Err(IllegalMove::NotYourPiece);
    }

    if !board.is_valid_square(mv.to) {
        return Err(IllegalMove::DestinationNotValid);
    }

    if !respects_direction(piece, mv.player, mv.to.row - mv.from.row) {
        return Err(IllegalMove::BackwardMove);
    }

    if !board.get(mv.to).is_empty() {
        return Err(IllegalMove::DestinationOccupied);
    }

    let jump = is_jump(board, mv);
    if !jump && !is_slide(mv) {
        return Err(IllegalMove::OutOfRange);
    }
    mv.jump = jump;

    if !jump && must_jump(board, mv.player) {
        return Err(IllegalMove::MustJump);
    }

    Ok(())
}

/// Pedras só andam para a frente; damas em qualquer sentido.
#[inline]
fn respects_direction(piece: Square, player: Player, d_row: i32) -> bool {
    piece.is_king() || d_row * player.forward() >= 0
}

#[inline]
fn is_slide(mv: &Move) -> bool {
    (mv.to.row - mv.from.row).abs() == 1 && (mv.to.col - mv.from.col).abs() == 1
}

/// Dois passos na diagonal por cima de uma peça adversária.
#[inline]
fn is_jump(board: &Board, mv: &Move) -> bool {
    (mv.to.row - mv.from.row).abs() == 2
        && (mv.to.col - mv.from.col).abs() == 2
        && board.get(mv.midpoint()).is_opposite(mv.player)
}

/// Procura em todo o tabuleiro um salto disponível para o jogador.
pub fn must_jump(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|from| {
        let piece = board.get(from);
        DIAGONALS.iter().any(|&(d_row, d_col)| {
            let landing = from.offset(2 * d_row, 2 * d_col);
            board.get(from.offset(d_row, d_col)).is_opposite(player)
                && board.is_valid_square(landing)
                && board.get(landing).is_empty()
                && respects_direction(piece, player, 2 * d_row)
        })
    })
}
