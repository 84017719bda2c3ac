// Ficheiro: src/moves/generation.rs
// Descrição: Geração de todos os lances legais de um jogador.

use crate::core::*;
use super::legality::check_move;

/// Alcance máximo de um lance (salto de duas casas).
const REACH: i32 = 2;

/// Gera todos os lances legais do jogador, por ordem de linha das casas de origem.
/// Cada destino candidato vem da vizinhança 5x5 da origem.
pub fn generate_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    // Pre-aloca com capacidade estimada para reduzir realocações
    let mut moves = Vec::with_capacity(16);

    for from in board.pieces(player) {
        moves.extend(moves_from(board, from, player));
    }

    moves
}

/// Há pelo menos um lance legal? Pára no primeiro encontrado.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|from| moves_from(board, from, player).next().is_some())
}

fn moves_from(board: &Board, from: Coord, player: Player) -> impl Iterator<Item = Move> + '_ {
    (-REACH..=REACH).flat_map(move |d_row| {
        (-REACH..=REACH).filter_map(move |d_col| {
            let mut mv = Move::new(from, from.offset(d_row, d_col), player);
            check_move(board, &mut mv).ok().map(|_| mv)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_has_seven_slides() {
        let board = Board::new(8, 8);
        for player in [Player::Black, Player::White] {
            let moves = generate_legal_moves(&board, player);
            assert_eq!(moves.len(), 7, "{:?}", player);
            assert!(moves.iter().all(|mv| !mv.is_jump()));
        }
    }

    #[test]
    fn test_only_jumps_when_a_jump_exists() {
        let mut board = Board::empty(8, 8);
        board.set(Coord::new(2, 1), Square::Black);
        board.set(Coord::new(3, 2), Square::White);
        board.set(Coord::new(2, 7), Square::Black);

        let moves = generate_legal_moves(&board, Player::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_jump());
        assert_eq!(moves[0].from, Coord::new(2, 1));
        assert_eq!(moves[0].to, Coord::new(4, 3));
    }

    #[test]
    fn test_king_in_the_open_has_four_slides() {
        let mut board = Board::empty(8, 8);
        board.set(Coord::new(3, 4), Square::WhiteKing);
        let moves = generate_legal_moves(&board, Player::White);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_dead_board() {
        let mut board = Board::empty(8, 8);
        // Pedra branca encurralada na linha de coroação não tem para onde ir.
        board.set(Coord::new(0, 1), Square::White);
        assert!(generate_legal_moves(&board, Player::White).is_empty());
        assert!(!has_legal_move(&board, Player::White));
        assert!(generate_legal_moves(&board, Player::Black).is_empty());
        assert!(has_legal_move(&Board::new(8, 8), Player::Black));
    }
}
