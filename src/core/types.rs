// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Enum para representar o jogador. As pretas começam no topo e descem (linhas crescentes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Sentido em que as pedras deste jogador avançam (delta de linha).
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Linha onde as pedras deste jogador são coroadas.
    #[inline]
    pub fn promotion_row(self, rows: usize) -> i32 {
        match self {
            Player::Black => rows as i32 - 1,
            Player::White => 0,
        }
    }

    #[inline]
    pub fn man(self) -> Square {
        match self {
            Player::Black => Square::Black,
            Player::White => Square::White,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

// Estado de uma casa do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Black,
    White,
    BlackKing,
    WhiteKing,
}

impl Square {
    /// Dono da peça, se houver.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Black | Square::BlackKing => Some(Player::Black),
            Square::White | Square::WhiteKing => Some(Player::White),
            Square::Empty => None,
        }
    }

    #[inline]
    pub fn is_same(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    #[inline]
    pub fn is_opposite(self, player: Player) -> bool {
        self.owner() == Some(!player)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Square::BlackKing | Square::WhiteKing)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Versão coroada da peça. Idempotente para damas e casas vazias.
    #[inline]
    pub fn promoted(self) -> Square {
        match self {
            Square::Black | Square::BlackKing => Square::BlackKing,
            Square::White | Square::WhiteKing => Square::WhiteKing,
            Square::Empty => Square::Empty,
        }
    }

    pub fn token(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Black => 'b',
            Square::White => 'w',
            Square::BlackKing => 'B',
            Square::WhiteKing => 'W',
        }
    }
}

/// Coordenada (linha, coluna). Pode estar fora do tabuleiro; a validade é decidida pelo `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Coord::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.row) {
            write!(f, "({},{})", (b'a' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({},{})", self.row, self.col + 1)
        }
    }
}

// Struct para representar um lance no jogo.
// O campo `jump` é preenchido pela verificação de legalidade e lido pela execução.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub player: Player,
    pub(crate) jump: bool,
}

impl Move {
    pub fn new(from: Coord, to: Coord, player: Player) -> Self {
        Move { from, to, player, jump: false }
    }

    /// Resultado da última classificação feita por `Board::check_move`.
    #[inline]
    pub fn is_jump(&self) -> bool {
        self.jump
    }

    /// Casa saltada, para lances de captura.
    #[inline]
    pub fn midpoint(&self) -> Coord {
        Coord::new(
            self.from.row + (self.to.row - self.from.row) / 2,
            self.from.col + (self.to.col - self.from.col) / 2,
        )
    }

    /// Lance geométrico inverso (troca origem e destino), ainda não classificado.
    pub fn reversed(&self) -> Move {
        Move::new(self.to, self.from, self.player)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} moved: {} to {}", self.player, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_predicates() {
        assert!(Square::BlackKing.is_same(Player::Black));
        assert!(Square::White.is_opposite(Player::Black));
        assert!(!Square::Empty.is_same(Player::White));
        assert!(!Square::Empty.is_opposite(Player::White));
        assert!(Square::WhiteKing.is_king());
        assert!(!Square::White.is_king());
    }

    #[test]
    fn test_promotion_is_idempotent() {
        assert_eq!(Square::Black.promoted(), Square::BlackKing);
        assert_eq!(Square::BlackKing.promoted(), Square::BlackKing);
        assert_eq!(Square::WhiteKing.promoted().promoted(), Square::WhiteKing);
        assert_eq!(Square::Empty.promoted(), Square::Empty);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Coord::new(2, 1), Coord::new(3, 2), Player::Black);
        assert_eq!(mv.to_string(), "Black moved: (c,2) to (d,3)");
        assert_eq!(mv.midpoint(), Coord::new(2, 1));
    }
}
