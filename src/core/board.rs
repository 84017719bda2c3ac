// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use std::fmt;

use super::types::*;
use crate::error::IllegalMove;
use crate::moves;

// Tabuleiro retangular, guardado linha a linha. As dimensões nunca mudam depois da construção.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Cria um tabuleiro na posição inicial: pretas nas linhas de cima, brancas nas de baixo,
    /// separadas por uma faixa vazia.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut board = Board::empty(rows, cols);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let coord = Coord::new(row, col);
                if !board.is_valid_square(coord) {
                    continue;
                }
                if row < (rows as i32 / 2) - 1 {
                    board.set(coord, Player::Black.man());
                } else if row > rows as i32 / 2 {
                    board.set(coord, Player::White.man());
                }
            }
        }
        board
    }

    /// Tabuleiro sem peças.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board { rows, cols, squares: vec![Square::Empty; rows * cols] }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Casa dentro do tabuleiro e na diagonal jogável (linha e coluna de paridades opostas).
    #[inline]
    pub fn is_valid_square(&self, coord: Coord) -> bool {
        self.index(coord).is_some() && (coord.row + coord.col) % 2 == 1
    }

    /// Estado da casa. Casas inválidas são sempre lidas como vazias.
    #[inline]
    pub fn get(&self, coord: Coord) -> Square {
        if !self.is_valid_square(coord) {
            return Square::Empty;
        }
        self.index(coord).map_or(Square::Empty, |idx| self.squares[idx])
    }

    /// Escreve numa casa. Casas fora da diagonal jogável são ignoradas em release;
    /// em debug a escrita é tratada como erro de quem chama.
    #[inline]
    pub fn set(&mut self, coord: Coord, square: Square) {
        debug_assert!(self.is_valid_square(coord), "write to unplayable square {:?}", coord);
        if !self.is_valid_square(coord) {
            return;
        }
        if let Some(idx) = self.index(coord) {
            self.squares[idx] = square;
        }
    }

    /// Coordenadas de todas as peças do jogador (pedras e damas), por ordem de linha.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, sq)| sq.is_same(player))
            .map(move |(idx, _)| Coord::new((idx / cols) as i32, (idx % cols) as i32))
    }

    pub fn count(&self, player: Player) -> usize {
        self.squares.iter().filter(|sq| sq.is_same(player)).count()
    }

    /// Gera todos os lances legais do jogador, já classificados (salto ou não).
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        moves::generation::generate_legal_moves(self, player)
    }

    pub fn has_legal_moves(&self, player: Player) -> bool {
        moves::generation::has_legal_move(self, player)
    }

    /// Verifica o lance e regista nele se é um salto.
    pub fn check_move(&self, mv: &mut Move) -> Result<(), IllegalMove> {
        moves::legality::check_move(self, mv)
    }

    pub fn is_legal(&self, mv: &mut Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Existe algum salto disponível para o jogador?
    pub fn must_jump(&self, player: Player) -> bool {
        moves::legality::must_jump(self, player)
    }

    /// Executa um lance, sem voltar a verificar a legalidade.
    /// Confia no campo `jump` deixado pela verificação anterior.
    pub fn execute(&mut self, mv: &Move) {
        let piece = self.get(mv.from);
        self.set(mv.from, Square::Empty);
        self.set(mv.to, piece);

        if mv.jump {
            self.set(mv.midpoint(), Square::Empty);
        }

        // Coroação
        if mv.to.row == mv.player.promotion_row(self.rows) {
            let landed = self.get(mv.to);
            self.set(mv.to, landed.promoted());
        }
    }

    /// Cópia independente do tabuleiro com o lance aplicado.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.execute(mv);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(8, 8)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{} ", col + 1)?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            let label = if row < 26 { (b'a' + row as u8) as char } else { '?' };
            write!(f, "{} ", label)?;
            for col in 0..self.cols {
                write!(f, "|{}", self.squares[row * self.cols + col].token())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
