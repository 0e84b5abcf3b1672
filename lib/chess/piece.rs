use crate::chess::{Board, Color, Rank, Role, Square};
use arrayvec::ArrayVec;
use std::fmt::{self, Write};

/// The squares a single piece may reach, at most 27 for a queen in the center.
pub type Candidates = ArrayVec<Square, 27>;

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ROYAL: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Pawns additionally remember whether they are yet to move, which enables
/// the two square advance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    role: Role,
    color: Color,
    first_move: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            first_move: role == Role::Pawn,
        }
    }

    /// Constructs a [`Piece`] as found on `sq` in an arbitrary position.
    ///
    /// A pawn is considered yet to move only if it stands on its home rank.
    #[inline(always)]
    pub fn found_on(role: Role, color: Color, sq: Square) -> Self {
        Piece::new(role, color).with_first_move(sq.rank() == Rank::pawns(color))
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this is a pawn that has not moved yet.
    #[inline(always)]
    pub fn first_move(&self) -> bool {
        self.first_move
    }

    /// This piece with the first move flag set, which only sticks to pawns.
    #[inline(always)]
    pub fn with_first_move(self, first_move: bool) -> Self {
        Piece {
            first_move: first_move && self.role == Role::Pawn,
            ..self
        }
    }

    /// This piece after it has moved.
    #[inline(always)]
    pub fn moved(self) -> Self {
        self.with_first_move(false)
    }

    /// The squares this piece standing on `whence` could move to,
    /// ignoring whether that would expose its own king.
    pub fn candidates(&self, board: &Board, whence: Square) -> Candidates {
        let mut candidates = Candidates::new();

        match self.role {
            Role::King => self.step(board, whence, &ROYAL, &mut candidates),
            Role::Knight => self.step(board, whence, &KNIGHT, &mut candidates),
            Role::Queen => self.slide(board, whence, &ROYAL, &mut candidates),
            Role::Rook => self.slide(board, whence, &ORTHOGONAL, &mut candidates),
            Role::Bishop => self.slide(board, whence, &DIAGONAL, &mut candidates),
            Role::Pawn => self.advance(board, whence, &mut candidates),
        }

        candidates
    }

    /// Whether this piece standing on `whence` attacks `target`.
    pub fn attacks(&self, board: &Board, whence: Square, target: Square) -> bool {
        match self.role {
            Role::Pawn => [-1, 1]
                .into_iter()
                .any(|df| whence.offset(df, self.color.forward()) == Some(target)),
            _ => self.candidates(board, whence).contains(&target),
        }
    }

    fn is_enemy_on(&self, board: &Board, sq: Square) -> bool {
        matches!(board[sq], Some(p) if p.color != self.color)
    }

    fn step(&self, board: &Board, whence: Square, offsets: &[(i8, i8)], acc: &mut Candidates) {
        for &(df, dr) in offsets {
            if let Some(sq) = whence.offset(df, dr) {
                if board[sq].is_none() || self.is_enemy_on(board, sq) {
                    acc.push(sq);
                }
            }
        }
    }

    fn slide(&self, board: &Board, whence: Square, directions: &[(i8, i8)], acc: &mut Candidates) {
        for &(df, dr) in directions {
            let mut cursor = whence;
            while let Some(sq) = cursor.offset(df, dr) {
                match board[sq] {
                    None => acc.push(sq),
                    Some(p) => {
                        if p.color != self.color {
                            acc.push(sq);
                        }

                        break;
                    }
                }

                cursor = sq;
            }
        }
    }

    fn advance(&self, board: &Board, whence: Square, acc: &mut Candidates) {
        let dr = self.color.forward();

        if let Some(one) = whence.offset(0, dr).filter(|&sq| board[sq].is_none()) {
            acc.push(one);

            if self.first_move {
                if let Some(two) = whence.offset(0, 2 * dr).filter(|&sq| board[sq].is_none()) {
                    acc.push(two);
                }
            }
        }

        for df in [-1, 1] {
            if let Some(sq) = whence.offset(df, dr) {
                if self.is_enemy_on(board, sq) {
                    acc.push(sq);
                }
            }
        }
    }

    fn figurine(&self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::Pawn) => '♙',
            (Color::White, Role::Knight) => '♘',
            (Color::White, Role::Bishop) => '♗',
            (Color::White, Role::Rook) => '♖',
            (Color::White, Role::Queen) => '♕',
            (Color::White, Role::King) => '♔',
            (Color::Black, Role::Pawn) => '♟',
            (Color::Black, Role::Knight) => '♞',
            (Color::Black, Role::Bishop) => '♝',
            (Color::Black, Role::Rook) => '♜',
            (Color::Black, Role::Queen) => '♛',
            (Color::Black, Role::King) => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        match p.color {
            Color::White => p.role.tag(),
            Color::Black => p.role.tag().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Piece {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Piece>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        (any::<Role>(), any::<Color>(), any::<bool>())
            .prop_map(|(r, c, m)| Piece::new(r, c).with_first_move(m))
            .boxed()
    }
}
