use crate::chess::{Candidates, Color, File, InvalidPromotion, Piece, Promotion, Rank, Role, Square};
use crate::util::Enum;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The reason why a move was rejected.
///
/// Moves are fully validated before the board is touched, so a rejected move
/// leaves everything as it was.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display(fmt = "source and destination are the same square `{}`", _0)]
    SameSquare(#[error(not(source))] Square),

    #[display(fmt = "no piece at `{}`", _0)]
    NoPiece(#[error(not(source))] Square),

    #[display(fmt = "the piece at `{}` belongs to the opponent", _0)]
    WrongColor(#[error(not(source))] Square),

    #[display(fmt = "the piece at `{}` cannot move to `{}`", _0, _1)]
    Unreachable(Square, Square),
}

/// The reason why a piece could not be placed on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "square `{}` is already occupied", _0)]
pub struct SquareOccupied(#[error(not(source))] pub Square);

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// The chess board.
///
/// Holds at most one [`Piece`] per [`Square`], but has no notion of whose turn it is.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([Option<Piece>; 64]);

/// The standard setup of 32 pieces.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for c in Color::iter() {
            for (f, r) in File::iter().zip(BACK_RANK) {
                board.0[Square::new(f, Rank::back(c)).index()] = Some(Piece::new(r, c));
                board.0[Square::new(f, Rank::pawns(c)).index()] = Some(Piece::new(Role::Pawn, c));
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// Resets this board to the standard setup.
    pub fn initialize(&mut self) {
        *self = Board::default();
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    /// An iterator over all pieces on the board in [`Square`] order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self.piece_on(sq)?)))
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn pieces(&self, c: Color) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color() == c)
    }

    /// The number of pieces on the board.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the board has no pieces.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The [`Square`] occupied by the king of a [`Color`], if any.
    pub fn king(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, p)| p.role() == Role::King)
            .map(|(sq, _)| sq)
    }

    /// Places a [`Piece`] on an empty [`Square`].
    pub fn place(&mut self, sq: Square, p: Piece) -> Result<(), SquareOccupied> {
        match &mut self.0[sq.index()] {
            Some(_) => Err(SquareOccupied(sq)),
            slot => {
                *slot = Some(p);
                Ok(())
            }
        }
    }

    /// The squares the piece on `whence` may legally move to.
    ///
    /// Fails if there's no piece on `whence` or it doesn't belong to `mover`.
    pub fn legal_moves(&self, whence: Square, mover: Color) -> Result<Candidates, IllegalMove> {
        let piece = self.piece_on(whence).ok_or(IllegalMove::NoPiece(whence))?;

        if piece.color() != mover {
            return Err(IllegalMove::WrongColor(whence));
        }

        let mut moves = piece.candidates(self, whence);
        moves.retain(|whither| !self.exposes_king(whence, *whither, mover));
        Ok(moves)
    }

    /// Whether the side of a [`Color`] has any legal move at all.
    pub fn has_legal_move(&self, c: Color) -> bool {
        self.pieces(c)
            .any(|(sq, _)| self.legal_moves(sq, c).is_ok_and(|m| !m.is_empty()))
    }

    /// Checks whether moving the piece on `whence` to `whither` is legal.
    ///
    /// If `mover` is given, the piece must also belong to it.
    pub fn validate(
        &self,
        whence: Square,
        whither: Square,
        mover: Option<Color>,
    ) -> Result<(), IllegalMove> {
        if whence == whither {
            return Err(IllegalMove::SameSquare(whence));
        }

        let piece = self.piece_on(whence).ok_or(IllegalMove::NoPiece(whence))?;

        if mover.is_some_and(|c| c != piece.color()) {
            return Err(IllegalMove::WrongColor(whence));
        }

        if !self.legal_moves(whence, piece.color())?.contains(&whither) {
            return Err(IllegalMove::Unreachable(whence, whither));
        }

        Ok(())
    }

    /// Moves the piece on `whence` to `whither` if legal, returning the captured piece.
    ///
    /// Captured pieces are always reported as having moved.
    ///
    /// A pawn that reaches its last rank is promoted to the given choice,
    /// or to a queen if no choice is given.
    pub fn move_piece(
        &mut self,
        whence: Square,
        whither: Square,
        mover: Color,
        promotion: Option<Promotion>,
    ) -> Result<Option<Piece>, IllegalMove> {
        self.validate(whence, whither, Some(mover))?;
        let captured = self.apply(whence, whither);

        if let Some(p) = self.piece_on(whither) {
            if p.role() == Role::Pawn && whither.rank() == Rank::promotion(p.color()) {
                let role = Role::from(promotion.unwrap_or_default());
                self.0[whither.index()] = Some(Piece::new(role, p.color()));
            }
        }

        Ok(captured)
    }

    /// Replaces whatever stands on `sq` by a new piece of the given [`Role`] and [`Color`].
    ///
    /// Fails for pawns and kings.
    pub fn promote(&mut self, sq: Square, c: Color, r: Role) -> Result<(), InvalidPromotion> {
        let promotion = Promotion::try_from(r)?;
        self.0[sq.index()] = Some(Piece::new(promotion.into(), c));
        Ok(())
    }

    /// Whether the king of a [`Color`] is under attack.
    ///
    /// A side without a king is never in check.
    pub fn is_king_in_check(&self, c: Color) -> bool {
        match self.king(c) {
            None => false,
            Some(sq) => self.is_attacked(sq, !c),
        }
    }

    /// Whether any piece of the side `by` attacks `sq`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces(by).any(|(whence, p)| p.attacks(self, whence, sq))
    }

    /// A textual key that identifies the piece placement and the side to move.
    pub fn snapshot(&self, turn: Option<Color>) -> String {
        fn name(c: Color) -> &'static str {
            match c {
                Color::White => "WHITE",
                Color::Black => "BLACK",
            }
        }

        let mut key = String::with_capacity(16 * 32);
        key.push_str(turn.map_or("NONE", name));
        key.push('|');

        for (sq, p) in self.iter() {
            key.push(p.role().tag());
            key.push('-');
            key.push_str(name(p.color()));
            key.push('@');
            key.push_str(&sq.to_string());
            key.push(';');
        }

        key
    }

    fn exposes_king(&self, whence: Square, whither: Square, c: Color) -> bool {
        let mut next = *self;
        next.apply(whence, whither);
        next.is_king_in_check(c)
    }

    fn apply(&mut self, whence: Square, whither: Square) -> Option<Piece> {
        let piece = self.0[whence.index()].take()?;
        self.0[whither.index()].replace(piece.moved()).map(Piece::moved)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.index()]
    }
}

/// Builds a board from pieces, later pieces replacing earlier ones on the same square.
impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(pieces: I) -> Self {
        let mut board = Board::empty();
        for (sq, p) in pieces {
            board.0[sq.index()] = Some(p);
        }

        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Prints the piece placement field of the FEN notation.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in Rank::iter().rev().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut skip = 0;
            for sq in File::iter().map(|f| Square::new(f, r)) {
                match self[sq] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece placement")]
pub struct ParseBoardError;

/// Parses the piece placement field of the FEN notation.
///
/// Pawns standing on their home rank are considered yet to move.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<_> = s.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseBoardError);
        }

        let mut board = Board::empty();
        for (r, segment) in Rank::iter().rev().zip(ranks) {
            let mut files = 0u8;
            for c in segment.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    files += skip as u8;
                    if files > 8 {
                        return Err(ParseBoardError);
                    }

                    continue;
                }

                let f = File::try_from_repr(files).ok_or(ParseBoardError)?;
                let role: Role = c.to_string().parse().map_err(|_| ParseBoardError)?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };

                let sq = Square::new(f, r);
                board.0[sq.index()] = Some(Piece::found_on(role, color, sq));
                files += 1;
            }

            if files != 8 {
                return Err(ParseBoardError);
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, option::weighted, prelude::*};

        vec(weighted(0.25, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut board = Board::empty();
                board.0.iter_mut().zip(v).for_each(|(s, p)| *s = p);
                board
            })
            .boxed()
    }
}
