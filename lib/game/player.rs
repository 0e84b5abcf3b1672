use crate::chess::{Board, Color, IllegalMove, Piece, Promotion, Square};

/// One of the two sides of a [`Game`][`crate::game::Game`].
///
/// Keeps track of the pieces it captured and the points they are worth.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    name: String,
    color: Color,
    points: u32,
    captured: Vec<Piece>,
    pieces: Vec<(Square, Piece)>,
}

impl Player {
    /// Constructs a [`Player`] that has captured nothing yet.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            points: 0,
            captured: Vec::new(),
            pieces: Vec::new(),
        }
    }

    /// This player's name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`Color`] of the pieces this player moves.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The sum of the values of the captured pieces.
    #[inline(always)]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// The pieces this player captured, in the order they were taken.
    #[inline(always)]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// The pieces this player owned as of its last move.
    #[inline(always)]
    pub fn pieces(&self) -> &[(Square, Piece)] {
        &self.pieces
    }

    /// Whether this player is driven by the computer.
    pub fn is_computer(&self) -> bool {
        self.name.eq_ignore_ascii_case("computer")
    }

    /// Moves one of this player's pieces on the board.
    ///
    /// Computer players always promote to a queen.
    pub fn make_move(
        &mut self,
        whence: Square,
        whither: Square,
        board: &mut Board,
        promotion: Option<Promotion>,
    ) -> Result<Option<Piece>, IllegalMove> {
        match board.piece_on(whence) {
            None => return Err(IllegalMove::NoPiece(whence)),
            Some(p) if p.color() != self.color => return Err(IllegalMove::WrongColor(whence)),
            Some(_) => {}
        }

        let promotion = if self.is_computer() { None } else { promotion };
        let captured = board.move_piece(whence, whither, self.color, promotion)?;

        if let Some(p) = captured {
            self.capture(p);
        }

        self.refresh(board);
        Ok(captured)
    }

    /// Credits this player with a captured piece.
    pub fn capture(&mut self, p: Piece) {
        self.points += p.role().value();
        self.captured.push(p);
    }

    /// Forgets all captured pieces and points.
    pub fn reset(&mut self) {
        self.points = 0;
        self.captured.clear();
    }

    /// Recomputes the pieces this player owns.
    pub fn refresh(&mut self, board: &Board) {
        self.pieces.clear();
        self.pieces.extend(board.pieces(self.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Role;
    use test_strategy::proptest;

    #[test]
    fn player_named_computer_is_a_computer() {
        assert!(Player::new("computer", Color::Black).is_computer());
        assert!(Player::new("COMPUTER", Color::Black).is_computer());
        assert!(Player::new("Computer", Color::White).is_computer());
        assert!(!Player::new("computer1", Color::White).is_computer());
        assert!(!Player::new("alice", Color::White).is_computer());
    }

    #[test]
    fn capturing_adds_the_value_of_the_piece() -> Result<(), IllegalMove> {
        let mut board = Board::from_iter([
            (Square::D1, Piece::new(Role::Queen, Color::White)),
            (Square::D7, Piece::new(Role::Pawn, Color::Black)),
        ]);

        let mut player = Player::new("W", Color::White);
        let captured = player.make_move(Square::D1, Square::D7, &mut board, None)?;

        let pawn = Piece::new(Role::Pawn, Color::Black).moved();
        assert_eq!(captured, Some(pawn));
        assert_eq!(player.points(), 6);
        assert_eq!(player.captured(), &[pawn]);
        assert_eq!(player.pieces(), &[(Square::D7, Piece::new(Role::Queen, Color::White))]);
        Ok(())
    }

    #[test]
    fn player_cannot_move_opponent_pieces() {
        let mut board = Board::default();
        let before = board;
        let mut player = Player::new("W", Color::White);

        assert_eq!(
            player.make_move(Square::E7, Square::E5, &mut board, None),
            Err(IllegalMove::WrongColor(Square::E7))
        );

        assert_eq!(
            player.make_move(Square::E4, Square::E5, &mut board, None),
            Err(IllegalMove::NoPiece(Square::E4))
        );

        assert_eq!(board, before);
        assert_eq!(player.points(), 0);
    }

    #[test]
    fn player_checks_ownership_before_the_move_itself() {
        let mut board = Board::default();
        let before = board;
        let mut player = Player::new("B", Color::Black);

        assert_eq!(
            player.make_move(Square::E4, Square::E4, &mut board, None),
            Err(IllegalMove::NoPiece(Square::E4))
        );

        assert_eq!(
            player.make_move(Square::E2, Square::E2, &mut board, None),
            Err(IllegalMove::WrongColor(Square::E2))
        );

        assert_eq!(
            player.make_move(Square::E7, Square::E7, &mut board, None),
            Err(IllegalMove::SameSquare(Square::E7))
        );

        assert_eq!(board, before);
        assert!(player.pieces().is_empty());
    }

    #[proptest]
    fn computer_always_promotes_to_queen(p: Promotion) {
        let mut board = Board::from_iter([(Square::B7, Piece::new(Role::Pawn, Color::White).moved())]);
        let mut player = Player::new("computer", Color::White);
        player.make_move(Square::B7, Square::B8, &mut board, Some(p))?;
        assert_eq!(board[Square::B8], Some(Piece::new(Role::Queen, Color::White)));
    }

    #[proptest]
    fn human_promotes_to_choice(p: Promotion) {
        let mut board = Board::from_iter([(Square::B7, Piece::new(Role::Pawn, Color::White).moved())]);
        let mut player = Player::new("alice", Color::White);
        player.make_move(Square::B7, Square::B8, &mut board, Some(p))?;
        assert_eq!(board[Square::B8], Some(Piece::new(p.into(), Color::White)));
    }

    #[test]
    fn reset_forgets_captures() {
        let mut player = Player::new("W", Color::White);
        player.capture(Piece::new(Role::Rook, Color::Black));
        player.capture(Piece::new(Role::Knight, Color::Black));
        assert_eq!(player.points(), 80);

        player.reset();
        assert_eq!(player.points(), 0);
        assert!(player.captured().is_empty());
    }
}
