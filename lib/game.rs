use crate::chess::{Board, Color, Move, Outcome, Promotion, Square};
use std::{collections::HashMap, fmt};
use tracing::{debug, instrument};

mod action;
mod observer;
mod options;
mod player;
mod record;

pub use action::*;
pub use observer::*;
pub use options::*;
pub use player::*;
pub use record::*;

/// The stage a [`Game`] is at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    Ended(Outcome),
}

/// A game of chess between two [`Player`]s.
pub struct Game {
    id: u64,
    options: Options,
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    moves: Vec<Move>,
    snapshots: HashMap<String, usize>,
    observers: Vec<(ObserverId, Box<dyn Observer + Send>)>,
    next_observer: u64,
    status: Status,
}

impl Game {
    /// Constructs a [`Game`] with default [`Options`].
    pub fn new(id: u64) -> Self {
        Self::with_options(id, Options::default())
    }

    /// Constructs a [`Game`] with the given [`Options`].
    pub fn with_options(id: u64, options: Options) -> Self {
        Game {
            id,
            options,
            board: Board::default(),
            players: None,
            current: 0,
            moves: Vec::new(),
            snapshots: HashMap::new(),
            observers: Vec::new(),
            next_observer: 0,
            status: Status::NotStarted,
        }
    }

    /// This game's identifier.
    #[inline(always)]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// This game's [`Options`].
    #[inline(always)]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The side the board is presented from.
    #[inline(always)]
    pub fn perspective(&self) -> Color {
        self.options.perspective
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The players, or nothing if they haven't been assigned yet.
    pub fn players(&self) -> &[Player] {
        self.players.as_ref().map_or(&[], |p| p.as_slice())
    }

    /// The history of moves played so far.
    #[inline(always)]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The current [`Status`].
    #[inline(always)]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The [`Outcome`], if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Ended(o) => Some(o),
            _ => None,
        }
    }

    /// The [`Player`] whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|p| &p[self.current])
    }

    /// The side to move.
    pub fn turn(&self) -> Option<Color> {
        self.current_player().map(Player::color)
    }

    /// Assigns the two players, which must have distinct colors.
    ///
    /// White is to move next. Players cannot be replaced while the game is in progress.
    pub fn set_players(&mut self, mut players: [Player; 2]) -> Result<(), InvalidAction> {
        if self.status == Status::InProgress {
            return Err(InvalidAction::InProgress);
        }

        let [a, b] = &players;
        if a.color() == b.color() {
            return Err(InvalidAction::DuplicateColor(a.color()));
        }

        for p in &mut players {
            p.refresh(&self.board);
        }

        self.current = players.iter().position(|p| p.color() == Color::White).unwrap_or(0);
        self.players = Some(players);
        Ok(())
    }

    /// Replaces the [`Board`].
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        for p in self.players.iter_mut().flatten() {
            p.refresh(&self.board);
        }
    }

    /// Makes it the turn of the side of the given [`Color`].
    pub fn set_turn(&mut self, c: Color) -> Result<(), InvalidAction> {
        let players = self.players.as_ref().ok_or(InvalidAction::MissingPlayers)?;
        if let Some(i) = players.iter().position(|p| p.color() == c) {
            self.current = i;
        }

        Ok(())
    }

    /// Starts a new game from the standard setup.
    #[instrument(level = "debug", skip(self), fields(id = self.id), err)]
    pub fn start(&mut self, perspective: Color) -> Result<(), InvalidAction> {
        let players = self.players.as_mut().ok_or(InvalidAction::MissingPlayers)?;

        self.board.initialize();
        for p in players.iter_mut() {
            p.reset();
            p.refresh(&self.board);
        }

        self.current = players.iter().position(|p| p.color() == Color::White).unwrap_or(0);
        self.options.perspective = perspective;
        self.moves.clear();
        self.snapshots.clear();
        self.register_board_state();
        self.status = Status::InProgress;

        debug!(turn = ?self.turn(), "game started");
        Ok(())
    }

    /// Continues a reconstructed game from its current position.
    ///
    /// The players' captures are recomputed from the history of moves.
    #[instrument(level = "debug", skip(self), fields(id = self.id), err)]
    pub fn resume(&mut self, perspective: Color) -> Result<(), InvalidAction> {
        if self.players.is_none() {
            return Err(InvalidAction::MissingPlayers);
        }

        self.options.perspective = perspective;
        self.rebuild_player_state();
        self.snapshots.clear();
        self.register_board_state();
        self.status = Status::InProgress;

        debug!(turn = ?self.turn(), moves = self.moves.len(), "game resumed");
        self.evaluate()?;
        Ok(())
    }

    /// Passes the turn to the other player.
    pub fn switch_player(&mut self) -> Result<Color, InvalidAction> {
        let players = self.players.as_ref().ok_or(InvalidAction::MissingPlayers)?;
        self.current = (self.current + 1) % players.len();
        Ok(players[self.current].color())
    }

    /// Appends a [`Move`] to the history.
    pub fn add_move(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Counts an occurrence of the current position.
    pub fn register_board_state(&mut self) {
        let key = self.board.snapshot(self.turn());
        *self.snapshots.entry(key).or_default() += 1;
    }

    /// How many times the position identified by a [snapshot](`Board::snapshot`) was registered.
    pub fn occurrences(&self, snapshot: &str) -> usize {
        self.snapshots.get(snapshot).copied().unwrap_or(0)
    }

    /// Whether the last six moves shuffled back and forth between the same squares.
    pub fn is_threefold_repetition(&self) -> bool {
        match self.moves.as_slice() {
            [.., m6, m5, m4, m3, m2, m1] => {
                m1.repeats(m3)
                    && m3.repeats(m5)
                    && m2.repeats(m4)
                    && m4.repeats(m6)
                    && m1.reverses(m2)
                    && m3.reverses(m4)
                    && m5.reverses(m6)
            }

            _ => false,
        }
    }

    /// Whether the side of the given [`Color`] has any legal move.
    pub fn has_any_legal_move(&self, c: Color) -> bool {
        self.board.has_legal_move(c)
    }

    /// Whether the side to move is in check and has no way out.
    pub fn check_for_checkmate(&self) -> Result<bool, InvalidAction> {
        let turn = self.turn().ok_or(InvalidAction::MissingPlayers)?;
        Ok(self.board.is_king_in_check(turn) && !self.has_any_legal_move(turn))
    }

    /// Whether the game is drawn, either by repetition or because
    /// the side to move is not in check but has no legal move.
    pub fn check_for_stalemate(&self) -> Result<bool, InvalidAction> {
        let turn = self.turn().ok_or(InvalidAction::MissingPlayers)?;
        if self.is_threefold_repetition() {
            return Ok(true);
        }

        Ok(!self.board.is_king_in_check(turn) && !self.has_any_legal_move(turn))
    }

    /// Plays a whole turn for the side to move.
    ///
    /// If no promotion is given, pawns promote to a queen.
    #[instrument(level = "debug", skip(self), fields(id = self.id), err)]
    pub fn play(
        &mut self,
        whence: Square,
        whither: Square,
        promotion: Option<Promotion>,
    ) -> Result<Move, InvalidAction> {
        self.ensure_in_progress()?;

        let promotion = promotion.filter(|_| !self.options.auto_promotion);
        let players = self.players.as_mut().ok_or(InvalidAction::MissingPlayers)?;
        let player = &mut players[self.current];
        let captured = player.make_move(whence, whither, &mut self.board, promotion)?;
        let m = Move::new(player.color(), whence, whither).with_capture(captured);

        self.add_move(m);
        if let Some(p) = captured {
            self.notify(&Event::PieceCaptured(p));
        }

        self.notify(&Event::MoveMade(m));

        let turn = self.switch_player()?;
        self.register_board_state();
        self.notify(&Event::PlayerSwitched(turn));

        self.evaluate()?;
        Ok(m)
    }

    /// Concedes the game on behalf of the side of the given [`Color`].
    #[instrument(level = "debug", skip(self), fields(id = self.id), err)]
    pub fn resign(&mut self, c: Color) -> Result<Outcome, InvalidAction> {
        self.ensure_in_progress()?;
        let outcome = Outcome::Resignation(c);
        self.end(outcome);
        Ok(outcome)
    }

    /// Recomputes the players' captures from the history of moves.
    pub fn rebuild_player_state(&mut self) {
        let Some(players) = self.players.as_mut() else {
            return;
        };

        for p in players.iter_mut() {
            p.reset();
            p.refresh(&self.board);
        }

        for m in &self.moves {
            if let Some(captured) = m.captured() {
                if let Some(p) = players.iter_mut().find(|p| p.color() == m.color()) {
                    p.capture(captured);
                }
            }
        }
    }

    /// Adds an [`Observer`], returning a handle that can later be used to remove it.
    pub fn add_observer<O: Observer + Send + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an [`Observer`], returning it if it was present.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer + Send>> {
        let i = self.observers.iter().position(|(o, _)| *o == id)?;
        Some(self.observers.remove(i).1)
    }

    /// Tells all observers about an [`Event`], in the order they were added.
    pub fn notify(&mut self, event: &Event) {
        for (_, o) in &mut self.observers {
            o.notify(event);
        }
    }

    fn ensure_in_progress(&self) -> Result<(), InvalidAction> {
        match self.status {
            Status::NotStarted => Err(InvalidAction::NotStarted),
            Status::Ended(o) => Err(InvalidAction::GameHasEnded(o)),
            Status::InProgress => Ok(()),
        }
    }

    fn evaluate(&mut self) -> Result<Option<Outcome>, InvalidAction> {
        let turn = self.turn().ok_or(InvalidAction::MissingPlayers)?;

        let outcome = if self.check_for_checkmate()? {
            Some(Outcome::Checkmate(!turn))
        } else if self.is_threefold_repetition() {
            Some(Outcome::DrawByRepetition)
        } else if self.check_for_stalemate()? {
            Some(Outcome::Stalemate)
        } else {
            None
        };

        match outcome {
            Some(o) => self.end(o),
            None if self.board.is_king_in_check(turn) => self.notify(&Event::Check(turn)),
            None => {}
        }

        Ok(outcome)
    }

    fn end(&mut self, outcome: Outcome) {
        self.status = Status::Ended(outcome);
        debug!(%outcome, "game ended");

        if let Outcome::Checkmate(winner) = outcome {
            self.notify(&Event::Checkmate(winner));
        }

        self.notify(&Event::GameEnded(outcome.to_string()));
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("moves", &self.moves)
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish()
    }
}
