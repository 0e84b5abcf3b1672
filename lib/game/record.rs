use crate::chess::{Board, Color, Move, Piece, Role, Square, SquareOccupied};
use crate::game::{Game, InvalidAction, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The external representation of a [`Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: u64,
    pub players: Vec<PlayerRecord>,
    pub current_player_color: Color,
    #[serde(default)]
    pub board: Vec<PieceRecord>,
    #[serde(default)]
    pub moves: Vec<MoveRecord>,
}

/// The external representation of a [`Player`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(alias = "email")]
    pub name: String,
    pub color: Color,
}

/// A [`Piece`] and where it stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct PieceRecord {
    #[serde(rename = "type")]
    pub role: Role,
    pub color: Color,
    pub position: Square,
}

/// The external representation of a [`Move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub player_color: Color,
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<CapturedRecord>,
}

/// A captured [`Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct CapturedRecord {
    #[serde(rename = "type")]
    pub role: Role,
    pub color: Color,
}

/// The external representation of a user account.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub games: Vec<u64>,
}

/// The reason why a [`Game`] could not be reconstructed from a [`GameRecord`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum LoadGameError {
    #[display(fmt = "expected two players, found {}", _0)]
    #[from(ignore)]
    PlayerCount(#[error(not(source))] usize),

    #[display(fmt = "invalid players")]
    InvalidPlayers(InvalidAction),

    #[display(fmt = "invalid board")]
    InvalidBoard(SquareOccupied),
}

/// The reason why parsing a record failed.
#[derive(Debug, Display, Error, From)]
#[display(fmt = "failed to parse record")]
pub struct ParseRecordError(serde_json::Error);

impl From<Piece> for CapturedRecord {
    fn from(p: Piece) -> Self {
        CapturedRecord {
            role: p.role(),
            color: p.color(),
        }
    }
}

impl From<CapturedRecord> for Piece {
    fn from(r: CapturedRecord) -> Self {
        Piece::new(r.role, r.color).moved()
    }
}

impl From<Move> for MoveRecord {
    fn from(m: Move) -> Self {
        MoveRecord {
            player_color: m.color(),
            from: m.whence(),
            to: m.whither(),
            captured: m.captured().map(CapturedRecord::from),
        }
    }
}

impl From<MoveRecord> for Move {
    fn from(r: MoveRecord) -> Self {
        Move::new(r.player_color, r.from, r.to).with_capture(r.captured.map(Piece::from))
    }
}

impl From<&Player> for PlayerRecord {
    fn from(p: &Player) -> Self {
        PlayerRecord {
            name: p.name().to_string(),
            color: p.color(),
        }
    }
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        GameRecord {
            id: game.id(),
            players: game.players().iter().map(PlayerRecord::from).collect(),
            current_player_color: game.turn().unwrap_or_default(),
            board: game
                .board()
                .iter()
                .map(|(position, p)| PieceRecord {
                    role: p.role(),
                    color: p.color(),
                    position,
                })
                .collect(),
            moves: game.moves().iter().copied().map(MoveRecord::from).collect(),
        }
    }
}

/// Reconstructs a [`Game`] that is yet to be [resumed](`Game::resume`).
impl TryFrom<GameRecord> for Game {
    type Error = LoadGameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let players: Vec<_> = record
            .players
            .into_iter()
            .map(|p| Player::new(p.name, p.color))
            .collect();

        let players: [Player; 2] = players
            .try_into()
            .map_err(|v: Vec<_>| LoadGameError::PlayerCount(v.len()))?;

        let mut board = Board::empty();
        for p in record.board {
            board.place(p.position, Piece::found_on(p.role, p.color, p.position))?;
        }

        let mut game = Game::new(record.id);
        game.set_players(players)?;
        game.set_board(board);
        game.set_turn(record.current_player_color)?;

        for m in record.moves {
            game.add_move(m.into());
        }

        Ok(game)
    }
}

impl FromStr for GameRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for UserRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).map_err(|_| fmt::Error)?)
    }
}
