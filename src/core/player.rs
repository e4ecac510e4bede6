//! Players, workers ids and per-player storage.
//!
//! ## PlayerId
//!
//! The two colors. White (workers A, B) always moves first.
//!
//! ## WorkerId
//!
//! The four worker symbols. Ownership and starting cells are fixed.
//!
//! ## PlayerMap
//!
//! One value per color with O(1) access by `PlayerId`.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::worker::Worker;
use crate::error::{ConfigError, RuleError};

/// Player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    White,
    Blue,
}

impl PlayerId {
    /// Both colors in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::White, PlayerId::Blue];

    /// Storage index (0 for white, 1 for blue).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::White => 0,
            PlayerId::Blue => 1,
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::White => PlayerId::Blue,
            PlayerId::Blue => PlayerId::White,
        }
    }

    /// The two workers owned by this color.
    #[must_use]
    pub const fn workers(self) -> [WorkerId; 2] {
        match self {
            PlayerId::White => [WorkerId::A, WorkerId::B],
            PlayerId::Blue => [WorkerId::Y, WorkerId::Z],
        }
    }

    /// Lowercase color name as shown in prompts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::White => "white",
            PlayerId::Blue => "blue",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Worker symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerId {
    A,
    B,
    Y,
    Z,
}

impl WorkerId {
    pub const ALL: [WorkerId; 4] = [WorkerId::A, WorkerId::B, WorkerId::Y, WorkerId::Z];

    /// Storage index into a four-slot array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            WorkerId::A => 0,
            WorkerId::B => 1,
            WorkerId::Y => 2,
            WorkerId::Z => 3,
        }
    }

    /// Slot within the owner's pair.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.index() % 2
    }

    #[must_use]
    pub const fn owner(self) -> PlayerId {
        match self {
            WorkerId::A | WorkerId::B => PlayerId::White,
            WorkerId::Y | WorkerId::Z => PlayerId::Blue,
        }
    }

    /// Where this worker stands when a game begins.
    #[must_use]
    pub const fn start_position(self) -> Position {
        match self {
            WorkerId::A => Position::new(3, 1),
            WorkerId::B => Position::new(1, 3),
            WorkerId::Y => Position::new(1, 1),
            WorkerId::Z => Position::new(3, 3),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            WorkerId::A => 'A',
            WorkerId::B => 'B',
            WorkerId::Y => 'Y',
            WorkerId::Z => 'Z',
        }
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for WorkerId {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(WorkerId::A),
            "B" => Ok(WorkerId::B),
            "Y" => Ok(WorkerId::Y),
            "Z" => Ok(WorkerId::Z),
            _ => Err(RuleError::InvalidWorker),
        }
    }
}

/// Who chooses a player's actions.
///
/// Closed set: the driver prompts for `Human`, and asks the matching
/// `MovePolicy` for the scripted kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Heuristic,
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Heuristic => "heuristic",
            PlayerKind::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "heuristic" => Ok(PlayerKind::Heuristic),
            "random" => Ok(PlayerKind::Random),
            other => Err(ConfigError::UnknownPlayerKind(other.to_string())),
        }
    }
}

/// A color, its controller kind, and its two workers.
///
/// Players never hold the board; the workers' cached positions are kept in
/// step with it by `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    kind: PlayerKind,
    workers: [Worker; 2],
}

impl Player {
    /// Create a player with both workers on their starting cells.
    #[must_use]
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        let workers = id.workers().map(|w| Worker::new(w, w.start_position()));
        Self { id, kind, workers }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True if `worker` belongs to this player.
    #[must_use]
    pub fn owns(&self, worker: WorkerId) -> bool {
        worker.owner() == self.id
    }

    /// Look up one of this player's workers.
    #[must_use]
    pub fn worker(&self, worker: WorkerId) -> Option<&Worker> {
        self.owns(worker).then(|| &self.workers[worker.slot()])
    }

    pub fn worker_mut(&mut self, worker: WorkerId) -> Option<&mut Worker> {
        if self.owns(worker) {
            Some(&mut self.workers[worker.slot()])
        } else {
            None
        }
    }

    /// Slot lookup for a worker known to belong to this player.
    pub(crate) fn piece(&self, worker: WorkerId) -> &Worker {
        debug_assert!(self.owns(worker));
        &self.workers[worker.slot()]
    }

    pub fn workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    pub(crate) fn workers_mut(&mut self) -> impl Iterator<Item = &mut Worker> {
        self.workers.iter_mut()
    }

    /// Worker symbols joined, e.g. `"AB"`.
    #[must_use]
    pub fn worker_label(&self) -> String {
        self.workers.iter().map(|w| w.id().symbol()).collect()
    }
}

/// One value per color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
