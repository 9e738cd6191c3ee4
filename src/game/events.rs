use super::collision::CollisionType;
use super::engine::GameStatus;
use super::grid::{Grid, Position};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Head left the board
    WallCollision,
    /// Head ran into the body
    SelfCollision,
    /// Snake covers every tile, nowhere left to spawn food
    BoardFilled,
}

impl From<CollisionType> for GameOverReason {
    fn from(collision: CollisionType) -> Self {
        match collision {
            CollisionType::Wall => GameOverReason::WallCollision,
            CollisionType::SelfCollision => GameOverReason::SelfCollision,
        }
    }
}

/// Immutable view of the engine state after a tick, for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub interval_ms: u64,
}

/// What happened during a tick, for the presentation layer.
///
/// The engine owns no timer and plays no sound; it reports, and the
/// embedding loop reacts.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The snake advanced one tile
    Moved(GameSnapshot),
    /// The head landed on food this tick
    FoodEaten { position: Position },
    /// The tick interval changed; the scheduler must re-arm its timer
    SpeedChanged { interval_ms: u64 },
    /// The game ended with this final score
    GameOver { score: u32, reason: GameOverReason },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_from_collision() {
        assert_eq!(
            GameOverReason::from(CollisionType::Wall),
            GameOverReason::WallCollision
        );
        assert_eq!(
            GameOverReason::from(CollisionType::SelfCollision),
            GameOverReason::SelfCollision
        );
    }
}
