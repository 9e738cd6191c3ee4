use super::grid::{Grid, Position};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Test a proposed head position against the walls and the snake's body.
///
/// `body` must already exclude the tail tile that will be vacated this tick,
/// see [`Snake::body_for_collision`](super::snake::Snake::body_for_collision).
/// Pure function, no stored state.
pub fn check(proposed: Position, grid: Grid, body: &[Position]) -> Option<CollisionType> {
    if !grid.contains(proposed) {
        return Some(CollisionType::Wall);
    }

    if body.contains(&proposed) {
        return Some(CollisionType::SelfCollision);
    }

    None
}
