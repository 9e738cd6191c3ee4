use super::direction::Direction;
use super::grid::Position;

/// The snake's body segments, head at index 0.
///
/// Owned by the engine and only mutated through [`Snake::advance`], which
/// keeps the invariants: length >= 1, no duplicate positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A new snake of a single head segment
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Check if a position is occupied by any segment
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Segments a proposed head must be checked against.
    ///
    /// On a non-growing tick the tail tile is vacated in the same step the
    /// head moves, so it is excluded; on a growing tick the tail stays put
    /// and counts.
    pub fn body_for_collision(&self, grow: bool) -> &[Position] {
        if grow {
            &self.body
        } else {
            &self.body[..self.body.len() - 1]
        }
    }

    /// Advance one tile in a direction, growing if `grow` is true
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.head().step(direction);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5));

        // Move without growing
        snake.advance(Direction::Right, false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Move with growing
        snake.advance(Direction::Right, true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.segments()[1], Position::new(6, 5));
    }

    #[test]
    fn test_no_duplicate_segments() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.advance(Direction::Right, true);
        snake.advance(Direction::Down, true);
        snake.advance(Direction::Left, false);
        snake.advance(Direction::Left, false);

        let mut seen = snake.segments().to_vec();
        seen.sort_by_key(|p| (p.x, p.y));
        seen.dedup();
        assert_eq!(seen.len(), snake.len());
    }

    #[test]
    fn test_collision_body_excludes_vacated_tail() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.advance(Direction::Right, true);
        snake.advance(Direction::Right, true);
        // Body: (7,5), (6,5), (5,5)

        let moving = snake.body_for_collision(false);
        assert!(!moving.contains(&Position::new(5, 5)));
        assert!(moving.contains(&Position::new(6, 5)));

        let growing = snake.body_for_collision(true);
        assert!(growing.contains(&Position::new(5, 5)));
    }
}
