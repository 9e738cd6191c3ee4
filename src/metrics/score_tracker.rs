use anyhow::Result;

use super::store::ScoreStore;

const HIGH_SCORE_KEY: &str = "high_score";
const GAMES_PLAYED_KEY: &str = "games_played";

/// High score and games-played bookkeeping, persisted through an injected
/// [`ScoreStore`]. No game logic lives here.
pub struct ScoreTracker {
    high_score: u32,
    games_played: u32,
    store: Box<dyn ScoreStore>,
}

impl ScoreTracker {
    /// Load counters from the store. Missing or garbled values count as 0.
    pub fn load(store: Box<dyn ScoreStore>) -> Result<Self> {
        let high_score = read_counter(store.as_ref(), HIGH_SCORE_KEY)?;
        let games_played = read_counter(store.as_ref(), GAMES_PLAYED_KEY)?;

        Ok(Self {
            high_score,
            games_played,
            store,
        })
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Record a finished game and persist both counters
    pub fn record_game_over(&mut self, final_score: u32) -> Result<()> {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }

        self.store
            .set(HIGH_SCORE_KEY, &self.high_score.to_string())?;
        self.store
            .set(GAMES_PLAYED_KEY, &self.games_played.to_string())?;
        Ok(())
    }
}

fn read_counter(store: &dyn ScoreStore, key: &str) -> Result<u32> {
    Ok(store
        .get(key)?
        .and_then(|value| value.parse().ok())
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::store::MemoryStore;

    #[test]
    fn test_missing_keys_default_to_zero() {
        let tracker = ScoreTracker::load(Box::new(MemoryStore::new())).unwrap();
        assert_eq!(tracker.high_score(), 0);
        assert_eq!(tracker.games_played(), 0);
    }

    #[test]
    fn test_garbled_values_default_to_zero() {
        let mut store = MemoryStore::new();
        store.set("high_score", "not a number").unwrap();

        let tracker = ScoreTracker::load(Box::new(store)).unwrap();
        assert_eq!(tracker.high_score(), 0);
    }

    #[test]
    fn test_high_score_tracking() {
        let mut tracker = ScoreTracker::load(Box::new(MemoryStore::new())).unwrap();

        tracker.record_game_over(10).unwrap();
        assert_eq!(tracker.high_score(), 10);
        assert_eq!(tracker.games_played(), 1);

        tracker.record_game_over(5).unwrap();
        assert_eq!(tracker.high_score(), 10); // Should not decrease
        assert_eq!(tracker.games_played(), 2);

        tracker.record_game_over(15).unwrap();
        assert_eq!(tracker.high_score(), 15);
        assert_eq!(tracker.games_played(), 3);
    }

    #[test]
    fn test_counters_are_persisted() {
        let mut tracker = ScoreTracker::load(Box::new(MemoryStore::new())).unwrap();
        tracker.record_game_over(120).unwrap();
        tracker.record_game_over(80).unwrap();

        assert_eq!(
            tracker.store.get("high_score").unwrap(),
            Some("120".to_string())
        );
        assert_eq!(
            tracker.store.get("games_played").unwrap(),
            Some("2".to_string())
        );
    }
}
