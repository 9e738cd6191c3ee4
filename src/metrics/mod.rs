pub mod score_tracker;
pub mod session;
pub mod store;

pub use score_tracker::ScoreTracker;
pub use session::SessionClock;
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
