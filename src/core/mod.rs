pub mod engine;
pub mod game_state;
pub mod events;
pub mod statistics;

pub use engine::{GameEngine, GameRules};
pub use game_state::{GameState, GameStatus, RevealMask};
pub use events::{GameEvent, GameEventType, GameEventHandler, EventLogger};
pub use statistics::SessionStatistics;
