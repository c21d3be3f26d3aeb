//! App layer - state machine between UI events and network responses

pub mod state;
pub mod commands;
pub mod actor;

pub use state::AppState;
pub use actor::AppActor;
