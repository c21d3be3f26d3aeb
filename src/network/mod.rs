//! Network layer - async HTTP fetch, retry, and connectivity watching

pub mod actor;
pub mod client;
pub mod connectivity;
pub mod retry;

pub use actor::NetworkActor;
