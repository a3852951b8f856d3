//! Command Handlers 实现

mod song_handlers;

pub use song_handlers::*;
