//! HTTP Handlers

mod health;
mod media;
mod song;

pub use health::*;
pub use media::*;
pub use song::*;
