//! 应用层 - 命令（写操作）

mod song_commands;

pub mod handlers;

pub use song_commands::*;
