//! Song Context - 歌曲生成限界上下文
//!
//! 职责:
//! - 生成产物的命名规则（类型前缀 + 128 位随机 hex）
//! - 媒体格式与 Content-Type 映射
//! - 歌曲标识

mod errors;
mod value_objects;

pub use errors::SongError;
pub use value_objects::{MediaFileName, MediaFormat, SongId, TrackKind};
