//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Song Context: 歌曲生成产物的命名、格式与标识

pub mod song;
