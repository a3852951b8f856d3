//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod audio;
pub mod storage;
pub mod synth;

pub use audio::*;
pub use storage::*;
pub use synth::*;
