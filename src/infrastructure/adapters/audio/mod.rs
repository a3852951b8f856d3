//! Audio Engine Adapter

mod pcm_engine;

pub use pcm_engine::{PcmAudioEngine, PcmEngineConfig};
