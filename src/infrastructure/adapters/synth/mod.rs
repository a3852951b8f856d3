//! Synthesis Engine Adapters

mod placeholder;

pub use placeholder::{
    PlaceholderInstrumentalEngine, PlaceholderSynthConfig, PlaceholderVocalEngine,
};
