// src/animation/mod.rs
// Playback sequencing.

pub mod sequencer;

pub use sequencer::{locate_active, ActiveShape, FramePlan, PlaybackState, Sequencer};
