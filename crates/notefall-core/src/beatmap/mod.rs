//! Beatmap loading and storage.
//!
//! A beatmap is a line-oriented text file: a three-line header
//! (title, music reference, offset in milliseconds) followed by one
//! `time_seconds,column_index` event per line.

mod parser;
mod types;

pub use types::{Beatmap, BeatmapEvent};
