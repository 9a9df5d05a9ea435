use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::beatmap::{Beatmap, BeatmapEvent};
use crate::config::{beatmap::TRAILING_PAD, field::COLUMN_COUNT};
use crate::error::{Error, Result};

impl Beatmap {
    /// Read and parse a beatmap file.
    ///
    /// The file is decoded as lossy UTF-8. An unreadable file, a
    /// beatmap with zero valid events, or an empty music reference
    /// all count as *not loaded*; callers fall back to procedural
    /// generation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        let text = String::from_utf8_lossy(&bytes);
        let beatmap = Self::parse(&text)?;
        info!(
            "Loaded beatmap \"{}\" ({} events, music: {})",
            beatmap.title,
            beatmap.events.len(),
            beatmap.music_ref
        );
        Ok(beatmap)
    }

    /// Parse beatmap text.
    ///
    /// Header: line 1 title, line 2 music reference, line 3 offset in
    /// milliseconds. Remaining lines are `time_seconds,column_index`
    /// events. Blank lines and lines starting with `#` or `/` are
    /// comments. Malformed event lines are skipped with a warning;
    /// a malformed offset degrades to 0.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        let title = lines.next().unwrap_or("").trim().to_string();
        let music_ref = lines.next().unwrap_or("").trim().to_string();

        let offset_secs = match lines.next() {
            Some(line) => match line.trim().parse::<f32>() {
                Ok(ms) => ms / 1000.0,
                Err(_) => {
                    warn!("Malformed offset line {:?}, using 0", line);
                    0.0
                }
            },
            None => 0.0,
        };

        let mut events = Vec::new();
        let mut max_time = 0.0f32;

        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('/') {
                continue;
            }

            match parse_event_line(line) {
                Some(event) => {
                    if event.time > max_time {
                        max_time = event.time;
                    }
                    events.push(event);
                }
                None => warn!("Skipping malformed beatmap line {:?}", line),
            }
        }

        if events.is_empty() {
            return Err(Error::NoEvents);
        }
        if music_ref.is_empty() {
            return Err(Error::MissingMusic);
        }

        // Stable sort keeps file order for equal timestamps.
        events.sort_by(|a, b| a.time.total_cmp(&b.time));

        Ok(Self {
            title,
            music_ref,
            offset_secs,
            total_length_secs: max_time + TRAILING_PAD,
            events,
        })
    }
}

fn parse_event_line(line: &str) -> Option<BeatmapEvent> {
    let (time_str, column_str) = line.split_once(',')?;
    let time = time_str.trim().parse::<f32>().ok()?;
    let column = column_str.trim().parse::<usize>().ok()?;

    if !time.is_finite() || column >= COLUMN_COUNT {
        return None;
    }

    Some(BeatmapEvent { time, column })
}
