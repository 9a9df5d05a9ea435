//! Terminal input mapping and playfield rendering.
//!
//! Presentation-only glue: everything here reads session state
//! through accessors and never mutates it.

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{QueueableCommand, cursor};

use notefall_core::config::field::{COLUMN_COUNT, JUDGMENT_LINE, MISS_SLACK};
use notefall_core::{AudioBackend, InputEvent, Session, SessionPhase};

/// Column key bindings, left to right.
pub const COLUMN_KEYS: [char; COLUMN_COUNT] = ['d', 'f', 'j', 'k'];

/// Rows of playfield above the judgment line.
const FIELD_ROWS: u16 = 18;
const LANE_WIDTH: usize = 6;

/// Translate a terminal key event into core input events.
///
/// Legacy terminals only report presses, never releases, so a press
/// maps to a down/up pair (tap semantics); real release events still
/// clear the latch, and repeats are dropped.
pub fn map_key(key: &KeyEvent) -> Vec<InputEvent> {
    let code = key.code;

    if key.kind == KeyEventKind::Release {
        if let Some(column) = column_for(code) {
            return vec![InputEvent::KeyUp(column)];
        }
        return Vec::new();
    }
    if key.kind == KeyEventKind::Repeat {
        return Vec::new();
    }

    if let Some(column) = column_for(code) {
        return vec![InputEvent::KeyDown(column), InputEvent::KeyUp(column)];
    }

    match code {
        KeyCode::Char(' ') => vec![InputEvent::Start],
        KeyCode::Char('r') | KeyCode::Char('R') => vec![InputEvent::Reload],
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => vec![InputEvent::Quit],
        _ => Vec::new(),
    }
}

fn column_for(code: KeyCode) -> Option<usize> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    COLUMN_KEYS
        .iter()
        .position(|&k| k == c.to_ascii_lowercase())
}

/// Draw one frame of the playfield and status lines.
pub fn render<W: Write, A: AudioBackend>(out: &mut W, session: &Session<A>) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?
        .queue(Clear(ClearType::All))?;

    let stats = session.stats();
    out.queue(Print(format!("  {}\r\n", session.mode_label())))?;
    out.queue(Print(format!(
        "  Score: {}   Combo: {}x   Acc: {:.2}%\r\n",
        stats.score,
        stats.combo,
        stats.accuracy()
    )))?;

    let judgment = match session.judgment_display() {
        Some(display) => display.tier.display_name(),
        None => "",
    };
    out.queue(Print(format!("  {:^width$}\r\n", judgment, width = 28)))?;

    // Playfield: position 0 at the top row, the judgment line at the
    // bottom; notes past the line fall off the drawn area.
    let mut rows = vec![vec![false; COLUMN_COUNT]; FIELD_ROWS as usize + 1];
    for note in session.notes() {
        let clamped = note.position.clamp(0.0, JUDGMENT_LINE + MISS_SLACK);
        let row = (clamped / JUDGMENT_LINE * f32::from(FIELD_ROWS)) as usize;
        if row < rows.len() {
            rows[row][note.column] = true;
        }
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut line = String::from("  ");
        for &occupied in row {
            if occupied {
                line.push_str("|[##] ");
            } else {
                line.push_str("|     ");
            }
        }
        line.push('|');
        if row_index == FIELD_ROWS as usize {
            line.push_str("  <- judgment line");
        }
        out.queue(Print(line))?.queue(Print("\r\n"))?;
    }

    let mut key_row = String::from("  ");
    for (column, key) in COLUMN_KEYS.iter().enumerate() {
        let label = if session.is_key_down(column) {
            format!("|({:^width$})", key.to_ascii_uppercase(), width = LANE_WIDTH - 3)
        } else {
            format!("| {:^width$} ", key.to_ascii_uppercase(), width = LANE_WIDTH - 3)
        };
        key_row.push_str(&label);
    }
    key_row.push('|');
    out.queue(Print(key_row))?.queue(Print("\r\n"))?;

    let prompt = match session.phase() {
        SessionPhase::Idle => "SPACE to start, R to reload, Q to quit",
        SessionPhase::Running => "D/F/J/K to play, R to reload, Q to quit",
        SessionPhase::Ended => "Song finished! SPACE to restart, Q to quit",
    };
    out.queue(Print(format!("\r\n  {}\r\n", prompt)))?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_column_keys_map_to_tap_pairs() {
        let events = map_key(&press(KeyCode::Char('d')));
        assert_eq!(events, vec![InputEvent::KeyDown(0), InputEvent::KeyUp(0)]);

        let events = map_key(&press(KeyCode::Char('K')));
        assert_eq!(events, vec![InputEvent::KeyDown(3), InputEvent::KeyUp(3)]);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(map_key(&press(KeyCode::Char(' '))), vec![InputEvent::Start]);
        assert_eq!(map_key(&press(KeyCode::Char('r'))), vec![InputEvent::Reload]);
        assert_eq!(map_key(&press(KeyCode::Esc)), vec![InputEvent::Quit]);
        assert_eq!(map_key(&press(KeyCode::Char('q'))), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert!(map_key(&press(KeyCode::Char('x'))).is_empty());
        assert!(map_key(&press(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_release_maps_to_key_up() {
        let mut key = press(KeyCode::Char('f'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), vec![InputEvent::KeyUp(1)]);
    }

    #[test]
    fn test_repeat_is_dropped() {
        let mut key = press(KeyCode::Char('f'));
        key.kind = KeyEventKind::Repeat;
        assert!(map_key(&key).is_empty());
    }
}
