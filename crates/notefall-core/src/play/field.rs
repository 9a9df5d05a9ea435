use crate::config::field::{JUDGMENT_LINE, MISS_SLACK, NOTE_SPEED};
use crate::play::note::{ActiveNote, NoteResolution};

/// The set of notes currently in flight.
///
/// Notes are stored in spawn order. Between ticks the set only holds
/// unresolved notes; resolved notes are removed by
/// [`purge_resolved`](NoteField::purge_resolved) at the end of each
/// tick.
#[derive(Debug, Default)]
pub struct NoteField {
    notes: Vec<ActiveNote>,
    next_id: u64,
}

impl NoteField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an unresolved note at the top of the given column.
    pub fn spawn(&mut self, column: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(ActiveNote {
            id,
            column,
            position: 0.0,
            resolution: NoteResolution::Unresolved,
        });
        id
    }

    /// Advance every unresolved note and auto-miss the ones that
    /// crossed the miss threshold. Returns the number of misses.
    ///
    /// Decisions are collected during the scan and applied in place;
    /// removal happens separately in [`purge_resolved`](Self::purge_resolved).
    pub fn advance(&mut self, dt: f32) -> usize {
        let mut missed = 0;
        for note in self.notes.iter_mut().filter(|n| n.is_unresolved()) {
            note.position += NOTE_SPEED * dt;
            if note.position > JUDGMENT_LINE + MISS_SLACK {
                note.resolution = NoteResolution::Missed;
                missed += 1;
            }
        }
        missed
    }

    /// Find the unresolved note in `column` nearest the judgment
    /// line, as `(index, distance)`.
    ///
    /// Equidistant candidates tie-break to the earliest-spawned note:
    /// storage is spawn-ordered and the comparison is strict, so the
    /// first note scanned wins.
    pub fn best_candidate(&self, column: usize) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, note) in self.notes.iter().enumerate() {
            if note.column != column || !note.is_unresolved() {
                continue;
            }
            let distance = (note.position - JUDGMENT_LINE).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best
    }

    /// Mark the note at `index` as hit.
    pub fn resolve_hit(&mut self, index: usize) {
        if let Some(note) = self.notes.get_mut(index) {
            note.resolution = NoteResolution::Hit;
        }
    }

    /// Remove every resolved note in one compaction step.
    pub fn purge_resolved(&mut self) {
        self.notes.retain(ActiveNote::is_unresolved);
    }

    pub fn notes(&self) -> &[ActiveNote] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::field::{JUDGMENT_LINE, MISS_SLACK, NOTE_SPEED};

    /// Advance a single note to the given travel position.
    fn advance_to(field: &mut NoteField, position: f32) {
        field.advance(position / NOTE_SPEED);
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let mut field = NoteField::new();
        let a = field.spawn(0);
        let b = field.spawn(1);
        assert!(b > a);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_advance_moves_unresolved_notes() {
        let mut field = NoteField::new();
        field.spawn(0);
        let missed = field.advance(0.1);
        assert_eq!(missed, 0);
        assert!((field.notes()[0].position - NOTE_SPEED * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_advance_misses_stale_notes_once() {
        let mut field = NoteField::new();
        field.spawn(2);
        advance_to(&mut field, JUDGMENT_LINE + MISS_SLACK + 1.0);
        assert_eq!(field.notes()[0].resolution, NoteResolution::Missed);

        // A resolved note never moves or misses again.
        let missed_again = field.advance(1.0);
        assert_eq!(missed_again, 0);
    }

    #[test]
    fn test_note_at_slack_boundary_is_not_missed() {
        let mut field = NoteField::new();
        field.spawn(0);
        advance_to(&mut field, JUDGMENT_LINE + MISS_SLACK);
        assert!(field.notes()[0].is_unresolved());
    }

    #[test]
    fn test_best_candidate_ignores_other_columns() {
        let mut field = NoteField::new();
        field.spawn(0);
        field.spawn(1);
        advance_to(&mut field, JUDGMENT_LINE);

        let (index, distance) = field.best_candidate(1).unwrap();
        assert_eq!(field.notes()[index].column, 1);
        assert!(distance < 1e-3);
        assert!(field.best_candidate(3).is_none());
    }

    #[test]
    fn test_best_candidate_picks_nearest() {
        let mut field = NoteField::new();
        field.spawn(0);
        advance_to(&mut field, 200.0); // far note now at 200
        let near = field.spawn(0);
        field.advance((JUDGMENT_LINE - 200.0) / NOTE_SPEED); // far at line, near at 300

        let (index, _) = field.best_candidate(0).unwrap();
        assert_ne!(field.notes()[index].id, near);
    }

    #[test]
    fn test_equidistant_tie_breaks_to_earliest_spawn() {
        let mut field = NoteField::new();
        let first = field.spawn(0);
        field.spawn(0);

        // Both notes share a position, so both are equidistant.
        let (index, _) = field.best_candidate(0).unwrap();
        assert_eq!(field.notes()[index].id, first);
    }

    #[test]
    fn test_purge_removes_resolved_only() {
        let mut field = NoteField::new();
        field.spawn(0);
        field.spawn(1);
        field.resolve_hit(0);
        field.purge_resolved();

        assert_eq!(field.len(), 1);
        assert_eq!(field.notes()[0].column, 1);
        assert!(field.notes()[0].is_unresolved());
    }
}
