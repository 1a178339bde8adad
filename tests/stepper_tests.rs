use leaptrace::program::PointId;
use leaptrace::stepper::Cursor;
use leaptrace::trace::{Facts, TracePath};

fn cursor_for(year: i64) -> Cursor {
    Cursor::new(TracePath::build(&Facts::evaluate(year)))
}

#[test]
fn test_new_cursor_starts_at_the_entry_line() {
    let cursor = cursor_for(2000);

    assert!(cursor.is_at_start());
    assert!(!cursor.is_at_end());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current_index(), 0);
    assert_eq!(cursor.current_point().text, "void main() {");
}

#[test]
fn test_retreat_at_start_is_a_no_op() {
    let mut cursor = cursor_for(2000);

    assert!(!cursor.retreat());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_advance_saturates_at_the_terminal_point() {
    let mut cursor = cursor_for(2023);

    while cursor.advance() {}

    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), cursor.len() - 1);
    assert_eq!(cursor.current_index(), 14);

    // Further advances stay put
    assert!(!cursor.advance());
    assert!(!cursor.advance());
    assert_eq!(cursor.position(), cursor.len() - 1);
}

#[test]
fn test_forward_walk_visits_every_position_once_in_order() {
    let mut cursor = cursor_for(1900);
    let mut seen = vec![cursor.position()];

    while cursor.advance() {
        seen.push(cursor.position());
    }

    assert_eq!(seen, (0..cursor.len()).collect::<Vec<_>>());
}

#[test]
fn test_reset_is_idempotent() {
    let mut cursor = cursor_for(2024);
    cursor.advance();
    cursor.advance();
    cursor.advance();

    cursor.reset();
    let after_one = cursor.position();
    cursor.reset();

    assert_eq!(cursor.position(), after_one);
    assert!(cursor.is_at_start());
}

#[test]
fn test_retreat_undoes_advance() {
    let mut cursor = cursor_for(2000);

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_point().id, Some(PointId::Mod4));

    cursor.retreat();
    assert_eq!(cursor.position(), 1);
    cursor.retreat();
    assert!(cursor.is_at_start());
}

#[test]
fn test_verdict_is_pending_until_the_result_line() {
    let mut cursor = cursor_for(2024);
    let mut advances = 0;

    while !cursor.verdict_ready() {
        assert!(cursor.advance());
        advances += 1;
    }

    // The verdict appears exactly when the cursor reaches the result line,
    // one point before the closing brace
    assert_eq!(cursor.position(), cursor.len() - 2);
    assert_eq!(advances, cursor.len() - 2);
    assert_eq!(cursor.current_point().id, Some(PointId::Res3));

    // And stays visible on the closing brace
    assert!(cursor.advance());
    assert!(cursor.verdict_ready());
}

#[test]
fn test_year_change_rebuilds_the_cursor_at_start() {
    // The display layer's rule: a new year means a new path and a new cursor
    let mut cursor = cursor_for(2000);
    while cursor.advance() {}
    assert_eq!(cursor.len(), 7);

    cursor = cursor_for(1900);
    assert!(cursor.is_at_start());
    assert_eq!(cursor.len(), 8);
    assert_eq!(cursor.current_index(), 0);
}

#[test]
fn test_current_point_tracks_the_path() {
    let mut cursor = cursor_for(2023);

    let mut visited = vec![cursor.current_index()];
    while cursor.advance() {
        visited.push(cursor.current_index());
    }

    assert_eq!(visited, cursor.path().indices());
    assert_eq!(cursor.path().leaf_id(), PointId::Res4);
}
