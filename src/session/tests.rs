use super::*;
use crate::test_utils::{session, session_with, MockTerminal};

fn numbered(n: usize) -> String {
    (0..n).map(|i| i.to_string()).collect::<Vec<_>>().join("\n")
}

/// Main view rows as painted
fn painted(s: &mut Session) -> Vec<String> {
    let (w, h) = s.size();
    let mut term = MockTerminal::new((h + 1) as u16, w as u16);
    s.draw(&mut term).unwrap();
    (0..h).map(|y| term.row(y).trim_end().to_string()).collect()
}

#[test]
fn test_set_cursor_clamps() {
    let mut s = session("abc\nde", 10, 5);
    s.set_cursor(Some(10), Some(10));
    assert_eq!(s.cursor(), (1, 2));

    s.set_cursor(Some(0), None);
    // char kept, then clamped to the end-of-line slot of line 0
    assert_eq!(s.cursor(), (0, 2));
    s.set_cursor(None, Some(99));
    assert_eq!(s.cursor(), (0, 3));
}

#[test]
fn test_set_cursor_visible_target_is_idempotent() {
    let mut s = session(&numbered(10), 10, 5);
    s.set_cursor(Some(2), Some(0));
    assert_eq!(s.pivot(), 2);
    for _ in 0..3 {
        s.set_cursor(Some(2), Some(0));
        assert_eq!(s.pivot(), 2);
    }
}

#[test]
fn test_scroll_down_pins_bottom_row() {
    let mut s = session(&numbered(10), 10, 3);
    s.move_cursor_y(1);
    s.move_cursor_y(1);
    assert_eq!(s.pivot(), 2);
    assert_eq!(painted(&mut s), vec!["0", "1", "2"]);

    s.move_cursor_y(1);
    assert_eq!(s.cursor(), (3, 0));
    assert_eq!(s.pivot(), 2);
    assert_eq!(painted(&mut s), vec!["1", "2", "3"]);
}

#[test]
fn test_scroll_up_pins_top_row() {
    let mut s = session(&numbered(10), 10, 3);
    s.goto_bottom();
    assert_eq!(s.cursor(), (9, 0));
    assert_eq!(painted(&mut s), vec!["7", "8", "9"]);

    s.move_cursor_y(-1);
    assert_eq!(s.pivot(), 1);
    s.move_cursor_y(-1);
    assert_eq!(s.pivot(), 0);
    s.move_cursor_y(-1);
    assert_eq!(s.pivot(), 0);
    assert_eq!(painted(&mut s), vec!["6", "7", "8"]);
}

#[test]
fn test_jump_far_down() {
    let mut s = session(&numbered(10), 10, 3);
    s.set_cursor(Some(8), None);
    assert_eq!(s.pivot(), 2);
    assert_eq!(painted(&mut s), vec!["6", "7", "8"]);

    s.goto_top();
    assert_eq!(s.cursor(), (0, 0));
    assert_eq!(s.pivot(), 0);
    assert_eq!(painted(&mut s), vec!["0", "1", "2"]);
}

#[test]
fn test_cursor_inside_wrapped_line_keeps_pivot() {
    let mut s = session("abcdefghij", 3, 2);
    s.set_cursor(None, Some(4));
    assert_eq!(s.pivot(), 1);

    // off screen but on the same line
    s.set_cursor(None, Some(7));
    assert_eq!(s.pivot(), 1);
    assert_eq!(painted(&mut s), vec!["def", "ghi"]);
}

#[test]
fn test_draw_places_cursor() {
    let mut s = session("abc\ndef", 10, 3);
    s.set_cursor(Some(1), Some(2));
    let mut term = MockTerminal::new(4, 10);
    s.draw(&mut term).unwrap();
    assert_eq!(term.cursor, (1, 2));
    assert!(term.cursor_visible);
}

#[test]
fn test_draw_with_gutter() {
    let mut s = session_with("abc\ndef", 10, 3, Settings::default());
    s.set_cursor(Some(1), Some(1));
    let mut term = MockTerminal::new(4, 10);
    s.draw(&mut term).unwrap();
    assert_eq!(term.row(0), "1 abc     ");
    assert_eq!(term.row(1), "2 def     ");
    assert_eq!(term.row(2), "          ");
    assert_eq!(term.cursor, (1, 3));
}

#[test]
fn test_move_cursor_saturates() {
    let mut s = session("abc", 10, 3);
    s.move_cursor_x(-1);
    s.move_cursor_y(-1);
    assert_eq!(s.cursor(), (0, 0));
    s.move_cursor_x(10);
    assert_eq!(s.cursor(), (0, 3));
}

#[test]
fn test_insert_advances_cursor() {
    let mut s = session("ac", 10, 3);
    s.set_cursor(None, Some(1));
    s.insert(&['b']);
    assert_eq!(s.buffer().to_string(), "abc");
    assert_eq!(s.cursor(), (0, 2));

    s.insert(&['\n']);
    assert_eq!(s.buffer().to_string(), "ab\nc");
    assert_eq!(s.cursor(), (1, 0));
}

#[test]
fn test_delete_forward_and_backward() {
    let mut s = session("abc", 10, 3);
    s.delete(1);
    assert_eq!(s.buffer().to_string(), "bc");
    assert_eq!(s.cursor(), (0, 0));

    s.goto_line_end();
    s.delete(-1);
    assert_eq!(s.buffer().to_string(), "b");
    assert_eq!(s.cursor(), (0, 1));
}

#[test]
fn test_delete_clamps_counts() {
    let mut s = session("ab", 10, 3);
    s.goto_line_end();
    s.delete(1);
    assert_eq!(s.buffer().to_string(), "ab");

    s.goto_top();
    s.delete(-1);
    assert_eq!(s.buffer().to_string(), "ab");

    s.delete(5);
    assert!(s.buffer().is_empty());
    assert_eq!(s.cursor(), (0, 0));
}

#[test]
fn test_backspace_joins_lines() {
    let mut s = session("ab\ncd", 10, 3);
    s.set_cursor(Some(1), Some(0));
    s.delete(-1);
    assert_eq!(s.buffer().to_string(), "abcd");
    assert_eq!(s.cursor(), (0, 2));
}

#[test]
fn test_newline_carries_indent() {
    let mut s = session("    foo", 20, 3);
    s.goto_line_end();
    s.newline();
    assert_eq!(s.buffer().to_string(), "    foo\n    ");
    assert_eq!(s.cursor(), (1, 4));
}

#[test]
fn test_newline_indent_stops_at_cursor() {
    let mut s = session("\t\tfoo", 20, 3);
    s.set_cursor(None, Some(1));
    s.newline();
    assert_eq!(s.buffer().to_string(), "\t\n\t\tfoo");
    assert_eq!(s.cursor(), (1, 1));
}

#[test]
fn test_newline_without_smart_indent() {
    let settings = Settings {
        smart_indent: false,
        show_line_numbers: false,
        ..Settings::default()
    };
    let mut s = session_with("    foo", 20, 3, settings);
    s.goto_line_end();
    s.newline();
    assert_eq!(s.buffer().to_string(), "    foo\n");
    assert_eq!(s.cursor(), (1, 0));
}

#[test]
fn test_insert_tab() {
    let mut s = session("x", 20, 3);
    s.insert_tab();
    assert_eq!(s.buffer().to_string(), "    x");

    let settings = Settings {
        expand_tabs: false,
        show_line_numbers: false,
        ..Settings::default()
    };
    let mut s = session_with("x", 20, 3, settings);
    s.insert_tab();
    assert_eq!(s.buffer().to_string(), "\tx");
    assert_eq!(s.cursor(), (0, 1));
}

#[test]
fn test_search_invalid_pattern_changes_nothing() {
    let mut s = session("foo bar foo", 20, 3);
    s.search("foo").unwrap();
    s.set_cursor(None, Some(4));
    let before = s.matches().to_vec();

    assert!(s.search("(foo").is_err());
    assert_eq!(s.cursor(), (0, 4));
    assert_eq!(s.matches(), before.as_slice());
}

#[test]
fn test_search_without_matches_keeps_cursor() {
    let mut s = session("foo bar", 20, 3);
    s.set_cursor(None, Some(2));
    s.search("xyz").unwrap();
    assert_eq!(s.cursor(), (0, 2));
    assert!(s.matches().is_empty());
    assert_eq!(s.status(), Some("Pattern not found: xyz"));
}

#[test]
fn test_search_jumps_at_or_after_cursor() {
    let mut s = session("foo\nbar foo\nfoo", 20, 3);
    s.search("foo").unwrap();
    // match at the cursor itself counts
    assert_eq!(s.cursor(), (0, 0));

    s.set_cursor(Some(1), Some(1));
    s.search("foo").unwrap();
    assert_eq!(s.cursor(), (1, 4));
}

#[test]
fn test_search_wraps_to_first_match() {
    let mut s = session("foo bar\nbaz", 20, 3);
    s.set_cursor(Some(1), Some(1));
    s.search("foo").unwrap();
    assert_eq!(s.cursor(), (0, 0));
}

#[test]
fn test_search_query_with_slash() {
    let mut s = session("see a/b here\n", 20, 3);
    s.search("a/b").unwrap();
    assert_eq!(s.cursor(), (0, 4));
    assert_eq!(s.matches(), &[4..7]);
    assert_eq!(s.status(), None);
}

#[test]
fn test_search_multibyte_positions() {
    let mut s = session("héllo wörld", 20, 3);
    s.search("wörld").unwrap();
    assert_eq!(s.cursor(), (0, 6));
    assert_eq!(s.matches(), &[7..13]);
}

#[test]
fn test_next_match_does_not_wrap() {
    let mut s = session("foo foo\nfoo", 20, 3);
    s.search("foo").unwrap();
    assert!(s.next_match());
    assert_eq!(s.cursor(), (0, 4));
    assert!(s.next_match());
    assert_eq!(s.cursor(), (1, 0));
    assert!(!s.next_match());
    assert_eq!(s.cursor(), (1, 0));
}

#[test]
fn test_matches_follow_edits() {
    let mut s = session("foo foo", 20, 3);
    s.search("foo").unwrap();
    assert_eq!(s.matches(), &[0..3, 4..7]);

    s.insert(&['x']);
    assert_eq!(s.matches(), &[1..4, 5..8]);
    s.delete(-1);
    assert_eq!(s.matches(), &[0..3, 4..7]);
}

#[test]
fn test_resize_clamps_pivot() {
    let mut s = session(&numbered(20), 10, 10);
    s.set_cursor(Some(8), None);
    assert_eq!(s.pivot(), 8);

    s.resize(10, 4);
    assert_eq!(s.size(), (10, 3));
    assert_eq!(s.pivot(), 2);
    assert_eq!(s.status_row(), 3);
    assert_eq!(painted(&mut s), vec!["6", "7", "8"]);
}

#[test]
fn test_save_writes_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut s = Session::new(
        TextBuffer::new("hello"),
        path.clone(),
        Settings::default(),
        20,
        4,
    );
    s.insert(&['>']);
    s.save().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), ">hello");
    assert!(s.status().is_some());
}

#[test]
fn test_draw_status_fills_row() {
    let s = session("abc", 6, 2);
    let mut term = MockTerminal::new(3, 6);
    s.draw_status(&mut term, "hi").unwrap();
    assert_eq!(term.row(2), "hi    ");
}
