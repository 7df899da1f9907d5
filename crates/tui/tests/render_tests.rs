//! Rendering tests using a mock terminal.
//!
//! Tests cover:
//! - Initial frame: titled borders, chat prompt, side panel help, banner
//! - Side panel toggle recompositing the upper area
//! - Terminal cursor placement per mode
//! - Damage tracking between frames

mod helpers;

use helpers::TuiHarness;
use helpers::{enter_key, key, type_str};
use ratatui::layout::Position;

#[test]
fn test_initial_frame_layout() {
    let mut harness = TuiHarness::new(80, 24);
    let output = harness.render();
    assert_eq!(output.lines().count(), 24);

    let top = harness.row(0);
    assert!(top.starts_with("┌ main "));
    assert!(top.contains("┌ side "));
    assert!(harness.row(1).contains("s  Toggle"));
    assert!(harness.row(16).starts_with("┌ chat "));
    assert!(harness.row(17).starts_with("│>"));
    assert_eq!(harness.row(23), "-- COMMAND --");
}

#[test]
fn test_hiding_side_panel_widens_main() {
    let mut harness = TuiHarness::new(80, 24);
    harness.render();

    harness.app.handle_input(key('s'));
    harness.render();
    let top = harness.row(0);
    assert!(!top.contains("side"));
    assert!(top.ends_with('┐'));
    assert_eq!(top.chars().count(), 80);

    harness.app.handle_input(key('s'));
    harness.render();
    assert!(harness.row(0).contains("┌ side "));
}

#[test]
fn test_command_output_is_drawn_in_main() {
    let mut harness = TuiHarness::new(80, 24);
    harness.app.handle_input(key(':'));
    type_str(&mut harness.app, "abc");
    harness.render();
    assert_eq!(harness.row(23), ":abc");

    harness.app.handle_input(enter_key());
    harness.render();
    assert!(harness.row(1).starts_with("│process command abc"));
    assert_eq!(harness.row(23), "-- COMMAND --");
}

#[test]
fn test_cursor_follows_command_line() {
    let mut harness = TuiHarness::new(80, 24);
    harness.app.handle_input(key(':'));
    type_str(&mut harness.app, "ab");
    harness.render();
    assert_eq!(
        harness.terminal.get_cursor_position().unwrap(),
        Position::new(3, 23)
    );
}

#[test]
fn test_cursor_follows_chat_input() {
    let mut harness = TuiHarness::new(80, 24);
    harness.app.handle_input(key('c'));
    type_str(&mut harness.app, "hey");
    harness.render();
    assert_eq!(
        harness.terminal.get_cursor_position().unwrap(),
        Position::new(5, 17)
    );
    assert!(harness.row(17).starts_with("│>hey"));
}

#[test]
fn test_damage_clears_after_present() {
    let mut harness = TuiHarness::new(80, 24);
    assert!(harness.app.needs_redraw());
    harness.render();
    assert!(!harness.app.needs_redraw());

    harness.app.handle_input(key('c'));
    assert!(harness.app.needs_redraw());
}
