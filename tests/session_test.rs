//! Scripted sessions replayed against a pinned clock.

use std::io::{BufReader, Cursor, Write};

use chrono::{NaiveDate, NaiveDateTime};
use traystack::session::{
    BEST_BEFORE_NO_MATCH_TEXT, EXIT_TEXT, FINISHED_TEXT, INVALID_OPTION_TEXT, NAME_NOT_FOUND_TEXT,
    STORAGE_FULL_TEXT, WEIGHT_NO_MATCH_TEXT,
};
use traystack::{Session, SimClock};
use traystack_core::{Mode, StorageUnit};

const PLACED_AT_TEXT: &str = "2024-06-01 12:00:00";
const INVALID_FORMAT_TEXT: &str = "  Invalid input format. Please try again.";

fn placed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn run_script(capacity: usize, mode: Mode, script: &str) -> (StorageUnit, String) {
    let unit = StorageUnit::new(capacity, mode);
    let mut session = Session::new(
        unit,
        Cursor::new(script.as_bytes()),
        Vec::new(),
        SimClock::at(placed_at()),
    );
    session.run().expect("session should not fail");
    let (unit, output) = session.into_parts();
    (unit, String::from_utf8(output).expect("output is utf-8"))
}

fn item_line(name: &str, weight: u32, best_before: &str) -> String {
    format!("Name: {name} | Weight: {weight} g | BestBefore: {best_before} | TimePlaced: {PLACED_AT_TEXT}")
}

fn add(name: &str, weight: u32, best_before: &str) -> String {
    format!("2\n{name}\n{weight}\n{best_before}\n")
}

#[test]
fn test_capacity_two_stack_scenario() {
    let script = [
        add("Fries", 100, "2024-06-03"),
        add("Burger", 250, "2024-06-05"),
        "2\n3\n3\n3\n9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(2, Mode::StackFrontBoth, &script);

    assert_eq!(out.matches(" Item added !").count(), 2);
    assert_eq!(out.matches(STORAGE_FULL_TEXT).count(), 1);

    let burger = out
        .find(&format!("  Removed: {}", item_line("Burger", 250, "2024-06-05")))
        .expect("burger removed");
    let fries = out
        .find(&format!("  Removed: {}", item_line("Fries", 100, "2024-06-03")))
        .expect("fries removed");
    assert!(burger < fries);

    assert!(out.contains("  Error: Storage is empty."));
    assert!(out.contains(EXIT_TEXT));
    assert!(out.ends_with(&format!("{FINISHED_TEXT}\n")));
    assert!(unit.is_empty());
}

#[test]
fn test_welcome_and_menu() {
    let (_, out) = run_script(8, Mode::StackFrontBoth, "9\n");

    assert!(out.starts_with("___ Welcome to Fast-Food Storage Manager___\n"));
    assert!(out.contains(" Your current mode: STACK_FRONT_BOTH"));
    assert!(out.contains("9) Exit the program"));
    assert!(out.contains("→ Choose an option: "));
}

#[test]
fn test_mode_switch_serves_oldest() {
    let script = [
        add("A", 100, "2024-06-02"),
        add("B", 100, "2024-06-02"),
        "1\n2\n3\n9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(8, Mode::StackFrontBoth, &script);

    assert!(out.contains(" Mode switched to: ADD_FRONT_REMOVE_OPP"));
    assert!(out.contains(" Your current mode: ADD_FRONT_REMOVE_OPP"));
    assert!(out.contains(&format!("  Removed: {}", item_line("A", 100, "2024-06-02"))));
    assert_eq!(unit.mode(), Mode::AddFrontRemoveOpp);
    assert_eq!(unit.peek_top().unwrap().name(), "B");
}

#[test]
fn test_mode_choice_one_selects_stack() {
    let (unit, out) = run_script(8, Mode::AddFrontRemoveOpp, "1\n1\n9\n");

    assert!(out.contains(" Mode switched to: STACK_FRONT_BOTH"));
    assert_eq!(unit.mode(), Mode::StackFrontBoth);
}

#[test]
fn test_best_before_limit() {
    let script = [
        add("Shake", 300, "2024-06-16"),
        add("Wrap", 200, "2024-06-15"),
        "9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(8, Mode::StackFrontBoth, &script);

    assert!(out.contains("  Best-before date too far ahead (max 14 days allowed)."));
    assert_eq!(out.matches(" Item added !").count(), 1);
    assert_eq!(unit.len(), 1);
    assert_eq!(unit.peek_top().unwrap().name(), "Wrap");
}

#[test]
fn test_empty_name_rejected() {
    let (unit, out) = run_script(8, Mode::StackFrontBoth, "2\n   \n5\n9\n");

    assert!(out.contains("  Name cannot be empty, try again."));
    assert!(out.contains("Storage is empty."));
    assert!(unit.is_empty());
}

#[test]
fn test_non_positive_weight_rejected() {
    let (unit, out) = run_script(8, Mode::StackFrontBoth, &[add("Fries", 0, "2024-06-02"), "9\n".to_string()].concat());

    assert!(out.contains("  Weight must be a positive number of grams."));
    assert!(unit.is_empty());
}

#[test]
fn test_malformed_input_keeps_session_alive() {
    let script = "2\nFries\nheavy\n7\n10\nabc\n8\n2024-13-01\n9\n";

    let (unit, out) = run_script(8, Mode::StackFrontBoth, script);

    assert_eq!(out.matches(INVALID_FORMAT_TEXT).count(), 3);
    assert!(out.contains(EXIT_TEXT));
    assert!(unit.is_empty());
}

#[test]
fn test_invalid_option() {
    let (_, out) = run_script(8, Mode::StackFrontBoth, "0\nten\n9\n");

    assert_eq!(out.matches(INVALID_OPTION_TEXT).count(), 2);
}

#[test]
fn test_peek_and_display() {
    let script = [
        "4\n".to_string(),
        add("Fries", 100, "2024-06-03"),
        add("Burger", 250, "2024-06-05"),
        "4\n5\n9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(8, Mode::AddFrontRemoveOpp, &script);

    assert!(out.contains("  Error: Storage is empty."));
    assert!(out.contains(&format!(" Top item: {}", item_line("Burger", 250, "2024-06-05"))));
    assert!(out.contains(&format!(
        "Storage contents (front to back):\n[0] {}\n[1] {}\n",
        item_line("Burger", 250, "2024-06-05"),
        item_line("Fries", 100, "2024-06-03"),
    )));
    assert_eq!(unit.len(), 2);
}

#[test]
fn test_searches() {
    let script = [
        add("Burger", 250, "2024-06-05"),
        add("Fries", 100, "2024-06-03"),
        "6\nBURGER\n".to_string(),
        "6\nPizza\n".to_string(),
        "7\n100\n250\n".to_string(),
        "7\n300\n400\n".to_string(),
        "8\n2024-06-03\n2024-06-04\n".to_string(),
        "8\n2024-06-20\n2024-06-01\n".to_string(),
        "9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(8, Mode::StackFrontBoth, &script);

    let burger = item_line("Burger", 250, "2024-06-05");
    let fries = item_line("Fries", 100, "2024-06-03");

    assert!(out.contains(&format!("Enter name to search: {burger}\n")));
    assert!(out.contains(NAME_NOT_FOUND_TEXT));
    assert!(out.contains(&format!("Enter maximum weight: {fries}\n{burger}\n")));
    assert!(out.contains(WEIGHT_NO_MATCH_TEXT));
    assert!(out.contains(&format!("Enter end date (YYYY-MM-DD): {fries}\n\n")));
    // Inverted range is a normal empty result.
    assert_eq!(out.matches(BEST_BEFORE_NO_MATCH_TEXT).count(), 1);
    assert_eq!(unit.len(), 2);
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (unit, out) = run_script(8, Mode::StackFrontBoth, "2\nFries\n");

    assert!(!out.contains(EXIT_TEXT));
    assert!(out.ends_with(&format!("{FINISHED_TEXT}\n")));
    assert!(unit.is_empty());
}

#[test]
fn test_script_file_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}3\n9\n", add("Nuggets", 180, "2024-06-10")).unwrap();
    file.flush().unwrap();

    let reader = BufReader::new(std::fs::File::open(file.path()).unwrap());
    let mut session = Session::new(
        StorageUnit::new(1, Mode::StackFrontBoth),
        reader,
        Vec::new(),
        SimClock::at(placed_at()),
    );
    session.run().unwrap();

    let (unit, output) = session.into_parts();
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains(&format!("  Removed: {}", item_line("Nuggets", 180, "2024-06-10"))));
    assert!(unit.is_empty());
}

#[test]
fn test_short_year_best_before_rejected() {
    let script = [
        add("Fries", 100, "24-06-01"),
        add("Burger", 250, "2024-6-3"),
        "5\n9\n".to_string(),
    ]
    .concat();

    let (unit, out) = run_script(8, Mode::StackFrontBoth, &script);

    assert_eq!(out.matches(INVALID_FORMAT_TEXT).count(), 2);
    assert!(!out.contains(" Item added !"));
    assert!(out.contains("Storage is empty."));
    assert!(unit.is_empty());
}

#[test]
fn test_best_before_window_follows_clock() {
    let mut clock = SimClock::at(placed_at());
    clock.advance_days(10);
    clock.advance_secs(30);

    let script = [
        add("Late", 120, "2024-06-26"),
        add("Edge", 130, "2024-06-25"),
        "9\n".to_string(),
    ]
    .concat();
    let mut session = Session::new(
        StorageUnit::new(8, Mode::StackFrontBoth),
        Cursor::new(script.as_bytes()),
        Vec::new(),
        clock,
    );
    session.run().unwrap();

    let (unit, output) = session.into_parts();
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("must be within 14 days"));
    assert_eq!(
        out.matches("  Best-before date too far ahead (max 14 days allowed).").count(),
        1
    );
    assert_eq!(unit.len(), 1);
    let edge = unit.peek_top().unwrap();
    assert_eq!(edge.name(), "Edge");
    assert_eq!(edge.placed_at().to_string(), "2024-06-11 12:00:30");
}
