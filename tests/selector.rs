use std::sync::{Arc, Mutex};

use gallerist::selector::{OptionSelector, SelectOption};

fn opt(caption: &str, value: &str) -> SelectOption {
    SelectOption::new(caption, value)
}

/// Selector whose listener records every notification it receives.
fn recording_selector(multi_select: bool) -> (OptionSelector, Arc<Mutex<Vec<Vec<String>>>>) {
    let notifications: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&notifications);
    let mut selector = OptionSelector::new(multi_select, "All");
    selector.set_listener(Box::new(move |selection| {
        let values = selection.iter().map(|option| option.value.clone()).collect();
        sink.lock().unwrap().push(values);
    }));
    (selector, notifications)
}

fn selection_values(selector: &OptionSelector) -> Vec<String> {
    selector.selection().iter().map(|option| option.value.clone()).collect()
}

#[test]
fn single_select_default_matches_by_value() {
    let (mut selector, _) = recording_selector(false);
    selector.set_default_spec("b");
    selector.set_options(vec![opt("", ""), opt("Red", "r"), opt("Blue", "b")]);

    assert_eq!(selector.selection(), &[opt("Blue", "b")]);
}

#[test]
fn single_select_default_falls_back_to_first_option() {
    let (mut selector, _) = recording_selector(false);
    selector.set_default_spec("missing");
    selector.set_options(vec![opt("All", ""), opt("Red", "r")]);

    assert_eq!(selector.selection(), &[opt("All", "")]);
}

#[test]
fn single_select_without_default_selects_first_option() {
    let (mut selector, _) = recording_selector(false);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    assert_eq!(selector.selection(), &[opt("Red", "r")]);
}

#[test]
fn empty_option_list_leaves_selection_empty() {
    let (mut selector, notifications) = recording_selector(false);
    selector.set_default_spec("b");
    let replaced = selector.set_options(Vec::new());

    assert!(!replaced, "replacing an empty list with an empty list is a no-op");
    assert!(selector.selection().is_empty());
    assert!(notifications.lock().unwrap().is_empty());
}

#[test]
fn multi_select_default_drops_unmatched_tokens() {
    let (mut selector, _) = recording_selector(true);
    selector.set_default_spec("r,x,b");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    assert_eq!(selection_values(&selector), vec!["r", "b"]);
}

#[test]
fn multi_select_default_preserves_spec_order() {
    let (mut selector, _) = recording_selector(true);
    selector.set_default_spec("b,r");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    // Order follows the default spec, not the option list
    assert_eq!(selection_values(&selector), vec!["b", "r"]);
}

#[test]
fn multi_select_default_removes_duplicate_tokens() {
    let (mut selector, _) = recording_selector(true);
    selector.set_default_spec("r,r,b,r");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    assert_eq!(selection_values(&selector), vec!["r", "b"]);
}

#[test]
fn multi_select_empty_default_selects_nothing() {
    let (mut selector, notifications) = recording_selector(true);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    assert!(selector.selection().is_empty());
    // No transition happened, so the listener stayed quiet
    assert!(notifications.lock().unwrap().is_empty());
}

#[test]
fn defaults_apply_once_per_options_generation() {
    let (mut selector, _) = recording_selector(true);
    selector.set_default_spec("r");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    assert_eq!(selection_values(&selector), vec!["r"]);

    // Deselect, then try to re-apply without an options change
    selector.toggle(&opt("Red", "r"));
    assert!(selector.selection().is_empty());

    selector.apply_default();
    assert!(selector.selection().is_empty(), "guarded re-application must be a no-op");
}

#[test]
fn defaults_reapply_after_options_change() {
    let (mut selector, _) = recording_selector(true);
    selector.set_default_spec("r");
    selector.set_options(vec![opt("Red", "r")]);
    selector.toggle(&opt("Red", "r"));
    assert!(selector.selection().is_empty());

    // A genuinely different list clears the guard
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b"), opt("Green", "g")]);
    assert_eq!(selection_values(&selector), vec!["r"]);
}

#[test]
fn identical_options_do_not_notify_or_reset_the_guard() {
    let (mut selector, notifications) = recording_selector(true);
    selector.set_default_spec("r");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    selector.toggle(&opt("Red", "r"));
    let before = notifications.lock().unwrap().len();

    let replaced = selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);

    assert!(!replaced);
    assert!(selector.selection().is_empty(), "guard must survive an identical replacement");
    assert_eq!(notifications.lock().unwrap().len(), before);
}

#[test]
fn growing_options_list_without_selection_change_stays_silent() {
    let (mut selector, notifications) = recording_selector(false);
    selector.set_default_spec("r");
    selector.set_options(vec![opt("Red", "r")]);
    assert_eq!(notifications.lock().unwrap().len(), 1);

    // The list changed, the re-resolved default did not
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    assert_eq!(selection_values(&selector), vec!["r"]);
    assert_eq!(notifications.lock().unwrap().len(), 1);
}

#[test]
fn multi_select_toggle_is_an_involution() {
    let (mut selector, _) = recording_selector(true);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b"), opt("Green", "g")]);
    selector.toggle(&opt("Red", "r"));
    selector.toggle(&opt("Green", "g"));
    let before = selection_values(&selector);

    selector.toggle(&opt("Blue", "b"));
    selector.toggle(&opt("Blue", "b"));

    assert_eq!(selection_values(&selector), before);
}

#[test]
fn multi_select_toggle_appends_and_preserves_order() {
    let (mut selector, _) = recording_selector(true);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b"), opt("Green", "g")]);
    selector.toggle(&opt("Red", "r"));
    selector.toggle(&opt("Blue", "b"));
    selector.toggle(&opt("Green", "g"));

    selector.toggle(&opt("Blue", "b"));
    assert_eq!(selection_values(&selector), vec!["r", "g"]);

    selector.toggle(&opt("Blue", "b"));
    assert_eq!(selection_values(&selector), vec!["r", "g", "b"]);
}

#[test]
fn single_select_toggle_replaces_the_selection() {
    let (mut selector, _) = recording_selector(false);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    selector.toggle(&opt("Red", "r"));
    selector.toggle(&opt("Blue", "b"));

    assert_eq!(selector.selection(), &[opt("Blue", "b")]);
}

#[test]
fn membership_is_decided_by_value_not_caption() {
    let (mut selector, _) = recording_selector(true);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    selector.toggle(&opt("Red", "r"));

    // Same value, different caption: still counts as the same option
    selector.toggle(&opt("Crimson", "r"));
    assert!(selector.selection().is_empty());
}

#[test]
fn listener_fires_exactly_once_per_transition() {
    let (mut selector, notifications) = recording_selector(true);
    selector.set_default_spec("r,b");
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]); // 1: default applied
    selector.toggle(&opt("Red", "r")); // 2: removed
    selector.toggle(&opt("Red", "r")); // 3: re-added
    selector.apply_default(); // guarded, no transition

    let notifications = notifications.lock().unwrap();
    assert_eq!(notifications.len(), 3);
    assert_eq!(notifications[0], vec!["r", "b"]);
    assert_eq!(notifications[1], vec!["b"]);
    assert_eq!(notifications[2], vec!["b", "r"]);
}

#[test]
fn display_caption_joins_selected_captions() {
    let (mut selector, _) = recording_selector(true);
    selector.set_options(vec![opt("Red", "r"), opt("Blue", "b")]);
    assert_eq!(selector.display_caption(), "All");

    selector.toggle(&opt("Red", "r"));
    selector.toggle(&opt("Blue", "b"));
    assert_eq!(selector.display_caption(), "Red,Blue");
}

#[test]
fn display_caption_treats_empty_option_as_placeholder() {
    let (mut selector, _) = recording_selector(false);
    selector.set_options(vec![opt("All", ""), opt("Red", "r")]);

    // The synthetic empty option won the default fallback
    assert_eq!(selector.selection(), &[opt("All", "")]);
    assert_eq!(selector.display_caption(), "All");
}
