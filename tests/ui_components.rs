use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gallerist::dataset::Dataset;
use gallerist::query::SortDirection;
use gallerist::ui::components::{DropdownFilter, DropdownSort, GalleryView};
use gallerist::ui::core::{Action, Component, FocusTarget};
use gallerist::ui::LayoutManager;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn dataset() -> Dataset {
    serde_json::from_str(
        r#"{
            "attributes": [
                {"id": "name", "caption": "Name", "filterable": true, "sortable": true},
                {"id": "color", "caption": "Color", "filterable": true},
                {"id": "size", "caption": "Size", "sortable": true}
            ],
            "records": [
                {"values": {"name": "cherry", "color": "red", "size": "small"}},
                {"values": {"name": "apple", "color": "red", "size": "medium"}},
                {"values": {"name": "plum", "color": "blue", "size": "small"}}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn focus_order_cycles_through_all_widgets() {
    let mut focus = FocusTarget::Filter;
    focus = focus.next();
    assert_eq!(focus, FocusTarget::Sort);
    focus = focus.next();
    assert_eq!(focus, FocusTarget::Gallery);
    focus = focus.next();
    assert_eq!(focus, FocusTarget::Filter);

    assert_eq!(FocusTarget::Filter.previous(), FocusTarget::Gallery);
    assert_eq!(FocusTarget::Gallery.previous(), FocusTarget::Sort);
}

#[test]
fn main_layout_reserves_header_and_status_rows() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 100, 40), 3);
    assert_eq!(areas.len(), 3);
    assert_eq!(areas[0].height, 3);
    assert_eq!(areas[1].height, 36);
    assert_eq!(areas[2].height, 1);
}

#[test]
fn header_layout_splits_between_the_two_dropdowns() {
    let areas = LayoutManager::header_layout(Rect::new(0, 0, 100, 3));
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].width + areas[1].width, 100);
}

#[test]
fn filter_dropdown_dispatches_its_default_selection() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut filter = DropdownFilter::new("color", true, "All", "red,missing,blue", tx);
    filter.update_options(&dataset());

    match rx.try_recv().unwrap() {
        Action::FilterChanged(values) => assert_eq!(values, vec!["red", "blue"]),
        other => panic!("expected FilterChanged, got {other:?}"),
    }
    assert!(rx.try_recv().is_err(), "default application dispatches exactly once");
}

#[test]
fn filter_dropdown_toggle_dispatches_the_new_selection() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut filter = DropdownFilter::new("color", true, "All", "red", tx);
    filter.update_options(&dataset());
    let _ = rx.try_recv(); // default application

    filter.handle_key_events(key(KeyCode::Enter));
    assert!(filter.is_open());

    // Cursor opens on the selected option ("red"); toggle it off
    filter.handle_key_events(key(KeyCode::Char(' ')));
    match rx.try_recv().unwrap() {
        Action::FilterChanged(values) => assert!(values.is_empty()),
        other => panic!("expected FilterChanged, got {other:?}"),
    }

    // Multi-select keeps the popup open between toggles
    assert!(filter.is_open());
    filter.handle_key_events(key(KeyCode::Esc));
    assert!(!filter.is_open());
}

#[test]
fn single_select_filter_gets_the_synthetic_empty_option() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut filter = DropdownFilter::new("color", false, "All", "", tx);
    filter.update_options(&dataset());

    // No default matched, so the fallback picked the empty option
    match rx.try_recv().unwrap() {
        Action::FilterChanged(values) => assert_eq!(values, vec![String::new()]),
        other => panic!("expected FilterChanged, got {other:?}"),
    }
    assert_eq!(filter.selection()[0].caption, "All");

    // Picking a real value closes the popup
    filter.handle_key_events(key(KeyCode::Enter));
    filter.handle_key_events(key(KeyCode::Down));
    filter.handle_key_events(key(KeyCode::Enter));
    assert!(!filter.is_open());
    match rx.try_recv().unwrap() {
        Action::FilterChanged(values) => assert_eq!(values, vec!["red"]),
        other => panic!("expected FilterChanged, got {other:?}"),
    }
}

#[test]
fn sort_dropdown_dispatches_its_default_selection() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut sort = DropdownSort::new("(none)", "name", SortDirection::Ascending, tx);
    sort.update_options(&dataset());

    match rx.try_recv().unwrap() {
        Action::SortSelectionChanged(values) => assert_eq!(values, vec!["name"]),
        other => panic!("expected SortSelectionChanged, got {other:?}"),
    }

    let instruction = sort.current_instruction().unwrap();
    assert_eq!(instruction.attribute_id, "name");
    assert_eq!(instruction.direction, SortDirection::Ascending);
}

#[test]
fn sort_dropdown_direction_toggle_emits_an_instruction() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut sort = DropdownSort::new("(none)", "size", SortDirection::Ascending, tx);
    sort.update_options(&dataset());
    let _ = rx.try_recv(); // default application

    match sort.handle_key_events(key(KeyCode::Char('d'))) {
        Action::SortChanged(Some(instruction)) => {
            assert_eq!(instruction.attribute_id, "size");
            assert_eq!(instruction.direction, SortDirection::Descending);
        }
        other => panic!("expected SortChanged, got {other:?}"),
    }
    assert_eq!(sort.direction(), SortDirection::Descending);
}

#[test]
fn sort_dropdown_clears_via_the_empty_option() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut sort = DropdownSort::new("(none)", "name", SortDirection::Ascending, tx);
    sort.update_options(&dataset());
    let _ = rx.try_recv();

    // Open and walk back up to the "(none)" entry at the top
    sort.handle_key_events(key(KeyCode::Enter));
    sort.handle_key_events(key(KeyCode::Char('k')));
    sort.handle_key_events(key(KeyCode::Enter));
    assert!(!sort.is_open(), "single-select closes on pick");

    match rx.try_recv().unwrap() {
        Action::SortSelectionChanged(values) => assert_eq!(values, vec![String::new()]),
        other => panic!("expected SortSelectionChanged, got {other:?}"),
    }
    assert!(sort.current_instruction().is_none());
}

#[test]
fn gallery_navigation_clamps_at_both_ends() {
    let dataset = dataset();
    let mut gallery = GalleryView::new(4, false, "nothing here");
    let records = dataset.records.clone();
    gallery.update_data(records, dataset.attributes.clone(), dataset.records.len());

    assert_eq!(gallery.visible_count(), 3);
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("cherry"));

    gallery.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("cherry"));

    gallery.handle_key_events(key(KeyCode::Char('j')));
    gallery.handle_key_events(key(KeyCode::Char('j')));
    gallery.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("plum"));

    gallery.handle_key_events(key(KeyCode::Char('g')));
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("cherry"));
    gallery.handle_key_events(key(KeyCode::Char('G')));
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("plum"));
}

#[test]
fn gallery_cursor_survives_shrinking_data() {
    let dataset = dataset();
    let mut gallery = GalleryView::new(4, false, "nothing here");
    gallery.update_data(dataset.records.clone(), dataset.attributes.clone(), 3);
    gallery.handle_key_events(key(KeyCode::Char('G')));

    // A narrower filter result clamps the cursor instead of resetting it
    gallery.update_data(dataset.records[..1].to_vec(), dataset.attributes.clone(), 3);
    assert_eq!(gallery.selected_record().unwrap().value("name"), Some("cherry"));
}

#[test]
fn empty_gallery_has_no_selection() {
    let mut gallery = GalleryView::new(4, false, "nothing here");
    gallery.update_data(Vec::new(), Vec::new(), 0);
    assert_eq!(gallery.visible_count(), 0);
    assert!(gallery.selected_record().is_none());
    gallery.handle_key_events(key(KeyCode::Char('j')));
    assert!(gallery.selected_record().is_none());
}
