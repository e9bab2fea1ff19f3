use gallerist::dataset::Dataset;
use gallerist::query::{FilterInstruction, SortDirection, SortInstruction};

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
                {"values": {"name": "plum", "color": "blue"}},
                {"values": {"name": "banana", "color": "yellow", "size": "medium"}}
            ]
        }"#,
    )
    .unwrap()
}

fn names(records: &[&gallerist::dataset::Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.value("name").unwrap().to_string())
        .collect()
}

#[test]
fn sort_direction_toggles_and_parses() {
    assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    assert_eq!(SortDirection::parse("ascending"), Some(SortDirection::Ascending));
    assert_eq!(SortDirection::parse("descending"), Some(SortDirection::Descending));
    assert_eq!(SortDirection::parse("sideways"), None);
}

#[test]
fn sort_instruction_requires_a_real_attribute() {
    assert_eq!(SortInstruction::from_values(&[], SortDirection::Ascending), None);
    assert_eq!(
        SortInstruction::from_values(&[String::new()], SortDirection::Ascending),
        None
    );

    let instruction = SortInstruction::from_values(&["size".to_string()], SortDirection::Descending).unwrap();
    assert_eq!(instruction.attribute_id, "size");
    assert_eq!(instruction.direction, SortDirection::Descending);
}

#[test]
fn filter_instruction_drops_the_empty_option_value() {
    let instruction = FilterInstruction::from_values("color", vec![String::new(), "red".to_string()]);
    assert_eq!(instruction.values, vec!["red"]);

    let cleared = FilterInstruction::from_values("color", vec![String::new()]);
    assert!(cleared.is_empty());
}

#[test]
fn select_without_instructions_returns_everything_in_order() {
    let dataset = dataset();
    let selected = dataset.select(None, None);
    assert_eq!(names(&selected), vec!["cherry", "apple", "plum", "banana"]);
}

#[test]
fn select_filters_by_any_of_the_instruction_values() {
    let dataset = dataset();
    let filter = FilterInstruction::from_values("color", vec!["red".to_string(), "yellow".to_string()]);
    let selected = dataset.select(Some(&filter), None);
    assert_eq!(names(&selected), vec!["cherry", "apple", "banana"]);
}

#[test]
fn select_with_empty_filter_passes_everything_through() {
    let dataset = dataset();
    let filter = FilterInstruction::from_values("color", vec![String::new()]);
    let selected = dataset.select(Some(&filter), None);
    assert_eq!(selected.len(), 4);
}

#[test]
fn select_sorts_ascending_and_descending() {
    let dataset = dataset();
    let ascending = SortInstruction {
        attribute_id: "name".to_string(),
        direction: SortDirection::Ascending,
    };
    assert_eq!(
        names(&dataset.select(None, Some(&ascending))),
        vec!["apple", "banana", "cherry", "plum"]
    );

    let descending = SortInstruction {
        attribute_id: "name".to_string(),
        direction: SortDirection::Descending,
    };
    assert_eq!(
        names(&dataset.select(None, Some(&descending))),
        vec!["plum", "cherry", "banana", "apple"]
    );
}

#[test]
fn records_missing_the_sort_attribute_go_last() {
    let dataset = dataset();
    let instruction = SortInstruction {
        attribute_id: "size".to_string(),
        direction: SortDirection::Descending,
    };
    let selected = dataset.select(None, Some(&instruction));
    // plum has no size and must trail even in descending order
    assert_eq!(names(&selected), vec!["cherry", "apple", "banana", "plum"]);
}

#[test]
fn sort_is_stable_for_equal_values() {
    let dataset = dataset();
    let instruction = SortInstruction {
        attribute_id: "color".to_string(),
        direction: SortDirection::Ascending,
    };
    let selected = dataset.select(None, Some(&instruction));
    // cherry and apple share "red" and keep their dataset order
    assert_eq!(names(&selected), vec!["plum", "cherry", "apple", "banana"]);
}

#[test]
fn filter_and_sort_compose() {
    let dataset = dataset();
    let filter = FilterInstruction::from_values("color", vec!["red".to_string()]);
    let sort = SortInstruction {
        attribute_id: "name".to_string(),
        direction: SortDirection::Ascending,
    };
    let selected = dataset.select(Some(&filter), Some(&sort));
    assert_eq!(names(&selected), vec!["apple", "cherry"]);
}
