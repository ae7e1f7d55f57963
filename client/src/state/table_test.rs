use super::*;

// =============================================================
// Helpers
// =============================================================

fn parcel(id: &str, name: &str, weight: f64, value: i64, delivery: Option<i64>) -> Parcel {
    Parcel {
        id: id.to_owned(),
        name: name.to_owned(),
        parcel_type: "others".to_owned(),
        weight,
        content_value_cents: value,
        delivery_cost_cents: delivery,
        session_id: None,
    }
}

fn numbered(count: usize) -> Vec<Parcel> {
    (0..count)
        .map(|i| {
            let id = i.to_string();
            parcel(&id, &format!("Parcel {id}"), 1.0, 100, None)
        })
        .collect()
}

fn ids(rows: &[&Parcel]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_by_name_leaves_matching_row() {
    let mut table = ParcelTable::new(vec![
        parcel("1", "A", 1.0, 100, None),
        parcel("2", "B", 2.0, 200, None),
    ]);
    table.set_name_filter("A");
    assert_eq!(ids(&table.visible_rows()), vec!["1"]);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let mut table = ParcelTable::new(vec![
        parcel("1", "Winter Coat", 1.0, 100, None),
        parcel("2", "Laptop", 2.0, 200, None),
        parcel("3", "coat hanger", 0.1, 10, None),
    ]);
    table.set_name_filter("COAT");
    assert_eq!(ids(&table.visible_rows()), vec!["1", "3"]);
}

#[test]
fn empty_filter_shows_everything() {
    let mut table = ParcelTable::new(numbered(3));
    table.set_name_filter("zzz");
    assert!(table.visible_rows().is_empty());
    table.set_name_filter("");
    assert_eq!(table.visible_rows().len(), 3);
}

#[test]
fn changing_filter_returns_to_first_page() {
    let mut table = ParcelTable::new(numbered(25));
    table.next_page();
    assert_eq!(table.page_index(), 1);
    table.set_name_filter("Parcel");
    assert_eq!(table.page_index(), 0);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn numeric_sort_toggles_ascending_then_descending_then_none() {
    let mut table = ParcelTable::new(vec![
        parcel("a", "A", 2.0, 100, None),
        parcel("b", "B", 0.5, 100, None),
        parcel("c", "C", 10.0, 100, None),
    ]);

    table.toggle_sort(ParcelColumn::Weight);
    assert_eq!(
        table.sort_direction(ParcelColumn::Weight),
        Some(SortDirection::Ascending)
    );
    assert_eq!(ids(&table.visible_rows()), vec!["b", "a", "c"]);

    table.toggle_sort(ParcelColumn::Weight);
    assert_eq!(
        table.sort_direction(ParcelColumn::Weight),
        Some(SortDirection::Descending)
    );
    assert_eq!(ids(&table.visible_rows()), vec!["c", "a", "b"]);

    table.toggle_sort(ParcelColumn::Weight);
    assert_eq!(table.sorting(), None);
    assert_eq!(ids(&table.visible_rows()), vec!["a", "b", "c"]);
}

#[test]
fn switching_sort_column_starts_ascending() {
    let mut table = ParcelTable::new(numbered(2));
    table.toggle_sort(ParcelColumn::Weight);
    table.toggle_sort(ParcelColumn::Weight);
    table.toggle_sort(ParcelColumn::ContentValue);
    assert_eq!(
        table.sorting(),
        Some((ParcelColumn::ContentValue, SortDirection::Ascending))
    );
    assert_eq!(table.sort_direction(ParcelColumn::Weight), None);
}

#[test]
fn delivery_sort_puts_unpriced_first_when_ascending() {
    let mut table = ParcelTable::new(vec![
        parcel("priced-high", "A", 1.0, 1, Some(900)),
        parcel("unpriced", "B", 1.0, 1, None),
        parcel("priced-low", "C", 1.0, 1, Some(100)),
    ]);
    table.toggle_sort(ParcelColumn::DeliveryCost);
    assert_eq!(
        ids(&table.visible_rows()),
        vec!["unpriced", "priced-low", "priced-high"]
    );
    table.toggle_sort(ParcelColumn::DeliveryCost);
    assert_eq!(
        ids(&table.visible_rows()),
        vec!["priced-high", "priced-low", "unpriced"]
    );
}

#[test]
fn text_sort_is_stable_for_ties() {
    let mut table = ParcelTable::new(vec![
        parcel("1", "Same", 1.0, 1, None),
        parcel("2", "Same", 1.0, 1, None),
        parcel("0", "Alpha", 1.0, 1, None),
    ]);
    table.toggle_sort(ParcelColumn::Name);
    assert_eq!(ids(&table.visible_rows()), vec!["0", "1", "2"]);
}

#[test]
fn sort_applies_after_filter() {
    let mut table = ParcelTable::new(vec![
        parcel("1", "box big", 9.0, 1, None),
        parcel("2", "bag", 1.0, 1, None),
        parcel("3", "box small", 3.0, 1, None),
    ]);
    table.set_name_filter("box");
    table.toggle_sort(ParcelColumn::Weight);
    assert_eq!(ids(&table.visible_rows()), vec!["3", "1"]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn twenty_five_rows_make_three_pages() {
    let table = ParcelTable::new(numbered(25));
    assert_eq!(table.page_count(), 3);
    assert_eq!(table.page_rows().len(), PAGE_SIZE);
}

#[test]
fn previous_disabled_on_first_and_next_disabled_on_last() {
    let mut table = ParcelTable::new(numbered(25));
    assert!(!table.can_previous_page());
    assert!(table.can_next_page());

    table.last_page();
    assert_eq!(table.page_index(), 2);
    assert!(!table.can_next_page());
    assert!(table.can_previous_page());
    assert_eq!(table.page_rows().len(), 5);
    assert_eq!(table.page_label(), "Page 3 of 3");

    table.next_page();
    assert_eq!(table.page_index(), 2);

    table.previous_page();
    assert_eq!(table.page_index(), 1);
    table.first_page();
    assert_eq!(table.page_index(), 0);
    table.previous_page();
    assert_eq!(table.page_index(), 0);
}

#[test]
fn empty_table_has_no_pages_but_labels_one() {
    let table = ParcelTable::default();
    assert_eq!(table.page_count(), 0);
    assert!(!table.can_next_page());
    assert!(!table.can_previous_page());
    assert_eq!(table.page_label(), "Page 1 of 1");
    assert!(table.page_rows().is_empty());
}

#[test]
fn set_rows_clamps_page_index_and_keeps_sort() {
    let mut table = ParcelTable::new(numbered(25));
    table.toggle_sort(ParcelColumn::Id);
    table.last_page();
    table.set_rows(numbered(4));
    assert_eq!(table.page_index(), 0);
    assert_eq!(
        table.sort_direction(ParcelColumn::Id),
        Some(SortDirection::Ascending)
    );
    assert_eq!(table.rows().len(), 4);
}

#[test]
fn set_rows_keeps_page_index_when_still_in_range() {
    let mut table = ParcelTable::new(numbered(25));
    table.next_page();
    table.set_rows(numbered(25));
    assert_eq!(table.page_index(), 1);
}

// =============================================================
// Columns
// =============================================================

#[test]
fn money_columns_are_formatted() {
    let p = parcel("42", "Laptop", 2.5, 150_000, None);
    assert_eq!(ParcelColumn::ContentValue.cell(&p), "1\u{a0}500,00\u{a0}₽");
    assert_eq!(ParcelColumn::DeliveryCost.cell(&p), "N/A");
    assert_eq!(ParcelColumn::Weight.cell(&p), "2.5");
    assert_eq!(ParcelColumn::Id.cell(&p), "42");
}

#[test]
fn headers_in_display_order() {
    let headers: Vec<&str> = ParcelColumn::ALL.iter().map(|c| c.header()).collect();
    assert_eq!(
        headers,
        vec!["ID", "Name", "Type", "Weight", "Value", "Delivery"]
    );
}
