use tuigrid::{sorted_view, CellValue, Column, RowData, SortDirection, SortState};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: &'static str,
    email: &'static str,
    age: u32,
}

impl RowData for User {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "email" => self.email.into(),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

fn users() -> Vec<User> {
    vec![
        User { name: "Charlie", email: "charlie@example.com", age: 35 },
        User { name: "alice", email: "alice@example.com", age: 28 },
        User { name: "Bob", email: "bob@example.com", age: 28 },
    ]
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(true),
    ]
}

fn names(view: &[User]) -> Vec<&'static str> {
    view.iter().map(|u| u.name).collect()
}

// ============================================================================
// Display order
// ============================================================================

#[test]
fn test_no_sort_is_identity() {
    let data = users();
    let view = sorted_view(&data, &columns(), &SortState::new());
    assert_eq!(view, data);
}

#[test]
fn test_ascending_numeric_sort() {
    let data = users();
    let mut sort = SortState::new();
    sort.toggle("age");

    let view = sorted_view(&data, &columns(), &sort);
    assert_eq!(names(&view), vec!["alice", "Bob", "Charlie"]);
}

#[test]
fn test_descending_numeric_sort() {
    let data = users();
    let mut sort = SortState::new();
    sort.toggle("age");
    sort.toggle("age");

    let view = sorted_view(&data, &columns(), &sort);
    assert_eq!(names(&view), vec!["Charlie", "alice", "Bob"]);
}

#[test]
fn test_case_insensitive_text_sort() {
    #[derive(Debug, Clone)]
    struct Fruit(&'static str);
    impl RowData for Fruit {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "name" => self.0.into(),
                _ => CellValue::Empty,
            }
        }
    }

    let data = vec![Fruit("banana"), Fruit("Apple"), Fruit("cherry")];
    let cols = vec![Column::<Fruit>::new("name", "Name").sortable(true)];
    let mut sort = SortState::new();
    sort.toggle("name");

    let view = sorted_view(&data, &cols, &sort);
    let got: Vec<_> = view.iter().map(|f| f.0).collect();
    assert_eq!(got, vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_stable_for_equal_keys() {
    // alice and Bob are both 28; their relative order must survive sorting.
    let data = users();
    let mut sort = SortState::new();
    sort.toggle("age");

    let view = sorted_view(&data, &columns(), &sort);
    assert_eq!(names(&view), vec!["alice", "Bob", "Charlie"]);

    // Sorting the already-sorted view again yields the same ordering.
    let again = sorted_view(&view, &columns(), &sort);
    assert_eq!(names(&again), names(&view));
}

#[test]
fn test_accessor_overrides_field_lookup() {
    // Sort by email domain length rather than the field value.
    let cols = vec![Column::<User>::new("email", "Email")
        .sortable(true)
        .accessor(|u| CellValue::Number(u.email.len() as f64))];
    let mut sort = SortState::new();
    sort.toggle("email");

    let view = sorted_view(&users(), &cols, &sort);
    assert_eq!(names(&view), vec!["Bob", "alice", "Charlie"]);
}

#[test]
fn test_unknown_sort_column_falls_back_to_input_order() {
    let data = users();
    let mut sort = SortState::new();
    sort.toggle("age");

    // Columns no longer contain "age".
    let cols = vec![Column::<User>::new("name", "Name").sortable(true)];
    let view = sorted_view(&data, &cols, &sort);
    assert_eq!(view, data);
}

#[test]
fn test_missing_field_sorts_first() {
    let data = users();
    let cols = vec![Column::<User>::new("nickname", "Nickname")
        .sortable(true)
        .accessor(|u| {
            if u.name == "Bob" {
                CellValue::Empty
            } else {
                u.name.into()
            }
        })];
    let mut sort = SortState::new();
    sort.toggle("nickname");

    let view = sorted_view(&data, &cols, &sort);
    assert_eq!(names(&view)[0], "Bob");
}

// ============================================================================
// Header-click transitions
// ============================================================================

#[test]
fn test_three_click_cycle() {
    let mut sort = SortState::new();
    assert!(sort.active().is_none());

    sort.toggle("name");
    let spec = sort.active().unwrap();
    assert_eq!(spec.key, "name");
    assert_eq!(spec.direction, SortDirection::Ascending);

    sort.toggle("name");
    let spec = sort.active().unwrap();
    assert_eq!(spec.direction, SortDirection::Descending);

    sort.toggle("name");
    assert!(sort.active().is_none());
}

#[test]
fn test_three_clicks_restore_original_order() {
    let data = users();
    let cols = columns();
    let mut sort = SortState::new();
    for _ in 0..3 {
        sort.toggle("name");
    }
    assert_eq!(sorted_view(&data, &cols, &sort), data);
}

#[test]
fn test_click_on_other_column_restarts_ascending() {
    let mut sort = SortState::new();
    sort.toggle("name");
    sort.toggle("name");
    assert_eq!(sort.active().unwrap().direction, SortDirection::Descending);

    sort.toggle("age");
    let spec = sort.active().unwrap();
    assert_eq!(spec.key, "age");
    assert_eq!(spec.direction, SortDirection::Ascending);
}

#[test]
fn test_indicator_follows_active_sort() {
    let mut sort = SortState::new();
    assert_eq!(sort.indicator("name"), None);

    sort.toggle("name");
    assert_eq!(sort.indicator("name"), Some("↑"));
    assert_eq!(sort.indicator("age"), None);

    sort.toggle("name");
    assert_eq!(sort.indicator("name"), Some("↓"));

    sort.toggle("name");
    assert_eq!(sort.indicator("name"), None);
}
