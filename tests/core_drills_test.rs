use small_drills::{
    concatenate, day_type, filter_by_rating, format_string, most_expensive, process_value, Day,
    DayType, Product, RatedItem, Value,
};

#[test]
fn test_format_string_defaults_to_uppercase() {
    assert_eq!(format_string("hello", None), "HELLO");
    // Explicit true agrees with the default
    assert_eq!(format_string("hello", Some(true)), "HELLO");
    assert_eq!(format_string("hello", None), format_string("hello", Some(true)));
}

#[test]
fn test_format_string_lowercases_on_explicit_false() {
    assert_eq!(format_string("HeLLo WoRLD", Some(false)), "hello world");
}

#[test]
fn test_format_string_empty_input() {
    assert_eq!(format_string("", None), "");
    assert_eq!(format_string("", Some(false)), "");
}

#[test]
fn test_filter_by_rating_threshold_and_order() {
    let items = vec![
        RatedItem::new("first keeper", 4.5),
        RatedItem::new("dropped", 3.9),
        RatedItem::new("exactly four", 4.0),
        RatedItem::new("also dropped", 1.0),
        RatedItem::new("last keeper", 5.0),
    ];

    let kept = filter_by_rating(&items);

    let titles: Vec<&str> = kept.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["first keeper", "exactly four", "last keeper"]);
    assert!(kept.iter().all(|item| item.rating >= 4.0));
}

#[test]
fn test_filter_by_rating_does_not_mutate_input() {
    let items = vec![
        RatedItem::new("keeper", 4.2),
        RatedItem::new("dropped", 2.0),
    ];
    let before = items.clone();

    let _ = filter_by_rating(&items);

    assert_eq!(items, before);
}

#[test]
fn test_filter_by_rating_empty_input() {
    assert!(filter_by_rating(&[]).is_empty());
}

#[test]
fn test_concatenate_zero_sequences() {
    let combined: Vec<i32> = concatenate(Vec::<Vec<i32>>::new());
    assert!(combined.is_empty());
}

#[test]
fn test_concatenate_single_sequence_is_identity() {
    let combined = concatenate(vec![vec![7, 8, 9]]);
    assert_eq!(combined, vec![7, 8, 9]);
}

#[test]
fn test_concatenate_preserves_order_across_sequences() {
    let combined = concatenate(vec![vec![1, 2], vec![3], vec![], vec![4, 5]]);
    assert_eq!(combined, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_concatenate_is_generic_over_element_type() {
    let combined = concatenate(vec![
        vec!["a".to_string()],
        vec!["b".to_string(), "c".to_string()],
    ]);
    assert_eq!(combined, vec!["a", "b", "c"]);
}

#[test]
fn test_process_value_text_returns_length() {
    assert_eq!(process_value(Value::from("abc")), 3.0);
    assert_eq!(process_value(Value::from("")), 0.0);
}

#[test]
fn test_process_value_number_doubles() {
    assert_eq!(process_value(Value::from(5.0)), 10.0);
    assert_eq!(process_value(Value::from(-2.5)), -5.0);
}

#[test]
fn test_most_expensive_empty_returns_none() {
    assert!(most_expensive(&[]).is_none());
}

#[test]
fn test_most_expensive_picks_the_maximum() {
    let products = vec![
        Product::new("cheap", 3.0),
        Product::new("mid", 3.0),
        Product::new("pricey", 5.0),
    ];
    assert_eq!(most_expensive(&products).unwrap().name, "pricey");
}

#[test]
fn test_most_expensive_tie_keeps_earliest() {
    let products = vec![
        Product::new("first at the top", 10.0),
        Product::new("second at the top", 10.0),
        Product::new("below", 1.0),
    ];
    assert_eq!(most_expensive(&products).unwrap().name, "first at the top");
}

#[test]
fn test_day_type_exhaustive() {
    for day in Day::ALL {
        let expected = match day {
            Day::Saturday | Day::Sunday => DayType::Weekend,
            _ => DayType::Weekday,
        };
        assert_eq!(day_type(day), expected, "wrong classification for {:?}", day);
    }
}

#[test]
fn test_day_type_display_strings() {
    assert_eq!(day_type(Day::Saturday).to_string(), "Weekend");
    assert_eq!(day_type(Day::Sunday).to_string(), "Weekend");
    assert_eq!(day_type(Day::Wednesday).to_string(), "Weekday");
}
