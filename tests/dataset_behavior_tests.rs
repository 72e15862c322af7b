use brewchart::ChartError;
use brewchart::core::{Dataset, Period, SeriesKey};

fn full_period(label: &str, espresso: u64, latte: u64, tea: u64) -> Period {
    Period::new(label)
        .with_amount(SeriesKey::Espresso, espresso)
        .with_amount(SeriesKey::Latte, latte)
        .with_amount(SeriesKey::Tea, tea)
}

#[test]
fn total_sums_every_amount_across_periods_and_series() {
    let dataset = Dataset::new(vec![
        full_period("January", 186, 80, 120),
        full_period("February", 305, 200, 150),
    ])
    .expect("valid dataset");

    assert_eq!(dataset.total(), 1_041);
    assert_eq!(dataset.max_amount(), Some(305));
}

#[test]
fn default_table_matches_the_published_figures() {
    let dataset = Dataset::default_beverages();
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.total(), 3_204);
    assert_eq!(dataset.label_at(0), Some("January"));
    assert_eq!(dataset.label_at(5), Some("June"));
    assert!(dataset.contains_label("March"));
    assert!(!dataset.contains_label("July"));

    let february = &dataset.periods()[1];
    assert_eq!(february.amount(SeriesKey::Espresso), 305);
    assert_eq!(february.amount(SeriesKey::Latte), 200);
    assert_eq!(february.amount(SeriesKey::Tea), 150);
}

#[test]
fn duplicate_labels_are_rejected() {
    let err = Dataset::new(vec![
        full_period("January", 1, 2, 3),
        full_period("January", 4, 5, 6),
    ])
    .expect_err("duplicate labels must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn missing_series_coverage_is_rejected() {
    let incomplete = Period::new("January").with_amount(SeriesKey::Espresso, 186);
    let err = Dataset::new(vec![incomplete]).expect_err("missing series must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_labels_are_rejected() {
    let err = Dataset::new(vec![full_period("", 1, 2, 3)]).expect_err("empty label must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_dataset_is_valid_and_has_no_maximum() {
    let dataset = Dataset::new(Vec::new()).expect("empty dataset is valid");
    assert!(dataset.is_empty());
    assert_eq!(dataset.max_amount(), None);
    assert_eq!(dataset.total(), 0);
}
