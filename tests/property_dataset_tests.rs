use brewchart::api::{ChartView, ChartViewConfig};
use brewchart::core::{Dataset, Period, SeriesKey, Viewport};
use brewchart::render::NullRenderer;
use brewchart::theme::ThemeContext;
use proptest::prelude::*;

fn build_dataset(rows: &[(u64, u64, u64)]) -> Dataset {
    let periods: Vec<Period> = rows
        .iter()
        .enumerate()
        .map(|(index, (espresso, latte, tea))| {
            Period::new(format!("P{index:02}"))
                .with_amount(SeriesKey::Espresso, *espresso)
                .with_amount(SeriesKey::Latte, *latte)
                .with_amount(SeriesKey::Tea, *tea)
        })
        .collect();
    Dataset::new(periods).expect("generated dataset is valid")
}

proptest! {
    #[test]
    fn total_matches_the_exhaustive_sum(
        rows in prop::collection::vec((0u64..10_000, 0u64..10_000, 0u64..10_000), 0..24)
    ) {
        let dataset = build_dataset(&rows);

        let expected: u64 = rows.iter().map(|(e, l, t)| e + l + t).sum();
        prop_assert_eq!(dataset.total(), expected);
        prop_assert_eq!(dataset.is_empty(), rows.is_empty());

        let expected_max = rows
            .iter()
            .flat_map(|(e, l, t)| [*e, *l, *t])
            .max();
        prop_assert_eq!(dataset.max_amount(), expected_max);
    }

    #[test]
    fn every_generated_dataset_renders_one_bar_per_cell_with_monotone_heights(
        rows in prop::collection::vec((0u64..10_000, 0u64..10_000, 0u64..10_000), 1..16)
    ) {
        let dataset = build_dataset(&rows);
        let config = ChartViewConfig::new(Viewport::new(1280, 720));
        let view = ChartView::with_dataset(
            NullRenderer::default(),
            config,
            dataset,
            ThemeContext::light(),
        )
        .expect("view init");

        let plot = view.plot_scene().expect("plot scene");
        prop_assert_eq!(plot.bars.len(), rows.len() * SeriesKey::count());

        for a in &plot.bars {
            for b in &plot.bars {
                if a.amount > b.amount {
                    prop_assert!(a.height > b.height);
                }
                if a.amount == b.amount {
                    prop_assert!((a.height - b.height).abs() <= 1e-9);
                }
            }
        }
    }

    #[test]
    fn label_lookup_round_trips_by_index(
        rows in prop::collection::vec((0u64..100, 0u64..100, 0u64..100), 1..24)
    ) {
        let dataset = build_dataset(&rows);

        for index in 0..rows.len() {
            let label = dataset.label_at(index).expect("label in range");
            prop_assert!(dataset.contains_label(label));
        }
        prop_assert_eq!(dataset.label_at(rows.len()), None);
    }
}
