use barchart_rs::core::{BarLayout, PlotBand, ValueScale, project_bar_series};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scaler_is_never_zero(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..32),
        from_zero in any::<bool>(),
    ) {
        let scaler = ValueScale::new(from_zero, None).scaler(&values);
        prop_assert!(scaler > 0.0);
        prop_assert!(scaler.is_finite());
    }

    #[test]
    fn tallest_bar_fills_plot_when_scaled_from_zero(
        values in prop::collection::vec(0.1f64..1_000.0, 1..32),
        height in 10.0f64..2_000.0,
    ) {
        let scale = ValueScale::from_zero();
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        prop_assert!((scale.bar_height(max, &values, height) - height).abs() <= 1e-9 * height);
    }

    #[test]
    fn zero_values_sit_on_baseline_in_mixed_data(
        negative in -1_000.0f64..-0.1,
        positive in 0.1f64..1_000.0,
    ) {
        let values = [negative, 0.0, positive];
        let layout = BarLayout::new(PlotBand::new(400.0, 300.0, 16.0, 20.0), 24.0)
            .expect("valid bar layout");
        let bars = project_bar_series(&values, ValueScale::default(), layout);
        prop_assert_eq!(bars[1].height, 0.0);
        prop_assert_eq!(bars[1].top_y, bars[1].baseline_y);
        prop_assert!(bars[0].top_y >= bars[1].baseline_y - 1e-9);
        prop_assert!(bars[2].top_y <= bars[2].baseline_y + 1e-9);
    }
}
