use barchart_rs::ChartError;
use barchart_rs::core::{BarLayout, PlotBand, ValueScale, project_bar_series};

fn layout() -> BarLayout {
    BarLayout::new(PlotBand::new(300.0, 220.0, 16.0, 20.0), 32.0).expect("valid bar layout")
}

#[test]
fn bars_are_evenly_spaced_with_equal_padding() {
    let layout = layout();
    assert_eq!(layout.horizontal_padding(3), 51.0);

    let bars = project_bar_series(&[10.0, 20.0, 5.0], ValueScale::from_zero(), layout);
    let lefts: Vec<f64> = bars.iter().map(|bar| bar.left_x).collect();
    let centers: Vec<f64> = bars.iter().map(|bar| bar.center_x).collect();
    assert_eq!(lefts, vec![51.0, 134.0, 217.0]);
    assert_eq!(centers, vec![67.0, 150.0, 233.0]);
}

#[test]
fn positive_bars_grow_up_from_plot_bottom() {
    let bars = project_bar_series(&[10.0, 20.0, 5.0], ValueScale::from_zero(), layout());
    let heights: Vec<f64> = bars.iter().map(|bar| bar.height).collect();
    let tops: Vec<f64> = bars.iter().map(|bar| bar.top_y).collect();
    assert_eq!(heights, vec![100.0, 200.0, 50.0]);
    assert_eq!(tops, vec![116.0, 16.0, 166.0]);
    assert!(bars.iter().all(|bar| bar.baseline_y == 216.0));

    assert_eq!(bars[0].top_marker(), (51.0, 116.0, 32.0, 2.0));
    assert_eq!(bars[0].value_label_anchor(), (67.0, 114.0));
    assert!(bars[0].contains(60.0, 200.0));
    assert!(!bars[0].contains(60.0, 100.0));
}

#[test]
fn mixed_bars_straddle_zero_line() {
    let bars = project_bar_series(&[-5.0, 5.0], ValueScale::default(), layout());

    assert_eq!(bars[0].baseline_y, 116.0);
    assert_eq!(bars[0].top_y, 116.0);
    assert_eq!(bars[0].height, 100.0);
    assert_eq!(bars[0].signed_height, -100.0);
    assert_eq!(bars[0].value_y(), 216.0);
    assert_eq!(bars[0].top_marker().1, 214.0);

    assert_eq!(bars[1].top_y, 16.0);
    assert_eq!(bars[1].value_y(), 16.0);
}

#[test]
fn empty_series_projects_nothing() {
    assert!(project_bar_series(&[], ValueScale::default(), layout()).is_empty());
}

#[test]
fn bar_layout_rejects_unusable_width() {
    let band = PlotBand::new(300.0, 220.0, 16.0, 20.0);
    for width in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        let err = BarLayout::new(band, width).expect_err("width must be rejected");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
