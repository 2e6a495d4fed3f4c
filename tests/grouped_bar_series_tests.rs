use barchart_rs::core::grouped_bar_series::group_span;
use barchart_rs::core::{GroupedBarLayout, PlotBand, grouped_border, project_grouped_bars};

fn layout(percentile: bool) -> GroupedBarLayout {
    GroupedBarLayout {
        band: PlotBand::new(300.0, 220.0, 15.0, 20.0),
        padding_right: 32.0,
        bar_width: 32.0,
        item_spacing: 3.0,
        squeeze: 1.0,
        percentile,
    }
}

#[test]
fn border_is_largest_single_value() {
    let groups = vec![vec![10.0, 20.0], vec![5.0, 40.0]];
    assert_eq!(grouped_border(&groups, false), 40.0);
    assert_eq!(grouped_border(&groups, true), 100.0);
}

#[test]
fn span_counts_bars_and_gaps() {
    assert_eq!(group_span(32.0, 3.0, 1), 35.0);
    assert_eq!(group_span(32.0, 3.0, 2), 73.0);
    assert_eq!(group_span(32.0, 3.0, 0), 0.0);
}

#[test]
fn bars_sit_side_by_side_around_group_center() {
    let groups = vec![vec![10.0, 20.0], vec![5.0, 40.0]];
    let projected = project_grouped_bars(&groups, layout(false));

    let first = &projected[0];
    assert_eq!(first.center_x, 64.0);
    assert_eq!(first.bars[0].x, 27.5);
    assert_eq!(first.bars[1].x, 62.5);
    assert_eq!(first.bars[0].height, 51.0);
    assert_eq!(first.bars[0].y, 164.0);
    assert_eq!(first.bars[1].height, 101.0);
    assert_eq!(first.bars[1].y, 114.0);
    assert!(first.bars[1].is_last);
    assert_eq!(first.bars[0].value_label_anchor(), (50.5, 179.0));

    let second = &projected[1];
    assert_eq!(second.center_x, 198.0);
    assert_eq!(second.bars[1].height, 201.0);
    assert_eq!(second.bars[1].y, 14.0);
}

#[test]
fn zero_values_keep_a_visible_sliver() {
    let projected = project_grouped_bars(&[vec![0.0, 0.0]], layout(false));
    assert!(projected[0].bars.iter().all(|bar| bar.height == 1.0));
}

#[test]
fn percentile_mode_divides_by_group_sum() {
    let projected = project_grouped_bars(&[vec![1.0, 3.0]], layout(true));
    assert_eq!(projected[0].bars[0].height, 51.0);
    assert_eq!(projected[0].bars[1].height, 151.0);
}
