use approx::assert_abs_diff_eq;
use barchart_rs::core::{PlotBand, StackedBarLayout, project_stacked_bars, stacked_border};
use proptest::prelude::*;

fn layout(percentile: bool, squeeze: f64) -> StackedBarLayout {
    StackedBarLayout {
        band: PlotBand::new(300.0, 220.0, 15.0, 20.0),
        padding_right: 0.0,
        bar_width: 32.0,
        squeeze,
        percentile,
    }
}

#[test]
fn border_is_largest_group_sum() {
    let groups = vec![vec![10.0, 20.0], vec![30.0, 10.0]];
    assert_eq!(stacked_border(&groups, false), 40.0);
    assert_eq!(stacked_border(&groups, true), 100.0);
    assert_eq!(stacked_border(&[], false), 0.0);
}

#[test]
fn segments_stack_from_plot_bottom() {
    let groups = vec![vec![10.0, 20.0], vec![30.0, 10.0]];
    let stacks = project_stacked_bars(&groups, layout(false, 1.0));

    assert_eq!(stacks[0].x, 16.0);
    assert_eq!(stacks[1].x, 166.0);

    let first = &stacks[0];
    assert_eq!(first.segments[0].height, 50.0);
    assert_eq!(first.segments[0].y, 165.0);
    assert_eq!(first.segments[1].height, 100.0);
    assert_eq!(first.segments[1].y, 65.0);
    assert_eq!(first.total_height, 150.0);
    assert!(!first.segments[0].is_top);
    assert!(first.segments[1].is_top);

    let second = &stacks[1];
    assert_eq!(second.segments[0].height, 150.0);
    assert_eq!(second.segments[0].y, 65.0);
    assert_eq!(second.segments[1].height, 50.0);
    assert_eq!(second.segments[1].y, 15.0);
}

#[test]
fn segment_label_sits_inside_segment_top() {
    let stacks = project_stacked_bars(&[vec![10.0, 20.0]], layout(false, 1.0));
    assert_eq!(stacks[0].segments[0].value_label_anchor(), (39.0, 80.0));

    let small = project_stacked_bars(&[vec![1.0, 99.0]], layout(false, 1.0));
    let segment = small[0].segments[0];
    assert_eq!(segment.height, 2.0);
    assert_eq!(segment.value_label_anchor().1, segment.y + 7.0);
}

#[test]
fn percentile_mode_fills_each_bar() {
    let stacks = project_stacked_bars(&[vec![1.0, 3.0]], layout(true, 1.0));
    assert_eq!(stacks[0].segments[0].height, 50.0);
    assert_eq!(stacks[0].segments[1].height, 150.0);
    assert_eq!(stacks[0].total_height, 200.0);
}

#[test]
fn zero_group_draws_flat_segments() {
    let stacks = project_stacked_bars(&[vec![0.0, 0.0]], layout(false, 1.0));
    assert!(stacks[0].segments.iter().all(|segment| segment.height == 0.0));
    assert_eq!(stacks[0].total_height, 0.0);
}

#[test]
fn legend_squeeze_compresses_horizontal_position() {
    let stacks = project_stacked_bars(&[vec![10.0]], layout(false, 0.7));
    assert_abs_diff_eq!(stacks[0].x, 11.2, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn segment_heights_sum_to_stack_height(
        groups in prop::collection::vec(prop::collection::vec(0.0f64..1_000.0, 1..5), 1..8)
    ) {
        let stacks = project_stacked_bars(&groups, layout(false, 1.0));
        for stack in &stacks {
            let sum: f64 = stack.segments.iter().map(|segment| segment.height).sum();
            prop_assert!((sum - stack.total_height).abs() <= 1e-6);
            prop_assert!(stack.total_height <= 200.0 + 1e-6);
        }
    }
}
