use barchart_rs::api::{
    AxisOptions, BarChartData, BarDataset, ChartOptions, HorizontalBarChartData,
    StackedBarChartData,
};
use barchart_rs::core::{AxisLabel, Viewport};
use barchart_rs::render::{
    CanvasLayerKind, Color, NullRenderer, Paint, PanelFrame, PanelKind, RenderFrame, TextHAlign,
};
use barchart_rs::{
    BarChart, Chart, ChartConfig, ChartError, HorizontalBarChart, MultiBarChart, StackedBarChart,
};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn labels(names: &[&str]) -> Vec<AxisLabel> {
    names.iter().map(|name| AxisLabel::from(*name)).collect()
}

fn layer_texts(panel: &PanelFrame, kind: CanvasLayerKind) -> Vec<String> {
    panel
        .layer(kind)
        .map(|layer| layer.texts.iter().map(|text| text.text.clone()).collect())
        .unwrap_or_default()
}

fn layer_rect_count(panel: &PanelFrame, kind: CanvasLayerKind) -> usize {
    panel.layer(kind).map_or(0, |layer| layer.rects.len())
}

fn panel(frame: &RenderFrame, kind: PanelKind) -> &PanelFrame {
    frame.panel(kind).expect("panel present")
}

fn bar_chart() -> BarChart {
    BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::new(labels(&["A", "B", "C"]), vec![10.0, 20.0, 5.0]),
        ChartConfig::default(),
    )
    .expect("bar chart")
    .with_axis_options(AxisOptions::default().with_from_zero(true))
    .expect("axis options")
}

fn grouped_data() -> StackedBarChartData {
    StackedBarChartData::new(labels(&["Q1", "Q2"]), vec![vec![10.0, 20.0], vec![30.0, 10.0]])
        .with_legend(vec!["North".to_owned(), "South".to_owned()])
        .with_bar_colors(vec![RED, BLUE])
}

#[test]
fn bar_chart_splits_value_axis_and_plot_panels() {
    let frame = bar_chart().build_render_frame().expect("frame");

    assert_eq!(frame.panels.len(), 2);
    let axis = panel(&frame, PanelKind::ValueAxis);
    assert_eq!((axis.x, axis.width, axis.height), (0.0, 64.0, 220.0));
    let plot = panel(&frame, PanelKind::Plot);
    assert_eq!((plot.x, plot.width, plot.height), (64.0, 300.0, 220.0));

    assert_eq!(
        frame.gradients.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["backgroundGradient", "fillShadowGradientFrom"]
    );
    assert_eq!(layer_rect_count(axis, CanvasLayerKind::Background), 1);
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Background), 1);
}

#[test]
fn bar_chart_draws_scaled_bars_and_markers() {
    let frame = bar_chart().build_render_frame().expect("frame");
    let plot = panel(&frame, PanelKind::Plot);

    let series = plot.layer(CanvasLayerKind::Series).expect("series layer");
    assert_eq!(series.rects.len(), 3);
    let first = &series.rects[0];
    assert_eq!((first.x, first.y, first.width, first.height), (51.0, 116.0, 32.0, 100.0));
    assert_eq!(first.fill, Paint::gradient("fillShadowGradientFrom"));
    assert_eq!(series.rects[1].y, 16.0);

    let overlay = plot.layer(CanvasLayerKind::Overlay).expect("overlay layer");
    assert_eq!(overlay.rects.len(), 3);
    assert_eq!((overlay.rects[0].y, overlay.rects[0].height), (116.0, 2.0));
    assert!(overlay.texts.is_empty());

    let grid_ys: Vec<f64> = plot
        .layer(CanvasLayerKind::Grid)
        .expect("grid layer")
        .lines
        .iter()
        .map(|line| line.y1)
        .collect();
    assert_eq!(grid_ys, vec![16.0, 66.0, 116.0, 166.0, 216.0]);
}

#[test]
fn bar_chart_labels_both_axes() {
    let frame = bar_chart().build_render_frame().expect("frame");
    let axis = panel(&frame, PanelKind::ValueAxis);
    let plot = panel(&frame, PanelKind::Plot);

    assert_eq!(
        layer_texts(axis, CanvasLayerKind::Labels),
        vec!["0.00", "5.00", "10.00", "15.00", "20.00"]
    );
    let value_labels = &axis.layer(CanvasLayerKind::Labels).expect("labels").texts;
    assert!(value_labels.iter().all(|text| text.x == 52.0));
    assert!(value_labels.iter().all(|text| text.h_align == TextHAlign::Right));
    assert_eq!(value_labels[0].y, 216.0);
    assert_eq!(value_labels[4].y, 16.0);

    let category = &plot.layer(CanvasLayerKind::Labels).expect("labels").texts;
    let xs: Vec<f64> = category.iter().map(|text| text.x).collect();
    assert_eq!(layer_texts(plot, CanvasLayerKind::Labels), vec!["A", "B", "C"]);
    assert_eq!(xs, vec![67.0, 150.0, 233.0]);
    assert!(category.iter().all(|text| text.y == 234.0));
}

#[test]
fn bar_chart_counts_match_null_renderer() {
    let mut chart = bar_chart();
    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("render");

    assert_eq!(renderer.last_rect_count, 8);
    assert_eq!(renderer.last_text_count, 8);
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_gradient_count, 2);
}

#[test]
fn bar_chart_options_toggle_frame_parts() {
    let options = ChartOptions::default()
        .with_horizontal_labels(false)
        .with_inner_lines(false)
        .with_outer_lines(true)
        .with_bar_tops(false)
        .with_values_on_top_of_bars(true);
    let chart = bar_chart().with_options(options).expect("options");
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.panels.len(), 1);
    let plot = panel(&frame, PanelKind::Plot);
    assert_eq!((plot.x, plot.width), (0.0, 364.0));
    assert_eq!(plot.layer(CanvasLayerKind::Grid).expect("grid").lines.len(), 2);
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Overlay), 0);
    assert_eq!(layer_texts(plot, CanvasLayerKind::Overlay), vec!["10", "20", "5"]);
}

#[test]
fn bar_chart_applies_affixes_and_hidden_points() {
    let axis = AxisOptions::default()
        .with_from_zero(true)
        .with_y_axis_affixes("$", "k")
        .with_x_axis_affixes("<", ">")
        .with_hidden_points(vec![1]);
    let chart = bar_chart()
        .with_axis_options(axis)
        .expect("axis options");
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(
        layer_texts(panel(&frame, PanelKind::ValueAxis), CanvasLayerKind::Labels)[1],
        "$5.00k"
    );
    assert_eq!(
        layer_texts(panel(&frame, PanelKind::Plot), CanvasLayerKind::Labels),
        vec!["<A>", "<C>"]
    );
}

#[test]
fn custom_bar_colors_get_their_own_gradients() {
    let chart = BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::new(Vec::new(), vec![3.0, 6.0]).with_bar_colors(vec![RED]),
        ChartConfig::default(),
    )
    .expect("bar chart")
    .with_options(ChartOptions::default().with_custom_bar_color_from_data(true))
    .expect("options");
    let frame = chart.build_render_frame().expect("frame");

    assert!(frame.gradients.contains_key("customColor_0_0"));
    let series = &panel(&frame, PanelKind::Plot)
        .layer(CanvasLayerKind::Series)
        .expect("series")
        .rects;
    assert_eq!(series[0].fill, Paint::gradient("customColor_0_0"));
    assert_eq!(series[1].fill, Paint::gradient("fillShadowGradientFrom"));
}

#[test]
fn solid_background_replaces_gradient_fill() {
    let chart = BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::new(Vec::new(), vec![1.0]),
        ChartConfig::default().with_background_color(Color::WHITE),
    )
    .expect("bar chart");
    let frame = chart.build_render_frame().expect("frame");
    let background = &panel(&frame, PanelKind::Plot)
        .layer(CanvasLayerKind::Background)
        .expect("background")
        .rects[0];
    assert_eq!(background.fill, Paint::Solid(Color::WHITE));
}

#[test]
fn stacked_chart_stacks_series_with_legend() {
    let chart = StackedBarChart::new(
        Viewport::new(364.0, 220.0),
        grouped_data(),
        ChartConfig::default(),
    )
    .expect("stacked chart");
    let frame = chart.build_render_frame().expect("frame");

    let axis = panel(&frame, PanelKind::ValueAxis);
    assert_eq!(layer_rect_count(axis, CanvasLayerKind::Background), 0);
    assert_eq!(
        layer_texts(axis, CanvasLayerKind::Labels),
        vec!["0.00", "10.00", "20.00", "30.00", "40.00"]
    );

    let plot = panel(&frame, PanelKind::Plot);
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Background), 0);
    let series = &plot.layer(CanvasLayerKind::Series).expect("series").rects;
    assert_eq!(series.len(), 4);
    assert_eq!(series[0].fill, Paint::Solid(RED));
    assert_eq!(series[1].fill, Paint::Solid(BLUE));
    assert_eq!(layer_texts(plot, CanvasLayerKind::Overlay), vec!["10", "20", "30", "10"]);

    let legend = plot.layer(CanvasLayerKind::Legend).expect("legend");
    assert_eq!(legend.rects.len(), 2);
    assert_eq!(layer_texts(plot, CanvasLayerKind::Legend), vec!["North", "South"]);
    assert_eq!(legend.rects[0].corner_radius, 8.0);
    assert!(!frame.gradients.is_empty());
}

#[test]
fn stacked_chart_hides_values_and_legend_when_asked() {
    let chart = StackedBarChart::new(
        Viewport::new(364.0, 220.0),
        grouped_data(),
        ChartConfig::default(),
    )
    .expect("stacked chart")
    .with_options(ChartOptions::default().with_hide_legend(true))
    .expect("options");
    let frame = chart.build_render_frame().expect("frame");
    let plot = panel(&frame, PanelKind::Plot);

    assert!(layer_texts(plot, CanvasLayerKind::Overlay).is_empty());
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Legend), 0);
    let stacks = chart.bar_geometry().expect("geometry");
    assert_eq!(stacks[0].x, 16.0);
}

#[test]
fn stacked_chart_squeezes_labels_with_their_bars() {
    let chart = StackedBarChart::new(
        Viewport::new(364.0, 220.0),
        grouped_data(),
        ChartConfig::default().with_padding(15.0, 40.0),
    )
    .expect("stacked chart");
    let frame = chart.build_render_frame().expect("frame");

    let stacks = chart.bar_geometry().expect("geometry");
    assert!((stacks[0].x - 39.2).abs() < 1e-9);
    assert!((stacks[1].x - 130.2).abs() < 1e-9);

    let category = &panel(&frame, PanelKind::Plot)
        .layer(CanvasLayerKind::Labels)
        .expect("labels")
        .texts;
    assert_eq!(category.len(), 2);
    assert!((category[0].x - 51.12).abs() < 1e-9);
    assert!((category[1].x - 143.42).abs() < 1e-9);
}

#[test]
fn multi_bar_chart_places_series_side_by_side() {
    let chart = MultiBarChart::new(
        Viewport::new(364.0, 220.0),
        grouped_data(),
        ChartConfig::default().with_bar_radius(4.0),
    )
    .expect("multi bar chart")
    .with_options(ChartOptions::default().with_hide_legend(true))
    .expect("options");
    let frame = chart.build_render_frame().expect("frame");

    let axis = panel(&frame, PanelKind::ValueAxis);
    assert_eq!(layer_rect_count(axis, CanvasLayerKind::Background), 1);

    let series = &panel(&frame, PanelKind::Plot)
        .layer(CanvasLayerKind::Series)
        .expect("series")
        .rects;
    assert_eq!(series.len(), 4);
    assert_eq!(series[1].x - series[0].x, 35.0);
    assert_eq!(series[0].corner_radius, 0.0);
    assert_eq!(series[1].corner_radius, 4.0);

    let groups = chart.bar_geometry().expect("geometry");
    assert_eq!(groups[0].center_x, 64.0);
}

#[test]
fn percentile_charts_label_axis_up_to_hundred() {
    let chart = MultiBarChart::new(
        Viewport::new(364.0, 220.0),
        grouped_data(),
        ChartConfig::default().with_decimal_places(0),
    )
    .expect("multi bar chart")
    .with_options(ChartOptions::default().with_percentile(true))
    .expect("options");
    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(
        layer_texts(panel(&frame, PanelKind::ValueAxis), CanvasLayerKind::Labels),
        vec!["0", "25", "50", "75", "100"]
    );
}

#[test]
fn horizontal_chart_puts_value_axis_below_plot() {
    let chart = HorizontalBarChart::new(
        Viewport::new(400.0, 216.0),
        HorizontalBarChartData::new(
            labels(&["A", "B"]),
            vec![BarDataset::new(vec![10.0, 20.0])],
        ),
        ChartConfig::default(),
    )
    .expect("horizontal chart")
    .with_axis_options(AxisOptions::default().with_from_zero(true))
    .expect("axis options");
    let frame = chart.build_render_frame().expect("frame");

    let plot = panel(&frame, PanelKind::Plot);
    assert_eq!((plot.y, plot.width, plot.height), (0.0, 400.0, 200.0));
    let series = &plot.layer(CanvasLayerKind::Series).expect("series").rects;
    assert_eq!(
        (series[0].x, series[0].y, series[0].width, series[0].height),
        (64.0, 16.0, 148.0, 32.0)
    );

    let grid_xs: Vec<f64> = plot
        .layer(CanvasLayerKind::Grid)
        .expect("grid")
        .lines
        .iter()
        .map(|line| line.x1)
        .collect();
    assert_eq!(grid_xs, vec![64.0, 138.0, 212.0, 286.0, 360.0]);

    let categories = &plot.layer(CanvasLayerKind::Labels).expect("labels").texts;
    assert_eq!(categories[0].text, "A");
    assert_eq!((categories[0].x, categories[0].y), (61.0, 36.0));
    assert_eq!(categories[1].y, 136.0);
    assert_eq!(categories[0].h_align, TextHAlign::Right);

    let axis = panel(&frame, PanelKind::ValueAxis);
    assert_eq!((axis.y, axis.height), (200.0, 16.0));
    let value_labels = &axis.layer(CanvasLayerKind::Labels).expect("labels").texts;
    assert_eq!(value_labels.len(), 5);
    assert_eq!((value_labels[1].text.as_str(), value_labels[1].x), ("5.00", 138.0));
    assert!(value_labels.iter().all(|text| text.y == 12.0));
}

fn horizontal_chart(options: ChartOptions) -> HorizontalBarChart {
    HorizontalBarChart::new(
        Viewport::new(400.0, 216.0),
        HorizontalBarChartData::new(
            labels(&["A", "B"]),
            vec![BarDataset::new(vec![10.0, 20.0])],
        ),
        ChartConfig::default(),
    )
    .expect("horizontal chart")
    .with_options(options)
    .expect("options")
}

#[test]
fn horizontal_chart_label_toggles_follow_inverted_axes() {
    let frame = horizontal_chart(ChartOptions::default().with_horizontal_labels(false))
        .build_render_frame()
        .expect("frame");
    assert!(layer_texts(panel(&frame, PanelKind::Plot), CanvasLayerKind::Labels).is_empty());
    assert_eq!(
        layer_texts(panel(&frame, PanelKind::ValueAxis), CanvasLayerKind::Labels).len(),
        5
    );

    let frame = horizontal_chart(ChartOptions::default().with_vertical_labels(false))
        .build_render_frame()
        .expect("frame");
    assert!(frame.panel(PanelKind::ValueAxis).is_none());
    assert_eq!(
        layer_texts(panel(&frame, PanelKind::Plot), CanvasLayerKind::Labels),
        vec!["A", "B"]
    );
}

#[test]
fn horizontal_bars_have_no_top_markers() {
    let frame = horizontal_chart(ChartOptions::default().with_bar_tops(true))
        .build_render_frame()
        .expect("frame");
    let plot = panel(&frame, PanelKind::Plot);
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Series), 2);
    assert_eq!(layer_rect_count(plot, CanvasLayerKind::Overlay), 0);
}

#[test]
fn dataset_colors_feed_fill_gradients() {
    let chart = HorizontalBarChart::new(
        Viewport::new(400.0, 216.0),
        HorizontalBarChartData::new(
            Vec::new(),
            vec![BarDataset::new(vec![1.0, 2.0]).with_color(RED)],
        ),
        ChartConfig::default().with_shadow_color_from_dataset(true),
    )
    .expect("horizontal chart");
    let frame = chart.build_render_frame().expect("frame");

    assert!(frame.gradients.contains_key("fillShadowGradientFrom_0"));
    let series = &panel(&frame, PanelKind::Plot)
        .layer(CanvasLayerKind::Series)
        .expect("series")
        .rects;
    assert_eq!(series[0].fill, Paint::gradient("fillShadowGradientFrom_0"));
}

#[test]
fn too_narrow_viewport_is_rejected_at_layout() {
    let chart = BarChart::new(
        Viewport::new(50.0, 220.0),
        BarChartData::new(Vec::new(), vec![1.0]),
        ChartConfig::default(),
    )
    .expect("chart creation only checks the viewport itself");
    let err = chart.build_render_frame().expect_err("no room for the plot");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    let err = BarChart::new(
        Viewport::new(0.0, 220.0),
        BarChartData::default(),
        ChartConfig::default(),
    )
    .err()
    .expect("zero width rejected");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn invalid_data_is_rejected_up_front() {
    let err = BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::new(labels(&["A"]), vec![1.0, 2.0]),
        ChartConfig::default(),
    )
    .err()
    .expect("label count mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = StackedBarChart::new(
        Viewport::new(364.0, 220.0),
        StackedBarChartData::new(Vec::new(), vec![vec![1.0, -2.0]]),
        ChartConfig::default(),
    )
    .err()
    .expect("negative stacked value");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::new(Vec::new(), vec![f64::NAN]),
        ChartConfig::default(),
    )
    .err()
    .expect("non-finite value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_data_still_renders_frame() {
    let mut chart = BarChart::new(
        Viewport::new(364.0, 220.0),
        BarChartData::default(),
        ChartConfig::default(),
    )
    .expect("bar chart");
    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("render");
    assert_eq!(renderer.last_rect_count, 2);
}
