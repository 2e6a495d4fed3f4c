use barchart_rs::api::{AxisOptions, ChartOptions};
use barchart_rs::render::Color;
use barchart_rs::{ChartConfig, ChartError};

#[test]
fn empty_json_object_yields_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.color, Color::BLACK);
    assert_eq!(config.bar_width, 32.0);
    assert_eq!(config.bar_percentage, 1.0);
    assert_eq!(config.item_spacing, 3.0);
    assert_eq!(config.decimal_places, 2);
    assert_eq!(config.grid_line_dash, vec![5.0, 10.0]);
    assert_eq!(config.label_font_size, 12.0);
}

#[test]
fn colors_parse_from_hex_strings_or_channels() {
    let config = ChartConfig::from_json_str(
        r##"{
            "color": "#ff0000",
            "label_color": { "red": 0.0, "green": 0.5, "blue": 1.0 },
            "background_color": "#00000080",
            "bar_width": 20,
            "bar_percentage": 0.5
        }"##,
    )
    .expect("valid config");

    assert_eq!(config.color, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(config.label_color, Some(Color::rgb(0.0, 0.5, 1.0)));
    let background = config.background_color.expect("background color");
    assert!((background.alpha - 128.0 / 255.0).abs() <= 1e-9);
    assert_eq!(config.effective_bar_width(), 10.0);
    assert_eq!(config.resolved_label_color(), Color::rgb(0.0, 0.5, 1.0));
}

#[test]
fn invalid_values_are_rejected_as_config_errors() {
    for input in [
        r#"{ "bar_percentage": 0 }"#,
        r#"{ "fill_shadow_gradient_from_opacity": 1.5 }"#,
        r#"{ "padding_top": -1 }"#,
        r#"{ "decimal_places": 21 }"#,
        r##"{ "color": "#12" }"##,
        r#"{ "color": { "red": 2.0, "green": 0.0, "blue": 0.0 } }"#,
        r#"{ "bar_width": "wide" }"#,
    ] {
        let err = ChartConfig::from_json_str(input).expect_err(input);
        assert!(
            matches!(err, ChartError::InvalidConfig(_)),
            "unexpected error for {input}: {err}"
        );
    }
}

#[test]
fn config_json_round_trips_builder_output() {
    let config = ChartConfig::new(Color::rgb(0.0, 0.0, 1.0))
        .with_bar_radius(4.0)
        .with_padding(24.0, 8.0)
        .with_label_rotations(-45.0, 0.0)
        .with_decimal_places(0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored.color, config.color);
    assert_eq!(restored.bar_radius, 4.0);
    assert_eq!(restored.padding_top, Some(24.0));
    assert_eq!(restored.padding_right, Some(8.0));
    assert_eq!(restored.vertical_label_rotation, -45.0);
    assert_eq!(restored.decimal_places, 0);
}

#[test]
fn axis_and_chart_options_validate_ranges() {
    let err = AxisOptions::default()
        .with_y_axis_interval(0)
        .validate()
        .expect_err("interval must be positive");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = AxisOptions::default()
        .with_from_number(Some(f64::NAN))
        .validate()
        .expect_err("from_number must be finite");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ChartOptions::default()
        .with_segments(0)
        .validate()
        .expect_err("at least one segment");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let options: ChartOptions = serde_json::from_str("{}").expect("option defaults");
    assert_eq!(options, ChartOptions::default());
    assert!(options.with_inner_lines);
    assert!(options.show_bar_tops);
    assert!(!options.with_outer_lines);
    assert_eq!(options.segments, 4);

    let axis: AxisOptions = serde_json::from_str("{}").expect("axis defaults");
    assert_eq!(axis, AxisOptions::default());
    assert_eq!(axis.y_labels_offset, 12.0);
}
