use barchart_rs::core::{DataExtent, ExtentSign, ValueScale};

#[test]
fn from_zero_scales_against_zero() {
    let values = [10.0, 20.0, 5.0];
    let scale = ValueScale::from_zero();

    assert_eq!(scale.scaler(&values), 20.0);
    assert_eq!(scale.base_height(&values, 100.0), 100.0);
    assert_eq!(scale.bar_height(10.0, &values, 100.0), 50.0);
    assert_eq!(scale.bar_height(20.0, &values, 100.0), 100.0);
    assert_eq!(scale.bar_height(5.0, &values, 100.0), 25.0);
}

#[test]
fn mixed_signs_put_zero_baseline_inside_plot() {
    let values = [-5.0, 5.0];
    let scale = ValueScale::default();

    assert_eq!(scale.scaler(&values), 10.0);
    assert_eq!(scale.base_height(&values, 200.0), 100.0);
    assert_eq!(scale.bar_height(0.0, &values, 200.0), 0.0);
    assert_eq!(scale.bar_height(-5.0, &values, 200.0), -100.0);
}

#[test]
fn non_negative_data_without_from_zero_aligns_to_minimum() {
    let values = [10.0, 20.0, 5.0];
    let scale = ValueScale::default();

    assert_eq!(scale.scaler(&values), 15.0);
    assert_eq!(scale.bar_height(5.0, &values, 150.0), 0.0);
    assert_eq!(scale.bar_height(20.0, &values, 150.0), 150.0);
    assert_eq!(scale.axis_floor(&values), 5.0);
}

#[test]
fn non_positive_data_hangs_from_top() {
    let values = [-10.0, -20.0];
    let scale = ValueScale::default();

    assert_eq!(scale.scaler(&values), 10.0);
    assert_eq!(scale.base_height(&values, 100.0), 0.0);
    assert_eq!(scale.bar_height(-10.0, &values, 100.0), 0.0);
    assert_eq!(scale.bar_height(-20.0, &values, 100.0), -100.0);

    let from_zero = ValueScale::from_zero();
    assert_eq!(from_zero.scaler(&values), 20.0);
    assert_eq!(from_zero.bar_height(-10.0, &values, 100.0), -50.0);
}

#[test]
fn from_number_widens_range() {
    let values = [10.0, 20.0];
    assert_eq!(ValueScale::new(false, Some(50.0)).scaler(&values), 40.0);
    assert_eq!(ValueScale::new(true, Some(50.0)).scaler(&values), 50.0);
    assert_eq!(ValueScale::new(false, Some(0.0)).scaler(&values), 20.0);
}

#[test]
fn gridline_values_step_from_axis_floor() {
    let values = [0.0, 100.0];
    let scale = ValueScale::default();
    let labels: Vec<f64> = (0..=4)
        .map(|index| scale.gridline_value(&values, index, 4))
        .collect();
    assert_eq!(labels, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    let offset = [20.0, 60.0];
    assert_eq!(scale.gridline_value(&offset, 0, 4), 20.0);
    assert_eq!(ValueScale::from_zero().gridline_value(&offset, 0, 4), 0.0);
}

#[test]
fn empty_and_flat_data_fall_back_to_unit_scaler() {
    let scale = ValueScale::from_zero();
    assert_eq!(scale.scaler(&[]), 1.0);
    assert_eq!(scale.base_height(&[], 80.0), 80.0);
    assert_eq!(scale.bar_height(3.0, &[], 80.0), 0.0);
    assert_eq!(ValueScale::default().scaler(&[4.0, 4.0]), 1.0);
    assert_eq!(scale.scaler(&[0.0, 0.0]), 1.0);
}

#[test]
fn extent_reports_sign_of_dataset() {
    let extent = DataExtent::from_values(&[3.0, -1.0, 8.0]).expect("non-empty extent");
    assert_eq!(extent.min, -1.0);
    assert_eq!(extent.max, 8.0);
    assert_eq!(extent.span(), 9.0);
    assert_eq!(extent.sign(), ExtentSign::Mixed);
    assert_eq!(extent.including(12.0).max, 12.0);

    assert_eq!(
        DataExtent::from_values(&[0.0, 2.0]).map(DataExtent::sign),
        Some(ExtentSign::NonNegative)
    );
    assert_eq!(
        DataExtent::from_values(&[-2.0, 0.0]).map(DataExtent::sign),
        Some(ExtentSign::NonPositive)
    );
    assert!(DataExtent::from_values(&[]).is_none());
}
