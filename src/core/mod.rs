pub mod bar_series;
pub mod format;
pub mod frame;
pub mod grouped_bar_series;
pub mod horizontal_bar_series;
pub mod scale;
pub mod stacked_bar_series;
pub mod types;

pub use bar_series::{BarGeometry, BarLayout, DEFAULT_BAR_WIDTH_PX, project_bar_series};
pub use format::{decorate_label, format_number, to_fixed};
pub use frame::{
    CategoryAxisLayout, CategoryLabelPlacement, DEFAULT_LABEL_FONT_SIZE_PX,
    DEFAULT_X_LABELS_HEIGHT, DEFAULT_Y_LABELS_WIDTH, GridLine, InvertedFrameLayout, LabelAnchor,
    PlotBand, ValueAxisLayout, ValueLabelPlacement,
};
pub use grouped_bar_series::{
    BarGroup, DEFAULT_ITEM_SPACING_PX, GroupedBar, GroupedBarLayout, grouped_border,
    project_grouped_bars,
};
pub use horizontal_bar_series::{HorizontalBarGeometry, project_horizontal_bars};
pub use scale::ValueScale;
pub use stacked_bar_series::{
    StackedBar, StackedBarLayout, StackedSegment, project_stacked_bars, stacked_border,
};
pub use types::{AxisLabel, ChartKind, DataExtent, ExtentSign, Viewport};
