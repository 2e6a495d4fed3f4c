use serde::{Deserialize, Serialize};
use tracing::trace;

/// What a press region stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// A bar, or one series of a grouped/stacked bar.
    Bar { index: usize, series: Option<usize> },
    CategoryLabel { index: usize },
}

impl HitTarget {
    /// Category index the target belongs to.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Bar { index, .. } | Self::CategoryLabel { index } => index,
        }
    }
}

/// Axis-aligned press target in plot-panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub target: HitTarget,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitRegion {
    #[must_use]
    pub fn new(target: HitTarget, (x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self {
            target,
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Press regions in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: HitRegion) {
        self.regions.push(region);
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Topmost region under `(x, y)`; later regions paint over earlier ones.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitTarget> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let hit = self
            .regions
            .iter()
            .rev()
            .find(|region| region.contains(x, y))
            .map(|region| region.target);
        trace!(x, y, hit = ?hit, "hit test");
        hit
    }
}

/// Press on a single-value bar, reported with the bar's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPressEvent {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Press on a grouped or stacked bar, reported with every series value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPressEvent {
    pub index: usize,
    pub values: Vec<f64>,
}

/// Per-chart interaction state. Only the highlighted category survives renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    highlighted_index: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn highlighted_index(self) -> Option<usize> {
        self.highlighted_index
    }

    /// Returns `true` when the highlight changed.
    pub fn set_highlighted_index(&mut self, index: Option<usize>) -> bool {
        let changed = self.highlighted_index != index;
        self.highlighted_index = index;
        changed
    }

    pub fn clear_highlight(&mut self) -> bool {
        self.set_highlighted_index(None)
    }

    #[must_use]
    pub fn is_highlighted(self, index: usize) -> bool {
        self.highlighted_index == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{HitMap, HitRegion, HitTarget, InteractionState};

    #[test]
    fn later_regions_win_overlapping_hits() {
        let mut map = HitMap::new();
        map.push(HitRegion::new(
            HitTarget::Bar {
                index: 0,
                series: None,
            },
            (0.0, 0.0, 10.0, 10.0),
        ));
        map.push(HitRegion::new(
            HitTarget::CategoryLabel { index: 1 },
            (5.0, 5.0, 10.0, 10.0),
        ));

        assert_eq!(
            map.hit_test(7.0, 7.0),
            Some(HitTarget::CategoryLabel { index: 1 })
        );
        assert_eq!(map.hit_test(2.0, 2.0).map(HitTarget::index), Some(0));
        assert_eq!(map.hit_test(50.0, 50.0), None);
        assert_eq!(map.hit_test(f64::NAN, 1.0), None);
    }

    #[test]
    fn highlight_reports_changes_only() {
        let mut state = InteractionState::default();
        assert!(state.set_highlighted_index(Some(2)));
        assert!(!state.set_highlighted_index(Some(2)));
        assert!(state.is_highlighted(2));
        assert!(state.clear_highlight());
        assert_eq!(state.highlighted_index(), None);
    }
}
