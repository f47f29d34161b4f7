use egui::Color32;

use crate::model::ProgressSample;

pub const PLANNED_COLOR: Color32 = Color32::from_rgb(0x93, 0xc5, 0xfd);
pub const ACTUAL_COLOR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

const AXIS_STEP: f64 = 25.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub month: String,
    pub planned: f64,
    pub actual: f64,
}

/// Planned vs. actual bar series, one group per month in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSeries {
    pub groups: Vec<BarGroup>,
    /// Top of the value axis: at least 100, rounded up to a tick.
    pub axis_max: f64,
}

impl ProgressSeries {
    pub fn derive(samples: &[ProgressSample]) -> Self {
        let groups: Vec<BarGroup> = samples
            .iter()
            .map(|s| BarGroup {
                month: s.month.clone(),
                planned: s.planned,
                actual: s.actual,
            })
            .collect();
        let peak = groups
            .iter()
            .flat_map(|g| [g.planned, g.actual])
            .filter(|v| v.is_finite())
            .fold(100.0_f64, f64::max);
        Self {
            groups,
            axis_max: (peak / AXIS_STEP).ceil() * AXIS_STEP,
        }
    }

    /// Axis tick values from 0 to `axis_max`.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.axis_max / AXIS_STEP).round() as usize;
        (0..=count).map(|i| i as f64 * AXIS_STEP).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
