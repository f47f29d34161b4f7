use egui::Color32;

use crate::format::round_percent;
use crate::model::Contract;

pub const PAID_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const INVOICED_COLOR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const REMAINING_COLOR: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);

/// The three parts of the contract breakdown donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    Paid,
    InvoicedNotPaid,
    Remaining,
}

impl SliceKind {
    /// Name used in the chart legend and tooltip.
    pub fn label(self) -> &'static str {
        match self {
            SliceKind::Paid => "Paid",
            SliceKind::InvoicedNotPaid => "Invoiced (Not Paid)",
            SliceKind::Remaining => "Remaining",
        }
    }

    /// Short name used in the totals row under the chart.
    pub fn short_label(self) -> &'static str {
        match self {
            SliceKind::Paid => "Paid",
            SliceKind::InvoicedNotPaid => "Invoiced",
            SliceKind::Remaining => "Remaining",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            SliceKind::Paid => PAID_COLOR,
            SliceKind::InvoicedNotPaid => INVOICED_COLOR,
            SliceKind::Remaining => REMAINING_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub kind: SliceKind,
    pub value: f64,
}

/// `100 * part / whole`, clamped to 0 when the ratio is not finite.
pub fn ratio_percent(part: f64, whole: f64) -> f64 {
    let percent = part / whole * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

/// Everything the overview cards and the donut derive from a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub total: f64,
    /// Invoiced as a percent of the contract total.
    pub invoiced_percent: f64,
    /// Paid as a percent of the invoiced amount (0 when nothing is invoiced).
    pub paid_percent: f64,
    pub slices: [Slice; 3],
}

impl FinancialSummary {
    pub fn derive(contract: &Contract) -> Self {
        Self {
            total: contract.total,
            invoiced_percent: ratio_percent(contract.invoiced, contract.total),
            paid_percent: ratio_percent(contract.paid, contract.invoiced),
            slices: [
                Slice {
                    kind: SliceKind::Paid,
                    value: contract.paid,
                },
                Slice {
                    kind: SliceKind::InvoicedNotPaid,
                    value: contract.outstanding(),
                },
                Slice {
                    kind: SliceKind::Remaining,
                    value: contract.remaining,
                },
            ],
        }
    }

    /// Rounded share of the contract total for a slice.
    pub fn slice_percent(&self, slice: &Slice) -> i64 {
        round_percent(ratio_percent(slice.value, self.total))
    }

    /// Label drawn next to a donut slice, e.g. `40%`.
    pub fn slice_label(&self, slice: &Slice) -> String {
        format!("{}%", self.slice_percent(slice))
    }

    /// Sum of all slice values; equals the contract total for consistent data.
    #[cfg(test)]
    pub fn slice_sum(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}
