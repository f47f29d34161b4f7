use crate::format::{format_currency, format_percentage};
use crate::model::Contract;

use super::financial::FinancialSummary;

/// Which metric a card shows; the UI picks icon and accent from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    ContractValue,
    Invoiced,
    Paid,
    Remaining,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
}

/// The four metric cards shown above the charts.
pub fn overview_cards(contract: &Contract) -> [OverviewCard; 4] {
    let summary = FinancialSummary::derive(contract);
    [
        OverviewCard {
            kind: CardKind::ContractValue,
            title: "Contract Value",
            value: format_currency(contract.total),
            subtitle: None,
        },
        OverviewCard {
            kind: CardKind::Invoiced,
            title: "Amount Invoiced",
            value: format_currency(contract.invoiced),
            subtitle: Some(format!("{} of contract", format_percentage(summary.invoiced_percent))),
        },
        OverviewCard {
            kind: CardKind::Paid,
            title: "Amount Paid",
            value: format_currency(contract.paid),
            subtitle: Some(format!("{} of invoiced", format_percentage(summary.paid_percent))),
        },
        OverviewCard {
            kind: CardKind::Remaining,
            title: "Remaining Balance",
            value: format_currency(contract.remaining),
            subtitle: None,
        },
    ]
}
