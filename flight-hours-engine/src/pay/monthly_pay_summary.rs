use flight_hours_api::CancellationPayRule;
use flight_hours_db::models::{FlightEntryModel, UserSettingsModel};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, warn};

use super::calculate_pay::calculate_pay;
use super::cancellation_pay::calculate_cancellation_pay;
use crate::hours::{entries_in_month, GoalProgress, HourTotals};

/// What a set of logged days earns under the account's pay settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPaySummary {
    pub totals: HourTotals,
    /// Tiered pay on the qualifying hours
    pub estimated_pay: f64,
    pub cancellation_pay: f64,
    pub cancellation_rule: CancellationPayRule,
    pub goal: Option<GoalProgress>,
}

impl MonthlyPaySummary {
    /// Summary over arbitrary entries, such as a filtered past-months range. No goal applies.
    pub fn build<'a, I>(entries: I, settings: &UserSettingsModel) -> Self
    where
        I: IntoIterator<Item = &'a FlightEntryModel>,
    {
        let totals = HourTotals::from_entries(entries);
        let estimated_pay = calculate_pay(totals.total, &settings.pay_blocks);
        let cancellation_pay = calculate_cancellation_pay(&settings.cancellation_pay, &totals);
        debug!(
            total_hours = totals.total,
            estimated_pay, cancellation_pay, "Built pay summary"
        );
        Self {
            totals,
            estimated_pay,
            cancellation_pay,
            cancellation_rule: settings.cancellation_pay,
            goal: None,
        }
    }

    /// Summary of one calendar month (1 = January) including goal progress
    pub fn for_month(
        entries: &[FlightEntryModel],
        settings: &UserSettingsModel,
        year: i32,
        month: u32,
    ) -> Self {
        let mut summary = Self::build(entries_in_month(entries, year, month), settings);
        summary.goal = GoalProgress::for_total(summary.totals.total, settings.goal_for_month(month));
        summary
    }

    pub fn total_pay(&self) -> f64 {
        self.estimated_pay + self.cancellation_pay
    }

    /// Label for the cancellation line, only when it pays something
    pub fn cancellation_label(&self) -> Option<&'static str> {
        if self.cancellation_pay > 0.0 {
            self.cancellation_rule.label()
        } else {
            None
        }
    }

    pub fn estimated_pay_display(&self) -> Decimal {
        to_cents(self.estimated_pay)
    }

    pub fn cancellation_pay_display(&self) -> Decimal {
        to_cents(self.cancellation_pay)
    }

    pub fn total_pay_display(&self) -> Decimal {
        to_cents(self.total_pay())
    }
}

/// Amounts outside the `Decimal` range saturate; NaN shows as zero.
fn to_cents(amount: f64) -> Decimal {
    let value = Decimal::from_f64(amount).unwrap_or_else(|| {
        warn!(amount, "Pay amount cannot be shown in cents");
        if amount.is_nan() {
            Decimal::ZERO
        } else if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    });
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
