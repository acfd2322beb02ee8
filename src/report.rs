use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::simulation::SimulationOutcome;

/// presentation precision for every figure written into the plan document
const REPORT_SCALE: u32 = 2;

/// one debt's line within a month snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRow {
    pub name: String,
    /// balance at the end of the month, after interest and payment
    pub balance: Money,
    /// amount paid this month
    pub paid: Money,
    /// interest accrued this month
    pub interest: Money,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// state of every debt after one simulated month; month 0 is the starting
/// position before any interest accrues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    pub month: u32,
    pub debts: Vec<DebtRow>,
}

impl MonthSnapshot {
    /// starting position, with zero movement on every row
    pub(crate) fn initial(debts: &[Debt]) -> Self {
        let rows = debts
            .iter()
            .map(|debt| DebtRow {
                name: debt.name().to_string(),
                balance: debt.balance().round_dp(REPORT_SCALE),
                paid: Money::ZERO,
                interest: Money::ZERO,
                total_paid: Money::ZERO,
                total_interest: Money::ZERO,
            })
            .collect();

        Self { month: 0, debts: rows }
    }

    /// capture one simulated month; rows stay in canonical input order
    /// regardless of the payment order used
    pub(crate) fn capture(month: u32, debts: &[Debt], paid: &[Money], accrued: &[Money]) -> Self {
        let rows = debts
            .iter()
            .zip(paid.iter().zip(accrued))
            .map(|(debt, (&paid, &interest))| DebtRow {
                name: debt.name().to_string(),
                balance: debt.balance().round_dp(REPORT_SCALE),
                paid: paid.round_dp(REPORT_SCALE),
                interest: interest.round_dp(REPORT_SCALE),
                total_paid: debt.total_paid().round_dp(REPORT_SCALE),
                total_interest: debt.total_interest().round_dp(REPORT_SCALE),
            })
            .collect();

        Self { month, debts: rows }
    }
}

/// final per-debt summary, in canonical input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub name: String,
    pub balance: Money,
    /// annual rate re-expressed as a percentage for reporting
    pub rate: Decimal,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// the complete simulation result returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPlan {
    /// month-by-month snapshots, index 0 being the starting position
    pub plan: Vec<MonthSnapshot>,
    /// number of months actually simulated
    pub months: u32,
    pub total_interest: Money,
    /// total interest charged in each simulated month, excluding month 0
    pub monthly_interest_payments: Vec<Money>,
    /// true when the horizon cap stopped the run with balances remaining
    pub hit_max_months: bool,
    /// count of debts still carrying a balance at halt
    pub remaining_debts: u32,
    pub debts: Vec<DebtSummary>,
}

impl SimulationPlan {
    /// reduce the completed run into the final report
    pub(crate) fn build(
        snapshots: Vec<MonthSnapshot>,
        monthly_interest_payments: Vec<Money>,
        total_interest: Money,
        months: u32,
        outcome: SimulationOutcome,
        debts: &[Debt],
    ) -> Self {
        let remaining_debts = debts.iter().filter(|debt| !debt.is_paid_off()).count() as u32;

        let summaries = debts
            .iter()
            .map(|debt| DebtSummary {
                name: debt.name().to_string(),
                balance: debt.balance().round_dp(REPORT_SCALE),
                rate: debt.annual_rate().as_percentage().round_dp(REPORT_SCALE),
                total_paid: debt.total_paid().round_dp(REPORT_SCALE),
                total_interest: debt.total_interest().round_dp(REPORT_SCALE),
            })
            .collect();

        Self {
            plan: snapshots,
            months,
            total_interest: total_interest.round_dp(REPORT_SCALE),
            monthly_interest_payments,
            hit_max_months: outcome == SimulationOutcome::HorizonCapped,
            remaining_debts,
            debts: summaries,
        }
    }

    pub fn outcome(&self) -> SimulationOutcome {
        if self.hit_max_months {
            SimulationOutcome::HorizonCapped
        } else {
            SimulationOutcome::PaidOff
        }
    }

    /// project the debt-free calendar date from a given start date;
    /// `None` when the run was capped before the debts were retired
    pub fn debt_free_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        if self.hit_max_months {
            return None;
        }
        from.checked_add_months(Months::new(self.months))
    }
}
