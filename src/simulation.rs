use serde::{Deserialize, Serialize};

use crate::budget::BudgetFeed;
use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::{EngineError, Result};
use crate::report::{MonthSnapshot, SimulationPlan};
use crate::strategy::Strategy;
use crate::types::PayoffRequest;

/// maximum simulated months (30 years); the engine's own bound against
/// inputs that can never pay down, such as zero funds with accruing interest
pub const MAX_MONTHS: u32 = 360;

/// terminal state of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// every balance reached the paid-off threshold
    PaidOff,
    /// the horizon cap was reached with balances remaining
    HorizonCapped,
}

/// the monthly payoff loop over a private working copy of the debts
///
/// Each month: resolve this month's usable funds, accrue interest on every
/// open balance, then pour the funds into the debts in strategy order until
/// they run out. One snapshot is emitted per month, plus the month 0
/// starting position.
#[derive(Debug, Clone)]
pub struct Simulation {
    debts: Vec<Debt>,
    strategy: Strategy,
    feed: BudgetFeed,
}

impl Simulation {
    pub fn new(debts: Vec<Debt>, strategy: Strategy, feed: BudgetFeed) -> Result<Self> {
        if debts.is_empty() {
            return Err(EngineError::NoDebts);
        }

        Ok(Self { debts, strategy, feed })
    }

    /// run the simulation to completion and aggregate the plan document
    pub fn run(mut self) -> SimulationPlan {
        let mut snapshots = vec![MonthSnapshot::initial(&self.debts)];
        let mut monthly_interest_payments = Vec::new();
        let mut total_interest = Money::ZERO;
        let mut month = 0;

        while self.any_unpaid() && month < MAX_MONTHS {
            month += 1;
            let mut remaining = self.feed.usable_funds(month);

            // interest lands on every open balance before any payment, so a
            // debt the funds never reach this month still grows
            let mut accrued = vec![Money::ZERO; self.debts.len()];
            let mut interest_this_month = Money::ZERO;
            for (index, debt) in self.debts.iter_mut().enumerate() {
                let interest = debt.accrue_monthly_interest();
                accrued[index] = interest;
                interest_this_month += interest;
            }
            total_interest += interest_this_month;

            // single greedy pass: the full remainder goes to each debt in
            // strategy order until the funds are exhausted
            let mut paid = vec![Money::ZERO; self.debts.len()];
            for index in self.strategy.payment_order(&self.debts) {
                if !remaining.is_positive() {
                    break;
                }
                let payment = self.debts[index].apply_payment(remaining);
                paid[index] = payment;
                remaining -= payment;
            }

            snapshots.push(MonthSnapshot::capture(month, &self.debts, &paid, &accrued));
            monthly_interest_payments.push(interest_this_month.round_dp(2));
        }

        let outcome = if self.any_unpaid() {
            SimulationOutcome::HorizonCapped
        } else {
            SimulationOutcome::PaidOff
        };

        SimulationPlan::build(
            snapshots,
            monthly_interest_payments,
            total_interest,
            month,
            outcome,
            &self.debts,
        )
    }

    fn any_unpaid(&self) -> bool {
        self.debts.iter().any(|debt| !debt.is_paid_off())
    }
}

/// validate a raw request and run it; the one simulation path every caller
/// goes through
pub fn plan_payoff(request: &PayoffRequest) -> Result<SimulationPlan> {
    let debts = Debt::from_inputs(&request.debts)?;
    let strategy: Strategy = request.strategy.parse()?;
    let feed = BudgetFeed::new(request.monthly_budget_data.clone());

    Ok(Simulation::new(debts, strategy, feed)?.run())
}
