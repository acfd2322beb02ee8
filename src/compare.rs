use serde::Serialize;

use crate::budget::BudgetFeed;
use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::Result;
use crate::report::SimulationPlan;
use crate::simulation::Simulation;
use crate::strategy::Strategy;
use crate::types::{DebtInput, MonthlyBudgetEntry};

/// side-by-side outcome of both strategies over the same inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyComparison {
    pub snowball: SimulationPlan,
    pub avalanche: SimulationPlan,
    /// snowball interest minus avalanche interest; positive means
    /// avalanche is the cheaper plan
    pub interest_difference: Money,
    /// snowball months minus avalanche months
    pub months_difference: i64,
}

/// run both strategies over fresh copies of the same inputs
///
/// The engine is a pure function of its inputs, so the two runs cannot
/// affect each other.
pub fn compare_strategies(
    debts: &[DebtInput],
    monthly_budget_data: &[MonthlyBudgetEntry],
) -> Result<StrategyComparison> {
    let run = |strategy: Strategy| -> Result<SimulationPlan> {
        let working = Debt::from_inputs(debts)?;
        let feed = BudgetFeed::new(monthly_budget_data.to_vec());
        Ok(Simulation::new(working, strategy, feed)?.run())
    };

    let snowball = run(Strategy::Snowball)?;
    let avalanche = run(Strategy::Avalanche)?;

    let interest_difference = snowball.total_interest - avalanche.total_interest;
    let months_difference = i64::from(snowball.months) - i64::from(avalanche.months);

    Ok(StrategyComparison {
        snowball,
        avalanche,
        interest_difference,
        months_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_avalanche_never_costs_more_interest() {
        let debts = vec![
            DebtInput::new("card", dec!(800), dec!(0.22)),
            DebtInput::new("car", dec!(5000), dec!(0.07)),
            DebtInput::new("student", dec!(2500), dec!(0.04)),
        ];
        let budget = vec![MonthlyBudgetEntry::new(Money::from_major(400))];

        let comparison = compare_strategies(&debts, &budget).unwrap();

        assert!(comparison.snowball.total_interest >= comparison.avalanche.total_interest);
        assert!(!comparison.interest_difference.is_negative());
    }

    #[test]
    fn test_single_debt_strategies_agree() {
        let debts = vec![DebtInput::new("loan", dec!(1200), dec!(0.12))];
        let budget = vec![MonthlyBudgetEntry::new(Money::from_major(1200))];

        let comparison = compare_strategies(&debts, &budget).unwrap();

        assert_eq!(comparison.snowball, comparison.avalanche);
        assert_eq!(comparison.interest_difference, Money::ZERO);
        assert_eq!(comparison.months_difference, 0);
    }

    #[test]
    fn test_validation_failures_propagate() {
        let debts = vec![DebtInput::new("loan", dec!(-10), dec!(0.12))];

        assert!(compare_strategies(&debts, &[]).is_err());
    }
}
