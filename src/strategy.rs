use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::debt::Debt;
use crate::errors::{EngineError, Result};

/// debt payoff allocation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// smallest balance first
    Snowball,
    /// highest interest rate first
    Avalanche,
}

impl Strategy {
    /// indices of unpaid debts in the order payments should be applied
    /// this month
    ///
    /// Recomputed every month against current balances: avalanche rank is
    /// static because rates never change, but snowball rank shifts as
    /// smaller debts shrink or retire. Stable sort keeps ties in input
    /// order.
    pub fn payment_order(&self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = debts
            .iter()
            .enumerate()
            .filter(|(_, debt)| !debt.is_paid_off())
            .map(|(index, _)| index)
            .collect();

        match self {
            Strategy::Snowball => {
                order.sort_by(|&a, &b| debts[a].balance().cmp(&debts[b].balance()));
            }
            Strategy::Avalanche => {
                order.sort_by(|&a, &b| debts[b].annual_rate().cmp(&debts[a].annual_rate()));
            }
        }

        order
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            other => Err(EngineError::UnknownStrategy {
                provided: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Snowball => write!(f, "snowball"),
            Strategy::Avalanche => write!(f, "avalanche"),
        }
    }
}
