use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::types::DebtInput;

/// working debt entity, owned exclusively by one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    name: String,
    balance: Money,
    annual_rate: Rate,
    total_paid: Money,
    total_interest: Money,
}

impl Debt {
    /// create a debt with already-typed values; accumulators start at zero
    pub fn new(name: impl Into<String>, balance: Money, annual_rate: Rate) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::MissingDebtName { index: 0 });
        }
        if balance.is_negative() {
            return Err(EngineError::InvalidBalance { name });
        }
        if annual_rate < Rate::ZERO || annual_rate > Rate::ONE {
            return Err(EngineError::InvalidRate { name });
        }

        Ok(Self {
            name,
            balance,
            annual_rate,
            total_paid: Money::ZERO,
            total_interest: Money::ZERO,
        })
    }

    /// validate raw caller records into owned working entities; the inputs
    /// are only read, never mutated, so callers can safely reuse them
    pub fn from_inputs(inputs: &[DebtInput]) -> Result<Vec<Debt>> {
        if inputs.is_empty() {
            return Err(EngineError::NoDebts);
        }

        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| Self::from_input(index, input))
            .collect()
    }

    fn from_input(index: usize, input: &DebtInput) -> Result<Debt> {
        if input.name.trim().is_empty() {
            return Err(EngineError::MissingDebtName { index });
        }

        let balance = input
            .balance
            .filter(|b| !b.is_sign_negative())
            .ok_or_else(|| EngineError::InvalidBalance {
                name: input.name.clone(),
            })?;

        let rate = input
            .rate
            .filter(|r| *r >= Decimal::ZERO && *r <= Decimal::ONE)
            .ok_or_else(|| EngineError::InvalidRate {
                name: input.name.clone(),
            })?;

        Self::new(input.name.clone(), Money::from_decimal(balance), Rate::from_decimal(rate))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn total_paid(&self) -> Money {
        self.total_paid
    }

    pub fn total_interest(&self) -> Money {
        self.total_interest
    }

    /// a balance at or below one cent counts as retired
    pub fn is_paid_off(&self) -> bool {
        self.balance <= Money::CENT
    }

    /// add one month of interest to the balance before any payment is
    /// applied; returns the amount accrued
    pub fn accrue_monthly_interest(&mut self) -> Money {
        if !self.balance.is_positive() {
            return Money::ZERO;
        }

        let interest = self.balance.monthly_interest(self.annual_rate);
        self.balance += interest;
        self.total_interest += interest;
        interest
    }

    /// pay down the balance with whatever funds remain this month;
    /// returns the payment actually taken, never more than the balance
    pub fn apply_payment(&mut self, available: Money) -> Money {
        let payment = available.min(self.balance).max(Money::ZERO);
        self.balance -= payment;
        self.total_paid += payment;
        payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(name: &str, balance: Decimal, rate: Decimal) -> DebtInput {
        DebtInput::new(name, balance, rate)
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(Debt::from_inputs(&[]), Err(EngineError::NoDebts));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Debt::from_inputs(&[
            input("card", dec!(100), dec!(0.2)),
            input("  ", dec!(100), dec!(0.2)),
        ]);

        assert_eq!(result, Err(EngineError::MissingDebtName { index: 1 }));
    }

    #[test]
    fn test_missing_or_negative_balance_rejected() {
        let missing = DebtInput {
            name: "card".to_string(),
            balance: None,
            rate: Some(dec!(0.2)),
        };
        assert_eq!(
            Debt::from_inputs(&[missing]),
            Err(EngineError::InvalidBalance {
                name: "card".to_string()
            })
        );

        let negative = input("card", dec!(-5), dec!(0.2));
        assert_eq!(
            Debt::from_inputs(&[negative]),
            Err(EngineError::InvalidBalance {
                name: "card".to_string()
            })
        );
    }

    #[test]
    fn test_rate_range_enforced() {
        for bad in [dec!(-0.01), dec!(1.01)] {
            let result = Debt::from_inputs(&[input("loan", dec!(100), bad)]);
            assert_eq!(
                result,
                Err(EngineError::InvalidRate {
                    name: "loan".to_string()
                })
            );
        }

        // the endpoints are legal
        assert!(Debt::from_inputs(&[input("a", dec!(100), dec!(0))]).is_ok());
        assert!(Debt::from_inputs(&[input("b", dec!(100), dec!(1))]).is_ok());
    }

    #[test]
    fn test_accumulators_start_at_zero() {
        let debts = Debt::from_inputs(&[input("card", dec!(250.50), dec!(0.18))]).unwrap();

        assert_eq!(debts[0].total_paid(), Money::ZERO);
        assert_eq!(debts[0].total_interest(), Money::ZERO);
        assert_eq!(debts[0].balance(), Money::from_decimal(dec!(250.50)));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let inputs = vec![input("card", dec!(100), dec!(0.1))];
        let before = inputs.clone();

        let mut debts = Debt::from_inputs(&inputs).unwrap();
        debts[0].accrue_monthly_interest();
        debts[0].apply_payment(Money::from_major(50));

        assert_eq!(inputs, before);
    }

    #[test]
    fn test_monthly_accrual() {
        let mut debt = Debt::new("loan", Money::from_major(1200), Rate::from_decimal(dec!(0.12)))
            .unwrap();

        let interest = debt.accrue_monthly_interest();

        assert_eq!(interest, Money::from_major(12));
        assert_eq!(debt.balance(), Money::from_major(1212));
        assert_eq!(debt.total_interest(), Money::from_major(12));
    }

    #[test]
    fn test_zero_balance_accrues_nothing() {
        let mut debt = Debt::new("loan", Money::ZERO, Rate::from_decimal(dec!(0.2))).unwrap();

        assert_eq!(debt.accrue_monthly_interest(), Money::ZERO);
        assert_eq!(debt.balance(), Money::ZERO);
    }

    #[test]
    fn test_payment_clamped_to_balance() {
        let mut debt = Debt::new("card", Money::from_major(80), Rate::ZERO).unwrap();

        let paid = debt.apply_payment(Money::from_major(100));

        assert_eq!(paid, Money::from_major(80));
        assert_eq!(debt.balance(), Money::ZERO);
        assert_eq!(debt.total_paid(), Money::from_major(80));
    }

    #[test]
    fn test_paid_off_threshold() {
        let at_cent = Debt::new("a", Money::CENT, Rate::ZERO).unwrap();
        let above_cent = Debt::new("b", Money::from_decimal(dec!(0.011)), Rate::ZERO).unwrap();

        assert!(at_cent.is_paid_off());
        assert!(!above_cent.is_paid_off());
    }
}
