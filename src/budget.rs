use crate::decimal::Money;
use crate::types::MonthlyBudgetEntry;

/// positional feed of forecast net savings, one entry per month
///
/// The simulation horizon may run past the forecast horizon; months beyond
/// the series repeat the last entry's value. An entry whose savings figure
/// could not be read resolves to zero with a warning rather than failing
/// the run.
#[derive(Debug, Clone, Default)]
pub struct BudgetFeed {
    entries: Vec<MonthlyBudgetEntry>,
}

impl BudgetFeed {
    pub fn new(entries: Vec<MonthlyBudgetEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// net savings for a 1-based simulation month; may be negative
    pub fn net_savings(&self, month: u32) -> Money {
        let Some(last) = self.entries.len().checked_sub(1) else {
            return Money::ZERO;
        };

        let index = (month as usize).saturating_sub(1).min(last);
        let entry = &self.entries[index];
        match entry.net_savings {
            Some(amount) => amount,
            None => {
                tracing::warn!(
                    month,
                    label = entry.month.as_deref(),
                    "budget entry has no usable net savings, treating as zero"
                );
                Money::ZERO
            }
        }
    }

    /// funds usable for payment allocation this month; an overspent month
    /// never turns into a negative payment
    pub fn usable_funds(&self, month: u32) -> Money {
        self.net_savings(month).max(Money::ZERO)
    }
}
