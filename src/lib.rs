pub mod budget;
pub mod compare;
pub mod debt;
pub mod decimal;
pub mod errors;
pub mod report;
pub mod simulation;
pub mod strategy;
pub mod types;

// re-export key types
pub use budget::BudgetFeed;
pub use compare::{compare_strategies, StrategyComparison};
pub use debt::Debt;
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use report::{DebtRow, DebtSummary, MonthSnapshot, SimulationPlan};
pub use simulation::{plan_payoff, Simulation, SimulationOutcome, MAX_MONTHS};
pub use strategy::Strategy;
pub use types::{DebtInput, MonthlyBudgetEntry, PayoffRequest};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
