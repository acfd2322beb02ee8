use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::decimal::Money;

/// raw debt record as supplied by the caller; presence and range checks
/// happen in the validator, so malformed numerics land here as `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DebtInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate: Option<Decimal>,
}

impl DebtInput {
    pub fn new(name: impl Into<String>, balance: Decimal, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            balance: Some(balance),
            rate: Some(rate),
        }
    }
}

/// one month of forecast net savings; the `month` label is carried for
/// caller-side logging only, the feed indexes entries by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthlyBudgetEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient_money")]
    pub net_savings: Option<Money>,
}

impl MonthlyBudgetEntry {
    pub fn new(net_savings: Money) -> Self {
        Self {
            month: None,
            net_savings: Some(net_savings),
        }
    }
}

/// the full simulation request as received from the transport layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffRequest {
    pub debts: Vec<DebtInput>,
    pub strategy: String,
    #[serde(default)]
    pub monthly_budget_data: Vec<MonthlyBudgetEntry>,
}

/// accept a JSON number or numeric string, map anything else to `None`
fn lenient_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_decimal))
}

fn lenient_money<'de, D>(deserializer: D) -> std::result::Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_decimal(deserializer)?.map(Money::from_decimal))
}

fn parse_decimal(value: &Value) -> Option<Decimal> {
    let repr = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .ok()
}
