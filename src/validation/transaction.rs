//! Validation of inbound transaction data

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use super::sanitize::sanitize_text;
use super::ValidationError;
use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind, DATE_FORMAT};

/// Smallest amount the gate accepts
pub const MIN_AMOUNT: Money = Money::from_cents(1);

/// Largest amount the gate accepts
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000);

pub const DESCRIPTION_MAX_LENGTH: usize = 500;

/// Untrusted transaction fields as they arrive
///
/// `None` means the field was absent. A field that is present keeps its raw
/// JSON value, including an explicit `null`, so that a missing field and a
/// badly typed one are reported differently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionInput {
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub kind: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<Value>,
}

/// Keep a present field, `null` included
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Read an amount given as a number or as numeric text
fn amount_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|n| n.is_finite())
}

/// Input that passed the gate, with every field already typed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub description: String,
    pub date: Option<NaiveDate>,
}

impl TransactionInput {
    /// Input carrying the three required fields
    pub fn new(kind: impl Into<Value>, category: impl Into<Value>, amount: impl Into<Value>) -> Self {
        Self {
            kind: Some(kind.into()),
            category: Some(category.into()),
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<Value>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Normalize free text before validation (inbound path only)
    pub fn sanitized(mut self) -> Self {
        if let Some(Value::String(text)) = &self.description {
            self.description = Some(Value::String(sanitize_text(text, DESCRIPTION_MAX_LENGTH)));
        }
        self
    }

    /// Apply the policy rules
    ///
    /// Checks run in a fixed order (presence, type, amount, category,
    /// description, date) and the first failure is reported.
    pub fn validate(&self) -> Result<ValidTransaction, ValidationError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(field = err.field(), reason = %err, "rejected transaction input");
        }
        result
    }

    fn check(&self) -> Result<ValidTransaction, ValidationError> {
        let raw_kind = self
            .kind
            .as_ref()
            .ok_or(ValidationError::MissingField("Transaction type"))?;
        let raw_category = self
            .category
            .as_ref()
            .ok_or(ValidationError::MissingField("Category"))?;
        let raw_amount = self
            .amount
            .as_ref()
            .ok_or(ValidationError::MissingField("Amount"))?;

        let kind: TransactionKind = match raw_kind {
            Value::String(text) => text
                .parse()
                .map_err(|_| ValidationError::InvalidType(text.clone()))?,
            other => return Err(ValidationError::InvalidType(other.to_string())),
        };

        let value = amount_value(raw_amount)
            .ok_or_else(|| ValidationError::InvalidAmount(raw_amount.to_string()))?;
        if value < MIN_AMOUNT.to_f64() {
            return Err(ValidationError::AmountTooSmall);
        }
        if value > MAX_AMOUNT.to_f64() {
            return Err(ValidationError::AmountTooLarge);
        }
        let amount = Money::from_decimal(value)
            .ok_or_else(|| ValidationError::InvalidAmount(value.to_string()))?;

        let category = match raw_category {
            Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => return Err(ValidationError::EmptyCategory),
        };

        let description = match &self.description {
            None => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(_) => return Err(ValidationError::DescriptionNotString),
        };
        let len = description.chars().count();
        if len > DESCRIPTION_MAX_LENGTH {
            return Err(ValidationError::DescriptionTooLong {
                len,
                max: DESCRIPTION_MAX_LENGTH,
            });
        }

        let date = match &self.date {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) if text.trim().is_empty() => None,
            Some(Value::String(text)) => Some(
                NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                    .map_err(|_| ValidationError::InvalidDate(text.clone()))?,
            ),
            Some(other) => return Err(ValidationError::InvalidDate(other.to_string())),
        };

        Ok(ValidTransaction {
            kind,
            category,
            amount,
            description,
            date,
        })
    }
}

impl ValidTransaction {
    /// Build the record: fresh id, today's date unless one was given
    pub fn into_transaction(self) -> BudgetResult<Transaction> {
        let txn = Transaction::new(self.amount, self.kind, self.category)?
            .with_description(self.description);
        Ok(match self.date {
            Some(date) => txn.with_date(date),
            None => txn,
        })
    }
}
