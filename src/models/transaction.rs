//! Transaction model
//!
//! A transaction is a single income or expense event. Records are immutable
//! once built: a correction is a delete followed by a fresh add.
//!
//! The ledger codec is RFC 4180 CSV (via the `csv` crate) with the fixed
//! column order `ID, Date, Type, Category, Amount, Description`. Fields that
//! contain commas, quotes or newlines are quoted, so any description survives
//! a write/read cycle.

use chrono::{Local, NaiveDate};
use csv::StringRecord;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

use super::ids::TransactionId;
use super::kind::TransactionKind;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};
use crate::validation::MAX_AMOUNT;

/// Calendar format for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names written once at the top of the ledger file
pub const LEDGER_HEADER: [&str; 6] = ["ID", "Date", "Type", "Category", "Amount", "Description"];

/// A financial transaction
///
/// Serializes to the dictionary/wire shape
/// `{id, date, type, category, amount, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(serialize_with = "serialize_date")]
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    amount: Money,
    description: String,
}

impl Transaction {
    /// Create a transaction dated today with a fresh id and no description
    ///
    /// Fails with [`BudgetError::NegativeAmount`] when `amount` is below zero.
    /// Zero is structurally valid; the input gate is where it gets refused.
    pub fn new(amount: Money, kind: TransactionKind, category: impl Into<String>) -> BudgetResult<Self> {
        if amount.is_negative() {
            return Err(BudgetError::NegativeAmount(amount.to_string()));
        }

        Ok(Self {
            id: TransactionId::new(),
            date: Local::now().date_naive(),
            kind,
            category: category.into(),
            amount,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Use a known id instead of the generated one (reconstruction from storage)
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// `YYYY-MM` bucket used by monthly rollups
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Flat key/value view handed to outer layers
    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id.as_str(),
            "date": self.date.format(DATE_FORMAT).to_string(),
            "type": self.kind.as_str(),
            "category": self.category,
            "amount": self.amount.to_f64(),
            "description": self.description,
        })
    }

    /// Encode as a ledger record, in header column order
    pub fn to_record(&self) -> StringRecord {
        StringRecord::from(vec![
            self.id.to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.kind.to_string(),
            self.category.clone(),
            self.amount.to_decimal_string(),
            self.description.clone(),
        ])
    }

    /// Decode a ledger record
    ///
    /// A missing sixth column is read as an empty description. Any other
    /// shape, or an unparseable field, is reported with a reason string.
    pub fn from_record(record: &StringRecord) -> Result<Self, String> {
        if record.len() != 5 && record.len() != 6 {
            return Err(format!("expected 6 fields, found {}", record.len()));
        }

        let id = record.get(0).unwrap_or_default();
        if id.trim().is_empty() {
            return Err("empty transaction id".to_string());
        }

        let raw_date = record.get(1).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| format!("invalid date '{}'", raw_date))?;

        let kind: TransactionKind = record
            .get(2)
            .unwrap_or_default()
            .parse()
            .map_err(|e: super::kind::UnknownKind| e.to_string())?;

        let amount = parse_stored_amount(record.get(4).unwrap_or_default())?;

        let category = record.get(3).unwrap_or_default();
        let description = record.get(5).unwrap_or_default();

        Self::new(amount, kind, category)
            .map(|txn| {
                txn.with_date(date)
                    .with_description(description)
                    .with_id(TransactionId::from_string(id))
            })
            .map_err(|e| e.to_string())
    }

    /// Serialize to a single CSV line (no trailing newline)
    pub fn to_csv_row(&self) -> BudgetResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&self.to_record())?;
        let bytes = writer
            .into_inner()
            .map_err(|e| BudgetError::Csv(e.to_string()))?;
        let mut row = String::from_utf8(bytes).map_err(|e| BudgetError::Csv(e.to_string()))?;
        if row.ends_with('\n') {
            row.pop();
        }
        Ok(row)
    }

    /// Parse a line produced by [`Transaction::to_csv_row`]
    pub fn from_csv_row(row: &str) -> BudgetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(row.as_bytes());

        let mut record = StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(BudgetError::corrupt(1, "empty row"));
        }
        Self::from_record(&record).map_err(|reason| BudgetError::corrupt(1, reason))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}{}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Decode a ledger amount
///
/// Plain decimals go through [`Money::parse`]; exponent forms such as `1e-05`
/// are read as a decimal number and rounded to the cent. Amounts above
/// [`MAX_AMOUNT`] can never pass the input gate, so a row carrying one is
/// reported as corrupt.
fn parse_stored_amount(raw: &str) -> Result<Money, String> {
    let amount = Money::parse(raw)
        .ok()
        .or_else(|| raw.trim().parse::<f64>().ok().and_then(Money::from_decimal))
        .ok_or_else(|| format!("invalid amount '{}'", raw))?;
    if amount > MAX_AMOUNT {
        return Err(format!("amount '{}' exceeds {}", raw, MAX_AMOUNT));
    }
    Ok(amount)
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}
