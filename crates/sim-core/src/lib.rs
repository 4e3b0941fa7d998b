#![deny(warnings)]

//! Core domain model for the Discount4U retail simulation.
//!
//! This crate defines the monthly sales records and the dataset wrapper the
//! whole simulation operates on, with validation helpers to guarantee basic
//! invariants: one record per (month, item), profit always derived from
//! revenue − COGS − marketing, and currency rounded to 2 decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// One Month×Item row of financial and inventory metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Month key in `YYYY-MM` form (sorts chronologically as a string).
    pub month: String,
    /// Item name, e.g. "T-Shirts".
    pub item: String,
    /// Merchandise category, e.g. "Tops".
    pub category: String,
    /// Units sold this month.
    pub sales_quantity: u64,
    /// Revenue in dollars, 2 decimal places.
    pub sales_revenue: Decimal,
    /// Cost of goods sold in dollars, 2 decimal places.
    pub cogs: Decimal,
    /// Derived: `round2(sales_revenue - cogs - marketing_dollars)`.
    pub profit: Decimal,
    /// Units on hand at month end.
    pub inventory_quantity: u64,
    /// Marketing spend in dollars, 2 decimal places.
    pub marketing_dollars: Decimal,
}

/// The full collection of records for the rolling 12-month window.
///
/// Serializes transparently as the bare record array, which is the `data`
/// field of the session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub records: Vec<Record>,
}

/// Column sums for one month of a dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthTotals {
    pub sales_quantity: u64,
    pub sales_revenue: Decimal,
    pub cogs: Decimal,
    pub profit: Decimal,
    pub inventory_quantity: u64,
    pub marketing_dollars: Decimal,
}

/// Round a currency amount to 2 decimal places (banker's rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Round a quantity to the nearest whole unit, floored at zero.
pub fn round_quantity(value: Decimal) -> u64 {
    value.round_dp(0).to_u64().unwrap_or(0)
}

/// Per-row unit price/cost basis with dataset-wide median fallbacks.
///
/// Zero-quantity rows have no observable unit price, so they fall back to the
/// column median. The medians are computed once per construction, giving a
/// single consistent fallback for an entire transform invocation.
pub struct UnitBasis {
    median_price: Decimal,
    median_cost: Decimal,
}

impl UnitBasis {
    /// Derive the unit basis for a dataset.
    pub fn of(dataset: &Dataset) -> Self {
        let mut prices = Vec::new();
        let mut costs = Vec::new();
        for r in &dataset.records {
            if r.sales_quantity > 0 {
                let qty = Decimal::from(r.sales_quantity);
                prices.push(r.sales_revenue / qty);
                costs.push(r.cogs / qty);
            }
        }
        UnitBasis {
            median_price: median(&mut prices),
            median_cost: median(&mut costs),
        }
    }

    /// Unit selling price of a row, or the column median when quantity is 0.
    pub fn unit_price(&self, record: &Record) -> Decimal {
        if record.sales_quantity == 0 {
            self.median_price
        } else {
            record.sales_revenue / Decimal::from(record.sales_quantity)
        }
    }

    /// Unit cost of a row, or the column median when quantity is 0.
    pub fn unit_cost(&self, record: &Record) -> Decimal {
        if record.sales_quantity == 0 {
            self.median_cost
        } else {
            record.cogs / Decimal::from(record.sales_quantity)
        }
    }
}

fn median(values: &mut [Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.sort();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / Decimal::TWO
    }
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The maximum month string present, or `None` for an empty dataset.
    pub fn latest_month(&self) -> Option<&str> {
        self.records.iter().map(|r| r.month.as_str()).max()
    }

    /// Rows satisfying a predicate.
    pub fn rows_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Record>
    where
        P: Fn(&Record) -> bool + 'a,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    /// Column sums over one month. All-zero totals for an absent month.
    pub fn month_totals(&self, month: &str) -> MonthTotals {
        let mut t = MonthTotals::default();
        for r in self.records.iter().filter(|r| r.month == month) {
            t.sales_quantity += r.sales_quantity;
            t.sales_revenue += r.sales_revenue;
            t.cogs += r.cogs;
            t.profit += r.profit;
            t.inventory_quantity += r.inventory_quantity;
            t.marketing_dollars += r.marketing_dollars;
        }
        t
    }

    /// Column sums over the latest month, or all zeros when empty.
    pub fn latest_totals(&self) -> MonthTotals {
        match self.latest_month() {
            Some(month) => {
                let month = month.to_string();
                self.month_totals(&month)
            }
            None => MonthTotals::default(),
        }
    }

    /// Re-derive revenue, COGS, and profit for every row from per-unit
    /// price/cost, in the fixed order quantity → price/cost → revenue/COGS →
    /// profit, rounding currency to 2 decimal places. Idempotent; a no-op on
    /// an empty dataset.
    pub fn recompute(&self) -> Dataset {
        if self.records.is_empty() {
            return self.clone();
        }
        let basis = UnitBasis::of(self);
        let records = self
            .records
            .iter()
            .map(|r| {
                let qty = Decimal::from(r.sales_quantity);
                let mut out = r.clone();
                out.sales_revenue = round2(qty * basis.unit_price(r));
                out.cogs = round2(qty * basis.unit_cost(r));
                out.profit = round2(out.sales_revenue - out.cogs - out.marketing_dollars);
                out
            })
            .collect();
        Dataset { records }
    }
}

/// Aggregate before/after deltas for the latest month.
///
/// Percent fields are relative change versus the pre-transform totals ×100;
/// exactly 0 when the baseline total is 0 (explicit policy, never a division
/// error). All currency deltas carry 2 decimal places.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub sales_quantity: i64,
    pub sales_revenue: Decimal,
    pub cogs: Decimal,
    pub profit: Decimal,
    pub inventory_quantity: i64,
    pub marketing_dollars: Decimal,
    pub revenue_percent: Decimal,
    pub profit_percent: Decimal,
}

impl ImpactSummary {
    /// Deltas between two monthly totals, with zero-baseline percent guard.
    pub fn between(before: &MonthTotals, after: &MonthTotals) -> Self {
        ImpactSummary {
            sales_quantity: after.sales_quantity as i64 - before.sales_quantity as i64,
            sales_revenue: round2(after.sales_revenue - before.sales_revenue),
            cogs: round2(after.cogs - before.cogs),
            profit: round2(after.profit - before.profit),
            inventory_quantity: after.inventory_quantity as i64
                - before.inventory_quantity as i64,
            marketing_dollars: round2(after.marketing_dollars - before.marketing_dollars),
            revenue_percent: percent_change(before.sales_revenue, after.sales_revenue),
            profit_percent: percent_change(before.profit, after.profit),
        }
    }
}

fn percent_change(before: Decimal, after: Decimal) -> Decimal {
    if before == Decimal::ZERO {
        Decimal::ZERO
    } else {
        round2((after - before) / before * Decimal::ONE_HUNDRED)
    }
}

/// Audit record of one confirmed weekly choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub week: u8,
    pub event_id: String,
    pub choice_id: String,
    pub impact: ImpactSummary,
    pub student_feedback: Vec<String>,
    /// Mutable annotation, default empty; only the most recent entry may be
    /// edited.
    #[serde(default)]
    pub instructor_notes: String,
}

/// Validation errors for dataset invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Month strings must be `YYYY-MM`.
    #[error("malformed month string: {0}")]
    BadMonth(String),
    /// Monetary fields must be non-negative (profit may be negative).
    #[error("negative monetary value for {item} in {month}")]
    NegativeMoney { month: String, item: String },
    /// Profit must equal `round2(revenue - cogs - marketing)`.
    #[error("profit disagrees with revenue - cogs - marketing for {item} in {month}")]
    ProfitMismatch { month: String, item: String },
    /// Exactly one record per (month, item) pair.
    #[error("duplicate record for {item} in {month}")]
    DuplicateRecord { month: String, item: String },
}

/// Validate one record's field-level invariants.
pub fn validate_record(r: &Record) -> Result<(), ValidationError> {
    if !is_valid_month(&r.month) {
        return Err(ValidationError::BadMonth(r.month.clone()));
    }
    if r.sales_revenue < Decimal::ZERO
        || r.cogs < Decimal::ZERO
        || r.marketing_dollars < Decimal::ZERO
    {
        return Err(ValidationError::NegativeMoney {
            month: r.month.clone(),
            item: r.item.clone(),
        });
    }
    if r.profit != round2(r.sales_revenue - r.cogs - r.marketing_dollars) {
        return Err(ValidationError::ProfitMismatch {
            month: r.month.clone(),
            item: r.item.clone(),
        });
    }
    Ok(())
}

/// Validate a whole dataset, including the one-record-per-(month, item) rule.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationError> {
    let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();
    for r in &dataset.records {
        validate_record(r)?;
        if !seen.insert((r.month.as_str(), r.item.as_str())) {
            return Err(ValidationError::DuplicateRecord {
                month: r.month.clone(),
                item: r.item.clone(),
            });
        }
    }
    Ok(())
}

fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || !bytes[5..].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let mm = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    (1..=12).contains(&mm)
}
