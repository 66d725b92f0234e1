//! Line amounts and PO totals.
//!
//! The live form and the generated PO document both go through these
//! functions so the numbers always agree. Amounts are plain `f64` in the PO
//! currency; nothing here rounds. Use [`round_currency`] at display time.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use procura_core::{DomainError, DomainResult, ValueObject};

/// Discounted, GST-inclusive amount of one line.
///
/// `rate * quantity * (1 - discount%) * (1 + gst%)`. Out-of-range inputs are
/// not rejected; they simply flow through the arithmetic. Non-finite inputs
/// count as zero.
pub fn calculate_total(rate: f64, gst_percent: f64, discount_percent: f64, quantity: f64) -> f64 {
    LineItem::new(quantity, rate, discount_percent, gst_percent)
        .amounts()
        .total
}

const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Round half away from zero to two decimal places.
///
/// Rounding happens on the decimal value the amount was written as, so
/// `1.005` becomes `1.01` even though its binary form is slightly below it.
/// Non-finite amounts round to zero.
pub fn round_currency(amount: f64) -> f64 {
    Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One priced line of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub quantity: f64,
    pub rate: f64,
    pub discount_percent: f64,
    pub gst_percent: f64,
}

impl ValueObject for LineItem {}

/// Per-line breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAmounts {
    /// `rate * quantity`
    pub gross: f64,
    pub discount: f64,
    /// GST-exclusive amount after discount.
    pub taxable: f64,
    pub gst: f64,
    pub total: f64,
}

impl LineItem {
    pub fn new(quantity: f64, rate: f64, discount_percent: f64, gst_percent: f64) -> Self {
        Self {
            quantity,
            rate,
            discount_percent,
            gst_percent,
        }
    }

    pub fn amounts(&self) -> LineAmounts {
        let quantity = finite_or_zero(self.quantity, "quantity");
        let rate = finite_or_zero(self.rate, "rate");
        let discount_percent = finite_or_zero(self.discount_percent, "discount_percent");
        let gst_percent = finite_or_zero(self.gst_percent, "gst_percent");

        let gross = rate * quantity;
        let taxable = gross * (1.0 - discount_percent / 100.0);
        let gst = taxable * (gst_percent / 100.0);

        LineAmounts {
            gross,
            discount: gross - taxable,
            taxable,
            gst,
            total: taxable * (1.0 + gst_percent / 100.0),
        }
    }

    /// Range checks the PO form applies before submitting.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("quantity", self.quantity),
            ("rate", self.rate),
            ("discount_percent", self.discount_percent),
            ("gst_percent", self.gst_percent),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::validation(format!("{name} must be a finite number")));
        }

        if self.quantity < 0.0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }
        if self.rate < 0.0 {
            return Err(DomainError::validation("rate must not be negative"));
        }
        if !(0.0..=100.0).contains(&self.discount_percent) {
            return Err(DomainError::validation("discount_percent must be within 0..=100"));
        }
        if !(0.0..=100.0).contains(&self.gst_percent) {
            return Err(DomainError::validation("gst_percent must be within 0..=100"));
        }
        Ok(())
    }
}

fn finite_or_zero(value: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(field, %value, "non-finite line item input treated as zero");
        0.0
    }
}

/// Aggregate amounts of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoTotals {
    /// GST-exclusive, after discount.
    pub subtotal: f64,
    pub total_gst: f64,
    pub grand_total: f64,
}

impl PoTotals {
    pub fn from_lines(lines: &[LineItem]) -> Self {
        let (subtotal, total_gst) = lines
            .iter()
            .map(LineItem::amounts)
            .fold((0.0, 0.0), |(subtotal, gst), line| {
                (subtotal + line.taxable, gst + line.gst)
            });

        Self {
            subtotal,
            total_gst,
            grand_total: subtotal + total_gst,
        }
    }
}

pub fn compute_totals(lines: &[LineItem]) -> PoTotals {
    PoTotals::from_lines(lines)
}
