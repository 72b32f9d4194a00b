//! Bill total computation for estimates, purchases and table orders.
//!
//! ```text
//! item_total   = sell_price × quantity
//! subtotal     = Σ item_total
//! discount     = subtotal × pct / 100   | flat amount   (capped at subtotal)
//! service      = subtotal × pct / 100   | flat amount
//! taxable      = subtotal − discount + service
//! tax          = taxable × tax_rate(kind)
//! grand_total  = taxable + tax + extra_charges
//! ```
//!
//! Every derived value is rounded to 2 decimal places, midpoint away from zero.
//! Arithmetic is checked: a result past `Decimal::MAX` is
//! [`BillingError::AmountTooLarge`], never a panic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept on stored and reported money values.
pub const MONEY_SCALE: u32 = 2;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `base × percent / 100`, rounded.
pub fn percent_of(base: Decimal, percent: Decimal) -> Result<Decimal, BillingError> {
    base.checked_mul(percent)
        .and_then(|v| v.checked_div(HUNDRED))
        .map(round_money)
        .ok_or(BillingError::AmountTooLarge)
}

pub fn checked_sum<I>(values: I) -> Result<Decimal, BillingError>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v).ok_or(BillingError::AmountTooLarge)
    })
}

/// Which document a bill belongs to. Decides the tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Printed GST estimate: 18%.
    Estimate,
    /// Restaurant table bill: CGST 2.5% + SGST 2.5%.
    Order,
    /// Supplier purchase, recorded as billed: untaxed.
    Purchase,
}

impl DocumentKind {
    /// Tax rate in percent.
    pub fn tax_percent(self) -> Decimal {
        match self {
            Self::Estimate => Decimal::from(18),
            Self::Order => Decimal::from(5),
            Self::Purchase => Decimal::ZERO,
        }
    }
}

/// One billed line, as embedded in estimates, purchases and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalogue id of the product, when the line was picked from the catalogue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item_name: String,
    pub sell_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn total(&self) -> Result<Decimal, BillingError> {
        self.sell_price
            .checked_mul(Decimal::from(self.quantity))
            .map(round_money)
            .ok_or(BillingError::AmountTooLarge)
    }
}

/// Sum of `sell_price × quantity` over all lines.
pub fn subtotal(items: &[LineItem]) -> Result<Decimal, BillingError> {
    checked_sum(items.iter().map(LineItem::total).collect::<Result<Vec<_>, _>>()?)
}

/// A charge or reduction given either as a percent of the subtotal or as a flat amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Percent(Decimal),
    Amount(Decimal),
}

impl Adjustment {
    /// A supplied percent wins over a supplied amount.
    pub fn from_parts(percent: Option<Decimal>, amount: Option<Decimal>) -> Option<Self> {
        percent.map(Self::Percent).or(amount.map(Self::Amount))
    }

    fn validate(self) -> Result<Self, BillingError> {
        match self {
            Self::Percent(p) if p < Decimal::ZERO || p > HUNDRED => {
                Err(BillingError::PercentOutOfRange(p))
            }
            Self::Amount(a) if a < Decimal::ZERO => Err(BillingError::NegativeAmount(a)),
            other => Ok(other),
        }
    }

    fn apply(self, base: Decimal) -> Result<Decimal, BillingError> {
        match self {
            Self::Percent(p) => percent_of(base, p),
            Self::Amount(a) => Ok(round_money(a)),
        }
    }
}

/// Everything on a bill besides the lines themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Charges {
    pub discount: Option<Adjustment>,
    pub service_charge: Option<Adjustment>,
    /// Added after tax (transport labour).
    pub extra: Decimal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillingError {
    #[error("item {line}: quantity must be at least 1")]
    ZeroQuantity { line: usize },
    #[error("item {line}: price must not be negative")]
    NegativePrice { line: usize },
    #[error("item {line}: name is required")]
    MissingItemName { line: usize },
    #[error("percentage {0} must be between 0 and 100")]
    PercentOutOfRange(Decimal),
    #[error("amount {0} must not be negative")]
    NegativeAmount(Decimal),
    #[error("amount is too large")]
    AmountTooLarge,
}

/// Check that every line is billable. Line numbers in errors are 1-based.
pub fn validate_items(items: &[LineItem]) -> Result<(), BillingError> {
    for (idx, item) in items.iter().enumerate() {
        let line = idx + 1;
        if item.item_name.trim().is_empty() {
            return Err(BillingError::MissingItemName { line });
        }
        if item.sell_price < Decimal::ZERO {
            return Err(BillingError::NegativePrice { line });
        }
        if item.quantity == 0 {
            return Err(BillingError::ZeroQuantity { line });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTotal {
    pub item_name: String,
    pub sell_price: Decimal,
    pub quantity: u32,
    pub total: Decimal,
}

/// Full breakdown of a bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillTotals {
    pub kind: DocumentKind,
    pub lines: Vec<LineTotal>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub service_charge: Decimal,
    pub taxable_amount: Decimal,
    pub tax_percent: Decimal,
    pub tax: Decimal,
    pub extra_charges: Decimal,
    pub grand_total: Decimal,
}

pub fn compute_totals(
    kind: DocumentKind,
    items: &[LineItem],
    charges: &Charges,
) -> Result<BillTotals, BillingError> {
    validate_items(items)?;
    let discount = charges.discount.map(Adjustment::validate).transpose()?;
    let service_charge = charges.service_charge.map(Adjustment::validate).transpose()?;
    if charges.extra < Decimal::ZERO {
        return Err(BillingError::NegativeAmount(charges.extra));
    }

    let lines = items
        .iter()
        .map(|item| -> Result<LineTotal, BillingError> {
            Ok(LineTotal {
                item_name: item.item_name.clone(),
                sell_price: item.sell_price,
                quantity: item.quantity,
                total: item.total()?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let subtotal = checked_sum(lines.iter().map(|l| l.total))?;

    let discount = discount
        .map(|d| d.apply(subtotal))
        .transpose()?
        .unwrap_or_default()
        .min(subtotal);
    let service_charge = service_charge
        .map(|s| s.apply(subtotal))
        .transpose()?
        .unwrap_or_default();

    // discount <= subtotal, so only the additions can overflow.
    let taxable_amount = checked_sum([subtotal - discount, service_charge])?;
    let tax_percent = kind.tax_percent();
    let tax = percent_of(taxable_amount, tax_percent)?;
    let extra_charges = round_money(charges.extra);
    let grand_total = checked_sum([taxable_amount, tax, extra_charges])?;

    Ok(BillTotals {
        kind,
        lines,
        subtotal,
        discount,
        service_charge,
        taxable_amount,
        tax_percent,
        tax,
        extra_charges,
        grand_total,
    })
}
