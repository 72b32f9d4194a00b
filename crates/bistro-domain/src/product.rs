//! Menu / catalogue product types.

use rust_decimal::Decimal;

use crate::billing::{BillingError, checked_sum, percent_of, round_money};

wire_enum! {
    pub enum ProductType {
        Veg => "Veg",
        NonVeg => "Non-Veg",
        Beverage => "Beverage",
    }
    default = Veg;
}

/// GST charged on a catalogue product when enabled, in percent.
pub const PRODUCT_GST_PERCENT: u32 = 5;

/// `(gst_amount, total_price)` for a product price.
pub fn price_with_gst(
    sell_price: Decimal,
    gst_enabled: bool,
) -> Result<(Decimal, Decimal), BillingError> {
    let gst = if gst_enabled {
        percent_of(sell_price, Decimal::from(PRODUCT_GST_PERCENT))?
    } else {
        Decimal::ZERO
    };
    Ok((gst, checked_sum([round_money(sell_price), gst])?))
}
