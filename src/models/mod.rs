//! Entity mappings for the GP 10 company database.
//!
//! Entities have a `new` constructor taking the columns that have no
//! sensible default. The remaining fields start at the values GP itself
//! writes and can be overridden with struct update syntax:
//!
//! ```rust
//! use gp10::models::inventory::ItemQuantityMaster;
//! use gp10::Decimal;
//!
//! let qty = ItemQuantityMaster {
//!     on_hand: Decimal::from(10),
//!     ..ItemQuantityMaster::new("WIDGET", "PCSF")
//! };
//! assert_eq!(qty.available(), Decimal::from(10));
//! ```
//!
//! Tables without any defaulted column are built with a struct literal.

pub mod company;
pub mod financial;
pub mod inventory;
pub mod manufacturing;
pub mod purchasing;
pub mod sales;

use rust_decimal::Decimal;

/// User recorded on entries created by this library.
pub const DEFAULT_USER: &str = "sa";
/// Site used when none is given.
pub const DEFAULT_SITE: &str = "PCSF";
/// Functional currency of the company.
pub const DEFAULT_CURRENCY: &str = "Z-US$";
pub const DEFAULT_CHECKBOOK: &str = "UBOC";
/// Batch source of receivings transaction entry.
pub const RECEIVINGS_BATCH_SOURCE: &str = "Rcvg Trx Entry";

/// Quantity still free to allocate.
///
/// A negative allocation (GP writes those when reversing) does not add stock.
pub(crate) fn available_quantity(total: Decimal, allocated: Decimal, sold: Decimal) -> Decimal {
    total - allocated.max(Decimal::ZERO) - sold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_quantity() {
        let d = Decimal::from;
        assert_eq!(available_quantity(d(10), d(3), d(2)), d(5));
        assert_eq!(available_quantity(d(10), d(-4), d(2)), d(8));
        assert_eq!(available_quantity(d(1), d(1), d(1)), d(-1));
    }
}
