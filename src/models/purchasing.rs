//! Purchasing series: vendors and receivings.

use super::{DEFAULT_CURRENCY, DEFAULT_USER, RECEIVINGS_BATCH_SOURCE};
use crate::calendar::gp_cur_date;
use crate::error::GpResult;
use crate::executor::GpExecutor;
use crate::gp_entity;
use crate::persist::find_by_key;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_query::Value;

gp_entity! {
    /// PM Vendor Master File
    pub struct Vendor : "PM00200" {
        vendor: String => "VENDORID", StripString(15), key;
        ship_method: String => "SHIPMTHD", StripString(15);
    }
}

impl Vendor {
    pub fn new(vendor: impl Into<String>, ship_method: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            ship_method: ship_method.into(),
        }
    }
}

/// The ship method on file for `vendor`, or `None` for an unknown vendor.
///
/// Receipts copy this value; look it up before building one.
///
/// # Errors
///
/// Propagates executor and row decoding errors.
pub fn vendor_ship_method<E>(executor: &E, vendor: &str) -> GpResult<Option<String>>
where
    E: GpExecutor + ?Sized,
{
    let found: Option<Vendor> = find_by_key(executor, &[Value::from(vendor)])?;
    Ok(found.map(|v| v.ship_method))
}

gp_entity! {
    /// Purchasing Receipt History
    pub struct ReceiptHistory : "POP30300" {
        receipt: String => "POPRCTNM", StripString(17), key;
        receipt_date: NaiveDateTime => "receiptdate", DateTime;
        batch_number: String => "BACHNUMB", StripString(15);
        vendor: String => "VENDORID", StripString(15);
        vendor_name: String => "VENDNAME", StripString(65);
        vendor_document: String => "VNDDOCNM", StripString(21);
        created: NaiveDateTime => "CREATDDT", DateTime;
        modified: NaiveDateTime => "MODIFDT", DateTime;
        currency: String => "CURNCYID", StripString(15);
        ship_method: String => "SHIPMTHD", StripString(15);
    }
}

impl ReceiptHistory {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        receipt: impl Into<String>,
        receipt_date: NaiveDateTime,
        batch_number: impl Into<String>,
        vendor: impl Into<String>,
        vendor_name: impl Into<String>,
        vendor_document: impl Into<String>,
        ship_method: impl Into<String>,
    ) -> Self {
        let today = gp_cur_date();
        Self {
            receipt: receipt.into(),
            receipt_date,
            batch_number: batch_number.into(),
            vendor: vendor.into(),
            vendor_name: vendor_name.into(),
            vendor_document: vendor_document.into(),
            created: today,
            modified: today,
            currency: DEFAULT_CURRENCY.to_string(),
            ship_method: ship_method.into(),
        }
    }
}

gp_entity! {
    /// Purchasing Receipt Work
    pub struct Receipt : "POP10300" {
        receipt: String => "POPRCTNM", StripString(17), key;
        receipt_date: NaiveDateTime => "receiptdate", DateTime;
        gl_posting_date: NaiveDateTime => "GLPOSTDT", DateTime;
        batch_number: String => "BACHNUMB", StripString(15);
        vendor: String => "VENDORID", StripString(15);
        vendor_name: String => "VENDNAME", StripString(65);
        vendor_document: String => "VNDDOCNM", StripString(21);
        created: NaiveDateTime => "CREATDT", DateTime;
        modified: NaiveDateTime => "MODIFDT", DateTime;
        currency: String => "CURNCYID", StripString(15);
        ship_method: String => "SHIPMTHD", StripString(15);
        subtotal: Decimal => "SUBTOTAL", Numeric(19, 5);
        originating_subtotal: Decimal => "ORDUBTOT", Numeric(19, 5);
        purchase_type: i32 => "POPTYPE", Integer;
        batch_source: String => "BCHSOURC", StripString(15);
        payment_terms: String => "PYMTRMID", StripString(21);
        due_date: NaiveDateTime => "DUEDATE", DateTime;
        reference: String => "REFERENCE", StripString(31);
        entered_by: String => "USER2ENT", StripString(15);
        currency_index: i32 => "CURRNIDX", Integer;
        freight_taxable: i32 => "Purchase_Freight_Taxable", Integer;
        misc_taxable: i32 => "Purchase_Misc_Taxable", Integer;
        remit_to_address: String => "VADCDTRO", StripString(15);
        landed_cost: Decimal => "Total_Landed_Cost_Amount", Numeric(19, 5);
    }
}

impl Receipt {
    /// A shipment receipt dated today in the functional currency.
    ///
    /// `ship_method` usually comes from [`vendor_ship_method`] and
    /// `currency_index` from the currency setup of the company.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        receipt: impl Into<String>,
        batch_number: impl Into<String>,
        vendor: impl Into<String>,
        vendor_name: impl Into<String>,
        vendor_document: impl Into<String>,
        ship_method: impl Into<String>,
        due_date: NaiveDateTime,
        currency_index: i32,
    ) -> Self {
        let today = gp_cur_date();
        Self {
            receipt: receipt.into(),
            receipt_date: today,
            gl_posting_date: today,
            batch_number: batch_number.into(),
            vendor: vendor.into(),
            vendor_name: vendor_name.into(),
            vendor_document: vendor_document.into(),
            created: today,
            modified: today,
            currency: DEFAULT_CURRENCY.to_string(),
            ship_method: ship_method.into(),
            subtotal: Decimal::ZERO,
            originating_subtotal: Decimal::ZERO,
            purchase_type: 1,
            batch_source: RECEIVINGS_BATCH_SOURCE.to_string(),
            payment_terms: "Net 30".to_string(),
            due_date,
            reference: "Receivings Transaction Entry".to_string(),
            entered_by: DEFAULT_USER.to_string(),
            currency_index,
            freight_taxable: 2,
            misc_taxable: 2,
            remit_to_address: "REMIT TO".to_string(),
            landed_cost: Decimal::ZERO,
        }
    }
}

gp_entity! {
    /// Purchasing Receipt Line
    pub struct ReceiptLine : "POP10310" {
        receipt: String => "POPRCTNM", StripString(17), key;
        line: i32 => "RCPTLNNM", Integer, key;
        purchase_order: String => "PONUMBER", StripString(17);
        item: String => "ITEMNMBR", StripString(31);
        item_description: String => "ITEMSDESC", StripString(101);
        vendor_item: String => "VNDITNUM", StripString(31);
        vendor_item_description: String => "VNDITDSC", StripString(101);
        quantity_in_base_uofm: Decimal => "UMQTYINB", Numeric(19, 5);
        inventory_index: i32 => "INVINDX", Integer;
        uofm: String => "UOFM", StripString(9);
        unit_cost: Decimal => "UNITCOST", Numeric(19, 5);
        extended_cost: Decimal => "EXTDCOST", Numeric(19, 5);
        site: String => "LOCNCODE", StripString(11);
        currency_decimals: i32 => "DECPLCUR", Integer;
        quantity_decimals: i32 => "DECPLQTY", Integer;
        tracking_option: i32 => "ITMTRKOP", Integer;
        valuation_method: i32 => "VCNTMTHD", Integer;
        currency: String => "CURNCYID", StripString(15);
        originating_unit_cost: Decimal => "ORUNTCST", Numeric(19, 5);
        currency_index: i32 => "CURRNIDX", Integer;
        originating_extended_cost: Decimal => "OREXTCST", Numeric(19, 5);
        originating_currency_decimals: i32 => "ODECPLCU", Integer;
        item_taxable: i32 => "Purchase_IV_Item_Taxable", Integer;
        revalue_inventory: i32 => "Revalue_Inventory", Integer;
        price_variance_index: i32 => "PURPVIDX", Integer;
        remaining_ap_amount: Decimal => "Remaining_AP_Amount", Numeric(19, 5);
        ship_method: String => "SHIPMTHD", StripString(15);
    }
    foreign_keys {
        ["POPRCTNM"] => "POP10300" ["POPRCTNM"];
    }
}

impl ReceiptLine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        receipt: impl Into<String>,
        line: i32,
        purchase_order: impl Into<String>,
        item: impl Into<String>,
        item_description: impl Into<String>,
        vendor_item: impl Into<String>,
        vendor_item_description: impl Into<String>,
        quantity_in_base_uofm: Decimal,
        inventory_index: i32,
        uofm: impl Into<String>,
        unit_cost: Decimal,
        site: impl Into<String>,
        currency: impl Into<String>,
        originating_unit_cost: Decimal,
        currency_index: i32,
        price_variance_index: i32,
        ship_method: impl Into<String>,
    ) -> Self {
        Self {
            receipt: receipt.into(),
            line,
            purchase_order: purchase_order.into(),
            item: item.into(),
            item_description: item_description.into(),
            vendor_item: vendor_item.into(),
            vendor_item_description: vendor_item_description.into(),
            quantity_in_base_uofm,
            inventory_index,
            uofm: uofm.into(),
            unit_cost,
            extended_cost: Decimal::ZERO,
            site: site.into(),
            currency_decimals: 3,
            quantity_decimals: 3,
            tracking_option: 3,
            valuation_method: 1,
            currency: currency.into(),
            originating_unit_cost,
            currency_index,
            originating_extended_cost: Decimal::ZERO,
            originating_currency_decimals: 2,
            item_taxable: 2,
            revalue_inventory: 1,
            price_variance_index,
            remaining_ap_amount: Decimal::ZERO,
            ship_method: ship_method.into(),
        }
    }
}
