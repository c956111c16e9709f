//! Inventory series: items, quantities, lots, sites and transaction history.

use super::available_quantity;
use crate::calendar::{gp_cur_date, gp_epoch_start};
use crate::gp_entity;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

gp_entity! {
    /// Item Master
    pub struct ItemMaster : "IV00101" {
        item: String => "ITEMNMBR", StripString(31), key;
        description: String => "ITEMDESC", StripString(101);
        short_name: String => "ITMSHNAM", StripString(15);
        item_type: i32 => "ITEMTYPE", Integer;
        standard_cost: Decimal => "STNDCOST", Numeric(19, 5);
        current_cost: Decimal => "CURRCOST", Numeric(19, 5);
        quantity_decimals: i32 => "DECPLQTY", Integer;
        currency_decimals: i32 => "DECPLCUR", Integer;
        tracking_option: i32 => "ITMTRKOP", Integer;
        class_code: String => "ITMCLSCD", StripString(11);
        uofm_schedule: String => "UOMSCHDL", StripString(11);
        alternate_item_1: String => "ALTITEM1", StripString(31);
        alternate_item_2: String => "ALTITEM2", StripString(31);
        user_category_1: String => "USCATVLS_1", StripString(11);
        user_category_2: String => "USCATVLS_2", StripString(11);
        user_category_3: String => "USCATVLS_3", StripString(11);
        user_category_4: String => "USCATVLS_4", StripString(11);
        user_category_5: String => "USCATVLS_5", StripString(11);
        user_category_6: String => "USCATVLS_6", StripString(11);
        default_site: String => "LOCNCODE", StripString(11);
        inventory_account_index: i32 => "IVIVINDX", Integer;
    }
}

impl ItemMaster {
    /// A lot-tracked sales inventory item. The current cost starts at the standard cost.
    pub fn new(
        item: impl Into<String>,
        description: impl Into<String>,
        short_name: impl Into<String>,
        standard_cost: Decimal,
        default_site: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            description: description.into(),
            short_name: short_name.into(),
            item_type: 1,
            standard_cost,
            current_cost: standard_cost,
            quantity_decimals: 1,
            currency_decimals: 3,
            tracking_option: 3,
            class_code: "MAIN".to_string(),
            uofm_schedule: "EACH".to_string(),
            alternate_item_1: String::new(),
            alternate_item_2: String::new(),
            user_category_1: String::new(),
            user_category_2: String::new(),
            user_category_3: String::new(),
            user_category_4: String::new(),
            user_category_5: String::new(),
            user_category_6: String::new(),
            default_site: default_site.into(),
            inventory_account_index: 147,
        }
    }
}

gp_entity! {
    /// Item Quantity Master
    ///
    /// One row per item and site, plus the item-wide summary row with record type 1.
    pub struct ItemQuantityMaster : "IV00102" {
        item: String => "ITEMNMBR", StripString(31), key;
        site: String => "LOCNCODE", StripString(11), key;
        record_type: i32 => "RCRDTYPE", Integer, key;
        bin: String => "BINNMBR", StripString(21);
        on_hand: Decimal => "QTYONHND", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        sold: Decimal => "QTYSOLD", Numeric(19, 5);
        landed_cost_group: String => "Landed_Cost_Group_ID", StripString(15);
        order_policy: i32 => "ORDERPOLICY", Integer;
        days_of_supply: i32 => "NMBROFDYS", Integer;
        order_multiple: Decimal => "ORDERMULTIPLE", Numeric(19, 5);
        replenishment_method: i32 => "REPLENISHMENTMETHOD", Integer;
        include_in_planning: i32 => "INCLDDINPLNNNG", Integer;
        forecast_consumption_period: i32 => "FRCSTCNSMPTNPRD", Integer;
        replenishment_level: i32 => "ReplenishmentLevel", Integer;
        po_order_method: i32 => "POPOrderMethod", Integer;
        po_vendor_selection: i32 => "POPVendorSelection", Integer;
        po_pricing_selection: i32 => "POPPricingSelection", Integer;
        include_allocations: i32 => "IncludeAllocations", Integer;
        include_backorders: i32 => "IncludeBackorders", Integer;
        include_requisitions: i32 => "IncludeRequisitions", Integer;
        pick_ticket_option: i32 => "PICKTICKETITEMOPT", Integer;
        include_mrp_move_in: i32 => "INCLDMRPMOVEIN", Integer;
        include_mrp_move_out: i32 => "INCLDMRPMOVEOUT", Integer;
        include_mrp_cancel: i32 => "INCLDMRPCANCEL", Integer;
    }
    foreign_keys {
        ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
    }
}

impl ItemQuantityMaster {
    /// The site record (record type 2) of `item` at `site`, with no stock.
    pub fn new(item: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            site: site.into(),
            record_type: 2,
            bin: String::new(),
            on_hand: Decimal::ZERO,
            allocated: Decimal::ZERO,
            sold: Decimal::ZERO,
            landed_cost_group: String::new(),
            order_policy: 1,
            days_of_supply: 1,
            order_multiple: Decimal::ONE,
            replenishment_method: 3,
            include_in_planning: 1,
            forecast_consumption_period: 3,
            replenishment_level: 1,
            po_order_method: 1,
            po_vendor_selection: 1,
            po_pricing_selection: 1,
            include_allocations: 1,
            include_backorders: 1,
            include_requisitions: 1,
            pick_ticket_option: 3,
            include_mrp_move_in: 1,
            include_mrp_move_out: 1,
            include_mrp_cancel: 1,
        }
    }

    /// On hand less positive allocations and sold quantity.
    pub fn available(&self) -> Decimal {
        available_quantity(self.on_hand, self.allocated, self.sold)
    }
}

gp_entity! {
    /// Item Lot Number Master
    pub struct LotMaster : "IV00300" {
        item: String => "ITEMNMBR", StripString(31), key;
        site: String => "LOCNCODE", StripString(11), key;
        date_received: NaiveDateTime => "DATERECD", DateTime, key;
        date_sequence: i32 => "DTSEQNUM", Integer, key;
        quantity_type: i32 => "QTYTYPE", Integer, key;
        lot: String => "LOTNUMBR", StripString(21);
        unit_cost: Decimal => "UNITCOST", Numeric(19, 5);
        received: Decimal => "QTYRECVD", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        sold: Decimal => "QTYSOLD", Numeric(19, 5);
    }
    foreign_keys {
        ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
    }
}

impl LotMaster {
    /// A lot received today as on-hand stock.
    pub fn new(
        item: impl Into<String>,
        site: impl Into<String>,
        date_sequence: i32,
        lot: impl Into<String>,
        unit_cost: Decimal,
        received: Decimal,
    ) -> Self {
        Self {
            item: item.into(),
            site: site.into(),
            date_received: gp_cur_date(),
            date_sequence,
            quantity_type: 1,
            lot: lot.into(),
            unit_cost,
            received,
            allocated: Decimal::ZERO,
            sold: Decimal::ZERO,
        }
    }

    /// Received less positive allocations and sold quantity.
    pub fn available(&self) -> Decimal {
        available_quantity(self.received, self.allocated, self.sold)
    }
}

gp_entity! {
    /// Item Lot Attribute Master
    pub struct LotAttribute : "IV00301" {
        item: String => "ITEMNMBR", StripString(31), key;
        lot: String => "LOTNUMBR", StripString(21), key;
        attribute_1: String => "LOTATRB1", StripString(11);
        attribute_2: String => "LOTATRB2", StripString(11);
        attribute_3: String => "LOTATRB3", StripString(11);
        attribute_4: NaiveDateTime => "LOTATRB4", DateTime;
        attribute_5: NaiveDateTime => "LOTATRB5", DateTime;
    }
}

impl LotAttribute {
    pub fn new(item: impl Into<String>, lot: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            lot: lot.into(),
            attribute_1: String::new(),
            attribute_2: String::new(),
            attribute_3: String::new(),
            attribute_4: gp_epoch_start(),
            attribute_5: gp_epoch_start(),
        }
    }
}

gp_entity! {
    /// Inventory U of M Schedule Setup
    pub struct UofMScheduleHeader : "IV40201" {
        schedule: String => "UOMSCHDL", StripString(11), key;
        description: String => "UMSCHDSC", StripString(31);
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
        base_uofm: String => "BASEUOFM", StripString(9);
        quantity_decimals: i32 => "UMDPQTYS", Integer;
    }
}

impl UofMScheduleHeader {
    pub fn new(
        schedule: impl Into<String>,
        description: impl Into<String>,
        base_uofm: impl Into<String>,
    ) -> Self {
        Self {
            schedule: schedule.into(),
            description: description.into(),
            note_index: None,
            base_uofm: base_uofm.into(),
            quantity_decimals: 1,
        }
    }
}

gp_entity! {
    /// Site Setup
    pub struct SiteSetup : "IV40700" {
        site: String => "LOCNCODE", StripString(11), key;
        description: String => "LOCNDSCR", StripString(31);
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
}

impl SiteSetup {
    pub fn new(site: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            description: description.into(),
            note_index: None,
        }
    }
}

gp_entity! {
    /// Inventory Transaction History
    pub struct TrxHistoryHeader : "IV30200" {
        trx_source: String => "TRXSORCE", StripString(13), key;
        document_type: i32 => "IVDOCTYP", Integer, key;
        document_number: String => "DOCNUMBR", StripString(21), key;
        document_date: NaiveDateTime => "DOCDATE", DateTime;
        batch_source: String => "BCHSOURC", StripString(15);
        batch_number: String => "BACHNUMB", StripString(15);
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
        gl_posting_date: NaiveDateTime => "GLPOSTDT", DateTime;
        source_reference: String => "SRCRFRNCNMBR", StripString(31);
        source_indicator: i32 => "SOURCEINDICATOR", Integer;
    }
    foreign_keys {
        ["IVDOCTYP", "DOCNUMBR", "SRCRFRNCNMBR"] => "WO010302" ["IVDOCTYP", "IVDOCNBR", "MANUFACTUREORDER_I"];
    }
}

impl TrxHistoryHeader {
    /// An adjustment document (type 1).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trx_source: impl Into<String>,
        document_number: impl Into<String>,
        document_date: NaiveDateTime,
        batch_source: impl Into<String>,
        batch_number: impl Into<String>,
        gl_posting_date: NaiveDateTime,
        source_reference: impl Into<String>,
        source_indicator: i32,
    ) -> Self {
        Self {
            trx_source: trx_source.into(),
            document_type: 1,
            document_number: document_number.into(),
            document_date,
            batch_source: batch_source.into(),
            batch_number: batch_number.into(),
            note_index: None,
            gl_posting_date,
            source_reference: source_reference.into(),
            source_indicator,
        }
    }
}

gp_entity! {
    /// Inventory Transaction Amounts History
    pub struct TrxHistoryLine : "IV30300" {
        trx_source: String => "TRXSORCE", StripString(13);
        document_type: i32 => "DOCTYPE", Integer, key;
        document_number: String => "DOCNUMBR", StripString(21), key;
        line_sequence: Decimal => "LNSEQNBR", Numeric(19, 5), key;
        document_date: NaiveDateTime => "DOCDATE", DateTime;
        history_module: String => "HSTMODUL", StripString(3);
        customer: String => "CUSTNMBR", StripString(15);
        item: String => "ITEMNMBR", StripString(31);
        uofm: String => "UOFM", StripString(19);
        quantity: Decimal => "TRXQTY", Numeric(19, 5);
        unit_cost: Decimal => "UNITCOST", Numeric(19, 5);
        extended_cost: Decimal => "EXTDCOST", Numeric(19, 5);
        site: String => "TRXLOCTN", StripString(11);
        transfer_to_site: String => "TRNSTLOC", StripString(11);
        from_quantity_type: i32 => "TRFQTYTY", Integer;
        to_quantity_type: i32 => "TRTQTYTY", Integer;
        inventory_index: i32 => "IVIVINDX", Integer;
        inventory_offset_index: i32 => "IVIVOFIX", Integer;
        currency_decimals: i32 => "DECPLCUR", Integer;
        quantity_decimals: i32 => "DECPLQTY", Integer;
        quantity_in_base_uofm: Decimal => "QTYBSUOM", Numeric(19, 5);
    }
    foreign_keys {
        ["TRXSORCE", "DOCTYPE", "DOCNUMBR"] => "IV30200" ["TRXSORCE", "IVDOCTYP", "DOCNUMBR"];
        ["DOCNUMBR", "DOCTYPE", "LNSEQNBR", "ITEMNMBR"] => "WO010302" ["IVDOCNBR", "IVDOCTYP", "LNSEQNBR", "ITEMNMBR"];
    }
}

impl TrxHistoryLine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trx_source: impl Into<String>,
        document_type: i32,
        document_number: impl Into<String>,
        line_sequence: Decimal,
        document_date: NaiveDateTime,
        history_module: impl Into<String>,
        customer: impl Into<String>,
        item: impl Into<String>,
        uofm: impl Into<String>,
        quantity: Decimal,
        unit_cost: Decimal,
        extended_cost: Decimal,
        site: impl Into<String>,
        transfer_to_site: impl Into<String>,
        inventory_index: i32,
        inventory_offset_index: i32,
        quantity_in_base_uofm: Decimal,
    ) -> Self {
        Self {
            trx_source: trx_source.into(),
            document_type,
            document_number: document_number.into(),
            line_sequence,
            document_date,
            history_module: history_module.into(),
            customer: customer.into(),
            item: item.into(),
            uofm: uofm.into(),
            quantity,
            unit_cost,
            extended_cost,
            site: site.into(),
            transfer_to_site: transfer_to_site.into(),
            from_quantity_type: 1,
            to_quantity_type: 3,
            inventory_index,
            inventory_offset_index,
            currency_decimals: 3,
            quantity_decimals: 1,
            quantity_in_base_uofm,
        }
    }
}

gp_entity! {
    /// Item Serial and Lot Number History
    pub struct TrxHistorySerialLot : "IV30400" {
        trx_source: String => "TRXSORCE", StripString(13), key;
        document_type: i32 => "IVDOCTYP", Integer, key;
        document_number: String => "DOCNUMBR", StripString(21), key;
        line_sequence: Decimal => "LNSEQNBR", Numeric(19, 5), key;
        serial_lot_sequence: i32 => "SLTSQNUM", Integer, key;
        serial_lot_number: String => "SERLTNUM", StripString(21);
        quantity: Decimal => "SERLTQTY", Numeric(19, 5);
        from_bin: String => "FROMBIN", StripString(15);
        to_bin: String => "TOBIN", StripString(15);
        item: String => "ITEMNMBR", StripString(31);
        manufacture_date: NaiveDateTime => "MFGDATE", DateTime;
        expiration_date: NaiveDateTime => "EXPNDATE", DateTime;
    }
    foreign_keys {
        ["TRXSORCE", "IVDOCTYP", "DOCNUMBR", "LNSEQNBR"] => "IV30300" ["TRXSORCE", "DOCTYPE", "DOCNUMBR", "LNSEQNBR"];
    }
}

impl TrxHistorySerialLot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trx_source: impl Into<String>,
        document_number: impl Into<String>,
        line_sequence: Decimal,
        serial_lot_sequence: i32,
        serial_lot_number: impl Into<String>,
        quantity: Decimal,
        from_bin: impl Into<String>,
        to_bin: impl Into<String>,
        item: impl Into<String>,
        manufacture_date: NaiveDateTime,
        expiration_date: NaiveDateTime,
    ) -> Self {
        Self {
            trx_source: trx_source.into(),
            document_type: 1,
            document_number: document_number.into(),
            line_sequence,
            serial_lot_sequence,
            serial_lot_number: serial_lot_number.into(),
            quantity,
            from_bin: from_bin.into(),
            to_bin: to_bin.into(),
            item: item.into(),
            manufacture_date,
            expiration_date,
        }
    }
}

gp_entity! {
    /// Inventory Transaction Detail History
    pub struct TrxHistoryLineDetail : "IV30301" {
        document_type: i32 => "DOCTYPE", Integer, key;
        document_number: String => "DOCNUMBR", StripString(21), key;
        line_sequence: Decimal => "LNSEQNBR", Numeric(19, 5), key;
        detail_sequence: i32 => "DTLSEQNM", Integer, key;
        quantity_type: i32 => "QTYTYPE", Integer;
        receipt_number: String => "RCPTNMBR", StripString(21);
        receipt_quantity: Decimal => "RCPTQTY", Numeric(19, 5);
        receipt_extended_cost: Decimal => "RCPTEXCT", Numeric(19, 5);
    }
}

impl TrxHistoryLineDetail {
    pub fn new(
        document_type: i32,
        document_number: impl Into<String>,
        line_sequence: Decimal,
        detail_sequence: i32,
        receipt_number: impl Into<String>,
        receipt_quantity: Decimal,
        receipt_extended_cost: Decimal,
    ) -> Self {
        Self {
            document_type,
            document_number: document_number.into(),
            line_sequence,
            detail_sequence,
            quantity_type: 1,
            receipt_number: receipt_number.into(),
            receipt_quantity,
            receipt_extended_cost,
        }
    }
}

gp_entity! {
    /// Inventory Transaction Batch History
    pub struct TrxHistoryBatch : "IV30100" {
        trx_source: String => "TRXSORCE", StripString(13), key;
        batch_source: String => "BCHSOURC", StripString(15);
        batch_number: String => "BACHNUMB", StripString(15);
        batch_comment: String => "BCHCOMNT", StripString(61);
        batch_frequency: i32 => "BACHFREQ", Integer;
        posted_date: NaiveDateTime => "POSTEDDT", DateTime;
        history_removed: i32 => "HISTRMVD", Integer;
        batch_total: Decimal => "BCHTOTAL", Numeric(19, 5);
        control_total: Decimal => "CNTRLTOT", Numeric(19, 5);
        control_transaction_count: i32 => "CNTRLTRX", Integer;
        transaction_count: i32 => "NUMOFTRX", Integer;
    }
}

impl TrxHistoryBatch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trx_source: impl Into<String>,
        batch_source: impl Into<String>,
        batch_number: impl Into<String>,
        posted_date: NaiveDateTime,
        history_removed: i32,
        batch_total: Decimal,
        control_total: Decimal,
        control_transaction_count: i32,
        transaction_count: i32,
    ) -> Self {
        Self {
            trx_source: trx_source.into(),
            batch_source: batch_source.into(),
            batch_number: batch_number.into(),
            batch_comment: String::new(),
            batch_frequency: 1,
            posted_date,
            history_removed,
            batch_total,
            control_total,
            control_transaction_count,
            transaction_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn test_item_current_cost_follows_standard_cost() {
        let item = ItemMaster::new("WIDGET", "Widget, blue", "WIDGET", Decimal::new(1250, 2), "PCSF");
        assert_eq!(item.current_cost, item.standard_cost);
        assert_eq!(item.class_code, "MAIN");
        assert_eq!(item.inventory_account_index, 147);
    }

    #[test]
    fn test_item_quantity_available() {
        let qty = ItemQuantityMaster {
            on_hand: Decimal::from(20),
            allocated: Decimal::from(5),
            sold: Decimal::from(3),
            ..ItemQuantityMaster::new("WIDGET", "PCSF")
        };
        assert_eq!(qty.available(), Decimal::from(12));

        let reversed = ItemQuantityMaster {
            allocated: Decimal::from(-5),
            ..qty
        };
        assert_eq!(reversed.available(), Decimal::from(17));
    }

    #[test]
    fn test_lot_available() {
        let lot = LotMaster {
            allocated: Decimal::from(4),
            ..LotMaster::new("WIDGET", "PCSF", 1, "L-100", Decimal::ONE, Decimal::from(10))
        };
        assert_eq!(lot.available(), Decimal::from(6));
        assert_eq!(lot.date_received, gp_cur_date());
    }

    #[test]
    fn test_lot_attribute_dates_default_to_epoch() {
        let attrs = LotAttribute::new("WIDGET", "L-100");
        assert_eq!(attrs.attribute_4, gp_epoch_start());
        assert_eq!(attrs.attribute_5, gp_epoch_start());
    }

    #[test]
    fn test_history_foreign_keys() {
        let table = TrxHistoryLine::table();
        assert_eq!(table.foreign_keys.len(), 2);
        assert_eq!(table.references_to("IV30200").count(), 1);
        assert_eq!(
            TrxHistorySerialLot::table().foreign_keys[0].referenced_columns,
            &["TRXSORCE", "DOCTYPE", "DOCNUMBR", "LNSEQNBR"]
        );
        // The line's document source is not part of its key.
        assert!(!table.column("TRXSORCE").unwrap().primary_key);
    }

    #[test]
    fn test_note_index_tables() {
        assert!(SiteSetup::table().note_index_column().is_some());
        assert!(UofMScheduleHeader::table().note_index_column().is_some());
        assert!(TrxHistoryHeader::table().note_index_column().is_some());
        assert!(ItemMaster::table().note_index_column().is_none());
    }
}
