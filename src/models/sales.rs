//! Sales order processing lines and their lot assignments.
//!
//! Line and serial/lot sequences are ordinals: line 1 is stored as 16384 and a
//! line inserted between lines 1 and 2 can take 1.5.

use super::DEFAULT_SITE;
use crate::calendar::gp_cur_date;
use crate::gp_entity;
use crate::ordinal::OrdinalValue;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

gp_entity! {
    /// Sales Transaction Amounts Work
    pub struct SalesLine : "SOP10200" {
        sop_type: i32 => "SOPTYPE", Integer, key;
        sop_number: String => "SOPNUMBE", StripString(21), key;
        line_sequence: OrdinalValue => "LNITMSEQ", Ordinal, key;
        component_sequence: i32 => "CMPNTSEQ", Integer, key;
        item: String => "ITEMNMBR", StripString(31);
        site: String => "LOCNCODE", StripString(11);
        quantity: Decimal => "QUANTITY", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
    }
    foreign_keys {
        ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
    }
}

impl SalesLine {
    /// An empty quote line (type 1) at line sequence zero.
    pub fn new(sop_number: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            sop_type: 1,
            sop_number: sop_number.into(),
            line_sequence: OrdinalValue::ZERO,
            component_sequence: 0,
            item: item.into(),
            site: DEFAULT_SITE.to_string(),
            quantity: Decimal::ZERO,
            allocated: Decimal::ZERO,
        }
    }
}

gp_entity! {
    /// Sales Serial/Lot Work and History
    pub struct SalesSerialLot : "SOP10201" {
        sop_type: i32 => "SOPTYPE", Integer, key;
        sop_number: String => "SOPNUMBE", StripString(21), key;
        line_sequence: OrdinalValue => "LNITMSEQ", Ordinal, key;
        component_sequence: i32 => "CMPNTSEQ", Integer, key;
        quantity_type: i32 => "QTYTYPE", Integer, key;
        serial_lot_sequence: OrdinalValue => "SLTSQNUM", Ordinal, key;
        date_received: NaiveDateTime => "DATERECD", DateTime, key;
        date_sequence: i32 => "DTSEQNUM", Integer, key;
        lot: String => "SERLTNUM", StripString(21);
        quantity: Decimal => "SERLTQTY", Numeric(19, 5);
        item: String => "ITEMNMBR", StripString(31);
        posted: i32 => "POSTED", Integer;
    }
    foreign_keys {
        ["SOPTYPE", "SOPNUMBE", "LNITMSEQ", "CMPNTSEQ", "ITEMNMBR"] => "SOP10200" ["SOPTYPE", "SOPNUMBE", "LNITMSEQ", "CMPNTSEQ", "ITEMNMBR"];
        ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
    }
}

impl SalesSerialLot {
    /// Assign `lot` to the first line of `sop_number`, received today.
    pub fn new(
        sop_number: impl Into<String>,
        item: impl Into<String>,
        lot: impl Into<String>,
    ) -> Self {
        Self {
            sop_type: 1,
            sop_number: sop_number.into(),
            line_sequence: OrdinalValue::ZERO,
            component_sequence: 0,
            quantity_type: 1,
            serial_lot_sequence: OrdinalValue::ZERO,
            date_received: gp_cur_date(),
            date_sequence: 1,
            lot: lot.into(),
            quantity: Decimal::ZERO,
            item: item.into(),
            posted: 0,
        }
    }

    /// Point this assignment at `line`, copying its identifying columns.
    pub fn for_line(line: &SalesLine, lot: impl Into<String>) -> Self {
        Self {
            sop_type: line.sop_type,
            line_sequence: line.line_sequence,
            component_sequence: line.component_sequence,
            ..Self::new(line.sop_number.clone(), line.item.clone(), lot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::row::Row;
    use sea_query::Value;

    #[test]
    fn test_line_sequence_stored_scaled() {
        let line = SalesLine {
            line_sequence: OrdinalValue::from(Decimal::new(25, 1)),
            ..SalesLine::new("ORD0001", "WIDGET")
        };
        let keys = line.key_values().unwrap();
        assert_eq!(keys[2], Value::from(40960i32));
    }

    #[test]
    fn test_line_read_back_as_ordinal() {
        let line = SalesLine {
            line_sequence: OrdinalValue::from(3i64),
            ..SalesLine::new("ORD0001", "WIDGET")
        };
        let row: Row = SalesLine::table()
            .columns
            .iter()
            .map(|c| c.name.to_string())
            .zip(line.values().unwrap())
            .collect();
        let read = SalesLine::from_row(&row).unwrap();
        assert_eq!(read.line_sequence, 3i64);
    }

    #[test]
    fn test_serial_lot_for_line() {
        let line = SalesLine {
            sop_type: 2,
            line_sequence: OrdinalValue::from(2i64),
            ..SalesLine::new("ORD0001", "WIDGET")
        };
        let lot = SalesSerialLot::for_line(&line, "L-100");
        assert_eq!(lot.sop_type, 2);
        assert_eq!(lot.line_sequence, 2i64);
        assert_eq!(lot.item, "WIDGET");
        assert_eq!(lot.date_sequence, 1);
        assert_eq!(lot.posted, 0);
        assert_eq!(SalesSerialLot::table().references_to("SOP10200").count(), 1);
    }
}
