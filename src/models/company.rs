//! System-wide company tables.

use super::{DEFAULT_CHECKBOOK, DEFAULT_USER, RECEIVINGS_BATCH_SOURCE};
use crate::calendar::gp_cur_date;
use crate::gp_entity;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

gp_entity! {
    /// Posting Account Master
    pub struct PostingAccountMaster : "SY01100" {
        series: i32 => "SERIES", Integer, key;
        sequence: i32 => "SEQNUMBR", Integer, key;
        account_index: i32 => "ACTINDX", Integer;
    }
}

impl PostingAccountMaster {
    pub fn new(series: i32, sequence: i32, account_index: i32) -> Self {
        Self {
            series,
            sequence,
            account_index,
        }
    }
}

gp_entity! {
    /// Batch Headers
    pub struct BatchHeader : "SY00500" {
        batch_source: String => "BCHSOURC", StripString(15), key;
        batch_number: String => "BACHNUMB", StripString(15), key;
        gl_posting_date: NaiveDateTime => "GLPOSTDT", DateTime;
        series: i32 => "SERIES", Integer;
        transaction_count: i32 => "NUMOFTRX", Integer;
        batch_frequency: i32 => "BACHFREQ", Integer;
        user_id: String => "USERID", StripString(15);
        checkbook_id: String => "CHEKBKID", StripString(15);
        batch_total: Decimal => "BCHTOTAL", Numeric(19, 5);
        modified: NaiveDateTime => "MODIFDT", DateTime;
        created: NaiveDateTime => "CREATDT", DateTime;
        origin: i32 => "ORIGIN", Integer;
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
}

impl BatchHeader {
    /// A one-transaction purchasing batch from receivings entry.
    pub fn new(batch_number: impl Into<String>) -> Self {
        let today = gp_cur_date();
        Self {
            batch_source: RECEIVINGS_BATCH_SOURCE.to_string(),
            batch_number: batch_number.into(),
            gl_posting_date: today,
            series: 4,
            transaction_count: 1,
            batch_frequency: 1,
            user_id: DEFAULT_USER.to_string(),
            checkbook_id: DEFAULT_CHECKBOOK.to_string(),
            batch_total: Decimal::ZERO,
            modified: today,
            created: today,
            origin: 1,
            note_index: None,
        }
    }
}
