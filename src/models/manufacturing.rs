//! Manufacturing series: orders, picklists, routings, work centers and lot issue.

use super::{DEFAULT_SITE, DEFAULT_USER};
use crate::calendar::{gp_cur_date, gp_cur_time};
use crate::gp_entity;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

gp_entity! {
    /// Manufacture Order Master
    pub struct ManufactureOrder : "WO010032" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        description: String => "DSCRIPTN", StripString(31);
        status: i32 => "MANUFACTUREORDERST_I", Integer;
        finished_item: String => "ITEMNMBR", StripString(31);
        routing: String => "ROUTINGNAME_I", StripString(31);
        end_quantity: Decimal => "ENDQTY_I", Numeric(19, 5);
        start_quantity: Decimal => "STARTQTY_I", Numeric(19, 5);
        start_date: NaiveDateTime => "STRTDATE", DateTime;
        start_time: NaiveDateTime => "STARTTIME_I", DateTime;
        end_date: NaiveDateTime => "ENDDATE", DateTime;
        draw_from_site: String => "DRAWFROMSITE_I", StripString(11);
        user_id: String => "USERID", StripString(15);
        schedule_method: i32 => "SCHEDULEMETHOD_I", Integer;
        scheduling_preference: String => "SCHEDULINGPREFEREN_I", StripString(21);
        post_to_site: String => "POSTTOSITE_I", StripString(11);
        priority: i32 => "MANUFACTUREORDPRI_I", Integer;
        outsourced: i32 => "OUTSOURCED_I", Integer;
        bom_category: i32 => "BOMCAT_I", Integer;
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
}

impl ManufactureOrder {
    /// A new order for one unit, drawing from and posting to the default site.
    pub fn new(order: impl Into<String>) -> Self {
        Self {
            order: order.into(),
            description: String::new(),
            status: 1,
            finished_item: String::new(),
            routing: String::new(),
            end_quantity: Decimal::ONE,
            start_quantity: Decimal::ONE,
            start_date: gp_cur_date(),
            start_time: gp_cur_time(),
            end_date: gp_cur_time(),
            draw_from_site: DEFAULT_SITE.to_string(),
            user_id: DEFAULT_USER.to_string(),
            schedule_method: 1,
            scheduling_preference: "DEFAULT".to_string(),
            post_to_site: DEFAULT_SITE.to_string(),
            priority: 2,
            outsourced: 1,
            bom_category: 1,
            note_index: None,
        }
    }
}

gp_entity! {
    /// Picklist File
    pub struct PicklistItem : "PK010033" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        sequence: i32 => "SEQ_I", Integer, key;
        parent_part: String => "PPN_I", StripString(31), key;
        item: String => "ITEMNMBR", StripString(31), key;
        status: i32 => "MANUFACTUREORDERST_I", Integer;
        position: i32 => "POSITION_NUMBER", Integer;
        routing: String => "ROUTINGNAME_I", StripString(31);
        mrp_amount: Decimal => "MRPAMOUNT_I", Numeric(19, 5);
        required_quantity: Decimal => "SUGGESTEDQTY_I", Numeric(19, 5);
        issued: Decimal => "QTY_ISSUED_I", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        work_center: String => "WCID_I", StripString(11);
        routing_sequence: String => "RTSEQNUM_I", StripString(11);
        site: String => "LOCNCODE", StripString(11);
        change_date: NaiveDateTime => "CHANGEDATE_I", DateTime;
        user_id: String => "USERID", StripString(15);
        allowed_quantity: Decimal => "QTY_ALLOWED_I", Numeric(19, 5);
        required_date: NaiveDateTime => "REQDATE", DateTime;
        uofm: String => "UOFM", StripString(9);
        quantity_in_base_uofm: Decimal => "QTYBSUOM", Numeric(19, 5);
        bom_sequence: i32 => "BOMSEQ_I", Integer;
        bom_category: i32 => "BOMCAT_I", Integer;
        position_2: i32 => "POSITION_NUMBER2", Integer;
        is_allocated: i32 => "ALLOCATED_I", Integer;
        allocated_by: String => "ALLOCATEUID_I", StripString(15);
        allocated_date: NaiveDateTime => "ALLOCATEDATEI", DateTime;
        allocated_time: NaiveDateTime => "ALLOCATETIMEI", DateTime;
    }
    foreign_keys {
        ["MANUFACTUREORDER_I"] => "WO010032" ["MANUFACTUREORDER_I"];
        ["ITEMNMBR"] => "IV00101" ["ITEMNMBR"];
    }
}

impl PicklistItem {
    /// A component requirement of `order`.
    ///
    /// The MRP amount and allowed quantity start at the required quantity; the
    /// BOM sequence and second position follow the picklist sequence.
    pub fn new(
        order: impl Into<String>,
        sequence: i32,
        item: impl Into<String>,
        routing: impl Into<String>,
        required_quantity: Decimal,
        work_center: impl Into<String>,
        routing_sequence: impl Into<String>,
    ) -> Self {
        let today = gp_cur_date();
        Self {
            order: order.into(),
            sequence,
            parent_part: String::new(),
            item: item.into(),
            status: 1,
            position: 0,
            routing: routing.into(),
            mrp_amount: required_quantity,
            required_quantity,
            issued: Decimal::ZERO,
            allocated: Decimal::ZERO,
            work_center: work_center.into(),
            routing_sequence: routing_sequence.into(),
            site: DEFAULT_SITE.to_string(),
            change_date: today,
            user_id: DEFAULT_USER.to_string(),
            allowed_quantity: required_quantity,
            required_date: today,
            uofm: "Each".to_string(),
            quantity_in_base_uofm: Decimal::ONE,
            bom_sequence: sequence,
            bom_category: 1,
            position_2: sequence,
            is_allocated: 0,
            allocated_by: DEFAULT_USER.to_string(),
            allocated_date: today,
            allocated_time: gp_cur_time(),
        }
    }
}

gp_entity! {
    /// Item Engineering File
    pub struct ItemEngineering : "IVR10015" {
        item: String => "ITEMNMBT", StripString(32), key;
        status: i32 => "ITEMSTATUS_I", Integer;
        make_buy_code: i32 => "MAKEBUYCODE_I", Integer;
        effective_date: NaiveDateTime => "EFFECTIVEDATE_I", DateTime;
    }
}

impl ItemEngineering {
    /// Engineering data effective today.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            status: 1,
            make_buy_code: 1,
            effective_date: gp_cur_date(),
        }
    }
}

gp_entity! {
    /// Work Center Header File
    pub struct WorkCenterHeader : "WC010931" {
        work_center: String => "WCID_I", StripString(11), key;
        description: String => "WCDESC_I", StripString(31);
        outsourced: i32 => "OUTSOURCED_I", Integer;
    }
    foreign_keys {
        ["WCID_I"] => "WC010015" ["WCID_I"];
    }
}

impl WorkCenterHeader {
    /// The description starts as the work center id.
    pub fn new(work_center: impl Into<String>) -> Self {
        let work_center = work_center.into();
        Self {
            description: work_center.clone(),
            work_center,
            outsourced: 1,
        }
    }
}

gp_entity! {
    /// Manufacture Order Routing
    pub struct OrderRoutingLine : "WR010130" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        routing_sequence: String => "RTSEQNUM_I", StripString(11), key;
        sequence_type: i32 => "RTSEQTYPE_I", Integer;
        start_date: NaiveDateTime => "SCHEDULESTARTDATE_I", DateTime;
        finish_date: NaiveDateTime => "SCHEDULEFINISHDATE_I", DateTime;
        work_center: String => "WCID_I", StripString(11);
        description: String => "RTSEQDES_I", StripString(11);
        user_id: String => "USERID", StripString(15);
        created_date: NaiveDateTime => "CREATDDT", DateTime;
        created_time: NaiveDateTime => "CREATETIME_I", DateTime;
        start_quantity: i32 => "WIPOPPERMOSTARTQTY", Integer;
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
    foreign_keys {
        ["MANUFACTUREORDER_I"] => "WO010032" ["MANUFACTUREORDER_I"];
    }
}

impl OrderRoutingLine {
    /// A routing step scheduled for today, described by its work center.
    pub fn new(
        order: impl Into<String>,
        routing_sequence: impl Into<String>,
        work_center: impl Into<String>,
    ) -> Self {
        let work_center = work_center.into();
        let today = gp_cur_date();
        Self {
            order: order.into(),
            routing_sequence: routing_sequence.into(),
            sequence_type: 1,
            start_date: today,
            finish_date: today,
            description: work_center.clone(),
            work_center,
            user_id: DEFAULT_USER.to_string(),
            created_date: today,
            created_time: gp_cur_time(),
            start_quantity: 1,
            note_index: None,
        }
    }
}

gp_entity! {
    /// Manufacture Order Activity
    pub struct OrderActivity : "MOP10213" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        line_sequence: Decimal => "LNSEQNBR", Numeric(19, 5), key;
        status: i32 => "MANUFACTUREORDERST_I", Integer;
        reason: i32 => "MO_ACTIVITY_REASON_I", Integer;
        change_date: NaiveDateTime => "CHANGEDATE_I", DateTime;
        change_time: NaiveDateTime => "TIME_I", DateTime;
        user_id: String => "USERID", StripString(15);
        pick_number: String => "PICKNUMBER", StripString(17);
        document_type: i32 => "DOCTYPE", Integer;
    }
    foreign_keys {
        ["MANUFACTUREORDER_I"] => "WO010032" ["MANUFACTUREORDER_I"];
    }
}

impl OrderActivity {
    /// The creation activity (reason 47) of `order`.
    pub fn new(order: impl Into<String>) -> Self {
        Self {
            order: order.into(),
            line_sequence: Decimal::ONE,
            status: 1,
            reason: 47,
            change_date: gp_cur_date(),
            change_time: gp_cur_time(),
            user_id: DEFAULT_USER.to_string(),
            pick_number: String::new(),
            document_type: 0,
        }
    }
}

gp_entity! {
    /// Picklist Sequence Master
    pub struct PicklistSequence : "PK01200" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        next_sequence: i32 => "PICKLISTSEQ", Integer;
    }
    foreign_keys {
        ["MANUFACTUREORDER_I"] => "WO010032" ["MANUFACTUREORDER_I"];
    }
}

impl PicklistSequence {
    pub fn new(order: impl Into<String>) -> Self {
        Self {
            order: order.into(),
            next_sequence: 1,
        }
    }
}

gp_entity! {
    /// Work Center Master File
    pub struct WorkCenter : "WC010015" {
        work_center: String => "WCID_I", StripString(11), key;
        effective_date: NaiveDateTime => "EFFECTIVEDATE_I", DateTime, key;
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
}

impl WorkCenter {
    pub fn new(work_center: impl Into<String>) -> Self {
        Self {
            work_center: work_center.into(),
            effective_date: gp_cur_date(),
            note_index: None,
        }
    }
}

gp_entity! {
    /// Pick Document Line
    pub struct PickDocLine : "MOP1210" {
        pick_number: String => "PICKNUMBER", StripString(17), key;
        line: i32 => "PICKDOCLINENUM", Integer, key;
        order: String => "MANUFACTUREORDER_I", StripString(31);
        position: i32 => "POSITION_NUMBER", Integer;
        item: String => "ITEMNMBR", StripString(31);
        picklist_sequence: i32 => "PICKLISTSEQ", Integer;
        quantity: Decimal => "TRXQTY", Numeric(19, 5);
        uofm: String => "UOFM", StripString(9);
        to_site: String => "TO_SITE_I", StripString(11);
        from_site: String => "FROM_SITE_I", StripString(11);
        quantity_in_base_uofm: Decimal => "QTYBSUOM", Numeric(19, 5);
        tracking_option: i32 => "ITMTRKOP", Integer;
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        selected: Decimal => "QTYSLCTD", Numeric(19, 5);
        issued: Decimal => "QTY_ISSUED_I", Numeric(19, 5);
        mrp_amount: Decimal => "MRPAMOUNT_I", Numeric(19, 5);
        required_date: NaiveDateTime => "REQDATE", DateTime;
        picked_date: NaiveDateTime => "DATEPICKED", DateTime;
        trx_type: i32 => "TRX_TYPE", Integer;
    }
}

impl PickDocLine {
    /// A fully issued pick line. Selected, issued and MRP quantities all
    /// start at the allocated quantity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pick_number: impl Into<String>,
        line: i32,
        order: impl Into<String>,
        position: i32,
        item: impl Into<String>,
        picklist_sequence: i32,
        quantity: Decimal,
        uofm: impl Into<String>,
        to_site: impl Into<String>,
        allocated: Decimal,
    ) -> Self {
        let today = gp_cur_date();
        Self {
            pick_number: pick_number.into(),
            line,
            order: order.into(),
            position,
            item: item.into(),
            picklist_sequence,
            quantity,
            uofm: uofm.into(),
            to_site: to_site.into(),
            from_site: DEFAULT_SITE.to_string(),
            quantity_in_base_uofm: Decimal::ONE,
            tracking_option: 3,
            allocated,
            selected: allocated,
            issued: allocated,
            mrp_amount: allocated,
            required_date: today,
            picked_date: today,
            trx_type: 1,
        }
    }
}

gp_entity! {
    /// Pick Document Header
    pub struct PickDoc : "MOP1200" {
        pick_number: String => "PICKNUMBER", StripString(17), key;
        trx_type: i32 => "TRX_TYPE", Integer;
        user_id: String => "USERID", StripString(15);
        change_date: NaiveDateTime => "CHANGEDATE_I", DateTime;
        document_date: NaiveDateTime => "DOCDATE", DateTime;
        posted_date: NaiveDateTime => "POSTEDDT", DateTime;
        posted: bool => "POSTED", Boolean;
    }
}

impl PickDoc {
    pub fn new(pick_number: impl Into<String>) -> Self {
        Self {
            pick_number: pick_number.into(),
            trx_type: 1,
            user_id: DEFAULT_USER.to_string(),
            change_date: gp_cur_time(),
            document_date: gp_cur_time(),
            posted_date: gp_cur_date(),
            posted: false,
        }
    }
}

/// Pending and posted lot issue share one layout.
macro_rules! serial_lot_issue {
    ($(#[$meta:meta])* $name:ident : $table:literal) => {
        gp_entity! {
            $(#[$meta])*
            pub struct $name : $table {
                order: String => "MANUFACTUREORDER_I", StripString(31), key;
                document_number: String => "DOCNUMBR", StripString(21), key;
                picklist_sequence: i32 => "PICKLISTSEQ", Integer, key;
                called_by: i32 => "CALLEDBY", Integer, key;
                pick_line: i32 => "PICKDOCLINENUM", Integer, key;
                sequence: i32 => "SEQ_I", Integer, key;
                from_site: String => "FROM_SITE_I", StripString(11), key;
                trx_type: i32 => "TRX_TYPE", Integer, key;
                item: String => "ITEMNMBR", StripString(31);
                lot: String => "SERLTNUM", StripString(21);
                quantity: Decimal => "SERLTQTY", Numeric(19, 5);
                to_site: String => "TO_SITE_I", StripString(11);
                date_received: NaiveDateTime => "DATERECD", DateTime;
                date_sequence: Decimal => "DTSEQNUM", Numeric(19, 5);
                line_number: i32 => "LineNumber", Integer;
                tracking_option: i32 => "ITMTRKOP", Integer;
            }
            foreign_keys {
                ["MANUFACTUREORDER_I", "PICKLISTSEQ", "ITEMNMBR"] => "PK010033" ["MANUFACTUREORDER_I", "SEQ_I", "ITEMNMBR"];
                ["MANUFACTUREORDER_I", "DOCNUMBR", "PICKLISTSEQ", "PICKDOCLINENUM", "ITEMNMBR"] => "MOP1210" ["MANUFACTUREORDER_I", "PICKNUMBER", "PICKLISTSEQ", "PICKDOCLINENUM", "ITEMNMBR"];
            }
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                order: impl Into<String>,
                document_number: impl Into<String>,
                picklist_sequence: i32,
                pick_line: i32,
                sequence: i32,
                item: impl Into<String>,
                lot: impl Into<String>,
                quantity: Decimal,
                to_site: impl Into<String>,
                date_received: NaiveDateTime,
                date_sequence: Decimal,
                line_number: i32,
            ) -> Self {
                Self {
                    order: order.into(),
                    document_number: document_number.into(),
                    picklist_sequence,
                    called_by: 1,
                    pick_line,
                    sequence,
                    from_site: DEFAULT_SITE.to_string(),
                    trx_type: 1,
                    item: item.into(),
                    lot: lot.into(),
                    quantity,
                    to_site: to_site.into(),
                    date_received,
                    date_sequence,
                    line_number,
                    tracking_option: 3,
                }
            }
        }
    };
}

serial_lot_issue! {
    /// Manufacture Order Lot Issue (pending)
    PendingSerialLot : "MOP1020"
}

serial_lot_issue! {
    /// Manufacture Order Lot Issue History
    PendingSerialLotHistory : "MOP1090"
}

gp_entity! {
    /// Routing Master
    pub struct Routing : "RT010001" {
        item: String => "ITEMNMBR", StripString(31), key;
        name: String => "ROUTINGNAME_I", StripString(31), key;
        primary: i32 => "RTPRIMARY_I", Integer;
        status: i32 => "RTSTATUSDDL_I", Integer;
        note_index: Option<Decimal> => "NOTeINDX", Numeric(19, 5), note_index;
    }
}

impl Routing {
    /// A primary routing in status 4.
    pub fn new(item: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            name: name.into(),
            primary: 1,
            status: 4,
            note_index: None,
        }
    }
}

gp_entity! {
    /// Routing Sequence
    pub struct RoutingLine : "RT010130" {
        name: String => "ROUTINGNAME_I", StripString(31), key;
        item: String => "ITEMNMBR", StripString(31), key;
        routing_sequence: String => "RTSEQNUM_I", StripString(11), key;
        description: String => "RTSEQDES_I", StripString(101);
        work_center: String => "WCID_I", StripString(11);
        note_index: Option<Decimal> => "NOTEINDX", Numeric(19, 5), note_index;
    }
    foreign_keys {
        ["ROUTINGNAME_I", "ITEMNMBR"] => "RT010001" ["ROUTINGNAME_I", "ITEMNMBR"];
    }
}

impl RoutingLine {
    pub fn new(
        name: impl Into<String>,
        item: impl Into<String>,
        routing_sequence: impl Into<String>,
        description: impl Into<String>,
        work_center: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            item: item.into(),
            routing_sequence: routing_sequence.into(),
            description: description.into(),
            work_center: work_center.into(),
            note_index: None,
        }
    }
}

gp_entity! {
    /// Bill of Materials Revision
    ///
    /// The manufacturing note index is written as zero; it is never taken from
    /// the note index counter.
    pub struct BomRevision : "BM010415" {
        item: String => "ITEMNMBR", StripString(31), key;
        category: i32 => "BOMCAT_I", Integer, key;
        name: String => "BOMNAME_I", StripString(15), key;
        revision_level: String => "REVISIONLEVEL_I", StripString(51);
        backflush: i32 => "BACKFLUSHITEM_I", Integer;
        bom_type: i32 => "BOMTYPE_I", Integer;
        net_phantom_inventory: i32 => "Net_Phanton_Inventory", Integer;
        changed: NaiveDateTime => "CHANGEDATE_I", DateTime;
        changed_by: String => "CHANGEBY_I", StripString(15);
        note_index: Decimal => "MFGNOTEINDEX3_I", Numeric(19, 5);
    }
}

impl BomRevision {
    pub fn new(item: impl Into<String>, changed: NaiveDateTime) -> Self {
        Self {
            item: item.into(),
            category: 1,
            name: String::new(),
            revision_level: "1".to_string(),
            backflush: 0,
            bom_type: 1,
            net_phantom_inventory: 0,
            changed,
            changed_by: DEFAULT_USER.to_string(),
            note_index: Decimal::ZERO,
        }
    }
}

gp_entity! {
    /// Picklist Site Quantities
    pub struct PicklistSiteQuantities : "MOP1400" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        picklist_sequence: i32 => "PICKLISTSEQ", Integer, key;
        site: String => "LOCNCODE", StripString(11), key;
        item: String => "ITEMNMBR", StripString(31);
        issued: Decimal => "QTY_ISSUED_I", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        scrapped: Decimal => "NUMBERSCRAPPED_I", Numeric(19, 5);
        pending_issue: Decimal => "PENDING_ISSUE_QTY_I", Numeric(19, 5);
        pending_reverse_issue: Decimal => "PENDING_REV_ISS_QTY_I", Numeric(19, 5);
        pending_scrap: Decimal => "PENDING_SCRAP_QTY_I", Numeric(19, 5);
        pending_reverse_scrap: Decimal => "PENDING_REV_SCRAP_QTY_I", Numeric(19, 5);
    }
    foreign_keys {
        ["MANUFACTUREORDER_I", "PICKLISTSEQ", "LOCNCODE"] => "PK010033" ["MANUFACTUREORDER_I", "SEQ_I", "LOCNCODE"];
    }
}

impl PicklistSiteQuantities {
    pub fn new(
        order: impl Into<String>,
        picklist_sequence: i32,
        site: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            order: order.into(),
            picklist_sequence,
            site: site.into(),
            item: item.into(),
            issued: Decimal::ZERO,
            allocated: Decimal::ZERO,
            scrapped: Decimal::ZERO,
            pending_issue: Decimal::ZERO,
            pending_reverse_issue: Decimal::ZERO,
            pending_scrap: Decimal::ZERO,
            pending_reverse_scrap: Decimal::ZERO,
        }
    }
}

gp_entity! {
    /// MOP WIP Stack
    ///
    /// Every column is required; build it with a struct literal.
    pub struct WipStack : "MOP1000" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        item: String => "ITEMNMBR", StripString(31), key;
        to_site: String => "TO_SITE_I", StripString(11), key;
        date_received: NaiveDateTime => "DATERECD", DateTime, key;
        wip_sequence: Decimal => "WIPSEQNMBR", Numeric(19, 5), key;
        picklist_sequence: i32 => "PICKLISTSEQ", Integer;
        pick_number: String => "PICKNUMBER", StripString(17);
        pick_line: i32 => "PICKDOCLINENUM", Integer;
        wip_quantity_sold: i32 => "WIPQTYSOLD", Integer;
        received: Decimal => "QTYRECVD", Numeric(19, 5);
        sold: Decimal => "QTYSOLD", Numeric(19, 5);
        inventory_document: String => "IVDOCNBR", StripString(17);
        receipt_sequence: i32 => "RCTSEQNM", Integer;
        tracking_option: i32 => "ITMTRKOP", Integer;
        item_cost_1: Decimal => "ITEM_COSTS_ARRAY_I_1", Numeric(19, 5);
        item_cost_10: Decimal => "ITEM_COSTS_ARRAY_I_10", Numeric(19, 5);
        routing_sequence: String => "RTSEQNUM_I", StripString(11);
        from_site: String => "FROM_SITE_I", StripString(11);
        date_received_in_inventory: NaiveDateTime => "DTRCVDINVNTRY", DateTime;
        backflush: i32 => "BACKFLUSHITEM_I", Integer;
        scrapped: Decimal => "NUMBERSCRAPPED_I", Numeric(19, 5);
    }
}

gp_entity! {
    /// Manufacture Order Lot Issue
    ///
    /// Every column is required; build it with a struct literal.
    pub struct LotIssue : "WO010302" {
        order: String => "MANUFACTUREORDER_I", StripString(31), key;
        lot: String => "LOTNUMBR", StripString(21), key;
        line_sequence: Decimal => "LNSEQNBR", Numeric(19, 5), key;
        line_number: i32 => "LineNumber", Integer, key;
        item: String => "ITEMNMBR", StripString(31);
        quantity: Decimal => "SERLTQTY", Numeric(19, 5);
        serial_lot_sequence: i32 => "SLTSQNUM", Integer;
        site: String => "LOCNCODE", StripString(11);
        work_center: String => "WCID_I", StripString(11);
        date_received: NaiveDateTime => "DATERECD", DateTime;
        date_sequence: Decimal => "DTSEQNUM", Numeric(19, 5);
        posted: i32 => "POSTED", Integer;
        inventory_document: String => "IVDOCNBR", StripString(17);
        inventory_document_type: i32 => "IVDOCTYP", Integer;
        wip_sequence: Decimal => "WIPSEQNMBR", Numeric(19, 5);
        consumed: Decimal => "QTYCONSUMED", Numeric(19, 5);
        pending: Decimal => "QTYPENDING", Numeric(19, 5);
        allocated: Decimal => "ATYALLOC", Numeric(19, 5);
        pick_number: String => "PICKNUMBER", StripString(17);
        picklist_sequence: i32 => "PICKLISTSEQ", Integer;
        row_id: i32 => "ROWID", Integer;
        expiration_date: NaiveDateTime => "EXPNDATE", DateTime;
        manufacture_date: NaiveDateTime => "MFGDATE", DateTime;
    }
}
