pub mod menu_data_types;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use menu_data_types::CanteenInfo;

/// Page layouts published by Studentenwerk Kassel over the years.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParserVariant {
    /// Current layout, rows grouped by `items_row`/`price_row` classes.
    UniKassel,
    /// Old `body#essen` layout, rows located by fixed child offsets.
    LegacyUniKassel,
}

impl ParserVariant {
    pub fn default_absence_rule(self) -> AbsenceRule {
        match self {
            ParserVariant::UniKassel => AbsenceRule::BothMissing,
            ParserVariant::LegacyUniKassel => AbsenceRule::EitherMissing,
        }
    }
}

/// Decides when a slot/day cell counts as "no offering".
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AbsenceRule {
    /// absent only if neither a name nor a price could be read
    BothMissing,
    /// absent as soon as the name or the price is missing
    EitherMissing,
}

impl AbsenceRule {
    pub fn is_absent(self, has_name: bool, has_price: bool) -> bool {
        match self {
            AbsenceRule::BothMissing => !has_name && !has_price,
            AbsenceRule::EitherMissing => !has_name || !has_price,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reference day for the current-week fallback and for missing years.
    pub today: NaiveDate,
    pub absence_rule: AbsenceRule,
}

impl ParseOptions {
    pub fn new(today: NaiveDate, absence_rule: AbsenceRule) -> Self {
        ParseOptions {
            today,
            absence_rule,
        }
    }

    pub fn for_variant(variant: ParserVariant, today: NaiveDate) -> Self {
        ParseOptions::new(today, variant.default_absence_rule())
    }
}

/// One registry entry: where a canteen publishes its plan and how to read it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanteenItem {
    pub info: CanteenInfo,
    /// http(s) URL or path of a local file
    pub url: String,
    pub parser: ParserVariant,
    /// number of meal slots published per day
    pub meal_count: usize,
}
