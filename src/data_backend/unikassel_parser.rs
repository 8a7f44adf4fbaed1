use crate::constants::WEEKDAYS;
use crate::data_backend::text_normalizers::{
    meal_attributes, sanitize_meal_name, strip_nutrition_suffix, AttributeCase,
};
use crate::data_backend::{build_parse_result, element_text, MenuLayout};
use crate::data_types::menu_data_types::ParseResult;
use crate::data_types::{CanteenItem, ParseOptions};
use crate::errors::MenuError;

use scraper::{ElementRef, Html, Selector};
use selectors::attr::CaseSensitivity;
use static_init::dynamic;

const TABLE_SELECTOR: &str = "div.mainmensa table";

#[dynamic]
static TABLE_SEL: Selector = Selector::parse(TABLE_SELECTOR).unwrap();
#[dynamic]
static HEADER_SEL: Selector = Selector::parse("tr.thead h4").unwrap();
#[dynamic]
static ITEMS_ROW_SEL: Selector = Selector::parse("tr.items_row").unwrap();
#[dynamic]
static PRICE_ROW_SEL: Selector = Selector::parse("tr.price_row").unwrap();
#[dynamic]
static MENU_HEAD_SEL: Selector = Selector::parse("td.menu_head").unwrap();
#[dynamic]
static ZSNAMEN_SEL: Selector = Selector::parse(".zsnamen").unwrap();

// first column holds the slot label, Monday is the second child
#[dynamic]
static DAY_CELL_SELS: Vec<Selector> = WEEKDAYS
    .map(|day| Selector::parse(&format!("td.menu_content:nth-child({})", day + 1)).unwrap())
    .collect();

/// Current studentenwerk-kassel.de layout: every slot is an `items_row`
/// followed (not necessarily directly) by its `price_row`.
pub struct UniKasselLayout<'a> {
    table: ElementRef<'a>,
    item_rows: Vec<ElementRef<'a>>,
    price_rows: Vec<ElementRef<'a>>,
}

impl<'a> UniKasselLayout<'a> {
    pub fn new(document: &'a Html) -> Result<Self, MenuError> {
        let table = document
            .select(&TABLE_SEL)
            .next()
            .ok_or(MenuError::TableNotFound(TABLE_SELECTOR))?;

        Ok(UniKasselLayout {
            table,
            item_rows: table.select(&ITEMS_ROW_SEL).collect(),
            price_rows: table.select(&PRICE_ROW_SEL).collect(),
        })
    }

    fn day_cell(row: Option<&ElementRef<'a>>, day: u8) -> Option<ElementRef<'a>> {
        let selector = DAY_CELL_SELS.get(usize::from(day).checked_sub(1)?)?;
        row?.select(selector).next()
    }

    // (1, 3, 9a) (V), Kcal:718, E:28.0 g, K:98.0 g, Fe:22.0 g
    fn zsnamen_text(cell: ElementRef<'a>) -> String {
        cell.select(&ZSNAMEN_SEL).map(element_text).collect()
    }
}

impl<'a> MenuLayout<'a> for UniKasselLayout<'a> {
    fn validity_text(&self) -> String {
        self.table.select(&HEADER_SEL).map(element_text).collect()
    }

    fn slot_label(&self, slot: usize) -> String {
        self.item_rows
            .get(slot)
            .map(|row| row.select(&MENU_HEAD_SEL).map(element_text).collect::<String>())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn content_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>> {
        Self::day_cell(self.item_rows.get(slot), day)
    }

    fn price_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>> {
        Self::day_cell(self.price_rows.get(slot), day)
    }

    fn meal_name(&self, cell: ElementRef<'a>) -> String {
        strip_nutrition_suffix(&sanitize_meal_name(&element_text(cell)))
    }

    fn meal_attributes(&self, cell: ElementRef<'a>) -> Vec<String> {
        meal_attributes(&Self::zsnamen_text(cell), AttributeCase::Upper)
    }

    fn is_vital(&self, cell: ElementRef<'a>) -> bool {
        cell.value()
            .has_class("mensavital", CaseSensitivity::CaseSensitive)
    }

    fn vital_text(&self, cell: ElementRef<'a>) -> String {
        Self::zsnamen_text(cell)
    }
}

pub fn parse(canteen: &CanteenItem, html: &str, options: &ParseOptions) -> ParseResult {
    let document = Html::parse_document(html);
    build_parse_result(canteen, UniKasselLayout::new(&document), options)
}
