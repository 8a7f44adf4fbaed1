use std::time::Instant;

use crate::constants::{CURRENCY, WEEKDAYS};
use crate::data_types::menu_data_types::{CanteenMenu, DayMeals, MealItem, Meals, ParseResult};
use crate::data_types::{AbsenceRule, CanteenItem, ParseOptions, ParserVariant};
use crate::errors::MenuError;

use scraper::ElementRef;
use text_normalizers::{parse_meal_price, parse_validity_interval, parse_vital_info};

pub mod legacy_unikassel_parser;
pub mod text_normalizers;
pub mod unikassel_parser;

/// Cell lookups of one page layout.
///
/// `slot` counts from 0, `day` is the weekday index 1 (Monday) ..= 5 (Friday).
pub trait MenuLayout<'a> {
    /// Raw header text announcing the week, e.g. "Speiseplan vom 08.09. bis 12.09.2014"
    fn validity_text(&self) -> String;

    /// Label of a slot row ("Essen 1", "Angebot des Tages"), empty if missing
    fn slot_label(&self, slot: usize) -> String;

    fn content_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>>;

    fn price_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>>;

    /// Dish name without codes or trailing shorthand
    fn meal_name(&self, cell: ElementRef<'a>) -> String;

    fn meal_attributes(&self, cell: ElementRef<'a>) -> Vec<String>;

    /// Marker of the nutrition tracked "mensaVital" line
    fn is_vital(&self, cell: ElementRef<'a>) -> bool;

    /// Text carrying the nutrition shorthand of a vital cell
    fn vital_text(&self, cell: ElementRef<'a>) -> String;
}

/// Runs the parser registered for the canteen's layout.
pub fn parse_menu(canteen: &CanteenItem, html: &str, options: &ParseOptions) -> ParseResult {
    match canteen.parser {
        ParserVariant::UniKassel => unikassel_parser::parse(canteen, html, options),
        ParserVariant::LegacyUniKassel => legacy_unikassel_parser::parse(canteen, html, options),
    }
}

/// Concatenated text of an element, with `&nbsp;` turned into plain spaces.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().replace('\u{a0}', " ")
}

/// Builds the result envelope once a layout had its chance to locate the menu table.
pub(crate) fn build_parse_result<'a, L: MenuLayout<'a>>(
    canteen: &CanteenItem,
    layout: Result<L, MenuError>,
    options: &ParseOptions,
) -> ParseResult {
    let now = Instant::now();

    let (validity, meals, message) = match layout {
        Ok(layout) => {
            let validity = parse_validity_interval(&layout.validity_text(), options.today);
            let meals = parse_meals(&layout, canteen.meal_count, options.absence_rule);
            (validity, meals, None)
        }
        Err(e) => {
            log::warn!("{}: {}", canteen.info.name, e);
            (
                parse_validity_interval("", options.today),
                Meals::new(),
                Some(e.to_string()),
            )
        }
    };

    log::debug!("parsing html: {:.2?}", now.elapsed());

    ParseResult {
        success: message.is_none(),
        message,
        menu: CanteenMenu {
            info: canteen.info.clone(),
            validity,
            currency: CURRENCY.to_string(),
            meals,
        },
    }
}

/// Walks `meal_count` slots times the five weekdays.
pub(crate) fn parse_meals<'a, L: MenuLayout<'a>>(
    layout: &L,
    meal_count: usize,
    absence_rule: AbsenceRule,
) -> Meals {
    let mut meals = Meals::new();

    for slot in 0..meal_count.max(1) {
        // "Essen 1", "Essen 2", "Essen 3 oder 4", "Angebot des Tages"
        let label = layout.slot_label(slot);

        let mut week = DayMeals::new();
        for day in WEEKDAYS {
            week.insert(day, parse_meal(layout, slot, day, absence_rule));
        }

        if meals.insert(label.clone(), week).is_some() {
            log::debug!("slot label '{}' seen twice, keeping its first position with the later row", label);
        }
    }

    meals
}

fn parse_meal<'a, L: MenuLayout<'a>>(
    layout: &L,
    slot: usize,
    day: u8,
    absence_rule: AbsenceRule,
) -> Option<MealItem> {
    let cell = layout.content_cell(slot, day);

    let name = cell.map(|c| layout.meal_name(c)).unwrap_or_default();
    let attributes = cell.map(|c| layout.meal_attributes(c)).unwrap_or_default();
    let price = layout
        .price_cell(slot, day)
        .and_then(|c| parse_meal_price(&element_text(c)));

    if absence_rule.is_absent(!name.is_empty(), price.is_some()) {
        return None;
    }

    let vital_info = cell
        .filter(|c| layout.is_vital(*c))
        .map(|c| parse_vital_info(&layout.vital_text(c)));

    Some(MealItem {
        name,
        attributes,
        price,
        vital_info,
    })
}
