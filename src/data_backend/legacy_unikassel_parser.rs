use crate::constants::WEEKDAYS;
use crate::data_backend::text_normalizers::{meal_attributes, sanitize_meal_name, AttributeCase};
use crate::data_backend::{build_parse_result, element_text, MenuLayout};
use crate::data_types::menu_data_types::ParseResult;
use crate::data_types::{CanteenItem, ParseOptions};
use crate::errors::MenuError;

use scraper::{ElementRef, Html, Selector};
use static_init::dynamic;

const TABLE_SELECTOR: &str = "body#essen table tbody";

/// child position of the first slot row inside the table body
const FIRST_SLOT_ROW: usize = 4;

#[dynamic]
static TABLE_SEL: Selector = Selector::parse(TABLE_SELECTOR).unwrap();
#[dynamic]
static HEADER_SEL: Selector = Selector::parse("tr[valign=bottom] td strong").unwrap();
#[dynamic]
static LABEL_SEL: Selector = Selector::parse("td.gelb strong.big2").unwrap();

#[dynamic]
static DAY_CELL_SELS: Vec<Selector> = WEEKDAYS
    .map(|day| Selector::parse(&format!("td:nth-child({})", day + 1)).unwrap())
    .collect();

/// Pre-2015 layout: a plain table where slot `i` sits in body row
/// `4 + 2i` and its prices in the row right below.
pub struct LegacyUniKasselLayout<'a> {
    tbody: ElementRef<'a>,
    /// element children of the table body, in document order
    children: Vec<ElementRef<'a>>,
}

impl<'a> LegacyUniKasselLayout<'a> {
    pub fn new(document: &'a Html) -> Result<Self, MenuError> {
        let tbody = document
            .select(&TABLE_SEL)
            .next()
            .ok_or(MenuError::TableNotFound(TABLE_SELECTOR))?;

        Ok(LegacyUniKasselLayout {
            tbody,
            children: tbody.children().filter_map(ElementRef::wrap).collect(),
        })
    }

    /// `tr:nth-child(position)`, counted from 1
    fn row(&self, position: usize) -> Option<ElementRef<'a>> {
        self.children
            .get(position.checked_sub(1)?)
            .filter(|child| child.value().name() == "tr")
            .copied()
    }

    fn slot_row(&self, slot: usize) -> Option<ElementRef<'a>> {
        self.row(FIRST_SLOT_ROW + slot * 2)
    }

    fn slot_price_row(&self, slot: usize) -> Option<ElementRef<'a>> {
        self.row(FIRST_SLOT_ROW + slot * 2 + 1)
    }

    fn day_cell(row: Option<ElementRef<'a>>, day: u8) -> Option<ElementRef<'a>> {
        let selector = DAY_CELL_SELS.get(usize::from(day).checked_sub(1)?)?;
        row?.select(selector).next()
    }
}

impl<'a> MenuLayout<'a> for LegacyUniKasselLayout<'a> {
    fn validity_text(&self) -> String {
        self.tbody.select(&HEADER_SEL).map(element_text).collect()
    }

    fn slot_label(&self, slot: usize) -> String {
        self.slot_row(slot)
            .map(|row| row.select(&LABEL_SEL).map(element_text).collect::<String>())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn content_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>> {
        Self::day_cell(self.slot_row(slot), day)
    }

    fn price_cell(&self, slot: usize, day: u8) -> Option<ElementRef<'a>> {
        Self::day_cell(self.slot_price_row(slot), day)
    }

    // Geschwenkte Kartoffel-Paprika-Pfanne mit Wasabisauce (1,3,9a,30,35) (V)
    fn meal_name(&self, cell: ElementRef<'a>) -> String {
        sanitize_meal_name(&element_text(cell))
    }

    fn meal_attributes(&self, cell: ElementRef<'a>) -> Vec<String> {
        meal_attributes(&element_text(cell), AttributeCase::AsIs)
    }

    // this layout never marked nutrition tracked dishes
    fn is_vital(&self, _cell: ElementRef<'a>) -> bool {
        false
    }

    fn vital_text(&self, _cell: ElementRef<'a>) -> String {
        String::new()
    }
}

pub fn parse(canteen: &CanteenItem, html: &str, options: &ParseOptions) -> ParseResult {
    let document = Html::parse_document(html);
    build_parse_result(canteen, LegacyUniKasselLayout::new(&document), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::menu_data_types::{CanteenInfo, PriceItem};
    use crate::data_types::{AbsenceRule, ParserVariant};
    use chrono::NaiveDate;

    const PAGE: &str = r#"<html>
<body id="essen">
<table width="100%">
  <tr><td colspan="6"><img src="logo.gif" alt="Studentenwerk Kassel"></td></tr>
  <tr valign="bottom"><td colspan="6"><strong>Speiseplan vom 08.09. bis 12.09.2014</strong></td></tr>
  <tr><td></td><td>Montag</td><td>Dienstag</td><td>Mittwoch</td><td>Donnerstag</td><td>Freitag</td></tr>
  <tr>
    <td class="gelb"><strong class="big2">Essen 1</strong></td>
    <td>Geschwenkte Kartoffel-Paprika-Pfanne mit Wasabisauce (1,3,9a,30,35) (V)</td>
    <td>Schnitzel  (2, 3)  mit Pommes</td>
    <td></td>
    <td>Nur ein Name (v)</td>
    <td></td>
  </tr>
  <tr>
    <td></td>
    <td>2,20 € / 3,10 € / 4,00 €</td>
    <td>2,50 € / 3,50 € (inkl. Beilage) / 4,50 €</td>
    <td></td>
    <td></td>
    <td>1,00 € / 2,00 € / 3,00 €</td>
  </tr>
  <tr>
    <td class="gelb"><strong class="big2">Essen 3 oder 4</strong></td>
    <td>Eintopf</td>
    <td>Eintopf</td>
    <td>Eintopf</td>
    <td>Eintopf</td>
    <td>Eintopf</td>
  </tr>
  <tr>
    <td></td>
    <td>1,60 € / 2,60 € / 3,60 €</td>
    <td>1,60 € / 2,60 € / 3,60 €</td>
    <td>1,60 € / 2,60 €</td>
    <td>1,60 € / 2,60 € / 3,60 €</td>
    <td>1,60 € / 2,60 € / 3,60 €</td>
  </tr>
</table>
</body>
</html>"#;

    fn canteen(meal_count: usize) -> CanteenItem {
        CanteenItem {
            info: CanteenInfo {
                name: "Zentralmensa".to_string(),
                location_description: Some("Holländischer Platz".to_string()),
                location: None,
            },
            url: "legacy.html".to_string(),
            parser: ParserVariant::LegacyUniKassel,
            meal_count,
        }
    }

    fn options(rule: AbsenceRule) -> ParseOptions {
        ParseOptions::new(NaiveDate::from_ymd_opt(2015, 3, 4).unwrap(), rule)
    }

    #[test]
    fn rows_found_by_fixed_offsets() {
        let result = parse(&canteen(2), PAGE, &options(AbsenceRule::BothMissing));
        assert!(result.success);
        assert_eq!(
            result.menu.meals.keys().collect::<Vec<_>>(),
            vec!["Essen 1", "Essen 3 oder 4"]
        );

        let monday = result.menu.meals["Essen 1"][&1u8].as_ref().unwrap();
        assert_eq!(
            monday.name,
            "Geschwenkte Kartoffel-Paprika-Pfanne mit Wasabisauce"
        );
        assert_eq!(monday.attributes, vec!["1", "3", "9a", "30", "35", "V"]);
        assert_eq!(
            monday.price,
            Some(PriceItem {
                student: 2.2,
                employee: 3.1,
                visitor: 4.0
            })
        );
        assert_eq!(monday.vital_info, None);

        let tuesday = result.menu.meals["Essen 1"][&2u8].as_ref().unwrap();
        assert_eq!(tuesday.name, "Schnitzel mit Pommes");
        assert_eq!(tuesday.attributes, vec!["2", "3"]);
        assert_eq!(tuesday.price.map(|p| p.employee), Some(3.5));
    }

    #[test]
    fn attribute_codes_keep_their_case() {
        let result = parse(&canteen(1), PAGE, &options(AbsenceRule::BothMissing));
        let thursday = result.menu.meals["Essen 1"][&4u8].as_ref().unwrap();
        assert_eq!(thursday.name, "Nur ein Name");
        assert_eq!(thursday.attributes, vec!["v"]);
    }

    #[test]
    fn default_rule_drops_half_filled_cells() {
        let canteen = canteen(2);
        let opts = ParseOptions::for_variant(canteen.parser, NaiveDate::from_ymd_opt(2015, 3, 4).unwrap());
        let result = parse(&canteen, PAGE, &opts);

        let week = &result.menu.meals["Essen 1"];
        assert!(week[&1u8].is_some());
        assert_eq!(week[&3u8], None);
        // name without price, price without name
        assert_eq!(week[&4u8], None);
        assert_eq!(week[&5u8], None);

        // "1,60 € / 2,60 €" is no valid price
        assert_eq!(result.menu.meals["Essen 3 oder 4"][&3u8], None);
    }

    #[test]
    fn lenient_rule_keeps_half_filled_cells() {
        let result = parse(&canteen(2), PAGE, &options(AbsenceRule::BothMissing));
        let week = &result.menu.meals["Essen 1"];
        assert_eq!(week[&3u8], None);
        assert_eq!(week[&5u8].as_ref().map(|m| m.name.as_str()), Some(""));

        let stew = result.menu.meals["Essen 3 oder 4"][&3u8].as_ref().unwrap();
        assert_eq!(stew.name, "Eintopf");
        assert_eq!(stew.price, None);
    }

    #[test]
    fn validity_from_strong_header() {
        let result = parse(&canteen(1), PAGE, &options(AbsenceRule::BothMissing));
        assert_eq!(
            result.menu.validity.from.to_rfc3339(),
            "2014-09-08T00:00:00+00:00"
        );
        assert_eq!(
            result.menu.validity.until.to_rfc3339(),
            "2014-09-12T00:00:00+00:00"
        );
    }

    #[test]
    fn current_layout_page_is_not_a_legacy_page() {
        let html = r#"<html><body><div class="mainmensa"><table><tr class="items_row"></tr></table></div></body></html>"#;
        let result = parse(&canteen(1), html, &options(AbsenceRule::BothMissing));
        assert!(!result.success);
        assert!(result.menu.meals.is_empty());
        // fallback week of 2015-03-04
        assert_eq!(
            result.menu.validity.from.date_naive(),
            NaiveDate::from_ymd_opt(2015, 3, 2).unwrap()
        );
    }
}
