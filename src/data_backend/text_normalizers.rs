use crate::data_types::menu_data_types::{MenuValidity, PriceItem, VitalInfo};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex_lite::Regex;
use static_init::dynamic;

#[dynamic]
static PAREN_GROUP_RE: Regex = Regex::new(r"\((.*?)\)").unwrap();

#[dynamic]
static MULTI_SPACE_RE: Regex = Regex::new(r"\s{2,}").unwrap();

#[dynamic]
static SPACE_COMMA_RE: Regex = Regex::new(r"\s,").unwrap();

// "Speiseplan vom 08.09. bis 12.09.2014"
#[dynamic]
static INTERVAL_RE: Regex = Regex::new(r"(\d+\.\d+\.\d*)\s*.*\s+(\d+\.\d+\.\d*)").unwrap();

#[dynamic]
static CALORIES_RE: Regex = Regex::new(r"(?i)Kcal:\s*([-+]?[0-9]*\.?[0-9]+)").unwrap();
#[dynamic]
static PROTEIN_RE: Regex = Regex::new(r"(?i)E:\s*([-+]?[0-9]*\.?[0-9]+)").unwrap();
#[dynamic]
static CARBOHYDRATE_RE: Regex = Regex::new(r"(?i)K:\s*([-+]?[0-9]*\.?[0-9]+)").unwrap();
#[dynamic]
static FAT_RE: Regex = Regex::new(r"(?i)Fe:\s*([-+]?[0-9]*\.?[0-9]+)").unwrap();

/// Whether attribute codes keep the page's spelling or get upper-cased.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeCase {
    AsIs,
    Upper,
}

/// Removes every "(...)" group and tidies up the whitespace left behind.
///
/// `"Kartoffel-Pfanne  (1,3,9a) (V)"` -> `"Kartoffel-Pfanne"`
pub fn sanitize_meal_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let name = PAREN_GROUP_RE.replace_all(name, "");
    let name = MULTI_SPACE_RE.replace_all(&name, " ");
    let name = SPACE_COMMA_RE.replace_all(&name, ",");

    name.trim().to_string()
}

/// Drops trailing nutrition shorthand ("Kcal:718, E:28.0 g, ...") from a name.
pub fn strip_nutrition_suffix(name: &str) -> String {
    match name.rfind("Kcal") {
        Some(idx) => name[..idx]
            .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
            .trim_start()
            .to_string(),
        None => name.to_string(),
    }
}

/// Collects the codes of all "(...)" groups.
///
/// `"Dish (1, 3, 9a) (V)"` -> `["1", "3", "9a", "V"]`
pub fn meal_attributes(text: &str, case: AttributeCase) -> Vec<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let joined = PAREN_GROUP_RE
        .captures_iter(&compact)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<&str>>()
        .join(",");

    let joined = match case {
        AttributeCase::AsIs => joined,
        AttributeCase::Upper => joined.to_uppercase(),
    };

    let mut attributes: Vec<String> = Vec::new();
    for code in joined.split([',', '(', ')']) {
        if !code.is_empty() && !attributes.iter().any(|a| a == code) {
            attributes.push(code.to_string());
        }
    }
    attributes
}

/// Reads a "student / employee / visitor" price cell.
///
/// `"2,20 € / 3,10 € / 4,00 €"` -> `2.2 / 3.1 / 4.0`
pub fn parse_meal_price(text: &str) -> Option<PriceItem> {
    if text.trim().is_empty() {
        return None;
    }

    let cleaned: String = text
        .replace('€', "")
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let cleaned = PAREN_GROUP_RE.replace_all(&cleaned, "");

    let segments: Vec<&str> = cleaned.split('/').collect();
    if segments.len() != 3 {
        log::debug!("Invalid price: '{}'", cleaned);
        return None;
    }

    let mut tiers = [0.0; 3];
    for (tier, segment) in tiers.iter_mut().zip(&segments) {
        match segment.parse::<f64>() {
            Ok(value) if value.is_finite() => *tier = value,
            _ => {
                log::debug!("Invalid price segment '{}' in '{}'", segment, cleaned);
                return None;
            }
        }
    }

    Some(PriceItem {
        student: tiers[0],
        employee: tiers[1],
        visitor: tiers[2],
    })
}

/// Reads "Kcal:718, E:28.0 g, K:98.0 g, Fe:22.0 g"; missing values are 0.
pub fn parse_vital_info(text: &str) -> VitalInfo {
    let first_value = |re: &Regex| -> f64 {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    VitalInfo {
        protein: first_value(&*PROTEIN_RE),
        fat: first_value(&*FAT_RE),
        calories: first_value(&*CALORIES_RE),
        carbohydrate: first_value(&*CARBOHYDRATE_RE),
    }
}

/// Turns a header like "Speiseplan vom 08.09. bis 12.09.2014" into the week
/// it covers, falling back to the week containing `today`.
///
/// Both bounds are stored as local midnight written as UTC, so the calendar
/// day survives serialization regardless of the process time zone.
pub fn parse_validity_interval(text: &str, today: NaiveDate) -> MenuValidity {
    match parse_date_pair(text, today) {
        Some((from, until)) => MenuValidity {
            from: local_midnight(from),
            until: local_midnight(until),
        },
        None => {
            log::debug!("Unreadable validity header '{}', using current week", text);
            current_week(today)
        }
    }
}

fn parse_date_pair(text: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let caps = INTERVAL_RE.captures(text)?;
    let from_parts: Vec<&str> = caps.get(1)?.as_str().split('.').collect();
    let until_parts: Vec<&str> = caps.get(2)?.as_str().split('.').collect();

    // 12.09. -> current year, 08.09. -> year of the second date
    let until_year = match until_parts.get(2) {
        Some(year) if !year.is_empty() => parse_year(year)?,
        _ => today.year(),
    };
    let from_year = match from_parts.get(2) {
        Some(year) if !year.is_empty() => parse_year(year)?,
        _ => until_year,
    };

    let from = compose_date(&from_parts, from_year)?;
    let until = compose_date(&until_parts, until_year)?;
    Some((from, until))
}

/// "14" -> 2014, "98" -> 1998, four digits as written
fn parse_year(year: &str) -> Option<i32> {
    let value = year.parse::<i32>().ok()?;
    match year.len() {
        2 if value > 68 => Some(1900 + value),
        2 => Some(2000 + value),
        _ => Some(value),
    }
}

fn compose_date(parts: &[&str], year: i32) -> Option<NaiveDate> {
    let day = parts.first()?.parse::<u32>().ok()?;
    let month = parts.get(1)?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    NaiveDateTime::new(date, NaiveTime::MIN).and_utc()
}

/// Monday 00:00 until the last millisecond of Sunday.
fn current_week(today: NaiveDate) -> MenuValidity {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let next_monday = monday + Duration::days(7);

    MenuValidity {
        from: local_midnight(monday),
        until: local_midnight(next_monday) - Duration::milliseconds(1),
    }
}
