use std::collections::BTreeMap;

use crate::data_types::menu_data_types::{CanteenInfo, GeoLocation};
use crate::data_types::{CanteenItem, ParserVariant};

use static_init::dynamic;

#[dynamic]
static AVAILABLE_CANTEENS: BTreeMap<&'static str, CanteenItem> = BTreeMap::from([
    (
        "wilhelmshoehe",
        canteen(
            "Mensa Wilhelmshöher Allee",
            None,
            (51.31116, 9.47467),
            "http://www.studentenwerk-kassel.de/189.html",
            5,
        ),
    ),
    (
        "hopla",
        canteen(
            "Zentralmensa Uni Kassel",
            Some("Holländischer Platz"),
            (51.32318, 9.50626),
            "http://www.studentenwerk-kassel.de/188.html",
            6,
        ),
    ),
    (
        "menzelstrasse",
        // more slots are published, but they stay empty
        canteen(
            "Mensa Menzelstraße",
            None,
            (51.305234, 9.489587),
            "http://www.studentenwerk-kassel.de/195.html",
            2,
        ),
    ),
    (
        "plett",
        canteen(
            "Mensa Heinrich-Plett-Straße",
            None,
            (51.282003, 9.447503),
            "http://www.studentenwerk-kassel.de/187.html",
            4,
        ),
    ),
    (
        "witzenhausen",
        canteen(
            "Mensa Witzenhausen",
            None,
            (51.343777, 9.859827),
            "http://www.studentenwerk-kassel.de/415.html",
            4,
        ),
    ),
    (
        "k10",
        canteen(
            "Bistro K10",
            None,
            (51.321952, 9.503411),
            "https://www.studentenwerk-kassel.de/de/meta/speiseplan/bistrok10/",
            3,
        ),
    ),
]);

fn canteen(
    name: &str,
    location_description: Option<&str>,
    (lat, long): (f64, f64),
    url: &str,
    meal_count: usize,
) -> CanteenItem {
    CanteenItem {
        info: CanteenInfo {
            name: name.to_string(),
            location_description: location_description.map(str::to_string),
            location: Some(GeoLocation { lat, long }),
        },
        url: url.to_string(),
        parser: ParserVariant::UniKassel,
        meal_count,
    }
}

/// Registry keys in alphabetical order.
pub fn available_canteens() -> Vec<&'static str> {
    AVAILABLE_CANTEENS.keys().copied().collect()
}

pub fn get_canteen(key: &str) -> Option<&'static CanteenItem> {
    AVAILABLE_CANTEENS.get(key.to_lowercase().as_str())
}

pub fn is_canteen_available(key: &str) -> bool {
    get_canteen(key).is_some()
}
