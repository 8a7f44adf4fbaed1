use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanteenInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<GeoLocation>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct GeoLocation {
    pub lat: f64,
    pub long: f64,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct MenuValidity {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct PriceItem {
    pub student: f64,
    pub employee: f64,
    pub visitor: f64,
}

/// Nutrition facts of a "mensaVital" dish.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct VitalInfo {
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
    pub carbohydrate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub name: String,
    pub attributes: Vec<String>,
    pub price: Option<PriceItem>,
    pub vital_info: Option<VitalInfo>,
}

/// weekday (1 = Monday) -> dish, `None` if nothing is offered
pub type DayMeals = BTreeMap<u8, Option<MealItem>>;

/// slot label as printed on the page ("Essen 1", "Angebot des Tages") -> week,
/// in page order
pub type Meals = IndexMap<String, DayMeals>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CanteenMenu {
    pub info: CanteenInfo,
    pub validity: MenuValidity,
    pub currency: String,
    pub meals: Meals,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransposedMealItem {
    #[serde(flatten)]
    pub meal: MealItem,
    pub category_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransposedCanteenMenu {
    pub info: CanteenInfo,
    pub validity: MenuValidity,
    pub currency: String,
    /// `days[0]` is Monday
    pub days: Vec<Vec<TransposedMealItem>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParseResult<T = CanteenMenu> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub menu: T,
}
