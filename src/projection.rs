use crate::data_types::menu_data_types::{
    ParseResult, TransposedCanteenMenu, TransposedMealItem,
};

/// Regroups `meals[slot][day]` into `days[day - 1]`, dropping absent entries.
///
/// Within a day, entries keep the page order of their slots.
pub fn transpose(parsed: ParseResult) -> ParseResult<TransposedCanteenMenu> {
    let menu = parsed.menu;
    let mut days: Vec<Vec<TransposedMealItem>> = Vec::new();

    for (category_name, week) in menu.meals {
        for (day, meal) in week {
            let Some(index) = usize::from(day).checked_sub(1) else {
                continue;
            };
            if days.len() <= index {
                days.resize_with(index + 1, Vec::new);
            }
            if let Some(meal) = meal {
                days[index].push(TransposedMealItem {
                    meal,
                    category_name: category_name.clone(),
                });
            }
        }
    }

    ParseResult {
        success: parsed.success,
        message: parsed.message,
        menu: TransposedCanteenMenu {
            info: menu.info,
            validity: menu.validity,
            currency: menu.currency,
            days,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::menu_data_types::{
        CanteenInfo, CanteenMenu, DayMeals, MealItem, Meals, MenuValidity,
    };
    use chrono::{TimeZone, Utc};

    fn meal(name: &str) -> MealItem {
        MealItem {
            name: name.to_string(),
            attributes: vec![],
            price: None,
            vital_info: None,
        }
    }

    fn parsed(meals: Meals) -> ParseResult {
        ParseResult {
            success: true,
            message: None,
            menu: CanteenMenu {
                info: CanteenInfo {
                    name: "Bistro K10".to_string(),
                    location_description: None,
                    location: None,
                },
                validity: MenuValidity {
                    from: Utc.with_ymd_and_hms(2014, 9, 8, 0, 0, 0).unwrap(),
                    until: Utc.with_ymd_and_hms(2014, 9, 12, 0, 0, 0).unwrap(),
                },
                currency: "€".to_string(),
                meals,
            },
        }
    }

    fn week(entries: [Option<&str>; 5]) -> DayMeals {
        (1..=5u8)
            .zip(entries)
            .map(|(day, name)| (day, name.map(meal)))
            .collect()
    }

    #[test]
    fn slots_become_days() {
        let mut meals = Meals::new();
        meals.insert(
            "Essen 1".to_string(),
            week([Some("Suppe"), None, Some("Curry"), None, None]),
        );
        meals.insert(
            "Angebot des Tages".to_string(),
            week([Some("Pizza"), Some("Pasta"), None, None, None]),
        );
        meals.insert(
            "Essen 0".to_string(),
            week([Some("Salat"), None, None, None, None]),
        );

        let transposed = transpose(parsed(meals));
        assert!(transposed.success);
        let days = &transposed.menu.days;
        assert_eq!(days.len(), 5);

        let monday: Vec<(&str, &str)> = days[0]
            .iter()
            .map(|m| (m.category_name.as_str(), m.meal.name.as_str()))
            .collect();
        assert_eq!(
            monday,
            vec![
                ("Essen 1", "Suppe"),
                ("Angebot des Tages", "Pizza"),
                ("Essen 0", "Salat")
            ]
        );
        assert_eq!(days[1].len(), 1);
        assert_eq!(days[2][0].meal.name, "Curry");
        assert!(days[3].is_empty());
        assert!(days[4].is_empty());
        assert_eq!(transposed.menu.currency, "€");
    }

    #[test]
    fn empty_grid_has_no_days() {
        let transposed = transpose(parsed(Meals::new()));
        assert!(transposed.menu.days.is_empty());
    }

    #[test]
    fn category_name_is_flattened_into_the_entry() {
        let mut meals = Meals::new();
        meals.insert(
            "Essen 2".to_string(),
            week([Some("Eintopf"), None, None, None, None]),
        );
        let json = serde_json::to_value(transpose(parsed(meals)).menu).unwrap();
        let entry = &json["days"][0][0];
        assert_eq!(entry["name"], "Eintopf");
        assert_eq!(entry["categoryName"], "Essen 2");
        assert!(entry["vitalInfo"].is_null());
    }
}
