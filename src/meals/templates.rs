// ABOUTME: Built-in meal template library used for deficiency-driven suggestions
// ABOUTME: Fifty curated breakfast, lunch, dinner and snack templates with ingredient search terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use ate_core::models::MealCategory::{self, Breakfast, Dinner, Lunch, Snack};
use ate_core::models::{MealTemplate, TemplateFood};

/// `(search term, amount, unit)`
type IngredientRow = (&'static str, f64, &'static str);

/// `(id, name, category, ingredients)`
type TemplateRow = (u32, &'static str, MealCategory, &'static [IngredientRow]);

#[rustfmt::skip]
const TEMPLATE_ROWS: &[TemplateRow] = &[
    // Breakfast
    (
        1,
        "Classic Protein Breakfast",
        Breakfast,
        &[
            ("egg, whole, raw", 2.0, "large"),
            ("bread, whole wheat", 2.0, "slice"),
            ("avocados, raw", 0.5, "medium"),
        ],
    ),
    (
        2,
        "Oatmeal Power Bowl",
        Breakfast,
        &[
            ("oatmeal", 1.0, "cup"),
            ("banana", 1.0, "medium"),
            ("almonds", 30.0, "g"),
            ("blueberries", 50.0, "g"),
        ],
    ),
    (
        3,
        "Greek Yogurt Parfait",
        Breakfast,
        &[
            ("greek yogurt", 200.0, "g"),
            ("strawberries", 100.0, "g"),
            ("granola", 40.0, "g"),
            ("honey", 1.0, "tbsp"),
        ],
    ),
    (
        4,
        "Veggie Scramble",
        Breakfast,
        &[
            ("eggs", 3.0, "large"),
            ("spinach", 50.0, "g"),
            ("tomato", 1.0, "medium"),
            ("cheese", 30.0, "g"),
        ],
    ),
    (
        5,
        "Smoothie Bowl",
        Breakfast,
        &[
            ("banana", 2.0, "medium"),
            ("milk", 200.0, "ml"),
            ("peanut butter", 2.0, "tbsp"),
            ("chia seeds", 1.0, "tbsp"),
        ],
    ),
    (
        6,
        "Breakfast Burrito",
        Breakfast,
        &[
            ("tortilla", 1.0, "large"),
            ("eggs", 2.0, "large"),
            ("black beans", 80.0, "g"),
            ("salsa", 50.0, "g"),
        ],
    ),
    (
        7,
        "Protein Pancakes",
        Breakfast,
        &[
            ("pancake", 3.0, "medium"),
            ("maple syrup", 2.0, "tbsp"),
            ("banana", 1.0, "medium"),
            ("walnuts", 20.0, "g"),
        ],
    ),
    (
        8,
        "Cottage Cheese Bowl",
        Breakfast,
        &[
            ("cottage cheese", 200.0, "g"),
            ("pineapple", 100.0, "g"),
            ("sunflower seeds", 15.0, "g"),
        ],
    ),
    (
        9,
        "Breakfast Sandwich",
        Breakfast,
        &[
            ("english muffin", 1.0, "whole"),
            ("eggs", 1.0, "large"),
            ("turkey sausage", 50.0, "g"),
            ("cheese", 20.0, "g"),
        ],
    ),
    (
        10,
        "Quinoa Breakfast",
        Breakfast,
        &[
            ("quinoa", 150.0, "g"),
            ("apple", 1.0, "medium"),
            ("cinnamon", 1.0, "tsp"),
            ("pecans", 25.0, "g"),
        ],
    ),
    (
        11,
        "Breakfast Omelette",
        Breakfast,
        &[
            ("eggs", 3.0, "large"),
            ("mushrooms", 50.0, "g"),
            ("bell pepper", 50.0, "g"),
            ("feta cheese", 30.0, "g"),
        ],
    ),
    (
        12,
        "Acai Bowl",
        Breakfast,
        &[
            ("acai", 100.0, "g"),
            ("banana", 1.0, "medium"),
            ("granola", 40.0, "g"),
            ("coconut", 15.0, "g"),
        ],
    ),
    // Lunch
    (
        13,
        "Chicken Caesar Salad",
        Lunch,
        &[
            ("chicken, breast, raw", 150.0, "g"),
            ("lettuce, romaine, raw", 100.0, "g"),
            ("cheese, parmesan", 30.0, "g"),
            ("croutons, plain", 30.0, "g"),
        ],
    ),
    (
        14,
        "Turkey Sandwich",
        Lunch,
        &[
            ("bread, whole wheat", 2.0, "slice"),
            ("turkey, breast, meat", 100.0, "g"),
            ("lettuce, raw", 30.0, "g"),
            ("tomatoes, raw", 1.0, "medium"),
        ],
    ),
    (
        15,
        "Mediterranean Bowl",
        Lunch,
        &[
            ("quinoa", 150.0, "g"),
            ("chickpeas", 100.0, "g"),
            ("cucumber", 100.0, "g"),
            ("feta cheese", 40.0, "g"),
        ],
    ),
    (
        16,
        "Tuna Wrap",
        Lunch,
        &[
            ("tortilla", 1.0, "large"),
            ("tuna", 100.0, "g"),
            ("mixed greens", 50.0, "g"),
            ("avocado", 0.5, "medium"),
        ],
    ),
    (
        17,
        "Veggie Burger",
        Lunch,
        &[
            ("veggie burger", 1.0, "patty"),
            ("whole wheat bun", 1.0, "whole"),
            ("sweet potato fries", 150.0, "g"),
            ("ketchup", 2.0, "tbsp"),
        ],
    ),
    (
        18,
        "Chicken Burrito Bowl",
        Lunch,
        &[
            ("rice, brown, cooked", 150.0, "g"),
            ("chicken, breast, raw", 120.0, "g"),
            ("beans, black, cooked", 100.0, "g"),
            ("corn, sweet, cooked", 80.0, "g"),
        ],
    ),
    (
        19,
        "Lentil Soup",
        Lunch,
        &[
            ("lentils", 200.0, "g"),
            ("carrots", 100.0, "g"),
            ("celery", 50.0, "g"),
            ("whole wheat bread", 1.0, "slice"),
        ],
    ),
    (
        20,
        "Pasta Primavera",
        Lunch,
        &[
            ("pasta", 100.0, "g"),
            ("broccoli", 100.0, "g"),
            ("bell pepper", 80.0, "g"),
            ("olive oil", 1.0, "tbsp"),
        ],
    ),
    (
        21,
        "Shrimp Salad",
        Lunch,
        &[
            ("shrimp", 150.0, "g"),
            ("mixed greens", 100.0, "g"),
            ("cherry tomatoes", 80.0, "g"),
            ("lemon juice", 2.0, "tbsp"),
        ],
    ),
    (
        22,
        "BLT Sandwich",
        Lunch,
        &[
            ("whole wheat bread", 2.0, "slice"),
            ("bacon", 3.0, "slice"),
            ("lettuce", 50.0, "g"),
            ("tomato", 1.0, "medium"),
        ],
    ),
    (
        23,
        "Falafel Wrap",
        Lunch,
        &[
            ("tortilla", 1.0, "large"),
            ("falafel", 4.0, "pieces"),
            ("hummus", 50.0, "g"),
            ("cucumber", 80.0, "g"),
        ],
    ),
    (
        24,
        "Tofu Stir Fry",
        Lunch,
        &[
            ("tofu, raw, firm", 150.0, "g"),
            ("rice, white, cooked", 150.0, "g"),
            ("broccoli, raw", 100.0, "g"),
            ("soy sauce", 1.0, "tbsp"),
        ],
    ),
    (
        25,
        "Caprese Sandwich",
        Lunch,
        &[
            ("ciabatta bread", 1.0, "roll"),
            ("mozzarella", 80.0, "g"),
            ("tomato", 1.0, "large"),
            ("basil", 10.0, "g"),
        ],
    ),
    (
        26,
        "Chicken Quesadilla",
        Lunch,
        &[
            ("tortilla", 2.0, "medium"),
            ("chicken breast", 100.0, "g"),
            ("cheese", 60.0, "g"),
            ("salsa", 50.0, "g"),
        ],
    ),
    (
        27,
        "Sushi Bowl",
        Lunch,
        &[
            ("rice, white, cooked", 150.0, "g"),
            ("salmon, raw", 120.0, "g"),
            ("avocados, raw", 0.5, "medium"),
            ("seaweed, dried", 10.0, "g"),
        ],
    ),
    // Dinner
    (
        28,
        "Grilled Salmon Dinner",
        Dinner,
        &[
            ("salmon, raw", 180.0, "g"),
            ("sweet potato, raw", 200.0, "g"),
            ("asparagus, raw", 150.0, "g"),
            ("oil, olive", 1.0, "tbsp"),
        ],
    ),
    (
        29,
        "Chicken Stir Fry",
        Dinner,
        &[
            ("chicken, breast, raw", 150.0, "g"),
            ("rice, brown, cooked", 150.0, "g"),
            ("vegetables, mixed, frozen", 200.0, "g"),
            ("soy sauce", 2.0, "tbsp"),
        ],
    ),
    (
        30,
        "Beef Tacos",
        Dinner,
        &[
            ("beef, ground, raw", 150.0, "g"),
            ("taco shells, baked", 3.0, "shells"),
            ("lettuce, raw", 50.0, "g"),
            ("cheese, cheddar", 40.0, "g"),
        ],
    ),
    (
        31,
        "Vegetarian Chili",
        Dinner,
        &[
            ("kidney beans", 200.0, "g"),
            ("tomato", 200.0, "g"),
            ("bell pepper", 100.0, "g"),
            ("corn", 100.0, "g"),
        ],
    ),
    (
        32,
        "Pork Chops with Veggies",
        Dinner,
        &[
            ("pork chop", 180.0, "g"),
            ("mashed potato", 200.0, "g"),
            ("green beans", 150.0, "g"),
            ("butter", 1.0, "tbsp"),
        ],
    ),
    (
        33,
        "Pasta Bolognese",
        Dinner,
        &[
            ("pasta", 150.0, "g"),
            ("ground beef", 120.0, "g"),
            ("tomato sauce", 150.0, "ml"),
            ("parmesan cheese", 30.0, "g"),
        ],
    ),
    (
        34,
        "Shrimp Scampi",
        Dinner,
        &[
            ("shrimp", 200.0, "g"),
            ("pasta", 150.0, "g"),
            ("garlic", 3.0, "cloves"),
            ("butter", 2.0, "tbsp"),
        ],
    ),
    (
        35,
        "Roast Chicken Dinner",
        Dinner,
        &[
            ("chicken thigh", 200.0, "g"),
            ("roasted potato", 200.0, "g"),
            ("carrots", 150.0, "g"),
            ("brussels sprouts", 100.0, "g"),
        ],
    ),
    (
        36,
        "Teriyaki Salmon Bowl",
        Dinner,
        &[
            ("salmon, raw", 180.0, "g"),
            ("rice, white, cooked", 150.0, "g"),
            ("broccoli, raw", 150.0, "g"),
            ("sauce, teriyaki", 2.0, "tbsp"),
        ],
    ),
    (
        37,
        "Lamb Kebabs",
        Dinner,
        &[
            ("lamb", 180.0, "g"),
            ("couscous", 150.0, "g"),
            ("bell pepper", 100.0, "g"),
            ("onion", 80.0, "g"),
        ],
    ),
    (
        38,
        "Turkey Meatballs",
        Dinner,
        &[
            ("turkey meatballs", 150.0, "g"),
            ("pasta", 150.0, "g"),
            ("marinara sauce", 150.0, "ml"),
            ("spinach", 100.0, "g"),
        ],
    ),
    (
        39,
        "Stuffed Bell Peppers",
        Dinner,
        &[
            ("bell pepper", 2.0, "large"),
            ("ground turkey", 150.0, "g"),
            ("brown rice", 100.0, "g"),
            ("cheese", 40.0, "g"),
        ],
    ),
    (
        40,
        "Fish Tacos",
        Dinner,
        &[
            ("white fish", 150.0, "g"),
            ("corn tortilla", 3.0, "tortillas"),
            ("cabbage", 80.0, "g"),
            ("lime", 1.0, "whole"),
        ],
    ),
    (
        41,
        "Eggplant Parmesan",
        Dinner,
        &[
            ("eggplant", 200.0, "g"),
            ("marinara sauce", 150.0, "ml"),
            ("mozzarella", 80.0, "g"),
            ("pasta", 100.0, "g"),
        ],
    ),
    (
        42,
        "Steak and Potatoes",
        Dinner,
        &[
            ("beef steak", 200.0, "g"),
            ("baked potato", 250.0, "g"),
            ("broccoli", 150.0, "g"),
            ("butter", 1.0, "tbsp"),
        ],
    ),
    // Snacks
    (
        43,
        "Apple with Peanut Butter",
        Snack,
        &[
            ("apple", 1.0, "medium"),
            ("peanut butter", 2.0, "tbsp"),
        ],
    ),
    (
        44,
        "Trail Mix",
        Snack,
        &[
            ("almonds", 30.0, "g"),
            ("walnuts", 20.0, "g"),
            ("dried cranberries", 20.0, "g"),
            ("dark chocolate", 15.0, "g"),
        ],
    ),
    (
        45,
        "Hummus and Veggies",
        Snack,
        &[
            ("hummus", 80.0, "g"),
            ("carrots", 100.0, "g"),
            ("celery", 80.0, "g"),
        ],
    ),
    (
        46,
        "Protein Shake",
        Snack,
        &[
            ("protein powder", 30.0, "g"),
            ("banana", 1.0, "medium"),
            ("milk", 250.0, "ml"),
        ],
    ),
    (
        47,
        "Cheese and Crackers",
        Snack,
        &[
            ("cheddar cheese", 40.0, "g"),
            ("whole wheat crackers", 30.0, "g"),
            ("grapes", 100.0, "g"),
        ],
    ),
    (
        48,
        "Energy Balls",
        Snack,
        &[
            ("oats", 40.0, "g"),
            ("peanut butter", 2.0, "tbsp"),
            ("honey", 1.0, "tbsp"),
            ("chia seeds", 1.0, "tbsp"),
        ],
    ),
    (
        49,
        "Avocado Toast",
        Snack,
        &[
            ("whole wheat bread", 1.0, "slice"),
            ("avocado", 0.5, "medium"),
            ("tomato", 0.5, "medium"),
        ],
    ),
    (
        50,
        "Fruit Salad",
        Snack,
        &[
            ("strawberries", 100.0, "g"),
            ("blueberries", 80.0, "g"),
            ("pineapple", 100.0, "g"),
            ("kiwi", 1.0, "medium"),
        ],
    ),
];

/// The built-in template library, in id order
pub static MEAL_TEMPLATES: LazyLock<Vec<MealTemplate>> = LazyLock::new(|| {
    TEMPLATE_ROWS
        .iter()
        .map(|(id, name, category, foods)| MealTemplate {
            id: *id,
            name: (*name).to_owned(),
            category: *category,
            foods: foods
                .iter()
                .map(|(search_term, amount, unit)| TemplateFood::new(*search_term, *amount, *unit))
                .collect(),
        })
        .collect()
});

/// Templates belonging to `category`
pub fn by_category(category: MealCategory) -> impl Iterator<Item = &'static MealTemplate> {
    MEAL_TEMPLATES
        .iter()
        .filter(move |template| template.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_shape() {
        assert_eq!(MEAL_TEMPLATES.len(), 50);
        assert_eq!(by_category(Breakfast).count(), 12);
        assert_eq!(by_category(Lunch).count(), 15);
        assert_eq!(by_category(Dinner).count(), 15);
        assert_eq!(by_category(Snack).count(), 8);
    }

    #[test]
    fn test_ids_unique_and_ingredients_present() {
        let ids: HashSet<u32> = MEAL_TEMPLATES.iter().map(|template| template.id).collect();
        assert_eq!(ids.len(), MEAL_TEMPLATES.len());
        assert!(MEAL_TEMPLATES.iter().all(|template| !template.foods.is_empty()));
        assert!(MEAL_TEMPLATES
            .iter()
            .flat_map(|template| &template.foods)
            .all(|food| food.amount > 0.0 && !food.search_term.trim().is_empty()));
    }
}
