//! Dedicated dish pairs contributed by declared restaurant capabilities.

use super::seed::{DishSeed, dish};
use crate::domain::menu::value_objects::{Allergen::*, MenuCategory::*};

pub const VEGETARIAN: &[DishSeed] = &[
    dish("Quinoa Stuffed Peppers", "Colorful bell peppers filled with protein-rich quinoa and vegetables", 2200, MainCourse).vegetarian().vegan().gluten_free(),
    dish("Caprese Grilled Vegetable Panini", "Fresh mozzarella, tomatoes, and basil with grilled vegetables", 1800, MainCourse).vegetarian(),
];

pub const VEGAN: &[DishSeed] = &[
    dish("Lentil and Sweet Potato Curry", "Hearty red lentils with sweet potato in aromatic spices", 2000, MainCourse).vegan().gluten_free(),
    dish("Chickpea and Avocado Salad Wrap", "Protein-packed chickpeas with creamy avocado in a whole wheat wrap", 1600, MainCourse).vegan(),
];

pub const PESCATARIAN: &[DishSeed] = &[
    dish("Salmon-Avocado Rice Bowl", "Fresh grilled salmon over rice with avocado and vegetables", 2600, MainCourse).gluten_free(),
    dish("Tuna Niçoise Salad", "Classic French salad with seared tuna and fresh vegetables", 2400, Salad).gluten_free(),
];

pub const FLEXITARIAN: &[DishSeed] = &[
    dish("Chicken & Veggie Buddha Bowl", "Lean chicken with abundant fresh vegetables and quinoa", 2200, MainCourse).gluten_free(),
    dish("Mushroom & Spinach Frittata", "Protein-rich egg dish with vegetables and minimal meat", 1800, MainCourse).vegetarian().gluten_free(),
];

pub const PALEO: &[DishSeed] = &[
    dish("Zucchini Noodle Bolognese", "Spiralized zucchini with grass-fed beef meat sauce", 2400, MainCourse).gluten_free().diabetic_friendly(),
    dish("Grilled Steak with Roasted Sweet Potato", "Grass-fed steak with roasted sweet potato and vegetables", 3600, MainCourse).gluten_free(),
];

pub const KETO: &[DishSeed] = &[
    dish("Cauliflower \"Mac\" & Cheese", "Low-carb cauliflower in rich cheese sauce", 1800, MainCourse).vegetarian().gluten_free().diabetic_friendly(),
    dish("Bacon-and-Egg Breakfast Muffins", "High-fat, low-carb egg muffins with bacon", 1400, Appetizer).gluten_free().diabetic_friendly(),
];

pub const MEDITERRANEAN: &[DishSeed] = &[
    dish("Greek Salad with Feta & Olives", "Traditional Greek salad with olive oil dressing", 1600, Salad).vegetarian().gluten_free(),
    dish("Grilled Chicken Souvlaki", "Marinated chicken skewers with Mediterranean herbs", 2400, MainCourse).gluten_free(),
];

pub const LOW_CARB: &[DishSeed] = &[
    dish("Zucchini Lasagna", "Layers of zucchini with meat sauce and cheese, no pasta", 2200, MainCourse).gluten_free().diabetic_friendly(),
    dish("Bunless Turkey Burger", "Lean turkey patty wrapped in lettuce with toppings", 1800, MainCourse).gluten_free().diabetic_friendly(),
];

pub const HALAL: &[DishSeed] = &[
    dish("Chicken Shawarma Plate", "Halal chicken with rice, vegetables, and tahini sauce", 2400, MainCourse).halal(),
    dish("Lamb Kofta with Tzatziki", "Halal lamb meatballs with yogurt sauce and pita", 2600, MainCourse).halal(),
];

pub const KOSHER: &[DishSeed] = &[
    dish("Matzo Ball Soup", "Traditional Jewish soup with fluffy matzo balls", 1400, Soup).kosher(),
    dish("Roasted Salmon with Herbs", "Kosher salmon with fresh herbs and lemon", 2800, MainCourse).kosher().gluten_free(),
];

pub const DIABETIC_FRIENDLY: &[DishSeed] = &[
    dish("Veggie Omelet with Avocado", "Protein-rich eggs with vegetables and healthy fats", 1600, MainCourse).vegetarian().diabetic_friendly().gluten_free(),
    dish("Turkey Lettuce Wraps", "Lean turkey in crisp lettuce cups with low-carb vegetables", 1800, MainCourse).diabetic_friendly().gluten_free(),
];

pub const LACTOSE_FREE: &[DishSeed] = &[
    dish("Vegan Cashew Alfredo Zoodles", "Zucchini noodles with creamy cashew sauce", 2000, MainCourse).vegan().lactose_free().gluten_free(),
    dish("Coconut Mango Smoothie", "Tropical smoothie made with coconut milk", 800, Beverage).vegan().lactose_free().gluten_free(),
];

pub const GLUTEN_FREE: &[DishSeed] = &[
    dish("Quinoa & Roasted Vegetable Salad", "Protein-rich quinoa with seasonal roasted vegetables", 1800, Salad).vegetarian().vegan().gluten_free(),
    dish("Rice Paper Spring Rolls with Shrimp", "Fresh shrimp wrapped in rice paper with herbs", 1600, Appetizer).gluten_free(),
];

pub const PEANUT_FREE: &[DishSeed] = &[
    dish("Roasted Beet & Apple Salad", "Fresh beets and apples with seed-based dressing", 1600, Salad).vegetarian().vegan().free_of(&[Peanuts]),
    dish("Grilled Chicken Caesar Salad (no croutons)", "Classic Caesar without bread and nuts", 2000, Salad).gluten_free().free_of(&[Peanuts]),
];

pub const TREE_NUT_FREE: &[DishSeed] = &[
    dish("Beef & Broccoli Stir-Fry", "Tender beef with broccoli in savory sauce", 2200, MainCourse).free_of(&[TreeNuts]),
    dish("Quinoa & Black Bean Bowl", "Protein-rich quinoa with black beans and vegetables", 1800, MainCourse).vegetarian().vegan().free_of(&[TreeNuts]),
];

pub const MILK_FREE: &[DishSeed] = &[
    dish("Lentil Coconut Curry", "Creamy curry made with coconut milk instead of dairy", 2000, MainCourse).vegan().free_of(&[Milk]),
    dish("Avocado & Tuna Lettuce Cups", "Fresh tuna and avocado in crisp lettuce cups", 1800, Appetizer).gluten_free().free_of(&[Milk]),
];

pub const EGG_FREE: &[DishSeed] = &[
    dish("Chia Seed Pudding", "Creamy pudding made with chia seeds and plant milk", 1200, Dessert).vegan().free_of(&[Eggs]),
    dish("Overnight Oats with Rice Milk", "No-cook oats soaked in rice milk with fruit", 1000, Dessert).vegan().free_of(&[Eggs]),
];

pub const SOY_FREE: &[DishSeed] = &[
    dish("Kale & Apple Slaw", "Fresh kale salad with apples and tahini dressing", 1400, Salad).vegan().free_of(&[Soy]),
    dish("Roasted Carrot Soup", "Creamy carrot soup made without soy products", 1200, Soup).vegan().free_of(&[Soy]),
];

pub const FISH_FREE: &[DishSeed] = &[
    dish("Vegetable Paella", "Traditional rice dish with vegetables and saffron", 2200, MainCourse).vegetarian().vegan().free_of(&[Fish]),
    dish("Quinoa Stuffed Peppers", "Bell peppers filled with quinoa and vegetables", 2000, MainCourse).vegetarian().vegan().free_of(&[Fish]),
];

pub const SHELLFISH_FREE: &[DishSeed] = &[
    dish("Margherita Pizza on Gluten-Free Crust", "Classic pizza with tomatoes, mozzarella, and basil", 1800, MainCourse).vegetarian().gluten_free().free_of(&[Shellfish]),
    dish("Vegetarian Tacos", "Plant-based tacos with beans, vegetables, and avocado", 1600, MainCourse).vegetarian().vegan().free_of(&[Shellfish]),
];

pub const WHEAT_FREE: &[DishSeed] = &[
    dish("Zucchini Noodles with Pesto", "Spiralized zucchini with fresh basil pesto", 1800, MainCourse).vegetarian().free_of(&[Wheat]),
    dish("Grilled Salmon & Vegetables", "Fresh salmon with seasonal grilled vegetables", 2600, MainCourse).gluten_free().free_of(&[Wheat]),
];

pub const SESAME_FREE: &[DishSeed] = &[
    dish("Citrus Chicken Salad", "Grilled chicken with citrus dressing and mixed greens", 2000, Salad).gluten_free().free_of(&[Sesame]),
    dish("Sweet Potato & Black Bean Tacos", "Roasted sweet potato tacos without sesame", 1600, MainCourse).vegetarian().vegan().free_of(&[Sesame]),
];
