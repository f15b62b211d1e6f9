//! Global specialization libraries. Every one of them is part of the common items.

use super::seed::{DishSeed, dish};
use crate::domain::menu::value_objects::{Allergen::*, MenuCategory::*};

pub const VEGETARIAN: &[DishSeed] = &[
    dish("Quinoa Buddha Bowl", "Protein-rich quinoa with roasted vegetables and tahini dressing", 2800, MainCourse).vegetarian().vegan().gluten_free().diabetic_friendly(),
    dish("Caprese Stuffed Portobello", "Grilled portobello mushroom stuffed with fresh mozzarella and tomatoes", 2600, MainCourse).vegetarian().gluten_free(),
    dish("Vegetarian Shepherd's Pie", "Lentil and vegetable filling topped with creamy mashed potatoes", 2400, MainCourse).vegetarian(),
    dish("Spinach and Ricotta Cannelloni", "Fresh pasta tubes filled with spinach and ricotta in tomato sauce", 2200, MainCourse).vegetarian(),
    dish("Mediterranean Vegetable Wrap", "Grilled vegetables with hummus in a whole wheat tortilla", 1800, MainCourse).vegetarian().vegan(),
];

pub const VEGAN: &[DishSeed] = &[
    dish("Jackfruit Carnitas Tacos", "Seasoned jackfruit with cilantro lime slaw in corn tortillas", 2400, MainCourse).vegan().gluten_free(),
    dish("Cashew Alfredo Pasta", "Creamy cashew-based sauce over fresh pasta with nutritional yeast", 2600, MainCourse).vegan(),
    dish("Beetroot and Walnut Burger", "House-made patty with avocado and vegan mayo on a brioche bun", 2200, MainCourse).vegan(),
    dish("Coconut Curry Lentil Soup", "Red lentils in aromatic coconut curry broth with vegetables", 1600, Soup).vegan().gluten_free(),
    dish("Acai Berry Bowl", "Frozen acai topped with granola, fresh berries, and coconut flakes", 1800, Dessert).vegan().gluten_free(),
];

pub const GLUTEN_FREE: &[DishSeed] = &[
    dish("Zucchini Noodle Carbonara", "Spiralized zucchini with creamy egg sauce and crispy pancetta", 2800, MainCourse).gluten_free(),
    dish("Cauliflower Crust Pizza", "Gluten-free cauliflower base with fresh mozzarella and basil", 2400, MainCourse).gluten_free().vegetarian(),
    dish("Almond-Crusted Salmon", "Fresh salmon fillet with almond crust and lemon butter sauce", 3200, MainCourse).gluten_free(),
    dish("Quinoa Stuffed Bell Peppers", "Colorful peppers filled with quinoa, vegetables, and herbs", 2200, MainCourse).gluten_free().vegetarian(),
    dish("Flourless Chocolate Cake", "Rich, decadent chocolate cake made with almond flour", 1600, Dessert).gluten_free().vegetarian(),
];

pub const DIABETIC_FRIENDLY: &[DishSeed] = &[
    dish("Grilled Chicken with Steamed Broccoli", "Lean protein with fiber-rich vegetables, no added sugars", 2600, MainCourse).diabetic_friendly().gluten_free(),
    dish("Baked Cod with Herbs", "Fresh white fish with Mediterranean herbs and olive oil", 2800, MainCourse).diabetic_friendly().gluten_free(),
    dish("Cauliflower Rice Stir-Fry", "Low-carb cauliflower rice with mixed vegetables and tofu", 2000, MainCourse).diabetic_friendly().vegetarian().gluten_free(),
    dish("Greek Salad with Grilled Shrimp", "Fresh vegetables with lean protein and olive oil dressing", 2400, Salad).diabetic_friendly().gluten_free(),
    dish("Sugar-Free Berry Parfait", "Greek yogurt layered with fresh berries and nuts", 1400, Dessert).diabetic_friendly().vegetarian().gluten_free(),
];

pub const LACTOSE_FREE: &[DishSeed] = &[
    dish("Coconut Milk Risotto", "Creamy risotto made with coconut milk and wild mushrooms", 2600, MainCourse).lactose_free().vegetarian(),
    dish("Dairy-Free Fettuccine Alfredo", "Rich cashew cream sauce over fresh fettuccine pasta", 2400, MainCourse).lactose_free().vegetarian(),
    dish("Grilled Salmon with Olive Tapenade", "Fresh salmon with Mediterranean olive and herb spread", 3000, MainCourse).lactose_free().gluten_free(),
    dish("Oat Milk Smoothie Bowl", "Tropical fruits blended with oat milk, topped with granola", 1600, Dessert).lactose_free().vegan(),
    dish("Dark Chocolate Avocado Mousse", "Rich, creamy mousse made with avocado and coconut cream", 1400, Dessert).lactose_free().vegan(),
];

pub const HALAL: &[DishSeed] = &[
    dish("Halal Lamb Kebab Platter", "Grilled halal lamb skewers with rice pilaf and vegetables", 3200, MainCourse).halal(),
    dish("Moroccan Chicken Tagine", "Slow-cooked halal chicken with apricots and Middle Eastern spices", 2800, MainCourse).halal(),
    dish("Halal Beef Shawarma Bowl", "Seasoned halal beef over rice with tahini sauce and fresh vegetables", 2600, MainCourse).halal(),
    dish("Turkish Lentil Soup", "Traditional red lentil soup with Middle Eastern spices", 1400, Soup).halal().vegan(),
    dish("Baklava with Honey", "Flaky pastry layers with nuts and honey syrup", 1200, Dessert).halal().vegetarian(),
];

pub const KOSHER: &[DishSeed] = &[
    dish("Kosher Beef Brisket", "Slow-braised kosher beef with root vegetables and herbs", 3400, MainCourse).kosher(),
    dish("Gefilte Fish with Horseradish", "Traditional kosher fish preparation with fresh horseradish", 1800, Appetizer).kosher(),
    dish("Kosher Chicken Matzo Ball Soup", "Homemade kosher chicken broth with fluffy matzo balls", 1600, Soup).kosher(),
    dish("Challah French Toast", "Traditional challah bread made into sweet French toast", 1400, Dessert).kosher().vegetarian(),
    dish("Kosher Wine Braised Vegetables", "Seasonal vegetables braised in kosher wine with herbs", 2000, SideDish).kosher().vegetarian(),
];

pub const PUREE_FRIENDLY: &[DishSeed] = &[
    dish("Smooth Butternut Squash Soup", "Silky pureed soup with roasted butternut squash and cream", 1600, Soup).puree_friendly().vegetarian(),
    dish("Creamy Chicken and Rice Puree", "Tender chicken and rice blended into a smooth, nutritious meal", 2200, MainCourse).puree_friendly(),
    dish("Smooth Fruit Compote", "Pureed seasonal fruits with natural sweetness", 1200, Dessert).puree_friendly().vegan(),
    dish("Vegetable Protein Smoothie", "Blended vegetables and plant protein for complete nutrition", 1800, MainCourse).puree_friendly().vegan(),
    dish("Smooth Lentil Dal", "Finely pureed red lentils with gentle spices and coconut", 2000, MainCourse).puree_friendly().vegan(),
];

pub const ALLERGEN_FREE: &[DishSeed] = &[
    dish("Nut-Free Granola Bowl", "Seed-based granola with fresh fruit and coconut yogurt", 1600, Dessert).vegetarian().free_of(&[TreeNuts, Peanuts]),
    dish("Seed-Crusted Chicken", "Chicken breast crusted with sunflower and pumpkin seeds", 2600, MainCourse).free_of(&[TreeNuts, Peanuts]),
    dish("Coconut-Free Curry", "Mild curry made without coconut milk, using vegetable broth", 2200, MainCourse).vegetarian().free_of(&[Coconut]),
    dish("Sunflower-Free Salad", "Mixed greens with pumpkin seeds and olive oil dressing", 1400, Salad).vegetarian().vegan().free_of(&[Sunflower]),
    dish("Sesame-Free Asian Bowl", "Asian-style vegetables and rice without sesame oil or seeds", 2000, MainCourse).vegetarian().vegan().free_of(&[Sesame]),
    dish("Land-Based Paella", "Traditional rice dish with chicken and vegetables, no seafood", 2800, MainCourse).free_of(&[Shellfish, Fish, Molluscs]),
    dish("Chicken and Vegetable Stir-Fry", "Fresh chicken with seasonal vegetables in savory sauce", 2400, MainCourse).free_of(&[Shellfish, Fish]),
    dish("Vegetarian Land Feast", "Hearty vegetable stew with beans and grains, no seafood", 1800, MainCourse).vegetarian().vegan().free_of(&[Shellfish, Fish, Molluscs]),
    dish("Egg-Free Caesar Salad", "Classic Caesar with vegan dressing and nutritional yeast", 1800, Salad).vegan().free_of(&[Eggs]),
    dish("Vegan Mayonnaise Sandwich", "Fresh vegetables with plant-based mayo on artisan bread", 1600, MainCourse).vegan().free_of(&[Eggs]),
    dish("Dairy-Free Chocolate Mousse", "Rich chocolate dessert made with coconut cream", 1400, Dessert).vegan().free_of(&[Milk]),
    dish("Milk-Free Mac and Cheese", "Pasta with cashew-based cheese sauce", 2000, MainCourse).vegan().free_of(&[Milk]),
    dish("Soy-Free Teriyaki Bowl", "Grilled chicken with coconut aminos glaze and vegetables", 2600, MainCourse).free_of(&[Soy]),
    dish("Soy-Free Vegetable Stir-Fry", "Mixed vegetables with garlic and herbs, no soy sauce", 1800, MainCourse).vegetarian().vegan().free_of(&[Soy]),
    dish("Rice Paper Spring Rolls", "Fresh vegetables wrapped in rice paper with peanut dip", 1600, Appetizer).vegetarian().vegan().free_of(&[Wheat]),
];

pub const PALEO: &[DishSeed] = &[
    dish("Paleo Grilled Steak", "Grass-fed beef with roasted root vegetables and herbs", 3800, MainCourse).diabetic_friendly().gluten_free(),
    dish("Wild Salmon with Sweet Potato", "Paleo-friendly fish with roasted sweet potato and greens", 3400, MainCourse).diabetic_friendly().gluten_free(),
    dish("Coconut Chicken Curry", "Free-range chicken in coconut milk with vegetables, no grains", 3000, MainCourse).diabetic_friendly().gluten_free(),
    dish("Paleo Beef Bowl", "Grass-fed ground beef with cauliflower rice and avocado", 2800, MainCourse).diabetic_friendly().gluten_free(),
    dish("Coconut Macaroons", "Sugar-free coconut treats sweetened with dates", 1200, Dessert).diabetic_friendly().gluten_free(),
];

pub const KETO: &[DishSeed] = &[
    dish("Keto Bacon Cheeseburger Bowl", "Grass-fed beef patty with cheese, bacon, and lettuce (no bun)", 2600, MainCourse).diabetic_friendly().gluten_free(),
    dish("Avocado and Egg Salad", "Keto-friendly salad with high-fat dressing and minimal carbs", 1800, Salad).vegetarian().diabetic_friendly().gluten_free(),
    dish("Keto Salmon with Asparagus", "High-fat fish with buttered asparagus and hollandaise", 3200, MainCourse).diabetic_friendly().gluten_free(),
    dish("Cauliflower Mac and Cheese", "Low-carb cauliflower with high-fat cheese sauce", 2000, MainCourse).vegetarian().diabetic_friendly().gluten_free(),
    dish("Keto Fat Bomb Dessert", "High-fat, low-carb chocolate dessert with MCT oil", 1400, Dessert).vegetarian().diabetic_friendly().gluten_free(),
];

pub const MEDITERRANEAN: &[DishSeed] = &[
    dish("Mediterranean Grilled Fish", "Fresh fish with olive oil, herbs, and lemon", 3000, MainCourse).diabetic_friendly().gluten_free(),
    dish("Greek Style Quinoa Bowl", "Quinoa with olives, feta, tomatoes, and olive oil", 2200, MainCourse).vegetarian().diabetic_friendly().gluten_free(),
    dish("Mediterranean Chickpea Salad", "Protein-rich chickpeas with vegetables and olive oil dressing", 1800, Salad).vegetarian().vegan().diabetic_friendly().gluten_free(),
    dish("Herb-Crusted Lamb", "Mediterranean-style lamb with rosemary and garlic", 3600, MainCourse).diabetic_friendly().gluten_free(),
    dish("Greek Yogurt with Honey and Nuts", "Traditional Mediterranean dessert with healthy fats", 1200, Dessert).vegetarian().diabetic_friendly().gluten_free(),
];

pub const LOW_CARB: &[DishSeed] = &[
    dish("Zucchini Lasagna", "Layers of zucchini with meat sauce and cheese, no pasta", 2400, MainCourse).diabetic_friendly().gluten_free(),
    dish("Lettuce Wrap Tacos", "Ground turkey in crisp lettuce cups with salsa", 2000, MainCourse).diabetic_friendly().gluten_free(),
    dish("Cabbage Roll Soup", "All the flavors of cabbage rolls in a hearty, low-carb soup", 1600, Soup).diabetic_friendly().gluten_free(),
    dish("Spaghetti Squash Bolognese", "Roasted spaghetti squash with rich meat sauce", 2200, MainCourse).diabetic_friendly().gluten_free(),
    dish("Cheesecake Bites (Sugar-Free)", "Mini cheesecakes sweetened with stevia on almond crust", 1400, Dessert).vegetarian().diabetic_friendly().gluten_free(),
];
