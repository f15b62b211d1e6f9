//! Curated menus per cuisine, the generic menu and the always-available items.

use super::seed::{DishSeed, dish};
use crate::domain::menu::value_objects::MenuCategory::*;

pub const ITALIAN: &[DishSeed] = &[
    dish("Bruschetta al Pomodoro", "Toasted bread topped with fresh tomatoes and basil", 1800, Appetizer).vegetarian().vegan(),
    dish("Antipasto Misto", "Selection of cured meats, cheeses, and marinated vegetables", 2400, Appetizer),
    dish("Arancini Siciliani", "Crispy fried rice balls with mozzarella and ragu", 2000, Appetizer).vegetarian(),
    dish("Caprese Salad", "Fresh mozzarella, tomatoes, and basil with balsamic", 1600, Appetizer).vegetarian(),
    dish("Prosciutto e Melone", "Parma ham with fresh cantaloupe", 2200, Appetizer),
    dish("Calamari Fritti", "Golden fried squid rings with marinara sauce", 1900, Appetizer),
    dish("Minestrone", "Hearty vegetable soup with pasta and beans", 1400, Soup).vegetarian().vegan(),
    dish("Zuppa Toscana", "Tuscan soup with sausage, beans, and kale", 1600, Soup),
    dish("Panzanella", "Tuscan bread salad with tomatoes and herbs", 1500, Salad).vegetarian().vegan(),
    dish("Insalata di Rucola", "Arugula salad with parmesan and lemon dressing", 1300, Salad).vegetarian(),
    dish("Spaghetti Carbonara", "Classic pasta with eggs, cheese, and pancetta", 3200, MainCourse),
    dish("Risotto ai Funghi", "Creamy mushroom risotto with parmesan", 2800, MainCourse).vegetarian(),
    dish("Osso Buco", "Braised veal shanks with vegetables and white wine", 4800, MainCourse),
    dish("Lasagna della Casa", "Homemade lasagna with meat sauce and bechamel", 3000, MainCourse),
    dish("Fettuccine Alfredo", "Creamy pasta with parmesan and butter", 2600, MainCourse).vegetarian(),
    dish("Chicken Parmigiana", "Breaded chicken with marinara and mozzarella", 3500, MainCourse),
    dish("Veal Marsala", "Tender veal in marsala wine sauce with mushrooms", 4200, MainCourse),
    dish("Linguine alle Vongole", "Linguine pasta with fresh clams in white wine", 3400, MainCourse),
    dish("Pizza Margherita", "Classic pizza with tomato, mozzarella, and basil", 2400, MainCourse).vegetarian(),
    dish("Pizza Quattro Stagioni", "Four seasons pizza with artichokes, ham, mushrooms, olives", 2800, MainCourse),
    dish("Gnocchi Gorgonzola", "Potato dumplings in creamy gorgonzola sauce", 2500, MainCourse).vegetarian(),
    dish("Branzino alla Griglia", "Grilled sea bass with lemon and herbs", 3800, MainCourse),
    dish("Polenta Cremosa", "Creamy polenta with parmesan", 1200, SideDish).vegetarian(),
    dish("Verdure Grigliate", "Grilled seasonal vegetables with olive oil", 1400, SideDish).vegetarian().vegan(),
    dish("Focaccia", "Italian flatbread with rosemary and sea salt", 800, SideDish).vegetarian().vegan(),
    dish("Tiramisu", "Coffee-flavored dessert with mascarpone cheese", 1600, Dessert).vegetarian(),
    dish("Panna Cotta", "Silky vanilla custard with berry coulis", 1400, Dessert).vegetarian(),
    dish("Cannoli Siciliani", "Crispy shells filled with sweet ricotta cream", 1500, Dessert).vegetarian(),
    dish("Gelato", "Artisanal Italian ice cream - ask for flavors", 1200, Dessert).vegetarian(),
    dish("Affogato", "Vanilla gelato 'drowned' in hot espresso", 1300, Dessert).vegetarian(),
    dish("Espresso", "Traditional Italian coffee", 800, Beverage).vegan(),
    dish("Cappuccino", "Espresso with steamed milk and foam", 1000, Beverage).vegetarian(),
    dish("Aperol Spritz", "Italian aperitif with Aperol, Prosecco, and soda", 1500, Beverage),
    dish("Limoncello", "Traditional lemon liqueur from Sorrento", 1200, Beverage),
    dish("Chianti Classico", "Full-bodied Tuscan red wine", 1800, Beverage),
];

pub const CHINESE: &[DishSeed] = &[
    dish("Spring Rolls", "Crispy vegetable rolls with sweet and sour sauce", 1500, Appetizer).vegetarian(),
    dish("Dim Sum Platter", "Selection of steamed dumplings", 2200, Appetizer),
    dish("Peking Duck Pancakes", "Crispy duck with pancakes, cucumber, and hoisin sauce", 2800, Appetizer),
    dish("Pot Stickers", "Pan-fried pork and cabbage dumplings", 1800, Appetizer),
    dish("Chicken Wings", "Crispy wings with Chinese five-spice", 1600, Appetizer),
    dish("Prawn Crackers", "Light and crispy prawn-flavored crackers", 800, Appetizer),
    dish("Hot and Sour Soup", "Traditional soup with tofu, mushrooms, and white pepper", 1200, Soup).vegetarian(),
    dish("Wonton Soup", "Pork and shrimp wontons in clear broth", 1400, Soup),
    dish("Egg Drop Soup", "Silky soup with beaten eggs and green onions", 1000, Soup).vegetarian(),
    dish("Chinese Chicken Salad", "Mixed greens with crispy noodles and sesame dressing", 1600, Salad),
    dish("Cucumber Salad", "Refreshing cucumbers with rice vinegar and chili oil", 1200, Salad).vegetarian().vegan(),
    dish("Sweet and Sour Pork", "Battered pork with pineapple and bell peppers", 3400, MainCourse),
    dish("Kung Pao Chicken", "Spicy stir-fried chicken with peanuts", 3200, MainCourse),
    dish("Ma Po Tofu", "Silky tofu in spicy Sichuan sauce", 2600, MainCourse).vegetarian(),
    dish("General Tso's Chicken", "Crispy chicken in sweet and tangy sauce", 3000, MainCourse),
    dish("Beef and Broccoli", "Tender beef with fresh broccoli in brown sauce", 3200, MainCourse),
    dish("Orange Chicken", "Battered chicken with fresh orange glaze", 2900, MainCourse),
    dish("Szechuan Fish", "Spicy fish fillets with vegetables in chili sauce", 3600, MainCourse),
    dish("Mongolian Beef", "Sliced beef with onions and scallions", 3500, MainCourse),
    dish("Cashew Chicken", "Diced chicken with cashews and vegetables", 3100, MainCourse),
    dish("Vegetable Lo Mein", "Soft noodles with mixed vegetables", 2400, MainCourse).vegetarian(),
    dish("Honey Walnut Prawns", "Crispy prawns with candied walnuts", 3800, MainCourse),
    dish("Char Siu Pork", "Cantonese BBQ pork with honey glaze", 3300, MainCourse),
    dish("Fried Rice", "Wok-fried rice with vegetables and soy sauce", 1800, SideDish).vegetarian(),
    dish("Chow Mein", "Stir-fried crispy noodles with vegetables", 1600, SideDish).vegetarian(),
    dish("Steamed White Rice", "Perfectly steamed jasmine rice", 600, SideDish).vegetarian().vegan(),
    dish("Chinese Greens", "Stir-fried bok choy with garlic", 1400, SideDish).vegetarian().vegan(),
    dish("Fried Ice Cream", "Vanilla ice cream in crispy coating", 1200, Dessert).vegetarian(),
    dish("Sesame Balls", "Deep-fried glutinous rice balls with red bean paste", 1000, Dessert).vegetarian().vegan(),
    dish("Fortune Cookies", "Traditional cookies with fortune messages", 600, Dessert).vegetarian(),
    dish("Jasmine Tea", "Traditional Chinese green tea", 600, Beverage).vegan(),
    dish("Oolong Tea", "Semi-fermented traditional tea", 700, Beverage).vegan(),
    dish("Chinese Rice Wine", "Traditional Shaoxing cooking wine", 1200, Beverage),
    dish("Lychee Juice", "Sweet tropical fruit juice", 800, Beverage).vegetarian().vegan(),
];

pub const INDIAN: &[DishSeed] = &[
    dish("Samosas", "Crispy pastries filled with spiced potatoes", 1600, Appetizer).vegetarian(),
    dish("Chicken Tikka", "Marinated grilled chicken pieces", 2000, Appetizer),
    dish("Pakoras", "Mixed vegetable fritters with mint chutney", 1400, Appetizer).vegetarian().vegan(),
    dish("Aloo Tikki", "Spiced potato patties with yogurt and chutneys", 1200, Appetizer).vegetarian(),
    dish("Tandoori Wings", "Chicken wings marinated in yogurt and spices", 1800, Appetizer),
    dish("Paneer Tikka", "Grilled cottage cheese with bell peppers", 1900, Appetizer).vegetarian(),
    dish("Mulligatawny Soup", "Spiced lentil soup with coconut milk", 1200, Soup).vegetarian(),
    dish("Tomato Shorba", "Spiced tomato soup with fresh herbs", 1000, Soup).vegetarian().vegan(),
    dish("Kachumber Salad", "Fresh cucumber and tomato salad with lemon", 1100, Salad).vegetarian().vegan(),
    dish("Raita", "Yogurt salad with cucumber and mint", 900, Salad).vegetarian(),
    dish("Butter Chicken", "Creamy tomato-based chicken curry", 3600, MainCourse),
    dish("Dal Makhani", "Rich black lentil curry with cream", 2400, MainCourse).vegetarian(),
    dish("Biryani", "Fragrant basmati rice with spices and meat", 3800, MainCourse),
    dish("Chicken Tikka Masala", "Grilled chicken in creamy tomato sauce", 3400, MainCourse),
    dish("Palak Paneer", "Cottage cheese in creamy spinach curry", 2600, MainCourse).vegetarian(),
    dish("Rogan Josh", "Tender lamb in aromatic Kashmiri curry", 4000, MainCourse),
    dish("Chana Masala", "Chickpea curry with onions and tomatoes", 2200, MainCourse).vegetarian().vegan(),
    dish("Tandoori Chicken", "Whole chicken marinated and roasted in tandoor", 4200, MainCourse),
    dish("Vindaloo", "Spicy Goan curry with vinegar and chilies", 3500, MainCourse),
    dish("Saag Chicken", "Chicken curry with spinach and mustard greens", 3300, MainCourse),
    dish("Aloo Gobi", "Cauliflower and potato curry with turmeric", 2000, MainCourse).vegetarian().vegan(),
    dish("Fish Curry", "South Indian fish curry with coconut", 3700, MainCourse),
    dish("Korma", "Mild curry with cashews and cream", 3200, MainCourse).vegetarian(),
    dish("Naan Bread", "Traditional oven-baked flatbread", 800, SideDish).vegetarian(),
    dish("Garlic Naan", "Naan bread with roasted garlic and cilantro", 1000, SideDish).vegetarian(),
    dish("Roti", "Whole wheat flatbread", 600, SideDish).vegetarian().vegan(),
    dish("Basmati Rice", "Aromatic long-grain rice", 800, SideDish).vegetarian().vegan(),
    dish("Papadum", "Crispy lentil wafers", 500, SideDish).vegetarian().vegan(),
    dish("Gulab Jamun", "Sweet milk dumplings in rose syrup", 1200, Dessert).vegetarian(),
    dish("Rasmalai", "Cottage cheese dumplings in cardamom cream", 1400, Dessert).vegetarian(),
    dish("Kheer", "Rice pudding with cardamom and nuts", 1000, Dessert).vegetarian(),
    dish("Kulfi", "Traditional Indian ice cream with pistachios", 1100, Dessert).vegetarian(),
    dish("Masala Chai", "Spiced tea with milk", 700, Beverage).vegetarian(),
    dish("Lassi", "Yogurt drink - sweet or salty", 800, Beverage).vegetarian(),
    dish("Mango Lassi", "Sweet yogurt drink with fresh mango", 900, Beverage).vegetarian(),
    dish("Fresh Lime Soda", "Sparkling water with fresh lime and salt", 600, Beverage).vegetarian().vegan(),
    dish("Kingfisher Beer", "Indian lager beer", 1200, Beverage),
];

pub const FRENCH: &[DishSeed] = &[
    dish("Escargots de Bourgogne", "Burgundy snails with garlic butter", 2800, Appetizer),
    dish("French Onion Soup", "Classic onion soup with gruyere cheese", 1800, Soup).vegetarian(),
    dish("Coq au Vin", "Chicken braised in red wine with mushrooms", 4500, MainCourse),
    dish("Beef Bourguignon", "Slow-cooked beef in burgundy wine", 5200, MainCourse),
    dish("Ratatouille", "Provençal vegetable stew", 2800, MainCourse).vegetarian(),
    dish("Crème Brûlée", "Vanilla custard with caramelized sugar", 1800, Dessert).vegetarian(),
    dish("French Wine", "Selection of regional wines", 2500, Beverage),
];

pub const MEXICAN: &[DishSeed] = &[
    dish("Guacamole & Chips", "Fresh avocado dip with tortilla chips", 1400, Appetizer).vegetarian().vegan(),
    dish("Quesadillas", "Grilled tortillas with cheese and peppers", 1800, Appetizer).vegetarian(),
    dish("Tacos al Pastor", "Marinated pork tacos with pineapple", 2400, MainCourse),
    dish("Chicken Enchiladas", "Rolled tortillas with chicken and green sauce", 2800, MainCourse),
    dish("Vegetarian Burrito", "Black beans, rice, and vegetables in a flour tortilla", 2200, MainCourse).vegetarian(),
    dish("Mexican Rice", "Seasoned rice with tomatoes and spices", 1200, SideDish).vegetarian().vegan(),
    dish("Horchata", "Sweet rice and cinnamon drink", 800, Beverage).vegetarian(),
];

pub const THAI: &[DishSeed] = &[
    dish("Fresh Spring Rolls", "Rice paper rolls with vegetables and herbs", 1400, Appetizer).vegetarian().vegan(),
    dish("Chicken Satay", "Grilled chicken skewers with peanut sauce", 1800, Appetizer),
    dish("Thai Fish Cakes", "Spicy fish patties with cucumber relish", 1600, Appetizer),
    dish("Coconut Prawns", "Crispy prawns with sweet chili sauce", 2000, Appetizer),
    dish("Vegetable Spring Rolls", "Crispy fried rolls with sweet and sour sauce", 1200, Appetizer).vegetarian().vegan(),
    dish("Tom Yum Soup", "Spicy and sour soup with shrimp", 1600, Soup),
    dish("Tom Kha Gai", "Coconut chicken soup with galangal", 1500, Soup),
    dish("Thai Vegetable Soup", "Clear broth with mixed vegetables and tofu", 1200, Soup).vegetarian().vegan(),
    dish("Som Tam", "Spicy green papaya salad with lime dressing", 1400, Salad).vegetarian().vegan(),
    dish("Larb Gai", "Thai chicken salad with mint and chili", 1600, Salad),
    dish("Thai Beef Salad", "Spicy beef salad with cucumber and herbs", 1800, Salad),
    dish("Pad Thai", "Stir-fried rice noodles with tamarind sauce", 2600, MainCourse),
    dish("Green Curry", "Coconut curry with Thai basil and vegetables", 2800, MainCourse).vegetarian(),
    dish("Massaman Beef", "Rich curry with tender beef and potatoes", 3400, MainCourse),
    dish("Red Curry", "Spicy coconut curry with bamboo shoots", 3000, MainCourse),
    dish("Panang Curry", "Thick curry with peanuts and kaffir lime", 3200, MainCourse),
    dish("Pad Kra Pao", "Stir-fried holy basil with ground meat", 2400, MainCourse),
    dish("Thai Fried Rice", "Jasmine rice with vegetables and egg", 2200, MainCourse).vegetarian(),
    dish("Drunken Noodles", "Spicy stir-fried noodles with basil", 2500, MainCourse),
    dish("Cashew Chicken", "Stir-fried chicken with cashews and chili", 2800, MainCourse),
    dish("Pineapple Fried Rice", "Fried rice served in fresh pineapple", 2600, MainCourse).vegetarian(),
    dish("Thai Fish Curry", "Red curry with fish and Thai eggplant", 3300, MainCourse),
    dish("Mango Sticky Rice", "Sweet dessert with coconut rice and mango", 1500, Dessert).vegetarian().vegan(),
    dish("Jasmine Rice", "Fragrant Thai rice", 800, SideDish).vegetarian().vegan(),
    dish("Coconut Rice", "Rice cooked in coconut milk", 1000, SideDish).vegetarian().vegan(),
    dish("Thai Vegetables", "Stir-fried mixed vegetables with garlic", 1200, SideDish).vegetarian().vegan(),
    dish("Thai Coconut Ice Cream", "Creamy ice cream with coconut and peanuts", 1200, Dessert).vegetarian(),
    dish("Fried Banana", "Crispy banana fritters with honey", 1000, Dessert).vegetarian().vegan(),
    dish("Thai Iced Tea", "Sweet tea with condensed milk", 700, Beverage).vegetarian(),
    dish("Thai Iced Coffee", "Strong coffee with sweetened condensed milk", 800, Beverage).vegetarian(),
    dish("Coconut Water", "Fresh young coconut water", 600, Beverage).vegetarian().vegan(),
    dish("Thai Basil Lemonade", "Fresh lemonade with Thai basil", 700, Beverage).vegetarian().vegan(),
];

pub const JAPANESE: &[DishSeed] = &[
    dish("Edamame", "Steamed young soybeans with sea salt", 1200, Appetizer).vegetarian().vegan(),
    dish("Gyoza", "Pan-fried pork and vegetable dumplings", 1800, Appetizer),
    dish("Sushi Platter", "Selection of fresh nigiri and maki rolls", 4200, MainCourse),
    dish("Chicken Teriyaki", "Grilled chicken with sweet teriyaki glaze", 3200, MainCourse),
    dish("Vegetable Tempura", "Lightly battered and fried seasonal vegetables", 2400, MainCourse).vegetarian(),
    dish("Miso Soup", "Traditional soybean paste soup", 800, Soup).vegetarian().vegan(),
    dish("Green Tea", "Premium Japanese green tea", 600, Beverage).vegan(),
];

pub const ROMANIAN: &[DishSeed] = &[
    dish("Mici", "Grilled meat rolls with mustard", 2000, Appetizer),
    dish("Salată de Icre", "Fish roe salad with onions", 1600, Appetizer),
    dish("Ciorbă de Burtă", "Traditional tripe soup with sour cream", 2200, Soup),
    dish("Sarmale", "Cabbage rolls stuffed with meat and rice", 2800, MainCourse),
    dish("Mămăligă cu Brânză", "Polenta with cheese and sour cream", 1800, MainCourse).vegetarian(),
    dish("Murături", "Traditional pickled vegetables", 1000, SideDish).vegetarian().vegan(),
    dish("Țuică", "Traditional Romanian plum brandy", 1500, Beverage),
];

/// Served by every cuisine without a curated menu.
pub const GENERIC: &[DishSeed] = &[
    dish("Chicken Wings", "Buffalo or BBQ style wings with celery", 1800, Appetizer),
    dish("Loaded Nachos", "Tortilla chips with cheese, jalapeños, and sour cream", 1600, Appetizer).vegetarian(),
    dish("Mozzarella Sticks", "Crispy breaded mozzarella with marinara sauce", 1400, Appetizer).vegetarian(),
    dish("Spinach Artichoke Dip", "Creamy dip served with tortilla chips", 1500, Appetizer).vegetarian(),
    dish("Tomato Basil Soup", "Creamy tomato soup with fresh basil", 1200, Soup).vegetarian(),
    dish("Chicken Noodle Soup", "Classic comfort soup with vegetables", 1400, Soup),
    dish("Caesar Salad", "Romaine lettuce with parmesan and croutons", 1600, Salad).vegetarian(),
    dish("Garden Salad", "Mixed greens with cucumber, tomato, and choice of dressing", 1400, Salad).vegetarian().vegan(),
    dish("Greek Salad", "Tomatoes, olives, feta cheese, and cucumber", 1700, Salad).vegetarian(),
    dish("Cobb Salad", "Mixed greens with bacon, egg, blue cheese, and chicken", 1900, Salad),
    dish("Grilled Chicken Breast", "Herb-seasoned chicken with vegetables", 3200, MainCourse).gluten_free(),
    dish("Fish & Chips", "Beer-battered fish with french fries", 2800, MainCourse),
    dish("Vegetable Stir Fry", "Mixed vegetables with soy sauce", 2200, MainCourse).vegetarian().vegan(),
    dish("Classic Burger", "Beef patty with lettuce, tomato, and fries", 2400, MainCourse),
    dish("BBQ Ribs", "Slow-cooked pork ribs with barbecue sauce", 3600, MainCourse),
    dish("Grilled Salmon", "Atlantic salmon with lemon herb butter", 3400, MainCourse).gluten_free(),
    dish("Chicken Parmesan", "Breaded chicken with marinara and mozzarella", 3000, MainCourse),
    dish("Steak Frites", "Grilled steak with seasoned french fries", 3800, MainCourse),
    dish("Vegetarian Pasta", "Penne with roasted vegetables and pesto", 2600, MainCourse).vegetarian(),
    dish("Fish Tacos", "Grilled fish with cabbage slaw and chipotle mayo", 2500, MainCourse),
    dish("Mushroom Risotto", "Creamy arborio rice with wild mushrooms", 2800, MainCourse).vegetarian(),
    dish("French Fries", "Crispy seasoned potato fries", 800, SideDish).vegetarian().vegan(),
    dish("Onion Rings", "Beer-battered onion rings", 1000, SideDish).vegetarian(),
    dish("Coleslaw", "Creamy cabbage and carrot salad", 600, SideDish).vegetarian(),
    dish("Garlic Bread", "Toasted bread with garlic butter", 700, SideDish).vegetarian(),
    dish("Chocolate Cake", "Rich chocolate layer cake", 1400, Dessert).vegetarian(),
    dish("Cheesecake", "New York style cheesecake with berry sauce", 1600, Dessert).vegetarian(),
    dish("Apple Pie", "Traditional apple pie with vanilla ice cream", 1300, Dessert).vegetarian(),
    dish("Ice Cream Sundae", "Vanilla ice cream with chocolate sauce and nuts", 1100, Dessert).vegetarian(),
    dish("House Wine", "Red or white wine selection", 1500, Beverage),
    dish("Craft Beer", "Local brewery selection", 1200, Beverage),
    dish("Iced Tea", "Fresh brewed sweet or unsweetened tea", 500, Beverage).vegetarian().vegan(),
    dish("Lemonade", "Fresh squeezed lemonade", 600, Beverage).vegetarian().vegan(),
];

pub const COMMON_BEVERAGES: &[DishSeed] = &[
    dish("Coca Cola", "Classic soft drink", 600, Beverage).vegetarian().vegan(),
    dish("Fresh Orange Juice", "Freshly squeezed orange juice", 800, Beverage).vegetarian().vegan(),
    dish("Still Water", "Premium bottled water", 400, Beverage).vegetarian().vegan(),
    dish("Coffee", "Freshly brewed coffee", 600, Beverage).vegetarian().vegan(),
];

/// Main courses guaranteed when filtering leaves none.
pub const FALLBACK_MAIN_COURSES: &[DishSeed] = &[
    dish(
        "Grilled Chicken Breast",
        "Tender grilled chicken with herbs • Gluten-free • Diabetic-friendly",
        4599,
        MainCourse,
    )
    .gluten_free()
    .diabetic_friendly()
    .lactose_free()
    .prep_minutes(25),
    dish(
        "Vegetable Stir Fry",
        "Fresh seasonal vegetables with rice • Vegetarian • Vegan",
        3599,
        MainCourse,
    )
    .vegetarian()
    .vegan()
    .gluten_free()
    .diabetic_friendly()
    .lactose_free()
    .prep_minutes(15),
];
