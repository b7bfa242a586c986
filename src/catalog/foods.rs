use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Display category of a catalog food.
///
/// These five categories drive the summary grouping and the legacy nutrition
/// point values. The survival scorer uses its own two-way healthy/unhealthy
/// split (see [`is_healthy`] / [`is_unhealthy`]); the two tables are kept
/// independent on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    HealthySnack,
    FastFood,
    JunkFood,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 5] = [
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::HealthySnack,
        FoodCategory::FastFood,
        FoodCategory::JunkFood,
    ];

    /// Legacy nutrition points per food in this category.
    pub fn points(self) -> i32 {
        match self {
            FoodCategory::Fruit => 2,
            FoodCategory::Vegetable => 2,
            FoodCategory::HealthySnack => 1,
            FoodCategory::FastFood => -1,
            FoodCategory::JunkFood => -2,
        }
    }

    /// Short identifier used in exports.
    pub fn id(self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::HealthySnack => "healthy-snack",
            FoodCategory::FastFood => "fast-food",
            FoodCategory::JunkFood => "junk-food",
        }
    }

    /// Summary page heading for this category.
    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Fruit => "Fruits of Life",
            FoodCategory::Vegetable => "Vegetables of Virtue",
            FoodCategory::HealthySnack => "Healthy Sustenance",
            FoodCategory::FastFood => "Fast Food Sins",
            FoodCategory::JunkFood => "Junk of Doom",
        }
    }
}

pub const FRUITS: [&str; 9] = [
    "apple",
    "banana",
    "orange",
    "mango",
    "grapes",
    "pineapple",
    "strawberry",
    "blueberry",
    "watermelon",
];

pub const VEGETABLES: [&str; 10] = [
    "spinach",
    "carrot",
    "broccoli",
    "tomato",
    "lettuce",
    "kale",
    "cauliflower",
    "cucumber",
    "bellpepper",
    "sweetpotato",
];

pub const HEALTHY_SNACKS: [&str; 8] = [
    "nuts", "yogurt", "oatmeal", "salmon", "quinoa", "avocado", "chicken", "tofu",
];

pub const FAST_FOODS: [&str; 7] = [
    "pizza",
    "burger",
    "fries",
    "hotdog",
    "friedchicken",
    "taco",
    "nuggets",
];

pub const JUNK_FOODS: [&str; 8] = [
    "chips",
    "soda",
    "candy",
    "cookies",
    "icecream",
    "doughnut",
    "chocolate",
    "energydrink",
];

static CATEGORY_BY_FOOD: LazyLock<HashMap<&'static str, FoodCategory>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for food in FRUITS {
        m.insert(food, FoodCategory::Fruit);
    }
    for food in VEGETABLES {
        m.insert(food, FoodCategory::Vegetable);
    }
    for food in HEALTHY_SNACKS {
        m.insert(food, FoodCategory::HealthySnack);
    }
    for food in FAST_FOODS {
        m.insert(food, FoodCategory::FastFood);
    }
    for food in JUNK_FOODS {
        m.insert(food, FoodCategory::JunkFood);
    }
    m
});

/// Scoring classification: foods worth +100 survival points each.
///
/// Spelled out as its own literal list rather than derived from the display
/// categories; the scorer's two-way split must stay independently editable.
static HEALTHY_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "apple",
        "banana",
        "orange",
        "mango",
        "grapes",
        "pineapple",
        "strawberry",
        "blueberry",
        "watermelon",
        "spinach",
        "carrot",
        "broccoli",
        "tomato",
        "lettuce",
        "kale",
        "cauliflower",
        "cucumber",
        "bellpepper",
        "sweetpotato",
        "nuts",
        "yogurt",
        "oatmeal",
        "salmon",
        "quinoa",
        "avocado",
        "chicken",
        "tofu",
    ])
});

/// Scoring classification: foods costing 30 survival points each.
static UNHEALTHY_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pizza",
        "burger",
        "fries",
        "hotdog",
        "friedchicken",
        "taco",
        "nuggets",
        "chips",
        "soda",
        "candy",
        "cookies",
        "icecream",
        "doughnut",
        "chocolate",
        "energydrink",
    ])
});

/// Display category for a food identifier, if it is in the catalog.
pub fn category_of(food: &str) -> Option<FoodCategory> {
    CATEGORY_BY_FOOD.get(food).copied()
}

/// Whether the scorer treats this food as healthy (+100).
pub fn is_healthy(food: &str) -> bool {
    HEALTHY_SET.contains(food)
}

/// Whether the scorer treats this food as unhealthy (-30).
pub fn is_unhealthy(food: &str) -> bool {
    UNHEALTHY_SET.contains(food)
}

/// Catalog foods in a category, in catalog order.
pub fn foods_in(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::Fruit => &FRUITS,
        FoodCategory::Vegetable => &VEGETABLES,
        FoodCategory::HealthySnack => &HEALTHY_SNACKS,
        FoodCategory::FastFood => &FAST_FOODS,
        FoodCategory::JunkFood => &JUNK_FOODS,
    }
}

/// The whole catalog, in category order.
pub fn all_foods() -> Vec<&'static str> {
    FoodCategory::ALL
        .into_iter()
        .flat_map(|c| foods_in(c).iter().copied())
        .collect()
}

/// Chip-style display name: first letter uppercased.
pub fn display_name(food: &str) -> String {
    let mut chars = food.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
