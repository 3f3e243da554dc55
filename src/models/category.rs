#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Display color as `#rrggbb`.
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Find a category by its exact name, the way transactions are joined.
    pub fn find_exact<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.name == name)
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Food", "utensils", "#ff6b45"),
        Category::new("2", "Transport", "car", "#24a37f"),
        Category::new("3", "Shopping", "shopping-bag", "#9b87f5"),
        Category::new("4", "Entertainment", "film", "#1EAEDB"),
        Category::new("5", "Housing", "home", "#ea384c"),
        Category::new("6", "Utilities", "bolt", "#fec6a1"),
        Category::new("7", "Healthcare", "heart", "#ea384c"),
        Category::new("8", "Personal", "user", "#7E69AB"),
        Category::new("9", "Education", "book", "#24a37f"),
        Category::new("10", "Other", "ellipsis-h", "#8E9196"),
    ]
}
