//! Pizza fixtures for creating in-memory test data.

use entity::pizza;

/// Default test pizza name.
pub const DEFAULT_NAME: &str = "Margherita";

/// Default test pizza ingredients.
pub const DEFAULT_INGREDIENTS: &str = "Tomato, mozzarella";

/// Creates a pizza entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Margherita"`
/// - ingredients: `Some("Tomato, mozzarella")`
///
/// # Returns
/// - `pizza::Model` - In-memory pizza entity
pub fn entity() -> pizza::Model {
    entity_builder().build()
}

/// Creates a builder for a pizza entity model with custom values.
pub fn entity_builder() -> PizzaEntityBuilder {
    PizzaEntityBuilder::default()
}

/// Builder for in-memory pizza entity models.
pub struct PizzaEntityBuilder {
    id: i32,
    name: String,
    ingredients: Option<String>,
}

impl Default for PizzaEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            ingredients: Some(DEFAULT_INGREDIENTS.to_string()),
        }
    }
}

impl PizzaEntityBuilder {
    /// Sets the pizza ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the pizza name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ingredients description; `None` leaves it unset.
    pub fn ingredients(mut self, ingredients: Option<&str>) -> Self {
        self.ingredients = ingredients.map(str::to_string);
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> pizza::Model {
        pizza::Model {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}
