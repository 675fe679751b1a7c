//! Restaurant fixtures for creating in-memory test data.

use entity::restaurant;

/// Default test restaurant name.
pub const DEFAULT_NAME: &str = "Dough Bros";

/// Default test restaurant address.
pub const DEFAULT_ADDRESS: &str = "1 Main St";

/// Creates a restaurant entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Dough Bros"`
/// - address: `Some("1 Main St")`
///
/// # Returns
/// - `restaurant::Model` - In-memory restaurant entity
pub fn entity() -> restaurant::Model {
    entity_builder().build()
}

/// Creates a builder for a restaurant entity model with custom values.
pub fn entity_builder() -> RestaurantEntityBuilder {
    RestaurantEntityBuilder::default()
}

/// Builder for in-memory restaurant entity models.
pub struct RestaurantEntityBuilder {
    id: i32,
    name: String,
    address: Option<String>,
}

impl Default for RestaurantEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            address: Some(DEFAULT_ADDRESS.to_string()),
        }
    }
}

impl RestaurantEntityBuilder {
    /// Sets the restaurant ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the restaurant address; `None` leaves it unset.
    pub fn address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    /// Builds the entity model.
    ///
    /// # Returns
    /// - `restaurant::Model` - In-memory entity with configured values
    pub fn build(self) -> restaurant::Model {
        restaurant::Model {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}
