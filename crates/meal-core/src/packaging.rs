//! # Packaging
//!
//! How an item leaves the counter. Packaging follows the product line only:
//!
//! ```text
//!   Category::Burger    ──► Packaging::Wrapper
//!   Category::ColdDrink ──► Packaging::Bottle
//!   Category::HotDrink  ──► Packaging::Cup
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product line an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Burger,
    ColdDrink,
    HotDrink,
}

/// The container or wrap an item is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Packaging {
    Wrapper,
    Bottle,
    Cup,
}

impl Packaging {
    /// Returns the fixed packaging for a product line.
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Burger => Packaging::Wrapper,
            Category::ColdDrink => Packaging::Bottle,
            Category::HotDrink => Packaging::Cup,
        }
    }

    /// Label printed on receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            Packaging::Wrapper => "Wrapper",
            Packaging::Bottle => "Bottle",
            Packaging::Cup => "Cup",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rule() {
        assert_eq!(Packaging::for_category(Category::Burger), Packaging::Wrapper);
        assert_eq!(Packaging::for_category(Category::ColdDrink), Packaging::Bottle);
        assert_eq!(Packaging::for_category(Category::HotDrink), Packaging::Cup);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Packaging::Wrapper.to_string(), "Wrapper");
        assert_eq!(Packaging::Bottle.label(), "Bottle");
        assert_eq!(Packaging::Cup.label(), "Cup");
    }
}
