//! # Menu Items
//!
//! The `Item` capability and the concrete menu variants.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Variant          Name               Price    Category    Packaging     │
//! │  ───────────────  ─────────────────  ───────  ──────────  ──────────    │
//! │  VegBurger        "Veg Burger"        25.00   Burger      Wrapper       │
//! │  ChickenBurger    "Chicken Burger"    50.50   Burger      Wrapper       │
//! │  Coke             "Coke"              30.00   ColdDrink   Bottle        │
//! │  Pepsi            "Pepsi"             35.00   ColdDrink   Bottle        │
//! │  DietCoke         "Diet Coke"         25.00   ColdDrink   Bottle        │
//! │  DietPepsi        "Diet Pepsi"        28.00   ColdDrink   Bottle        │
//! │  Tea              "Plain Tea"         20.00   HotDrink    Cup           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each variant is an independent value type. Packaging is fixed by the
//! category rule in [`Packaging::for_category`] when the value is built.

use std::fmt;

use crate::money::Money;
use crate::packaging::{Category, Packaging};

// =============================================================================
// Capabilities
// =============================================================================

/// Something that can be put on an order.
pub trait Item: fmt::Debug {
    /// Display name, including any decoration suffixes.
    fn name(&self) -> String;

    /// Packaging the item is served in.
    fn packaging(&self) -> Packaging;

    /// Price of the item, including any decoration deltas.
    fn price(&self) -> Money;
}

/// A hot drink. Only hot drinks accept condiment decorators.
pub trait HotDrink: Item {
    /// Converts a boxed hot drink into a boxed order item.
    fn into_item(self: Box<Self>) -> Box<dyn Item>;
}

// =============================================================================
// Variants
// =============================================================================

macro_rules! menu_item {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $cents:literal, $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $ty {
            packaging: Packaging,
        }

        impl $ty {
            /// Name printed on receipts.
            pub const NAME: &'static str = $name;

            /// Menu price.
            pub const PRICE: Money = Money::from_cents($cents);

            pub const fn new() -> Self {
                $ty {
                    packaging: Packaging::for_category($category),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Item for $ty {
            fn name(&self) -> String {
                Self::NAME.to_string()
            }

            fn packaging(&self) -> Packaging {
                self.packaging
            }

            fn price(&self) -> Money {
                Self::PRICE
            }
        }
    };
}

menu_item!(
    /// Vegetarian burger.
    VegBurger, "Veg Burger", 2500, Category::Burger
);
menu_item!(
    /// Chicken burger.
    ChickenBurger, "Chicken Burger", 5050, Category::Burger
);
menu_item!(Coke, "Coke", 3000, Category::ColdDrink);
menu_item!(Pepsi, "Pepsi", 3500, Category::ColdDrink);
menu_item!(DietCoke, "Diet Coke", 2500, Category::ColdDrink);
menu_item!(DietPepsi, "Diet Pepsi", 2800, Category::ColdDrink);
menu_item!(
    /// The base hot drink. Wrap it in decorators to add condiments.
    Tea, "Plain Tea", 2000, Category::HotDrink
);

impl HotDrink for Tea {
    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
