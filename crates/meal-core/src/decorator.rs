//! # Hot Drink Decorators
//!
//! Condiments wrap a hot drink and add to its name and price.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cream                                                                  │
//! │  ├── name  = inner.name  + " + Cream"                                   │
//! │  ├── price = inner.price + 5.00                                         │
//! │  └── inner: Sweetness                                                   │
//! │             ├── name  = inner.name  + " + Sweetness (2 spoons of Sugar)"│
//! │             ├── price = inner.price + 2 × 2.00                          │
//! │             └── inner: Tea  ("Plain Tea", 20.00, Cup)                   │
//! │                                                                         │
//! │  packaging() is forwarded unchanged at every layer                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each layer owns exactly one inner drink. Name and price are recomputed
//! through the whole chain on every call.

use crate::item::{HotDrink, Item};
use crate::money::Money;
use crate::packaging::Packaging;
use crate::{CREAM_PRICE, SWEETENER_PRICE_PER_SPOON};

// =============================================================================
// Sweetness
// =============================================================================

/// Adds spoons of a sweetener to a hot drink.
///
/// The sweetener label is free text. Negative spoon counts are accepted and
/// lower the price by the same per-spoon rate.
#[derive(Debug)]
pub struct Sweetness {
    inner: Box<dyn HotDrink>,
    sweetener: String,
    spoons: i32,
}

impl Sweetness {
    /// Wraps a hot drink value.
    ///
    /// ## Example
    /// ```rust
    /// use meal_core::decorator::Sweetness;
    /// use meal_core::item::{Item, Tea};
    ///
    /// let tea = Sweetness::new(Tea::new(), "Stevia", 3);
    /// assert_eq!(tea.name(), "Plain Tea + Sweetness (3 spoons of Stevia)");
    /// assert_eq!(tea.price().cents(), 2600);
    /// ```
    pub fn new<D: HotDrink + 'static>(inner: D, sweetener: impl Into<String>, spoons: i32) -> Self {
        Self::wrap(Box::new(inner), sweetener, spoons)
    }

    /// Wraps an already boxed drink (e.g. a chain built at runtime).
    pub fn wrap(inner: Box<dyn HotDrink>, sweetener: impl Into<String>, spoons: i32) -> Self {
        Sweetness {
            inner,
            sweetener: sweetener.into(),
            spoons,
        }
    }

    pub fn sweetener(&self) -> &str {
        &self.sweetener
    }

    pub fn spoons(&self) -> i32 {
        self.spoons
    }

    fn delta(&self) -> Money {
        SWEETENER_PRICE_PER_SPOON.times(i64::from(self.spoons))
    }
}

impl Item for Sweetness {
    fn name(&self) -> String {
        format!(
            "{} + Sweetness ({} spoons of {})",
            self.inner.name(),
            self.spoons,
            self.sweetener
        )
    }

    fn packaging(&self) -> Packaging {
        self.inner.packaging()
    }

    fn price(&self) -> Money {
        self.inner.price() + self.delta()
    }
}

impl HotDrink for Sweetness {
    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

// =============================================================================
// Cream
// =============================================================================

/// Tops a hot drink with cream for a flat charge.
#[derive(Debug)]
pub struct Cream {
    inner: Box<dyn HotDrink>,
}

impl Cream {
    pub fn new<D: HotDrink + 'static>(inner: D) -> Self {
        Self::wrap(Box::new(inner))
    }

    pub fn wrap(inner: Box<dyn HotDrink>) -> Self {
        Cream { inner }
    }
}

impl Item for Cream {
    fn name(&self) -> String {
        format!("{} + Cream", self.inner.name())
    }

    fn packaging(&self) -> Packaging {
        self.inner.packaging()
    }

    fn price(&self) -> Money {
        self.inner.price() + CREAM_PRICE
    }
}

impl HotDrink for Cream {
    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Tea;

    #[test]
    fn test_sweetness_adds_per_spoon() {
        let tea = Sweetness::new(Tea::new(), "Sugar", 2);
        assert_eq!(tea.price(), Money::from_cents(2400));
        assert_eq!(tea.name(), "Plain Tea + Sweetness (2 spoons of Sugar)");
        assert_eq!(tea.sweetener(), "Sugar");
        assert_eq!(tea.spoons(), 2);
    }

    #[test]
    fn test_zero_spoons_costs_nothing_extra() {
        let tea = Sweetness::new(Tea::new(), "Honey", 0);
        assert_eq!(tea.price(), Tea::PRICE);
    }

    #[test]
    fn test_negative_spoons_lower_price() {
        let tea = Sweetness::new(Tea::new(), "Sugar", -1);
        assert_eq!(tea.price(), Money::from_cents(1800));
        assert_eq!(tea.name(), "Plain Tea + Sweetness (-1 spoons of Sugar)");
    }

    #[test]
    fn test_cream_adds_flat_charge() {
        let tea = Cream::new(Tea::new());
        assert_eq!(tea.price(), Money::from_cents(2500));
        assert_eq!(tea.name(), "Plain Tea + Cream");
    }

    #[test]
    fn test_packaging_survives_decoration() {
        let a = Sweetness::new(Cream::new(Tea::new()), "Sugar", 2);
        let b = Cream::new(Sweetness::new(Tea::new(), "Sugar", 2));
        assert_eq!(a.packaging(), Packaging::Cup);
        assert_eq!(b.packaging(), Packaging::Cup);
    }

    #[test]
    fn test_price_is_independent_of_wrap_order() {
        let cream_outer = Cream::new(Sweetness::new(Tea::new(), "Sugar", 2));
        let sweet_outer = Sweetness::new(Cream::new(Tea::new()), "Sugar", 2);
        assert_eq!(cream_outer.price(), Money::from_cents(2900));
        assert_eq!(sweet_outer.price(), Money::from_cents(2900));
    }

    #[test]
    fn test_name_follows_wrap_order() {
        let cream_outer = Cream::new(Sweetness::new(Tea::new(), "Sugar", 2));
        let sweet_outer = Sweetness::new(Cream::new(Tea::new()), "Sugar", 2);

        assert!(cream_outer.name().ends_with("+ Cream"));
        assert!(sweet_outer.name().ends_with("+ Sweetness (2 spoons of Sugar)"));
        assert_eq!(
            sweet_outer.name(),
            "Plain Tea + Cream + Sweetness (2 spoons of Sugar)"
        );
    }

    #[test]
    fn test_runtime_chain_via_wrap() {
        let mut drink: Box<dyn HotDrink> = Box::new(Tea::new());
        drink = Box::new(Sweetness::wrap(drink, "Sugar", 1));
        drink = Box::new(Cream::wrap(drink));
        drink = Box::new(Cream::wrap(drink));

        assert_eq!(drink.price(), Money::from_cents(3200));
        assert_eq!(
            drink.name(),
            "Plain Tea + Sweetness (1 spoons of Sugar) + Cream + Cream"
        );
        assert_eq!(drink.into_item().packaging(), Packaging::Cup);
    }
}
