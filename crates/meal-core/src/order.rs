//! # Order
//!
//! The ordered collection of items picked during one session.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Operations                                   │
//! │                                                                         │
//! │  Selection Step             Order Method          State Change          │
//! │  ──────────────             ────────────          ────────────          │
//! │                                                                         │
//! │  Burger chosen ───────────► add_item() ─────────► items.push(burger)   │
//! │                                                                         │
//! │  Drink chosen ────────────► add_item() ─────────► items.push(drink)    │
//! │                                                                         │
//! │  Receipt ─────────────────► lines() / cost() ──► (read only)           │
//! │                                                                         │
//! │  NOTE: cost() walks every item on each call. Nothing is cached.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::Item;
use crate::money::Money;
use crate::packaging::Packaging;

// =============================================================================
// Order Line
// =============================================================================

/// One printed line of an order: a snapshot of an item's name, packaging and
/// price at the time it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub packaging: Packaging,
    pub price: Money,
}

impl OrderLine {
    /// Captures an item's current name, packaging and price.
    pub fn from_item<I: Item + ?Sized>(item: &I) -> Self {
        OrderLine {
            name: item.name(),
            packaging: item.packaging(),
            price: item.price(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order.
///
/// ## Invariants
/// - Items keep insertion order
/// - The order owns its items exclusively
/// - `cost()` is always the exact sum of item prices
#[derive(Debug)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<Box<dyn Item>>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends an item to the order.
    pub fn add_item<I: Item + 'static>(&mut self, item: I) {
        self.add_boxed(Box::new(item));
    }

    /// Appends an already boxed item to the order.
    pub fn add_boxed(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    /// Iterates the items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &(dyn Item + 'static)> {
        self.items.iter().map(|item| &**item)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's price, recomputed on each call.
    pub fn cost(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// One line per item, in insertion order.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.items().map(OrderLine::from_item).collect()
    }

    /// Builds a receipt snapshot of the order.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            order_id: self.id,
            created_at: self.created_at,
            lines: self.lines(),
            total: self.cost(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Itemized receipt for a finished order.
///
/// ## Serialization
/// ```json
/// {
///   "orderId": "6f1c...",
///   "createdAt": "2024-05-01T12:00:00Z",
///   "lines": [
///     { "name": "Veg Burger", "packaging": "wrapper", "price": 2500 }
///   ],
///   "total": 2500
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl Receipt {
    /// Number of lines on the receipt.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::{Cream, Sweetness};
    use crate::item::{ChickenBurger, Coke, DietPepsi, Tea, VegBurger};

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert!(order.cost().is_zero());
        assert!(order.lines().is_empty());
    }

    #[test]
    fn test_cost_is_sum_of_prices() {
        let mut order = Order::new();
        order.add_item(ChickenBurger::new());
        order.add_item(DietPepsi::new());
        order.add_item(Cream::new(Tea::new()));

        let expected: Money = order.items().map(|item| item.price()).sum();
        assert_eq!(order.cost(), expected);
        assert_eq!(order.cost(), Money::from_cents(5050 + 2800 + 2500));
    }

    #[test]
    fn test_veg_burger_and_coke() {
        let mut order = Order::new();
        order.add_item(VegBurger::new());
        order.add_item(Coke::new());

        assert_eq!(order.cost(), Money::from_cents(5500));

        let lines = order.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Veg Burger");
        assert_eq!(lines[0].packaging, Packaging::Wrapper);
        assert_eq!(lines[1].name, "Coke");
        assert_eq!(lines[1].packaging, Packaging::Bottle);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut order = Order::new();
        order.add_item(Coke::new());
        order.add_boxed(Box::new(VegBurger::new()));

        let names: Vec<String> = order.lines().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Coke", "Veg Burger"]);
    }

    #[test]
    fn test_receipt_snapshot() {
        let mut order = Order::new();
        order.add_item(Cream::new(Sweetness::new(Tea::new(), "Sugar", 1)));

        let receipt = order.receipt();
        assert_eq!(receipt.order_id, order.id());
        assert_eq!(receipt.created_at, order.created_at());
        assert_eq!(receipt.item_count(), 1);
        assert_eq!(receipt.total, Money::from_cents(2700));
        assert_eq!(
            receipt.lines[0].name,
            "Plain Tea + Sweetness (1 spoons of Sugar) + Cream"
        );
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let mut order = Order::new();
        order.add_item(VegBurger::new());

        let json = serde_json::to_value(order.receipt()).unwrap();
        assert_eq!(json["total"], 2500);
        assert_eq!(json["lines"][0]["packaging"], "wrapper");
        assert_eq!(json["lines"][0]["name"], "Veg Burger");
        assert!(json.get("orderId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
