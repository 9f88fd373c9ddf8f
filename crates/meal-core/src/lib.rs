//! # meal-core: Pure Ordering Logic for Meal Builder
//!
//! This crate is the **heart** of Meal Builder. It contains the menu, the
//! price composition rules, and the selection flow, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Meal Builder Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Kiosk (apps/kiosk)                            │   │
//! │  │    stdin tokens ──► prepare_order ──► receipt on stdout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TokenSource                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ meal-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │ decorator │  │   order   │  │ selection │  │   │
//! │  │   │  Burgers  │  │ Sweetness │  │   Order   │  │  Prompts  │  │   │
//! │  │   │  Drinks   │  │   Cream   │  │  Receipt  │  │   Flow    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`packaging`] - Packaging tags and the category rule
//! - [`item`] - The `Item` capability and the seven menu variants
//! - [`decorator`] - Sweetness and Cream wrappers for hot drinks
//! - [`order`] - Order, order lines and receipts
//! - [`menu`] - Numeric menu choices
//! - [`selection`] - The prompt-driven selection flow
//! - [`validation`] - Token parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use meal_core::decorator::{Cream, Sweetness};
//! use meal_core::item::{Tea, VegBurger};
//! use meal_core::{Money, Order};
//!
//! let mut order = Order::new();
//! order.add_item(VegBurger::new());
//! order.add_item(Cream::new(Sweetness::new(Tea::new(), "Sugar", 1)));
//!
//! // 25.00 + 20.00 + 2.00 + 5.00
//! assert_eq!(order.cost(), Money::from_cents(5200));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod decorator;
pub mod error;
pub mod item;
pub mod menu;
pub mod money;
pub mod order;
pub mod packaging;
pub mod selection;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{HotDrink, Item};
pub use money::Money;
pub use order::{Order, OrderLine, Receipt};
pub use packaging::{Category, Packaging};
pub use selection::{prepare_order, Prompt, ScriptedTokens, TokenSource};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Price added per spoon of sweetener.
pub const SWEETENER_PRICE_PER_SPOON: Money = Money::from_cents(200);

/// Flat price of a cream topping.
pub const CREAM_PRICE: Money = Money::from_cents(500);
