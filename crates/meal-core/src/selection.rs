//! # Selection Flow
//!
//! Walks the customer through the menu and assembles an [`Order`].
//!
//! ## Prompt Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Selection Flow                                   │
//! │                                                                         │
//! │  Burger (1/2/3) ──► 1,2: add burger     other: nothing                  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Drink (1-6) ─────► 1-4: add cold drink  6/other: nothing               │
//! │      │                                                                  │
//! │      │ 5 (Tea)                                                          │
//! │      ▼                                                                  │
//! │  AddSweetness? ──yes──► SweetenerType ──► Spoons ──► wrap Sweetness     │
//! │      │                                                  │               │
//! │      ◄──────────────────────────────────────────────────┘               │
//! │      ▼                                                                  │
//! │  AddCream? ──yes──► wrap Cream                                          │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  add tea ──► return Order                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Answers come from a [`TokenSource`]. The kiosk reads them from the
//! terminal; tests and scripted sessions use [`ScriptedTokens`].

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::decorator::{Cream, Sweetness};
use crate::error::{CoreError, CoreResult};
use crate::item::{HotDrink, Tea};
use crate::menu::{BurgerChoice, DrinkChoice};
use crate::order::Order;
use crate::validation::{is_yes, parse_whole};

// =============================================================================
// Prompts
// =============================================================================

/// A question asked during the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    Burger,
    Drink,
    AddSweetness,
    SweetenerType,
    Spoons,
    AddCream,
}

impl Prompt {
    /// Text shown to the customer.
    pub const fn text(&self) -> &'static str {
        match self {
            Prompt::Burger => "Choose Burger: 1. Veg  2. Chicken  3. None",
            Prompt::Drink => {
                "Choose Drink: 1. Coke 2. Pepsi 3. Diet Coke 4. Diet Pepsi 5. Tea 6. None"
            }
            Prompt::AddSweetness => "Add Sweetness? (yes/no): ",
            Prompt::SweetenerType => "Sweetener type (Sugar/Stevia/etc): ",
            Prompt::Spoons => "Number of spoons: ",
            Prompt::AddCream => "Add Cream? (yes/no): ",
        }
    }

    /// Field name used in validation errors.
    pub const fn field(&self) -> &'static str {
        match self {
            Prompt::Burger => "burger",
            Prompt::Drink => "drink",
            Prompt::AddSweetness => "sweetness",
            Prompt::SweetenerType => "sweetener",
            Prompt::Spoons => "spoons",
            Prompt::AddCream => "cream",
        }
    }

    /// Menu prompts sit on their own line; the tea questions expect the
    /// answer on the same line.
    pub const fn is_inline(&self) -> bool {
        !matches!(self, Prompt::Burger | Prompt::Drink)
    }
}

// =============================================================================
// Token Sources
// =============================================================================

/// Supplies the next answer token for a prompt.
pub trait TokenSource {
    fn next_token(&mut self, prompt: Prompt) -> CoreResult<String>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self, prompt: Prompt) -> CoreResult<String> {
        (**self).next_token(prompt)
    }
}

/// Answers from a fixed list of tokens.
///
/// Records every prompt it was asked, which lets callers check which
/// branches of the flow ran.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTokens {
    tokens: VecDeque<String>,
    asked: Vec<Prompt>,
}

impl ScriptedTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTokens {
            tokens: tokens.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Splits a script such as `"3 5 yes Sugar 1 yes"` on whitespace.
    pub fn from_script(script: &str) -> Self {
        Self::new(script.split_whitespace())
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.asked
    }
}

impl TokenSource for ScriptedTokens {
    fn next_token(&mut self, prompt: Prompt) -> CoreResult<String> {
        self.asked.push(prompt);
        self.tokens
            .pop_front()
            .ok_or(CoreError::InputExhausted { prompt })
    }
}

// =============================================================================
// Flow
// =============================================================================

/// Runs the full selection flow and returns the assembled order.
///
/// ## Example
/// ```rust
/// use meal_core::{prepare_order, Money, ScriptedTokens};
///
/// let mut answers = ScriptedTokens::from_script("1 1");
/// let order = prepare_order(&mut answers).unwrap();
///
/// assert_eq!(order.len(), 2);
/// assert_eq!(order.cost(), Money::from_cents(5500));
/// ```
///
/// ## Errors
/// - [`CoreError::InputExhausted`] if the source runs dry
/// - [`CoreError::Validation`] if a number prompt gets a non-numeric token
pub fn prepare_order<S: TokenSource + ?Sized>(source: &mut S) -> CoreResult<Order> {
    let mut order = Order::new();

    let burger = ask_number(source, Prompt::Burger)?;
    match BurgerChoice::from_selection(burger) {
        Some(choice) => {
            debug!(?choice, "Burger selected");
            order.add_boxed(choice.into_item());
        }
        None => debug!(selection = burger, "No burger selected"),
    }

    let drink = ask_number(source, Prompt::Drink)?;
    match DrinkChoice::from_selection(drink) {
        Some(DrinkChoice::Cold(choice)) => {
            debug!(?choice, "Cold drink selected");
            order.add_boxed(choice.into_item());
        }
        Some(DrinkChoice::Tea) => {
            let tea = prepare_tea(source)?;
            debug!(name = %tea.name(), "Tea selected");
            order.add_boxed(tea.into_item());
        }
        None => debug!(selection = drink, "No drink selected"),
    }

    info!(
        order_id = %order.id(),
        items = order.len(),
        total = %order.cost(),
        "Order assembled"
    );

    Ok(order)
}

/// Tea sub-flow: optional sweetness, then optional cream, in that order.
fn prepare_tea<S: TokenSource + ?Sized>(source: &mut S) -> CoreResult<Box<dyn HotDrink>> {
    let mut tea: Box<dyn HotDrink> = Box::new(Tea::new());

    if is_yes(&source.next_token(Prompt::AddSweetness)?) {
        let sweetener = source.next_token(Prompt::SweetenerType)?;
        let spoons: i32 = parse_whole(
            Prompt::Spoons.field(),
            &source.next_token(Prompt::Spoons)?,
        )?;
        tea = Box::new(Sweetness::wrap(tea, sweetener, spoons));
    }

    if is_yes(&source.next_token(Prompt::AddCream)?) {
        tea = Box::new(Cream::wrap(tea));
    }

    Ok(tea)
}

fn ask_number<S: TokenSource + ?Sized>(source: &mut S, prompt: Prompt) -> CoreResult<i64> {
    let token = source.next_token(prompt)?;
    Ok(parse_whole(prompt.field(), &token)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
