//! # Menu Choices
//!
//! Maps the numbers typed at the prompts to menu items.
//!
//! ```text
//!   Burger:  1. Veg  2. Chicken  3. None
//!   Drink:   1. Coke  2. Pepsi  3. Diet Coke  4. Diet Pepsi  5. Tea  6. None
//! ```
//!
//! Any number outside the listed items (including the explicit "None"
//! entries) selects nothing.

use crate::item::{ChickenBurger, Coke, DietCoke, DietPepsi, Item, Pepsi, VegBurger};

/// A burger picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurgerChoice {
    Veg,
    Chicken,
}

impl BurgerChoice {
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(BurgerChoice::Veg),
            2 => Some(BurgerChoice::Chicken),
            _ => None,
        }
    }

    pub fn into_item(self) -> Box<dyn Item> {
        match self {
            BurgerChoice::Veg => Box::new(VegBurger::new()),
            BurgerChoice::Chicken => Box::new(ChickenBurger::new()),
        }
    }
}

/// A bottled drink picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColdDrinkChoice {
    Coke,
    Pepsi,
    DietCoke,
    DietPepsi,
}

impl ColdDrinkChoice {
    pub fn into_item(self) -> Box<dyn Item> {
        match self {
            ColdDrinkChoice::Coke => Box::new(Coke::new()),
            ColdDrinkChoice::Pepsi => Box::new(Pepsi::new()),
            ColdDrinkChoice::DietCoke => Box::new(DietCoke::new()),
            ColdDrinkChoice::DietPepsi => Box::new(DietPepsi::new()),
        }
    }
}

/// A drink picked from the menu. Tea goes through the condiment prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkChoice {
    Cold(ColdDrinkChoice),
    Tea,
}

impl DrinkChoice {
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(DrinkChoice::Cold(ColdDrinkChoice::Coke)),
            2 => Some(DrinkChoice::Cold(ColdDrinkChoice::Pepsi)),
            3 => Some(DrinkChoice::Cold(ColdDrinkChoice::DietCoke)),
            4 => Some(DrinkChoice::Cold(ColdDrinkChoice::DietPepsi)),
            5 => Some(DrinkChoice::Tea),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packaging::Packaging;

    #[test]
    fn test_burger_selection() {
        assert_eq!(BurgerChoice::from_selection(1), Some(BurgerChoice::Veg));
        assert_eq!(BurgerChoice::from_selection(2), Some(BurgerChoice::Chicken));
        assert_eq!(BurgerChoice::from_selection(3), None);
        assert_eq!(BurgerChoice::from_selection(0), None);
        assert_eq!(BurgerChoice::from_selection(-7), None);

        let burger = BurgerChoice::Chicken.into_item();
        assert_eq!(burger.name(), "Chicken Burger");
        assert_eq!(burger.packaging(), Packaging::Wrapper);
    }

    #[test]
    fn test_drink_selection() {
        let names: Vec<String> = (1..=4)
            .filter_map(DrinkChoice::from_selection)
            .map(|choice| match choice {
                DrinkChoice::Cold(cold) => cold.into_item().name(),
                DrinkChoice::Tea => unreachable!("tea is selection 5"),
            })
            .collect();
        assert_eq!(names, vec!["Coke", "Pepsi", "Diet Coke", "Diet Pepsi"]);

        assert_eq!(DrinkChoice::from_selection(5), Some(DrinkChoice::Tea));
        assert_eq!(DrinkChoice::from_selection(6), None);
        assert_eq!(DrinkChoice::from_selection(99), None);
    }
}
