use elizabeth_core::{Locale, Random};
use tracing::debug;

use crate::locales::{FoodData, locale_data};

#[derive(Debug, Clone)]
pub struct Food {
    data: &'static FoodData,
    random: Random,
}

impl Food {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "food", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).food,
            random,
        }
    }

    pub fn vegetable(&mut self) -> &'static str {
        self.random.pick(self.data.vegetables)
    }

    pub fn fruit(&mut self) -> &'static str {
        self.random.pick(self.data.fruits)
    }

    pub fn dish(&mut self) -> &'static str {
        self.random.pick(self.data.dishes)
    }

    pub fn spices(&mut self) -> &'static str {
        self.random.pick(self.data.spices)
    }

    pub fn drink(&mut self) -> &'static str {
        self.random.pick(self.data.drinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_come_from_locale_tables() {
        for locale in Locale::ALL {
            let mut food = Food::with_seed(*locale, 21);
            let data = &locale_data(*locale).food;
            assert!(data.vegetables.contains(&food.vegetable()));
            assert!(data.fruits.contains(&food.fruit()));
            assert!(data.dishes.contains(&food.dish()));
            assert!(data.spices.contains(&food.spices()));
            assert!(data.drinks.contains(&food.drink()));
        }
    }
}
