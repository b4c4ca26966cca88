use elizabeth_core::Random;
use tracing::debug;

use crate::data::scientific::{
    SI_PREFIXES_NEGATIVE, SI_PREFIXES_POSITIVE, SI_SYMBOLS_NEGATIVE, SI_SYMBOLS_POSITIVE,
};
use crate::options::Sign;

/// SI units by name or symbol.
///
/// Unit getters are fixed values; only [`UnitSystem::prefix`] is random.
#[derive(Debug, Clone)]
pub struct UnitSystem {
    random: Random,
}

fn unit(symbol: bool, name: &'static str, short: &'static str) -> &'static str {
    if symbol { short } else { name }
}

impl UnitSystem {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "units", "provider ready");
        Self { random }
    }

    pub fn mass(&self, symbol: bool) -> &'static str {
        unit(symbol, "gram", "gr")
    }

    pub fn information(&self, symbol: bool) -> &'static str {
        unit(symbol, "byte", "b")
    }

    pub fn thermodynamic_temperature(&self, symbol: bool) -> &'static str {
        unit(symbol, "kelvin", "K")
    }

    pub fn amount_of_substance(&self, symbol: bool) -> &'static str {
        unit(symbol, "mole", "mol")
    }

    pub fn angle(&self, symbol: bool) -> &'static str {
        unit(symbol, "radian", "r")
    }

    pub fn solid_angle(&self, symbol: bool) -> &'static str {
        unit(symbol, "steradian", "㏛")
    }

    pub fn frequency(&self, symbol: bool) -> &'static str {
        unit(symbol, "hertz", "Hz")
    }

    pub fn force(&self, symbol: bool) -> &'static str {
        unit(symbol, "newton", "N")
    }

    pub fn pressure(&self, symbol: bool) -> &'static str {
        unit(symbol, "pascal", "P")
    }

    pub fn energy(&self, symbol: bool) -> &'static str {
        unit(symbol, "joule", "J")
    }

    pub fn power(&self, symbol: bool) -> &'static str {
        unit(symbol, "watt", "W")
    }

    pub fn flux(&self, symbol: bool) -> &'static str {
        self.power(symbol)
    }

    pub fn electric_charge(&self, symbol: bool) -> &'static str {
        unit(symbol, "coulomb", "C")
    }

    pub fn voltage(&self, symbol: bool) -> &'static str {
        unit(symbol, "volt", "V")
    }

    pub fn electric_capacitance(&self, symbol: bool) -> &'static str {
        unit(symbol, "farad", "F")
    }

    pub fn electric_resistance(&self, symbol: bool) -> &'static str {
        unit(symbol, "ohm", "Ω")
    }

    pub fn impedance(&self, symbol: bool) -> &'static str {
        self.electric_resistance(symbol)
    }

    pub fn reactance(&self, symbol: bool) -> &'static str {
        self.electric_resistance(symbol)
    }

    pub fn electrical_conductance(&self, symbol: bool) -> &'static str {
        unit(symbol, "siemens", "S")
    }

    pub fn magnetic_flux(&self, symbol: bool) -> &'static str {
        unit(symbol, "weber", "Wb")
    }

    pub fn magnetic_flux_density(&self, symbol: bool) -> &'static str {
        unit(symbol, "tesla", "T")
    }

    pub fn inductance(&self, symbol: bool) -> &'static str {
        unit(symbol, "henry", "H")
    }

    pub fn temperature(&self, symbol: bool) -> &'static str {
        unit(symbol, "Celsius", "°C")
    }

    pub fn radioactivity(&self, symbol: bool) -> &'static str {
        unit(symbol, "becquerel", "Bq")
    }

    /// Random SI prefix (`kilo`, `milli`, ...) or its symbol.
    pub fn prefix(&mut self, sign: Sign, symbol: bool) -> &'static str {
        let table = match (sign, symbol) {
            (Sign::Positive, false) => SI_PREFIXES_POSITIVE,
            (Sign::Positive, true) => SI_SYMBOLS_POSITIVE,
            (Sign::Negative, false) => SI_PREFIXES_NEGATIVE,
            (Sign::Negative, true) => SI_SYMBOLS_NEGATIVE,
        };
        self.random.pick(table)
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use elizabeth_core::Error;

    use super::*;

    #[test]
    fn names_and_symbols() {
        let units = UnitSystem::with_seed(1);
        assert_eq!(units.mass(false), "gram");
        assert_eq!(units.mass(true), "gr");
        assert_eq!(units.solid_angle(true), "㏛");
        assert_eq!(units.flux(false), "watt");
        assert_eq!(units.impedance(true), "Ω");
        assert_eq!(units.reactance(false), "ohm");
        assert_eq!(units.temperature(true), "°C");
    }

    #[test]
    fn prefix_follows_sign() {
        let mut units = UnitSystem::with_seed(2);
        assert!(SI_PREFIXES_POSITIVE.contains(&units.prefix(Sign::Positive, false)));
        assert!(SI_SYMBOLS_NEGATIVE.contains(&units.prefix(Sign::Negative, true)));
        let sign: Sign = "negative".parse().unwrap();
        assert!(SI_PREFIXES_NEGATIVE.contains(&units.prefix(sign, false)));
    }

    #[test]
    fn unknown_sign_is_rejected() {
        let result = "sideways".parse::<Sign>();
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }
}
