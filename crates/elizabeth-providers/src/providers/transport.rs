use elizabeth_core::{DEFAULT_CHAR_PLACEHOLDER, DEFAULT_DIGIT_PLACEHOLDER, Random, custom_code};
use tracing::debug;

use crate::data::transport::{AIRPLANE_MODEL_MASK, AIRPLANES, CARS, TRUCK_MODEL_MASK, TRUCKS};

#[derive(Debug, Clone)]
pub struct Transport {
    random: Random,
}

impl Transport {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "transport", "provider ready");
        Self { random }
    }

    pub fn car(&mut self) -> &'static str {
        self.random.pick(CARS)
    }

    /// Truck maker and model code, e.g. `Scania-4521 KQ`.
    pub fn truck(&mut self) -> String {
        let maker = self.random.pick(TRUCKS);
        format!("{maker}-{}", self.model(TRUCK_MODEL_MASK))
    }

    /// Airplane maker and model number, e.g. `Boeing 737`.
    pub fn airplane(&mut self) -> String {
        let maker = self.random.pick(AIRPLANES);
        format!("{maker} {}", self.model(AIRPLANE_MODEL_MASK))
    }

    fn model(&mut self, mask: &str) -> String {
        custom_code(
            &mut self.random,
            mask,
            DEFAULT_CHAR_PLACEHOLDER,
            DEFAULT_DIGIT_PLACEHOLDER,
        )
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn truck_model_shape() {
        let mut transport = Transport::with_seed(1);
        let re = Regex::new(r"^([A-Za-z]+)-\d{4} [A-Z]{2}$").unwrap();
        for _ in 0..20 {
            let truck = transport.truck();
            let caps = re.captures(&truck).unwrap();
            assert!(TRUCKS.contains(&caps.get(1).unwrap().as_str()), "{truck}");
        }
    }

    #[test]
    fn airplane_model_shape() {
        let mut transport = Transport::with_seed(2);
        let re = Regex::new(r"^[A-Za-z]+ \d{3}$").unwrap();
        for _ in 0..20 {
            let airplane = transport.airplane();
            assert!(re.is_match(&airplane), "{airplane}");
        }
        assert!(CARS.contains(&transport.car()));
    }
}
