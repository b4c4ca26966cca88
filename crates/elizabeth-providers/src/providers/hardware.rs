use elizabeth_core::Random;
use tracing::debug;

use crate::data::hardware::{
    CPU, CPU_CODENAMES, GENERATION, GENERATION_ABBR, GRAPHICS, HDD_SSD, MANUFACTURERS,
    PHONE_MODELS, RAM_SIZES, RAM_TYPES, RESOLUTIONS, SCREEN_SIZES,
};

const CPU_FREQUENCY_MIN: f64 = 1.5;
const CPU_FREQUENCY_MAX: f64 = 4.3;

/// Computer and phone hardware.
#[derive(Debug, Clone)]
pub struct Hardware {
    random: Random,
}

impl Hardware {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "hardware", "provider ready");
        Self { random }
    }

    pub fn resolution(&mut self) -> &'static str {
        self.random.pick(RESOLUTIONS)
    }

    pub fn screen_size(&mut self) -> &'static str {
        self.random.pick(SCREEN_SIZES)
    }

    pub fn cpu(&mut self) -> &'static str {
        self.random.pick(CPU)
    }

    pub fn cpu_frequency(&mut self) -> String {
        let ghz = self.random.uniform(CPU_FREQUENCY_MIN, CPU_FREQUENCY_MAX, 1);
        format!("{ghz:.1}GHz")
    }

    pub fn generation(&mut self, abbr: bool) -> &'static str {
        if abbr {
            self.random.pick(GENERATION_ABBR)
        } else {
            self.random.pick(GENERATION)
        }
    }

    pub fn cpu_codename(&mut self) -> &'static str {
        self.random.pick(CPU_CODENAMES)
    }

    pub fn ram_type(&mut self) -> &'static str {
        self.random.pick(RAM_TYPES)
    }

    pub fn ram_size(&mut self) -> String {
        format!("{}GB", self.random.pick(RAM_SIZES))
    }

    pub fn ssd_or_hdd(&mut self) -> &'static str {
        self.random.pick(HDD_SSD)
    }

    pub fn graphics(&mut self) -> &'static str {
        self.random.pick(GRAPHICS)
    }

    pub fn manufacturer(&mut self) -> &'static str {
        self.random.pick(MANUFACTURERS)
    }

    pub fn phone_model(&mut self) -> &'static str {
        self.random.pick(PHONE_MODELS)
    }
}

impl Default for Hardware {
    fn default() -> Self {
        Self::new()
    }
}
