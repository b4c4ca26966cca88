use elizabeth_core::{Random, Result, ensure_range};
use tracing::debug;

pub const INTERNATIONAL_SIZES: &[&str] = &["L", "M", "S", "XL", "XS", "XXL", "XXS", "XXXL"];
pub const DEFAULT_CUSTOM_MIN: u32 = 40;
pub const DEFAULT_CUSTOM_MAX: u32 = 62;

const EUROPEAN_MIN: u32 = 40;
const EUROPEAN_MAX: u32 = 60;

#[derive(Debug, Clone)]
pub struct ClothingSizes {
    random: Random,
}

impl ClothingSizes {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "clothing", "provider ready");
        Self { random }
    }

    pub fn international(&mut self) -> &'static str {
        self.random.pick(INTERNATIONAL_SIZES)
    }

    /// Even European size between 40 and 60.
    pub fn european(&mut self) -> u32 {
        self.random.between(EUROPEAN_MIN / 2, EUROPEAN_MAX / 2) * 2
    }

    pub fn custom(&mut self, min: u32, max: u32) -> Result<u32> {
        ensure_range(min, max, "clothing size")?;
        Ok(self.random.between(min, max))
    }
}

impl Default for ClothingSizes {
    fn default() -> Self {
        Self::new()
    }
}
