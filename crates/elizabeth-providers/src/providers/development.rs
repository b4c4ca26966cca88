use elizabeth_core::Random;
use tracing::debug;

use crate::data::development::{
    BACKEND, CONTAINER, FRONTEND, LICENSES, NOSQL, OS, PROGRAMMING_LANGS, SQL,
    VERSION_CONTROL_SYSTEMS,
};

const VERSION_PART_MAX: u32 = 11;
const STACK_OVERFLOW_URL: &str = "http://stackoverflow.com/questions/";

/// Software licenses, versions, stacks and tooling.
#[derive(Debug, Clone)]
pub struct Development {
    random: Random,
}

impl Development {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "development", "provider ready");
        Self { random }
    }

    pub fn software_license(&mut self) -> &'static str {
        self.random.pick(LICENSES)
    }

    /// Semantic version, e.g. `2.11.4`.
    pub fn version(&mut self) -> String {
        let major = self.random.between(0, VERSION_PART_MAX);
        let minor = self.random.between(0, VERSION_PART_MAX);
        let patch = self.random.between(0, VERSION_PART_MAX);
        format!("{major}.{minor}.{patch}")
    }

    pub fn database(&mut self, nosql: bool) -> &'static str {
        if nosql {
            self.random.pick(NOSQL)
        } else {
            self.random.pick(SQL)
        }
    }

    pub fn container(&mut self) -> &'static str {
        self.random.pick(CONTAINER)
    }

    pub fn version_control_system(&mut self) -> &'static str {
        self.random.pick(VERSION_CONTROL_SYSTEMS)
    }

    pub fn programming_language(&mut self) -> &'static str {
        self.random.pick(PROGRAMMING_LANGS)
    }

    pub fn backend(&mut self) -> &'static str {
        self.random.pick(BACKEND)
    }

    pub fn frontend(&mut self) -> &'static str {
        self.random.pick(FRONTEND)
    }

    pub fn os(&mut self) -> &'static str {
        self.random.pick(OS)
    }

    pub fn stack_overflow_question(&mut self) -> String {
        let id = self.random.between(1_000_000_u32, 9_999_999);
        format!("{STACK_OVERFLOW_URL}{id}")
    }
}

impl Default for Development {
    fn default() -> Self {
        Self::new()
    }
}
