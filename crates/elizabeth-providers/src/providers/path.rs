use elizabeth_core::{Locale, Random};
use tracing::debug;

use crate::data::development::{FOLDERS, PROGRAMMING_LANGS, PROJECT_NAMES};
use crate::locales::locale_data;
use crate::options::Gender;

/// Filesystem flavour used to build paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn root(self) -> &'static str {
        match self {
            Platform::Unix => "/",
            Platform::Windows => "C:\\",
        }
    }

    pub fn separator(self) -> char {
        match self {
            Platform::Unix => '/',
            Platform::Windows => '\\',
        }
    }

    fn home(self) -> &'static str {
        match self {
            Platform::Unix => "home",
            Platform::Windows => "Users",
        }
    }
}

/// Home directories and project paths.
#[derive(Debug, Clone)]
pub struct Path {
    platform: Platform,
    random: Random,
}

impl Path {
    pub fn new() -> Self {
        Self::from_random(Platform::current(), Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Platform::current(), Random::from_seed(seed))
    }

    pub fn from_random(platform: Platform, random: Random) -> Self {
        debug!(provider = "path", platform = ?platform, "provider ready");
        Self { platform, random }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn root(&self) -> &'static str {
        self.platform.root()
    }

    pub fn home(&self) -> String {
        format!("{}{}", self.root(), self.platform.home())
    }

    /// Home directory of a random user, e.g. `/home/emma`.
    pub fn user(&mut self, gender: Gender) -> String {
        let name = self.random.pick(locale_data(Locale::En).personal.names.get(gender));
        let name = match self.platform {
            Platform::Unix => name.to_lowercase(),
            Platform::Windows => name.to_string(),
        };
        self.join(&self.home(), &name)
    }

    pub fn users_folder(&mut self, gender: Gender) -> String {
        let user = self.user(gender);
        let folder = self.random.pick(FOLDERS);
        self.join(&user, folder)
    }

    pub fn dev_dir(&mut self, gender: Gender) -> String {
        let user = self.user(gender);
        let language = self.random.pick(PROGRAMMING_LANGS);
        let development = self.join(&user, "Development");
        self.join(&development, language)
    }

    pub fn project_dir(&mut self, gender: Gender) -> String {
        let dev_dir = self.dev_dir(gender);
        let project = self.random.pick(PROJECT_NAMES);
        self.join(&dev_dir, project)
    }

    fn join(&self, base: &str, part: &str) -> String {
        format!("{base}{}{part}", self.platform.separator())
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix(seed: u64) -> Path {
        Path::from_random(Platform::Unix, Random::from_seed(seed))
    }

    #[test]
    fn unix_user_lives_in_home() {
        let mut path = unix(1);
        assert_eq!(path.root(), "/");
        let user = path.user(Gender::Female);
        assert!(user.starts_with("/home/"), "{user}");
        assert_eq!(user.split('/').count(), 3);
    }

    #[test]
    fn windows_user_lives_in_users() {
        let mut path = Path::from_random(Platform::Windows, Random::from_seed(1));
        assert_eq!(path.root(), "C:\\");
        let user = path.user(Gender::Male);
        assert!(user.starts_with("C:\\Users\\"), "{user}");
        assert_eq!(user.split('\\').count(), 3);
    }

    #[test]
    fn nested_directories() {
        let mut path = unix(2);
        let parts: Vec<String> = path
            .users_folder(Gender::Female)
            .split('/')
            .map(str::to_string)
            .collect();
        assert_eq!(parts.len(), 4);
        assert!(FOLDERS.contains(&parts[3].as_str()));

        let parts: Vec<String> = path
            .dev_dir(Gender::Female)
            .split('/')
            .map(str::to_string)
            .collect();
        assert_eq!(parts.len(), 5);
        assert!(PROGRAMMING_LANGS.contains(&parts[4].as_str()));

        let parts: Vec<String> = path
            .project_dir(Gender::Female)
            .split('/')
            .map(str::to_string)
            .collect();
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[3], "Development");
        assert!(PROJECT_NAMES.contains(&parts[5].as_str()));
    }
}
