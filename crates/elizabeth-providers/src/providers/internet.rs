use elizabeth_core::{Locale, Random};
use tracing::debug;

use crate::data::file::MIME_APPLICATION;
use crate::data::network::{
    DOMAINS, EMOJI, HASHTAGS_BOYS, HASHTAGS_CARS, HASHTAGS_FAMILY, HASHTAGS_FRIENDS,
    HASHTAGS_GENERAL, HASHTAGS_GIRLS, HASHTAGS_LOVE, HASHTAGS_NATURE, HASHTAGS_SPORT,
    HASHTAGS_TRAVEL, HASHTAGS_TUMBLR, HTTP_METHODS, HTTP_STATUS_CODES, IMAGE_KEYWORDS,
    STOCK_IMAGE_CATEGORIES, SUBREDDITS, SUBREDDITS_NSFW, USER_AGENTS,
};
use crate::locales::locale_data;
use crate::options::HashtagCategory;

pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 300;
pub const DEFAULT_HASHTAG_QUANTITY: usize = 4;

const MAC_PREFIX: [u8; 3] = [0x00, 0x16, 0x3e];
const IMAGE_BY_KEYWORD_URL: &str = "https://source.unsplash.com/weekly?";

pub fn hashtag_table(category: HashtagCategory) -> &'static [&'static str] {
    match category {
        HashtagCategory::General => HASHTAGS_GENERAL,
        HashtagCategory::Girls => HASHTAGS_GIRLS,
        HashtagCategory::Boys => HASHTAGS_BOYS,
        HashtagCategory::Love => HASHTAGS_LOVE,
        HashtagCategory::Friends => HASHTAGS_FRIENDS,
        HashtagCategory::Family => HASHTAGS_FAMILY,
        HashtagCategory::Nature => HASHTAGS_NATURE,
        HashtagCategory::Travel => HASHTAGS_TRAVEL,
        HashtagCategory::Cars => HASHTAGS_CARS,
        HashtagCategory::Sport => HASHTAGS_SPORT,
        HashtagCategory::Tumblr => HASHTAGS_TUMBLR,
    }
}

/// Network addresses, HTTP details and web content links.
#[derive(Debug, Clone)]
pub struct Internet {
    random: Random,
}

impl Internet {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "internet", "provider ready");
        Self { random }
    }

    pub fn content_type(&mut self) -> String {
        format!("Content-Type: {}", self.random.pick(MIME_APPLICATION))
    }

    /// Full status line such as `404 Not Found`.
    pub fn http_status(&mut self) -> &'static str {
        self.random.pick(HTTP_STATUS_CODES)
    }

    pub fn http_status_code(&mut self) -> u16 {
        self.http_status()
            .split(' ')
            .next()
            .and_then(|code| code.parse().ok())
            .unwrap_or(200)
    }

    pub fn http_method(&mut self) -> &'static str {
        self.random.pick(HTTP_METHODS)
    }

    pub fn ipv4(&mut self) -> String {
        let octets: Vec<String> = (0..4)
            .map(|_| self.random.between(0_u8, 255).to_string())
            .collect();
        octets.join(".")
    }

    pub fn ipv6(&mut self) -> String {
        let groups: Vec<String> = (0..8)
            .map(|_| format!("{:x}", self.random.between(0_u16, u16::MAX)))
            .collect();
        groups.join(":")
    }

    /// MAC address in the `00:16:3e` (Xensource) block.
    pub fn mac_address(&mut self) -> String {
        let mut octets = MAC_PREFIX.to_vec();
        octets.push(self.random.between(0x00, 0x7f));
        octets.push(self.random.between(0x00, 0xff));
        octets.push(self.random.between(0x00, 0xff));
        octets
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn emoji(&mut self) -> &'static str {
        self.random.pick(EMOJI)
    }

    pub fn image_placeholder(&self, width: u32, height: u32) -> String {
        format!("http://placehold.it/{width}x{height}")
    }

    /// Stock photo link; unknown or missing categories get a random one.
    pub fn stock_image(&mut self, category: Option<&str>, width: u32, height: u32) -> String {
        let category = match category {
            Some(name) if STOCK_IMAGE_CATEGORIES.contains(&name) => name,
            Some(name) => {
                debug!(category = name, "unknown stock image category");
                self.random.pick(STOCK_IMAGE_CATEGORIES)
            }
            None => self.random.pick(STOCK_IMAGE_CATEGORIES),
        };
        format!("https://source.unsplash.com/category/{category}/{width}x{height}")
    }

    pub fn image_by_keyword(&mut self, keyword: Option<&str>) -> String {
        let keyword = match keyword {
            Some(keyword) => keyword,
            None => self.random.pick(IMAGE_KEYWORDS),
        };
        format!("{IMAGE_BY_KEYWORD_URL}{keyword}")
    }

    pub fn hashtags(&mut self, quantity: usize, category: HashtagCategory) -> Vec<&'static str> {
        self.random.sample_n(hashtag_table(category), quantity)
    }

    pub fn home_page(&mut self) -> String {
        let word = self
            .random
            .pick(locale_data(Locale::En).text.words)
            .to_lowercase();
        let domain = self.random.pick(DOMAINS);
        format!("http://www.{word}{domain}")
    }

    /// Subreddit path, from the adult-content table when `nsfw` is set.
    pub fn subreddit(&mut self, nsfw: bool, full_url: bool) -> String {
        let name = if nsfw {
            self.random.pick(SUBREDDITS_NSFW)
        } else {
            self.random.pick(SUBREDDITS)
        };
        if full_url {
            format!("http://www.reddit.com{name}")
        } else {
            name.to_string()
        }
    }

    pub fn user_agent(&mut self) -> &'static str {
        self.random.pick(USER_AGENTS)
    }
}

impl Default for Internet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn ip_addresses() {
        let mut internet = Internet::with_seed(1);
        let v4 = Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").unwrap();
        let v6 = Regex::new(r"^[0-9a-f]{1,4}(:[0-9a-f]{1,4}){7}$").unwrap();
        for _ in 0..20 {
            let ip = internet.ipv4();
            assert!(v4.is_match(&ip), "{ip}");
            assert!(ip.split('.').all(|octet| octet.parse::<u8>().is_ok()));
            let ip = internet.ipv6();
            assert!(v6.is_match(&ip), "{ip}");
        }
    }

    #[test]
    fn mac_address_has_vendor_prefix() {
        let mut internet = Internet::with_seed(2);
        let re = Regex::new(r"^00:16:3e(:[0-9a-f]{2}){3}$").unwrap();
        for _ in 0..20 {
            let mac = internet.mac_address();
            assert!(re.is_match(&mac), "{mac}");
        }
    }

    #[test]
    fn http_status_code_is_three_digits() {
        let mut internet = Internet::with_seed(3);
        for _ in 0..20 {
            let code = internet.http_status_code();
            assert!((100..=599).contains(&code), "{code}");
        }
        let status = internet.http_status();
        assert!(Regex::new(r"^\d{3} \w").unwrap().is_match(status), "{status}");
    }

    #[test]
    fn content_type_header() {
        let mut internet = Internet::with_seed(4);
        let header = internet.content_type();
        assert!(header.starts_with("Content-Type: application/"), "{header}");
    }

    #[test]
    fn image_links() {
        let mut internet = Internet::with_seed(5);
        assert_eq!(
            internet.image_placeholder(DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT),
            "http://placehold.it/400x300"
        );
        assert_eq!(
            internet.stock_image(Some("nature"), 1920, 1080),
            "https://source.unsplash.com/category/nature/1920x1080"
        );
        let fallback = internet.stock_image(Some("unknown"), 10, 10);
        let re = Regex::new(r"^https://source\.unsplash\.com/category/([a-z]+)/10x10$").unwrap();
        let category = re.captures(&fallback).unwrap().get(1).unwrap().as_str();
        assert!(STOCK_IMAGE_CATEGORIES.contains(&category));
        assert!(internet.image_by_keyword(Some("cat")).ends_with("?cat"));
    }

    #[test]
    fn hashtags_from_category() {
        let mut internet = Internet::with_seed(6);
        let tags = internet.hashtags(DEFAULT_HASHTAG_QUANTITY, HashtagCategory::default());
        assert_eq!(tags.len(), DEFAULT_HASHTAG_QUANTITY);
        assert!(tags.iter().all(|tag| HASHTAGS_GENERAL.contains(tag)));
        let tags = internet.hashtags(2, "cars".parse().unwrap());
        assert!(tags.iter().all(|tag| HASHTAGS_CARS.contains(tag)));
    }

    #[test]
    fn home_page_and_subreddit() {
        let mut internet = Internet::with_seed(7);
        let re = Regex::new(r"^http://www\.[a-z]+\.[a-z]+$").unwrap();
        let page = internet.home_page();
        assert!(re.is_match(&page), "{page}");
        assert!(SUBREDDITS.contains(&internet.subreddit(false, false).as_str()));
        assert!(internet.subreddit(false, true).starts_with("http://www.reddit.com/r/"));
    }

    #[test]
    fn nsfw_subreddits_come_from_their_own_table() {
        let mut internet = Internet::with_seed(8);
        for _ in 0..20 {
            let name = internet.subreddit(true, false);
            assert!(SUBREDDITS_NSFW.contains(&name.as_str()), "{name}");
            let url = internet.subreddit(true, true);
            let path = url.trim_start_matches("http://www.reddit.com");
            assert!(url.starts_with("http://www."), "{url}");
            assert!(SUBREDDITS_NSFW.contains(&path), "{url}");
            let url = internet.subreddit(false, true);
            let path = url.trim_start_matches("http://www.reddit.com");
            assert!(SUBREDDITS.contains(&path), "{url}");
        }
    }
}
