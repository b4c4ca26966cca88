use elizabeth_core::{Error, Locale, Random, Result};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::data::structured::{
    CSS_PROPERTIES, CSS_SELECTORS, CSS_SIZE_UNITS, HTML_CONTAINER_TAGS, HTML_MARKUP_TAGS,
    ValueKind,
};
use crate::providers::internet::Internet;
use crate::providers::text::Text;

pub const DEFAULT_JSON_ITEMS: usize = 5;
pub const DEFAULT_JSON_DEPTH: usize = 3;

const CSS_MAX_PROPERTIES: usize = 6;
const NESTED_MAX_ITEMS: usize = 3;

/// Small CSS, HTML and JSON snippets.
#[derive(Debug, Clone)]
pub struct Structured {
    random: Random,
    text: Text,
    internet: Internet,
}

impl Structured {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, mut random: Random) -> Self {
        debug!(provider = "structured", locale = %locale, "provider ready");
        let text = Text::from_random(locale, random.derive());
        let internet = Internet::from_random(random.derive());
        Self {
            random,
            text,
            internet,
        }
    }

    /// Rule with a random selector and up to six properties.
    pub fn css(&mut self) -> String {
        let selector = format!("{}{}", self.random.pick(CSS_SELECTORS), self.text.word());
        let count = self.random.between(1, CSS_MAX_PROPERTIES);
        let properties: Vec<String> = (0..count).map(|_| self.css_property()).collect();
        format!("{selector} {{{}}}", properties.join("; "))
    }

    pub fn css_property(&mut self) -> String {
        let Some((name, kind)) = self.random.choice(CSS_PROPERTIES).copied() else {
            return String::new();
        };
        let value = self.value_of(kind);
        format!("{name}: {value}")
    }

    pub fn html_attribute_value(&mut self, tag: &str, attr: &str) -> Result<String> {
        let kind = HTML_CONTAINER_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .and_then(|(_, attributes)| attributes.iter().find(|(name, _)| *name == attr))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| {
                debug!(tag = tag, attr = attr, "unsupported html attribute");
                Error::Unsupported(format!("Tag {tag} or attribute {attr} not supported"))
            })?;
        Ok(self.value_of(kind))
    }

    /// Container tag with a few attributes around a sentence.
    pub fn html(&mut self) -> String {
        let Some((tag, attributes)) = self.random.choice(HTML_CONTAINER_TAGS).copied() else {
            return String::new();
        };
        let count = self.random.between(1, attributes.len());
        let attributes: String = self
            .random
            .distinct(attributes, count)
            .into_iter()
            .map(|(name, kind)| format!(" {name}=\"{}\"", self.value_of(kind)))
            .collect();
        let markup = self.random.pick(HTML_MARKUP_TAGS);
        let sentence = self.text.sentence();
        let word = self.text.word();
        format!("<{tag}{attributes}>{sentence} <{markup}>{word}</{markup}></{tag}>")
    }

    /// Pretty printed JSON object or array with `items` top-level entries.
    pub fn json(&mut self, items: usize, max_depth: usize) -> Result<String> {
        let root = if self.random.bool() {
            self.object(items, max_depth)
        } else {
            self.array(items, max_depth)
        };
        Ok(serde_json::to_string_pretty(&root)?)
    }

    fn value_of(&mut self, kind: ValueKind) -> String {
        match kind {
            ValueKind::Color => self.text.hex_color(),
            ValueKind::Size => {
                let size = self.random.between(1_u32, 99);
                format!("{size}{}", self.random.pick(CSS_SIZE_UNITS))
            }
            ValueKind::Word => self.text.word().to_string(),
            ValueKind::Url => self.internet.home_page(),
            ValueKind::Css => self.css_property(),
            ValueKind::Choice(values) => self.random.pick(values).to_string(),
        }
    }

    fn object(&mut self, items: usize, depth: usize) -> Value {
        let mut map = Map::new();
        while map.len() < items {
            let mut key = self.text.word().to_string();
            if map.contains_key(&key) {
                key = format!("{key}_{}", map.len());
            }
            let value = self.node(depth);
            map.insert(key, value);
        }
        Value::Object(map)
    }

    fn array(&mut self, items: usize, depth: usize) -> Value {
        Value::Array((0..items).map(|_| self.node(depth)).collect())
    }

    fn node(&mut self, depth: usize) -> Value {
        if depth > 1 && self.random.bool() {
            let items = self.random.between(1, NESTED_MAX_ITEMS);
            return if self.random.bool() {
                self.object(items, depth - 1)
            } else {
                self.array(items, depth - 1)
            };
        }
        match self.random.between(0_u8, 3) {
            0 => Value::Bool(self.random.bool()),
            1 => Value::Number(Number::from(self.random.between(0_i64, 10_000))),
            2 => Value::String(self.text.color().to_string()),
            _ => Value::String(self.text.word().to_string()),
        }
    }
}
