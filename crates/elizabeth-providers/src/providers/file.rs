use elizabeth_core::Random;
use tracing::debug;

use crate::data::file::{
    EXTENSIONS_AUDIO, EXTENSIONS_COMPRESSED, EXTENSIONS_DATA, EXTENSIONS_EXECUTABLE,
    EXTENSIONS_IMAGE, EXTENSIONS_SOURCE, EXTENSIONS_TEXT, EXTENSIONS_VIDEO, MIME_APPLICATION,
    MIME_AUDIO, MIME_IMAGE, MIME_MESSAGE, MIME_TEXT, MIME_VIDEO,
};
use crate::options::{FileType, MimeCategory};

/// File extensions and MIME types.
#[derive(Debug, Clone)]
pub struct File {
    random: Random,
}

pub fn extensions(file_type: FileType) -> &'static [&'static str] {
    match file_type {
        FileType::Source => EXTENSIONS_SOURCE,
        FileType::Text => EXTENSIONS_TEXT,
        FileType::Data => EXTENSIONS_DATA,
        FileType::Audio => EXTENSIONS_AUDIO,
        FileType::Video => EXTENSIONS_VIDEO,
        FileType::Image => EXTENSIONS_IMAGE,
        FileType::Executable => EXTENSIONS_EXECUTABLE,
        FileType::Compressed => EXTENSIONS_COMPRESSED,
    }
}

pub fn mime_types(category: MimeCategory) -> &'static [&'static str] {
    match category {
        MimeCategory::Application => MIME_APPLICATION,
        MimeCategory::Audio => MIME_AUDIO,
        MimeCategory::Image => MIME_IMAGE,
        MimeCategory::Message => MIME_MESSAGE,
        MimeCategory::Text => MIME_TEXT,
        MimeCategory::Video => MIME_VIDEO,
    }
}

impl File {
    pub fn new() -> Self {
        Self::from_random(Random::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_random(Random::from_seed(seed))
    }

    pub fn from_random(random: Random) -> Self {
        debug!(provider = "file", "provider ready");
        Self { random }
    }

    pub fn extension(&mut self, file_type: FileType) -> &'static str {
        self.random.pick(extensions(file_type))
    }

    pub fn mime_type(&mut self, category: MimeCategory) -> &'static str {
        self.random.pick(mime_types(category))
    }
}

impl Default for File {
    fn default() -> Self {
        Self::new()
    }
}
