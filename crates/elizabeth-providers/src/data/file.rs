pub const EXTENSIONS_SOURCE: &[&str] = &[
    ".py", ".rs", ".rb", ".cpp", ".c", ".h", ".js", ".ts", ".go", ".java", ".swift", ".php",
    ".kt", ".scala", ".hs",
];
pub const EXTENSIONS_TEXT: &[&str] = &[
    ".doc", ".docx", ".log", ".rtf", ".md", ".pdf", ".odt", ".txt",
];
pub const EXTENSIONS_DATA: &[&str] = &[
    ".csv", ".dat", ".pps", ".ppt", ".pptx", ".xml", ".json", ".yaml", ".toml", ".sql",
];
pub const EXTENSIONS_AUDIO: &[&str] = &[
    ".mp3", ".flac", ".m4a", ".aac", ".wav", ".ogg", ".wma",
];
pub const EXTENSIONS_VIDEO: &[&str] = &[
    ".3gp", ".avi", ".m4v", ".mp4", ".mov", ".mkv", ".wmv", ".webm",
];
pub const EXTENSIONS_IMAGE: &[&str] = &[
    ".bmp", ".jpg", ".jpeg", ".png", ".svg", ".gif", ".tiff", ".webp",
];
pub const EXTENSIONS_EXECUTABLE: &[&str] = &[
    ".apk", ".app", ".bat", ".jar", ".com", ".exe", ".msi", ".deb",
];
pub const EXTENSIONS_COMPRESSED: &[&str] = &[
    ".7z", ".war", ".zip", ".tar.gz", ".tar.xz", ".rar", ".bz2",
];

pub const MIME_APPLICATION: &[&str] = &[
    "application/1d-interleaved-parityfec",
    "application/atom+xml",
    "application/epub+zip",
    "application/gzip",
    "application/java-archive",
    "application/javascript",
    "application/json",
    "application/ld+json",
    "application/msword",
    "application/octet-stream",
    "application/ogg",
    "application/pdf",
    "application/rtf",
    "application/sql",
    "application/toml",
    "application/vnd.ms-excel",
    "application/wasm",
    "application/x-www-form-urlencoded",
    "application/xhtml+xml",
    "application/xml",
    "application/zip",
];
pub const MIME_AUDIO: &[&str] = &[
    "audio/aac",
    "audio/flac",
    "audio/midi",
    "audio/mp4",
    "audio/mpeg",
    "audio/ogg",
    "audio/opus",
    "audio/wav",
    "audio/webm",
];
pub const MIME_IMAGE: &[&str] = &[
    "image/bmp",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "image/tiff",
    "image/webp",
    "image/x-icon",
];
pub const MIME_MESSAGE: &[&str] = &[
    "message/CPIM",
    "message/delivery-status",
    "message/disposition-notification",
    "message/external-body",
    "message/http",
    "message/partial",
    "message/rfc822",
];
pub const MIME_TEXT: &[&str] = &[
    "text/calendar",
    "text/css",
    "text/csv",
    "text/html",
    "text/javascript",
    "text/markdown",
    "text/plain",
    "text/rtf",
    "text/xml",
];
pub const MIME_VIDEO: &[&str] = &[
    "video/3gpp",
    "video/H264",
    "video/mp4",
    "video/mpeg",
    "video/ogg",
    "video/quicktime",
    "video/webm",
    "video/x-matroska",
];
