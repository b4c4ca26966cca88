pub const RESOLUTIONS: &[&str] = &[
    "1152x768", "1280x854", "1440x960", "2880x1920", "1024x768", "1152x864", "1280x960",
    "1400x1050", "1600x1200", "2048x1536", "3200x2400", "1280x768", "1280x1024", "2560x2048",
    "1280x720", "1365x768", "1600x900", "1920x1080", "2560x1440", "3840x2160", "5120x2880",
    "1280x800", "1440x900", "1680x1050", "1920x1200", "2560x1600", "3840x2400",
];

pub const SCREEN_SIZES: &[&str] = &[
    "14″", "12.1″", "12″", "14.4″", "15″", "15.7″", "13.3″", "13″", "17″", "15.4″", "14.1″",
    "16″", "27″", "24″", "21.5″",
];

pub const CPU: &[&str] = &[
    "AMD Ryzen 7 1800X",
    "AMD Ryzen 7 1700",
    "AMD Ryzen 9 5950X",
    "Intel® Core i3",
    "Intel® Core i5",
    "Intel® Core i7",
    "Intel® Core i9",
    "Apple M1",
    "Apple M2",
];

pub const GENERATION: &[&str] = &[
    "2nd Generation",
    "3rd Generation",
    "4th Generation",
    "5th Generation",
    "6th Generation",
    "7th Generation",
    "8th Generation",
    "9th Generation",
];

pub const GENERATION_ABBR: &[&str] = &[
    "2nd Gen", "3rd Gen", "4th Gen", "5th Gen", "6th Gen", "7th Gen", "8th Gen", "9th Gen",
];

pub const CPU_CODENAMES: &[&str] = &[
    "Ivytown",
    "Haswell",
    "Fortville",
    "Devil's Canyon",
    "Valley Island",
    "Broadwell",
    "Bay Trail",
    "Skylake",
    "Orchid Island",
    "Bear Ridge",
    "Cannonlake",
    "Kaby Lake",
    "Coffee Lake",
    "Alder Lake",
];

pub const RAM_TYPES: &[&str] = &["DDR2", "DDR3", "DDR4"];

pub const RAM_SIZES: &[&str] = &["4", "6", "8", "16", "32", "64"];

pub const HDD_SSD: &[&str] = &[
    "64GB SSD",
    "128GB SSD",
    "256GB SDD",
    "512GB SSD",
    "1TB SSD",
    "256GB HDD",
    "256GB HDD(7200 RPM)",
    "256GB HDD(5400 RPM)",
    "512GB HDD",
    "512GB HDD(7200 RPM)",
    "1TB HDD",
    "1TB HDD(7200 RPM)",
    "2TB HDD",
];

pub const GRAPHICS: &[&str] = &[
    "Intel® HD Graphics 620",
    "Intel® Iris™ Plus Graphics 640",
    "Intel® Iris™ Pro Graphics 580",
    "AMD Radeon Pro 455",
    "AMD Radeon RX 580",
    "AMD Radeon RX 6800 XT",
    "Nvidia Quadro M1000M",
    "Nvidia GeForce GTX 1080",
    "Nvidia GeForce RTX 3080",
    "Nvidia GeForce GTX 1050 Ti",
];

pub const MANUFACTURERS: &[&str] = &[
    "Apple", "Acer", "Dell", "ASUS", "VAIO", "Lenovo", "HP", "Toshiba", "Sony", "Samsung",
    "Fujitsu", "MSI", "Huawei",
];

pub const PHONE_MODELS: &[&str] = &[
    "Apple iPhone SE",
    "Apple iPhone 13",
    "Apple iPhone 14 Pro",
    "Samsung Galaxy S22",
    "Samsung Galaxy A53",
    "Google Pixel 7",
    "Google Pixel 6a",
    "OnePlus 10 Pro",
    "Xiaomi 12",
    "Sony Xperia 1 IV",
    "Motorola Edge 30",
    "Nokia G21",
    "Fairphone 4",
];
