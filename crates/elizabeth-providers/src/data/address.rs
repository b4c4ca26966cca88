pub const CONTINENT_CODES: &[&str] = &["AF", "NA", "OC", "AN", "AS", "EU", "SA"];

pub const COUNTRIES_ISO2: &[&str] = &[
    "AD", "AE", "AF", "AG", "AL", "AM", "AO", "AR", "AT", "AU", "AZ", "BA", "BB", "BD", "BE",
    "BF", "BG", "BH", "BI", "BJ", "BN", "BO", "BR", "BS", "BT", "BW", "BY", "BZ", "CA", "CD",
    "CF", "CG", "CH", "CI", "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CY", "CZ", "DE", "DJ",
    "DK", "DM", "DO", "DZ", "EC", "EE", "EG", "ER", "ES", "ET", "FI", "FJ", "FR", "GA", "GB",
    "GE", "GH", "GM", "GN", "GR", "GT", "GW", "GY", "HN", "HR", "HT", "HU", "ID", "IE", "IL",
    "IN", "IQ", "IR", "IS", "IT", "JM", "JO", "JP", "KE", "KG", "KH", "KR", "KW", "KZ", "LA",
    "LB", "LK", "LR", "LT", "LU", "LV", "LY", "MA", "MD", "ME", "MG", "MK", "ML", "MM", "MN",
    "MR", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NE", "NG", "NI", "NL", "NO", "NP",
    "NZ", "OM", "PA", "PE", "PG", "PH", "PK", "PL", "PT", "PY", "QA", "RO", "RS", "RU", "RW",
    "SA", "SD", "SE", "SG", "SI", "SK", "SL", "SN", "SO", "SR", "SV", "SY", "TD", "TG", "TH",
    "TJ", "TM", "TN", "TR", "TZ", "UA", "UG", "US", "UY", "UZ", "VE", "VN", "YE", "ZA", "ZM",
    "ZW",
];

pub const COUNTRIES_ISO3: &[&str] = &[
    "AND", "ARE", "AFG", "ATG", "ALB", "ARM", "AGO", "ARG", "AUT", "AUS", "AZE", "BIH", "BRB",
    "BGD", "BEL", "BFA", "BGR", "BHR", "BDI", "BEN", "BRN", "BOL", "BRA", "BHS", "BTN", "BWA",
    "BLR", "BLZ", "CAN", "COD", "CAF", "COG", "CHE", "CIV", "CHL", "CMR", "CHN", "COL", "CRI",
    "CUB", "CPV", "CYP", "CZE", "DEU", "DJI", "DNK", "DMA", "DOM", "DZA", "ECU", "EST", "EGY",
    "ERI", "ESP", "ETH", "FIN", "FJI", "FRA", "GAB", "GBR", "GEO", "GHA", "GMB", "GIN", "GRC",
    "GTM", "GNB", "GUY", "HND", "HRV", "HTI", "HUN", "IDN", "IRL", "ISR", "IND", "IRQ", "IRN",
    "ISL", "ITA", "JAM", "JOR", "JPN", "KEN", "KGZ", "KHM", "KOR", "KWT", "KAZ", "LAO", "LBN",
    "LKA", "LBR", "LTU", "LUX", "LVA", "LBY", "MAR", "MDA", "MNE", "MDG", "MKD", "MLI", "MMR",
    "MNG", "MRT", "MLT", "MUS", "MDV", "MWI", "MEX", "MYS", "MOZ", "NAM", "NER", "NGA", "NIC",
    "NLD", "NOR", "NPL", "NZL", "OMN", "PAN", "PER", "PNG", "PHL", "PAK", "POL", "PRT", "PRY",
    "QAT", "ROU", "SRB", "RUS", "RWA", "SAU", "SDN", "SWE", "SGP", "SVN", "SVK", "SLE", "SEN",
    "SOM", "SUR", "SLV", "SYR", "TCD", "TGO", "THA", "TJK", "TKM", "TUN", "TUR", "TZA", "UKR",
    "UGA", "USA", "URY", "UZB", "VEN", "VNM", "YEM", "ZAF", "ZMB", "ZWE",
];

pub const COUNTRIES_NUMERIC: &[&str] = &[
    "020", "784", "004", "028", "008", "051", "024", "032", "040", "036", "031", "070", "052",
    "050", "056", "854", "100", "048", "108", "204", "096", "068", "076", "044", "064", "072",
    "112", "084", "124", "180", "140", "178", "756", "384", "152", "120", "156", "170", "188",
    "192", "132", "196", "203", "276", "262", "208", "212", "214", "012", "218", "233", "818",
    "232", "724", "231", "246", "242", "250", "266", "826", "268", "288", "270", "324", "300",
    "320", "624", "328", "340", "191", "332", "348", "360", "372", "376", "356", "368", "364",
    "352", "380", "388", "400", "392", "404", "417", "116", "410", "414", "398", "418", "422",
    "144", "430", "440", "442", "428", "434", "504", "498", "499", "450", "807", "466", "104",
    "496", "478", "470", "480", "462", "454", "484", "458", "508", "516", "562", "566", "558",
    "528", "578", "524", "554", "512", "591", "604", "598", "608", "586", "616", "620", "600",
    "634", "642", "688", "643", "646", "682", "729", "752", "702", "705", "703", "694", "686",
    "706", "740", "222", "760", "148", "768", "764", "762", "795", "788", "792", "834", "804",
    "800", "840", "858", "860", "862", "704", "887", "710", "894", "716",
];
