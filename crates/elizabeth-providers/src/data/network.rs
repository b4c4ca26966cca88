pub const EMAIL_DOMAINS: &[&str] = &[
    "@gmail.com",
    "@yandex.com",
    "@yahoo.com",
    "@live.com",
    "@outlook.com",
];

pub const DOMAINS: &[&str] = &[
    ".com", ".net", ".org", ".io", ".dev", ".info", ".biz", ".app", ".co", ".me", ".tech",
    ".online", ".site", ".world",
];

pub const HTTP_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "CONNECT", "HEAD",
];

pub const HTTP_STATUS_CODES: &[&str] = &[
    "100 Continue",
    "101 Switching Protocols",
    "102 Processing",
    "103 Early Hints",
    "200 OK",
    "201 Created",
    "202 Accepted",
    "203 Non-Authoritative Information",
    "204 No Content",
    "205 Reset Content",
    "206 Partial Content",
    "207 Multi-Status",
    "208 Already Reported",
    "226 IM Used",
    "300 Multiple Choices",
    "301 Moved Permanently",
    "302 Found",
    "303 See Other",
    "304 Not Modified",
    "305 Use Proxy",
    "307 Temporary Redirect",
    "308 Permanent Redirect",
    "400 Bad Request",
    "401 Unauthorized",
    "402 Payment Required",
    "403 Forbidden",
    "404 Not Found",
    "405 Method Not Allowed",
    "406 Not Acceptable",
    "407 Proxy Authentication Required",
    "408 Request Timeout",
    "409 Conflict",
    "410 Gone",
    "411 Length Required",
    "412 Precondition Failed",
    "413 Payload Too Large",
    "414 URI Too Long",
    "415 Unsupported Media Type",
    "416 Range Not Satisfiable",
    "417 Expectation Failed",
    "418 I'm a teapot",
    "421 Misdirected Request",
    "422 Unprocessable Entity",
    "423 Locked",
    "424 Failed Dependency",
    "426 Upgrade Required",
    "428 Precondition Required",
    "429 Too Many Requests",
    "431 Request Header Fields Too Large",
    "451 Unavailable For Legal Reasons",
    "500 Internal Server Error",
    "501 Not Implemented",
    "502 Bad Gateway",
    "503 Service Unavailable",
    "504 Gateway Timeout",
    "505 HTTP Version Not Supported",
    "506 Variant Also Negotiates",
    "507 Insufficient Storage",
    "508 Loop Detected",
    "510 Not Extended",
    "511 Network Authentication Required",
];

pub const EMOJI: &[&str] = &[
    ":+1:", ":-1:", ":100:", ":1234:", ":8ball:", ":a:", ":ab:", ":abc:", ":abcd:",
    ":accept:", ":aerial_tramway:", ":airplane:", ":alarm_clock:", ":alien:", ":ambulance:",
    ":anchor:", ":angel:", ":anger:", ":angry:", ":anguished:", ":ant:", ":apple:",
    ":aquarius:", ":aries:", ":art:", ":astonished:", ":athletic_shoe:", ":atm:", ":b:",
    ":baby:", ":bamboo:", ":banana:", ":bank:", ":bar_chart:", ":barber:", ":baseball:",
    ":basketball:", ":bath:", ":battery:", ":bear:", ":bee:", ":beer:", ":beetle:",
    ":bell:", ":bento:", ":bicyclist:", ":bike:", ":bird:", ":birthday:", ":blossom:",
    ":blowfish:", ":blue_heart:", ":boat:", ":bomb:", ":book:", ":books:", ":boom:",
    ":bouquet:", ":bow:", ":bread:", ":bug:", ":bulb:", ":bus:", ":cactus:", ":cake:",
    ":camel:", ":camera:", ":candy:", ":car:", ":cat:", ":cherries:", ":chicken:",
    ":christmas_tree:", ":clap:", ":coffee:", ":computer:", ":cookie:", ":cow:", ":crab:",
    ":crown:", ":cyclone:", ":dancer:", ":dog:", ":dolphin:", ":dragon:", ":earth_africa:",
    ":elephant:", ":fire:", ":fish:", ":four_leaf_clover:", ":frog:", ":gem:", ":ghost:",
    ":gift:", ":guitar:", ":hamburger:", ":heart:", ":honeybee:", ":house:", ":koala:",
    ":lemon:", ":lion_face:", ":monkey:", ":mushroom:", ":octopus:", ":panda_face:",
    ":penguin:", ":pizza:", ":rabbit:", ":rainbow:", ":rocket:", ":rose:", ":santa:",
    ":snail:", ":snowman:", ":sparkles:", ":star:", ":sunflower:", ":taco:", ":tiger:",
    ":tomato:", ":trophy:", ":turtle:", ":umbrella:", ":unicorn:", ":watermelon:",
    ":whale:", ":zap:",
];

pub const HASHTAGS_GENERAL: &[&str] = &[
    "#love", "#sky", "#nice", "#sport", "#summer", "#photooftheday", "#instagood", "#tbt",
    "#happy", "#cute", "#followme", "#beautiful", "#me", "#selfie", "#picoftheday",
    "#fun", "#smile", "#friends", "#like4like", "#instadaily",
];
pub const HASHTAGS_GIRLS: &[&str] = &[
    "#girl", "#girls", "#girlfriend", "#girly", "#girlpower", "#girlsnight",
    "#prettygirl", "#girlsday", "#girlswholift",
];
pub const HASHTAGS_BOYS: &[&str] = &[
    "#boy", "#boys", "#boyfriend", "#fun", "#cute", "#boyband", "#boyish", "#boyslife",
];
pub const HASHTAGS_LOVE: &[&str] = &[
    "#love", "#romantic", "#couple", "#relationship", "#together", "#lovers",
    "#happiness", "#inlove", "#forever",
];
pub const HASHTAGS_FRIENDS: &[&str] = &[
    "#friends", "#bff", "#bestfriends", "#friendship", "#besties", "#squad", "#crew",
    "#fun", "#together",
];
pub const HASHTAGS_FAMILY: &[&str] = &[
    "#family", "#familytime", "#home", "#parents", "#mom", "#dad", "#kids",
    "#brothers", "#sisters",
];
pub const HASHTAGS_NATURE: &[&str] = &[
    "#nature", "#tree", "#sky", "#sun", "#sunset", "#sunrise", "#flowers", "#mountains",
    "#naturelovers", "#landscape", "#outdoors",
];
pub const HASHTAGS_TRAVEL: &[&str] = &[
    "#travel", "#traveling", "#vacation", "#trip", "#holiday", "#wanderlust", "#explore",
    "#adventure", "#roadtrip", "#tourist",
];
pub const HASHTAGS_CARS: &[&str] = &[
    "#cars", "#car", "#ride", "#drive", "#tuning", "#carporn", "#speed", "#road",
    "#luxury", "#classiccar", "#supercar",
];
pub const HASHTAGS_SPORT: &[&str] = &[
    "#sport", "#sports", "#fitness", "#gym", "#workout", "#training", "#running",
    "#football", "#basketball", "#healthy",
];
pub const HASHTAGS_TUMBLR: &[&str] = &[
    "#tumblr", "#tumblrgirl", "#tumblrboy", "#tumblrpic", "#tumblrquote", "#vintage",
    "#indie", "#hipster", "#aesthetic",
];

pub const SUBREDDITS: &[&str] = &[
    "/r/AskReddit",
    "/r/aww",
    "/r/books",
    "/r/DIY",
    "/r/Documentaries",
    "/r/EarthPorn",
    "/r/explainlikeimfive",
    "/r/food",
    "/r/funny",
    "/r/gadgets",
    "/r/gaming",
    "/r/GetMotivated",
    "/r/history",
    "/r/IAmA",
    "/r/InternetIsBeautiful",
    "/r/LifeProTips",
    "/r/listentothis",
    "/r/movies",
    "/r/Music",
    "/r/news",
    "/r/nottheonion",
    "/r/oldschoolcool",
    "/r/philosophy",
    "/r/photoshopbattles",
    "/r/programming",
    "/r/rust",
    "/r/science",
    "/r/space",
    "/r/sports",
    "/r/television",
    "/r/todayilearned",
    "/r/UpliftingNews",
    "/r/videos",
    "/r/worldnews",
];

pub const SUBREDDITS_NSFW: &[&str] = &[
    "/r/nsfw",
    "/r/nsfw2",
    "/r/NSFW_GIF",
    "/r/nsfw_gifs",
    "/r/NSFW_nospam",
    "/r/NSFW_Wallpapers",
    "/r/nsfwcosplay",
    "/r/NSFWFunny",
];

pub const STOCK_IMAGE_CATEGORIES: &[&str] = &[
    "buildings",
    "food",
    "nature",
    "people",
    "technology",
    "objects",
];

pub const IMAGE_KEYWORDS: &[&str] = &[
    "cat", "girl", "boy", "beauty", "nature", "woman", "man", "tech", "space",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    "curl/8.4.0",
];
