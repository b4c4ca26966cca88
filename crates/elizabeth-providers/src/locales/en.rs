use elizabeth_core::Locale;

use super::{
    AddressData, BusinessData, ByGender, DatetimeData, FoodData, Gendered, LocaleData,
    PersonalData, ScienceData, TextData,
};

pub static DATA: LocaleData = LocaleData {
    locale: Locale::En,
    text: TextData {
        alphabet_upper: &[
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
            "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
        ],
        alphabet_lower: &[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ],
        level: &["critical", "severe", "high", "moderate", "low", "minimal"],
        text: &[
            "Haskell features a type system with type inference and lazy evaluation.",
            "Erlang is a general-purpose, concurrent, functional programming language.",
            "Rust guarantees memory safety without a garbage collector.",
            "Python is a widely used high-level programming language for general-purpose programming.",
            "The sooner you start to code, the longer the program will take.",
            "Any sufficiently advanced technology is indistinguishable from magic.",
            "Make it work, make it right, make it fast.",
            "Simplicity is prerequisite for reliability.",
            "Programs must be written for people to read, and only incidentally for machines to execute.",
            "Lisp is worth learning for the profound enlightenment experience you will have when you finally get it.",
            "Elixir is a dynamic, functional language designed for building scalable applications.",
            "Premature optimization is the root of all evil.",
        ],
        words: &[
            "anchor", "basket", "candle", "dolphin", "engine", "forest", "garden", "harbor",
            "island", "jacket", "kernel", "ladder", "meadow", "needle", "orange", "pencil",
            "quartz", "river", "saddle", "tunnel", "umbrella", "valley", "window", "yellow",
            "zephyr", "bridge", "copper", "desert", "falcon", "glacier",
        ],
        bad_words: &[
            "damn", "heck", "blast", "bloody", "crap", "darn", "shoot", "bugger", "rubbish",
        ],
        quotes: &[
            "Bond... James Bond.",
            "Here's looking at you, kid.",
            "May the Force be with you.",
            "There's no place like home.",
            "I'll be back.",
            "Houston, we have a problem.",
            "Elementary, my dear Watson.",
            "You're gonna need a bigger boat.",
            "Life is like a box of chocolates.",
            "To infinity and beyond!",
        ],
        colors: &[
            "Red", "Green", "Blue", "Yellow", "Orange", "Purple", "Pink", "Brown", "Black",
            "White", "Gray", "Cyan", "Magenta", "Teal", "Maroon", "Navy", "Olive", "Violet",
        ],
        answers: &["Yes", "No", "Maybe"],
    },
    address: AddressData {
        address_fmt: "{st_num} {st_name} {st_sfx}",
        street_names: &[
            "Abbey", "Acorn", "Albany", "Ashford", "Bayview", "Beacon", "Birch", "Cedar",
            "Chestnut", "Clifton", "Dover", "Elm", "Fairview", "Glenwood", "Hawthorne",
            "Highland", "Lakeview", "Laurel", "Maple", "Meadow", "Oak", "Park", "Pine",
            "Ridge", "Riverside", "Spring", "Sunset", "Walnut", "Willow", "Windsor",
        ],
        street_suffixes: &[
            "Alley", "Avenue", "Boulevard", "Court", "Crescent", "Drive", "Lane", "Parkway",
            "Place", "Road", "Square", "Street", "Terrace", "Way",
        ],
        states: &[
            "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
            "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
            "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland",
            "Massachusetts", "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana",
            "Nebraska", "Nevada", "New Hampshire", "New Jersey", "New Mexico", "New York",
            "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania",
            "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah",
            "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
        ],
        state_abbrs: &[
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
            "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
            "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN",
            "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
        ],
        countries: &[
            "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile",
            "China", "Denmark", "Egypt", "Finland", "France", "Germany", "Greece", "India",
            "Ireland", "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand",
            "Norway", "Poland", "Portugal", "Russia", "South Africa", "Spain", "Sweden",
            "Switzerland", "Turkey", "Ukraine", "United Kingdom", "United States",
        ],
        cities: &[
            "Albuquerque", "Atlanta", "Austin", "Baltimore", "Boston", "Charlotte", "Chicago",
            "Cleveland", "Columbus", "Dallas", "Denver", "Detroit", "El Paso", "Houston",
            "Indianapolis", "Jacksonville", "Kansas City", "Las Vegas", "Los Angeles",
            "Memphis", "Miami", "Milwaukee", "Minneapolis", "Nashville", "New Orleans",
            "New York", "Oakland", "Philadelphia", "Phoenix", "Portland", "San Antonio",
            "San Diego", "San Francisco", "Seattle", "Tucson", "Washington",
        ],
        continents: &[
            "Africa", "Antarctica", "Asia", "Australia", "Europe", "North America",
            "South America",
        ],
        postal_code_fmt: "#####",
    },
    business: BusinessData {
        company_types: &[
            "Corporation",
            "Incorporated",
            "Limited",
            "Limited Liability Company",
            "Limited Partnership",
            "Public Limited Company",
            "Sole Proprietorship",
        ],
        company_type_abbrs: &["Corp.", "Inc.", "Ltd.", "LLC", "LP", "PLC", "Co."],
        companies: &[
            "Acme", "Apex", "Bluewave", "Brightline", "Cobalt", "Copperfield", "Driftwood",
            "Evergreen", "Fairmont", "Goldcrest", "Harborview", "Ironclad", "Keystone",
            "Lighthouse", "Meridian", "Northwind", "Oakridge", "Pinnacle", "Quantum",
            "Redwood", "Silverline", "Summit", "Trident", "Vanguard", "Westbrook",
        ],
        currency_symbol: Some("$"),
    },
    personal: PersonalData {
        names: Gendered {
            female: &[
                "Abigail", "Alice", "Amelia", "Ava", "Charlotte", "Chloe", "Clara", "Eleanor",
                "Elizabeth", "Ella", "Emily", "Emma", "Grace", "Hannah", "Harper", "Isabella",
                "Lily", "Lucy", "Madison", "Mia", "Natalie", "Olivia", "Scarlett", "Sophia",
                "Victoria", "Zoe",
            ],
            male: &[
                "Aaron", "Alexander", "Andrew", "Benjamin", "Caleb", "Daniel", "David", "Ethan",
                "Gabriel", "Henry", "Isaac", "Jack", "Jacob", "James", "John", "Joseph",
                "Liam", "Logan", "Lucas", "Mason", "Matthew", "Michael", "Noah", "Oliver",
                "Samuel", "William",
            ],
        },
        surnames: ByGender::Shared(&[
            "Adams", "Allen", "Anderson", "Baker", "Brown", "Campbell", "Carter", "Clark",
            "Collins", "Davis", "Edwards", "Evans", "Garcia", "Green", "Hall", "Harris",
            "Hill", "Jackson", "Johnson", "Jones", "King", "Lee", "Lewis", "Martin", "Miller",
            "Mitchell", "Moore", "Nelson", "Parker", "Roberts", "Robinson", "Scott", "Smith",
            "Taylor", "Thomas", "Thompson", "Turner", "Walker", "White", "Williams", "Wilson",
            "Wright", "Young",
        ]),
        typical_titles: Gendered {
            female: &["Mrs.", "Ms.", "Miss"],
            male: &["Mr.", "Sir"],
        },
        academic_titles: Gendered {
            female: &["PhD", "Dr.", "Prof.", "MD", "MBA"],
            male: &["PhD", "Dr.", "Prof.", "MD", "MBA"],
        },
        genders: &["Male", "Female", "Other"],
        sexuality: &["Heterosexuality", "Homosexuality", "Bisexuality", "Asexuality", "Pansexuality"],
        occupations: &[
            "Accountant", "Architect", "Baker", "Biologist", "Carpenter", "Chef", "Chemist",
            "Civil Engineer", "Dentist", "Designer", "Economist", "Electrician", "Firefighter",
            "Geologist", "Journalist", "Lawyer", "Librarian", "Mechanic", "Musician", "Nurse",
            "Pharmacist", "Photographer", "Pilot", "Plumber", "Programmer", "Psychologist",
            "Surgeon", "Teacher", "Translator", "Veterinarian",
        ],
        political_views: &[
            "Apathetic", "Conservative", "Communist", "Anarchist", "Liberal", "Libertarian",
            "Socialist", "Moderate",
        ],
        worldviews: &[
            "Agnosticism", "Atheism", "Buddhism", "Christianity", "Deism", "Hinduism",
            "Islam", "Judaism", "Pantheism", "Secular humanism", "Taoism",
        ],
        views_on: &["Negative", "Neutral", "Positive", "Compromisable"],
        nationalities: ByGender::Shared(&[
            "American", "Argentine", "Australian", "Austrian", "Belgian", "Brazilian",
            "British", "Canadian", "Chilean", "Chinese", "Danish", "Dutch", "Egyptian",
            "Finnish", "French", "German", "Greek", "Indian", "Irish", "Italian", "Japanese",
            "Kenyan", "Mexican", "Norwegian", "Polish", "Portuguese", "Russian", "Spanish",
            "Swedish", "Swiss", "Turkish", "Ukrainian",
        ]),
        universities: &[
            "Harvard University",
            "Massachusetts Institute of Technology (MIT)",
            "Stanford University",
            "University of California, Berkeley",
            "California Institute of Technology (Caltech)",
            "Princeton University",
            "Yale University",
            "Columbia University",
            "University of Chicago",
            "Cornell University",
            "University of Michigan",
            "Carnegie Mellon University",
            "University of Oxford",
            "University of Cambridge",
        ],
        academic_degrees: &["Bachelor", "Master", "PhD"],
        languages: &[
            "Arabic", "Bengali", "Chinese", "Dutch", "English", "French", "German", "Greek",
            "Hindi", "Italian", "Japanese", "Korean", "Polish", "Portuguese", "Russian",
            "Spanish", "Swedish", "Turkish", "Ukrainian",
        ],
        favorite_movies: &[
            "Casablanca",
            "Citizen Kane",
            "Forrest Gump",
            "Jaws",
            "Pulp Fiction",
            "Star Wars",
            "The Godfather",
            "The Matrix",
            "The Shawshank Redemption",
            "The Wizard of Oz",
            "Titanic",
            "Vertigo",
        ],
        telephone_fmts: &["+1-(###)-###-####", "(###)-###-####", "1-###-###-####"],
    },
    food: FoodData {
        vegetables: &[
            "Artichoke", "Asparagus", "Beetroot", "Broccoli", "Cabbage", "Carrot",
            "Cauliflower", "Celery", "Cucumber", "Eggplant", "Garlic", "Kale", "Leek",
            "Lettuce", "Onion", "Parsnip", "Pea", "Potato", "Pumpkin", "Radish", "Spinach",
            "Turnip", "Zucchini",
        ],
        fruits: &[
            "Apple", "Apricot", "Banana", "Blackberry", "Blueberry", "Cherry", "Cranberry",
            "Grape", "Grapefruit", "Kiwi", "Lemon", "Lime", "Mango", "Melon", "Orange",
            "Papaya", "Peach", "Pear", "Pineapple", "Plum", "Raspberry", "Strawberry",
            "Watermelon",
        ],
        dishes: &[
            "Apple pie", "Buffalo wings", "Burrito", "Caesar salad", "Cheeseburger",
            "Chicken pot pie", "Clam chowder", "Cobb salad", "Corn dog", "Fried chicken",
            "Hot dog", "Lobster roll", "Mac and cheese", "Meatloaf", "Pancakes",
            "Pot roast", "Pulled pork", "Reuben sandwich", "Shrimp and grits",
        ],
        spices: &[
            "Allspice", "Anise", "Basil", "Bay leaf", "Cardamom", "Cayenne", "Cinnamon",
            "Cloves", "Coriander", "Cumin", "Dill", "Ginger", "Mint", "Nutmeg", "Oregano",
            "Paprika", "Parsley", "Rosemary", "Saffron", "Sage", "Thyme", "Turmeric",
            "Vanilla",
        ],
        drinks: &[
            "Absinthe", "Bourbon", "Brandy", "Cider", "Cognac", "Gin", "Lager", "Mead",
            "Porter", "Rum", "Sake", "Scotch", "Stout", "Tequila", "Vermouth", "Vodka",
            "Whiskey", "Wine",
        ],
    },
    science: ScienceData {
        chemical_elements: &[
            "Hydrogen|H|1",
            "Helium|He|2",
            "Lithium|Li|3",
            "Beryllium|Be|4",
            "Boron|B|5",
            "Carbon|C|6",
            "Nitrogen|N|7",
            "Oxygen|O|8",
            "Fluorine|F|9",
            "Neon|Ne|10",
            "Sodium|Na|11",
            "Magnesium|Mg|12",
            "Aluminium|Al|13",
            "Silicon|Si|14",
            "Phosphorus|P|15",
            "Sulfur|S|16",
            "Chlorine|Cl|17",
            "Argon|Ar|18",
            "Potassium|K|19",
            "Calcium|Ca|20",
            "Iron|Fe|26",
            "Copper|Cu|29",
            "Zinc|Zn|30",
            "Silver|Ag|47",
            "Tin|Sn|50",
            "Platinum|Pt|78",
            "Gold|Au|79",
            "Mercury|Hg|80",
            "Lead|Pb|82",
            "Uranium|U|92",
        ],
        articles: &[
            "https://en.wikipedia.org/wiki/Black_hole",
            "https://en.wikipedia.org/wiki/Quantum_entanglement",
            "https://en.wikipedia.org/wiki/Photosynthesis",
            "https://en.wikipedia.org/wiki/General_relativity",
            "https://en.wikipedia.org/wiki/DNA",
            "https://en.wikipedia.org/wiki/Plate_tectonics",
            "https://en.wikipedia.org/wiki/Higgs_boson",
            "https://en.wikipedia.org/wiki/Turing_machine",
            "https://en.wikipedia.org/wiki/Natural_selection",
            "https://en.wikipedia.org/wiki/Periodic_table",
        ],
    },
    datetime: DatetimeData {
        days: &[
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        day_abbrs: &["Mon.", "Tue.", "Wed.", "Thu.", "Fri.", "Sat.", "Sun."],
        months: &[
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        month_abbrs: &[
            "Jan.", "Feb.", "Mar.", "Apr.", "May.", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.",
            "Nov.", "Dec.",
        ],
        periodicity: &[
            "Never", "Once", "Daily", "Weekly", "Monthly", "Yearly", "Often", "Rarely",
        ],
    },
};
