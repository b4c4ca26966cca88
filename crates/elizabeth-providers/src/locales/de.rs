use elizabeth_core::Locale;

use super::{
    AddressData, BusinessData, ByGender, DatetimeData, FoodData, Gendered, LocaleData,
    PersonalData, ScienceData, TextData,
};

pub static DATA: LocaleData = LocaleData {
    locale: Locale::De,
    text: TextData {
        alphabet_upper: &[
            "A", "Ä", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "Ö",
            "P", "Q", "R", "S", "ß", "T", "U", "Ü", "V", "W", "X", "Y", "Z",
        ],
        alphabet_lower: &[
            "a", "ä", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "ö",
            "p", "q", "r", "s", "ß", "t", "u", "ü", "v", "w", "x", "y", "z",
        ],
        level: &["kritisch", "schwer", "hoch", "mäßig", "niedrig", "minimal"],
        text: &[
            "Haskell verfügt über ein Typsystem mit Typinferenz und verzögerter Auswertung.",
            "Erlang ist eine nebenläufige, funktionale Programmiersprache.",
            "Rust garantiert Speichersicherheit ohne Garbage Collector.",
            "Python ist eine universelle, höhere Programmiersprache.",
            "Einfachheit ist die Voraussetzung für Zuverlässigkeit.",
            "Erst funktionieren lassen, dann richtig machen, dann schnell machen.",
            "Programme werden für Menschen geschrieben und nur nebenbei für Maschinen.",
            "Verfrühte Optimierung ist die Wurzel allen Übels.",
            "Jede hinreichend fortschrittliche Technologie ist von Magie nicht zu unterscheiden.",
            "Elixir ist eine dynamische, funktionale Sprache für skalierbare Anwendungen.",
        ],
        words: &[
            "Anker", "Apfel", "Baum", "Berg", "Brücke", "Dach", "Eimer", "Feder", "Fenster",
            "Garten", "Hafen", "Himmel", "Insel", "Kerze", "Kupfer", "Leiter", "Löffel",
            "Mantel", "Nadel", "Ofen", "Pinsel", "Quelle", "Regen", "Sattel", "Tunnel",
            "Ufer", "Vogel", "Wald", "Wiese", "Zelt",
        ],
        bad_words: &["Mist", "Verdammt", "Quatsch", "Blödsinn", "Mensch", "Herrje"],
        quotes: &[
            "Ich bin ein Berliner.",
            "Ich schau dir in die Augen, Kleines.",
            "Möge die Macht mit dir sein.",
            "Houston, wir haben ein Problem.",
            "Ich komme wieder.",
            "Nobody is perfect.",
            "Das Leben ist wie eine Schachtel Pralinen.",
            "Bis zur Unendlichkeit und noch viel weiter!",
        ],
        colors: &[
            "Rot", "Grün", "Blau", "Gelb", "Orange", "Lila", "Rosa", "Braun", "Schwarz",
            "Weiß", "Grau", "Türkis", "Magenta", "Beige", "Oliv", "Violett",
        ],
        answers: &["Ja", "Nein", "Vielleicht"],
    },
    address: AddressData {
        address_fmt: "{st_name} {st_num}",
        street_names: &[
            "Bahnhofstraße", "Hauptstraße", "Schulstraße", "Gartenstraße", "Dorfstraße",
            "Bergstraße", "Birkenweg", "Lindenstraße", "Kirchstraße", "Waldstraße",
            "Ringstraße", "Schillerstraße", "Goethestraße", "Mühlenweg", "Amselweg",
            "Jahnstraße", "Wiesenweg", "Feldstraße", "Rosenstraße", "Friedhofstraße",
        ],
        street_suffixes: &["Straße", "Weg", "Allee", "Gasse", "Platz", "Ring", "Ufer"],
        states: &[
            "Baden-Württemberg", "Bayern", "Berlin", "Brandenburg", "Bremen", "Hamburg",
            "Hessen", "Mecklenburg-Vorpommern", "Niedersachsen", "Nordrhein-Westfalen",
            "Rheinland-Pfalz", "Saarland", "Sachsen", "Sachsen-Anhalt", "Schleswig-Holstein",
            "Thüringen",
        ],
        state_abbrs: &[
            "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN", "ST",
            "SH", "TH",
        ],
        countries: &[
            "Ägypten", "Argentinien", "Australien", "Belgien", "Brasilien", "China",
            "Dänemark", "Deutschland", "Finnland", "Frankreich", "Griechenland", "Indien",
            "Irland", "Italien", "Japan", "Kanada", "Mexiko", "Niederlande", "Norwegen",
            "Österreich", "Polen", "Portugal", "Russland", "Schweden", "Schweiz", "Spanien",
            "Türkei", "Ukraine", "Vereinigte Staaten", "Vereinigtes Königreich",
        ],
        cities: &[
            "Aachen", "Augsburg", "Berlin", "Bielefeld", "Bochum", "Bonn", "Braunschweig",
            "Bremen", "Chemnitz", "Dortmund", "Dresden", "Duisburg", "Düsseldorf", "Erfurt",
            "Essen", "Frankfurt am Main", "Freiburg", "Hamburg", "Hannover", "Karlsruhe",
            "Kiel", "Köln", "Leipzig", "Lübeck", "Magdeburg", "Mainz", "Mannheim", "München",
            "Münster", "Nürnberg", "Potsdam", "Rostock", "Stuttgart", "Wiesbaden",
        ],
        continents: &[
            "Afrika", "Antarktika", "Asien", "Australien", "Europa", "Nordamerika",
            "Südamerika",
        ],
        postal_code_fmt: "#####",
    },
    business: BusinessData {
        company_types: &[
            "Aktiengesellschaft",
            "Gesellschaft mit beschränkter Haftung",
            "Kommanditgesellschaft",
            "Offene Handelsgesellschaft",
            "Eingetragener Kaufmann",
            "Unternehmergesellschaft",
        ],
        company_type_abbrs: &["AG", "GmbH", "KG", "OHG", "e.K.", "UG"],
        companies: &[
            "Adler", "Bergmann", "Blaustein", "Eichwald", "Falkenberg", "Goldbach",
            "Hansewerk", "Hoffmann", "Kranich", "Lindner", "Morgenrot", "Nordlicht",
            "Rheinstahl", "Schwarzwald", "Sonnenberg", "Stahlwerk", "Weber", "Zeitgeist",
        ],
        currency_symbol: Some("€"),
    },
    personal: PersonalData {
        names: Gendered {
            female: &[
                "Anna", "Emma", "Hannah", "Lea", "Lena", "Laura", "Julia", "Sophie", "Marie",
                "Katharina", "Sarah", "Lisa", "Johanna", "Clara", "Greta", "Ida", "Frieda",
                "Mia", "Paula", "Charlotte",
            ],
            male: &[
                "Alexander", "Ben", "David", "Elias", "Felix", "Finn", "Jonas", "Leon", "Lukas",
                "Maximilian", "Moritz", "Niklas", "Noah", "Paul", "Philipp", "Simon", "Tim",
                "Tobias", "Jan", "Karl",
            ],
        },
        surnames: ByGender::Shared(&[
            "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
            "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
            "Schröder", "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann",
            "Hartmann", "Lange",
        ]),
        typical_titles: Gendered {
            female: &["Frau"],
            male: &["Herr"],
        },
        academic_titles: Gendered {
            female: &["Dr.", "Prof.", "Dr. med.", "Dipl.-Ing."],
            male: &["Dr.", "Prof.", "Dr. med.", "Dipl.-Ing."],
        },
        genders: &["Männlich", "Weiblich", "Divers"],
        sexuality: &["Heterosexualität", "Homosexualität", "Bisexualität", "Asexualität"],
        occupations: &[
            "Apotheker", "Architekt", "Arzt", "Bäcker", "Biologe", "Buchhalter", "Chemiker",
            "Dolmetscher", "Elektriker", "Feuerwehrmann", "Fotograf", "Ingenieur",
            "Journalist", "Koch", "Lehrer", "Mechaniker", "Musiker", "Pilot", "Programmierer",
            "Psychologe", "Rechtsanwalt", "Schreiner", "Tierarzt", "Zahnarzt",
        ],
        political_views: &[
            "Apathisch", "Konservativ", "Kommunistisch", "Anarchistisch", "Liberal",
            "Sozialistisch", "Gemäßigt",
        ],
        worldviews: &[
            "Agnostizismus", "Atheismus", "Buddhismus", "Christentum", "Hinduismus", "Islam",
            "Judentum", "Pantheismus", "Säkularer Humanismus",
        ],
        views_on: &["Negativ", "Neutral", "Positiv", "Kompromissbereit"],
        nationalities: ByGender::Shared(&[
            "Deutsch", "Österreichisch", "Schweizerisch", "Französisch", "Italienisch",
            "Spanisch", "Polnisch", "Niederländisch", "Dänisch", "Schwedisch", "Russisch",
            "Türkisch", "Griechisch", "Britisch", "Amerikanisch", "Japanisch", "Chinesisch",
        ]),
        universities: &[
            "Ludwig-Maximilians-Universität München",
            "Technische Universität München",
            "Ruprecht-Karls-Universität Heidelberg",
            "Humboldt-Universität zu Berlin",
            "Freie Universität Berlin",
            "RWTH Aachen",
            "Universität Hamburg",
            "Universität zu Köln",
            "Georg-August-Universität Göttingen",
            "Karlsruher Institut für Technologie",
            "Universität Leipzig",
            "Technische Universität Dresden",
        ],
        academic_degrees: &["Bachelor", "Master", "Diplom", "Promotion"],
        languages: &[
            "Arabisch", "Chinesisch", "Dänisch", "Deutsch", "Englisch", "Französisch",
            "Griechisch", "Italienisch", "Japanisch", "Niederländisch", "Polnisch",
            "Portugiesisch", "Russisch", "Schwedisch", "Spanisch", "Türkisch",
        ],
        favorite_movies: &[
            "Das Boot",
            "Das Leben der Anderen",
            "Der Himmel über Berlin",
            "Good Bye, Lenin!",
            "Lola rennt",
            "Metropolis",
            "Nosferatu",
            "Die Blechtrommel",
            "Im Westen nichts Neues",
            "Toni Erdmann",
        ],
        telephone_fmts: &["+49-###-#######", "0###-#######", "+49 ### ########"],
    },
    food: FoodData {
        vegetables: &[
            "Artischocke", "Aubergine", "Blumenkohl", "Bohne", "Brokkoli", "Erbse", "Gurke",
            "Grünkohl", "Karotte", "Kartoffel", "Kohlrabi", "Kürbis", "Lauch", "Paprika",
            "Radieschen", "Rosenkohl", "Rote Bete", "Sellerie", "Spargel", "Spinat",
            "Tomate", "Zucchini", "Zwiebel",
        ],
        fruits: &[
            "Ananas", "Apfel", "Aprikose", "Banane", "Birne", "Brombeere", "Erdbeere",
            "Heidelbeere", "Himbeere", "Johannisbeere", "Kirsche", "Kiwi", "Mango",
            "Melone", "Orange", "Pfirsich", "Pflaume", "Stachelbeere", "Traube", "Zitrone",
        ],
        dishes: &[
            "Bratwurst", "Currywurst", "Eintopf", "Flammkuchen", "Kartoffelsalat",
            "Käsespätzle", "Königsberger Klopse", "Labskaus", "Maultaschen", "Rinderroulade",
            "Sauerbraten", "Schnitzel", "Schweinshaxe", "Weißwurst", "Zwiebelkuchen",
        ],
        spices: &[
            "Anis", "Basilikum", "Dill", "Ingwer", "Kardamom", "Koriander", "Kreuzkümmel",
            "Kümmel", "Lorbeer", "Majoran", "Muskatnuss", "Nelke", "Oregano", "Paprika",
            "Petersilie", "Pfeffer", "Rosmarin", "Safran", "Salbei", "Thymian", "Vanille",
            "Zimt",
        ],
        drinks: &[
            "Apfelwein", "Bier", "Doppelbock", "Eierlikör", "Glühwein", "Jägermeister",
            "Kirschwasser", "Korn", "Kölsch", "Obstler", "Pils", "Radler", "Riesling",
            "Sekt", "Weißbier", "Weizenbier",
        ],
    },
    science: ScienceData {
        chemical_elements: &[
            "Wasserstoff|H|1",
            "Helium|He|2",
            "Lithium|Li|3",
            "Beryllium|Be|4",
            "Bor|B|5",
            "Kohlenstoff|C|6",
            "Stickstoff|N|7",
            "Sauerstoff|O|8",
            "Fluor|F|9",
            "Neon|Ne|10",
            "Natrium|Na|11",
            "Magnesium|Mg|12",
            "Aluminium|Al|13",
            "Silicium|Si|14",
            "Phosphor|P|15",
            "Schwefel|S|16",
            "Chlor|Cl|17",
            "Argon|Ar|18",
            "Kalium|K|19",
            "Calcium|Ca|20",
            "Eisen|Fe|26",
            "Kupfer|Cu|29",
            "Zink|Zn|30",
            "Silber|Ag|47",
            "Zinn|Sn|50",
            "Platin|Pt|78",
            "Gold|Au|79",
            "Quecksilber|Hg|80",
            "Blei|Pb|82",
            "Uran|U|92",
        ],
        articles: &[
            "https://de.wikipedia.org/wiki/Schwarzes_Loch",
            "https://de.wikipedia.org/wiki/Quantenverschränkung",
            "https://de.wikipedia.org/wiki/Photosynthese",
            "https://de.wikipedia.org/wiki/Allgemeine_Relativitätstheorie",
            "https://de.wikipedia.org/wiki/Desoxyribonukleinsäure",
            "https://de.wikipedia.org/wiki/Plattentektonik",
            "https://de.wikipedia.org/wiki/Higgs-Boson",
            "https://de.wikipedia.org/wiki/Turingmaschine",
        ],
    },
    datetime: DatetimeData {
        days: &[
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ],
        day_abbrs: &["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
        months: &[
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ],
        month_abbrs: &[
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.",
            "Nov.", "Dez.",
        ],
        periodicity: &[
            "Nie", "Einmal", "Täglich", "Wöchentlich", "Monatlich", "Jährlich", "Oft",
            "Selten",
        ],
    },
};
