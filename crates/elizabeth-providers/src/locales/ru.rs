use elizabeth_core::Locale;

use super::{
    AddressData, BusinessData, ByGender, DatetimeData, FoodData, Gendered, LocaleData,
    PersonalData, ScienceData, TextData,
};

pub static DATA: LocaleData = LocaleData {
    locale: Locale::Ru,
    text: TextData {
        alphabet_upper: &[
            "А", "Б", "В", "Г", "Д", "Е", "Ё", "Ж", "З", "И", "Й", "К", "Л", "М", "Н", "О", "П",
            "Р", "С", "Т", "У", "Ф", "Х", "Ц", "Ч", "Ш", "Щ", "Ъ", "Ы", "Ь", "Э", "Ю", "Я",
        ],
        alphabet_lower: &[
            "а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и", "й", "к", "л", "м", "н", "о", "п",
            "р", "с", "т", "у", "ф", "х", "ц", "ч", "ш", "щ", "ъ", "ы", "ь", "э", "ю", "я",
        ],
        level: &["критический", "серьёзный", "высокий", "умеренный", "низкий", "минимальный"],
        text: &[
            "Haskell обладает системой типов с выводом типов и ленивыми вычислениями.",
            "Erlang — функциональный язык программирования для параллельных систем.",
            "Rust гарантирует безопасность памяти без сборщика мусора.",
            "Python — высокоуровневый язык программирования общего назначения.",
            "Простота — необходимое условие надёжности.",
            "Сначала сделай, чтобы работало, потом правильно, потом быстро.",
            "Программы пишутся для людей и лишь попутно для машин.",
            "Преждевременная оптимизация — корень всех зол.",
            "Любая достаточно развитая технология неотличима от магии.",
            "Elixir — динамический функциональный язык для масштабируемых приложений.",
        ],
        words: &[
            "берёза", "ветер", "гора", "дорога", "ёлка", "звезда", "камень", "лодка", "мост",
            "небо", "облако", "песок", "река", "сад", "солнце", "трава", "утро", "фонарь",
            "хлеб", "цветок", "чайник", "школа", "яблоко", "окно", "зима", "лето", "весна",
            "осень",
        ],
        bad_words: &["блин", "ёлки-палки", "чёрт", "зараза", "фигня", "ерунда"],
        quotes: &[
            "Красота спасёт мир.",
            "Рукописи не горят.",
            "Счастливые часов не наблюдают.",
            "Поехали!",
            "Я вернусь.",
            "Да пребудет с тобой Сила.",
            "Хьюстон, у нас проблема.",
            "Жизнь как коробка шоколадных конфет.",
        ],
        colors: &[
            "Красный", "Зелёный", "Синий", "Жёлтый", "Оранжевый", "Фиолетовый", "Розовый",
            "Коричневый", "Чёрный", "Белый", "Серый", "Голубой", "Бирюзовый", "Бежевый",
        ],
        answers: &["Да", "Нет", "Возможно"],
    },
    address: AddressData {
        address_fmt: "{st_sfx} {st_name}, д. {st_num}",
        street_names: &[
            "Ленина", "Пушкина", "Гагарина", "Советская", "Мира", "Садовая", "Лесная",
            "Школьная", "Молодёжная", "Набережная", "Центральная", "Новая", "Заречная",
            "Полевая", "Луговая", "Победы", "Кирова", "Чехова", "Лермонтова", "Гоголя",
        ],
        street_suffixes: &["ул.", "пр-т", "пер.", "ш.", "б-р", "наб."],
        states: &[
            "Московская область", "Ленинградская область", "Новосибирская область",
            "Свердловская область", "Краснодарский край", "Республика Татарстан",
            "Нижегородская область", "Самарская область", "Ростовская область",
            "Республика Башкортостан", "Красноярский край", "Пермский край",
            "Воронежская область", "Волгоградская область", "Приморский край",
        ],
        state_abbrs: &[
            "RU-MOS", "RU-LEN", "RU-NVS", "RU-SVE", "RU-KDA", "RU-TA", "RU-NIZ", "RU-SAM",
            "RU-ROS", "RU-BA", "RU-KYA", "RU-PER", "RU-VOR", "RU-VGG", "RU-PRI",
        ],
        countries: &[
            "Австралия", "Австрия", "Аргентина", "Бельгия", "Бразилия", "Великобритания",
            "Германия", "Греция", "Дания", "Египет", "Индия", "Ирландия", "Испания",
            "Италия", "Канада", "Китай", "Мексика", "Нидерланды", "Норвегия", "Польша",
            "Португалия", "Россия", "США", "Турция", "Украина", "Финляндия", "Франция",
            "Швейцария", "Швеция", "Япония",
        ],
        cities: &[
            "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань",
            "Нижний Новгород", "Челябинск", "Самара", "Омск", "Ростов-на-Дону", "Уфа",
            "Красноярск", "Воронеж", "Пермь", "Волгоград", "Краснодар", "Саратов", "Тюмень",
            "Ижевск", "Барнаул", "Иркутск", "Хабаровск", "Владивосток", "Ярославль",
        ],
        continents: &[
            "Африка", "Антарктида", "Азия", "Австралия", "Европа", "Северная Америка",
            "Южная Америка",
        ],
        postal_code_fmt: "######",
    },
    business: BusinessData {
        company_types: &[
            "Общество с ограниченной ответственностью",
            "Акционерное общество",
            "Публичное акционерное общество",
            "Индивидуальный предприниматель",
            "Некоммерческая организация",
        ],
        company_type_abbrs: &["ООО", "АО", "ПАО", "ИП", "НКО"],
        companies: &[
            "Альфа", "Вектор", "Восток", "Гранит", "Заря", "Кедр", "Меридиан", "Орион",
            "Прогресс", "Радуга", "Рассвет", "Северсталь", "Сибирь", "Союз", "Спектр",
            "Сфера", "Титан", "Урал",
        ],
        currency_symbol: Some("₽"),
    },
    personal: PersonalData {
        names: Gendered {
            female: &[
                "Анастасия", "Анна", "Валентина", "Вера", "Виктория", "Галина", "Дарья",
                "Екатерина", "Елена", "Ирина", "Ксения", "Любовь", "Марина", "Мария",
                "Надежда", "Наталья", "Ольга", "Полина", "Светлана", "Татьяна", "Юлия",
            ],
            male: &[
                "Александр", "Алексей", "Андрей", "Антон", "Борис", "Вадим", "Василий",
                "Виктор", "Владимир", "Дмитрий", "Евгений", "Иван", "Игорь", "Максим",
                "Михаил", "Николай", "Олег", "Павел", "Сергей", "Юрий", "Ярослав",
            ],
        },
        surnames: ByGender::Split(Gendered {
            female: &[
                "Иванова", "Смирнова", "Кузнецова", "Попова", "Васильева", "Петрова",
                "Соколова", "Михайлова", "Новикова", "Фёдорова", "Морозова", "Волкова",
                "Алексеева", "Лебедева", "Семёнова", "Егорова", "Павлова", "Козлова",
            ],
            male: &[
                "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов",
                "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев",
                "Семёнов", "Егоров", "Павлов", "Козлов",
            ],
        }),
        typical_titles: Gendered {
            female: &["г-жа"],
            male: &["г-н"],
        },
        academic_titles: Gendered {
            female: &["к.т.н.", "д.т.н.", "к.ф.-м.н.", "проф."],
            male: &["к.т.н.", "д.т.н.", "к.ф.-м.н.", "проф."],
        },
        genders: &["Мужской", "Женский"],
        sexuality: &["Гетеросексуальность", "Гомосексуальность", "Бисексуальность", "Асексуальность"],
        occupations: &[
            "Агроном", "Архитектор", "Бухгалтер", "Врач", "Геолог", "Журналист", "Инженер",
            "Кондитер", "Лётчик", "Механик", "Музыкант", "Переводчик", "Повар",
            "Программист", "Психолог", "Сварщик", "Стоматолог", "Учитель", "Фармацевт",
            "Фотограф", "Химик", "Электрик", "Юрист",
        ],
        political_views: &[
            "Аполитичный", "Консерватор", "Коммунист", "Анархист", "Либерал", "Социалист",
            "Умеренный",
        ],
        worldviews: &[
            "Агностицизм", "Атеизм", "Буддизм", "Христианство", "Индуизм", "Ислам",
            "Иудаизм", "Пантеизм", "Светский гуманизм",
        ],
        views_on: &["Негативные", "Нейтральные", "Позитивные", "Компромиссные"],
        nationalities: ByGender::Split(Gendered {
            female: &[
                "Русская", "Украинка", "Белоруска", "Татарка", "Казашка", "Армянка",
                "Грузинка", "Немка", "Француженка", "Итальянка", "Испанка", "Полька",
            ],
            male: &[
                "Русский", "Украинец", "Белорус", "Татарин", "Казах", "Армянин", "Грузин",
                "Немец", "Француз", "Итальянец", "Испанец", "Поляк",
            ],
        }),
        universities: &[
            "МГУ им. М. В. Ломоносова",
            "СПбГУ",
            "МФТИ",
            "НИУ ВШЭ",
            "МГТУ им. Н. Э. Баумана",
            "НГУ",
            "ТГУ",
            "КФУ",
            "УрФУ",
            "ИТМО",
        ],
        academic_degrees: &["Бакалавр", "Магистр", "Кандидат наук", "Доктор наук"],
        languages: &[
            "Английский", "Арабский", "Греческий", "Испанский", "Итальянский", "Китайский",
            "Корейский", "Немецкий", "Польский", "Португальский", "Русский", "Татарский",
            "Турецкий", "Украинский", "Французский", "Японский",
        ],
        favorite_movies: &[
            "Бриллиантовая рука",
            "Иван Васильевич меняет профессию",
            "Ирония судьбы, или С лёгким паром!",
            "Кавказская пленница",
            "Брат",
            "Москва слезам не верит",
            "Служебный роман",
            "Сталкер",
            "Солярис",
            "Белое солнце пустыни",
        ],
        telephone_fmts: &["+7-(###)-###-##-##", "8-(###)-###-##-##", "+7 ### ### ## ##"],
    },
    food: FoodData {
        vegetables: &[
            "Баклажан", "Брокколи", "Горох", "Кабачок", "Капуста", "Картофель", "Лук",
            "Морковь", "Огурец", "Перец", "Помидор", "Редис", "Репа", "Свёкла", "Сельдерей",
            "Спаржа", "Тыква", "Укроп", "Фасоль", "Цветная капуста", "Чеснок", "Шпинат",
        ],
        fruits: &[
            "Абрикос", "Ананас", "Апельсин", "Банан", "Виноград", "Вишня", "Голубика",
            "Груша", "Ежевика", "Клубника", "Клюква", "Крыжовник", "Лимон", "Малина",
            "Манго", "Персик", "Слива", "Смородина", "Черешня", "Яблоко",
        ],
        dishes: &[
            "Блины", "Борщ", "Винегрет", "Голубцы", "Гречневая каша", "Жаркое", "Окрошка",
            "Оливье", "Пельмени", "Пирожки", "Рассольник", "Сельдь под шубой", "Солянка",
            "Сырники", "Уха", "Холодец", "Щи",
        ],
        spices: &[
            "Анис", "Базилик", "Бадьян", "Ваниль", "Гвоздика", "Имбирь", "Кардамон",
            "Кориандр", "Корица", "Куркума", "Лавровый лист", "Мускатный орех", "Мята",
            "Орегано", "Паприка", "Петрушка", "Розмарин", "Тимьян", "Тмин", "Укроп",
            "Шафран",
        ],
        drinks: &[
            "Бренди", "Вермут", "Виски", "Водка", "Джин", "Коньяк", "Медовуха", "Настойка",
            "Пиво", "Портвейн", "Ром", "Сидр", "Текила", "Шампанское",
        ],
    },
    science: ScienceData {
        chemical_elements: &[
            "Водород|H|1",
            "Гелий|He|2",
            "Литий|Li|3",
            "Бериллий|Be|4",
            "Бор|B|5",
            "Углерод|C|6",
            "Азот|N|7",
            "Кислород|O|8",
            "Фтор|F|9",
            "Неон|Ne|10",
            "Натрий|Na|11",
            "Магний|Mg|12",
            "Алюминий|Al|13",
            "Кремний|Si|14",
            "Фосфор|P|15",
            "Сера|S|16",
            "Хлор|Cl|17",
            "Аргон|Ar|18",
            "Калий|K|19",
            "Кальций|Ca|20",
            "Железо|Fe|26",
            "Медь|Cu|29",
            "Цинк|Zn|30",
            "Серебро|Ag|47",
            "Олово|Sn|50",
            "Платина|Pt|78",
            "Золото|Au|79",
            "Ртуть|Hg|80",
            "Свинец|Pb|82",
            "Уран|U|92",
        ],
        articles: &[
            "https://ru.wikipedia.org/wiki/Чёрная_дыра",
            "https://ru.wikipedia.org/wiki/Квантовая_запутанность",
            "https://ru.wikipedia.org/wiki/Фотосинтез",
            "https://ru.wikipedia.org/wiki/Общая_теория_относительности",
            "https://ru.wikipedia.org/wiki/Дезоксирибонуклеиновая_кислота",
            "https://ru.wikipedia.org/wiki/Тектоника_плит",
            "https://ru.wikipedia.org/wiki/Бозон_Хиггса",
            "https://ru.wikipedia.org/wiki/Машина_Тьюринга",
        ],
    },
    datetime: DatetimeData {
        days: &[
            "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота", "Воскресенье",
        ],
        day_abbrs: &["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
        months: &[
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август",
            "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
        ],
        month_abbrs: &[
            "Янв.", "Февр.", "Март", "Апр.", "Май", "Июнь", "Июль", "Авг.", "Сент.", "Окт.",
            "Нояб.", "Дек.",
        ],
        periodicity: &[
            "Никогда", "Однажды", "Ежедневно", "Еженедельно", "Ежемесячно", "Ежегодно",
            "Часто", "Редко",
        ],
    },
};
