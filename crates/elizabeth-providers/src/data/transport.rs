pub const CARS: &[&str] = &[
    "Alfa Romeo 145",
    "Aston Martin DB9",
    "Audi A4",
    "BMW 3 Series",
    "Chevrolet Camaro",
    "Citroën C4",
    "Dodge Charger",
    "Ferrari 488",
    "Fiat Punto",
    "Ford Mustang",
    "Honda Civic",
    "Hyundai i30",
    "Jaguar XF",
    "Kia Ceed",
    "Lada Niva",
    "Lamborghini Huracán",
    "Mazda MX-5",
    "Mercedes-Benz E-Class",
    "Nissan Leaf",
    "Opel Astra",
    "Peugeot 308",
    "Porsche 911",
    "Renault Clio",
    "Skoda Octavia",
    "Subaru Impreza",
    "Tesla Model 3",
    "Toyota Corolla",
    "Volkswagen Golf",
    "Volvo XC90",
];

pub const TRUCKS: &[&str] = &[
    "Atkinson",
    "Mercedes",
    "Hino",
    "Isuzu",
    "Kamaz",
    "Kenworth",
    "MAN",
    "Scania",
    "Tatra",
    "Volvo",
    "DAF",
    "Iveco",
    "Freightliner",
    "Peterbilt",
    "Mack",
];

pub const AIRPLANES: &[&str] = &[
    "Airbus",
    "Boeing",
    "Bombardier",
    "Cessna",
    "Embraer",
    "Fokker",
    "Ilyushin",
    "Lockheed",
    "Tupolev",
    "Sukhoi",
    "Antonov",
];

pub const TRUCK_MODEL_MASK: &str = "#### @@";
pub const AIRPLANE_MODEL_MASK: &str = "###";
