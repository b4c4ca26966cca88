use std::env;

use elizabeth_providers::{CardType, Gender, Generic, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match env::args().nth(1) {
        Some(path) => Settings::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    let mut generic = Generic::new(&settings);
    tracing::info!(locale = %generic.locale(), "generating sample");

    println!("name:     {}", generic.personal.full_name(Gender::Female, false));
    println!("email:    {}", generic.personal.email(Gender::Female, None));
    println!("card:     {}", generic.personal.credit_card_number(CardType::Visa));
    println!("address:  {}, {}", generic.address.address(), generic.address.city());
    println!("company:  {}", generic.business.copyright());
    println!("imei:     {}", generic.code.imei());
    println!("date:     {}", generic.datetime.date(1990, 2030)?);
    println!("cpu:      {} @ {}", generic.hardware.cpu(), generic.hardware.cpu_frequency());
    println!("project:  {}", generic.path.project_dir(Gender::Male));
    println!("css:      {}", generic.structured.css());
    println!("json:\n{}", generic.structured.json(3, 2)?);
    Ok(())
}
