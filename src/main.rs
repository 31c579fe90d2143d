use clap::Parser;
use small_drills::utils::logger;
use small_drills::{
    concatenate, day_type, delayed_square, filter_by_rating, format_string, most_expensive,
    process_value, Car, CliConfig, Day, Product, RatedItem, Vehicle,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-drills");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    run_sync_drills()?;

    // The one asynchronous drill, last since it takes a second.
    tracing::info!("delayed square: input {}", config.square);
    match delayed_square(config.square).await {
        Ok(squared) => {
            tracing::info!("✅ delayed square: {} -> {}", config.square, squared);
            println!("{} squared is {}", config.square, squared);
        }
        Err(e) => {
            tracing::error!("❌ delayed square failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_sync_drills() -> anyhow::Result<()> {
    tracing::info!(
        "case transformer: {} / {}",
        format_string("hello drills", None),
        format_string("HELLO DRILLS", Some(false))
    );

    let items = vec![
        RatedItem::new("The Rust Programming Language", 4.8),
        RatedItem::new("Skimmed it once", 2.1),
        RatedItem::new("Programming Rust", 4.5),
    ];
    let kept = filter_by_rating(&items);
    tracing::info!("rating filter kept {} of {} items", kept.len(), items.len());
    println!("well-rated: {}", serde_json::to_string(&kept)?);

    let combined = concatenate(vec![vec![1, 2], vec![3], vec![4, 5]]);
    tracing::info!("concatenated into {:?}", combined);

    let vehicle = Vehicle::new("Honda", 2018);
    vehicle.describe();
    let car = Car::new("Toyota", 2020, "Corolla");
    car.describe();
    car.describe_model();

    tracing::info!(
        "dispatcher: text -> {}, number -> {}",
        process_value(small_drills::Value::from("abc")),
        process_value(small_drills::Value::from(5.0))
    );

    let products = vec![
        Product::new("Keyboard", 89.0),
        Product::new("Monitor", 349.0),
        Product::new("Mouse", 49.0),
    ];
    match most_expensive(&products) {
        Some(product) => tracing::info!("most expensive: {} at {}", product.name, product.price),
        None => tracing::info!("most expensive: catalog is empty"),
    }

    for day in Day::ALL {
        tracing::info!("{:?} is a {}", day, day_type(day));
    }

    Ok(())
}
