use std::io::Read;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tripcraft::{TripCraftConfig, TripPlan, TripPlanner};

fn init_logging(config: &TripCraftConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn read_request() -> std::io::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        // No arguments: read the request from stdin instead
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(args.join(" "))
    }
}

fn print_plan(plan: &TripPlan) {
    println!("Hotels");
    for hotel in &plan.hotels {
        println!("  - {}", hotel.name);
    }

    println!("\nRestaurants");
    for restaurant in &plan.restaurants {
        println!("  - {}", restaurant.name);
    }

    for day in &plan.itinerary.days {
        println!("\n{}", day.label);
        for slot in &day.slots {
            let note = slot.note();
            if note.is_empty() {
                println!("  - {}", slot.title());
            } else {
                println!("  - {}: {}", slot.title(), note);
            }
        }
    }
}

fn main() -> ExitCode {
    let config = match TripCraftConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    let planner = match TripPlanner::from_config(&config) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Failed to initialise planner: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = match read_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Failed to read travel request: {e}");
            return ExitCode::FAILURE;
        }
    };

    match planner.plan(&request) {
        Ok(plan) => {
            print_plan(&plan);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
