use ipo_dashboard::api::fetch_records;
use ipo_dashboard::card::CardContent;
use ipo_dashboard::config::DashboardConfig;
use ipo_dashboard::state::{DashboardState, LoadOutcome, Screen, EMPTY_MESSAGE, TITLE};
use reqwest::Client;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: cargo run --example verify_feed [base_url]");
        std::process::exit(1);
    }

    let mut config = DashboardConfig::default();
    if let Some(base) = args.get(1) {
        config = config.with_base_url(base.as_str());
    }

    let url = config.endpoint();
    println!("--- Headless check of {} ---", TITLE);
    println!("Fetching from: {}", url);

    let client = Client::new();
    let mut state = DashboardState::default();
    match fetch_records(&client, &url).await {
        Ok(records) => {
            println!("Fetched {} IPOs.", records.len());
            state.apply(LoadOutcome::Loaded(records));
        }
        Err(e) => {
            eprintln!("Fetch failed: {}", e);
            state.apply(LoadOutcome::Failed);
        }
    }

    match state.screen() {
        Screen::Cards(n) => {
            for (key, record) in state.keyed_records() {
                println!("[{}]", key);
                print!("{}", CardContent::from_record(&record));
                println!("---------------------------------------------------");
            }
            println!("Rendered {} cards.", n);
        }
        _ => println!("{}", EMPTY_MESSAGE),
    }

    Ok(())
}
