use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "status-cli")]
#[command(about = "Query a running status reporter", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one status record
    Status,
    /// Poll status records at a fixed interval
    Watch {
        #[arg(short, long, default_value_t = 5)]
        interval_secs: u64,

        /// Stop after this many records
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/status", cli.url.trim_end_matches('/'));

    match cli.command {
        Commands::Status => {
            fetch(&client, &endpoint).await?;
        }
        Commands::Watch { interval_secs, count } => {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
            let mut fetched = 0;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = tokio::signal::ctrl_c() => break,
                }
                fetch(&client, &endpoint).await?;
                fetched += 1;
                if count.is_some_and(|c| fetched >= c) {
                    break;
                }
            }
        }
    }

    Ok(())
}

async fn fetch(client: &reqwest::Client, endpoint: &str) -> Result<(), Box<dyn std::error::Error>> {
    let res = client.get(endpoint).send().await?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: status endpoint returned {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    println!("{}", text);
    Ok(())
}
