use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "logctl")]
#[command(about = "Management CLI for the log level admin service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:9901")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Status,
    /// List loggers and their levels
    List,
    /// Set one logger's level
    Set { name: String, level: String },
    /// Set every logger's level
    SetAll { level: String },
    /// Set several loggers at once (name1:level1,name2:level2)
    Bulk { paths: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let params = match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/status", cli.url)).send().await?;
            return print_json(res).await;
        }
        Commands::List => {
            let res = client.get(format!("{}/loggers", cli.url)).send().await?;
            return print_json(res).await;
        }
        Commands::Set { name, level } => vec![(name, level)],
        Commands::SetAll { level } => vec![("level".to_string(), level)],
        Commands::Bulk { paths } => vec![("paths".to_string(), paths)],
    };

    let res = client
        .post(format!("{}/logging", cli.url))
        .query(&params)
        .send()
        .await?;
    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        print!("{}", text);
    } else {
        eprint!("{}", text);
        std::process::exit(1);
    }
    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
