use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use lunchbox::{date, AppConfig, Database, Error, LunchService, MenuScraper};

#[derive(Parser)]
#[command(name = "lunchbox", about = "Group lunch coordination")]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, default_value = "lunchbox.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape all configured menu sources and replace today's snapshot
    Refresh,
    /// Submit (or clear) today's vote for a user
    Vote {
        #[arg(long)]
        user: String,
        #[arg(long)]
        group: String,
        /// Selected places; repeat for more than one
        #[arg(long)]
        place: Vec<String>,
        /// Selected time slots; repeat for more than one
        #[arg(long)]
        time: Vec<String>,
    },
    /// Post a chat message to a group
    Chat {
        #[arg(long)]
        user: String,
        #[arg(long)]
        group: String,
        message: String,
    },
    /// Print today's menus, votes and chat for a group
    Show {
        #[arg(long)]
        group: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    let db = Database::open(config.db_path.clone())?;
    let scraper = MenuScraper::new(Duration::from_secs(config.fetch_timeout_secs))?;
    let service = LunchService::new(db, scraper);

    let today = date::today();

    match cli.command {
        Command::Refresh => {
            let report = service.refresh_menus(today, &config.places).await?;
            println!("stored {} menus", report.stored());
            for name in &report.failed {
                println!("failed: {name}");
            }
        }
        Command::Vote {
            user,
            group,
            place,
            time,
        } => {
            // selections are constrained to the configured lists, the way
            // the UI would only offer configured options
            if !config.known_group(&group) {
                println!("vote rejected: unknown group '{group}'");
            } else if let Some(unknown) = place.iter().find(|p| !config.known_place(p.as_str())) {
                println!("vote rejected: unknown place '{unknown}'");
            } else if let Some(unknown) = time.iter().find(|t| !config.known_time(t.as_str())) {
                println!("vote rejected: unknown time slot '{unknown}'");
            } else {
                match service.submit_vote(today, &user, &group, &place, &time).await {
                    Ok(()) => println!("vote recorded"),
                    Err(Error::Validation(reason)) => println!("vote rejected: {reason}"),
                    Err(err) => return Err(err.into()),
                }
            }
        }
        Command::Chat {
            user,
            group,
            message,
        } => {
            if !config.known_group(&group) {
                println!("message rejected: unknown group '{group}'");
            } else {
                service.post_message(today, &user, &group, &message).await?;
                println!("message posted");
            }
        }
        Command::Show { group } => {
            println!("{}", date::display_header(today));

            println!("\n== Menus ==");
            for (category, records) in service.menus_for_display(today).await? {
                println!("{category}");
                for record in records {
                    println!("  {}", record.item);
                }
            }

            println!("\n== Votes ==");
            for vote in service.votes_for_display(today, &group).await? {
                println!("{}  {} @ {}", vote.username, vote.place, vote.time);
            }

            println!("\n== Chat ==");
            for message in service.messages_for_display(today, &group).await? {
                println!(
                    "{}  {}: {}",
                    date::encode_time(message.time),
                    message.username,
                    message.text
                );
            }
        }
    }

    Ok(())
}
