use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use opinionate::alert::Alert;
use opinionate::config::Config;
use opinionate::controllers::{NewTopicController, ProfileController, TopicsController};
use opinionate::gateway::HttpGateway;
use opinionate::models::VoteChoice;
use opinionate::upload::SelectedFile;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "opinionate",
    about = "Command-line client for the Opinionate topic voting service",
    version
)]
struct Args {
    /// Backend base URL (overrides config and OPINIONATE_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the latest topics with vote counts
    Topics,
    /// Vote on a topic by its position in the list
    Vote {
        /// Position of the topic in the list (see `topics`)
        index: usize,
        /// "up" or "down"
        choice: String,
    },
    /// Create a new topic
    New {
        #[arg(long)]
        name: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Image file to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Show the current profile
    Profile,
    /// Upload a profile avatar
    Avatar { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load();
    let base_url = args.url.unwrap_or_else(|| config.backend_url());
    let gateway =
        HttpGateway::with_timeout(&base_url, Duration::from_secs(config.timeout_secs))?;

    match args.command {
        Command::Topics => {
            let mut controller = TopicsController::new(gateway);
            controller.load().await;
            print_alerts(controller.alerts.as_slice());
            for (index, topic) in controller.topics.iter().enumerate() {
                let marker = if controller.ineligible_for_vote(&topic.id) {
                    " "
                } else {
                    "*"
                };
                println!(
                    "{:3} {} {:>4}▲ {:>4}▼  {}",
                    index,
                    marker,
                    topic.up_votes(),
                    topic.down_votes(),
                    topic.name().unwrap_or(topic.id.as_str())
                );
            }
        }
        Command::Vote { index, choice } => {
            let choice: VoteChoice = choice.parse().map_err(|e: String| anyhow!(e))?;
            let mut controller = TopicsController::new(gateway);
            controller.load().await;
            controller.vote(index, choice).await;
            print_alerts(controller.alerts.as_slice());
            if let Some(topic) = controller.topics.get(index) {
                println!(
                    "{}: {}▲ {}▼",
                    topic.name().unwrap_or(topic.id.as_str()),
                    topic.up_votes(),
                    topic.down_votes()
                );
            }
        }
        Command::New { name, tags, image } => {
            let mut controller = NewTopicController::new(gateway);
            controller.draft.name = name;
            controller.draft.tags = tags;
            if let Some(path) = image {
                let file = SelectedFile::from_path(&path)?;
                controller.attach_image(&[file]);
            }
            controller.submit().await;
            print_alerts(controller.alerts.as_slice());
        }
        Command::Profile => {
            let mut controller = ProfileController::new(gateway);
            controller.load().await;
            print_alerts(controller.alerts.as_slice());
            println!("{}", serde_json::to_string_pretty(&controller.profile)?);
        }
        Command::Avatar { path } => {
            let file = SelectedFile::from_path(&path)?;
            let mut controller = ProfileController::new(gateway);
            controller.upload_avatar(&[file]).await;
            print_alerts(controller.alerts.as_slice());
            if let Some(avatar) = controller.profile.avatar.as_deref() {
                println!("avatar: {}", avatar);
            }
        }
    }

    Ok(())
}

fn print_alerts(alerts: &[Alert]) {
    for alert in alerts {
        eprintln!("  [{}] {}", alert.kind.as_str(), alert.message);
    }
}
