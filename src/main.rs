use clap::{Parser, Subcommand};
use mindmesh_dashboard::page::ids;
use mindmesh_dashboard::{ApiClient, Controller, Event, Page};
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "mindmesh_dashboard")]
#[command(about = "Drive the MindMesh dashboard controller against a backend")]
struct Cli {
    /// Backend base URL; falls back to MINDMESH_BASE_URL, then localhost
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit the mood check-in form
    Mood { text: String },
    /// Submit the morning check-in form
    MorningCheckin { mood: String, goal: String },
    /// Ask for suggestions over the current task list
    TaskSuggestions,
    /// Ask for an emotion-synced plan
    EmotionPlan {
        /// Mood text; when omitted the mood input is left unbound
        #[arg(long)]
        mood: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let base_url = resolve_base_url(cli.base_url);
    info!("using backend at {base_url}");

    let controller = Controller::new(ApiClient::new(base_url), Page::dashboard());
    let page = controller.page();

    let event = match cli.command {
        Commands::Mood { text } => {
            page.set_input(ids::MOOD_TEXT, &text).await;
            Event::MoodFormSubmit
        }
        Commands::MorningCheckin { mood, goal } => {
            page.set_input(ids::MORNING_MOOD, &mood).await;
            page.set_input(ids::MORNING_GOAL, &goal).await;
            Event::MorningFormSubmit
        }
        Commands::TaskSuggestions => Event::TaskSuggestionsClick,
        Commands::EmotionPlan { mood } => {
            match mood {
                Some(mood) => page.set_input(ids::MOOD_TEXT, &mood).await,
                None => page.remove_input(ids::MOOD_TEXT).await,
            }
            Event::EmotionPlanClick
        }
    };

    controller.dispatch(event).await;

    for (id, content) in page.visible_sections().await {
        println!("[{id}] {content}");
    }

    Ok(())
}

fn resolve_base_url(flag: Option<String>) -> String {
    if let Some(url) = flag {
        return url;
    }
    if let Ok(url) = env::var("MINDMESH_BASE_URL") {
        return url;
    }
    "http://127.0.0.1:5000".to_string()
}
