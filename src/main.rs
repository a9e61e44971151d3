use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dojo::catalog::{Catalog, CategoryId};
use dojo::progress::ProgressStore;
use dojo::storage::{self, StateFile};
use dojo::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dojo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print progress per category
    Stats,
    /// Generate a study plan for a target date
    Plan {
        /// Interview date, YYYY-MM-DD
        date: String,
    },
    /// Mark a topic complete
    Complete {
        /// Topic id, e.g. ds-arrays
        topic_id: String,
    },
    /// Unmark a topic
    Uncomplete {
        /// Topic id, e.g. ds-arrays
        topic_id: String,
    },
    /// Export your progress to a JSON file
    Export {
        /// Output path
        #[arg(short, long, default_value = "dojo-export.json")]
        output: String,
    },
    /// Import progress from a JSON file
    Import {
        /// Path to an exported snapshot
        path: String,
    },
    /// Discard all progress
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dojo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut store = ProgressStore::open(Catalog::builtin(), StateFile::default_location()?)?;

    match cli.command {
        Some(Commands::Stats) => {
            for id in CategoryId::ALL {
                println!("{:<16} {:>3}%", id.display_name(), store.state().category_percentage(id));
            }
            println!("{:<16} {:>3}%", "Overall", store.overall_percentage());
        }
        Some(Commands::Plan { date }) => {
            let target = date
                .parse()
                .map_err(|_| anyhow::anyhow!("expected a YYYY-MM-DD date, got `{date}`"))?;
            let plan = store.generate_plan(target)?;
            println!("{}", plan.message);
            for (i, day) in plan.days.iter().enumerate() {
                println!("\nDay {} - {}", i + 1, day.date);
                for topic in &day.topics {
                    println!("  - {} ({})", topic.name, topic.category.display_name());
                }
            }
        }
        Some(Commands::Complete { topic_id }) => {
            if store.catalog().find_topic(&topic_id).is_none() {
                bail!("unknown topic id `{topic_id}` (see the TUI for the catalog)");
            }
            store.set_topic_completed(&topic_id, true)?;
            println!("Completed {topic_id}");
        }
        Some(Commands::Uncomplete { topic_id }) => {
            store.set_topic_completed(&topic_id, false)?;
            println!("Uncompleted {topic_id}");
        }
        Some(Commands::Export { output }) => {
            let snapshot = store.export_snapshot()?;
            storage::write_export(std::path::Path::new(&output), &snapshot)?;
            println!("Exported progress to {output}");
        }
        Some(Commands::Import { path }) => {
            let text = storage::read_import(std::path::Path::new(&path))?;
            store.import_snapshot(&text)?;
            println!("Imported progress from {path}");
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                bail!("this discards all progress; re-run with --yes to confirm");
            }
            store.reset()?;
            println!("All progress reset");
        }
        None => {
            let mut app = App::new(store)?;
            app.run().await?;
        }
    }

    Ok(())
}
