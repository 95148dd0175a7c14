use clap::{Parser, Subcommand};
use orders_core::constants::DEFAULT_EXPORT_DIR;
use orders_core::{Order, OrderStore, SiteConfig, SuggestedOrder, Transition};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "orders")]
#[command(about = "Medical orders review CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List physician orders and accepted suggestions
    List,
    /// List suggestions awaiting review
    Pending,
    /// Accept a suggestion (dry run against freshly seeded data)
    Accept {
        /// Suggestion id, for example suggestion-1
        id: String,
    },
    /// Reject a suggestion (dry run against freshly seeded data)
    Reject {
        /// Suggestion id, for example suggestion-2
        id: String,
    },
    /// Build the static site
    ///
    /// Reads GITHUB_REPOSITORY and GITHUB_PAGES to decide the base path.
    Export {
        /// Output directory
        #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orders_view=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut store = OrderStore::seeded()?;

    match cli.command {
        Some(Commands::List) => {
            let orders = store.list_orders();
            if orders.is_empty() {
                println!("No orders found.");
            }
            for order in orders {
                println!("{}", describe_order(order));
            }
        }
        Some(Commands::Pending) => {
            let pending = store.list_pending_suggestions();
            if pending.is_empty() {
                println!("No pending suggestions.");
            }
            for suggestion in pending {
                println!("{}", describe_suggestion(suggestion));
            }
        }
        Some(Commands::Accept { id }) => {
            let outcome = store.accept_suggestion(&id)?;
            println!("{}", describe_transition(&id, outcome));
        }
        Some(Commands::Reject { id }) => {
            let outcome = store.reject_suggestion(&id)?;
            println!("{}", describe_transition(&id, outcome));
        }
        Some(Commands::Export { out }) => {
            let config = SiteConfig::from_env()?;
            let written = orders_view::export_site(&store, &config, &out)?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        None => {
            println!("Use 'orders --help' for commands");
        }
    }

    Ok(())
}

fn describe_order(order: &Order) -> String {
    match order {
        Order::Physician(p) => {
            let mut line = format!("ID: {}, Order {}: {}", p.id(), p.id().ordinal(), p.text());
            if let Some(transcript) = p.transcript() {
                line.push_str(&format!(" (transcript: {transcript})"));
            }
            line
        }
        Order::Suggested(s) => describe_suggestion(s),
    }
}

fn describe_suggestion(s: &SuggestedOrder) -> String {
    let priority = s
        .priority()
        .map(|p| format!(", priority: {}", p.as_str().to_uppercase()))
        .unwrap_or_default();
    format!(
        "ID: {}, Suggested order {}: {} [{}{}], evidence: {}",
        s.id(),
        s.id().ordinal(),
        s.text(),
        s.status(),
        priority,
        s.evidence().len()
    )
}

fn describe_transition(id: &str, outcome: Transition) -> String {
    match outcome {
        Transition::Applied(status) => format!("{id} is now {status}"),
        Transition::Unchanged(status) => format!("{id} was already {status}; nothing changed"),
    }
}
