//! Tabhop - pattern-driven URL shortcut engine

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabhop::browser::{Navigator, TabQuery};
use tabhop::engine;
use tabhop::error::TabhopResult;
use tabhop::service::ShortcutService;
use tabhop::store::{export_json, import_json, FileStore};
use tabhop::types::{Shortcut, TabId};

#[derive(Parser, Debug)]
#[command(name = "tabhop")]
#[command(about = "Tabhop - pattern-driven URL shortcut engine")]
#[command(version)]
struct Args {
    /// Shortcut list file (defaults to the platform config dir)
    #[arg(long, env = "TABHOP_STORE", value_name = "FILE")]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stored shortcuts in priority order
    List,

    /// Add a shortcut to the end of the list
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Regular expression matched against the tab URL
        #[arg(long)]
        pattern: String,
        /// Destination template; $1..$9 reference capture groups
        #[arg(long)]
        target: String,
        /// Symbolic icon identifier
        #[arg(long)]
        icon: Option<String>,
        /// Open the destination in a new tab
        #[arg(long)]
        new_tab: bool,
        /// Auto-apply when a matching page loads
        #[arg(long)]
        auto: bool,
    },

    /// Replace the shortcut at INDEX
    Edit {
        /// Position of the shortcut to replace
        index: usize,
        #[arg(long)]
        name: String,
        #[arg(long)]
        pattern: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        new_tab: bool,
        #[arg(long)]
        auto: bool,
    },

    /// Remove the shortcut at INDEX
    Remove {
        /// Position of the shortcut to remove
        index: usize,
    },

    /// Move a shortcut to a new position
    Move {
        /// Current position
        from: usize,
        /// New position
        to: usize,
    },

    /// Apply the shortcut at INDEX against a URL and print the destination
    Apply {
        /// Position of the shortcut to apply
        index: usize,
        /// URL to treat as the current tab
        #[arg(long)]
        url: Option<String>,
    },

    /// Report whether a pattern/target pair risks a navigation loop
    Check {
        #[arg(long)]
        pattern: String,
        #[arg(long)]
        target: String,
        /// Also run the exact check against this URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Replace the list with the shortcuts in FILE
    Import {
        /// JSON array of shortcuts
        file: PathBuf,
    },

    /// Write the list as JSON to FILE (or stdout when omitted)
    Export {
        /// Output file; stdout when omitted
        file: Option<PathBuf>,
    },
}

/// Stand-in for the active-tab lookup: the URL the user passed, if any.
struct CliTabs {
    url: Option<String>,
}

#[async_trait]
impl TabQuery for CliTabs {
    async fn current_url(&self) -> TabhopResult<String> {
        Ok(self.url.clone().unwrap_or_default())
    }

    async fn open_tab_ids(&self) -> TabhopResult<Vec<TabId>> {
        Ok(Vec::new())
    }
}

/// Stand-in for navigation: prints where the browser would go.
struct EchoNavigator;

#[async_trait]
impl Navigator for EchoNavigator {
    async fn open_new_tab(&self, url: &str) -> TabhopResult<()> {
        println!("(new tab) {url}");
        Ok(())
    }

    async fn update_tab(&self, tab: TabId, url: &str) -> TabhopResult<()> {
        println!("(tab {tab}) {url}");
        Ok(())
    }

    async fn update_active_tab(&self, url: &str) -> TabhopResult<()> {
        println!("(current tab) {url}");
        Ok(())
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "tabhop=debug" } else { "tabhop=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_list(shortcuts: &[Shortcut]) {
    if shortcuts.is_empty() {
        println!("no shortcuts stored");
        return;
    }
    for (index, shortcut) in shortcuts.iter().enumerate() {
        let mut flags = Vec::new();
        if shortcut.open_new_tab {
            flags.push("new-tab");
        }
        if shortcut.auto_execute {
            flags.push("auto");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", flags.join(", "))
        };
        println!(
            "{index:3}  {name}  ({icon})\n     {pattern}  ->  {target}{flags}",
            name = shortcut.name,
            icon = shortcut.icon_or_default(),
            pattern = shortcut.pattern,
            target = shortcut.target,
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let store_path = match args.store {
        Some(path) => path,
        None => FileStore::default_path()
            .ok_or_else(|| anyhow!("no config directory available; pass --store"))?,
    };
    let store = Arc::new(FileStore::new(store_path));

    let apply_url = match &args.command {
        Command::Apply { url, .. } => url.clone(),
        _ => None,
    };
    let service = ShortcutService::new(
        store,
        Arc::new(CliTabs { url: apply_url }),
        Arc::new(EchoNavigator),
    );

    match args.command {
        Command::List => {
            print_list(&service.list().await?);
        }
        Command::Add {
            name,
            pattern,
            target,
            icon,
            new_tab,
            auto,
        } => {
            let shortcut = Shortcut {
                name,
                icon,
                pattern,
                target,
                open_new_tab: new_tab,
                auto_execute: auto,
            };
            let list = service.add(shortcut).await?;
            println!("added; {} shortcuts stored", list.len());
        }
        Command::Edit {
            index,
            name,
            pattern,
            target,
            icon,
            new_tab,
            auto,
        } => {
            let shortcut = Shortcut {
                name,
                icon,
                pattern,
                target,
                open_new_tab: new_tab,
                auto_execute: auto,
            };
            service.update(index, shortcut).await?;
            println!("updated shortcut {index}");
        }
        Command::Remove { index } => {
            let list = service.remove(index).await?;
            println!("removed; {} shortcuts stored", list.len());
        }
        Command::Move { from, to } => {
            print_list(&service.reorder(from, to).await?);
        }
        Command::Apply { index, .. } => {
            service.apply_at(index).await?;
        }
        Command::Check {
            pattern,
            target,
            url,
        } => {
            let probe = Shortcut::new("check", pattern, target);
            let verdict = if engine::would_loop_static(&probe) {
                "loop risk"
            } else {
                "no loop detected"
            };
            println!("static check: {verdict}");

            if let Some(url) = url {
                let verdict = if engine::would_loop_for(&probe, &url) {
                    "loop risk"
                } else {
                    "no loop detected"
                };
                println!("dynamic check against {url}: {verdict}");
            }
        }
        Command::Import { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            let shortcuts = import_json(&raw)?;
            let list = service.replace_all(shortcuts).await?;
            println!("imported {} shortcuts", list.len());
        }
        Command::Export { file } => {
            let json = export_json(&service.list().await?)?;
            match file {
                Some(file) => {
                    tokio::fs::write(&file, &json)
                        .await
                        .with_context(|| format!("failed to write {}", file.display()))?;
                    println!("exported to {}", file.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
