use std::io::Write;

use backoffice_app::{config::AppConfig, context::AppContext};
use clap::{Parser, Subcommand};

mod collection;
mod dashboard;
mod input;
mod orders;
mod output;

#[derive(Debug, Parser)]
#[command(name = "backoffice-app", about = "Back-office CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage technologies
    Technologies(collection::CollectionCommand),

    /// Manage tutorials
    Tutorials(collection::CollectionCommand),

    /// Manage formations
    Formations(collection::CollectionCommand),

    /// Manage lessons
    Lessons(collection::CollectionCommand),

    /// Manage lesson blocks
    Blocks(collection::CollectionCommand),

    /// Manage dish categories
    Categories(collection::CollectionCommand),

    /// Manage dishes
    Dishes(collection::CollectionCommand),

    /// Manage users
    Users(collection::CollectionCommand),

    /// Review and update customer orders
    Orders(orders::OrdersCommand),

    /// Show aggregate figures
    Dashboard,
}

impl Cli {
    pub(crate) async fn run(self, context: &AppContext, out: &mut impl Write) -> Result<(), String> {
        match self.command {
            Commands::Technologies(command) => {
                collection::run(command, context.technologies.as_ref(), out).await
            }
            Commands::Tutorials(command) => {
                collection::run(command, context.tutorials.as_ref(), out).await
            }
            Commands::Formations(command) => {
                collection::run(command, context.formations.as_ref(), out).await
            }
            Commands::Lessons(command) => {
                collection::run(command, context.lessons.as_ref(), out).await
            }
            Commands::Blocks(command) => {
                collection::run(command, context.blocks.as_ref(), out).await
            }
            Commands::Categories(command) => {
                collection::run(command, context.categories.as_ref(), out).await
            }
            Commands::Dishes(command) => {
                collection::run(command, context.dishes.as_ref(), out).await
            }
            Commands::Users(command) => collection::run(command, context.users.as_ref(), out).await,
            Commands::Orders(command) => orders::run(command, context.orders.as_ref(), out).await,
            Commands::Dashboard => dashboard::run(context.dashboard.as_ref(), out).await,
        }
    }
}
