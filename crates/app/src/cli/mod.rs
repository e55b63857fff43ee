use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;
use tracker_app::database;

mod db;
mod orders;

const CLI_CONNECTIONS: u32 = 2;

#[derive(Debug, Parser)]
#[command(name = "tracker-app", about = "Order tracker CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Orders(orders::OrdersCommand),
}

/// Connection flags shared by every subcommand that touches the database.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<PgPool, String> {
        database::connect(&self.database_url, CLI_CONNECTIONS)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
        }
    }
}
