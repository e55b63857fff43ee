use clap::{Args, Subcommand};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracker_app::{
    database::Db,
    domain::orders::{OrdersService, PgOrdersService, records::OrderRecord},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Print every order, newest first
    List(DatabaseArgs),
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List(args) => list(args).await,
    }
}

async fn list(args: DatabaseArgs) -> Result<(), String> {
    let service = PgOrdersService::new(Db::new(args.connect().await?));

    let orders = service
        .list_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    println!("{}", orders_table(&orders));

    Ok(())
}

const QUANTITY_COLUMN: usize = 4;

/// One row per order under a header, newest first as given.
fn orders_table(orders: &[OrderRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "ID", "Order ID", "Customer", "Product", "Qty", "Status", "Created",
    ]);

    for order in orders {
        builder.push_record([
            order.uuid.to_string(),
            order.order_id.clone(),
            order.customer_name.clone(),
            order.product.clone(),
            order.quantity.to_string(),
            order.status.to_string(),
            order.created_at.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::one(QUANTITY_COLUMN), Alignment::right());

    table.to_string()
}
