use std::io::Write;

use backoffice_app::domain::orders::{OrderId, OrderStatus, OrdersService};
use clap::{Args, Subcommand};

use super::output::{write_json, write_line, write_table};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List fetched orders
    List,

    /// Show one order as JSON
    Get(OrderArgs),

    /// Change the status of an order
    Status(StatusArgs),

    /// Delete an order
    Delete(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    /// Order id
    #[arg(long)]
    id: String,
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Order id
    #[arg(long)]
    id: String,

    /// New status (paid, pending, "in progress", completed, cancelled)
    #[arg(long)]
    status: OrderStatus,
}

pub(crate) async fn run(
    command: OrdersCommand,
    orders: &dyn OrdersService,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => {
            let list = orders.list_orders().await;

            if list.is_empty() {
                return write_line(out, "no orders");
            }

            write_table(out, &list)
        }
        OrdersSubcommand::Get(args) => {
            let order = orders
                .get_order(OrderId::from(args.id.as_str()))
                .await
                .ok_or_else(|| not_found(&args.id))?;

            write_json(out, &order)
        }
        OrdersSubcommand::Status(args) => {
            let order = orders
                .update_order_status(OrderId::from(args.id.as_str()), args.status)
                .await
                .map_err(|error| format!("failed to update order status: {error}"))?
                .ok_or_else(|| not_found(&args.id))?;

            write_line(out, &format!("order {} is now {}", order.id, order.summary.status))
        }
        OrdersSubcommand::Delete(args) => {
            let deleted = orders
                .delete_order(OrderId::from(args.id.as_str()))
                .await
                .map_err(|error| format!("failed to delete order: {error}"))?;

            if deleted {
                write_line(out, &format!("deleted order {}", args.id))
            } else {
                write_line(out, &not_found(&args.id))
            }
        }
    }
}

fn not_found(id: &str) -> String {
    format!("no order with id {id}")
}
