//! Operator command line for the bank client backend.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use bank_admin::domain::types::AccountNumber;
use bank_admin::dto::client_list::{ClientListPage, ClientRow, StatsPanel};
use bank_admin::forms::FormError;
use bank_admin::forms::client::{AddClientForm, EditClientForm};
use bank_admin::gateway::HttpGateway;
use bank_admin::load_api_config;
use bank_admin::services::{ServiceError, ServiceResult};
use bank_admin::services::client_list::ClientListController;

#[derive(Debug, Parser)]
#[command(name = "bank-admin", about = "Manage bank clients on the remote backend")]
struct Cli {
    /// Print the resulting page as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every client with its balance category.
    List,
    /// Show total, minimum, maximum and average balance.
    Stats,
    /// Add a client.
    Add {
        account_number: String,
        name: String,
        balance: String,
    },
    /// Change the name and balance of a client.
    Edit {
        account_number: String,
        name: String,
        balance: String,
    },
    /// Delete a client.
    Delete { account_number: String },
}

async fn execute(
    controller: &ClientListController<HttpGateway>,
    command: Command,
) -> ServiceResult<()> {
    match command {
        Command::List | Command::Stats => Ok(()),
        Command::Add {
            account_number,
            name,
            balance,
        } => {
            let form = AddClientForm {
                account_number,
                name,
                balance,
            };
            controller.add_client(form).await.map(|_| ())
        }
        Command::Edit {
            account_number,
            name,
            balance,
        } => {
            let account_number = parse_account(account_number)?;
            let form = EditClientForm { name, balance };
            controller
                .edit_client(&account_number, form)
                .await
                .map(|_| ())
        }
        Command::Delete { account_number } => {
            let account_number = parse_account(account_number)?;
            controller.delete_client(&account_number).await
        }
    }
}

fn parse_account(raw: String) -> ServiceResult<AccountNumber> {
    AccountNumber::new(raw).map_err(|_| ServiceError::Validation(FormError::InvalidAccountNumber))
}

fn print_rows(rows: &[ClientRow]) {
    if rows.is_empty() {
        println!("No clients.");
        return;
    }
    println!("{:<14} {:<24} {:>16}  {}", "ACCOUNT", "NAME", "BALANCE", "CATEGORY");
    for row in rows {
        println!(
            "{:<14} {:<24} {:>16}  {}",
            row.account_number, row.name, row.balance, row.category_label
        );
    }
}

fn print_stats(stats: &StatsPanel) {
    let source = if stats.from_server { "server" } else { "local" };
    println!("Clients:  {}", stats.count);
    println!("Total:    {} ({source})", stats.total);
    println!("Minimum:  {}", stats.min);
    println!("Maximum:  {}", stats.max);
    println!("Average:  {}", stats.average);
}

fn render(page: &ClientListPage, show_rows: bool, json: bool) {
    match page {
        ClientListPage::Loading => println!("Loading..."),
        ClientListPage::Error { message } => eprintln!("{message}"),
        ClientListPage::Loaded {
            rows,
            stats,
            breakdown,
        } => {
            if json {
                let payload = serde_json::json!({
                    "clients": rows,
                    "stats": stats,
                    "categories": {
                        "insufficient": breakdown.insufficient,
                        "moderate": breakdown.moderate,
                        "high": breakdown.high,
                    },
                });
                println!("{payload:#}");
                return;
            }
            if show_rows {
                print_rows(rows);
                println!();
            }
            print_stats(stats);
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let api_config = match load_api_config() {
        Ok(api_config) => api_config,
        Err(err) => {
            log::error!("Error loading api config: {}", err);
            std::process::exit(1);
        }
    };

    let gateway = match HttpGateway::new(&api_config) {
        Ok(gateway) => gateway,
        Err(err) => {
            log::error!("Failed to build the gateway: {err}");
            std::process::exit(1);
        }
    };

    let controller = ClientListController::new(Arc::new(gateway));

    if let Err(err) = controller.mount().await {
        render(&ClientListPage::from(&controller.state()), true, cli.json);
        log::error!("Initial load failed: {err}");
        std::process::exit(1);
    }

    let show_rows = !matches!(cli.command, Command::Stats);
    let outcome = execute(&controller, cli.command).await;

    render(&ClientListPage::from(&controller.state()), show_rows, cli.json);
    controller.teardown();

    if let Err(err) = outcome {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
