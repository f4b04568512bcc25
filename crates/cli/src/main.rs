//! BOLES CLI - Seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Push the demo catalog to the configured table API
//! boles-cli seed products
//!
//! # Give a user a generated order history and funded wallet
//! boles-cli seed demo --clerk-id user_abc123 --orders 5
//!
//! # Promote a user to admin
//! boles-cli admin promote --clerk-id user_abc123
//! ```
//!
//! All commands read the same environment variables as the storefront
//! (`SUPABASE_URL`, `SUPABASE_SERVICE_ROLE_KEY`) and require them to be
//! set; seeding against mock mode would be a silent no-op.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "boles-cli")]
#[command(author, version, about = "BOLES Smart Home CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the backend with demo data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Manage user accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Push the built-in demo catalog to the products table
    Products,
    /// Generate an order history and funded wallet for a user
    Demo {
        /// Identity provider ID of the target user
        #[arg(long)]
        clerk_id: String,

        /// Number of historical orders to generate
        #[arg(long, default_value_t = 5)]
        orders: usize,

        /// Number of wallet ledger entries to generate
        #[arg(long, default_value_t = 10)]
        transactions: usize,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Change a user's role
    Promote {
        /// Identity provider ID of the target user
        #[arg(long)]
        clerk_id: String,

        /// Role to assign (`user`, `admin`)
        #[arg(long, default_value = "admin")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Products => commands::seed::products().await?,
            SeedTarget::Demo {
                clerk_id,
                orders,
                transactions,
            } => commands::seed::demo(&clerk_id, orders, transactions).await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Promote { clerk_id, role } => {
                commands::admin::promote(&clerk_id, &role).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_demo_defaults() {
        let cli = Cli::try_parse_from(["boles-cli", "seed", "demo", "--clerk-id", "user_abc"])
            .expect("valid invocation");
        match cli.command {
            Commands::Seed {
                target:
                    SeedTarget::Demo {
                        clerk_id,
                        orders,
                        transactions,
                    },
            } => {
                assert_eq!(clerk_id, "user_abc");
                assert_eq!(orders, 5);
                assert_eq!(transactions, 10);
            }
            _ => panic!("expected seed demo"),
        }
    }

    #[test]
    fn test_seed_demo_requires_clerk_id() {
        assert!(Cli::try_parse_from(["boles-cli", "seed", "demo"]).is_err());
    }
}
