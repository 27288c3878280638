//! Bitewise Application CLI

use std::process;

use bitewise_app::{
    clover::AccessToken,
    database::{self, Db},
    domain::merchants::{
        MerchantsService, PgMerchantsService, data::NewMerchant, records::MerchantUuid,
    },
};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "bitewise-app", about = "Bitewise CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    Merchant(MerchantCommand),
}

#[derive(Debug, Args)]
struct MerchantCommand {
    #[command(subcommand)]
    command: MerchantSubcommand,
}

#[derive(Debug, Subcommand)]
enum MerchantSubcommand {
    /// Register a Clover merchant and its API token
    Create(CreateMerchantArgs),

    /// List registered merchants
    List,
}

#[derive(Debug, Args)]
struct CreateMerchantArgs {
    /// Clover merchant id
    #[arg(long)]
    clover_merchant_id: String,

    /// Merchant display name
    #[arg(long)]
    name: String,

    /// Clover API token for the merchant
    #[arg(long, env = "CLOVER_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Optional merchant UUID; generated when omitted
    #[arg(long)]
    merchant_uuid: Option<Uuid>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let database_url = cli
        .database_url
        .ok_or_else(|| "DATABASE_URL must be set".to_string())?;

    let pool = database::connect(&database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match cli.command {
        Commands::Migrate => database::migrate(&pool)
            .await
            .map_err(|error| format!("failed to apply migrations: {error}")),
        Commands::Merchant(MerchantCommand { command }) => {
            let service = PgMerchantsService::new(Db::new(pool));

            match command {
                MerchantSubcommand::Create(args) => create_merchant(&service, args).await,
                MerchantSubcommand::List => list_merchants(&service).await,
            }
        }
    }
}

async fn create_merchant(
    service: &PgMerchantsService,
    args: CreateMerchantArgs,
) -> Result<(), String> {
    if args.access_token.trim().is_empty() {
        return Err("access token cannot be empty".to_string());
    }

    let merchant = service
        .create_merchant(NewMerchant {
            uuid: args
                .merchant_uuid
                .map_or_else(MerchantUuid::new, MerchantUuid::from_uuid),
            clover_merchant_id: args.clover_merchant_id,
            name: args.name,
            access_token: AccessToken::new(args.access_token),
        })
        .await
        .map_err(|error| format!("failed to create merchant: {error}"))?;

    println!("merchant_uuid: {}", merchant.uuid);
    println!("clover_merchant_id: {}", merchant.clover_merchant_id);
    println!("name: {}", merchant.name);

    Ok(())
}

async fn list_merchants(service: &PgMerchantsService) -> Result<(), String> {
    let merchants = service
        .list_merchants()
        .await
        .map_err(|error| format!("failed to list merchants: {error}"))?;

    for merchant in merchants {
        println!(
            "{}\t{}\t{}",
            merchant.uuid, merchant.clover_merchant_id, merchant.name
        );
    }

    Ok(())
}
