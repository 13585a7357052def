use affaires::{
    config,
    core::{ContractCard, Dashboard, OrderCard},
    errors::Result,
    store::BusinessData,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();

    // 3. Load display settings and seed records
    let path = config::config_path();
    let app_config = config::load_config(&path)
        .inspect(|_| info!("Loaded configuration from {}", path.display()))
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    let data = BusinessData::from_config(&app_config);
    let formatter = app_config.currency_formatter();
    let dashboard = Dashboard::build(&data, &formatter);

    println!("Affaires SceMECA");
    println!();
    println!("Contrats actifs ({})", dashboard.active_contract_count);
    if dashboard.active_contracts.is_empty() {
        println!("  Aucun contrat actif");
    }
    for card in &dashboard.active_contracts {
        print_contract(card);
    }

    println!();
    println!("Commandes en attente ({})", dashboard.pending_order_count);
    if dashboard.pending_orders.is_empty() {
        println!("  Aucune commande en attente");
    }
    for card in &dashboard.pending_orders {
        print_order(card);
    }

    Ok(())
}

fn print_contract(card: &ContractCard) {
    println!("  {} [{}]", card.title, card.status_label);
    println!("    Client : {}", card.client);
    println!("    Valeur : {}", card.value);
    println!("    Délai : {}", card.delay);
    println!(
        "    Du {} au {}",
        card.effective_date,
        card.end_date.as_deref().unwrap_or("-")
    );
}

fn print_order(card: &OrderCard) {
    println!("  {} [{}]", card.title, card.status_label);
    println!("    Client : {}", card.client);
    println!("    Articles : {}", card.item_count);
    println!("    Total : {}", card.total);
    match &card.delivery_date {
        Some(delivery) => println!(
            "    Commandée le {}, livraison le {}",
            card.order_date, delivery
        ),
        None => println!("    Commandée le {}", card.order_date),
    }
}
