use anyhow::Context;
use clap::Parser;
use mondial_relay_pickup::utils::{logger, validation::Validate};
use mondial_relay_pickup::{
    Address, CliConfig, Command, HttpPickupDirectory, PickupResolver, RelayConfig,
    ResolutionResult, Shipment, ShippingCostProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = RelayConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let output = match cli.command {
        Command::List {
            postcode,
            country,
            weight,
        } => {
            let resolver = PickupResolver::new(HttpPickupDirectory::new()?);
            let result = resolver
                .list_pickups(
                    &Address::new(postcode, country),
                    &Shipment::new(weight),
                    &config.directory,
                )
                .await;
            match &result {
                ResolutionResult::Pickups(_) => serde_json::to_string_pretty(&result)?,
                ResolutionResult::Error(e) => serde_json::to_string_pretty(&e.to_output())?,
            }
        }
        Command::Address { pickup_id } => {
            let resolver = PickupResolver::new(HttpPickupDirectory::new()?);
            match resolver.get_pickup_address(&pickup_id, &config.directory).await {
                Ok(pickup) => serde_json::to_string_pretty(&serde_json::json!({ "pickup": pickup }))?,
                Err(e) => serde_json::to_string_pretty(&e.to_output())?,
            }
        }
        Command::Cost { weight } => {
            let amount = ShippingCostProvider::new().calculate(&Shipment::new(weight), config.shipping()?);
            serde_json::to_string_pretty(&serde_json::json!({ "amount": amount }))?
        }
    };

    println!("{}", output);
    Ok(())
}
