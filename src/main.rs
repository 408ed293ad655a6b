use clap::Parser;
use jeep_inventory::core::ConfigProvider;
use jeep_inventory::utils::{logger, validation::Validate};
use jeep_inventory::{
    handle, CliConfig, CsvJeepStore, InventoryConfig, InventoryService, LocalStorage,
    LookupRequest, Reply,
};

async fn run_lookup<C: ConfigProvider>(config: &C, request: &LookupRequest) -> Reply {
    let storage = LocalStorage::new(config.data_dir());
    let store = CsvJeepStore::new(storage, config.catalog_file());
    let service = InventoryService::new(store).with_ordering(config.ordering());

    tracing::debug!(
        "Catalog: {}/{} (ordering: {:?})",
        config.data_dir(),
        config.catalog_file(),
        service.ordering()
    );

    handle(&service, request).await
}

fn exit_code(status: u16) -> i32 {
    match status {
        200 => 0,
        404 => 2,
        400 => 1,
        _ => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let request = LookupRequest::new(cli.model.clone(), cli.trim.clone());

    // 有指定 TOML 設定檔時以其為準
    let file_config = match &cli.config {
        Some(path) => match InventoryConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let level = file_config.as_ref().and_then(|c| c.log_level());
    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logging()) {
        logger::init_json_logger(level, cli.verbose);
    } else {
        logger::init_cli_logger(level, cli.verbose);
    }

    tracing::info!("Starting jeep-inventory lookup");
    tracing::debug!("CLI config: {:?}", cli);

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let reply = match &file_config {
        Some(config) => run_lookup(config, &request).await,
        None => run_lookup(&cli, &request).await,
    };

    let rendered = serde_json::to_string_pretty(&reply.body)?;
    if reply.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("{}", rendered);
        std::process::exit(exit_code(reply.status));
    }

    Ok(())
}
