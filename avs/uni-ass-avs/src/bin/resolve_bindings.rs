use alloy_provider::ProviderBuilder;
use eigen_utils::logging::global_logger;
use std::error::Error;
use uni_ass_avs::avs::AvsManagersBindings;
use uni_ass_avs::config::NodeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .ok_or("usage: resolve-bindings <config.json>")?;
    let config = NodeConfig::load(&config_path)?.with_env_overrides();

    log::info!("Connecting to {}", config.eth_rpc_url);
    let eth_client = ProviderBuilder::new().connect(&config.eth_rpc_url).await?;

    let bindings = AvsManagersBindings::build(
        config.avs_registry_coordinator_addr,
        config.operator_state_retriever_addr,
        eth_client,
        global_logger(),
    )
    .await?;
    log::info!(
        "serviceManager={} taskManager={} operatorStateRetriever={}",
        bindings.service_manager_addr(),
        bindings.task_manager_addr(),
        bindings.operator_state_retriever_addr()
    );

    if let Some(token_addr) = config.erc20_mock_addr {
        let token = bindings.get_erc20_mock(token_addr).await?;
        let symbol = token.symbol().call().await?;
        log::info!("ERC20Mock {token_addr}: symbol={symbol}");
    }

    Ok(())
}
