use super::{
    ERC20Mock, ERC20MockInstance, UniASSServiceManager, UniASSServiceManagerInstance,
    UniASSTaskManager, UniASSTaskManagerInstance,
};
use alloy_primitives::Address;
use alloy_provider::Provider;
use eigen_contracts::RegistryCoordinator;
use eigen_utils::logging::{log_error, log_info, SharedLogger};
use eigen_utils::types::AvsError;
use std::fmt;

const LOG_TARGET: &str = module_path!();

/// Handles to the UniASS service manager and task manager.
///
/// Both addresses are read from the chain on every [`build`](Self::build): the
/// registry coordinator names the service manager, which in turn names the task
/// manager. Either contract can be redeployed without touching node config.
#[derive(Clone)]
pub struct AvsManagersBindings<P> {
    pub service_manager: UniASSServiceManagerInstance<P>,
    pub task_manager: UniASSTaskManagerInstance<P>,
    operator_state_retriever_addr: Address,
    eth_client: P,
    logger: SharedLogger,
}

impl<P: Provider + Clone> AvsManagersBindings<P> {
    /// Walks registry coordinator -> service manager -> task manager.
    ///
    /// Any failed hop aborts the whole resolution; nothing is retried here.
    pub async fn build(
        registry_coordinator_addr: Address,
        operator_state_retriever_addr: Address,
        eth_client: P,
        logger: SharedLogger,
    ) -> Result<Self, AvsError> {
        ensure_contract_deployed(&eth_client, registry_coordinator_addr).await?;
        let registry_coordinator =
            RegistryCoordinator::new(registry_coordinator_addr, eth_client.clone());

        let service_manager_addr = registry_coordinator
            .serviceManager()
            .call()
            .await
            .map_err(AvsError::from)
            .inspect_err(|e| {
                log_error(
                    logger.as_ref(),
                    LOG_TARGET,
                    "Failed to fetch IServiceManager contract",
                    e,
                )
            })?;
        ensure_contract_deployed(&eth_client, service_manager_addr)
            .await
            .inspect_err(|e| {
                log_error(
                    logger.as_ref(),
                    LOG_TARGET,
                    "Failed to fetch IServiceManager contract",
                    e,
                )
            })?;
        let service_manager =
            UniASSServiceManager::new(service_manager_addr, eth_client.clone());

        let task_manager_addr = service_manager
            .uniASSTaskManager()
            .call()
            .await
            .map_err(AvsError::from)
            .inspect_err(|e| {
                log_error(
                    logger.as_ref(),
                    LOG_TARGET,
                    "Failed to fetch TaskManager address",
                    e,
                )
            })?;
        ensure_contract_deployed(&eth_client, task_manager_addr)
            .await
            .inspect_err(|e| {
                log_error(
                    logger.as_ref(),
                    LOG_TARGET,
                    "Failed to fetch IUniASSTaskManager contract",
                    e,
                )
            })?;
        let task_manager = UniASSTaskManager::new(task_manager_addr, eth_client.clone());

        log_info(
            logger.as_ref(),
            LOG_TARGET,
            format_args!(
                "Resolved AVS managers: serviceManager={service_manager_addr}, taskManager={task_manager_addr}"
            ),
        );

        Ok(Self {
            service_manager,
            task_manager,
            operator_state_retriever_addr,
            eth_client,
            logger,
        })
    }

    /// Binds an ERC20 mock token at `token_addr`. Every call checks the chain
    /// again; handles are never cached.
    pub async fn get_erc20_mock(
        &self,
        token_addr: Address,
    ) -> Result<ERC20MockInstance<P>, AvsError> {
        ensure_contract_deployed(&self.eth_client, token_addr)
            .await
            .inspect_err(|e| {
                log_error(
                    self.logger.as_ref(),
                    LOG_TARGET,
                    "Failed to fetch ERC20Mock contract",
                    e,
                )
            })?;
        Ok(ERC20Mock::new(token_addr, self.eth_client.clone()))
    }
}

impl<P: Provider> AvsManagersBindings<P> {
    pub fn service_manager_addr(&self) -> Address {
        *self.service_manager.address()
    }

    pub fn task_manager_addr(&self) -> Address {
        *self.task_manager.address()
    }

    /// Retained for components that query operator state; resolution itself never reads it.
    pub fn operator_state_retriever_addr(&self) -> Address {
        self.operator_state_retriever_addr
    }

    pub fn eth_client(&self) -> &P {
        &self.eth_client
    }
}

impl<P: Provider> fmt::Debug for AvsManagersBindings<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvsManagersBindings")
            .field("service_manager", self.service_manager.address())
            .field("task_manager", self.task_manager.address())
            .field(
                "operator_state_retriever",
                &self.operator_state_retriever_addr,
            )
            .finish_non_exhaustive()
    }
}

async fn ensure_contract_deployed<P: Provider>(
    eth_client: &P,
    addr: Address,
) -> Result<(), AvsError> {
    let code = eth_client.get_code_at(addr).await?;
    if code.is_empty() {
        return Err(AvsError::ContractNotDeployed(addr));
    }
    Ok(())
}
