pub use registry_coordinator::RegistryCoordinator;
pub use registry_coordinator::RegistryCoordinator::RegistryCoordinatorInstance;

mod registry_coordinator {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug)]
        #[sol(rpc)]
        interface RegistryCoordinator {
            function serviceManager() external view returns (address);
            function blsApkRegistry() external view returns (address);
            function stakeRegistry() external view returns (address);
            function indexRegistry() external view returns (address);
            function quorumCount() external view returns (uint8);
            function getOperatorId(address operator) external view returns (bytes32);
            function getCurrentQuorumBitmap(bytes32 operatorId) external view returns (uint192);
        }
    );
}
