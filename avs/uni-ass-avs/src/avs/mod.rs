mod bindings;

pub use bindings::AvsManagersBindings;
pub use erc_20_mock::ERC20Mock;
pub use erc_20_mock::ERC20Mock::ERC20MockInstance;
pub use uni_ass_service_manager::UniASSServiceManager;
pub use uni_ass_service_manager::UniASSServiceManager::UniASSServiceManagerInstance;
pub use uni_ass_task_manager::IUniASSTaskManager::{Task, TaskResponse, TaskResponseMetadata};
pub use uni_ass_task_manager::UniASSTaskManager;
pub use uni_ass_task_manager::UniASSTaskManager::UniASSTaskManagerInstance;
pub use uni_ass_task_manager::BN254 as Bn254;

mod uni_ass_task_manager {
    use serde::{Deserialize, Serialize};

    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
        library BN254 {
            struct G1Point {
                uint256 X;
                uint256 Y;
            }
        }

        #[allow(missing_docs)]
        #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
        interface IUniASSTaskManager {
            struct Task {
                uint256 numberToBeSquared;
                uint32 taskCreatedBlock;
                bytes quorumNumbers;
                uint32 quorumThresholdPercentage;
            }

            struct TaskResponse {
                uint32 referenceTaskIndex;
                uint256 numberSquared;
            }

            struct TaskResponseMetadata {
                uint32 taskResponsedBlock;
                bytes32 hashOfNonSigners;
            }
        }

        #[allow(missing_docs)]
        #[derive(Debug)]
        #[sol(rpc)]
        interface UniASSTaskManager {
            event NewTaskCreated(uint32 indexed taskIndex, IUniASSTaskManager.Task task);
            event TaskResponded(
                IUniASSTaskManager.TaskResponse taskResponse,
                IUniASSTaskManager.TaskResponseMetadata taskResponseMetadata
            );
            event TaskChallengedSuccessfully(uint32 indexed taskIndex, address indexed challenger);
            event TaskChallengedUnsuccessfully(uint32 indexed taskIndex, address indexed challenger);

            function taskNumber() external view returns (uint32);
            function latestTaskNum() external view returns (uint32);
            function allTaskHashes(uint32 taskIndex) external view returns (bytes32);
            function allTaskResponses(uint32 taskIndex) external view returns (bytes32);
            function taskSuccesfullyChallenged(uint32 taskIndex) external view returns (bool);
            function getTaskResponseWindowBlock() external view returns (uint32);

            function raiseAndResolveChallenge(
                IUniASSTaskManager.Task calldata task,
                IUniASSTaskManager.TaskResponse calldata taskResponse,
                IUniASSTaskManager.TaskResponseMetadata calldata taskResponseMetadata,
                BN254.G1Point[] memory pubkeysOfNonSigningOperators
            ) external;
        }
    );
}

mod uni_ass_service_manager {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug)]
        #[sol(rpc)]
        interface UniASSServiceManager {
            function uniASSTaskManager() external view returns (address);
            function avsDirectory() external view returns (address);
            function owner() external view returns (address);
        }
    );
}

mod erc_20_mock {
    alloy_sol_types::sol!(
        #[allow(missing_docs)]
        #[derive(Debug)]
        #[sol(rpc)]
        interface ERC20Mock {
            function name() external view returns (string memory);
            function symbol() external view returns (string memory);
            function decimals() external view returns (uint8);
            function totalSupply() external view returns (uint256);
            function balanceOf(address account) external view returns (uint256);
            function allowance(address owner, address spender) external view returns (uint256);
            function mint(address account, uint256 amount) external;
        }
    );
}
