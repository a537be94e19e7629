use crate::avs::{Bn254, TaskResponse, TaskResponseMetadata};
use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;
use eigen_utils::crypto::bls::G1Point;
use eigen_utils::types::AvsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// ABI layout of [`TaskResponseData`], in field order. Encoded as call
/// parameters, the way `raiseAndResolveChallenge` lays out its arguments.
pub type TaskResponseDataAbi = (TaskResponse, TaskResponseMetadata, Vec<Bn254::G1Point>);

/// A responded task together with the operators whose signatures were missing
/// from the aggregate.
///
/// `non_signing_operator_keys` keeps the order the aggregator produced; the
/// signatory record hash checked on chain depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponseData {
    pub task_response: TaskResponse,
    pub task_response_metadata: TaskResponseMetadata,
    pub non_signing_operator_keys: Vec<Bn254::G1Point>,
}

impl TaskResponseData {
    pub fn new(
        task_response: TaskResponse,
        task_response_metadata: TaskResponseMetadata,
        non_signing_operator_keys: &[G1Point],
    ) -> Self {
        Self {
            task_response,
            task_response_metadata,
            non_signing_operator_keys: non_signing_operator_keys
                .iter()
                .map(|pt| Bn254::G1Point { X: pt.x, Y: pt.y })
                .collect(),
        }
    }

    /// keccak256 of each packed (X, Y) pubkey, i.e. the non-signer operator ids
    pub fn non_signer_pubkey_hashes(&self) -> Vec<B256> {
        self.non_signing_operator_keys
            .iter()
            .map(hash_g1_point)
            .collect()
    }

    /// keccak256(abi.encodePacked(referenceBlockNumber, nonSignerPubkeyHashes))
    pub fn signatory_record_hash(&self, reference_block_number: u32) -> B256 {
        let hashes = self.non_signer_pubkey_hashes();
        let mut packed = Vec::with_capacity(4 + 32 * hashes.len());
        packed.extend_from_slice(&reference_block_number.to_be_bytes());
        for hash in &hashes {
            packed.extend_from_slice(hash.as_slice());
        }
        keccak256(packed)
    }

    /// keccak256(abi.encode(taskResponse, taskResponseMetadata)), the value the
    /// task manager records per responded task
    pub fn response_hash(&self) -> B256 {
        let encoded = (
            self.task_response.clone(),
            self.task_response_metadata.clone(),
        )
            .abi_encode_params();
        keccak256(encoded)
    }

    pub fn abi_encode(&self) -> Vec<u8> {
        let tuple: TaskResponseDataAbi = self.clone().into();
        tuple.abi_encode_params()
    }

    pub fn abi_decode(data: &[u8]) -> Result<Self, alloy_sol_types::Error> {
        <TaskResponseDataAbi as SolValue>::abi_decode_params(data).map(Self::from)
    }
}

impl From<TaskResponseData> for TaskResponseDataAbi {
    fn from(data: TaskResponseData) -> Self {
        (
            data.task_response,
            data.task_response_metadata,
            data.non_signing_operator_keys,
        )
    }
}

impl From<TaskResponseDataAbi> for TaskResponseData {
    fn from(
        (task_response, task_response_metadata, non_signing_operator_keys): TaskResponseDataAbi,
    ) -> Self {
        Self {
            task_response,
            task_response_metadata,
            non_signing_operator_keys,
        }
    }
}

fn hash_g1_point(point: &Bn254::G1Point) -> B256 {
    let mut packed = [0u8; 64];
    packed[..32].copy_from_slice(&point.X.to_be_bytes::<32>());
    packed[32..].copy_from_slice(&point.Y.to_be_bytes::<32>());
    keccak256(packed)
}

/// Outcome of checking a task response.
///
/// `Valid` is a variant of its own, not an error value, so a caller cannot
/// treat a correct response as a failure by forgetting a special case.
#[derive(Debug)]
pub enum TaskResponseValidity {
    Valid,
    Invalid { reason: String },
    ResolutionError { cause: AvsError },
}

impl TaskResponseValidity {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Maps `Valid` to `Ok(())` for callers that want `?` propagation.
    pub fn into_result(self) -> Result<(), ChallengeError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid { reason } => Err(ChallengeError::InvalidResponse(reason)),
            Self::ResolutionError { cause } => Err(ChallengeError::Resolution(cause)),
        }
    }
}

impl From<AvsError> for TaskResponseValidity {
    fn from(cause: AvsError) -> Self {
        Self::ResolutionError { cause }
    }
}

impl From<Result<(), ChallengeError>> for TaskResponseValidity {
    fn from(result: Result<(), ChallengeError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(ChallengeError::InvalidResponse(reason)) => Self::Invalid { reason },
            Err(ChallengeError::Resolution(cause)) => Self::ResolutionError { cause },
        }
    }
}

impl fmt::Display for TaskResponseValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Task response is valid"),
            Self::Invalid { reason } => write!(f, "Task response is invalid: {reason}"),
            Self::ResolutionError { cause } => {
                write!(f, "Task response could not be checked: {cause}")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("Task response is invalid: {0}")]
    InvalidResponse(String),
    #[error("Task response could not be checked: {0}")]
    Resolution(#[source] AvsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, U256};
    use ark_bn254::Fr;
    use ark_ec::CurveGroup;
    use eigen_utils::crypto::bn254::mul_by_generator_g1;

    fn operator_pubkey(secret: u64) -> G1Point {
        G1Point::from(mul_by_generator_g1(Fr::from(secret)).into_affine())
    }

    fn sample_data() -> TaskResponseData {
        TaskResponseData::new(
            TaskResponse {
                referenceTaskIndex: 7,
                numberSquared: U256::from(144u64),
            },
            TaskResponseMetadata {
                taskResponsedBlock: 1_204,
                hashOfNonSigners: b256!(
                    "1111111111111111111111111111111111111111111111111111111111111111"
                ),
            },
            &[operator_pubkey(3), operator_pubkey(11), operator_pubkey(5)],
        )
    }

    #[test]
    fn test_new_keeps_non_signer_order() {
        let data = sample_data();
        let expected: Vec<U256> = [3u64, 11, 5]
            .into_iter()
            .map(|secret| operator_pubkey(secret).x)
            .collect();
        let actual: Vec<U256> = data.non_signing_operator_keys.iter().map(|k| k.X).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_abi_round_trip_preserves_fields() {
        let data = sample_data();
        let decoded = TaskResponseData::abi_decode(&data.abi_encode()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_json_round_trip_preserves_fields() {
        let data = sample_data();
        let json = serde_json::to_string(&data).unwrap();
        let decoded: TaskResponseData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, data);

        let task_response_pos = json.find("task_response").unwrap();
        let metadata_pos = json.find("task_response_metadata").unwrap();
        let keys_pos = json.find("non_signing_operator_keys").unwrap();
        assert!(task_response_pos < metadata_pos && metadata_pos < keys_pos);
    }

    #[test]
    fn test_abi_encoding_uses_parameter_layout() {
        let mut data = sample_data();
        data.non_signing_operator_keys.truncate(1);
        let encoded = data.abi_encode();

        // response (2 words), metadata (2 words), offset, length, one key (2 words)
        assert_eq!(encoded.len(), 8 * 32);
        assert_eq!(
            encoded,
            TaskResponseDataAbi::from(data.clone()).abi_encode_params()
        );
        assert_eq!(&encoded[..32], &U256::from(7u64).to_be_bytes::<32>()[..]);
        assert_eq!(&encoded[128..160], &U256::from(5u64 * 32).to_be_bytes::<32>()[..]);
        assert_eq!(&encoded[160..192], &U256::from(1u64).to_be_bytes::<32>()[..]);
    }

    #[test]
    fn test_abi_decode_rejects_truncated_input() {
        let encoded = sample_data().abi_encode();
        assert!(TaskResponseData::abi_decode(&encoded[..encoded.len() - 1]).is_err());
    }

    #[test]
    fn test_pubkey_hash_is_keccak_of_packed_coordinates() {
        let data = TaskResponseData::new(
            TaskResponse {
                referenceTaskIndex: 0,
                numberSquared: U256::ZERO,
            },
            TaskResponseMetadata {
                taskResponsedBlock: 0,
                hashOfNonSigners: B256::ZERO,
            },
            &[G1Point::new(U256::from(1u64), U256::from(2u64))],
        );
        let mut packed = [0u8; 64];
        packed[31] = 1;
        packed[63] = 2;
        assert_eq!(data.non_signer_pubkey_hashes(), vec![keccak256(packed)]);
    }

    #[test]
    fn test_signatory_record_hash_depends_on_order_and_block() {
        let data = sample_data();
        let mut reordered = data.clone();
        reordered.non_signing_operator_keys.reverse();

        assert_ne!(
            data.signatory_record_hash(100),
            reordered.signatory_record_hash(100)
        );
        assert_ne!(data.signatory_record_hash(100), data.signatory_record_hash(101));
        assert_eq!(data.signatory_record_hash(100), data.clone().signatory_record_hash(100));
    }

    #[test]
    fn test_signatory_record_hash_without_non_signers_hashes_block_only() {
        let mut data = sample_data();
        data.non_signing_operator_keys.clear();
        assert_eq!(
            data.signatory_record_hash(0x0102_0304),
            keccak256([0x01, 0x02, 0x03, 0x04])
        );
    }

    #[test]
    fn test_response_hash_matches_static_struct_encoding() {
        let data = sample_data();
        let mut encoded = data.task_response.abi_encode();
        encoded.extend(data.task_response_metadata.abi_encode());
        assert_eq!(data.response_hash(), keccak256(encoded));
    }

    #[test]
    fn test_valid_outcome_survives_result_round_trip() {
        let outcome = TaskResponseValidity::from(TaskResponseValidity::Valid.into_result());
        assert!(outcome.is_valid());
        assert_eq!(outcome.to_string(), "Task response is valid");
    }

    #[test]
    fn test_invalid_outcome_is_not_valid() {
        let outcome = TaskResponseValidity::invalid("Task response is valid");
        assert!(!outcome.is_valid());

        let err = outcome.into_result().unwrap_err();
        assert!(matches!(err, ChallengeError::InvalidResponse(_)));
        assert!(matches!(
            TaskResponseValidity::from(Err(err)),
            TaskResponseValidity::Invalid { .. }
        ));
    }

    #[test]
    fn test_resolution_error_keeps_cause() {
        let missing = address!("9d4454B023096f34B160D6B654540c56A1F81688");
        let outcome = TaskResponseValidity::from(AvsError::ContractNotDeployed(missing));
        assert!(!outcome.is_valid());

        match TaskResponseValidity::from(outcome.into_result()) {
            TaskResponseValidity::ResolutionError {
                cause: AvsError::ContractNotDeployed(addr),
            } => assert_eq!(addr, missing),
            other => panic!("unexpected outcome: {other}"),
        }
    }
}
