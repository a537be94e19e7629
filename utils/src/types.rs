use alloy_primitives::Address;
use thiserror::Error;

/// Errors surfaced while talking to AVS and EigenLayer contracts
#[derive(Debug, Error)]
pub enum AvsError {
    #[error("Contract error: {0}")]
    ContractError(#[from] alloy_contract::Error),
    #[error("Transport error: {0}")]
    TransportError(#[from] alloy_transport::TransportError),
    #[error("No contract code deployed at {0}")]
    ContractNotDeployed(Address),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use alloy_transport::TransportErrorKind;

    #[test]
    fn test_transport_error_keeps_cause_in_message() {
        let err = AvsError::from(TransportErrorKind::custom_str("connection refused"));
        assert!(matches!(err, AvsError::TransportError(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_contract_not_deployed_names_address() {
        let addr = address!("95401dc811bb5740090279Ba06cfA8fcF6113778");
        let err = AvsError::ContractNotDeployed(addr);
        assert_eq!(
            err.to_string(),
            format!("No contract code deployed at {addr}")
        );
    }
}
