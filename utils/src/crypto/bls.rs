use super::bn254::point_to_u256;
use alloy_primitives::U256;
use ark_bn254::G1Affine;
use serde::{Deserialize, Serialize};

/// BN254 G1 point in the (X, Y) form the contracts expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct G1Point {
    pub x: U256,
    pub y: U256,
}

impl G1Point {
    pub fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }
}

impl From<G1Affine> for G1Point {
    fn from(point: G1Affine) -> Self {
        Self {
            x: point_to_u256(point.x),
            y: point_to_u256(point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::bn254::{get_g1_generator, mul_by_generator_g1};
    use ark_bn254::Fr;
    use ark_ec::CurveGroup;

    #[test]
    fn test_g1_point_affine_conversion() {
        let affine = mul_by_generator_g1(Fr::from(42u64)).into_affine();
        let point = G1Point::from(affine);
        assert_eq!(point.x, point_to_u256(affine.x));
        assert_eq!(point.y, point_to_u256(affine.y));
        assert_ne!(point, G1Point::from(get_g1_generator()));
    }
}
