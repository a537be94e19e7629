use alloy_primitives::U256;
use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};

/// Helper for converting a PrimeField to its U256 representation for Ethereum compatibility
pub fn point_to_u256<F: PrimeField>(point: F) -> U256 {
    let point = point.into_bigint();
    let point_bytes = point.to_bytes_be();
    U256::from_be_slice(&point_bytes[..])
}

pub fn get_g1_generator() -> G1Affine {
    G1Affine::new(ark_bn254::g1::G1_GENERATOR_X, ark_bn254::g1::G1_GENERATOR_Y)
}

pub fn mul_by_generator_g1(pvt_key: Fr) -> G1Projective {
    let g1_gen = get_g1_generator();
    g1_gen.mul_bigint(pvt_key.into_bigint())
}
