pub mod bls;
pub mod bn254;
