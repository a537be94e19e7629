pub mod avs;
pub mod challenger;
pub mod config;
