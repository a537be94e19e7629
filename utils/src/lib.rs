pub mod crypto;
pub mod logging;
pub mod test_utils;
pub mod types;
