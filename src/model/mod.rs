pub mod account;
pub mod digest;
pub mod entropy;
pub mod strength;
