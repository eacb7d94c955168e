pub mod factory;
pub mod presenter;
pub mod rgba;
