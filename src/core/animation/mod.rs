pub mod driver;
pub mod slot;
