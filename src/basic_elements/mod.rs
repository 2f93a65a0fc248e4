pub mod gas;
pub mod keys;
