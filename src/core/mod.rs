pub mod cleanup;
pub mod romanizer;
pub mod surname;
pub mod tables;
pub mod unicode;
