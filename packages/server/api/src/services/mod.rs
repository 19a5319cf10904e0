pub mod cascade;
pub mod summary;
