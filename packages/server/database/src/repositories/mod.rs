pub mod fact_repo;

pub use fact_repo::FactRepository;
