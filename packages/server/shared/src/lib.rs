pub mod dto;
pub mod time;

pub use dto::{
    ApiResponse, CascadeData, FilterPredicates, FilterSelection, RiskQuery, RiskSummary, RiskType,
};
pub use time::{TimeTokenError, YearMonth};
