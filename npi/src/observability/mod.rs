pub mod labels;
pub mod metrics;
