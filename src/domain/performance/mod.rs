// Performance tracking domain
pub mod metrics;
