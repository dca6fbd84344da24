/// Periodic scheduler that broadcasts due alerts
pub mod scheduler;
