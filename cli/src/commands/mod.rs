mod scenario;
mod stress;

pub use scenario::run_scenario;
pub use stress::{StressArgs, handle_stress_command};
