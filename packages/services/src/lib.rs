pub mod analysis;
pub mod config;
pub mod logging;
pub mod recommendations;
pub mod session;
pub mod validation;

pub use analysis::*;
pub use config::AnalysisConfig;
pub use recommendations::*;
pub use session::*;
pub use validation::*;
