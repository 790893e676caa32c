pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod progress;
pub mod report;
pub mod scanner;

pub use analysis::catalog::AssetCatalog;
pub use analysis::classify::Classification;
pub use analysis::usage::UnusedAssets;
pub use config::AppConfig;
pub use engine::{AuditEngine, AuditResult};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
pub use report::{ReportRenderer, ReportStyle};
