pub mod analysis;
pub mod config;

pub use analysis::{Analysis, Conclusion, Premise};
pub use config::Config;
