//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::Settings;
