//! First-run storage initialization

use crate::config::paths::WalletPaths;
use crate::error::WalletResult;

use super::Storage;

/// Create the directory layout and empty data files for a fresh install
///
/// Safe to call on an already-initialized directory: existing data is loaded
/// and written back unchanged.
pub fn initialize_storage(paths: &WalletPaths) -> WalletResult<Storage> {
    paths.ensure_directories()?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.save_all()?;

    Ok(storage)
}
