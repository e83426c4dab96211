//! # Config Commands
//!
//! Retrieval of application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (to pre-fill the issuer form and tax rate input)
/// - Offering payment terms and id strategy in a settings panel
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
