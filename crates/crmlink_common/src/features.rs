//! Feature flag handling.
//!
//! Integrations are switched twice: at compile time with a cargo feature
//! (`hubspot`) and at runtime with `use_<integration>` plus the presence of
//! its config section.

use crmlink_config::AppConfig;
use std::sync::Arc;

/// A feature is enabled when its flag is set and its config section exists.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

#[cfg(feature = "hubspot")]
pub fn is_hubspot_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_hubspot, config.hubspot.as_ref())
}
