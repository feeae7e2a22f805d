use log::debug;

use sizecap_core::Bundle;

use crate::{
    checker::run_size_check,
    config::{Normalized, SizeCheckConfig, SizeCheckOption},
    error::{ConfigError, SizeExceededError},
    reporter::Reporter,
    types::CheckResult,
};

/// Name reported by an active plugin.
pub const PLUGIN_NAME: &str = "size-check";

/// Name reported when the boolean-false shortcut disables the check.
pub const PLUGIN_NAME_DISABLED: &str = "size-check-disabled";

/// Build-completion hook of an active size check.
///
/// The host invokes [`SizeCheckHook::write_bundle`] exactly once per build,
/// after all output files are finalized. The hook closes over its resolved
/// configuration and nothing else.
#[derive(Debug, Clone)]
pub struct SizeCheckHook {
    config: SizeCheckConfig,
}

impl SizeCheckHook {
    pub fn config(&self) -> &SizeCheckConfig {
        &self.config
    }

    pub fn write_bundle<R: Reporter>(
        &self,
        bundle: &Bundle,
        reporter: &mut R,
    ) -> Result<CheckResult, SizeExceededError> {
        run_size_check(&self.config, bundle, reporter)
    }
}

/// Plugin descriptor handed to the host build tool. The disabled variant
/// carries no hook at all, so a disabled check costs the build nothing.
#[derive(Debug, Clone)]
pub enum SizeCheckPlugin {
    Active(SizeCheckHook),
    Disabled,
}

impl SizeCheckPlugin {
    pub fn name(&self) -> &'static str {
        match self {
            SizeCheckPlugin::Active(_) => PLUGIN_NAME,
            SizeCheckPlugin::Disabled => PLUGIN_NAME_DISABLED,
        }
    }

    pub fn hook(&self) -> Option<&SizeCheckHook> {
        match self {
            SizeCheckPlugin::Active(hook) => Some(hook),
            SizeCheckPlugin::Disabled => None,
        }
    }
}

/// Create the size-check plugin from a raw user option.
///
/// Fails synchronously for an unusable option shape; no plugin is produced
/// in that case and build setup should abort.
pub fn size_check(option: SizeCheckOption) -> Result<SizeCheckPlugin, ConfigError> {
    match option.normalize()? {
        Normalized::Active(config) => {
            debug!(
                "Constructed '{}': max {} bytes, throw_error={}",
                PLUGIN_NAME, config.max_size, config.throw_error
            );
            Ok(SizeCheckPlugin::Active(SizeCheckHook { config }))
        }
        Normalized::Disabled => {
            debug!("Constructed '{}'", PLUGIN_NAME_DISABLED);
            Ok(SizeCheckPlugin::Disabled)
        }
    }
}
