//! CLI configuration: thin wrapper around `lifeline_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--api-url, --insecure, --timeout).

use lifeline_core::{ClientConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use lifeline_config::{
    Config, Defaults, Profile, config_path, load_config, profile_to_client_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Build the `ClientConfig` for this invocation.
///
/// Flags beat the profile; the profile beats `[defaults]`.
pub fn resolve_client_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<ClientConfig, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = config.profile(&name).map_err(|_| CliError::ProfileNotFound {
        available: available_profiles(config),
        name: name.clone(),
    })?;

    if let Some(url) = &global.api_url {
        profile.api_url.clone_from(url);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }

    let mut client = profile_to_client_config(&profile, &config.defaults)?;
    if global.insecure {
        client.tls = TlsVerification::DangerAcceptInvalid;
    }
    tracing::debug!(
        profile = %name,
        api_url = %client.api_url,
        timeout = ?client.timeout,
        "resolved client config"
    );
    Ok(client)
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}
