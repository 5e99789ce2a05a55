//! Configuration for the club backend client

use anyhow::Context;
use serde::Deserialize;

/// Placeholder canister id used when no other source provides one
pub const FALLBACK_CANISTER_ID: &str = "aaaaa-aa";

/// Environment variable the host runtime injects the canister id through
pub const INJECTED_CANISTER_ID_ENV: &str = "CANISTER_ID_BACKEND";

/// Environment variable read at build time
pub const BUILD_CANISTER_ID_ENV: &str = "BACKEND_CANISTER_ID";

/// Canister id captured at compile time
const BUILD_CANISTER_ID: Option<&str> = option_env!("BACKEND_CANISTER_ID");

/// Club backend client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Canister id handed in by the host; overrides the environment
    #[serde(default)]
    pub canister_id: Option<String>,

    /// Drop events that break entity invariants
    #[serde(default = "default_true")]
    pub strict_event_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canister_id: None,
            strict_event_validation: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse a YAML configuration document
    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("invalid club backend configuration")
    }

    /// Resolve the backend canister id: configured or runtime-injected value,
    /// then the build-time value, then [`FALLBACK_CANISTER_ID`].
    pub fn resolve_canister_id(&self) -> ResolvedCanisterId {
        let runtime = std::env::var(INJECTED_CANISTER_ID_ENV).ok();
        let injected = first_present([self.canister_id.as_deref(), runtime.as_deref()]);

        let resolved = resolve_canister_id(injected, BUILD_CANISTER_ID);
        tracing::info!(
            canister_id = %resolved.value,
            source = ?resolved.source,
            "resolved backend canister id"
        );
        resolved
    }
}

/// Where a canister id came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanisterIdSource {
    /// Provided by the host at runtime
    Injected,
    /// Captured from the build environment
    BuildEnv,
    /// No source provided one
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCanisterId {
    pub value: String,
    pub source: CanisterIdSource,
}

/// First source holding a non-blank value, in order
pub fn first_present<'a, I>(sources: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    sources
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Resolve a canister id with precedence injected > build env > fallback
pub fn resolve_canister_id(injected: Option<&str>, build_env: Option<&str>) -> ResolvedCanisterId {
    let candidates = [
        (injected, CanisterIdSource::Injected),
        (build_env, CanisterIdSource::BuildEnv),
    ];

    for (value, source) in candidates {
        if let Some(value) = first_present([value]) {
            return ResolvedCanisterId {
                value: value.to_string(),
                source,
            };
        }
    }

    ResolvedCanisterId {
        value: FALLBACK_CANISTER_ID.to_string(),
        source: CanisterIdSource::Fallback,
    }
}
