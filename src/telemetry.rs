//! Subscriber setup for the `tracing` events the timeline engine emits.
//!
//! Levels used by the engine:
//! - `debug`: dataset loads (resources, time range, consumptions, full datasets
//!   and generated sample data), resizes including deferred ones, and render
//!   requests coalesced into an already pending frame.
//! - `info`: a consumption was selected by a click.
//! - `warn`: a scheduled frame failed to render and was abandoned.
//!
//! Without `RUST_LOG`, `init_default_tracing` applies [`DEFAULT_FILTER`], so
//! only selections and abandoned frames show up. Set
//! `RUST_LOG=resource_timeline=debug` to see loads, resizes and coalescing.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "resource_timeline=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn second_initialization_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
