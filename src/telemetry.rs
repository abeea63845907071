//! Opt-in tracing setup for hosts embedding `slice-nav`.
//!
//! Scroll dispatch emits `tracing` events under the `slice_nav` target:
//! `debug` for committed moves, `trace` for skipped scrolls, `warn` for
//! volumes that resolved without a renderable actor.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "slice_nav=info";

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(None)
}

/// Same as [`init_default_tracing`] but with explicit filter directives that
/// take precedence over `RUST_LOG`.
#[must_use]
pub fn init_tracing_with_filter(directives: Option<&str>) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match directives {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
