//! Shared logging utilities for consistent tracing across host and modules

use crate::types::ModuleId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the filter directive for the registered module at a base level
pub fn filter_directive(module_id: &ModuleId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    match module_id {
        ModuleId::Host => format!("host={base_level},customer={base_level},shared={base_level}"),
        ModuleId::Customer => format!("customer={base_level},shared={base_level}"),
    }
}

/// Initialize tracing subscriber with an optional log level
///
/// Uses the global module ID, so `ModuleId::init_*` should run first.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(ModuleId::current(), log_level);

    // try_init: a second call (tests, embedded hosts) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for module-aware info logging
#[macro_export]
macro_rules! module_info {
    ($module_id:expr, $($arg:tt)*) => {
        tracing::info!(
            module = %$module_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for module-aware warning logging
#[macro_export]
macro_rules! module_warn {
    ($module_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            module = %$module_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for module-aware error logging
#[macro_export]
macro_rules! module_error {
    ($module_id:expr, $($arg:tt)*) => {
        tracing::error!(
            module = %$module_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for module-aware debug logging
#[macro_export]
macro_rules! module_debug {
    ($module_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            module = %$module_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(module_id: &ModuleId, details: &str) {
    info!(
        module = %module_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(module_id: &ModuleId, reason: &str) {
    info!(
        module = %module_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(module_id: &ModuleId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        module = %module_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(module_id: &ModuleId, message: &str) {
    info!(
        module = %module_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_per_module() {
        assert_eq!(
            filter_directive(&ModuleId::Customer, None),
            "customer=info,shared=info"
        );
        assert_eq!(
            filter_directive(&ModuleId::Host, Some("debug")),
            "host=debug,customer=debug,shared=debug"
        );
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
