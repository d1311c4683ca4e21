//! Console messaging macros.
//!
//! Each macro prints a [`Message`](super::Message) (or any `Display` value).
//! In debug mode the text is routed through `tracing` instead of stdout/stderr
//! so it interleaves with the structured request logs.
//!
//! Debug mode is on when `TASKDESK_DEBUG` or `RUST_LOG` is set; the check is
//! done once and cached.
//!
//! ```rust
//! use taskdesk::{msg_info, msg_success};
//! use taskdesk::libs::messages::Message;
//!
//! msg_success!(Message::CategoryCreated("Work".to_string()));
//! msg_info!(Message::DatabaseUpToDate, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDESK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message.
///
/// Pass `true` as a second argument to surround the text with blank lines.
///
/// ```rust
/// use taskdesk::msg_print;
/// use taskdesk::libs::messages::Message;
///
/// msg_print!(Message::MigrationHistory);
/// msg_print!(format!("{} task(s)", 3), true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```rust
/// use taskdesk::msg_success;
/// use taskdesk::libs::messages::Message;
///
/// msg_success!(Message::TaskCreated(1));
/// msg_success!(Message::AllMigrationsCompleted, true);
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix; stderr outside debug mode.
///
/// ```rust
/// use taskdesk::msg_error;
/// use taskdesk::libs::messages::Message;
///
/// msg_error!(Message::MigrationFailed(2, "disk full".to_string()));
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
///
/// ```rust
/// use taskdesk::msg_warning;
/// use taskdesk::libs::messages::Message;
///
/// msg_warning!(Message::ConfigOverwritten);
/// ```
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
///
/// ```rust
/// use taskdesk::msg_info;
/// use taskdesk::libs::messages::Message;
///
/// msg_info!(Message::DatabaseVersion(2));
/// msg_info!(Message::DatabaseNeedsUpdate, true);
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix; suppressed outside debug mode.
///
/// ```rust
/// use taskdesk::msg_debug;
///
/// msg_debug!(format!("{} pending migration(s)", 0));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
