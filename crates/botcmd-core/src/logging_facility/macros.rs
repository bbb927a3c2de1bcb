//! Canonical logging macros
//!
//! Every store operation emits exactly one `start` and one `end` or
//! `end_error` event through these.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use botcmd_core::log_op_start;
/// log_op_start!("add_command");
/// log_op_start!("add_command", command = "greet");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use botcmd_core::log_op_end;
/// log_op_end!("add_command", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into a `CmdError` so the event always carries the
/// stable kind and code.
///
/// # Example
///
/// ```
/// # use botcmd_core::{log_op_error, errors::CommandError};
/// let err = CommandError::NotFound { name: "greet".to_string() };
/// log_op_error!("get_command", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let cmd_err: $crate::errors::CmdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cmd_err.kind(),
            err.code = cmd_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let cmd_err: $crate::errors::CmdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cmd_err.kind(),
            err.code = cmd_err.code(),
            $($field)*
        );
    }};
}
