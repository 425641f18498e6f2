//! CLI command messaging system
//!
//! Consistent messages for the configuration commands. Written to stderr so
//! stdout stays clean for snapshots.

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    eprint!("\x1b[1;33m[INFO]\x1b[0m {}", title);
    if !details.is_empty() {
        eprintln!("\t {}", details);
    } else {
        eprintln!();
    }
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    eprint!("\x1b[1;91m[WARN]\x1b[0m {}", title);
    if !details.is_empty() {
        eprintln!("\t {}", details);
    } else {
        eprintln!();
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    eprint!("\x1b[1;32m[SUCCESS]\x1b[0m {}", title);
    if !details.is_empty() {
        eprintln!("\t {}", details);
    } else {
        eprintln!();
    }
}

/// Macro for print_cmd_info! usage
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for print_cmd_warn! usage
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
