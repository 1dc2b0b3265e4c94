//! Logging facilities for Strata Shell.
//!
//! Strata Shell instruments itself with the `tracing` crate. Install any
//! subscriber in the host application to see logs:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The [`targets`] constants can be used in `tracing` filter directives to
//! narrow logs to a single subsystem, e.g.
//! `RUST_LOG=strata_shell_core::signal=trace`.

/// Target names for log filtering, one per subsystem.
pub mod targets {
    /// Core crate umbrella target.
    pub const CORE: &str = "strata_shell_core";
    /// Signal/slot system.
    pub const SIGNAL: &str = "strata_shell_core::signal";
    /// Property system.
    pub const PROPERTY: &str = "strata_shell_core::property";
    /// Object identity.
    pub const OBJECT: &str = "strata_shell_core::object";
}
