//! Thin safe facade over the POSIX syslog API. Unix-like platforms only.
//!
//! This crate exposes the four [POSIX syslog] calls — `openlog`, `syslog`,
//! `closelog`, `setlogmask` — as safe Rust functions, along with typed
//! wrappers for the standard priority, facility, and option constants. It is
//! a one-hop delegation layer: no retries, no batching, no formatting
//! pipeline, no transport abstraction. A caller wanting those must layer them
//! on top.
//!
//! [POSIX syslog]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/closelog.html
//!
//! # Example
//!
//! ```no_run
//! use posix_syslog::{Facility, Level, Options};
//!
//! posix_syslog::open("example-app", Options::new().pid(), Facility::Daemon).unwrap();
//! posix_syslog::write(Level::Info, "starting up");
//! posix_syslog::close();
//! ```
//!
//! # Process-wide state
//!
//! POSIX doesn't support opening more than one connection to the syslog
//! server at a time. The identifier, options, and facility passed to [`open`]
//! are stored in global variables by the platform libc, are overwritten
//! whenever [`open`] is called again, and are reset by [`close`]. Multiple
//! "instances" of this facade in one process therefore share a single logging
//! context: concurrent [`open`] calls are last-writer-wins, consistent with
//! the underlying OS contract. Libraries should not call [`open`] or
//! [`close`] unless specifically told to do so by the main application.
//!
//! # Cargo features
//!
//! * `serde` — syslog settings can be loaded from a configuration file using
//!   [`config::SyslogConfig`].
//! * `slog` — a minimal [`SyslogDrain`] that submits `slog` records through
//!   the facade.
//!
//! [`config::SyslogConfig`]: config/struct.SyslogConfig.html
//! [`SyslogDrain`]: struct.SyslogDrain.html
//! [`open`]: fn.open.html
//! [`close`]: fn.close.html

// # Design and rationale
//
// (This section is not part of the documentation for this crate. It's only a
// source code comment.)
//
// This crate uses the POSIX syslog API rather than connecting to `/dev/log`
// or `/var/run/log` directly. POSIX specifies the functions but not the
// socket path or the protocol spoken on it, both of which vary between
// systems (and OpenBSD uses a dedicated system call instead of a socket).
// Calling through libc avoids reimplementing socket management, reopening,
// and message framing in Rust, and works identically on every platform that
// has a `syslog` function.

#![cfg(unix)]
#![warn(missing_docs)]

extern crate libc;

#[macro_use]
extern crate lazy_static;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "slog")]
#[cfg_attr(test, macro_use)]
extern crate slog;

#[cfg(all(test, feature = "serde"))]
extern crate toml;

pub mod consts;

#[cfg(feature = "serde")]
pub mod config;

#[cfg(feature = "slog")]
mod drain;
#[cfg(feature = "slog")]
pub use drain::*;

mod facade;
pub use facade::*;

mod facility;
pub use facility::*;

mod level;
pub use level::*;

mod mask;
pub use mask::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

mod options;
pub use options::*;

mod priority;
pub use priority::*;
