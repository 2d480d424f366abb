//! The POSIX syslog constants, re-exported as plain integers.
//!
//! These are the `libc` values for the host platform, so they match the
//! platform's `<syslog.h>` bit-for-bit — they cross the OS ABI boundary
//! unchanged. Prefer the typed wrappers ([`Level`], [`Facility`],
//! [`Options`], [`Mask`]) in new code; these exports exist for callers that
//! need the raw numeric convention.
//!
//! [`Facility`]: ../enum.Facility.html
//! [`Level`]: ../enum.Level.html
//! [`Mask`]: ../struct.Mask.html
//! [`Options`]: ../struct.Options.html

// Severities, most to least severe.
pub use libc::{
    LOG_EMERG,
    LOG_ALERT,
    LOG_CRIT,
    LOG_ERR,
    LOG_WARNING,
    LOG_NOTICE,
    LOG_INFO,
    LOG_DEBUG,
};

// Facilities.
pub use libc::{
    LOG_KERN,
    LOG_USER,
    LOG_MAIL,
    LOG_DAEMON,
    LOG_AUTH,
    LOG_LPR,
    LOG_NEWS,
    LOG_UUCP,
    LOG_CRON,
    LOG_LOCAL0,
    LOG_LOCAL1,
    LOG_LOCAL2,
    LOG_LOCAL3,
    LOG_LOCAL4,
    LOG_LOCAL5,
    LOG_LOCAL6,
    LOG_LOCAL7,
};

// Options.
pub use libc::{
    LOG_PID,
    LOG_CONS,
    LOG_ODELAY,
    LOG_NDELAY,
    LOG_NOWAIT,
    LOG_PERROR,
};

// The numeric encoding checked below dates back to BSD and is shared by
// every platform this crate compiles for. A mismatch means a libc regression
// or an unexpected target.

#[test]
fn test_severity_values() {
    assert_eq!(LOG_EMERG, 0);
    assert_eq!(LOG_ALERT, 1);
    assert_eq!(LOG_CRIT, 2);
    assert_eq!(LOG_ERR, 3);
    assert_eq!(LOG_WARNING, 4);
    assert_eq!(LOG_NOTICE, 5);
    assert_eq!(LOG_INFO, 6);
    assert_eq!(LOG_DEBUG, 7);
}

#[test]
fn test_facility_values() {
    assert_eq!(LOG_KERN, 0 << 3);
    assert_eq!(LOG_USER, 1 << 3);
    assert_eq!(LOG_MAIL, 2 << 3);
    assert_eq!(LOG_DAEMON, 3 << 3);
    assert_eq!(LOG_AUTH, 4 << 3);
    assert_eq!(LOG_LPR, 6 << 3);
    assert_eq!(LOG_NEWS, 7 << 3);
    assert_eq!(LOG_UUCP, 8 << 3);
    assert_eq!(LOG_CRON, 9 << 3);
    assert_eq!(LOG_LOCAL0, 16 << 3);
    assert_eq!(LOG_LOCAL7, 23 << 3);
}

#[test]
fn test_option_values() {
    assert_eq!(LOG_PID, 0x01);
    assert_eq!(LOG_CONS, 0x02);
    assert_eq!(LOG_ODELAY, 0x04);
    assert_eq!(LOG_NDELAY, 0x08);
    assert_eq!(LOG_NOWAIT, 0x10);
    assert_eq!(LOG_PERROR, 0x20);
}
