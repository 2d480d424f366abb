//! Integration test against the real libc syslog. These calls have no
//! observable failure mode in the POSIX contract; what is being verified is
//! that the whole surface can be driven end to end without panicking and
//! that `setlogmask` round-trips the previous mask.

#![cfg(unix)]

extern crate posix_syslog;

use posix_syslog::{Facility, Level, Mask, Options};

// The facade mutates process-wide state, so the ordered scenario lives in a
// single test function.
#[test]
fn facade_end_to_end() {
    // Close without a prior open is a no-op.
    posix_syslog::close();

    // Writing before any open uses the OS default identity.
    posix_syslog::write(Level::Debug, "posix-syslog integration test: before open");

    posix_syslog::open("posix-syslog-test", Options::new().pid(), Facility::User)
        .expect("open failed");

    // `%` sequences must come through as literal text.
    posix_syslog::write(Level::Info, "posix-syslog integration test: 100% literal");

    // The previous mask is returned and can be restored.
    let initial = posix_syslog::set_mask(Level::Debug);
    let previous = posix_syslog::set_mask(Level::Err);
    assert_eq!(previous, Mask::up_to(Level::Debug));

    // A message filtered by the mask is silently dropped, not an error.
    posix_syslog::write(Level::Debug, "posix-syslog integration test: should be masked");

    posix_syslog::set_mask(initial);

    // Reopen with a different identity, then tear down.
    posix_syslog::open("posix-syslog-test-2", Options::new(), Facility::Local0)
        .expect("reopen failed");
    posix_syslog::write(
        (Level::Notice, Facility::Local1),
        "posix-syslog integration test: reopened",
    );
    posix_syslog::close();
}

#[test]
fn open_rejects_embedded_nul() {
    // Fails before any OS call, so this is safe to run alongside the
    // scenario above.
    let err = posix_syslog::open("bad\0ident", Options::new(), Facility::User).unwrap_err();
    assert_eq!(err.position(), 3);
    assert_eq!(
        err.to_string(),
        "syslog identifier contains a null byte at position 3"
    );
}
