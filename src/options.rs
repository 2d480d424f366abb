use libc::{self, c_int};

/// A bitmask of `openlog` behavior flags.
///
/// Built up with chainable setter methods:
///
/// ```
/// use posix_syslog::Options;
///
/// let options = Options::new().pid().ndelay();
/// ```
///
/// The default value has no flags set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Options(c_int);

impl Options {
    /// Makes a new `Options` value with no flags set.
    pub fn new() -> Self {
        Options::default()
    }

    /// Wraps a raw option bitmask.
    ///
    /// No validation is performed: unknown bits are passed through to the OS
    /// as-is, which may silently ignore them. This mirrors the behavior of
    /// passing an arbitrary integer to the C `openlog` directly.
    pub fn from_bits(bits: c_int) -> Self {
        Options(bits)
    }

    /// The raw bitmask, as accepted by the system `openlog` function.
    pub fn into_raw(self) -> c_int {
        self.0
    }

    // The flag methods are all `#[inline]` because, in theory, the optimizer
    // could collapse several flag method calls into a single store
    // operation, which would be much faster…but it can only do that if the
    // calls are all inlined.

    /// Include the process ID in log messages.
    #[inline]
    pub fn pid(mut self) -> Self {
        self.0 |= libc::LOG_PID;
        self
    }

    /// Also write messages to the system console if they cannot be sent to
    /// the syslog server.
    #[inline]
    pub fn cons(mut self) -> Self {
        self.0 |= libc::LOG_CONS;
        self
    }

    /// Immediately open a connection to the syslog server, instead of
    /// waiting until the first log message is sent.
    ///
    /// `ndelay` and `odelay` are mutually exclusive, and one of them is the
    /// default. Exactly which one is the default depends on the platform,
    /// but on most platforms, `odelay` is the default.
    #[inline]
    pub fn ndelay(mut self) -> Self {
        self.0 = (self.0 & !libc::LOG_ODELAY) | libc::LOG_NDELAY;
        self
    }

    /// *Don't* immediately open a connection to the syslog server. Wait
    /// until the first log message is sent before connecting.
    ///
    /// `ndelay` and `odelay` are mutually exclusive, and one of them is the
    /// default. Exactly which one is the default depends on the platform,
    /// but on most platforms, `odelay` is the default.
    #[inline]
    pub fn odelay(mut self) -> Self {
        self.0 = (self.0 & !libc::LOG_NDELAY) | libc::LOG_ODELAY;
        self
    }

    /// If a child process is created to send a log message, don't wait for
    /// that child process to exit.
    ///
    /// This option is highly unlikely to have any effect on any modern
    /// system. It only ever existed as a workaround for limitations of the
    /// 2.11BSD kernel, and was already deprecated as of 4.4BSD. It is
    /// included here only for completeness because, unfortunately, POSIX
    /// defines it.
    #[inline]
    pub fn nowait(mut self) -> Self {
        self.0 |= libc::LOG_NOWAIT;
        self
    }

    /// Also emit log messages on `stderr` (**see warning**).
    ///
    /// # Warning
    ///
    /// The libc `syslog` function is not subject to the global mutex that
    /// Rust uses to synchronize access to `stderr`. As a result, if one
    /// thread writes to `stderr` at the same time as another thread emits a
    /// log message with this option, the log message may appear in the
    /// middle of the other thread's output.
    #[inline]
    pub fn perror(mut self) -> Self {
        self.0 |= libc::LOG_PERROR;
        self
    }
}

impl From<Options> for c_int {
    fn from(options: Options) -> Self {
        options.into_raw()
    }
}

#[test]
fn test_flag_combination() {
    let options = Options::new().pid().cons().ndelay();
    assert_eq!(options.into_raw(), libc::LOG_PID | libc::LOG_CONS | libc::LOG_NDELAY);
}

#[test]
fn test_delay_flags_are_mutually_exclusive() {
    let options = Options::new().ndelay().odelay();
    assert_eq!(options.into_raw() & libc::LOG_NDELAY, 0);
    assert_eq!(options.into_raw() & libc::LOG_ODELAY, libc::LOG_ODELAY);

    let options = Options::new().odelay().ndelay();
    assert_eq!(options.into_raw() & libc::LOG_ODELAY, 0);
    assert_eq!(options.into_raw() & libc::LOG_NDELAY, libc::LOG_NDELAY);
}

#[test]
fn test_raw_bits_pass_through() {
    // Unknown bits are preserved, not rejected.
    let options = Options::from_bits(0x4000);
    assert_eq!(options.into_raw(), 0x4000);
}
