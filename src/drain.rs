use facade;
use level::Level;
use priority::Priority;
use slog::{Drain, Never, OwnedKVList, Record};

/// [`Drain`] implementation that submits log messages through the facade.
/// Requires Cargo feature `slog`.
///
/// This is deliberately minimal: only the record's message is sent —
/// key-value pairs are not rendered — and the severity comes from
/// [`Level::from_slog`] unless a fixed [`Priority`] override is set with
/// [`with_priority`]. The logging context itself (identifier, options,
/// facility) is whatever the application last installed with
/// [`open`](fn.open.html); constructing a drain does not open anything.
///
/// # Example
///
/// ```no_run
/// #[macro_use] extern crate slog;
/// # extern crate posix_syslog;
///
/// use posix_syslog::{Facility, Options, SyslogDrain};
/// use slog::Logger;
///
/// # fn main() {
/// posix_syslog::open("example-app", Options::new().pid(), Facility::User).unwrap();
///
/// let logger = Logger::root(SyslogDrain::new(), o!());
/// info!(logger, "hello from slog");
/// # }
/// ```
///
/// [`Drain`]: https://docs.rs/slog/2/slog/trait.Drain.html
/// [`Level::from_slog`]: enum.Level.html#method.from_slog
/// [`Priority`]: struct.Priority.html
/// [`with_priority`]: #method.with_priority
#[derive(Clone, Copy, Debug, Default)]
pub struct SyslogDrain {
    priority: Option<Priority>,
}

impl SyslogDrain {
    /// Creates a new `SyslogDrain` that maps each record's level to a syslog
    /// severity.
    pub fn new() -> Self {
        SyslogDrain::default()
    }

    /// Submits every record with the given fixed priority instead of mapping
    /// the record's level.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Drain for SyslogDrain {
    type Ok = ();
    type Err = Never;

    fn log(&self, record: &Record, _values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let priority = match self.priority {
            Some(priority) => priority,
            None => Priority::from(Level::from_slog(record.level())),
        };

        facade::write(priority, &record.msg().to_string());

        Ok(())
    }
}
