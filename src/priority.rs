use facility::Facility;
use level::Level;
use libc::c_int;
use std::cmp::{Eq, PartialEq};
use std::hash::{Hash, Hasher};

/// A syslog priority (combination of [severity level] and [facility]).
///
/// Each message sent to syslog has a "priority", which consists of a
/// required [severity level] and an optional [facility]. This structure
/// represents a priority, either as symbolic level and facility (created
/// with the [`new`] method), or as a raw numeric value (created with the
/// [`from_raw`] method).
///
/// Several convenient `From` implementations are also provided, so
/// [`write`] can be called with a bare [`Level`][severity level] or a
/// `(Level, Facility)` pair. `From<c_int>` is not provided because it would
/// be unsound (see the "safety" section of the documentation for the
/// [`from_raw`] method).
///
/// [facility]: enum.Facility.html
/// [`from_raw`]: #method.from_raw
/// [`new`]: #method.new
/// [severity level]: enum.Level.html
/// [`write`]: fn.write.html
#[derive(Clone, Copy, Debug)]
pub struct Priority(PriorityKind);

impl Priority {
    /// Creates a new `Priority` consisting of the given `Level` and
    /// `Option<Facility>`.
    ///
    /// If no facility is given, the OS uses the facility installed by the
    /// most recent [`open`](fn.open.html), or the platform default.
    pub fn new(level: Level, facility: Option<Facility>) -> Self {
        Priority(PriorityKind::Normal(level, facility))
    }

    /// The `Level` that this `Priority` was created with.
    ///
    /// This will be `None` if this `Priority` was created with the
    /// [`from_raw`] method.
    ///
    /// [`from_raw`]: #method.from_raw
    pub fn level(self) -> Option<Level> {
        match self.0 {
            PriorityKind::Normal(level, _) => Some(level),
            PriorityKind::Raw(_) => None,
        }
    }

    /// The `Facility` that this `Priority` was created with, if any.
    ///
    /// This will be `None` if this `Priority` was created without a
    /// `Facility` or if this `Priority` was created with the [`from_raw`]
    /// method.
    ///
    /// [`from_raw`]: #method.from_raw
    pub fn facility(self) -> Option<Facility> {
        match self.0 {
            PriorityKind::Normal(_, facility) => facility,
            PriorityKind::Raw(_) => None,
        }
    }

    /// Creates a new `Priority` from the given raw numeric value.
    ///
    /// The value is passed through to the OS unvalidated.
    ///
    /// # Safety
    ///
    /// The numeric priority value must be valid for the system that the
    /// program is running on, using the `libc::LOG_*` constants. [POSIX]
    /// does not specify what happens if an incorrect numeric priority value
    /// is passed to the system `syslog` function.
    ///
    /// [POSIX]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/closelog.html
    pub unsafe fn from_raw(priority: c_int) -> Self {
        Priority(PriorityKind::Raw(priority))
    }

    /// Converts this `Priority` into a raw numeric value, as accepted by the
    /// system `syslog` function.
    pub fn into_raw(self) -> c_int {
        match self.0 {
            PriorityKind::Normal(level, facility) =>
                c_int::from(level) | facility.map(c_int::from).unwrap_or(0),

            PriorityKind::Raw(priority) => priority,
        }
    }
}

impl PartialEq<Priority> for Priority {
    fn eq(&self, other: &Priority) -> bool {
        self.into_raw() == other.into_raw()
    }
}

impl Eq for Priority {}

impl Hash for Priority {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.into_raw().hash(state)
    }
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        Priority::new(level, None)
    }
}

impl From<(Level, Option<Facility>)> for Priority {
    fn from((level, facility): (Level, Option<Facility>)) -> Self {
        Priority::new(level, facility)
    }
}

impl From<(Level, Facility)> for Priority {
    fn from((level, facility): (Level, Facility)) -> Self {
        Priority::new(level, Some(facility))
    }
}

#[derive(Clone, Copy, Debug)]
enum PriorityKind {
    Normal(Level, Option<Facility>),
    Raw(c_int),
}

#[test]
fn test_into_raw() {
    use libc;

    let prio = Priority::new(Level::Warning, Some(Facility::Local3));
    assert_eq!(prio.into_raw(), libc::LOG_WARNING | libc::LOG_LOCAL3);

    let prio = Priority::new(Level::Alert, None);
    assert_eq!(prio.into_raw(), libc::LOG_ALERT);

    let prio = unsafe { Priority::from_raw(libc::LOG_NOTICE | libc::LOG_MAIL) };
    assert_eq!(prio.into_raw(), libc::LOG_NOTICE | libc::LOG_MAIL);
    assert_eq!(prio.level(), None);
    assert_eq!(prio.facility(), None);
}
