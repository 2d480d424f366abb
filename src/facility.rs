use libc::{self, c_int};
use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A syslog facility. Conversions are provided to and from `c_int`.
///
/// The facility selects the logging subsystem category a message is filed
/// under. Every variant of this `enum` is defined by libc on all Unix-like
/// targets this crate compiles for, so no platform mapping is needed.
///
/// The default facility is [`User`].
///
/// [`User`]: #variant.User
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facility {
    /// Authentication, authorization, and other security-related matters.
    Auth,

    /// Periodic task scheduling daemons like `cron`.
    Cron,

    /// Daemons that don't fall into a more specific category.
    Daemon,

    /// Operating system kernel.
    ///
    /// Note: Programs other than the kernel are typically not allowed to use
    /// this facility.
    Kern,

    /// Reserved for local use.
    Local0,

    /// Reserved for local use.
    Local1,

    /// Reserved for local use.
    Local2,

    /// Reserved for local use.
    Local3,

    /// Reserved for local use.
    Local4,

    /// Reserved for local use.
    Local5,

    /// Reserved for local use.
    Local6,

    /// Reserved for local use.
    Local7,

    /// Print server.
    Lpr,

    /// Mail transport and delivery agents.
    Mail,

    /// Usenet news system.
    News,

    /// General user processes.
    ///
    /// Note: This is the default facility (that is, the value returned by
    /// `Facility::default()`).
    User,

    /// Unix-to-Unix Copy system.
    Uucp,
}

impl Facility {
    /// Gets the name of this `Facility`, in lowercase.
    ///
    /// The `FromStr` implementation accepts the same names, but it is
    /// case-insensitive.
    pub fn name(&self) -> &'static str {
        match *self {
            Facility::Auth   => "auth",
            Facility::Cron   => "cron",
            Facility::Daemon => "daemon",
            Facility::Kern   => "kern",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
            Facility::Lpr    => "lpr",
            Facility::Mail   => "mail",
            Facility::News   => "news",
            Facility::User   => "user",
            Facility::Uucp   => "uucp",
        }
    }

    /// Converts a `libc::LOG_*` numeric constant to a `Facility` value.
    ///
    /// Returns `Some` if the value is a valid facility identifier, or `None`
    /// if not.
    pub fn from_int(value: c_int) -> Option<Facility> {
        match value {
            libc::LOG_AUTH => Some(Facility::Auth),
            libc::LOG_CRON => Some(Facility::Cron),
            libc::LOG_DAEMON => Some(Facility::Daemon),
            libc::LOG_KERN => Some(Facility::Kern),
            libc::LOG_LOCAL0 => Some(Facility::Local0),
            libc::LOG_LOCAL1 => Some(Facility::Local1),
            libc::LOG_LOCAL2 => Some(Facility::Local2),
            libc::LOG_LOCAL3 => Some(Facility::Local3),
            libc::LOG_LOCAL4 => Some(Facility::Local4),
            libc::LOG_LOCAL5 => Some(Facility::Local5),
            libc::LOG_LOCAL6 => Some(Facility::Local6),
            libc::LOG_LOCAL7 => Some(Facility::Local7),
            libc::LOG_LPR => Some(Facility::Lpr),
            libc::LOG_MAIL => Some(Facility::Mail),
            libc::LOG_NEWS => Some(Facility::News),
            libc::LOG_USER => Some(Facility::User),
            libc::LOG_UUCP => Some(Facility::Uucp),
            _ => None,
        }
    }
}

impl Default for Facility {
    fn default() -> Self {
        Facility::User
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Facility> for c_int {
    fn from(facility: Facility) -> Self {
        match facility {
            Facility::Auth => libc::LOG_AUTH,
            Facility::Cron => libc::LOG_CRON,
            Facility::Daemon => libc::LOG_DAEMON,
            Facility::Kern => libc::LOG_KERN,
            Facility::Local0 => libc::LOG_LOCAL0,
            Facility::Local1 => libc::LOG_LOCAL1,
            Facility::Local2 => libc::LOG_LOCAL2,
            Facility::Local3 => libc::LOG_LOCAL3,
            Facility::Local4 => libc::LOG_LOCAL4,
            Facility::Local5 => libc::LOG_LOCAL5,
            Facility::Local6 => libc::LOG_LOCAL6,
            Facility::Local7 => libc::LOG_LOCAL7,
            Facility::Lpr => libc::LOG_LPR,
            Facility::Mail => libc::LOG_MAIL,
            Facility::News => libc::LOG_NEWS,
            Facility::User => libc::LOG_USER,
            Facility::Uucp => libc::LOG_UUCP,
        }
    }
}

impl FromStr for Facility {
    type Err = UnknownFacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();

        match &*s {
            "auth"   => Ok(Facility::Auth),
            "cron"   => Ok(Facility::Cron),
            "daemon" => Ok(Facility::Daemon),
            "kern"   => Ok(Facility::Kern),
            "local0" => Ok(Facility::Local0),
            "local1" => Ok(Facility::Local1),
            "local2" => Ok(Facility::Local2),
            "local3" => Ok(Facility::Local3),
            "local4" => Ok(Facility::Local4),
            "local5" => Ok(Facility::Local5),
            "local6" => Ok(Facility::Local6),
            "local7" => Ok(Facility::Local7),
            "lpr"    => Ok(Facility::Lpr),
            "mail"   => Ok(Facility::Mail),
            "news"   => Ok(Facility::News),
            "user"   => Ok(Facility::User),
            "uucp"   => Ok(Facility::Uucp),
            _ => Err(UnknownFacilityError { name: s }),
        }
    }
}

/// Indicates that `<Facility as FromStr>::from_str` was called with an
/// unknown facility name.
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnknownFacilityError {
    name: String,
}

impl UnknownFacilityError {
    /// The unrecognized facility name.
    pub fn name(&self) -> &str {
        &*self.name
    }
}

impl Display for UnknownFacilityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized syslog facility name `{}`", self.name)
    }
}

impl Error for UnknownFacilityError {
    #[allow(deprecated)] // Old versions of Rust require this.
    fn description(&self) -> &str {
        "unrecognized syslog facility name"
    }
}

#[test]
fn test_facility_from_str() {
    assert_eq!(Facility::from_str("daemon"), Ok(Facility::Daemon));
    assert_eq!(Facility::from_str("LOCAL5"), Ok(Facility::Local5));
    assert_eq!(Facility::from_str("foobar"), Err(UnknownFacilityError { name: "foobar".to_string() }));
    assert_eq!(Facility::from_str("foobar").unwrap_err().to_string(), "unrecognized syslog facility name `foobar`");
}

#[test]
fn test_facility_int_round_trip() {
    for &facility in &[
        Facility::Auth,
        Facility::Cron,
        Facility::Kern,
        Facility::Local0,
        Facility::Local7,
        Facility::User,
    ] {
        assert_eq!(Facility::from_int(c_int::from(facility)), Some(facility));
    }

    assert_eq!(Facility::from_int(-1), None);
}
