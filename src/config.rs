//! Loading syslog settings from a configuration file using [serde]. Requires
//! Cargo feature `serde`.
//!
//! [serde]: https://serde.rs/

use facade::{self, InvalidIdentError};
use facility::Facility;
use level::Level;
use options::Options;
#[cfg(test)] use toml;

/// Deserializable syslog settings.
///
/// Call the [`open`] method to install the settings as the process-wide
/// logging context.
///
/// # TOML example
///
/// ```
/// # extern crate toml;
/// # use posix_syslog::config::SyslogConfig;
/// # use posix_syslog::{Facility, Level};
/// #
/// # const TOML_CONFIG: &'static str = r#"
/// ident = "example-app"
/// facility = "daemon"
/// log_pid = true
/// mask = "notice"
/// # "#;
/// #
/// # let config: SyslogConfig = toml::de::from_str(TOML_CONFIG).expect("deserialization failed");
/// # assert_eq!(config.facility, Facility::Daemon);
/// # assert_eq!(config.mask, Some(Level::Notice));
/// ```
///
/// [`open`]: #method.open
#[derive(Clone, Debug, Deserialize, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(default)]
pub struct SyslogConfig {
    /// The name of this program, for inclusion with log messages. (POSIX
    /// calls this the "tag".)
    ///
    /// The string must not contain any zero (ASCII NUL) bytes.
    ///
    /// If no name is given, the platform default is used: BSD, GNU, and
    /// Apple libc use the actual process name, µClibc uses the constant
    /// string `syslog`, and Fuchsia libc and musl libc use no name at all.
    pub ident: Option<String>,

    /// The syslog facility to send logs to.
    pub facility: Facility,

    /// Include the process ID in log messages.
    pub log_pid: bool,

    /// Also write messages to the system console if they cannot be sent to
    /// the syslog server.
    pub log_cons: bool,

    /// Whether to delay opening a connection to the syslog server.
    ///
    /// If false, a connection is opened immediately on [`open`]. If true,
    /// the connection is only opened when the first log message is
    /// submitted. The default is platform-defined.
    ///
    /// [`open`]: #method.open
    pub log_delay: Option<bool>,

    /// If a child process is created to send a log message, don't wait for
    /// that child process to exit.
    pub log_nowait: bool,

    /// Also emit log messages on `stderr`.
    pub log_perror: bool,

    /// Severity threshold to install after opening, with "up to and
    /// including" semantics.
    ///
    /// If not given, the process's current mask is left in place.
    pub mask: Option<Level>,

    #[serde(skip)]
    __non_exhaustive: (),
}

impl SyslogConfig {
    /// Creates a new `SyslogConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// The `openlog` option flags described by these settings.
    pub fn options(&self) -> Options {
        let options = Options::new();

        let options = match self.log_pid {
            true => options.pid(),
            false => options,
        };

        let options = match self.log_cons {
            true => options.cons(),
            false => options,
        };

        let options = match self.log_delay {
            Some(true) => options.odelay(),
            Some(false) => options.ndelay(),
            None => options,
        };

        let options = match self.log_nowait {
            true => options.nowait(),
            false => options,
        };

        let options = match self.log_perror {
            true => options.perror(),
            false => options,
        };

        options
    }

    /// Installs these settings as the process-wide logging context, then
    /// applies the mask if one is configured.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidIdentError`] if the configured identifier
    /// contains a NUL byte.
    ///
    /// [`InvalidIdentError`]: ../struct.InvalidIdentError.html
    pub fn open(&self) -> Result<(), InvalidIdentError> {
        let options = self.options();

        match self.ident {
            Some(ref ident) => facade::open(ident, options, self.facility)?,
            None => facade::open_default(options, self.facility),
        }

        if let Some(max) = self.mask {
            facade::set_mask(max);
        }

        Ok(())
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        SyslogConfig {
            ident: None,
            facility: Facility::default(),
            log_pid: false,
            log_cons: false,
            log_delay: None,
            log_nowait: false,
            log_perror: false,
            mask: None,
            __non_exhaustive: (),
        }
    }
}

#[test]
fn test_config() {
    const TOML_CONFIG: &'static str = r#"
ident = "foo"
facility = "daemon"
log_pid = true
log_perror = true
mask = "notice"
"#;

    let config: SyslogConfig = toml::de::from_str(TOML_CONFIG).expect("deserialization failed");

    assert_eq!(config, SyslogConfig {
        ident: Some("foo".to_string()),
        facility: Facility::Daemon,
        log_pid: true,
        log_perror: true,
        mask: Some(Level::Notice),
        ..SyslogConfig::default()
    });

    assert_eq!(config.options(), Options::new().pid().perror());
}

#[test]
fn test_config_delay_mapping() {
    let mut config = SyslogConfig::new();
    assert_eq!(config.options(), Options::new());

    config.log_delay = Some(false);
    assert_eq!(config.options(), Options::new().ndelay());

    config.log_delay = Some(true);
    assert_eq!(config.options(), Options::new().odelay());
}
