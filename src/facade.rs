use facility::Facility;
use mask::Mask;
use options::Options;
use priority::Priority;
use std::cell::RefCell;
use std::error::Error;
use std::ffi::{CStr, CString};
use std::fmt::{self, Display};
use std::ptr;
use std::sync::{Mutex, MutexGuard};

#[cfg(not(test))]
use libc::{closelog, openlog, setlogmask, syslog};
#[cfg(test)]
use mock::{closelog, openlog, setlogmask, syslog};

thread_local! {
    static TL_BUF: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(128))
}

lazy_static! {
    /// The `ident` string most recently handed to `openlog`, if it came from
    /// this crate.
    ///
    /// The mutex is to be locked while calling `openlog` or `closelog`.
    ///
    /// # Purpose and rationale
    ///
    /// The POSIX `openlog` function accepts a pointer to a C string. Though
    /// POSIX does not specify the expected lifetime of the string, all known
    /// implementations either
    ///
    /// 1. keep the pointer in a global variable, or
    /// 2. copy the string into an internal buffer, which is kept in a global
    ///    variable.
    ///
    /// When running with an implementation in the second category, the string
    /// may be safely freed right away. When running with an implementation in
    /// the first category, however, the string must not be freed until either
    /// `closelog` is called or `openlog` is called with a *different,
    /// non-null* `ident`.
    ///
    /// This slot owns the current string for exactly that window: [`open`]
    /// replaces it only after `openlog` has been handed the new pointer, and
    /// [`close`] clears it only after `closelog` has returned. Repeated
    /// `open` calls therefore neither free the string early nor accumulate
    /// leaked copies.
    static ref CURRENT_IDENT: Mutex<Option<CString>> = Mutex::new(None);
}

/// Establishes the process-wide logging context.
///
/// The identifier is a short tag that the OS facility attaches to every
/// subsequent log line. It is copied into a process-duration slot, so the
/// caller's string may be dropped freely. An empty identifier is allowed
/// (the OS will emit an empty tag).
///
/// The context — identifier, options, facility — is held by the platform
/// libc until [`close`] or a subsequent `open` overwrites it. Option and
/// facility bit patterns are passed through to the OS unvalidated; unknown
/// bits may be silently ignored, which is documented platform behavior, not
/// an error.
///
/// # Errors
///
/// Fails with [`InvalidIdentError`] if the identifier contains a NUL byte,
/// which cannot be represented in the C string handed to `openlog`. No OS
/// call is made in that case.
///
/// [`close`]: fn.close.html
/// [`InvalidIdentError`]: struct.InvalidIdentError.html
pub fn open(ident: &str, options: Options, facility: Facility) -> Result<(), InvalidIdentError> {
    let ident = CString::new(ident).map_err(|e| InvalidIdentError {
        position: e.nul_position(),
    })?;

    let mut current: MutexGuard<Option<CString>> = CURRENT_IDENT.lock().unwrap();

    // `openlog` must see the new pointer before the previous ident string
    // (if any) is freed.
    unsafe {
        openlog(ident.as_ptr(), options.into_raw(), facility.into());
    }

    *current = Some(ident);
    Ok(())
}

/// Establishes the process-wide logging context with the platform-default
/// identifier.
///
/// Passes a null `ident` pointer to `openlog`. What that means depends on
/// the libc implementation in use: BSD, GNU, and Apple libc use the actual
/// process name, µClibc uses the constant string `syslog`, and Fuchsia libc
/// and musl libc use no name at all.
pub fn open_default(options: Options, facility: Facility) {
    // A null `ident` leaves any previously installed string in use, so the
    // slot is left untouched. The lock still serializes against other
    // `openlog`/`closelog` callers in this crate.
    let _current: MutexGuard<Option<CString>> = CURRENT_IDENT.lock().unwrap();

    unsafe {
        openlog(ptr::null(), options.into_raw(), facility.into());
    }
}

/// Submits a log message to the OS syslog facility.
///
/// The message is used verbatim: it is always passed to the OS as the
/// *argument* of a literal `"%s"` format string, never as a format string
/// itself, so `%` sequences in it are emitted unmodified. Interior NUL
/// bytes, which cannot cross the C string boundary, are stripped.
///
/// The message is emitted only if its severity passes the current
/// [mask](fn.set_mask.html); otherwise the OS silently drops it. Calling
/// `write` without a prior [`open`] is fine — the OS default identity is
/// used.
///
/// [`open`]: fn.open.html
pub fn write<P: Into<Priority>>(priority: P, message: &str) {
    let priority = priority.into().into_raw();

    TL_BUF.with(|tl_buf_ref| {
        let mut tl_buf_mut = tl_buf_ref.borrow_mut();
        let tl_buf = &mut *tl_buf_mut;

        tl_buf.extend_from_slice(message.as_bytes());

        {
            let msg = make_cstr_lossy(tl_buf);

            unsafe {
                syslog(
                    priority,
                    CStr::from_bytes_with_nul_unchecked(b"%s\0").as_ptr(),
                    msg.as_ptr(),
                );
            }
        }

        tl_buf.clear();
    })
}

/// Releases the process-wide logging context.
///
/// Idempotent: calling `close` without a prior [`open`] is a no-op at the
/// facade level (the underlying `closelog` call is made either way, which
/// POSIX permits).
///
/// [`open`]: fn.open.html
pub fn close() {
    let mut current: MutexGuard<Option<CString>> = CURRENT_IDENT.lock().unwrap();

    unsafe {
        closelog();
    }

    // Only now that `closelog` has returned is it safe to free the ident
    // string libc may have been pointing at.
    *current = None;
}

/// Installs a priority mask and returns the mask that was previously in
/// effect.
///
/// Passing a [`Level`] installs an "up to and including" mask admitting that
/// severity and everything more severe, via the [`From<Level>`] conversion
/// on [`Mask`]. Passing a [`Mask`] installs it as-is, which is how a
/// previously returned mask is restored:
///
/// ```no_run
/// use posix_syslog::Level;
///
/// let saved = posix_syslog::set_mask(Level::Err);
/// // ... only err and more severe messages are emitted here ...
/// posix_syslog::set_mask(saved);
/// ```
///
/// [`From<Level>`]: struct.Mask.html#impl-From%3CLevel%3E
/// [`Level`]: enum.Level.html
/// [`Mask`]: struct.Mask.html
pub fn set_mask<M: Into<Mask>>(mask: M) -> Mask {
    let previous = unsafe { setlogmask(mask.into().into_raw()) };
    Mask::from_raw(previous)
}

/// Creates a `&CStr` from the given `Vec<u8>`, removing middle null bytes and
/// adding a null terminator as needed.
fn make_cstr_lossy(s: &mut Vec<u8>) -> &CStr {
    // Strip any null bytes from the string.
    s.retain(|b| *b != 0);

    // Add a null terminator.
    s.push(0);

    // This is sound because we just stripped all the null bytes from the
    // input (except the one at the end).
    unsafe { CStr::from_bytes_with_nul_unchecked(&*s) }
}

/// Indicates that [`open`] was called with an identifier containing a NUL
/// byte.
///
/// [`open`]: fn.open.html
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct InvalidIdentError {
    position: usize,
}

impl InvalidIdentError {
    /// Byte position of the first NUL in the rejected identifier.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for InvalidIdentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "syslog identifier contains a null byte at position {}",
            self.position
        )
    }
}

impl Error for InvalidIdentError {
    #[allow(deprecated)] // Old versions of Rust require this.
    fn description(&self) -> &str {
        "syslog identifier contains a null byte"
    }
}
