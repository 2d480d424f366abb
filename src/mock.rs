//! Mocks for the POSIX `syslog` API.
//!
//! The mock `syslog` function here is a bit different from the real one. It
//! takes exactly three parameters, whereas the real one takes two or more.
//! This works for our purposes because this crate always calls it with
//! exactly three parameters anyway.

use libc::{c_char, c_int};
use std::ffi::CStr;
use std::mem;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

/// What a fresh process's priority mask looks like: everything admitted.
pub const INITIAL_MASK: c_int = 0xff;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    OpenLog {
        ident: Option<String>,
        flags: c_int,
        facility: c_int,
    },
    CloseLog,
    SysLog {
        priority: c_int,
        message_f: String,
        message: String,
    },
    SetLogMask {
        mask: c_int,
    },
}

lazy_static! {
    static ref EVENTS: Mutex<Vec<Event>> = Mutex::new(Vec::new());
    static ref MASK: Mutex<c_int> = Mutex::new(INITIAL_MASK);
    static ref TESTING: Mutex<()> = Mutex::new(());
}

/// Runs `f` with exclusive access to the mock, returning its result and the
/// events recorded while it ran.
///
/// The facade mutates process-wide state, so tests that drive it must not
/// interleave. The mask is reset to [`INITIAL_MASK`] on entry so tests see a
/// fresh-process view regardless of ordering.
pub fn testing<T>(f: impl FnOnce() -> T) -> (T, Vec<Event>) {
    let locked = TESTING.lock().unwrap();

    *MASK.lock().unwrap() = INITIAL_MASK;
    take_events();

    let result = catch_unwind(AssertUnwindSafe(f));
    let events = take_events();

    drop(locked);

    match result {
        Ok(ok) => (ok, events),
        Err(panicked) => resume_unwind(panicked),
    }
}

pub fn take_events() -> Vec<Event> {
    let mut events: MutexGuard<Vec<Event>> = EVENTS.lock().unwrap();
    mem::replace(&mut *events, Vec::new())
}

pub fn push_event(event: Event) {
    let mut events: MutexGuard<Vec<Event>> = EVENTS.lock().unwrap();
    events.push(event);
}

pub unsafe extern "C" fn openlog(ident: *const c_char, logopt: c_int, facility: c_int) {
    push_event(Event::OpenLog {
        ident: if ident.is_null() {
            None
        } else {
            Some(string_from_ptr(ident))
        },
        flags: logopt,
        facility,
    });
}

pub unsafe extern "C" fn closelog() {
    push_event(Event::CloseLog);
}

pub unsafe extern "C" fn syslog(priority: c_int, message_f: *const c_char, message: *const c_char) {
    push_event(Event::SysLog {
        priority,
        message_f: string_from_ptr(message_f),
        message: string_from_ptr(message),
    });
}

pub unsafe extern "C" fn setlogmask(maskpri: c_int) -> c_int {
    let mut mask: MutexGuard<c_int> = MASK.lock().unwrap();
    let previous = *mask;

    // POSIX: a zero argument queries the current mask without changing it.
    if maskpri != 0 {
        *mask = maskpri;
    }

    push_event(Event::SetLogMask { mask: maskpri });
    previous
}

pub unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    String::from(CStr::from_ptr(ptr).to_string_lossy())
}
