use facility::Facility;
use level::Level;
use libc;
use mask::Mask;
use mock;
use options::Options;
use {close, open, open_default, set_mask, write};

#[test]
fn test_open_write_close() {
    let ((), events) = mock::testing(|| {
        open("example-app", Options::new().pid().ndelay(), Facility::Local0).unwrap();
        write(Level::Info, "Hello, world!");
        close();
    });

    let expected_events = vec![
        mock::Event::OpenLog {
            ident: Some("example-app".to_string()),
            flags: libc::LOG_PID | libc::LOG_NDELAY,
            facility: libc::LOG_LOCAL0,
        },
        mock::Event::SysLog {
            priority: libc::LOG_INFO,
            message_f: "%s".to_string(),
            message: "Hello, world!".to_string(),
        },
        mock::Event::CloseLog,
    ];

    assert!(events == expected_events, "events didn't match\ngot: {:#?}\nexpected: {:#?}", events, expected_events);
}

#[test]
fn test_write_is_not_a_format_string() {
    // A message that looks like it contains conversion specifiers must reach
    // the OS as the argument of a literal "%s", never as the format itself.
    let ((), events) = mock::testing(|| {
        write(Level::Notice, "backup 100% done, %d%n leftovers");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_NOTICE,
            message_f: "%s".to_string(),
            message: "backup 100% done, %d%n leftovers".to_string(),
        },
    ]);
}

#[test]
fn test_write_before_open_uses_default_identity() {
    let ((), events) = mock::testing(|| {
        write(Level::Debug, "no openlog was called");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_DEBUG,
            message_f: "%s".to_string(),
            message: "no openlog was called".to_string(),
        },
    ]);
}

#[test]
fn test_close_without_open_is_idempotent() {
    let ((), events) = mock::testing(|| {
        close();
        close();
    });

    assert_eq!(events, vec![mock::Event::CloseLog, mock::Event::CloseLog]);
}

#[test]
fn test_write_with_explicit_facility() {
    let ((), events) = mock::testing(|| {
        write((Level::Warning, Facility::Mail), "queue is stuck");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_WARNING | libc::LOG_MAIL,
            message_f: "%s".to_string(),
            message: "queue is stuck".to_string(),
        },
    ]);
}

#[test]
fn test_interior_nul_is_stripped() {
    let ((), events) = mock::testing(|| {
        write(Level::Err, "before\0after");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_ERR,
            message_f: "%s".to_string(),
            message: "beforeafter".to_string(),
        },
    ]);
}

#[test]
fn test_set_mask_returns_previous_mask() {
    let ((first, second), events) = mock::testing(|| {
        let first = set_mask(Level::Warning);
        let second = set_mask(Level::Debug);
        (first, second)
    });

    // The first call sees the fresh-process mask; the second sees exactly
    // the mask the first call installed.
    assert_eq!(first, Mask::from_raw(mock::INITIAL_MASK));
    assert_eq!(second, Mask::up_to(Level::Warning));

    assert_eq!(events, vec![
        mock::Event::SetLogMask { mask: Mask::up_to(Level::Warning).into_raw() },
        mock::Event::SetLogMask { mask: Mask::up_to(Level::Debug).into_raw() },
    ]);
}

#[test]
fn test_set_mask_round_trips_a_saved_mask() {
    let ((), _events) = mock::testing(|| {
        let saved = set_mask(Level::Err);
        let installed = set_mask(saved);

        assert_eq!(installed, Mask::up_to(Level::Err));
        assert_eq!(set_mask(Level::Debug), Mask::from_raw(mock::INITIAL_MASK));
    });
}

#[test]
fn test_reopen_replaces_context_without_close() {
    // A second `open` overwrites the context in place. No intervening
    // `closelog` happens; the previous ident string stays allocated until
    // `openlog` has been handed the new one.
    let ((), events) = mock::testing(|| {
        open("first", Options::new(), Facility::User).unwrap();
        open("second", Options::new().perror(), Facility::Daemon).unwrap();
        close();
    });

    let expected_events = vec![
        mock::Event::OpenLog {
            ident: Some("first".to_string()),
            flags: 0,
            facility: libc::LOG_USER,
        },
        mock::Event::OpenLog {
            ident: Some("second".to_string()),
            flags: libc::LOG_PERROR,
            facility: libc::LOG_DAEMON,
        },
        mock::Event::CloseLog,
    ];

    assert!(events == expected_events, "events didn't match\ngot: {:#?}\nexpected: {:#?}", events, expected_events);
}

#[test]
fn test_open_allows_empty_ident() {
    let ((), events) = mock::testing(|| {
        open("", Options::new(), Facility::User).unwrap();
    });

    assert_eq!(events, vec![
        mock::Event::OpenLog {
            ident: Some(String::new()),
            flags: 0,
            facility: libc::LOG_USER,
        },
    ]);
}

#[test]
fn test_open_default_passes_null_ident() {
    let ((), events) = mock::testing(|| {
        open_default(Options::new().cons(), Facility::Cron);
    });

    assert_eq!(events, vec![
        mock::Event::OpenLog {
            ident: None,
            flags: libc::LOG_CONS,
            facility: libc::LOG_CRON,
        },
    ]);
}

#[test]
fn test_open_rejects_embedded_nul_before_any_os_call() {
    let (result, events) = mock::testing(|| {
        open("bad\0ident", Options::new(), Facility::User)
    });

    assert_eq!(result.unwrap_err().position(), 3);
    assert_eq!(events, vec![]);
}

#[test]
fn test_raw_option_bits_pass_through_to_openlog() {
    let ((), events) = mock::testing(|| {
        open("raw", Options::from_bits(0x4000 | libc::LOG_PID), Facility::User).unwrap();
    });

    assert_eq!(events, vec![
        mock::Event::OpenLog {
            ident: Some("raw".to_string()),
            flags: 0x4000 | libc::LOG_PID,
            facility: libc::LOG_USER,
        },
    ]);
}

#[cfg(feature = "slog")]
#[test]
fn test_drain_submits_record_messages() {
    use drain::SyslogDrain;
    use slog::Logger;

    let ((), events) = mock::testing(|| {
        let logger = Logger::root_typed(SyslogDrain::new(), o!());

        warn!(logger, "disk almost full");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_WARNING,
            message_f: "%s".to_string(),
            message: "disk almost full".to_string(),
        },
    ]);
}

#[cfg(feature = "slog")]
#[test]
fn test_drain_priority_override() {
    use drain::SyslogDrain;
    use priority::Priority;
    use slog::Logger;

    let ((), events) = mock::testing(|| {
        let drain = SyslogDrain::new()
            .with_priority(Priority::new(Level::Alert, Some(Facility::Local5)));
        let logger = Logger::root_typed(drain, o!());

        info!(logger, "treated as an alert");
    });

    assert_eq!(events, vec![
        mock::Event::SysLog {
            priority: libc::LOG_ALERT | libc::LOG_LOCAL5,
            message_f: "%s".to_string(),
            message: "treated as an alert".to_string(),
        },
    ]);
}
