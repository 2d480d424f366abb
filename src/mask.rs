use level::Level;
use libc::c_int;

/// A priority mask, restricting which severities the OS actually emits.
///
/// Each bit admits one [`Level`]: bit `1 << level` is set if messages of
/// that severity pass the filter. The mask installed by
/// [`set_mask`](fn.set_mask.html) is observable state — the previous mask is
/// returned so it can be inspected or restored later.
///
/// [`Level`]: enum.Level.html
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Mask(c_int);

impl Mask {
    /// A mask admitting the given level and everything more severe.
    ///
    /// This is the `LOG_UPTO` computation from `<syslog.h>`: "up to"
    /// follows the priority ordering, in which more severe levels have
    /// lower numeric values.
    pub fn up_to(level: Level) -> Mask {
        Mask((1 << (c_int::from(level) + 1)) - 1)
    }

    /// A mask admitting only the given level.
    ///
    /// This is the `LOG_MASK` computation from `<syslog.h>`. Masks can be
    /// combined with [`union`](#method.union) to admit several individual
    /// levels.
    pub fn only(level: Level) -> Mask {
        Mask(1 << c_int::from(level))
    }

    /// A mask admitting every level.
    pub fn all() -> Mask {
        Mask::up_to(Level::Debug)
    }

    /// Whether messages of the given severity pass this mask.
    pub fn admits(self, level: Level) -> bool {
        self.0 & (1 << c_int::from(level)) != 0
    }

    /// The union of two masks, admitting what either admits.
    pub fn union(self, other: Mask) -> Mask {
        Mask(self.0 | other.0)
    }

    /// Wraps a raw mask value, as returned by the system `setlogmask`
    /// function. No validation is performed.
    pub fn from_raw(mask: c_int) -> Mask {
        Mask(mask)
    }

    /// The raw mask value, as accepted by the system `setlogmask` function.
    pub fn into_raw(self) -> c_int {
        self.0
    }
}

/// The "up to and including" conversion: `Mask::from(level)` is
/// [`Mask::up_to(level)`](struct.Mask.html#method.up_to). This is what lets
/// [`set_mask`](fn.set_mask.html) accept a bare [`Level`](enum.Level.html)
/// as its severity threshold.
impl From<Level> for Mask {
    fn from(level: Level) -> Mask {
        Mask::up_to(level)
    }
}

#[test]
fn test_up_to_bit_pattern() {
    // LOG_UPTO(LOG_DEBUG) admits all eight levels.
    assert_eq!(Mask::up_to(Level::Debug).into_raw(), 0xff);

    // LOG_UPTO(LOG_EMERG) admits only the most severe level.
    assert_eq!(Mask::up_to(Level::Emerg).into_raw(), 0x01);
}

#[test]
fn test_up_to_admits_more_severe() {
    let mask = Mask::up_to(Level::Warning);

    assert!(mask.admits(Level::Emerg));
    assert!(mask.admits(Level::Err));
    assert!(mask.admits(Level::Warning));
    assert!(!mask.admits(Level::Notice));
    assert!(!mask.admits(Level::Info));
    assert!(!mask.admits(Level::Debug));
}

#[test]
fn test_only_and_union() {
    let mask = Mask::only(Level::Debug).union(Mask::only(Level::Emerg));

    assert!(mask.admits(Level::Debug));
    assert!(mask.admits(Level::Emerg));
    assert!(!mask.admits(Level::Info));
}

#[test]
fn test_from_level_is_up_to() {
    assert_eq!(Mask::from(Level::Err), Mask::up_to(Level::Err));
}
