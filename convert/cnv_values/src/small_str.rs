//! Fixed-capacity inline string.
//!
//! `SmallStr` holds up to [`MAX_LEN`] bytes of UTF-8 directly in the value,
//! so an array of them is one contiguous block with no heap allocation.
//! Performance-style converter tests use it as a conversion target.
//!
//! # Memory Layout
//!
//! `len(1) + bytes(11) = 12 bytes`, alignment 1. The footprint equals
//! [`CAPACITY`]: the length byte takes the place of a trailing terminator,
//! which is why the longest storable text is `CAPACITY - 1` bytes.
//!
//! # Capacity violations
//!
//! [`SmallStr::from_text`] and [`SmallStr::assign`] treat oversize input as
//! a broken precondition and panic. [`SmallStr::try_from`] and
//! [`SmallStr::try_assign`] report it as a [`CapacityError`] instead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use crate::CapacityError;

/// Total footprint of a [`SmallStr`] in bytes, terminator slot included.
pub const CAPACITY: usize = 12;

/// Longest text a [`SmallStr`] can hold. Stored length is always `< CAPACITY`.
pub const MAX_LEN: usize = CAPACITY - 1;

/// Fixed-capacity, `Copy`, inline UTF-8 string.
#[derive(Copy, Clone)]
pub struct SmallStr {
    len: u8,
    /// Bytes past `len` are always zero.
    bytes: [u8; MAX_LEN],
}

impl SmallStr {
    /// The empty string.
    pub const EMPTY: SmallStr = SmallStr {
        len: 0,
        bytes: [0; MAX_LEN],
    };

    /// Create an empty string.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Copy `text` into a new small string.
    ///
    /// # Panics
    ///
    /// If `text.len() >= CAPACITY`.
    pub fn from_text(text: &str) -> Self {
        let mut small = Self::EMPTY;
        small.assign(text);
        small
    }

    /// Replace the contents with `text`.
    ///
    /// # Panics
    ///
    /// If `text.len() >= CAPACITY`.
    pub fn assign(&mut self, text: &str) -> &mut Self {
        assert!(
            text.len() < CAPACITY,
            "small string overflow: {} bytes, capacity {CAPACITY}",
            text.len()
        );
        self.store(text);
        self
    }

    /// Replace the contents with `text`, or leave them untouched if it
    /// does not fit.
    pub fn try_assign(&mut self, text: &str) -> Result<(), CapacityError> {
        if text.len() >= CAPACITY {
            return Err(CapacityError { len: text.len() });
        }
        self.store(text);
        Ok(())
    }

    fn store(&mut self, text: &str) {
        let len = text.len();
        debug_assert!(len <= MAX_LEN);
        self.bytes = [0; MAX_LEN];
        self.bytes[..len].copy_from_slice(text.as_bytes());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "len <= MAX_LEN, which fits in u8"
        )]
        let len = len as u8;
        self.len = len;
    }

    /// Stored text.
    #[inline]
    pub fn as_str(&self) -> &str {
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            // Only whole `&str` values are ever stored.
            Err(_) => unreachable!("SmallStr holds invalid UTF-8"),
        }
    }

    /// Stored bytes, without padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Iterate over the stored bytes.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SmallStr {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TryFrom<&str> for SmallStr {
    type Error = CapacityError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut small = Self::EMPTY;
        small.try_assign(text)?;
        Ok(small)
    }
}

impl FromStr for SmallStr {
    type Err = CapacityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SmallStr::try_from(s)
    }
}

impl Deref for SmallStr {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for SmallStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'a> IntoIterator for &'a SmallStr {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for SmallStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for SmallStr {}

impl Hash for SmallStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for SmallStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for SmallStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<String> for SmallStr {
    fn eq(&self, other: &String) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<SmallStr> for str {
    fn eq(&self, other: &SmallStr) -> bool {
        other == self
    }
}

impl PartialEq<SmallStr> for &str {
    fn eq(&self, other: &SmallStr) -> bool {
        other == self
    }
}

impl PartialEq<SmallStr> for String {
    fn eq(&self, other: &SmallStr) -> bool {
        other == self
    }
}

impl fmt::Display for SmallStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for SmallStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmallStr({:?})", self.as_str())
    }
}
