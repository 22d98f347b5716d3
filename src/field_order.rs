//! Interlaced video field order.
//!
//! [`FieldOrder`] mirrors FFmpeg's `AVFieldOrder` enumeration: for interlaced
//! video it names the coding/display order of the two fields that compose a
//! frame. Conversion from a raw integer is total.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coding and display order of interlaced video fields, matching FFmpeg's
/// `AVFieldOrder` values.
///
/// Serialized as its raw integer value; use [`FieldOrder::name`] for the
/// display string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FieldOrder {
    /// Field order is unknown or not applicable.
    #[default]
    Unknown = 0,
    /// Progressive (non-interlaced) video.
    Progressive = 1,
    /// Top coded first, top displayed first.
    Tt = 2,
    /// Bottom coded first, bottom displayed first.
    Bb = 3,
    /// Top coded first, bottom displayed first.
    Tb = 4,
    /// Bottom coded first, top displayed first.
    Bt = 5,
}

impl FieldOrder {
    /// Convert a raw `AVFieldOrder` value. Out-of-range values, including
    /// negatives, yield [`FieldOrder::Unknown`].
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => FieldOrder::Progressive,
            2 => FieldOrder::Tt,
            3 => FieldOrder::Bb,
            4 => FieldOrder::Tb,
            5 => FieldOrder::Bt,
            _ => FieldOrder::Unknown,
        }
    }

    /// The canonical short name, e.g. `"PROGRESSIVE"` or `"TT"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldOrder::Unknown => "UNKNOWN",
            FieldOrder::Progressive => "PROGRESSIVE",
            FieldOrder::Tt => "TT",
            FieldOrder::Bb => "BB",
            FieldOrder::Tb => "TB",
            FieldOrder::Bt => "BT",
        }
    }
}

impl From<i32> for FieldOrder {
    fn from(raw: i32) -> Self {
        FieldOrder::from_raw(raw)
    }
}

impl From<FieldOrder> for i32 {
    fn from(field_order: FieldOrder) -> Self {
        field_order as i32
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
