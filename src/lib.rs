// Copyright 2022 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Pixel format registry for capture code that has to speak both V4L1 and V4L2.
//!
//! V4L1 identifies image encodings with a small palette enumeration while V4L2 uses
//! four-character codes. This crate holds the single table reconciling the two: every
//! [`FormatDescriptor`] maps one internal [`FormatId`] to its legacy palette (if any), its fourcc
//! (if any), its depth in bits per pixel and a display name. [`registry()`] returns the
//! process-wide instance built from that table.

pub mod backend;
pub mod format;
pub mod registry;
mod table;

use std::fmt;

pub use format::BitDepth;
pub use format::FormatDescriptor;
pub use format::FormatFamily;
pub use format::FormatId;
pub use format::LegacyPalette;
pub use format::SizingError;
pub use format::LEGACY_UNDEFINED;
pub use registry::registry;
pub use registry::FormatRegistry;
pub use registry::LookupError;
pub use registry::RegistryError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl From<(u32, u32)> for Resolution {
    fn from(value: (u32, u32)) -> Self {
        Self {
            width: value.0,
            height: value.1,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A V4L2 four-character code, stored the way the kernel packs it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fourcc(u32);

impl Fourcc {
    /// Builds a fourcc from its four characters at compile time.
    pub const fn new(code: &[u8; 4]) -> Self {
        Self(
            (code[0] as u32)
                | (code[1] as u32) << 8
                | (code[2] as u32) << 16
                | (code[3] as u32) << 24,
        )
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Fourcc {
    fn from(fourcc: u32) -> Self {
        Self(fourcc)
    }
}

impl From<Fourcc> for u32 {
    fn from(fourcc: Fourcc) -> Self {
        fourcc.0
    }
}

impl From<&[u8; 4]> for Fourcc {
    fn from(n: &[u8; 4]) -> Self {
        Self::new(n)
    }
}

impl From<Fourcc> for [u8; 4] {
    fn from(n: Fourcc) -> Self {
        n.0.to_le_bytes()
    }
}

impl fmt::Display for Fourcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: [u8; 4] = (*self).into();
        f.write_fmt(format_args!(
            "{}{}{}{}",
            c[0] as char, c[1] as char, c[2] as char, c[3] as char
        ))
    }
}

impl fmt::Debug for Fourcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("0x{:08x} ({})", self.0, self))
    }
}
