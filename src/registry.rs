// Copyright 2022 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The format registry and its lookups.
//!
//! A [`FormatRegistry`] wraps a fixed table of [`FormatDescriptor`]s and answers queries in both
//! directions: from the internal [`FormatId`] to its descriptor, and from a V4L1 palette or a V4L2
//! fourcc back to the descriptor that owns it. Several rows may share a code because of the
//! deprecated aliases; reverse lookups always return the first matching row in table order, and
//! construction rejects tables where an alias would shadow its canonical row.
//!
//! The table never changes once the registry is built, so a registry can be shared between
//! threads without synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::format::BitDepth;
use crate::format::FormatDescriptor;
use crate::format::FormatFamily;
use crate::format::FormatId;
use crate::format::LegacyPalette;
use crate::format::SizingError;
use crate::table::BUILTIN_FORMATS;
use crate::Fourcc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid format identifier {0}")]
    InvalidArgument(u32),
}

/// Inconsistencies detected while building a registry from a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("format {0} is listed more than once")]
    DuplicateId(FormatId),
    #[error("format {0} has neither a V4L1 nor a V4L2 code")]
    NoCode(FormatId),
    #[error("format {0} uses 0 as its V4L2 code")]
    NullFourcc(FormatId),
    #[error("format {0} has a depth of 0 bits")]
    ZeroDepth(FormatId),
    #[error("deprecated format {alias} is listed before {canonical}, which shares its code")]
    AliasBeforeCanonical { alias: FormatId, canonical: FormatId },
}

/// Immutable table of pixel formats with its lookup indices.
pub struct FormatRegistry {
    formats: &'static [FormatDescriptor],
    /// Table index of each identifier.
    by_id: [Option<usize>; FormatId::COUNT],
    /// Table index of the first row carrying each V4L1 palette.
    by_legacy: HashMap<LegacyPalette, usize>,
    /// Table index of the first row carrying each V4L2 fourcc.
    by_modern: HashMap<Fourcc, usize>,
}

/// Records `index` as the owner of `code` unless an earlier row already owns it.
fn insert_first<K: std::hash::Hash + Eq>(
    map: &mut HashMap<K, usize>,
    formats: &[FormatDescriptor],
    code: K,
    index: usize,
) -> Result<(), RegistryError> {
    let first = *map.entry(code).or_insert(index);
    let (first, current) = (&formats[first], &formats[index]);

    if first.deprecated && !current.deprecated {
        return Err(RegistryError::AliasBeforeCanonical {
            alias: first.id,
            canonical: current.id,
        });
    }

    Ok(())
}

impl FormatRegistry {
    /// Builds a registry over `formats` after checking the table is consistent.
    pub fn new(formats: &'static [FormatDescriptor]) -> Result<Self, RegistryError> {
        let mut by_id = [None; FormatId::COUNT];
        let mut by_legacy = HashMap::new();
        let mut by_modern = HashMap::new();

        for (index, desc) in formats.iter().enumerate() {
            let slot = &mut by_id[desc.id as usize];
            if slot.is_some() {
                return Err(RegistryError::DuplicateId(desc.id));
            }
            *slot = Some(index);

            if desc.legacy_code.is_none() && desc.modern_code.is_none() {
                return Err(RegistryError::NoCode(desc.id));
            }
            if desc.depth == BitDepth::Fixed(0) {
                return Err(RegistryError::ZeroDepth(desc.id));
            }

            if let Some(code) = desc.legacy_code {
                insert_first(&mut by_legacy, formats, code, index)?;
            }
            if let Some(code) = desc.modern_code {
                if code.as_u32() == 0 {
                    return Err(RegistryError::NullFourcc(desc.id));
                }
                insert_first(&mut by_modern, formats, code, index)?;
            }
        }

        log::debug!(
            "format registry built with {} formats ({} V4L1 palettes, {} V4L2 codes)",
            formats.len(),
            by_legacy.len(),
            by_modern.len()
        );

        Ok(Self {
            formats,
            by_id,
            by_legacy,
            by_modern,
        })
    }

    /// Returns the descriptor of `id`.
    ///
    /// This cannot fail with the built-in table, which defines every identifier.
    pub fn lookup_by_internal_id(&self, id: FormatId) -> Result<&FormatDescriptor, LookupError> {
        self.by_id[id as usize]
            .map(|index| &self.formats[index])
            .ok_or(LookupError::InvalidArgument(id as u32))
    }

    /// Same as [`Self::lookup_by_internal_id`] for callers holding the numeric identifier.
    pub fn lookup_by_raw_id(&self, id: u32) -> Result<&FormatDescriptor, LookupError> {
        let id = FormatId::n(id).ok_or(LookupError::InvalidArgument(id))?;
        self.lookup_by_internal_id(id)
    }

    /// Returns the first format in table order using the V4L1 palette `code`.
    ///
    /// [`crate::LEGACY_UNDEFINED`] and codes no format uses yield `None`.
    pub fn lookup_by_legacy_code(&self, code: i32) -> Option<&FormatDescriptor> {
        match LegacyPalette::n(code) {
            Some(palette) => self.lookup_by_legacy_palette(palette),
            None => {
                log::trace!("no format for V4L1 palette {}", code);
                None
            }
        }
    }

    pub fn lookup_by_legacy_palette(&self, palette: LegacyPalette) -> Option<&FormatDescriptor> {
        let desc = self.by_legacy.get(&palette).map(|&index| &self.formats[index]);
        if desc.is_none() {
            log::trace!("no format for V4L1 palette {:?}", palette);
        }

        desc
    }

    /// Returns the first format in table order using the V4L2 fourcc `code`.
    ///
    /// 0 and codes no format uses yield `None`.
    pub fn lookup_by_modern_code(&self, code: u32) -> Option<&FormatDescriptor> {
        self.lookup_by_fourcc(Fourcc::from(code))
    }

    pub fn lookup_by_fourcc(&self, fourcc: Fourcc) -> Option<&FormatDescriptor> {
        let desc = self.by_modern.get(&fourcc).map(|&index| &self.formats[index]);
        if desc.is_none() {
            log::trace!("no format for V4L2 code {:?}", fourcc);
        }

        desc
    }

    /// Looks a format up by the spelling of its identifier (e.g. `yuyv`) or, failing that, by
    /// its display name (e.g. `RGB555 BE`). Both comparisons ignore ASCII case.
    pub fn lookup_by_name(&self, name: &str) -> Option<&FormatDescriptor> {
        let name = name.trim();

        self.formats
            .iter()
            .find(|desc| desc.id.to_string().eq_ignore_ascii_case(name))
            .or_else(|| {
                self.formats
                    .iter()
                    .find(|desc| desc.name.eq_ignore_ascii_case(name))
            })
    }

    /// Returns the size in bytes of a `width`x`height` frame of `desc`.
    pub fn byte_size_for_frame(
        &self,
        desc: &FormatDescriptor,
        width: u32,
        height: u32,
    ) -> Result<usize, SizingError> {
        desc.byte_size_for_frame(width, height)
    }

    /// All formats, in table order.
    pub fn formats(&self) -> &'static [FormatDescriptor] {
        self.formats
    }

    pub fn iter(&self) -> std::slice::Iter<'static, FormatDescriptor> {
        self.formats.iter()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter_family(
        &self,
        family: FormatFamily,
    ) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.iter().filter(move |desc| desc.family == family)
    }

    /// Formats that can be requested from a V4L1 device, in table order.
    pub fn legacy_formats(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.iter().filter(|desc| desc.is_supported_by_legacy_api())
    }

    /// Formats that can be requested from a V4L2 device, in table order.
    pub fn modern_formats(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.iter().filter(|desc| desc.is_supported_by_modern_api())
    }
}

impl<'a> IntoIterator for &'a FormatRegistry {
    type Item = &'static FormatDescriptor;
    type IntoIter = std::slice::Iter<'static, FormatDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the process-wide registry over the built-in format table.
///
/// The registry is built on first use. The built-in table is checked at that point and an
/// inconsistent table aborts the process.
pub fn registry() -> &'static FormatRegistry {
    static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();

    REGISTRY.get_or_init(|| match FormatRegistry::new(BUILTIN_FORMATS) {
        Ok(registry) => registry,
        Err(e) => panic!("built-in format table is invalid: {}", e),
    })
}
