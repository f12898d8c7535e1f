// Copyright 2022 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Types describing a single pixel format and the per-format operations.

use std::fmt;
use std::str::FromStr;

use enumn::N;
use thiserror::Error;

use crate::Fourcc;
use crate::Resolution;

/// Raw value V4L1 callers use when a palette has no legacy equivalent.
pub const LEGACY_UNDEFINED: i32 = -1;

/// Internal identifier of a pixel format, stable across the library.
///
/// The discriminants follow the order of the built-in table and are what `lookup_by_raw_id`
/// expects.
#[allow(non_camel_case_types)]
#[derive(N, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum FormatId {
    // RGB
    RGB332 = 0,
    RGB444,
    RGB555,
    RGB565,
    RGB555X,
    RGB565X,
    BGR24,
    RGB24,
    BGR32,
    RGB32,
    // Grey
    GREY,
    Y10,
    Y16,
    // Palette
    PAL8,
    // YUV
    YVU410,
    YVU420,
    YUYV,
    YYUV,
    YVYU,
    UYVY,
    VYUY,
    YUV422P,
    YUV411P,
    Y41P,
    YUV444,
    YUV555,
    YUV565,
    YUV32,
    YUV410,
    YUV420,
    HI240,
    HM12,
    // Two planes
    NV12,
    NV21,
    NV16,
    NV61,
    // Bayer
    SBGGR8,
    SGBRG8,
    SGRBG8,
    SRGGB8,
    SBGGR10,
    SGBRG10,
    SGRBG10,
    SRGGB10,
    SGRBG10DPCM8,
    SBGGR16,
    // Compressed
    MJPEG,
    JPEG,
    MPEG,
    // Vendor-specific
    WNVA,
    SN9C10X,
    SN9C20X_I420,
    PWC1,
    PWC2,
    ET61X251,
    SPCA501,
    SPCA505,
    SPCA508,
    SPCA561,
    PAC207,
    MR97310A,
    SQ905C,
    PJPG,
    OV511,
    OV518,
    STV0680,
    TM6000,
    // Deprecated aliases. Use YUV420, YUYV and YUV411P instead.
    YUV420P,
    YUV422,
    YUV411,
}

impl FormatId {
    /// Number of defined identifiers.
    pub const COUNT: usize = FormatId::YUV411 as usize + 1;

    /// Returns the identifier callers should use instead of `self`.
    ///
    /// This is `self` for everything except the three backward-compatibility aliases.
    pub fn canonical(self) -> Self {
        match self {
            FormatId::YUV420P => FormatId::YUV420,
            FormatId::YUV422 => FormatId::YUYV,
            FormatId::YUV411 => FormatId::YUV411P,
            id => id,
        }
    }

    pub fn is_alias(self) -> bool {
        self.canonical() != self
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for FormatId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry()
            .lookup_by_name(s)
            .map(|desc| desc.id)
            .ok_or("unrecognized pixel format name")
    }
}

/// Palette numbers of the legacy V4L1 capture API.
#[derive(N, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LegacyPalette {
    GREY = 1,
    HI240 = 2,
    RGB565 = 3,
    RGB24 = 4,
    RGB32 = 5,
    RGB555 = 6,
    YUV422 = 7,
    YUYV = 8,
    UYVY = 9,
    YUV420 = 10,
    YUV411 = 11,
    RAW = 12,
    YUV422P = 13,
    YUV411P = 14,
    YUV420P = 15,
    YUV410P = 16,
}

impl LegacyPalette {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Depth of a format in bits per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Fixed number of bits per pixel, averaged over a pixel group for sub-sampled formats.
    Fixed(u32),
    /// Variable-length compressed stream, no size can be derived from the dimensions.
    Compressed,
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitDepth::Fixed(bits) => write!(f, "{}", bits),
            BitDepth::Compressed => f.write_str("compressed"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    Rgb,
    Grey,
    Palette,
    Yuv,
    SemiPlanar,
    Bayer,
    Compressed,
    Vendor,
}

impl FromStr for FormatFamily {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" | "RGB" => Ok(FormatFamily::Rgb),
            "grey" | "GREY" => Ok(FormatFamily::Grey),
            "palette" => Ok(FormatFamily::Palette),
            "yuv" | "YUV" => Ok(FormatFamily::Yuv),
            "semiplanar" => Ok(FormatFamily::SemiPlanar),
            "bayer" => Ok(FormatFamily::Bayer),
            "compressed" => Ok(FormatFamily::Compressed),
            "vendor" => Ok(FormatFamily::Vendor),
            _ => Err("unrecognized format family. Valid values: rgb, grey, palette, yuv, semiplanar, bayer, compressed, vendor"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizingError {
    #[error("{0} is a compressed format without a fixed frame size")]
    NotFixedSize(FormatId),
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("frame size does not fit in memory")]
    TooLarge,
}

/// Registry record for one supported pixel encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub id: FormatId,
    /// V4L1 palette, `None` if V4L1 has no equivalent.
    pub legacy_code: Option<LegacyPalette>,
    /// V4L2 fourcc, `None` if the format cannot be expressed with V4L2.
    pub modern_code: Option<Fourcc>,
    pub depth: BitDepth,
    /// For diagnostics only, never used as a lookup key except by `lookup_by_name`.
    pub name: &'static str,
    pub family: FormatFamily,
    /// Set on the aliases kept for older callers. See [`FormatId::canonical`].
    pub deprecated: bool,
}

impl FormatDescriptor {
    pub fn is_supported_by_legacy_api(&self) -> bool {
        self.legacy_code.is_some()
    }

    pub fn is_supported_by_modern_api(&self) -> bool {
        self.modern_code.is_some()
    }

    pub fn is_compressed(&self) -> bool {
        self.depth == BitDepth::Compressed
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Raw V4L1 palette value, [`LEGACY_UNDEFINED`] when there is none.
    pub fn legacy_code_raw(&self) -> i32 {
        self.legacy_code
            .map(LegacyPalette::code)
            .unwrap_or(LEGACY_UNDEFINED)
    }

    /// Raw V4L2 fourcc value, 0 when there is none.
    pub fn modern_code_raw(&self) -> u32 {
        self.modern_code.map(Fourcc::as_u32).unwrap_or(0)
    }

    /// Returns the number of bytes needed to hold one `width`x`height` frame of this format.
    ///
    /// Sizes of formats whose depth is not a multiple of 8 are rounded up to the next byte.
    /// Compressed formats have no size derivable from the dimensions; the size reported by the
    /// driver must be used for them instead.
    pub fn byte_size_for_frame(&self, width: u32, height: u32) -> Result<usize, SizingError> {
        if width == 0 || height == 0 {
            return Err(SizingError::InvalidDimensions { width, height });
        }

        let bits_per_pixel = match self.depth {
            BitDepth::Fixed(bits) => bits,
            BitDepth::Compressed => return Err(SizingError::NotFixedSize(self.id)),
        };

        let bits = (width as u64 * height as u64)
            .checked_mul(bits_per_pixel as u64)
            .ok_or(SizingError::TooLarge)?;

        usize::try_from(bits.div_ceil(8)).map_err(|_| SizingError::TooLarge)
    }

    pub fn byte_size_for_resolution(&self, resolution: Resolution) -> Result<usize, SizingError> {
        self.byte_size_for_frame(resolution.width, resolution.height)
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: FormatId, depth: BitDepth) -> FormatDescriptor {
        FormatDescriptor {
            id,
            legacy_code: None,
            modern_code: Some(Fourcc::from(b"TEST")),
            depth,
            name: "test",
            family: FormatFamily::Yuv,
            deprecated: false,
        }
    }

    #[test]
    fn format_id_numbering() {
        assert_eq!(FormatId::COUNT, 70);
        assert_eq!(FormatId::n(0), Some(FormatId::RGB332));
        assert_eq!(FormatId::n(29), Some(FormatId::YUV420));
        assert_eq!(FormatId::n(69), Some(FormatId::YUV411));
        assert_eq!(FormatId::n(70), None);
    }

    #[test]
    fn canonical_ids() {
        assert_eq!(FormatId::YUV420P.canonical(), FormatId::YUV420);
        assert_eq!(FormatId::YUV422.canonical(), FormatId::YUYV);
        assert_eq!(FormatId::YUV411.canonical(), FormatId::YUV411P);
        assert_eq!(FormatId::NV12.canonical(), FormatId::NV12);
        assert!(FormatId::YUV422.is_alias());
        assert!(!FormatId::YUYV.is_alias());
    }

    #[test]
    fn legacy_palette_codes() {
        assert_eq!(LegacyPalette::n(1), Some(LegacyPalette::GREY));
        assert_eq!(LegacyPalette::n(16), Some(LegacyPalette::YUV410P));
        assert_eq!(LegacyPalette::n(0), None);
        assert_eq!(LegacyPalette::n(LEGACY_UNDEFINED), None);
        assert_eq!(LegacyPalette::YUYV.code(), 8);
    }

    #[test]
    fn frame_size_byte_aligned() {
        let desc = descriptor(FormatId::RGB24, BitDepth::Fixed(24));
        assert_eq!(desc.byte_size_for_frame(640, 480), Ok(921600));
        assert_eq!(
            desc.byte_size_for_resolution(Resolution::from((2, 2))),
            Ok(12)
        );
    }

    #[test]
    fn frame_size_rounds_up() {
        let desc = descriptor(FormatId::YUV420, BitDepth::Fixed(12));
        // 108 bits is 13.5 bytes.
        assert_eq!(desc.byte_size_for_frame(3, 3), Ok(14));

        let desc = descriptor(FormatId::YUV410, BitDepth::Fixed(9));
        assert_eq!(desc.byte_size_for_frame(1, 1), Ok(2));
        assert_eq!(desc.byte_size_for_frame(8, 1), Ok(9));
    }

    #[test]
    fn frame_size_compressed() {
        let desc = descriptor(FormatId::MJPEG, BitDepth::Compressed);
        assert_eq!(
            desc.byte_size_for_frame(640, 480),
            Err(SizingError::NotFixedSize(FormatId::MJPEG))
        );
    }

    #[test]
    fn frame_size_zero_dimension() {
        for depth in [BitDepth::Fixed(16), BitDepth::Compressed] {
            let desc = descriptor(FormatId::YUYV, depth);
            assert_eq!(
                desc.byte_size_for_frame(0, 480),
                Err(SizingError::InvalidDimensions {
                    width: 0,
                    height: 480
                })
            );
            assert!(matches!(
                desc.byte_size_for_frame(640, 0),
                Err(SizingError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn frame_size_overflow() {
        let desc = descriptor(FormatId::RGB32, BitDepth::Fixed(32));
        assert_eq!(
            desc.byte_size_for_frame(u32::MAX, u32::MAX),
            Err(SizingError::TooLarge)
        );
    }

    #[test]
    fn raw_codes() {
        let mut desc = descriptor(FormatId::YUYV, BitDepth::Fixed(16));
        assert_eq!(desc.legacy_code_raw(), LEGACY_UNDEFINED);
        assert!(!desc.is_supported_by_legacy_api());
        desc.legacy_code = Some(LegacyPalette::YUYV);
        assert_eq!(desc.legacy_code_raw(), 8);
        assert!(desc.is_supported_by_legacy_api());

        desc.modern_code = None;
        assert_eq!(desc.modern_code_raw(), 0);
        assert!(!desc.is_supported_by_modern_api());
    }

    #[test]
    fn family_from_str() {
        assert_eq!("bayer".parse(), Ok(FormatFamily::Bayer));
        assert!("foo".parse::<FormatFamily>().is_err());
    }
}
