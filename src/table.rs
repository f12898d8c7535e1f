// Copyright 2022 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The built-in format table.
//!
//! Reverse lookups pick the first matching row, so canonical rows must stay ahead of the
//! deprecated aliases at the end of the table. DV is left out until its depth is known.

use crate::format::BitDepth;
use crate::format::FormatDescriptor;
use crate::format::FormatFamily;
use crate::format::FormatId;
use crate::format::LegacyPalette;
use crate::Fourcc;

pub(crate) const fn format(
    id: FormatId,
    legacy_code: Option<LegacyPalette>,
    modern_code: Option<Fourcc>,
    depth: BitDepth,
    name: &'static str,
    family: FormatFamily,
) -> FormatDescriptor {
    FormatDescriptor {
        id,
        legacy_code,
        modern_code,
        depth,
        name,
        family,
        deprecated: false,
    }
}

pub(crate) const fn alias(
    id: FormatId,
    legacy_code: Option<LegacyPalette>,
    modern_code: Option<Fourcc>,
    depth: BitDepth,
    name: &'static str,
    family: FormatFamily,
) -> FormatDescriptor {
    FormatDescriptor {
        deprecated: true,
        ..format(id, legacy_code, modern_code, depth, name, family)
    }
}

pub(crate) static BUILTIN_FORMATS: &[FormatDescriptor] = &[
    // RGB
    format(
        FormatId::RGB332,
        None,
        Some(Fourcc::new(b"RGB1")),
        BitDepth::Fixed(8),
        "RGB332",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB444,
        None,
        Some(Fourcc::new(b"R444")),
        BitDepth::Fixed(16),
        "RGB444",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB555,
        Some(LegacyPalette::RGB555),
        Some(Fourcc::new(b"RGBO")),
        BitDepth::Fixed(16),
        "RGB555",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB565,
        Some(LegacyPalette::RGB565),
        Some(Fourcc::new(b"RGBP")),
        BitDepth::Fixed(16),
        "RGB565",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB555X,
        None,
        Some(Fourcc::new(b"RGBQ")),
        BitDepth::Fixed(16),
        "RGB555 BE",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB565X,
        None,
        Some(Fourcc::new(b"RGBR")),
        BitDepth::Fixed(16),
        "RGB565 BE",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::BGR24,
        None,
        Some(Fourcc::new(b"BGR3")),
        BitDepth::Fixed(24),
        "BGR24",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB24,
        Some(LegacyPalette::RGB24),
        Some(Fourcc::new(b"RGB3")),
        BitDepth::Fixed(24),
        "RGB24",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::BGR32,
        None,
        Some(Fourcc::new(b"BGR4")),
        BitDepth::Fixed(32),
        "BGR32",
        FormatFamily::Rgb,
    ),
    format(
        FormatId::RGB32,
        Some(LegacyPalette::RGB32),
        Some(Fourcc::new(b"RGB4")),
        BitDepth::Fixed(32),
        "RGB32",
        FormatFamily::Rgb,
    ),
    // Grey
    format(
        FormatId::GREY,
        Some(LegacyPalette::GREY),
        Some(Fourcc::new(b"GREY")),
        BitDepth::Fixed(8),
        "GREY",
        FormatFamily::Grey,
    ),
    format(
        FormatId::Y10,
        None,
        Some(Fourcc::new(b"Y10 ")),
        BitDepth::Fixed(10),
        "Y10",
        FormatFamily::Grey,
    ),
    format(
        FormatId::Y16,
        None,
        Some(Fourcc::new(b"Y16 ")),
        BitDepth::Fixed(16),
        "Y16",
        FormatFamily::Grey,
    ),
    // PAL8
    format(
        FormatId::PAL8,
        None,
        Some(Fourcc::new(b"PAL8")),
        BitDepth::Fixed(8),
        "PAL8",
        FormatFamily::Palette,
    ),
    // YUV
    format(
        FormatId::YVU410,
        None,
        Some(Fourcc::new(b"YVU9")),
        BitDepth::Fixed(9),
        "YVU410",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YVU420,
        None,
        Some(Fourcc::new(b"YV12")),
        BitDepth::Fixed(12),
        "YVU420",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUYV,
        Some(LegacyPalette::YUYV),
        Some(Fourcc::new(b"YUYV")),
        BitDepth::Fixed(16),
        "YUYV",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YYUV,
        None,
        Some(Fourcc::new(b"YYUV")),
        BitDepth::Fixed(16),
        "YYUV",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YVYU,
        None,
        Some(Fourcc::new(b"YVYU")),
        BitDepth::Fixed(16),
        "YVYU",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::UYVY,
        Some(LegacyPalette::UYVY),
        Some(Fourcc::new(b"UYVY")),
        BitDepth::Fixed(16),
        "UYVY",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::VYUY,
        None,
        Some(Fourcc::new(b"VYUY")),
        BitDepth::Fixed(16),
        "VYUY",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV422P,
        Some(LegacyPalette::YUV422P),
        Some(Fourcc::new(b"422P")),
        BitDepth::Fixed(16),
        "YUV422P",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV411P,
        Some(LegacyPalette::YUV411P),
        Some(Fourcc::new(b"411P")),
        BitDepth::Fixed(16),
        "YUV411P",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::Y41P,
        None,
        Some(Fourcc::new(b"Y41P")),
        BitDepth::Fixed(12),
        "Y41P",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV444,
        None,
        Some(Fourcc::new(b"Y444")),
        BitDepth::Fixed(16),
        "YUV444",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV555,
        None,
        Some(Fourcc::new(b"YUVO")),
        BitDepth::Fixed(16),
        "YUV555",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV565,
        None,
        Some(Fourcc::new(b"YUVP")),
        BitDepth::Fixed(16),
        "YUV565",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV32,
        None,
        Some(Fourcc::new(b"YUV4")),
        BitDepth::Fixed(32),
        "YUV32",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV410,
        Some(LegacyPalette::YUV410P),
        Some(Fourcc::new(b"YUV9")),
        BitDepth::Fixed(9),
        "YUV410",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::YUV420,
        Some(LegacyPalette::YUV420),
        Some(Fourcc::new(b"YU12")),
        BitDepth::Fixed(12),
        "YUV420",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::HI240,
        Some(LegacyPalette::HI240),
        Some(Fourcc::new(b"HI24")),
        BitDepth::Fixed(8),
        "HI240",
        FormatFamily::Yuv,
    ),
    format(
        FormatId::HM12,
        None,
        Some(Fourcc::new(b"HM12")),
        BitDepth::Fixed(8),
        "HM12",
        FormatFamily::Yuv,
    ),
    // Two planes
    format(
        FormatId::NV12,
        None,
        Some(Fourcc::new(b"NV12")),
        BitDepth::Fixed(12),
        "NV12",
        FormatFamily::SemiPlanar,
    ),
    format(
        FormatId::NV21,
        None,
        Some(Fourcc::new(b"NV21")),
        BitDepth::Fixed(12),
        "NV21",
        FormatFamily::SemiPlanar,
    ),
    format(
        FormatId::NV16,
        None,
        Some(Fourcc::new(b"NV16")),
        BitDepth::Fixed(16),
        "NV16",
        FormatFamily::SemiPlanar,
    ),
    format(
        FormatId::NV61,
        None,
        Some(Fourcc::new(b"NV61")),
        BitDepth::Fixed(16),
        "NV61",
        FormatFamily::SemiPlanar,
    ),
    // Bayer
    format(
        FormatId::SBGGR8,
        None,
        Some(Fourcc::new(b"BA81")),
        BitDepth::Fixed(8),
        "SBGGR8",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SGBRG8,
        None,
        Some(Fourcc::new(b"GBRG")),
        BitDepth::Fixed(8),
        "SGBRG8",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SGRBG8,
        None,
        Some(Fourcc::new(b"GRBG")),
        BitDepth::Fixed(8),
        "SGRBG8",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SRGGB8,
        None,
        Some(Fourcc::new(b"RGGB")),
        BitDepth::Fixed(8),
        "SRGGB8",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SBGGR10,
        None,
        Some(Fourcc::new(b"BG10")),
        BitDepth::Fixed(10),
        "SBGGR10",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SGBRG10,
        None,
        Some(Fourcc::new(b"GB10")),
        BitDepth::Fixed(10),
        "SGBRG10",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SGRBG10,
        None,
        Some(Fourcc::new(b"BA10")),
        BitDepth::Fixed(10),
        "SGRBG10",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SRGGB10,
        None,
        Some(Fourcc::new(b"RG10")),
        BitDepth::Fixed(10),
        "SRGGB10",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SGRBG10DPCM8,
        None,
        Some(Fourcc::new(b"BD10")),
        BitDepth::Fixed(8),
        "SGRBG10DPCM8",
        FormatFamily::Bayer,
    ),
    format(
        FormatId::SBGGR16,
        None,
        Some(Fourcc::new(b"BYR2")),
        BitDepth::Fixed(16),
        "SBGGR16",
        FormatFamily::Bayer,
    ),
    // Compressed
    format(
        FormatId::MJPEG,
        None,
        Some(Fourcc::new(b"MJPG")),
        BitDepth::Compressed,
        "MJPEG",
        FormatFamily::Compressed,
    ),
    format(
        FormatId::JPEG,
        None,
        Some(Fourcc::new(b"JPEG")),
        BitDepth::Compressed,
        "JPEG",
        FormatFamily::Compressed,
    ),
    format(
        FormatId::MPEG,
        None,
        Some(Fourcc::new(b"MPEG")),
        BitDepth::Compressed,
        "MPEG 1/2/4",
        FormatFamily::Compressed,
    ),
    // Vendor-specific
    format(
        FormatId::WNVA,
        None,
        Some(Fourcc::new(b"WNVA")),
        BitDepth::Fixed(16),
        "WNVA",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SN9C10X,
        None,
        Some(Fourcc::new(b"S910")),
        BitDepth::Compressed,
        "SN9C10X",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SN9C20X_I420,
        None,
        Some(Fourcc::new(b"S920")),
        BitDepth::Compressed,
        "SN9C20X_I420",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::PWC1,
        None,
        Some(Fourcc::new(b"PWC1")),
        BitDepth::Compressed,
        "PWC1",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::PWC2,
        None,
        Some(Fourcc::new(b"PWC2")),
        BitDepth::Compressed,
        "PWC2",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::ET61X251,
        None,
        Some(Fourcc::new(b"E625")),
        BitDepth::Compressed,
        "ET61X251",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SPCA501,
        None,
        Some(Fourcc::new(b"S501")),
        BitDepth::Fixed(16),
        "SPCA501",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SPCA505,
        None,
        Some(Fourcc::new(b"S505")),
        BitDepth::Fixed(16),
        "SPCA505",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SPCA508,
        None,
        Some(Fourcc::new(b"S508")),
        BitDepth::Fixed(16),
        "SPCA508",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SPCA561,
        None,
        Some(Fourcc::new(b"S561")),
        BitDepth::Compressed,
        "SPCA561",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::PAC207,
        None,
        Some(Fourcc::new(b"P207")),
        BitDepth::Compressed,
        "PAC207",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::MR97310A,
        None,
        Some(Fourcc::new(b"M310")),
        BitDepth::Compressed,
        "MR97310A",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::SQ905C,
        None,
        Some(Fourcc::new(b"905C")),
        BitDepth::Compressed,
        "SQ905C",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::PJPG,
        None,
        Some(Fourcc::new(b"PJPG")),
        BitDepth::Compressed,
        "PJPG",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::OV511,
        None,
        Some(Fourcc::new(b"O511")),
        BitDepth::Compressed,
        "OV511",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::OV518,
        None,
        Some(Fourcc::new(b"O518")),
        BitDepth::Compressed,
        "OV518",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::STV0680,
        None,
        Some(Fourcc::new(b"S680")),
        BitDepth::Compressed,
        "STV0680",
        FormatFamily::Vendor,
    ),
    format(
        FormatId::TM6000,
        None,
        Some(Fourcc::new(b"TM60")),
        BitDepth::Compressed,
        "TM6000",
        FormatFamily::Vendor,
    ),
    // Deprecated, use YUV420, YUYV and YUV411P instead. YUV411 pairs the packed V4L1 palette
    // with the planar V4L2 code.
    alias(
        FormatId::YUV420P,
        Some(LegacyPalette::YUV420P),
        None,
        BitDepth::Fixed(12),
        "YUV420-w",
        FormatFamily::Yuv,
    ),
    alias(
        FormatId::YUV422,
        Some(LegacyPalette::YUV422),
        None,
        BitDepth::Fixed(8),
        "YUYV-w",
        FormatFamily::Yuv,
    ),
    alias(
        FormatId::YUV411,
        Some(LegacyPalette::YUV411),
        Some(Fourcc::new(b"411P")),
        BitDepth::Fixed(16),
        "YUV411-w",
        FormatFamily::Yuv,
    ),
];
