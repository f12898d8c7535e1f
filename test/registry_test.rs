// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

#[cfg(test)]
mod tests {
    use capture_formats::registry;
    use capture_formats::BitDepth;
    use capture_formats::FormatFamily;
    use capture_formats::FormatId;
    use capture_formats::Fourcc;
    use capture_formats::LegacyPalette;
    use capture_formats::LookupError;
    use capture_formats::SizingError;
    use capture_formats::LEGACY_UNDEFINED;

    // (format, V4L1 palette, V4L2 code, depth, name) for a sample of every family.
    const EXPECTED: &[(FormatId, Option<i32>, Option<&[u8; 4]>, Option<u32>, &str)] = &[
        (FormatId::RGB332, None, Some(b"RGB1"), Some(8), "RGB332"),
        (FormatId::RGB555, Some(6), Some(b"RGBO"), Some(16), "RGB555"),
        (FormatId::RGB565X, None, Some(b"RGBR"), Some(16), "RGB565 BE"),
        (FormatId::RGB24, Some(4), Some(b"RGB3"), Some(24), "RGB24"),
        (FormatId::RGB32, Some(5), Some(b"RGB4"), Some(32), "RGB32"),
        (FormatId::GREY, Some(1), Some(b"GREY"), Some(8), "GREY"),
        (FormatId::Y10, None, Some(b"Y10 "), Some(10), "Y10"),
        (FormatId::PAL8, None, Some(b"PAL8"), Some(8), "PAL8"),
        (FormatId::YVU410, None, Some(b"YVU9"), Some(9), "YVU410"),
        (FormatId::YUYV, Some(8), Some(b"YUYV"), Some(16), "YUYV"),
        (FormatId::UYVY, Some(9), Some(b"UYVY"), Some(16), "UYVY"),
        (FormatId::YUV422P, Some(13), Some(b"422P"), Some(16), "YUV422P"),
        (FormatId::YUV411P, Some(14), Some(b"411P"), Some(16), "YUV411P"),
        (FormatId::Y41P, None, Some(b"Y41P"), Some(12), "Y41P"),
        (FormatId::YUV410, Some(16), Some(b"YUV9"), Some(9), "YUV410"),
        (FormatId::YUV420, Some(10), Some(b"YU12"), Some(12), "YUV420"),
        (FormatId::HI240, Some(2), Some(b"HI24"), Some(8), "HI240"),
        (FormatId::NV12, None, Some(b"NV12"), Some(12), "NV12"),
        (FormatId::NV61, None, Some(b"NV61"), Some(16), "NV61"),
        (FormatId::SBGGR8, None, Some(b"BA81"), Some(8), "SBGGR8"),
        (FormatId::SGRBG10, None, Some(b"BA10"), Some(10), "SGRBG10"),
        (FormatId::SGRBG10DPCM8, None, Some(b"BD10"), Some(8), "SGRBG10DPCM8"),
        (FormatId::SBGGR16, None, Some(b"BYR2"), Some(16), "SBGGR16"),
        (FormatId::MJPEG, None, Some(b"MJPG"), None, "MJPEG"),
        (FormatId::MPEG, None, Some(b"MPEG"), None, "MPEG 1/2/4"),
        (FormatId::WNVA, None, Some(b"WNVA"), Some(16), "WNVA"),
        (FormatId::SN9C20X_I420, None, Some(b"S920"), None, "SN9C20X_I420"),
        (FormatId::ET61X251, None, Some(b"E625"), None, "ET61X251"),
        (FormatId::SPCA508, None, Some(b"S508"), Some(16), "SPCA508"),
        (FormatId::SQ905C, None, Some(b"905C"), None, "SQ905C"),
        (FormatId::TM6000, None, Some(b"TM60"), None, "TM6000"),
        (FormatId::YUV420P, Some(15), None, Some(12), "YUV420-w"),
        (FormatId::YUV422, Some(7), None, Some(8), "YUYV-w"),
        (FormatId::YUV411, Some(11), Some(b"411P"), Some(16), "YUV411-w"),
    ];

    #[test]
    fn table_content() {
        let registry = registry();

        for &(id, palette, fourcc, depth, name) in EXPECTED {
            let desc = registry.lookup_by_internal_id(id).unwrap();
            assert_eq!(desc.legacy_code.map(LegacyPalette::code), palette, "{}", id);
            assert_eq!(desc.modern_code, fourcc.map(Fourcc::from), "{}", id);
            assert_eq!(
                desc.depth,
                depth.map_or(BitDepth::Compressed, BitDepth::Fixed),
                "{}",
                id
            );
            assert_eq!(desc.name, name);
        }
    }

    #[test]
    fn table_order() {
        let ids: Vec<_> = registry().iter().map(|desc| desc.id).collect();

        assert_eq!(ids.first(), Some(&FormatId::RGB332));
        assert_eq!(
            &ids[ids.len() - 3..],
            &[FormatId::YUV420P, FormatId::YUV422, FormatId::YUV411]
        );
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn reverse_lookups() {
        let registry = registry();

        assert_eq!(
            registry.lookup_by_legacy_code(4).map(|desc| desc.id),
            Some(FormatId::RGB24)
        );
        assert_eq!(
            registry
                .lookup_by_modern_code(Fourcc::new(b"YU12").into())
                .map(|desc| desc.id),
            Some(FormatId::YUV420)
        );
        assert_eq!(registry.lookup_by_legacy_code(LEGACY_UNDEFINED), None);
        assert_eq!(registry.lookup_by_modern_code(0), None);
        assert_eq!(
            registry.lookup_by_raw_id(1234).err(),
            Some(LookupError::InvalidArgument(1234))
        );
    }

    #[test]
    fn buffer_sizes() {
        let registry = registry();
        let size = |id, width, height| {
            registry
                .lookup_by_internal_id(id)
                .unwrap()
                .byte_size_for_frame(width, height)
        };

        assert_eq!(size(FormatId::RGB24, 640, 480), Ok(640 * 480 * 24 / 8));
        assert_eq!(size(FormatId::YUV420, 3, 3), Ok(14));
        assert_eq!(size(FormatId::NV12, 1920, 1080), Ok(3110400));
        assert_eq!(
            size(FormatId::MJPEG, 640, 480),
            Err(SizingError::NotFixedSize(FormatId::MJPEG))
        );
        assert_eq!(
            size(FormatId::GREY, 0, 480),
            Err(SizingError::InvalidDimensions {
                width: 0,
                height: 480
            })
        );
    }

    #[test]
    fn negotiation_order() {
        // Capability negotiation walks the formats in table order; planar YUV comes before the
        // two-plane variants and raw formats before compressed ones.
        let yuv: Vec<_> = registry()
            .modern_formats()
            .filter(|desc| {
                matches!(desc.family, FormatFamily::Yuv | FormatFamily::SemiPlanar)
                    && !desc.is_deprecated()
            })
            .map(|desc| desc.id)
            .collect();

        let yuv420 = yuv.iter().position(|&id| id == FormatId::YUV420).unwrap();
        let nv12 = yuv.iter().position(|&id| id == FormatId::NV12).unwrap();
        assert!(yuv420 < nv12);
    }
}
