// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! V4L2 backend

use crate::FormatDescriptor;
use crate::FormatRegistry;

impl From<v4l2r::PixelFormat> for crate::Fourcc {
    fn from(value: v4l2r::PixelFormat) -> Self {
        crate::Fourcc(value.to_u32())
    }
}

impl From<crate::Fourcc> for v4l2r::PixelFormat {
    fn from(value: crate::Fourcc) -> Self {
        v4l2r::PixelFormat::from_u32(value.0)
    }
}

impl FormatRegistry {
    /// Returns the format a V4L2 device reports as `pixel_format`.
    pub fn lookup_by_pixel_format(
        &self,
        pixel_format: v4l2r::PixelFormat,
    ) -> Option<&FormatDescriptor> {
        self.lookup_by_fourcc(pixel_format.into())
    }
}

impl FormatDescriptor {
    /// V4L2 pixel format to request from the device, if this format has one.
    pub fn pixel_format(&self) -> Option<v4l2r::PixelFormat> {
        self.modern_code.map(v4l2r::PixelFormat::from)
    }
}

#[cfg(test)]
mod tests {
    use v4l2r::PixelFormat;

    use crate::registry;
    use crate::FormatId;
    use crate::Fourcc;

    #[test]
    fn pixel_format_conversion() {
        let fourcc = Fourcc::new(b"MJPG");
        let pixel_format = PixelFormat::from(fourcc);
        assert_eq!(pixel_format.to_u32(), fourcc.as_u32());
        assert_eq!(Fourcc::from(pixel_format), fourcc);
    }

    #[test]
    fn lookup_by_pixel_format() {
        let registry = registry();

        let desc = registry
            .lookup_by_pixel_format(PixelFormat::from_u32(Fourcc::new(b"YU12").as_u32()))
            .unwrap();
        assert_eq!(desc.id, FormatId::YUV420);
        assert_eq!(desc.pixel_format().map(|p| p.to_u32()), Some(desc.modern_code_raw()));

        let yuv422 = registry.lookup_by_internal_id(FormatId::YUV422).unwrap();
        assert!(yuv422.pixel_format().is_none());
    }
}
