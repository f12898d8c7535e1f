// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! lsformats, a small program listing the pixel formats known to capture-formats and resolving
//! V4L1 palettes or V4L2 fourccs to them.

use std::str::FromStr;

use anyhow::anyhow;
use argh::FromArgs;

use capture_formats::registry;
use capture_formats::FormatDescriptor;
use capture_formats::FormatFamily;
use capture_formats::Fourcc;
use capture_formats::Resolution;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Api {
    All,
    V4l1,
    V4l2,
}

impl FromStr for Api {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Api::All),
            "v4l1" | "V4L1" => Ok(Api::V4l1),
            "v4l2" | "V4L2" => Ok(Api::V4l2),
            _ => Err("unrecognized API. Valid values: all, v4l1, v4l2"),
        }
    }
}

fn parse_resolution(s: &str) -> Result<Resolution, String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {}", s))?;

    Ok(Resolution {
        width: width.parse().map_err(|e| format!("invalid width: {}", e))?,
        height: height.parse().map_err(|e| format!("invalid height: {}", e))?,
    })
}

/// List and query the pixel formats known to capture-formats
#[derive(Debug, FromArgs)]
struct Args {
    /// only list formats usable with this API (all, v4l1, v4l2)
    #[argh(option, default = "Api::All")]
    api: Api,

    /// only list formats of this family (rgb, grey, palette, yuv, semiplanar, bayer, compressed,
    /// vendor)
    #[argh(option)]
    family: Option<FormatFamily>,

    /// resolve a V4L1 palette number
    #[argh(option)]
    palette: Option<i32>,

    /// resolve a V4L2 four-character code
    #[argh(option)]
    fourcc: Option<String>,

    /// resolve a format name
    #[argh(option)]
    name: Option<String>,

    /// frame size to compute buffer sizes for, as WIDTHxHEIGHT
    #[argh(option, from_str_fn(parse_resolution))]
    size: Option<Resolution>,
}

fn print_format(desc: &FormatDescriptor, size: Option<Resolution>) {
    let palette = match desc.legacy_code {
        Some(palette) => palette.code().to_string(),
        None => "-".into(),
    };
    let fourcc = match desc.modern_code {
        Some(fourcc) => fourcc.to_string(),
        None => "-".into(),
    };

    let mut line = format!(
        "{:<14} {:>7} {:>5} {:>11} {}{}",
        desc.id.to_string(),
        palette,
        fourcc,
        desc.depth.to_string(),
        desc.name,
        if desc.is_deprecated() {
            " (deprecated)"
        } else {
            ""
        }
    );

    if let Some(size) = size {
        match desc.byte_size_for_resolution(size) {
            Ok(bytes) => line.push_str(&format!(" [{}: {} bytes]", size, bytes)),
            Err(e) => line.push_str(&format!(" [{}: {}]", size, e)),
        }
    }

    println!("{}", line);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Args = argh::from_env();
    let registry = registry();

    let query = if let Some(palette) = args.palette {
        Some(
            registry
                .lookup_by_legacy_code(palette)
                .ok_or_else(|| anyhow!("no format for V4L1 palette {}", palette))?,
        )
    } else if let Some(fourcc) = &args.fourcc {
        let code: [u8; 4] = fourcc
            .as_bytes()
            .try_into()
            .map_err(|_| anyhow!("a fourcc has exactly 4 characters, got {:?}", fourcc))?;
        Some(
            registry
                .lookup_by_fourcc(Fourcc::from(&code))
                .ok_or_else(|| anyhow!("no format for V4L2 code {}", fourcc))?,
        )
    } else if let Some(name) = &args.name {
        Some(
            registry
                .lookup_by_name(name)
                .ok_or_else(|| anyhow!("no format named {}", name))?,
        )
    } else {
        None
    };

    if let Some(desc) = query {
        print_format(desc, args.size);
        return Ok(());
    }

    let formats = registry
        .iter()
        .filter(|desc| match args.api {
            Api::All => true,
            Api::V4l1 => desc.is_supported_by_legacy_api(),
            Api::V4l2 => desc.is_supported_by_modern_api(),
        })
        .filter(|desc| args.family.map_or(true, |family| desc.family == family));

    let mut count = 0;
    for desc in formats {
        print_format(desc, args.size);
        count += 1;
    }
    log::info!("{} of {} formats listed", count, registry.len());

    Ok(())
}
