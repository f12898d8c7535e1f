// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Glue between the registry and the device API crates.
//!
//! Each backend is gated behind the cargo feature of the same name and only converts between the
//! types of this crate and those of the device API crate.

#[cfg(feature = "v4l2")]
pub mod v4l2;
