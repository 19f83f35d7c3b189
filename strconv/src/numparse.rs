// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whitespace tolerant number and boolean parsers.
//!
//! All parsers fail with a value-formatting error,
//! so they can be used as converters for [crate::try_convert].

use crate::convert::ValueError;
use anyhow as ah;

/// Hex digits after a `0x` prefix. The sign belongs in front of the prefix.
fn hex_digits(s: &str) -> ah::Result<&str> {
    if s.starts_with(['+', '-']) {
        Err(ValueError::new("Sign after hex prefix").into())
    } else {
        Ok(s)
    }
}

pub fn parse_i64(s: &str) -> ah::Result<i64> {
    let s = s.trim();
    if let Some(s) = s.strip_prefix("-0x") {
        Ok(i64::from_str_radix(&format!("-{}", hex_digits(s)?), 16)?)
    } else if let Some(s) = s.strip_prefix("0x") {
        Ok(i64::from_str_radix(hex_digits(s)?, 16)?)
    } else {
        Ok(s.parse::<i64>()?)
    }
}

pub fn parse_f64(s: &str) -> ah::Result<f64> {
    Ok(s.trim().parse::<f64>()?)
}

pub fn parse_bool(s: &str) -> ah::Result<bool> {
    let s = s.to_lowercase();
    let s = s.trim();
    match s {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ValueError::new("Invalid boolean string").into()),
    }
}


// vim: ts=4 sw=4 expandtab
