// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::numparse::parse_f64;
use anyhow as ah;
use std::{
    char::ParseCharError,
    error::Error as StdError,
    fmt,
    num::{ParseFloatError, ParseIntError},
    str::ParseBoolError,
};

/// Malformed input value.
///
/// Converters return this (or one of the standard library parse errors)
/// if the raw value cannot be represented in the target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueError(String);

impl ValueError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Error for a `token` that is not `what` (e.g. "an int").
    pub fn requires(token: &str, what: &str) -> Self {
        Self(format!("{token:?}: requires {what} as an argument"))
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for ValueError {}

/// Converts one raw token into a `T`.
pub trait Convert<T> {
    fn convert(&self, raw: &str) -> ah::Result<T>;
}

impl<T, F> Convert<T> for F
where
    F: Fn(&str) -> ah::Result<T>,
{
    #[inline]
    fn convert(&self, raw: &str) -> ah::Result<T> {
        self(raw)
    }
}

macro_rules! is_any_of {
    ($err:expr, $($ty:ty),+) => {
        false $(|| $err.is::<$ty>())+
    };
}

macro_rules! downcasts_to_any_of {
    ($err:expr, $($ty:ty),+) => {
        false $(|| $err.downcast_ref::<$ty>().is_some())+
    };
}

fn is_value_cause(cause: &(dyn StdError + 'static)) -> bool {
    is_any_of!(
        cause,
        ValueError,
        ParseIntError,
        ParseFloatError,
        ParseBoolError,
        ParseCharError
    )
}

/// Check whether `e` is a value-formatting error.
///
/// This is true if the error itself, one of its context layers
/// or one of its sources is a [ValueError] or a standard library parse error.
/// Everything else (I/O errors, lookup errors, ...) is not a value error.
pub fn is_value_error(e: &ah::Error) -> bool {
    downcasts_to_any_of!(
        e,
        ValueError,
        ParseIntError,
        ParseFloatError,
        ParseBoolError,
        ParseCharError
    ) || e.chain().any(is_value_cause)
}

/// Convert `value` with `converter`.
///
/// Returns `Ok(None)` if the converter failed with a value-formatting error
/// (see [is_value_error]). All other errors are passed through to the caller.
pub fn try_convert<V, T, F>(value: V, converter: F) -> ah::Result<Option<T>>
where
    F: FnOnce(V) -> ah::Result<T>,
{
    match converter(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_value_error(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// [try_convert] with the default floating point converter.
pub fn try_parse(value: &str) -> Option<f64> {
    // parse_f64 only ever fails with value errors.
    try_convert(value, parse_f64).ok().flatten()
}


// vim: ts=4 sw=4 expandtab
