// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::convert::Convert;
use anyhow::{self as ah, format_err as err};

/// Delimiter characters stripped by [listize_default].
pub const DEFAULT_DELIMITERS: &str = "()";

const ELEMSEP: char = ',';

/// Element converter(s) for [listize].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Converter<C> {
    /// Use the same converter for every element.
    Single(C),
    /// Use the converter at the element's position.
    /// Elements beyond the end of the sequence use the last converter.
    Positional(Vec<C>),
}

impl<C> Converter<C> {
    /// Get the converter for the element at `index`.
    ///
    /// Fails on an empty positional sequence.
    pub fn for_index(&self, index: usize) -> ah::Result<&C> {
        match self {
            Self::Single(conv) => Ok(conv),
            Self::Positional(convs) => convs
                .get(index)
                .or_else(|| convs.last())
                .ok_or_else(|| err!("Empty positional converter sequence.")),
        }
    }
}

/// Strip any run of characters contained in `delimiters` (and whitespace)
/// from both ends of `text`.
///
/// This is not bracket matching. "((1,2)" and "1,2))" strip to "1,2" as well.
fn strip_delimiters<'a>(text: &'a str, delimiters: &str) -> &'a str {
    text.trim_matches(|c: char| c.is_whitespace() || delimiters.contains(c))
}

/// Parse a delimited, comma separated list such as `"(1, 2, 3)"`.
///
/// Each element is trimmed and converted with the converter selected
/// by [Converter::for_index]. Conversion errors are returned unmodified.
pub fn listize<T, C>(text: &str, converters: &Converter<C>, delimiters: &str) -> ah::Result<Vec<T>>
where
    C: Convert<T>,
{
    strip_delimiters(text, delimiters)
        .split(ELEMSEP)
        .enumerate()
        .map(|(i, elem)| converters.for_index(i)?.convert(elem.trim()))
        .collect()
}

/// [listize] with the [DEFAULT_DELIMITERS].
pub fn listize_default<T, C>(text: &str, converters: &Converter<C>) -> ah::Result<Vec<T>>
where
    C: Convert<T>,
{
    listize(text, converters, DEFAULT_DELIMITERS)
}


// vim: ts=4 sw=4 expandtab
