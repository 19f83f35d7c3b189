// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod convert;
mod kind;
mod listize;
pub mod numparse;
mod slice;

pub use crate::{
    convert::{is_value_error, try_convert, try_parse, Convert, ValueError},
    kind::{kinds_from_list, Align, Kind, Pair, Value},
    listize::{listize, listize_default, Converter, DEFAULT_DELIMITERS},
    slice::{set_slice, slice, MAX_SLICE_LEN},
};

// vim: ts=4 sw=4 expandtab
