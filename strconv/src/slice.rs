// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicing of parsed lists.
//!
//! Negative indices count from the end of the list.
//! Cyclic lists wrap around instead of clamping.

use anyhow::{self as ah, format_err as err, Context as _};

/// Maximum number of elements a cyclic slice may produce.
pub const MAX_SLICE_LEN: usize = 1024 * 1024;

/// Resolve a possibly negative index and clamp it to `0..=len`.
#[inline]
fn slice_index(index: i64, len: usize) -> usize {
    let index = if index < 0 {
        index.saturating_add(len as i64)
    } else {
        index
    };
    if index < 0 {
        0
    } else {
        (index as u64).min(len as u64) as usize
    }
}

/// `index` modulo `len`. `len` must not be zero.
#[inline]
fn cyclic_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// Get the elements `left..right` of `items`.
///
/// Fails if a cyclic slice would be longer than [MAX_SLICE_LEN].
pub fn slice<T: Clone>(items: &[T], left: i64, right: i64, cyclic: bool) -> ah::Result<Vec<T>> {
    let len = items.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    if cyclic {
        if right <= left {
            return Ok(Vec::new());
        }
        let count = right.abs_diff(left);
        if count > MAX_SLICE_LEN as u64 {
            return Err(err!(
                "Cyclic slice of {count} elements exceeds the limit of {MAX_SLICE_LEN}."
            ));
        }
        let count = count as usize;
        let mut ret = Vec::new();
        ret.try_reserve(count).context("Allocate cyclic slice")?;
        ret.extend(
            items
                .iter()
                .cycle()
                .skip(cyclic_index(left, len))
                .take(count)
                .cloned(),
        );
        Ok(ret)
    } else {
        let l = slice_index(left, len);
        let r = slice_index(right, len);
        if r <= l {
            Ok(Vec::new())
        } else {
            Ok(items[l..r].to_vec())
        }
    }
}

/// Replace the elements `left..right` of `items` by `src`.
///
/// The list shrinks or grows if `src` has a different length than the slice.
/// For cyclic lists a slice that wraps around the end must be
/// replaced by exactly as many elements as it covers.
pub fn set_slice<T: Clone>(
    items: &mut Vec<T>,
    left: i64,
    right: i64,
    src: &[T],
    cyclic: bool,
) -> ah::Result<()> {
    let len = items.len();

    if !cyclic || len == 0 {
        let l = slice_index(left, len);
        let r = slice_index(right, len).max(l);
        items.splice(l..r, src.iter().cloned());
        return Ok(());
    }

    let right = right.max(left);
    if right == left {
        // Empty slice: insert at the wrapped position.
        let l = cyclic_index(left, len);
        items.splice(l..l, src.iter().cloned());
        return Ok(());
    }

    if i128::from(left) + (len as i128) < i128::from(right) {
        return Err(err!("Assigning to cyclic slice with repeated entries."));
    }

    let l = cyclic_index(left, len);
    // A slice reaching up to the end is not bridging.
    let r = match cyclic_index(right, len) {
        0 => len,
        r => r,
    };

    if l < r {
        items.splice(l..r, src.iter().cloned());
    } else if r + len - l == src.len() {
        let (tail, head) = src.split_at(len - l);
        items[l..].clone_from_slice(tail);
        items[..r].clone_from_slice(head);
    } else {
        return Err(err!("Assignment to cyclic slice is not well defined."));
    }
    Ok(())
}


// vim: ts=4 sw=4 expandtab
