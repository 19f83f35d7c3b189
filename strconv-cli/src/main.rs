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

mod config;

use crate::config::StrconvConfig;
use anyhow::{self as ah, format_err as err, Context as _};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strconv::{
    kinds_from_list, listize, listize_default, numparse::parse_i64, slice, try_convert, Convert,
    Converter, Kind, Value,
};

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// The configuration file.
    /// Defaults to /etc/strconv.conf, if that exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print diagnostic messages to stderr.
    #[arg(long, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Convert single values. Prints "None" for values that do not convert.
    Try {
        /// The value kind: int, real, bool, str, pair or align.
        #[arg(long)]
        kind: Option<String>,

        /// The values to convert.
        values: Vec<String>,
    },

    /// Parse delimited, comma separated lists such as "(1, 2, 3)".
    List {
        /// Comma separated element kinds.
        /// The last kind is used for all remaining elements.
        #[arg(long)]
        kinds: Option<String>,

        /// Characters stripped from both ends of the list.
        #[arg(long)]
        delimiters: Option<String>,

        /// Only print the elements LEFT,RIGHT of each list.
        #[arg(long, allow_hyphen_values = true)]
        slice: Option<String>,

        /// Slices wrap around the end of the list.
        #[arg(long, default_value = "false")]
        cyclic: bool,

        /// The lists to parse.
        texts: Vec<String>,
    },
}

/// Parse a "LEFT,RIGHT" slice range.
fn parse_range(text: &str) -> ah::Result<(i64, i64)> {
    let range: Vec<i64> = listize_default(text, &Converter::Single(parse_i64))?;
    match range.as_slice() {
        [left, right] => Ok((*left, *right)),
        _ => Err(err!("Slice range must be LEFT,RIGHT.")),
    }
}

fn format_list(values: &[Value]) -> String {
    let elems: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", elems.join(", "))
}

fn run_try(kind: Kind, values: &[String], debug: bool) -> ah::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(values.len());
    for value in values {
        let line = match try_convert(value.as_str(), |v| kind.convert(v))? {
            Some(v) => v.to_string(),
            None => {
                if debug {
                    eprintln!("{value:?} is not {}.", kind.text());
                }
                "None".to_string()
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

fn run_list(
    kinds: &Converter<Kind>,
    delimiters: &str,
    range: Option<(i64, i64)>,
    cyclic: bool,
    texts: &[String],
    debug: bool,
) -> ah::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(texts.len());
    for text in texts {
        if debug {
            eprintln!("Parsing {text:?} with {kinds:?}, delimiters {delimiters:?}.");
        }
        let mut values: Vec<Value> = listize(text, kinds, delimiters)?;
        if debug {
            let parsed: Vec<&str> = values.iter().map(|v| v.kind().name()).collect();
            eprintln!("Parsed {} elements of kinds {parsed:?}.", values.len());
        }
        if let Some((left, right)) = range {
            values = slice(&values, left, right, cyclic).context("--slice")?;
        }
        lines.push(format_list(&values));
    }
    Ok(lines)
}

fn run(opts: &Opts) -> ah::Result<Vec<String>> {
    let config = StrconvConfig::new(opts.config.as_deref()).context("strconv.conf")?;
    let debug = opts.debug || config.debug()?;

    match &opts.command {
        Command::Try { kind, values } => {
            let kind = match kind {
                Some(kind) => kind.parse::<Kind>().context("--kind")?,
                None => config.kind()?,
            };
            run_try(kind, values, debug)
        }
        Command::List {
            kinds,
            delimiters,
            slice,
            cyclic,
            texts,
        } => {
            let kinds = match kinds {
                Some(kinds) => kinds_from_list(kinds).context("--kinds")?,
                None => config.kinds()?,
            };
            let delimiters = delimiters.clone().unwrap_or_else(|| config.delimiters());
            let range = match slice {
                Some(slice) => Some(parse_range(slice).context("--slice")?),
                None => None,
            };
            run_list(&kinds, &delimiters, range, *cyclic, texts, debug)
        }
    }
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();
    for line in run(&opts)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_opts() {
        let opts = Opts::try_parse_from(["strconv", "--debug", "try", "--kind", "int", "1", "x"])
            .unwrap();
        assert!(opts.debug);
        assert!(opts.config.is_none());
        match opts.command {
            Command::Try { kind, values } => {
                assert_eq!(kind.as_deref(), Some("int"));
                assert_eq!(values, strings(&["1", "x"]));
            }
            Command::List { .. } => panic!("Wrong command"),
        }

        let opts = Opts::try_parse_from([
            "strconv", "list", "--slice", "-2,5", "--cyclic", "(1,2)", "(3)",
        ])
        .unwrap();
        match opts.command {
            Command::List {
                slice,
                cyclic,
                texts,
                ..
            } => {
                assert_eq!(slice.as_deref(), Some("-2,5"));
                assert!(cyclic);
                assert_eq!(texts, strings(&["(1,2)", "(3)"]));
            }
            Command::Try { .. } => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1,3").unwrap(), (1, 3));
        assert_eq!(parse_range("(-2, 0x10)").unwrap(), (-2, 16));
        assert!(parse_range("1").is_err());
        assert!(parse_range("1,2,3").is_err());
        assert!(parse_range("a,b").is_err());
    }

    #[test]
    fn test_run_try() {
        let lines = run_try(Kind::Real, &strings(&["3.14", "abc", " 2 "]), false).unwrap();
        assert_eq!(lines, strings(&["3.14", "None", "2"]));

        let lines = run_try(Kind::Pair, &strings(&["(1,2)", "(1,2,3)"]), false).unwrap();
        assert_eq!(lines, strings(&["(1,2)", "None"]));
    }

    #[test]
    fn test_run_list() {
        let kinds = Converter::Positional(vec![Kind::Int, Kind::Real]);
        let lines = run_list(&kinds, "()", None, false, &strings(&["(1,2,3.5)"]), false).unwrap();
        assert_eq!(lines, strings(&["[1, 2, 3.5]"]));

        let kinds = Converter::Single(Kind::Int);
        let lines = run_list(
            &kinds,
            "[]",
            Some((3, 6)),
            true,
            &strings(&["[1, 2, 3, 4]", "[5]"]),
            false,
        )
        .unwrap();
        assert_eq!(lines, strings(&["[4, 1, 2]", "[5, 5, 5]"]));

        assert!(run_list(&kinds, "()", None, false, &strings(&["(1,x)"]), false).is_err());

        // Oversized cyclic ranges fail instead of allocating.
        let range = parse_range("0,1099511627776").unwrap();
        assert!(run_list(&kinds, "()", Some(range), true, &strings(&["(1,2)"]), true).is_err());
        let lines = run_list(&kinds, "()", Some(range), false, &strings(&["(1,2)"]), true).unwrap();
        assert_eq!(lines, strings(&["[1, 2]"]));
    }
}

// vim: ts=4 sw=4 expandtab
