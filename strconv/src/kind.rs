// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    convert::{Convert, ValueError},
    listize::{listize_default, Converter},
    numparse::{parse_bool, parse_f64, parse_i64},
};
use anyhow::{self as ah, format_err as err};
use std::{fmt, str::FromStr};

/// A 2D coordinate written as `(x,y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pair {
    pub x: f64,
    pub y: f64,
}

impl Pair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl FromStr for Pair {
    type Err = ah::Error;

    /// Parse `(x,y)`. A single real `x` is the pair `(x,0)`.
    fn from_str(s: &str) -> ah::Result<Pair> {
        let coords: Vec<f64> = listize_default(s, &Converter::Single(parse_f64))?;
        match coords.as_slice() {
            [x] => Ok(Pair::new(*x, 0.0)),
            [x, y] => Ok(Pair::new(*x, *y)),
            _ => Err(ValueError::new("Pair has more than two coordinates").into()),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Alignment of a figure on the page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Top,
    Bottom,
    Zero,
}

impl FromStr for Align {
    type Err = ah::Error;

    fn from_str(s: &str) -> ah::Result<Align> {
        match s {
            "C" => Ok(Align::Center),
            "T" => Ok(Align::Top),
            "B" => Ok(Align::Bottom),
            "Z" => Ok(Align::Zero),
            _ => Err(ValueError::new("Invalid alignment").into()),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Align::Center => 'C',
            Align::Top => 'T',
            Align::Bottom => 'B',
            Align::Zero => 'Z',
        };
        write!(f, "{c}")
    }
}

/// A converted token.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
    Str(String),
    Pair(Pair),
    Align(Align),
}

impl Value {
    /// The [Kind] that produces this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Real(_) => Kind::Real,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
            Value::Pair(_) => Kind::Pair,
            Value::Align(_) => Kind::Align,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Pair(v) => write!(f, "{v}"),
            Value::Align(v) => write!(f, "{v}"),
        }
    }
}

/// Type descriptor. Converts a token into a [Value] of this kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Int,
    Real,
    Bool,
    Str,
    Pair,
    Align,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Real => "real",
            Kind::Bool => "bool",
            Kind::Str => "str",
            Kind::Pair => "pair",
            Kind::Align => "align",
        }
    }

    /// Human readable description of the expected argument.
    pub fn text(&self) -> &'static str {
        match self {
            Kind::Int => "an int",
            Kind::Real => "a real",
            Kind::Bool => "a bool",
            Kind::Str => "a string",
            Kind::Pair => "a pair",
            Kind::Align => "an alignment",
        }
    }

    fn convert_raw(&self, raw: &str) -> ah::Result<Value> {
        Ok(match self {
            Kind::Int => Value::Int(parse_i64(raw)?),
            Kind::Real => Value::Real(parse_f64(raw)?),
            Kind::Bool => Value::Bool(parse_bool(raw)?),
            Kind::Str => Value::Str(raw.to_string()),
            Kind::Pair => Value::Pair(raw.parse()?),
            Kind::Align => Value::Align(raw.parse()?),
        })
    }
}

impl FromStr for Kind {
    type Err = ah::Error;

    fn from_str(s: &str) -> ah::Result<Kind> {
        match s.trim().to_lowercase().as_str() {
            "int" => Ok(Kind::Int),
            "real" | "float" => Ok(Kind::Real),
            "bool" => Ok(Kind::Bool),
            "str" | "string" => Ok(Kind::Str),
            "pair" => Ok(Kind::Pair),
            "align" => Ok(Kind::Align),
            other => Err(err!("Unknown value kind '{other}'.")),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Convert<Value> for Kind {
    fn convert(&self, raw: &str) -> ah::Result<Value> {
        self.convert_raw(raw)
            .map_err(|e| e.context(ValueError::requires(raw, self.text())))
    }
}

/// Parse a list of kind names such as `"int, real"` or `"(int,real)"`.
///
/// A single name converts all elements alike,
/// multiple names convert positionally.
pub fn kinds_from_list(text: &str) -> ah::Result<Converter<Kind>> {
    let mut kinds: Vec<Kind> = listize_default(text, &Converter::Single(Kind::from_str))?;
    if kinds.len() == 1 {
        if let Some(kind) = kinds.pop() {
            return Ok(Converter::Single(kind));
        }
    }
    Ok(Converter::Positional(kinds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_value_error, listize, try_convert};

    #[test]
    fn test_kind_from_str() {
        assert_eq!("int".parse::<Kind>().unwrap(), Kind::Int);
        assert_eq!(" Float ".parse::<Kind>().unwrap(), Kind::Real);
        assert_eq!("REAL".parse::<Kind>().unwrap(), Kind::Real);
        assert_eq!("string".parse::<Kind>().unwrap(), Kind::Str);
        assert_eq!("align".parse::<Kind>().unwrap(), Kind::Align);
        assert!("complex".parse::<Kind>().is_err());
        for kind in [Kind::Int, Kind::Real, Kind::Bool, Kind::Str, Kind::Pair, Kind::Align] {
            assert_eq!(kind.to_string().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_convert() {
        assert_eq!(Kind::Int.convert("0x10").unwrap(), Value::Int(16));
        assert_eq!(Kind::Real.convert("2.5").unwrap(), Value::Real(2.5));
        assert_eq!(Kind::Bool.convert("off").unwrap(), Value::Bool(false));
        assert_eq!(Kind::Str.convert("a b").unwrap(), Value::Str("a b".to_string()));
        assert_eq!(Kind::Pair.convert("(1, -2)").unwrap(), Value::Pair(Pair::new(1.0, -2.0)));
        assert_eq!(Kind::Pair.convert("3").unwrap(), Value::Pair(Pair::new(3.0, 0.0)));
        assert_eq!(Kind::Align.convert("Z").unwrap(), Value::Align(Align::Zero));
        assert_eq!(Kind::Real.convert("7").unwrap().kind(), Kind::Real);
    }

    #[test]
    fn test_convert_errors() {
        let e = Kind::Int.convert("1.5").unwrap_err();
        assert!(is_value_error(&e));
        assert_eq!(e.to_string(), "\"1.5\": requires an int as an argument");

        for (kind, raw) in [
            (Kind::Real, "x"),
            (Kind::Bool, "perhaps"),
            (Kind::Pair, "(1,2,3)"),
            (Kind::Pair, "(a,b)"),
            (Kind::Align, "c"),
        ] {
            assert!(is_value_error(&kind.convert(raw).unwrap_err()));
            assert_eq!(try_convert(raw, |s| kind.convert(s)).unwrap(), None);
        }
    }

    #[test]
    fn test_mixed_positional() {
        let conv = Converter::Positional(vec![Kind::Int, Kind::Real]);
        let v: Vec<Value> = listize("(1,2,3)", &conv, "()").unwrap();
        assert_eq!(v, vec![Value::Int(1), Value::Real(2.0), Value::Real(3.0)]);

        let conv = Converter::Positional(vec![Kind::Str, Kind::Bool, Kind::Align]);
        let v: Vec<Value> = listize("[name, yes, T, B]", &conv, "[]").unwrap();
        assert_eq!(
            v,
            vec![
                Value::Str("name".to_string()),
                Value::Bool(true),
                Value::Align(Align::Top),
                Value::Align(Align::Bottom),
            ]
        );
    }

    #[test]
    fn test_kinds_from_list() {
        assert_eq!(kinds_from_list("int").unwrap(), Converter::Single(Kind::Int));
        assert_eq!(
            kinds_from_list("(int, float)").unwrap(),
            Converter::Positional(vec![Kind::Int, Kind::Real])
        );
        assert!(kinds_from_list("int,foo").is_err());
        assert!(kinds_from_list("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Real(2.0).to_string(), "2");
        assert_eq!(Value::Real(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Pair(Pair::new(1.5, 2.0)).to_string(), "(1.5,2)");
        assert_eq!(Value::Align(Align::Center).to_string(), "C");
        assert_eq!(Align::default(), Align::Center);
        assert_eq!(Pair::default(), Pair::new(0.0, 0.0));
    }
}

// vim: ts=4 sw=4 expandtab
