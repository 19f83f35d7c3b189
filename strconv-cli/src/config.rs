// -*- coding: utf-8 -*-
//
// strconv - String conversion helpers
//
// Copyright (C) 2011-2024 Michael Büsch <m@bues.ch>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, format_err as err, Context as _};
use configparser::ini::Ini;
use std::path::Path;
use strconv::{kinds_from_list, numparse::parse_bool, Converter, Kind, DEFAULT_DELIMITERS};

pub const CONF_PATH: &str = "/etc/strconv.conf";
const SECT: &str = "STRCONV";

pub struct StrconvConfig {
    ini: Ini,
}

impl StrconvConfig {
    /// Load the configuration from `path`.
    ///
    /// Without an explicit path the default file is loaded, if it exists.
    pub fn new(path: Option<&Path>) -> ah::Result<Self> {
        let mut ini = Ini::new_cs();
        let path = match path {
            Some(path) => Some(path),
            None => Some(Path::new(CONF_PATH)).filter(|p| p.exists()),
        };
        if let Some(path) = path {
            if let Err(e) = ini.load(path) {
                return Err(err!("Failed to load configuration {path:?}: {e}"));
            }
        }
        Ok(Self { ini })
    }

    #[cfg(test)]
    pub fn from_text(text: &str) -> ah::Result<Self> {
        let mut ini = Ini::new_cs();
        if let Err(e) = ini.read(text.to_string()) {
            return Err(err!("Failed to parse configuration: {e}"));
        }
        Ok(Self { ini })
    }

    fn get(&self, key: &str) -> Option<String> {
        self.ini.get(SECT, key).filter(|v| !v.is_empty())
    }

    pub fn debug(&self) -> ah::Result<bool> {
        match self.get("debug") {
            Some(v) => parse_bool(&v).context("Configuration 'debug'"),
            None => Ok(false),
        }
    }

    /// Default value kind of the `try` command.
    pub fn kind(&self) -> ah::Result<Kind> {
        match self.get("kind") {
            Some(v) => v.parse().context("Configuration 'kind'"),
            None => Ok(Kind::Real),
        }
    }

    /// Default element kinds of the `list` command.
    pub fn kinds(&self) -> ah::Result<Converter<Kind>> {
        match self.get("kinds") {
            Some(v) => kinds_from_list(&v).context("Configuration 'kinds'"),
            None => Ok(Converter::Single(Kind::Real)),
        }
    }

    pub fn delimiters(&self) -> String {
        self.get("delimiters")
            .unwrap_or_else(|| DEFAULT_DELIMITERS.to_string())
    }
}


// vim: ts=4 sw=4 expandtab
