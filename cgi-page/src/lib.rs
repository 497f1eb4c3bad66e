// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod document;
mod escape;
mod response;

pub use crate::{
    document::Document,
    escape::{escape_attr, escape_text},
    response::Response,
};

// vim: ts=4 sw=4 expandtab
