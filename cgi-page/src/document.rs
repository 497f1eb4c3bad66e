// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

const DEFAULT_HTML_ALLOC: usize = 1024 * 8;

/// Assembles one complete HTML document.
///
/// The body markup is produced by the individual scripts; this only
/// provides the shared doctype/head/style skeleton around it.
pub struct Document {
    title: String,
    charset: Option<&'static str>,
    css: &'static str,
    body: String,
}

impl Document {
    pub fn new(title: &str, css: &'static str) -> Self {
        Self {
            title: title.to_string(),
            charset: None,
            css,
            body: String::with_capacity(DEFAULT_HTML_ALLOC),
        }
    }

    /// Add a `<meta charset>` tag to the head.
    pub fn with_charset(mut self, charset: &'static str) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Access the body buffer for `write!`-style appending.
    pub fn body(&mut self) -> &mut String {
        &mut self.body
    }

    /// Render the full document text.
    pub fn render(self) -> String {
        let mut b = String::with_capacity(
            self.body.len() + self.css.len() + DEFAULT_HTML_ALLOC / 8,
        );
        b.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        if let Some(charset) = self.charset {
            let _ = writeln!(b, r#"    <meta charset="{charset}">"#);
        }
        let _ = writeln!(b, "    <title>{}</title>", self.title);
        b.push_str("    <style>");
        b.push_str(self.css);
        b.push_str("</style>\n</head>\n<body>\n");
        b.push_str(&self.body);
        b.push_str("</body>\n</html>\n");
        b
    }
}


// vim: ts=4 sw=4 expandtab
