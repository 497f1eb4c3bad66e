// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

/// One complete CGI response.
///
/// The framing contract with the invoking web server is fixed:
/// the `Content-Type` line, any extra header lines, exactly one blank
/// line, then the body.
pub struct Response {
    mime: String,
    extra_headers: Vec<String>,
    body: String,
}

impl Response {
    pub fn new(mime: &str, body: String) -> Self {
        Self {
            mime: mime.to_string(),
            extra_headers: Vec::new(),
            body,
        }
    }

    pub fn html(body: String) -> Self {
        Self::new("text/html", body)
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.extra_headers.push(header.to_string());
        self
    }

    pub fn emit_to<W: io::Write>(&self, f: &mut W) -> io::Result<()> {
        writeln!(f, "Content-Type: {}", self.mime)?;
        for header in &self.extra_headers {
            writeln!(f, "{header}")?;
        }
        writeln!(f)?;
        f.write_all(self.body.as_bytes())?;
        f.flush()
    }

    /// Emit the response to stdout, the CGI response stream.
    pub fn emit(&self) -> io::Result<()> {
        self.emit_to(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing() {
        let mut out = Vec::new();
        Response::html("<p>x</p>".to_string())
            .emit_to(&mut out)
            .unwrap();
        assert_eq!(out, b"Content-Type: text/html\n\n<p>x</p>");
    }

    #[test]
    fn test_extra_headers() {
        let mut out = Vec::new();
        Response::new("text/plain", "body".to_string())
            .with_header("Cache-Control: no-cache")
            .emit_to(&mut out)
            .unwrap();
        assert_eq!(
            out,
            b"Content-Type: text/plain\nCache-Control: no-cache\n\nbody"
        );
    }
}

// vim: ts=4 sw=4 expandtab
