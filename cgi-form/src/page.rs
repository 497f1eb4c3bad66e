// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow as ah;
use cgi_page::{escape_attr, Document};
use cgi_request::Query;
use std::{fmt::Write as _, writeln as ln};

const CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #11998e 0%, #38ef7d 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            margin: 0;
        }
        .container {
            background: white;
            padding: 40px 60px;
            border-radius: 15px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.2);
            text-align: center;
            max-width: 500px;
        }
        h1 { color: #11998e; margin-bottom: 20px; }
        .success-icon { font-size: 4em; margin-bottom: 20px; }
        .data-box {
            background: #f5f5f5;
            padding: 20px;
            border-radius: 10px;
            text-align: left;
            margin: 20px 0;
        }
        .data-box p {
            margin: 10px 0;
            color: #333;
        }
        .data-box strong {
            color: #11998e;
        }
        .raw-data {
            background: #2d2d2d;
            color: #eee;
            padding: 15px;
            border-radius: 8px;
            font-family: 'Monaco', 'Consolas', monospace;
            font-size: 0.85em;
            text-align: left;
            word-break: break-all;
            margin-top: 20px;
        }
        a {
            color: #11998e;
            text-decoration: none;
            display: inline-block;
            margin-top: 20px;
        }
        a:hover { text-decoration: underline; }
    "#;

#[rustfmt::skip]
pub fn render(form: &Query, raw_body: &str, content_length: usize) -> ah::Result<String> {
    let name = escape_attr(form.first_or("name", "Anonymous"));
    let message = escape_attr(form.first_or("message", "No message"));
    let raw = if raw_body.is_empty() {
        "(empty)".to_string()
    } else {
        escape_attr(raw_body)
    };

    let mut doc = Document::new("Form Submission Result", CSS);
    let d = doc.body();

    ln!(d, r#"    <div class="container">"#)?;
    ln!(d, r#"        <div class="success-icon">&#x2705;</div>"#)?;
    ln!(d, r#"        <h1>Form Submitted Successfully!</h1>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="data-box">"#)?;
    ln!(d, r#"            <p><strong>Name:</strong> {name}</p>"#)?;
    ln!(d, r#"            <p><strong>Message:</strong> {message}</p>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="raw-data">"#)?;
    ln!(d, r#"            <strong>Raw POST Data:</strong><br>"#)?;
    ln!(d, r#"            {raw}"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <p style="color: #888; margin-top: 20px;">"#)?;
    ln!(d, r#"            Content-Length: {content_length} bytes"#)?;
    ln!(d, r#"        </p>"#)?;
    ln!(d)?;
    ln!(d, r#"        <a href="/">&larr; Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}


// vim: ts=4 sw=4 expandtab
