// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow as ah;
use cgi_page::{escape_text, Document};
use std::{fmt::Write as _, writeln as ln};

const CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
            min-height: 100vh;
            padding: 40px 20px;
            margin: 0;
            color: #eee;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
        }
        h1 {
            color: #00d4ff;
            text-align: center;
            margin-bottom: 30px;
        }
        .info-card {
            background: rgba(255,255,255,0.1);
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
        }
        .info-card h2 {
            color: #00d4ff;
            font-size: 1.1em;
            margin-bottom: 15px;
        }
        .info-row {
            display: flex;
            justify-content: space-between;
            padding: 10px 0;
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }
        .info-row:last-child {
            border-bottom: none;
        }
        .label {
            color: #888;
        }
        .value {
            color: #00c853;
            font-family: 'Monaco', 'Consolas', monospace;
        }
        .data-box {
            background: rgba(0,0,0,0.4);
            padding: 20px;
            border-radius: 10px;
            font-family: 'Monaco', 'Consolas', monospace;
            font-size: 0.9em;
            white-space: pre-wrap;
            word-break: break-all;
            max-height: 400px;
            overflow-y: auto;
        }
        .empty {
            color: #888;
            font-style: italic;
        }
        a {
            color: #00d4ff;
            text-decoration: none;
            display: inline-block;
            margin-top: 20px;
        }
        a:hover { text-decoration: underline; }
        .test-form {
            margin-top: 30px;
            padding: 20px;
            background: rgba(255,255,255,0.05);
            border-radius: 10px;
        }
        .test-form textarea {
            width: 100%;
            height: 100px;
            padding: 10px;
            border: 1px solid rgba(255,255,255,0.2);
            border-radius: 8px;
            background: rgba(0,0,0,0.3);
            color: #eee;
            font-family: 'Monaco', 'Consolas', monospace;
            resize: vertical;
        }
        .test-form button {
            margin-top: 10px;
            padding: 10px 20px;
            background: linear-gradient(90deg, #00d4ff, #7b2ff7);
            border: none;
            border-radius: 8px;
            color: white;
            cursor: pointer;
        }
    "#;

#[rustfmt::skip]
pub fn render(
    content_type: Option<&str>,
    content_length: usize,
    method: &str,
    body: &str,
) -> ah::Result<String> {
    let content_type = escape_text(content_type.unwrap_or("Not specified"));
    let method = if method.is_empty() {
        "Unknown".to_string()
    } else {
        escape_text(method)
    };
    let body_html = if body.is_empty() {
        "<span class='empty'>(No data received)</span>".to_string()
    } else {
        escape_text(body)
    };

    let mut doc = Document::new("POST Data Received", CSS).with_charset("UTF-8");
    let d = doc.body();

    ln!(d, r#"    <div class="container">"#)?;
    ln!(d, r#"        <h1>&#x1F4E5; POST Data Received</h1>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="info-card">"#)?;
    ln!(d, r#"            <h2>Request Information</h2>"#)?;
    ln!(d, r#"            <div class="info-row">"#)?;
    ln!(d, r#"                <span class="label">Content-Type:</span>"#)?;
    ln!(d, r#"                <span class="value">{content_type}</span>"#)?;
    ln!(d, r#"            </div>"#)?;
    ln!(d, r#"            <div class="info-row">"#)?;
    ln!(d, r#"                <span class="label">Content-Length:</span>"#)?;
    ln!(d, r#"                <span class="value">{content_length} bytes</span>"#)?;
    ln!(d, r#"            </div>"#)?;
    ln!(d, r#"            <div class="info-row">"#)?;
    ln!(d, r#"                <span class="label">Request Method:</span>"#)?;
    ln!(d, r#"                <span class="value">{method}</span>"#)?;
    ln!(d, r#"            </div>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="info-card">"#)?;
    ln!(d, r#"            <h2>POST Body</h2>"#)?;
    ln!(d, r#"            <div class="data-box">{body_html}</div>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="test-form">"#)?;
    ln!(d, r#"            <h2 style="color: #888; margin-bottom: 15px;">Test Another POST</h2>"#)?;
    ln!(d, r#"            <form method="post" action="/cgi-bin/cgi-post">"#)?;
    ln!(d, r#"                <textarea name="data" placeholder="Enter data to POST..."></textarea>"#)?;
    ln!(d, r#"                <button type="submit">Send POST Request</button>"#)?;
    ln!(d, r#"            </form>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <a href="/">&lt;- Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_body() {
        let html = render(
            Some("application/x-www-form-urlencoded"),
            9,
            "POST",
            "key=value",
        )
        .unwrap();
        assert!(html.contains(r#"<span class="value">application/x-www-form-urlencoded</span>"#));
        assert!(html.contains(r#"<span class="value">9 bytes</span>"#));
        assert!(html.contains(r#"<span class="value">POST</span>"#));
        assert!(html.contains(r#"<div class="data-box">key=value</div>"#));
    }

    #[test]
    fn test_render_empty_body() {
        let html = render(None, 0, "", "").unwrap();
        assert!(html.contains("Not specified"));
        assert!(html.contains("0 bytes"));
        assert!(html.contains(r#"<span class="value">Unknown</span>"#));
        assert!(html.contains("<span class='empty'>(No data received)</span>"));
    }

    #[test]
    fn test_render_escapes_body() {
        let html = render(Some("text/plain"), 8, "POST", "<x>&</x>").unwrap();
        assert!(html.contains("&lt;x&gt;&amp;&lt;/x&gt;"));
        assert!(!html.contains("<x>"));
    }
}

// vim: ts=4 sw=4 expandtab
