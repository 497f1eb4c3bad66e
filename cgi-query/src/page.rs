// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow as ah;
use cgi_page::{escape_attr, escape_text, Document};
use cgi_request::Query;
use std::{fmt::Write as _, writeln as ln};

const CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            margin: 0;
            color: #eee;
        }
        .container {
            background: rgba(255,255,255,0.1);
            padding: 40px;
            border-radius: 20px;
            min-width: 450px;
        }
        h1 {
            color: #ce93d8;
            text-align: center;
            margin-bottom: 30px;
        }
        .data-card {
            background: rgba(0,0,0,0.3);
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
        }
        .data-card h2 {
            color: #888;
            font-size: 0.9em;
            margin-bottom: 15px;
            text-transform: uppercase;
            letter-spacing: 1px;
        }
        .param {
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }
        .param:last-child { border-bottom: none; }
        .param-name { color: #ce93d8; font-weight: 500; }
        .param-value {
            color: #00c853;
            font-family: 'Monaco', 'Consolas', monospace;
        }
        .raw-query {
            background: rgba(0,0,0,0.5);
            padding: 15px;
            border-radius: 8px;
            font-family: 'Monaco', 'Consolas', monospace;
            font-size: 0.9em;
            word-break: break-all;
        }
        form {
            margin-top: 20px;
        }
        label {
            display: block;
            margin: 10px 0 5px;
            color: #888;
        }
        input {
            width: 100%;
            padding: 12px;
            border: none;
            border-radius: 8px;
            background: rgba(0,0,0,0.3);
            color: #eee;
            font-size: 1em;
            margin-bottom: 10px;
            box-sizing: border-box;
        }
        button {
            width: 100%;
            padding: 15px;
            background: linear-gradient(90deg, #7b1fa2, #ce93d8);
            border: none;
            border-radius: 8px;
            color: white;
            font-size: 1.1em;
            cursor: pointer;
            margin-top: 10px;
        }
        button:hover { opacity: 0.9; }
        a {
            color: #ce93d8;
            text-decoration: none;
            display: block;
            text-align: center;
            margin-top: 20px;
        }
        a:hover { text-decoration: underline; }
    "#;

#[rustfmt::skip]
pub fn render(query: &Query, raw_query: &str) -> ah::Result<String> {
    let name = escape_attr(query.first_or("name", ""));
    let value = escape_attr(query.first_or("value", ""));

    let mut doc = Document::new("Query String Parser", CSS).with_charset("UTF-8");
    let d = doc.body();

    ln!(d, r#"    <div class="container">"#)?;
    ln!(d, r#"        <h1>&#x1F50D; Query String Parser</h1>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="data-card">"#)?;
    ln!(d, r#"            <h2>Parsed Parameters</h2>"#)?;
    if query.is_empty() {
        ln!(d, r#"            <p style="color: #888; font-style: italic;">No parameters received</p>"#)?;
    } else {
        for (pname, pvalue) in query.pairs() {
            let pname = escape_text(pname);
            let pvalue = escape_text(pvalue);
            ln!(d, r#"            <div class="param">"#)?;
            ln!(d, r#"                <span class="param-name">{pname}</span>"#)?;
            ln!(d, r#"                <span class="param-value">{pvalue}</span>"#)?;
            ln!(d, r#"            </div>"#)?;
        }
    }
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="data-card">"#)?;
    ln!(d, r#"            <h2>Raw Query String</h2>"#)?;
    ln!(d, r#"            <div class="raw-query">"#)?;
    if raw_query.is_empty() {
        ln!(d, r#"                <em style="color:#888">Empty</em>"#)?;
    } else {
        let raw = escape_text(raw_query);
        ln!(d, r#"                {raw}"#)?;
    }
    ln!(d, r#"            </div>"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    ln!(d, r#"        <form method="get" action="/cgi-bin/cgi-query">"#)?;
    ln!(d, r#"            <h2 style="color: #888; font-size: 0.9em; margin-bottom: 15px;">TRY IT</h2>"#)?;
    ln!(d, r#"            <label>Name:</label>"#)?;
    ln!(d, r#"            <input type="text" name="name" placeholder="Enter name" value="{name}">"#)?;
    ln!(d, r#"            <label>Value:</label>"#)?;
    ln!(d, r#"            <input type="text" name="value" placeholder="Enter value" value="{value}">"#)?;
    ln!(d, r#"            <label>Extra:</label>"#)?;
    ln!(d, r#"            <input type="text" name="extra" placeholder="Enter extra data">"#)?;
    ln!(d, r#"            <button type="submit">Submit Query</button>"#)?;
    ln!(d, r#"        </form>"#)?;
    ln!(d)?;
    ln!(d, r#"        <a href="/">&lt;- Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(raw: &str) -> String {
        render(&Query::parse(raw), raw).unwrap()
    }

    #[test]
    fn test_render_params_in_order() {
        let html = page("name=n1&value=v1&zz=last");
        let n = html.find(r#"<span class="param-name">name</span>"#).unwrap();
        let v = html.find(r#"<span class="param-name">value</span>"#).unwrap();
        let z = html.find(r#"<span class="param-name">zz</span>"#).unwrap();
        assert!(n < v && v < z);
        assert!(html.contains(r#"name="name" placeholder="Enter name" value="n1""#));
    }

    #[test]
    fn test_render_no_params() {
        let html = page("");
        assert!(html.contains("No parameters received"));
        assert!(html.contains(r#"<em style="color:#888">Empty</em>"#));
        assert!(html.contains(r#"name="name" placeholder="Enter name" value="""#));
    }

    #[test]
    fn test_render_raw_query_escaped() {
        let html = page("a=%3Cx%3E&b=2");
        assert!(html.contains("a=%3Cx%3E&amp;b=2"));
        assert!(html.contains("&lt;x&gt;"));
        assert!(!html.contains("<x>"));
    }
}

// vim: ts=4 sw=4 expandtab
