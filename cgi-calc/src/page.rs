// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::compute::{compute, Computation};
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
            color: #fff;
        }
        .calculator {
            background: rgba(255,255,255,0.1);
            padding: 40px;
            border-radius: 20px;
            text-align: center;
            min-width: 400px;
        }
        h1 { color: #00d4ff; margin-bottom: 30px; }
        .display {
            background: rgba(0,0,0,0.3);
            padding: 20px;
            border-radius: 10px;
            font-size: 2em;
            font-family: 'Monaco', 'Consolas', monospace;
            margin-bottom: 20px;
        }
        .result {
            color: #00c853;
            font-size: 2.5em;
            margin: 20px 0;
        }
        .error {
            color: #f44336;
            font-size: 1.2em;
        }
        form {
            margin-top: 30px;
            text-align: left;
        }
        label {
            display: block;
            margin: 10px 0 5px;
            color: #888;
        }
        input, select {
            width: 100%;
            padding: 12px;
            border: none;
            border-radius: 8px;
            background: rgba(0,0,0,0.3);
            color: #fff;
            font-size: 1em;
            margin-bottom: 10px;
        }
        button {
            width: 100%;
            padding: 15px;
            background: linear-gradient(90deg, #00d4ff, #7b2ff7);
            border: none;
            border-radius: 8px;
            color: white;
            font-size: 1.1em;
            cursor: pointer;
            margin-top: 10px;
        }
        button:hover { opacity: 0.9; }
        a {
            color: #00d4ff;
            text-decoration: none;
            display: inline-block;
            margin-top: 20px;
        }
        a:hover { text-decoration: underline; }
    "#;

const OPTIONS: [(&str, &str); 6] = [
    ("add", "Addition (+)"),
    ("sub", "Subtraction (-)"),
    ("mul", "Multiplication (×)"),
    ("div", "Division (÷)"),
    ("mod", "Modulo (%)"),
    ("pow", "Power (^)"),
];

#[rustfmt::skip]
pub fn render(query: &Query) -> ah::Result<String> {
    let a = query.first_or("a", "0");
    let b = query.first_or("b", "0");
    let op = query.first_or("op", "add");

    let comp = compute(a, b, op);
    let symbol = match &comp {
        Computation::Value { symbol, .. } => *symbol,
        Computation::Error { .. } => '?',
    };

    let a_text = escape_text(a);
    let b_text = escape_text(b);
    let a_attr = escape_attr(a);
    let b_attr = escape_attr(b);

    let mut doc = Document::new("CGI Calculator", CSS);
    let d = doc.body();

    ln!(d, r#"    <div class="calculator">"#)?;
    ln!(d, r#"        <h1>&#x1F522; CGI Calculator</h1>"#)?;
    ln!(d)?;
    ln!(d, r#"        <div class="display">"#)?;
    ln!(d, r#"            {a_text} {symbol} {b_text}"#)?;
    ln!(d, r#"        </div>"#)?;
    ln!(d)?;
    match &comp {
        Computation::Value { value, .. } => {
            ln!(d, r#"        <div class="result">= {value}</div>"#)?;
        }
        Computation::Error { message } => {
            let message = escape_text(message);
            ln!(d, r#"        <div class="error">{message}</div>"#)?;
        }
    }
    ln!(d)?;
    ln!(d, r#"        <form method="get" action="/cgi-bin/cgi-calc">"#)?;
    ln!(d, r#"            <label>First Number (a):</label>"#)?;
    ln!(d, r#"            <input type="text" name="a" value="{a_attr}" required>"#)?;
    ln!(d)?;
    ln!(d, r#"            <label>Second Number (b):</label>"#)?;
    ln!(d, r#"            <input type="text" name="b" value="{b_attr}" required>"#)?;
    ln!(d)?;
    ln!(d, r#"            <label>Operation:</label>"#)?;
    ln!(d, r#"            <select name="op">"#)?;
    for (name, label) in OPTIONS {
        let selected = if op == name { " selected" } else { "" };
        ln!(d, r#"                <option value="{name}"{selected}>{label}</option>"#)?;
    }
    ln!(d, r#"            </select>"#)?;
    ln!(d)?;
    ln!(d, r#"            <button type="submit">Calculate</button>"#)?;
    ln!(d, r#"        </form>"#)?;
    ln!(d)?;
    ln!(d, r#"        <a href="/">&lt;- Back to Test Suite</a>"#)?;
    ln!(d, r#"    </div>"#)?;

    Ok(doc.render())
}


// vim: ts=4 sw=4 expandtab
