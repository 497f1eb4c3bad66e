// -*- coding: utf-8 -*-
//
// CGI demo scripts
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The outcome of one calculator request.
///
/// Exactly one of a numeric value (with its display symbol) or an error
/// message. Error messages carry the raw request text; escaping happens
/// at render time.
pub enum Computation {
    Value { value: f64, symbol: char },
    Error { message: String },
}

fn parse_operand(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Apply the operation selected by `op` to the textual operands.
///
/// Operands are parsed before the selector is examined, so non-numeric
/// input reports "Invalid number format" even for an unknown selector.
pub fn compute(a: &str, b: &str, op: &str) -> Computation {
    let (Some(a), Some(b)) = (parse_operand(a), parse_operand(b)) else {
        return Computation::Error {
            message: "Invalid number format".to_string(),
        };
    };
    match op {
        "add" => Computation::Value {
            value: a + b,
            symbol: '+',
        },
        "sub" => Computation::Value {
            value: a - b,
            symbol: '-',
        },
        "mul" => Computation::Value {
            value: a * b,
            symbol: '×',
        },
        "div" => {
            if b == 0.0 {
                Computation::Error {
                    message: "Division by zero!".to_string(),
                }
            } else {
                Computation::Value {
                    value: a / b,
                    symbol: '÷',
                }
            }
        }
        "mod" => {
            if b == 0.0 {
                Computation::Error {
                    message: "Division by zero!".to_string(),
                }
            } else {
                Computation::Value {
                    value: a % b,
                    symbol: '%',
                }
            }
        }
        "pow" => Computation::Value {
            value: a.powf(b),
            symbol: '^',
        },
        other => Computation::Error {
            message: format!("Unknown operation: {other}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(c: Computation) -> (f64, char) {
        match c {
            Computation::Value { value, symbol } => (value, symbol),
            Computation::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    fn error(c: Computation) -> String {
        match c {
            Computation::Value { value, .. } => panic!("unexpected value: {value}"),
            Computation::Error { message } => message,
        }
    }

    #[test]
    fn test_operations() {
        assert_eq!(value(compute("2", "3", "add")), (5.0, '+'));
        assert_eq!(value(compute("2", "3", "sub")), (-1.0, '-'));
        assert_eq!(value(compute("2", "3", "mul")), (6.0, '×'));
        assert_eq!(value(compute("7", "2", "div")), (3.5, '÷'));
        assert_eq!(value(compute("7", "2", "mod")), (1.0, '%'));
        assert_eq!(value(compute("2", "10", "pow")), (1024.0, '^'));
    }

    #[test]
    fn test_float_operands() {
        assert_eq!(value(compute("1.5", "0.25", "add")).0, 1.75);
        assert_eq!(value(compute(" -4 ", "2", "div")).0, -2.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(error(compute("1", "0", "div")), "Division by zero!");
        assert_eq!(error(compute("1", "0", "mod")), "Division by zero!");
        // Zero divisor is fine for pow.
        assert_eq!(value(compute("2", "0", "pow")).0, 1.0);
    }

    #[test]
    fn test_mod_sign_follows_dividend() {
        // The remainder takes the dividend's sign.
        assert_eq!(value(compute("-7", "2", "mod")).0, -1.0);
        assert_eq!(value(compute("7", "-2", "mod")).0, 1.0);
        assert_eq!(value(compute("-7", "-2", "mod")).0, -1.0);
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(error(compute("abc", "1", "add")), "Invalid number format");
        assert_eq!(error(compute("1", "", "add")), "Invalid number format");
        // Operand validity is checked before the selector.
        assert_eq!(error(compute("abc", "1", "nope")), "Invalid number format");
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(error(compute("1", "2", "xor")), "Unknown operation: xor");
        // The raw selector text is embedded verbatim.
        assert_eq!(
            error(compute("1", "2", "<script>")),
            "Unknown operation: <script>"
        );
    }
}

// vim: ts=4 sw=4 expandtab
