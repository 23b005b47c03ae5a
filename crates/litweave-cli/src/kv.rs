// Litweave - A Literate Programming Toolchain
//
// Copyright (c) 2026 Litweave contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The auxiliary key/value data format.
//!
//! One `key=value` pair per line; the key runs to the first `=`, the
//! value runs to the end of the line and may itself contain `=`. This
//! is the format `litweave extract` writes and downstream tooling reads
//! back.

/// Render pairs as key/value lines.
pub fn to_string(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Parse key/value lines into pairs, in file order.
///
/// Empty lines are skipped.
///
/// # Errors
///
/// Returns `Err` naming the first line that has no `=`.
pub fn parse(text: &str) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                pairs.push((key.to_string(), value.to_string()))
            }
            None => {
                return Err(format!(
                    "line {}: expected 'key=value', got '{}'",
                    number + 1,
                    line
                ))
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_round_trip() {
        let pairs = vec![pair("name", "widget"), pair("color", "blue")];
        let text = to_string(&pairs);
        assert_eq!(text, "name=widget\ncolor=blue\n");
        assert_eq!(parse(&text).unwrap(), pairs);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let parsed = parse("expr=a=b+c\n").unwrap();
        assert_eq!(parsed, vec![pair("expr", "a=b+c")]);
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let parsed = parse("a=1\n\nb=2\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_line_without_equals_is_an_error() {
        let err = parse("a=1\nbogus\n").unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_string(&[]), "");
        assert!(parse("").unwrap().is_empty());
    }
}
