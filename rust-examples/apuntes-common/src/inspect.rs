//! # Inspect
//!
//! Renders dynamic values the way the two consoles of the notes show them:
//!
//! - [`js`]: a JavaScript console (`{ nombre: 'Ana', edad: 30 }`, `[ 1, 2, 3 ]`)
//! - [`python`]: Python's `print` (`{'nombre': 'Ana', 'edad': 20}`, `['a', 'b']`)
//!
//! A top-level string is printed raw, as both consoles do; nested strings are
//! quoted. Output is always a single line.
//!
//! ```
//! use apuntes_common::inspect;
//! use serde_json::json;
//!
//! let usuario = json!({ "nombre": "Carlos", "correo": "carlos@email.com" });
//! assert_eq!(inspect::js(&usuario), "{ nombre: 'Carlos', correo: 'carlos@email.com' }");
//!
//! let frutas = json!(["manzana", "uva"]);
//! assert_eq!(inspect::python(&frutas), "['manzana', 'uva']");
//! ```

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::Result;

/// Renders `value` as a JavaScript console would.
#[must_use]
pub fn js(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => js_nested(other),
    }
}

/// Serializes `value` and renders it as a JavaScript console would.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(js(&serde_json::to_value(value)?))
}

/// Renders `value` as Python's `print` would.
#[must_use]
pub fn python(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => python_nested(other),
    }
}

/// Serializes `value` and renders it as Python's `print` would.
pub fn to_python<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(python(&serde_json::to_value(value)?))
}

/// Renders a Python tuple, e.g. `('nombre', 'Ana')`.
#[must_use]
pub fn python_tuple(items: &[Value]) -> String {
    match items {
        [single] => format!("({},)", python_nested(single)),
        _ => {
            let inner: Vec<String> = items.iter().map(python_nested).collect();
            format!("({})", inner.join(", "))
        }
    }
}

fn js_nested(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => js_str(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(js_nested).collect();
            format!("[ {} ]", inner.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", js_key(k), js_nested(v)))
                .collect();
            format!("{{ {} }}", inner.join(", "))
        }
    }
}

// JavaScript has a single number type: 50000.0 prints as 50000.
fn js_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        js_str(key)
    }
}

fn python_nested(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => python_number(n),
        Value::String(s) => python_str(s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(python_nested).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", python_str(k), python_nested(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

fn python_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => format!("{f:?}"),
        _ => n.to_string(),
    }
}

// Node prefers single quotes, then double, then backticks, and only
// escapes the quote when all three appear.
fn js_str(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };
    quoted(s, quote)
}

// Python's repr: double quotes only when the text has a `'` and no `"`.
fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    quoted(s, quote)
}

fn quoted(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
