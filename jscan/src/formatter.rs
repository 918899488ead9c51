// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::value::Value;

/// A streaming document builder.
///
/// Output accumulates in an append-only `String`; comma placement is
/// tracked by a `u64` mask with one bit per nesting level. The low bit
/// belongs to the current level and means "the next value here needs a
/// leading comma". Opening a container shifts the mask left, closing it
/// shifts right and sets the restored bit, so the finished container
/// counts as one value in its parent. Writing a key clears the bit, so
/// the value that follows attaches without a separator.
///
/// All writers return `&mut Self` for chaining. Nesting beyond 64 levels
/// shifts live bits off the mask and is not guarded.
#[derive(Debug, Default)]
pub struct Formatter {
    out: String,
    mask: u64,
}

impl Formatter {
    pub fn new() -> Self {
        Formatter::default()
    }

    /// The document built so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Resets to an empty document.
    pub fn clear(&mut self) {
        self.out.clear();
        self.mask = 0;
    }

    pub fn begin_object(&mut self) -> &mut Self {
        self.separate();
        self.out.push('{');
        self.mask <<= 1;
        self
    }

    pub fn end_object(&mut self) -> &mut Self {
        self.out.push('}');
        self.mask = (self.mask >> 1) | 1;
        self
    }

    pub fn begin_array(&mut self) -> &mut Self {
        self.separate();
        self.out.push('[');
        self.mask <<= 1;
        self
    }

    pub fn end_array(&mut self) -> &mut Self {
        self.out.push(']');
        self.mask = (self.mask >> 1) | 1;
        self
    }

    /// Writes a key. The following write supplies its value.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.separate();
        self.push_quoted(name);
        self.out.push(':');
        self.mask &= !1;
        self
    }

    pub fn value_str(&mut self, value: &str) -> &mut Self {
        self.separate();
        self.push_quoted(value);
        self.mask |= 1;
        self
    }

    pub fn value_int(&mut self, value: i64) -> &mut Self {
        self.separate();
        let _ = core::fmt::Write::write_fmt(&mut self.out, format_args!("{value}"));
        self.mask |= 1;
        self
    }

    pub fn value_float(&mut self, value: f64) -> &mut Self {
        self.separate();
        let _ = core::fmt::Write::write_fmt(&mut self.out, format_args!("{value}"));
        self.mask |= 1;
        self
    }

    pub fn value_bool(&mut self, value: bool) -> &mut Self {
        self.separate();
        self.out.push_str(if value { "true" } else { "false" });
        self.mask |= 1;
        self
    }

    pub fn null(&mut self) -> &mut Self {
        self.separate();
        self.out.push_str("null");
        self.mask |= 1;
        self
    }

    /// Splices another formatter's whole output here as one value.
    pub fn nested(&mut self, other: &Formatter) -> &mut Self {
        self.separate();
        self.out.push_str(other.as_str());
        self.mask |= 1;
        self
    }

    /// Writes a [`Value`] tree, recursing through containers.
    pub fn value(&mut self, value: &Value) -> &mut Self {
        match value {
            Value::Null => self.null(),
            Value::Bool(b) => self.value_bool(*b),
            Value::Int(v) => self.value_int(*v),
            Value::Float(v) => self.value_float(*v),
            Value::Str(s) => self.value_str(s),
            Value::Array(items) => {
                self.begin_array();
                for item in items {
                    self.value(item);
                }
                self.end_array()
            }
            Value::Object(fields) => {
                self.begin_object();
                for (key, field) in fields {
                    self.name(key).value(field);
                }
                self.end_object()
            }
        }
    }

    fn separate(&mut self) {
        if self.mask & 1 != 0 {
            self.out.push(',');
        }
    }

    /// Quotes `s`, escaping the characters the scanner recognizes, so that
    /// output rescans to the same content.
    fn push_quoted(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{8}' => self.out.push_str("\\b"),
                '\u{C}' => self.out.push_str("\\f"),
                '\r' => self.out.push_str("\\r"),
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                _ => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

impl core::fmt::Display for Formatter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.out)
    }
}
