// SPDX-License-Identifier: Apache-2.0

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::scanner::Scanner;
use crate::token::Token;

/// A fully materialized document tree.
///
/// The scanning API never requires building one of these; this is the
/// convenience path for callers that want random access over a small
/// document and do not mind the allocations.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

static NULL: Value = Value::Null;

impl Value {
    /// Field lookup; `Null` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(fields) => fields.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Element lookup; `Null` for non-arrays and out-of-range indexes.
    pub fn at(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl Scanner<'_> {
    /// Materializes the subtree introduced by `token` into a [`Value`].
    ///
    /// Container tokens consume their whole subtree; scalar tokens convert
    /// their decoded payload. Groups (extended grammar) materialize as
    /// arrays. Terminator tokens give `Null`.
    pub fn to_value(&mut self, token: Token) -> Value {
        match token {
            Token::Object => {
                let mut fields = BTreeMap::new();
                loop {
                    let t = self.next();
                    match t {
                        Token::Setter => {
                            let key = self.str_value().to_string();
                            let vt = self.next();
                            fields.insert(key, self.to_value(vt));
                        }
                        Token::Eof | Token::End => return Value::Object(fields),
                        // A member without a key has nowhere to go.
                        other => self.skip(other),
                    }
                }
            }
            Token::Array | Token::Group => {
                let mut items = Vec::new();
                loop {
                    let t = self.next();
                    if t.is_terminator() {
                        return Value::Array(items);
                    }
                    items.push(self.to_value(t));
                }
            }
            Token::Str | Token::Symbol | Token::Setter => Value::Str(self.str_value().to_string()),
            Token::Int => Value::Int(self.int_value()),
            Token::Float => Value::Float(self.float_value()),
            Token::Bool => Value::Bool(self.bool_value()),
            Token::Null | Token::Eof | Token::End => Value::Null,
        }
    }
}
