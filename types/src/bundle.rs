//! Named-field encoding: a string-keyed map of dynamically typed values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rect::{Rect, RectF};

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// A string-keyed map of [`Value`]s.
///
/// Typed getters take a default which is returned when the key is missing or
/// holds a value of a different type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle(BTreeMap<String, Value>);

impl Bundle {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) { self.0.insert(key.into(), value); }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    pub fn put_i32(&mut self, key: impl Into<String>, value: i32) { self.insert(key, Value::Integer(value as i64)); }

    pub fn put_i64(&mut self, key: impl Into<String>, value: i64) { self.insert(key, Value::Integer(value)); }

    pub fn put_f32(&mut self, key: impl Into<String>, value: f32) { self.insert(key, Value::Float(value as f64)); }

    pub fn put_f64(&mut self, key: impl Into<String>, value: f64) { self.insert(key, Value::Float(value)); }

    pub fn put_bool(&mut self, key: impl Into<String>, value: bool) { self.insert(key, Value::Boolean(value)); }

    pub fn put_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, Value::String(value.into()));
    }

    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        match self.0.get(key) {
            Some(Value::Integer(v)) => *v as i32,
            _ => default,
        }
    }

    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        match self.0.get(key) {
            Some(Value::Integer(v)) => *v,
            _ => default,
        }
    }

    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        match self.0.get(key) {
            Some(Value::Float(v)) => *v as f32,
            _ => default,
        }
    }

    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        match self.0.get(key) {
            Some(Value::Float(v)) => *v,
            _ => default,
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.0.get(key) {
            Some(Value::Boolean(v)) => *v,
            _ => default,
        }
    }

    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(Value::String(v)) => v,
            _ => default,
        }
    }
}

/// A value with a named-field form: four entries keyed `"x"`, `"y"`,
/// `"width"`, `"height"` for the rectangle types. Missing entries read back
/// as zero.
pub trait Savable {
    fn save(&self, out: &mut Bundle);
    fn load(&mut self, input: &Bundle);
}

impl Savable for Rect {
    fn save(&self, out: &mut Bundle) {
        out.put_i32("x", self.x);
        out.put_i32("y", self.y);
        out.put_i32("width", self.width);
        out.put_i32("height", self.height);
    }

    fn load(&mut self, input: &Bundle) {
        self.x = input.get_i32("x", 0);
        self.y = input.get_i32("y", 0);
        self.width = input.get_i32("width", 0);
        self.height = input.get_i32("height", 0);
    }
}

impl Savable for RectF {
    fn save(&self, out: &mut Bundle) {
        out.put_f32("x", self.x);
        out.put_f32("y", self.y);
        out.put_f32("width", self.width);
        out.put_f32("height", self.height);
    }

    fn load(&mut self, input: &Bundle) {
        self.x = input.get_f32("x", 0.0);
        self.y = input.get_f32("y", 0.0);
        self.width = input.get_f32("width", 0.0);
        self.height = input.get_f32("height", 0.0);
    }
}
