// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Dynamic values and the dispatcher that encodes them.
//!
//! [`Value`] is a closed union of every shape the encoder understands.
//! User types enter through [`Value::Record`], carrying a [`Custom`] trait
//! object that advertises which capabilities the type has. Dispatch order:
//!
//! 1. nil (and an empty [`Value::Ptr`]) becomes the nil tag;
//! 2. [`Value::Opaque`] shapes are rejected before anything else is looked at;
//! 3. a record is written by its [`Encodable`] impl, else its [`Marshaler`]
//!    impl, else its [`Extension`] impl, else rejected;
//! 4. built-in scalars, strings, binary, timestamps and the two string-keyed
//!    map types use their family encoder;
//! 5. pointers are followed, arrays recurse element by element, and generic
//!    maps recurse pair by pair after every key has been checked to be a
//!    string.
//!
//! Encoding stops at the first failing element. Bytes already written for
//! the enclosing container stay in the buffer.

use crate::buffer::{DynWriter, Writer};
use crate::encoder::{Encodable, Extension, Marshaler, Sizer};
use crate::error::{wire_len, Error};
use crate::types::{Complex128, Complex64};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

/// A user value that may satisfy any subset of the encoding capabilities.
///
/// Every method defaults to "not supported"; implement the ones that apply.
pub trait Custom {
    fn as_encodable(&self) -> Option<&dyn Encodable> {
        None
    }

    fn as_marshaler(&self) -> Option<&dyn Marshaler> {
        None
    }

    fn as_extension(&self) -> Option<&dyn Extension> {
        None
    }

    fn as_sizer(&self) -> Option<&dyn Sizer> {
        None
    }

    /// Name used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shapes that exist at runtime but have no wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opaque {
    Function,
    Channel,
    RawPointer,
    Invalid,
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opaque::Function => "func",
            Opaque::Channel => "chan",
            Opaque::RawPointer => "unsafe pointer",
            Opaque::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// A value whose shape is only known at runtime.
pub enum Value {
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex64(Complex64),
    Complex128(Complex128),
    Str(String),
    Bin(Vec<u8>),
    Time(DateTime<Utc>),
    MapStrStr(HashMap<String, String>),
    MapStrValue(HashMap<String, Value>),
    /// An optional, boxed value; `None` encodes as nil.
    Ptr(Option<Box<Value>>),
    Array(Vec<Value>),
    /// Ordered pairs. Every key must be a [`Value::Str`].
    Map(Vec<(Value, Value)>),
    /// A user-defined aggregate.
    Record(Box<dyn Custom>),
    Ext(Box<dyn Extension>),
    Opaque(Opaque),
}

impl Value {
    /// Wraps a user-defined aggregate.
    pub fn record<C: Custom + 'static>(c: C) -> Self {
        Value::Record(Box::new(c))
    }

    pub fn ext<E: Extension + 'static>(e: E) -> Self {
        Value::Ext(Box::new(e))
    }

    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::I8(_) => "int8",
            Value::I16(_) => "int16",
            Value::I32(_) => "int32",
            Value::I64(_) => "int64",
            Value::Isize(_) => "int",
            Value::U8(_) => "uint8",
            Value::U16(_) => "uint16",
            Value::U32(_) => "uint32",
            Value::U64(_) => "uint64",
            Value::Usize(_) => "uint",
            Value::F32(_) => "float32",
            Value::F64(_) => "float64",
            Value::Complex64(_) => "complex64",
            Value::Complex128(_) => "complex128",
            Value::Str(_) => "string",
            Value::Bin(_) => "bytes",
            Value::Time(_) => "time",
            Value::MapStrStr(_) => "map[string]string",
            Value::MapStrValue(_) => "map[string]value",
            Value::Ptr(_) => "pointer",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Record(c) => c.type_name(),
            Value::Ext(_) => "extension",
            Value::Opaque(_) => "opaque",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil | Value::Ptr(None))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::I8(v) => f.debug_tuple("I8").field(v).finish(),
            Value::I16(v) => f.debug_tuple("I16").field(v).finish(),
            Value::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Value::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Value::Isize(v) => f.debug_tuple("Isize").field(v).finish(),
            Value::U8(v) => f.debug_tuple("U8").field(v).finish(),
            Value::U16(v) => f.debug_tuple("U16").field(v).finish(),
            Value::U32(v) => f.debug_tuple("U32").field(v).finish(),
            Value::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Value::Usize(v) => f.debug_tuple("Usize").field(v).finish(),
            Value::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Value::Complex64(v) => f.debug_tuple("Complex64").field(v).finish(),
            Value::Complex128(v) => f.debug_tuple("Complex128").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Bin(v) => f.debug_tuple("Bin").field(v).finish(),
            Value::Time(v) => f.debug_tuple("Time").field(v).finish(),
            Value::MapStrStr(v) => f.debug_tuple("MapStrStr").field(v).finish(),
            Value::MapStrValue(v) => f.debug_tuple("MapStrValue").field(v).finish(),
            Value::Ptr(v) => f.debug_tuple("Ptr").field(v).finish(),
            Value::Array(v) => f.debug_tuple("Array").field(v).finish(),
            Value::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Value::Record(c) => write!(f, "Record({})", c.type_name()),
            Value::Ext(e) => write!(f, "Ext({})", e.extension_type()),
            Value::Opaque(o) => f.debug_tuple("Opaque").field(o).finish(),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex64 => Complex64,
    Complex128 => Complex128,
    String => Str,
    Vec<u8> => Bin,
    HashMap<String, String> => MapStrStr,
    HashMap<String, Value> => MapStrValue,
    Opaque => Opaque,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bin(v.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(v: [u8; N]) -> Self {
        Value::Bin(v.to_vec())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Time(v.with_timezone(&Utc))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Ptr(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T> From<*const T> for Value {
    fn from(_: *const T) -> Self {
        Value::Opaque(Opaque::RawPointer)
    }
}

impl<T> From<*mut T> for Value {
    fn from(_: *mut T) -> Self {
        Value::Opaque(Opaque::RawPointer)
    }
}

impl<T> From<std::sync::mpsc::Sender<T>> for Value {
    fn from(_: std::sync::mpsc::Sender<T>) -> Self {
        Value::Opaque(Opaque::Channel)
    }
}

impl<T> From<std::sync::mpsc::Receiver<T>> for Value {
    fn from(_: std::sync::mpsc::Receiver<T>) -> Self {
        Value::Opaque(Opaque::Channel)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    /// Builds an ordered [`Value::Map`] with string keys.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (Value::Str(k.into()), v))
                .collect(),
        )
    }
}

impl Encodable for Value {
    fn encode_msg(&self, w: &mut DynWriter<'_>) -> Result<(), Error> {
        w.write_value(self)
    }
}

impl<W: Write> Writer<W> {
    /// Writes `v` using the dispatch order described in the module docs.
    pub fn write_value(&mut self, v: &Value) -> Result<(), Error> {
        match v {
            Value::Nil => self.write_nil(),
            Value::Opaque(kind) => Err(Error::unsupported_type(format!(
                "type {} not supported",
                kind
            ))),
            Value::Record(c) => self.write_custom(c.as_ref()),
            Value::Ext(e) => self.write_extension(e.as_ref()),
            Value::Bool(b) => self.write_bool(*b),
            Value::F32(f) => self.write_f32(*f),
            Value::F64(f) => self.write_f64(*f),
            Value::Complex64(c) => self.write_complex64(*c),
            Value::Complex128(c) => self.write_complex128(*c),
            Value::U8(u) => self.write_u8(*u),
            Value::U16(u) => self.write_u16(*u),
            Value::U32(u) => self.write_u32(*u),
            Value::U64(u) => self.write_u64(*u),
            Value::Usize(u) => self.write_usize(*u),
            Value::I8(i) => self.write_i8(*i),
            Value::I16(i) => self.write_i16(*i),
            Value::I32(i) => self.write_i32(*i),
            Value::I64(i) => self.write_i64(*i),
            Value::Isize(i) => self.write_isize(*i),
            Value::Str(s) => self.write_str(s),
            Value::Bin(b) => self.write_bytes(b),
            Value::MapStrStr(m) => self.write_map_str_str(m),
            Value::MapStrValue(m) => self.write_map_str_value(m),
            Value::Time(t) => self.write_time(t),
            Value::Ptr(None) => self.write_nil(),
            Value::Ptr(Some(inner)) => self.write_value(inner),
            Value::Array(items) => self.write_array(items),
            Value::Map(pairs) => self.write_map(pairs),
        }
    }

    /// Writes a user aggregate through the first capability it offers.
    pub fn write_custom(&mut self, c: &dyn Custom) -> Result<(), Error> {
        if let Some(e) = c.as_encodable() {
            return self.write_ident(e);
        }
        if let Some(m) = c.as_marshaler() {
            let hint = c
                .as_sizer()
                .or_else(|| m.as_sizer())
                .map(|s| s.msg_size());
            return self.encode_hinted(m, hint);
        }
        if let Some(x) = c.as_extension() {
            return self.write_extension(x);
        }
        Err(Error::unsupported_type(format!(
            "unsupported type: {}",
            c.type_name()
        )))
    }

    fn write_array(&mut self, items: &[Value]) -> Result<(), Error> {
        self.write_array_header(wire_len(items.len())?)?;
        for item in items {
            self.write_value(item)?;
        }
        Ok(())
    }

    fn write_map(&mut self, pairs: &[(Value, Value)]) -> Result<(), Error> {
        if let Some((key, _)) = pairs.iter().find(|(k, _)| !matches!(k, Value::Str(_))) {
            return Err(Error::map_key(key.kind()));
        }
        self.write_map_header(wire_len(pairs.len())?)?;
        for (key, val) in pairs {
            if let Value::Str(k) = key {
                self.write_str(k)?;
            }
            self.write_value(val)?;
        }
        Ok(())
    }
}
