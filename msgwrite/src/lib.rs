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

//! # msgwrite
//!
//! Buffered MessagePack encoding with dynamic value dispatch.
//!
//! ```rust
//! use msgwrite::{Value, Writer};
//! use std::collections::HashMap;
//!
//! let mut fields = HashMap::new();
//! fields.insert("a".to_string(), Value::from(1i64));
//!
//! let mut out = Vec::new();
//! let mut w = Writer::new(&mut out);
//! w.write_value(&Value::from(fields)).unwrap();
//! w.flush().unwrap();
//! assert_eq!(out, vec![0x81, 0xa1, b'a', 0x01]);
//! ```
//!
//! User types take part by implementing [`Encodable`] (write through a
//! [`Writer`]) or [`Marshaler`] (append to a byte vector, see [`append`]),
//! and by exposing those capabilities through [`Custom`] so that they can be
//! carried inside a [`Value`].

pub use msgwrite_core::{
    append, bail, codec, ensure, types, Complex, Complex128, Complex64, Config, Custom, DynWriter,
    Encodable, Error, Extension, Marshaler, Opaque, RawExtension, Sizer, Value, Writer, WriterPool,
};
pub use msgwrite_core::{encode, encode_value, guess_size, guess_size_with, write};
