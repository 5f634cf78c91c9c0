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

//! One-shot helpers that encode a single value into a sink through a
//! pooled writer.

use crate::buffer::Writer;
use crate::encoder::{Encodable, Marshaler};
use crate::error::Error;
use crate::pool::WriterPool;
use crate::size::guess_size;
use crate::value::Value;
use std::io::Write;

/// Encodes `e` into `sink` and flushes.
///
/// ```
/// use msgwrite_core::codec::encode;
/// use msgwrite_core::value::Value;
///
/// let mut out = Vec::new();
/// encode(&mut out, &Value::from("hi")).unwrap();
/// assert_eq!(out, vec![0xa2, b'h', b'i']);
/// ```
pub fn encode<W: Write, E: Encodable + ?Sized>(sink: W, e: &E) -> Result<(), Error> {
    let mut w = Writer::pooled(sink);
    let result = w.write_ident(e).and_then(|_| w.flush());
    w.release();
    result
}

/// Marshals `m` into `sink` and flushes.
pub fn write<W: Write, M: Marshaler + ?Sized>(sink: W, m: &M) -> Result<(), Error> {
    let mut w = Writer::pooled(sink);
    let result = w.encode(m).and_then(|_| w.flush());
    w.release();
    result
}

/// Encodes a dynamic value into `sink` and flushes.
///
/// The buffer is pre-sized from the value's size estimate only while the
/// estimate fits a pooled buffer; larger bodies are written through.
pub fn encode_value<W: Write>(sink: W, v: &Value) -> Result<(), Error> {
    encode_value_in(WriterPool::global(), sink, v)
}

fn encode_value_in<W: Write>(pool: &WriterPool, sink: W, v: &Value) -> Result<(), Error> {
    let mut w = pool.checkout(sink);
    let guess = guess_size(v);
    if guess <= pool.buffer_size() {
        w.reserve(guess);
    }
    let result = w.write_value(v).and_then(|_| w.flush());
    pool.checkin(w);
    result
}
