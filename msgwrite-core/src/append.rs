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

//! Append-style encoders for [`Marshaler`](crate::encoder::Marshaler)
//! implementations.
//!
//! Every function extends a `Vec<u8>` with exactly the bytes the matching
//! [`Writer`](crate::buffer::Writer) method would produce.

use crate::encoder::{
    array_header_prefix, bin_prefix, complex128_prefix, complex64_prefix, ext_prefix,
    float32_prefix, float64_prefix, int_prefix, map_header_prefix, str_prefix, time_prefix,
    uint_prefix, unix_parts, Extension,
};
use crate::error::{wire_len, Error};
use crate::types::{Complex128, Complex64, Tag};
use chrono::{DateTime, TimeZone};

/// Guarantees room for `extra` more bytes without reallocating.
pub fn require(buf: &mut Vec<u8>, extra: usize) {
    if buf.capacity() - buf.len() < extra {
        buf.reserve_exact(extra);
    }
}

pub fn append_nil(buf: &mut Vec<u8>) {
    buf.push(Tag::Nil.into());
}

pub fn append_bool(buf: &mut Vec<u8>, b: bool) {
    buf.push(if b { Tag::True.into() } else { Tag::False.into() });
}

pub fn append_int(buf: &mut Vec<u8>, i: i64) {
    buf.extend_from_slice(int_prefix(i).as_bytes());
}

pub fn append_uint(buf: &mut Vec<u8>, u: u64) {
    buf.extend_from_slice(uint_prefix(u).as_bytes());
}

pub fn append_float32(buf: &mut Vec<u8>, f: f32) {
    buf.extend_from_slice(float32_prefix(f).as_bytes());
}

pub fn append_float64(buf: &mut Vec<u8>, f: f64) {
    buf.extend_from_slice(float64_prefix(f).as_bytes());
}

pub fn append_complex64(buf: &mut Vec<u8>, c: Complex64) {
    buf.extend_from_slice(complex64_prefix(c).as_bytes());
}

pub fn append_complex128(buf: &mut Vec<u8>, c: Complex128) {
    buf.extend_from_slice(complex128_prefix(c).as_bytes());
}

pub fn append_string(buf: &mut Vec<u8>, s: &str) -> Result<(), Error> {
    let p = str_prefix(wire_len(s.len())?);
    require(buf, p.as_bytes().len() + s.len());
    buf.extend_from_slice(p.as_bytes());
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}

pub fn append_bytes(buf: &mut Vec<u8>, b: &[u8]) -> Result<(), Error> {
    let p = bin_prefix(wire_len(b.len())?);
    require(buf, p.as_bytes().len() + b.len());
    buf.extend_from_slice(p.as_bytes());
    buf.extend_from_slice(b);
    Ok(())
}

pub fn append_map_header(buf: &mut Vec<u8>, sz: u32) {
    buf.extend_from_slice(map_header_prefix(sz).as_bytes());
}

pub fn append_array_header(buf: &mut Vec<u8>, sz: u32) {
    buf.extend_from_slice(array_header_prefix(sz).as_bytes());
}

pub fn append_time<Tz: TimeZone>(buf: &mut Vec<u8>, t: &DateTime<Tz>) {
    let (secs, nanos) = unix_parts(t);
    buf.extend_from_slice(time_prefix(secs, nanos).as_bytes());
}

pub fn append_extension<E: Extension + ?Sized>(buf: &mut Vec<u8>, e: &E) -> Result<(), Error> {
    let payload = e.payload();
    let declared = e.payload_len();
    if declared != payload.len() {
        return Err(Error::extension_length(declared, payload.len()));
    }
    let p = ext_prefix(e.extension_type(), wire_len(declared)?);
    require(buf, p.as_bytes().len() + declared);
    buf.extend_from_slice(p.as_bytes());
    buf.extend_from_slice(&payload);
    Ok(())
}
