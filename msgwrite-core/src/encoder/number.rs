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

//! Integer, float and complex families.
//!
//! The ladders compare against the previous tier's maximum with a strict
//! `<`, so a value equal to that maximum moves up one tier: `255u64` is a
//! uint16 and `-127i64` is an int16. `-32` is not on the negative fixint
//! path either; it is written as int8 `0xd0 0xe0`. Existing decoders accept
//! all of these, and the output stays byte-identical to other encoders of
//! this format.

use super::Prefix;
use crate::buffer::Writer;
use crate::error::Error;
use crate::types::{fixint, nfixint, Complex128, Complex64, Tag};
use crate::types::{COMPLEX128_EXTENSION, COMPLEX64_EXTENSION};
use std::io::Write;

pub(crate) fn int_prefix(i: i64) -> Prefix {
    let a = i.unsigned_abs();
    if i < 0 && i > -32 {
        Prefix::byte(nfixint(i as i8))
    } else if (0..128).contains(&i) {
        Prefix::byte(fixint(i as u8))
    } else if a < i8::MAX as u64 {
        Prefix::tag(Tag::Int8).put_u8(i as i8 as u8)
    } else if a < i16::MAX as u64 {
        Prefix::tag(Tag::Int16).put_u16(i as i16 as u16)
    } else if a < i32::MAX as u64 {
        Prefix::tag(Tag::Int32).put_u32(i as i32 as u32)
    } else {
        Prefix::tag(Tag::Int64).put_u64(i as u64)
    }
}

pub(crate) fn uint_prefix(u: u64) -> Prefix {
    if u < (1 << 7) {
        Prefix::byte(fixint(u as u8))
    } else if u < u8::MAX as u64 {
        Prefix::tag(Tag::Uint8).put_u8(u as u8)
    } else if u < u16::MAX as u64 {
        Prefix::tag(Tag::Uint16).put_u16(u as u16)
    } else if u < u32::MAX as u64 {
        Prefix::tag(Tag::Uint32).put_u32(u as u32)
    } else {
        Prefix::tag(Tag::Uint64).put_u64(u)
    }
}

#[inline(always)]
pub(crate) fn float32_prefix(f: f32) -> Prefix {
    Prefix::tag(Tag::Float32).put_u32(f.to_bits())
}

#[inline(always)]
pub(crate) fn float64_prefix(f: f64) -> Prefix {
    Prefix::tag(Tag::Float64).put_u64(f.to_bits())
}

pub(crate) fn complex64_prefix(c: Complex64) -> Prefix {
    Prefix::tag(Tag::FixExt8)
        .put_u8(COMPLEX64_EXTENSION as u8)
        .put_u32(c.re.to_bits())
        .put_u32(c.im.to_bits())
}

pub(crate) fn complex128_prefix(c: Complex128) -> Prefix {
    Prefix::tag(Tag::FixExt16)
        .put_u8(COMPLEX128_EXTENSION as u8)
        .put_u64(c.re.to_bits())
        .put_u64(c.im.to_bits())
}

impl<W: Write> Writer<W> {
    pub fn write_i64(&mut self, i: i64) -> Result<(), Error> {
        self.write_prefix(&int_prefix(i))
    }

    pub fn write_i8(&mut self, i: i8) -> Result<(), Error> {
        self.write_i64(i as i64)
    }

    pub fn write_i16(&mut self, i: i16) -> Result<(), Error> {
        self.write_i64(i as i64)
    }

    pub fn write_i32(&mut self, i: i32) -> Result<(), Error> {
        self.write_i64(i as i64)
    }

    pub fn write_isize(&mut self, i: isize) -> Result<(), Error> {
        self.write_i64(i as i64)
    }

    pub fn write_u64(&mut self, u: u64) -> Result<(), Error> {
        self.write_prefix(&uint_prefix(u))
    }

    pub fn write_u8(&mut self, u: u8) -> Result<(), Error> {
        self.write_u64(u as u64)
    }

    /// Same as [`Writer::write_u8`].
    pub fn write_byte(&mut self, u: u8) -> Result<(), Error> {
        self.write_u8(u)
    }

    pub fn write_u16(&mut self, u: u16) -> Result<(), Error> {
        self.write_u64(u as u64)
    }

    pub fn write_u32(&mut self, u: u32) -> Result<(), Error> {
        self.write_u64(u as u64)
    }

    pub fn write_usize(&mut self, u: usize) -> Result<(), Error> {
        self.write_u64(u as u64)
    }

    pub fn write_f32(&mut self, f: f32) -> Result<(), Error> {
        self.write_prefix(&float32_prefix(f))
    }

    pub fn write_f64(&mut self, f: f64) -> Result<(), Error> {
        self.write_prefix(&float64_prefix(f))
    }

    /// Writes a fixext8 frame: code 3, real then imaginary float32 bits.
    pub fn write_complex64(&mut self, c: Complex64) -> Result<(), Error> {
        self.write_prefix(&complex64_prefix(c))
    }

    /// Writes a fixext16 frame: code 4, real then imaginary float64 bits.
    pub fn write_complex128(&mut self, c: Complex128) -> Result<(), Error> {
        self.write_prefix(&complex128_prefix(c))
    }
}
