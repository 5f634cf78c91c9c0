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

//! Wire vocabulary: tag bytes, reserved extension codes and the size
//! constants published for [`Sizer`](crate::encoder::Sizer) implementors.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Single-byte tags of the fixed-width and length-prefixed families.
///
/// The fixed-small families (positive/negative fixint, fixmap, fixarray,
/// fixstr) carry part of their payload in the tag and are built with
/// [`fixint`], [`nfixint`], [`fixmap`], [`fixarray`] and [`fixstr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Tag {
    Nil = 0xc0,
    False = 0xc2,
    True = 0xc3,
    Bin8 = 0xc4,
    Bin16 = 0xc5,
    Bin32 = 0xc6,
    Ext8 = 0xc7,
    Ext16 = 0xc8,
    Ext32 = 0xc9,
    Float32 = 0xca,
    Float64 = 0xcb,
    Uint8 = 0xcc,
    Uint16 = 0xcd,
    Uint32 = 0xce,
    Uint64 = 0xcf,
    Int8 = 0xd0,
    Int16 = 0xd1,
    Int32 = 0xd2,
    Int64 = 0xd3,
    FixExt1 = 0xd4,
    FixExt2 = 0xd5,
    FixExt4 = 0xd6,
    FixExt8 = 0xd7,
    FixExt16 = 0xd8,
    Str8 = 0xd9,
    Str16 = 0xda,
    Str32 = 0xdb,
    Array16 = 0xdc,
    Array32 = 0xdd,
    Map16 = 0xde,
    Map32 = 0xdf,
}

pub const FIXMAP_PREFIX: u8 = 0x80;
pub const FIXARRAY_PREFIX: u8 = 0x90;
pub const FIXSTR_PREFIX: u8 = 0xa0;
pub const NFIXINT_PREFIX: u8 = 0xe0;

/// Positive fixint: `0xxxxxxx`.
#[inline(always)]
pub const fn fixint(u: u8) -> u8 {
    u & 0x7f
}

/// Negative fixint: `111xxxxx`.
#[inline(always)]
pub const fn nfixint(i: i8) -> u8 {
    (i as u8) | NFIXINT_PREFIX
}

/// Fixmap: `1000xxxx`.
#[inline(always)]
pub const fn fixmap(sz: u8) -> u8 {
    FIXMAP_PREFIX | (sz & 0x0f)
}

/// Fixarray: `1001xxxx`.
#[inline(always)]
pub const fn fixarray(sz: u8) -> u8 {
    FIXARRAY_PREFIX | (sz & 0x0f)
}

/// Fixstr: `101xxxxx`.
#[inline(always)]
pub const fn fixstr(sz: u8) -> u8 {
    FIXSTR_PREFIX | (sz & 0x1f)
}

/// Extension type code of an encoded complex64 (two float32 halves).
pub const COMPLEX64_EXTENSION: i8 = 3;
/// Extension type code of an encoded complex128 (two float64 halves).
pub const COMPLEX128_EXTENSION: i8 = 4;
/// Extension type code of an encoded timestamp.
///
/// The body is always 12 bytes, carried in an ext8 frame:
///
/// | offset | size | content                                        |
/// |--------|------|------------------------------------------------|
/// | 0      | 1    | `0xc7` (ext8)                                  |
/// | 1      | 1    | `12` (body length)                             |
/// | 2      | 1    | `5` (this code)                                |
/// | 3      | 8    | seconds since the Unix epoch, i64 big-endian   |
/// | 11     | 4    | nanosecond offset, i32 big-endian              |
///
/// The source instant is normalised to UTC first, so time-zone information
/// is not part of the wire form.
pub const TIME_EXTENSION: i8 = 5;

/// Length of a timestamp extension body.
pub const TIME_BODY_LEN: u8 = 12;

pub const NIL_SIZE: usize = 1;
pub const BOOL_SIZE: usize = 1;
pub const INT_SIZE: usize = 9;
pub const UINT_SIZE: usize = 9;
pub const FLOAT32_SIZE: usize = 5;
pub const FLOAT64_SIZE: usize = 9;
pub const COMPLEX64_SIZE: usize = 10;
pub const COMPLEX128_SIZE: usize = 18;
pub const TIME_SIZE: usize = 15;
pub const BYTES_PREFIX_SIZE: usize = 5;
pub const STRING_PREFIX_SIZE: usize = 5;
pub const MAP_HEADER_SIZE: usize = 5;
pub const ARRAY_HEADER_SIZE: usize = 5;
pub const EXTENSION_PREFIX_SIZE: usize = 6;

/// A complex number with real and imaginary halves of type `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

/// Complex number with float32 halves.
pub type Complex64 = Complex<f32>;
/// Complex number with float64 halves.
pub type Complex128 = Complex<f64>;
