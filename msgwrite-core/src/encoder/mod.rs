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

//! Tag selection and byte layout for every wire family.
//!
//! Each submodule owns one family: a pure function that computes the
//! family's prefix (tag plus fixed-width fields) and the `Writer` methods
//! that emit it. The [`append`](crate::append) module reuses the same prefix
//! functions, so buffered and appended output are byte-identical.
//!
//! All multi-byte fields are big-endian.

use crate::buffer::{DynWriter, Writer};
use crate::error::Error;
use crate::types::Tag;
use byteorder::{BigEndian, ByteOrder};
use std::borrow::Cow;
use std::io::Write;

mod boolean;
mod collection;
mod datetime;
mod ext;
mod number;
mod string;

pub use ext::RawExtension;

pub(crate) use collection::{array_header_prefix, map_header_prefix};
pub(crate) use datetime::{time_prefix, unix_parts};
pub(crate) use ext::ext_prefix;
pub(crate) use number::{
    complex128_prefix, complex64_prefix, float32_prefix, float64_prefix, int_prefix, uint_prefix,
};
pub(crate) use string::{bin_prefix, str_prefix};

/// A value that writes its own wire form to a [`Writer`].
pub trait Encodable {
    fn encode_msg(&self, w: &mut DynWriter<'_>) -> Result<(), Error>;
}

/// A value that appends its own wire form to a raw buffer.
///
/// Implementations must only append; on error the caller restores the
/// buffer's previous length.
pub trait Marshaler {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error>;

    /// The value's size hint, if it has one.
    fn as_sizer(&self) -> Option<&dyn Sizer> {
        None
    }
}

/// A value that can report its (possibly estimated) encoded length.
pub trait Sizer {
    fn msg_size(&self) -> usize;
}

/// An application-defined extension: a type code plus raw payload bytes.
pub trait Extension {
    fn extension_type(&self) -> i8;

    fn payload(&self) -> Cow<'_, [u8]>;

    fn payload_len(&self) -> usize {
        self.payload().len()
    }
}

/// Longest fixed prefix any family produces (complex128: tag, code, 16 bytes).
pub(crate) const MAX_PREFIX: usize = 18;

/// Tag byte plus the fixed-width fields that follow it, built on the stack.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Prefix {
    bytes: [u8; MAX_PREFIX],
    len: usize,
}

impl Prefix {
    #[inline(always)]
    pub(crate) fn byte(b: u8) -> Self {
        let mut bytes = [0u8; MAX_PREFIX];
        bytes[0] = b;
        Prefix { bytes, len: 1 }
    }

    #[inline(always)]
    pub(crate) fn tag(tag: Tag) -> Self {
        Self::byte(tag.into())
    }

    #[inline(always)]
    pub(crate) fn put_u8(mut self, v: u8) -> Self {
        self.bytes[self.len] = v;
        self.len += 1;
        self
    }

    #[inline(always)]
    pub(crate) fn put_u16(mut self, v: u16) -> Self {
        BigEndian::write_u16(&mut self.bytes[self.len..self.len + 2], v);
        self.len += 2;
        self
    }

    #[inline(always)]
    pub(crate) fn put_u32(mut self, v: u32) -> Self {
        BigEndian::write_u32(&mut self.bytes[self.len..self.len + 4], v);
        self.len += 4;
        self
    }

    #[inline(always)]
    pub(crate) fn put_u64(mut self, v: u64) -> Self {
        BigEndian::write_u64(&mut self.bytes[self.len..self.len + 8], v);
        self.len += 8;
        self
    }

    #[inline(always)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<W: Write> Writer<W> {
    /// Emits a prefix: single-byte forms use the push fast path.
    #[inline(always)]
    pub(crate) fn write_prefix(&mut self, p: &Prefix) -> Result<(), Error> {
        let bytes = p.as_bytes();
        if let [b] = bytes {
            return self.push(*b);
        }
        let o = self.require(bytes.len())?;
        self.buf[o..o + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Shim that lets an [`Encodable`] write itself.
    pub fn write_ident<E: Encodable + ?Sized>(&mut self, e: &E) -> Result<(), Error> {
        self.with_dyn(|w| e.encode_msg(w))
    }
}
