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

//! Application-defined extensions.

use super::{Extension, Prefix};
use crate::buffer::Writer;
use crate::error::{wire_len, Error};
use crate::types::Tag;
use std::borrow::Cow;
use std::io::Write;

/// Frame header for an extension payload of `len` bytes: the fixext forms
/// for 1/2/4/8/16 bytes, ext8/16/32 otherwise (an empty payload is ext8).
pub(crate) fn ext_prefix(typ: i8, len: u32) -> Prefix {
    let t = typ as u8;
    match len {
        1 => Prefix::tag(Tag::FixExt1).put_u8(t),
        2 => Prefix::tag(Tag::FixExt2).put_u8(t),
        4 => Prefix::tag(Tag::FixExt4).put_u8(t),
        8 => Prefix::tag(Tag::FixExt8).put_u8(t),
        16 => Prefix::tag(Tag::FixExt16).put_u8(t),
        _ if len < u8::MAX as u32 => Prefix::tag(Tag::Ext8).put_u8(len as u8).put_u8(t),
        _ if len < u16::MAX as u32 => Prefix::tag(Tag::Ext16).put_u16(len as u16).put_u8(t),
        _ => Prefix::tag(Tag::Ext32).put_u32(len).put_u8(t),
    }
}

/// An extension held as its type code and already-encoded payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawExtension {
    pub type_code: i8,
    pub data: Vec<u8>,
}

impl RawExtension {
    pub fn new(type_code: i8, data: impl Into<Vec<u8>>) -> Self {
        RawExtension {
            type_code,
            data: data.into(),
        }
    }
}

impl Extension for RawExtension {
    fn extension_type(&self) -> i8 {
        self.type_code
    }

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }

    fn payload_len(&self) -> usize {
        self.data.len()
    }
}

impl<W: Write> Writer<W> {
    /// Writes an extension frame followed by its payload.
    ///
    /// Fails without writing anything if the declared and actual payload
    /// lengths disagree.
    pub fn write_extension<E: Extension + ?Sized>(&mut self, e: &E) -> Result<(), Error> {
        let payload = e.payload();
        let declared = e.payload_len();
        if declared != payload.len() {
            return Err(Error::extension_length(declared, payload.len()));
        }
        self.write_prefix(&ext_prefix(e.extension_type(), wire_len(declared)?))?;
        self.write_raw(&payload).map(|_| ())
    }
}
