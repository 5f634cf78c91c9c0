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

//! Text and binary families.

use super::Prefix;
use crate::buffer::Writer;
use crate::error::{wire_len, Error};
use crate::types::{fixstr, Tag};
use std::io::Write;

pub(crate) fn str_prefix(sz: u32) -> Prefix {
    if sz < 32 {
        Prefix::byte(fixstr(sz as u8))
    } else if sz < u8::MAX as u32 {
        Prefix::tag(Tag::Str8).put_u8(sz as u8)
    } else if sz < u16::MAX as u32 {
        Prefix::tag(Tag::Str16).put_u16(sz as u16)
    } else {
        Prefix::tag(Tag::Str32).put_u32(sz)
    }
}

pub(crate) fn bin_prefix(sz: u32) -> Prefix {
    if sz < u8::MAX as u32 {
        Prefix::tag(Tag::Bin8).put_u8(sz as u8)
    } else if sz < u16::MAX as u32 {
        Prefix::tag(Tag::Bin16).put_u16(sz as u16)
    } else {
        Prefix::tag(Tag::Bin32).put_u32(sz)
    }
}

impl<W: Write> Writer<W> {
    /// Writes a string. Bodies larger than the buffer go straight to the sink.
    pub fn write_str(&mut self, s: &str) -> Result<(), Error> {
        self.write_prefix(&str_prefix(wire_len(s.len())?))?;
        self.write_text(s)
    }

    /// Writes a binary blob. Bodies larger than the buffer go straight to the sink.
    pub fn write_bytes(&mut self, b: &[u8]) -> Result<(), Error> {
        self.write_prefix(&bin_prefix(wire_len(b.len())?))?;
        self.write_raw(b).map(|_| ())
    }
}
