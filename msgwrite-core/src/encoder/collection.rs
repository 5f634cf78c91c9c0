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

//! Map and array headers, and the string-keyed map writers.
//!
//! Maps built from a `HashMap` are written in the map's iteration order,
//! which is unspecified and may differ between calls. Use
//! [`Value::Map`](crate::value::Value::Map) when pair order matters.

use super::Prefix;
use crate::buffer::Writer;
use crate::error::{wire_len, Error};
use crate::types::{fixarray, fixmap, Tag};
use crate::value::Value;
use std::collections::HashMap;
use std::io::Write;

pub(crate) fn map_header_prefix(sz: u32) -> Prefix {
    if sz < 16 {
        Prefix::byte(fixmap(sz as u8))
    } else if sz < u16::MAX as u32 {
        Prefix::tag(Tag::Map16).put_u16(sz as u16)
    } else {
        Prefix::tag(Tag::Map32).put_u32(sz)
    }
}

pub(crate) fn array_header_prefix(sz: u32) -> Prefix {
    if sz < 16 {
        Prefix::byte(fixarray(sz as u8))
    } else if sz < u16::MAX as u32 {
        Prefix::tag(Tag::Array16).put_u16(sz as u16)
    } else {
        Prefix::tag(Tag::Array32).put_u32(sz)
    }
}

impl<W: Write> Writer<W> {
    /// Writes a map header announcing `sz` key/value pairs.
    pub fn write_map_header(&mut self, sz: u32) -> Result<(), Error> {
        self.write_prefix(&map_header_prefix(sz))
    }

    /// Writes an array header announcing `sz` elements.
    pub fn write_array_header(&mut self, sz: u32) -> Result<(), Error> {
        self.write_prefix(&array_header_prefix(sz))
    }

    pub fn write_map_str_str(&mut self, map: &HashMap<String, String>) -> Result<(), Error> {
        self.write_map_header(wire_len(map.len())?)?;
        for (key, val) in map {
            self.write_str(key)?;
            self.write_str(val)?;
        }
        Ok(())
    }

    /// Writes a string-keyed map whose values go through the dynamic dispatcher.
    pub fn write_map_str_value(&mut self, map: &HashMap<String, Value>) -> Result<(), Error> {
        self.write_map_header(wire_len(map.len())?)?;
        for (key, val) in map {
            self.write_str(key)?;
            self.write_value(val)?;
        }
        Ok(())
    }
}
