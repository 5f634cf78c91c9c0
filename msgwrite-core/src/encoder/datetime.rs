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

//! Timestamp extension.
//!
//! Instants are written as Unix seconds plus a nanosecond offset, after
//! conversion to UTC. This is not chrono's or any platform's native binary
//! form; see [`TIME_EXTENSION`] for the exact layout.

use super::Prefix;
use crate::buffer::Writer;
use crate::error::Error;
use crate::types::{Tag, TIME_BODY_LEN, TIME_EXTENSION};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::io::Write;

pub(crate) fn time_prefix(secs: i64, nanos: i32) -> Prefix {
    Prefix::tag(Tag::Ext8)
        .put_u8(TIME_BODY_LEN)
        .put_u8(TIME_EXTENSION as u8)
        .put_u64(secs as u64)
        .put_u32(nanos as u32)
}

/// Seconds and nanoseconds of `t` in UTC.
pub(crate) fn unix_parts<Tz: TimeZone>(t: &DateTime<Tz>) -> (i64, i32) {
    let utc = t.with_timezone(&Utc);
    (utc.timestamp(), utc.timestamp_subsec_nanos() as i32)
}

impl<W: Write> Writer<W> {
    /// Writes an instant as a 15-byte timestamp extension.
    pub fn write_time<Tz: TimeZone>(&mut self, t: &DateTime<Tz>) -> Result<(), Error> {
        let (secs, nanos) = unix_parts(t);
        self.write_prefix(&time_prefix(secs, nanos))
    }

    /// Writes a naive date-time, interpreted as UTC.
    pub fn write_naive_time(&mut self, t: &NaiveDateTime) -> Result<(), Error> {
        self.write_time(&t.and_utc())
    }
}
