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


use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use msgwrite::{append, Value, Writer};

const ONE_SECOND_500_NANOS: [u8; 15] = [
    0xc7, 0x0c, 0x05, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0x01, 0xf4,
];

#[test]
fn test_timestamp_frame() {
    let t = Utc.timestamp_opt(1, 500).unwrap();
    let mut w = Writer::new(Vec::new());
    w.write_time(&t).unwrap();
    assert_eq!(w.buffer(), &ONE_SECOND_500_NANOS);
}

#[test]
fn test_timestamp_is_normalized_to_utc() {
    let east = FixedOffset::east_opt(5 * 3600).unwrap();
    let local: DateTime<FixedOffset> = Utc.timestamp_opt(1, 500).unwrap().with_timezone(&east);
    let mut w = Writer::new(Vec::new());
    w.write_time(&local).unwrap();
    assert_eq!(w.buffer(), &ONE_SECOND_500_NANOS);
}

#[test]
fn test_timestamp_through_value_and_append() {
    let t = Utc.timestamp_opt(1, 500).unwrap();
    let mut w = Writer::new(Vec::new());
    w.write_value(&Value::from(t)).unwrap();
    assert_eq!(w.buffer(), &ONE_SECOND_500_NANOS);

    let mut buf = Vec::new();
    append::append_time(&mut buf, &t);
    assert_eq!(buf, ONE_SECOND_500_NANOS.to_vec());
}

#[test]
fn test_pre_epoch_seconds_are_negative() {
    let t = Utc.timestamp_opt(-1, 0).unwrap();
    let mut w = Writer::new(Vec::new());
    w.write_time(&t).unwrap();
    let out = w.buffer();
    assert_eq!(&out[3..11], &(-1i64).to_be_bytes());
    assert_eq!(&out[11..], &[0, 0, 0, 0]);
}
