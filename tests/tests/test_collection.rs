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


use msgwrite::{Error, Value, Writer};
use std::collections::HashMap;

fn encode(v: &Value) -> Result<Vec<u8>, Error> {
    let mut w = Writer::new(Vec::new());
    w.write_value(v)?;
    w.into_inner()
}

#[test]
fn test_string_value_map_any_order() {
    let mut fields = HashMap::new();
    fields.insert("a".to_string(), Value::from(1i64));
    fields.insert("b".to_string(), Value::from("x"));
    let out = encode(&Value::from(fields)).unwrap();

    let ab = vec![0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0xa1, b'x'];
    let ba = vec![0x82, 0xa1, b'b', 0xa1, b'x', 0xa1, b'a', 0x01];
    assert!(out == ab || out == ba, "unexpected encoding {:02x?}", out);
}

#[test]
fn test_string_string_map() {
    let mut m = HashMap::new();
    m.insert("k".to_string(), "v".to_string());
    let mut w = Writer::new(Vec::new());
    w.write_map_str_str(&m).unwrap();
    assert_eq!(w.buffer(), &[0x81, 0xa1, b'k', 0xa1, b'v']);
}

#[test]
fn test_ordered_map_keeps_pair_order() {
    let v: Value = vec![("b", Value::from("x")), ("a", Value::from(1u8))]
        .into_iter()
        .collect();
    let out = encode(&v).unwrap();
    assert_eq!(out, vec![0x82, 0xa1, b'b', 0xa1, b'x', 0xa1, b'a', 0x01]);
}

#[test]
fn test_non_string_key_is_rejected_before_writing() {
    let v = Value::Map(vec![
        (Value::from("ok"), Value::Nil),
        (Value::from(3i32), Value::Nil),
    ]);
    let mut w = Writer::new(Vec::new());
    let err = w.write_value(&v).unwrap_err();
    assert!(matches!(err, Error::MapKey(_)));
    assert_eq!(w.buffered(), 0);
}

#[test]
fn test_empty_map() {
    assert_eq!(encode(&Value::Map(Vec::new())).unwrap(), vec![0x80]);
    assert_eq!(encode(&Value::from(HashMap::<String, Value>::new())).unwrap(), vec![0x80]);
}

#[test]
fn test_header_tiers() {
    let mut w = Writer::new(Vec::new());
    w.write_map_header(15).unwrap();
    w.write_map_header(16).unwrap();
    w.write_map_header(65535).unwrap();
    w.write_array_header(15).unwrap();
    w.write_array_header(16).unwrap();
    w.write_array_header(65534).unwrap();
    assert_eq!(
        w.buffer(),
        &[
            0x8f, 0xde, 0x00, 0x10, 0xdf, 0x00, 0x00, 0xff, 0xff, 0x9f, 0xdc, 0x00, 0x10, 0xdc,
            0xff, 0xfe
        ]
    );
}

#[test]
fn test_nested_arrays() {
    let v: Value = vec![
        Value::from(1u8),
        vec![Value::Nil, Value::from(true)].into_iter().collect(),
    ]
    .into_iter()
    .collect();
    assert_eq!(encode(&v).unwrap(), vec![0x92, 0x01, 0x92, 0xc0, 0xc3]);
}
