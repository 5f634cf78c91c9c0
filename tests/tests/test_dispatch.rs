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


use msgwrite::{
    Custom, DynWriter, Encodable, Error, Extension, Marshaler, Opaque, RawExtension, Sizer, Value,
    Writer,
};
use std::borrow::Cow;

fn encode(v: &Value) -> Result<Vec<u8>, Error> {
    let mut w = Writer::new(Vec::new());
    w.write_value(v)?;
    w.into_inner()
}

struct Point {
    x: i64,
    y: i64,
}

impl Encodable for Point {
    fn encode_msg(&self, w: &mut DynWriter<'_>) -> Result<(), Error> {
        w.write_array_header(2)?;
        w.write_i64(self.x)?;
        w.write_i64(self.y)
    }
}

impl Custom for Point {
    fn as_encodable(&self) -> Option<&dyn Encodable> {
        Some(self)
    }
}

struct Tagged(u8);

impl Marshaler for Tagged {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        msgwrite::append::append_uint(buf, self.0 as u64);
        Ok(())
    }
}

impl Sizer for Tagged {
    fn msg_size(&self) -> usize {
        2
    }
}

impl Custom for Tagged {
    fn as_marshaler(&self) -> Option<&dyn Marshaler> {
        Some(self)
    }

    fn as_sizer(&self) -> Option<&dyn Sizer> {
        Some(self)
    }
}

struct Uuidish([u8; 16]);

impl Extension for Uuidish {
    fn extension_type(&self) -> i8 {
        42
    }

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.0)
    }
}

impl Custom for Uuidish {
    fn as_extension(&self) -> Option<&dyn Extension> {
        Some(self)
    }
}

struct Lying;

impl Extension for Lying {
    fn extension_type(&self) -> i8 {
        1
    }

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Owned(vec![1, 2, 3])
    }

    fn payload_len(&self) -> usize {
        4
    }
}

struct Nothing;

impl Custom for Nothing {
    fn type_name(&self) -> &'static str {
        "Nothing"
    }
}

#[test]
fn test_record_through_encodable() {
    let out = encode(&Value::record(Point { x: 1, y: -1 })).unwrap();
    assert_eq!(out, vec![0x92, 0x01, 0xff]);
}

#[test]
fn test_record_through_marshaler() {
    let out = encode(&Value::record(Tagged(200))).unwrap();
    assert_eq!(out, vec![0xcc, 0xc8]);
}

#[test]
fn test_record_through_extension() {
    let out = encode(&Value::record(Uuidish([7; 16]))).unwrap();
    assert_eq!(&out[..2], &[0xd8, 42]);
    assert_eq!(&out[2..], &[7; 16]);
}

#[test]
fn test_raw_extension_lengths() {
    assert_eq!(
        encode(&Value::ext(RawExtension::new(9, vec![0xaa]))).unwrap(),
        vec![0xd4, 0x09, 0xaa]
    );
    assert_eq!(
        encode(&Value::ext(RawExtension::new(9, vec![1, 2, 3]))).unwrap(),
        vec![0xc7, 0x03, 0x09, 1, 2, 3]
    );
    assert_eq!(
        encode(&Value::ext(RawExtension::new(-2, Vec::new()))).unwrap(),
        vec![0xc7, 0x00, 0xfe]
    );
}

#[test]
fn test_extension_length_mismatch() {
    let mut w = Writer::new(Vec::new());
    let err = w.write_extension(&Lying).unwrap_err();
    assert!(matches!(
        err,
        Error::ExtensionLength {
            declared: 4,
            actual: 3
        }
    ));
    assert_eq!(w.buffered(), 0);
}

#[test]
fn test_unsupported_shapes() {
    let (tx, rx) = std::sync::mpsc::channel::<u8>();
    let ptr: *const u8 = std::ptr::null();
    for v in [
        Value::Opaque(Opaque::Function),
        Value::Opaque(Opaque::Invalid),
        Value::from(tx),
        Value::from(rx),
        Value::from(ptr),
        Value::record(Nothing),
    ] {
        let err = encode(&v).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)), "{:?}", err);
    }
}

#[test]
fn test_unsupported_type_message_names_the_shape() {
    let err = encode(&Value::Opaque(Opaque::Function)).unwrap_err();
    assert!(err.to_string().contains("type func not supported"));

    let err = encode(&Value::record(Nothing)).unwrap_err();
    assert!(err.to_string().contains("Nothing"));
}

#[test]
fn test_pointers_follow_or_become_nil() {
    assert_eq!(encode(&Value::from(None::<i64>)).unwrap(), vec![0xc0]);
    assert_eq!(encode(&Value::from(Some(5i64))).unwrap(), vec![0x05]);
    assert_eq!(
        encode(&Value::Ptr(Some(Box::new(Value::Ptr(None))))).unwrap(),
        vec![0xc0]
    );
}

#[test]
fn test_failure_inside_array_leaves_prefix_written() {
    let v: Value = vec![Value::from(1u8), Value::Opaque(Opaque::Function)]
        .into_iter()
        .collect();
    let mut w = Writer::new(Vec::new());
    assert!(w.write_value(&v).is_err());
    assert_eq!(w.buffer(), &[0x92, 0x01]);
}

#[test]
fn test_write_ident_uses_the_encodable() {
    let mut w = Writer::new(Vec::new());
    w.write_ident(&Point { x: 2, y: 3 }).unwrap();
    w.write_ident(&Value::from("p")).unwrap();
    assert_eq!(w.buffer(), &[0x92, 0x02, 0x03, 0xa1, b'p']);
}
