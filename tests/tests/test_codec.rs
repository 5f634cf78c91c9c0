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


use msgwrite::{encode, guess_size, write, Config, Error, Marshaler, Value};

struct Pair(u8, u8);

impl Marshaler for Pair {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        msgwrite::append::append_array_header(buf, 2);
        msgwrite::append::append_uint(buf, self.0 as u64);
        msgwrite::append::append_uint(buf, self.1 as u64);
        Ok(())
    }
}

#[test]
fn test_one_shot_helpers() {
    let mut out = Vec::new();
    write(&mut out, &Pair(1, 2)).unwrap();
    encode(&mut out, &Value::from(false)).unwrap();
    assert_eq!(out, vec![0x92, 0x01, 0x02, 0xc2]);
}

#[test]
fn test_size_guesses() {
    assert_eq!(guess_size(&Value::Nil), 1);
    assert_eq!(guess_size(&Value::from(1u8)), 9);
    assert_eq!(guess_size(&Value::from(1.0f32)), 5);
    assert_eq!(guess_size(&Value::from("abc")), 8);
    assert_eq!(guess_size(&Value::from(vec![0u8; 10])), 15);
    assert_eq!(guess_size(&Value::Array(Vec::new())), 512);
    assert_eq!(
        msgwrite::guess_size_with(&Value::Array(Vec::new()), &Config::new().with_default_size_guess(64)),
        64
    );
}

#[test]
fn test_error_converts_to_io_error() {
    let err: std::io::Error = Error::encode_error("boom").into();
    assert_eq!(err.kind(), std::io::ErrorKind::Other);
    assert!(err.to_string().contains("boom"));
}
