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

//! Cheap upper-bound-ish size estimates used to pre-size buffers.
//!
//! An estimate is only a hint: it may be smaller or larger than the real
//! encoded length, most of all for the fallback constant.

use crate::config::Config;
use crate::types::*;
use crate::value::Value;

/// Estimates the encoded size of `v` with the default configuration.
pub fn guess_size(v: &Value) -> usize {
    guess_size_with(v, &Config::default())
}

/// Estimates the encoded size of `v`, using `config.default_size_guess` for
/// shapes without a closed-form size.
pub fn guess_size_with(v: &Value, config: &Config) -> usize {
    match v {
        Value::Record(c) => {
            if let Some(s) = c.as_sizer() {
                s.msg_size()
            } else if let Some(e) = c.as_extension() {
                EXTENSION_PREFIX_SIZE + e.payload_len()
            } else {
                config.default_size_guess
            }
        }
        Value::Ext(e) => EXTENSION_PREFIX_SIZE + e.payload_len(),
        Value::Nil => NIL_SIZE,
        Value::F64(_) => FLOAT64_SIZE,
        Value::F32(_) => FLOAT32_SIZE,
        Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
            UINT_SIZE
        }
        Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) | Value::Isize(_) => {
            INT_SIZE
        }
        Value::Bin(b) => BYTES_PREFIX_SIZE + b.len(),
        Value::Str(s) => STRING_PREFIX_SIZE + s.len(),
        Value::Complex64(_) => COMPLEX64_SIZE,
        Value::Complex128(_) => COMPLEX128_SIZE,
        Value::Bool(_) => BOOL_SIZE,
        Value::Time(_) => TIME_SIZE,
        Value::MapStrValue(m) => m.iter().fold(MAP_HEADER_SIZE, |acc, (key, val)| {
            acc + STRING_PREFIX_SIZE + key.len() + guess_size_with(val, config)
        }),
        Value::MapStrStr(m) => m.iter().fold(MAP_HEADER_SIZE, |acc, (key, val)| {
            acc + 2 * STRING_PREFIX_SIZE + key.len() + val.len()
        }),
        Value::Ptr(_) | Value::Array(_) | Value::Map(_) | Value::Opaque(_) => {
            config.default_size_guess
        }
    }
}
