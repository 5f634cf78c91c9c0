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

//! # msgwrite core
//!
//! The encoding half of a MessagePack-compatible format: a buffered
//! [`Writer`](buffer::Writer) that turns values into a compact,
//! self-describing byte stream, plus a dispatcher that encodes values whose
//! shape is only known at runtime.
//!
//! ## Architecture
//!
//! - **`buffer`**: the staging buffer and its flush protocol
//! - **`encoder`**: tag selection and byte layout for every wire family,
//!   and the capability traits ([`Encodable`](encoder::Encodable),
//!   [`Marshaler`](encoder::Marshaler), [`Sizer`](encoder::Sizer),
//!   [`Extension`](encoder::Extension))
//! - **`value`**: the dynamic [`Value`](value::Value) and its dispatcher
//! - **`append`**: the same encoders targeting a plain `Vec<u8>`
//! - **`pool`**: process-wide reuse of writer buffers
//! - **`size`**: cheap size estimates used to pre-size buffers
//! - **`codec`**: one-shot helpers
//! - **`types`**: tag bytes, extension codes and size constants
//! - **`config`** / **`error`**
//!
//! ## Usage
//!
//! ```rust
//! use msgwrite_core::buffer::Writer;
//! use msgwrite_core::error::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let mut out = Vec::new();
//!     let mut w = Writer::new(&mut out);
//!     w.write_map_header(1)?;
//!     w.write_str("id")?;
//!     w.write_u64(7)?;
//!     w.flush()?;
//!     assert_eq!(out, vec![0x81, 0xa2, b'i', b'd', 0x07]);
//!     Ok(())
//! }
//! ```
//!
//! Nothing reaches the sink until the buffer fills up or
//! [`flush`](buffer::Writer::flush) is called.

pub mod append;
pub mod buffer;
pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;
pub mod pool;
pub mod size;
pub mod types;
pub mod value;

pub use buffer::{DynWriter, Writer};
pub use codec::{encode, encode_value, write};
pub use config::Config;
pub use encoder::{Encodable, Extension, Marshaler, RawExtension, Sizer};
pub use error::Error;
pub use pool::WriterPool;
pub use size::{guess_size, guess_size_with};
pub use types::{Complex, Complex128, Complex64};
pub use value::{Custom, Opaque, Value};
