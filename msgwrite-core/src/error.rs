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

//! Error type shared by every encoding path.
//!
//! Errors are always returned to the caller; nothing in this crate retries or
//! aborts on its own. Sink failures keep the unwritten bytes buffered so a
//! later [`Writer::flush`](crate::buffer::Writer::flush) can retry them.

use std::borrow::Cow;
use std::io;

use thiserror::Error;

/// Set `MSGWRITE_PANIC_ON_ERROR=1` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("MSGWRITE_PANIC_ON_ERROR").is_some();

/// Check if `MSGWRITE_PANIC_ON_ERROR` was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for all msgwrite encoding operations.
///
/// Construct errors through the static functions ([`Error::unsupported_type`],
/// [`Error::map_key`], ...) rather than the variants directly. The functions
/// accept anything convertible into `Cow<'static, str>` and honour
/// `MSGWRITE_PANIC_ON_ERROR`, which turns every error into a panic at its
/// construction site:
///
/// ```bash
/// RUST_BACKTRACE=1 MSGWRITE_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The underlying sink failed. Bytes that were not delivered stay buffered.
    #[error("sink error: {0}")]
    Io(#[from] io::Error),

    /// The value (or one of its elements) has a shape that cannot be encoded.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported_type`] instead.
    #[error("msgwrite: {0}")]
    UnsupportedType(Cow<'static, str>),

    /// A map key was not a string.
    ///
    /// Do not construct this variant directly; use [`Error::map_key`] instead.
    #[error("msgwrite: map keys must be strings, found {0}")]
    MapKey(Cow<'static, str>),

    /// An extension reported a payload length that differs from its payload.
    ///
    /// Do not construct this variant directly; use [`Error::extension_length`] instead.
    #[error("msgwrite: extension declared {declared} payload bytes but produced {actual}")]
    ExtensionLength { declared: usize, actual: usize },

    /// A string, binary blob or container is too long for a 32-bit size field.
    ///
    /// Do not construct this variant directly; use [`Error::length_overflow`] instead.
    #[error("msgwrite: length {0} does not fit in a 32-bit size field")]
    LengthOverflow(usize),

    /// A self-encoding or self-marshaling value reported a failure.
    ///
    /// Do not construct this variant directly; use [`Error::encode_error`] instead.
    #[error("{0}")]
    Encode(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::UnsupportedType`].
    ///
    /// # Example
    /// ```
    /// use msgwrite_core::error::Error;
    ///
    /// let err = Error::unsupported_type("type fn() not supported");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnsupportedType(s.into());
        if PANIC_ON_ERROR {
            panic!("MSGWRITE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::MapKey`] naming the offending key shape.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn map_key<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::MapKey(s.into());
        if PANIC_ON_ERROR {
            panic!("MSGWRITE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::ExtensionLength`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn extension_length(declared: usize, actual: usize) -> Self {
        let err = Error::ExtensionLength { declared, actual };
        if PANIC_ON_ERROR {
            panic!("MSGWRITE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::LengthOverflow`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn length_overflow(len: usize) -> Self {
        let err = Error::LengthOverflow(len);
        if PANIC_ON_ERROR {
            panic!("MSGWRITE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Encode`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use msgwrite_core::error::Error;
    ///
    /// let err = Error::encode_error("field `id` is missing");
    /// let err = Error::encode_error(format!("field {} is missing", "id"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encode_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Encode(s.into());
        if PANIC_ON_ERROR {
            panic!("MSGWRITE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Returns `true` if the error came from the sink.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}

/// Checked conversion of a length into a 32-bit wire size field.
#[inline(always)]
pub(crate) fn wire_len(len: usize) -> Result<u32, Error> {
    u32::try_from(len).map_err(|_| Error::length_overflow(len))
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use msgwrite_core::ensure;
/// use msgwrite_core::error::Error;
///
/// fn check_id(id: i64) -> Result<(), Error> {
///     ensure!(id > 0, "id must be positive");
///     ensure!(id < 1_000, "id {} out of range", id);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::encode_error($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::encode_error(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::Encode`].
///
/// # Examples
/// ```
/// use msgwrite_core::bail;
/// use msgwrite_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("cannot encode a closed handle");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::encode_error($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::encode_error(format!($fmt, $($arg)*)))
    };
}
