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

//! The staging buffer that sits between the encoders and a byte sink.
//!
//! A [`Writer`] owns one sink and one buffer. Bytes in `buf[..len]` are
//! pending: they have been encoded but not yet delivered. The buffer never
//! grows by doubling; when it runs out of room it is flushed, and only a
//! single request larger than the whole buffer causes a reallocation (or, for
//! raw payloads, a write straight through to the sink).
//!
//! A writer is single-owner and performs no locking. Sink writes block the
//! calling thread, and nothing here imposes a timeout.

use crate::config::Config;
use crate::encoder::Marshaler;
use crate::error::Error;
use log::{debug, trace, warn};
use std::fmt;
use std::io::{self, Write};
use std::mem;

/// Buffered MessagePack writer over a sink `W`.
///
/// Call [`Writer::flush`] to deliver buffered data; dropping a writer
/// discards whatever is still pending.
pub struct Writer<W: Write> {
    sink: W,
    pub(crate) buf: Vec<u8>,
}

/// Writer over a type-erased sink, handed to [`Encodable`](crate::encoder::Encodable)
/// implementations so that the trait stays object safe.
pub type DynWriter<'a> = Writer<&'a mut dyn Write>;

impl<W: Write> Writer<W> {
    /// Creates a writer with the default 1024-byte buffer.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, &Config::default())
    }

    /// Creates a writer with a buffer of `size` bytes, clamped to at least 16.
    pub fn with_capacity(sink: W, size: usize) -> Self {
        Self::from_parts(sink, Vec::with_capacity(Config::default().clamp_buffer_size(size)))
    }

    /// Creates a writer sized by `config`.
    pub fn with_config(sink: W, config: &Config) -> Self {
        Self::from_parts(
            sink,
            Vec::with_capacity(config.clamp_buffer_size(config.buffer_size)),
        )
    }

    pub(crate) fn from_parts(sink: W, mut buf: Vec<u8>) -> Self {
        buf.clear();
        Writer { sink, buf }
    }

    pub(crate) fn into_parts(self) -> (W, Vec<u8>) {
        (self.sink, self.buf)
    }

    /// Rebinds the writer to `sink` and drops pending bytes, keeping the
    /// buffer's capacity. Returns the previous sink.
    pub fn reset(&mut self, sink: W) -> W {
        self.buf.clear();
        mem::replace(&mut self.sink, sink)
    }

    /// Number of pending bytes.
    #[inline(always)]
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Free space left in the buffer.
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buf.capacity() - self.buf.len()
    }

    /// Total buffer capacity.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The pending bytes, oldest first.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutable access to the sink. Writing to it directly bypasses any
    /// pending bytes.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Flushes pending bytes and returns the sink.
    pub fn into_inner(mut self) -> Result<W, Error> {
        self.flush()?;
        Ok(self.sink)
    }

    /// Grows the buffer so that `additional` more bytes fit without a flush.
    pub fn reserve(&mut self, additional: usize) {
        if self.available() < additional {
            debug!(
                "growing writer buffer from {} to fit {} more bytes",
                self.buf.capacity(),
                additional
            );
            self.buf.reserve_exact(additional);
        }
    }

    /// Delivers every pending byte to the sink.
    ///
    /// Short writes are retried until the sink either takes everything or
    /// fails. On failure the bytes that were not accepted are moved to the
    /// front of the buffer, nothing is dropped, and the error is returned so
    /// the caller may retry. On success the buffer is emptied and keeps its
    /// capacity.
    pub fn flush(&mut self) -> Result<(), Error> {
        let mut written = 0;
        let mut failure = None;
        while written < self.buf.len() {
            match self.sink.write(&self.buf[written..]) {
                Ok(0) => {
                    failure = Some(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted no bytes",
                    ));
                    break;
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        match failure {
            None => {
                if written > 0 {
                    trace!("flushed {} bytes", written);
                }
                self.buf.clear();
                Ok(())
            }
            Some(err) => {
                self.buf.drain(..written);
                warn!(
                    "flush stopped after {} bytes, {} bytes still pending: {}",
                    written,
                    self.buf.len(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Reserves `n` bytes at the tail of the buffer and returns their offset.
    ///
    /// If the free space is too small the buffer is flushed first; if `n`
    /// exceeds the whole capacity a new buffer of exactly `n` bytes replaces
    /// it. The reserved bytes are zeroed and count as pending.
    pub fn require(&mut self, n: usize) -> Result<usize, Error> {
        let l = self.buf.len();
        let c = self.buf.capacity();
        if c - l >= n {
            self.buf.resize(l + n, 0);
            return Ok(l);
        }
        self.flush()?;
        if n > c {
            debug!("reallocating writer buffer from {} to {} bytes", c, n);
            self.buf = Vec::with_capacity(n);
        }
        self.buf.resize(n, 0);
        Ok(0)
    }

    /// Appends one byte, flushing first if the buffer is full.
    #[inline(always)]
    pub fn push(&mut self, b: u8) -> Result<(), Error> {
        if self.buf.len() == self.buf.capacity() {
            self.flush()?;
        }
        self.buf.push(b);
        Ok(())
    }

    /// Appends raw bytes.
    ///
    /// Payloads larger than the whole buffer are written straight to the
    /// sink after the pending bytes have been flushed.
    pub fn write_raw(&mut self, p: &[u8]) -> Result<usize, Error> {
        let l = p.len();
        if self.available() >= l {
            self.buf.extend_from_slice(p);
            return Ok(l);
        }
        self.flush()?;
        if l > self.buf.capacity() {
            debug!("writing {} bytes through to the sink", l);
            self.sink.write_all(p)?;
            return Ok(l);
        }
        self.buf.extend_from_slice(p);
        Ok(l)
    }

    /// Appends raw text under the same write-through rule as [`Writer::write_raw`].
    pub fn write_text(&mut self, s: &str) -> Result<(), Error> {
        self.write_raw(s.as_bytes()).map(|_| ())
    }

    /// Appends a self-marshaling value.
    ///
    /// Keep the encoded size of `m` below the buffer capacity where possible,
    /// otherwise the buffer has to be replaced by a larger one.
    pub fn encode<M: Marshaler + ?Sized>(&mut self, m: &M) -> Result<(), Error> {
        let hint = m.as_sizer().map(|s| s.msg_size());
        self.encode_hinted(m, hint)
    }

    /// Appends a self-marshaling value using an explicit size hint.
    ///
    /// With a hint, the buffer is flushed when the hint exceeds the free
    /// space and replaced when it exceeds the capacity. Without one, the
    /// buffer is flushed whenever more than half of it is free. If the
    /// marshaler fails, the buffer is truncated back to its previous length.
    pub fn encode_hinted<M: Marshaler + ?Sized>(
        &mut self,
        m: &M,
        hint: Option<usize>,
    ) -> Result<(), Error> {
        match hint {
            Some(sz) => {
                if sz > self.available() {
                    self.flush()?;
                    if sz > self.buf.capacity() {
                        debug!(
                            "reallocating writer buffer from {} to {} bytes for a sized value",
                            self.buf.capacity(),
                            sz
                        );
                        self.buf = Vec::with_capacity(sz);
                    }
                }
            }
            None => {
                if self.available() > self.buf.capacity() / 2 {
                    self.flush()?;
                }
            }
        }
        let mark = self.buf.len();
        if let Err(err) = m.marshal_msg(&mut self.buf) {
            self.buf.truncate(mark);
            return Err(err);
        }
        Ok(())
    }

    /// Runs `f` against a type-erased view of this writer. The view shares
    /// the sink and the buffer.
    pub(crate) fn with_dyn<R>(&mut self, f: impl FnOnce(&mut DynWriter<'_>) -> R) -> R {
        let mut scoped = Writer {
            sink: &mut self.sink as &mut dyn Write,
            buf: mem::take(&mut self.buf),
        };
        let out = f(&mut scoped);
        self.buf = scoped.buf;
        out
    }
}

impl<W: Write> Write for Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_raw(buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Writer::flush(self).map_err(io::Error::from)?;
        self.sink.flush()
    }
}

impl<W: Write + fmt::Debug> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("sink", &self.sink)
            .field("buffered", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .finish()
    }
}
