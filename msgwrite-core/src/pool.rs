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

//! Process-wide reuse of writer buffers.
//!
//! A writer is its sink plus its buffer, and only the buffer is worth
//! keeping: checking a writer in hands the sink back to the caller and keeps
//! the (cleared) buffer, checking one out binds a pooled buffer to a new
//! sink. The pool is safe to share between threads; a checked-out writer is
//! not.

use crate::buffer::Writer;
use crate::config::Config;
use log::debug;
use parking_lot::Mutex;
use std::cell::Cell;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

const NUM_SEGMENTS: usize = 16;

/// Hands out segments round-robin as threads first touch a pool.
static NEXT_SEGMENT: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static SEGMENT_INDEX: Cell<usize> = Cell::new(
        (NEXT_SEGMENT.fetch_add(1, Ordering::Relaxed) as usize) % NUM_SEGMENTS
    );
}

static GLOBAL_WRITER_POOL: LazyLock<WriterPool> =
    LazyLock::new(|| WriterPool::new(&Config::default()));

struct Segment<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Segment<T> {
    fn new() -> Self {
        Segment {
            items: Mutex::new(Vec::new()),
        }
    }
}

/// A segmented free-list. Each thread sticks to one segment, so threads
/// using the pool concurrently usually take different locks.
pub struct Pool<T> {
    segments: [Segment<T>; NUM_SEGMENTS],
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Pool<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Pool {
            segments: std::array::from_fn(|_| Segment::new()),
            factory: Box::new(factory),
        }
    }

    #[inline(always)]
    fn segment(&self) -> &Segment<T> {
        &self.segments[SEGMENT_INDEX.with(|idx| idx.get())]
    }

    /// Takes an idle item, or builds a new one.
    pub fn get(&self) -> T {
        let pooled = self.segment().items.lock().pop();
        pooled.unwrap_or_else(|| (self.factory)())
    }

    pub fn put(&self, item: T) {
        self.segment().items.lock().push(item);
    }

    /// Number of idle items across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.items.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Free-list of writer buffers.
pub struct WriterPool {
    buffers: Pool<Vec<u8>>,
    buffer_size: usize,
    retain_threshold: usize,
    max_retained: usize,
}

impl WriterPool {
    pub fn new(config: &Config) -> Self {
        let size = config.clamp_buffer_size(config.buffer_size);
        WriterPool {
            buffers: Pool::new(move || Vec::with_capacity(size)),
            buffer_size: size,
            retain_threshold: config.pool_retain_threshold,
            max_retained: config.pool_max_retained,
        }
    }

    /// Capacity of freshly created pooled buffers.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// The lazily created process-wide pool.
    pub fn global() -> &'static WriterPool {
        &GLOBAL_WRITER_POOL
    }

    /// Binds a pooled buffer to `sink`. The writer starts with nothing pending.
    pub fn checkout<W: Write>(&self, sink: W) -> Writer<W> {
        Writer::from_parts(sink, self.buffers.get())
    }

    /// Returns the writer's buffer to the pool and hands back its sink.
    ///
    /// Pending bytes are discarded, so flush first. Buffers no larger than
    /// the retain threshold, or larger than the retention cap, are dropped
    /// instead of pooled.
    pub fn checkin<W: Write>(&self, writer: Writer<W>) -> W {
        let (sink, mut buf) = writer.into_parts();
        let cap = buf.capacity();
        if cap > self.max_retained {
            debug!(
                "dropping oversized writer buffer of {} bytes (cap {})",
                cap, self.max_retained
            );
        } else if cap > self.retain_threshold {
            buf.clear();
            self.buffers.put(buf);
        } else {
            debug!(
                "dropping writer buffer of {} bytes instead of pooling it",
                buf.capacity()
            );
        }
        sink
    }

    /// Number of buffers waiting to be reused.
    pub fn idle(&self) -> usize {
        self.buffers.len()
    }
}

impl<W: Write> Writer<W> {
    /// Creates a writer backed by a buffer from the global pool.
    pub fn pooled(sink: W) -> Self {
        WriterPool::global().checkout(sink)
    }

    /// Returns this writer's buffer to the global pool and yields the sink.
    /// Pending bytes are discarded.
    pub fn release(self) -> W {
        WriterPool::global().checkin(self)
    }
}
