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

/// Default capacity of a writer's staging buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Smallest buffer a writer will be created with.
pub const MIN_BUFFER_SIZE: usize = 16;

/// Pooled writers must have a buffer strictly larger than this to be kept.
pub const POOL_RETAIN_THRESHOLD: usize = 256;

/// Pooled writers whose buffer grew beyond this are dropped on return.
pub const POOL_MAX_RETAINED: usize = 64 * 1024;

/// Fallback answer of the size estimator for shapes it cannot price.
pub const DEFAULT_SIZE_GUESS: usize = 512;

/// Configuration for writers, the writer pool and the size estimator.
///
/// `Config::default()` matches the crate constants above.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Capacity of buffers created by [`Writer::new`](crate::buffer::Writer::new)
    /// and by the pool factory.
    pub buffer_size: usize,
    /// Lower clamp for explicitly sized buffers.
    pub min_buffer_size: usize,
    /// A buffer returned to the pool is kept only if its capacity exceeds this.
    pub pool_retain_threshold: usize,
    /// A buffer returned to the pool is dropped if its capacity exceeds this.
    pub pool_max_retained: usize,
    /// Size estimate for values with no closed-form size.
    pub default_size_guess: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            buffer_size: DEFAULT_BUFFER_SIZE,
            min_buffer_size: MIN_BUFFER_SIZE,
            pool_retain_threshold: POOL_RETAIN_THRESHOLD,
            pool_max_retained: POOL_MAX_RETAINED,
            default_size_guess: DEFAULT_SIZE_GUESS,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn with_min_buffer_size(mut self, size: usize) -> Self {
        self.min_buffer_size = size;
        self
    }

    pub fn with_pool_retain_threshold(mut self, threshold: usize) -> Self {
        self.pool_retain_threshold = threshold;
        self
    }

    pub fn with_pool_max_retained(mut self, max: usize) -> Self {
        self.pool_max_retained = max;
        self
    }

    pub fn with_default_size_guess(mut self, guess: usize) -> Self {
        self.default_size_guess = guess;
        self
    }

    /// Buffer capacity actually used for a requested size.
    #[inline(always)]
    pub fn clamp_buffer_size(&self, requested: usize) -> usize {
        requested.max(self.min_buffer_size)
    }
}
