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


use msgwrite::{Error, Marshaler, Sizer, Writer};
use std::io;

/// Accepts up to `budget` bytes in total, then fails every write.
struct Stingy {
    budget: usize,
    data: Vec<u8>,
    calls: usize,
}

impl Stingy {
    fn new(budget: usize) -> Self {
        Stingy {
            budget,
            data: Vec::new(),
            calls: 0,
        }
    }
}

impl io::Write for Stingy {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Sized8;

impl Marshaler for Sized8 {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        buf.extend_from_slice(&[0x08; 8]);
        Ok(())
    }

    fn as_sizer(&self) -> Option<&dyn Sizer> {
        Some(self)
    }
}

impl Sizer for Sized8 {
    fn msg_size(&self) -> usize {
        8
    }
}

struct Unsized;

impl Marshaler for Unsized {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        buf.extend_from_slice(&[0x92, 0xc0]);
        Ok(())
    }
}

struct Broken;

impl Marshaler for Broken {
    fn marshal_msg(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        buf.extend_from_slice(&[0xee; 3]);
        Err(Error::encode_error("broken marshaler"))
    }
}

#[test]
fn test_partial_flush_keeps_the_unwritten_suffix() {
    let mut w = Writer::with_capacity(Stingy::new(4), 16);
    w.write_raw(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

    let err = w.flush().unwrap_err();
    assert!(err.is_io());
    assert_eq!(w.buffered(), 6);
    assert_eq!(w.buffer(), &[4, 5, 6, 7, 8, 9]);
    assert_eq!(w.get_ref().data, vec![0, 1, 2, 3]);

    // Retrying after the sink recovers delivers the remainder exactly once.
    w.get_mut().budget = usize::MAX;
    w.flush().unwrap();
    assert_eq!(w.buffered(), 0);
    assert_eq!(w.get_ref().data, (0..10).collect::<Vec<u8>>());
}

#[test]
fn test_flush_on_empty_buffer_does_not_touch_the_sink() {
    let mut w = Writer::new(Stingy::new(0));
    w.flush().unwrap();
    assert_eq!(w.get_ref().calls, 0);
}

#[test]
fn test_sized_value_flushes_exactly_once() {
    let mut w = Writer::with_capacity(Stingy::new(usize::MAX), 16);
    w.write_raw(&[0xaa; 10]).unwrap();
    assert_eq!(w.get_ref().calls, 0);

    w.encode(&Sized8).unwrap();
    assert_eq!(w.get_ref().calls, 1);
    assert_eq!(w.get_ref().data, vec![0xaa; 10]);
    assert_eq!(w.buffer(), &[0x08; 8]);
}

#[test]
fn test_sized_value_that_fits_does_not_flush() {
    let mut w = Writer::with_capacity(Stingy::new(usize::MAX), 16);
    w.write_raw(&[0xaa; 8]).unwrap();
    w.encode(&Sized8).unwrap();
    assert_eq!(w.get_ref().calls, 0);
    assert_eq!(w.buffered(), 16);
}

#[test]
fn test_hint_larger_than_capacity_grows_the_buffer() {
    let mut w = Writer::with_capacity(Vec::new(), 16);
    w.push(0x01).unwrap();
    w.encode_hinted(&Sized8, Some(64)).unwrap();
    assert!(w.capacity() >= 64);
    assert_eq!(w.buffered(), 8);
    assert_eq!(w.get_ref(), &vec![0x01]);
}

#[test]
fn test_failed_marshal_rolls_back() {
    // Less than half the buffer is free, so nothing is flushed up front.
    let mut w = Writer::with_capacity(Stingy::new(usize::MAX), 16);
    w.write_raw(&[0xaa; 10]).unwrap();
    let err = w.encode(&Broken).unwrap_err();
    assert!(matches!(err, Error::Encode(_)));
    assert_eq!(w.buffer(), &[0xaa; 10]);
    assert_eq!(w.get_ref().calls, 0);
}

#[test]
fn test_failed_marshal_after_flush_leaves_buffer_empty() {
    let mut w = Writer::new(Vec::new());
    w.write_nil().unwrap();
    assert!(w.encode(&Broken).is_err());
    assert_eq!(w.buffered(), 0);
    assert_eq!(w.get_ref(), &vec![0xc0]);
}

#[test]
fn test_unsized_value_flushes_when_mostly_free() {
    let mut w = Writer::with_capacity(Stingy::new(usize::MAX), 16);
    w.push(0xaa).unwrap();
    w.encode(&Unsized).unwrap();
    assert_eq!(w.get_ref().calls, 1);
    assert_eq!(w.get_ref().data, vec![0xaa]);
    assert_eq!(w.buffer(), &[0x92, 0xc0]);
}

#[test]
fn test_unsized_value_does_not_flush_when_half_full() {
    let mut w = Writer::with_capacity(Stingy::new(usize::MAX), 16);
    w.write_raw(&[0xaa; 8]).unwrap();
    w.encode(&Unsized).unwrap();
    assert_eq!(w.get_ref().calls, 0);
    assert_eq!(w.buffered(), 10);
}

#[test]
fn test_require_hands_out_zeroed_space() {
    let mut w = Writer::with_capacity(Vec::new(), 16);
    w.write_raw(&[1; 12]).unwrap();
    let at = w.require(8).unwrap();
    // Not enough room left, so the 12 pending bytes went out first.
    assert_eq!(at, 0);
    assert_eq!(w.buffer(), &[0; 8]);
    assert_eq!(w.get_ref().len(), 12);

    let at = w.require(4).unwrap();
    assert_eq!(at, 8);
    assert_eq!(w.buffered(), 12);
}

#[test]
fn test_push_flushes_when_full() {
    let mut w = Writer::with_capacity(Vec::new(), 16);
    for b in 0..17u8 {
        w.push(b).unwrap();
    }
    assert_eq!(w.get_ref().len(), 16);
    assert_eq!(w.buffer(), &[16]);
}

#[test]
fn test_into_inner_flushes() {
    let mut w = Writer::new(Vec::new());
    w.write_bool(false).unwrap();
    let out = w.into_inner().unwrap();
    assert_eq!(out, vec![0xc2]);
}

#[test]
fn test_reset_rebinds_and_drops_pending() {
    let mut w = Writer::new(vec![0x99]);
    w.write_bool(true).unwrap();
    let old = w.reset(Vec::new());
    assert_eq!(old, vec![0x99]);
    assert_eq!(w.buffered(), 0);
    w.write_nil().unwrap();
    assert_eq!(w.into_inner().unwrap(), vec![0xc0]);
}

#[test]
fn test_io_write_adapter() {
    use std::io::Write;

    let mut w = Writer::new(Vec::new());
    w.write_all(b"abc").unwrap();
    Write::flush(&mut w).unwrap();
    assert_eq!(w.get_ref(), &b"abc".to_vec());
}

#[test]
fn test_small_capacity_is_clamped() {
    let w = Writer::with_capacity(Vec::new(), 1);
    assert!(w.capacity() >= 16);
}
