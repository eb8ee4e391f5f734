//
// Copyright (c) 2016 KAMADA Ken'ichi.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
// 1. Redistributions of source code must retain the above copyright
//    notice, this list of conditions and the following disclaimer.
// 2. Redistributions in binary form must reproduce the above copyright
//    notice, this list of conditions and the following disclaimer in the
//    documentation and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE AUTHOR AND CONTRIBUTORS ``AS IS'' AND
// ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED.  IN NO EVENT SHALL THE AUTHOR OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS
// OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION)
// HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
// OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
// SUCH DAMAGE.
//

use std::mem;

use crate::value::Rational;

// This is a module to select endianess by using generics
// in order to avoid run-time dispatching penalty at the cost of
// increased object size.  `ByteOrder` bridges the run-time byte order
// carried by an entry to the generic loaders.

pub trait Endian {
    fn loadu16(buf: &[u8], from: usize) -> u16;
    fn loadu32(buf: &[u8], from: usize) -> u32;
}

pub struct BigEndian;
pub struct LittleEndian;

macro_rules! generate_load {
    ($name:ident, $int_type:ident, $from_func:ident) => (
        fn $name(buf: &[u8], offset: usize) -> $int_type {
            let mut num = [0u8; mem::size_of::<$int_type>()];
            num.copy_from_slice(
                &buf[offset .. offset + mem::size_of::<$int_type>()]);
            $int_type::$from_func(num)
        }
    )
}

impl Endian for BigEndian {
    generate_load!(loadu16, u16, from_be_bytes);
    generate_load!(loadu32, u32, from_be_bytes);
}

impl Endian for LittleEndian {
    generate_load!(loadu16, u16, from_le_bytes);
    generate_load!(loadu32, u32, from_le_bytes);
}

/// Byte order of the multi-byte fields in an entry's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Big endian ("MM", Motorola).
    Big,
    /// Little endian ("II", Intel).
    Little,
}

impl ByteOrder {
    /// Reads an unsigned 16-bit integer at `offset`.
    /// Returns `None` if the buffer is too short.
    #[inline]
    pub fn read_u16(self, buf: &[u8], offset: usize) -> Option<u16> {
        if !fits(buf, offset, 2) {
            return None;
        }
        Some(match self {
            ByteOrder::Big => BigEndian::loadu16(buf, offset),
            ByteOrder::Little => LittleEndian::loadu16(buf, offset),
        })
    }

    /// Reads an unsigned 32-bit integer at `offset`.
    /// Returns `None` if the buffer is too short.
    #[inline]
    pub fn read_u32(self, buf: &[u8], offset: usize) -> Option<u32> {
        if !fits(buf, offset, 4) {
            return None;
        }
        Some(match self {
            ByteOrder::Big => BigEndian::loadu32(buf, offset),
            ByteOrder::Little => LittleEndian::loadu32(buf, offset),
        })
    }

    /// Reads a rational (numerator followed by denominator) at `offset`.
    /// Returns `None` if the buffer is too short.
    pub fn read_rational(self, buf: &[u8], offset: usize)
                         -> Option<Rational> {
        if !fits(buf, offset, 8) {
            return None;
        }
        Some(match self {
            ByteOrder::Big => load_rational::<BigEndian>(buf, offset),
            ByteOrder::Little => load_rational::<LittleEndian>(buf, offset),
        })
    }
}

fn load_rational<E>(buf: &[u8], offset: usize) -> Rational where E: Endian {
    Rational {
        num: E::loadu32(buf, offset),
        denom: E::loadu32(buf, offset + 4),
    }
}

// Offsets come from the caller, so guard against wrap-around as well.
fn fits(buf: &[u8], offset: usize, len: usize) -> bool {
    offset.checked_add(len).map_or(false, |end| end <= buf.len())
}
