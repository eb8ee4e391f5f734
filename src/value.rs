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

use std::fmt;

// This is not an enum so that unknown type codes found in broken
// files can be carried to the diagnostic messages as they are.

/// A declared format (TIFF field type) of an entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format(pub u16);

impl Format {
    /// 8-bit unsigned integer.
    pub const BYTE: Format = Format(1);
    /// 8-bit byte containing a 7-bit ASCII character.
    pub const ASCII: Format = Format(2);
    /// 16-bit unsigned integer.
    pub const SHORT: Format = Format(3);
    /// 32-bit unsigned integer.
    pub const LONG: Format = Format(4);
    /// Pair of 32-bit unsigned integers.
    pub const RATIONAL: Format = Format(5);
    /// 8-bit signed integer.
    pub const SBYTE: Format = Format(6);
    /// 8-bit byte whose meaning depends on the tag.
    pub const UNDEFINED: Format = Format(7);
    /// 16-bit signed integer.
    pub const SSHORT: Format = Format(8);
    /// 32-bit signed integer.
    pub const SLONG: Format = Format(9);
    /// Pair of 32-bit signed integers.
    pub const SRATIONAL: Format = Format(10);
    /// 32-bit IEEE 754 floating-point number.
    pub const FLOAT: Format = Format(11);
    /// 64-bit IEEE 754 floating-point number.
    pub const DOUBLE: Format = Format(12);

    /// Returns the name of the format as used in diagnostic messages,
    /// or `None` for an unknown type code.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Format::BYTE => "Byte",
            Format::ASCII => "Ascii",
            Format::SHORT => "Short",
            Format::LONG => "Long",
            Format::RATIONAL => "Rational",
            Format::SBYTE => "SByte",
            Format::UNDEFINED => "Undefined",
            Format::SSHORT => "SShort",
            Format::SLONG => "SLong",
            Format::SRATIONAL => "SRational",
            Format::FLOAT => "Float",
            Format::DOUBLE => "Double",
            _ => return None,
        })
    }

    /// Returns the length of a single component in bytes,
    /// or 0 for an unknown type code.
    pub fn unit_size(self) -> usize {
        match self {
            Format::BYTE | Format::ASCII | Format::SBYTE |
            Format::UNDEFINED => 1,
            Format::SHORT | Format::SSHORT => 2,
            Format::LONG | Format::SLONG | Format::FLOAT => 4,
            Format::RATIONAL | Format::SRATIONAL | Format::DOUBLE => 8,
            _ => 0,
        }
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Format({})", name),
            None => write!(f, "Format({})", self.0),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => write!(f, "Unknown format {}", self.0),
        }
    }
}

/// An unsigned rational number, which is a pair of 32-bit unsigned integers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rational { pub num: u32, pub denom: u32 }

impl Rational {
    /// Returns the truncated integer quotient, or `None` if the
    /// denominator is zero.
    #[inline]
    pub fn quotient(&self) -> Option<u32> {
        self.num.checked_div(self.denom)
    }

    /// Converts the value to a single-precision float.
    /// A zero denominator yields an infinity or NaN.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.num as f32 / self.denom as f32
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.denom)
    }
}
