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

use std::error;
use std::fmt;

use crate::value::Format;

/// A condition that prevented an entry from being decoded by the rule
/// of its tag.
///
/// The decoder never returns these as failures.  The `Display`
/// representation of the error becomes the displayed value instead,
/// and the error itself is reported by [`Decoded::status`].
///
/// [`Decoded::status`]: crate::Decoded::status
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The declared format differs from the one the tag requires.
    InvalidFormat { found: Format, expected: Format },
    /// The declared component count differs from the one the tag requires.
    InvalidCount { found: u32, expected: u32 },
    /// The payload is shorter than the fields the tag rule reads.
    Truncated { size: usize, expected: usize },
    /// The dispatch table and the enumeration table disagree.
    /// This indicates a bug in this library, not in the input.
    Internal(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidFormat { found, expected } =>
                write!(f, "Invalid format '{}', expected '{}'.",
                       found, expected),
            Error::InvalidCount { found, expected } =>
                write!(f, "Invalid number of components ({}, expected {}).",
                       found, expected),
            Error::Truncated { size, expected } =>
                write!(f, "Truncated value ({} bytes, expected at least {}).",
                       size, expected),
            Error::Internal(_) => f.write_str("Internal error"),
        }
    }
}

impl error::Error for Error {}
