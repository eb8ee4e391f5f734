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

//! This is a pure-Rust library to format the values of Olympus and
//! Nikon MakerNote entries.
//!
//! A MakerNote parser locates an entry and fills an [`Entry`] with its
//! tag, format, component count, byte order, and raw payload.
//! This library interprets the payload by the rule of the tag and writes
//! a human-readable text into a caller-supplied buffer, never exceeding
//! its capacity.
//!
//! # Examples
//!
//! ```
//! use mnote::{ByteOrder, Entry, Format, Tag};
//!
//! // Four rationals: 28/1, 70/1, 35/10, and 56/10.
//! let data = b"\0\0\0\x1c\0\0\0\x01\0\0\0\x46\0\0\0\x01\
//!              \0\0\0\x23\0\0\0\x0a\0\0\0\x38\0\0\0\x0a";
//! let entry = Entry::new(Tag::NikonLens, Format::RATIONAL, 4,
//!                        data, ByteOrder::Big);
//! let mut buf = [0u8; 64];
//! let text = mnote::format_value(Some(&entry), &mut buf).unwrap();
//! assert_eq!(text, b"28-70mm 1:3.5 - 5.6");
//! ```
//!
//! Malformed entries do not make the formatting fail.  The text becomes
//! a diagnostic message instead, and [`Decoder::decode`] tells it apart
//! from a real value:
//!
//! ```
//! use mnote::{ByteOrder, Decoder, Entry, Error, Format, Status, Tag};
//!
//! let entry = Entry::new(Tag::NikonTotalPictures, Format::SHORT, 1,
//!                        b"\0\x10", ByteOrder::Big);
//! let mut buf = [0u8; 64];
//! let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
//! assert_eq!(decoded.to_str_lossy(), "Invalid format 'Short', expected 'Long'.");
//! assert_eq!(decoded.status(), &Status::Invalid(Error::InvalidFormat {
//!     found: Format::SHORT, expected: Format::LONG }));
//! ```
//!
//! # Logging
//!
//! Diagnostics are also reported through the [`log`] facade at the
//! debug level.  No logger is installed by this library.

pub use decode::{format_value, Decoded, Decoder, Status};
pub use endian::ByteOrder;
pub use entry::{DisplayValue, Entry, DISPLAY_MAXLEN};
pub use error::Error;
pub use i18n::{Catalog, Untranslated};
pub use tag::{Maker, Tag};
pub use value::{Format, Rational};

#[cfg(test)]
#[macro_use]
mod tmacro;

mod decode;
mod endian;
mod entry;
mod error;
mod i18n;
mod lookup;
mod tag;
mod util;
mod value;
