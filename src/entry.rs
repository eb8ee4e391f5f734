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

use crate::decode::Decoder;
use crate::endian::ByteOrder;
use crate::error::Error;
use crate::tag::Tag;
use crate::value::{Format, Rational};

/// The capacity of the buffer used by [`Entry::display_value`].
pub const DISPLAY_MAXLEN: usize = 1024;

/// A MakerNote entry located by a MakerNote parser.
///
/// The entry borrows the raw payload and never modifies it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// The tag of this entry.
    pub tag: Tag,
    /// The declared format of each component.
    pub format: Format,
    /// The declared number of components.
    pub components: u32,
    /// The raw payload.  Its length need not agree with `components`;
    /// nothing beyond it is ever read.
    pub data: Option<&'a [u8]>,
    /// The byte order of the multi-byte fields in `data`.
    pub order: ByteOrder,
}

impl<'a> Entry<'a> {
    /// Constructs an entry with a payload.
    pub fn new(tag: Tag, format: Format, components: u32, data: &'a [u8],
               order: ByteOrder) -> Self {
        Self { tag, format, components, data: Some(data), order }
    }

    /// Returns the length of the payload in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.map_or(0, <[u8]>::len)
    }

    /// Returns the payload, or an empty slice if there is none.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data.unwrap_or(&[])
    }

    /// Returns an object that implements `std::fmt::Display` for
    /// printing the value of this entry in a human-readable format.
    /// The text is limited to `DISPLAY_MAXLEN - 1` bytes.
    ///
    /// # Examples
    /// ```
    /// use mnote::{ByteOrder, Entry, Format, Tag};
    /// let data = [0x00, 0x00, 0x00, 0x64];
    /// let entry = Entry::new(Tag::NikonTotalPictures, Format::LONG, 1,
    ///                        &data, ByteOrder::Big);
    /// assert_eq!(entry.display_value().to_string(), "100");
    /// ```
    #[inline]
    pub fn display_value(&self) -> DisplayValue<'_, 'a> {
        DisplayValue { entry: self }
    }

    pub(crate) fn check_format(&self, expected: Format) -> Result<(), Error> {
        if self.format != expected {
            return Err(Error::InvalidFormat {
                found: self.format, expected });
        }
        Ok(())
    }

    pub(crate) fn check_count(&self, expected: u32) -> Result<(), Error> {
        if self.components != expected {
            return Err(Error::InvalidCount {
                found: self.components, expected });
        }
        Ok(())
    }

    // The format is checked before the count.
    pub(crate) fn check(&self, format: Format, count: u32)
                        -> Result<(), Error> {
        self.check_format(format)?;
        self.check_count(count)
    }

    pub(crate) fn byte_at(&self, offset: usize) -> Result<u8, Error> {
        self.data().get(offset).copied().ok_or_else(|| self.truncated(offset, 1))
    }

    pub(crate) fn u16_at(&self, offset: usize) -> Result<u16, Error> {
        self.order.read_u16(self.data(), offset)
            .ok_or_else(|| self.truncated(offset, 2))
    }

    pub(crate) fn u32_at(&self, offset: usize) -> Result<u32, Error> {
        self.order.read_u32(self.data(), offset)
            .ok_or_else(|| self.truncated(offset, 4))
    }

    pub(crate) fn rational_at(&self, offset: usize)
                              -> Result<Rational, Error> {
        self.order.read_rational(self.data(), offset)
            .ok_or_else(|| self.truncated(offset, 8))
    }

    fn truncated(&self, offset: usize, len: usize) -> Error {
        Error::Truncated {
            size: self.size(),
            expected: offset.saturating_add(len),
        }
    }
}

/// Helper struct for printing a value of an entry.
pub struct DisplayValue<'e, 'a> {
    entry: &'e Entry<'a>,
}

impl fmt::Display for DisplayValue<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; DISPLAY_MAXLEN];
        match Decoder::new().format_value(Some(self.entry), &mut buf) {
            Some(text) => f.pad(&String::from_utf8_lossy(text)),
            None => Ok(()),
        }
    }
}
