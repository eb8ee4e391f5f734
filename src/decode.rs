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

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

use crate::entry::Entry;
use crate::error::Error;
use crate::i18n::{Catalog, Untranslated};
use crate::tag;
use crate::util::BoundedBuf;
use crate::value::Format;

pub(crate) type DecodeFn = fn(&mut Sink, &Entry) -> Result<(), Error>;

/// A struct to format the values of MakerNote entries.
///
/// A `Decoder` holds no state other than its options, so one instance
/// can be shared by multiple threads.
///
/// # Examples
/// ```
/// use mnote::{ByteOrder, Decoder, Entry, Format, Status, Tag};
///
/// let data = [0x00, 0x00, 0x00, 0x00];
/// let entry = Entry::new(Tag::OlympusQuality, Format::LONG, 1,
///                        &data, ByteOrder::Big);
/// let mut buf = [0u8; 64];
/// let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
/// assert_eq!(decoded.to_str_lossy(),
///            "Invalid format 'Long', expected 'Short'.");
/// assert!(decoded.status().is_diagnostic());
/// ```
#[derive(Clone, Copy)]
pub struct Decoder<'c> {
    catalog: &'c dyn Catalog,
}

impl Default for Decoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<'c> Decoder<'c> {
    /// Constructs a new `Decoder` that does not translate phrases.
    pub fn new() -> Self {
        Self {
            catalog: &Untranslated,
        }
    }

    /// Sets the catalog used to translate fixed phrases.
    pub fn catalog(&mut self, catalog: &'c dyn Catalog) -> &mut Self {
        self.catalog = catalog;
        self
    }

    /// Formats the value of `entry` into `buf`.
    ///
    /// The buffer is zeroed first.  The text never exceeds
    /// `buf.len() - 1` bytes and is always followed by a NUL in `buf`.
    ///
    /// If `entry` is `None`, `None` is returned and `buf` is not touched.
    /// Any other anomaly, such as a format unexpected for the tag, is
    /// reported as the text itself and by [`Decoded::status`].
    pub fn decode<'b>(&self, entry: Option<&Entry>, buf: &'b mut [u8])
                      -> Option<Decoded<'b>> {
        let entry = entry?;
        let mut out = Sink::new(buf, self.catalog);
        if entry.data.is_none() && entry.components > 0 {
            return Some(Decoded { text: out.into_bytes(), status: Status::NoData });
        }

        let (decode, status) = match tag::get_tag_info(entry.tag)
            .and_then(|ti| ti.decode) {
            Some(decode) => (decode, Status::Decoded),
            None => {
                log::trace!("{}: displayed as {}", entry.tag, entry.format);
                (d_default as DecodeFn, Status::Fallback)
            },
        };
        let status = match decode(&mut out, entry) {
            Ok(()) => status,
            Err(err) => {
                log::debug!("{}: {}", entry.tag, err);
                out.clear();
                out.fmt(format_args!("{}", err));
                Status::Invalid(err)
            },
        };
        Some(Decoded { text: out.into_bytes(), status })
    }

    /// Formats the value of `entry` into `buf` and returns the text.
    /// This is a shorthand for `decode` that drops the status.
    #[inline]
    pub fn format_value<'b>(&self, entry: Option<&Entry>, buf: &'b mut [u8])
                            -> Option<&'b [u8]> {
        self.decode(entry, buf).map(Decoded::into_bytes)
    }
}

/// Formats the value of `entry` into `buf` with the default `Decoder`.
///
/// # Examples
/// ```
/// use mnote::{ByteOrder, Entry, Format, Tag};
///
/// let data = [0x00, 0x03, 0x09, 0x00];
/// let entry = Entry::new(Tag::NikonAfFocusPosition, Format::UNDEFINED, 4,
///                        &data, ByteOrder::Little);
/// let mut buf = [0u8; 12];
/// assert_eq!(mnote::format_value(Some(&entry), &mut buf),
///            Some(&b"AF Position"[..]));
/// assert_eq!(mnote::format_value(None, &mut buf), None);
/// ```
#[inline]
pub fn format_value<'b>(entry: Option<&Entry>, buf: &'b mut [u8])
                        -> Option<&'b [u8]> {
    Decoder::new().format_value(entry, buf)
}

/// The text of a formatted value and how it was obtained.
#[derive(Debug)]
pub struct Decoded<'b> {
    text: &'b [u8],
    status: Status,
}

impl<'b> Decoded<'b> {
    /// Returns the text, not including the terminating NUL.
    /// It is usually ASCII, but payloads copied as strings are not
    /// guaranteed to be.
    #[inline]
    pub fn as_bytes(&self) -> &'b [u8] {
        self.text
    }

    #[inline]
    pub fn into_bytes(self) -> &'b [u8] {
        self.text
    }

    /// Returns the text as a string.  Invalid UTF-8 sequences are
    /// replaced with U+FFFD.
    #[inline]
    pub fn to_str_lossy(&self) -> Cow<'b, str> {
        String::from_utf8_lossy(self.text)
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }
}

/// How the text of a [`Decoded`] was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Status {
    /// The value was interpreted by the rule of its tag.
    Decoded,
    /// The tag has no rule and the value was displayed by its format.
    Fallback,
    /// The entry declares components but has no payload.
    /// The text is empty.
    NoData,
    /// The entry did not satisfy the rule of its tag.
    /// The text is the message of the error.
    Invalid(Error),
}

impl Status {
    /// Returns true if the text is a diagnostic message rather than
    /// a value.
    #[inline]
    pub fn is_diagnostic(&self) -> bool {
        matches!(*self, Status::Invalid(_))
    }
}

/// The output of a decoding function.
pub(crate) struct Sink<'b, 'c> {
    buf: BoundedBuf<'b>,
    catalog: &'c dyn Catalog,
}

impl<'b, 'c> Sink<'b, 'c> {
    pub fn new(buf: &'b mut [u8], catalog: &'c dyn Catalog) -> Self {
        Self { buf: BoundedBuf::new(buf), catalog }
    }

    /// Appends the translation of a fixed phrase.
    pub fn text(&mut self, msgid: &'static str) {
        let s = self.catalog.translate(msgid);
        // BoundedBuf never fails.
        let _ = self.buf.write_str(s);
    }

    pub fn fmt(&mut self, args: fmt::Arguments) {
        let _ = self.buf.write_fmt(args);
    }

    /// Appends a NUL-terminated string of at most `limit` bytes.
    pub fn cstr(&mut self, bytes: &[u8], limit: usize) {
        self.buf.push_cstr(bytes, limit);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_bytes(self) -> &'b [u8] {
        self.buf.into_bytes()
    }
}

// Displays a value by its format alone.
fn d_default(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    match e.format {
        Format::ASCII => out.cstr(e.data(), e.components as usize),
        Format::SHORT => out.fmt(format_args!("{}", e.u16_at(0)?)),
        Format::LONG => out.fmt(format_args!("{}", e.u32_at(0)?)),
        _ => out.fmt(format_args!("{} bytes unknown data", e.size())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::endian::ByteOrder;
    use crate::tag::Tag;
    use super::*;

    #[test]
    fn no_entry() {
        let mut buf = [0x55u8; 8];
        assert!(Decoder::new().decode(None, &mut buf).is_none());
        assert_eq!(buf, [0x55; 8]);
    }

    #[test]
    fn no_data() {
        let entry = Entry { tag: Tag::OlympusMode, format: Format::LONG,
                            components: 3, data: None,
                            order: ByteOrder::Big };
        let mut buf = [0x55u8; 8];
        let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
        assert_text!(decoded, "");
        assert_eq!(decoded.status(), &Status::NoData);
        assert_eq!(buf, [0; 8]);
    }

    #[test]
    fn no_data_without_components() {
        let entry = Entry { tag: Tag(0x7777), format: Format::ASCII,
                            components: 0, data: None,
                            order: ByteOrder::Big };
        let mut buf = [0u8; 8];
        let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
        assert_text!(decoded, "");
        assert_eq!(decoded.status(), &Status::Fallback);
    }

    #[test]
    fn fallback() {
        let sets: &[(Format, u32, &[u8], &str)] = &[
            (Format::ASCII, 6, b"hello\0", "hello"),
            (Format::ASCII, 3, b"hello\0", "hel"),
            (Format::SHORT, 1, b"\x01\x02", "258"),
            (Format::SHORT, 2, b"\xff\xff\0\0", "65535"),
            (Format::LONG, 1, b"\0\x01\0\0", "65536"),
            (Format::UNDEFINED, 5, b"\0\0\0\0\0", "5 bytes unknown data"),
            (Format::RATIONAL, 1, b"\0\0\0\x01\0\0\0\x02",
             "8 bytes unknown data"),
            (Format(0x99), 0, b"", "0 bytes unknown data"),
        ];
        for &(format, components, data, ans) in sets {
            let entry = Entry::new(Tag(0x7777), format, components, data,
                                   ByteOrder::Big);
            let mut buf = [0u8; 32];
            let decoded = Decoder::new().decode(Some(&entry), &mut buf)
                .unwrap();
            assert_text!(decoded, ans);
            assert_eq!(decoded.status(), &Status::Fallback);
        }
    }

    #[test]
    fn fallback_for_named_tag() {
        let entry = Entry::new(Tag::NikonHue, Format::SSHORT, 1, b"\0\x03",
                               ByteOrder::Big);
        let mut buf = [0u8; 32];
        let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
        assert_text!(decoded, "2 bytes unknown data");
        assert_eq!(decoded.status(), &Status::Fallback);
    }

    #[test]
    fn fallback_truncated() {
        let entry = Entry::new(Tag(0x7777), Format::LONG, 1, b"\0\x01",
                               ByteOrder::Big);
        let mut buf = [0u8; 64];
        let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
        assert_text!(decoded, "Truncated value (2 bytes, expected at least 4).");
        assert_pat!(decoded.status(),
                    Status::Invalid(Error::Truncated { size: 2, expected: 4 }));
    }

    #[test]
    fn diagnostic_status() {
        let entry = Entry::new(Tag::NikonLens, Format::RATIONAL, 3, &[0; 24],
                               ByteOrder::Big);
        let mut buf = [0u8; 64];
        let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
        assert!(decoded.status().is_diagnostic());
        assert_eq!(decoded.status(), &Status::Invalid(
            Error::InvalidCount { found: 3, expected: 4 }));
        assert!(!Status::Decoded.is_diagnostic());
        assert!(!Status::NoData.is_diagnostic());
    }

    #[test]
    fn diagnostic_truncated() {
        let entry = Entry::new(Tag::OlympusQuality, Format::LONG, 1, b"\0\0\0\0",
                               ByteOrder::Big);
        let mut buf = [0u8; 16];
        let text = Decoder::new().format_value(Some(&entry), &mut buf).unwrap();
        assert_eq!(text, b"Invalid format ");
    }

    #[test]
    fn catalog() {
        let mut catalog = HashMap::new();
        catalog.insert("Unknown", "Unbekannt".to_string());
        catalog.insert("SHQ", "Superhoch".to_string());
        let mut decoder = Decoder::new();
        decoder.catalog(&catalog);
        let mut buf = [0u8; 32];

        let entry = Entry::new(Tag::OlympusFocusDistance, Format::RATIONAL, 1,
                               b"\0\0\0\0\0\0\0\x01", ByteOrder::Big);
        assert_eq!(decoder.format_value(Some(&entry), &mut buf),
                   Some(&b"Unbekannt"[..]));
        let entry = Entry::new(Tag::OlympusQuality, Format::SHORT, 1,
                               b"\x03\0", ByteOrder::Little);
        assert_eq!(decoder.format_value(Some(&entry), &mut buf),
                   Some(&b"Superhoch"[..]));
        // Not in the catalog.
        let entry = Entry::new(Tag::OlympusQuality, Format::SHORT, 1,
                               b"\x02\0", ByteOrder::Little);
        assert_eq!(decoder.format_value(Some(&entry), &mut buf),
                   Some(&b"HQ"[..]));
    }

    #[test]
    fn shared_between_threads() {
        let decoder = Decoder::new();
        std::thread::scope(|s| {
            for i in 0..4u8 {
                let decoder = &decoder;
                s.spawn(move || {
                    let data = [0, i];
                    let entry = Entry::new(Tag::OlympusSharpness, Format::SHORT,
                                           1, &data, ByteOrder::Big);
                    let mut buf = [0u8; 32];
                    let ans: &[u8] = match i {
                        0 => b"Normal",
                        1 => b"Hard",
                        2 => b"Soft",
                        _ => b"Unknown value 3",
                    };
                    assert_eq!(decoder.format_value(Some(&entry), &mut buf),
                               Some(ans));
                });
            }
        });
    }
}
