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

use std::collections::HashMap;
use std::hash::BuildHasher;

/// A message catalog that translates fixed phrases in decoded values.
///
/// The message IDs are the English phrases themselves, such as
/// `"Unknown"`, `"Manual: Unknown"` or the strings of the enumerated
/// tags.  Numbers and diagnostic messages are not translated.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use mnote::{ByteOrder, Decoder, Entry, Format, Tag};
///
/// let mut catalog = HashMap::new();
/// catalog.insert("Automatic", "Automatisch".to_string());
/// let mut decoder = Decoder::new();
/// decoder.catalog(&catalog);
///
/// let data = [0x00, 0x01, 0x00, 0x00];
/// let entry = Entry::new(Tag::OlympusWhiteBalance, Format::SHORT, 2,
///                        &data, ByteOrder::Big);
/// let mut buf = [0u8; 64];
/// assert_eq!(decoder.format_value(Some(&entry), &mut buf),
///            Some(&b"Automatisch"[..]));
/// ```
pub trait Catalog: Sync {
    /// Returns the translation of `msgid`, or `msgid` itself if there
    /// is none.
    fn translate<'a>(&'a self, msgid: &'static str) -> &'a str;
}

/// A catalog that leaves every phrase untranslated.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Catalog for Untranslated {
    #[inline]
    fn translate<'a>(&'a self, msgid: &'static str) -> &'a str {
        msgid
    }
}

impl<S> Catalog for HashMap<&'static str, String, S>
where S: BuildHasher + Sync {
    fn translate<'a>(&'a self, msgid: &'static str) -> &'a str {
        self.get(msgid).map_or(msgid, String::as_str)
    }
}
