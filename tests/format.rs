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

use mnote::{ByteOrder, Decoder, Entry, Error, Format, Status, Tag};

fn be(tag: Tag, format: Format, components: u32, data: &[u8]) -> Entry {
    Entry::new(tag, format, components, data, ByteOrder::Big)
}

fn format(entry: &Entry, maxlen: usize) -> String {
    let mut buf = vec![0u8; maxlen];
    let text = mnote::format_value(Some(entry), &mut buf).unwrap();
    String::from_utf8(text.to_vec()).unwrap()
}

const LENS: &[u8] = b"\0\0\0\x1c\0\0\0\x01\0\0\0\x46\0\0\0\x01\
                      \0\0\0\x23\0\0\0\x0a\0\0\0\x38\0\0\0\x0a";

fn samples() -> Vec<Entry<'static>> {
    vec![
        be(Tag::NikonFirmware, Format::UNDEFINED, 4, b"0210"),
        be(Tag::NikonIso, Format::SHORT, 2, b"\0\0\0\xc8"),
        be(Tag::NikonQuality, Format::ASCII, 8, b"NORMAL \0"),
        be(Tag::NikonWhiteBalanceRb, Format::RATIONAL, 4, LENS),
        be(Tag::NikonLens, Format::RATIONAL, 4, LENS),
        be(Tag::NikonAfFocusPosition, Format::UNDEFINED, 4, b"\0\x02\0\0"),
        be(Tag::NikonFlashUsed, Format::BYTE, 1, b"\x09"),
        be(Tag::Nikon1WhiteBalance, Format::SHORT, 1, b"\0\x06"),
        be(Tag::OlympusMode, Format::LONG, 3, b"\0\0\0\x03\0\0\0\x01\0\0\0\0"),
        be(Tag::OlympusWhiteBalance, Format::SHORT, 2, b"\0\x02\0\x05"),
        be(Tag::OlympusFocusDistance, Format::RATIONAL, 1,
           b"\0\0\x01\xf4\0\0\0\x01"),
        be(Tag::OlympusQuality, Format::LONG, 1, b"\0\0\0\x01"),
        be(Tag(0x7777), Format::ASCII, 12, b"hello world\0"),
        be(Tag(0x7777), Format::DOUBLE, 1, &[0; 8]),
    ]
}

#[test]
fn deterministic() {
    for entry in samples() {
        assert_eq!(format(&entry, 256), format(&entry, 256));
        assert_eq!(entry.display_value().to_string(), format(&entry, 256));
    }
}

#[test]
fn bounded() {
    for entry in samples() {
        let full = format(&entry, 256);
        for maxlen in 1..full.len() + 3 {
            let mut buf = vec![0xa5u8; maxlen];
            let len = mnote::format_value(Some(&entry), &mut buf).unwrap().len();
            assert!(len <= maxlen - 1, "{} {}", entry.tag, maxlen);
            assert!(buf[len..].iter().all(|&b| b == 0));
            // A short buffer keeps a prefix of the full text.
            assert_eq!(&buf[..len], full[..len].as_bytes());
        }
    }
}

#[test]
fn zero_length_buffer() {
    let entry = be(Tag::OlympusQuality, Format::SHORT, 1, b"\0\x01");
    let mut buf: [u8; 0] = [];
    assert_eq!(mnote::format_value(Some(&entry), &mut buf), Some(&b""[..]));
}

#[test]
fn no_entry() {
    let mut buf = [0x33u8; 16];
    assert_eq!(mnote::format_value(None, &mut buf), None);
    assert_eq!(buf, [0x33; 16]);
}

#[test]
fn no_data() {
    let entry = Entry { data: None, ..be(Tag::NikonLens, Format::RATIONAL, 3, b"") };
    let mut buf = [0x33u8; 16];
    let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
    assert_eq!(decoded.as_bytes(), b"");
    assert_eq!(decoded.status(), &Status::NoData);
    assert_eq!(buf, [0; 16]);
}

#[test]
fn format_mismatch() {
    let entry = be(Tag::OlympusQuality, Format::LONG, 1, b"\0\0\0\x01");
    let mut buf = [0u8; 64];
    let decoded = Decoder::new().decode(Some(&entry), &mut buf).unwrap();
    assert_eq!(decoded.to_str_lossy(), "Invalid format 'Long', expected 'Short'.");
    assert_eq!(decoded.status(), &Status::Invalid(Error::InvalidFormat {
        found: Format::LONG, expected: Format::SHORT }));
}

#[test]
fn count_mismatch() {
    let entry = be(Tag::NikonLens, Format::RATIONAL, 3, &LENS[..24]);
    assert_eq!(format(&entry, 64), "Invalid number of components (3, expected 4).");
}

#[test]
fn enumerations() {
    let sets: &[(Tag, &[u8], &str)] = &[
        (Tag::NikonLensType, b"\x00", "AF non D Lens"),
        (Tag::NikonLensType, b"\x0a", "AF-D VR Lens"),
        (Tag::NikonFlashUsed, b"\x07", "Flash is external"),
        (Tag::Nikon1Quality, b"\0\x06", "SXGA Fine"),
        (Tag::Nikon1ColorMode, b"\0\x02", "Monochrome"),
        (Tag::Nikon1ImageAdjustment, b"\0\x03", "Contrast+"),
        (Tag::Nikon1CcdSensitivity, b"\0\x05", "ISO100"),
        (Tag::Nikon1WhiteBalance, b"\0\x03", "Incandescense"),
        (Tag::OlympusQuality, b"\0\x01", "SQ"),
        (Tag::OlympusMacro, b"\0\x00", "No"),
        (Tag::OlympusDigiZoom, b"\0\x02", "2x"),
        (Tag::OlympusFlashMode, b"\0\x01", "Red-eye reduction"),
        (Tag::OlympusSharpness, b"\0\x02", "Soft"),
        (Tag::OlympusContrast, b"\0\x00", "Hard"),
        (Tag::OlympusManualFocus, b"\0\x01", "Yes"),
    ];
    for &(tag, data, ans) in sets {
        let format = if data.len() == 1 { Format::BYTE } else { Format::SHORT };
        assert_eq!(format_value(tag, format, data), ans);
    }
    assert_eq!(format_value(Tag::Nikon1ColorMode, Format::SHORT, b"\0\x63"),
               "Unknown value 99");
    assert_eq!(format_value(Tag::OlympusSharpness, Format::SHORT, b"\0\x63"),
               "Unknown value 99");

    fn format_value(tag: Tag, fmt: Format, data: &[u8]) -> String {
        format(&be(tag, fmt, 1, data), 64)
    }
}

#[test]
fn lens() {
    let entry = be(Tag::NikonLens, Format::RATIONAL, 4, LENS);
    assert_eq!(format(&entry, 64), "28-70mm 1:3.5 - 5.6");
}

#[test]
fn focus_distance_unknown() {
    let entry = be(Tag::OlympusFocusDistance, Format::RATIONAL, 1,
                   b"\0\0\0\0\0\0\0\x01");
    assert_eq!(format(&entry, 64), "Unknown");
}

#[test]
fn af_position() {
    let entry = be(Tag::NikonAfFocusPosition, Format::UNDEFINED, 4,
                   b"\0\x03\0\0");
    assert_eq!(format(&entry, 64), "AF Position: Left");
    let entry = be(Tag::NikonAfFocusPosition, Format::UNDEFINED, 4,
                   b"\0\x09\0\0");
    assert_eq!(format(&entry, 64), "Unknown AF Position");
}

#[test]
fn little_endian() {
    let entry = Entry::new(Tag::OlympusWhiteBalance, Format::SHORT, 2,
                           b"\x02\0\x03\0", ByteOrder::Little);
    assert_eq!(format(&entry, 64), "Manual: 3700K");
    let entry = Entry::new(Tag::NikonTotalPictures, Format::LONG, 1,
                           b"\x10\x27\0\0", ByteOrder::Little);
    assert_eq!(format(&entry, 64), "10000");
}
