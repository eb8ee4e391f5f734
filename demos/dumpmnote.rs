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

use std::env;
use std::process;

use mnote::{ByteOrder, Decoder, Entry, Format, Status, Tag};

// Usage: dumpmnote TAG FORMAT ORDER HEXDATA
//   TAG     tag number, such as 0x0084
//   FORMAT  format number or name, such as 5 or Rational
//   ORDER   MM (big endian) or II (little endian)
//   HEXDATA payload in hexadecimal, such as 0000001c00000001
// The number of components is derived from the payload length.
fn main() {
    env_logger::builder()
        .format_level(false)
        .format_target(false)
        .filter_module("mnote", log::LevelFilter::Debug)
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 4 {
        eprintln!("usage: dumpmnote TAG FORMAT ORDER HEXDATA");
        process::exit(2);
    }
    if let Err(e) = dump(&args[0], &args[1], &args[2], &args[3]) {
        eprintln!("dumpmnote: {}", e);
        process::exit(1);
    }
}

fn dump(tag: &str, format: &str, order: &str, hex: &str)
        -> Result<(), String> {
    let tag = Tag(parse_number(tag).ok_or("invalid tag")?);
    let format = parse_format(format).ok_or("invalid format")?;
    let order = match order {
        "MM" | "big" => ByteOrder::Big,
        "II" | "little" => ByteOrder::Little,
        _ => return Err("invalid byte order".into()),
    };
    let data = parse_hex(hex).ok_or("invalid hexadecimal data")?;
    let components = match format.unit_size() {
        0 => data.len(),
        size => data.len() / size,
    };
    let components = u32::try_from(components).map_err(|e| e.to_string())?;

    let entry = Entry::new(tag, format, components, &data, order);
    let mut buf = [0u8; mnote::DISPLAY_MAXLEN];
    let decoded = Decoder::new().decode(Some(&entry), &mut buf)
        .ok_or("no entry")?;
    println!("{} ({}): {}", tag,
             tag.description().unwrap_or("unknown tag"),
             decoded.to_str_lossy());
    match decoded.status() {
        Status::Decoded => {},
        Status::Fallback => println!("  displayed by the format {}", format),
        status => println!("  {:?}", status),
    }
    Ok(())
}

fn parse_number(s: &str) -> Option<u16> {
    match s.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn parse_format(s: &str) -> Option<Format> {
    if let Some(n) = parse_number(s) {
        return Some(Format(n));
    }
    (1..=12).map(Format).find(|f| f.name().map_or(false, |n| n.eq_ignore_ascii_case(s)))
}

fn parse_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len()).step_by(2)
        .map(|i| s.get(i..i + 2).and_then(|b| u8::from_str_radix(b, 16).ok()))
        .collect()
}
