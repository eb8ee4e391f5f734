#![no_main]

use libfuzzer_sys::fuzz_target;
use mnote::{ByteOrder, Entry, Format, Tag};

// The first 8 bytes choose the entry header and the output capacity.
// The rest is the payload.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let tag = Tag(u16::from_le_bytes([data[0], data[1]]));
    let format = Format(u16::from(data[2] % 14));
    let components = u32::from(u16::from_le_bytes([data[3], data[4]]));
    let order = if data[5] & 1 == 0 { ByteOrder::Big } else { ByteOrder::Little };
    let maxlen = usize::from(data[6]);
    let entry = Entry::new(tag, format, components, &data[8..], order);

    let mut buf = vec![0xa5u8; maxlen];
    let len = mnote::format_value(Some(&entry), &mut buf)
        .map_or(0, <[u8]>::len);
    if maxlen > 0 {
        assert!(len < maxlen);
        assert!(buf[len..].iter().all(|&b| b == 0));
    }
});
