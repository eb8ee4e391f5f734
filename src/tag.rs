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

use crate::decode::{DecodeFn, Sink};
use crate::entry::Entry;
use crate::error::Error;
use crate::lookup::{self, EnumTable};
use crate::value::Format;

// This is not an enum to keep safety and API stability, while
// supporting unknown tag values.
// Storing unknown values in a repr(u16) enum is unsafe.  The compiler
// assumes that there is no undefined discriminant even with a C-like
// enum, so the exhaustiveness check of a match expression will break.
// Storing unknown values in a special variant such as Unknown(u16)
// tends to break backward compatibility.  When Tag::VariantFoo is
// defined in a new version of the library, the old codes using
// Tag::Unknown(Foo's value) will break.

/// A tag of a MakerNote entry.
///
/// Olympus and Nikon (both MakerNote versions) share one tag space.
/// The tags of the first Nikon MakerNote version are offset by 0x8000
/// so that they do not collide with those of the second one.
///
/// # Examples
/// ```
/// use mnote::{Maker, Tag};
/// assert_eq!(Tag::NikonLens.to_string(), "NikonLens");
/// assert_eq!(Tag::OlympusMode.maker(), Some(Maker::Olympus));
/// assert_eq!(Tag(0x0084), Tag::NikonLens);
/// assert_eq!(Tag(0x7777).to_string(), "Tag(0x7777)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub u16);

impl Tag {
    /// Returns the tag number.
    #[inline]
    pub fn number(self) -> u16 {
        self.0
    }

    /// Returns the manufacturer whose MakerNote defines the tag,
    /// or `None` if the tag is unknown.
    #[inline]
    pub fn maker(self) -> Option<Maker> {
        get_tag_info(self).map(|ti| ti.maker)
    }

    /// Returns the description of the tag.
    #[inline]
    pub fn description(self) -> Option<&'static str> {
        get_tag_info(self).map(|ti| ti.desc)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match get_tag_info(*self) {
            Some(ti) => f.pad(ti.name),
            None => write!(f, "Tag(0x{:04x})", self.0),
        }
    }
}

/// A camera manufacturer whose MakerNote tags are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Maker {
    Nikon,
    Olympus,
}

impl fmt::Display for Maker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Maker::Nikon => "Nikon",
            Maker::Olympus => "Olympus",
        })
    }
}

pub(crate) struct TagInfo {
    pub(crate) name: &'static str,
    pub(crate) maker: Maker,
    pub(crate) desc: &'static str,
    /// `None` if the tag is displayed by its format alone.
    pub(crate) decode: Option<DecodeFn>,
}

macro_rules! generate_well_known_tag_constants {
    (
        $( |$maker:path| $(
            // Copy the doc attribute to the actual definition.
            $( #[$attr:meta] )*
            ($name:ident, $num:expr, $decode:expr, $desc:expr)
        ),+, )+
    ) => (
        // This is not relevant for associated constants, because
        // they cannot be imported even with "uniform paths".
        impl Tag {
            $($(
                $( #[$attr] )*
                #[allow(non_upper_case_globals)]
                pub const $name: Tag = Tag($num);
            )+)+
        }

        mod tag_info {
            use super::*;

            $($(
                #[allow(non_upper_case_globals)]
                pub(crate) static $name: TagInfo = TagInfo {
                    name: stringify!($name),
                    maker: $maker,
                    desc: $desc,
                    decode: $decode,
                };
            )+)+
        }

        pub(crate) fn get_tag_info(tag: Tag) -> Option<&'static TagInfo> {
            match tag {
                $($(
                    Tag::$name => Some(&tag_info::$name),
                )+)+
                _ => None,
            }
        }

        #[cfg(test)]
        pub(crate) static ALL_TAGS: &[Tag] = &[$($(Tag::$name,)+)+];
    )
}

generate_well_known_tag_constants!(
    // Nikon MakerNote (version 2).
    |Maker::Nikon|

    /// Firmware version.  4 bytes shown as a hexadecimal number.
    (NikonFirmware, 0x0001, Some(d_firmware), "Firmware version"),
    (NikonIso, 0x0002, Some(d_iso), "ISO setting"),
    (NikonColorMode1, 0x0003, Some(d_ascii), "Color mode"),
    (NikonQuality, 0x0004, Some(d_ascii), "Quality"),
    (NikonWhiteBalance, 0x0005, Some(d_ascii), "White balance"),
    (NikonSharpening, 0x0006, Some(d_ascii), "Image sharpening"),
    (NikonFocusMode, 0x0007, Some(d_ascii), "Focus mode"),
    (NikonFlashSetting, 0x0008, Some(d_ascii), "Flash setting"),
    (NikonFlashMode, 0x0009, Some(d_ascii), "Flash mode"),
    (NikonWhiteBalanceFine, 0x000b, Some(d_wb_fine),
     "White balance fine adjustment"),
    (NikonWhiteBalanceRb, 0x000c, Some(d_wb_rb), "White balance RB"),
    (NikonIsoSelection, 0x000f, Some(d_ascii), "ISO selection"),
    (NikonIso2, 0x0013, Some(d_iso2), "ISO setting"),
    (NikonImageAdjustment, 0x0080, Some(d_ascii), "Image adjustment"),
    (NikonToneCompensation, 0x0081, None, "Tone compensation"),
    (NikonAdapter, 0x0082, Some(d_ascii), "Adapter"),
    (NikonLensType, 0x0083, Some(d_enum), "Lens type"),
    /// Focal length range and maximum apertures of the lens.
    (NikonLens, 0x0084, Some(d_lens), "Lens"),
    (NikonManualFocusDistance, 0x0085, None, "Manual focus distance"),
    (NikonDigitalZoom, 0x0086, None, "Digital zoom"),
    (NikonFlashUsed, 0x0087, Some(d_enum), "Flash used"),
    (NikonAfFocusPosition, 0x0088, Some(d_af_position), "AF focus position"),
    (NikonBracketing, 0x0089, None, "Bracketing"),
    (NikonColorMode, 0x008d, Some(d_ascii), "Color mode"),
    (NikonLightType, 0x0090, None, "Light type"),
    (NikonHue, 0x0092, None, "Hue adjustment"),
    (NikonNoiseReduction, 0x0095, None, "Noise reduction"),
    (NikonTotalPictures, 0x00a7, Some(d_total_pictures), "Total number of pictures taken"),

    // Nikon MakerNote (version 1).  The tag numbers in the file are
    // 0x0002-0x000b.
    (Nikon1Quality, 0x8003, Some(d_enum), "Quality"),
    (Nikon1ColorMode, 0x8004, Some(d_enum), "Color mode"),
    (Nikon1ImageAdjustment, 0x8005, Some(d_enum), "Image adjustment"),
    (Nikon1CcdSensitivity, 0x8006, Some(d_enum), "CCD sensitivity"),
    (Nikon1WhiteBalance, 0x8007, Some(d_enum), "White balance"),
    (Nikon1Focus, 0x8008, None, "Focus"),
    (Nikon1DigitalZoom, 0x800a, None, "Digital zoom"),
    (Nikon1Converter, 0x800b, None, "Converter"),

    |Maker::Olympus|

    /// Speed/sequence of the shooting mode and panorama direction.
    (OlympusMode, 0x0200, Some(d_olympus_mode), "Speed/Sequence/Panorama direction"),
    (OlympusQuality, 0x0201, Some(d_enum), "Quality"),
    (OlympusMacro, 0x0202, Some(d_enum), "Macro"),
    (OlympusUnknown1, 0x0203, Some(d_unknown_tag), "Unknown tag"),
    (OlympusDigiZoom, 0x0204, Some(d_enum), "Digital zoom"),
    (OlympusUnknown2, 0x0205, Some(d_olympus_unknown2), "Unknown tag"),
    (OlympusUnknown3, 0x0206, Some(d_olympus_unknown3), "Unknown tag"),
    (OlympusVersion, 0x0207, Some(d_olympus_version), "Firmware version"),
    (OlympusInfo, 0x0208, Some(d_olympus_info), "Info"),
    (OlympusId, 0x0209, Some(d_olympus_id), "Camera ID"),
    (OlympusUnknown4, 0x0f04, Some(d_olympus_unknown4), "Unknown tag"),
    (OlympusFlashMode, 0x1004, Some(d_enum), "Flash mode"),
    (OlympusFocusDistance, 0x100c, Some(d_focus_distance), "Manual focus distance"),
    (OlympusSharpness, 0x100f, Some(d_enum), "Sharpness"),
    (OlympusWhiteBalance, 0x1015, Some(d_olympus_wb), "White balance"),
    (OlympusContrast, 0x1029, Some(d_enum), "Contrast"),
    (OlympusManualFocus, 0x102b, Some(d_enum), "Manual focus"),
);

// Nikon.

fn d_firmware(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::UNDEFINED, 4)?;
    out.fmt(format_args!("0x{:04x}", e.u32_at(0)?));
    Ok(())
}

// The first short is always zero.
fn d_iso(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SHORT, 2)?;
    out.fmt(format_args!("ISO {}", e.u16_at(2)?));
    Ok(())
}

fn d_iso2(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SHORT, 2)?;
    out.fmt(format_args!("ISO2 {}", e.u16_at(2)?));
    Ok(())
}

fn d_ascii(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check_format(Format::ASCII)?;
    out.cstr(e.data(), e.components as usize);
    Ok(())
}

fn d_wb_fine(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SSHORT, 1)?;
    out.fmt(format_args!("{}", e.u16_at(0)? as i16));
    Ok(())
}

// Only the first two of the four rationals are known.
fn d_wb_rb(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::RATIONAL, 4)?;
    let red = e.rational_at(0)?.to_f32();
    let blue = e.rational_at(8)?.to_f32();
    out.fmt(format_args!("Red Correction {:.6}, Blue Correction {:.6}",
                         red, blue));
    Ok(())
}

fn d_af_position(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::UNDEFINED, 4)?;
    out.text(match e.byte_at(1)? {
        0 => "AF Position: Center",
        1 => "AF Position: Top",
        2 => "AF Position: Bottom",
        3 => "AF Position: Left",
        4 => "AF Position: Right",
        _ => "Unknown AF Position",
    });
    Ok(())
}

fn d_lens(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::RATIONAL, 4)?;
    let min_focal = e.rational_at(0)?.quotient();
    let max_focal = e.rational_at(8)?.quotient();
    let min_fnum = e.rational_at(16)?.to_f32();
    let max_fnum = e.rational_at(24)?.to_f32();
    match (min_focal, max_focal) {
        (Some(min), Some(max)) =>
            out.fmt(format_args!("{}-{}mm 1:{:3.1} - {:3.1}",
                                 min, max, min_fnum, max_fnum)),
        _ => out.text("Unknown"),
    }
    Ok(())
}

fn d_total_pictures(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::LONG, 1)?;
    out.fmt(format_args!("{}", e.u32_at(0)?));
    Ok(())
}

// Generic enumerated tags.

fn d_enum(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    let table = lookup::find(e.tag);
    debug_assert!(table.is_some(), "{} has no enumeration table", e.tag);
    decode_enum(out, e, table)
}

pub(crate) fn decode_enum(out: &mut Sink, e: &Entry,
                          table: Option<&EnumTable>) -> Result<(), Error> {
    let table = match table {
        Some(table) => table,
        None => {
            log::error!("{} has no enumeration table", e.tag);
            return Err(Error::Internal("missing enumeration table"));
        },
    };
    e.check(table.format, 1)?;
    let value = match table.format {
        Format::BYTE | Format::UNDEFINED => e.byte_at(0)? as u16,
        Format::SHORT => e.u16_at(0)?,
        _ => return Err(Error::Internal("unsupported enumeration format")),
    };
    match table.get(value) {
        Some(s) => out.text(s),
        None => out.fmt(format_args!("Unknown value {}", value)),
    }
    Ok(())
}

// Olympus.

fn d_olympus_mode(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::LONG, 3)?;
    match e.u32_at(0)? {
        0 => out.text("normal"),
        1 => out.text("unknown"),
        2 => out.text("fast"),
        3 => out.text("panorama"),
        n => out.fmt(format_args!("{}", n)),
    }
    // The second long is both the sequence number and the
    // panorama direction.
    let seq = e.u32_at(4)?;
    out.fmt(format_args!("/{}/", seq));
    match seq {
        1 => out.text("left to right"),
        2 => out.text("right to left"),
        3 => out.text("bottom to top"),
        4 => out.text("top to bottom"),
        n => out.fmt(format_args!("{}", n)),
    }
    Ok(())
}

fn d_unknown_tag(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SHORT, 1)?;
    out.text("Unknown tag.");
    Ok(())
}

// The meanings of the following tags are not known.  Only their shapes
// are validated and nothing is displayed for them.

fn d_olympus_unknown2(_: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::RATIONAL, 1)
}

fn d_olympus_unknown3(_: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SSHORT, 1)
}

fn d_olympus_info(_: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::ASCII, 52)
}

fn d_olympus_unknown4(_: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::LONG, 30)
}

fn d_olympus_version(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::ASCII, 5)?;
    out.cstr(e.data(), e.size());
    Ok(())
}

fn d_olympus_id(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::UNDEFINED, 32)?;
    out.cstr(e.data(), e.size());
    Ok(())
}

fn d_focus_distance(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::RATIONAL, 1)?;
    let dist = e.rational_at(0)?;
    match dist.quotient() {
        Some(mm) if dist.num != 0 => out.fmt(format_args!("{} mm", mm)),
        _ => out.text("Unknown"),
    }
    Ok(())
}

fn d_olympus_wb(out: &mut Sink, e: &Entry) -> Result<(), Error> {
    e.check(Format::SHORT, 2)?;
    match e.u16_at(0)? {
        1 => out.text("Automatic"),
        2 => match color_temperature(e.u16_at(2)?) {
            Some(kelvin) => out.fmt(format_args!("Manual: {}K", kelvin)),
            None => out.text("Manual: Unknown"),
        },
        3 => out.text("One-touch"),
        _ => out.text("Unknown"),
    }
    Ok(())
}

fn color_temperature(preset: u16) -> Option<u32> {
    Some(match preset {
        2 => 3000,
        3 => 3700,
        4 => 4000,
        5 => 4500,
        6 => 5500,
        7 => 6500,
        9 => 7500,
        _ => return None,
    })
}
