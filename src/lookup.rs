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

use crate::tag::Tag;
use crate::value::Format;

/// A table that maps the integer values of an enumerated tag to phrases.
#[derive(Debug)]
pub struct EnumTable {
    pub tag: Tag,
    /// The only format accepted for the tag.
    pub format: Format,
    /// Pairs of a value and its phrase, sorted by the value.
    pub elems: &'static [(u16, &'static str)],
}

impl EnumTable {
    /// Looks up the phrase for `value`.
    pub fn get(&self, value: u16) -> Option<&'static str> {
        // The elements are sorted, so the scan can stop at the first
        // value not less than the key.
        match self.elems.iter().find(|&&(v, _)| v >= value) {
            Some(&(v, s)) if v == value => Some(s),
            _ => None,
        }
    }
}

/// Returns the enumeration table of `tag`.
pub fn find(tag: Tag) -> Option<&'static EnumTable> {
    ENUM_TABLES.iter().find(|t| t.tag == tag)
}

// New tables can be appended here.  The elements must be in ascending
// order of the value and there must be no more than 8 of them.
static ENUM_TABLES: &[EnumTable] = &[
    EnumTable {
        tag: Tag::NikonLensType,
        format: Format::BYTE,
        elems: &[
            (0, "AF non D Lens"),
            (1, "Manual"),
            (2, "AF-D or AF-S Lens"),
            (6, "AF-D G Lens"),
            (10, "AF-D VR Lens"),
        ],
    },
    EnumTable {
        tag: Tag::NikonFlashUsed,
        format: Format::BYTE,
        elems: &[
            (0, "Flash did not fire"),
            (4, "Flash unit unknown"),
            (7, "Flash is external"),
            (9, "Flash is on Camera"),
        ],
    },
    EnumTable {
        tag: Tag::Nikon1Quality,
        format: Format::SHORT,
        elems: &[
            (1, "VGA Basic"),
            (2, "VGA Normal"),
            (3, "VGA Fine"),
            (4, "SXGA Basic"),
            (5, "SXGA Normal"),
            (6, "SXGA Fine"),
        ],
    },
    EnumTable {
        tag: Tag::Nikon1ColorMode,
        format: Format::SHORT,
        elems: &[
            (1, "Color"),
            (2, "Monochrome"),
        ],
    },
    EnumTable {
        tag: Tag::Nikon1ImageAdjustment,
        format: Format::SHORT,
        elems: &[
            (0, "Normal"),
            (1, "Bright+"),
            (2, "Bright-"),
            (3, "Contrast+"),
            (4, "Contrast-"),
        ],
    },
    EnumTable {
        tag: Tag::Nikon1CcdSensitivity,
        format: Format::SHORT,
        elems: &[
            (0, "ISO80"),
            (2, "ISO160"),
            (4, "ISO320"),
            (5, "ISO100"),
        ],
    },
    EnumTable {
        tag: Tag::Nikon1WhiteBalance,
        format: Format::SHORT,
        elems: &[
            (0, "Auto"),
            (1, "Preset"),
            (2, "Daylight"),
            (3, "Incandescense"),
            (4, "Fluorescence"),
            (5, "Cloudy"),
            (6, "SpeedLight"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusQuality,
        format: Format::SHORT,
        elems: &[
            (1, "SQ"),
            (2, "HQ"),
            (3, "SHQ"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusMacro,
        format: Format::SHORT,
        elems: &[
            (0, "No"),
            (1, "Yes"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusDigiZoom,
        format: Format::SHORT,
        elems: &[
            (0, "1x"),
            (2, "2x"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusFlashMode,
        format: Format::SHORT,
        elems: &[
            (0, "Auto"),
            (1, "Red-eye reduction"),
            (2, "Fill"),
            (3, "Off"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusSharpness,
        format: Format::SHORT,
        elems: &[
            (0, "Normal"),
            (1, "Hard"),
            (2, "Soft"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusContrast,
        format: Format::SHORT,
        elems: &[
            (0, "Hard"),
            (1, "Normal"),
            (2, "Soft"),
        ],
    },
    EnumTable {
        tag: Tag::OlympusManualFocus,
        format: Format::SHORT,
        elems: &[
            (0, "No"),
            (1, "Yes"),
        ],
    },
];

#[cfg(test)]
pub(crate) fn tables() -> &'static [EnumTable] {
    ENUM_TABLES
}
