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

/// A writer into a caller-supplied, fixed-capacity byte buffer.
///
/// The buffer is zeroed on construction.  The last byte is reserved for
/// the terminating NUL, so at most `buf.len() - 1` bytes are written.
/// Anything that does not fit is silently dropped.
pub struct BoundedBuf<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> BoundedBuf<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        buf.fill(0);
        Self { buf, len: 0 }
    }

    /// The number of bytes that can still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Appends bytes, truncating them to the remaining capacity.
    /// Returns the number of bytes written.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.len .. self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        n
    }

    /// Appends a NUL-terminated string.  At most `limit` bytes of `bytes`
    /// are examined, and copying stops at the first NUL.
    pub fn push_cstr(&mut self, bytes: &[u8], limit: usize) -> usize {
        let bytes = &bytes[..bytes.len().min(limit)];
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        self.push_bytes(&bytes[..end])
    }

    /// Discards everything written so far.
    pub fn clear(&mut self) {
        self.buf[..self.len].fill(0);
        self.len = 0;
    }

    /// Returns the written bytes, not including the terminating NUL.
    pub fn into_bytes(self) -> &'b [u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for BoundedBuf<'_> {
    // Never fails.  A string is cut at a character boundary so that the
    // result stays valid UTF-8 as long as the input is.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut n = s.len().min(self.remaining());
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.push_bytes(&s.as_bytes()[..n]);
        Ok(())
    }
}
