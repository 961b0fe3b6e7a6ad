//! Fixed-order binary encoding for the savable value types.
//!
//! Fields are written as consecutive fixed-width big-endian values in a
//! defined order, with no framing of their own; the surrounding stream owns
//! any length or type prefixes.

use bytes::{Buf, BufMut};
use thiserror::Error;

use crate::rect::{Rect, RectF};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
}

/// A value with a fixed-order binary form.
pub trait Portable {
    /// Number of bytes `encode` writes and `decode` consumes.
    const ENCODED_LEN: usize;

    fn encode<B: BufMut>(&self, buf: &mut B);

    /// Reads the fields back in encode order, replacing `self`.
    fn decode<B: Buf>(&mut self, buf: &mut B) -> Result<(), CodecError>;
}

fn check_remaining<B: Buf>(buf: &B, needed: usize) -> Result<(), CodecError> {
    if buf.remaining() < needed {
        return Err(CodecError::Truncated { needed, remaining: buf.remaining() });
    }
    Ok(())
}

impl Portable for Rect {
    const ENCODED_LEN: usize = 16;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32(self.x);
        buf.put_i32(self.y);
        buf.put_i32(self.width);
        buf.put_i32(self.height);
    }

    fn decode<B: Buf>(&mut self, buf: &mut B) -> Result<(), CodecError> {
        check_remaining(buf, Self::ENCODED_LEN)?;
        self.x = buf.get_i32();
        self.y = buf.get_i32();
        self.width = buf.get_i32();
        self.height = buf.get_i32();
        Ok(())
    }
}

impl Portable for RectF {
    const ENCODED_LEN: usize = 16;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_f32(self.x);
        buf.put_f32(self.y);
        buf.put_f32(self.width);
        buf.put_f32(self.height);
    }

    fn decode<B: Buf>(&mut self, buf: &mut B) -> Result<(), CodecError> {
        check_remaining(buf, Self::ENCODED_LEN)?;
        self.x = buf.get_f32();
        self.y = buf.get_f32();
        self.width = buf.get_f32();
        self.height = buf.get_f32();
        Ok(())
    }
}
