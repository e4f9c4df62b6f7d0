//! Inverse transform: absolute branch targets back to relative.

use crate::{Bcj2Streams, NUM_SELECTORS, is_branch, selector};
use oxirange_core::error::{OxiRangeError, Result};
use oxirange_rc::{BitModel, RangeDecoder};

/// BCJ2 inverse transform.
///
/// Mirror of [`Bcj2Encoder`](crate::Bcj2Encoder): the same candidate
/// scan runs over the reconstructed output, and each candidate's
/// control bit tells whether 4 address bytes were diverted into the
/// address stream.
#[derive(Debug)]
pub struct Bcj2Decoder {
    probs: [BitModel; NUM_SELECTORS],
}

impl Bcj2Decoder {
    /// Create a decoder with fresh models.
    pub fn new() -> Self {
        Self {
            probs: [BitModel::new(); NUM_SELECTORS],
        }
    }

    /// Reset every model to the 50% starting point.
    pub fn reset(&mut self) {
        for model in &mut self.probs {
            model.reset();
        }
    }

    /// Rebuild `output_len` original bytes from the three streams.
    ///
    /// `output_len` must be the exact length the encoder saw: the
    /// control stream carries no end marker of its own, so the output
    /// length is the only stop condition.
    pub fn decode(&mut self, streams: &Bcj2Streams, output_len: usize) -> Result<Vec<u8>> {
        let mut control = RangeDecoder::new(streams.control.as_slice())?;
        let mut main = streams.main.iter().copied();
        let mut addr = streams.addr.chunks_exact(4);

        let mut out = Vec::with_capacity(output_len);
        let mut prev = 0u8;
        while out.len() < output_len {
            let byte = main
                .next()
                .ok_or_else(|| OxiRangeError::unexpected_eof(output_len - out.len()))?;
            out.push(byte);

            if is_branch(prev, byte) && output_len - out.len() >= 4 {
                let sel = selector(prev, byte);

                if control.decode_bit(&mut self.probs[sel])? == 1 {
                    let field = addr
                        .next()
                        .ok_or_else(|| OxiRangeError::unexpected_eof(4))?;
                    let abs = u32::from_le_bytes([field[0], field[1], field[2], field[3]]);
                    let rel = abs.wrapping_sub((out.len() as u32).wrapping_add(4));
                    out.extend_from_slice(&rel.to_le_bytes());
                    prev = (rel >> 24) as u8;
                    continue;
                }
            }

            prev = byte;
        }

        Ok(out)
    }
}

impl Default for Bcj2Decoder {
    fn default() -> Self {
        Self::new()
    }
}
