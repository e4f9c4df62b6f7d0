//! Forward transform: relative branch targets to absolute.

use crate::{Bcj2Streams, NUM_SELECTORS, is_branch, selector};
use oxirange_core::error::Result;
use oxirange_rc::{BitModel, RangeEncoder};

/// Whether a rel32 payload looks like a near branch worth rewriting:
/// small forward or backward displacements carry a sign-extension byte.
fn is_near_target(rel_high: u8) -> bool {
    rel_high == 0x00 || rel_high == 0xFF
}

/// BCJ2 forward transform.
///
/// Holds one adaptive model per decision context; models persist
/// across [`encode`](Bcj2Encoder::encode) calls so a caller filtering
/// consecutive sections of one executable keeps the adaptation.
#[derive(Debug)]
pub struct Bcj2Encoder {
    probs: [BitModel; NUM_SELECTORS],
}

impl Bcj2Encoder {
    /// Create an encoder with fresh models.
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

    /// Split `data` into the three filter streams.
    pub fn encode(&mut self, data: &[u8]) -> Result<Bcj2Streams> {
        let mut main = Vec::with_capacity(data.len());
        let mut addr = Vec::new();
        let mut control = RangeEncoder::new(Vec::new());

        let mut prev = 0u8;
        let mut i = 0usize;
        while i < data.len() {
            let byte = data[i];
            main.push(byte);

            // A candidate needs its full 4-byte payload; closer to the
            // end it is copied verbatim with no control bit, a predicate
            // the decoder recomputes from the output length.
            if is_branch(prev, byte) && data.len() - (i + 1) >= 4 {
                let sel = selector(prev, byte);
                let rel = u32::from_le_bytes([data[i + 1], data[i + 2], data[i + 3], data[i + 4]]);

                if is_near_target(data[i + 4]) {
                    control.encode_bit(&mut self.probs[sel], 1)?;
                    let abs = rel.wrapping_add((i as u32).wrapping_add(5));
                    addr.extend_from_slice(&abs.to_le_bytes());
                    prev = data[i + 4];
                    i += 5;
                    continue;
                }
                control.encode_bit(&mut self.probs[sel], 0)?;
            }

            prev = byte;
            i += 1;
        }

        Ok(Bcj2Streams {
            main,
            control: control.finish()?,
            addr,
        })
    }
}

impl Default for Bcj2Encoder {
    fn default() -> Self {
        Self::new()
    }
}
