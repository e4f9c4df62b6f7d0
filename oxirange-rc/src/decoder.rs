//! Range decoder.
//!
//! The decoder mirrors the encoder exactly: the same `bound` split, the
//! same model update, the same byte-per-renormalization cadence. It has
//! no end-of-stream signal of its own - callers must know how many
//! symbols to decode. Once the source is exhausted the refill
//! substitutes `0xFF` bytes and decoding continues; a truncated input
//! therefore produces garbage past the truncation point instead of an
//! error. This is deliberate (some format readers decode a few bytes
//! past the true end), so only genuine read errors propagate.

use crate::encoder::TOP_VALUE;
use crate::model::{BitModel, PROB_BITS};
use oxirange_core::error::Result;
use std::io::{self, Read};

/// Range decoder reading from a byte source.
#[derive(Debug)]
pub struct RangeDecoder<R: Read> {
    source: R,
    /// Width of the current interval.
    range: u32,
    /// The encoder's stream value being narrowed.
    code: u32,
}

impl<R: Read> RangeDecoder<R> {
    /// Create a new range decoder, consuming the 5 priming bytes.
    ///
    /// The first byte is `0x00` on every well-formed stream (the
    /// encoder's carry cache starts empty) and is discarded; skipping
    /// it desynchronizes every bit that follows.
    pub fn new(source: R) -> Result<Self> {
        let mut decoder = Self {
            source,
            range: 0xFFFF_FFFF,
            code: 0,
        };

        decoder.next_byte()?;
        for _ in 0..4 {
            decoder.code = (decoder.code << 8) | u32::from(decoder.next_byte()?);
        }

        Ok(decoder)
    }

    /// Decode a single bit with the given adaptive model.
    pub fn decode_bit(&mut self, model: &mut BitModel) -> Result<u32> {
        let bound = (self.range >> PROB_BITS) * u32::from(model.prob());

        let bit = if self.code < bound {
            self.range = bound;
            model.update_zero();
            0
        } else {
            self.code -= bound;
            self.range -= bound;
            model.update_one();
            1
        };

        self.normalize()?;
        Ok(bit)
    }

    /// Decode a single bit with a fixed 50% split and no model.
    pub fn decode_direct_bit(&mut self) -> Result<u32> {
        self.range >>= 1;
        self.code = self.code.wrapping_sub(self.range);

        let bit = if (self.code as i32) < 0 {
            self.code = self.code.wrapping_add(self.range);
            0
        } else {
            1
        };

        self.normalize()?;
        Ok(bit)
    }

    /// Decode `count` bits, most significant first, each with a fixed
    /// 50% split.
    pub fn decode_direct_bits(&mut self, count: u32) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | self.decode_direct_bit()?;
        }
        Ok(value)
    }

    /// Check whether the stream ended cleanly.
    ///
    /// After the caller-tracked symbol count is exhausted, a stream
    /// that was encoded and flushed by a matching encoder leaves the
    /// code register at zero.
    pub fn is_finished_ok(&self) -> bool {
        self.code == 0
    }

    fn normalize(&mut self) -> Result<()> {
        while self.range < TOP_VALUE {
            self.code = (self.code << 8) | u32::from(self.next_byte()?);
            self.range <<= 8;
        }
        Ok(())
    }

    /// Next source byte, or `0xFF` once the source is exhausted.
    fn next_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(0xFF),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::RangeEncoder;
    use std::io::Cursor;

    #[test]
    fn test_modeled_bit_roundtrip() {
        let mut encoder = RangeEncoder::new(Vec::new());
        let mut model = BitModel::new();

        encoder.encode_bit(&mut model, 0).unwrap();
        encoder.encode_bit(&mut model, 1).unwrap();
        encoder.encode_bit(&mut model, 0).unwrap();
        encoder.encode_bit(&mut model, 1).unwrap();
        let encoded = encoder.finish().unwrap();

        let mut decoder = RangeDecoder::new(Cursor::new(encoded)).unwrap();
        let mut model = BitModel::new();

        assert_eq!(decoder.decode_bit(&mut model).unwrap(), 0);
        assert_eq!(decoder.decode_bit(&mut model).unwrap(), 1);
        assert_eq!(decoder.decode_bit(&mut model).unwrap(), 0);
        assert_eq!(decoder.decode_bit(&mut model).unwrap(), 1);
    }

    #[test]
    fn test_direct_bits_mirror_carry_stream() {
        // Byte-exact mirror of the encoder's carry-propagation case.
        let stream = vec![0x00, 0xFF, 0x7F, 0xFF, 0xF7, 0x80];
        let mut decoder = RangeDecoder::new(Cursor::new(stream)).unwrap();
        assert_eq!(decoder.decode_direct_bits(9).unwrap(), 0x1FF);
        assert!(decoder.is_finished_ok());
    }

    #[test]
    fn test_exhausted_source_substitutes_bytes() {
        // An empty source still primes and decodes: every refill byte
        // is 0xFF. Truncation is undetectable by design.
        let mut decoder = RangeDecoder::new(Cursor::new(Vec::new())).unwrap();
        for _ in 0..64 {
            decoder.decode_direct_bit().unwrap();
        }
    }

    #[test]
    fn test_clean_finish() {
        let mut encoder = RangeEncoder::new(Vec::new());
        let mut model = BitModel::new();
        for _ in 0..100 {
            encoder.encode_bit(&mut model, 1).unwrap();
        }
        let encoded = encoder.finish().unwrap();

        let mut decoder = RangeDecoder::new(Cursor::new(encoded)).unwrap();
        let mut model = BitModel::new();
        for _ in 0..100 {
            assert_eq!(decoder.decode_bit(&mut model).unwrap(), 1);
        }
        assert!(decoder.is_finished_ok());
    }
}
