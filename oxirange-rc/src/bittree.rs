//! Bit-tree symbol coding.
//!
//! A fixed-width integer symbol is coded as a walk through a binary
//! trie of bit models: one model per interior node, `1 << levels`
//! models in a 1-indexed heap layout with slot 0 unused. Each coded bit
//! selects a child, so sibling contexts adapt independently. The walk
//! runs most-significant-bit first for ordinary symbols and
//! least-significant-bit first ("reverse") where low-order bits carry
//! the structure, e.g. distance alignment bits.

use crate::decoder::RangeDecoder;
use crate::encoder::RangeEncoder;
use crate::model::BitModel;
use oxirange_core::error::Result;
use std::io::{Read, Write};

/// A binary trie of bit models coding one `levels`-bit symbol.
#[derive(Debug, Clone)]
pub struct BitTree {
    models: Vec<BitModel>,
    levels: u32,
}

impl BitTree {
    /// Create a tree for symbols in `0..(1 << levels)`.
    pub fn new(levels: u32) -> Self {
        debug_assert!((1..=16).contains(&levels));
        Self {
            models: vec![BitModel::new(); 1 << levels],
            levels,
        }
    }

    /// Bit width of the symbols this tree codes.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Reset every model to the 50% starting point.
    pub fn reset(&mut self) {
        for model in &mut self.models {
            model.reset();
        }
    }

    /// Encode `symbol`, most significant bit first.
    pub fn encode<W: Write>(&mut self, rc: &mut RangeEncoder<W>, symbol: u32) -> Result<()> {
        let mut index = 1usize;
        for i in (0..self.levels).rev() {
            let bit = (symbol >> i) & 1;
            rc.encode_bit(&mut self.models[index], bit)?;
            index = (index << 1) | bit as usize;
        }
        Ok(())
    }

    /// Decode a symbol, most significant bit first.
    pub fn decode<R: Read>(&mut self, rc: &mut RangeDecoder<R>) -> Result<u32> {
        let mut index = 1usize;
        for _ in 0..self.levels {
            let bit = rc.decode_bit(&mut self.models[index])?;
            index = (index << 1) | bit as usize;
        }
        Ok(index as u32 - (1 << self.levels))
    }

    /// Encode `symbol`, least significant bit first.
    pub fn reverse_encode<W: Write>(
        &mut self,
        rc: &mut RangeEncoder<W>,
        symbol: u32,
    ) -> Result<()> {
        let mut index = 1usize;
        for i in 0..self.levels {
            let bit = (symbol >> i) & 1;
            rc.encode_bit(&mut self.models[index], bit)?;
            index = (index << 1) | bit as usize;
        }
        Ok(())
    }

    /// Decode a symbol, least significant bit first.
    pub fn reverse_decode<R: Read>(&mut self, rc: &mut RangeDecoder<R>) -> Result<u32> {
        let mut index = 1usize;
        let mut symbol = 0u32;
        for i in 0..self.levels {
            let bit = rc.decode_bit(&mut self.models[index])?;
            index = (index << 1) | bit as usize;
            symbol |= bit << i;
        }
        Ok(symbol)
    }

    /// Estimated cost of encoding `symbol` MSB-first, in 1/64-bit
    /// units. Walks the same nodes as [`encode`](BitTree::encode) but
    /// mutates nothing, so encoders may probe candidates freely.
    pub fn price(&self, symbol: u32) -> u32 {
        let mut price = 0u32;
        let mut index = 1usize;
        for i in (0..self.levels).rev() {
            let bit = (symbol >> i) & 1;
            price += self.models[index].price(bit);
            index = (index << 1) | bit as usize;
        }
        price
    }

    /// Estimated cost of encoding `symbol` LSB-first, in 1/64-bit units.
    pub fn reverse_price(&self, symbol: u32) -> u32 {
        let mut price = 0u32;
        let mut index = 1usize;
        for i in 0..self.levels {
            let bit = (symbol >> i) & 1;
            price += self.models[index].price(bit);
            index = (index << 1) | bit as usize;
        }
        price
    }
}
