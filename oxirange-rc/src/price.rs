//! Coding-cost estimation.
//!
//! Encoders that choose between candidate encodings need to know what a
//! bit would cost *without* coding it. The price table maps a model
//! probability to an estimated cost in 1/64-bit units; the table is
//! built once at compile time and is read-only afterwards. Prices are
//! purely advisory - consumers only ever compare them - so they never
//! affect coding correctness.

use crate::model::{PROB_BITS, PROB_MAX};

/// Fixed-point shift of price values: costs are in 1/64-bit units.
pub const PRICE_SHIFT_BITS: u32 = 6;

/// Probability bits dropped when indexing the table.
pub const PRICE_REDUCE_BITS: u32 = 2;

const PRICE_TABLE_SIZE: usize = (PROB_MAX as usize) >> PRICE_REDUCE_BITS;

/// Cost table indexed by `prob >> PRICE_REDUCE_BITS`.
///
/// Entry 0 is never hit: the update rule keeps reachable probabilities
/// at 31 or above. The construction matches the LZMA SDK bit for bit,
/// so sizes stay comparable with other implementations: nine
/// power-of-two bands, each holding `exponent * 64` plus a linear
/// interpolation across the band.
pub(crate) const PRICE_TABLE: [u32; PRICE_TABLE_SIZE] = build_price_table();

const fn build_price_table() -> [u32; PRICE_TABLE_SIZE] {
    let num_bits = PROB_BITS - PRICE_REDUCE_BITS;
    let mut table = [0u32; PRICE_TABLE_SIZE];

    let mut i = num_bits - 1;
    loop {
        let start = 1usize << (num_bits - i - 1);
        let end = 1usize << (num_bits - i);

        let mut j = start;
        while j < end {
            table[j] = (i << PRICE_SHIFT_BITS)
                + ((((end - j) as u32) << PRICE_SHIFT_BITS) >> (num_bits - i - 1));
            j += 1;
        }

        if i == 0 {
            break;
        }
        i -= 1;
    }

    table
}

/// Cost of coding `count` unmodeled 50/50 bits: exactly one bit each.
pub fn direct_bits_price(count: u32) -> u32 {
    count << PRICE_SHIFT_BITS
}
