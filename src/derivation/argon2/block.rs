//! Block operations for Argon2.
//!
//! This module defines the fundamental 1024-byte block structure and the
//! compression function G that forms the core of the Argon2 algorithm.
//! The compression function is based on the BLAKE2b round function but
//! uses additional multiplication operations for enhanced diffusion.

use super::variant::Algorithm;

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Each block is zeroed on drop so password-derived memory does not
/// outlive the computation.
#[derive(Clone)]
pub(crate) struct Block(pub [u64; 128]);

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    /// Size of one block in bytes.
    pub(crate) const SIZE: usize = 1024;

    pub(crate) fn in_place_xor(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    pub(crate) fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut words = [0u64; 128];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }
        Block(words)
    }

    pub(crate) fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Compression function G (RFC 9106 §3.5).
    ///
    /// Computes G(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y, where P is applied first on
    /// rows of 16 words, then on columns.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = x.clone();
        r.in_place_xor(y);

        let mut z = r.clone();

        for row in z.0.chunks_exact_mut(16) {
            let mut v = [0u64; 16];
            v.copy_from_slice(row);
            permute_p(&mut v);
            row.copy_from_slice(&v);
        }

        for i in 0..8 {
            let columns: [usize; 16] =
                core::array::from_fn(|k| 2 * i + 16 * (k / 2) + (k % 2));

            let mut v = columns.map(|c| z.0[c]);
            permute_p(&mut v);

            for (c, value) in columns.into_iter().zip(v) {
                z.0[c] = value;
            }
        }

        z.in_place_xor(&r);
        z
    }

    /// Generates an address block for data-independent indexing.
    ///
    /// The address block is G(0, G(0, Z)) where Z holds the current
    /// position, the total block count, the pass count, the variant and a
    /// counter.
    pub(crate) fn generate_address_block(
        pass: u32,
        lane: u32,
        slice: u32,
        total_blocks: u32,
        time: u32,
        algorithm: Algorithm,
        counter: u32,
    ) -> Self {
        let mut input = Block::ZERO;
        input.0[0] = pass as u64;
        input.0[1] = lane as u64;
        input.0[2] = slice as u64;
        input.0[3] = total_blocks as u64;
        input.0[4] = time as u64;
        input.0[5] = algorithm.type_code() as u64;
        input.0[6] = counter as u64;

        let tmp = Block::compress(&Block::ZERO, &input);
        Block::compress(&Block::ZERO, &tmp)
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|v| *v = 0);
    }
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// ```text
/// a = a + b + 2 × trunc(a) × trunc(b)
/// d = (d ⊕ a) >>> rotation
/// ```
///
/// where trunc() extracts the lower 32 bits. The rotation amounts are
/// 32, 24, 16, and 63 bits respectively.
#[inline(always)]
fn gb(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    #[inline(always)]
    fn fblamka(x: u64, y: u64) -> u64 {
        x.wrapping_add(y)
            .wrapping_add(2u64.wrapping_mul(x & 0xffff_ffff).wrapping_mul(y & 0xffff_ffff))
    }

    let a = fblamka(a, b);
    let d = (d ^ a).rotate_right(32);
    let c = fblamka(c, d);
    let b = (b ^ c).rotate_right(24);
    let a = fblamka(a, b);
    let d = (d ^ a).rotate_right(16);
    let c = fblamka(c, d);
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// P permutation: GB over the columns, then the diagonals, of a 4×4 matrix.
#[inline(always)]
fn permute_p(v: &mut [u64; 16]) {
    (v[0], v[4], v[8], v[12]) = gb(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = gb(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = gb(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = gb(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = gb(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = gb(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = gb(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = gb(v[3], v[4], v[9], v[14]);
}
