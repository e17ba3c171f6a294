/// Constant-time comparison utilities.
///
/// Implementations must ensure that execution time does not depend on the
/// contents being compared. The only information allowed to leak is the
/// length of the inputs, which is public for every digest this crate reads.
pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    ///
    /// This method must not introduce data-dependent branches or early exits.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Constant-time equality test for byte slices.
    ///
    /// All bytes are XORed and accumulated before comparison, ensuring that
    /// the execution time does not depend on where the first difference occurs.
    #[inline(never)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        // Maps 0 to 1 and anything else to 0 without branching on `diff`.
        ((((diff as u64).wrapping_sub(1)) >> 63) as u8) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTimeEq;

    #[test]
    fn equal_slices_match() {
        assert!(b"abc\0\xff"[..].ct_eq(&b"abc\0\xff"[..]));
        assert!([0u8; 0][..].ct_eq(&[][..]));
    }

    #[test]
    fn any_difference_fails() {
        assert!(!b"abcd"[..].ct_eq(&b"abce"[..]));
        assert!(!b"xbcd"[..].ct_eq(&b"abcd"[..]));
    }

    #[test]
    fn length_mismatch_fails() {
        assert!(!b"abc"[..].ct_eq(&b"abcd"[..]));
    }
}
