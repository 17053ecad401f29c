//! Compile-time checks for immediate operands.
//!
//! The hardware encodes shift counts, shuffle controls and lane selectors
//! as small immediates. Every path validates them the same way `core::arch`
//! does: an out-of-range constant is a compile error at monomorphization,
//! never a run-time branch.

/// `IMM` must fit in `BITS` unsigned bits.
pub(crate) struct Imm<const IMM: i32, const BITS: u32>;

impl<const IMM: i32, const BITS: u32> Imm<IMM, BITS> {
    pub(crate) const VALID: () = assert!(
        IMM >= 0 && (IMM as i64) < (1i64 << BITS),
        "immediate operand out of range"
    );
}

/// Forces evaluation of [`Imm::VALID`] for the given immediate.
macro_rules! check_imm {
    ($imm:ident, $bits:literal) => {
        #[allow(clippy::let_unit_value)]
        let () = $crate::immediate::Imm::<$imm, $bits>::VALID;
    };
}

pub(crate) use check_imm;
