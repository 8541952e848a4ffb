/// Integer log2 plus one (`EC_ILOG`): the number of significant bits in `x`.
///
/// Returns 0 for `x == 0`.
#[must_use]
pub const fn ilog(x: u32) -> u32 {
    32 - x.leading_zeros()
}
