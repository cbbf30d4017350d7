//! Char molecules: fixed-size pages of atoms used for progress and
//! partial-failure bookkeeping. They carry no meaning of their own.

/// One page of the character preview grid.
pub const ATOMS_PER_MOLECULE: usize = {
    let columns = 16;
    let rows = 45;
    columns * rows
};

/// `0` or `1`.
pub type Bit = u8;

/// Number of molecules needed for `atoms` characters.
pub fn molecule_count(atoms: usize) -> usize {
    atoms.div_ceil(ATOMS_PER_MOLECULE)
}

/// Bit `i` is set iff every atom of molecule `i` lies within the first
/// `optimized_atoms` atoms (chunks are processed as an ordered prefix).
pub fn molecule_bitmap(total_atoms: usize, optimized_atoms: usize) -> Vec<Bit> {
    (0..molecule_count(total_atoms))
        .map(|i| {
            let end = ((i + 1) * ATOMS_PER_MOLECULE).min(total_atoms);
            Bit::from(end <= optimized_atoms)
        })
        .collect()
}
