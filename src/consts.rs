//! Commonly used constants of the grid geometry

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_PEERS: usize = 20;
