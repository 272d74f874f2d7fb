//! Internal support types shared by the graph algorithms.

pub(crate) mod bitset;

pub(crate) use bitset::BitSet;
