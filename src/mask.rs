//! Fixed-size cell sets packed into an unsigned integer.
//!
//! A `CellMask<T, N>` records membership for every cell of an `N×N` grid in
//! the low `N*N` bits of `T`, row-major. The knowledge board and fleet both
//! keep their hit, miss and occupancy sets in this form so that "does this
//! span touch a miss" is a single AND.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use num_traits::{PrimInt, Unsigned};

use crate::config::BOARD_SIZE;

/// Mask sized for the game board.
pub type Mask = CellMask<u128, { BOARD_SIZE as usize }>;

/// Errors returned by mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// The `N×N` grid does not fit into the bits of `T`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column outside `0..N`.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { cells, capacity } => {
                write!(f, "{} cells do not fit into {} bits", cells, capacity)
            }
            MaskError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

/// Set of cells on an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;

    fn board_bits() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, MaskError> {
        if row >= N || col >= N {
            Err(MaskError::OutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// Empty mask. Callers using a custom `T` should prefer [`Self::try_new`].
    #[inline]
    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    /// Empty mask, or `SizeTooLarge` when `N*N` exceeds the width of `T`.
    pub fn try_new() -> Result<Self, MaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(MaskError::SizeTooLarge {
                cells: Self::CELLS,
                capacity,
            })
        } else {
            Ok(Self::new())
        }
    }

    /// Mask with every cell of the grid set.
    #[inline]
    pub fn full() -> Self {
        Self {
            bits: Self::board_bits(),
        }
    }

    /// Build a mask from `(row, col)` pairs.
    pub fn from_cells<I>(cells: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (r, c) in cells {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        let idx = Self::index(row, col)?;
        Ok((self.bits >> idx) & T::one() != T::zero())
    }

    /// Membership test that treats out-of-bounds cells as absent.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Number of cells in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// True when `self` and `other` share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != T::zero()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the grid; bits above `N*N` stay clear.
impl<T, const N: usize> Not for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::board_bits(),
        }
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells()).finish()
    }
}

impl<T, const N: usize> fmt::Display for CellMask<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let ch = if self.contains(r, c) { '■' } else { '□' };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellMask`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & T::one() != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
