use crate::vec::{dot_words, word_count_for, Word, WORD_BITS};
use crate::BitVec;
use sorted_iter::assume::AssumeSortedByItemExt;
use sorted_iter::SortedIterator;
use std::fmt;
use std::ops::{Index, Mul};
use std::str::FromStr;

const BOOL_VALUES: [bool; 2] = [false, true];

/// A 2D matrix of bits for linear algebra over GF(2).
///
/// Rows are packed into `u64` words with a fixed per-row word stride
/// (row-major flat storage). Addition of rows is XOR, multiplication of
/// entries is AND; there are no tolerance issues because every entry is
/// an exact 0 or 1.
///
/// # Construction
///
/// ```
/// use bitlin::BitMatrix;
///
/// let zeros = BitMatrix::zeros(3, 8);
/// assert_eq!(zeros.shape(), (3, 8));
///
/// let rows = vec![vec![true, false, true], vec![false, true, false]];
/// let matrix = BitMatrix::from_iter(rows, 3);
/// assert!(matrix.get((0, 2)));
/// ```
///
/// # Reduction and nullspace
///
/// [`echelonize`](BitMatrix::echelonize) reduces the matrix in place;
/// [`kernel_basis`] turns the zero-row-stripped result into a basis of
/// the right nullspace:
///
/// ```
/// use bitlin::{kernel_basis, BitMatrix};
///
/// let mut matrix: BitMatrix = "|1 0 1 1|".parse().unwrap();
/// matrix.echelonize();
/// let kernel = kernel_basis(&matrix.without_zero_rows());
/// assert_eq!(kernel.row_count(), 3);
/// assert!(matrix.mul_transpose(&kernel).is_zero());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    words: Vec<Word>,
    row_count: usize,
    column_count: usize,
    row_stride: usize,
}

impl BitMatrix {
    /// Creates a matrix with all bits set to zero.
    pub fn zeros(row_count: usize, column_count: usize) -> Self {
        let row_stride = word_count_for(column_count);
        Self {
            words: vec![0; row_count * row_stride],
            row_count,
            column_count,
            row_stride,
        }
    }

    /// Creates an identity matrix of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        let mut matrix = Self::zeros(dimension, dimension);
        for index in 0..dimension {
            matrix.set((index, index), true);
        }
        matrix
    }

    /// Creates a matrix from nested iterators of boolean values.
    ///
    /// Rows shorter than `column_count` are padded with zeros.
    ///
    /// # Panics
    ///
    /// Panics if a row yields more than `column_count` bits.
    pub fn from_iter<Row, Rows>(rows: Rows, column_count: usize) -> Self
    where
        Row: IntoIterator<Item = bool>,
        Rows: IntoIterator<Item = Row>,
    {
        let row_stride = word_count_for(column_count);
        let mut words = Vec::new();
        let mut row_count = 0;
        for row in rows {
            words.resize((row_count + 1) * row_stride, 0);
            for (column_index, bit) in row.into_iter().enumerate() {
                assert!(column_index < column_count);
                if bit {
                    words[row_count * row_stride + column_index / WORD_BITS] |= 1 << (column_index % WORD_BITS);
                }
            }
            row_count += 1;
        }
        Self {
            words,
            row_count,
            column_count,
            row_stride,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Matrix dimensions as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    /// Gets the bit at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: (usize, usize)) -> bool {
        let (row_index, column_index) = index;
        assert!(row_index < self.row_count && column_index < self.column_count);
        let word = self.words[row_index * self.row_stride + column_index / WORD_BITS];
        (word >> (column_index % WORD_BITS)) & 1 == 1
    }

    /// Sets the bit at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, index: (usize, usize), to: bool) {
        let (row_index, column_index) = index;
        assert!(row_index < self.row_count && column_index < self.column_count);
        let word = &mut self.words[row_index * self.row_stride + column_index / WORD_BITS];
        let mask = 1 << (column_index % WORD_BITS);
        if to {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    fn row_words(&self, row_index: usize) -> &[Word] {
        &self.words[row_index * self.row_stride..(row_index + 1) * self.row_stride]
    }

    /// Copies the specified row out as a [`BitVec`].
    ///
    /// # Panics
    ///
    /// Panics if `row_index` is out of bounds.
    pub fn row(&self, row_index: usize) -> BitVec {
        assert!(row_index < self.row_count);
        BitVec::from_words(self.column_count, self.row_words(row_index))
    }

    /// Iterates all rows as [`BitVec`]s.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = BitVec> + '_ {
        (0..self.row_count).map(|row_index| self.row(row_index))
    }

    #[must_use]
    pub fn row_is_zero(&self, row_index: usize) -> bool {
        self.row_words(row_index).iter().all(|&word| word == 0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        if left_row_index == right_row_index {
            return;
        }
        let (left, right) = self.two_rows_mut(left_row_index, right_row_index);
        left.swap_with_slice(right);
    }

    /// Adds (XORs) row `from_index` into row `to_index`.
    ///
    /// # Panics
    ///
    /// Panics if the two indices are equal.
    pub fn add_into_row(&mut self, to_index: usize, from_index: usize) {
        self.add_row_suffix_into(to_index, from_index, 0);
    }

    /// XORs the suffix of row `from_index` starting at `start_column`
    /// into the same suffix of row `to_index`. Bits before
    /// `start_column` are untouched.
    fn add_row_suffix_into(&mut self, to_index: usize, from_index: usize, start_column: usize) {
        let start_word = start_column / WORD_BITS;
        let mut mask = !0 << (start_column % WORD_BITS);
        let (to_row, from_row) = self.two_rows_mut(to_index, from_index);
        for word_index in start_word..to_row.len() {
            to_row[word_index] ^= from_row[word_index] & mask;
            mask = !0;
        }
    }

    fn two_rows_mut(&mut self, first_index: usize, second_index: usize) -> (&mut [Word], &mut [Word]) {
        assert!(first_index != second_index && first_index < self.row_count && second_index < self.row_count);
        let stride = self.row_stride;
        let low = first_index.min(second_index) * stride;
        let high = first_index.max(second_index) * stride;
        let (head, tail) = self.words.split_at_mut(high);
        let low_row = &mut head[low..low + stride];
        let high_row = &mut tail[..stride];
        if first_index < second_index {
            (low_row, high_row)
        } else {
            (high_row, low_row)
        }
    }

    /// Reduces the matrix in place over GF(2) by a diagonal walk.
    ///
    /// For each diagonal position `(step, step)` with `step <
    /// min(rows, columns)`: the first row at or below `step` with a one
    /// in column `step` is swapped into position (a zero column leaves
    /// the position as a degenerate no-op swap), then the pivot row's
    /// suffix (columns `step..`) is XORed into every other row with a
    /// one in that column, clearing above and below simultaneously.
    /// The pivot's own row is excluded to avoid a self-XOR.
    ///
    /// Applying this twice yields the same matrix as applying it once.
    pub fn echelonize(&mut self) {
        for step in 0..self.row_count.min(self.column_count) {
            let pivot_row = (step..self.row_count)
                .find(|&row_index| self.get((row_index, step)))
                .unwrap_or(step);
            self.swap_rows(step, pivot_row);
            for row_index in 0..self.row_count {
                if row_index != step && self.get((row_index, step)) {
                    self.add_row_suffix_into(row_index, step, step);
                }
            }
        }
    }

    /// Copy of the matrix with all-zero rows removed, order preserved.
    pub fn without_zero_rows(&self) -> Self {
        Self::from_iter(
            (0..self.row_count)
                .filter(|&row_index| !self.row_is_zero(row_index))
                .map(|row_index| self.row(row_index).iter().collect::<Vec<_>>()),
            self.column_count,
        )
    }

    /// The column of the first one in each row, in row order.
    ///
    /// # Panics
    ///
    /// Panics if a row is all zero; strip zero rows first.
    #[must_use]
    pub fn leading_columns(&self) -> Vec<usize> {
        (0..self.row_count)
            .map(|row_index| {
                let words = self.row_words(row_index);
                let word_index = words
                    .iter()
                    .position(|&word| word != 0)
                    .unwrap_or_else(|| panic!("row {row_index} has no leading one; strip all-zero rows first"));
                word_index * WORD_BITS + words[word_index].trailing_zeros() as usize
            })
            .collect()
    }

    /// Number of linearly independent rows.
    #[must_use]
    pub fn rank(&self) -> usize {
        let mut reduced = self.clone();
        reduced.echelonize();
        (0..reduced.row_count)
            .filter(|&row_index| !reduced.row_is_zero(row_index))
            .count()
    }

    /// Transpose (rows and columns swapped).
    pub fn transposed(&self) -> Self {
        let mut result = Self::zeros(self.column_count, self.row_count);
        for row_index in 0..self.row_count {
            for column_index in 0..self.column_count {
                if self.get((row_index, column_index)) {
                    result.set((column_index, row_index), true);
                }
            }
        }
        result
    }

    /// Computes `self * other^T` over GF(2).
    ///
    /// # Panics
    ///
    /// Panics if the column counts differ.
    pub fn mul_transpose(&self, other: &Self) -> Self {
        assert_eq!(self.column_count, other.column_count);
        let mut result = Self::zeros(self.row_count, other.row_count);
        for row_index in 0..self.row_count {
            for other_row_index in 0..other.row_count {
                if dot_words(self.row_words(row_index), other.row_words(other_row_index)) {
                    result.set((row_index, other_row_index), true);
                }
            }
        }
        result
    }
}

impl Index<(usize, usize)> for BitMatrix {
    type Output = bool;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &BOOL_VALUES[usize::from(self.get(index))]
    }
}

impl Mul for &BitMatrix {
    type Output = BitMatrix;

    /// # Panics
    ///
    /// Panics if the inner dimensions do not match.
    fn mul(self, other: Self) -> Self::Output {
        assert_eq!(self.column_count, other.row_count);
        self.mul_transpose(&other.transposed())
    }
}

impl Mul<&BitVec> for &BitMatrix {
    type Output = BitVec;

    /// # Panics
    ///
    /// Panics if the vector length does not match the column count.
    fn mul(self, right: &BitVec) -> Self::Output {
        assert_eq!(right.len(), self.column_count);
        (0..self.row_count)
            .map(|row_index| dot_words(self.row_words(row_index), right.as_words()))
            .collect()
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "[")?;
        }
        for row_index in 0..self.row_count {
            for column_index in 0..self.column_count {
                write!(f, "{}", i32::from(self.get((row_index, column_index))))?;
            }
            if f.alternate() {
                write!(f, "|")?;
            } else {
                writeln!(f)?;
            }
        }
        if f.alternate() {
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitMatrix(shape={:?},value={:#})", self.shape(), self)
    }
}

/// Error from parsing a [`BitMatrix`] grid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBitMatrixError;

impl fmt::Display for ParseBitMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized character in bit-matrix grid string")
    }
}

impl std::error::Error for ParseBitMatrixError {}

impl FromStr for BitMatrix {
    type Err = ParseBitMatrixError;

    /// Parses grid strings such as `"|10 01|00 11|"`; rows are split on
    /// `|`, `[`, `]`, `(`, `)`, `;` and newlines, `.` counts as 0, and
    /// spaces, dashes and commas are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::<Vec<bool>>::new();
        let mut column_count = 0;
        for row_string in s.split(['|', '[', ']', '(', ')', ';', '\n']) {
            let mut row = Vec::new();
            for character in row_string.chars() {
                match character {
                    '0' | '.' => row.push(false),
                    '1' => row.push(true),
                    ' ' | '-' | ',' => {}
                    _ => return Err(ParseBitMatrixError),
                }
            }
            if !row.is_empty() {
                column_count = column_count.max(row.len());
                rows.push(row);
            }
        }
        Ok(Self::from_iter(rows, column_count))
    }
}

/// Ascending indices in `0..index_bound` that do not occur in the
/// sorted slice `values`.
#[must_use]
pub fn complement(values: &[usize], index_bound: usize) -> Vec<usize> {
    let values = values.iter().copied().assume_sorted_by_item();
    (0..index_bound).difference(values).collect()
}

/// Computes a basis for the right nullspace of a reduced matrix.
///
/// The input must be an echelonized matrix with all-zero rows removed,
/// so that every row has a leading one and the leading columns are
/// distinct. The basis is assembled in two phases over a fresh
/// `K x columns` matrix, where `K` is the number of free (non-pivot)
/// columns:
///
/// 1. free-variable seeding: the `j`-th basis vector gets a one in the
///    `j`-th free column ("free variable j = 1, all others = 0");
/// 2. pivot back-substitution: each pivot column receives that pivot
///    row's entries at the free columns, expressing the pivot variable
///    through the free ones (negation mod 2 is the identity).
///
/// The two phases write disjoint columns, so their order is
/// immaterial. Basis vectors are ordered by ascending free-column
/// index; a full-column-rank input yields an empty basis.
///
/// # Panics
///
/// Panics if a row of the input is all zero.
pub fn kernel_basis(matrix: &BitMatrix) -> BitMatrix {
    let column_count = matrix.column_count();
    let pivots = matrix.leading_columns();
    let free_columns = complement(&pivots, column_count);
    let mut basis = BitMatrix::zeros(free_columns.len(), column_count);

    for (vector_index, &free_column) in free_columns.iter().enumerate() {
        basis.set((vector_index, free_column), true);
    }
    for (row_index, &pivot_column) in pivots.iter().enumerate() {
        for (vector_index, &free_column) in free_columns.iter().enumerate() {
            basis.set((vector_index, pivot_column), matrix.get((row_index, free_column)));
        }
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_columns_of_parsed_grid() {
        let matrix: BitMatrix = "|0100|0011|".parse().unwrap();
        assert_eq!(matrix.leading_columns(), vec![1, 2]);
    }

    #[test]
    fn complement_of_sorted_values() {
        assert_eq!(complement(&[0, 2, 3], 6), vec![1, 4, 5]);
        assert_eq!(complement(&[], 3), vec![0, 1, 2]);
    }
}
