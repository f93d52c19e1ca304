use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub};

use super::finite_field::FiniteRing;

/// R x C matrix over a ring, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<T, const R: usize, const C: usize>
where
    T: FiniteRing,
{
    rows: [[T; C]; R],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const D: usize>
where
    T: FiniteRing,
{
    entries: [T; D],
}

impl<T: FiniteRing, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            entries: self.entries.map(|e| -e),
        }
    }
}

impl<T: FiniteRing, const D: usize> Add for Vector<T, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut entries = self.entries;
        for (e, r) in entries.iter_mut().zip(rhs.entries) {
            *e += r;
        }
        Self { entries }
    }
}

impl<T: FiniteRing, const D: usize> AddAssign for Vector<T, D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FiniteRing, const D: usize> Sub for Vector<T, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: FiniteRing, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(entries: [T; D]) -> Self {
        Self { entries }
    }
}

impl<T: FiniteRing, const D: usize> Vector<T, D> {
    pub fn zero() -> Self {
        Self {
            entries: [T::ZERO; D],
        }
    }

    /// Sum of the component-wise products.
    pub fn dot(&self, other: &Self) -> T {
        let mut res = T::ZERO;
        for (a, b) in self.entries.iter().zip(other.entries.iter()) {
            res += *a * *b;
        }
        res
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: FiniteRing, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<T: FiniteRing, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.entries[index]
    }
}

impl<T: FiniteRing, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn zero() -> Self {
        Self {
            rows: [[T::ZERO; C]; R],
        }
    }

    /// Bounds-checked access to entry (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row(&self, i: usize) -> Vector<T, C> {
        Vector::from(self.rows[i])
    }

    pub fn column(&self, j: usize) -> Vector<T, R> {
        Vector::from(std::array::from_fn(|i| self.rows[i][j]))
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            rows: std::array::from_fn(|j| std::array::from_fn(|i| self.rows[i][j])),
        }
    }

    /// M * v: entry i is row i of M dotted with v.
    pub fn mul_vec(&self, v: &Vector<T, C>) -> Vector<T, R> {
        Vector::from(std::array::from_fn(|i| self.row(i).dot(v)))
    }

    /// M^T * v: entry j is column j of M dotted with v. M itself is not
    /// transposed in memory.
    pub fn transpose_mul_vec(&self, v: &Vector<T, R>) -> Vector<T, C> {
        Vector::from(std::array::from_fn(|j| self.column(j).dot(v)))
    }
}

impl<T: FiniteRing, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T: FiniteRing, const R: usize, const C: usize> IndexMut<(usize, usize)>
    for Matrix<T, R, C>
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}
