// ============================================================================
// Operator Implementations
// std::ops sugar over the named arithmetic methods
// ============================================================================
//
// Binary operators are implemented on references only, so `a.add(&b)` keeps
// resolving to the inherent method instead of consuming `a`.

use crate::numeric::BigNum;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

impl<'a> Add<&'a BigNum> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn add(self, rhs: &'a BigNum) -> BigNum {
        BigNum::add(self, rhs)
    }
}

impl<'a> Sub<&'a BigNum> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn sub(self, rhs: &'a BigNum) -> BigNum {
        BigNum::sub(self, rhs)
    }
}

impl<'a> Mul<&'a BigNum> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: &'a BigNum) -> BigNum {
        self.mul_big_num_integer(rhs)
    }
}

impl Mul<u64> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: u64) -> BigNum {
        self.mul_u64(rhs)
    }
}

impl<'a> Div<&'a BigNum> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn div(self, rhs: &'a BigNum) -> BigNum {
        BigNum::div(self, rhs)
    }
}

impl AddAssign<&BigNum> for BigNum {
    #[inline]
    fn add_assign(&mut self, rhs: &BigNum) {
        self.add_in_place(rhs);
    }
}

impl AddAssign for BigNum {
    #[inline]
    fn add_assign(&mut self, rhs: BigNum) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign<&BigNum> for BigNum {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigNum) {
        self.sub_in_place(rhs);
    }
}

impl SubAssign for BigNum {
    #[inline]
    fn sub_assign(&mut self, rhs: BigNum) {
        self.sub_in_place(&rhs);
    }
}

impl MulAssign<u64> for BigNum {
    #[inline]
    fn mul_assign(&mut self, rhs: u64) {
        self.mul_small_in_place(rhs);
    }
}

impl Sum for BigNum {
    fn sum<I: Iterator<Item = BigNum>>(iter: I) -> Self {
        iter.fold(BigNum::zero(), |mut total, value| {
            total.add_in_place(&value);
            total
        })
    }
}

impl<'a> Sum<&'a BigNum> for BigNum {
    fn sum<I: Iterator<Item = &'a BigNum>>(iter: I) -> Self {
        iter.fold(BigNum::zero(), |mut total, value| {
            total.add_in_place(value);
            total
        })
    }
}
