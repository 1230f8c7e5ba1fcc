use std::ops::Neg;

use rand::Rng;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    /// Rotation of the head sprite in degrees, clockwise from U
    pub const ROTATIONS: [(Dir, f32); 4] = [(U, 0.), (R, 90.), (D, 180.), (L, 270.)];

    pub fn rotate_angle(self) -> f32 {
        Self::ROTATIONS[self as usize].1
    }

    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4))
    }

    /// (row, col) offset of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (-1, 0),
            D => (1, 0),
            L => (0, -1),
            R => (0, 1),
        }
    }
}

#[test]
fn test_dir_neg() {
    for &(dir, opposite) in &[(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite);
    }
}

#[test]
fn test_rotate_angle() {
    assert_eq!(U.rotate_angle(), 0.);
    assert_eq!(R.rotate_angle(), 90.);
    assert_eq!(D.rotate_angle(), 180.);
    assert_eq!(L.rotate_angle(), 270.);
    for dir in Dir::iter() {
        assert_eq!(Dir::ROTATIONS[dir as usize].0, dir);
    }
}

#[test]
fn test_from_u8_wraps() {
    for n in 0..12u8 {
        assert_eq!(Dir::from(n) as u8, n % 4);
    }
}
