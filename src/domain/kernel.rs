use crate::error::{Error, Result};

/// Square neighborhood mask of odd side length with the center excluded.
/// Size 3 is the Moore neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
}

impl Kernel {
    pub const MOORE_SIZE: usize = 3;

    /// Largest side whose full window sum (k²) still fits in a `u32` count
    pub const MAX_SIZE: usize = 65_535;

    /// Create a kernel of side `size`; fails unless `size` is odd and
    /// within `3..=MAX_SIZE`
    pub fn new(size: usize) -> Result<Self> {
        if !(3..=Self::MAX_SIZE).contains(&size) || size % 2 == 0 {
            return Err(Error::InvalidKernelSize(size));
        }
        Ok(Self { size })
    }

    /// The 3x3 Moore neighborhood
    pub const fn moore() -> Self {
        Self { size: Self::MOORE_SIZE }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center to the kernel edge
    pub const fn radius(&self) -> usize {
        self.size / 2
    }

    /// Largest neighbor count the kernel can produce (k² - 1)
    pub const fn max_count(&self) -> u32 {
        // size <= MAX_SIZE, so the square cannot overflow
        let side = self.size as u32;
        side * side - 1
    }

    /// Relative (dx, dy) offsets that contribute to a neighbor count
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> {
        let r = self.radius() as isize;
        (-r..=r)
            .flat_map(move |dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::moore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moore_has_eight_offsets() {
        let kernel = Kernel::moore();
        assert_eq!(kernel.offsets().count(), 8);
        assert!(kernel.offsets().all(|o| o != (0, 0)));
        assert_eq!(kernel.max_count(), 8);
    }

    #[test]
    fn test_larger_kernel() {
        let kernel = Kernel::new(5).unwrap();
        assert_eq!(kernel.radius(), 2);
        assert_eq!(kernel.offsets().count(), 24);
        assert_eq!(kernel.max_count(), 24);
    }

    #[test]
    fn test_rejects_even_or_small() {
        for size in [0, 1, 2, 4, 6] {
            assert_eq!(Kernel::new(size), Err(Error::InvalidKernelSize(size)));
        }
    }

    #[test]
    fn test_rejects_oversized() {
        for size in [Kernel::MAX_SIZE + 2, 65_537, usize::MAX] {
            assert_eq!(Kernel::new(size), Err(Error::InvalidKernelSize(size)));
        }
    }

    #[test]
    fn test_largest_kernel_count_fits() {
        let kernel = Kernel::new(Kernel::MAX_SIZE).unwrap();
        assert_eq!(kernel.max_count(), 65_535 * 65_535 - 1);
    }
}
