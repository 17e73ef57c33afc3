use num_complex::Complex;

/// Reinterprets a slice of complex values as a slice of interleaved (re, im) reals.
///
/// num-complex guarantees that `Complex<T>` is repr(C) with `re` stored before `im`, so a
/// slice of n complex values has exactly the memory layout of 2n interleaved reals.
#[allow(unused)]
pub fn interleaved<T>(slice: &[Complex<T>]) -> &[T] {
    unsafe { std::slice::from_raw_parts(slice.as_ptr() as *const T, slice.len() * 2) }
}

/// Reinterprets a mutable slice of complex values as a mutable slice of interleaved reals.
pub fn interleaved_mut<T>(slice: &mut [Complex<T>]) -> &mut [T] {
    unsafe { std::slice::from_raw_parts_mut(slice.as_mut_ptr() as *mut T, slice.len() * 2) }
}

/// Maps 2D indices into a flat backing buffer, first index fastest-varying.
///
/// The butterfly passes view the same backing buffer through several of these mappers at
/// once, with different extents, instead of copying data between differently-shaped arrays.
/// The mapper itself never touches the buffer, it only computes indices into it.
#[derive(Copy, Clone)]
pub struct View2 {
    d0: usize,
    d1: usize,
}
impl View2 {
    pub fn new(d0: usize, d1: usize) -> Self {
        Self { d0, d1 }
    }

    #[inline(always)]
    pub fn idx(&self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.d0 && b < self.d1);
        a + b * self.d0
    }
}

/// Maps 3D indices into a flat backing buffer, first index fastest-varying.
#[derive(Copy, Clone)]
pub struct View3 {
    d0: usize,
    d1: usize,
    d2: usize,
}
impl View3 {
    pub fn new(d0: usize, d1: usize, d2: usize) -> Self {
        Self { d0, d1, d2 }
    }

    #[inline(always)]
    pub fn idx(&self, a: usize, b: usize, c: usize) -> usize {
        debug_assert!(a < self.d0 && b < self.d1 && c < self.d2);
        a + (b + c * self.d1) * self.d0
    }
}
