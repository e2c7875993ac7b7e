use std::{ptr::NonNull, slice};

use libc::c_void;

/// Alignment and rounding unit for cache-line allocation, in bytes.
pub const CACHE_LINE: usize = 64;
/// Sizing constant for block-oriented callers. Declared for embedders;
/// nothing in this crate consumes it.
pub const BLOCK_SIZE: usize = 512;
/// Sizing constant for page-oriented callers. Declared for embedders;
/// nothing in this crate consumes it.
pub const PAGE_SIZE: usize = 4096;

/// A zero-initialized heap region whose address and length are both
/// multiples of [`CACHE_LINE`].
///
/// The region is exclusively owned: it is released back to the C allocator
/// when the value is dropped, and never aliased by this crate.
pub struct CacheAligned {
  ptr: NonNull<u8>,
  size: usize,
}

/// A zero-initialized heap region with no alignment guarantee beyond what
/// the C allocator provides.
pub struct HeapZeroed {
  ptr: NonNull<u8>,
  size: usize,
}

/// Allocates a zero-filled region aligned to [`CACHE_LINE`].
///
/// The region size is `(size / CACHE_LINE + 1) * CACHE_LINE`: rounding
/// always reserves one cache line beyond the minimum multiple covering
/// `size`, so a request that is already a multiple of the line size still
/// grows by a full line. Callers depend on that slack; keep the formula.
///
/// Allocation failure is fatal — the process terminates via [`fatal!`]
/// rather than returning an error.
///
/// # Examples
///
/// ```rust
/// use hotbox::{alloc_cacheline, CACHE_LINE};
///
/// let block = alloc_cacheline(100);
/// assert_eq!(block.len(), 128);
/// assert_eq!(block.as_ptr() as usize % CACHE_LINE, 0);
/// assert!(block.as_slice().iter().all(|&b| b == 0));
/// ```
///
/// [`fatal!`]: crate::fatal
pub fn alloc_cacheline(size: usize) -> CacheAligned {
  let rounded = (size / CACHE_LINE + 1) * CACHE_LINE;

  let raw = unsafe { libc::aligned_alloc(CACHE_LINE, rounded) };

  let Some(ptr) = NonNull::new(raw as *mut u8) else {
    crate::fatal!("alloc_cacheline: cannot allocate {rounded} bytes");
  };

  unsafe {
    ptr.as_ptr().write_bytes(0, rounded);
  }

  CacheAligned { ptr, size: rounded }
}

/// Allocates a zero-filled region of exactly `size` bytes (one byte for a
/// zero-size request, so the C allocator never returns null for success).
///
/// Shares the fatal-failure policy of [`alloc_cacheline`].
pub fn alloc_zeroed(size: usize) -> HeapZeroed {
  let size = size.max(1);

  let raw = unsafe { libc::calloc(size, 1) };

  let Some(ptr) = NonNull::new(raw as *mut u8) else {
    crate::fatal!("alloc_zeroed: cannot allocate {size} bytes");
  };

  HeapZeroed { ptr, size }
}

impl CacheAligned {
  pub fn as_ptr(&self) -> *const u8 {
    self.ptr.as_ptr()
  }

  pub fn as_mut_ptr(&mut self) -> *mut u8 {
    self.ptr.as_ptr()
  }

  /// Region length in bytes, always a multiple of [`CACHE_LINE`] and
  /// strictly greater than the requested size.
  pub fn len(&self) -> usize {
    self.size
  }

  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn as_slice(&self) -> &[u8] {
    unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
  }

  pub fn as_mut_slice(&mut self) -> &mut [u8] {
    unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
  }
}

impl Drop for CacheAligned {
  fn drop(&mut self) {
    unsafe { libc::free(self.ptr.as_ptr() as *mut c_void) }
  }
}

// Plain owned memory; no thread affinity.
unsafe impl Send for CacheAligned {}
unsafe impl Sync for CacheAligned {}

impl HeapZeroed {
  pub fn as_ptr(&self) -> *const u8 {
    self.ptr.as_ptr()
  }

  pub fn as_mut_ptr(&mut self) -> *mut u8 {
    self.ptr.as_ptr()
  }

  pub fn len(&self) -> usize {
    self.size
  }

  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn as_slice(&self) -> &[u8] {
    unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
  }

  pub fn as_mut_slice(&mut self) -> &mut [u8] {
    unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
  }
}

impl Drop for HeapZeroed {
  fn drop(&mut self) {
    unsafe { libc::free(self.ptr.as_ptr() as *mut c_void) }
  }
}

unsafe impl Send for HeapZeroed {}
unsafe impl Sync for HeapZeroed {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rounding_always_adds_a_full_line() {
    let expectations = [
      (0, 64),
      (1, 64),
      (63, 64),
      (64, 128),
      (65, 128),
      (127, 128),
      (128, 192),
      (4096, 4160),
    ];

    for (requested, expected) in expectations {
      let block = alloc_cacheline(requested);

      assert_eq!(block.len(), expected, "requested {requested}");
      assert_eq!(block.len() % CACHE_LINE, 0);
      assert!(block.len() > requested);
    }
  }

  #[test]
  fn test_cacheline_addresses_are_aligned() {
    let mut held = Vec::new();

    for i in 0..100 {
      let block = alloc_cacheline(i * 7 + 1);

      assert_eq!(block.as_ptr() as usize % CACHE_LINE, 0);

      // Keep every other block alive so the allocator cannot hand the
      // same address back each iteration.
      if i % 2 == 0 {
        held.push(block);
      }
    }
  }

  #[test]
  fn test_cacheline_contents_start_zeroed() {
    for requested in [0, 1, 64, 1000] {
      let block = alloc_cacheline(requested);

      assert!(block.as_slice().iter().all(|&b| b == 0));
    }
  }

  #[test]
  fn test_cacheline_region_is_writable() {
    let mut block = alloc_cacheline(256);

    for (i, byte) in block.as_mut_slice().iter_mut().enumerate() {
      *byte = i as u8;
    }

    assert_eq!(block.as_slice()[0], 0);
    assert_eq!(block.as_slice()[255], 255);
  }

  #[test]
  fn test_heap_zeroed_contents_and_size() {
    for requested in [1, 13, 512] {
      let block = alloc_zeroed(requested);

      assert_eq!(block.len(), requested);
      assert!(block.as_slice().iter().all(|&b| b == 0));
    }

    // Degenerate zero-size request still yields a usable region.
    let block = alloc_zeroed(0);
    assert_eq!(block.len(), 1);
    assert_eq!(block.as_slice()[0], 0);
  }
}
