//! # hotbox - Small Systems Utilities
//!
//! This crate is a minimal utility layer meant to be linked into larger
//! systems components. It bundles the handful of primitives those
//! components all end up needing:
//!
//! - **cache-line allocation** — zero-filled heap regions aligned and
//!   sized to the cache line
//! - **bit reversal** — full end-to-end bit mirroring of 16/32/64-bit
//!   words via a precomputed byte table
//! - **type aliases** — one canonical name per fixed-width integer and
//!   atomic, checked for size at compile time
//! - **panic exit** — flushed diagnostics and an unconditional
//!   terminate-with-status-1 error path
//!
//! ## Overview
//!
//! ```text
//!   Cache-line allocation:
//!
//!   request: alloc_cacheline(100)
//!
//!   ┌────────────────────────────────┬───────────────────────────────┐
//!   │     100 bytes requested        │    padding up to 128          │
//!   └────────────────────────────────┴───────────────────────────────┘
//!   ▲                                                                ▲
//!   │                                                                │
//!   address % 64 == 0                               length % 64 == 0,
//!                                                   all bytes zeroed
//!
//!   Rounding always adds one extra line: alloc_cacheline(64) returns a
//!   128-byte region. Callers use the slack for headers and sentinels.
//! ```
//!
//! ```text
//!   Bit reversal (32-bit example):
//!
//!   input   b31 b30 ... b1 b0
//!            │               │
//!            └───────┬───────┘   per-byte mirror (BIT_MIRROR table)
//!                    │         + whole-word byte swap
//!            ┌───────┴───────┐
//!   output  b0 b1 ... b30 b31
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   hotbox
//!   ├── cacheline  - CACHE_LINE/BLOCK_SIZE/PAGE_SIZE constants,
//!   │                alloc_cacheline, alloc_zeroed
//!   ├── bitrev     - BIT_MIRROR table, reverse_bits16/32/64
//!   ├── types      - s8..s64, u8..u64, as8..as64, au8..au64 aliases
//!   └── panic      - sync_write, panic_exit, fatal! macro
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hotbox::{alloc_cacheline, reverse_bits32, CACHE_LINE};
//!
//! let mut ring = alloc_cacheline(4096);
//! assert_eq!(ring.as_ptr() as usize % CACHE_LINE, 0);
//! ring.as_mut_slice()[0] = 1;
//!
//! assert_eq!(reverse_bits32(0x0000_0001), 0x8000_0000);
//! ```
//!
//! ## Error Handling
//!
//! Nothing in this crate returns a `Result`. The two possible failures,
//! allocation exhaustion and caller-invoked fatals, both take the same
//! path: flush, print to stderr, `exit(1)`. Components embedding this
//! crate treat every operation as all-or-nothing.
//!
//! ## Limitations
//!
//! - **Not a general-purpose allocator**: no free-list, no resizing, no
//!   reuse. A region is released only when its owning handle is dropped.
//! - **Unix-flavored**: allocation goes through `libc`
//!   (`aligned_alloc`/`calloc`/`free`).
//!
//! ## Safety
//!
//! The allocation internals deal in raw C-allocator memory, but the
//! handles they return (`CacheAligned`, `HeapZeroed`) are safe to use:
//! exclusive ownership, slice access, release on drop.

pub mod bitrev;
pub mod cacheline;
pub mod panic;
pub mod types;

pub use bitrev::{BIT_MIRROR, reverse_bits16, reverse_bits32, reverse_bits64};
pub use cacheline::{
  BLOCK_SIZE, CACHE_LINE, CacheAligned, HeapZeroed, PAGE_SIZE, alloc_cacheline, alloc_zeroed,
};
pub use panic::{panic_exit, sync_write};
