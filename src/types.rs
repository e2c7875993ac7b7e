//! Canonical fixed-width integer and atomic-integer names.
//!
//! These aliases give the rest of a codebase a single, uniform vocabulary
//! for sized integers (`s8`/`u8` ... `s64`/`u64`) and their atomic
//! counterparts (`as8`/`au8` ... `as64`/`au64`). Each alias maps straight
//! onto the std type of the same width; no wrapper, no reinterpretation.
//!
//! The atomic aliases carry exactly the std atomic semantics — load, store,
//! compare-and-swap, fetch-and-add — and nothing more. Memory ordering is
//! chosen by the caller at every call site.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::Ordering;
//! use hotbox::types::{au32, s64};
//!
//! let counter = au32::new(0);
//! counter.fetch_add(1, Ordering::Relaxed);
//!
//! let wide: s64 = -1;
//! assert_eq!(wide as u8, 0xFF);
//! ```

#![allow(non_camel_case_types)]

use std::mem::size_of;
use std::sync::atomic::{
  AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicU8, AtomicU16, AtomicU32, AtomicU64,
};

pub type s8 = i8;
pub type s16 = i16;
pub type s32 = i32;
pub type s64 = i64;
pub type u8 = std::primitive::u8;
pub type u16 = std::primitive::u16;
pub type u32 = std::primitive::u32;
pub type u64 = std::primitive::u64;

pub type as8 = AtomicI8;
pub type as16 = AtomicI16;
pub type as32 = AtomicI32;
pub type as64 = AtomicI64;
pub type au8 = AtomicU8;
pub type au16 = AtomicU16;
pub type au32 = AtomicU32;
pub type au64 = AtomicU64;

const _: () = assert!(size_of::<s8>() == 1, "size_of(s8)");
const _: () = assert!(size_of::<s16>() == 2, "size_of(s16)");
const _: () = assert!(size_of::<s32>() == 4, "size_of(s32)");
const _: () = assert!(size_of::<s64>() == 8, "size_of(s64)");
const _: () = assert!(size_of::<u8>() == 1, "size_of(u8)");
const _: () = assert!(size_of::<u16>() == 2, "size_of(u16)");
const _: () = assert!(size_of::<u32>() == 4, "size_of(u32)");
const _: () = assert!(size_of::<u64>() == 8, "size_of(u64)");

const _: () = assert!(size_of::<as8>() == 1, "size_of(as8)");
const _: () = assert!(size_of::<as16>() == 2, "size_of(as16)");
const _: () = assert!(size_of::<as32>() == 4, "size_of(as32)");
const _: () = assert!(size_of::<as64>() == 8, "size_of(as64)");
const _: () = assert!(size_of::<au8>() == 1, "size_of(au8)");
const _: () = assert!(size_of::<au16>() == 2, "size_of(au16)");
const _: () = assert!(size_of::<au32>() == 4, "size_of(au32)");
const _: () = assert!(size_of::<au64>() == 8, "size_of(au64)");
