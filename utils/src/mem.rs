//! Mem related usefull wrappers and utility functions
//!
//! The raw pointer routines (`memmove`, `memcpy`, ...) work on bare addresses. The slice
//! routines check bounds and then hand off to them.
//!
//! All the safe routines panic if an index or length runs past the end of the buffer.

use core::ptr::{read, write};

/// Moves `len` bytes from `src` to `dst`, handling overlaps.
///
/// When `dst` starts inside `[src, src + len)` the bytes are copied from the end backward, so
/// every source byte is read before it gets overwritten. Returns `dst`.
///
/// # Safety
/// Both ranges must be valid for `len` bytes.
pub unsafe fn memmove(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    if core::ptr::eq(src, dst) || len == 0 {
        return dst;
    }

    let (src_addr, dst_addr) = (src.addr(), dst.addr());
    if dst_addr > src_addr && dst_addr < src_addr + len {
        unsafe {
            for i in (0..len).rev() {
                write(dst.add(i), read(src.add(i)));
            }
        }
    } else {
        unsafe { memcpy(dst, src, len) };
    }

    dst
}

/// Wrapper to memcpy some region of memory to another. Returns `dst`.
///
/// # Safety
/// Both ranges must be valid for `len` bytes. The result is undefined if they overlap.
pub unsafe fn memcpy(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    unsafe {
        for i in 0..len {
            write(dst.add(i), read(src.add(i)));
        }
    };

    dst
}

/// Wrapper to memset some region of memory to some value. Returns `ptr`.
///
/// # Safety
/// `ptr` must be valid for `len` bytes.
pub unsafe fn memset(ptr: *mut u8, value: u8, len: usize) -> *mut u8 {
    unsafe {
        for i in 0..len {
            write(ptr.add(i), value);
        }
    };

    ptr
}

/// Zero some region of memory. Returns `ptr`.
///
/// # Safety
/// `ptr` must be valid for `len` bytes.
pub unsafe fn memzero(ptr: *mut u8, len: usize) -> *mut u8 {
    unsafe { memset(ptr, 0, len) }
}

/// Reverse the byte order of some region of memory in place. Returns `ptr`.
///
/// # Safety
/// `ptr` must be valid for `len` bytes.
pub unsafe fn memrev(ptr: *mut u8, len: usize) -> *mut u8 {
    if len < 2 {
        return ptr;
    }

    let (mut head, mut tail) = (0, len - 1);
    while head < tail {
        unsafe { core::ptr::swap(ptr.add(head), ptr.add(tail)) };
        head += 1;
        tail -= 1;
    }

    ptr
}

/// Set the byte at `index` to `value`
#[inline]
pub fn set_value(buf: &mut [u8], index: usize, value: u8) {
    buf[index] = value;
}

/// Set the byte at `index` to zero
#[inline]
pub fn clear_value(buf: &mut [u8], index: usize) {
    set_value(buf, index, 0);
}

/// Read the byte at `index`
#[inline]
pub fn get_value(buf: &[u8], index: usize) -> u8 {
    buf[index]
}

/// Set the first `size` bytes to `value`
pub fn set_all(buf: &mut [u8], value: u8, size: usize) {
    for index in 0..size {
        set_value(buf, index, value);
    }
}

/// Set the first `size` bytes to zero
pub fn clear_all(buf: &mut [u8], size: usize) {
    set_all(buf, 0, size);
}

/// Move `length` bytes inside `buf` from offset `src` to offset `dst`. The ranges may overlap.
///
/// Returns the destination region.
pub fn mem_move(buf: &mut [u8], src: usize, dst: usize, length: usize) -> &mut [u8] {
    assert!(
        src.checked_add(length).is_some_and(|end| end <= buf.len()),
        "source range {src}+{length} out of bounds for buffer of {}",
        buf.len()
    );
    assert!(
        dst.checked_add(length).is_some_and(|end| end <= buf.len()),
        "destination range {dst}+{length} out of bounds for buffer of {}",
        buf.len()
    );

    let base = buf.as_mut_ptr();
    unsafe { memmove(base.add(dst), base.add(src), length) };

    &mut buf[dst..dst + length]
}

/// Copy the first `length` bytes of `src` into `dst`. Returns the destination region.
///
/// The borrows can't alias, so the undefined overlap case of [`memcpy`] can't happen here.
pub fn mem_copy<'a>(src: &[u8], dst: &'a mut [u8], length: usize) -> &'a mut [u8] {
    let (src, dst) = (&src[..length], &mut dst[..length]);

    unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), length) };

    dst
}

/// Set the first `length` bytes to `value`. Returns the filled region.
pub fn mem_set(buf: &mut [u8], length: usize, value: u8) -> &mut [u8] {
    let region = &mut buf[..length];

    unsafe { memset(region.as_mut_ptr(), value, length) };

    region
}

/// Zero the first `length` bytes. Returns the zeroed region.
pub fn mem_zero(buf: &mut [u8], length: usize) -> &mut [u8] {
    let region = &mut buf[..length];

    unsafe { memzero(region.as_mut_ptr(), length) };

    region
}

/// Reverse the first `length` bytes in place. Returns the reversed region.
pub fn mem_reverse(buf: &mut [u8], length: usize) -> &mut [u8] {
    let region = &mut buf[..length];

    unsafe { memrev(region.as_mut_ptr(), length) };

    region
}
