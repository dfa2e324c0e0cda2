//! C ABI of the fully global aligner.
//!
//! Results are returned as heap-allocated, NUL-terminated strings in the
//! `score,aligned1,aligned2,rle` format. A null pointer is the only failure signal; the
//! reason is logged through the `log` facade. Every non-null result must be released
//! exactly once with [`free_alignment_string`].

use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

use eyre::{eyre, Result};
use log::warn;

use globalign_alignment_rs::{align, AlignmentError, Band, ScoreModel};

/// Fully global alignment of two NUL-terminated sequences.
///
/// Returns null if either sequence is null or contains symbols that aren't printable ASCII
/// (or are `-` / `,`), if `use_banding` is set with a non-positive `band_size`, or if the
/// end of the alignment grid is unreachable within the band.
///
/// # Safety
///
/// `s1` and `s2` must be null or point to NUL-terminated strings that stay valid and
/// unmodified for the duration of the call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn fully_global_alignment(
    s1: *const c_char,
    s2: *const c_char,
    match_score: c_int,
    mismatch_score: c_int,
    gap_open: c_int,
    gap_extend: c_int,
    use_banding: bool,
    band_size: c_int,
) -> *mut c_char {
    let result = catch_unwind(|| -> Result<CString> {
        // SAFETY: the caller guarantees that both pointers are null or valid C strings
        let (seq1, seq2) = unsafe { (sequence(s1, "s1")?, sequence(s2, "s2")?) };
        let model = ScoreModel::new(match_score, mismatch_score, gap_open, gap_extend);
        let alignment = align(seq1, seq2, model, band(use_banding, band_size)?)?;
        Ok(CString::new(alignment.to_string())?)
    });

    match result {
        Ok(Ok(serialized)) => serialized.into_raw(),
        Ok(Err(err)) => {
            warn!("Fully global alignment failed: {err:#}");
            ptr::null_mut()
        }
        Err(_) => {
            warn!("Fully global alignment panicked");
            ptr::null_mut()
        }
    }
}

/// Release a string returned by [`fully_global_alignment`]. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`fully_global_alignment`] that hasn't been
/// released yet.
#[no_mangle]
pub unsafe extern "C" fn free_alignment_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: the pointer was produced by `CString::into_raw` and is released only once
        drop(unsafe { CString::from_raw(ptr) });
    }
}

unsafe fn sequence<'a>(ptr: *const c_char, name: &str) -> Result<&'a [u8]> {
    if ptr.is_null() {
        return Err(eyre!("Sequence {name} is a null pointer"));
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

fn band(use_banding: bool, band_size: c_int) -> Result<Band> {
    if !use_banding {
        return Ok(Band::Full);
    }
    let half_width = usize::try_from(band_size).map_err(|_| AlignmentError::InvalidBand)?;
    Band::diagonal(half_width)
}
