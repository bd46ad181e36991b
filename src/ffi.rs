//! C-compatible binary call boundary.
//!
//! External orchestrators (CLI/web front ends, document loaders) drive the
//! core exclusively through this fixed contract: a process-wide engine
//! behind exported `extern "C"` functions, with results transferred as
//! sentinel-terminated linked lists and sized arrays.
//!
//! # Layouts
//!
//! - A search result is a chain of [`DocListNode`] records, each holding a
//!   32-bit signed document id and a pointer to the next node. The end of
//!   the real result is marked by a node whose id equals
//!   [`RESULT_SENTINEL`] (-1); even an empty result is a one-node chain
//!   holding only the sentinel. The chain is never null.
//! - A frequency ranking is a [`WordFrequencyVec`]: a pointer to a
//!   contiguous array of [`WordFrequency`] entries plus 32-bit size and
//!   capacity fields, capacity ≥ size. Consumers must iterate only up to
//!   `size`.
//!
//! # Ownership
//!
//! Every structured result is allocated here and owned by the caller on
//! return; [`free_doc_list`] and [`free_zipf_result`] must each be called
//! exactly once per returned value. Input buffers are borrowed for the
//! duration of a call only — the core copies whatever it retains.
//!
//! # Concurrency
//!
//! The engine singleton is guarded by a mutex, but the contract remains
//! single-threaded: at most one call affecting shared state in flight at a
//! time, serialized by the caller.

use std::ffi::{CStr, CString, c_char, c_int};
use std::mem::ManuallyDrop;
use std::ptr;

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::engine::SearchEngine;
use crate::index::posting::DocId;
use crate::zipf::csv::write_zipf_rows;

/// Reserved document id terminating every result chain.
pub const RESULT_SENTINEL: c_int = -1;

/// A node in a sentinel-terminated result chain.
#[repr(C)]
pub struct DocListNode {
    /// Document id, or [`RESULT_SENTINEL`] for the terminator node.
    pub doc_id: c_int,
    /// Next node, or null on the terminator.
    pub next: *mut DocListNode,
}

/// One (term, frequency) entry in a frequency ranking.
#[repr(C)]
pub struct WordFrequency {
    /// NUL-terminated term text, owned by the ranking.
    pub word: *mut c_char,
    /// Total occurrences across the corpus.
    pub frequency: c_int,
}

/// A sized array of [`WordFrequency`] entries.
#[repr(C)]
pub struct WordFrequencyVec {
    /// Pointer to the first entry, or null when size is 0.
    pub data: *mut WordFrequency,
    /// Number of valid entries.
    pub size: c_int,
    /// Allocated capacity, always ≥ size.
    pub capacity: c_int,
}

lazy_static! {
    static ref ENGINE: Mutex<SearchEngine> = Mutex::new(SearchEngine::new());
}

fn clamp_count(count: u64) -> c_int {
    count.min(c_int::MAX as u64) as c_int
}

/// Build a caller-owned sentinel-terminated chain from ascending doc ids.
fn into_doc_list(doc_ids: &[DocId]) -> *mut DocListNode {
    let mut head = Box::into_raw(Box::new(DocListNode {
        doc_id: RESULT_SENTINEL,
        next: ptr::null_mut(),
    }));

    for &doc_id in doc_ids.iter().rev() {
        head = Box::into_raw(Box::new(DocListNode {
            doc_id: doc_id as c_int,
            next: head,
        }));
    }

    head
}

/// Initialize (or re-initialize) the inverted index to an empty state.
///
/// Idempotent; safe to call when the index is already empty.
#[unsafe(no_mangle)]
pub extern "C" fn init_inverted_index() {
    ENGINE.lock().reset_index();
}

/// Release all postings, returning the index to its uninitialized state.
///
/// The index may be re-initialized afterwards with
/// [`init_inverted_index`] and behaves identically to a fresh process.
#[unsafe(no_mangle)]
pub extern "C" fn cleanup_inverted_index() {
    ENGINE.lock().reset_index();
}

/// Insert one pre-normalized term occurrence for `doc_id`.
///
/// Negative doc ids are reserved for the result sentinel and are rejected.
///
/// # Safety
///
/// `term` must be a valid NUL-terminated string or null (null is a no-op).
/// The buffer is borrowed only for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn add_to_inverted_index(term: *const c_char, doc_id: c_int) {
    if term.is_null() || doc_id < 0 {
        return;
    }
    let term = unsafe { CStr::from_ptr(term) }.to_string_lossy();
    ENGINE.lock().index_mut().insert(&term, doc_id as DocId);
}

/// Normalize `text` and add `doc_id` to the posting list of every distinct
/// term it contains.
///
/// Negative doc ids are reserved for the result sentinel and are rejected.
///
/// # Safety
///
/// `text` must be a valid NUL-terminated string or null (null is a no-op).
/// The buffer is borrowed only for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn build_index_for_document(text: *const c_char, doc_id: c_int) {
    if text.is_null() || doc_id < 0 {
        return;
    }
    let content = unsafe { CStr::from_ptr(text) }.to_string_lossy();
    // Analysis over an already-compiled pipeline cannot fail; a void
    // C contract has nowhere to report errors anyway.
    let _ = ENGINE.lock().ingest_document(&content, doc_id as DocId);
}

/// Like [`build_index_for_document`], additionally counting every term
/// occurrence (not deduplicated) into the frequency table in the same
/// pass.
///
/// # Safety
///
/// Same contract as [`build_index_for_document`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn build_index_for_document_with_zipf(text: *const c_char, doc_id: c_int) {
    if text.is_null() || doc_id < 0 {
        return;
    }
    let content = unsafe { CStr::from_ptr(text) }.to_string_lossy();
    let _ = ENGINE
        .lock()
        .ingest_document_with_frequency(&content, doc_id as DocId);
}

/// Evaluate a boolean query and return the matching document ids as a
/// sentinel-terminated chain in ascending order.
///
/// Always returns a valid, non-null chain; an empty result (including the
/// empty or negative-only query, and a null `query`) is a single sentinel
/// node. The caller owns the chain and must release it exactly once via
/// [`free_doc_list`].
///
/// # Safety
///
/// `query` must be a valid NUL-terminated string or null. The buffer is
/// borrowed only for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boolean_search(query: *const c_char) -> *mut DocListNode {
    if query.is_null() {
        return into_doc_list(&[]);
    }
    let query = unsafe { CStr::from_ptr(query) }.to_string_lossy();
    let doc_ids = ENGINE.lock().search(&query).unwrap_or_default();
    into_doc_list(&doc_ids)
}

/// Release a result chain returned by [`boolean_search`], sentinel
/// included.
///
/// # Safety
///
/// `head` must be a chain returned by [`boolean_search`] that has not
/// been freed yet, or null (a no-op). Releasing twice or using the chain
/// afterwards is undefined behavior.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_doc_list(head: *mut DocListNode) {
    let mut current = head;
    while !current.is_null() {
        let node = unsafe { Box::from_raw(current) };
        current = node.next;
    }
}

/// Initialize (or re-initialize) the frequency table to an empty state.
///
/// Idempotent; safe to call when the table is already empty.
#[unsafe(no_mangle)]
pub extern "C" fn init_hash_table() {
    ENGINE.lock().reset_frequencies();
}

/// Increment the occurrence count of one pre-normalized term by one.
///
/// Empty terms are ignored.
///
/// # Safety
///
/// `word` must be a valid NUL-terminated string or null (null is a
/// no-op). The buffer is borrowed only for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn add_word_frequency(word: *const c_char) {
    if word.is_null() {
        return;
    }
    let word = unsafe { CStr::from_ptr(word) }.to_string_lossy();
    ENGINE.lock().add_term_frequency(&word);
}

/// Produce the Zipf ranking of every term ever counted: frequency
/// descending, ties by ascending term order.
///
/// The returned array is owned by the caller and must be released exactly
/// once via [`free_zipf_result`]. An empty table yields size 0 with a
/// null data pointer.
#[unsafe(no_mangle)]
pub extern "C" fn analyze_zipf() -> WordFrequencyVec {
    let report = ENGINE.lock().analyze_zipf();

    let mut entries: Vec<WordFrequency> = Vec::with_capacity(report.len());
    for entry in report.entries() {
        // Terms that crossed this boundary never contain interior NULs.
        if let Ok(word) = CString::new(entry.term.as_str()) {
            entries.push(WordFrequency {
                word: word.into_raw(),
                frequency: clamp_count(entry.frequency),
            });
        }
    }

    if entries.is_empty() {
        return WordFrequencyVec {
            data: ptr::null_mut(),
            size: 0,
            capacity: 0,
        };
    }

    let mut entries = ManuallyDrop::new(entries);
    WordFrequencyVec {
        data: entries.as_mut_ptr(),
        size: entries.len() as c_int,
        capacity: entries.capacity() as c_int,
    }
}

/// Serialize a frequency ranking to a CSV file: header `rank,freq,word`,
/// then one `<1-based rank>,<frequency>,<term>` row per entry in the
/// given order. The sequence is not re-sorted.
///
/// # Safety
///
/// `frequencies` must point to a value returned by [`analyze_zipf`] that
/// has not been freed, and `filename` must be a valid NUL-terminated
/// path; either being null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn save_zipf_to_csv(
    frequencies: *const WordFrequencyVec,
    filename: *const c_char,
) {
    if frequencies.is_null() || filename.is_null() {
        return;
    }

    let vec = unsafe { &*frequencies };
    let entries: &[WordFrequency] = if vec.data.is_null() || vec.size <= 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(vec.data, vec.size as usize) }
    };

    let rows: Vec<(String, u64)> = entries
        .iter()
        .filter(|e| !e.word.is_null())
        .map(|e| {
            let term = unsafe { CStr::from_ptr(e.word) }.to_string_lossy().into_owned();
            (term, e.frequency.max(0) as u64)
        })
        .collect();

    let path = unsafe { CStr::from_ptr(filename) }.to_string_lossy().into_owned();
    if let Err(e) = write_zipf_rows(&path, rows.iter().map(|(t, f)| (t.as_str(), *f))) {
        eprintln!("Error: could not write Zipf data to {path}: {e}");
    }
}

/// Release a frequency ranking returned by [`analyze_zipf`], including
/// the term strings it owns.
///
/// # Safety
///
/// `frequencies` must be a value returned by [`analyze_zipf`] that has
/// not been freed yet. Releasing twice or reading entries afterwards is
/// undefined behavior.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_zipf_result(frequencies: WordFrequencyVec) {
    if frequencies.data.is_null() {
        return;
    }

    let entries = unsafe {
        Vec::from_raw_parts(
            frequencies.data,
            frequencies.size.max(0) as usize,
            frequencies.capacity.max(0) as usize,
        )
    };
    for entry in entries {
        if !entry.word.is_null() {
            drop(unsafe { CString::from_raw(entry.word) });
        }
    }
}
