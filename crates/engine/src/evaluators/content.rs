// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content-match evaluator.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use vet_core::{EventKind, EventSink, EventState, MatchTest};

/// Bounded per-line length.
pub const MATCH_LINE_LENGTH: usize = 512;

/// `check_content_match`: scans new bytes since `readpos`,
/// line by line, evaluating every match/match-ignore rule against each
/// complete line, then posts one `Content` event for the whole pass.
///
/// Returns the updated `readpos`. Opening the file is fallible; a failure
/// only logs and aborts without posting an event — the
/// caller's `readpos` is returned unchanged.
pub fn check_content_match(
    path: &Path,
    readpos: u64,
    size: u64,
    inode_changed: bool,
    matches: &[MatchTest],
    match_ignores: &[MatchTest],
    sink: &dyn EventSink,
    service: &str,
) -> u64 {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::debug!(service, path = %path.display(), %err, "cannot open file for content match");
            return readpos;
        }
    };

    let is_proc = path.starts_with("/proc");
    let mut pos = if is_proc {
        0
    } else if inode_changed || readpos > size {
        0
    } else {
        readpos
    };

    if !is_proc && pos == size {
        post_content_result(matches, match_ignores, sink, service);
        return pos;
    }

    loop {
        if pos >= size {
            break;
        }
        if file.seek(SeekFrom::Start(pos)).is_err() {
            break;
        }

        let mut buf = vec![0u8; MATCH_LINE_LENGTH - 1];
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        buf.truncate(n);

        let newline_at = buf.iter().position(|&b| b == b'\n');

        match newline_at {
            None if n < MATCH_LINE_LENGTH - 1 => {
                // incomplete line; writer hasn't finished, stop without advancing.
                break;
            }
            None => {
                // oversize line: the already-read chunk is still evaluated as a
                // (truncated) line; only the overflow past it is discarded.
                let truncated = String::from_utf8_lossy(&buf[..n]).into_owned();
                evaluate_line(&truncated, matches, match_ignores);

                let mut discard_len = n;
                loop {
                    let mut byte = [0u8; 1];
                    match file.read(&mut byte) {
                        Ok(0) => break,
                        Ok(_) => {
                            discard_len += 1;
                            if byte[0] == b'\n' {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                pos += discard_len as u64;
            }
            Some(idx) => {
                let line = String::from_utf8_lossy(&buf[..idx]);
                evaluate_line(&line, matches, match_ignores);
                pos += (idx + 1) as u64;
            }
        }
    }

    post_content_result(matches, match_ignores, sink, service);
    pos
}

fn evaluate_line(line: &str, matches: &[MatchTest], match_ignores: &[MatchTest]) {
    if match_ignores.iter().any(|m| m.hits(line)) {
        return;
    }
    for m in matches {
        if m.hits(line) {
            let mut log = m.log.borrow_mut();
            let entry = log.get_or_insert_with(String::new);
            if entry.len() < MATCH_LINE_LENGTH {
                entry.push_str(line);
                entry.push('\n');
                if entry.len() >= MATCH_LINE_LENGTH {
                    entry.truncate(MATCH_LINE_LENGTH);
                    entry.push_str("...\n");
                }
            }
        }
    }
}

/// Always runs, even when no new bytes were read, so a prior match error can
/// clear.
fn post_content_result(matches: &[MatchTest], _match_ignores: &[MatchTest], sink: &dyn EventSink, service: &str) {
    for m in matches {
        let mut log = m.log.borrow_mut();
        match log.take() {
            Some(text) => {
                sink.post(service, EventKind::Content, EventState::Changed, Some(&m.action), &text);
            }
            None => {
                sink.post(service, EventKind::Content, EventState::ChangedNot, None, "content match check succeeded");
            }
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
