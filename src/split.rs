//! Size-bounded packing at paragraph and sentence granularity.
//!
//! Both passes share one greedy fold: accumulate units into a buffer and
//! flush it when the next unit would push the buffer past the budget.
//! Nothing is ever dropped; a buffer that closes short of `min_chunk_size`
//! is still flushed so chunks stay in document order.

use crate::config::ChunkerConfig;

/// Character count. The engine measures size in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Pack one heading segment into pieces of at most `max_chunk_size`
/// characters along blank-line paragraph boundaries.
///
/// A segment already within budget is emitted whole. A single paragraph
/// larger than the budget passes through over-budget; the caller hands it
/// to [`pack_sentences`] for the finer pass.
pub fn pack_paragraphs(segment: &str, config: &ChunkerConfig) -> Vec<String> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Vec::new();
    }
    if char_len(segment) <= config.max_chunk_size {
        return vec![segment.to_string()];
    }

    let mut pieces = Vec::new();
    let mut buf = String::new();
    let mut buf_chars = 0usize;

    for paragraph in segment.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let para_chars = char_len(paragraph);

        // blank-line separator counts two characters
        if !buf.is_empty() && buf_chars + 2 + para_chars > config.max_chunk_size {
            pieces.push(std::mem::take(&mut buf));
            buf_chars = 0;
        }
        if buf.is_empty() {
            buf.push_str(paragraph);
            buf_chars = para_chars;
        } else {
            buf.push_str("\n\n");
            buf.push_str(paragraph);
            buf_chars += 2 + para_chars;
        }
    }
    if !buf.is_empty() {
        pieces.push(buf);
    }

    pieces
}

/// Split an over-budget piece along sentence boundaries with the same
/// greedy fold, joining sentences with single spaces.
///
/// Sentences are the atomic unit: a single sentence longer than the budget
/// is emitted whole and oversized, never cut mid-word.
///
/// When a flush opens a fresh buffer, up to `overlap_size` characters of
/// the flushed buffer's tail are carried over (snapped forward to a word
/// boundary) so adjacent chunks share context across the cut. The carry is
/// skipped when the upcoming sentence is itself longer than `overlap_size`
/// or when carrying would push the new buffer past `max_chunk_size`.
/// Overlap is best-effort, not a guarantee.
pub fn pack_sentences(content: &str, config: &ChunkerConfig) -> Vec<String> {
    let sentences = split_sentences(content, &config.sentence_terminators);

    let mut pieces: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut buf_chars = 0usize;

    for sentence in sentences {
        let sent_chars = char_len(sentence);

        if !buf.is_empty() && buf_chars + 1 + sent_chars > config.max_chunk_size {
            let carry = overlap_tail(&buf, sent_chars, config);
            pieces.push(std::mem::take(&mut buf));
            buf = carry.unwrap_or_default();
            buf_chars = char_len(&buf);
        }
        if buf.is_empty() {
            buf.push_str(sentence);
            buf_chars = sent_chars;
        } else {
            buf.push(' ');
            buf.push_str(sentence);
            buf_chars += 1 + sent_chars;
        }
    }
    if !buf.is_empty() {
        pieces.push(buf);
    }

    pieces
}

/// Split text at sentence boundaries: a terminator character followed by
/// whitespace. The terminator stays with its sentence and the whitespace
/// run between sentences is consumed. Text with no boundary is a single
/// sentence.
pub fn split_sentences<'a>(text: &'a str, terminators: &[char]) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if !terminators.contains(&c) {
            continue;
        }
        let Some(&(_, next)) = iter.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }
        let sentence = text[start..i + c.len_utf8()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = text.len();
        while let Some(&(j, w)) = iter.peek() {
            if w.is_whitespace() {
                iter.next();
            } else {
                start = j;
                break;
            }
        }
    }

    let last = text[start..].trim();
    if !last.is_empty() {
        sentences.push(last);
    }
    sentences
}

/// Tail of the flushed buffer to carry into the next one, or `None` when
/// overlap is disabled, the next sentence already exceeds the overlap
/// budget, or carrying would not leave room for the sentence.
fn overlap_tail(buf: &str, next_sent_chars: usize, config: &ChunkerConfig) -> Option<String> {
    if config.overlap_size == 0 || next_sent_chars > config.overlap_size {
        return None;
    }
    let tail = word_aligned_tail(buf, config.overlap_size);
    if tail.is_empty() {
        return None;
    }
    // +1 for the joining space
    if char_len(tail) + 1 + next_sent_chars > config.max_chunk_size {
        return None;
    }
    Some(tail.to_string())
}

/// Longest suffix of `s` at most `max_chars` characters long that begins
/// just after a whitespace character, so a carried tail never opens
/// mid-word. Returns `""` when no word boundary falls inside the window.
fn word_aligned_tail(s: &str, max_chars: usize) -> &str {
    let total = char_len(s);
    if total <= max_chars {
        return s.trim_start();
    }
    let cut = s
        .char_indices()
        .nth(total - max_chars)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    match s[cut..].find(char::is_whitespace) {
        Some(ws) => s[cut + ws..].trim_start(),
        None => "",
    }
}
