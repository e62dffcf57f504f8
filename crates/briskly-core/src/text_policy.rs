//! Whitespace tokenization and chunk assembly policies.

use heapless::String;

/// Capacity of a staged chunk, in bytes.
pub const CHUNK_TEXT_BYTES: usize = 192;

/// Display text of one chunk, tokens re-joined with single spaces.
pub type ChunkText = String<CHUNK_TEXT_BYTES>;

/// Number of whitespace-delimited tokens in `text`.
pub fn count_words(text: &str) -> u32 {
    let mut count = 0u32;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count = count.saturating_add(1);
        cursor = next_cursor;
    }

    count
}

/// Number of chunks a `word_count`-word text splits into; the last chunk may
/// hold fewer than `chunk_size` words.
pub fn chunk_count(word_count: u32, chunk_size: u16) -> u32 {
    word_count.div_ceil(u32::from(chunk_size.max(1)))
}

/// Next token at or after byte offset `cursor`, with the offset past it.
pub fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let remainder = text.get(cursor..)?;
    let start = cursor + remainder.find(|ch: char| !ch.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);

    Some((&text[start..end], end))
}

/// Assembles the chunk at `index` (zero-based) from `text`, or `None` when
/// the index is past the last chunk.
pub fn chunk_text_at(text: &str, index: u32, chunk_size: u16) -> Option<ChunkText> {
    let span = u64::from(chunk_size.max(1));
    let first = u64::from(index) * span;

    let mut out = ChunkText::new();
    let mut word_index = 0u64;
    let mut staged = 0u64;
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        cursor = next_cursor;
        if word_index < first {
            word_index += 1;
            continue;
        }

        word_index += 1;
        staged += 1;
        if !push_word(&mut out, word) || staged == span {
            break;
        }
    }

    (staged > 0).then_some(out)
}

/// Appends `word` to `out`, space-separated. Returns `false` once capacity
/// is exhausted; an oversized word is cut at a char boundary, not dropped.
fn push_word(out: &mut ChunkText, word: &str) -> bool {
    let restore = out.len();
    if !out.is_empty() && out.push(' ').is_err() {
        return false;
    }

    if out.push_str(word).is_ok() {
        return true;
    }

    for ch in word.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }

    if out.len() <= restore + 1 {
        // Not even the first char fit; drop the dangling separator.
        out.truncate(restore);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_mixed_whitespace() {
        assert_eq!(count_words("one  two\nthree\t four "), 4);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn chunk_count_rounds_up() {
        assert_eq!(chunk_count(0, 4), 0);
        assert_eq!(chunk_count(4, 4), 1);
        assert_eq!(chunk_count(5, 4), 2);
        assert_eq!(chunk_count(8, 4), 2);
    }

    #[test]
    fn chunks_rejoin_with_single_spaces() {
        let text = "one   two\nthree  four five";
        let head = chunk_text_at(text, 0, 4).unwrap();
        let tail = chunk_text_at(text, 1, 4).unwrap();

        assert_eq!(head.as_str(), "one two three four");
        assert_eq!(tail.as_str(), "five");
        assert!(chunk_text_at(text, 2, 4).is_none());
    }

    #[test]
    fn chunk_tokens_reproduce_the_original_sequence() {
        let text = "alpha beta gamma delta epsilon zeta eta";
        let mut rebuilt: ChunkText = ChunkText::new();

        let mut index = 0u32;
        while let Some(chunk) = chunk_text_at(text, index, 4) {
            if !rebuilt.is_empty() {
                rebuilt.push(' ').unwrap();
            }
            rebuilt.push_str(chunk.as_str()).unwrap();
            index += 1;
        }

        assert_eq!(index, 2);
        assert_eq!(rebuilt.as_str(), text);
    }

    #[test]
    fn oversized_word_is_cut_at_capacity() {
        let bytes = [b'a'; CHUNK_TEXT_BYTES + 40];
        let word = core::str::from_utf8(&bytes).unwrap();
        let chunk = chunk_text_at(word, 0, 4).unwrap();

        assert_eq!(chunk.len(), CHUNK_TEXT_BYTES);
        assert!(chunk.as_str().chars().all(|ch| ch == 'a'));
    }
}
