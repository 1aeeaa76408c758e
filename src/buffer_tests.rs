//! Unit tests for the token buffer module

#[cfg(test)]
mod tests {
    use crate::buffer::TokenBuffer;

    #[test]
    fn test_zero_threshold_flushes_every_fragment() {
        let mut buffer = TokenBuffer::new(0);

        assert!(buffer.push("Hel"));
        assert_eq!(buffer.drain(), "Hel");
        assert!(buffer.push("lo"));
        assert_eq!(buffer.drain(), "lo");
    }

    #[test]
    fn test_threshold_accumulates_fragments() {
        let mut buffer = TokenBuffer::new(3);

        assert!(!buffer.push("a"));
        assert!(!buffer.push("b"));
        assert!(buffer.push("c"));
        assert_eq!(buffer.drain(), "abc");
    }

    #[test]
    fn test_drain_resets_threshold_counting() {
        let mut buffer = TokenBuffer::new(2);

        buffer.push("x");
        buffer.push("y");
        buffer.drain();

        assert!(!buffer.push("z"));
        assert_eq!(buffer.drain(), "z");
    }

    #[test]
    fn test_empty_fragment_is_noop() {
        let mut buffer = TokenBuffer::new(2);

        assert!(!buffer.push(""));
        assert!(!buffer.push("a"));
        assert!(!buffer.push(""));
        assert!(buffer.push("b"));
        assert_eq!(buffer.drain(), "ab");
    }

    #[test]
    fn test_drain_without_pushes_is_empty() {
        let mut buffer = TokenBuffer::new(5);

        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), "");
    }

    #[test]
    fn test_round_trip_preserves_all_fragments_in_order() {
        let fragments = ["The", " quick", "", " brown", " fox", " jumps"];
        let mut buffer = TokenBuffer::new(2);

        let mut drained = String::new();
        for fragment in fragments {
            if buffer.push(fragment) {
                drained.push_str(&buffer.drain());
            }
        }
        // Final drain picks up the partial chunk
        drained.push_str(&buffer.drain());

        assert_eq!(drained, fragments.concat());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_pushes_never_overwrite_unflushed_content() {
        let mut buffer = TokenBuffer::new(1);

        // Threshold met, but no drain yet; further pushes must append.
        assert!(buffer.push("a"));
        assert!(buffer.push("b"));
        assert_eq!(buffer.drain(), "ab");
    }

    #[test]
    fn test_multibyte_fragments_survive() {
        let mut buffer = TokenBuffer::new(0);

        buffer.push("héllo");
        assert_eq!(buffer.drain(), "héllo");
    }
}
