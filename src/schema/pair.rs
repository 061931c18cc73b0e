use serde::Serialize;
use std::fmt;

/// A whitespace-delimited word from the source text, kept verbatim.
pub type Token = String;

/// An ordered pair of consecutive tokens — the lookup key of the chain.
///
/// Ordering is lexicographic on the first token, then the second, which gives
/// the generator a stable key sequence to sample the starting pair from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    pub first: Token,
    pub second: Token,
}

impl PairKey {
    pub fn new(first: impl Into<Token>, second: impl Into<Token>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The key reached after emitting `next` from this key: `(second, next)`.
    pub fn advance(&self, next: &str) -> PairKey {
        PairKey::new(self.second.clone(), next)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.first, self.second)
    }
}

/// What was observed to follow a pair in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Successor {
    /// A following word.
    Word(Token),
    /// The pair sat at the very end of the text; nothing follows it.
    End,
}

impl Successor {
    pub fn word(token: impl Into<Token>) -> Self {
        Successor::Word(token.into())
    }

    /// The following word, or `None` for the end-marker.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Successor::Word(w) => Some(w),
            Successor::End => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Successor::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_keys_order_lexicographically() {
        let mut keys = vec![
            PairKey::new("there", "mary"),
            PairKey::new("hi", "there"),
            PairKey::new("there", "juanita"),
            PairKey::new("mary", "hi"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                PairKey::new("hi", "there"),
                PairKey::new("mary", "hi"),
                PairKey::new("there", "juanita"),
                PairKey::new("there", "mary"),
            ]
        );
    }

    #[test]
    fn advance_shifts_window() {
        let key = PairKey::new("hi", "there");
        assert_eq!(key.advance("mary"), PairKey::new("there", "mary"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(PairKey::new("a", "b"), PairKey::new("a", "b"));
        assert_ne!(PairKey::new("a", "b"), PairKey::new("b", "a"));
    }

    #[test]
    fn successor_accessors() {
        assert_eq!(Successor::word("mary").as_word(), Some("mary"));
        assert_eq!(Successor::End.as_word(), None);
        assert!(Successor::End.is_end());
        assert!(!Successor::word("x").is_end());
    }

    #[test]
    fn display_quotes_tokens() {
        assert_eq!(PairKey::new("hi", "there").to_string(), "(\"hi\", \"there\")");
    }
}
