use rand::Rng;

/// A non-empty list of upper-case words to spell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Return `None` if `words` contains no usable word.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(WordList { words })
        }
    }

    /// Parse newline-delimited text: lines are trimmed, blank lines skipped, words upper-cased.
    pub fn parse(text: &str) -> Option<Self> {
        Self::new(text.lines())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick a word uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn parse() {
        let list = WordList::parse("cat\n\n  Dog \r\nsun\n").unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["CAT", "DOG", "SUN"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn empty_list_rejected() {
        assert_eq!(WordList::parse(""), None);
        assert_eq!(WordList::parse("\n  \n"), None);
    }

    #[test]
    fn pick_is_deterministic() {
        let list = WordList::new(["a", "b", "c", "d"]).unwrap();
        let a: Vec<_> = {
            let mut rng = Pcg32::seed_from_u64(5);
            (0..10).map(|_| list.pick(&mut rng).to_string()).collect()
        };
        let b: Vec<_> = {
            let mut rng = Pcg32::seed_from_u64(5);
            (0..10).map(|_| list.pick(&mut rng).to_string()).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|word| list.iter().any(|w| w == word)));
    }
}
