/// The character sets the scanner admits, threaded into the generator
/// and the random-string helper instead of living in globals so that
/// several alphabets can coexist in one process.
#[derive(Clone, Debug)]
pub struct Charset {
    alphabet: Vec<char>,
    whitespace: Vec<char>,
}

impl Charset {
    pub fn new(alphabet: Vec<char>, whitespace: Vec<char>) -> Self {
        Self { alphabet, whitespace }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn in_alphabet(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }
}

impl Default for Charset {
    /// Digits, letters and punctuation; ASCII whitespace including
    /// vertical tab and form feed.
    fn default() -> Self {
        Self::new(
            ('!'..='~').collect(),
            vec![' ', '\t', '\n', '\r', '\x0b', '\x0c'],
        )
    }
}
