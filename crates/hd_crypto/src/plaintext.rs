//! Input coercion for operations that accept either text or raw bytes.

/// Either UTF-8 text or raw bytes. Callers pass `&str` or `&[u8]` directly;
/// the conversion to bytes happens once, at the API boundary of `encrypt`
/// and `sign`.
#[derive(Debug, Clone, Copy)]
pub enum Plaintext<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Plaintext<'a> {
    pub fn as_bytes(self) -> &'a [u8] {
        match self {
            Plaintext::Text(s) => s.as_bytes(),
            Plaintext::Bytes(b) => b,
        }
    }
}

impl<'a> From<&'a str> for Plaintext<'a> {
    fn from(s: &'a str) -> Self {
        Plaintext::Text(s)
    }
}

impl<'a> From<&'a String> for Plaintext<'a> {
    fn from(s: &'a String) -> Self {
        Plaintext::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Plaintext<'a> {
    fn from(b: &'a [u8]) -> Self {
        Plaintext::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Plaintext<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Plaintext::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Plaintext<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Plaintext::Bytes(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_bytes_coerce_identically() {
        let from_text = Plaintext::from("Hello, World!");
        let from_bytes = Plaintext::from(b"Hello, World!".as_slice());
        assert_eq!(from_text.as_bytes(), from_bytes.as_bytes());
    }
}
