pub mod detect;
pub mod fasta;

/// Append `input` to `out` without ASCII whitespace, upper-cased.
pub(crate) fn extend_normalized(out: &mut Vec<u8>, input: &str) {
    out.extend(
        input
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| b.to_ascii_uppercase()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let mut out = b"TT".to_vec();
        extend_normalized(&mut out, "ac gt\r\n");
        assert_eq!(out, b"TTACGT".to_vec());

        let mut out = Vec::new();
        extend_normalized(&mut out, " \n");
        assert!(out.is_empty());
    }
}
