//! Hex glyph pattern drawn as a balloon

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Glyph alphabet
pub const HEX_GLYPHS: &[u8; 16] = b"0123456789abcdef";

/// Balloon silhouette rows as (glyph count, indent)
pub const BALLOON_ROWS: [(usize, usize); 9] = [
    (2, 3),
    (3, 2),
    (4, 1),
    (5, 0),
    (5, 0),
    (4, 1),
    (3, 2),
    (2, 3),
    (1, 3),
];

/// The string hanging below the balloon
pub const STRING_LINE: &str = "    │";
pub const STRING_LENGTH: usize = 3;

/// Multi-line glyph art, fixed once generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphPattern {
    lines: Vec<String>,
}

impl GlyphPattern {
    /// Fill the silhouette with random hex digits and append the string
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut lines = Vec::with_capacity(BALLOON_ROWS.len() + STRING_LENGTH);
        for &(glyphs, indent) in &BALLOON_ROWS {
            let mut line = " ".repeat(indent);
            for _ in 0..glyphs {
                let idx = rng.random_range(0..HEX_GLYPHS.len());
                line.push(HEX_GLYPHS[idx] as char);
                line.push(' ');
            }
            lines.push(line);
        }
        lines.extend(std::iter::repeat_n(STRING_LINE.to_string(), STRING_LENGTH));
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pattern_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let pattern = GlyphPattern::generate(&mut rng);
        assert_eq!(pattern.len(), 12);

        for (line, &(glyphs, indent)) in pattern.lines().iter().zip(BALLOON_ROWS.iter()) {
            assert_eq!(line.len(), indent + glyphs * 2);
            assert!(line[..indent].chars().all(|c| c == ' '));
            let body: Vec<char> = line[indent..].chars().collect();
            for pair in body.chunks(2) {
                assert!(pair[0].is_ascii_hexdigit() && !pair[0].is_ascii_uppercase());
                assert_eq!(pair[1], ' ');
            }
        }

        for line in &pattern.lines()[BALLOON_ROWS.len()..] {
            assert_eq!(line, STRING_LINE);
        }
    }

    #[test]
    fn test_pattern_seeded() {
        let a = GlyphPattern::generate(&mut Pcg32::seed_from_u64(42));
        let b = GlyphPattern::generate(&mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
