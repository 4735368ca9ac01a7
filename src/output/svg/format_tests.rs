//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_unicode_alone() {
        assert_eq!(html_escape("CO₂ emissions"), "CO₂ emissions");
    }
}

mod format_kg_tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(format_kg(12.0), "12.00");
        assert_eq!(format_kg(0.126), "0.13");
        assert_eq!(format_kg(1234.5), "1234.50");
    }
}
