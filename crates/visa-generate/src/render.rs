//! Deterministic rendering of the generated matrix block.
//!
//! The block is TOML: a `[matrix]` table with one inline table per
//! citizenship code, keys sorted, fields in fixed order. Equal input renders
//! byte-identical output, which is what makes the write-if-changed check in
//! the run loop work.

use visa_model::VisaMatrix;

/// Renders the `[matrix]` block for one destination. No trailing newline;
/// the merge step owns the line breaks around the block.
pub fn render_matrix_block(matrix: &VisaMatrix) -> String {
    let mut out = String::from("[matrix]");
    for (citizenship, rule) in matrix {
        out.push('\n');
        out.push_str(&toml_key(citizenship));
        out.push_str(" = { category = \"");
        out.push_str(rule.category.as_str());
        out.push('"');
        if let Some(days) = rule.max_stay_days {
            out.push_str(", maxStayDays = ");
            out.push_str(&days.to_string());
        }
        if let Some(raw) = &rule.raw {
            out.push_str(", raw = ");
            out.push_str(&toml_string(raw));
        }
        out.push_str(" }");
    }
    out
}

/// ISO2 codes are safe as bare TOML keys; anything else gets quoted.
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if bare { key.to_string() } else { toml_string(key) }
}

/// Escapes a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use visa_model::{VisaCategory, VisaMatrix, VisaRule};

    #[test]
    fn empty_matrix_renders_bare_table_header() {
        assert_eq!(render_matrix_block(&VisaMatrix::new()), "[matrix]");
    }

    #[test]
    fn renders_sorted_with_fixed_field_order() {
        let mut matrix = VisaMatrix::new();
        matrix.insert("FR".to_string(), VisaRule::new(VisaCategory::Eta));
        matrix.insert("DE".to_string(), VisaRule::visa_free_for(90));
        matrix.insert("AU".to_string(), VisaRule::unknown("covid ban"));

        insta::assert_snapshot!(render_matrix_block(&matrix), @r#"
        [matrix]
        AU = { category = "unknown", raw = "covid ban" }
        DE = { category = "visa_free", maxStayDays = 90 }
        FR = { category = "eta" }
        "#);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut a = VisaMatrix::new();
        let mut b = VisaMatrix::new();
        for (code, days) in [("JP", 90), ("BR", 30), ("CA", 180)] {
            a.insert(code.to_string(), VisaRule::visa_free_for(days));
        }
        for (code, days) in [("CA", 180), ("JP", 90), ("BR", 30)] {
            b.insert(code.to_string(), VisaRule::visa_free_for(days));
        }
        assert_eq!(render_matrix_block(&a), render_matrix_block(&b));
    }

    #[test]
    fn raw_values_are_escaped() {
        let mut matrix = VisaMatrix::new();
        matrix.insert(
            "XX".to_string(),
            VisaRule::unknown("says \"closed\"\nsee notes\\appendix"),
        );
        assert_eq!(
            render_matrix_block(&matrix),
            "[matrix]\nXX = { category = \"unknown\", raw = \"says \\\"closed\\\"\\nsee notes\\\\appendix\" }"
        );
    }

    #[test]
    fn odd_keys_are_quoted() {
        let mut matrix = VisaMatrix::new();
        matrix.insert("A B".to_string(), VisaRule::new(VisaCategory::Eta));
        assert_eq!(
            render_matrix_block(&matrix),
            "[matrix]\n\"A B\" = { category = \"eta\" }"
        );
    }
}
