use serde::Deserialize;

/// Contact form values as typed by the visitor.
///
/// No rule applies to intermediate values; see [`crate::validate`] for what
/// is checked at submission time.
#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy of the draft with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: trim(&self.name).to_owned(),
            email: trim(&self.email).to_owned(),
            message: trim(&self.message).to_owned(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Browser whitespace: space separators, tab, vertical tab, form feed,
/// no-break space, BOM and the line terminators. U+0085 is not included.
fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn trim(value: &str) -> &str {
    value.trim_matches(is_blank)
}
