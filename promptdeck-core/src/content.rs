//! Read-only content area: a prompt preview plus two static placeholders.

/// Shown in the preview while the prompt is empty
pub const EMPTY_PREVIEW: &str = "Noch kein Prompt gesendet.";

pub const SECTION_TITLE: &str = "Inhalt";
pub const SECTION_SUBTITLE: &str = "Platzhalter für Listen (z. B. Smart-Grid), Diagramme usw.";

pub const LIST_TITLE: &str = "Liste";
pub const LIST_ENTRIES: [&str; 3] = ["Eintrag A", "Eintrag B", "Eintrag C"];

pub const CHART_TITLE: &str = "Diagramm";
pub const CHART_PLACEHOLDER: &str = "Chart-Placeholder";

pub const PREVIEW_TITLE: &str = "Prompt-Vorschau";

/// What the preview block shows for a given prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preview<'a> {
    /// The prompt, verbatim (whitespace and newlines preserved)
    Prompt(&'a str),
    /// The prompt is empty
    Placeholder,
}

impl<'a> Preview<'a> {
    /// Only the empty string maps to the placeholder; whitespace is echoed.
    pub fn of(prompt: &'a str) -> Self {
        if prompt.is_empty() {
            Preview::Placeholder
        } else {
            Preview::Prompt(prompt)
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Preview::Prompt(text) => text,
            Preview::Placeholder => EMPTY_PREVIEW,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_shows_placeholder() {
        let preview = Preview::of("");
        assert!(preview.is_placeholder());
        assert_eq!(preview.text(), "Noch kein Prompt gesendet.");
    }

    #[test]
    fn test_prompt_echoed_verbatim() {
        let prompt = "  SELECT *\n\tFROM t  \n";
        assert_eq!(Preview::of(prompt).text(), prompt);
    }

    #[test]
    fn test_whitespace_only_is_not_placeholder() {
        assert_eq!(Preview::of("   "), Preview::Prompt("   "));
    }
}
