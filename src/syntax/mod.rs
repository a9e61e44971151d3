//! Syntax highlighting for the implementation viewer
//!
//! Catalog implementations are mostly Java, but the language tag on each
//! [`Implementation`](crate::catalog::Implementation) is free-form, so
//! resolution falls back through syntect's extension tables.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::highlighting::{
    FontStyle, HighlightState, Highlighter, RangedHighlightIterator, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};

use crate::theme::Theme;

/// Global syntax set with all default syntaxes
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Global theme set; colors come from syntect, backgrounds from our theme
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Map the language tags used in the catalog to syntect syntax names
fn normalize_language(lang: &str) -> &str {
    match lang.trim().to_lowercase().as_str() {
        "java" => "Java",
        "kotlin" | "kt" => "Kotlin",
        "scala" => "Scala",
        "rs" | "rust" => "Rust",
        "py" | "python" | "python3" => "Python",
        "js" | "javascript" => "JavaScript",
        "ts" | "typescript" => "TypeScript",
        "go" | "golang" => "Go",
        "c" => "C",
        "cpp" | "c++" | "cxx" => "C++",
        "sql" => "SQL",
        "sh" | "bash" | "shell" => "Bourne Again Shell (bash)",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        _ => lang,
    }
}

/// Find the syntax definition for a language tag
fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
    let normalized = normalize_language(language);

    SYNTAX_SET
        .find_syntax_by_name(normalized)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(normalized.to_lowercase().as_str()))
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(language))
}

fn syntect_to_ratatui_color(color: syntect::highlighting::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Highlight a single line of code and return styled spans
pub fn highlight_line(line: &str, language: &str, theme: &Theme) -> Vec<Span<'static>> {
    if let Some(syntax) = find_syntax(language)
        && let Some(syntect_theme) = THEME_SET.themes.get("base16-ocean.dark")
    {
        let highlighter = Highlighter::new(syntect_theme);
        let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
        let mut parse_state = ParseState::new(syntax);
        let parsed = parse_state.parse_line(line, &SYNTAX_SET);

        let ranges: Vec<_> = RangedHighlightIterator::new(
            &mut highlight_state,
            &parsed.unwrap_or_default(),
            line,
            &highlighter,
        )
        .collect();

        if !ranges.is_empty() {
            return ranges
                .into_iter()
                .map(|(style, text, _range)| {
                    let fg = syntect_to_ratatui_color(style.foreground);
                    let mut ratatui_style = Style::default().fg(fg).bg(theme.bg_secondary);

                    if style.font_style.contains(FontStyle::BOLD) {
                        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                    }
                    if style.font_style.contains(FontStyle::ITALIC) {
                        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
                    }

                    Span::styled(text.to_string(), ratatui_style)
                })
                .collect();
        }
    }

    vec![Span::styled(
        line.to_string(),
        Style::default().fg(theme.fg_primary).bg(theme.bg_secondary),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_resolves_to_a_syntax() {
        assert!(find_syntax("java").is_some());
        assert!(find_syntax("Java").is_some());
    }

    #[test]
    fn unknown_language_falls_back_to_plain_spans() {
        let theme = Theme::default();
        let spans = highlight_line("some plain text", "klingon", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "some plain text");
    }

    #[test]
    fn java_keywords_get_styled() {
        let theme = Theme::default();
        let spans = highlight_line("public class Foo {", "java", &theme);
        // The highlighter splits the line into multiple styled ranges
        assert!(spans.len() > 1);
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "public class Foo {");
    }
}
