//! Markdown rendering with syntax highlighting
//!
//! Fenced code blocks are highlighted with syntect and wrapped in a
//! `code-block-wrapper` div carrying a human-readable language label.

use anyhow::Result;
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::collections::HashMap;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

lazy_static! {
    // Loading the syntax definitions is expensive; every renderer shares one copy.
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
    static ref BACKGROUND: Regex =
        Regex::new(r"background-color:[^;]+;?").expect("background pattern is valid");
    static ref LANGUAGE_NAMES: HashMap<&'static str, &'static str> = [
        ("cpp", "C++"),
        ("cplusplus", "C++"),
        ("c", "C"),
        ("rust", "Rust"),
        ("js", "JavaScript"),
        ("javascript", "JavaScript"),
        ("ts", "TypeScript"),
        ("typescript", "TypeScript"),
        ("py", "Python"),
        ("python", "Python"),
        ("go", "Go"),
        ("java", "Java"),
        ("csharp", "C#"),
        ("cs", "C#"),
        ("html", "HTML"),
        ("css", "CSS"),
        ("json", "JSON"),
        ("bash", "Bash"),
        ("sh", "Shell"),
        ("shell", "Shell"),
        ("sql", "SQL"),
        ("yaml", "YAML"),
        ("yml", "YAML"),
        ("xml", "XML"),
        ("markdown", "Markdown"),
        ("md", "Markdown"),
        ("jsx", "JSX"),
        ("tsx", "TSX"),
        ("php", "PHP"),
        ("ruby", "Ruby"),
        ("rb", "Ruby"),
        ("swift", "Swift"),
        ("kotlin", "Kotlin"),
        ("scala", "Scala"),
        ("lua", "Lua"),
        ("perl", "Perl"),
        ("r", "R"),
        ("asm", "Assembly"),
        ("assembly", "Assembly"),
        ("pascal", "Pascal"),
        ("text", "Text"),
        ("plaintext", "Text"),
    ]
    .into_iter()
    .collect();
}

/// Label shown above a code block
pub fn language_label(lang: &str) -> String {
    LANGUAGE_NAMES
        .get(lang)
        .map(|name| name.to_string())
        .unwrap_or_else(|| lang.to_uppercase())
}

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    theme_name: String,
    background: String,
}

impl MarkdownRenderer {
    /// Create a renderer using the given highlight settings
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            theme_name: config.theme.clone(),
            background: config.background.clone(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped before rendering, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block
        let mut code_block: Option<Option<String>> = None;
        let mut code = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let wrapped = self.highlight_code(&code, lang.as_deref());
                    events.push(Event::Html(CowStr::from(wrapped)));
                }
                Event::Text(text) if code_block.is_some() => code.push_str(&text),
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block and wrap it with its language label
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = SYNTAX_SET
            .find_syntax_by_token(lang)
            .or_else(|| SYNTAX_SET.find_syntax_by_extension(lang))
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let pre = match highlighted_html_for_string(code, &SYNTAX_SET, syntax, self.theme()) {
            Ok(highlighted) => {
                let background = format!("background-color:{};", self.background);
                BACKGROUND
                    .replace(&highlighted, regex::NoExpand(&background))
                    .into_owned()
            }
            Err(e) => {
                tracing::warn!("Failed to highlight {} code block: {}", lang, e);
                format!(
                    r#"<pre style="background-color:{};"><code>{}</code></pre>"#,
                    self.background,
                    html_escape(code)
                )
            }
        };

        format!(
            r#"<div class="code-block-wrapper"><span class="code-block-lang">{}</span>{}</div>"#,
            html_escape(&language_label(lang)),
            pre
        )
    }

    fn theme(&self) -> &'static Theme {
        THEME_SET.themes.get(&self.theme_name).unwrap_or_else(|| {
            THEME_SET
                .themes
                .values()
                .next()
                .expect("syntect ships default themes")
        })
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
