//! Syntax mode resolution.
//!
//! Maps a file name to the syntax mode the editor widget should use,
//! via a static extension table registered at startup. Unknown or
//! missing extensions resolve to the plain-text sentinel.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A syntax mode for the editor widget.
///
/// `html_mode` is the auxiliary flag for composite markup: the historical
/// `htmlmixed` mode normalizes to plain `xml` with this flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxMode {
    /// Mode identifier understood by the editor widget.
    pub name: &'static str,
    /// Enable embedded-markup handling (HTML inside the markup mode).
    pub html_mode: bool,
}

/// Sentinel mode: no highlighting.
pub const PLAIN_TEXT: SyntaxMode = SyntaxMode {
    name: "null",
    html_mode: false,
};

/// Static extension -> mode identifier table.
///
/// Mode identifiers follow the editor widget's mode names. The table is
/// resolved once at startup; there is no dynamic lookup by constructed
/// string.
static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("js", "javascript"),
        ("cjs", "javascript"),
        ("mjs", "javascript"),
        ("ts", "javascript"),
        ("json", "javascript"),
        ("html", "htmlmixed"),
        ("htm", "htmlmixed"),
        ("xml", "xml"),
        ("svg", "xml"),
        ("css", "css"),
        ("scss", "css"),
        ("less", "css"),
        ("md", "markdown"),
        ("markdown", "markdown"),
        ("rs", "rust"),
        ("py", "python"),
        ("rb", "ruby"),
        ("go", "go"),
        ("java", "clike"),
        ("c", "clike"),
        ("h", "clike"),
        ("cc", "clike"),
        ("cpp", "clike"),
        ("hpp", "clike"),
        ("cs", "clike"),
        ("kt", "clike"),
        ("sh", "shell"),
        ("bash", "shell"),
        ("zsh", "shell"),
        ("yml", "yaml"),
        ("yaml", "yaml"),
        ("toml", "toml"),
        ("sql", "sql"),
        ("php", "php"),
        ("swift", "swift"),
        ("lua", "lua"),
        ("pl", "perl"),
        ("hs", "haskell"),
        ("vue", "vue"),
    ])
});

/// Extract the extension from a file name.
pub fn extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Resolve the syntax mode for a file name.
///
/// Composite markup (`htmlmixed`) normalizes to `xml` with the auxiliary
/// html flag set. Unknown or missing extensions resolve to [`PLAIN_TEXT`].
pub fn resolve_mode(file_name: &str) -> SyntaxMode {
    let Some(ext) = extension(file_name) else {
        return PLAIN_TEXT;
    };
    let ext = ext.to_ascii_lowercase();
    match EXTENSIONS.get(ext.as_str()) {
        Some(&"htmlmixed") => SyntaxMode {
            name: "xml",
            html_mode: true,
        },
        Some(&mode) => SyntaxMode {
            name: mode,
            html_mode: false,
        },
        None => PLAIN_TEXT,
    }
}
