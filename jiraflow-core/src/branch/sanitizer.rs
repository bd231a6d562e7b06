use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Characters deleted outright before word boundaries are computed.
const STRIPPED_CHARS: &[char] = &[
    '"', '(', ')', '[', ']', '{', '}', ':', ';', ',', '<', '>', '?', '|', '*', '&', '^', '%', '$',
    '#', '@', '!', '~', '`',
];

static WORD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-_]\s*|\s+").expect("word break pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationOptions {
    pub separator: String,
    pub lowercase: bool,
    pub fold_diacritics: bool,
    /// Zero means unbounded
    pub max_length: usize,
}

impl Default for SanitizationOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            lowercase: true,
            fold_diacritics: false,
            max_length: 0,
        }
    }
}

/// ASCII replacement for accented letters, or `None` when the character is kept as is.
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'å' => "a",
        'ä' => "ae",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' => "o",
        'ö' => "oe",
        'ù' | 'ú' | 'û' => "u",
        'ü' => "ue",
        'ç' => "c",
        'ñ' => "n",
        'ß' => "ss",
        'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "A",
        'Ä' => "Ae",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ò' | 'Ó' | 'Ô' | 'Õ' => "O",
        'Ö' => "Oe",
        'Ù' | 'Ú' | 'Û' => "U",
        'Ü' => "Ue",
        'Ç' => "C",
        'Ñ' => "N",
        'ẞ' => "SS",
        _ => return None,
    };
    Some(folded)
}

/// Replace umlauts and common Latin diacritics with ASCII spellings
/// (`ä` becomes `ae`, `é` becomes `e`, `ß` becomes `ss`).
pub fn fold_diacritics(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match fold_char(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

fn collapse_repeated(input: &str, separator: &str) -> String {
    if separator.is_empty() {
        return input.to_string();
    }
    let doubled = separator.repeat(2);
    let mut out = input.to_string();
    while out.contains(&doubled) {
        out = out.replace(&doubled, separator);
    }
    out
}

fn truncate_at_word(input: &str, max_length: usize, separator: &str) -> String {
    let truncated: String = input.chars().take(max_length).collect();
    if separator.is_empty() {
        return truncated;
    }
    match truncated.rfind(separator) {
        Some(idx) if idx > truncated.len() / 2 => truncated[..idx].to_string(),
        _ => truncated,
    }
}

fn trim_edges<'a>(mut s: &'a str, separator: &str) -> &'a str {
    loop {
        let before = s.len();
        if !separator.is_empty() {
            while let Some(rest) = s.strip_prefix(separator) {
                s = rest;
            }
            while let Some(rest) = s.strip_suffix(separator) {
                s = rest;
            }
        }
        s = s.trim_start_matches('.');
        if s.len() == before {
            return s;
        }
    }
}

/// Turn a free-form title into a branch-safe slug.
///
/// The pipeline folds diacritics (when enabled), turns path separators into word breaks,
/// deletes shell and bracket characters, joins words with the separator, drops anything
/// that is not ASCII alphanumeric, the separator or a dot, then lowercases and truncates
/// near a word boundary. Leading and trailing separators and leading dots are removed.
pub fn sanitize(title: &str, options: &SanitizationOptions) -> String {
    if title.is_empty() {
        return String::new();
    }
    let separator = options.separator.as_str();

    let trimmed = title.trim();
    let mut text = if options.fold_diacritics {
        fold_diacritics(trimmed)
    } else {
        trimmed.to_string()
    };

    text = text.replace(['/', '\\'], " ");
    text.retain(|c| !STRIPPED_CHARS.contains(&c));
    text = WORD_BREAK.replace_all(&text, NoExpand(separator)).into_owned();
    text = collapse_repeated(&text, separator);
    text.retain(|c| c.is_ascii_alphanumeric() || c == '.' || separator.contains(c));
    // Dropping characters can glue separators back together
    text = collapse_repeated(&text, separator);

    if options.lowercase {
        text = text.to_lowercase();
    }

    if options.max_length > 0 && text.chars().count() > options.max_length {
        text = truncate_at_word(&text, options.max_length, separator);
    }

    trim_edges(&text, separator).to_string()
}
