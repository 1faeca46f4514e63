use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Requested font family not found in any system font directory.
#[derive(Debug, Clone, PartialEq)]
pub struct FontUnavailable {
    pub family: String,
}

impl fmt::Display for FontUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font family '{}' not found in system font directories", self.family)
    }
}

impl std::error::Error for FontUnavailable {}

/// Embedded fallback face (DejaVu Sans). Vendored so rendering keeps
/// working on machines with no usable system fonts at all.
pub fn builtin_regular() -> &'static [u8] {
    include_bytes!("../../assets/DejaVuSans.ttf")
}

/// Embedded bold fallback face (DejaVu Sans Bold).
pub fn builtin_bold() -> &'static [u8] {
    include_bytes!("../../assets/DejaVuSans-Bold.ttf")
}

const SEARCH_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype",
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Resolves a font family to raw font bytes by probing well-known system
/// font directories for `<Family>.ttf` / `<Family>-Regular.ttf` style
/// names (spaces removed, with an optional lowercased subdirectory).
///
/// Resolution is explicit and intended to run once at process start;
/// callers hand the bytes to [`FontSystem::load_font`] and pass the
/// resulting id to every render call. On `Err`, substitute
/// [`builtin_regular`] / [`builtin_bold`]; the embedded face never
/// goes missing.
///
/// [`FontSystem::load_font`]: crate::text::FontSystem::load_font
pub fn resolve_family(family: &str) -> Result<Vec<u8>, FontUnavailable> {
    candidate_paths(family)
        .iter()
        .find_map(|p| fs::read(p).ok())
        .ok_or_else(|| FontUnavailable { family: family.to_string() })
}

fn candidate_paths(family: &str) -> Vec<PathBuf> {
    let words: Vec<&str> = family.split_whitespace().collect();
    let compact: String = words.concat();
    let first_word = words.first().unwrap_or(&"").to_lowercase();

    let mut files = vec![format!("{compact}.ttf"), format!("{compact}-Regular.ttf")];
    // Trailing style word as a hyphenated suffix: "DejaVu Sans Bold" →
    // DejaVuSans-Bold.ttf.
    if let Some((style, head)) = words.split_last() {
        if !head.is_empty() {
            files.push(format!("{}-{style}.ttf", head.concat()));
        }
    }
    let subdirs = ["".to_string(), compact.to_lowercase(), first_word];

    let mut out = Vec::new();
    for dir in SEARCH_DIRS {
        for sub in &subdirs {
            for file in &files {
                let base = Path::new(dir);
                out.push(if sub.is_empty() { base.join(file) } else { base.join(sub).join(file) });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_family_is_unavailable() {
        let err = resolve_family("NoSuchFamily Xyzzy").unwrap_err();
        assert_eq!(err.family, "NoSuchFamily Xyzzy");
        assert!(err.to_string().contains("NoSuchFamily Xyzzy"));
    }

    #[test]
    fn candidates_cover_flat_and_family_subdir_layouts() {
        let paths = candidate_paths("DejaVu Sans");
        let hit = |needle: &str| paths.iter().any(|p| p.to_string_lossy().contains(needle));
        assert!(hit("DejaVuSans.ttf"));
        assert!(hit("DejaVuSans-Regular.ttf"));
        // e.g. /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
        assert!(hit("dejavu/DejaVuSans.ttf") || hit("dejavu\\DejaVuSans.ttf"));
    }

    #[test]
    fn trailing_style_word_becomes_a_hyphenated_suffix() {
        let paths = candidate_paths("DejaVu Sans Bold");
        assert!(paths.iter().any(|p| p.to_string_lossy().contains("DejaVuSans-Bold.ttf")));
    }

    #[test]
    fn builtin_faces_are_non_empty() {
        assert!(!builtin_regular().is_empty());
        assert!(!builtin_bold().is_empty());
    }
}
