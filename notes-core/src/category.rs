use serde::Deserialize;

/// Name of the category used when none is given, and the fallback for every other one.
pub const DEFAULT_CATEGORY: &str = "default";

/// A named note template, one table of the config file.
///
/// ```toml
/// [journal]
/// editor = "hx"
/// stub = "~/notes/stubs/journal.md"
/// path = "~/notes/journal"
/// filename = "%Y/%m/%Y-%m-%d"
/// ext = ".md"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Editor invocation. Carried for completeness, notes are never opened.
    pub editor: String,
    /// Template file for new notes. Carried for completeness, notes are created empty.
    pub stub: String,
    /// Storage root; a leading `~` is the home directory.
    pub path: String,
    /// chrono strftime pattern for the note's file name (e.g. `%Y-%m-%d`).
    pub filename: String,
    #[serde(rename = "ext", alias = "extension")]
    pub extension: String,
}

impl Category {
    /// Field by field merge: every empty field is taken from `fallback`.
    pub fn or_fallback(&self, fallback: &Category) -> Category {
        Category {
            editor: pick(&self.editor, &fallback.editor),
            stub: pick(&self.stub, &fallback.stub),
            path: pick(&self.path, &fallback.path),
            filename: pick(&self.filename, &fallback.filename),
            extension: pick(&self.extension, &fallback.extension),
        }
    }
}

fn pick(value: &str, fallback: &str) -> String {
    let chosen = if value.is_empty() { fallback } else { value };
    chosen.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_category() -> Category {
        Category {
            editor: "vim".into(),
            stub: "/notes/stub.md".into(),
            path: "/notes".into(),
            filename: "%Y-%m-%d".into(),
            extension: ".md".into(),
        }
    }

    #[test]
    fn empty_fields_fall_back() {
        let work = Category {
            path: "/notes/work".into(),
            extension: ".txt".into(),
            ..Default::default()
        };
        let merged = work.or_fallback(&default_category());
        assert_eq!(merged.path, "/notes/work");
        assert_eq!(merged.extension, ".txt");
        assert_eq!(merged.editor, "vim");
        assert_eq!(merged.stub, "/notes/stub.md");
        assert_eq!(merged.filename, "%Y-%m-%d");
    }

    #[test]
    fn merging_with_itself_is_a_no_op() {
        let default = default_category();
        assert_eq!(default.or_fallback(&default), default);
    }

    #[test]
    fn empty_fallback_keeps_empty_fields() {
        let merged = Category::default().or_fallback(&Category::default());
        assert_eq!(merged, Category::default());
    }

    #[test]
    fn deserializes_ext_and_extension_keys() {
        let a: Category = toml::from_str("ext = \".md\"").unwrap();
        let b: Category = toml::from_str("extension = \".md\"").unwrap();
        assert_eq!(a.extension, ".md");
        assert_eq!(a, b);
    }
}
