use crate::{Category, Config, DEFAULT_CATEGORY, parse_date::SeparatorSet};
use std::{collections::HashMap, path::PathBuf};

/// Test helper to create a `Config` storing notes under `root`.
///
/// This is the single source of truth for test configuration.
/// Categories: `default` (`{root}/%Y-%m-%d.md`) and `work` (`{root}/work/%Y/%Y-%m-%d.md`).
pub fn mk_config(root: PathBuf) -> Config {
    let default = Category {
        editor: "vim".to_string(),
        stub: String::new(),
        path: root.display().to_string(),
        filename: "%Y-%m-%d".to_string(),
        extension: ".md".to_string(),
    };
    let work = Category {
        path: root.join("work").display().to_string(),
        filename: "%Y/%Y-%m-%d".to_string(),
        ..Default::default()
    };

    Config {
        source: root.join("config.toml"),
        separators: SeparatorSet::Dashed,
        categories: HashMap::from([
            (DEFAULT_CATEGORY.to_string(), default),
            ("work".to_string(), work),
        ]),
    }
}
