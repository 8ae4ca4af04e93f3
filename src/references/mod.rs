//! Allowed-values reference documents and their write-once cache.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

pub mod error;
pub mod gitmoji;
pub mod types;

pub use error::ReferenceError;
pub use gitmoji::GitmojiAllowlist;
pub use types::TypeList;

/// File name of the conventional commit type list document.
pub const TYPE_LIST_FILE: &str = "conventional-commits.md";

/// File name of the gitmoji allowlist document.
pub const GITMOJI_FILE: &str = "gitmoji.md";

/// Where a reference document is read from.
#[derive(Debug)]
enum Source {
    File(PathBuf),
    Bundled {
        name: &'static str,
        content: &'static str,
    },
}

impl Source {
    fn location(&self) -> &Path {
        match self {
            Self::File(path) => path,
            Self::Bundled { name, .. } => Path::new(name),
        }
    }

    fn read(&self) -> Result<Cow<'static, str>, ReferenceError> {
        match self {
            Self::File(path) => fs::read_to_string(path).map(Cow::Owned).map_err(|err| {
                ReferenceError::Missing {
                    path: path.clone(),
                    reason: err.to_string(),
                }
            }),
            Self::Bundled { content, .. } => Ok(Cow::Borrowed(*content)),
        }
    }
}

/// Reference documents, each loaded at most once.
///
/// The first lookup of a document reads and parses it; the outcome, success
/// or failure, is kept for every later lookup on the same value.
#[derive(Debug)]
pub struct References {
    type_list_source: Source,
    gitmoji_source: Source,
    type_list: OnceLock<Result<TypeList, ReferenceError>>,
    gitmoji: OnceLock<Result<GitmojiAllowlist, ReferenceError>>,
}

impl References {
    /// Uses the standard document names inside `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(TYPE_LIST_FILE), dir.join(GITMOJI_FILE))
    }

    /// Uses explicit document paths.
    pub fn new(type_list_path: PathBuf, gitmoji_path: PathBuf) -> Self {
        Self::with_sources(Source::File(type_list_path), Source::File(gitmoji_path))
    }

    /// Uses the documents compiled into the binary.
    pub fn bundled() -> Self {
        Self::with_sources(
            Source::Bundled {
                name: TYPE_LIST_FILE,
                content: include_str!("../../references/conventional-commits.md"),
            },
            Source::Bundled {
                name: GITMOJI_FILE,
                content: include_str!("../../references/gitmoji.md"),
            },
        )
    }

    fn with_sources(type_list_source: Source, gitmoji_source: Source) -> Self {
        Self {
            type_list_source,
            gitmoji_source,
            type_list: OnceLock::new(),
            gitmoji: OnceLock::new(),
        }
    }

    /// Returns the allowed conventional commit types.
    pub fn type_list(&self) -> Result<&TypeList, ReferenceError> {
        self.type_list
            .get_or_init(|| load_type_list(&self.type_list_source))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the allowed gitmoji glyphs and codes.
    pub fn gitmoji(&self) -> Result<&GitmojiAllowlist, ReferenceError> {
        self.gitmoji
            .get_or_init(|| load_gitmoji(&self.gitmoji_source))
            .as_ref()
            .map_err(Clone::clone)
    }
}

fn load_type_list(source: &Source) -> Result<TypeList, ReferenceError> {
    let path = source.location();
    let list = TypeList::parse(&source.read()?);
    if list.is_empty() {
        return Err(ReferenceError::EmptyTypeList {
            path: path.to_path_buf(),
        });
    }
    debug!("Loaded {} allowed types from {}", list.len(), path.display());
    Ok(list)
}

fn load_gitmoji(source: &Source) -> Result<GitmojiAllowlist, ReferenceError> {
    let path = source.location();
    let allowlist = GitmojiAllowlist::parse(&source.read()?);
    if allowlist.is_incomplete() {
        return Err(ReferenceError::EmptyAllowlist {
            path: path.to_path_buf(),
        });
    }
    debug!(
        "Loaded {} gitmoji glyphs and {} codes from {}",
        allowlist.emoji_count(),
        allowlist.code_count(),
        path.display()
    );
    Ok(allowlist)
}
