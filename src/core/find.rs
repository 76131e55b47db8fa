//! Recursive fuzzy-search index for peruse.
//!
//! [FuzzyIndex::build] walks every descendant of a root once, at search
//! activation, and [FuzzyIndex::query] re-ranks the full in-memory candidate
//! set on each keystroke using the `fuzzy_matcher` crate. The candidate set
//! size, not the query length, bounds the query latency.

use crate::core::fm::{Entry, is_hidden_name};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of hits a query returns.
pub const RESULT_LIMIT: usize = 100;

/// One search candidate: the entry snapshot plus its root-relative path
/// string, precomputed for scoring.
#[derive(Debug, Clone)]
struct Candidate {
    entry: Entry,
    relative: String,
}

/// A ranked search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    entry: Entry,
    relative: String,
    score: i64,
}

impl SearchHit {
    #[inline]
    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    #[inline]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Path relative to the search root, as shown in the result list.
    #[inline]
    pub fn relative(&self) -> &str {
        &self.relative
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.entry.is_dir()
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// In-memory snapshot of every visible descendant under a search root.
///
/// Built once per search session; not live-updated against filesystem
/// changes while the session is open.
pub struct FuzzyIndex {
    root: PathBuf,
    candidates: Vec<Candidate>,
    matcher: SkimMatcherV2,
    built: bool,
}

impl FuzzyIndex {
    pub fn new() -> Self {
        Self {
            root: PathBuf::new(),
            candidates: Vec::new(),
            matcher: SkimMatcherV2::default(),
            built: false,
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True once [build](Self::build) has run for this session.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Recursively enumerates the descendants of `root`.
    ///
    /// Any path with a hidden component is excluded together with its whole
    /// subtree. Permission errors while walking degrade to an empty candidate
    /// set for that subtree and never propagate. Candidates are stored in
    /// baseline order: case-insensitive by name, ties by relative path.
    pub fn build(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.candidates.clear();
        collect(root, root, &mut self.candidates);
        self.candidates.sort_by(|a, b| {
            a.entry
                .name()
                .to_lowercase()
                .cmp(&b.entry.name().to_lowercase())
                .then_with(|| a.relative.cmp(&b.relative))
        });
        self.built = true;
    }

    /// Ranks the candidate set against `text`.
    ///
    /// An empty query returns the first [RESULT_LIMIT] candidates in baseline
    /// order. Otherwise every candidate's root-relative path is scored
    /// case-insensitively and the top [RESULT_LIMIT] are returned by
    /// descending score, ties broken by baseline order. Querying an unbuilt
    /// index yields an empty sequence.
    pub fn query(&self, text: &str) -> Vec<SearchHit> {
        if !self.built {
            return Vec::new();
        }

        if text.is_empty() {
            return self
                .candidates
                .iter()
                .take(RESULT_LIMIT)
                .map(|c| SearchHit {
                    entry: c.entry.clone(),
                    relative: c.relative.clone(),
                    score: 0,
                })
                .collect();
        }

        // Lowercased pattern keeps the skim matcher case-insensitive.
        let pattern = text.to_lowercase();
        let mut hits: Vec<SearchHit> = self
            .candidates
            .iter()
            .filter_map(|c| {
                self.matcher
                    .fuzzy_match(&c.relative, &pattern)
                    .map(|score| SearchHit {
                        entry: c.entry.clone(),
                        relative: c.relative.clone(),
                        score,
                    })
            })
            .collect();

        // Stable sort keeps the baseline order for equal scores.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(RESULT_LIMIT);
        hits
    }
}

impl Default for FuzzyIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first candidate collection. Hidden names prune their subtree;
/// unreadable directories contribute nothing. Symlinks are listed but never
/// followed, so a cyclic link cannot send the walk in circles.
fn collect(dir: &Path, root: &Path, out: &mut Vec<Candidate>) {
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };
    for dirent in read {
        let Ok(dirent) = dirent else { continue };
        let path = dirent.path();
        let name = dirent.file_name();
        if is_hidden_name(&name.to_string_lossy()) {
            continue;
        }

        let entry = Entry::snapshot(&path);
        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        out.push(Candidate { entry, relative });

        // The non-following check gates recursion: dirent.file_type reports
        // a symlink as a symlink, metadata would report its target.
        let is_real_dir = dirent.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_real_dir {
            collect(&path, root, out);
        }
    }
}
