//! Collection pipeline: discover source files under a notes root and parse
//! each one into articles.

use std::path::Path;

use crate::io::{self, IoError, SourceFilter};
use crate::models::{Article, SourceFile};
use crate::parsing::{ParseOptions, parse_source};

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub parse: ParseOptions,
    /// Sub-directories of the notes root that are scanned.
    pub source_dirs: Vec<String>,
    /// Sub-directories whose files may fall back to whole-file mode.
    pub whole_file_dirs: Vec<String>,
    pub filter: SourceFilter,
}

impl CollectOptions {
    pub fn new(parse: ParseOptions) -> Self {
        Self {
            parse,
            source_dirs: vec!["journals".to_string(), "pages".to_string()],
            whole_file_dirs: vec!["pages".to_string()],
            filter: SourceFilter::default(),
        }
    }

    fn allows_whole_file(&self, file: &SourceFile) -> bool {
        self.whole_file_dirs.iter().any(|dir| file.is_under(dir))
    }
}

/// Collects the articles of every eligible file below `notes_root`.
///
/// Files are visited in sorted path order and articles keep document order.
/// A file that cannot be read is logged and skipped.
pub fn collect_articles(
    notes_root: &Path,
    options: &CollectOptions,
) -> Result<Vec<Article>, IoError> {
    io::validate_notes_dir(notes_root)?;

    let sources = discover(notes_root, options)?;
    log::debug!("{} source files to parse", sources.len());

    let mut articles = Vec::new();
    for source in &sources {
        let text = match io::read_file(source.relative_path(), notes_root) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Skipping {}: {e}", source.relative_path());
                continue;
            }
        };

        let parse = options
            .parse
            .clone()
            .with_whole_file(options.allows_whole_file(source));
        let found = parse_source(&text, source.relative_path().as_str(), &parse);
        log::debug!("{}: {} articles", source.relative_path(), found.len());
        articles.extend(found);
    }

    log::info!(
        "Collected {} articles from {} files",
        articles.len(),
        sources.len()
    );
    Ok(articles)
}

fn discover(notes_root: &Path, options: &CollectOptions) -> Result<Vec<SourceFile>, IoError> {
    let mut sources = Vec::new();
    for dir in &options.source_dirs {
        let dir_path = notes_root.join(dir);
        if !dir_path.is_dir() {
            log::debug!("No {dir} directory in {}", notes_root.display());
            continue;
        }
        for path in io::scan_markdown_files(&dir_path)? {
            match io::source_file_for(&path, notes_root) {
                Some(source) if options.filter.allows(&source) => sources.push(source),
                Some(source) => log::debug!("Filtered out {}", source.relative_path()),
                None => log::warn!("Skipping non UTF-8 path {}", path.display()),
            }
        }
    }
    sources.sort();
    sources.dedup();
    Ok(sources)
}
