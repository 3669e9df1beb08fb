use crate::error::{Result, SplitError};
use crate::language::Language;
use crate::pipeline::{self, Categories};
use crate::types::{UnitKind, UnitSpan};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// One parsed source file: its raw bytes, its syntax tree, and the
/// category map the capability pipeline fills in.
///
/// Lifecycle: construct → [`parse`](Self::parse) → hand to a splitter.
/// The unit is read-only after the pipeline completes.
#[derive(Debug)]
pub struct SourceUnit {
    path: PathBuf,
    source: Vec<u8>,
    language: Language,
    tree: Option<Tree>,
    categories: Categories,
}

impl SourceUnit {
    /// Create a unit over in-memory source bytes
    pub fn new(path: impl Into<PathBuf>, source: Vec<u8>, language: Language) -> Self {
        Self {
            path: path.into(),
            source,
            language,
            tree: None,
            categories: Categories::new(),
        }
    }

    /// Read a file and detect its language from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let language =
            Language::from_path(path).ok_or_else(|| SplitError::no_language(path))?;
        let source = std::fs::read(path)?;
        Ok(Self::new(path, source, language))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The language the unit actually parsed under. After a fallback
    /// retry this is the fallback language, not the one detection picked.
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn is_parsed(&self) -> bool {
        self.tree.is_some()
    }

    /// Parse the source and run the capability pipeline.
    ///
    /// When parsing under the primary language fails and the language
    /// names a fallback, the whole parse is retried down the fallback
    /// chain; if every attempt fails, the primary failure surfaces.
    /// Already-populated pipeline stages are skipped, so calling this
    /// again is a no-op.
    pub fn parse(&mut self) -> Result<()> {
        if self.tree.is_none() {
            let (tree, language) = self.parse_with_fallback()?;
            self.tree = Some(tree);
            self.language = language;
        }
        let root = match &self.tree {
            Some(tree) => tree.root_node(),
            None => return Err(SplitError::NotParsed(self.path.clone())),
        };
        pipeline::run(root, &self.source, self.language.spec(), &mut self.categories);
        Ok(())
    }

    fn parse_with_fallback(&self) -> Result<(Tree, Language)> {
        let primary = self.language;
        match Self::try_parse(&self.source, primary, &self.path) {
            Ok(tree) => Ok((tree, primary)),
            Err(primary_err) => {
                let mut next = primary.fallback();
                while let Some(language) = next {
                    if let Ok(tree) = Self::try_parse(&self.source, language, &self.path) {
                        log::debug!(
                            "parsed {} with fallback language {}",
                            self.path.display(),
                            language.as_str()
                        );
                        return Ok((tree, language));
                    }
                    next = language.fallback();
                }
                Err(primary_err)
            }
        }
    }

    fn try_parse(source: &[u8], language: Language, path: &Path) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| SplitError::parse_failed(path, format!("failed to set language: {e}")))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SplitError::parse_failed(path, "parser produced no tree"))?;
        // error recovery still yields a tree; an error-bearing root
        // counts as a failed parse
        if tree.root_node().has_error() {
            return Err(SplitError::parse_failed(
                path,
                format!("syntax errors under language {}", language.as_str()),
            ));
        }
        Ok(tree)
    }

    /// Root node of the parse tree; `NotParsed` before [`parse`](Self::parse)
    pub fn root(&self) -> Result<Node<'_>> {
        self.tree
            .as_ref()
            .map(Tree::root_node)
            .ok_or_else(|| SplitError::NotParsed(self.path.clone()))
    }

    /// The final list for one unit category. Empty for categories the
    /// language's capability tier never populates.
    pub fn units(&self, kind: UnitKind) -> &[UnitSpan] {
        self.categories
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Raw source bytes a span covers
    pub fn text(&self, span: &UnitSpan) -> &[u8] {
        &self.source[span.start_byte..span.end_byte]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsed_unit_has_no_root() {
        let unit = SourceUnit::new("late.py", b"x = 1\n".to_vec(), Language::Python);
        assert!(matches!(unit.root(), Err(SplitError::NotParsed(_))));
        assert!(!unit.is_parsed());
    }

    #[test]
    fn parse_tags_unit_with_fallback_language() {
        // JSX is valid under the javascript grammar but not the
        // typescript one, so a .ts file full of it exercises the retry
        let source = b"const el = <div className=\"x\">hi</div>;\n".to_vec();
        let mut unit = SourceUnit::new("widget.ts", source, Language::TypeScript);
        unit.parse().expect("fallback parse should succeed");
        assert_eq!(unit.language(), Language::JavaScript);
    }

    #[test]
    fn exhausted_fallbacks_surface_the_primary_error() {
        let source = b")(*&^ not a program".to_vec();
        let mut unit = SourceUnit::new("broken.ts", source, Language::TypeScript);
        let err = unit.parse().unwrap_err();
        match err {
            SplitError::ParseFailed { reason, .. } => {
                assert!(reason.contains("typescript"), "got: {reason}");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn text_round_trips_span_bytes() {
        let source = b"def f():\n    return 1\n".to_vec();
        let mut unit = SourceUnit::new("f.py", source.clone(), Language::Python);
        unit.parse().unwrap();
        let function = &unit.units(UnitKind::Function)[0];
        assert_eq!(
            unit.text(function),
            &source[function.start_byte..function.end_byte]
        );
    }
}
