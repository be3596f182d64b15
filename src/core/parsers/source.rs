use std::path::Path;
use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, Spanned, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

/// Kind of source file accepted by the auditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.ts`
    Ts,
    /// `.tsx` (JSX syntax enabled)
    Tsx,
}

impl SourceKind {
    /// Determine the source kind from a file extension.
    ///
    /// Anything other than `.ts` or `.tsx` is rejected; such files are
    /// skipped by the auditor with a warning.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("ts") => Ok(Self::Ts),
            Some("tsx") => Ok(Self::Tsx),
            other => Err(SourceError::UnsupportedFileKind {
                extension: other.unwrap_or_default().to_string(),
            }),
        }
    }

    fn syntax(self) -> Syntax {
        Syntax::Typescript(TsSyntax {
            tsx: self == Self::Tsx,
            decorators: true,
            ..Default::default()
        })
    }
}

/// Errors raised while loading a single source file.
///
/// None of these abort a run: the file is reported and skipped.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported file kind '{extension}' (expected .ts or .tsx)")]
    UnsupportedFileKind { extension: String },
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// A comment found in the source, with the line it starts on (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceComment {
    pub line: usize,
    /// Comment text without `//` or `/* */` delimiters.
    pub text: String,
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// All comments in the file, sorted by line.
    pub comments: Vec<SourceComment>,
}

/// Parse TypeScript/TSX source code into an AST.
///
/// The returned `ParsedSource` keeps `source_map` so spans of its module can
/// be looked up later; callers hand in a fresh map per file. Recoverable
/// syntax errors reported by the parser are treated as failures too, so a
/// file is either fully parsed or skipped.
pub fn parse_source(
    code: String,
    file_path: &str,
    kind: SourceKind,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource, SourceError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            kind.syntax(),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let parse_error = |err: swc_ecma_parser::error::Error| SourceError::Parse {
            line: source_map.lookup_char_pos(err.span().lo).line,
            message: err.kind().msg().to_string(),
        };

        let module = parser.parse_module().map_err(parse_error)?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(parse_error(err));
        }

        let (leading, trailing) = comments.borrow_all();
        let mut collected: Vec<SourceComment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .map(|cmt| SourceComment {
                line: source_map.lookup_char_pos(cmt.span.lo).line,
                text: cmt.text.to_string(),
            })
            .collect();
        collected.sort_by_key(|c| c.line);

        Ok(ParsedSource {
            module,
            source_map,
            comments: collected,
        })
    })
}
