//! Projection of the registry into the remote file, and back.

use crate::config;
use crate::error::SyncError;
use crate::models::VideoReference;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    /// A standalone JSON document carrying its own version counter.
    Versioned,
    /// `<declaration> = [ ... ];` inside a source file.
    SourceBlock { declaration: String },
}

impl DocumentFormat {
    pub fn for_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            DocumentFormat::Versioned
        } else {
            DocumentFormat::SourceBlock {
                declaration: config::REFERENCES_DECLARATION.to_string(),
            }
        }
    }

    fn block_name(&self) -> &str {
        match self {
            DocumentFormat::Versioned => "references",
            DocumentFormat::SourceBlock { declaration } => declaration,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDocument {
    pub version: u64,
    pub updated_at: String,
    pub references: Vec<VideoReference>,
}

fn declaration_pattern(declaration: &str) -> Regex {
    let pattern = format!(r"\b{}\b[^=;\n]*=\s*\[", regex::escape(declaration));
    Regex::new(&pattern).expect("declaration is escaped")
}

/// Offset just past the `]` that closes the array opening at `text[0]`.
/// Brackets inside quoted strings do not count.
fn array_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Where `<declaration> = [ ... ];` sits in a source file.
struct Block {
    array: Range<usize>,
    /// Just past the terminating `;`.
    end: usize,
}

fn locate_block(declaration: &str, text: &str) -> Option<Block> {
    let anchor = declaration_pattern(declaration).find(text)?;
    let open = anchor.end() - 1;
    let close = open + array_end(&text[open..])?;
    let rest = &text[close..];
    let after = rest.trim_start();
    if !after.starts_with(';') {
        return None;
    }
    Some(Block {
        array: open..close,
        end: close + (rest.len() - after.len()) + 1,
    })
}

fn pretty(references: &[VideoReference]) -> String {
    serde_json::to_string_pretty(references).unwrap_or_else(|_| "[]".to_string())
}

/// Writes `references` into `current`, returning the whole new file.
pub fn patch(
    format: &DocumentFormat,
    current: &str,
    references: &[VideoReference],
    updated_at: &str,
) -> Result<String, SyncError> {
    match format {
        DocumentFormat::Versioned => {
            let version = if current.trim().is_empty() {
                0
            } else {
                serde_json::from_str::<ReferenceDocument>(current)
                    .map_err(|_| SyncError::PatternNotFound(format.block_name().to_string()))?
                    .version
            };
            let document = ReferenceDocument {
                version: version + 1,
                updated_at: updated_at.to_string(),
                references: references.to_vec(),
            };
            let mut text = serde_json::to_string_pretty(&document)
                .map_err(|e| SyncError::Encoding(e.to_string()))?;
            text.push('\n');
            Ok(text)
        }
        DocumentFormat::SourceBlock { declaration } => {
            let block = locate_block(declaration, current)
                .ok_or_else(|| SyncError::PatternNotFound(declaration.clone()))?;
            let mut patched = String::with_capacity(current.len());
            patched.push_str(&current[..block.array.start]);
            patched.push_str(&pretty(references));
            patched.push(';');
            patched.push_str(&current[block.end..]);
            Ok(patched)
        }
    }
}

/// Reads the references back out of a file written by [`patch`].
pub fn extract(format: &DocumentFormat, text: &str) -> Result<Vec<VideoReference>, SyncError> {
    let not_found = || SyncError::PatternNotFound(format.block_name().to_string());
    match format {
        DocumentFormat::Versioned => serde_json::from_str::<ReferenceDocument>(text)
            .map(|document| document.references)
            .map_err(|_| not_found()),
        DocumentFormat::SourceBlock { declaration } => {
            let block = locate_block(declaration, text).ok_or_else(not_found)?;
            serde_json::from_str(&text[block.array]).map_err(|_| not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::initial_references;
    use crate::models::VideoKind;
    use crate::sync::codec::{decode_content, encode_content};

    const SOURCE: &str = r#"import { VideoReference } from './types';

export const INITIAL_SOLUTIONS = [{ id: '1' }];

export const INITIAL_REFERENCES: VideoReference[] = [
  {
    id: 'ref1',
    type: 'Long-form',
    title: '테크 리뷰의 새로운 패러다임',
    embedUrl: 'https://www.youtube.com/embed/dQw4w9WgXcQ',
    thumbnail: 'https://picsum.photos/seed/tech1/800/450'
  }
];

export const INITIAL_SETTINGS = { agencyName: 'EntervibeCre' };
"#;

    fn snapshot() -> Vec<VideoReference> {
        let mut references = initial_references();
        references.push(VideoReference {
            id: "ref5".to_string(),
            kind: VideoKind::ShortForm,
            title: "브이로그 ‘하루’ 숏폼 #1".to_string(),
            external_url: "https://youtube.com/shorts/abc?si=1&t=2".to_string(),
            thumbnail: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        });
        references
    }

    fn source_format() -> DocumentFormat {
        DocumentFormat::for_path("constants.ts")
    }

    #[test]
    fn test_format_follows_extension() {
        assert_eq!(DocumentFormat::for_path("data/References.JSON"), DocumentFormat::Versioned);
        assert_eq!(
            source_format(),
            DocumentFormat::SourceBlock { declaration: "INITIAL_REFERENCES".to_string() }
        );
    }

    #[test]
    fn test_source_block_round_trip_through_transport() {
        let references = snapshot();
        let patched = patch(&source_format(), SOURCE, &references, "ignored").unwrap();

        // neighbouring declarations are untouched
        assert!(patched.contains("export const INITIAL_SOLUTIONS = [{ id: '1' }];"));
        assert!(patched.contains("export const INITIAL_SETTINGS = { agencyName: 'EntervibeCre' };"));
        assert!(patched.contains("export const INITIAL_REFERENCES: VideoReference[] = [\n  {"));

        let transported = decode_content(&encode_content(&patched)).unwrap();
        let reparsed = extract(&source_format(), &transported).unwrap();
        assert_eq!(reparsed, references);
    }

    #[test]
    fn test_repatching_is_stable() {
        let references = snapshot();
        let once = patch(&source_format(), SOURCE, &references, "").unwrap();
        let twice = patch(&source_format(), &once, &references, "").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_brackets_inside_strings_do_not_end_the_block() {
        let mut references = snapshot();
        references[0].title = "배열 표기 a[0]; 설명".to_string();
        references[1].external_url = "https://youtu.be/x?q=\"]\";&t=1".to_string();
        let start = "export const INITIAL_REFERENCES: VideoReference[] = [];\nexport const OTHER = 1;\n";

        let once = patch(&source_format(), start, &references, "").unwrap();
        assert_eq!(extract(&source_format(), &once).unwrap(), references);
        assert!(once.ends_with("];\nexport const OTHER = 1;\n"));

        let twice = patch(&source_format(), &once, &references, "").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_literal_with_quoted_brackets_is_replaced_whole() {
        let legacy = SOURCE.replace("테크 리뷰의 새로운 패러다임", r"it\'s [not] over];");
        let patched = patch(&source_format(), &legacy, &snapshot(), "").unwrap();
        assert_eq!(extract(&source_format(), &patched).unwrap(), snapshot());
        assert!(!patched.contains("over];"));
        assert!(patched.contains("export const INITIAL_SETTINGS = { agencyName: 'EntervibeCre' };"));
    }

    #[test]
    fn test_unterminated_block_is_pattern_not_found() {
        let broken = "export const INITIAL_REFERENCES = [\n  { id: 'ref1' }\n";
        assert_eq!(
            patch(&source_format(), broken, &snapshot(), ""),
            Err(SyncError::PatternNotFound("INITIAL_REFERENCES".to_string()))
        );
        let no_semicolon = "export const INITIAL_REFERENCES = []\nexport const OTHER = 1;\n";
        assert!(extract(&source_format(), no_semicolon).is_err());
    }

    #[test]
    fn test_missing_declaration_is_pattern_not_found() {
        let restructured = SOURCE.replace("INITIAL_REFERENCES", "REFERENCES_V2");
        assert_eq!(
            patch(&source_format(), &restructured, &snapshot(), ""),
            Err(SyncError::PatternNotFound("INITIAL_REFERENCES".to_string()))
        );
    }

    #[test]
    fn test_versioned_document_bumps_version() {
        let references = snapshot();
        let first = patch(&DocumentFormat::Versioned, "", &references, "2026. 10. 18. 10:00:00").unwrap();
        let second = patch(&DocumentFormat::Versioned, &first, &references[..2], "2026. 10. 18. 11:00:00").unwrap();

        let document: ReferenceDocument = serde_json::from_str(&second).unwrap();
        assert_eq!(document.version, 2);
        assert_eq!(document.updated_at, "2026. 10. 18. 11:00:00");
        assert_eq!(extract(&DocumentFormat::Versioned, &first).unwrap(), references);
        assert_eq!(extract(&DocumentFormat::Versioned, &second).unwrap(), references[..2].to_vec());
    }

    #[test]
    fn test_versioned_rejects_foreign_json() {
        assert!(matches!(
            patch(&DocumentFormat::Versioned, r#"{"items": []}"#, &snapshot(), ""),
            Err(SyncError::PatternNotFound(_))
        ));
    }
}
