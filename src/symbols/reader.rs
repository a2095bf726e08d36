//! Line-oriented reader for the symbol file format.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{Result, TbgenError};
use crate::symbols::SymbolCorpus;
use crate::types::{Symbol, SymbolKind, BEGIN_SYMBOL, END_SYMBOL};

/// Read a symbol corpus from a file.
pub fn read_symbols(path: impl AsRef<Path>) -> Result<SymbolCorpus> {
    let file = File::open(path)?;
    parse_symbols(BufReader::new(file))
}

/// Parse a symbol block from a buffered reader.
///
/// Only lines between `BEGINSYMBOL` and `ENDSYMBOL` are considered; blank
/// lines and `//` comments are skipped. Every remaining line must be
/// `<kind> : <name>` with kind `concept` or `role`.
pub fn parse_symbols(reader: impl BufRead) -> Result<SymbolCorpus> {
    let mut corpus = SymbolCorpus::new();
    let mut in_block = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if line == BEGIN_SYMBOL {
            in_block = true;
            continue;
        }
        if line == END_SYMBOL {
            break;
        }
        if !in_block {
            continue;
        }

        let (kind, name) = line.split_once(':').ok_or_else(|| TbgenError::MalformedSymbol {
            line: index + 1,
            found: line.to_string(),
        })?;
        let kind = kind.trim();
        let kind = SymbolKind::parse(kind).ok_or_else(|| TbgenError::MalformedSymbol {
            line: index + 1,
            found: kind.to_string(),
        })?;

        corpus.push(Symbol {
            kind,
            name: name.trim().to_string(),
        });
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parses_block_skipping_comments_and_blanks() {
        let input = "\
// generated corpus
BEGINSYMBOL

role : hasPart
// a comment inside the block
concept : Engine
concept : Car
ENDSYMBOL
this line is outside the block and ignored
";
        let corpus = parse_symbols(Cursor::new(input)).unwrap();
        assert_eq!(corpus.roles(), ["hasPart"]);
        assert_eq!(corpus.concepts(), ["Engine", "Car"]);
    }

    #[test]
    fn test_lines_outside_block_are_ignored() {
        let input = "concept : NotParsed\nBEGINSYMBOL\nrole : r0\nENDSYMBOL\n";
        let corpus = parse_symbols(Cursor::new(input)).unwrap();
        assert!(corpus.concepts().is_empty());
        assert_eq!(corpus.roles(), ["r0"]);
    }

    #[test]
    fn test_unknown_kind_is_malformed() {
        let input = "BEGINSYMBOL\nindividual : Bob\nENDSYMBOL\n";
        let err = parse_symbols(Cursor::new(input)).unwrap_err();
        match err {
            TbgenError::MalformedSymbol { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, "individual");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let input = "BEGINSYMBOL\nrole hasPart\nENDSYMBOL\n";
        assert!(matches!(
            parse_symbols(Cursor::new(input)),
            Err(TbgenError::MalformedSymbol { .. })
        ));
    }
}
