//! Module for parsing Gene Protein Reaction strings into AST values

use crate::io::gpr_parse::lexer::LexerError;
use crate::io::gpr_parse::parser::ParseError;
use crate::metabolic_model::gene::Gene;
use crate::metabolic_model::model::Gpr;
use indexmap::IndexMap;
use thiserror::Error;

mod lexer;
pub mod parser;
mod token;

/// Parse a Gene Protein Reaction string into a GPR Tree
///
/// # Parameters
/// - `input`: &str representing the gene protein reaction rule
/// - `gene_map`: map of gene id strings to genes, genes found in the rule but missing from
///     the map are added to it
///
/// # Returns
/// Parse result which is
/// - `Ok`: The root node of the GPR tree
/// - `Err`: Returns the GprParseError describing the issue with the GPR rule which
///     was being parsed.
///
/// # Examples
/// ```rust
/// use indexmap::IndexMap;
/// use gemextract_core::io::gpr_parse::parse_gpr;
/// let gpr: &str = "ENSG00000005187 or ENSG00000183549";
/// let mut gene_map = IndexMap::new();
/// let gpr_tree = parse_gpr(gpr, &mut gene_map).unwrap();
/// assert_eq!(gene_map.len(), 2);
/// ```
pub fn parse_gpr(input: &str, gene_map: &mut IndexMap<String, Gene>) -> Result<Gpr, GprParseError> {
    // Convert the GPR string into tokens
    let tokens = lexer::Lexer::new(input).lex()?;

    // Now parse those tokens into a GPR tree
    let mut parser = parser::GPRParser::new(tokens, gene_map);
    let gpr = parser.parse()?;
    Ok(gpr)
}

/// Enum representing possible lex and parse errors
#[derive(Debug, Error)]
pub enum GprParseError {
    /// Lexing Error
    #[error("Error occurred during lexing (conversion of GPR string to tokens)")]
    LexingError(#[from] LexerError),
    /// Parsing Error
    #[error("Error occurred during parsing (conversion of tokens to GPR tree)")]
    ParsingError(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use crate::io::gpr_parse::{parse_gpr, GprParseError};
    use crate::metabolic_model::gene::Gene;
    use crate::metabolic_model::model::{Gpr, GprOperation};
    use indexmap::IndexMap;

    #[test]
    fn test_parse_gpr() {
        let gpr = "ENSG00000099624 and (ENSG00000110955 or ENSG00000241468)";
        let mut gene_map: IndexMap<String, Gene> = IndexMap::new();
        gene_map.insert(
            "ENSG00000099624".to_string(),
            Gene::new("ENSG00000099624".to_string(), Some("ATP5F1D".to_string())),
        );
        let gpr_tree = parse_gpr(gpr, &mut gene_map).unwrap();
        match gpr_tree {
            Gpr::Operation(GprOperation::And { left, right }) => {
                assert!(matches!(*left, Gpr::GeneNode(ref g) if g == "ENSG00000099624"));
                assert!(matches!(*right, Gpr::Operation(GprOperation::Or { .. })));
            }
            _ => panic!("Incorrect gpr parse"),
        }
        // Existing genes keep their names, new ones are added without one
        assert_eq!(gene_map.len(), 3);
        assert_eq!(
            gene_map.get("ENSG00000099624").unwrap().name.as_deref(),
            Some("ATP5F1D")
        );
        assert!(gene_map.get("ENSG00000241468").unwrap().name.is_none());
    }

    #[test]
    fn errors() {
        let mut gene_map: IndexMap<String, Gene> = IndexMap::new();
        assert!(matches!(
            parse_gpr("G1 | G2", &mut gene_map),
            Err(GprParseError::LexingError(_))
        ));
        assert!(matches!(
            parse_gpr("G1 G2", &mut gene_map),
            Err(GprParseError::ParsingError(_))
        ));
    }
}
