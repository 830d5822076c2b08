use crate::io::gpr_parse::token::Token;
use crate::metabolic_model::gene::Gene;
use crate::metabolic_model::model::{Gpr, GprOperatorType};

use indexmap::IndexMap;
use thiserror::Error;
/*
GPR Grammar:
expression -> or
or -> and ("OR" and)*;
and -> unary ("AND" unary)*;
unary -> "NOT" unary | primary  ;
primary -> GENE | "(" expression ")" ;

e.g. ( Gene1 AND Gene2) OR (Gene3 AND NOT Gene4)
 */

/// GPR Parser
pub struct GPRParser<'gm> {
    /// Vector of tokens from the GPR string
    tokens: Vec<Token>,
    /// Current token being processed
    current: usize,
    /// Map containing the Genes
    pub(crate) gene_map: &'gm mut IndexMap<String, Gene>,
}

impl<'gm> GPRParser<'gm> {
    /// Create a new GPRParser
    ///
    /// `tokens` must be terminated by [`Token::Eof`], as produced by the lexer
    pub fn new(tokens: Vec<Token>, gene_map: &'gm mut IndexMap<String, Gene>) -> GPRParser<'gm> {
        GPRParser {
            tokens,
            current: 0,
            gene_map,
        }
    }

    // region Parsing Functions

    /// Parse the token vector into a GPR AST
    pub fn parse(&mut self) -> Result<Gpr, ParseError> {
        let gpr = self.or_expression()?;
        if !self.is_at_end() {
            // If entire expression has not been parsed, and error has occured
            return Err(ParseError::EarlyTermination);
        }
        Ok(gpr)
    }

    /// `and` binds tighter than `or`, so `A or B and C` is `A or (B and C)`
    fn or_expression(&mut self) -> Result<Gpr, ParseError> {
        let mut expr = self.and_expression()?;

        while self.match_token(&[Token::Or]) {
            let right = self.and_expression()?;
            expr = Gpr::new_binary_operation(expr, GprOperatorType::Or, right)
                .map_err(|_| ParseError::InvalidBinaryOperator)?;
        }
        Ok(expr)
    }

    fn and_expression(&mut self) -> Result<Gpr, ParseError> {
        let mut expr = self.unary()?;

        while self.match_token(&[Token::And]) {
            let right = self.unary()?;
            expr = Gpr::new_binary_operation(expr, GprOperatorType::And, right)
                .map_err(|_| ParseError::InvalidBinaryOperator)?;
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Gpr, ParseError> {
        if self.match_token(&[Token::Not]) {
            let right = self.unary()?;
            return Gpr::new_unary_operation(GprOperatorType::Not, right)
                .map_err(|_| ParseError::InvalidUnaryOperator);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Gpr, ParseError> {
        if let Some(identifier) = self.match_identifier() {
            self.insert_if_needed(&identifier);
            return Ok(Gpr::new_gene_node(&identifier));
        }

        if self.match_token(&[Token::LeftParen]) {
            let expr = self.or_expression()?;
            self.consume(Token::RightParen, "Expect ')' after expression.")?;
            return Ok(expr);
        }

        Err(ParseError::ExpectedExpression)
    }

    // endregion Parsing Functions

    // region parsing helper functions

    /// Check whether the token at the current position matches one of the provided `tokens`,
    /// if it does advance [`self.current`] and return true, otherwise return false
    fn match_token(&mut self, tokens: &[Token]) -> bool {
        for t in tokens {
            if self.check(t) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Similar to [`match_token`], but for matching an identifier token. If the current
    /// token is an identifier return `Some(GeneId)`, where GeneId is the gene's string identifier,
    /// otherwise return None
    fn match_identifier(&mut self) -> Option<String> {
        if self.is_at_end() {
            return None;
        }
        if let Token::Identifier(id) = self.peek() {
            let id = id.clone();
            self.advance();
            return Some(id);
        }
        None
    }

    /// Check whether the current token matches the provided `token`
    fn check(&self, token: &Token) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek() == token
    }

    /// Advance `self.current` one position unless at end of GPR Vec
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// Check whether the parser is at the end of the source Vec
    fn is_at_end(&self) -> bool {
        matches!(self.tokens.get(self.current), None | Some(Token::Eof))
    }

    /// Get the current token
    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&Token::Eof)
    }

    /// Get the previous token
    fn previous(&self) -> &Token {
        self.current
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&Token::Eof)
    }

    /// Check whether the current token matches an input token, if it matches advance to the
    /// next token, and if it doesn't return an error. Used mainly for matching parenthesis in
    /// source GPR vec.
    fn consume(&mut self, token: Token, msg: &str) -> Result<(), ParseError> {
        if self.check(&token) {
            self.advance();
            return Ok(());
        }

        Err(ParseError::MissingToken(msg.to_string()))
    }

    // endregion parsing helper functions

    // region Gene Map Functions

    /// Check if a gene_id exists as a key in gene_map, if it doesn't insert a new gene with that id
    fn insert_if_needed(&mut self, gene_id: &str) {
        if !self.gene_map.contains_key(gene_id) {
            self.gene_map
                .insert(gene_id.to_string(), Gene::new(gene_id.to_string(), None));
        }
    }

    // endregion Gene Map Functions
}

/// Enum representing possible parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    /// Token was expected to be a binary operator but was not
    #[error("Invalid binary operator encountered, expected only `and` and `or`")]
    InvalidBinaryOperator,
    /// Token was expected to be a unary operator but was not
    #[error("Invalid unary operator encountered, expected only `not`")]
    InvalidUnaryOperator,
    /// Missing expected token (e.g. a right parenthesis)
    #[error("Missing expected token: {0}")]
    MissingToken(String),
    /// No expression found when one was expected
    #[error("No expression found, check that the GPR string is not empty")]
    ExpectedExpression,
    /// Expression was not completed when parsing terminated
    #[error("Parsing terminated early, check for a `not` between two gene identifiers/grouped expressions")]
    EarlyTermination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::gpr_parse::lexer::Lexer;
    use crate::metabolic_model::model::GprOperation;

    fn parse(source: &str, gene_map: &mut IndexMap<String, Gene>) -> Result<Gpr, ParseError> {
        let token_vec: Vec<Token> = Lexer::new(source).lex().unwrap();
        let mut parser = GPRParser::new(token_vec, gene_map);
        parser.parse()
    }

    fn gene_id(gpr: &Gpr) -> &str {
        match gpr {
            Gpr::GeneNode(gene) => gene,
            Gpr::Operation(_) => panic!("Should have been a gene"),
        }
    }

    #[test]
    fn single_gene_parse() {
        let mut gene_map = IndexMap::new();
        let gpr = parse("ENSG00000122971", &mut gene_map).unwrap();
        assert_eq!(gene_id(&gpr), "ENSG00000122971");
        assert!(gene_map.contains_key("ENSG00000122971"));
    }

    #[test]
    fn and_parse() {
        let mut gene_map = IndexMap::new();
        match parse("G1 and G2", &mut gene_map).unwrap() {
            Gpr::Operation(GprOperation::And { left, right }) => {
                assert_eq!(gene_id(&left), "G1");
                assert_eq!(gene_id(&right), "G2");
            }
            _ => panic!("Should have been an AND operation"),
        }
    }

    #[test]
    fn not_parse() {
        let mut gene_map = IndexMap::new();
        match parse("not G1", &mut gene_map).unwrap() {
            Gpr::Operation(GprOperation::Not { val }) => assert_eq!(gene_id(&val), "G1"),
            _ => panic!("Should have been a NOT operation"),
        }
    }

    #[test]
    fn grouping_parse() {
        let mut gene_map = IndexMap::new();
        match parse("(G1 or G2) and G3", &mut gene_map).unwrap() {
            Gpr::Operation(GprOperation::And { left, right }) => {
                match *left {
                    Gpr::Operation(GprOperation::Or { left, right }) => {
                        assert_eq!(gene_id(&left), "G1");
                        assert_eq!(gene_id(&right), "G2");
                    }
                    _ => panic!("Should have parsed an OR operation"),
                }
                assert_eq!(gene_id(&right), "G3");
            }
            _ => panic!("Incorrect parse (should have been an AND operation)"),
        }
        // Genes are registered in order of appearance
        let genes: Vec<&String> = gene_map.keys().collect();
        assert_eq!(genes, vec!["G1", "G2", "G3"]);
    }

    #[test]
    fn repeated_binary_parse() {
        let mut gene_map = IndexMap::new();
        match parse("G1 and G2 and G3", &mut gene_map).unwrap() {
            Gpr::Operation(GprOperation::And { left, right }) => {
                assert_eq!(gene_id(&right), "G3");
                match *left {
                    Gpr::Operation(GprOperation::And { left, right }) => {
                        assert_eq!(gene_id(&left), "G1");
                        assert_eq!(gene_id(&right), "G2");
                    }
                    _ => panic!("Incorrect parse"),
                }
            }
            _ => panic!("Incorrect parse"),
        }
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let mut gene_map = IndexMap::new();
        for rule in ["G1 or G2 and G3", "G1 or (G2 and G3)"] {
            match parse(rule, &mut gene_map).unwrap() {
                Gpr::Operation(GprOperation::Or { left, right }) => {
                    assert_eq!(gene_id(&left), "G1");
                    match *right {
                        Gpr::Operation(GprOperation::And { left, right }) => {
                            assert_eq!(gene_id(&left), "G2");
                            assert_eq!(gene_id(&right), "G3");
                        }
                        _ => panic!("Should have parsed an AND operation"),
                    }
                }
                _ => panic!("Incorrect parse (should have been an OR operation)"),
            }
        }
        match parse("G1 and G2 or G3", &mut gene_map).unwrap() {
            Gpr::Operation(GprOperation::Or { left, right }) => {
                assert!(matches!(*left, Gpr::Operation(GprOperation::And { .. })));
                assert_eq!(gene_id(&right), "G3");
            }
            _ => panic!("Incorrect parse (should have been an OR operation)"),
        }
    }

    #[test]
    fn invalid_parse() {
        let mut gene_map = IndexMap::new();
        assert_eq!(
            parse("G1 not G2", &mut gene_map).unwrap_err(),
            ParseError::EarlyTermination
        );
        assert_eq!(
            parse("(G1 or G2", &mut gene_map).unwrap_err(),
            ParseError::MissingToken("Expect ')' after expression.".to_string())
        );
        assert_eq!(
            parse("G1 and", &mut gene_map).unwrap_err(),
            ParseError::ExpectedExpression
        );
    }
}
