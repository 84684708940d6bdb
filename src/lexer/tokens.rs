//! Token definitions for the bracket alphabet
//!
//! This module defines the token kinds produced by the lexer and the
//! annotated token value the balancer works with. Kinds are defined using
//! the logos derive macro for efficient tokenization; the annotation is an
//! `Origin` tag recording where each token came from.
use std::fmt;

use logos::Logos;

/// The two bracket families. Each opening kind closes with exactly one
/// closing kind of the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BracketKind {
    Paren,
    Curly,
}

impl BracketKind {
    /// The opening token kind of this family
    pub fn opener(&self) -> TokenKind {
        match self {
            BracketKind::Paren => TokenKind::LParen,
            BracketKind::Curly => TokenKind::LCurly,
        }
    }

    /// The closing token kind of this family
    pub fn closer(&self) -> TokenKind {
        match self {
            BracketKind::Paren => TokenKind::RParen,
            BracketKind::Curly => TokenKind::RCurly,
        }
    }
}

/// All recognized tokens: the four bracket characters
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LCurly,
    #[token("}")]
    RCurly,
}

impl TokenKind {
    /// Check if this kind opens a bracket pair
    pub fn is_opener(&self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LCurly)
    }

    /// Check if this kind closes a bracket pair
    pub fn is_closer(&self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RCurly)
    }

    /// The bracket family this kind belongs to
    pub fn bracket_kind(&self) -> BracketKind {
        match self {
            TokenKind::LParen | TokenKind::RParen => BracketKind::Paren,
            TokenKind::LCurly | TokenKind::RCurly => BracketKind::Curly,
        }
    }

    /// The source character this kind stands for
    pub fn glyph(&self) -> char {
        match self {
            TokenKind::LParen => '(',
            TokenKind::RParen => ')',
            TokenKind::LCurly => '{',
            TokenKind::RCurly => '}',
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LCurly => "LCURLY",
            TokenKind::RCurly => "RCURLY",
        };
        write!(f, "{}", name)
    }
}

/// Provenance of a token in an annotated sequence
///
/// - `Real`: present in the source and structurally valid (part of a matched
///   pair, or an opener still open).
/// - `Synthetic`: inserted by the balancer to close an opener that had no
///   matching closer in the source.
/// - `Ignored`: present in the source but structurally superfluous (a closer
///   with no opener to match). Kept in the sequence for position stability;
///   a later edit may revive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Origin {
    Real,
    Synthetic,
    Ignored,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::Real => "REAL",
            Origin::Synthetic => "SYNTHETIC",
            Origin::Ignored => "IGNORED",
        };
        write!(f, "{}", name)
    }
}

/// An annotated token: the source text it came from (empty for synthetic
/// tokens), its kind, and its origin. Immutable value; equality is
/// structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub source: String,
    pub kind: TokenKind,
    pub origin: Origin,
}

impl Token {
    /// A token backed by a source character, with `Real` origin
    pub fn real(kind: TokenKind) -> Token {
        Token {
            source: kind.glyph().to_string(),
            kind,
            origin: Origin::Real,
        }
    }

    /// A balancer-fabricated closer with no source text
    pub fn synthetic(kind: TokenKind) -> Token {
        Token {
            source: String::new(),
            kind,
            origin: Origin::Synthetic,
        }
    }

    /// Structural copy with only the origin replaced
    pub fn with_origin(&self, origin: Origin) -> Token {
        Token {
            source: self.source.clone(),
            kind: self.kind,
            origin,
        }
    }

    /// Check if this token was fabricated by the balancer
    pub fn is_synthetic(&self) -> bool {
        self.origin == Origin::Synthetic
    }
}
