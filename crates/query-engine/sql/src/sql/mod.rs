//! A small SQL AST and its rendering into query text.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
