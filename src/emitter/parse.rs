extern crate nalgebra as na;

use crate::error::ParseError;
use crate::quadrature::QuadraturePair;
use crate::table::CoefficientTable;

/// Generic nested-list view of an aggregate literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    List(Vec<Nested>),
    Number(f64),
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn expect(&mut self, want: char) -> Result<(), ParseError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == want => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                pos: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn value(&mut self) -> Result<Nested, ParseError> {
        self.skip_ws();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some('{') => self.list(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            // type-constructor prefix such as `arma::mat`
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
                self.skip_ws();
                match self.peek() {
                    Some('{') => self.list(),
                    Some(found) => Err(ParseError::UnexpectedChar {
                        found,
                        pos: self.pos,
                    }),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                pos: self.pos,
            }),
        }
    }

    fn number(&mut self) -> Result<Nested, ParseError> {
        let pos = self.pos;
        let text = self.take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        text.parse::<f64>()
            .map(Nested::Number)
            .map_err(|_| ParseError::InvalidNumber {
                text: text.to_string(),
                pos,
            })
    }

    fn list(&mut self) -> Result<Nested, ParseError> {
        self.expect('{')?;
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(Nested::List(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(Nested::List(items));
                }
                Some(found) => {
                    return Err(ParseError::UnexpectedChar {
                        found,
                        pos: self.pos,
                    })
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }
}

/// Parses a brace-delimited literal into a nested list, ignoring constructor names
/// written in front of an opening brace.
pub fn parse_literal(src: &str) -> Result<Nested, ParseError> {
    let mut parser = Parser { src, pos: 0 };
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos != src.len() {
        return Err(ParseError::TrailingInput { pos: parser.pos });
    }
    Ok(value)
}

fn numeric_row(row: &Nested, order: usize) -> Result<na::DVector<f64>, ParseError> {
    let Nested::List(items) = row else {
        return Err(ParseError::Shape(format!("order {order}: row is not a list")));
    };
    let values = items
        .iter()
        .map(|item| match item {
            Nested::Number(v) => Ok(*v),
            Nested::List(_) => Err(ParseError::Shape(format!(
                "order {order}: nested list inside a row"
            ))),
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(na::DVector::from_vec(values))
}

/// Rebuilds a coefficient table from its serialized literal.
pub fn table_from_literal(src: &str) -> Result<CoefficientTable, ParseError> {
    let Nested::List(elements) = parse_literal(src)? else {
        return Err(ParseError::Shape("top level is not a list".to_string()));
    };

    let mut pairs = Vec::with_capacity(elements.len());
    for (order, element) in elements.iter().enumerate() {
        let rows = match element {
            Nested::List(rows) if rows.len() == 2 => rows,
            _ => {
                return Err(ParseError::Shape(format!(
                    "order {order}: expected exactly two rows"
                )))
            }
        };
        let nodes = numeric_row(&rows[0], order)?;
        let weights = numeric_row(&rows[1], order)?;
        if nodes.len() != weights.len() || nodes.is_empty() {
            return Err(ParseError::Shape(format!(
                "order {order}: rows have lengths {} and {}",
                nodes.len(),
                weights.len()
            )));
        }
        pairs.push(QuadraturePair { nodes, weights });
    }

    CoefficientTable::from_pairs(pairs).ok_or_else(|| ParseError::Shape("empty table".to_string()))
}
