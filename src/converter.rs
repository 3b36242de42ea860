use crate::lexer::{Token, TokenKind};

/// Reorders an infix token sequence into postfix order using the
/// shunting-yard algorithm over the token priority table.
pub struct Converter;

impl Converter {
    pub fn convert(tokens: Vec<Token>) -> Vec<Token> {
        let mut output: Vec<Token> = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token.kind {
                TokenKind::Number | TokenKind::Variable => output.push(token),
                TokenKind::Operator => {
                    while stack
                        .last()
                        .map_or(false, |top| top.priority() >= token.priority())
                    {
                        if let Some(top) = stack.pop() {
                            output.push(top);
                        }
                    }
                    stack.push(token);
                }
                TokenKind::Bracket => {
                    if token.is_left_bracket() {
                        stack.push(token);
                    } else {
                        // Pop to the output until the first bracket on the
                        // stack, then discard that bracket. Only `(` is ever
                        // pushed, so the entry found is the matching one; an
                        // exhausted stack just stops the loop.
                        loop {
                            match stack.pop() {
                                Some(top) if top.kind != TokenKind::Bracket => output.push(top),
                                _ => break,
                            }
                        }
                    }
                }
                TokenKind::Equals => {
                    // Stripped by assignment extraction; stray ones drop out
                }
            }
        }

        while let Some(top) = stack.pop() {
            output.push(top);
        }

        output
    }
}
