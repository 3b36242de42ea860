use crate::error::{CalcError, Span};
use crate::evaluator::VariableStore;
use crate::lexer::{Token, TokenKind};

/// Screens a token sequence for errors before any postfix work happens.
/// Three independent checks run in a fixed order and the first failure
/// wins: bracket balance, unknown variables, doubled `*`.
pub fn validate(tokens: &[Token], variables: &VariableStore) -> Result<(), CalcError> {
    let mut left_brackets = 0usize;
    let mut right_brackets = 0usize;
    for token in tokens {
        if token.kind == TokenKind::Bracket {
            if token.is_left_bracket() {
                left_brackets += 1;
            } else {
                right_brackets += 1;
            }
        }
    }
    if left_brackets != right_brackets {
        return Err(CalcError::invalid_expression(sequence_span(tokens)));
    }

    for token in tokens {
        if token.kind == TokenKind::Variable && !variables.contains(&token.text) {
            return Err(CalcError::unknown_variable(token.span(), &token.text));
        }
    }

    // `**` is adjacency in the token sequence, not in the source text
    for pair in tokens.windows(2) {
        if pair[0].text == "*" && pair[1].text == "*" {
            return Err(CalcError::invalid_expression(pair[1].span()));
        }
    }

    Ok(())
}

fn sequence_span(tokens: &[Token]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Span::new(first.position, last.span().end),
        _ => Span::single(0),
    }
}
