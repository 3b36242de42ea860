use crate::converter::Converter;
use crate::error::CalcError;
use crate::evaluator::{substitute_variables, PostfixEvaluator, VariableStore};
use crate::lexer::{Token, TokenKind, Tokenizer};
use crate::validator::validate;
use num_bigint::BigInt;

const HELP_TEXT: &str = "Evaluates integer arithmetic of any precision.\n  \
operators:  + - * /  and ^ (power modulo 10)\n  \
brackets:   (2 + 3) * 4\n  \
assignment: x = 5   then   x + 1\n  \
commands:   /help  /exit";

/// What one processed input line asks of the caller: text to print (if any)
/// and whether to keep reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub output: Option<String>,
    pub keep_reading: bool,
}

/// Drives the whole pipeline for one session: tokenize, collapse repeated
/// signs, split off assignments, validate, reorder to postfix, evaluate.
/// Holds the session's variable store.
pub struct Engine {
    variables: VariableStore,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            variables: VariableStore::new(),
        }
    }

    /// Sole entry point. Blank lines are a no-op, `/...` lines are
    /// meta-commands, everything else runs through the expression pipeline.
    /// Errors abort only this line; the caller should keep reading.
    pub fn input(&mut self, text: &str) -> Result<Reply, CalcError> {
        let line = text.trim();

        if line.is_empty() {
            return Ok(Reply {
                output: None,
                keep_reading: true,
            });
        }

        if line.starts_with('/') {
            return Ok(self.handle_command(line));
        }

        self.handle_expression(line)
    }

    fn handle_command(&self, command: &str) -> Reply {
        match command {
            "/exit" => Reply {
                output: Some("Bye!".to_string()),
                keep_reading: false,
            },
            "/help" => Reply {
                output: Some(HELP_TEXT.to_string()),
                keep_reading: true,
            },
            _ => Reply {
                output: Some("Unknown command".to_string()),
                keep_reading: true,
            },
        }
    }

    fn handle_expression(&mut self, line: &str) -> Result<Reply, CalcError> {
        let mut tokens = Tokenizer::new(line.to_string()).scan_tokens();
        collapse_repeated_signs(&mut tokens);

        match tokens.iter().position(|t| t.kind == TokenKind::Equals) {
            Some(separator) => self.handle_assignment(tokens, separator),
            None => self.handle_calculation(tokens),
        }
    }

    /// The first `=` is the separator; the target is the token at index 0
    /// and the right-hand expression is everything after the separator.
    /// Assignments print nothing on success.
    fn handle_assignment(
        &mut self,
        tokens: Vec<Token>,
        separator: usize,
    ) -> Result<Reply, CalcError> {
        let target = &tokens[0];
        if target.kind != TokenKind::Variable {
            return Err(CalcError::invalid_assignment(target.span()));
        }
        let name = target.text.clone();

        let expression: Vec<Token> = tokens[separator + 1..].to_vec();
        let value = self.calculate(expression)?;
        self.variables.assign(&name, value.to_string());

        Ok(Reply {
            output: None,
            keep_reading: true,
        })
    }

    fn handle_calculation(&mut self, tokens: Vec<Token>) -> Result<Reply, CalcError> {
        let value = self.calculate(tokens)?;
        Ok(Reply {
            output: Some(value.to_string()),
            keep_reading: true,
        })
    }

    fn calculate(&self, tokens: Vec<Token>) -> Result<BigInt, CalcError> {
        validate(&tokens, &self.variables)?;
        let mut postfix = Converter::convert(tokens);
        substitute_variables(&mut postfix, &self.variables);
        PostfixEvaluator::evaluate(&postfix)
    }
}

/// One forward pass collapsing adjacent sign pairs: a repeated `+` loses its
/// second token, a repeated `-` does the same and the first becomes `+`.
/// The index advances after every comparison and the pass never re-scans,
/// so runs of three or more signs only collapse their first pair.
fn collapse_repeated_signs(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        if tokens[i].text == "+" && tokens[i + 1].text == "+" {
            tokens.remove(i + 1);
        } else if tokens[i].text == "-" && tokens[i + 1].text == "-" {
            tokens.remove(i + 1);
            tokens[i].text = "+".to_string();
        }
        i += 1;
    }
}
