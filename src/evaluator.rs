use crate::error::CalcError;
use crate::lexer::{Token, TokenKind};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::collections::HashMap;

/// Mapping from variable name to its value, kept as the value's base-10
/// string form so results of any magnitude round-trip exactly. Owned by the
/// engine; mutated only by successful assignments, never cleared.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values: HashMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Stores `value` under `name`, overwriting any prior value.
    pub fn assign(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), value);
    }
}

/// Rewrites every `Variable` token into the `Number` it resolves to. The
/// validator has already rejected unknown names, so lookups here succeed;
/// a name that somehow slipped through stays a `Variable` and is skipped by
/// evaluation.
pub fn substitute_variables(tokens: &mut [Token], variables: &VariableStore) {
    for token in tokens {
        if token.kind == TokenKind::Variable {
            if let Some(value) = variables.get(&token.text) {
                token.text = value;
                token.kind = TokenKind::Number;
            }
        }
    }
}

/// Evaluates a postfix token sequence over a stack of arbitrary-precision
/// integers.
pub struct PostfixEvaluator;

impl PostfixEvaluator {
    /// An operator with missing operands treats them as zero, and an empty
    /// final stack yields zero; both are policy, not faults. Division by
    /// zero and negative `^` exponents are reported as arithmetic errors.
    pub fn evaluate(tokens: &[Token]) -> Result<BigInt, CalcError> {
        let mut stack: Vec<BigInt> = Vec::new();

        for token in tokens {
            match token.kind {
                TokenKind::Number => {
                    let value = token.text.parse::<BigInt>().map_err(|_| {
                        CalcError::arithmetic(
                            token.span(),
                            format!("Invalid number '{}'", token.text),
                        )
                    })?;
                    stack.push(value);
                }
                TokenKind::Operator => {
                    let num1 = stack.pop().unwrap_or_else(BigInt::zero);
                    let num2 = stack.pop().unwrap_or_else(BigInt::zero);
                    let result = match token.text.as_str() {
                        "+" => num2 + num1,
                        "-" => num2 - num1,
                        "*" => num2 * num1,
                        "/" => {
                            if num1.is_zero() {
                                return Err(CalcError::arithmetic(
                                    token.span(),
                                    "Division by zero".to_string(),
                                ));
                            }
                            num2 / num1
                        }
                        // `^` is the second operand raised to the first,
                        // modulo 10 -- not true exponentiation
                        "^" => {
                            if num1.sign() == Sign::Minus {
                                return Err(CalcError::arithmetic(
                                    token.span(),
                                    "Negative exponent".to_string(),
                                ));
                            }
                            num2.modpow(&num1, &BigInt::from(10))
                        }
                        _ => BigInt::zero(),
                    };
                    stack.push(result);
                }
                _ => {}
            }
        }

        Ok(stack.pop().unwrap_or_else(BigInt::zero))
    }
}
