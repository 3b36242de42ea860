use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural problem in the expression: unbalanced brackets, `**`.
    InvalidExpression,
    /// Reference to a name with no stored value.
    UnknownVariable,
    /// `=` present but the assignment target is not a variable.
    InvalidAssignment,
    /// Fault raised while computing: division by zero, negative exponent.
    Arithmetic,
}

#[derive(Debug, Clone)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
}

impl CalcError {
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, message: String, help: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: Some(help),
        }
    }

    pub fn invalid_expression(span: Span) -> Self {
        Self::new(
            ErrorKind::InvalidExpression,
            span,
            "Invalid expression".to_string(),
        )
    }

    pub fn unknown_variable(span: Span, name: &str) -> Self {
        Self::new_with_help(
            ErrorKind::UnknownVariable,
            span,
            "Unknown variable".to_string(),
            format!("Assign it first, e.g. {} = 5", name),
        )
    }

    pub fn invalid_assignment(span: Span) -> Self {
        Self::new_with_help(
            ErrorKind::InvalidAssignment,
            span,
            "Invalid assignment".to_string(),
            "The left side of '=' must be a variable name, e.g. x = 1 + 2".to_string(),
        )
    }

    pub fn arithmetic(span: Span, message: String) -> Self {
        Self::new(ErrorKind::Arithmetic, span, message)
    }

    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<repl>");

        let color = match self.kind {
            ErrorKind::InvalidExpression => Color::Red,
            ErrorKind::UnknownVariable => Color::Yellow,
            ErrorKind::InvalidAssignment => Color::Yellow,
            ErrorKind::Arithmetic => Color::Magenta,
        };

        let kind_str = match self.kind {
            ErrorKind::InvalidExpression => "Invalid Expression",
            ErrorKind::UnknownVariable => "Unknown Variable",
            ErrorKind::InvalidAssignment => "Invalid Assignment",
            ErrorKind::Arithmetic => "Arithmetic Error",
        };

        let mut report_builder = Report::build(ReportKind::Error, filename, self.span.start)
            .with_message(format!("{}: {}", kind_str.fg(color), self.message))
            .with_label(
                Label::new((filename, self.span.start..self.span.end))
                    .with_message(&self.message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        report_builder
            .finish()
            .print((filename, Source::from(source)))
            .unwrap();
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalcError {}
