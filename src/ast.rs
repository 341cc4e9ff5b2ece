use crate::interpreter::lexer::TokenKind;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Children are owned by their parent, so every tree is acyclic. Nodes are
/// never changed after the parser builds them; evaluation only mutates the
/// variable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, kept as source text until evaluation.
    Number {
        /// The literal as written.
        text:     String,
        /// Offset in the source line.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Offset in the source line.
        position: usize,
    },
    /// An arithmetic operation or an assignment.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand, or the assignment target.
        left:     Box<Self>,
        /// Right operand, or the assigned value.
        right:    Box<Self>,
        /// Offset of the operator token.
        position: usize,
    },
}

impl Expr {
    /// Gets the source offset of `self`.
    /// ## Example
    /// ```
    /// use tally::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

impl Expr {
    /// Placeholder leaf left behind when children are moved out on drop.
    const fn hollow() -> Self {
        Self::Number { text:     String::new(),
                       position: 0, }
    }

    /// Moves the children of a binary node into `pending`.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(std::mem::replace(left.as_mut(), Self::hollow()));
            pending.push(std::mem::replace(right.as_mut(), Self::hollow()));
        }
    }
}

/// Flat chains nest one level per operator, so the tree is torn down with a
/// worklist instead of the recursive default.
impl Drop for Expr {
    fn drop(&mut self) {
        if !matches!(self, Self::BinaryOp { .. }) {
            return;
        }
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl std::fmt::Display for Expr {
    /// Renders the expression fully parenthesised, which makes the flat
    /// left-to-right grouping visible.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut spine = Vec::new();
        let mut node = self;
        loop {
            match node {
                Self::BinaryOp { op: BinaryOperator::Arithmetic(op),
                                 left,
                                 right,
                                 .. } => {
                    spine.push((op, right));
                    node = left.as_ref();
                },
                Self::BinaryOp { op: BinaryOperator::Assign,
                                 left,
                                 right,
                                 .. } => {
                    write!(f, "{}{left} = {right}", "(".repeat(spine.len()))?;
                    break;
                },
                Self::Number { text: leaf, .. } | Self::Variable { name: leaf, .. } => {
                    write!(f, "{}{leaf}", "(".repeat(spine.len()))?;
                    break;
                },
            }
        }
        for (op, right) in spine.into_iter().rev() {
            write!(f, " {op} {right})")?;
        }
        Ok(())
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// One of `+ - * / %`.
    Arithmetic(ArithmeticOperator),
    /// Assignment (`=`)
    Assign,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic(op) => write!(f, "{op}"),
            Self::Assign => write!(f, "="),
        }
    }
}

impl From<ArithmeticOperator> for BinaryOperator {
    fn from(op: ArithmeticOperator) -> Self {
        Self::Arithmetic(op)
    }
}

/// An operator that combines two values into a new one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Rem,
}

impl ArithmeticOperator {
    /// Maps an arithmetic token kind to its operator.
    ///
    /// Returns `None` for every other kind, including `=`: assignment is only
    /// recognised at the start of a statement.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Multi => Some(Self::Mul),
            TokenKind::Division => Some(Self::Div),
            TokenKind::Remainder => Some(Self::Rem),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        };
        write!(f, "{operator}")
    }
}

/// A top-level statement: exactly one expression parsed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The expression to evaluate.
    pub expr: Expr,
}

impl Statement {
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

/// The statements parsed from one source line, in source order.
///
/// A line normally holds a single statement, but tokens left over after a
/// complete statement are parsed as further statements. The value of a
/// program is the value of its last statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
