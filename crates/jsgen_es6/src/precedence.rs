//! Operator precedence, from the loosest to the tightest binding.

use crate::ast::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Sequence,
    Yield,
    Assignment,
    Conditional,
    ArrowFunction,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponential,
    Prefix,
    Postfix,
    New,
    Call,
    Member,
    Primary,
}

impl BinaryOperator {
    pub fn precedence(&self) -> Precedence {
        use self::BinaryOperator::*;
        match *self {
            Sequence => Precedence::Sequence,
            LogicalOr => Precedence::LogicalOr,
            LogicalAnd => Precedence::LogicalAnd,
            BitOr => Precedence::BitwiseOr,
            BitXor => Precedence::BitwiseXor,
            BitAnd => Precedence::BitwiseAnd,
            Equal | NotEqual | StrictEqual | StrictNotEqual => Precedence::Equality,
            LessThan | LessThanEqual | GreaterThan | GreaterThanEqual | In | Instanceof => {
                Precedence::Relational
            }
            Lsh | Rsh | Ursh => Precedence::Shift,
            Plus | Minus => Precedence::Additive,
            Mul | Div | Mod => Precedence::Multiplicative,
            Exp => Precedence::Exponential,
        }
    }

    /// `a ** b ** c` groups as `a ** (b ** c)`, every other operator groups to the left.
    pub fn is_right_associative(&self) -> bool {
        *self == BinaryOperator::Exp
    }
}

impl Expression {
    /// The precedence of the tightest-binding operator at the root of this expression.
    pub fn precedence(&self) -> Precedence {
        match *self {
            Expression::LiteralBooleanExpression(_)
            | Expression::LiteralInfinityExpression(_)
            | Expression::LiteralNullExpression(_)
            | Expression::LiteralNumericExpression(_)
            | Expression::LiteralRegExpExpression(_)
            | Expression::LiteralStringExpression(_)
            | Expression::ArrayExpression(_)
            | Expression::ClassExpression(_)
            | Expression::FunctionExpression(_)
            | Expression::IdentifierExpression(_)
            | Expression::ObjectExpression(_)
            | Expression::ThisExpression(_) => Precedence::Primary,
            Expression::ArrowExpression(_)
            | Expression::AssignmentExpression(_)
            | Expression::CompoundAssignmentExpression(_)
            | Expression::YieldExpression(_)
            | Expression::YieldGeneratorExpression(_) => Precedence::Assignment,
            Expression::AwaitExpression(_) | Expression::UnaryExpression(_) => Precedence::Prefix,
            Expression::BinaryExpression(ref binary) => binary.operator.precedence(),
            Expression::CallExpression(_) => Precedence::Call,
            Expression::ConditionalExpression(_) => Precedence::Conditional,
            Expression::ComputedMemberExpression(ref member) => member.object.member_precedence(),
            Expression::StaticMemberExpression(ref member) => member.object.member_precedence(),
            Expression::NewExpression(ref new) => new.precedence(),
            Expression::NewTargetExpression(_) => Precedence::Member,
            Expression::TemplateExpression(ref template) => template.precedence(),
            Expression::UpdateExpression(ref update) => {
                if update.is_prefix {
                    Precedence::Prefix
                } else {
                    Precedence::Postfix
                }
            }
        }
    }
}

impl NewExpression {
    /// `new A` binds more loosely than `new A()`.
    pub fn precedence(&self) -> Precedence {
        if self.arguments.is_empty() {
            Precedence::New
        } else {
            Precedence::Member
        }
    }
}

impl TemplateExpression {
    pub fn precedence(&self) -> Precedence {
        match self.tag {
            Some(ref tag) if tag.precedence() == Precedence::Call => Precedence::Call,
            _ => Precedence::Member,
        }
    }
}

impl ExpressionOrSuper {
    /// The precedence of a member expression whose object is `self`.
    ///
    /// `f().x` is still a call expression and may not appear as the callee of `new`
    /// without parentheses.
    pub fn member_precedence(&self) -> Precedence {
        match *self {
            ExpressionOrSuper::Expression(ref object) if object.precedence() == Precedence::Call => {
                Precedence::Call
            }
            _ => Precedence::Member,
        }
    }

    /// The precedence of the object, `Super` counting as primary.
    pub fn precedence(&self) -> Precedence {
        match *self {
            ExpressionOrSuper::Expression(ref object) => object.precedence(),
            ExpressionOrSuper::Super(_) => Precedence::Primary,
        }
    }
}

impl SpreadElementOrExpression {
    /// The precedence of the argument, a spread element binding as tightly as a primary.
    pub fn precedence(&self) -> Precedence {
        match *self {
            SpreadElementOrExpression::Expression(ref expression) => expression.precedence(),
            SpreadElementOrExpression::SpreadElement(_) => Precedence::Primary,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(name: &'static str) -> Expression {
        IdentifierExpression { name: name.into() }.into()
    }

    fn call(callee: Expression) -> Expression {
        CallExpression {
            callee: callee.into(),
            arguments: vec![],
        }
        .into()
    }

    #[test]
    fn test_precedence_ladder() {
        assert!(Precedence::Sequence < Precedence::Assignment);
        assert!(Precedence::Assignment < Precedence::Conditional);
        assert!(Precedence::Multiplicative < Precedence::Exponential);
        assert!(Precedence::Call < Precedence::Member);
        assert!(Precedence::Member < Precedence::Primary);
        assert_eq!(BinaryOperator::In.precedence(), Precedence::Relational);
        assert_eq!(BinaryOperator::Sequence.precedence(), Precedence::Sequence);
    }

    #[test]
    fn test_member_of_call_is_call() {
        let member: Expression = StaticMemberExpression {
            object: call(id("f")).into(),
            property: "x".into(),
        }
        .into();
        assert_eq!(member.precedence(), Precedence::Call);

        let member: Expression = StaticMemberExpression {
            object: id("f").into(),
            property: "x".into(),
        }
        .into();
        assert_eq!(member.precedence(), Precedence::Member);

        let member: Expression = ComputedMemberExpression {
            object: Super {}.into(),
            expression: id("x"),
        }
        .into();
        assert_eq!(member.precedence(), Precedence::Member);
    }

    #[test]
    fn test_new_precedence_depends_on_arguments() {
        let bare: Expression = NewExpression {
            callee: id("A"),
            arguments: vec![],
        }
        .into();
        assert_eq!(bare.precedence(), Precedence::New);
        let with_arguments: Expression = NewExpression {
            callee: id("A"),
            arguments: vec![id("b").into()],
        }
        .into();
        assert_eq!(with_arguments.precedence(), Precedence::Member);
    }
}
