//! Utility functions shared by the import-style rules

use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, CallExpression, Expression, FunctionBody, Statement,
    StringLiteral,
};

/// Check if a binding name follows the component naming convention:
/// an uppercase first character followed by alphanumeric characters only.
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Check if a relative import specifier (starts with `./` or `../`)
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Check if the first argument of a call is itself a function value
/// (the higher-order wrapping pattern, e.g. `memo(() => ...)`).
pub fn first_argument_is_function(call: &CallExpression) -> bool {
    match call.arguments.first() {
        Some(Argument::SpreadElement(_)) | None => false,
        Some(arg) => arg.as_expression().is_some_and(|expr| {
            matches!(
                expr,
                Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_)
            )
        }),
    }
}

/// Get the sole string-literal argument of a call, if that is the call's shape
pub fn sole_string_argument<'a, 'b>(call: &'b CallExpression<'a>) -> Option<&'b StringLiteral<'a>> {
    if call.arguments.len() != 1 {
        return None;
    }
    match call.arguments[0].as_expression() {
        Some(Expression::StringLiteral(lit)) => Some(lit),
        _ => None,
    }
}

/// Check whether an arrow function body is, or returns, a JSX expression
pub fn arrow_returns_jsx(arrow: &ArrowFunctionExpression) -> bool {
    if let Some(expr) = arrow.get_expression() {
        return expression_is_jsx(expr);
    }
    body_returns_jsx(&arrow.body)
}

/// Check whether any return statement in a function body produces JSX
pub fn body_returns_jsx(body: &FunctionBody) -> bool {
    body.statements.iter().any(statement_returns_jsx)
}

fn statement_returns_jsx(stmt: &Statement) -> bool {
    match stmt {
        Statement::ReturnStatement(ret) => {
            ret.argument.as_ref().is_some_and(|e| expression_is_jsx(e))
        }
        Statement::BlockStatement(block) => block.body.iter().any(statement_returns_jsx),
        Statement::IfStatement(if_stmt) => {
            statement_returns_jsx(&if_stmt.consequent)
                || if_stmt
                    .alternate
                    .as_ref()
                    .is_some_and(|s| statement_returns_jsx(s))
        }
        _ => false,
    }
}

fn expression_is_jsx(expr: &Expression) -> bool {
    match expr {
        Expression::JSXElement(_) | Expression::JSXFragment(_) => true,
        Expression::ParenthesizedExpression(paren) => expression_is_jsx(&paren.expression),
        Expression::ConditionalExpression(cond) => {
            expression_is_jsx(&cond.consequent) || expression_is_jsx(&cond.alternate)
        }
        Expression::LogicalExpression(logical) => expression_is_jsx(&logical.right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pascal_case() {
        assert!(is_pascal_case("Foo"));
        assert!(is_pascal_case("FooBar2"));
        assert!(!is_pascal_case("foo"));
        assert!(!is_pascal_case("Foo-Bar"));
        assert!(!is_pascal_case(""));
        assert!(!is_pascal_case("_Foo"));
    }

    #[test]
    fn test_is_relative_specifier() {
        assert!(is_relative_specifier("./a"));
        assert!(is_relative_specifier("../a/b"));
        assert!(!is_relative_specifier("lodash"));
        assert!(!is_relative_specifier("@/components"));
        assert!(!is_relative_specifier("/abs/path"));
    }
}
