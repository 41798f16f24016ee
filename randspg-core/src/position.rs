/*
 * Interpreting "x,-y,z+1/2"-style position strings.
 *
 * Crystallographic position triplets allow a few shorthands that a plain
 * expression engine rejects: implicit products ("2x") and integer fractions
 * that must divide as reals ("1/2"). `normalize` rewrites a component into a
 * form evalexpr accepts, then the component is evaluated with x, y, z bound in
 * the context.
 */

use evalexpr::{
    eval_float_with_context, ContextWithMutableVariables, DefaultNumericTypes, HashMapContext,
    Value,
};
use thiserror::Error;

use crate::math::Vector3;
use crate::structure::FracCoord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("empty coordinate component")]
    EmptyComponent,

    #[error("expected 3 comma-separated components, got {0}")]
    WrongComponentCount(usize),

    #[error("cannot evaluate coordinate component '{component}': {message}")]
    Eval { component: String, message: String },
}

/// Rewrite one component so evalexpr can take it: implicit products get a
/// `*` ("2x" -> "2.0*x"), bare integer literals become floats ("1/2" ->
/// "1.0/2.0").
fn normalize(component: &str) -> String {
    let chars: Vec<char> = component.chars().collect();
    let mut out = String::with_capacity(component.len() + 8);

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut has_dot = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                has_dot = has_dot || chars[i] == '.';
                i += 1;
            }
            out.extend(chars[start..i].iter());
            if !has_dot {
                out.push_str(".0");
            }
            if i < chars.len() && matches!(chars[i], 'x' | 'y' | 'z') {
                out.push('*');
            }
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// Evaluate one component of a position string at the given variable values.
///
/// Accepts the crystallographic forms: `"x"`, `"-y"`, `"1/2+x"`, `"2x"`,
/// `"0.25"`.
///
/// # Errors
/// `EmptyComponent` on an empty string, `Eval` if the expression does not
/// evaluate to a number.
pub fn interpret_component(
    component: &str,
    x: f64,
    y: f64,
    z: f64,
) -> Result<f64, PositionError> {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return Err(PositionError::EmptyComponent);
    }

    let eval_err = |err: String| PositionError::Eval {
        component: trimmed.to_string(),
        message: err,
    };

    let mut ctx = HashMapContext::<DefaultNumericTypes>::new();
    for (name, value) in [("x", x), ("y", y), ("z", z)] {
        ctx.set_value(name.to_string(), Value::from_float(value))
            .map_err(|err| eval_err(err.to_string()))?;
    }

    eval_float_with_context(&normalize(trimmed), &ctx).map_err(|err| eval_err(err.to_string()))
}

/// A parsed `"x,y,z"`-style position, one expression per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTriplet {
    components: [String; 3],
}

impl PositionTriplet {
    /// # Errors
    /// `WrongComponentCount` unless the string splits into exactly three
    /// comma-separated components.
    pub fn parse(s: &str) -> Result<Self, PositionError> {
        let parts: Vec<&str> = s.split(',').collect();
        let [a, b, c] = parts[..] else {
            return Err(PositionError::WrongComponentCount(parts.len()));
        };
        Ok(PositionTriplet {
            components: [a.trim().to_string(), b.trim().to_string(), c.trim().to_string()],
        })
    }

    #[must_use]
    pub fn components(&self) -> [&str; 3] {
        [
            self.components[0].as_str(),
            self.components[1].as_str(),
            self.components[2].as_str(),
        ]
    }

    /// A triplet is unique when no component mentions a variable, so every
    /// evaluation lands on the same point.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        !self
            .components
            .iter()
            .any(|c| c.contains(['x', 'y', 'z']))
    }

    /// # Errors
    /// `Eval` if any component fails to evaluate.
    pub fn eval(&self, x: f64, y: f64, z: f64) -> Result<Vector3<FracCoord>, PositionError> {
        let fx = interpret_component(&self.components[0], x, y, z)?;
        let fy = interpret_component(&self.components[1], x, y, z)?;
        let fz = interpret_component(&self.components[2], x, y, z)?;
        Ok(Vector3([
            FracCoord::from(fx),
            FracCoord::from(fy),
            FracCoord::from(fz),
        ]))
    }
}
