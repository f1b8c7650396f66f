//! Functions available to documents parsed from the command line.

use flatmatter_core::functions::{FlatMatterFn, FunctionError, FunctionRegistry, str_arg};
use serde_json::Value;

type Compute = fn(&[Value]) -> Result<Value, FunctionError>;

/// A function shipped with the command-line tool.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub description: &'static str,
    compute: Compute,
}

impl FlatMatterFn for Builtin {
    fn name(&self) -> &str {
        self.name
    }

    fn compute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        (self.compute)(args)
    }
}

pub const BUILTINS: &[Builtin] = &[
    Builtin { name: "to-upper", description: "Uppercase a string", compute: to_upper },
    Builtin { name: "to-lower", description: "Lowercase a string", compute: to_lower },
    Builtin { name: "trim", description: "Strip surrounding whitespace", compute: trim },
    Builtin {
        name: "concat",
        description: "Join all arguments into one string",
        compute: concat,
    },
    Builtin {
        name: "env",
        description: "Value of an environment variable, or null if unset",
        compute: env,
    },
];

/// Registry holding every builtin.
pub fn registry() -> FunctionRegistry {
    BUILTINS.iter().fold(FunctionRegistry::new(), |registry, builtin| registry.with(*builtin))
}

fn to_upper(args: &[Value]) -> Result<Value, FunctionError> {
    Ok(Value::String(str_arg(args, 0)?.to_uppercase()))
}

fn to_lower(args: &[Value]) -> Result<Value, FunctionError> {
    Ok(Value::String(str_arg(args, 0)?.to_lowercase()))
}

fn trim(args: &[Value]) -> Result<Value, FunctionError> {
    Ok(Value::String(str_arg(args, 0)?.trim().to_string()))
}

fn concat(args: &[Value]) -> Result<Value, FunctionError> {
    let joined: String = args
        .iter()
        .map(|arg| match arg {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    Ok(Value::String(joined))
}

fn env(args: &[Value]) -> Result<Value, FunctionError> {
    let name = str_arg(args, 0)?;
    Ok(std::env::var(name).map_or(Value::Null, Value::String))
}
