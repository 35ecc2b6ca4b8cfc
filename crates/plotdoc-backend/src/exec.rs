//! Shared statement evaluation for the built-in backends.
//!
//! Both reference backends interpret the same small statement vocabulary:
//! assignments bind data vectors, `rand(n)` draws from the caller's seeded
//! generator, and plot-family calls split into positional data and keyword
//! attributes.

use std::collections::HashMap;

use plotdoc_catalog::Node;
use rand::RngExt;
use rand::rngs::StdRng;

use crate::backend::BackendError;

/// Variable bindings accumulated by assignments within one example.
#[derive(Debug, Default)]
pub(crate) struct Env {
    vars: HashMap<String, Vec<f64>>,
}

impl Env {
    pub(crate) fn set(&mut self, name: &str, data: Vec<f64>) {
        self.vars.insert(name.to_owned(), data);
    }

    pub(crate) fn get(&self, name: &str) -> Result<Vec<f64>, BackendError> {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| BackendError::UndefinedVariable(name.to_owned()))
    }
}

/// Evaluate a data-producing node to a vector of samples.
pub(crate) fn eval_data(
    node: &Node,
    env: &Env,
    rng: &mut StdRng,
) -> Result<Vec<f64>, BackendError> {
    match node {
        Node::Ident(name) => env.get(name),
        Node::List(items) => items.iter().map(eval_scalar).collect(),
        Node::Call { name, args } if name == "rand" => {
            let count = match args.first() {
                Some(Node::Int(n)) if *n > 0 => usize::try_from(*n).unwrap_or(0),
                _ => return Err(BackendError::Unsupported(node.to_string())),
            };
            Ok((0..count).map(|_| rng.random::<f64>()).collect())
        }
        Node::Int(_) | Node::Float(_) => Ok(vec![eval_scalar(node)?]),
        other => Err(BackendError::Unsupported(other.to_string())),
    }
}

fn eval_scalar(node: &Node) -> Result<f64, BackendError> {
    match node {
        Node::Int(value) => {
            // i64 -> f64 is fine for the magnitudes catalog data uses
            #[allow(clippy::cast_precision_loss)]
            Ok(*value as f64)
        }
        Node::Float(value) => Ok(*value),
        other => Err(BackendError::Unsupported(other.to_string())),
    }
}

/// Positional data nodes and keyword attributes of one plot-family call.
pub(crate) struct CallParts<'a> {
    pub(crate) data: Vec<&'a Node>,
    /// Keyword name paired with the canonical display text of its value.
    pub(crate) attrs: Vec<(&'a str, String)>,
}

/// Split call arguments into data and keyword attributes. Source-position
/// markers are skipped.
pub(crate) fn split_args(args: &[Node]) -> CallParts<'_> {
    let mut data = Vec::new();
    let mut attrs = Vec::new();
    for arg in args {
        match arg {
            Node::Keyword { name, value } => attrs.push((name.as_str(), value.to_string())),
            Node::LineInfo { .. } => {}
            other => data.push(other),
        }
    }
    CallParts { data, attrs }
}

/// Series kind implied by a call: an explicit `seriestype` keyword wins,
/// otherwise the call name itself (with `plot` meaning `line`).
pub(crate) fn series_kind(call_name: &str, parts: &CallParts<'_>) -> String {
    for (name, value) in &parts.attrs {
        if *name == "seriestype" {
            return value.trim_start_matches(':').to_owned();
        }
    }
    if call_name == "plot" {
        "line".to_owned()
    } else {
        call_name.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_rand_is_deterministic_per_seed() {
        let env = Env::default();
        let node = Node::call("rand", vec![Node::Int(8)]);
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        assert_eq!(
            eval_data(&node, &env, &mut a).unwrap(),
            eval_data(&node, &env, &mut b).unwrap()
        );
    }

    #[test]
    fn test_undefined_variable() {
        let env = Env::default();
        let mut rng = StdRng::seed_from_u64(0);
        let err = eval_data(&Node::ident("missing"), &env, &mut rng).unwrap_err();
        assert!(matches!(err, BackendError::UndefinedVariable(name) if name == "missing"));
    }

    #[test]
    fn test_list_literal() {
        let env = Env::default();
        let mut rng = StdRng::seed_from_u64(0);
        let node = Node::List(vec![Node::Int(1), Node::Float(2.5)]);
        assert_eq!(eval_data(&node, &env, &mut rng).unwrap(), vec![1.0, 2.5]);
    }

    #[test]
    fn test_series_kind_from_keyword() {
        let args = vec![Node::ident("y"), Node::kw("seriestype", Node::sym("scatter"))];
        let parts = split_args(&args);
        assert_eq!(series_kind("plot", &parts), "scatter");
        assert_eq!(parts.data.len(), 1);
    }

    #[test]
    fn test_series_kind_from_call_name() {
        let args = vec![Node::ident("y")];
        let parts = split_args(&args);
        assert_eq!(series_kind("histogram", &parts), "histogram");
        assert_eq!(series_kind("plot", &parts), "line");
    }
}
