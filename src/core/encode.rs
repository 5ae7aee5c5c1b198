//! Positional argument encoding for the solver executable.
//!
//! The solver parses its command line by position, not by name. The
//! contract is exactly eight tokens, in this order:
//!
//! | pos | field | wire form |
//! |-----|------------------|--------------------|
//! | 0 | run mode | `0`, `1`, `2`, `10`, `100` |
//! | 1 | mesh path | path string |
//! | 2 | lambda_init | decimal float |
//! | 3 | test_id | decimal float |
//! | 4 | method | `0..=3` |
//! | 5 | upper_bound | decimal float |
//! | 6 | bijective | `0` or `1` |
//! | 7 | init_cut | `0` or `1` |
//!
//! Floats use `Display`'s decimal form, which round-trips through the
//! solver's `stod`-style parse; scientific notation is never produced.
use crate::core::params::{Invocation, SolverParams};
use crate::error::{Error, Result};
use crate::types::{InitCut, MethodType, RunMode};

/// Length of the solver's argument vector.
pub const ARG_COUNT: usize = 8;

/// Serialize an invocation to the fixed eight-token argument vector.
///
/// Encoding is deterministic: the same invocation always yields the same
/// tokens. Validation has already happened at construction, so this
/// cannot fail.
pub fn encode(invocation: &Invocation) -> Vec<String> {
    vec![
        invocation.run_mode.code().to_string(),
        invocation.mesh_path.to_string_lossy().into_owned(),
        invocation.params.lambda_init.to_string(),
        invocation.params.test_id.to_string(),
        invocation.params.method.code().to_string(),
        invocation.params.upper_bound.to_string(),
        u32::from(invocation.params.bijective).to_string(),
        invocation.params.init_cut.code().to_string(),
    ]
}

/// Parse a token sequence back into an invocation, by the same rules the
/// solver applies. Inverse of [`encode`] for every valid invocation,
/// except that out-of-range init-cut codes canonicalize to the random
/// 2-edge cut, as the solver itself does.
pub fn decode(tokens: &[String]) -> Result<Invocation> {
    if tokens.len() != ARG_COUNT {
        return Err(Error::InvalidArgument {
            arg: "argv",
            value: format!("{} tokens, expected {}", tokens.len(), ARG_COUNT),
        });
    }

    let run_mode = tokens[0]
        .parse::<u32>()
        .ok()
        .and_then(RunMode::from_code)
        .ok_or_else(|| Error::InvalidArgument {
            arg: "run_mode",
            value: tokens[0].clone(),
        })?;

    let lambda_init = parse_float("lambda_init", &tokens[2])?;
    let test_id = parse_float("test_id", &tokens[3])?;

    let method = tokens[4]
        .parse::<u32>()
        .ok()
        .and_then(MethodType::from_code)
        .ok_or_else(|| Error::InvalidArgument {
            arg: "method",
            value: tokens[4].clone(),
        })?;

    let upper_bound = parse_float("upper_bound", &tokens[5])?;

    let bijective = match tokens[6].parse::<i64>() {
        Ok(0) => false,
        Ok(1) => true,
        _ => {
            return Err(Error::InvalidArgument {
                arg: "bijective",
                value: tokens[6].clone(),
            });
        }
    };

    let init_cut = tokens[7]
        .parse::<i64>()
        .map(InitCut::from_code)
        .map_err(|_| Error::InvalidArgument {
            arg: "init_cut",
            value: tokens[7].clone(),
        })?;

    Invocation::new(
        run_mode,
        tokens[1].clone().into(),
        SolverParams {
            lambda_init,
            test_id,
            method,
            upper_bound,
            bijective,
            init_cut,
        },
    )
}

fn parse_float(arg: &'static str, token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::InvalidArgument {
        arg,
        value: token.to_string(),
    })
}
