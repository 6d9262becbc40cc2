//! Interactive parameter prompts.
//!
//! Each value is requested as `name: ` on the output stream. Input that does
//! not parse or validate prints a message and the prompt repeats, so the
//! returned parameters always satisfy the distribution's preconditions.

use std::io::{BufRead, Write};
use std::str::FromStr;

use sampler_core::distributions::{
    ExponentialParams, GammaParams, GaussianParams, SimpsonParams, TriangularParams,
    UniformParams,
};
use tracing::debug;

use crate::{CliError, Result};

const FLOAT_MESSAGE: &str = "must be a valid float";
const POSITIVE_FLOAT_MESSAGE: &str = "must be a valid positive float";
const POSITIVE_INT_MESSAGE: &str = "must be a valid positive integer";
const GREATER_THAN_A_MESSAGE: &str = "must be a valid float, greater than a";

/// Reads distribution parameters from a line-oriented input.
pub struct ParameterReader<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> ParameterReader<R, W> {
    /// Create a reader prompting on `output` and reading from `input`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Consume the reader, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until `validator` accepts a value that parses as `T`.
    fn read_typed<T, F>(&mut self, name: &str, validator: F, message: &str) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            write!(self.output, "{}: ", name)?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(CliError::InputClosed(name.to_string()));
            }

            match self.line.trim().parse::<T>() {
                Ok(value) if validator(&value) => return Ok(value),
                _ => {
                    debug!(name, input = self.line.trim(), "rejected parameter input");
                    writeln!(self.output, "{} {}", name, message)?;
                }
            }
        }
    }

    /// Read any finite float
    pub fn read_float(&mut self, name: &str) -> Result<f64> {
        self.read_typed(name, |x: &f64| x.is_finite(), FLOAT_MESSAGE)
    }

    /// Read a finite float greater than zero
    pub fn read_positive_float(&mut self, name: &str) -> Result<f64> {
        self.read_typed(
            name,
            |x: &f64| x.is_finite() && *x > 0.0,
            POSITIVE_FLOAT_MESSAGE,
        )
    }

    /// Read an integer greater than zero
    pub fn read_positive_int(&mut self, name: &str) -> Result<u32> {
        self.read_typed(name, |x: &u32| *x > 0, POSITIVE_INT_MESSAGE)
    }

    /// Read a finite float strictly greater than `lower`
    pub fn read_float_above(&mut self, name: &str, lower: f64) -> Result<f64> {
        self.read_typed(
            name,
            |x: &f64| x.is_finite() && *x > lower,
            GREATER_THAN_A_MESSAGE,
        )
    }

    fn read_interval(&mut self) -> Result<(f64, f64)> {
        let a = self.read_float("a")?;
        let b = self.read_float_above("b", a)?;
        Ok((a, b))
    }

    /// Read `a` then `b > a`
    pub fn read_uniform(&mut self) -> Result<UniformParams> {
        let (a, b) = self.read_interval()?;
        Ok(UniformParams { a, b })
    }

    /// Read `mean` then `scale`
    pub fn read_gaussian(&mut self) -> Result<GaussianParams> {
        let mean = self.read_float("mean")?;
        let scale = self.read_float("scale")?;
        Ok(GaussianParams { mean, scale })
    }

    /// Read a positive `rate`
    pub fn read_exponential(&mut self) -> Result<ExponentialParams> {
        let rate = self.read_positive_float("rate")?;
        Ok(ExponentialParams { rate })
    }

    /// Read a positive integer `shape` then a positive `rate`
    pub fn read_gamma(&mut self) -> Result<GammaParams> {
        let shape = self.read_positive_int("shape")?;
        let rate = self.read_positive_float("rate")?;
        Ok(GammaParams { shape, rate })
    }

    /// Read `a` then `b > a`
    pub fn read_triangular(&mut self) -> Result<TriangularParams> {
        let (a, b) = self.read_interval()?;
        Ok(TriangularParams { a, b })
    }

    /// Read `a` then `b > a`
    pub fn read_simpson(&mut self) -> Result<SimpsonParams> {
        let (a, b) = self.read_interval()?;
        Ok(SimpsonParams { a, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> ParameterReader<Cursor<Vec<u8>>, Vec<u8>> {
        ParameterReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(reader: ParameterReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_output()).unwrap()
    }

    #[test]
    fn test_read_uniform() {
        let mut r = reader("2\n5\n");
        let params = r.read_uniform().unwrap();
        assert_eq!(params, UniformParams { a: 2.0, b: 5.0 });
        assert_eq!(output(r), "a: b: ");
    }

    #[test]
    fn test_reprompt_on_unparseable_float() {
        let mut r = reader("abc\n  1.5  \n");
        assert_eq!(r.read_float("mean").unwrap(), 1.5);
        assert_eq!(output(r), "mean: mean must be a valid float\nmean: ");
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let mut r = reader("inf\nNaN\n0\n");
        assert_eq!(r.read_float("scale").unwrap(), 0.0);
        assert_eq!(output(r).matches("scale must be a valid float").count(), 2);
    }

    #[test]
    fn test_b_must_exceed_a() {
        let mut r = reader("3\n3\n1\n4\n");
        let params = r.read_triangular().unwrap();
        assert_eq!(params, TriangularParams { a: 3.0, b: 4.0 });
        assert_eq!(
            output(r).matches("b must be a valid float, greater than a").count(),
            2
        );
    }

    #[test]
    fn test_read_exponential_rejects_non_positive() {
        let mut r = reader("0\n-2\n2\n");
        let params = r.read_exponential().unwrap();
        assert_eq!(params.rate, 2.0);
        assert_eq!(
            output(r).matches("rate must be a valid positive float").count(),
            2
        );
    }

    #[test]
    fn test_read_gamma() {
        let mut r = reader("0\n2.5\n3\n2\n");
        let params = r.read_gamma().unwrap();
        assert_eq!(params, GammaParams { shape: 3, rate: 2.0 });
        assert_eq!(
            output(r).matches("shape must be a valid positive integer").count(),
            2
        );
    }

    #[test]
    fn test_read_gaussian_accepts_any_finite_scale() {
        let mut r = reader("10\n-2\n");
        let params = r.read_gaussian().unwrap();
        assert_eq!(
            params,
            GaussianParams {
                mean: 10.0,
                scale: -2.0
            }
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_read_simpson() {
        let mut r = reader("-3\n9\n");
        let params = r.read_simpson().unwrap();
        assert_eq!(params, SimpsonParams { a: -3.0, b: 9.0 });
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut r = reader("1\n");
        match r.read_uniform() {
            Err(CliError::InputClosed(name)) => assert_eq!(name, "b"),
            other => panic!("Expected input closed error, got {:?}", other),
        }
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut r = reader("0.25");
        assert_eq!(r.read_positive_float("rate").unwrap(), 0.25);
    }
}
