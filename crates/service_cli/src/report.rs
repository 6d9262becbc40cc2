//! Text report for a sampling run.
//!
//! Prints the summary statistics followed by the relative-frequency
//! histogram, one line per bin with a bar scaled to the tallest bin.

use std::io::{self, Write};

use sampler_core::stats::{Bin, Histogram, Summary};

use crate::commands::sample::SampleRun;

/// Width in characters of the tallest histogram bar.
pub const BAR_WIDTH: usize = 50;

/// Write the full report for `run`
pub fn render<W: Write>(run: &SampleRun, out: &mut W) -> io::Result<()> {
    write_summary(&run.summary, out)?;
    writeln!(out)?;
    writeln!(
        out,
        "RNG Frequency Histogram - {} Distribution",
        run.kind.display_name()
    )?;
    write_histogram(&run.histogram, out)
}

/// Write the expected value, variance and standard deviation
pub fn write_summary<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    writeln!(out, "Expected: {}", summary.mean)?;
    writeln!(out, "Variance: {}", summary.variance)?;
    writeln!(out, "Standard Deviation: {}", summary.std_dev)
}

/// Write one line per bin
pub fn write_histogram<W: Write>(histogram: &Histogram, out: &mut W) -> io::Result<()> {
    let peak = histogram.max_frequency();
    let last = histogram.bins().len().saturating_sub(1);

    for (i, bin) in histogram.bins().iter().enumerate() {
        writeln!(out, "{}", bin_line(bin, i == last, peak))?;
    }

    if histogram.skipped() > 0 {
        writeln!(out, "({} non-finite values not shown)", histogram.skipped())?;
    }
    Ok(())
}

fn bin_line(bin: &Bin, closed: bool, peak: f64) -> String {
    let bar = if peak > 0.0 {
        ((bin.frequency / peak) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!(
        "[{:>12.4}, {:>12.4}{} {:.5} {}",
        bin.lower,
        bin.upper,
        if closed { ']' } else { ')' },
        bin.frequency,
        "#".repeat(bar)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_core::distributions::DistributionKind;

    fn render_to_string(run: &SampleRun) -> String {
        let mut out = Vec::new();
        render(run, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_run(samples: Vec<f64>, bins: usize) -> SampleRun {
        SampleRun {
            kind: DistributionKind::Triangular,
            summary: Summary::from_samples(&samples).unwrap(),
            histogram: Histogram::with_bins(&samples, bins).unwrap(),
            samples,
        }
    }

    #[test]
    fn test_summary_lines() {
        let run = sample_run(vec![1.0, 2.0, 3.0, 4.0], 2);
        let text = render_to_string(&run);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Expected: 2.5");
        assert!(lines[1].starts_with("Variance: 1.666"));
        assert!(lines[2].starts_with("Standard Deviation: 1.29"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "RNG Frequency Histogram - Triangular Distribution");
    }

    #[test]
    fn test_bars_scale_to_tallest_bin() {
        let run = sample_run(vec![0.0, 0.1, 0.2, 1.0], 2);
        let text = render_to_string(&run);
        let lines: Vec<&str> = text.lines().skip(5).collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&"#".repeat(BAR_WIDTH)));
        assert!(lines[0].contains(") 0.75000"));
        assert!(lines[1].contains("] 0.25000"));
        assert_eq!(lines[1].matches('#').count(), 17);
    }

    #[test]
    fn test_skipped_values_noted() {
        let run = sample_run(vec![1.0, f64::INFINITY, 2.0], 1);
        let text = render_to_string(&run);
        assert!(text.ends_with("(1 non-finite values not shown)\n"));
    }
}
