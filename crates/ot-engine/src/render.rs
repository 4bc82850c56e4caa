//! Terminal formatting for analysis results.

use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::charts::{CHART_WIDTH, render_bar, render_divider, render_risk_bar};
use crate::result::{AnalysisResult, Citation, Probability};

/// Renders analysis results to an output sink.
///
/// Output is a pure function of the record: rendering the same record
/// twice produces identical bytes.
pub struct Formatter<W: Write> {
    out: W,
}

impl<W: Write> Formatter<W> {
    /// Create a formatter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a complete analysis in fixed section order: title, summary,
    /// probabilities with visual breakdown, risk bar, citations,
    /// conclusion, closing line.
    pub fn print(&mut self, result: &AnalysisResult) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "  {}", result.title.bright_cyan().bold())?;
        writeln!(
            self.out,
            "{}",
            render_divider(result.title.len() + 2).dimmed()
        )?;
        writeln!(self.out)?;
        self.section("Executive Summary", &result.summary)?;
        writeln!(self.out)?;
        self.print_probabilities(&result.probabilities)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", render_risk_bar(result.risk_index))?;
        writeln!(self.out)?;
        self.print_citations(&result.citations)?;
        writeln!(self.out)?;
        self.section("Grand Conclusion", &result.conclusion)?;
        writeln!(self.out)?;
        let closing = format!("--> {}", result.closing_line);
        writeln!(self.out, "  {}", closing.bold().italic())?;
        writeln!(self.out)
    }

    /// Render an externally generated analysis: a model attribution header,
    /// then the same body as [`Formatter::print`].
    pub fn print_attributed(&mut self, model: &str, result: &AnalysisResult) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "  {}",
            format!("[ Thinker: {model} ]").bright_cyan().bold()
        )?;
        writeln!(self.out, "{}", render_divider(60).dimmed())?;
        self.print(result)
    }

    /// Render a two-line warning, used when an external backend fails and
    /// the built-in engine takes over.
    pub fn print_warning(&mut self, msg: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}  {msg}",
            "Warning:".bright_yellow().bold()
        )?;
        writeln!(
            self.out,
            "   Falling back to the built-in overthinking engine."
        )?;
        writeln!(self.out)
    }

    fn section(&mut self, heading: &str, body: &str) -> io::Result<()> {
        writeln!(self.out, "{}:", heading.bright_yellow().bold())?;
        writeln!(self.out, "  {body}")
    }

    fn print_probabilities(&mut self, probs: &[Probability]) -> io::Result<()> {
        writeln!(self.out, "{}:", "Probability Analysis".bright_yellow().bold())?;
        writeln!(self.out)?;
        for p in probs {
            writeln!(
                self.out,
                "  {}%  {}",
                format!("{:>5.1}", p.percentage).bright_cyan(),
                p.label.dimmed()
            )?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "Visual Breakdown:".dimmed())?;
        writeln!(self.out)?;
        for p in probs {
            writeln!(
                self.out,
                "  {}%  {}  {}",
                format!("{:>5.1}", p.percentage).bright_cyan(),
                render_bar(p.percentage, 100.0, CHART_WIDTH, Color::BrightCyan),
                p.label.dimmed()
            )?;
        }
        Ok(())
    }

    fn print_citations(&mut self, citations: &[Citation]) -> io::Result<()> {
        writeln!(self.out, "{}:", "Academic Citations".bright_yellow().bold())?;
        for c in citations {
            writeln!(
                self.out,
                "  {}  {}",
                format!("[{}]", c.index).bright_cyan().dimmed(),
                c.source
            )?;
        }
        Ok(())
    }
}
