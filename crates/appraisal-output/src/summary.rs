//! Human-readable renderings of a valuation report.

use crate::report::ValuationReport;
use appraisal_invest::{Comparison, InvestmentProjection, Tier};
use std::fmt;

/// Currency suffix used in rendered amounts.
pub const CURRENCY: &str = "TL";

/// Year quoted in the projection commentary.
pub const COMMENTARY_YEAR: u32 = 5;

/// Round to a whole amount and group thousands with commas.
///
/// ```
/// use appraisal_output::format_amount;
///
/// assert_eq!(format_amount(12_907_776.0), "12,907,776");
/// assert_eq!(format_amount(-250_000.4), "-250,000");
/// ```
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut output = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        output.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

/// Buyer-facing sentence for a comparison.
pub fn comparison_message(comparison: &Comparison) -> String {
    match comparison.tier {
        Tier::GreatDeal => format!(
            "Great deal! {} {CURRENCY} below its estimated value.",
            format_amount(comparison.magnitude)
        ),
        Tier::Deal => format!(
            "Deal. {} {CURRENCY} below the estimated market value.",
            format_amount(comparison.magnitude)
        ),
        Tier::Overpriced => format!(
            "Overpriced! {} {CURRENCY} more than the estimate is being asked.",
            format_amount(comparison.difference)
        ),
        Tier::Fair | Tier::NoComparison => comparison.tier.headline().to_string(),
    }
}

/// Sentence quoting the projected value after five years.
pub fn commentary(projection: &InvestmentProjection) -> Option<String> {
    projection.value_at(COMMENTARY_YEAR).map(|value| {
        format!(
            "At {}% yearly appreciation, this property could be worth about {} {CURRENCY} in {COMMENTARY_YEAR} years.",
            projection.appreciation_pct,
            format_amount(value)
        )
    })
}

fn money(value: f64) -> String {
    format!("{} {CURRENCY}", format_amount(value))
}

impl ValuationReport {
    fn title(&self) -> String {
        format!(
            "{}, {} m² net, {} rooms",
            self.property.district, self.property.net_area, self.property.rooms
        )
    }

    /// Render as a plain-text table.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nProperty Valuation: {}\n", self.title()));
        output.push_str(&format!(
            "Generated: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str("\nFair Market Value:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "  Estimated Price:          {}\n",
            money(self.valuation.estimate)
        ));
        output.push_str(&format!(
            "  Confidence Band:          {} - {}\n",
            money(self.valuation.lower()),
            money(self.valuation.upper())
        ));
        if let (Some(asking), Some(cmp)) = (self.asking_price, &self.comparison) {
            output.push_str(&format!(
                "  Asking Price:             {} ({})\n",
                money(asking),
                cmp.tier
            ));
            output.push_str(&format!("  {}\n", comparison_message(cmp)));
        }

        let p = &self.projection;
        output.push_str("\nInvestment:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "  Monthly Rent:             {} ({}-year amortization)\n",
            money(p.monthly_rent),
            p.horizon_years
        ));
        output.push_str(&format!(
            "  Annual Rental Yield:      {:.2}%\n",
            p.annual_yield_pct
        ));
        output.push_str(&format!(
            "  Yearly Appreciation:      {}%\n",
            p.appreciation_pct
        ));

        output.push_str("\n10-Year Projection:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("  {:<6} {:>24}\n", "Year", "Value"));
        for point in &p.points {
            output.push_str(&format!("  {:<6} {:>24}\n", point.year, money(point.value)));
        }
        if let Some(text) = commentary(p) {
            output.push_str(&format!("\n{text}\n"));
        }

        if !self.warnings.is_empty() {
            output.push_str("\nWarnings:\n");
            for warning in &self.warnings {
                output.push_str(&format!("  ! {warning}\n"));
            }
        }

        output
    }

    /// Render as plain text.
    pub fn to_text(&self) -> String {
        self.to_ascii_table()
    }

    /// Render as a Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Property Valuation: {}\n\n", self.title()));
        output.push_str(&format!(
            "**Generated:** {}\n\n",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));

        output.push_str("## Fair Market Value\n\n");
        output.push_str(&format!(
            "- **Estimated Price:** {}\n",
            money(self.valuation.estimate)
        ));
        output.push_str(&format!(
            "- **Confidence Band:** {} - {}\n",
            money(self.valuation.lower()),
            money(self.valuation.upper())
        ));
        if let (Some(asking), Some(cmp)) = (self.asking_price, &self.comparison) {
            output.push_str(&format!(
                "- **Asking Price:** {} ({})\n\n> {}\n",
                money(asking),
                cmp.tier,
                comparison_message(cmp)
            ));
        }
        output.push('\n');

        let p = &self.projection;
        output.push_str("## Investment\n\n");
        output.push_str(&format!(
            "- **Monthly Rent:** {} ({}-year amortization)\n",
            money(p.monthly_rent),
            p.horizon_years
        ));
        output.push_str(&format!(
            "- **Annual Rental Yield:** {:.2}%\n",
            p.annual_yield_pct
        ));
        output.push_str(&format!(
            "- **Yearly Appreciation:** {}%\n\n",
            p.appreciation_pct
        ));

        output.push_str("## 10-Year Projection\n\n");
        output.push_str("| Year | Value |\n");
        output.push_str("|------|------:|\n");
        for point in &p.points {
            output.push_str(&format!("| {} | {} |\n", point.year, money(point.value)));
        }
        if let Some(text) = commentary(p) {
            output.push_str(&format!("\n{text}\n"));
        }

        if !self.warnings.is_empty() {
            output.push_str("\n## Warnings\n\n");
            for warning in &self.warnings {
                output.push_str(&format!("- {warning}\n"));
            }
        }

        output
    }
}

impl fmt::Display for ValuationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Valuation: {}", self.title())?;
        writeln!(
            f,
            "  Estimate: {} (± {})",
            money(self.valuation.estimate),
            format_amount(self.valuation.deviation)
        )?;
        if let Some(cmp) = &self.comparison {
            writeln!(f, "  Asking price: {}", cmp.tier)?;
        }
        writeln!(f, "  Monthly rent: {}", money(self.projection.monthly_rent))?;
        writeln!(f, "  Annual yield: {:.2}%", self.projection.annual_yield_pct)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_features::PropertyRecord;
    use appraisal_invest::{compare, project};
    use appraisal_model::ValuationResult;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(999.0, "999")]
    #[case(1_000.0, "1,000")]
    #[case(205_000.0, "205,000")]
    #[case(3_359_999.6, "3,360,000")]
    #[case(-1_234_567.0, "-1,234,567")]
    fn test_format_amount(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn test_comparison_messages() {
        let great = compare(750_000.0, 1_000_000.0, 205_000.0);
        assert_eq!(
            comparison_message(&great),
            "Great deal! 250,000 TL below its estimated value."
        );

        let over = compare(1_300_000.0, 1_000_000.0, 205_000.0);
        assert!(comparison_message(&over).contains("300,000 TL more"));

        let fair = compare(1_100_000.0, 1_000_000.0, 205_000.0);
        assert_eq!(comparison_message(&fair), Tier::Fair.headline());
    }

    #[test]
    fn test_commentary_quotes_year_five() {
        let projection = project(2_400_000.0, 20, 40.0).unwrap();
        let text = commentary(&projection).unwrap();
        assert!(text.contains("12,907,776 TL"));
        assert!(text.contains("40%"));
    }

    fn sample() -> ValuationReport {
        ValuationReport::new(
            PropertyRecord::default(),
            ValuationResult::new(2_400_000.0, 205_000.0),
            project(2_400_000.0, 20, 40.0).unwrap(),
        )
        .with_asking_price(Some(2_000_000.0))
        .with_warning("model artifact has no feature names")
    }

    #[test]
    fn test_ascii_table() {
        let text = sample().to_ascii_table();
        assert!(text.contains("Estimated Price:"));
        assert!(text.contains("2,400,000 TL"));
        assert!(text.contains("2,195,000 TL - 2,605,000 TL"));
        assert!(text.contains("(Great deal)"));
        assert!(text.contains("10,000 TL"));
        assert!(text.contains("5.00%"));
        assert!(text.contains("! model artifact has no feature names"));
    }

    #[test]
    fn test_markdown() {
        let md = sample().to_markdown();
        assert!(md.starts_with("# Property Valuation: Adalar, 85 m² net, 3 rooms"));
        assert!(md.contains("| 1 | 3,360,000 TL |"));
        assert!(md.contains("## Warnings"));
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("Estimate: 2,400,000 TL (± 205,000)"));
        assert!(text.contains("Asking price: Great deal"));
    }
}
