use std::fmt::{self, Display, Formatter};
use num_traits::{Float, FromPrimitive};
use comfy_table::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use crate::{BootstrapResult, Mean, Statistic, Variance};

fn value<F: Display>(v: Option<F>) -> String {
    v.map_or_else(|| "—".to_string(), |v| format!("{v:.4}"))
}

impl<F> BootstrapResult<F>
where
    F: Float + FromPrimitive + Display,
{
    /// Renders the run as a two-column table.
    pub fn display(&self) -> String {
        let mean: F = Mean.compute(&self.theta_star);
        let sd: F = Variance::default().compute(&self.theta_star);
        let sd = sd.sqrt();

        let mut title_table = Table::new();
        title_table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .add_row(vec![Cell::new("Jackknife-after-Bootstrap")
                .set_alignment(CellAlignment::Center)]);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
            ]);

        let rows = [
            ("Observations (n)", self.parameters.n.to_string()),
            ("Replicates (nboot)", self.parameters.nboot.to_string()),
            ("Mean of θ*", value((!mean.is_nan()).then_some(mean))),
            ("Std. dev. of θ*", value((!sd.is_nan()).then_some(sd))),
            ("Summary s(θ*)", value(self.func_theta_star)),
            ("Jackknife SE", value(self.jackknife_se)),
        ];
        for (metric, shown) in rows {
            table.add_row(vec![
                Cell::new(metric).set_alignment(CellAlignment::Left),
                Cell::new(shown).set_alignment(CellAlignment::Right),
            ]);
        }

        match &self.diagnostic {
            Some(diagnostic) => format!("{title_table}\n{table}\n⚠ {diagnostic}"),
            None => format!("{title_table}\n{table}"),
        }
    }
}

impl<F> Display for BootstrapResult<F>
where
    F: Float + FromPrimitive + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallParameters, Diagnostic, Membership};

    fn result(diagnostic: Option<Diagnostic>) -> BootstrapResult<f64> {
        BootstrapResult {
            parameters: CallParameters {
                sample: vec![1.0, 2.0, 3.0],
                n: 3,
                nboot: 4,
                membership: Membership::ByIndex,
                summary: true,
            },
            theta_star: vec![1.0, 2.0, 3.0, 2.0],
            func_theta_star: Some(2.0),
            jack_boot_val: Some(vec![2.0, f64::NAN, 2.5]),
            jackknife_se: None,
            diagnostic,
        }
    }

    #[test]
    fn table_lists_metrics_and_placeholders() {
        let shown = result(None).to_string();
        assert!(shown.contains("Jackknife-after-Bootstrap"));
        assert!(shown.contains("Replicates (nboot)"));
        assert!(shown.contains("2.0000"));
        assert!(shown.contains('—'));
        assert!(!shown.contains('⚠'));
    }

    #[test]
    fn diagnostic_is_appended() {
        let d = Diagnostic::UndefinedInfluence { count: 1, n: 3, first: 1 };
        let shown = result(Some(d)).to_string();
        assert!(shown.contains("increase nboot"));
    }
}
