pub mod core;
pub mod errors;
pub mod input;
pub mod output;

pub use crate::core::estimator::{estimate, EndUseCategory, EnergyEstimate};
pub use crate::core::tariff::CostEstimate;
use crate::core::units::MONTH_LABELS;
use crate::errors::HceError;
use crate::input::{ingest_for_processing, HouseholdProfile};
use crate::output::Output;
use csv::WriterBuilder;
use std::io::Read;
use tracing::info;

/// Run one evaluation end to end: ingest a JSON household profile, run the
/// estimator, and write the result documents through the given output. A
/// rate passed here takes precedence over one carried in the profile
/// document. The ingested profile and the estimate are also returned for
/// callers that render them themselves; the display-only profile fields pass
/// through unchanged.
pub fn run_project(
    input: impl Read,
    output: impl Output,
    rate_per_kwh: Option<f64>,
) -> Result<(HouseholdProfile, EnergyEstimate), HceError> {
    let profile = ingest_for_processing(input)?;
    let rate_per_kwh = rate_per_kwh.or(profile.rate_per_kwh);

    let estimate = estimate(&profile, rate_per_kwh)?;
    info!(
        "estimated daily consumption of {} kWh for a {} household",
        estimate.daily_kwh, profile.accommodation_type
    );

    if !output.is_noop() {
        write_estimate_output_file(&output, &estimate)
            .map_err(HceError::ErrorInOutputWriting)?;
        write_projection_output_file(&output, &estimate)
            .map_err(HceError::ErrorInOutputWriting)?;
        if let Some(costs) = &estimate.costs {
            write_costs_output_file(&output, costs).map_err(HceError::ErrorInOutputWriting)?;
        }
    }

    Ok((profile, estimate))
}

fn write_estimate_output_file(
    output: &impl Output,
    estimate: &EnergyEstimate,
) -> Result<(), anyhow::Error> {
    let writer = output.writer_for_document_key("estimate")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["Category", "Daily energy"])?;
    writer.write_record(["[string]", "[kWh]"])?;
    for (category, energy) in &estimate.breakdown {
        writer.write_record([category.to_string(), energy.to_string()])?;
    }
    writer.write_record(["Total".to_string(), estimate.daily_kwh.to_string()])?;

    writer.flush()?;

    Ok(())
}

fn write_projection_output_file(
    output: &impl Output,
    estimate: &EnergyEstimate,
) -> Result<(), anyhow::Error> {
    let writer = output.writer_for_document_key("projection")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["Month", "Projected consumption"])?;
    writer.write_record(["[month]", "[kWh]"])?;
    for (month_idx, projected) in estimate.monthly_projection_kwh.iter().enumerate() {
        writer.write_record([MONTH_LABELS[month_idx].to_string(), projected.to_string()])?;
    }

    writer.flush()?;

    Ok(())
}

fn write_costs_output_file(
    output: &impl Output,
    costs: &CostEstimate,
) -> Result<(), anyhow::Error> {
    let writer = output.writer_for_document_key("costs")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["Period", "Cost"])?;
    writer.write_record(["[string]", "[currency]"])?;
    writer.write_record(["Daily".to_string(), costs.daily_cost.to_string()])?;
    writer.write_record(["Monthly".to_string(), costs.monthly_cost.to_string()])?;
    writer.write_record(["Yearly".to_string(), costs.yearly_cost.to_string()])?;

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{FileOutput, SinkOutput};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn profile_document() -> &'static str {
        r#"{
            "name": "Asha",
            "accommodation_type": "2BHK",
            "has_ac": true,
            "has_fridge": true,
            "has_washing_machine": false,
            "rate_per_kwh": 5.0
        }"#
    }

    #[rstest]
    fn should_run_a_project_against_a_sink_output(profile_document: &str) {
        let (profile, estimate) =
            run_project(profile_document.as_bytes(), SinkOutput, None).unwrap();
        assert_eq!(estimate.daily_kwh, 9.6);
        assert_eq!(estimate.costs.unwrap().daily_cost, 48.0);
        assert_eq!(profile.name.as_deref(), Some("Asha"), "profile should pass through");
    }

    #[rstest]
    fn should_prefer_a_rate_passed_by_the_caller_over_the_document_rate(
        profile_document: &str,
    ) {
        let (_, estimate) =
            run_project(profile_document.as_bytes(), SinkOutput, Some(10.0)).unwrap();
        assert_eq!(estimate.costs.unwrap().daily_cost, 96.0);
    }

    #[rstest]
    fn should_surface_invalid_accommodation_types_as_calculation_failures() {
        let result = run_project(
            r#"{"accommodation_type": "Studio"}"#.as_bytes(),
            SinkOutput,
            None,
        );
        assert!(matches!(
            result.unwrap_err(),
            HceError::FailureInCalculation(_)
        ));
    }

    #[rstest]
    fn should_write_headed_csv_documents(profile_document: &str) {
        let directory = std::env::temp_dir();
        let output = FileOutput::new(directory.clone(), "hce_lib_test_{}.csv".to_string());
        run_project(profile_document.as_bytes(), &output, None).unwrap();

        let estimate_csv =
            std::fs::read_to_string(directory.join("hce_lib_test_estimate.csv")).unwrap();
        let mut lines = estimate_csv.lines();
        assert_eq!(lines.next(), Some("Category,Daily energy"));
        assert_eq!(lines.next(), Some("[string],[kWh]"));
        assert_eq!(lines.clone().count(), 5, "expected four categories and a total row");
        assert!(estimate_csv.lines().any(|line| line == "WashingMachine,0"));
        assert!(estimate_csv.lines().any(|line| line == "Total,9.6"));

        let projection_csv =
            std::fs::read_to_string(directory.join("hce_lib_test_projection.csv")).unwrap();
        assert_eq!(projection_csv.lines().count(), 14, "headings, units and 12 months");
        assert!(projection_csv.lines().any(|line| line.starts_with("Jan,")));
        assert!(projection_csv.lines().any(|line| line.starts_with("Dec,")));

        let costs_csv =
            std::fs::read_to_string(directory.join("hce_lib_test_costs.csv")).unwrap();
        assert!(costs_csv.lines().any(|line| line == "Daily,48"));
        assert!(costs_csv.lines().any(|line| line == "Yearly,17280"));
    }
}
