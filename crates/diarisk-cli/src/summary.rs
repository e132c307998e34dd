use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use diarisk_model::{FEATURE_SCHEMA, ModelFeature, PredictionResponse, RiskLabel};
use diarisk_train::TrainReport;

pub fn print_prediction(response: &PredictionResponse) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Result"), result_cell(&response.result)]);
    table.add_row(vec![
        Cell::new("Risk Probability"),
        Cell::new(format!("{:.1}%", response.probability_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(response.confidence.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("Age"),
        Cell::new(format!("{:.0}", response.summary.age)),
    ]);
    table.add_row(vec![
        Cell::new("BMI"),
        Cell::new(format!("{:.1}", response.summary.bmi)),
    ]);
    table.add_row(vec![
        Cell::new("Glucose"),
        Cell::new(format!("{:.1}", response.summary.glucose)),
    ]);
    table.add_row(vec![
        Cell::new("Blood Pressure"),
        Cell::new(format!("{:.1}", response.summary.blood_pressure)),
    ]);
    println!("{table}");
    println!("Recommended Diet:");
    for (number, item) in response.diet.iter().enumerate() {
        println!("  {}. {item}", number + 1);
    }
}

pub fn print_train_report(report: &TrainReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Artifact directory"),
        Cell::new(report.artifact_dir.display().to_string()),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![
        Cell::new("Positive rate"),
        Cell::new(format!("{:.1}%", report.positive_rate * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Training accuracy"),
        Cell::new(format!("{:.1}%", report.training_accuracy * 100.0)),
    ]);
    println!("{table}");
}

pub fn print_feature_schema() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Filled from"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, feature) in FEATURE_SCHEMA.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(feature.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(feature_source(*feature)),
        ]);
    }
    println!("{table}");
}

fn feature_source(feature: ModelFeature) -> &'static str {
    match feature {
        ModelFeature::Age => "Age field (required)",
        ModelFeature::Bmi => "Derived from Height and Weight (required)",
        ModelFeature::Glucose => "Glucose field (required)",
        ModelFeature::FamilyHistory => "FamilyHistory field, 0 or 1 (required)",
        ModelFeature::BloodPressure => "BloodPressure field, or reference-dataset mean",
        ModelFeature::Pregnancies => "Pregnancies field, or reference-dataset mean",
        ModelFeature::Insulin => "Insulin field, or reference-dataset mean",
        ModelFeature::SkinThickness => "SkinThickness field, or reference-dataset mean",
    }
}

fn result_cell(result: &str) -> Cell {
    if result == RiskLabel::Elevated.message() {
        Cell::new(result).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(result)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
