use chemform::{ElementTable, Formula, Result};
use chemlab::init_logging;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use rust_decimal::Decimal;
use rustyline::DefaultEditor;
use std::sync::LazyLock;

static DB: LazyLock<ElementTable> = LazyLock::new(ElementTable::default);

fn main() -> rustyline::Result<()> {
    init_logging();
    let mut rl = DefaultEditor::new()?;
    while let Ok(formula) = rl.readline("Formula: ") {
        rl.add_history_entry(&formula)?;
        match formula_info(&formula) {
            Ok(info) => print!("{info}"),
            Err(diagnostic) => render_error(*diagnostic),
        }
    }
    Ok(())
}

fn formula_info(formula_text: &str) -> Result<String> {
    let formula = Formula::new(&DB, formula_text)?;

    let hill_formula = formula.render()?;
    let mono_mass = formula.monoisotopic_mass()?;
    let avg_mass = formula.average_mass()?;
    let atoms = formula.atom_count();

    Ok(format!(
        "Hill Formula: {hill_formula}\nMonoisotopic Mass: {}\nAverage Mass: {}\nAtoms: {atoms}\n\n",
        decimal_round_workaround(mono_mass, 6),
        decimal_round_workaround(avg_mass, 4),
    ))
}

fn render_error(diagnostic: impl Into<Box<dyn Diagnostic + 'static>>) {
    let diagnostic = diagnostic.into();
    let mut buf = String::new();
    let rendered = GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic.as_ref());
    match rendered {
        Ok(()) => println!("{buf}"),
        Err(_) => println!("{diagnostic}\n"),
    }
}

// FIXME: Really this should be fixed in `rust_decimal`...
fn decimal_round_workaround(value: impl Into<Decimal>, decimal_points: u32) -> String {
    let value = value.into().round_dp(decimal_points);
    format!("{value}")
}
