use std::fmt;

use crate::method::GenerationMethod;
use crate::rules::{ClassRequirement, RequirementTable};
use crate::trial::PassTally;

/// Width class names are padded to.
pub const NAME_WIDTH: usize = 16;

pub const NO_CLASS: &str = "NO CLASS";

struct MethodReport<'a> {
    table: &'a RequirementTable,
    tally: &'a PassTally,
}

impl fmt::Display for MethodReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.tally.method();
        writeln!(
            f,
            "# Method {} ({}): {} #",
            method.index(),
            method.roman(),
            method.description()
        )?;

        for (name, percent) in self.table.names().zip(self.tally.class_percentages()) {
            write_rate(f, name, percent)?;
        }
        write_rate(f, NO_CLASS, self.tally.no_class_percent())?;
        writeln!(f)
    }
}

fn write_rate(f: &mut fmt::Formatter<'_>, name: &str, percent: f64) -> fmt::Result {
    writeln!(f, "{name:<width$}{percent:>6.2} %", width = NAME_WIDTH)
}

struct MasterTable<'a> {
    table: &'a RequirementTable,
    tallies: &'a [PassTally],
}

impl fmt::Display for MasterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class")?;
        for tally in self.tallies {
            write!(f, "\tMethod {}", tally.method().roman())?;
        }
        writeln!(f)?;

        for (i, name) in self.table.names().enumerate() {
            write!(f, "{name}")?;
            for tally in self.tallies {
                write!(f, "\t{:.0}", tally.percent(tally.passes()[i]))?;
            }
            writeln!(f)?;
        }

        write!(f, "{NO_CLASS}")?;
        for tally in self.tallies {
            write!(f, "\t{:.0}", tally.no_class_percent())?;
        }
        writeln!(f)
    }
}

struct Requisites<'a>(&'a [ClassRequirement]);

impl fmt::Display for Requisites<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in self.0 {
            write!(f, "{:<width$}", class.name(), width = NAME_WIDTH)?;
            for minimum in class.minimums().values() {
                write!(f, "{minimum:>3}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Pass rates of one method, one class per line.
pub fn method_report(table: &RequirementTable, tally: &PassTally) -> String {
    MethodReport { table, tally }.to_string()
}

/// Every method against every class as tab separated whole percentages,
/// ready to paste into a spreadsheet.
pub fn master_table(table: &RequirementTable, tallies: &[PassTally]) -> String {
    MasterTable { table, tallies }.to_string()
}

/// Both catalogs of a table, the normal one first.
pub fn requirements_report(table: &RequirementTable) -> String {
    format!(
        "# Normal Class Requisites #\n{}# Sorted Class Requisites #\n{}",
        Requisites(table.classes()),
        Requisites(table.sorted())
    )
}

/// Per-method reports for every tally, in order.
pub fn full_report(table: &RequirementTable, tallies: &[PassTally]) -> String {
    tallies
        .iter()
        .map(|tally| method_report(table, tally))
        .collect()
}

/// Heading naming the methods a run covered.
pub fn methods_heading(methods: &[GenerationMethod]) -> String {
    methods
        .iter()
        .map(|m| format!("{} {}", m.roman(), m.description()))
        .collect::<Vec<_>>()
        .join(", ")
}
