use crate::error::Result;
use crate::journal::Journal;

use super::Printer;

/// Journal demo: the store only adds and removes entries.
pub struct SingleResponsibility;

impl SingleResponsibility {
    pub const TITLE: &'static str = "SOLID Single Responsibility Principle";

    pub fn run(printer: &mut dyn Printer) -> Result<()> {
        printer.banner(Self::TITLE);

        let mut journal = Journal::new();
        journal.add_entry("First entry");
        let second = journal.add_entry("Second entry");
        journal.add_entry("Third entry");

        printer.line("Initial data:");
        printer.journal(&journal);
        printer.blank();

        printer.line("Removing the second entry:");
        journal.remove_entry(second)?;
        printer.journal(&journal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::RecordingPrinter;

    #[test]
    fn test_script() {
        let mut printer = RecordingPrinter::default();
        SingleResponsibility::run(&mut printer).expect("run should succeed");
        assert_eq!(
            printer.events,
            vec![
                "banner:SOLID Single Responsibility Principle",
                "line:Initial data:",
                "journal:First entry\nSecond entry\nThird entry",
                "blank",
                "line:Removing the second entry:",
                "journal:First entry\nThird entry",
            ]
        );
    }
}
