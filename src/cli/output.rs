//! Terminal output: result rendering on stdout, diagnostics on stderr
//!
//! Result text is never colored so it stays byte-stable when piped.
//! Diagnostics are colored only when stderr is a terminal and neither
//! NO_COLOR nor CLICOLOR=0 is set.

use std::env;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

use colored::Colorize;

use crate::application::services::LookupResult;
use crate::domain::DomainError;

/// Printed when the filtered set is empty.
pub const NO_MATCHES: &str = "No matches found.";

/// Whether stderr diagnostics get color.
pub fn diagnostics_colorized(
    stderr_is_terminal: bool,
    no_color: Option<&OsStr>,
    clicolor: Option<&OsStr>,
) -> bool {
    let no_color = no_color.is_some_and(|v| !v.is_empty());
    let clicolor_off = clicolor.is_some_and(|v| v == "0");
    stderr_is_terminal && !no_color && !clicolor_off
}

/// Decide diagnostics coloring from stderr, not stdout.
///
/// Result text never goes through `colored`, so the global override only
/// affects the `error`/`note` helpers.
pub fn init_color() {
    colored::control::set_override(diagnostics_colorized(
        io::stderr().is_terminal(),
        env::var_os("NO_COLOR").as_deref(),
        env::var_os("CLICOLOR").as_deref(),
    ));
}

/// Print error ("Error:" prefix, red) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print advisory note ("Note:" prefix, yellow) to stderr
pub fn note(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "Note:".yellow(), msg);
}

/// Renders lookup results as line-oriented text.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    /// Maximum number of controls printed
    pub limit: usize,
    /// Print `Data: <path>` first
    pub show_path: bool,
}

impl Presenter {
    pub fn new(limit: usize, show_path: bool) -> Self {
        Self { limit, show_path }
    }

    /// Format the full output.
    ///
    /// Fails without producing text if a printed control lacks a required field.
    pub fn format(&self, result: &LookupResult) -> Result<String, DomainError> {
        let mut text = String::new();

        if self.show_path {
            let _ = writeln!(text, "Data: {}", result.data_path.display());
        }

        if let Some(header) = result.metadata.header() {
            let _ = writeln!(text, "{}", header);
        }

        for control in result.matches.iter().take(self.limit) {
            let fields = control.require()?;
            let hints = if control.profiles_hint.is_empty() {
                String::new()
            } else {
                format!(" | profiles: {}", control.profiles_hint.join(","))
            };
            let _ = writeln!(
                text,
                "{} | {} {}{}",
                fields.control_id, fields.domain_id, fields.domain_title, hints
            );
            let _ = writeln!(text, "  {}", fields.statement);
        }

        if result.matches.is_empty() {
            let _ = writeln!(text, "{}", NO_MATCHES);
        }

        Ok(text)
    }

    /// Format and write the output in one piece.
    pub fn render<W: Write>(&self, out: &mut W, result: &LookupResult) -> crate::cli::CliResult<()> {
        let text = self.format(result)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogMetadata, Control};
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case(true, None, None, true)]
    #[case(false, None, None, false)]
    #[case(true, Some("1"), None, false)]
    #[case(true, Some(""), None, true)]
    #[case(true, None, Some("0"), false)]
    #[case(true, None, Some("1"), true)]
    fn test_diagnostics_colorized(
        #[case] terminal: bool,
        #[case] no_color: Option<&str>,
        #[case] clicolor: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            diagnostics_colorized(terminal, no_color.map(OsStr::new), clicolor.map(OsStr::new)),
            expected
        );
    }

    fn control(id: &str, domain: &str, title: &str, statement: &str, hints: &[&str]) -> Control {
        Control {
            control_id: Some(id.into()),
            domain_id: Some(domain.into()),
            domain_title: Some(title.into()),
            statement: Some(statement.into()),
            description: None,
            profiles_hint: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    fn result(matches: Vec<Control>, metadata: CatalogMetadata) -> LookupResult {
        LookupResult {
            data_path: PathBuf::from("/data/masvs.json"),
            total: matches.len(),
            metadata,
            matches,
        }
    }

    fn titled() -> CatalogMetadata {
        CatalogMetadata {
            title: Some("OWASP MASVS".into()),
            version: Some("v2.0.0".into()),
            ..Default::default()
        }
    }

    #[test]
    fn given_matches_when_formatting_then_summary_and_statement_lines() {
        let r = result(
            vec![
                control("MASVS-AUTH-1", "MASVS-AUTH", "Authentication", "Use secure auth.", &[]),
                control(
                    "MASVS-RESILIENCE-1",
                    "MASVS-RESILIENCE",
                    "Resilience",
                    "Validate platform integrity.",
                    &["MAS-R", "MAS-L2"],
                ),
            ],
            titled(),
        );

        let text = Presenter::new(20, true).format(&r).unwrap();
        assert_eq!(
            text,
            "Data: /data/masvs.json\n\
             OWASP MASVS (v2.0.0)\n\
             MASVS-AUTH-1 | MASVS-AUTH Authentication\n  Use secure auth.\n\
             MASVS-RESILIENCE-1 | MASVS-RESILIENCE Resilience | profiles: MAS-R,MAS-L2\n  Validate platform integrity.\n"
        );
    }

    #[test]
    fn given_empty_result_when_formatting_then_only_no_matches() {
        let r = result(vec![], CatalogMetadata::default());
        assert_eq!(Presenter::new(20, false).format(&r).unwrap(), "No matches found.\n");
        assert_eq!(Presenter::new(0, false).format(&r).unwrap(), "No matches found.\n");
    }

    #[test]
    fn given_zero_limit_with_matches_when_formatting_then_header_only() {
        let r = result(vec![control("A-1", "A", "A", "a", &[])], titled());
        assert_eq!(Presenter::new(0, false).format(&r).unwrap(), "OWASP MASVS (v2.0.0)\n");
    }

    #[test]
    fn given_limit_when_formatting_then_truncates() {
        let r = result(
            vec![
                control("A-1", "A", "A", "a", &[]),
                control("B-1", "B", "B", "b", &[]),
            ],
            CatalogMetadata::default(),
        );
        let text = Presenter::new(1, false).format(&r).unwrap();
        assert_eq!(text, "A-1 | A A\n  a\n");
    }

    #[test]
    fn given_control_missing_statement_when_formatting_then_error() {
        let mut broken = control("A-1", "A", "A", "a", &[]);
        broken.statement = None;
        let r = result(vec![broken], CatalogMetadata::default());
        assert!(Presenter::new(5, false).format(&r).is_err());
    }

    #[test]
    fn given_same_input_when_rendering_twice_then_identical_bytes() {
        let r = result(vec![control("A-1", "A", "A", "a", &["x"])], titled());
        let presenter = Presenter::new(10, true);
        let mut first = Vec::new();
        let mut second = Vec::new();
        presenter.render(&mut first, &r).unwrap();
        presenter.render(&mut second, &r).unwrap();
        assert_eq!(first, second);
    }
}
