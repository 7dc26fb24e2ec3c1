//! Command registry and metadata.
//!
//! Every command the terminal answers, with the description shown by `help`.

/// One command the terminal answers.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Listed in the `help` output.
    pub listed: bool,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Show this list",
        listed: false,
    },
    CommandSpec {
        name: "whoami",
        description: "Display information about me",
        listed: true,
    },
    CommandSpec {
        name: "education",
        description: "View my education background",
        listed: true,
    },
    CommandSpec {
        name: "experience",
        description: "View my work experience",
        listed: true,
    },
    CommandSpec {
        name: "projects",
        description: "View my projects",
        listed: true,
    },
    CommandSpec {
        name: "contact",
        description: "View contact information",
        listed: true,
    },
    CommandSpec {
        name: "cv",
        description: "Download my CV as PDF",
        listed: true,
    },
    CommandSpec {
        name: "clear",
        description: "Clear the terminal",
        listed: true,
    },
    CommandSpec {
        name: "certifications",
        description: "View my certifications",
        listed: true,
    },
    CommandSpec {
        name: "social",
        description: "View my social media links",
        listed: true,
    },
];

/// The `help` answer, one aligned line per listed command.
pub fn help_text() -> String {
    let lines: Vec<String> = COMMANDS
        .iter()
        .filter(|spec| spec.listed)
        .map(|spec| format!("- {:<11} : {}", spec.name, spec.description))
        .collect();
    format!("Available commands:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_listed_command() {
        let help = help_text();
        assert!(help.starts_with("Available commands:\n"));
        for spec in COMMANDS.iter().filter(|s| s.listed) {
            assert!(help.contains(spec.name), "help is missing {}", spec.name);
        }
        assert!(!help.contains("- help"));
    }

    #[test]
    fn test_help_aligns_short_names_and_keeps_long_ones() {
        let help = help_text();
        assert!(help.contains("- whoami      : Display information about me"));
        assert!(help.contains("- certifications : View my certifications"));
    }

    #[test]
    fn test_command_names_are_lowercase_and_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|s| s.name).collect();
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
