pub mod category;
pub mod statement;
pub mod system;
pub mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "transaction",
    "category",
    "statement",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(transaction::definitions());
    commands.extend(category::definitions());
    commands.extend(statement::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Splits `key=value` arguments, rejecting bare words.
pub(crate) fn parse_assignments<'a>(
    args: &[&'a str],
) -> Result<Vec<(&'a str, &'a str)>, CommandError> {
    args.iter()
        .map(|arg| {
            arg.split_once('=').ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "expected key=value, found `{}`",
                    arg
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_split_on_first_equals() {
        let pairs = parse_assignments(&["reason=a=b", "amount=3"]).unwrap();
        assert_eq!(pairs, vec![("reason", "a=b"), ("amount", "3")]);
        assert!(parse_assignments(&["amount"]).is_err());
    }
}
