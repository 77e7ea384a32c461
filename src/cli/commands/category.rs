use crate::cli::context::ShellContext;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List, add and remove categories",
        "category list\n  category add <name>\n  category remove <name>",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list(context);
    };
    match action.to_lowercase().as_str() {
        "list" => list(context),
        "add" => add(context, rest),
        "remove" | "delete" => remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn list(context: &mut ShellContext) -> CommandResult {
    let categories = context.books.categories.list_all()?;
    output::section("Categories");
    if categories.is_empty() {
        output::info("No categories defined.");
    }
    for (index, name) in categories.iter().enumerate() {
        output::info(format!("{:>3}. {}", index + 1, name));
    }
    Ok(())
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined_name(args, "category add <name>")?;
    let created = context.books.categories.create(&name)?;
    output::success(format!("Category `{}` added.", created));
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = joined_name(args, "category remove <name>")?;
    if !context.books.categories.list_all()?.contains(&name) {
        output::warning(format!("Category `{}` not found.", name));
        return Ok(());
    }
    if !context.confirm(&format!("Remove category `{}`?", name))? {
        output::info("Removal cancelled.");
        return Ok(());
    }
    context.books.categories.delete(&name)?;
    output::success(format!("Category `{}` removed.", name));
    Ok(())
}

// Unquoted multi-word names arrive as separate tokens.
fn joined_name(args: &[&str], usage: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!("usage: {}", usage)));
    }
    Ok(args.join(" "))
}
