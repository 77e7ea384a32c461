use chrono::Local;
use dialoguer::{Input, Select};
use uuid::Uuid;

use crate::cli::commands::parse_assignments;
use crate::cli::context::ShellContext;
use crate::cli::core::{CliMode, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::Table;
use crate::core::filter::{distinct_categories, distinct_payees};
use crate::domain::{Displayable, Transaction, TransactionDraft, TransactionType, DATE_FORMAT};

const USAGE: &str = "transaction <add|list|edit|remove|payees> ...";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "transaction",
        "Record, list, edit and remove transactions",
        "transaction add type=<expense|income> date=YYYY-MM-DD amount=<n> \
         category=<c> payee=<p> reason=<r> [description=<d>]\n  \
         transaction list\n  \
         transaction edit <id> key=value...\n  \
         transaction remove <id>\n  \
         transaction payees",
        cmd_transaction,
    )]
}

fn cmd_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "list" => handle_list(context),
        "edit" => handle_edit(context, rest),
        "remove" | "delete" => handle_remove(context, rest),
        "payees" => handle_payees(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown transaction subcommand `{}`",
            other
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() && context.mode() == CliMode::Interactive {
        prompt_draft(context)?
    } else {
        draft_from_args(args)?
    };
    let txn = context.books.transactions.record(&draft)?;
    let categories = context.books.categories.list_all()?;
    if !categories.contains(&txn.category) {
        output::warning(format!(
            "Category `{}` is not in the category list.",
            txn.category
        ));
    }
    output::success(format!("Transaction recorded: {}", txn.display_label()));
    output::info(format!("id {}", txn.id));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let transactions = context.books.transactions.list_all()?;
    if transactions.is_empty() {
        output::info("No transactions recorded yet.");
        return Ok(());
    }
    println!("{}", transaction_table(context, "Transactions", &transactions).render());
    Ok(())
}

fn handle_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_id, changes)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: transaction edit <id> key=value...".into(),
        ));
    };
    let id = parse_id(raw_id)?;
    let existing = context.books.transactions.find(id)?.ok_or_else(|| {
        CommandError::InvalidArguments(format!("no transaction with id {}", id))
    })?;
    if changes.is_empty() {
        return Err(CommandError::InvalidArguments(
            "nothing to change; pass key=value pairs".into(),
        ));
    }
    let updated = draft_from_args(changes)?.apply_to(&existing)?;
    context.books.transactions.update(updated.clone())?;
    output::success(format!("Transaction updated: {}", updated.display_label()));
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: transaction remove <id>".into(),
        ));
    };
    let id = parse_id(raw_id)?;
    if !context.confirm(&format!("Remove transaction {}?", id))? {
        output::info("Removal cancelled.");
        return Ok(());
    }
    context.books.transactions.delete(id)?;
    output::success("Transaction removed.");
    Ok(())
}

fn handle_payees(context: &mut ShellContext) -> CommandResult {
    let transactions = context.books.transactions.list_all()?;
    let payees = distinct_payees(&transactions);
    let categories = distinct_categories(&transactions);
    output::section("Recorded values");
    output::info(format!("People: {}", join_or_none(&payees)));
    output::info(format!("Categories in use: {}", join_or_none(&categories)));
    Ok(())
}

pub(crate) fn transaction_table(
    context: &ShellContext,
    title: &str,
    transactions: &[Transaction],
) -> Table {
    let mut table = Table::new(
        Some(title),
        &[
            "Date",
            "Type",
            "Amount",
            "Category",
            "Person",
            "Reason",
            "Description",
            "Id",
        ],
    );
    for txn in transactions {
        table.add_row(vec![
            txn.date.format(DATE_FORMAT).to_string(),
            txn.kind.to_string(),
            context.money(txn.signed_amount()),
            txn.category.clone(),
            txn.payee.clone(),
            txn.reason.clone(),
            txn.description.clone(),
            txn.id.to_string(),
        ]);
    }
    table
}

fn draft_from_args(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    let mut draft = TransactionDraft::default();
    for (key, value) in parse_assignments(args)? {
        draft.set_field(key, value)?;
    }
    Ok(draft)
}

fn prompt_draft(context: &ShellContext) -> Result<TransactionDraft, CommandError> {
    let theme = &context.theme;
    let kinds = [TransactionType::Expense, TransactionType::Income];
    let kind_index = Select::with_theme(theme)
        .with_prompt("Transaction type")
        .items(&["Expense (money out)", "Income (money in)"])
        .default(0)
        .interact()?;
    let date: String = Input::with_theme(theme)
        .with_prompt("Date")
        .default(Local::now().date_naive().format(DATE_FORMAT).to_string())
        .interact_text()?;
    let amount: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .interact_text()?;
    let categories = context.books.categories.list_all()?;
    let category = if categories.is_empty() {
        Input::with_theme(theme)
            .with_prompt("Category")
            .interact_text()?
    } else {
        let index = Select::with_theme(theme)
            .with_prompt("Category")
            .items(&categories[..])
            .default(0)
            .interact()?;
        categories[index].clone()
    };
    let payee: String = Input::with_theme(theme)
        .with_prompt("Person")
        .interact_text()?;
    let reason: String = Input::with_theme(theme)
        .with_prompt("Reason")
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(TransactionDraft {
        kind: Some(kinds[kind_index].to_string()),
        date: Some(date),
        amount: Some(amount),
        category: Some(category),
        payee: Some(payee),
        reason: Some(reason),
        description: Some(description),
    })
}

fn parse_id(raw: &str) -> Result<Uuid, CommandError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a transaction id", raw)))
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
