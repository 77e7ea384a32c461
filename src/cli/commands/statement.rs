use crate::cli::commands::parse_assignments;
use crate::cli::commands::transaction::transaction_table;
use crate::cli::context::ShellContext;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::{parse_date, TransactionFilter, DATE_FORMAT};

const USAGE: &str = "statement <start YYYY-MM-DD> <end YYYY-MM-DD> \
                     [type=<expense|income>] [category=<c>] [payee=<p>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "statement",
        "Show totals and transactions for a date range",
        USAGE,
        cmd_statement,
    )]
}

fn cmd_statement(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [start, end, filters @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    let start = parse_date(start).ok_or_else(|| invalid_date(start))?;
    let end = parse_date(end).ok_or_else(|| invalid_date(end))?;

    let mut filter = TransactionFilter::new();
    for (key, value) in parse_assignments(filters)? {
        filter.set_field(key, value)?;
    }

    let statement = context.books.statement(start, end, &filter)?;
    let symbol = context.config.currency_symbol.clone();

    output::section(format!(
        "Statement {} to {}",
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    ));
    output::info(format!("Filters: {}", statement.filter.describe()));
    output::info(format!(
        "Total income:  {}",
        output::money(&symbol, statement.totals.income)
    ));
    output::info(format!(
        "Total expense: {}",
        output::money(&symbol, statement.totals.expense)
    ));
    output::info(format!(
        "Balance:       {}",
        output::signed_money(&symbol, statement.totals.balance)
    ));

    if statement.is_empty() {
        output::info("No transactions match this statement.");
    } else {
        println!(
            "{}",
            transaction_table(context, "Transactions", &statement.transactions).render()
        );
    }
    output::hint(statement.coverage());
    if !statement.payees().is_empty() {
        output::hint(format!("People in range: {}", statement.payees().join(", ")));
    }
    Ok(())
}

fn invalid_date(raw: &str) -> CommandError {
    CommandError::InvalidArguments(format!("`{}` is not a date (expected YYYY-MM-DD)", raw))
}
