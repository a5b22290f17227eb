use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::dto::{AccountKind, MenuChoice};
use crate::engine::Bank;
use crate::runner::{ACCOUNT_SEPARATOR, KIND_PROMPT, MENU};
use crate::Error;

/// Runs an interactive teller session async over a fresh in-memory bank.
///
/// Behaves exactly like the synchronous [`crate::run`], but reads menu
/// choices and operation fields from an async line source, so the session
/// can be driven from async stdin or any other async reader. Output stays
/// synchronous: prompts must interleave with reads, there is nothing to
/// buffer.
///
/// # Errors
/// Returns an error only if reading the input or writing the output fails.
pub async fn run<R, W>(input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut bank = Bank::new();

    loop {
        let Some(line) = prompt_line(&mut lines, &mut output, MENU).await? else {
            return Ok(());
        };
        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        match choice {
            MenuChoice::CreateAccount => {
                create_account(&mut bank, &mut lines, &mut output).await?
            }
            MenuChoice::Deposit => deposit(&mut bank, &mut lines, &mut output).await?,
            MenuChoice::Withdraw => withdraw(&mut bank, &mut lines, &mut output).await?,
            MenuChoice::Transfer => transfer(&mut bank, &mut lines, &mut output).await?,
            MenuChoice::DisplayAll => display_all(&bank, &mut output)?,
            MenuChoice::Exit => {
                writeln!(output, "Exiting program...")?;
                return Ok(());
            }
        }
    }
}

async fn prompt_line<R, W>(
    lines: &mut Lines<R>,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

async fn prompt_parse<T, R, W>(
    lines: &mut Lines<R>,
    writer: &mut W,
    prompt: &str,
    invalid: Error,
) -> io::Result<Option<T>>
where
    T: FromStr,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(line) = prompt_line(lines, writer, prompt).await? else {
        return Ok(None);
    };
    match line.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(writer, "{invalid}")?;
            Ok(None)
        }
    }
}

async fn create_account<R, W>(
    bank: &mut Bank,
    lines: &mut Lines<R>,
    output: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(holder) = prompt_line(lines, output, "Enter account holder's name: ").await? else {
        return Ok(());
    };
    let Some(initial_balance) = prompt_parse::<Decimal, _, _>(
        lines,
        output,
        "Enter initial deposit amount: $",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };
    let Some(kind) =
        prompt_parse::<AccountKind, _, _>(lines, output, KIND_PROMPT, Error::InvalidAccountType)
            .await?
    else {
        return Ok(());
    };

    let account = bank.open_account(holder, initial_balance, kind);
    writeln!(output, "Account created successfully!")?;
    writeln!(output, "{account}")
}

async fn deposit<R, W>(bank: &mut Bank, lines: &mut Lines<R>, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(number) =
        prompt_parse::<u32, _, _>(lines, output, "Enter account number: ", Error::InvalidNumber)
            .await?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        lines,
        output,
        "Enter amount to deposit: $",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };

    match bank.deposit(number, amount) {
        Ok(()) => writeln!(output, "${amount} deposited successfully!"),
        Err(err) => writeln!(output, "{err}"),
    }
}

async fn withdraw<R, W>(bank: &mut Bank, lines: &mut Lines<R>, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(number) =
        prompt_parse::<u32, _, _>(lines, output, "Enter account number: ", Error::InvalidNumber)
            .await?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        lines,
        output,
        "Enter amount to withdraw: $",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };

    match bank.withdraw(number, amount) {
        Ok(()) => writeln!(output, "${amount} withdrawn successfully!"),
        Err(err) => writeln!(output, "{err}"),
    }
}

async fn transfer<R, W>(bank: &mut Bank, lines: &mut Lines<R>, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(from) = prompt_parse::<u32, _, _>(
        lines,
        output,
        "Enter source account number: ",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };
    let Some(to) = prompt_parse::<u32, _, _>(
        lines,
        output,
        "Enter destination account number: ",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        lines,
        output,
        "Enter amount to transfer: $",
        Error::InvalidNumber,
    )
    .await?
    else {
        return Ok(());
    };

    match bank.transfer(from, to, amount) {
        Ok(()) => writeln!(output, "${amount} transferred successfully!"),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn display_all<W: Write>(bank: &Bank, output: &mut W) -> io::Result<()> {
    if bank.is_empty() {
        return writeln!(output, "No accounts available.");
    }
    for account in bank.accounts() {
        writeln!(output, "{account}")?;
        writeln!(output, "{ACCOUNT_SEPARATOR}")?;
    }
    Ok(())
}
