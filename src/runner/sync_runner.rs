use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::dto::{AccountKind, MenuChoice};
use crate::engine::Bank;
use crate::prompt_utils::{prompt_line, prompt_parse};
use crate::runner::{ACCOUNT_SEPARATOR, KIND_PROMPT, MENU};
use crate::Error;

/// Runs an interactive teller session over a fresh in-memory bank.
///
/// Menu choices and operation fields are read from `input`; prompts and
/// outcomes are written to `output`. Domain errors are printed and the menu
/// loop continues. The session ends on the Exit choice or when the input is
/// exhausted at the menu prompt.
///
/// # Errors
/// Returns an error only if reading the input or writing the output fails.
pub fn run<R, W>(mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut bank = Bank::new();

    loop {
        let Some(line) = prompt_line(&mut input, &mut output, MENU)? else {
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
            MenuChoice::CreateAccount => create_account(&mut bank, &mut input, &mut output)?,
            MenuChoice::Deposit => deposit(&mut bank, &mut input, &mut output)?,
            MenuChoice::Withdraw => withdraw(&mut bank, &mut input, &mut output)?,
            MenuChoice::Transfer => transfer(&mut bank, &mut input, &mut output)?,
            MenuChoice::DisplayAll => display_all(&bank, &mut output)?,
            MenuChoice::Exit => {
                writeln!(output, "Exiting program...")?;
                return Ok(());
            }
        }
    }
}

fn create_account<R, W>(bank: &mut Bank, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(holder) = prompt_line(input, output, "Enter account holder's name: ")? else {
        return Ok(());
    };
    let Some(initial_balance) = prompt_parse::<Decimal, _, _>(
        input,
        output,
        "Enter initial deposit amount: $",
        Error::InvalidNumber,
    )?
    else {
        return Ok(());
    };
    let Some(kind) =
        prompt_parse::<AccountKind, _, _>(input, output, KIND_PROMPT, Error::InvalidAccountType)?
    else {
        return Ok(());
    };

    let account = bank.open_account(holder, initial_balance, kind);
    writeln!(output, "Account created successfully!")?;
    writeln!(output, "{account}")
}

fn deposit<R, W>(bank: &mut Bank, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(number) =
        prompt_parse::<u32, _, _>(input, output, "Enter account number: ", Error::InvalidNumber)?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        input,
        output,
        "Enter amount to deposit: $",
        Error::InvalidNumber,
    )?
    else {
        return Ok(());
    };

    match bank.deposit(number, amount) {
        Ok(()) => writeln!(output, "${amount} deposited successfully!"),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn withdraw<R, W>(bank: &mut Bank, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(number) =
        prompt_parse::<u32, _, _>(input, output, "Enter account number: ", Error::InvalidNumber)?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        input,
        output,
        "Enter amount to withdraw: $",
        Error::InvalidNumber,
    )?
    else {
        return Ok(());
    };

    match bank.withdraw(number, amount) {
        Ok(()) => writeln!(output, "${amount} withdrawn successfully!"),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn transfer<R, W>(bank: &mut Bank, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(from) = prompt_parse::<u32, _, _>(
        input,
        output,
        "Enter source account number: ",
        Error::InvalidNumber,
    )?
    else {
        return Ok(());
    };
    let Some(to) = prompt_parse::<u32, _, _>(
        input,
        output,
        "Enter destination account number: ",
        Error::InvalidNumber,
    )?
    else {
        return Ok(());
    };
    let Some(amount) = prompt_parse::<Decimal, _, _>(
        input,
        output,
        "Enter amount to transfer: $",
        Error::InvalidNumber,
    )?
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
