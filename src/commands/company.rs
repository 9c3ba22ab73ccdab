//! Company roster commands
//!
//! The roster lives in memory for the length of one run, seeded with
//! [`Company::demo`].

use std::io::{self, BufRead, Write};

use acro::Error;
use acro::company::{Company, Employee, Team};
use acro::output::{OperationResult, OutputMode, PayrollResult, Render, RosterResult};
use acro::prompt::Prompter;

use super::{Context, report_soft};
use crate::cli::CompanyAction;

const MENU_PROMPT: &str = "Company menu: 1 = list employees, 2 = hire, 3 = fire, 4 = pay employees, \
                           5 = assign team, 6 = list team, q = quit";

const TEAM_PROMPT: &str = "Which team? 1 = engineering, 2 = sales, 3 = support";

/// Handle `acro company [list|payroll]`
pub fn company_cmd(ctx: &Context, action: Option<CompanyAction>) -> anyhow::Result<()> {
    let mut company = Company::demo();
    match action {
        None => company_menu(&mut company, ctx.output_mode, &mut Prompter::stdio()),
        Some(CompanyAction::List { team }) => {
            let team = team
                .map(|t| t.parse::<Team>())
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?;
            roster(&company, team).render(ctx.output_mode)?;
            Ok(())
        },
        Some(CompanyAction::Payroll) => {
            payroll(&company).render(ctx.output_mode)?;
            Ok(())
        },
    }
}

fn roster(company: &Company, team: Option<Team>) -> RosterResult {
    let employees = match team {
        Some(team) => company.team(team).into_iter().cloned().collect(),
        None => company.employees().to_vec(),
    };
    RosterResult { team, employees }
}

fn payroll(company: &Company) -> PayrollResult {
    PayrollResult {
        paychecks: company.payroll(),
    }
}

fn describe(err: &Error) -> Option<String> {
    match err {
        Error::NotFound(name) => Some(format!("{name} not found.")),
        _ => None,
    }
}

/// Loop over the company menu until `q` or end of input
pub fn company_menu<R: BufRead, W: Write>(
    company: &mut Company,
    mode: OutputMode,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    while let Some(choice) = prompter.ask(MENU_PROMPT)? {
        match choice.trim() {
            "1" => roster(company, None).render_to(mode, prompter.output_mut())?,
            "2" => hire(company, mode, prompter)?,
            "3" => {
                let (first, last) = ask_name(prompter)?;
                match company.fire(&first, &last) {
                    Ok(e) => OperationResult::ok(format!("{} has been fired.", e.full_name()))
                        .render_to(mode, prompter.output_mut())?,
                    Err(e) => report_soft(e, describe, mode, prompter.output_mut())?,
                }
            },
            "4" => payroll(company).render_to(mode, prompter.output_mut())?,
            "5" => {
                let (first, last) = ask_name(prompter)?;
                let Some(team) = ask_team(prompter)? else {
                    continue;
                };
                match company.assign(&first, &last, team) {
                    Ok(e) => OperationResult::ok(format!("{} joined {team}.", e.full_name()))
                        .render_to(mode, prompter.output_mut())?,
                    Err(e) => report_soft(e, describe, mode, prompter.output_mut())?,
                }
            },
            "6" => {
                if let Some(team) = ask_team(prompter)? {
                    roster(company, Some(team)).render_to(mode, prompter.output_mut())?;
                }
            },
            "q" | "Q" => break,
            other => {
                log::debug!("invalid company menu choice {other:?}");
                prompter.say("Invalid choice.")?;
            },
        }
    }
    Ok(())
}

fn hire<R: BufRead, W: Write>(
    company: &mut Company,
    mode: OutputMode,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let (first, last) = ask_name(prompter)?;
    let salary = prompter.ask_required("Yearly salary?")?;
    let Ok(salary) = salary.trim().replace(',', "").parse::<u32>() else {
        prompter.say(format!("Invalid salary: {salary}"))?;
        return Ok(());
    };

    let employee = Employee::new(&first, &last, salary);
    let message = format!("{} has been hired.", employee.full_name());
    company.hire(employee);
    OperationResult::ok(message).render_to(mode, prompter.output_mut())?;
    Ok(())
}

fn ask_name<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<(String, String)> {
    let first = prompter.ask_required("First name?")?;
    let last = prompter.ask_required("Last name?")?;
    Ok((first, last))
}

fn ask_team<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Option<Team>> {
    let answer = prompter.ask_required(TEAM_PROMPT)?;
    match answer.parse::<Team>() {
        Ok(team) => Ok(Some(team)),
        Err(e) => {
            prompter.say(e)?;
            Ok(None)
        },
    }
}
