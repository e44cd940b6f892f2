use crate::errors::ParkingError;
use crate::parking::{Vehicle, VehicleClass};
use crate::utils::build_info;

use super::context::{CommandError, CommandResult, ShellContext};
use super::registry::{CommandEntry, CommandRegistry};
use super::{demo, output, render};

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "checkin",
        "Admit a vehicle",
        "checkin <plate> <car|motorcycle|minibus|bus> [discount-card]",
        cmd_check_in,
    )
    .with_aliases(&["in"]));
    registry.register(CommandEntry::new(
        "checkout",
        "Charge and release a parked vehicle",
        "checkout <plate>",
        cmd_check_out,
    )
    .with_aliases(&["out"]));
    registry.register(CommandEntry::new(
        "quote",
        "Show what a parked vehicle would pay right now",
        "quote <plate>",
        cmd_quote,
    ));
    registry.register(CommandEntry::new(
        "earnings",
        "Show completed check-outs and total earnings",
        "earnings",
        cmd_earnings,
    ));
    registry.register(CommandEntry::new(
        "list",
        "List the plates currently parked",
        "list",
        cmd_list,
    )
    .with_aliases(&["ls"]));
    registry.register(CommandEntry::new(
        "status",
        "Show occupancy",
        "status",
        cmd_status,
    ));
    registry.register(CommandEntry::new(
        "demo",
        "Run the sample scenario on a fresh ledger",
        "demo",
        cmd_demo,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show or change lot settings",
        "config [show|set <key> <value>|path]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "reset",
        "Start over with an empty ledger using current settings",
        "reset",
        cmd_reset,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the shell",
        "exit",
        cmd_exit,
    )
    .with_aliases(&["quit"]));
}

fn cmd_check_in(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (plate, class, card) = match args {
        [plate, class] => (*plate, *class, None),
        [plate, class, card] => (*plate, *class, Some(*card)),
        _ => return Err(usage("checkin <plate> <class> [discount-card]")),
    };
    let class = class
        .parse::<VehicleClass>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;

    let mut vehicle = Vehicle::new(plate, class).checked_in_at(context.ledger.now());
    if let Some(card) = card {
        vehicle = vehicle.with_discount_card(card);
    }

    match context.ledger.check_in(vehicle) {
        Ok(()) => output::success(render::CHECK_IN_OK),
        Err(ParkingError::AdmissionRejected(_)) => output::error(render::CHECK_IN_FAILED),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_check_out(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let plate = single_plate(args, "checkout <plate>")?;
    match context.ledger.check_out(plate) {
        Ok(receipt) => {
            output::success(render::fee_message(&receipt));
            output::info(render::receipt_details(&receipt));
        }
        Err(ParkingError::VehicleNotFound(_)) => output::error(render::CHECK_OUT_FAILED),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_quote(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let plate = single_plate(args, "quote <plate>")?;
    let fee = context.ledger.quote(plate)?;
    let minutes = context.ledger.parked_minutes(plate)?;
    output::info(format!(
        "{plate} has been parked {minutes} min; current fee is {fee}."
    ));
    Ok(())
}

fn cmd_earnings(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(render::earnings_line(&context.ledger.earnings_summary()));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut plates = context.ledger.parked_plates();
    if plates.is_empty() {
        output::info("No vehicles parked.");
        return Ok(());
    }
    plates.sort();
    output::section("Plates");
    for plate in plates {
        output::info(render::plate_line(&plate));
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(render::occupancy_line(&context.ledger));
    Ok(())
}

fn cmd_demo(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset_ledger();
    output::info("Starting the sample scenario on a fresh ledger.");
    demo::run(&mut context.ledger);
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for line in render::policy_lines(context.config.capacity, &context.config.fee_policy)
            {
                output::info(line);
            }
        }
        ["path"] => output::info(context.config_manager.config_path().display()),
        ["set", key, value] => {
            let number = value.parse::<u64>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{value}` is not a whole number"))
            })?;
            let mut updated = context.config;
            match *key {
                "capacity" => {
                    updated.capacity = usize::try_from(number).map_err(|_| {
                        CommandError::InvalidArguments(format!("capacity {number} is too large"))
                    })?
                }
                "free_minutes" => updated.fee_policy.free_minutes = number,
                "block_minutes" => updated.fee_policy.block_minutes = number,
                "block_surcharge" => updated.fee_policy.block_surcharge = number,
                "discount_percent" => updated.fee_policy.discount_percent = number,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown setting `{other}`"
                    )))
                }
            }
            context.config_manager.save(&updated)?;
            context.config = updated;
            output::success(format!(
                "Saved {key} = {number}. Run `reset` to apply it to a new ledger."
            ));
        }
        _ => return Err(usage("config [show|set <key> <value>|path]")),
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset_ledger();
    output::success(format!(
        "Ledger reset with capacity {}.",
        context.ledger.capacity()
    ));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(build_info::current().summary());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry()
            .resolve(name)
            .ok_or_else(|| CommandError::InvalidArguments(format!("no command named `{name}`")))?;
        output::info(format!("{} - {}", entry.name, entry.description));
        if !entry.aliases.is_empty() {
            output::info(format!("aliases: {}", entry.aliases.join(", ")));
        }
        output::info(format!("usage: {}", entry.usage));
        return Ok(());
    }
    output::section("Commands");
    for entry in context.registry().list() {
        output::info(format!("{:<10} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn single_plate<'a>(args: &[&'a str], usage_text: &str) -> Result<&'a str, CommandError> {
    match args {
        [plate] => Ok(*plate),
        _ => Err(usage(usage_text)),
    }
}

fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}
