use recurse_core::api as core_api;

use crate::commands::cli::Args;

/// Runs one menu session on the process terminal.
pub fn handle_menu(
    args: &Args,
    cfg: &core_api::AppConfig,
) -> Result<core_api::Outcome, core_api::CliError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    let outcome = core_api::MenuSession::new(cfg)
        .with_choice(args.choice.clone())
        .with_param(args.param.clone())
        .run(&mut reader, &mut writer)?;
    Ok(outcome)
}
