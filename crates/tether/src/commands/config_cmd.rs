//! Config subcommand handlers.

use dialoguer::{Confirm, Input};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            println!("{}", format_config_redacted(&cfg));
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Init => init(global),
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "platform = \"{}\"", p.platform);
        if let Some(ref u) = p.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if p.password.is_some() {
            let _ = writeln!(out, "password = \"****\"");
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Interactively create or update a profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    let platform: String = Input::new()
        .with_prompt("Platform URL")
        .with_initial_text(
            cfg.profiles
                .get(&profile_name)
                .map(|p| p.platform.clone())
                .or_else(|| global.platform.clone())
                .unwrap_or_default(),
        )
        .interact_text()
        .map_err(prompt_err)?;

    // Validate early so a broken URL never lands in the file.
    let _: url::Url = platform.parse().map_err(|_| CliError::Validation {
        field: "platform".into(),
        reason: format!("invalid URL: {platform}"),
    })?;

    let with_auth = Confirm::new()
        .with_prompt("Does the platform require authentication?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;

    let (username, password_env) = if with_auth {
        let user: String = Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(prompt_err)?;
        let env: String = Input::new()
            .with_prompt("Environment variable holding the password")
            .with_initial_text("TETHER_PASSWORD")
            .interact_text()
            .map_err(prompt_err)?;
        (Some(user), Some(env))
    } else {
        (None, None)
    };

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            platform,
            username,
            password: None,
            password_env,
            insecure: if global.insecure { Some(true) } else { None },
            timeout: None,
        },
    );
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(profile_name.clone());
    }

    config::save_config(&cfg)?;
    eprintln!(
        "Profile '{profile_name}' written to {}",
        config::config_path().display()
    );
    Ok(())
}
