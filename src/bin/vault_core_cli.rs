use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use vault_config::{Config, ConfigManager};
use vault_core::{
    init, rules_from_config,
    storage::JsonProfileStore,
    utils::{
        build_info,
        persistence::{self, DraftFile},
    },
    VaultError,
};
use vault_wizard::{
    apply_action, hydrate_with_rules, parse_script, submit_with, SubmitMode, WizardState,
    WizardStep, TOTAL_STEPS,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), VaultError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        usage_exit();
    };

    match command.as_str() {
        "steps" => print_steps(),
        "run" => {
            let script = required_path(args.next());
            let mut save_to = None;
            let mut resume = None;
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--save" => save_to = Some(args.next().unwrap_or_else(|| usage_exit())),
                    "--from" => resume = Some(args.next().unwrap_or_else(|| usage_exit())),
                    _ => usage_exit(),
                }
            }
            run_script(&script, resume.as_deref(), save_to.as_deref())?;
        }
        "payload" => {
            let draft = required_path(args.next());
            let state = persistence::load_draft(&draft)?;
            println!("{}", serde_json::to_string_pretty(&state.submission_payload())?);
        }
        "hydrate" => {
            let profile = required_path(args.next());
            let save_to = match args.next().as_deref() {
                None => None,
                Some("--save") => Some(args.next().unwrap_or_else(|| usage_exit())),
                Some(_) => usage_exit(),
            };
            hydrate_profile(&profile, save_to.as_deref())?;
        }
        "submit" => {
            let draft = required_path(args.next());
            let account = args.next().unwrap_or_else(|| usage_exit());
            let mode = match args.next().as_deref() {
                None => SubmitMode::Create,
                Some("--update") => SubmitMode::Update,
                Some(_) => usage_exit(),
            };
            submit_draft(&draft, &account, mode)?;
        }
        "config" => {
            let rest: Vec<String> = args.collect();
            run_config(&rest)?;
        }
        "version" => println!("{}", build_info::current().summary()),
        _ => usage_exit(),
    }

    Ok(())
}

fn print_steps() {
    for step in WizardStep::ALL {
        println!(
            "{}/{}  {:.3}  {}  ({})",
            step.index() + 1,
            TOTAL_STEPS,
            step.progress(),
            step.title(),
            step.key()
        );
    }
}

fn run_script(script: &Path, resume: Option<&str>, save_to: Option<&str>) -> Result<(), VaultError> {
    let actions = parse_script(&fs::read_to_string(script)?)?;
    let (manager, mut config) = load_config()?;
    let mut state = match resume {
        Some("last") => {
            let path = config.last_draft.clone().ok_or_else(|| {
                VaultError::InvalidInput("no draft has been saved yet".into())
            })?;
            persistence::load_draft(&path)?
        }
        Some(path) => persistence::load_draft(Path::new(path))?,
        None => WizardState::with_rules(rules_from_config(&config)),
    };

    for action in actions {
        let outcome = apply_action(&mut state, action);
        println!("{}", serde_json::to_string(&outcome)?);
    }

    let blocked = state.incomplete_steps();
    if blocked.is_empty() {
        println!("status: complete");
    } else {
        let keys: Vec<&str> = blocked.iter().map(|step| step.key()).collect();
        println!("status: incomplete ({})", keys.join(", "));
    }

    if let Some(target) = save_to {
        store_draft(&state, target, &manager, &mut config)?;
    }
    Ok(())
}

/// Turns a stored profile into an editable draft, printed or saved.
fn hydrate_profile(profile: &Path, save_to: Option<&str>) -> Result<(), VaultError> {
    let (manager, mut config) = load_config()?;
    let profile = persistence::load_profile(profile)?;
    let state = hydrate_with_rules(&profile, rules_from_config(&config));

    match save_to {
        Some(target) => store_draft(&state, target, &manager, &mut config),
        None => {
            println!("{}", serde_json::to_string_pretty(&DraftFile::new(state))?);
            Ok(())
        }
    }
}

fn store_draft(
    state: &WizardState,
    target: &str,
    manager: &ConfigManager,
    config: &mut Config,
) -> Result<(), VaultError> {
    let path = draft_path(config, target);
    persistence::save_draft(state, &path)?;
    config.last_draft = Some(path.clone());
    manager.save(config)?;
    println!("Saved draft to {}", path.display());
    Ok(())
}

fn submit_draft(draft: &Path, account: &str, mode: SubmitMode) -> Result<(), VaultError> {
    let (_, config) = load_config()?;
    let store = JsonProfileStore::new(&config.profiles_dir(), account)?;
    let mut state = persistence::load_draft(draft)?;

    let pending = state.incomplete_steps();
    if !pending.is_empty() {
        let keys: Vec<&str> = pending.iter().map(|step| step.key()).collect();
        return Err(VaultError::InvalidInput(format!(
            "draft is not complete: {}",
            keys.join(", ")
        )));
    }

    submit_with(&mut state, &store, mode)?;
    println!("Stored vault profile at {}", store.path().display());
    Ok(())
}

fn run_config(args: &[String]) -> Result<(), VaultError> {
    let (manager, mut config) = load_config()?;
    let sub = args.first().map(String::as_str).unwrap_or("show");

    match sub {
        "show" => println!("{}", serde_json::to_string_pretty(&config)?),
        "set" => {
            let (Some(key), Some(value)) = (args.get(1), args.get(2)) else {
                return Err(VaultError::InvalidInput(
                    "usage: config set <key> <value>".into(),
                ));
            };
            set_config_value(&mut config, key, value)?;
            manager.save(&config)?;
            println!("Set {key} = {value}");
        }
        "backup" => {
            let note = (args.len() > 1).then(|| args[1..].join(" "));
            let name = manager.backup(&config, note.as_deref())?;
            println!("Created backup {name}");
        }
        "backups" => {
            let names = manager.list_backups()?;
            if names.is_empty() {
                println!("No configuration backups found.");
            }
            for name in names {
                println!("{name}");
            }
        }
        "restore" => {
            let Some(name) = args.get(1) else {
                return Err(VaultError::InvalidInput(
                    "usage: config restore <name>".into(),
                ));
            };
            let restored = manager.restore(name)?;
            manager.save(&restored)?;
            println!("Restored configuration from {name}");
        }
        other => {
            return Err(VaultError::InvalidInput(format!(
                "unknown config command `{other}`"
            )))
        }
    }
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<(), VaultError> {
    let count = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| VaultError::InvalidInput(format!("`{value}` is not a count")))
    };
    match key {
        "locale" => config.locale = value.to_string(),
        "currency" => config.currency = value.to_ascii_uppercase(),
        "required_interests" => config.required_interests = count(value)?,
        "required_dislikes" => config.required_dislikes = count(value)?,
        "custom_milestone_budget_tier" => config.custom_milestone_budget_tier = value.to_string(),
        "api_base_url" => config.api_base_url = Some(value.to_string()),
        "data_root" => config.data_root = Some(PathBuf::from(value)),
        _ => {
            return Err(VaultError::InvalidInput(format!(
                "unknown config key `{key}`"
            )))
        }
    }
    Ok(())
}

/// Config under `$VAULT_HOME` (or the platform config dir).
fn load_config() -> Result<(ConfigManager, Config), VaultError> {
    let base = env::var_os("VAULT_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("vault")))
        .unwrap_or_else(|| PathBuf::from(".vault"));
    let manager = ConfigManager::with_base_dir(base)?;
    let config = manager.load()?;
    Ok((manager, config))
}

/// A bare draft name lands in the configured drafts directory, with `.json`
/// added only when the name has no extension.
fn draft_path(config: &Config, target: &str) -> PathBuf {
    let path = Path::new(target);
    if path.components().count() > 1 || path.is_absolute() {
        return path.to_path_buf();
    }
    let path = config.drafts_dir().join(path);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("json")
    }
}

fn required_path(arg: Option<String>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| usage_exit())
}

fn usage_exit() -> ! {
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!(
        "Usage: vault_core_cli <command>\n\
         Commands:\n  \
         steps\n  \
         run <script.json> [--from <draft.json|last>] [--save <draft.json|name>]\n  \
         payload <draft.json>\n  \
         hydrate <profile.json> [--save <draft.json|name>]\n  \
         submit <draft.json> <account> [--update]\n  \
         config [show|set <key> <value>|backup [note]|backups|restore <name>]\n  \
         version"
    );
}
