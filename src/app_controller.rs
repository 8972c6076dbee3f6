use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;

use crate::{
    engine::{
        launcher::{Launch, ScriptLauncher},
        model::AppRecord,
        resolver::Resolver,
        store::{AppStore, StoreError},
    },
    ui::{
        cli::Cli,
        menu::{self, MenuChoice},
    },
};

/// Environment override for the store file location.
const STORE_ENV_VAR: &str = "APPDOCK_STORE";
const STORE_FILE: &str = "apps.json";

/// The primary orchestration function. Returns the process exit code.
pub fn run(args: Cli) -> Result<i32> {
    let store = AppStore::new(store_path(&args)?);
    let mut records = store
        .load()
        .with_context(|| format!("Failed to load app store at {}", store.path().display()))?;
    let resolver = Resolver::from_process_env();

    if args.list {
        return list_apps(&records);
    }

    if let Some(name) = &args.name {
        let Some(record) = records.iter().find(|r| r.name == *name).cloned() else {
            menu::report_error(&format!(
                "no app named '{}' in {}",
                name,
                store.path().display()
            ));
            return Ok(1);
        };
        return launch(&record, &resolver);
    }

    // Browsing loop: every sub-flow returns here except launch and exit.
    loop {
        if !args.no_clear {
            menu::clear_screen();
        }
        if records.is_empty() {
            println!("No apps defined yet. Pick \"Add app\" to create one.");
        }

        match menu::select_action(&records)? {
            MenuChoice::Launch(record) => return launch(&record, &resolver),
            MenuChoice::Add => records = add_app(&store, &records, &resolver)?,
            MenuChoice::Remove => records = remove_app(&store, &records)?,
            MenuChoice::Exit => {
                if !args.no_clear {
                    menu::clear_screen();
                }
                return Ok(0);
            }
        }
    }
}

// ──────────────────────────────────────────────────────────────
//  Launch flow
// ──────────────────────────────────────────────────────────────
fn launch<F>(record: &AppRecord, resolver: &Resolver<F>) -> Result<i32>
where
    F: Fn(&str) -> Option<String>,
{
    let work_dir = match resolver.resolve(&record.directory) {
        Ok(path) => path,
        Err(err) => {
            menu::report_error(&err.to_string());
            return Ok(1);
        }
    };
    if !work_dir.exists() {
        menu::report_error(&format!("directory does not exist: {}", work_dir.display()));
        return Ok(1);
    }
    debug!("resolved '{}' -> {}", record.directory, work_dir.display());

    println!("\nRunning: {}", record.command.bold());
    println!("Working directory: {}\n", work_dir.display());

    let launcher = ScriptLauncher::locate()?;
    launcher.launch(&work_dir, &record.command)
}

// ──────────────────────────────────────────────────────────────
//  Add / remove flows
// ──────────────────────────────────────────────────────────────
fn add_app<F>(
    store: &AppStore,
    records: &[AppRecord],
    resolver: &Resolver<F>,
) -> Result<Vec<AppRecord>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(candidate) = menu::prompt_new_app()? else {
        return Ok(records.to_vec());
    };

    let resolved = match resolver.resolve(&candidate.directory) {
        Ok(path) => path,
        Err(err) => {
            menu::report_error(&err.to_string());
            menu::pause();
            return Ok(records.to_vec());
        }
    };
    if !resolved.exists() {
        menu::report_error(&format!("directory does not exist: {}", resolved.display()));
        menu::pause();
        return Ok(records.to_vec());
    }

    match store.add(records, candidate) {
        Ok(next) => Ok(next),
        Err(err @ StoreError::DuplicateName(_)) => {
            menu::report_error(&err.to_string());
            menu::pause();
            Ok(records.to_vec())
        }
        Err(err) => Err(err.into()),
    }
}

fn remove_app(store: &AppStore, records: &[AppRecord]) -> Result<Vec<AppRecord>> {
    let Some(target) = menu::prompt_removal(records)? else {
        return Ok(records.to_vec());
    };
    Ok(store.remove(records, &target)?)
}

// ──────────────────────────────────────────────────────────────
//  Helpers
// ──────────────────────────────────────────────────────────────
fn list_apps(records: &[AppRecord]) -> Result<i32> {
    if records.is_empty() {
        println!("No apps defined.");
        return Ok(0);
    }
    for record in records {
        println!("{}\t{}\t{}", record.name, record.directory, record.command);
    }
    Ok(0)
}

fn store_path(args: &Cli) -> Result<PathBuf> {
    if let Some(path) = &args.store {
        return Ok(path.clone());
    }
    if let Ok(path) = env::var(STORE_ENV_VAR) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    Ok(exe
        .parent()
        .map(|dir| dir.join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE)))
}
