//! Command dispatch: reads records, builds the engine and prints results.

use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, ClosureArgs, Commands, ConfigCommands, MarkArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::TreeConfig;
use crate::domain::{NodeId, Record, RecordSet};
use crate::engine::TreeEngine;
use crate::render::{DualList, NestedList, OptionList};
use crate::tree_traits::forest_to_tree_string;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => _config(cli, command),
        _ => {
            let engine = build_engine(cli)?;
            _query(&engine, command)
        }
    }
}

/// Effective configuration: file layers plus command line overrides.
fn load_config(cli: &Cli) -> CliResult<TreeConfig> {
    let mut config = TreeConfig::load(cli.config.as_deref())?;
    if let Some(pid_name) = &cli.pid_name {
        config.pid_name = pid_name.clone();
    }
    if let Some(nbsp) = &cli.nbsp {
        config.nbsp = nbsp.clone();
    }
    Ok(config)
}

#[instrument(level = "debug", skip(cli))]
fn build_engine(cli: &Cli) -> CliResult<TreeEngine> {
    let config = load_config(cli)?;
    let text = read_input(&cli.file)?;
    let records = RecordSet::from_json(&text)?;
    debug!("loaded {} records from {}", records.len(), cli.file.display());
    Ok(TreeEngine::with_config(records, config)?)
}

fn read_input(path: &Path) -> CliResult<String> {
    let io_err = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_err)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(io_err)
    }
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let config = load_config(cli)?;
            config.validate()?;
            output::header("# effective configuration");
            output::info(&config.to_toml()?);
        }
        ConfigCommands::Template => output::info(&TreeConfig::template()),
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    output::info(&text);
    Ok(())
}

fn print_closure(records: Vec<&Record>, ids_only: bool) -> CliResult<()> {
    if ids_only {
        for id in records.iter().filter_map(|r| r.id()) {
            output::info(&id);
        }
        Ok(())
    } else {
        print_json(&records)
    }
}

fn marks_of(args: &MarkArgs) -> (&str, &str) {
    (args.selected.as_str(), args.disabled.as_str())
}

#[instrument(level = "debug", skip(engine))]
fn _query(engine: &TreeEngine, command: &Commands) -> CliResult<()> {
    match command {
        Commands::Children { id } => print_json(&engine.children(id.as_str())),
        Commands::Parent { id } => match engine.parent(id.as_str()) {
            Some(parent) => print_json(parent),
            None => {
                output::warning(&format!("no parent for id {}", NodeId::from(id.as_str())));
                Ok(())
            }
        },
        Commands::Descendants(ClosureArgs { id, with_self, ids }) => {
            print_closure(engine.descendants(id.as_str(), *with_self)?, *ids)
        }
        Commands::Ancestors(ClosureArgs { id, with_self, ids }) => {
            print_closure(engine.ancestors(id.as_str(), *with_self)?, *ids)
        }
        Commands::Options {
            id,
            template,
            top_template,
            marks,
            prefix,
        } => {
            let (selected, disabled) = marks_of(marks);
            let mut request = OptionList::new(template.as_str())
                .selected(selected)
                .disabled(disabled)
                .prefix(prefix.as_str());
            if let Some(top) = top_template {
                request = request.top_template(top.as_str());
            }
            output::info(&engine.option_list(id.as_str(), &request)?);
            Ok(())
        }
        Commands::Ul {
            id,
            template,
            marks,
            wrap_tag,
            wrap_attr,
        } => {
            let (selected, disabled) = marks_of(marks);
            let request = NestedList::new(template.as_str())
                .selected(selected)
                .disabled(disabled)
                .wrap(wrap_tag.as_str(), wrap_attr.as_str());
            output::info(&engine.nested_list(id.as_str(), &request)?);
            Ok(())
        }
        Commands::Menu {
            id,
            template,
            marks,
            wrap_tag,
            wrap_attr,
        } => {
            let (selected, disabled) = marks_of(marks);
            let request = NestedList::new(template.as_str())
                .selected(selected)
                .disabled(disabled)
                .wrap(wrap_tag.as_str(), wrap_attr.as_str());
            output::info(&engine.menu(id.as_str(), &request)?);
            Ok(())
        }
        Commands::Dual {
            id,
            enabled,
            disabled_template,
            marks,
            prefix,
        } => {
            let (selected, disabled) = marks_of(marks);
            let request = DualList::new(enabled.as_str(), disabled_template.as_str())
                .selected(selected)
                .disabled(disabled)
                .prefix(prefix.as_str());
            output::info(&engine.dual_list(id.as_str(), &request)?);
            Ok(())
        }
        Commands::Array { id, prefix } => print_json(&engine.tree_array(id.as_str(), prefix)?),
        Commands::List { id, field } => print_json(&engine.tree_list(id.as_str(), field)?),
        Commands::Show { id, label } => {
            let items = engine.tree_array(id.as_str(), "")?;
            if items.is_empty() {
                output::warning(&format!("no records below id {id}"));
            }
            output::info(&forest_to_tree_string(id, &items, label));
            Ok(())
        }
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn records_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "pid": 0, "name": "A"}}, {{"id": 2, "pid": 1, "name": "B"}}]"#
        )
        .unwrap();
        file
    }

    #[test]
    fn given_records_file_when_building_engine_then_loads_records() {
        let file = records_file();
        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["fasttree", "-f", path.as_str(), "children", "1"]);
        let engine = build_engine(&cli).unwrap();
        assert_eq!(engine.records().len(), 2);
        assert_eq!(engine.children(1).len(), 1);
    }

    #[test]
    fn given_pid_name_flag_when_building_engine_then_overrides_config() {
        let file = records_file();
        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["fasttree", "-f", path.as_str(), "--pid-name", "parent", "show"]);
        let engine = build_engine(&cli).unwrap();
        assert_eq!(engine.pid_name(), "parent");
    }

    #[test]
    fn given_missing_file_when_building_engine_then_noinput() {
        let cli = Cli::parse_from(["fasttree", "-f", "does/not/exist.json", "show"]);
        let err = build_engine(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_no_command_when_executing_then_usage_error() {
        let cli = Cli::parse_from(["fasttree"]);
        let err = execute_command(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
