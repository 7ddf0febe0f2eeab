use std::path::PathBuf;

use tokio::io::AsyncReadExt;

use partforge_editor_lib::command::{execute_json, execute_json_batch};
use partforge_editor_lib::persistence::AnyProjectStore;
use partforge_editor_lib::state::EditorSettings;
use partforge_editor_lib::EditorController;

/// Command line options
#[derive(Debug, Default)]
struct Args {
    /// Project document to load before running commands
    project: Option<PathBuf>,
    /// JSON command script; stdin when absent or `-`
    commands: Option<PathBuf>,
    /// Where to write the `{name, parts}` export afterwards
    export: Option<PathBuf>,
    /// Settings file instead of the user config dir
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partforge_editor=info,partforge_editor_lib=info".into()),
        )
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("usage: partforge-editor [--project <file>] [--commands <file>|-] [--export <file>] [--settings <file>]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--project" => &mut parsed.project,
            "--commands" => &mut parsed.commands,
            "--export" => &mut parsed.export,
            "--settings" => &mut parsed.settings,
            other => return Err(format!("unknown argument: {other}")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {arg}"))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(parsed)
}

async fn run(args: Args) -> Result<(), String> {
    let settings = match &args.settings {
        Some(path) => EditorSettings::load_from(path),
        None => EditorSettings::load(),
    };
    let store = AnyProjectStore::from_settings(&settings).map_err(|e| e.to_string())?;
    let mut editor = EditorController::new(settings);

    if let Some(path) = &args.project {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read project file {}: {e}", path.display()))?;
        let doc = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse project JSON from {}: {e}", path.display()))?;
        editor.load_project(doc).map_err(|e| e.to_string())?;
    }

    let script = match &args.commands {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read command file {}: {e}", path.display()))?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| format!("Failed to read commands from stdin: {e}"))?;
            buf
        }
    };

    let script = script.trim();
    if !script.is_empty() {
        let output = if script.starts_with('[') {
            let responses = execute_json_batch(&mut editor, &store, script).await?;
            serde_json::to_string_pretty(&responses)
        } else {
            let response = execute_json(&mut editor, &store, script).await?;
            serde_json::to_string_pretty(&response)
        }
        .map_err(|e| e.to_string())?;
        println!("{output}");
    }

    if let Some(path) = &args.export {
        let json = editor.export_project_json().map_err(|e| e.to_string())?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| format!("Failed to write export {}: {e}", path.display()))?;
        tracing::info!(
            "Exported {} parts to {}",
            editor.parts().len(),
            path.display()
        );
    }

    Ok(())
}
