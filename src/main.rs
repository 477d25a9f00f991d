//! cmdify CLI

use cmdify::{detect_shells_from_env, CommandExecutor, ExecutorConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "shells" => {
            list_shells();
        }
        "exec" => {
            let mut rest = &args[2..];
            let as_json = rest.first().map(String::as_str) == Some("--json");
            if as_json {
                rest = &rest[1..];
            }

            let Some((program, cmd_args)) = rest.split_first() else {
                eprintln!("Usage: cmdify exec [--json] <program> [args...]");
                std::process::exit(1);
            };

            execute_command(program, cmd_args, as_json).await?;
        }
        "shell" => {
            if args.len() < 3 {
                eprintln!("Usage: cmdify shell <command line>");
                std::process::exit(1);
            }

            let command_line = args[2..].join(" ");
            execute_via_shell(&command_line).await?;
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    println!("cmdify v{}", cmdify::VERSION);
    println!();
    println!("Usage:");
    println!("  cmdify shells                        List detected shell candidates");
    println!("  cmdify exec [--json] <program> [args] Run a program directly");
    println!("  cmdify shell <command line>          Run a command line via a detected shell");
    println!();
    println!("Examples:");
    println!("  cmdify exec ls -la");
    println!("  cmdify exec --json pwd");
    println!("  cmdify shell 'ls | wc -l'");
}

fn list_shells() {
    let shells = detect_shells_from_env();

    if shells.is_empty() {
        println!("No shell candidates detected");
        return;
    }

    println!("Shell candidates ({}):", shells.len());
    for shell in shells {
        println!("  {}", shell);
    }
}

async fn execute_command(
    program: &str,
    args: &[String],
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let executor = CommandExecutor::new(ExecutorConfig::default());

    let result = executor.capture(program, args).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if !result.stdout.is_empty() {
            println!("{}", result.stdout.trim());
        }

        if !result.stderr.is_empty() {
            eprintln!("{}", result.stderr.trim());
        }

        println!();
        println!("Exit code: {}", result.exit_code);
        println!("Duration: {} ms", result.duration_ms);
    }

    if !result.success {
        std::process::exit(result.exit_code);
    }

    Ok(())
}

async fn execute_via_shell(command_line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let executor = CommandExecutor::new(ExecutorConfig::default());

    let output = executor.run_via_shell(command_line).await?;

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    Ok(())
}
