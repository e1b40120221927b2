// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use the_basics::config::consts::DEFAULT_LOG_LEVEL;
use the_basics::config::{default_syllabus, load_and_validate_syllabus, Syllabus};
use the_basics::engine::{LessonResult, TourRunner, TourSummary};
use the_basics::errors::ConfigError;
use the_basics::observability::init_logging;
use the_basics::observability::messages::tour::{SyllabusLoaded, TourCompleted};
use the_basics::observability::messages::StructuredLog;

const DEFAULT_SOURCE: &str = "built-in default";

fn print_usage(program: &str) {
    eprintln!("Usage: {} [syllabus.yaml]", program);
    eprintln!("Example: {}", program);
    eprintln!("Example: {} syllabus/references-and-slices.yaml", program);
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Invocation<'a> {
    Help,
    Run(Option<&'a str>),
    Usage,
}

fn parse_args(args: &[String]) -> Invocation<'_> {
    match args.get(1).map(String::as_str) {
        _ if args.len() > 2 => Invocation::Usage,
        Some("-h" | "--help") => Invocation::Help,
        path => Invocation::Run(path),
    }
}

/// Read the syllabus named on the command line, or fall back to the built-in one.
fn resolve_syllabus(path: Option<&str>) -> Result<(Syllabus, String), ConfigError> {
    match path {
        Some(path) => Ok((load_and_validate_syllabus(path)?, path.to_string())),
        None => Ok((default_syllabus()?, DEFAULT_SOURCE.to_string())),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging(DEFAULT_LOG_LEVEL) {
        eprintln!("⚠️  {}", e);
    }

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("the-basics");

    let path = match parse_args(&args) {
        Invocation::Run(path) => path,
        Invocation::Help => {
            print_usage(program);
            return;
        }
        Invocation::Usage => {
            print_usage(program);
            process::exit(1);
        }
    };

    println!("Hello, World!");

    let (syllabus, source) = match resolve_syllabus(path) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    SyllabusLoaded {
        source: &source,
        lesson_count: syllabus.enabled_lessons().count(),
    }
    .log();

    let runner = match TourRunner::from_syllabus(&syllabus) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    println!("🦀 {}", runner.title());
    println!("{}", "═".repeat(40));
    println!("Lessons: {}", runner.lesson_names().join(", "));

    let summary = runner.run().await;
    print_summary(&summary);

    TourCompleted {
        title: &summary.title,
        completed: summary.completed_count(),
        failed: summary.failed_count(),
        duration: summary.duration,
    }
    .log();

    // The spawned task from the concurrency lesson is never awaited; returning
    // here shuts the runtime down whether or not it has run.
}

fn print_summary(summary: &TourSummary) {
    for (i, result) in summary.results.iter().enumerate() {
        print_lesson(i + 1, result);
    }

    println!("\n{}", "─".repeat(40));
    println!(
        "🎉 Tour complete: {} of {} lessons in {:?}",
        summary.completed_count(),
        summary.results.len(),
        summary.duration
    );
}

fn print_lesson(number: usize, result: &LessonResult) {
    println!("\n📘 {}. {}", number, result.lesson);
    match &result.outcome {
        Ok(outcome) => {
            for observation in &outcome.observations {
                println!("   • {}", observation);
            }
        }
        Err(e) => {
            println!("   ❌ {}", e);
        }
    }
}
