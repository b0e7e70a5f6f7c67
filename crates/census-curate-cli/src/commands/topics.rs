//! Topics command - list the topic registry.

use census_curate::Topic;
use colored::Colorize;
use serde::Serialize;

use super::CommandResult;

#[derive(Serialize)]
struct TopicSummary {
    topic: Topic,
    table_id: &'static str,
    labels: Vec<&'static str>,
}

pub fn run(json: bool, verbose: bool) -> CommandResult {
    if json {
        let summaries: Vec<_> = Topic::ALL
            .iter()
            .map(|t| TopicSummary {
                topic: *t,
                table_id: t.source_table(),
                labels: t.labels(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for topic in Topic::ALL {
        println!("{:45} {}", topic.key().white().bold(), topic.source_table().cyan());
        if verbose {
            for rule in topic.rules() {
                println!("    {:38} {}", rule.label, rule.columns.join(" + ").dimmed());
            }
        }
    }
    Ok(())
}
