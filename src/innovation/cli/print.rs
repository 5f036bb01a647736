use chrono::{DateTime, Utc};
use colored::Colorize;
use innovation::api::{CmdMessage, MessageLevel, StatsReport};
use innovation::config::InnovationConfig;
use innovation::index::DisplayIdea;
use innovation::model::{ResourceKind, TRAIT_MAX};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const RANK_WIDTH: usize = 6;
const SCORE_WIDTH: usize = 6;
const TRAIT_LABEL_WIDTH: usize = 38;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_ideas(ideas: &[DisplayIdea]) {
    if ideas.is_empty() {
        println!("No ideas yet.");
        return;
    }

    for di in ideas {
        let idx_str = format!("{:>3}. ", di.position);
        let rank = format!("{:>+width$}", di.idea.rank, width = RANK_WIDTH - 1);
        let score = format!("{:>width$.1}", di.idea.score(), width = SCORE_WIDTH - 1);
        let time_ago = format_time_ago(di.idea.created_at);

        let fixed_width = idx_str.width() + RANK_WIDTH + SCORE_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_content = if di.idea.description.is_empty() {
            di.idea.title.clone()
        } else {
            let preview: String = di
                .idea
                .description
                .chars()
                .take(60)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            format!("{} - {}", di.idea.title, preview)
        };
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let rank_colored = match di.idea.rank {
            r if r > 0 => rank.green(),
            r if r < 0 => rank.red(),
            _ => rank.normal(),
        };

        println!(
            "{}{}{}{} {}{}",
            idx_str.yellow(),
            title_display,
            " ".repeat(padding),
            rank_colored,
            score.cyan(),
            time_ago.dimmed()
        );
    }
}

pub fn print_full_ideas(ideas: &[DisplayIdea]) {
    for (i, di) in ideas.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let idea = &di.idea;
        println!(
            "{} {}",
            format!("{}.", di.position).yellow(),
            idea.title.bold()
        );
        println!(
            "{}",
            format!(
                "id {}  ·  rank {}  ·  score {:.2}  ·  created {}",
                idea.id,
                idea.rank,
                idea.score(),
                idea.created_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
        println!("--------------------------------");
        if !idea.description.is_empty() {
            println!("{}\n", idea.description);
        }

        println!("{}", "Traits".bold());
        for t in idea.traits.iter() {
            println!(
                "  {}{} {}",
                pad_to_width(&t.name, TRAIT_LABEL_WIDTH),
                trait_bar(t.value),
                t.value
            );
        }

        if !idea.resources.is_empty() {
            println!("\n{}", "Resources".bold());
            for (n, r) in idea.resources.iter().enumerate() {
                let marker = match r.kind {
                    ResourceKind::Link => "link",
                    ResourceKind::File => "file",
                };
                let note = r
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(|d| format!(" - {}", d))
                    .unwrap_or_default();
                println!(
                    "  {}. [{}] {} {}{}",
                    n + 1,
                    marker.dimmed(),
                    r.name,
                    r.url.underline(),
                    note.dimmed()
                );
            }
        }

        if !idea.process.is_empty() {
            println!("\n{}", "Process".bold());
            for (n, step) in idea.process.iter().enumerate() {
                println!("  {}. {}", n + 1, step);
            }
        }
    }
}

pub fn print_stats(report: &StatsReport) {
    println!("{:<16}{}", "Total Ideas", report.stats.count.to_string().blue().bold());
    println!(
        "{:<16}{}",
        "Average Score",
        report.stats.average_score_display().green().bold()
    );
    println!(
        "{:<16}{}",
        "Top Ranked",
        report.stats.top_rank_display().yellow().bold()
    );

    if !report.trait_averages.is_empty() {
        println!("\n{}", "Trait Averages".bold());
        for (name, avg) in &report.trait_averages {
            println!("  {}{:.2}", pad_to_width(name, TRAIT_LABEL_WIDTH), avg);
        }
    }

    if !report.recent.is_empty() {
        println!("\n{}", "Recent Ideas".bold());
        print_ideas(&report.recent);
    }
}

pub fn print_config(config: &InnovationConfig) {
    for key in InnovationConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn trait_bar(value: u8) -> String {
    let filled = usize::from(value);
    let empty = usize::from(TRAIT_MAX).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled).blue(), "░".repeat(empty).dimmed())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
