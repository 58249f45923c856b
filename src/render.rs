//! Terminal rendering of challenges with coloured split badges

use crate::model::{Challenge, Completion, DimensionSplit, PaceSplit};
use colored::{ColoredString, Colorize};
use std::fmt::Write as _;

/// What to render
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Only this challenge id
    pub challenge: Option<u8>,
    /// Include notes, IP and TT on per-level lines
    pub details: bool,
}

fn dimension_badge(split: DimensionSplit) -> ColoredString {
    let label = format!(" {} ", split.label());
    match split {
        DimensionSplit::Antimatter => label.white().on_green().bold(),
        DimensionSplit::Infinity => label.black().on_yellow().bold(),
        DimensionSplit::Time => label.white().on_magenta().bold(),
    }
}

fn pace_badge(split: PaceSplit) -> ColoredString {
    let label = format!(" {} ", split.label());
    match split {
        PaceSplit::Active => label.white().on_red().bold(),
        PaceSplit::Passive => label.white().on_bright_magenta().bold(),
        PaceSplit::Idle => label.white().on_blue().bold(),
    }
}

fn badges(completion: &Completion) -> String {
    format!(
        "{} {}",
        dimension_badge(completion.dimension_split),
        pace_badge(completion.pace_split)
    )
}

/// Legend listing every badge
pub fn render_legend() -> String {
    let dimension = [
        DimensionSplit::Antimatter,
        DimensionSplit::Infinity,
        DimensionSplit::Time,
    ]
    .map(|s| dimension_badge(s).to_string())
    .join(" ");
    let pace = [PaceSplit::Active, PaceSplit::Passive, PaceSplit::Idle]
        .map(|s| pace_badge(s).to_string())
        .join(" ");

    format!(
        "{} {}\n{} {}\n",
        "Dimension split (71-103):".dimmed(),
        dimension,
        "Pace split (121-141):     ".dimmed(),
        pace
    )
}

/// Render one challenge.
///
/// A challenge whose splits never change collapses to a single line.
pub fn render_challenge(challenge: &Challenge, options: RenderOptions) -> String {
    let mut out = String::new();
    let title = format!("EC{}", challenge.id).bold();

    let Some(first) = challenge.completions.first() else {
        let _ = writeln!(out, "{:<5} {}", title, "(no data)".dimmed());
        return out;
    };

    let varies = challenge.has_dimension_variation() || challenge.has_pace_variation();
    if !varies && !options.details {
        let _ = writeln!(out, "{:<5} {}", title, badges(first));
        return out;
    }

    let _ = writeln!(out, "{}", title);
    for completion in &challenge.completions {
        let level = format!("x{}", completion.level);
        if options.details {
            let _ = writeln!(
                out,
                "  {} {}  IP {:>6}  TT {:>5}  {}",
                level.dimmed(),
                badges(completion),
                completion.ip_req,
                completion.tt,
                completion.notes
            );
        } else {
            let _ = writeln!(out, "  {} {}", level.dimmed(), badges(completion));
        }
    }
    out
}

/// Render the legend followed by every selected challenge
pub fn render_challenges(challenges: &[Challenge], options: RenderOptions) -> String {
    let mut out = render_legend();
    out.push('\n');

    for challenge in challenges
        .iter()
        .filter(|c| options.challenge.map_or(true, |id| c.id == id))
    {
        out.push_str(&render_challenge(challenge, options));
    }
    out
}
