//! Command parsing for the command line

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use crate::catalog::Difficulty;
use crate::progress::Section;

/// Default filename for `:export` without an argument
const DEFAULT_EXPORT_PATH: &str = "dojo-export.json";

/// Fields for a new STAR story entered from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub category: Option<String>,
}

/// Fields for a user-added problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDraft {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub link: String,
    pub tags: Vec<String>,
}

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Toggle the help overlay: :help or :h
    Help,
    /// Clear message: (empty command)
    Nop,
    /// Switch section: :go <section>
    Go(Section),
    /// Mark a topic complete: :mark <topic-id>
    Mark(String),
    /// Unmark a topic: :unmark <topic-id>
    Unmark(String),
    /// Mark a problem solved: :done <problem-id>
    Done(String),
    /// Unmark a problem: :undone <problem-id>
    Undone(String),
    /// Generate a study plan: :plan <YYYY-MM-DD>
    Plan(NaiveDate),
    /// Set the target date without regenerating the plan: :target <YYYY-MM-DD>
    Target(NaiveDate),
    /// Set dark mode, or toggle it with no argument: :dark [on|off]
    Dark(Option<bool>),
    /// Enable or disable reminders: :reminders <on|off>
    Reminders(bool),
    /// Set the reminder time: :remind-at <HH:MM>
    RemindAt(NaiveTime),
    /// Add a STAR story: :story Title | Situation | Task | Action | Result [| Category]
    Story(Box<StoryDraft>),
    /// Add a problem: :problem id | Name | easy|medium|hard | url [| tag,tag]
    AddProblem(Box<ProblemDraft>),
    /// Save solution text for a user problem: :solution <id> <text>
    Solution { id: String, text: String },
    /// Save notes for a user problem: :notes <id> <text>
    Notes { id: String, text: String },
    /// Export progress: :export [path]
    Export(PathBuf),
    /// Import progress: :import <path>
    Import(PathBuf),
    /// Discard all progress: :reset
    Reset,
    /// Search topics: /query
    Search(String),
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(&'static str),
    /// Argument present but unusable
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "go" | "g" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("go");
            }
            match args.parse::<Section>() {
                Ok(section) => ParseResult::Ok(Command::Go(section)),
                Err(e) => ParseResult::InvalidArgument(e),
            }
        }
        "mark" | "m" => require_arg("mark", args, |id| Command::Mark(id.to_string())),
        "unmark" => require_arg("unmark", args, |id| Command::Unmark(id.to_string())),
        "done" => require_arg("done", args, |id| Command::Done(id.to_string())),
        "undone" => require_arg("undone", args, |id| Command::Undone(id.to_string())),
        "plan" | "p" => parse_date("plan", args, Command::Plan),
        "target" => parse_date("target", args, Command::Target),
        "dark" => match args.to_lowercase().as_str() {
            "" => ParseResult::Ok(Command::Dark(None)),
            "on" => ParseResult::Ok(Command::Dark(Some(true))),
            "off" => ParseResult::Ok(Command::Dark(Some(false))),
            other => ParseResult::InvalidArgument(format!("expected on or off, got `{other}`")),
        },
        "reminders" => match args.to_lowercase().as_str() {
            "on" => ParseResult::Ok(Command::Reminders(true)),
            "off" => ParseResult::Ok(Command::Reminders(false)),
            "" => ParseResult::MissingArgument("reminders"),
            other => ParseResult::InvalidArgument(format!("expected on or off, got `{other}`")),
        },
        "remind-at" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("remind-at");
            }
            match NaiveTime::parse_from_str(args, "%H:%M") {
                Ok(time) => ParseResult::Ok(Command::RemindAt(time)),
                Err(_) => {
                    ParseResult::InvalidArgument(format!("expected a HH:MM time, got `{args}`"))
                }
            }
        }
        "story" => parse_story(args),
        "problem" => parse_problem(args),
        "solution" => parse_id_and_text("solution", args, |id, text| Command::Solution { id, text }),
        "notes" => parse_id_and_text("notes", args, |id, text| Command::Notes { id, text }),
        "export" | "e" => {
            let path = if args.is_empty() { DEFAULT_EXPORT_PATH } else { args };
            ParseResult::Ok(Command::Export(PathBuf::from(path)))
        }
        "import" => require_arg("import", args, |path| Command::Import(PathBuf::from(path))),
        "reset" => ParseResult::Ok(Command::Reset),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

/// Parse a search query (without the leading /)
pub fn parse_search(input: &str) -> Command {
    Command::Search(input.to_string())
}

fn require_arg(name: &'static str, args: &str, build: impl FnOnce(&str) -> Command) -> ParseResult {
    if args.is_empty() { ParseResult::MissingArgument(name) } else { ParseResult::Ok(build(args)) }
}

fn parse_date(name: &'static str, args: &str, build: impl FnOnce(NaiveDate) -> Command) -> ParseResult {
    if args.is_empty() {
        return ParseResult::MissingArgument(name);
    }
    match NaiveDate::parse_from_str(args, "%Y-%m-%d") {
        Ok(date) => ParseResult::Ok(build(date)),
        Err(_) => ParseResult::InvalidArgument(format!("expected a YYYY-MM-DD date, got `{args}`")),
    }
}

fn parse_id_and_text(
    name: &'static str,
    args: &str,
    build: impl FnOnce(String, String) -> Command,
) -> ParseResult {
    let mut parts = args.splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("");
    let text = parts.next().map(str::trim).unwrap_or("");
    if id.is_empty() || text.is_empty() {
        ParseResult::MissingArgument(name)
    } else {
        ParseResult::Ok(build(id.to_string(), text.to_string()))
    }
}

fn parse_story(args: &str) -> ParseResult {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if fields.len() < 5 || fields.iter().take(5).any(|f| f.is_empty()) {
        return ParseResult::InvalidArgument(
            "expected: Title | Situation | Task | Action | Result [| Category]".to_string(),
        );
    }
    ParseResult::Ok(Command::Story(Box::new(StoryDraft {
        title: fields[0].to_string(),
        situation: fields[1].to_string(),
        task: fields[2].to_string(),
        action: fields[3].to_string(),
        result: fields[4].to_string(),
        category: fields.get(5).filter(|c| !c.is_empty()).map(|c| c.to_string()),
    })))
}

fn parse_problem(args: &str) -> ParseResult {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if fields.len() < 4 || fields.iter().take(4).any(|f| f.is_empty()) {
        return ParseResult::InvalidArgument(
            "expected: id | Name | easy|medium|hard | url [| tag,tag]".to_string(),
        );
    }
    let difficulty = match fields[2].to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        other => {
            return ParseResult::InvalidArgument(format!(
                "expected easy, medium or hard, got `{other}`"
            ));
        }
    };
    let tags = fields
        .get(4)
        .map(|raw| raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect())
        .unwrap_or_default();

    ParseResult::Ok(Command::AddProblem(Box::new(ProblemDraft {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        difficulty,
        link: fields[3].to_string(),
        tags,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("quit"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("Q"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_go_command() {
        match parse_command("go study-plan") {
            ParseResult::Ok(Command::Go(section)) => assert_eq!(section, Section::StudyPlan),
            other => panic!("expected Go, got {other:?}"),
        }
        assert!(matches!(parse_command("go nowhere"), ParseResult::InvalidArgument(_)));
        assert!(matches!(parse_command("go"), ParseResult::MissingArgument("go")));
    }

    #[test]
    fn parse_mark_and_unmark() {
        assert!(matches!(parse_command("mark ds-arrays"), ParseResult::Ok(Command::Mark(id)) if id == "ds-arrays"));
        assert!(matches!(parse_command("m ds-arrays"), ParseResult::Ok(Command::Mark(_))));
        assert!(matches!(parse_command("unmark ds-arrays"), ParseResult::Ok(Command::Unmark(_))));
        assert!(matches!(parse_command("mark"), ParseResult::MissingArgument("mark")));
    }

    #[test]
    fn parse_plan_command() {
        match parse_command("plan 2025-09-01") {
            ParseResult::Ok(Command::Plan(date)) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
            }
            other => panic!("expected Plan, got {other:?}"),
        }
        assert!(matches!(parse_command("plan soon"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_target_and_dark() {
        assert!(matches!(parse_command("target 2025-09-01"), ParseResult::Ok(Command::Target(_))));
        assert!(matches!(parse_command("dark"), ParseResult::Ok(Command::Dark(None))));
        assert!(matches!(parse_command("dark on"), ParseResult::Ok(Command::Dark(Some(true)))));
        assert!(matches!(parse_command("dark off"), ParseResult::Ok(Command::Dark(Some(false)))));
        assert!(matches!(parse_command("dark maybe"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_reminder_commands() {
        assert!(matches!(parse_command("reminders on"), ParseResult::Ok(Command::Reminders(true))));
        assert!(matches!(
            parse_command("reminders off"),
            ParseResult::Ok(Command::Reminders(false))
        ));
        assert!(matches!(parse_command("reminders maybe"), ParseResult::InvalidArgument(_)));

        match parse_command("remind-at 09:30") {
            ParseResult::Ok(Command::RemindAt(time)) => {
                assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
            }
            other => panic!("expected RemindAt, got {other:?}"),
        }
    }

    #[test]
    fn parse_story_command() {
        match parse_command("story Outage | Prod down | Restore service | Rolled back | Fixed in 20m | Incident") {
            ParseResult::Ok(Command::Story(draft)) => {
                assert_eq!(draft.title, "Outage");
                assert_eq!(draft.result, "Fixed in 20m");
                assert_eq!(draft.category.as_deref(), Some("Incident"));
            }
            other => panic!("expected Story, got {other:?}"),
        }
        assert!(matches!(parse_command("story just a title"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_problem_command() {
        match parse_command("problem lc-x | Word Ladder | hard | https://leetcode.com/x | bfs,graph") {
            ParseResult::Ok(Command::AddProblem(draft)) => {
                assert_eq!(draft.id, "lc-x");
                assert_eq!(draft.difficulty, Difficulty::Hard);
                assert_eq!(draft.tags, vec!["bfs".to_string(), "graph".to_string()]);
            }
            other => panic!("expected AddProblem, got {other:?}"),
        }
        assert!(matches!(
            parse_command("problem lc-x | Name | impossible | url"),
            ParseResult::InvalidArgument(_)
        ));
    }

    #[test]
    fn parse_solution_command() {
        match parse_command("solution lc-x class Solution {}") {
            ParseResult::Ok(Command::Solution { id, text }) => {
                assert_eq!(id, "lc-x");
                assert_eq!(text, "class Solution {}");
            }
            other => panic!("expected Solution, got {other:?}"),
        }
        assert!(matches!(parse_command("solution lc-x"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_notes_command() {
        match parse_command("notes lc-x remember the two-pointer trick") {
            ParseResult::Ok(Command::Notes { id, text }) => {
                assert_eq!(id, "lc-x");
                assert_eq!(text, "remember the two-pointer trick");
            }
            other => panic!("expected Notes, got {other:?}"),
        }
        assert!(matches!(parse_command("notes lc-x"), ParseResult::MissingArgument("notes")));
    }

    #[test]
    fn parse_export_defaults_the_path() {
        match parse_command("export") {
            ParseResult::Ok(Command::Export(path)) => {
                assert_eq!(path, PathBuf::from("dojo-export.json"));
            }
            other => panic!("expected Export, got {other:?}"),
        }
        assert!(matches!(parse_command("import"), ParseResult::MissingArgument("import")));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("frobnicate"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }

    #[test]
    fn search_wraps_the_query() {
        assert!(matches!(parse_search("hash"), Command::Search(q) if q == "hash"));
    }
}
