// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! The interactive browsing loop.

use super::Output;
use anyhow::{bail, Context, Result};
use bestiary_core::{CatalogSession, CategorySelector};
use std::io::{BufRead, Write};

const PROMPT: &str = "bestiary> ";

const HELP: &str = "\
Commands:
  search <text>     Filter by name (empty text clears the search)
  type <code|all>   Filter by category
  page <n>          Go to page n
  next, prev        Move one page forward or back
  clear             Reset search, category and page
  types             List the categories in the catalog
  help              Show this message
  quit              Leave";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Search(String),
    Type(CategorySelector),
    Page(usize),
    Next,
    Prev,
    Clear,
    Types,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parses a prompt line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "search" | "s" => Self::Search(rest.to_string()),
            "type" | "t" => Self::Type(CategorySelector::parse(rest)),
            "page" | "p" => Self::Page(
                rest.parse()
                    .with_context(|| format!("'{rest}' is not a page number"))?,
            ),
            "next" | "n" => Self::Next,
            "prev" => Self::Prev,
            "clear" => Self::Clear,
            "types" => Self::Types,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("Unknown command '{other}'. Type 'help' for the list."),
        };
        Ok(Some(command))
    }
}

/// Runs the prompt until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut CatalogSession,
    output: &Output,
    mut input: R,
    mut out: W,
) -> Result<()> {
    output.view(&session.view(), &mut out)?;

    loop {
        if !output.is_json() {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match ReplCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e:#}")?;
                continue;
            }
        };
        log::debug!("Prompt command: {command:?}");

        let view = match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            ReplCommand::Types => {
                write!(out, "{}", output.renderer().facets(&session.view().facets))?;
                continue;
            }
            ReplCommand::Search(term) => session.set_term(term),
            ReplCommand::Type(selector) => match session.set_category(selector) {
                Ok(view) => view,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            ReplCommand::Page(page) => session.set_page(page),
            ReplCommand::Next => session.next_page(),
            ReplCommand::Prev => session.previous_page(),
            ReplCommand::Clear => session.clear(),
        };
        output.view(&view, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Style;
    use bestiary_core::{CategoryCode, CategoryLabels, Creature, CreatureId, DisplayMetrics};
    use std::io::Cursor;

    fn session() -> CatalogSession {
        let creatures: Vec<Creature> = (1..=30)
            .map(|n| {
                let category = if n % 2 == 0 { "water" } else { "fire" };
                Creature::new(
                    CreatureId::new(n).unwrap(),
                    format!("creature-{n}"),
                    [CategoryCode::from(category)],
                    DisplayMetrics {
                        height: 10,
                        weight: 100,
                    },
                    None,
                )
                .unwrap()
            })
            .collect();
        let mut session = CatalogSession::new();
        session.finish_load(Ok::<_, String>(creatures));
        session
    }

    fn run_script(session: &mut CatalogSession, script: &str) -> String {
        let output = Output::new(CategoryLabels::spanish(), Style::PLAIN, false);
        let mut out = Vec::new();
        run(session, &output, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(
            ReplCommand::parse("search  Char ").unwrap(),
            Some(ReplCommand::Search("Char".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("type all").unwrap(),
            Some(ReplCommand::Type(CategorySelector::All))
        );
        assert_eq!(
            ReplCommand::parse("t fire").unwrap(),
            Some(ReplCommand::Type(CategorySelector::Only("fire".into())))
        );
        assert_eq!(ReplCommand::parse("page 3").unwrap(), Some(ReplCommand::Page(3)));
        assert_eq!(ReplCommand::parse("NEXT").unwrap(), Some(ReplCommand::Next));
        assert_eq!(ReplCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn search_without_text_clears_the_term() {
        assert_eq!(
            ReplCommand::parse("search").unwrap(),
            Some(ReplCommand::Search(String::new()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(ReplCommand::parse("page two").is_err());
        assert!(ReplCommand::parse("dance").is_err());
    }

    #[test]
    fn script_drives_the_session() {
        let mut session = session();
        let screen = run_script(&mut session, "next\ntype water\nsearch creature-1\nquit\n");

        assert!(screen.contains("Página 2/3"));
        assert!(screen.contains("Tipo: Agua  Página 1/2"));
        assert_eq!(session.query().term(), "creature-1");
        assert_eq!(session.query().page(), 1);
        // Water creatures named creature-1x: 10, 12, 14, 16 and 18.
        assert_eq!(session.view().stats.visible, 5);
    }

    #[test]
    fn unknown_category_is_reported_and_ignored() {
        let mut session = session();
        let screen = run_script(&mut session, "page 2\ntype dragon\n");

        assert!(screen.contains("dragon"));
        assert_eq!(session.query().page(), 2);
        assert_eq!(*session.query().category(), CategorySelector::All);
    }

    #[test]
    fn out_of_range_page_keeps_the_current_one() {
        let mut session = session();
        run_script(&mut session, "page 2\npage 9\n");
        assert_eq!(session.query().page(), 2);
    }

    #[test]
    fn types_lists_labels() {
        let mut session = session();
        let screen = run_script(&mut session, "types\n");
        assert!(screen.contains("fire   Fuego"));
        assert!(screen.contains("water  Agua"));
    }
}
