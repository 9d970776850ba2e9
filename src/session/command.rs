use chrono::NaiveDate;

use crate::models::ProductSelection;
use crate::session::errors::CommandError;

pub const HELP: &str = "\
Commands:
  from YYYY-MM-DD              set the first order date to include
  to YYYY-MM-DD                set the last order date to include
  categories all|none|A,B,...  choose which categories to include,
                               'all' and 'none' in any case take precedence over names
  product All|NAME             restrict the dashboard to one product
  options                      list the known categories and products
  details                      show or hide the transaction table
  reset                        restore the default filters
  show                         draw the dashboard again
  help                         show this message
  quit                         leave the dashboard";

#[derive(Debug, Clone, PartialEq)]
pub enum CategorySelection {
    All,
    None,
    Only(Vec<String>)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    From(NaiveDate),
    To(NaiveDate),
    Categories(CategorySelection),
    Product(ProductSelection),
    Details,
    Options,
    Reset,
    Show,
    Help,
    Quit
}

impl Command {
    /// Parses one line of user input. Blank lines are `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(None);
        }

        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (line, "")
        };

        let command = match name.to_lowercase().as_str() {
            "from" => Command::From(parse_date("from", argument)?),
            "to" => Command::To(parse_date("to", argument)?),
            "categories" => Command::Categories(parse_categories(argument)?),
            "product" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument { command: "product", expected: "'All' or a product name" });
                }
                Command::Product(ProductSelection::parse(argument))
            }
            "details" => Command::Details,
            "options" => Command::Options,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(name.to_string()))
        };

        Ok(Some(command))
    }
}

fn parse_date(command: &'static str, argument: &str) -> Result<NaiveDate, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument { command, expected: "a date as YYYY-MM-DD" });
    }

    NaiveDate::parse_from_str(argument, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate { value: argument.to_string() })
}

/// `all` and `none` are keywords in any letter case, so a category literally named
/// either one can only be chosen together with another name.
fn parse_categories(argument: &str) -> Result<CategorySelection, CommandError> {
    match argument.to_lowercase().as_str() {
        "" => Err(CommandError::MissingArgument { command: "categories", expected: "'all', 'none' or a comma separated list" }),
        "all" => Ok(CategorySelection::All),
        "none" => Ok(CategorySelection::None),
        _ => Ok(CategorySelection::Only(
            argument.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        ))
    }
}
