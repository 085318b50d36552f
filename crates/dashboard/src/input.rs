//! Line-oriented commands for the terminal front end.

use crate::actions::DashboardAction;

pub const HELP: &str = "\
Type to search. Commands:
  :add            add product
  :report         generate report
  :check          check stock
  :vendors        manage vendors
  :details <n>    show details for card n
  :show           redraw
  :help           this help
  :quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Search(String),
    Action(DashboardAction),
    Show,
    Help,
    Quit,
    Invalid(String),
}

impl Input {
    /// Lines starting with `:` are commands; anything else is a search query.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.strip_prefix(':') else {
            return Input::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            return Input::Invalid(format!("too many arguments in ':{command}'"));
        }

        match (name, arg) {
            ("add", None) => Input::Action(DashboardAction::AddProduct),
            ("report", None) => Input::Action(DashboardAction::GenerateReport),
            ("check", None) => Input::Action(DashboardAction::CheckStock),
            ("vendors", None) => Input::Action(DashboardAction::ManageVendors),
            ("details", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => Input::Action(DashboardAction::ShowProductDetails {
                    position: n - 1,
                }),
                _ => Input::Invalid(format!("card number must be 1 or more, got '{n}'")),
            },
            ("show", None) => Input::Show,
            ("help", None) => Input::Help,
            ("quit" | "q", None) => Input::Quit,
            _ => Input::Invalid(format!("unknown command ':{command}'")),
        }
    }
}
