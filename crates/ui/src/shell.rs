//! Interactive terminal front-end: one screen at a time, driven by
//! line commands read from stdin.

use std::str::FromStr;
use std::sync::Arc;

use booking_client::BookingApi;
use booking_core::models::booking::BookingStatus;
use eyre::{bail, eyre, Report, Result};
use tracing::{debug, info};

use crate::{
    prompt::{stdin_lines, Prompt, SharedInput, TerminalPrompt},
    router::Route,
    views::{BookingForm, BookingList, Field, FormMode, ResourceList},
};

pub const HELP: &str = "\
Commands:
  go <path>                  /, /resources, /new-booking, /bookings/<id>/edit
  refresh                    reload the current screen
  filter <status|all>        booking list: PENDING, CONFIRMED, CANCELLED or all
  cancel <id> | delete <id>  booking list: row actions (asks for confirmation)
  edit <id>                  booking list: open the edit form
  notifications              booking list: open the notification modal
  date <YYYY-MM-DD|clear>    notification modal: start date filter
  close                      notification modal: close
  search [term]              resource list: search by name
  set <field> <value>        form: resource, name, email, start, end, notes, status
  submit                     form: validate and send
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Refresh,
    Filter(Option<BookingStatus>),
    Cancel(i64),
    Edit(i64),
    Delete(i64),
    OpenNotifications,
    FilterDate(String),
    CloseNotifications,
    Search(String),
    Set(Field, String),
    Submit,
    Help,
    Quit,
}

fn parse_id(arg: &str) -> Result<i64> {
    arg.trim()
        .parse()
        .map_err(|_| eyre!("Expected a booking id, got `{}`", arg.trim()))
}

impl FromStr for Command {
    type Err = Report;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = arg.trim();

        let command = match name.to_ascii_lowercase().as_str() {
            "go" => Command::Go(arg.parse()?),
            "refresh" => Command::Refresh,
            "filter" => match arg.to_ascii_lowercase().as_str() {
                "" | "all" => Command::Filter(None),
                status => Command::Filter(Some(status.parse()?)),
            },
            "cancel" => Command::Cancel(parse_id(arg)?),
            "edit" => Command::Edit(parse_id(arg)?),
            "delete" => Command::Delete(parse_id(arg)?),
            "notifications" => Command::OpenNotifications,
            "date" => match arg {
                "clear" => Command::FilterDate(String::new()),
                date => Command::FilterDate(date.to_string()),
            },
            "close" => Command::CloseNotifications,
            "search" => Command::Search(arg.to_string()),
            "set" => {
                let (field, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
                Command::Set(field.parse()?, value.trim().to_string())
            }
            "submit" => Command::Submit,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command `{}`, try `help`", other),
        };
        Ok(command)
    }
}

pub enum Screen {
    Bookings(BookingList),
    Resources(ResourceList),
    Form(BookingForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Current route plus the view mounted for it.
pub struct App {
    api: Arc<dyn BookingApi>,
    prompt: Arc<dyn Prompt>,
    route: Route,
    screen: Screen,
}

impl App {
    /// Mounts the booking list.
    pub async fn new(api: Arc<dyn BookingApi>, prompt: Arc<dyn Prompt>) -> Self {
        let screen = Screen::Bookings(BookingList::new(api.clone(), prompt.clone()));
        let mut app = Self {
            api,
            prompt,
            route: Route::Bookings,
            screen,
        };
        app.mount().await;
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Replaces the current view with a fresh one for `route`.
    pub async fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route);
        self.route = route;
        self.screen = match route {
            Route::Bookings => Screen::Bookings(BookingList::new(self.api.clone(), self.prompt.clone())),
            Route::Resources => Screen::Resources(ResourceList::new(self.api.clone())),
            Route::NewBooking => Screen::Form(BookingForm::new(self.api.clone(), FormMode::Create)),
            Route::EditBooking(id) => {
                Screen::Form(BookingForm::new(self.api.clone(), FormMode::Edit(id)))
            }
        };
        self.mount().await;
    }

    async fn mount(&mut self) {
        match &mut self.screen {
            Screen::Bookings(list) => list.refresh().await,
            Screen::Resources(list) => list.refresh().await,
            Screen::Form(form) => form.load().await,
        }
    }

    /// Applies one command. Errors are usage errors, not failed requests;
    /// the views report those themselves.
    pub async fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!("Handling {:?}", command);
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                println!("{}", HELP);
                return Ok(Flow::Continue);
            }
            Command::Go(route) => {
                self.navigate(route).await;
                return Ok(Flow::Continue);
            }
            Command::Refresh => {
                self.mount().await;
                return Ok(Flow::Continue);
            }
            Command::Edit(id) => {
                let target = match &self.screen {
                    Screen::Bookings(list) => Some(list.edit(id)),
                    _ => None,
                };
                if let Some(route) = target {
                    self.navigate(route).await;
                    return Ok(Flow::Continue);
                }
            }
            _ => {}
        }

        let route = self.route;
        match (command, &mut self.screen) {
            (Command::Filter(status), Screen::Bookings(list)) => list.set_filter(status).await,
            (Command::Cancel(id), Screen::Bookings(list)) => list.cancel(id).await,
            (Command::Delete(id), Screen::Bookings(list)) => list.delete(id).await,
            (Command::OpenNotifications, Screen::Bookings(list)) => {
                list.notifications_mut().open().await
            }
            (Command::FilterDate(date), Screen::Bookings(list)) if list.notifications().is_open() => {
                list.notifications_mut().set_filter_date(&date)
            }
            (Command::CloseNotifications, Screen::Bookings(list)) => list.notifications_mut().close(),

            (Command::Search(term), Screen::Resources(list)) => list.set_search(&term).await,

            (Command::Set(field, value), Screen::Form(form)) => form.set_field(field, &value)?,
            (Command::Submit, Screen::Form(form)) => form.submit().await,

            (command, _) => bail!("{:?} is not available on {}", command, route),
        }
        Ok(Flow::Continue)
    }

    pub fn render(&self) -> String {
        let body = match &self.screen {
            Screen::Bookings(list) => list.render(),
            Screen::Resources(list) => list.render(),
            Screen::Form(form) => form.render(),
        };
        format!("[{}]\n{}", self.route, body)
    }
}

/// Runs the shell until `quit` or end of input.
pub async fn run(api: Arc<dyn BookingApi>) -> Result<()> {
    let input: SharedInput = stdin_lines();
    let prompt: Arc<dyn Prompt> = Arc::new(TerminalPrompt::new(input.clone()));
    let mut app = App::new(api, prompt).await;

    println!("{}", app.render());
    loop {
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(line) = input.lock().await.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let flow = match line.parse::<Command>() {
            Ok(command) => app.handle(command).await,
            Err(e) => Err(e),
        };
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => println!("{}", app.render()),
            Err(e) => println!("error: {}", e),
        }
    }

    info!("Shell closed");
    Ok(())
}
