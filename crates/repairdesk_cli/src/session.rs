//! Interactive session: navigation loop and page dispatch.
//!
//! # Responsibility
//! - Own the service (and through it the store borrow) for the session.
//! - Route each menu choice to exactly one page handler.
//!
//! # Invariants
//! - Pages are entered fresh from the menu; no state carries between them.
//! - A storage error ends the current page only; the menu comes back.
//! - `Exit` or end of input ends the session without error.

use crate::console::Console;
use crate::error::{UiError, UiResult};
use crate::page::Page;
use crate::pages;
use chrono::{Local, NaiveDate};
use log::{error, info};
use repairdesk_core::{RepairRepository, RepairService};
use std::io::{BufRead, Write};

pub const APP_TITLE: &str = "Repair Management System";

pub struct Session<R: RepairRepository, In, Out> {
    service: RepairService<R>,
    console: Console<In, Out>,
    today: fn() -> NaiveDate,
}

impl<R, In, Out> Session<R, In, Out>
where
    R: RepairRepository,
    In: BufRead,
    Out: Write,
{
    pub fn new(service: RepairService<R>, console: Console<In, Out>) -> Self {
        Self {
            service,
            console,
            today: local_today,
        }
    }

    /// Replaces the clock used for the add form's default received date.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Hands the console back once the session is over.
    pub fn into_console(self) -> Console<In, Out> {
        self.console
    }

    /// Runs the navigation loop until `Exit` or end of input.
    ///
    /// # Errors
    /// Only terminal I/O failures escape; storage errors are shown inline.
    pub fn run(&mut self) -> UiResult<()> {
        self.console.title(APP_TITLE)?;
        info!("event=session_start module=cli status=ok");

        loop {
            let page = match self.navigate() {
                Ok(page) => page,
                Err(UiError::InputClosed) => break,
                Err(err) => return Err(err),
            };
            if page == Page::Exit {
                break;
            }

            match self.render(page) {
                Ok(()) => {}
                Err(UiError::InputClosed) => break,
                Err(UiError::Repo(err)) => {
                    error!(
                        "event=page_render module=cli status=error page={} error={}",
                        page.label(),
                        err
                    );
                    self.console.error(&format!("Error: {err}"))?;
                }
                Err(err) => return Err(err),
            }
        }

        info!("event=session_end module=cli status=ok");
        self.console.line("Goodbye.")
    }

    fn navigate(&mut self) -> UiResult<Page> {
        loop {
            self.console.line("")?;
            let labels = Page::labels();
            match self.console.select("Select an option", &labels)? {
                Some(index) => return Ok(Page::ALL[index]),
                None => self.console.error("Unknown option; pick a number from the list.")?,
            }
        }
    }

    fn render(&mut self, page: Page) -> UiResult<()> {
        if let Some(heading) = page.heading() {
            self.console.header(heading)?;
        }
        info!("event=page_enter module=cli status=ok page={}", page.label());

        match page {
            Page::AddRepair => pages::add::run(&self.service, &mut self.console, (self.today)()),
            Page::UpdateRepair => pages::update::run(&self.service, &mut self.console),
            Page::DeleteRepair => pages::delete::run(&self.service, &mut self.console),
            Page::ViewRepair => pages::view::run(&self.service, &mut self.console),
            Page::Exit => Ok(()),
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
