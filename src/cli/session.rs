use super::*;

use crate::domain::outcome::describe;
use crate::domain::record::{MAX_ID, MIN_ID, parse_id, parse_lookup_id};
use crate::prelude::{Collection, Outcome, add, remove};
use crate::storage::{self, RecordStore};
use rand::Rng;
use rand::rngs::StdRng;

// Random draws tried before falling back to the lowest free id.
const FALLBACK_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Save,
    Reload,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, AppError> {
    match input.trim() {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::Remove),
        "3" => Ok(MenuChoice::Save),
        "4" => Ok(MenuChoice::Reload),
        "5" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

/// Id used when the typed one is unusable. Prefers an id not already taken.
pub fn fallback_id<G: Rng>(records: &Collection, rng: &mut G) -> u32 {
    let mut candidate = rng.random_range(MIN_ID..=MAX_ID);

    for _ in 0..FALLBACK_ATTEMPTS {
        if !records.contains_id(candidate) {
            return candidate;
        }
        candidate = rng.random_range(MIN_ID..=MAX_ID);
    }

    (MIN_ID..=MAX_ID)
        .find(|id| !records.contains_id(*id))
        .unwrap_or(candidate)
}

/// Interactive menu over one backing file. Holds the only copy of the
/// in-memory list; nothing is written unless the user confirms a save.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: Box<dyn RecordStore>,
    records: Collection,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: Box<dyn RecordStore>, rng: StdRng) -> Self {
        Self {
            input,
            output,
            store,
            records: Collection::new(),
            rng,
        }
    }

    pub fn records(&self) -> &Collection {
        &self.records
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends. Only failures to talk to the
    /// terminal itself are returned; store failures are printed and the menu continues.
    pub fn run(&mut self) -> Result<(), AppError> {
        let outcome = self.reload();
        self.report(&outcome)?;

        loop {
            self.show_records()?;
            self.show_menu()?;

            prompt(&mut self.output, "Which option would you like to perform? [1 to 5] - ")?;
            let Some(choice) = get_input(&mut self.input)? else {
                break;
            };

            let flow = match parse_menu_choice(&choice) {
                Ok(MenuChoice::Add) => self.add_record()?,
                Ok(MenuChoice::Remove) => self.remove_record()?,
                Ok(MenuChoice::Save) => self.save_records()?,
                Ok(MenuChoice::Reload) => self.reload_records()?,
                Ok(MenuChoice::Exit) => Flow::Quit,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn show_records(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n******* The current customers are: *******")?;
        if self.records.is_empty() {
            writeln!(self.output, "No customers yet")?;
        }
        for record in &self.records {
            writeln!(self.output, "{}", display_record(record))?;
        }
        writeln!(self.output, "*******************************************")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nMenu of Options")?;
        writeln!(self.output, "1) Add a new Customer")?;
        writeln!(self.output, "2) Remove an existing Customer")?;
        writeln!(self.output, "3) Save Customers List to File")?;
        writeln!(self.output, "4) Reload Customers List from File")?;
        writeln!(self.output, "5) Exit Program\n")?;
        Ok(())
    }

    fn add_record(&mut self) -> Result<Flow, AppError> {
        prompt(
            &mut self.output,
            &format!("Please enter a new customer ID [{} to {}]: ", MIN_ID, MAX_ID),
        )?;
        let Some(raw_id) = get_input(&mut self.input)? else {
            return Ok(Flow::Quit);
        };

        let id = match parse_id(&raw_id) {
            Ok(id) => id,
            Err(err) => {
                let id = fallback_id(&self.records, &mut self.rng);
                writeln!(
                    self.output,
                    "{}\nA random ID {} has been generated for the new customer.",
                    err, id
                )?;
                id
            }
        };

        prompt(&mut self.output, "Please enter a name for the new customer: ")?;
        let Some(name) = get_input(&mut self.input)? else {
            return Ok(Flow::Quit);
        };

        let (records, outcome) = add(std::mem::take(&mut self.records), id, &name);
        self.records = records;
        self.report(&outcome)?;
        Ok(Flow::Continue)
    }

    fn remove_record(&mut self) -> Result<Flow, AppError> {
        prompt(
            &mut self.output,
            "Please provide the ID of the customer you wish to remove: ",
        )?;
        let Some(raw_id) = get_input(&mut self.input)? else {
            return Ok(Flow::Quit);
        };

        match parse_lookup_id(&raw_id) {
            Ok(id) => {
                let (records, outcome) = remove(std::mem::take(&mut self.records), id);
                self.records = records;
                self.report(&outcome)?;
            }
            Err(err) => {
                writeln!(self.output, "{}\nNo customer was removed.", err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn save_records(&mut self) -> Result<Flow, AppError> {
        prompt(&mut self.output, "Save this data to file? (y/n) - ")?;
        let Some(answer) = get_input_to_lower(&mut self.input)? else {
            return Ok(Flow::Quit);
        };

        if is_yes(&answer) {
            let outcome = storage::save(self.store.as_ref(), &self.records);
            self.report(&outcome)?;
        } else {
            writeln!(self.output, "Save cancelled!")?;
        }
        Ok(Flow::Continue)
    }

    fn reload_records(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "Warning: unsaved data will be lost!")?;
        prompt(
            &mut self.output,
            "Are you sure you want to reload data from file? (y/n) - ",
        )?;
        let Some(answer) = get_input_to_lower(&mut self.input)? else {
            return Ok(Flow::Quit);
        };

        if is_yes(&answer) {
            let outcome = self.reload();
            self.report(&outcome)?;
        } else {
            writeln!(self.output, "File reload cancelled!")?;
        }
        Ok(Flow::Continue)
    }

    fn reload(&mut self) -> Outcome {
        let (records, outcome) = storage::load(self.store.as_ref());
        self.records = records;
        outcome
    }

    fn report(&mut self, outcome: &Outcome) -> Result<(), AppError> {
        writeln!(self.output, "{}", describe(outcome))?;
        Ok(())
    }
}
