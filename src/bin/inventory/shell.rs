//! Interactive session over stdin/stdout.
//!
//! Commands that need an id take it inline (`delete 3`) or prompt for it.
//! Field prompts during `update` show the current value; an empty answer
//! keeps it.

use std::io::{BufRead, Write};

use inventory_store::collections::Algorithm;
use inventory_store::report::{render_details, render_table};
use inventory_store::{Change, Error, Inventory, ItemId, NewRecord, RecordPatch, SortKey};

const HELP: &str = "\
Commands:
  add                     create an item
  update [id]             change fields of an item
  delete [id]             delete an item
  show [id]               show one item
  list [key] [algorithm]  sorted report (key: id, name, category, quantity,
                          price, supplier; algorithm: merge, quick)
  stats                   totals across the inventory
  undo / redo             step through the session's changes
  help                    this text
  quit                    leave the shell";

pub struct Shell<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W) -> Self {
        Shell {
            inventory,
            input,
            output,
        }
    }

    /// Read and run commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Inventory shell. Type 'help' for commands.")?;
        while let Some(line) = self.prompt("> ")? {
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let arg = words.next();
            let outcome = match command.to_ascii_lowercase().as_str() {
                "add" | "1" => self.add(),
                "update" | "2" => self.update(arg),
                "delete" | "3" => self.delete(arg),
                "show" | "4" => self.show(arg),
                "list" | "5" => self.list(arg, words.next()),
                "stats" => self.stats(),
                "undo" => self.undo(),
                "redo" => self.redo(),
                "help" | "?" => writeln!(self.output, "{HELP}").map_err(Into::into),
                "quit" | "exit" | "0" => break,
                other => writeln!(self.output, "Unknown command '{other}'. Type 'help'.")
                    .map_err(Into::into),
            };
            match outcome {
                Ok(()) => {}
                // Store errors are reported and the session goes on.
                Err(err) => match err.downcast::<Error>() {
                    Ok(err) => writeln!(self.output, "Error: {err}")?,
                    Err(err) => return Err(err),
                },
            }
        }
        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let Some(name) = self.required_text("Name: ")? else {
            return Ok(());
        };
        let Some(category) = self.required_text("Category: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.required_number::<u32>("Quantity: ")? else {
            return Ok(());
        };
        let Some(price) = self.required_number::<f64>("Price: ")? else {
            return Ok(());
        };
        let Some(supplier) = self.required_text("Supplier: ")? else {
            return Ok(());
        };
        let record = self.inventory.create(NewRecord {
            name,
            category,
            quantity,
            price,
            supplier,
        })?;
        writeln!(self.output, "Item created with ID: {}", record.id)?;
        Ok(())
    }

    fn update(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let Some(id) = self.item_id(arg, "Enter item ID to update: ")? else {
            return Ok(());
        };
        let current = self.inventory.require(id)?.clone();
        writeln!(self.output, "Press Enter to keep the current value.")?;
        let patch = RecordPatch {
            name: self.optional_text(&format!("Name [{}]: ", current.name))?,
            category: self.optional_text(&format!("Category [{}]: ", current.category))?,
            quantity: self.optional_number(&format!("Quantity [{}]: ", current.quantity))?,
            price: self.optional_number(&format!("Price [{:.2}]: ", current.price))?,
            supplier: self.optional_text(&format!("Supplier [{}]: ", current.supplier))?,
        };
        if patch.is_empty() {
            writeln!(self.output, "Nothing changed.")?;
            return Ok(());
        }
        let record = self.inventory.update(id, &patch)?;
        writeln!(self.output, "Item updated: {record}")?;
        Ok(())
    }

    fn delete(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let Some(id) = self.item_id(arg, "Enter item ID to delete: ")? else {
            return Ok(());
        };
        let details = render_details(self.inventory.require(id)?);
        write!(self.output, "{details}")?;
        let confirmed = self
            .prompt("Are you sure you want to delete this item? (y/n): ")?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"));
        if !confirmed {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(());
        }
        self.inventory.delete(id)?;
        writeln!(self.output, "Item deleted.")?;
        Ok(())
    }

    fn show(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let Some(id) = self.item_id(arg, "Enter item ID: ")? else {
            return Ok(());
        };
        let details = render_details(self.inventory.require(id)?);
        write!(self.output, "{details}")?;
        Ok(())
    }

    fn list(&mut self, key: Option<&str>, algorithm: Option<&str>) -> anyhow::Result<()> {
        let key = match key.map(parse_sort_key) {
            None => SortKey::default(),
            Some(Some(key)) => key,
            Some(None) => {
                writeln!(self.output, "Unknown sort key. Type 'help'.")?;
                return Ok(());
            }
        };
        let algorithm = match algorithm.map(str::to_ascii_lowercase).as_deref() {
            None | Some("merge") => Algorithm::Merge,
            Some("quick") => Algorithm::Quick,
            Some(_) => {
                writeln!(self.output, "Unknown algorithm. Use 'merge' or 'quick'.")?;
                return Ok(());
            }
        };
        let records = self.inventory.report(key, algorithm)?;
        write!(self.output, "{}", render_table(&records))?;
        Ok(())
    }

    fn stats(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.inventory.stats())?;
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        match self.inventory.undo() {
            Ok(change) => writeln!(self.output, "Undid {}.", describe(&change))?,
            Err(Error::EmptyContainer) => writeln!(self.output, "Nothing to undo.")?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn redo(&mut self) -> anyhow::Result<()> {
        match self.inventory.redo() {
            Ok(change) => writeln!(self.output, "Redid {}.", describe(&change))?,
            Err(Error::EmptyContainer) => writeln!(self.output, "Nothing to redo.")?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn item_id(&mut self, arg: Option<&str>, message: &str) -> anyhow::Result<Option<ItemId>> {
        let text = match arg {
            Some(text) => text.to_string(),
            None => match self.prompt(message)? {
                Some(text) => text,
                None => return Ok(None),
            },
        };
        match text.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ID '{text}'.")?;
                Ok(None)
            }
        }
    }

    /// Ask until a non-empty answer arrives.
    fn required_text(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        loop {
            let Some(text) = self.prompt(message)? else {
                return Ok(None);
            };
            if !text.is_empty() {
                return Ok(Some(text));
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Ask until the answer parses.
    fn required_number<N: std::str::FromStr>(
        &mut self,
        message: &str,
    ) -> anyhow::Result<Option<N>> {
        loop {
            let Some(text) = self.prompt(message)? else {
                return Ok(None);
            };
            match text.parse() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn optional_text(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        Ok(self.prompt(message)?.filter(|text| !text.is_empty()))
    }

    /// An unparsable answer keeps the current value.
    fn optional_number<N: std::str::FromStr>(
        &mut self,
        message: &str,
    ) -> anyhow::Result<Option<N>> {
        let Some(text) = self.optional_text(message)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                writeln!(self.output, "Invalid number, keeping the current value.")?;
                Ok(None)
            }
        }
    }
}

fn parse_sort_key(text: &str) -> Option<SortKey> {
    match text.to_ascii_lowercase().as_str() {
        "id" => Some(SortKey::Id),
        "name" => Some(SortKey::Name),
        "category" => Some(SortKey::Category),
        "quantity" => Some(SortKey::Quantity),
        "price" => Some(SortKey::Price),
        "supplier" => Some(SortKey::Supplier),
        _ => None,
    }
}

fn describe(change: &Change) -> String {
    let verb = match change {
        Change::Add { replaced: None, .. } => "add",
        Change::Add { .. } | Change::Update { .. } => "update",
        Change::Delete { .. } => "delete",
    };
    format!("{verb} of item #{}", change.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_store::Options;

    fn run(inventory: &mut Inventory, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(inventory, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn memory() -> Inventory {
        Inventory::in_memory(Options::default())
    }

    #[test]
    fn add_then_undo_then_redo() {
        let mut inventory = memory();
        let out = run(
            &mut inventory,
            "add\nWidget\nTools\n5\n2.50\nAcme\nundo\nredo\nquit\n",
        );
        assert!(out.contains("Item created with ID: 1"));
        assert!(out.contains("Undid add of item #1."));
        assert!(out.contains("Redid add of item #1."));
        assert_eq!(inventory.get(1).unwrap().name, "Widget");
    }

    #[test]
    fn undo_with_empty_history_is_reported() {
        let mut inventory = memory();
        let out = run(&mut inventory, "undo\nredo\n");
        assert!(out.contains("Nothing to undo."));
        assert!(out.contains("Nothing to redo."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn update_keeps_blank_fields() {
        let mut inventory = memory();
        run(&mut inventory, "add\nWidget\nTools\n5\n2.50\nAcme\n");
        run(&mut inventory, "update 1\n\nHardware\n\nnot-a-price\n\n");
        let record = inventory.get(1).unwrap();
        assert_eq!(record.name, "Widget");
        assert_eq!(record.category, "Hardware");
        assert_eq!(record.quantity, 5);
        assert_eq!(record.price, 2.50);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut inventory = memory();
        run(&mut inventory, "add\nWidget\nTools\n5\n2.50\nAcme\n");
        let out = run(&mut inventory, "delete 1\nn\n");
        assert!(out.contains("Deletion cancelled."));
        assert!(inventory.get(1).is_some());

        run(&mut inventory, "delete\n1\ny\n");
        assert!(inventory.get(1).is_none());
    }

    #[test]
    fn missing_item_is_an_error_line_not_a_failure() {
        let mut inventory = memory();
        let out = run(&mut inventory, "show 42\nlist\n");
        assert!(out.contains("Error: item 42 not found"));
        assert!(out.contains("No items in inventory."));
    }
}
