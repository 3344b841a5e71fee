//! Interactive menu loop.
//!
//! Generic over any `BufRead`/`Write` pair so the binary can drive it from
//! stdin/stdout and tests from in-memory buffers.

use std::io::{self, BufRead, Write};

use stockroom_inventory::{BinId, Item, Order, OrderId, Sku, StorageBin, Supplier, Warehouse};

use crate::config::ReportFormat;
use crate::input::{parse_pairs, parse_quantity};

pub const MENU: &str = "
Warehouse Management CLI
-------------------------
1. Receive Shipment
2. Process Order
3. Generate Inventory Report
4. Add Storage Bin
5. Add Supplier
6. Find Item
7. Exit
";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Bail out of a command with `Flow::Quit` when input is exhausted.
macro_rules! prompt_or_quit {
    ($self:ident, $label:expr) => {
        match $self.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

pub struct Console<R, W> {
    input: R,
    output: W,
    warehouse: Warehouse,
    report_format: ReportFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, warehouse: Warehouse, report_format: ReportFormat) -> Self {
        Self {
            input,
            output,
            warehouse,
            report_format,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn into_parts(self) -> (Warehouse, W) {
        (self.warehouse, self.output)
    }

    /// Show the menu and dispatch choices until "Exit" or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option (1-7): ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.receive_shipment()?,
                "2" => self.process_order()?,
                "3" => self.generate_report()?,
                "4" => self.add_storage_bin()?,
                "5" => self.add_supplier()?,
                "6" => self.find_item()?,
                "7" => {
                    writeln!(self.output, "Exiting the CLI. Goodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(
                        self.output,
                        "Invalid option. Please select a valid choice (1-7)."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn receive_shipment(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Welcome to the Shipment Management System")?;

        let name = prompt_or_quit!(self, "Enter the item name: ");
        let sku = prompt_or_quit!(self, "Enter the item ID: ");
        let sku = match Sku::parse(&sku) {
            Ok(sku) => sku,
            Err(err) => {
                writeln!(self.output, "Error receiving shipment: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        let quantity = prompt_or_quit!(self, "Enter the item quantity: ");
        let Some(quantity) = parse_quantity(&quantity) else {
            writeln!(self.output, "Invalid quantity. Please enter a number.")?;
            return Ok(Flow::Continue);
        };
        let requirements = prompt_or_quit!(
            self,
            "Enter storage requirements (key1=value1,key2=value2,...): "
        );
        let bin_id = prompt_or_quit!(self, "Enter the storage bin ID to receive the shipment: ");

        let item = Item::new(name.clone(), sku, quantity).with_requirements(parse_pairs(&requirements));
        match self.warehouse.receive_shipment(item, &BinId::from(bin_id.as_str())) {
            Ok(()) => writeln!(
                self.output,
                "Shipment for {name} successfully received and stored in bin {bin_id}."
            )?,
            Err(err) => writeln!(self.output, "Error receiving shipment: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn process_order(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Welcome to the Order Processing System")?;

        let order_id = prompt_or_quit!(self, "Enter the order ID: ");
        let order_id = match OrderId::parse(&order_id) {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.output, "Order processing failed: {err}")?;
                return Ok(Flow::Continue);
            }
        };

        let mut lines: Vec<(Sku, u64)> = Vec::new();
        loop {
            let sku = prompt_or_quit!(self, "Enter item ID (or type 'done' to finish): ");
            if sku.eq_ignore_ascii_case("done") {
                break;
            }
            let sku = match Sku::parse(&sku) {
                Ok(sku) => sku,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            let quantity = prompt_or_quit!(self, &format!("Enter quantity for item {sku}: "));
            match parse_quantity(&quantity) {
                Some(quantity) => lines.push((sku, quantity)),
                None => writeln!(self.output, "Invalid quantity. Please enter a number.")?,
            }
        }

        if lines.is_empty() {
            writeln!(self.output, "No items in the order. Order processing cancelled.")?;
            return Ok(Flow::Continue);
        }

        let result = Order::new(order_id, lines)
            .and_then(|mut order| self.warehouse.fulfill_order(&mut order).map(|()| order));
        match result {
            Ok(order) => {
                writeln!(self.output, "Order processed successfully.")?;
                writeln!(self.output, "Order ID: {}", order.order_id())?;
                writeln!(self.output, "Items:")?;
                for (sku, quantity) in order.items() {
                    writeln!(self.output, "  - {sku}: {quantity}")?;
                }
            }
            Err(err) => {
                writeln!(self.output, "Order processed unsuccessfully.")?;
                writeln!(self.output, "Order processing failed: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn generate_report(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Generating warehouse inventory report...\n")?;

        match self.report_format {
            ReportFormat::Text => {
                writeln!(self.output, "{}", self.warehouse.generate_inventory_report())?
            }
            ReportFormat::Json => {
                match serde_json::to_string_pretty(&self.warehouse.inventory_report()) {
                    Ok(json) => writeln!(self.output, "{json}")?,
                    Err(err) => {
                        writeln!(self.output, "Error generating report.")?;
                        writeln!(self.output, "Details: {err}")?;
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn add_storage_bin(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Add a New Storage Bin")?;

        let bin_id = prompt_or_quit!(self, "Enter bin ID: ");
        let bin_id = match BinId::parse(&bin_id) {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.output, "Error adding storage bin: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        let capacity = prompt_or_quit!(self, "Enter bin capacity: ");
        let Some(capacity) = parse_quantity(&capacity) else {
            writeln!(self.output, "Invalid capacity. Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };
        let constraints = prompt_or_quit!(
            self,
            "Enter environmental requirements (key1=value1,key2=value2,...): "
        );

        let bin = StorageBin::new(bin_id.clone(), capacity).with_constraints(parse_pairs(&constraints));
        match self.warehouse.add_storage_bin(bin) {
            Ok(()) => writeln!(self.output, "Storage bin {bin_id} added successfully.")?,
            Err(err) => writeln!(self.output, "Error adding storage bin: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn add_supplier(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Add a New Supplier")?;

        let name = prompt_or_quit!(self, "Enter supplier name: ");
        let contact = prompt_or_quit!(
            self,
            "Enter contact details (e.g., phone=123, email=abc@example.com): "
        );

        self.warehouse
            .add_supplier(Supplier::new(name.clone(), parse_pairs(&contact)));
        writeln!(self.output, "Supplier {name} added successfully.")?;
        Ok(Flow::Continue)
    }

    fn find_item(&mut self) -> io::Result<Flow> {
        let sku = prompt_or_quit!(self, "Enter the item ID: ");
        let sku = Sku::from(sku.as_str());
        match self.warehouse.find_item(&sku) {
            Some(item) => writeln!(self.output, "{}", item.display_info())?,
            None => writeln!(self.output, "No item with SKU {sku} in inventory.")?,
        }
        Ok(Flow::Continue)
    }
}
