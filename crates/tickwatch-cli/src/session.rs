//! Interactive watchlist session.
//!
//! Line-oriented REPL over the in-memory watchlist store. Watchlists
//! live only for the lifetime of the session; quitting discards them.
//! Input and output are generic so the whole session runs offline under
//! test.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tickwatch_core::{
    build_chart, format_price, AlphaVantageClient, SeriesError, Stock, Symbol, WatchlistStore,
    Window,
};

use crate::error::CliError;

const PROMPT: &str = "tickwatch> ";

const HELP: &str = "\
commands:
  create <name>           create a watchlist
  delete <name>           delete a watchlist and its stocks
  add <symbol> <name>     fetch a quote and add it to a watchlist
  remove <symbol> <name>  remove a stock from a watchlist
  list                    list watchlists
  show <name>             show the stocks in a watchlist
  help                    show this help
  quit                    end the session";

pub struct WatchSession {
    store: Arc<WatchlistStore>,
    client: AlphaVantageClient,
    updates: Arc<AtomicUsize>,
}

impl WatchSession {
    pub fn new(client: AlphaVantageClient) -> Self {
        let store = Arc::new(WatchlistStore::new());
        let updates = Arc::new(AtomicUsize::new(0));

        let counter = updates.clone();
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        Self {
            store,
            client,
            updates,
        }
    }

    /// Drive the session until `quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), CliError> {
        writeln!(output, "tickwatch watch session; type 'help' for commands")?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "quit" || trimmed == "exit" {
                break;
            }

            self.dispatch(trimmed, output).await?;
        }

        writeln!(
            output,
            "session ended after {} update(s); watchlists discarded",
            self.updates.load(Ordering::SeqCst)
        )?;
        Ok(())
    }

    async fn dispatch<W: Write>(&self, line: &str, output: &mut W) -> Result<(), CliError> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => writeln!(output, "{HELP}")?,
            "list" => self.list(output)?,
            "create" => self.create(rest, output)?,
            "delete" => self.delete(rest, output)?,
            "show" => self.show(rest, output)?,
            "add" => self.add(rest, output).await?,
            "remove" => self.remove(rest, output)?,
            other => writeln!(output, "unknown command '{other}'; type 'help'")?,
        }

        Ok(())
    }

    fn list<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        let watchlists = self.store.watchlists();
        if watchlists.is_empty() {
            writeln!(output, "no watchlists")?;
            return Ok(());
        }

        for watchlist in &watchlists {
            writeln!(
                output,
                "{} ({} stock(s))",
                watchlist.name,
                watchlist.stocks.len()
            )?;
        }
        Ok(())
    }

    fn create<W: Write>(&self, name: &str, output: &mut W) -> Result<(), CliError> {
        match self.store.create_watchlist(name) {
            Ok(watchlist) => writeln!(output, "created '{}'", watchlist.name)?,
            Err(error) => writeln!(output, "error: {error}")?,
        }
        Ok(())
    }

    fn delete<W: Write>(&self, name: &str, output: &mut W) -> Result<(), CliError> {
        match self.store.find_by_name(name) {
            Some(watchlist) => {
                self.store.delete_watchlist(&watchlist.id);
                writeln!(output, "deleted '{}'", watchlist.name)?;
            }
            None => writeln!(output, "no watchlist named '{}'", name.trim())?,
        }
        Ok(())
    }

    fn show<W: Write>(&self, name: &str, output: &mut W) -> Result<(), CliError> {
        let Some(watchlist) = self.store.find_by_name(name) else {
            writeln!(output, "no watchlist named '{}'", name.trim())?;
            return Ok(());
        };

        if watchlist.stocks.is_empty() {
            writeln!(output, "'{}' is empty", watchlist.name)?;
            return Ok(());
        }

        for stock in &watchlist.stocks {
            writeln!(
                output,
                "{}  {}  {}",
                stock.symbol, stock.price, stock.company_name
            )?;
        }
        Ok(())
    }

    async fn add<W: Write>(&self, rest: &str, output: &mut W) -> Result<(), CliError> {
        let Some((raw_symbol, name)) = split_symbol_and_name(rest) else {
            writeln!(output, "usage: add <symbol> <name>")?;
            return Ok(());
        };

        let symbol = match Symbol::parse(raw_symbol) {
            Ok(symbol) => symbol,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                return Ok(());
            }
        };

        let Some(watchlist) = self.store.find_by_name(name) else {
            writeln!(output, "no watchlist named '{}'", name.trim())?;
            return Ok(());
        };

        let stock = match self.quote(&symbol, output).await {
            Ok(stock) => stock,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                return Ok(());
            }
        };

        if self.store.add_stock(&watchlist.id, stock) {
            writeln!(output, "added {symbol} to '{}'", watchlist.name)?;
        } else {
            writeln!(output, "{symbol} is already in '{}'", watchlist.name)?;
        }
        Ok(())
    }

    fn remove<W: Write>(&self, rest: &str, output: &mut W) -> Result<(), CliError> {
        let Some((raw_symbol, name)) = split_symbol_and_name(rest) else {
            writeln!(output, "usage: remove <symbol> <name>")?;
            return Ok(());
        };

        let symbol = match Symbol::parse(raw_symbol) {
            Ok(symbol) => symbol,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                return Ok(());
            }
        };

        match self.store.find_by_name(name) {
            Some(watchlist) if self.store.remove_stock(&watchlist.id, &symbol) => {
                writeln!(output, "removed {symbol} from '{}'", watchlist.name)?;
            }
            Some(watchlist) => {
                writeln!(output, "{symbol} is not in '{}'", watchlist.name)?;
            }
            None => writeln!(output, "no watchlist named '{}'", name.trim())?,
        }
        Ok(())
    }

    /// Build a display stock for a symbol. The overview supplies the
    /// company name and 52-week bounds; the intraday series supplies the
    /// latest close. Either fetch may fail without aborting the add, the
    /// affected fields just fall back to placeholders.
    async fn quote<W: Write>(
        &self,
        symbol: &Symbol,
        output: &mut W,
    ) -> Result<Stock, CliError> {
        let (company_name, low, high) = match self.client.overview(symbol).await {
            Ok(overview) => {
                let low = parse_bound(overview.week_52_low.as_deref());
                let high = parse_bound(overview.week_52_high.as_deref());
                (overview.name, low, high)
            }
            Err(error) => {
                writeln!(output, "warning: overview unavailable: {error}")?;
                (symbol.as_str().to_owned(), 0.0, 0.0)
            }
        };

        let price = match self.client.time_series(symbol, Window::OneDay).await {
            Ok(payload) => match build_chart(&payload, Window::OneDay) {
                Ok(chart) => chart
                    .points
                    .last()
                    .map(|point| format_price(point.value))
                    .unwrap_or_else(|| String::from("N/A")),
                Err(SeriesError::NoData) => {
                    writeln!(output, "warning: no price data for {symbol}")?;
                    String::from("N/A")
                }
            },
            Err(error) => {
                writeln!(output, "warning: price unavailable: {error}")?;
                String::from("N/A")
            }
        };

        let name = symbol.as_str().to_owned();
        Stock::new(symbol.clone(), name, company_name, price, low, high).map_err(CliError::from)
    }
}

fn split_symbol_and_name(rest: &str) -> Option<(&str, &str)> {
    let (symbol, name) = rest.split_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((symbol, name))
}

/// Provider bounds are optional strings; anything unparseable or
/// negative reads as zero.
fn parse_bound(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}
