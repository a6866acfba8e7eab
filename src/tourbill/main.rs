use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tourbill::api::{CmdMessage, MessageLevel, TourbillApi};
use tourbill::config::IssuerConfig;
use tourbill::error::{Result, TourbillError};
use tourbill::export::{OpenerShare, WkhtmltopdfEngine};
use tourbill::model::{Invoice, InvoiceDraft};
use tourbill::store::fs::FileBackend;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TourbillApi<FileBackend>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New {
            tourist,
            pickup,
            drop_off,
            date,
            distance,
            amount,
            currency,
            payment,
            notes,
        }) => {
            let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            let draft = InvoiceDraft::new(
                date, tourist, pickup, drop_off, distance, amount, currency, payment, notes,
            );
            let result = ctx.api.save_invoice(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::History) | None => {
            let result = ctx.api.history()?;
            print_invoices(&result.invoices);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Preview) => {
            let result = ctx.api.preview_number()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Render {
            invoice_number,
            out,
        }) => {
            let result = ctx.api.render_invoice(&invoice_number)?;
            let html = result.rendered.ok_or_else(|| {
                TourbillError::Api("render produced no document".to_string())
            })?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html).map_err(TourbillError::Io)?;
                    println!("{}", format!("Wrote {}", path.display()).green());
                }
                None => println!("{}", html),
            }
            Ok(())
        }
        Some(Commands::Export { invoice_number }) => {
            let out_dir = ctx.data_dir.join("exports");
            let result = ctx.api.export_invoice(
                &WkhtmltopdfEngine,
                &OpenerShare,
                &invoice_number,
                &out_dir,
            )?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Purge { yes }) => {
            let result = ctx.api.purge(yes)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "tourbill", "tourbill")
                .ok_or_else(|| TourbillError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let issuer = IssuerConfig::load(&data_dir).unwrap_or_default();
    let backend = FileBackend::new(data_dir.clone());
    let api = TourbillApi::new(backend, issuer);

    Ok(AppContext { api, data_dir })
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_invoices(invoices: &[Invoice]) {
    for inv in invoices {
        let mut line = format!(
            "{}  {}  {}  {}  {} {}",
            inv.invoice_number.yellow(),
            inv.date,
            inv.tourist_name.bold(),
            inv.route.dimmed(),
            inv.currency,
            inv.amount.green(),
        );
        if let Some(distance) = &inv.distance {
            line.push_str(&format!("  {} km", distance));
        }
        println!("{}", line);
    }
}
