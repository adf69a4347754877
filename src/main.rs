// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;
use clap::{crate_version, Parser};

use recproc::display::process;
use recproc::Record;

/// Process a named record and print the result.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version = crate_version!())]
#[command(about, long_about = None)]
pub struct App {
    /// the name to process
    #[arg(required = true)]
    name: String,

    /// the value to process
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    value: i64,
}

fn main() -> Result<()> {
    let args = App::parse();

    let record = Record::new(args.name, args.value);
    println!("{}", process(&record));

    Ok(())
}
