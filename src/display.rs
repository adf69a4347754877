// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter, Result};

use crate::Record;

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Processed: {} = {}", self.name(), self.value())
    }
}

/// Renders `record` as its display line.
///
/// The output is `Processed: {name} = {value}` with both fields substituted
/// verbatim. No escaping or truncation is applied, and identical input always
/// produces identical output.
pub fn process(record: &Record) -> String {
    record.to_string()
}
