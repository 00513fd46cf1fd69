//! Launcher menu payload.
//!
//! The launcher reads one JSON document from stdout: `{"items":[...]}`. Field order
//! in the serialized item is `type`, `icon`, `title`, `subtitle`, `arg`.
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// A single selectable row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item type. Always left empty.
    #[serde(rename = "type")]
    pub kind: String,
    /// Icon reference resolved by the launcher.
    pub icon: String,
    /// Main line.
    pub title: String,
    /// Secondary line.
    pub subtitle: String,
    /// Value handed to the next action when the item is selected.
    pub arg: String,
}

/// The document printed to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Items in display order.
    pub items: Vec<MenuItem>,
}

impl MenuDocument {
    /// Wraps one item.
    pub fn single(item: MenuItem) -> Self {
        MenuDocument { items: vec![item] }
    }

    /// Compact JSON, no trailing newline.
    pub fn to_json_line(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }

    /// Writes the JSON line plus `\n` in one call and flushes.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let mut line = self.to_json_line()?;
        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
