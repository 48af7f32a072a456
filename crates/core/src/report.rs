//! The briefing report and its fixed text template.
//!
//! Layout:
//! ```text
//! {INTRO_LINE}
//! {interface}
//!
//! {INVENTORY_LABEL}
//! {inventory}
//!
//! {WORLD_LABEL}
//! {world}
//!
//!
//!
//! {CLOSING_QUESTION}
//! ```

use std::fmt;

/// Opening line naming the domain.
pub const INTRO_LINE: &str = "Here is the interfaces for a small text based adventure game.";

/// Label introducing the inventory definition.
pub const INVENTORY_LABEL: &str = "This game has an inventory system defined here:";

/// Label introducing the aggregated world content.
pub const WORLD_LABEL: &str = "This is the world we have defined so far:";

/// Closing question addressed to the downstream consumer.
pub const CLOSING_QUESTION: &str = "Given this information, and the fact we're designing this game for a 7yr old, what should we do next?";

/// A fully loaded briefing, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub interface: String,
    pub inventory: String,
    pub world: String,
}

impl Report {
    pub fn new(interface: String, inventory: String, world: String) -> Self {
        Self {
            interface,
            inventory,
            world,
        }
    }

    /// Render the report into its final text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.interface.len() + self.inventory.len() + self.world.len() + 512,
        );

        push_line(&mut out, INTRO_LINE);
        push_line(&mut out, &self.interface);
        out.push('\n');
        push_line(&mut out, INVENTORY_LABEL);
        push_line(&mut out, &self.inventory);
        out.push('\n');
        push_line(&mut out, WORLD_LABEL);
        push_line(&mut out, &self.world);
        out.push_str("\n\n\n");
        push_line(&mut out, CLOSING_QUESTION);

        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}
